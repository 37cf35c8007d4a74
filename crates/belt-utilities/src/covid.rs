//! Covid-19 statistics with an interactive country sub-loop

use async_trait::async_trait;
use belt_core::console::prompt_line;
use belt_core::utility::{Utility, UtilityError};
use colored::*;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct CovidSummary {
    #[serde(rename = "Global")]
    global: CovidStats,
    #[serde(rename = "Countries")]
    countries: Vec<CountryStats>,
}

#[derive(Debug, Deserialize, Default)]
struct CovidStats {
    #[serde(rename = "NewConfirmed")]
    new_confirmed: i64,
    #[serde(rename = "TotalConfirmed")]
    total_confirmed: i64,
    #[serde(rename = "NewDeaths")]
    new_deaths: i64,
    #[serde(rename = "TotalDeaths")]
    total_deaths: i64,
    #[serde(rename = "NewRecovered")]
    new_recovered: i64,
    #[serde(rename = "TotalRecovered")]
    total_recovered: i64,
}

#[derive(Debug, Deserialize)]
struct CountryStats {
    #[serde(rename = "Country")]
    country: String,
    #[serde(flatten)]
    stats: CovidStats,
}

impl CovidSummary {
    fn country<'a>(&'a self, name: &str) -> Option<&'a CountryStats> {
        self.countries
            .iter()
            .find(|c| c.country.eq_ignore_ascii_case(name))
    }

    fn countries_with_prefix<'a>(&'a self, prefix: &str) -> Vec<&'a str> {
        self.countries
            .iter()
            .filter(|c| {
                c.country
                    .to_lowercase()
                    .starts_with(&prefix.to_lowercase())
            })
            .map(|c| c.country.as_str())
            .collect()
    }
}

fn show_stats(name: &str, stats: &CovidStats) {
    println!("Statistics: {name}");
    println!("{}", format!("New Confirmed: {}", stats.new_confirmed).cyan());
    println!("{}", format!("Total Confirmed: {}", stats.total_confirmed).cyan());
    println!("{}", format!("New Deaths: {}", stats.new_deaths).red());
    println!("{}", format!("Total Deaths: {}", stats.total_deaths).red());
    println!("{}", format!("New Recovered: {}", stats.new_recovered).green());
    println!("{}", format!("Total Recovered: {}", stats.total_recovered).green());
}

/// Covid-19 case statistics by country, global, or listed by prefix
pub struct Covid19Utility;

impl Covid19Utility {
    pub fn new() -> Self {
        Self
    }
}

impl Default for Covid19Utility {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Utility for Covid19Utility {
    fn name(&self) -> &str {
        "Covid-19 Statistics"
    }

    fn aliases(&self) -> &[&str] {
        &["covid"]
    }

    async fn run(&self) -> Result<(), UtilityError> {
        loop {
            println!();
            println!(
                "Enter the country name to get the information. If you want to see the global \
                 information, type \"Global\". For the list of all countries type \"List\". To \
                 exit Covid-19 Statistics type \"Exit\": "
            );
            let input = prompt_line("")?;
            println!();

            if input == "Exit" {
                return Ok(());
            }

            let summary: CovidSummary = reqwest::get("https://api.covid19api.com/summary")
                .await?
                .error_for_status()?
                .json()
                .await?;

            if input.get(..4).is_some_and(|p| p.eq_ignore_ascii_case("List")) {
                let prefix = input[4..].trim_start();
                println!("Found countries: ");
                for country in summary.countries_with_prefix(prefix) {
                    println!("{country}");
                }
            } else if input.eq_ignore_ascii_case("Global") {
                show_stats("Global", &summary.global);
            } else if let Some(country) = summary.country(&input) {
                show_stats(&country.country, &country.stats);
            } else {
                println!(
                    "Country does not exist. Type \"List\" to see the list of available countries."
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "Global": {"NewConfirmed": 10, "TotalConfirmed": 100, "NewDeaths": 1,
                   "TotalDeaths": 5, "NewRecovered": 7, "TotalRecovered": 80},
        "Countries": [
            {"Country": "Norway", "CountryCode": "NO", "NewConfirmed": 2,
             "TotalConfirmed": 20, "NewDeaths": 0, "TotalDeaths": 1,
             "NewRecovered": 3, "TotalRecovered": 15},
            {"Country": "New Zealand", "CountryCode": "NZ", "NewConfirmed": 1,
             "TotalConfirmed": 10, "NewDeaths": 0, "TotalDeaths": 0,
             "NewRecovered": 1, "TotalRecovered": 9}
        ]
    }"#;

    #[test]
    fn summary_parses() {
        let summary: CovidSummary = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(summary.global.total_confirmed, 100);
        assert_eq!(summary.countries.len(), 2);
        assert_eq!(summary.countries[0].stats.total_recovered, 15);
    }

    #[test]
    fn country_lookup_is_case_insensitive() {
        let summary: CovidSummary = serde_json::from_str(SAMPLE).unwrap();
        assert!(summary.country("norway").is_some());
        assert!(summary.country("NORWAY").is_some());
        assert!(summary.country("atlantis").is_none());
    }

    #[test]
    fn prefix_listing() {
        let summary: CovidSummary = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(summary.countries_with_prefix("n"), ["Norway", "New Zealand"]);
        assert_eq!(summary.countries_with_prefix("new"), ["New Zealand"]);
        assert!(summary.countries_with_prefix("x").is_empty());
    }
}
