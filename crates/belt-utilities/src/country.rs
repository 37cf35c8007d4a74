//! Country information lookup

use async_trait::async_trait;
use belt_core::console::prompt_line;
use belt_core::utility::{Utility, UtilityError};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct Country {
    name: String,
    #[serde(default)]
    capital: Option<String>,
    #[serde(default)]
    region: Option<String>,
    #[serde(default)]
    population: u64,
    #[serde(default)]
    area: Option<f64>,
    #[serde(default)]
    currencies: Vec<Currency>,
    #[serde(default)]
    languages: Vec<Language>,
}

#[derive(Debug, Deserialize)]
struct Currency {
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    symbol: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Language {
    name: String,
    #[serde(rename = "nativeName", default)]
    native_name: Option<String>,
}

fn render_country(country: &Country) -> String {
    let mut out = String::new();
    out.push_str("===============================================\n");
    out.push_str(&format!("Country Name: {}\n", country.name));
    out.push_str(&format!("Capital: {}\n", country.capital.as_deref().unwrap_or("-")));
    out.push_str(&format!("Region: {}\n", country.region.as_deref().unwrap_or("-")));
    out.push_str(&format!("Population: {}\n", country.population));
    out.push_str(&format!("Area: {} km²\n", country.area.unwrap_or(0.0)));
    out.push_str("Currencies\n");
    for currency in &country.currencies {
        out.push_str(&format!("*Code:\t\t{}\n", currency.code.as_deref().unwrap_or("-")));
        out.push_str(&format!("*Name:\t\t{}\n", currency.name.as_deref().unwrap_or("-")));
        out.push_str(&format!("*Symbol:\t{}\n", currency.symbol.as_deref().unwrap_or("-")));
    }
    out.push_str("Languages\n");
    for language in &country.languages {
        out.push_str(&format!(
            "* Name:\t\t{} / {}\n",
            language.name,
            language.native_name.as_deref().unwrap_or(&language.name)
        ));
    }
    out.push_str("===============================================");
    out
}

/// Looks up a country by name and prints its vitals
pub struct CountryInfoUtility;

impl CountryInfoUtility {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CountryInfoUtility {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Utility for CountryInfoUtility {
    fn name(&self) -> &str {
        "Country Information"
    }

    fn aliases(&self) -> &[&str] {
        &["country"]
    }

    async fn run(&self) -> Result<(), UtilityError> {
        println!();
        println!("Please enter a country name:");
        let country_name = prompt_line("")?.to_lowercase();

        let url = format!("https://restcountries.eu/rest/v2/name/{country_name}");
        let countries: Vec<Country> = match reqwest::get(&url).await {
            Ok(response) => match response.error_for_status() {
                Ok(ok) => ok.json().await?,
                Err(_) => {
                    tracing::warn!(country = %country_name, "country not found");
                    println!("Country not found");
                    return Ok(());
                }
            },
            Err(_) => {
                println!("Country not found");
                return Ok(());
            }
        };

        for country in &countries {
            println!("{}", render_country(country));
        }
        Ok(())
    }
}
