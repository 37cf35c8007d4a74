//! Open Notify utilities: who is in space, and where the ISS is

use async_trait::async_trait;
use belt_core::utility::{Utility, UtilityError};
use colored::*;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct AstronautsResponse {
    people: Vec<Astronaut>,
}

#[derive(Debug, Deserialize)]
struct Astronaut {
    name: String,
    craft: String,
}

/// Everyone currently in space, and the craft they are on
pub struct PeopleInSpaceUtility;

impl PeopleInSpaceUtility {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PeopleInSpaceUtility {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Utility for PeopleInSpaceUtility {
    fn name(&self) -> &str {
        "People In Space"
    }

    fn aliases(&self) -> &[&str] {
        &["space"]
    }

    async fn run(&self) -> Result<(), UtilityError> {
        let response: AstronautsResponse = reqwest::get("http://api.open-notify.org/astros.json")
            .await?
            .error_for_status()?
            .json()
            .await?;

        println!();
        println!(
            "{}",
            format!("There are {} in space right now!", response.people.len()).yellow()
        );
        for person in &response.people {
            println!("{}", format!("{} is in {}", person.name, person.craft).yellow());
        }
        println!();
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
struct IssLocationResponse {
    iss_position: IssPosition,
}

#[derive(Debug, Deserialize)]
struct IssPosition {
    latitude: String,
    longitude: String,
}

/// Current latitude/longitude of the International Space Station
pub struct IssLocationUtility;

impl IssLocationUtility {
    pub fn new() -> Self {
        Self
    }
}

impl Default for IssLocationUtility {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Utility for IssLocationUtility {
    fn name(&self) -> &str {
        "Space Station Location"
    }

    fn aliases(&self) -> &[&str] {
        &["iss"]
    }

    async fn run(&self) -> Result<(), UtilityError> {
        let response: IssLocationResponse = reqwest::get("http://api.open-notify.org/iss-now.json")
            .await?
            .error_for_status()?
            .json()
            .await?;

        println!("Woah! The International Space Station is currently at:");
        println!(
            "{}",
            format!(
                "{} Latitude and {} Longitude",
                response.iss_position.latitude, response.iss_position.longitude
            )
            .cyan()
        );
        println!("That's so cool!");
        Ok(())
    }
}
