//! randomuser.me and genderize.io utilities

use async_trait::async_trait;
use belt_core::console::prompt_line;
use belt_core::utility::{Utility, UtilityError};
use colored::*;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct RandomUserResponse {
    results: Vec<RandomUser>,
}

#[derive(Debug, Deserialize)]
struct RandomUser {
    #[serde(default)]
    gender: Option<String>,
    name: UserName,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    phone: Option<String>,
}

#[derive(Debug, Deserialize)]
struct UserName {
    first: String,
    last: String,
}

/// Accuses a randomly generated bystander of stealing the cookie
pub struct CookieAccusationUtility;

impl CookieAccusationUtility {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CookieAccusationUtility {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Utility for CookieAccusationUtility {
    fn name(&self) -> &str {
        "Cookie Accusation"
    }

    fn aliases(&self) -> &[&str] {
        &["cookie"]
    }

    async fn run(&self) -> Result<(), UtilityError> {
        let response: RandomUserResponse =
            reqwest::get("https://randomuser.me/api/?inc=name&format=json")
                .await?
                .error_for_status()?
                .json()
                .await?;

        let Some(suspect) = response.results.first() else {
            return Err(UtilityError::Other("no suspect returned".to_string()));
        };
        let full_name = format!("{} {}", suspect.name.first, suspect.name.last);

        println!();
        println!("{}", format!("Jacques Clouseau: {full_name} stole the cookie from the cookie jar.").yellow());
        println!();
        println!("{}", format!("{full_name}: Who, me?").yellow());
        println!();
        println!("{}", "Jacques Clouseau: Yes, you!".yellow());
        println!();
        println!("{}", format!("{full_name}: Couldn't be!").yellow());
        println!();
        println!("{}", "Jacques Clouseau: Then who?".yellow());
        println!();
        Ok(())
    }
}

/// Full random user profile (gender, name, email, phone)
pub struct RandomUserUtility;

impl RandomUserUtility {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RandomUserUtility {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Utility for RandomUserUtility {
    fn name(&self) -> &str {
        "Random User"
    }

    fn aliases(&self) -> &[&str] {
        &["user"]
    }

    async fn run(&self) -> Result<(), UtilityError> {
        let response: RandomUserResponse = reqwest::get("https://randomuser.me/api")
            .await?
            .error_for_status()?
            .json()
            .await?;

        println!();
        for (i, user) in response.results.iter().enumerate() {
            println!("{}", format!("User Generated Nbr: {}", i + 1).cyan());
            println!("{}", format!("Gender: {}", user.gender.as_deref().unwrap_or("unknown")).cyan());
            println!("{}", format!("Name: {} {}", user.name.first, user.name.last).cyan());
            println!("{}", format!("Email: {}", user.email.as_deref().unwrap_or("-")).cyan());
            println!("{}", format!("Phone: {}", user.phone.as_deref().unwrap_or("-")).cyan());
            println!();
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
struct GenderizeResponse {
    #[serde(default)]
    gender: Option<String>,
    #[serde(default)]
    probability: f64,
}

/// Guesses the gender of a given first name
pub struct GenderFromNameUtility;

impl GenderFromNameUtility {
    pub fn new() -> Self {
        Self
    }
}

impl Default for GenderFromNameUtility {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Utility for GenderFromNameUtility {
    fn name(&self) -> &str {
        "Gender From Name"
    }

    fn aliases(&self) -> &[&str] {
        &["gender"]
    }

    async fn run(&self) -> Result<(), UtilityError> {
        let name = prompt_line("Type the name, and then press Enter: ")?.to_lowercase();

        if name.is_empty() {
            println!("No name provided!");
            println!();
            return Ok(());
        }

        let response: GenderizeResponse =
            reqwest::get(format!("https://api.genderize.io?name={name}"))
                .await?
                .error_for_status()?
                .json()
                .await?;

        println!();
        match response.gender {
            Some(gender) => println!(
                "The gender is {gender} with a probability of {}",
                response.probability
            ),
            None => println!("No gender guess for that name."),
        }
        println!();
        Ok(())
    }
}
