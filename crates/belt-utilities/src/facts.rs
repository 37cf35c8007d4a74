//! Random-fact utilities: cat, panda, fox, number facts, and advice

use async_trait::async_trait;
use belt_core::console::prompt_line;
use belt_core::utility::{Utility, UtilityError};
use colored::*;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct CatFactResponse {
    text: String,
    status: Option<CatFactStatus>,
}

#[derive(Debug, Deserialize)]
struct CatFactStatus {
    #[serde(default)]
    verified: Option<bool>,
}

impl CatFactResponse {
    fn is_verified(&self) -> bool {
        self.status
            .as_ref()
            .and_then(|s| s.verified)
            .unwrap_or(false)
    }
}

/// Random cat fact; verified facts print yellow, unverified red
pub struct CatFactUtility;

impl CatFactUtility {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CatFactUtility {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Utility for CatFactUtility {
    fn name(&self) -> &str {
        "Cat Fact"
    }

    fn aliases(&self) -> &[&str] {
        &["cat"]
    }

    async fn run(&self) -> Result<(), UtilityError> {
        let fact: CatFactResponse = reqwest::get("https://cat-fact.herokuapp.com/facts/random")
            .await?
            .error_for_status()?
            .json()
            .await?;

        println!();
        if fact.is_verified() {
            println!("{}", fact.text.yellow());
        } else {
            println!("{}", fact.text.red());
        }
        println!();
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
struct AnimalFactResponse {
    fact: String,
}

/// Random panda fact
pub struct PandaFactUtility;

impl PandaFactUtility {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PandaFactUtility {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Utility for PandaFactUtility {
    fn name(&self) -> &str {
        "Panda Fact"
    }

    fn aliases(&self) -> &[&str] {
        &["panda"]
    }

    async fn run(&self) -> Result<(), UtilityError> {
        let fact: AnimalFactResponse = reqwest::get("https://some-random-api.ml/facts/panda")
            .await?
            .error_for_status()?
            .json()
            .await?;

        println!();
        println!("{}", fact.fact.yellow());
        println!();
        Ok(())
    }
}

/// Random fox fact
pub struct FoxFactUtility;

impl FoxFactUtility {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FoxFactUtility {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Utility for FoxFactUtility {
    fn name(&self) -> &str {
        "Fox Fact"
    }

    fn aliases(&self) -> &[&str] {
        &["fox"]
    }

    async fn run(&self) -> Result<(), UtilityError> {
        let fact: AnimalFactResponse = reqwest::get("https://some-random-api.ml/facts/fox")
            .await?
            .error_for_status()?
            .json()
            .await?;

        println!();
        println!("{}", fact.fact.yellow());
        println!();
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
struct NumberFactResponse {
    text: String,
}

/// Trivia fact about an integer the user enters
pub struct NumberFactUtility;

impl NumberFactUtility {
    pub fn new() -> Self {
        Self
    }
}

impl Default for NumberFactUtility {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Utility for NumberFactUtility {
    fn name(&self) -> &str {
        "Number Fact"
    }

    fn aliases(&self) -> &[&str] {
        &["number"]
    }

    async fn run(&self) -> Result<(), UtilityError> {
        println!("Please enter an integer number");
        let raw = prompt_line("")?;

        let Ok(number) = raw.parse::<i64>() else {
            println!("Input was not an integer");
            return Ok(());
        };

        let fact: NumberFactResponse =
            reqwest::get(format!("http://numbersapi.com/{number}?format=json"))
                .await?
                .error_for_status()?
                .json()
                .await?;

        println!("Random fact for number {number}:");
        println!("{}", fact.text);
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
struct AdviceResponse {
    slip: AdviceSlip,
}

#[derive(Debug, Deserialize)]
struct AdviceSlip {
    advice: String,
}

/// Random piece of advice
pub struct AdviceUtility;

impl AdviceUtility {
    pub fn new() -> Self {
        Self
    }
}

impl Default for AdviceUtility {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Utility for AdviceUtility {
    fn name(&self) -> &str {
        "Random Advice"
    }

    fn aliases(&self) -> &[&str] {
        &["advice"]
    }

    async fn run(&self) -> Result<(), UtilityError> {
        let response: AdviceResponse = reqwest::get("https://api.adviceslip.com/advice")
            .await?
            .error_for_status()?
            .json()
            .await?;

        println!("Here's your advice:");
        println!("{}", response.slip.advice.cyan());
        println!();
        Ok(())
    }
}
