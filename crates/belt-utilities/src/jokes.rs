//! Joke utilities: geek jokes and dad jokes

use async_trait::async_trait;
use belt_core::utility::{Utility, UtilityError};
use reqwest::header::{ACCEPT, USER_AGENT};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct GeekJokeResponse {
    joke: String,
}

/// Random geek joke
pub struct GeekJokeUtility;

impl GeekJokeUtility {
    pub fn new() -> Self {
        Self
    }
}

impl Default for GeekJokeUtility {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Utility for GeekJokeUtility {
    fn name(&self) -> &str {
        "Geek Joke"
    }

    fn aliases(&self) -> &[&str] {
        &["geek"]
    }

    async fn run(&self) -> Result<(), UtilityError> {
        let joke: GeekJokeResponse =
            reqwest::get("https://geek-jokes.sameerkumar.website/api?format=json")
                .await?
                .error_for_status()?
                .json()
                .await?;

        println!();
        println!("The Geek says -- {}", joke.joke);
        println!();
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
struct DadJokeResponse {
    joke: String,
}

/// Random dad joke
///
/// icanhazdadjoke returns HTML unless asked for JSON, and rejects requests
/// without a User-Agent.
pub struct DadJokeUtility;

impl DadJokeUtility {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DadJokeUtility {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Utility for DadJokeUtility {
    fn name(&self) -> &str {
        "Dad Joke"
    }

    fn aliases(&self) -> &[&str] {
        &["dad"]
    }

    async fn run(&self) -> Result<(), UtilityError> {
        let client = reqwest::Client::new();
        let response = client
            .get("https://icanhazdadjoke.com")
            .header(ACCEPT, "application/json")
            .header(USER_AGENT, "utility-belt (https://github.com/utility-belt/utility-belt)")
            .send()
            .await?;

        if !response.status().is_success() {
            println!("There was an error retrieving the joke. Please try again later.");
            return Ok(());
        }

        let joke: DadJokeResponse = response.json().await?;
        println!("Random Dad Joke:");
        println!("{}", joke.joke);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn geek_joke_parses() {
        let json = r#"{"joke":"There are 10 types of people."}"#;
        let joke: GeekJokeResponse = serde_json::from_str(json).unwrap();
        assert_eq!(joke.joke, "There are 10 types of people.");
    }

    #[test]
    fn dad_joke_parses() {
        let json = r#"{"id":"abc","joke":"I'm afraid for the calendar. Its days are numbered.","status":200}"#;
        let joke: DadJokeResponse = serde_json::from_str(json).unwrap();
        assert!(joke.joke.contains("calendar"));
    }
}
