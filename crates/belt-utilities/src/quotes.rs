//! Quote utilities: forismatic, quote garden, and Breaking Bad

use async_trait::async_trait;
use belt_core::utility::{Utility, UtilityError};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct ForismaticQuote {
    #[serde(rename = "quoteText")]
    text: String,
    #[serde(rename = "quoteAuthor")]
    author: String,
}

/// Random quote from forismatic
pub struct RandomQuoteUtility;

impl RandomQuoteUtility {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RandomQuoteUtility {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Utility for RandomQuoteUtility {
    fn name(&self) -> &str {
        "Random Quote"
    }

    fn aliases(&self) -> &[&str] {
        &["quote"]
    }

    async fn run(&self) -> Result<(), UtilityError> {
        let quote: ForismaticQuote =
            reqwest::get("https://api.forismatic.com/api/1.0/?method=getQuote&lang=en&format=json")
                .await?
                .error_for_status()?
                .json()
                .await?;

        println!();
        println!("{}", quote.text);
        println!("--{}", quote.author);
        println!();
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
struct QuoteGardenResponse {
    quote: QuoteGardenQuote,
}

#[derive(Debug, Deserialize)]
struct QuoteGardenQuote {
    #[serde(rename = "quoteText")]
    text: String,
    #[serde(rename = "quoteAuthor")]
    author: String,
}

/// Random quote from the quote garden
pub struct QuoteGardenUtility;

impl QuoteGardenUtility {
    pub fn new() -> Self {
        Self
    }
}

impl Default for QuoteGardenUtility {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Utility for QuoteGardenUtility {
    fn name(&self) -> &str {
        "Quote Garden"
    }

    fn aliases(&self) -> &[&str] {
        &["qg"]
    }

    async fn run(&self) -> Result<(), UtilityError> {
        let response: QuoteGardenResponse =
            reqwest::get("https://quote-garden.herokuapp.com/api/v2/quotes/random")
                .await?
                .error_for_status()?
                .json()
                .await?;

        println!();
        println!("Quote -- {}", response.quote.text);
        println!("From -- {}", response.quote.author);
        println!();
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
struct BreakingBadQuote {
    quote: String,
    author: String,
}

/// Random Breaking Bad quote
pub struct BreakingBadQuoteUtility;

impl BreakingBadQuoteUtility {
    pub fn new() -> Self {
        Self
    }
}

impl Default for BreakingBadQuoteUtility {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Utility for BreakingBadQuoteUtility {
    fn name(&self) -> &str {
        "Breaking Bad Quote"
    }

    fn aliases(&self) -> &[&str] {
        &["bb"]
    }

    async fn run(&self) -> Result<(), UtilityError> {
        let quotes: Vec<BreakingBadQuote> =
            reqwest::get("https://breaking-bad-quotes.herokuapp.com/v1/quotes")
                .await?
                .error_for_status()?
                .json()
                .await?;

        println!();
        match quotes.first() {
            Some(quote) => {
                println!("Quote -- {}", quote.quote);
                println!("From -- {}", quote.author);
            }
            None => println!("No quote today."),
        }
        println!();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forismatic_parses() {
        let json = r#"{"quoteText":"Simplicity is the key.","quoteAuthor":"Somebody","senderName":"","quoteLink":""}"#;
        let quote: ForismaticQuote = serde_json::from_str(json).unwrap();
        assert_eq!(quote.text, "Simplicity is the key.");
        assert_eq!(quote.author, "Somebody");
    }

    #[test]
    fn quote_garden_parses() {
        let json = r#"{"sC":200,"quote":{"quoteText":"Stay hungry.","quoteAuthor":"S. Jobs"}}"#;
        let response: QuoteGardenResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.quote.author, "S. Jobs");
    }

    #[test]
    fn breaking_bad_parses_list() {
        let json = r#"[{"quote":"I am the one who knocks.","author":"Walter White"}]"#;
        let quotes: Vec<BreakingBadQuote> = serde_json::from_str(json).unwrap();
        assert_eq!(quotes[0].author, "Walter White");
    }
}
