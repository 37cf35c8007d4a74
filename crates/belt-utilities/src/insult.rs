//! Random insult, HTML-entity-decoded before display

use async_trait::async_trait;
use belt_core::utility::{Utility, UtilityError};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct InsultResponse {
    insult: String,
}

/// Random insult from evilinsult.com
pub struct EvilInsultUtility;

impl EvilInsultUtility {
    pub fn new() -> Self {
        Self
    }
}

impl Default for EvilInsultUtility {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Utility for EvilInsultUtility {
    fn name(&self) -> &str {
        "Random Insult"
    }

    fn aliases(&self) -> &[&str] {
        &["insult"]
    }

    async fn run(&self) -> Result<(), UtilityError> {
        let response: InsultResponse =
            reqwest::get("https://evilinsult.com/generate_insult.php?lang=en&type=json")
                .await?
                .error_for_status()?
                .json()
                .await?;

        println!();
        println!("{}", decode_html_entities(&response.insult));
        println!();
        Ok(())
    }
}

/// Decode the handful of HTML entities the insult API actually emits
///
/// Named entities plus decimal/hex numeric references. Unknown or
/// malformed references pass through unchanged.
fn decode_html_entities(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(start) = rest.find('&') {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];
        match tail.find(';') {
            Some(end) => {
                let entity = &tail[1..end];
                match decode_entity(entity) {
                    Some(decoded) => out.push_str(&decoded),
                    None => out.push_str(&tail[..=end]),
                }
                rest = &tail[end + 1..];
            }
            None => {
                out.push_str(tail);
                return out;
            }
        }
    }
    out.push_str(rest);
    out
}

fn decode_entity(entity: &str) -> Option<String> {
    match entity {
        "amp" => Some("&".to_string()),
        "lt" => Some("<".to_string()),
        "gt" => Some(">".to_string()),
        "quot" => Some("\"".to_string()),
        "apos" => Some("'".to_string()),
        "nbsp" => Some(" ".to_string()),
        _ => {
            let code = entity.strip_prefix('#')?;
            let value = match code.strip_prefix(['x', 'X']) {
                Some(hex) => u32::from_str_radix(hex, 16).ok()?,
                None => code.parse::<u32>().ok()?,
            };
            char::from_u32(value).map(|c| c.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insult_parses() {
        let json = r#"{"number":"1","language":"en","insult":"You&#039;re a fool","created":"2020"}"#;
        let response: InsultResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.insult, "You&#039;re a fool");
    }

    #[test]
    fn decodes_named_entities() {
        assert_eq!(decode_html_entities("fish &amp; chips"), "fish & chips");
        assert_eq!(decode_html_entities("&quot;hi&quot;"), "\"hi\"");
    }

    #[test]
    fn decodes_numeric_entities() {
        assert_eq!(decode_html_entities("You&#039;re"), "You're");
        assert_eq!(decode_html_entities("caf&#xE9;"), "café");
    }

    #[test]
    fn leaves_unknown_references_alone() {
        assert_eq!(decode_html_entities("&bogus; & done"), "&bogus; & done");
        assert_eq!(decode_html_entities("trailing &"), "trailing &");
    }

    #[test]
    fn plain_text_passes_through() {
        assert_eq!(decode_html_entities("no entities here"), "no entities here");
    }
}
