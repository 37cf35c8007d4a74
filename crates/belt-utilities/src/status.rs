//! DigitalOcean status page check

use async_trait::async_trait;
use belt_core::utility::{Utility, UtilityError};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct StatusPageResponse {
    status: StatusIndicator,
}

#[derive(Debug, Deserialize)]
struct StatusIndicator {
    indicator: String,
    description: String,
}

/// Current DigitalOcean platform status
pub struct DigitalOceanStatusUtility;

impl DigitalOceanStatusUtility {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DigitalOceanStatusUtility {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Utility for DigitalOceanStatusUtility {
    fn name(&self) -> &str {
        "DigitalOcean Status"
    }

    fn aliases(&self) -> &[&str] {
        &["do"]
    }

    async fn run(&self) -> Result<(), UtilityError> {
        let response: StatusPageResponse =
            reqwest::get("https://s2k7tnzlhrpw.statuspage.io/api/v2/status.json")
                .await?
                .error_for_status()?
                .json()
                .await?;

        println!();
        println!("Indicator -- {}", response.status.indicator);
        println!("Description -- {}", response.status.description);
        println!();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_parses() {
        let json = r#"{"page":{"id":"x","name":"DigitalOcean"},"status":{"indicator":"none","description":"All Systems Operational"}}"#;
        let response: StatusPageResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.status.indicator, "none");
        assert_eq!(response.status.description, "All Systems Operational");
    }
}
