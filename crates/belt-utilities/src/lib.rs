//! Utility implementations for Utility Belt

pub mod country;
pub mod covid;
pub mod discord;
pub mod facts;
pub mod games;
pub mod insult;
pub mod jokes;
pub mod network;
pub mod people;
pub mod quotes;
pub mod space;
pub mod status;
pub mod taco;

// Re-export utilities
pub use country::CountryInfoUtility;
pub use covid::Covid19Utility;
pub use discord::DiscordWebhookUtility;
pub use facts::{AdviceUtility, CatFactUtility, FoxFactUtility, NumberFactUtility, PandaFactUtility};
pub use games::{CalculatorUtility, GhostGameUtility};
pub use insult::EvilInsultUtility;
pub use jokes::{DadJokeUtility, GeekJokeUtility};
pub use network::HostToIpUtility;
pub use people::{CookieAccusationUtility, GenderFromNameUtility, RandomUserUtility};
pub use quotes::{BreakingBadQuoteUtility, QuoteGardenUtility, RandomQuoteUtility};
pub use space::{IssLocationUtility, PeopleInSpaceUtility};
pub use status::DigitalOceanStatusUtility;
pub use taco::TacoRecipeUtility;

use belt_core::utility::Utility;
use std::sync::Arc;

/// Get all default utilities, in registration order
///
/// This list is the discovery mechanism: its order fixes the menu numbering
/// and decides which entry wins a name or alias collision.
pub fn default_utilities() -> Vec<Arc<dyn Utility>> {
    vec![
        Arc::new(CatFactUtility::new()),
        Arc::new(PeopleInSpaceUtility::new()),
        Arc::new(IssLocationUtility::new()),
        Arc::new(CountryInfoUtility::new()),
        Arc::new(DiscordWebhookUtility::new()),
        Arc::new(RandomQuoteUtility::new()),
        Arc::new(QuoteGardenUtility::new()),
        Arc::new(BreakingBadQuoteUtility::new()),
        Arc::new(EvilInsultUtility::new()),
        Arc::new(CookieAccusationUtility::new()),
        Arc::new(TacoRecipeUtility::new()),
        Arc::new(GeekJokeUtility::new()),
        Arc::new(DadJokeUtility::new()),
        Arc::new(NumberFactUtility::new()),
        Arc::new(AdviceUtility::new()),
        Arc::new(PandaFactUtility::new()),
        Arc::new(FoxFactUtility::new()),
        Arc::new(GenderFromNameUtility::new()),
        Arc::new(DigitalOceanStatusUtility::new()),
        Arc::new(RandomUserUtility::new()),
        Arc::new(Covid19Utility::new()),
        Arc::new(CalculatorUtility::new()),
        Arc::new(HostToIpUtility::new()),
        Arc::new(GhostGameUtility::new()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use belt_core::registry::UtilityRegistry;
    use std::collections::HashSet;

    #[test]
    fn every_default_utility_has_a_name_and_an_alias() {
        for utility in default_utilities() {
            assert!(!utility.name().trim().is_empty());
            assert!(!utility.aliases().is_empty(), "{} has no alias", utility.name());
        }
    }

    #[test]
    fn default_names_are_collision_free() {
        let utilities = default_utilities();
        let names: HashSet<String> = utilities
            .iter()
            .map(|u| u.name().to_lowercase())
            .collect();
        assert_eq!(names.len(), utilities.len());
    }

    #[test]
    fn default_aliases_are_collision_free() {
        let utilities = default_utilities();
        let mut seen = HashSet::new();
        for utility in &utilities {
            for alias in utility.aliases() {
                assert!(seen.insert(alias.to_string()), "duplicate alias {alias}");
            }
        }
    }

    #[test]
    fn registry_builds_with_full_menu() {
        let utilities = default_utilities();
        let expected = utilities.len();
        let registry = UtilityRegistry::build(utilities);
        assert_eq!(registry.len(), expected);
        assert_eq!(registry.command_get("cat").unwrap().name(), "Cat Fact");
        assert_eq!(registry.menu_get("dad joke").unwrap().name(), "Dad Joke");
    }
}
