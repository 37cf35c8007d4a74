//! Input resolution: raw console input to an action

use crate::registry::UtilityRegistry;
use crate::utility::Utility;
use std::sync::Arc;

/// What a line of console input resolved to
pub enum ResolvedAction {
    /// The exit sentinel (`0`)
    Exit,
    /// Run this utility
    Run(Arc<dyn Utility>),
    /// Unparsable, out of range, or unknown name/alias
    Invalid,
}

/// Resolve trimmed console input against the registry
///
/// Precedence:
/// 1. integer: `0` exits, `1..=N` picks by menu position, anything else
///    (including negatives) is invalid;
/// 2. case-folded lookup in the menu index;
/// 3. case-sensitive lookup in the command index;
/// 4. invalid.
pub fn resolve(raw: &str, registry: &UtilityRegistry) -> ResolvedAction {
    let input = raw.trim();

    if let Ok(n) = input.parse::<i64>() {
        if n == 0 {
            return ResolvedAction::Exit;
        }
        if n >= 1 && (n as usize) <= registry.len() {
            let key = &registry.display_order()[n as usize - 1];
            if let Some(utility) = registry.menu_get(key) {
                return ResolvedAction::Run(Arc::clone(utility));
            }
        }
        return ResolvedAction::Invalid;
    }

    if let Some(utility) = registry.menu_get(&input.to_lowercase()) {
        return ResolvedAction::Run(Arc::clone(utility));
    }

    if let Some(utility) = registry.command_get(input) {
        return ResolvedAction::Run(Arc::clone(utility));
    }

    ResolvedAction::Invalid
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utility::test_support::StubUtility;

    fn registry() -> UtilityRegistry {
        UtilityRegistry::build(vec![
            StubUtility::new("Foo", &["bar"]) as Arc<dyn Utility>,
            StubUtility::new("Weather", &["w"]) as Arc<dyn Utility>,
        ])
    }

    fn resolved_name(action: ResolvedAction) -> Option<String> {
        match action {
            ResolvedAction::Run(u) => Some(u.name().to_string()),
            _ => None,
        }
    }

    #[test]
    fn zero_is_exit() {
        assert!(matches!(resolve("0", &registry()), ResolvedAction::Exit));
    }

    #[test]
    fn zero_is_exit_even_with_empty_registry() {
        let empty = UtilityRegistry::build(Vec::new());
        assert!(matches!(resolve("0", &empty), ResolvedAction::Exit));
    }

    #[test]
    fn positional_pick_is_one_based() {
        let r = registry();
        assert_eq!(resolved_name(resolve("1", &r)).as_deref(), Some("Foo"));
        assert_eq!(resolved_name(resolve("2", &r)).as_deref(), Some("Weather"));
    }

    #[test]
    fn out_of_range_numbers_are_invalid() {
        let r = registry();
        assert!(matches!(resolve("3", &r), ResolvedAction::Invalid));
        assert!(matches!(resolve("99", &r), ResolvedAction::Invalid));
        assert!(matches!(resolve("-1", &r), ResolvedAction::Invalid));
    }

    #[test]
    fn name_lookup_is_case_insensitive() {
        let r = registry();
        assert_eq!(resolved_name(resolve("foo", &r)).as_deref(), Some("Foo"));
        assert_eq!(resolved_name(resolve("FOO", &r)).as_deref(), Some("Foo"));
        assert_eq!(resolved_name(resolve("Foo", &r)).as_deref(), Some("Foo"));
    }

    #[test]
    fn alias_lookup_is_case_sensitive() {
        let r = registry();
        assert_eq!(resolved_name(resolve("bar", &r)).as_deref(), Some("Foo"));
        assert!(matches!(resolve("BAR", &r), ResolvedAction::Invalid));
    }

    #[test]
    fn unknown_tokens_are_invalid() {
        assert!(matches!(
            resolve("does-not-exist", &registry()),
            ResolvedAction::Invalid
        ));
    }

    #[test]
    fn input_is_trimmed_before_resolution() {
        let r = registry();
        assert_eq!(resolved_name(resolve("  2  ", &r)).as_deref(), Some("Weather"));
        assert_eq!(resolved_name(resolve(" foo ", &r)).as_deref(), Some("Foo"));
    }
}
