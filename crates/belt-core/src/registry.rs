//! Utility registry: menu and command indexes
//!
//! Built exactly once at startup from the registration list and never
//! mutated afterwards; the session loop only reads it.

use crate::utility::Utility;
use std::collections::HashMap;
use std::sync::Arc;

/// Immutable-after-build registry of all available utilities
///
/// Two derived indexes over the same handlers:
///
/// - the menu index, keyed by the case-folded display name;
/// - the command index, keyed by each alias exactly as declared.
///
/// Both use a last-write-wins policy for collisions: a utility registered
/// later silently replaces an earlier one under the same key. A warning is
/// logged when that happens, but resolution order is unchanged.
pub struct UtilityRegistry {
    menu: HashMap<String, Arc<dyn Utility>>,
    commands: HashMap<String, Arc<dyn Utility>>,
    display_order: Vec<String>,
}

impl UtilityRegistry {
    /// Build the registry from utilities in registration order
    ///
    /// Registration order is the discovery order: it fixes the 1-based menu
    /// numbering and decides which handler wins a key collision.
    pub fn build(utilities: Vec<Arc<dyn Utility>>) -> Self {
        let mut menu: HashMap<String, Arc<dyn Utility>> = HashMap::new();
        let mut commands: HashMap<String, Arc<dyn Utility>> = HashMap::new();
        let mut display_order = Vec::new();

        for utility in &utilities {
            let key = utility.name().to_lowercase();
            if let Some(previous) = menu.insert(key.clone(), Arc::clone(utility)) {
                tracing::warn!(
                    name = previous.name(),
                    "duplicate utility name, later registration wins"
                );
            } else {
                display_order.push(key);
            }
        }

        for utility in &utilities {
            for alias in utility.aliases() {
                if let Some(previous) = commands.insert(alias.to_string(), Arc::clone(utility)) {
                    tracing::warn!(
                        alias = *alias,
                        name = previous.name(),
                        "duplicate alias, later registration wins"
                    );
                }
            }
        }

        tracing::info!(
            utilities = display_order.len(),
            aliases = commands.len(),
            "utility registry built"
        );

        Self {
            menu,
            commands,
            display_order,
        }
    }

    /// Menu keys in first-insertion order; defines the menu numbering
    pub fn display_order(&self) -> &[String] {
        &self.display_order
    }

    /// Look up a utility by case-folded name
    pub fn menu_get(&self, folded_name: &str) -> Option<&Arc<dyn Utility>> {
        self.menu.get(folded_name)
    }

    /// Look up a utility by alias (case-sensitive)
    pub fn command_get(&self, alias: &str) -> Option<&Arc<dyn Utility>> {
        self.commands.get(alias)
    }

    /// Number of menu entries
    pub fn len(&self) -> usize {
        self.display_order.len()
    }

    /// Whether the registry has no utilities at all
    pub fn is_empty(&self) -> bool {
        self.display_order.is_empty()
    }
}
