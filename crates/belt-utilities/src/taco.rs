//! Random taco recipe

use async_trait::async_trait;
use belt_core::utility::{Utility, UtilityError};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct TacoRecipe {
    base_layer: TacoPart,
    mixin: TacoPart,
    seasoning: TacoPart,
    condiment: TacoPart,
    shell: TacoPart,
}

#[derive(Debug, Deserialize)]
struct TacoPart {
    name: String,
}

fn render_recipe(recipe: &TacoRecipe) -> String {
    format!(
        "Why not try {} with {},\nseasoned with {}, topped off with {}\nand wrapped in delicious {}.",
        recipe.base_layer.name,
        recipe.mixin.name,
        recipe.seasoning.name,
        recipe.condiment.name,
        recipe.shell.name
    )
}

/// Randomly assembled taco recipe
pub struct TacoRecipeUtility;

impl TacoRecipeUtility {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TacoRecipeUtility {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Utility for TacoRecipeUtility {
    fn name(&self) -> &str {
        "Taco Recipe"
    }

    fn aliases(&self) -> &[&str] {
        &["taco"]
    }

    async fn run(&self) -> Result<(), UtilityError> {
        let recipe: TacoRecipe = reqwest::get("http://taco-randomizer.herokuapp.com/random/")
            .await?
            .error_for_status()?
            .json()
            .await?;

        println!();
        println!("{}", render_recipe(&recipe));
        println!();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recipe_parses_and_renders() {
        let json = r#"{
            "base_layer": {"name": "Black beans"},
            "mixin": {"name": "Grilled corn"},
            "seasoning": {"name": "Chipotle"},
            "condiment": {"name": "Salsa verde"},
            "shell": {"name": "Corn tortillas"}
        }"#;
        let recipe: TacoRecipe = serde_json::from_str(json).unwrap();
        let text = render_recipe(&recipe);
        assert!(text.contains("Black beans with Grilled corn"));
        assert!(text.contains("wrapped in delicious Corn tortillas."));
    }
}
