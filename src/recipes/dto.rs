use serde::Deserialize;
use uuid::Uuid;

use crate::error::ValidationError;
use crate::nutrition::Nutrition;
use crate::recipes::catalog::{Ingredient, Recipe};

#[derive(Debug, Deserialize)]
pub struct CreateRecipeRequest {
    #[serde(default)]
    pub id: Option<String>,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub appliances: Vec<String>,
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
    #[serde(default)]
    pub steps: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub est_nutrition: Nutrition,
    #[serde(default)]
    pub time_minutes: u32,
    #[serde(default)]
    pub servings_default: Option<u32>,
}

impl CreateRecipeRequest {
    /// Checks the payload and turns it into a user-owned recipe.
    pub fn into_recipe(self) -> Result<Recipe, ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        self.est_nutrition.validate()?;

        let id = self
            .id
            .filter(|id| !id.trim().is_empty())
            .unwrap_or_else(|| format!("recipe_{}", Uuid::new_v4().simple()));
        Ok(Recipe {
            id,
            owner_id: Some("user_1".into()),
            title: self.title.trim().to_string(),
            description: self.description,
            appliances: self.appliances,
            ingredients: self.ingredients,
            steps: self.steps,
            tags: self.tags,
            est_nutrition: self.est_nutrition,
            time_minutes: self.time_minutes,
            servings_default: self.servings_default.unwrap_or(1).max(1),
            is_system: false,
        })
    }
}
