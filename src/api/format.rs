use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::recipe::Recipe;

/// Public wire representation of a recipe. Fields are enumerated by hand so
/// the response shape is an explicit contract. `owner_id` is deliberately
/// absent; callers only ever see their own records.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RecipeRepr {
    pub id: i64,
    pub title: String,
    pub time_minutes: i32,
    pub price: Decimal,
    pub description: Option<String>,
    pub link: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Map a stored recipe to its wire representation
pub fn recipe_to_repr(recipe: &Recipe) -> RecipeRepr {
    RecipeRepr {
        id: recipe.id,
        title: recipe.title.clone(),
        time_minutes: recipe.time_minutes,
        price: recipe.price,
        description: recipe.description.clone(),
        link: recipe.link.clone(),
        created_at: recipe.created_at,
    }
}

/// Map a list of recipes, preserving order
pub fn recipes_to_reprs(recipes: &[Recipe]) -> Vec<RecipeRepr> {
    recipes.iter().map(recipe_to_repr).collect()
}
