use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;
use sqlx::FromRow;
use std::collections::HashMap;
use uuid::Uuid;

/// A stored recipe. `id` is storage-assigned and monotonically increasing;
/// `owner_id` is set at creation and never reassigned. The wire shape lives
/// in `api::format::RecipeRepr`, not here.
#[derive(Debug, Clone, FromRow)]
pub struct Recipe {
    pub id: i64,
    pub owner_id: Uuid,
    pub title: String,
    pub time_minutes: i32,
    pub price: Decimal,
    pub description: Option<String>,
    pub link: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Client-supplied fields for creating a recipe. The owner comes from the
/// authenticated caller, never from the request body.
#[derive(Debug, Clone, Deserialize)]
pub struct NewRecipe {
    pub title: String,
    pub time_minutes: i32,
    pub price: Decimal,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
}

impl NewRecipe {
    /// Field-level validation; returns per-field messages on failure.
    pub fn validate(&self) -> Result<(), HashMap<String, String>> {
        let mut errors = HashMap::new();

        if self.title.trim().is_empty() {
            errors.insert("title".to_string(), "This field is required".to_string());
        }
        if self.time_minutes < 1 {
            errors.insert(
                "time_minutes".to_string(),
                "Must be a positive integer".to_string(),
            );
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> NewRecipe {
        NewRecipe {
            title: "Sample Recipe".to_string(),
            time_minutes: 22,
            price: Decimal::new(525, 2),
            description: Some("Sample description".to_string()),
            link: Some("http://example.com/recipe.pdf".to_string()),
        }
    }

    #[test]
    fn valid_draft_passes() {
        assert!(draft().validate().is_ok());
    }

    #[test]
    fn blank_title_is_rejected() {
        let mut d = draft();
        d.title = "   ".to_string();
        let errors = d.validate().unwrap_err();
        assert!(errors.contains_key("title"));
    }

    #[test]
    fn non_positive_minutes_are_rejected() {
        let mut d = draft();
        d.time_minutes = 0;
        let errors = d.validate().unwrap_err();
        assert!(errors.contains_key("time_minutes"));
    }
}
