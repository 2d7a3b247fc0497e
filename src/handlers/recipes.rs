use axum::{extract::State, Extension, Json};

use crate::api::format::{recipe_to_repr, recipes_to_reprs, RecipeRepr};
use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::middleware::response::{ApiResponse, ApiResult};
use crate::models::recipe::NewRecipe;
use crate::routes::AppState;

/// GET /api/recipes - list the caller's recipes, most recent id first.
///
/// The resolved identity is an explicit parameter (the AuthUser extension
/// injected by the auth middleware); the query never consults ambient state.
pub async fn recipe_list(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> ApiResult<Vec<RecipeRepr>> {
    let rows = state.store.list_for_owner(user.user_id).await?;
    Ok(ApiResponse::success(recipes_to_reprs(&rows)))
}

/// POST /api/recipes - create a recipe owned by the caller
pub async fn recipe_create(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Json(draft): Json<NewRecipe>,
) -> ApiResult<RecipeRepr> {
    if let Err(field_errors) = draft.validate() {
        return Err(ApiError::validation_error(
            "Invalid recipe",
            Some(field_errors),
        ));
    }

    let created = state.store.insert(user.user_id, draft).await?;
    tracing::debug!(recipe_id = created.id, "created recipe");

    Ok(ApiResponse::created(recipe_to_repr(&created)))
}
