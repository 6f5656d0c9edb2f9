use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use foodplan_shared::{MealPlan, StorePreference};
use foodplan_shopping::{GenerateShoppingListCommand, generate_shopping_list};
use serde::Deserialize;
use serde_json::json;

use crate::{error::AppError, routes::AppState};

#[derive(Debug, Deserialize)]
pub struct GenerateShoppingListInput {
    /// Meal plan with its items' recipes embedded
    pub meal_plan: MealPlan,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub store_preference: StorePreference,
}

/// POST /api/shopping-lists/generate
///
/// Responds 201 with the generated list, 400 when the plan has no id or no
/// ingredients. Deals that cannot be loaded only disable deal matching.
pub async fn post_generate_shopping_list(
    State(app): State<AppState>,
    Json(input): Json<GenerateShoppingListInput>,
) -> Result<impl IntoResponse, AppError> {
    if input.meal_plan.id.trim().is_empty() {
        return Err(AppError::ValidationError("meal_plan.id is required".to_owned()));
    }

    let deals = match app.catalog.load(None).await {
        Ok(loaded) => loaded.deals,
        Err(err) => {
            tracing::warn!(
                meal_plan_id = input.meal_plan.id.as_str(),
                err = %err,
                "deal matching skipped"
            );
            Vec::new()
        }
    };

    let cmd = GenerateShoppingListCommand {
        meal_plan: input.meal_plan,
        title: input.title,
        store_preference: input.store_preference,
        as_of: chrono::Local::now().date_naive(),
    };

    let shopping_list = generate_shopping_list(cmd, &deals)?;

    Ok((
        StatusCode::CREATED,
        Json(json!({ "shoppingList": shopping_list })),
    ))
}
