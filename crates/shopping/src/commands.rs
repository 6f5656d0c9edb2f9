use chrono::NaiveDate;
use foodplan_shared::{DealWithStore, MealPlan, StorePreference};
use serde::{Deserialize, Serialize};

use crate::aggregation::IngredientAggregationService;
use crate::deals::find_deal_for_ingredient;

/// Command to generate a shopping list from a meal plan
#[derive(Debug, Clone)]
pub struct GenerateShoppingListCommand {
    /// Meal plan with its items' recipes already loaded
    pub meal_plan: MealPlan,
    pub title: Option<String>,
    pub store_preference: StorePreference,
    /// Day used to decide which deals are running
    pub as_of: NaiveDate,
}

/// Error types for shopping list commands
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ShoppingListError {
    #[error("No ingredients found in meal plan recipes")]
    NoIngredients,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShoppingListItemDraft {
    pub name: String,
    pub quantity: String,
    pub unit: String,
    pub is_checked: bool,
    pub store_preference: StorePreference,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deal_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_price: Option<f64>,
}

/// A shopping list ready to be persisted by the caller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShoppingListDraft {
    pub meal_plan_id: String,
    pub title: String,
    pub is_completed: bool,
    pub items: Vec<ShoppingListItemDraft>,
}

/// Generate a shopping list from a meal plan
///
/// This command:
/// 1. Flattens the ingredient lines of every scheduled recipe
/// 2. Aggregates them (summing quantities, normalizing units)
/// 3. Attaches the cheapest running deal to each item when one matches
///
/// Pass an empty `deals` slice to skip deal matching.
pub fn generate_shopping_list(
    cmd: GenerateShoppingListCommand,
    deals: &[DealWithStore],
) -> Result<ShoppingListDraft, ShoppingListError> {
    let lines: Vec<_> = cmd.meal_plan.ingredient_lines().collect();

    if lines.is_empty() {
        return Err(ShoppingListError::NoIngredients);
    }

    let aggregated = IngredientAggregationService::aggregate(lines);

    let items: Vec<ShoppingListItemDraft> = aggregated
        .into_iter()
        .map(|ingredient| {
            let deal =
                find_deal_for_ingredient(&ingredient.name, deals, cmd.store_preference, cmd.as_of);

            ShoppingListItemDraft {
                name: ingredient.name,
                quantity: ingredient.quantity,
                unit: ingredient.unit,
                is_checked: false,
                store_preference: cmd.store_preference,
                estimated_price: deal.as_ref().map(|deal| deal.price),
                deal_id: deal.map(|deal| deal.deal_id),
            }
        })
        .collect();

    let title = match cmd.title.as_deref().map(str::trim) {
        Some(title) if !title.is_empty() => title.to_owned(),
        _ => default_title(&cmd.meal_plan),
    };

    tracing::info!(
        meal_plan_id = cmd.meal_plan.id.as_str(),
        items = items.len(),
        deals_matched = items.iter().filter(|item| item.deal_id.is_some()).count(),
        "shopping list generated"
    );

    Ok(ShoppingListDraft {
        meal_plan_id: cmd.meal_plan.id,
        title,
        is_completed: false,
        items,
    })
}

fn default_title(meal_plan: &MealPlan) -> String {
    format!(
        "Shopping List - Week {}, {}",
        meal_plan.week_number, meal_plan.year
    )
}
