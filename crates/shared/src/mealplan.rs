use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};

use crate::recipe::{IngredientLine, Recipe};

#[derive(
    Serialize,
    Deserialize,
    EnumString,
    Display,
    VariantArray,
    AsRefStr,
    Default,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum MealType {
    Breakfast,
    Lunch,
    #[default]
    Dinner,
    Snack,
}

/// A slot of a weekly plan. `day_of_week` is 0 for Monday through 6 for Sunday.
#[derive(Serialize, Deserialize, Default, Clone, Debug, PartialEq)]
pub struct MealPlanItem {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub recipe_id: Option<String>,
    pub day_of_week: u8,
    pub meal_type: MealType,
    #[serde(default)]
    pub custom_notes: Option<String>,
    #[serde(default)]
    pub recipe: Option<Recipe>,
}

#[derive(Serialize, Deserialize, Default, Clone, Debug, PartialEq)]
pub struct MealPlan {
    pub id: String,
    /// ISO date of the Monday starting the week
    #[serde(default)]
    pub week_start_date: String,
    pub week_number: u32,
    pub year: i32,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub items: Vec<MealPlanItem>,
}

impl MealPlan {
    /// Every ingredient line of every recipe in the plan, slot by slot.
    ///
    /// A recipe scheduled twice contributes its lines twice. Slots without a
    /// recipe (custom notes only) contribute nothing.
    pub fn ingredient_lines(&self) -> impl Iterator<Item = &IngredientLine> {
        self.items
            .iter()
            .filter_map(|item| item.recipe.as_ref())
            .flat_map(|recipe| recipe.ingredients().iter())
    }
}
