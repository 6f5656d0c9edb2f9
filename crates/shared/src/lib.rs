pub mod deal;
pub mod mealplan;
pub mod recipe;
pub mod shopping;

mod lenient;

pub use deal::{Deal, DealWithStore, StoreDeals, StoreSlug};
pub use mealplan::{MealPlan, MealPlanItem, MealType};
pub use recipe::{IngredientLine, Recipe};
pub use shopping::StorePreference;
