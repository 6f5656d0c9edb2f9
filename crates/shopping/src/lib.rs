pub mod aggregation;
pub mod commands;
pub mod deals;
pub mod fraction_utils;
pub mod units;

// Re-export commonly used types
pub use aggregation::{AggregatedIngredient, IngredientAggregationService};
pub use commands::{
    GenerateShoppingListCommand, ShoppingListDraft, ShoppingListError, ShoppingListItemDraft,
    generate_shopping_list,
};
pub use deals::{DealMatch, find_deal_for_ingredient};
pub use fraction_utils::{format_quantity, parse_quantity};
pub use units::{normalize_unit, upgrade_unit};
