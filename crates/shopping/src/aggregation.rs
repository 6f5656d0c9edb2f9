use std::collections::HashMap;

use foodplan_shared::IngredientLine;
use serde::{Deserialize, Serialize};

use crate::fraction_utils::{format_quantity, parse_quantity};
use crate::units::{normalize_unit, upgrade_unit};

/// One shopping-list entry per distinct (name, unit) pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregatedIngredient {
    pub name: String,
    pub quantity: String,
    pub unit: String,
}

/// Ingredient Aggregation Service
///
/// Stateless domain service that normalizes ingredient names and units and
/// sums quantities for shopping list generation.
///
/// - "Tomato 200 g" + " tomato  300 grams" = "Tomato 500 g"
/// - "Flour 700 g" + "flour 300 g" = "Flour 1 kg"
/// - "Flour 200 g" + "Flour 2 cups" = 2 separate line items (no conversion
///   between mass, volume and count)
pub struct IngredientAggregationService;

impl IngredientAggregationService {
    /// Aggregate ingredient lines into a deduplicated shopping list
    ///
    /// Lines whose quantity cannot be parsed count as 0 but still produce
    /// (or join) their entry. An empty input yields an empty list.
    pub fn aggregate<'a, I>(lines: I) -> Vec<AggregatedIngredient>
    where
        I: IntoIterator<Item = &'a IngredientLine>,
    {
        let mut groups: HashMap<(String, String), f64> = HashMap::new();
        let mut line_count = 0usize;

        for line in lines {
            line_count += 1;

            let key = (Self::normalize_name(&line.name), normalize_unit(&line.unit));
            let quantity = parse_quantity(&line.quantity);

            *groups.entry(key).or_insert(0.0) += quantity;
        }

        let mut entries: Vec<((String, String), AggregatedIngredient)> = groups
            .into_iter()
            .map(|((name, unit), total)| {
                let (quantity, display_unit) = upgrade_unit(total, &unit);

                let ingredient = AggregatedIngredient {
                    name: capitalize_first(&name),
                    quantity: format_quantity(finite_or_zero(quantity)),
                    unit: display_unit,
                };

                ((name, unit), ingredient)
            })
            .collect();

        // Name, then displayed unit ("kg" sorts as "kg", not "g"), then the
        // summed unit so "0.5 l" and "1000 ml" shown as "1 l" keep a fixed order
        entries.sort_by(|((a_name, a_unit), a), ((b_name, b_unit), b)| {
            (a_name, &a.unit, a_unit).cmp(&(b_name, &b.unit, b_unit))
        });

        let result: Vec<AggregatedIngredient> = entries
            .into_iter()
            .map(|(_, ingredient)| ingredient)
            .collect();

        tracing::debug!(
            lines = line_count,
            items = result.len(),
            "aggregated ingredient lines"
        );

        result
    }

    /// Normalize ingredient name (lowercase, trim whitespace)
    fn normalize_name(name: &str) -> String {
        name.trim().to_lowercase()
    }
}

/// Sums of huge quantities can overflow to infinity
fn finite_or_zero(quantity: f64) -> f64 {
    if quantity.is_finite() {
        quantity
    } else {
        0.0
    }
}

/// Uppercase the first character only: "chicken breast" → "Chicken breast"
fn capitalize_first(name: &str) -> String {
    let mut chars = name.chars();

    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
