/// Quantity at which grams and millilitres move up to kilograms and litres
const UPGRADE_THRESHOLD: f64 = 1000.0;

/// Map a unit spelling to its canonical token
///
/// Canonical tokens: g, kg, ml, l, stk (piece), tbsp, tsp, cup.
/// Unknown units come back lowercased and trimmed, never rejected.
pub fn normalize_unit(unit: &str) -> String {
    let normalized_unit = unit.trim().to_lowercase();

    let canonical = match normalized_unit.as_str() {
        // Weight
        "g" | "gram" | "grams" => "g",
        "kg" | "kilo" | "kilogram" | "kilograms" => "kg",

        // Volume
        "ml" | "milliliter" | "milliliters" => "ml",
        "l" | "liter" | "liters" => "l",
        "tbsp" | "tablespoon" | "tablespoons" => "tbsp",
        "tsp" | "teaspoon" | "teaspoons" => "tsp",
        "cup" | "cups" => "cup",

        // Count
        "stk" | "piece" | "pieces" | "pcs" => "stk",

        _ => return normalized_unit,
    };

    canonical.to_owned()
}

/// Re-express a summed quantity in a larger unit once it reaches 1000
///
/// Only g → kg and ml → l are upgraded. Units from different families are
/// never converted into each other.
pub fn upgrade_unit(quantity: f64, unit: &str) -> (f64, String) {
    let unit = normalize_unit(unit);

    if quantity < UPGRADE_THRESHOLD {
        return (quantity, unit);
    }

    let larger = match unit.as_str() {
        "g" => "kg",
        "ml" => "l",
        _ => return (quantity, unit),
    };

    (quantity / UPGRADE_THRESHOLD, larger.to_owned())
}
