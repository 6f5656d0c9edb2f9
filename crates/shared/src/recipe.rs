use serde::{Deserialize, Serialize};

/// One entry of a recipe's stored ingredient list.
///
/// All three fields are free text. Nothing here is validated; the shopping
/// pipeline decides what a quantity or unit means.
#[derive(Serialize, Deserialize, Default, Clone, Debug, PartialEq)]
pub struct IngredientLine {
    #[serde(default, deserialize_with = "crate::lenient::string")]
    pub name: String,
    #[serde(default, deserialize_with = "crate::lenient::string")]
    pub quantity: String,
    #[serde(default, deserialize_with = "crate::lenient::string")]
    pub unit: String,
}

impl IngredientLine {
    pub fn new(
        name: impl Into<String>,
        quantity: impl Into<String>,
        unit: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            quantity: quantity.into(),
            unit: unit.into(),
        }
    }
}

#[derive(Serialize, Deserialize, Default, Clone, Debug, PartialEq)]
pub struct Recipe {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub ingredients: Option<Vec<IngredientLine>>,
    #[serde(default)]
    pub servings: Option<u32>,
}

impl Recipe {
    pub fn ingredients(&self) -> &[IngredientLine] {
        self.ingredients.as_deref().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ingredient_line_accepts_numeric_quantity() {
        let line: IngredientLine =
            serde_json::from_str(r#"{"name":"Milk","quantity":2.5,"unit":"l"}"#).unwrap();
        assert_eq!(line, IngredientLine::new("Milk", "2.5", "l"));

        let line: IngredientLine =
            serde_json::from_str(r#"{"name":"Eggs","quantity":6,"unit":null}"#).unwrap();
        assert_eq!(line, IngredientLine::new("Eggs", "6", ""));
    }

    #[test]
    fn ingredient_line_missing_fields_are_empty() {
        let line: IngredientLine = serde_json::from_str(r#"{"name":"Salt"}"#).unwrap();
        assert_eq!(line.quantity, "");
        assert_eq!(line.unit, "");
    }

    #[test]
    fn recipe_without_ingredients() {
        let recipe: Recipe =
            serde_json::from_str(r#"{"id":"r1","title":"Toast","ingredients":null}"#).unwrap();
        assert!(recipe.ingredients().is_empty());
    }
}
