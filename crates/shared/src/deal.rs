use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};

#[derive(
    Serialize,
    Deserialize,
    EnumString,
    Display,
    VariantArray,
    AsRefStr,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum StoreSlug {
    Netto,
    Rema,
    Meny,
}

/// A scraped offer as written by the store scrapers.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Deal {
    pub category: String,
    pub original_name: String,
    pub normalized_name: String,
    pub price: f64,
    #[serde(default)]
    pub quantity: Option<String>,
    #[serde(default)]
    pub unit_type: Option<String>,
    #[serde(default)]
    pub price_per_unit: f64,
    #[serde(default)]
    pub is_app_price: bool,
}

/// Content of a `<store>_deals.json` file.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct StoreDeals {
    pub store_name: String,
    pub valid_from: String,
    pub valid_to: String,
    #[serde(default)]
    pub week_number: u32,
    #[serde(default)]
    pub deals: Vec<Deal>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct DealWithStore {
    #[serde(flatten)]
    pub deal: Deal,
    pub store_name: String,
    pub store_slug: StoreSlug,
    pub valid_from: String,
    pub valid_to: String,
    pub week_number: u32,
}

impl DealWithStore {
    pub fn id(&self) -> String {
        format!("{}-{}", self.store_slug, self.deal.normalized_name)
    }
}

impl StoreDeals {
    pub fn with_store(self, store_slug: StoreSlug) -> Vec<DealWithStore> {
        let StoreDeals {
            store_name,
            valid_from,
            valid_to,
            week_number,
            deals,
        } = self;

        deals
            .into_iter()
            .map(|deal| DealWithStore {
                deal,
                store_name: store_name.to_owned(),
                store_slug,
                valid_from: valid_from.to_owned(),
                valid_to: valid_to.to_owned(),
                week_number,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NETTO: &str = r#"{
        "store_name": "Netto",
        "valid_from": "2025-03-15",
        "valid_to": "2025-03-21",
        "week_number": 11,
        "deals": [
            {
                "category": "Mejeri",
                "original_name": "Arla Letmælk 1 L",
                "normalized_name": "letmælk",
                "price": 10.95,
                "quantity": "1",
                "unit_type": "l",
                "price_per_unit": 10.95
            }
        ]
    }"#;

    #[test]
    fn store_deals_enrich_with_store() {
        let file: StoreDeals = serde_json::from_str(NETTO).unwrap();
        let deals = file.with_store(StoreSlug::Netto);

        assert_eq!(deals.len(), 1);
        assert_eq!(deals[0].store_name, "Netto");
        assert_eq!(deals[0].week_number, 11);
        assert!(!deals[0].deal.is_app_price);
        assert_eq!(deals[0].id(), "netto-letmælk");
    }

    #[test]
    fn store_slug_parses_any_case() {
        assert_eq!("REMA".parse::<StoreSlug>().unwrap(), StoreSlug::Rema);
        assert!("lidl".parse::<StoreSlug>().is_err());
    }
}
