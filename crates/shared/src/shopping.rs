use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

use crate::deal::StoreSlug;

/// Where a shopping-list item should preferably be bought.
#[derive(
    Serialize,
    Deserialize,
    EnumString,
    Display,
    AsRefStr,
    Default,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum StorePreference {
    Netto,
    Rema,
    Meny,
    #[default]
    Any,
}

impl StorePreference {
    pub fn accepts(&self, store: StoreSlug) -> bool {
        match self {
            StorePreference::Any => true,
            StorePreference::Netto => store == StoreSlug::Netto,
            StorePreference::Rema => store == StoreSlug::Rema,
            StorePreference::Meny => store == StoreSlug::Meny,
        }
    }
}
