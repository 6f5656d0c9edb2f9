use chrono::NaiveDate;
use foodplan_shared::{DealWithStore, StorePreference};
use serde::{Deserialize, Serialize};

/// The offer picked for a shopping-list item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DealMatch {
    pub deal_id: String,
    pub price: f64,
}

/// Find the cheapest running deal whose product name contains the ingredient name
///
/// Matching is a case-insensitive substring test against the deal's
/// normalized name. A deal is running when `as_of` falls within its
/// validity window; bounds that are not `YYYY-MM-DD` dates do not restrict.
/// Ties on price keep the deal listed first.
pub fn find_deal_for_ingredient(
    ingredient_name: &str,
    deals: &[DealWithStore],
    preference: StorePreference,
    as_of: NaiveDate,
) -> Option<DealMatch> {
    let needle = ingredient_name.trim().to_lowercase();

    if needle.is_empty() {
        return None;
    }

    deals
        .iter()
        .filter(|deal| preference.accepts(deal.store_slug))
        .filter(|deal| is_running(deal, as_of))
        .filter(|deal| deal.deal.normalized_name.to_lowercase().contains(&needle))
        .min_by(|a, b| a.deal.price.total_cmp(&b.deal.price))
        .map(|deal| DealMatch {
            deal_id: deal.id(),
            price: deal.deal.price,
        })
}

fn is_running(deal: &DealWithStore, as_of: NaiveDate) -> bool {
    let starts = parse_date(&deal.valid_from).is_none_or(|from| from <= as_of);
    let ends = parse_date(&deal.valid_to).is_none_or(|to| as_of <= to);

    starts && ends
}

/// Reads the leading date of "2025-03-15" or "2025-03-15T06:00:00Z"
fn parse_date(value: &str) -> Option<NaiveDate> {
    let date = value.trim().get(..10)?;
    NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()
}
