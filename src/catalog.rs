use std::path::PathBuf;
use std::str::FromStr;
use std::sync::LazyLock;

use foodplan_shared::{DealWithStore, StoreDeals, StoreSlug};
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize};
use strum::{EnumString, VariantArray};

static DATE_FOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").unwrap());

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("No deals data available. The sale directory is empty or does not exist.")]
    NoData,

    #[error("No deals found for the specified criteria.")]
    NoDeals,

    #[error("Unknown store: {0}")]
    UnknownStore(String),

    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Clone, Copy, EnumString, PartialEq, Eq)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum SortBy {
    Price,
    PricePerUnit,
    Name,
}

#[derive(Debug, Clone, Copy, Default, EnumString, PartialEq, Eq)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

/// Filters accepted by the deals listing, named as the web client sends them
///
/// Blank values and unknown sort options are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DealsQuery {
    pub store: Option<String>,
    pub category: Option<String>,
    pub search: Option<String>,
    #[serde(rename = "sortBy", default, deserialize_with = "optional_choice")]
    pub sort_by: Option<SortBy>,
    #[serde(rename = "sortOrder", default, deserialize_with = "choice_or_default")]
    pub sort_order: SortOrder,
}

fn optional_choice<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;

    Ok(raw.and_then(|value| value.trim().parse().ok()))
}

fn choice_or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr + Default,
{
    optional_choice(deserializer).map(Option::unwrap_or_default)
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|value| !value.is_empty())
}

#[derive(Debug, Clone, Serialize)]
pub struct DealsPage {
    pub deals: Vec<DealWithStore>,
    pub total_count: usize,
    pub stores: Vec<String>,
    pub categories: Vec<String>,
    pub latest_date: String,
}

#[derive(Debug, Clone)]
pub struct LoadedDeals {
    pub date: String,
    pub deals: Vec<DealWithStore>,
    /// Display names of the stores that had a deals file
    pub stores: Vec<String>,
}

/// Read-only view over the scraped deals on disk
///
/// Layout: `<sale_dir>/<YYYY-MM-DD>/<store>_deals.json`. Only the most recent
/// date folder is ever read.
#[derive(Debug, Clone)]
pub struct DealsCatalog {
    sale_dir: PathBuf,
}

impl DealsCatalog {
    pub fn new(sale_dir: impl Into<PathBuf>) -> Self {
        Self {
            sale_dir: sale_dir.into(),
        }
    }

    pub async fn latest_date_folder(&self) -> Result<Option<String>, CatalogError> {
        if !tokio::fs::try_exists(&self.sale_dir).await.unwrap_or(false) {
            tracing::warn!(sale_dir = %self.sale_dir.display(), "sale directory does not exist");
            return Ok(None);
        }

        let io_error = |source| CatalogError::Io {
            path: self.sale_dir.clone(),
            source,
        };

        let mut entries = tokio::fs::read_dir(&self.sale_dir).await.map_err(io_error)?;
        let mut latest: Option<String> = None;

        while let Some(entry) = entries.next_entry().await.map_err(io_error)? {
            let is_dir = entry
                .file_type()
                .await
                .map(|file_type| file_type.is_dir())
                .unwrap_or(false);
            let Ok(name) = entry.file_name().into_string() else {
                continue;
            };

            if is_dir && DATE_FOLDER.is_match(&name) && latest.as_ref().is_none_or(|l| &name > l) {
                latest = Some(name);
            }
        }

        Ok(latest)
    }

    /// Load every store's deals from the latest date folder
    ///
    /// Store files that are missing or unreadable are skipped.
    pub async fn load(&self, store: Option<StoreSlug>) -> Result<LoadedDeals, CatalogError> {
        let date = self
            .latest_date_folder()
            .await?
            .ok_or(CatalogError::NoData)?;

        let stores: Vec<StoreSlug> = match store {
            Some(store) => vec![store],
            None => StoreSlug::VARIANTS.to_vec(),
        };

        let mut loaded = LoadedDeals {
            date,
            deals: Vec::new(),
            stores: Vec::new(),
        };

        for store in stores {
            let Some(file) = self.read_store_deals(&loaded.date, store).await else {
                continue;
            };

            loaded.stores.push(file.store_name.to_owned());
            loaded.deals.extend(file.with_store(store));
        }

        if loaded.deals.is_empty() {
            return Err(CatalogError::NoDeals);
        }

        tracing::debug!(
            date = loaded.date.as_str(),
            deals = loaded.deals.len(),
            stores = loaded.stores.len(),
            "deals loaded"
        );

        Ok(loaded)
    }

    /// Filter and sort the latest deals
    ///
    /// Categories are listed over all loaded deals, not just the filtered ones.
    pub async fn query(&self, query: &DealsQuery) -> Result<DealsPage, CatalogError> {
        let store = match non_blank(query.store.as_deref()) {
            Some(store) => Some(
                store
                    .parse::<StoreSlug>()
                    .map_err(|_| CatalogError::UnknownStore(store.to_owned()))?,
            ),
            None => None,
        };

        let loaded = self.load(store).await?;

        let mut categories: Vec<String> = loaded
            .deals
            .iter()
            .map(|deal| deal.deal.category.to_owned())
            .collect();
        categories.sort();
        categories.dedup();

        let category = non_blank(query.category.as_deref()).map(str::to_lowercase);
        let search = non_blank(query.search.as_deref()).map(str::to_lowercase);

        let mut deals: Vec<DealWithStore> = loaded
            .deals
            .into_iter()
            .filter(|deal| {
                category
                    .as_ref()
                    .is_none_or(|category| &deal.deal.category.to_lowercase() == category)
            })
            .filter(|deal| {
                search.as_ref().is_none_or(|search| {
                    deal.deal.normalized_name.to_lowercase().contains(search)
                        || deal.deal.original_name.to_lowercase().contains(search)
                })
            })
            .collect();

        if let Some(sort_by) = query.sort_by {
            deals.sort_by(|a, b| {
                let ordering = match sort_by {
                    SortBy::Price => a.deal.price.total_cmp(&b.deal.price),
                    SortBy::PricePerUnit => a.deal.price_per_unit.total_cmp(&b.deal.price_per_unit),
                    SortBy::Name => a.deal.normalized_name.cmp(&b.deal.normalized_name),
                };

                match query.sort_order {
                    SortOrder::Asc => ordering,
                    SortOrder::Desc => ordering.reverse(),
                }
            });
        }

        Ok(DealsPage {
            total_count: deals.len(),
            deals,
            stores: loaded.stores,
            categories,
            latest_date: loaded.date,
        })
    }

    async fn read_store_deals(&self, date: &str, store: StoreSlug) -> Option<StoreDeals> {
        let path = self
            .sale_dir
            .join(date)
            .join(format!("{store}_deals.json"));

        let content = match tokio::fs::read_to_string(&path).await {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!(path = %path.display(), err = %err, "deals file not readable");
                return None;
            }
        };

        match serde_json::from_str(&content) {
            Ok(file) => Some(file),
            Err(err) => {
                tracing::warn!(path = %path.display(), err = %err, "deals file is not valid");
                None
            }
        }
    }
}
