use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::catalog::DealsCatalog;
use crate::config::Config;

mod deals;
mod health;
mod shopping_list;

pub use deals::list_deals;
pub use health::health;
pub use shopping_list::{GenerateShoppingListInput, post_generate_shopping_list};

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub catalog: DealsCatalog,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let catalog = DealsCatalog::new(config.deals.sale_dir.clone());

        Self { config, catalog }
    }
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        // Health check endpoint
        .route("/health", get(health))
        .route("/api/deals", get(list_deals))
        .route(
            "/api/shopping-lists/generate",
            post(post_generate_shopping_list),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
