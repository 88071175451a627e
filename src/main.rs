//! Pokemon Review API Server
//!
//! A CRUD HTTP/JSON API over a small relational domain: pokemon, their
//! categories and owners, the owners' countries, and reviews by reviewers.
//! Uses hexagonal (ports & adapters) architecture for clean separation of
//! concerns.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{routing::get, Json, Router};
use sea_orm::Database;
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod config;
mod domain;
mod entity;
mod error;
mod handlers;

#[cfg(test)]
mod test_utils;


use adapters::{
    PostgresCategoryRepository, PostgresCountryRepository, PostgresOwnerRepository,
    PostgresPokemonRepository, PostgresReviewRepository, PostgresReviewerRepository,
};
use config::Config;
use domain::ports::{
    CategoryRepository, CountryRepository, OwnerRepository, PokemonRepository, ReviewRepository,
    ReviewerRepository,
};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub categories: Arc<dyn CategoryRepository>,
    pub countries: Arc<dyn CountryRepository>,
    pub owners: Arc<dyn OwnerRepository>,
    pub pokemon: Arc<dyn PokemonRepository>,
    pub reviewers: Arc<dyn ReviewerRepository>,
    pub reviews: Arc<dyn ReviewRepository>,
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Build the full application router over the given state
pub fn router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health))
        // Pokemon
        .route(
            "/api/pokemon",
            get(handlers::list_pokemon).post(handlers::create_pokemon),
        )
        .route(
            "/api/pokemon/:id",
            get(handlers::get_pokemon)
                .put(handlers::update_pokemon)
                .delete(handlers::delete_pokemon),
        )
        .route("/api/pokemon/:id/rating", get(handlers::get_pokemon_rating))
        // Category
        .route(
            "/api/category",
            get(handlers::list_categories).post(handlers::create_category),
        )
        .route(
            "/api/category/:id",
            get(handlers::get_category)
                .put(handlers::update_category)
                .delete(handlers::delete_category),
        )
        .route(
            "/api/category/:id/pokemon",
            get(handlers::list_pokemon_by_category),
        )
        // Country
        .route(
            "/api/country",
            get(handlers::list_countries).post(handlers::create_country),
        )
        .route(
            "/api/country/:id",
            get(handlers::get_country)
                .put(handlers::update_country)
                .delete(handlers::delete_country),
        )
        .route(
            "/api/country/:id/owners",
            get(handlers::list_owners_from_country),
        )
        .route(
            "/api/country/owners/:owner_id",
            get(handlers::get_country_of_owner),
        )
        // Owner
        .route(
            "/api/owner",
            get(handlers::list_owners).post(handlers::create_owner),
        )
        .route(
            "/api/owner/:id",
            get(handlers::get_owner)
                .put(handlers::update_owner)
                .delete(handlers::delete_owner),
        )
        .route("/api/owner/:id/pokemon", get(handlers::list_pokemon_by_owner))
        .route(
            "/api/owner/pokemon/:pokemon_id",
            get(handlers::list_owners_of_pokemon),
        )
        // Reviewer
        .route(
            "/api/reviewer",
            get(handlers::list_reviewers).post(handlers::create_reviewer),
        )
        .route(
            "/api/reviewer/:id",
            get(handlers::get_reviewer)
                .put(handlers::update_reviewer)
                .delete(handlers::delete_reviewer),
        )
        .route(
            "/api/reviewer/:id/reviews",
            get(handlers::list_reviews_by_reviewer),
        )
        // Review
        .route(
            "/api/review",
            get(handlers::list_reviews).post(handlers::create_review),
        )
        .route(
            "/api/review/:id",
            get(handlers::get_review)
                .put(handlers::update_review)
                .delete(handlers::delete_review),
        )
        .route(
            "/api/review/pokemon/:pokemon_id",
            get(handlers::list_reviews_of_pokemon),
        )
        // Middleware
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,pokemon_review_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Pokemon Review API...");

    // Load configuration
    let config = Config::from_env();

    // Connect to PostgreSQL
    tracing::info!("Connecting to database...");
    let db = Database::connect(&config.database_url)
        .await
        .expect("Failed to connect to database");
    tracing::info!("Database connected");

    // Create adapters
    let state = AppState {
        categories: Arc::new(PostgresCategoryRepository::new(db.clone())),
        countries: Arc::new(PostgresCountryRepository::new(db.clone())),
        owners: Arc::new(PostgresOwnerRepository::new(db.clone())),
        pokemon: Arc::new(PostgresPokemonRepository::new(db.clone())),
        reviewers: Arc::new(PostgresReviewerRepository::new(db.clone())),
        reviews: Arc::new(PostgresReviewRepository::new(db)),
    };

    let app = router(state);

    // Start server
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
