mod config;

use std::sync::Arc;

use app::{
    component,
    navigation::{ADMIN_CATALOG, STANDARD_CATALOG, UTILITY_NAV_ITEMS, validate},
    shell,
    types::AppState,
};
use axum::{Router, http::StatusCode, response::Json, routing::get};
use dotenvy::dotenv;
use leptos::logging;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes as _, generate_route_list};
use serde_json::json;

use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

// Health check handler
async fn health_handler() -> Result<Json<serde_json::Value>, StatusCode> {
    Ok(Json(json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "service": "tracker",
        "version": env!("CARGO_PKG_VERSION")
    })))
}

/// Validates the built-in navigation catalogs and logs the outcome.
///
/// Returns the number of catalogs that failed validation.
fn check_catalogs() -> usize {
    let catalogs = [
        ("standard", STANDARD_CATALOG.main),
        ("admin", ADMIN_CATALOG.main),
        ("utility", &UTILITY_NAV_ITEMS[..]),
    ];

    catalogs
        .into_iter()
        .filter(|(name, items)| match validate(items) {
            Ok(()) => {
                tracing::debug!(catalog = name, entries = items.len(), "Navigation catalog is valid");
                false
            }
            Err(err) => {
                tracing::error!(catalog = name, error = %err, "Navigation catalog is invalid");
                true
            }
        })
        .count()
}

#[tokio::main]
async fn main() {
    let tracing_level = if cfg!(debug_assertions) {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::fmt()
        .with_file(true)
        .with_line_number(true)
        .with_max_level(tracing_level)
        .init();

    let env_result = dotenv();
    if env_result.is_err() {
        logging::warn!("There is no corresponding .env file");
    }

    let leptos_options = match config::load_site_options() {
        Ok(options) => options,
        Err(err) => {
            logging::error!("{}", err);
            return;
        }
    };

    let invalid = check_catalogs();
    if invalid > 0 {
        tracing::warn!(invalid, "Serving with invalid navigation catalogs");
    }

    let identity = config::identity_from_env();
    match &identity {
        Some(identity) => tracing::info!(
            user = %identity.name,
            admin = identity.is_admin(),
            "Serving configured identity"
        ),
        None => tracing::info!("No identity configured; header will offer \"Log in\""),
    }

    let addr = leptos_options.site_addr;
    let site_root = leptos_options.site_root.to_string();
    let routes = generate_route_list(component);

    let app_state = AppState {
        identity: identity.map(Arc::new),
        leptos_options: Arc::new(leptos_options.clone()),
    };

    let app = Router::new()
        .leptos_routes_with_context(
            &app_state,
            routes,
            {
                let app_state = app_state.clone();
                move || provide_context(app_state.clone())
            },
            {
                let leptos_options = leptos_options.clone();
                move || shell(leptos_options.clone())
            },
        )
        .route("/health", get(health_handler))
        .nest_service("/static", ServeDir::new(site_root))
        .layer(
            tower::ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new()),
        )
        .fallback(leptos_axum::file_and_error_handler::<AppState, _>(shell))
        .with_state(app_state);

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(list) => list,
        Err(err) => {
            logging::error!("Failed to bind tcp listener to {}: {}", &addr, err);
            return;
        }
    };
    logging::log!("Listening on http://{}", &addr);

    match axum::serve(listener, app.into_make_service()).await {
        Ok(()) => {
            logging::log!("Server shutdown gracefully");
        }
        Err(err) => {
            logging::error!("Failed to serve app: {}", err);
        }
    }
}
