use axum::Router;
use leptos::prelude::*;
use leptos_axum::{generate_route_list, LeptosRoutes};
use thiserror::Error;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use crate::app::{shell, App};

#[derive(Error, Debug)]
pub enum ServeError {
    #[error("Couldn't load leptos configuration: {0}")]
    Config(String),
    #[error("Server I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// `RUST_LOG` controls verbosity, defaulting to `info`. `log` records from
/// shared code are bridged in by the subscriber.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

pub fn router(leptos_options: LeptosOptions) -> Router {
    // Generate the list of routes in your Leptos App
    let routes = generate_route_list(App);

    Router::new()
        .leptos_routes(&leptos_options, routes, {
            let leptos_options = leptos_options.clone();
            move || shell(leptos_options.clone())
        })
        .fallback(leptos_axum::file_and_error_handler(shell))
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(leptos_options)
}

pub async fn serve() -> Result<(), ServeError> {
    let conf = get_configuration(None).map_err(|e| ServeError::Config(e.to_string()))?;
    let addr = conf.leptos_options.site_addr;
    let app = router(conf.leptos_options);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("listening on http://{}", &addr);
    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}
