use axum::{
    http::Method,
    routing::{get, Router},
};
use std::sync::Arc;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;

use crate::state::AppState;

/// 构建应用路由
pub fn app(state: Arc<AppState>) -> Router {
    // 配置 CORS - 只读公共 API，允许任意来源
    let cors = CorsLayer::new()
        .allow_methods([Method::GET])
        .allow_headers(Any)
        .allow_origin(Any);

    Router::new()
        .route("/", get(greeting))
        .nest("/top-articles", routes::top_articles::router())
        .nest("/article-views", routes::article_views::router())
        .nest("/max-views-day", routes::max_views_day::router())
        .layer(cors)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn greeting() -> &'static str {
    "Wikiview is running!"
}
