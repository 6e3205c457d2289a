use crate::{
    error::{AppError, Result},
    models::pageviews::{TitleDurationQuery, TitleSummary},
    state::AppState,
    utils::date::{parse_date, RangeDuration},
};
use axum::{
    extract::{Path, Query, State},
    response::Json,
    routing::get,
    Router,
};
use std::sync::Arc;
use tracing::debug;

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/:year/:month/:day", get(get_article_views))
}

/// 汇总单个标题在日期范围内的浏览量
/// GET /article-views/:year/:month/:day?title=...&duration=week|month
async fn get_article_views(
    State(state): State<Arc<AppState>>,
    Path((year, month, day)): Path<(String, String, String)>,
    Query(query): Query<TitleDurationQuery>,
) -> Result<Json<TitleSummary>> {
    let title = query
        .title
        .as_deref()
        .filter(|title| !title.is_empty())
        .ok_or_else(|| AppError::validation("Missing required query parameter 'title'."))?;
    let duration = RangeDuration::parse(query.duration.as_deref())?;
    let start = parse_date(&year, &month, &day)?;

    debug!(
        "Summing views for '{}' from {} over {:?}",
        title, start, duration
    );

    let summary = state
        .pageviews_service
        .article_views(title, start, duration)
        .await?;

    Ok(Json(summary))
}
