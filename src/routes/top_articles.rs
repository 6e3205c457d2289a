use crate::{
    error::{AppError, Result},
    models::pageviews::{DurationQuery, RankedArticle},
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
    Router::new()
        .route("/:year/:month/:day", get(get_top_articles))
        .route("/:year/:month", get(missing_day))
}

/// 聚合指定日期范围内的热门文章排名
/// GET /top-articles/:year/:month/:day?duration=week|month
async fn get_top_articles(
    State(state): State<Arc<AppState>>,
    Path((year, month, day)): Path<(String, String, String)>,
    Query(query): Query<DurationQuery>,
) -> Result<Json<Vec<RankedArticle>>> {
    let duration = RangeDuration::parse(query.duration.as_deref())?;
    let start = parse_date(&year, &month, &day)?;

    debug!("Aggregating top articles from {} over {:?}", start, duration);

    let ranked = state.pageviews_service.top_articles(start, duration).await?;

    Ok(Json(ranked))
}

/// 缺少 day 段的变体，固定返回 400
async fn missing_day(
    Path((_year, _month)): Path<(String, String)>,
) -> Result<Json<Vec<RankedArticle>>> {
    Err(AppError::validation(
        "Invalid date provided. A day segment is required.",
    ))
}
