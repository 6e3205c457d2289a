use crate::{
    error::{AppError, Result},
    models::pageviews::{MaxViewDay, TitleQuery},
    state::AppState,
    utils::date::parse_date,
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
    Router::new().route("/:year/:month", get(get_max_views_day))
}

/// 查找单个标题在指定月份内浏览量最高的一天
/// GET /max-views-day/:year/:month?title=...
async fn get_max_views_day(
    State(state): State<Arc<AppState>>,
    Path((year, month)): Path<(String, String)>,
    Query(query): Query<TitleQuery>,
) -> Result<Json<MaxViewDay>> {
    let title = query
        .title
        .as_deref()
        .filter(|title| !title.is_empty())
        .ok_or_else(|| AppError::validation("Missing required query parameter 'title'."))?;

    // 该模式固定覆盖整月，从每月1号展开
    let first_of_month = parse_date(&year, &month, "1")?;

    debug!(
        "Finding max views day for '{}' in {}-{}",
        title, year, month
    );

    let max_day = state
        .pageviews_service
        .max_views_day(title, first_of_month)
        .await?;

    Ok(Json(max_day))
}
