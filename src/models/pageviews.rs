use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// 上游 API 返回的单篇文章及其当日浏览量
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ArticleViews {
    pub article: String,
    pub views: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rank: Option<u32>,
}

/// 上游 pageviews API 的响应体
/// 第一个结果项的 articles 列表才是当日数据
#[derive(Debug, Deserialize)]
pub struct PageviewsResponse {
    pub items: Vec<PageviewsItem>,
}

#[derive(Debug, Deserialize)]
pub struct PageviewsItem {
    pub articles: Vec<ArticleViews>,
}

/// 聚合后的文章排名条目，按总浏览量降序排列
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RankedArticle {
    pub article: String,
    pub views: u64,
}

/// 单个标题在日期范围内的浏览量汇总
/// 标题从未出现时 totalViews 为 0，不视为错误
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TitleSummary {
    pub title: String,
    pub total_views: u64,
}

/// 单个标题在一个月内浏览量最高的一天
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MaxViewDay {
    pub title: String,
    pub most_views_date: NaiveDate,
    pub views: u64,
}

/// top-articles 的查询参数
#[derive(Debug, Deserialize)]
pub struct DurationQuery {
    pub duration: Option<String>,
}

/// article-views 的查询参数
#[derive(Debug, Deserialize)]
pub struct TitleDurationQuery {
    pub title: Option<String>,
    pub duration: Option<String>,
}

/// max-views-day 的查询参数
#[derive(Debug, Deserialize)]
pub struct TitleQuery {
    pub title: Option<String>,
}
