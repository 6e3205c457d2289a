use crate::{
    config::Config,
    error::{AppError, Result},
    models::pageviews::{ArticleViews, MaxViewDay, PageviewsResponse, RankedArticle, TitleSummary},
    utils::date::{expand_range, RangeDuration},
};
use chrono::NaiveDate;
use futures::{stream, StreamExt, TryStreamExt};
use reqwest::Client;
use std::collections::HashMap;
use std::time::Duration;
use tracing::{debug, error};

/// 上游 pageviews API 的抓取与聚合服务
#[derive(Clone)]
pub struct PageviewsService {
    http_client: Client,
    base_url: String,
    max_concurrent_fetches: usize,
}

impl PageviewsService {
    pub fn new(config: &Config) -> Result<Self> {
        let http_client = Client::builder()
            .user_agent(&config.pageviews_user_agent)
            .timeout(Duration::from_secs(config.http_timeout_secs))
            .build()
            .map_err(|e| AppError::internal(&format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http_client,
            base_url: config.pageviews_api_url.trim_end_matches('/').to_string(),
            max_concurrent_fetches: config.max_concurrent_fetches.max(1),
        })
    }

    /// 聚合日期范围内的热门文章排名
    pub async fn top_articles(
        &self,
        start: NaiveDate,
        duration: RangeDuration,
    ) -> Result<Vec<RankedArticle>> {
        let days = expand_range(start, duration);
        let daily = self.fetch_range(&days).await?;

        Ok(rank_by_total_views(&daily))
    }

    /// 汇总单个标题在日期范围内的浏览量
    /// 标题从未上榜时返回 0，不是错误
    pub async fn article_views(
        &self,
        title: &str,
        start: NaiveDate,
        duration: RangeDuration,
    ) -> Result<TitleSummary> {
        let days = expand_range(start, duration);
        let daily = self.fetch_range(&days).await?;

        Ok(TitleSummary {
            title: title.to_string(),
            total_views: total_views_for_title(&daily, title),
        })
    }

    /// 查找单个标题在一个月内浏览量最高的一天
    /// 与 article_views 不同：整月都未上榜返回 NotFound
    pub async fn max_views_day(
        &self,
        title: &str,
        first_of_month: NaiveDate,
    ) -> Result<MaxViewDay> {
        let days = expand_range(first_of_month, RangeDuration::Month);
        let daily = self.fetch_range(&days).await?;

        max_views_for_title(&days, &daily, title)
            .map(|(date, views)| MaxViewDay {
                title: title.to_string(),
                most_views_date: date,
                views,
            })
            .ok_or_else(|| {
                AppError::not_found(&format!(
                    "Article '{}' not found in the top articles for the requested month",
                    title
                ))
            })
    }

    /// 并发抓取整个日期范围，任何一天失败则整体失败
    /// buffered 保持与输入相同的顺序，结果按天与 days 一一对应
    async fn fetch_range(&self, days: &[NaiveDate]) -> Result<Vec<Vec<ArticleViews>>> {
        stream::iter(days.iter().copied().map(|day| self.fetch_day(day)))
            .buffered(self.max_concurrent_fetches)
            .try_collect()
            .await
    }

    /// 抓取某一天的热门文章列表
    async fn fetch_day(&self, date: NaiveDate) -> Result<Vec<ArticleViews>> {
        let url = format!("{}/{}", self.base_url, date.format("%Y/%m/%d"));
        debug!("Fetching top articles from {}", url);

        let response = self.http_client.get(&url).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            error!("Upstream returned {} for {}: {}", status, url, body);
            return Err(AppError::Upstream(format!(
                "Upstream pageviews API returned {} for {}",
                status, date
            )));
        }

        let body: PageviewsResponse = response.json().await?;

        body.items
            .into_iter()
            .next()
            .map(|item| item.articles)
            .ok_or_else(|| {
                AppError::Upstream(format!(
                    "Upstream response for {} contained no result items",
                    date
                ))
            })
    }
}

/// 按文章累加每天的浏览量并按总量降序排序
/// 平局按文章首次出现的顺序保持稳定
pub fn rank_by_total_views(daily: &[Vec<ArticleViews>]) -> Vec<RankedArticle> {
    let mut totals: Vec<RankedArticle> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for day in daily {
        for entry in day {
            match index.get(entry.article.as_str()) {
                Some(&i) => totals[i].views += entry.views,
                None => {
                    index.insert(entry.article.as_str(), totals.len());
                    totals.push(RankedArticle {
                        article: entry.article.clone(),
                        views: entry.views,
                    });
                }
            }
        }
    }

    totals.sort_by(|a, b| b.views.cmp(&a.views));
    totals
}

/// 单个标题在所有天数上的浏览量之和，未上榜的天计 0
pub fn total_views_for_title(daily: &[Vec<ArticleViews>], title: &str) -> u64 {
    daily
        .iter()
        .map(|day| {
            day.iter()
                .find(|entry| entry.article == title)
                .map_or(0, |entry| entry.views)
        })
        .sum()
}

/// 浏览量严格更大才替换，因此平局保留最早的一天
/// 标题从未出现时返回 None
pub fn max_views_for_title(
    days: &[NaiveDate],
    daily: &[Vec<ArticleViews>],
    title: &str,
) -> Option<(NaiveDate, u64)> {
    let mut best: Option<(NaiveDate, u64)> = None;

    for (date, day) in days.iter().zip(daily) {
        if let Some(entry) = day.iter().find(|entry| entry.article == title) {
            match best {
                Some((_, views)) if entry.views <= views => {}
                _ => best = Some((*date, entry.views)),
            }
        }
    }

    best
}
