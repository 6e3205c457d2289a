use crate::{config::Config, services::pageviews::PageviewsService};

/// 应用程序的共享状态
/// 包含所有服务和配置的引用
#[derive(Clone)]
pub struct AppState {
    /// 应用配置
    pub config: Config,

    /// 上游 pageviews 聚合服务
    pub pageviews_service: PageviewsService,
}
