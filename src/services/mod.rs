pub mod pageviews;

// 重新导出常用类型
pub use pageviews::PageviewsService;
