pub mod article_views;
pub mod max_views_day;
pub mod top_articles;
