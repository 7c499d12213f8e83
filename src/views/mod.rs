//! The derived views and where their SQL comes from.
//!
//! - [`View`] — The three known views, in execution order
//! - [`Resources`] — Directory holding each view's `CREATE VIEW` text
mod resources;
mod view;

pub use resources::*;
pub use view::*;

/// Successful requests joined to the article they fetched.
#[rustfmt::skip]
pub const ARTICLES_OK_LOGS:          &str = "articles_ok_logs";
/// Total article views per author.
#[rustfmt::skip]
pub const AUTHOR_ARTICLE_VIEWS:      &str = "author_article_views";
/// Requests and failed requests per day.
#[rustfmt::skip]
pub const DAILY_HTTP_REQUEST_COUNTS: &str = "daily_http_request_counts";
