use super::*;
use const_format::concatcp;

/// One of the three derived views this tool manages.
///
/// Order matters: [`View::all`] is the sequence every setup and clean
/// walks through, and later views may depend on earlier ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    ArticlesOkLogs,
    AuthorArticleViews,
    DailyHttpRequestCounts,
}

impl View {
    /// All views in execution order.
    pub const fn all() -> [Self; 3] {
        [
            Self::ArticlesOkLogs,
            Self::AuthorArticleViews,
            Self::DailyHttpRequestCounts,
        ]
    }
    /// Name of the view in the database.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::ArticlesOkLogs => ARTICLES_OK_LOGS,
            Self::AuthorArticleViews => AUTHOR_ARTICLE_VIEWS,
            Self::DailyHttpRequestCounts => DAILY_HTTP_REQUEST_COUNTS,
        }
    }
    /// `DROP VIEW ... CASCADE;` statement for this view.
    pub fn drops(&self) -> &'static str {
        match self {
            Self::ArticlesOkLogs => concatcp!("DROP VIEW ", ARTICLES_OK_LOGS, " CASCADE;"),
            Self::AuthorArticleViews => concatcp!("DROP VIEW ", AUTHOR_ARTICLE_VIEWS, " CASCADE;"),
            Self::DailyHttpRequestCounts => {
                concatcp!("DROP VIEW ", DAILY_HTTP_REQUEST_COUNTS, " CASCADE;")
            }
        }
    }
    /// File name of the creation resource for this view.
    pub fn resource(&self) -> &'static str {
        match self {
            Self::ArticlesOkLogs => concatcp!("create_view_", ARTICLES_OK_LOGS, ".sql"),
            Self::AuthorArticleViews => concatcp!("create_view_", AUTHOR_ARTICLE_VIEWS, ".sql"),
            Self::DailyHttpRequestCounts => {
                concatcp!("create_view_", DAILY_HTTP_REQUEST_COUNTS, ".sql")
            }
        }
    }
}

impl std::fmt::Display for View {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_order() {
        let names = View::all().map(|v| v.name());
        assert_eq!(
            names,
            [
                "articles_ok_logs",
                "author_article_views",
                "daily_http_request_counts"
            ]
        );
    }

    #[test]
    fn drop_statements_cascade() {
        assert_eq!(
            View::ArticlesOkLogs.drops(),
            "DROP VIEW articles_ok_logs CASCADE;"
        );
        assert_eq!(
            View::AuthorArticleViews.drops(),
            "DROP VIEW author_article_views CASCADE;"
        );
        assert_eq!(
            View::DailyHttpRequestCounts.drops(),
            "DROP VIEW daily_http_request_counts CASCADE;"
        );
    }

    #[test]
    fn resource_names() {
        assert_eq!(
            View::DailyHttpRequestCounts.resource(),
            "create_view_daily_http_request_counts.sql"
        );
    }
}
