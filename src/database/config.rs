/// Connection target for the news database.
///
/// Accepts anything `tokio_postgres` can parse: either a
/// `key=value` string or a `postgres://` URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    url: String,
}

impl Config {
    /// Environment variable consulted when no target is given explicitly.
    pub const ENV: &'static str = "DB_URL";
    /// Target used when neither a flag nor `DB_URL` is present.
    pub const DEFAULT: &'static str = "host=localhost dbname=news user=vagrant";

    pub fn url(&self) -> &str {
        &self.url
    }
    /// Resolves an explicit target, then `DB_URL`, then [`Config::DEFAULT`].
    pub fn resolve(explicit: Option<String>) -> Self {
        explicit
            .or_else(|| std::env::var(Self::ENV).ok())
            .filter(|url| !url.trim().is_empty())
            .map(Self::from)
            .unwrap_or_default()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from(Self::DEFAULT)
    }
}

impl From<String> for Config {
    fn from(url: String) -> Self {
        Self { url }
    }
}

impl From<&str> for Config {
    fn from(url: &str) -> Self {
        Self::from(url.to_string())
    }
}
