use super::*;

/// [`Execute`] against a live PostgreSQL server.
///
/// Every statement opens its own [`Session`]; nothing is pooled or
/// shared between statements.
#[derive(Debug, Clone)]
pub struct Postgres(Config);

impl From<Config> for Postgres {
    fn from(config: Config) -> Self {
        Self(config)
    }
}

#[async_trait::async_trait]
impl Execute for Postgres {
    async fn execute(&self, sql: &str) -> Result<(), DbError> {
        let mut session = Session::open(&self.0).await?;
        let result = session.execute(sql).await;
        session.close().await;
        result
    }
}
