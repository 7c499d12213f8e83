use super::*;
use tokio::task::JoinHandle;
use tokio_postgres::Client;

/// A single database connection, scoped to one statement.
///
/// [`close`](Session::close) drops the client and waits for the driver to
/// send Terminate and shut the socket. If a session is dropped without
/// closing, the client is still released and the spawned connection task
/// finishes on its own.
pub struct Session {
    client: Option<Client>,
    connection: Option<JoinHandle<()>>,
}

impl Session {
    /// Reported to the server as `application_name` unless the target sets one.
    pub const APPLICATION: &'static str = "logviews";

    pub async fn open(config: &Config) -> Result<Self, DbError> {
        log::debug!("connecting to database");
        let mut target = config
            .url()
            .parse::<tokio_postgres::Config>()
            .map_err(DbError::connecting)?;
        if target.get_application_name().is_none() {
            target.application_name(Self::APPLICATION);
        }
        let tls = tokio_postgres::tls::NoTls;
        let (client, connection) = target.connect(tls).await.map_err(DbError::connecting)?;
        let connection = tokio::spawn(async move {
            if let Err(e) = connection.await {
                log::debug!("connection closed with error: {}", e);
            }
        });
        let session = Self {
            client: Some(client),
            connection: Some(connection),
        };
        session
            .client()?
            .batch_execute("SET client_min_messages TO WARNING")
            .await
            .map_err(DbError::connecting)?;
        Ok(session)
    }
    fn client(&self) -> Result<&Client, DbError> {
        self.client
            .as_ref()
            .ok_or_else(|| DbError::Connection("session already closed".to_string()))
    }
    /// Runs one statement in its own transaction and commits it.
    /// On failure the transaction is dropped, which rolls it back.
    pub async fn execute(&mut self, sql: &str) -> Result<(), DbError> {
        log::debug!("executing {}", sql.trim());
        let client = self
            .client
            .as_mut()
            .ok_or_else(|| DbError::Connection("session already closed".to_string()))?;
        let transaction = client.transaction().await?;
        transaction.batch_execute(sql).await?;
        transaction.commit().await?;
        Ok(())
    }
    /// Releases the client and waits for the connection to finish.
    pub async fn close(mut self) {
        log::debug!("closing database connection");
        drop(self.client.take());
        if let Some(connection) = self.connection.take() {
            if let Err(e) = connection.await {
                log::debug!("connection task ended abnormally: {}", e);
            }
        }
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        drop(self.client.take());
    }
}
