use super::*;

/// Executes exactly one SQL statement against the database.
///
/// Implementors decide how a statement reaches the server and classify
/// failures into [`DbError`]. The provided [`create`](Execute::create)
/// and [`delete`](Execute::delete) methods layer the tolerance policies
/// on top of that single primitive.
#[async_trait::async_trait]
pub trait Execute: Send + Sync {
    /// Runs `sql` and commits it.
    async fn execute(&self, sql: &str) -> Result<(), DbError>;
    /// Creates a view. A statement error (already exists, missing
    /// relation) is reported as a warning and the run continues.
    async fn create(&self, sql: &str) -> Result<Outcome, DbError> {
        let outcome = match self.execute(sql).await {
            Ok(()) => Outcome::Applied,
            Err(DbError::Statement(e)) => Outcome::Tolerated(e),
            Err(e) => return Err(e),
        };
        outcome.report();
        Ok(outcome)
    }
    /// Deletes a view. A statement error (does not exist) is ignored,
    /// so repeated deletes converge without noise.
    async fn delete(&self, sql: &str) -> Result<Outcome, DbError> {
        let outcome = match self.execute(sql).await {
            Ok(()) => Outcome::Applied,
            Err(DbError::Statement(e)) => Outcome::Ignored(e),
            Err(e) => return Err(e),
        };
        outcome.report();
        Ok(outcome)
    }
}
