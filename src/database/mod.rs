//! Scoped PostgreSQL execution for view DDL.
//!
//! - [`Config`] — Connection target
//! - [`DbError`] — Database failures classified at the driver boundary
//! - [`Session`] — One connection, closed when dropped
//! - [`Execute`] — Single-statement execution and the create/delete policies
//! - [`Outcome`] — Applied, tolerated, or ignored
//! - [`Postgres`] — [`Execute`] backed by a fresh [`Session`] per statement
mod config;
mod error;
mod execute;
mod outcome;
mod postgres;
mod session;

pub use config::*;
pub use error::*;
pub use execute::*;
pub use outcome::*;
pub use postgres::*;
pub use session::*;

/// PostgreSQL error type alias.
pub type PgErr = tokio_postgres::Error;
