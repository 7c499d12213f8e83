//! Setup and teardown of the derived views used for news log analysis.
//!
//! ## Modules
//!
//! - [`views`] — The three known views and their SQL definitions
//! - [`database`] — Scoped PostgreSQL execution with create/delete tolerance
//! - [`command`] — Command tokens, resolution, and in-order execution
pub mod command;
pub mod database;
pub mod error;
pub mod views;

#[cfg(test)]
mod capture;

pub use command::*;
pub use database::*;
pub use error::*;
pub use views::*;

/// Initialize terminal logging.
/// INFO and below go to stdout, WARN and ERROR to stderr.
pub fn log(level: log::LevelFilter) {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .set_time_level(log::LevelFilter::Off)
        .build();
    simplelog::TermLogger::init(
        level,
        config,
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )
    .unwrap_or_else(|_| eprintln!("logger already initialized"));
}

/// Resolves the requested commands, then executes them in order.
/// Nothing touches the database unless every token is recognized.
pub async fn run(args: Args) -> Result<(), Error> {
    let plan = Plan::try_from(args.commands.as_slice())?;
    let postgres = Postgres::from(args.config());
    let resources = Resources::from(args.sql_dir.clone());
    plan.run(&postgres, &resources).await.map(|_| ())
}
