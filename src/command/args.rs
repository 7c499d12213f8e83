use crate::Config;
use clap::Parser;
use std::path::PathBuf;

/// Creates or removes the news log analysis views.
///
/// Run `logviews setup` before using the analysis queries.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Commands to run in order: setup, clean
    #[arg(required = true, num_args = 1.., value_name = "COMMAND")]
    pub commands: Vec<String>,
    /// Connection target; falls back to DB_URL, then a local news database
    #[arg(long, value_name = "CONN")]
    pub database: Option<String>,
    /// Directory holding the create_view_<name>.sql resources
    #[arg(long, value_name = "DIR", default_value = "sql")]
    pub sql_dir: PathBuf,
    /// Log connections and statements
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn config(&self) -> Config {
        Config::resolve(self.database.clone())
    }
    pub fn level(&self) -> log::LevelFilter {
        match self.verbose {
            true => log::LevelFilter::Debug,
            false => log::LevelFilter::Info,
        }
    }
}
