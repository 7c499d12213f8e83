//! Creates or removes the news log analysis views.
//!
//! ```text
//! logviews setup
//! logviews clean setup
//! ```

use clap::Parser;
use logviews::*;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let args = Args::parse();
    log(args.level());
    if let Err(e) = run(args).await {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
