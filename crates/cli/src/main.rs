//! # CLI - Folio Interactive Shell
//!
//! A REPL-style front end for the Folio catalog. Loads the data file once,
//! then reads commands from stdin and prints pages or search results to
//! stdout. Works interactively or scripted (pipe commands via stdin).
//!
//! ## Commands
//!
//! ```text
//! I | INITIAL        Page 1 of the records in file order
//! S | SORTED         Page 1 of the records in key order (sorts once)
//! N | NEXT           Next page of the current view
//! P | PREV           Previous page of the current view
//! PAGE n             Page n of the current view
//! F | FIND key       Records whose key shares the first 3 chars of `key`
//! STATS              Print catalog debug info
//! HELP               List commands
//! EXIT / QUIT / ESC  Leave
//! ```
//!
//! ## Configuration
//!
//! ```text
//! FOLIO_DATA_PATH       data file                      (default: "testBase.dat")
//! FOLIO_CAPACITY        max records loaded             (default: 4000)
//! FOLIO_PAGE_SIZE       rows per page                  (default: 20)
//! FOLIO_PAD_TO_CAPACITY pad with empty records         (default: "false")
//! RUST_LOG              log filter, written to stderr  (default: "folio=info,engine=info")
//! ```
//!
//! ## Example
//!
//! ```text
//! $ cargo run -p cli
//! Folio started (records=4000, page_size=20, pages=200, data=testBase.dat)
//! > F abb
//! Records:
//!  Ivanov Ivan     Mr Petr Abbott  ...
//! (1 found)
//! > EXIT
//! bye
//! ```

mod session;

use anyhow::{Context, Result};
use config::CatalogConfig;
use engine::Catalog;
use session::{Flow, Session};
use std::io::{self, BufRead, Write};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Logs go to stderr so piped stdout stays clean.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "folio=info,engine=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = CatalogConfig::from_env().context("invalid configuration")?;
    let mut catalog = Catalog::open(&config)?;

    println!(
        "Folio started (records={}, page_size={}, pages={}, data={})",
        catalog.len(),
        catalog.page_size(),
        catalog.page_count(),
        config.data_path.display()
    );
    println!("Commands: I | S | N | P | PAGE n | F key | STATS | HELP | EXIT");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut session = Session::new();

    write!(out, "> ")?;
    out.flush()?;

    for line in stdin.lock().lines() {
        let line = line?;
        if session.execute(&mut catalog, &line, &mut out)? == Flow::Exit {
            break;
        }

        write!(out, "> ")?;
        out.flush()?;
    }

    tracing::debug!("shell closed");
    Ok(())
}
