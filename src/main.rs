//! # Scorebook Entry Point
//!
//! One process, one query: parse the command line, set up logging, run the
//! requested query, print the result as JSON on stdout.
//!
//! ## Application Flow
//!
//! ```text
//! main()
//!   │
//!   ├─> Initialize tracing (stderr, RUST_LOG aware)
//!   │
//!   ├─> Parse CLI arguments (clap)
//!   │
//!   └─> Run the subcommand:
//!       ├─> Resolve dataset locations (flags > env > config file > defaults)
//!       ├─> Build a QueryEngine (no I/O yet)
//!       └─> Execute the query, fetching datasets on first use
//! ```
//!
//! ## Exit Status
//!
//! Invalid team/batter/venue names are answered with a `{"Message": …}`
//! body and exit status 0, mirroring the service this tool descends from.
//! Only a failed dataset fetch or parse exits non-zero.

#![warn(clippy::all, rust_2018_idioms)]
#![expect(clippy::print_stdout)] // Query results belong on stdout

mod cli;
mod logging;

use anyhow::Result;
use clap::Parser as _;

fn main() -> Result<()> {
    logging::init()?;

    let args = cli::Cli::parse();
    cli::run_command(args)
}
