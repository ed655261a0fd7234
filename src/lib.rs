//! # Scorebook - Cricket Tournament Query Library
//!
//! Scorebook answers aggregate queries over three cricket-tournament
//! datasets: matches, per-batter career run totals, and ball-by-ball
//! deliveries. Each dataset is fetched at most once per process from a
//! configured URL or file, parsed into typed rows, and cached; every query
//! is a pure computation over the cached rows.
//!
//! ## Quick Start
//!
//! ```no_run
//! use scorebook::config::SourceConfig;
//! use scorebook::engine::QueryEngine;
//!
//! # fn example() -> scorebook::error::Result<()> {
//! let engine = QueryEngine::new(SourceConfig::default());
//!
//! // The first query fetches and caches the matches dataset.
//! let teams = engine.teams()?;
//! println!("{} teams", teams.teams.len());
//!
//! // Later queries over the same dataset reuse the cached rows.
//! let record = engine.team_record("Mumbai Indians")?;
//! println!("{} won, {} titles", record.won, record.titles);
//! # Ok(())
//! # }
//! ```
//!
//! ## Core Modules
//!
//! - [`engine`]: the query surface, one method per supported question
//! - [`queries`]: the pure aggregation functions behind the engine
//! - [`data`]: dataset fetch, CSV parsing, and the load-once cache
//! - [`config`]: dataset locations and their resolution order
//! - [`error`]: error types and handling utilities
//!
//! ## Key Concepts
//!
//! ### Load-Once Caching
//!
//! [`data::DataProvider`] holds each dataset behind its own lock and loads
//! it on the first accessor call. There is no reload, no invalidation, and
//! no teardown: once loaded, a dataset is immutable for the life of the
//! process, so everything downstream can share it as a plain `Arc`.
//!
//! ### Queries Are Pure Functions
//!
//! The aggregation logic in [`queries`] never performs I/O and never sees
//! the provider. Each function takes row slices and returns a result
//! struct or mapping, so the whole query layer is testable with inline row
//! fixtures:
//!
//! ```
//! use scorebook::data::BatterRunRow;
//! use scorebook::queries::batter_rankings;
//!
//! let totals = vec![
//!     BatterRunRow { batter: "V Kohli".to_owned(), total_runs: 6634 },
//!     BatterRunRow { batter: "S Dhawan".to_owned(), total_runs: 6244 },
//! ];
//! let rankings = batter_rankings(&totals);
//! assert_eq!(rankings[0].batter, "V Kohli");
//! ```
//!
//! ### Two Kinds of Failure
//!
//! Every fallible operation returns [`error::Result`]. A bad team or
//! batter name is [`error::ScorebookError::InvalidInput`] and carries the
//! caller-facing message; a failed dataset fetch or parse is
//! [`error::ScorebookError::DataUnavailable`] and fails the whole call.
//! Nothing in between: there are no partial results.

#![warn(clippy::all, rust_2018_idioms)]
// Uncomment to see which items need documentation:
// #![warn(missing_docs)]

pub mod config;
pub mod data;
pub mod engine;
pub mod error;
pub mod queries;

pub use engine::QueryEngine;
