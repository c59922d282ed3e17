//! # starsweep
//!
//! Resumable sequential sweeper for the SIMBAD astronomical databank.
//!
//! ## Design Philosophy
//!
//! starsweep is designed to be:
//! - **Resumable** - A persisted checkpoint survives restarts, so long sweeps pick up where they stopped
//! - **Sequential** - One request in flight at a time, gentle on a shared public service
//! - **Deterministic** - Output rows are sorted and written once, independent of visit order
//! - **Library-first** - No CLI or UI, purely a Rust crate for embedding
//!
//! ## Quick Start
//!
//! ```no_run
//! use starsweep::{CatalogSweeper, Config, SweepConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config {
//!         sweep: SweepConfig {
//!             star_count: 500,
//!             ..Default::default()
//!         },
//!         ..Default::default()
//!     };
//!
//!     let sweeper = CatalogSweeper::new(config)?;
//!     let report = sweeper.run().await?;
//!     println!(
//!         "resolved {} of {} objects into {:?}",
//!         report.resolved, report.attempted, report.output_path
//!     );
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]

/// Sweep cursor persistence
pub mod checkpoint;
/// Configuration types
pub mod config;
/// Persistent object cache
pub mod databank;
/// Error types
pub mod error;
/// Object resolution against the catalog service
pub mod resolver;
/// Core sweep orchestration
pub mod sweep;
/// Catalog identifiers and records
pub mod types;

// Re-export commonly used types
pub use checkpoint::{CheckpointStore, SweepCheckpoint};
pub use config::{Config, SimbadConfig, SweepConfig};
pub use databank::DataBank;
pub use error::{CheckpointError, DataBankError, Error, ResolveError, Result, RowError};
pub use resolver::{ObjectResolver, SimbadResolver};
pub use sweep::{CatalogSweeper, SweepReport};
pub use types::{HdNumber, StarRecord};
