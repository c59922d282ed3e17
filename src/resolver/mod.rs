//! Object resolution — the seam between the sweep and the catalog service.
//!
//! [`ObjectResolver`] is the contract the sweep drives: one identifier in, one
//! record (or a recoverable failure) out. [`SimbadResolver`] is the production
//! implementation against the classic SIMBAD `sim-id` endpoint; tests inject
//! their own implementations through
//! [`CatalogSweeper::with_resolver`](crate::CatalogSweeper::with_resolver).

mod parse;
mod simbad;

pub use simbad::SimbadResolver;

use crate::error::ResolveError;
use crate::types::StarRecord;

/// Abstraction over catalog lookups, enabling testability.
///
/// Implementations resolve exactly one identifier per call. Keeping at most
/// one resolution in flight is the caller's job, not the resolver's; an
/// implementation may be shared across tasks.
#[async_trait::async_trait]
pub trait ObjectResolver: Send + Sync {
    /// Resolve a catalog identifier (e.g., `"HD 42"`) to a record.
    ///
    /// # Errors
    /// Every failure mode is a [`ResolveError`]; callers treat all of them as
    /// recoverable and skip the identifier.
    async fn resolve(&self, ident: &str) -> Result<StarRecord, ResolveError>;
}
