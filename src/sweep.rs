//! Sequential catalog sweep orchestration.
//!
//! [`CatalogSweeper`] drives the full pipeline for one sweep:
//!
//! 1. Resume the cursor from the persisted checkpoint (or start fresh)
//! 2. Resolve each catalog number in ascending order, one request in flight
//! 3. Accumulate one output row per resolved object, in memory
//! 4. Advance and persist the checkpoint after every successful resolution
//! 5. Sort the accumulated rows and write the output file exactly once

use std::path::PathBuf;
use std::sync::Arc;

use crate::checkpoint::CheckpointStore;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::resolver::{ObjectResolver, SimbadResolver};
use crate::types::HdNumber;

/// Outcome counts and output location from one [`CatalogSweeper::run`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SweepReport {
    /// Catalog numbers this run sent to the resolver.
    pub attempted: u32,
    /// Resolutions that produced an output row.
    pub resolved: u32,
    /// Resolutions that failed (network error, bad status, unknown object).
    pub failed: u32,
    /// Resolved records whose row could not be serialized and was dropped.
    pub rows_dropped: u32,
    /// Rows present in the written output file.
    pub rows_written: u32,
    /// Where the output landed, or `None` when the sweep had nothing left
    /// to do and the existing output was left alone.
    pub output_path: Option<PathBuf>,
}

/// Mutable state for one run, owned by the loop rather than shared.
#[derive(Default)]
struct SweepContext {
    rows: Vec<String>,
    attempted: u32,
    resolved: u32,
    failed: u32,
    rows_dropped: u32,
}

/// Sweeps a contiguous range of HD catalog numbers through a resolver and
/// writes the collected rows as a sorted CSV file.
///
/// The sweeper is resumable: the checkpoint stores the next number to
/// request, so a restarted process picks up where the last successful
/// resolution left off. Failed numbers are skipped within a run and only
/// come back if the process stops before a later success moves the cursor
/// past them.
pub struct CatalogSweeper {
    config: Config,
    resolver: Arc<dyn ObjectResolver>,
    checkpoints: CheckpointStore,
}

impl std::fmt::Debug for CatalogSweeper {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogSweeper")
            .field("config", &self.config)
            .field("checkpoints", &self.checkpoints)
            .finish_non_exhaustive()
    }
}

impl CatalogSweeper {
    /// Create a sweeper that resolves objects against the configured SIMBAD
    /// mirror.
    pub fn new(config: Config) -> Result<Self> {
        let resolver = Arc::new(SimbadResolver::new(&config.simbad)?);
        Self::with_resolver(config, resolver)
    }

    /// Create a sweeper with a caller-supplied resolver.
    pub fn with_resolver(config: Config, resolver: Arc<dyn ObjectResolver>) -> Result<Self> {
        if config.sweep.star_count == 0 {
            return Err(Error::Config {
                message: "star count must be at least 1".to_string(),
                key: Some("sweep.star_count".to_string()),
            });
        }
        let checkpoints = CheckpointStore::new(config.sweep.checkpoint_path.clone());
        Ok(Self {
            config,
            resolver,
            checkpoints,
        })
    }

    /// Run the sweep to completion and report what happened.
    ///
    /// Individual resolution failures and checkpoint write failures are
    /// logged and do not abort the run. A corrupt checkpoint file, or a
    /// failure to write the final output, does.
    pub async fn run(&self) -> Result<SweepReport> {
        // Phase 1: resume or initialize the cursor. When a persisted bound
        // disagrees with configuration the persisted one wins, so a restarted
        // sweep finishes the range it started.
        let mut checkpoint = self.checkpoints.load_or_init(self.config.sweep.star_count)?;
        if checkpoint.star_count != self.config.sweep.star_count {
            tracing::warn!(
                persisted = checkpoint.star_count,
                configured = self.config.sweep.star_count,
                "checkpoint star count differs from configuration; using the persisted value"
            );
        }
        if checkpoint.is_complete() {
            tracing::info!(
                star_count = checkpoint.star_count,
                "sweep already complete; output left untouched"
            );
            return Ok(SweepReport {
                attempted: 0,
                resolved: 0,
                failed: 0,
                rows_dropped: 0,
                rows_written: 0,
                output_path: None,
            });
        }

        let target = checkpoint.star_count;
        tracing::info!(
            from = checkpoint.next,
            to = target,
            "starting catalog sweep"
        );

        // Phase 2: one resolution in flight at a time, in ascending order.
        let mut ctx = SweepContext::default();
        for number in checkpoint.next..=target {
            if ctx.attempted > 0
                && let Some(delay) = self.config.sweep.request_delay
            {
                tokio::time::sleep(delay).await;
            }
            ctx.attempted += 1;

            let ident = HdNumber::new(number).to_string();
            match self.resolver.resolve(&ident).await {
                Ok(record) => {
                    match record.to_csv_row() {
                        Ok(row) => {
                            ctx.rows.push(row);
                            ctx.resolved += 1;
                        }
                        Err(e) => {
                            tracing::warn!(
                                ident = %ident,
                                error = %e,
                                "dropping row for resolved object"
                            );
                            ctx.rows_dropped += 1;
                        }
                    }
                    // The cursor tracks the number we asked about, never the
                    // designation the service answered with.
                    checkpoint.advance_past(number);
                    if let Err(e) = self.checkpoints.persist(&checkpoint) {
                        tracing::error!(
                            path = %self.checkpoints.path().display(),
                            error = %e,
                            "failed to persist checkpoint; sweep continues"
                        );
                    }
                }
                Err(e) => {
                    tracing::warn!(ident = %ident, error = %e, "resolution failed");
                    ctx.failed += 1;
                }
            }

            if self.config.sweep.progress_every > 0
                && ctx.attempted % self.config.sweep.progress_every == 0
            {
                tracing::info!(
                    attempted = ctx.attempted,
                    resolved = ctx.resolved,
                    failed = ctx.failed,
                    "sweep progress"
                );
            }
        }

        // Phase 3: sort and write the output exactly once. Row order is
        // byte order over whole lines, so ties never depend on visit order.
        ctx.rows.sort();
        let rows_written = ctx.rows.len() as u32;
        let output_path = self.config.sweep.output_path.clone();
        if let Some(parent) = output_path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&output_path, ctx.rows.concat()).await?;
        tracing::info!(
            attempted = ctx.attempted,
            resolved = ctx.resolved,
            failed = ctx.failed,
            rows = rows_written,
            path = %output_path.display(),
            "catalog sweep finished"
        );

        Ok(SweepReport {
            attempted: ctx.attempted,
            resolved: ctx.resolved,
            failed: ctx.failed,
            rows_dropped: ctx.rows_dropped,
            rows_written,
            output_path: Some(output_path),
        })
    }
}
