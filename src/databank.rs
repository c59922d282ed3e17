//! Persistent cache of resolved objects.
//!
//! A [`DataBank`] keeps every record it has seen, keyed by identifier, and
//! round-trips the whole collection through a single JSON file. It fronts a
//! resolver so repeat lookups never leave the process, which is what makes
//! incremental backfills over a large catalog range affordable.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::error::{DataBankError, ResolveError, Result};
use crate::resolver::ObjectResolver;
use crate::types::{HdNumber, StarRecord};

/// An on-disk collection of [`StarRecord`]s with cache-first resolution.
#[derive(Debug, Default)]
pub struct DataBank {
    objects: HashMap<String, StarRecord>,
    path: Option<PathBuf>,
}

impl DataBank {
    /// An empty bank with no backing file.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a bank from a JSON file, remembering the path for later saves.
    ///
    /// A missing file is not an error: an empty bank is created and written
    /// out immediately, so the path is valid from the first save onward.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let bytes = match std::fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!(
                    path = %path.display(),
                    "databank file missing; creating an empty one"
                );
                let bank = Self {
                    objects: HashMap::new(),
                    path: Some(path),
                };
                bank.save()?;
                return Ok(bank);
            }
            Err(e) => return Err(e.into()),
        };

        let records: Vec<StarRecord> = serde_json::from_slice(&bytes)?;
        let objects: HashMap<String, StarRecord> = records
            .into_iter()
            .map(|record| (record.ident.clone(), record))
            .collect();
        tracing::info!(
            path = %path.display(),
            entries = objects.len(),
            "loaded databank"
        );
        Ok(Self {
            objects,
            path: Some(path),
        })
    }

    /// Write the bank to the path it was loaded from.
    pub fn save(&self) -> Result<()> {
        let path = self.path.as_deref().ok_or(DataBankError::NoPath)?;
        self.write_to(path)
    }

    /// Write the bank to an explicit path without changing the remembered one.
    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<()> {
        self.write_to(path.as_ref())
    }

    fn write_to(&self, path: &Path) -> Result<()> {
        // Records are sorted by identifier so the file is stable across runs.
        let mut records: Vec<&StarRecord> = self.objects.values().collect();
        records.sort_by(|a, b| a.ident.cmp(&b.ident));

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(&records)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// The file backing this bank, if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Add a record, keyed by its own identifier. Replaces any previous entry.
    pub fn insert(&mut self, record: StarRecord) {
        self.objects.insert(record.ident.clone(), record);
    }

    /// Look up a record by identifier.
    pub fn get(&self, ident: &str) -> Option<&StarRecord> {
        self.objects.get(ident)
    }

    /// Whether an identifier is already present.
    pub fn contains(&self, ident: &str) -> bool {
        self.objects.contains_key(ident)
    }

    /// Number of records in the bank.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Whether the bank holds no records.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Resolve an identifier, consulting the cache before the resolver.
    ///
    /// A fresh resolution is cached under the requested identifier, so the
    /// next call for the same identifier is served locally. Failures are not
    /// cached; a later call retries.
    pub async fn resolve_through(
        &mut self,
        resolver: &dyn ObjectResolver,
        ident: &str,
    ) -> std::result::Result<StarRecord, ResolveError> {
        if let Some(record) = self.objects.get(ident) {
            return Ok(record.clone());
        }
        let record = resolver.resolve(ident).await?;
        self.objects.insert(ident.to_string(), record.clone());
        Ok(record)
    }

    /// Fill the bank for a set of catalog numbers, skipping cached ones.
    ///
    /// Resolution failures are logged and skipped. When `autosave_every` is
    /// nonzero the bank is saved after every that many new records, so a long
    /// backfill survives interruption; pass `0` to disable autosaving.
    /// Returns the number of records added. Callers usually [`save`](Self::save)
    /// afterwards to capture the tail.
    pub async fn backfill(
        &mut self,
        resolver: &dyn ObjectResolver,
        numbers: impl IntoIterator<Item = HdNumber>,
        autosave_every: u32,
    ) -> Result<u32> {
        let mut added = 0u32;
        for number in numbers {
            let ident = number.to_string();
            if self.contains(&ident) {
                continue;
            }
            match resolver.resolve(&ident).await {
                Ok(record) => {
                    self.insert(record);
                    added += 1;
                    if autosave_every > 0 && added % autosave_every == 0 {
                        self.save()?;
                        tracing::info!(
                            new_entries = added,
                            entries = self.len(),
                            "autosaved databank"
                        );
                    }
                }
                Err(e) => {
                    tracing::warn!(ident = %ident, error = %e, "skipping unresolved object");
                }
            }
        }
        Ok(added)
    }

    /// Points for a temperature-magnitude diagram.
    ///
    /// One `(kelvin, magnitude)` pair per record that has both a usable
    /// spectral class and a measured magnitude, sorted by temperature so the
    /// output is deterministic.
    pub fn hr_diagram_points(&self) -> Vec<(f64, f64)> {
        let mut points: Vec<(f64, f64)> = self
            .objects
            .values()
            .filter_map(|record| {
                let kelvin = record.surface_temperature()?;
                let magnitude = record.vmag?;
                Some((kelvin, magnitude))
            })
            .collect();
        points.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.total_cmp(&b.1)));
        points
    }
}
