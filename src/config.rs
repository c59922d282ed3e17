//! Configuration types for starsweep

use serde::{Deserialize, Serialize};
use std::{path::PathBuf, time::Duration};

/// Main configuration for CatalogSweeper
///
/// Fields are organized into logical sub-configs:
/// - [`simbad`](SimbadConfig) — where the lookup service lives and how long to wait for it
/// - [`sweep`](SweepConfig) — range, file paths, pacing
///
/// Every field has a default, so `Config::default()` describes the classic
/// five-thousand-star sweep against the public SIMBAD mirror.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Config {
    /// Lookup service settings
    #[serde(default)]
    pub simbad: SimbadConfig,

    /// Sweep range and output settings
    #[serde(default)]
    pub sweep: SweepConfig,
}

/// Lookup service configuration
///
/// Used as a nested sub-config within [`Config`].
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SimbadConfig {
    /// Base URL of the SIMBAD service (default: the Strasbourg mirror)
    ///
    /// Tests point this at a local mock server.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout (default: 30 seconds)
    ///
    /// Applies inside the HTTP client only. The sweep itself never abandons
    /// a resolution that is still in flight.
    #[serde(default = "default_timeout", with = "duration_serde")]
    pub timeout: Duration,
}

impl Default for SimbadConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout: default_timeout(),
        }
    }
}

/// Sweep range and output configuration
///
/// Used as a nested sub-config within [`Config`].
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SweepConfig {
    /// Highest catalog number to request, inclusive (default: 5000)
    ///
    /// The sweep covers HD 1 through this bound. A checkpoint written by an
    /// earlier run carries its own bound, which wins on resume.
    #[serde(default = "default_star_count")]
    pub star_count: u32,

    /// Where the resume checkpoint is written (default: "checkpoint.json")
    #[serde(default = "default_checkpoint_path")]
    pub checkpoint_path: PathBuf,

    /// Where the sorted output file is written (default: "output.csv")
    #[serde(default = "default_output_path")]
    pub output_path: PathBuf,

    /// Fixed delay between consecutive requests (None = no pacing)
    #[serde(default, with = "optional_duration_serde")]
    pub request_delay: Option<Duration>,

    /// Log a progress line after this many attempted numbers (default: 100)
    #[serde(default = "default_progress_every")]
    pub progress_every: u32,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            star_count: default_star_count(),
            checkpoint_path: default_checkpoint_path(),
            output_path: default_output_path(),
            request_delay: None,
            progress_every: default_progress_every(),
        }
    }
}

fn default_base_url() -> String {
    "http://simbad.u-strasbg.fr".to_string()
}

fn default_timeout() -> Duration {
    Duration::from_secs(30)
}

fn default_star_count() -> u32 {
    5000
}

fn default_checkpoint_path() -> PathBuf {
    PathBuf::from("checkpoint.json")
}

fn default_output_path() -> PathBuf {
    PathBuf::from("output.csv")
}

fn default_progress_every() -> u32 {
    100
}

// Duration serialization helper
mod duration_serde {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u64(duration.as_secs())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = u64::deserialize(deserializer)?;
        Ok(Duration::from_secs(secs))
    }
}

// Optional Duration serialization helper
mod optional_duration_serde {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Option<Duration>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match duration {
            Some(d) => serializer.serialize_some(&d.as_secs()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Duration>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = Option::<u64>::deserialize(deserializer)?;
        Ok(secs.map(Duration::from_secs))
    }
}
