//! Test configuration builders

use std::path::Path;
use std::time::Duration;

use starsweep::{Config, SimbadConfig, SweepConfig};

/// A sweep configuration pointed at a mock service, with the checkpoint and
/// output files placed under `dir`.
pub fn sweep_test_config(dir: &Path, base_url: &str, star_count: u32) -> Config {
    Config {
        simbad: SimbadConfig {
            base_url: base_url.to_string(),
            timeout: Duration::from_secs(5),
        },
        sweep: SweepConfig {
            star_count,
            checkpoint_path: dir.join("checkpoint.json"),
            output_path: dir.join("output.csv"),
            request_delay: None,
            progress_every: 100,
        },
    }
}
