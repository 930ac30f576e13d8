//! Main configuration management and loading
//!
//! Everything is optional, the CLI flags always win over the file which wins over the
//! built-in defaults.
//!
//! ```hcl
//! version = 1
//!
//! url = "http://history.adsbexchange.com/Aircraftlist.json/{date}.zip"
//! cache_dir = "/var/tmp/adsbx"
//! output_dir = "/data/adsbx/filtered"
//! bounds = "/data/adsbx/belgium.geojson"
//! ```
//!

use std::path::PathBuf;

use serde::Deserialize;

use adsbx_common::Versioned;

use crate::{Opts, DEF_CACHE, DEF_URL};

/// Current version
pub const CVERSION: usize = 1;
/// Default bounds file
pub const DEF_BOUNDS: &str = "bounds.geojson";

#[derive(Debug, Deserialize)]
pub struct Config {
    pub version: usize,
    pub url: Option<String>,
    pub cache_dir: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
    pub bounds: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            version: CVERSION,
            url: None,
            cache_dir: None,
            output_dir: None,
            bounds: None,
        }
    }
}

impl Versioned for Config {
    const VERSION: usize = CVERSION;

    fn version(&self) -> usize {
        self.version
    }
}

/// Final values after merging CLI, file and defaults.
///
#[derive(Clone, Debug, PartialEq)]
pub struct Settings {
    pub url: String,
    pub cache_dir: PathBuf,
    pub output_dir: PathBuf,
    pub bounds: PathBuf,
}

impl Settings {
    pub fn new(opts: &Opts, cfg: &Config) -> Self {
        Settings {
            url: opts
                .url
                .clone()
                .or_else(|| cfg.url.clone())
                .unwrap_or_else(|| DEF_URL.to_string()),
            cache_dir: opts
                .cache_dir
                .clone()
                .or_else(|| cfg.cache_dir.clone())
                .unwrap_or_else(|| PathBuf::from(DEF_CACHE)),
            output_dir: opts
                .output_dir
                .clone()
                .or_else(|| cfg.output_dir.clone())
                .unwrap_or_else(|| PathBuf::from(".")),
            bounds: opts
                .bounds
                .clone()
                .or_else(|| cfg.bounds.clone())
                .unwrap_or_else(|| PathBuf::from(DEF_BOUNDS)),
        }
    }
}
