//! This is the `ConfigFile` struct.
//!
//! This is for finding the right default locations for the configuration file of a given tool.
//! It is a configuration file/struct neutral loading engine, storing only the base directory
//! and with `load()` read the proper file or fall back to the defaults of the inner struct.
//!
//! This encapsulates the configuration file, available with `.inner()`.
//!

use std::fmt::Debug;
use std::fs;
use std::path::{Path, PathBuf};

use directories::BaseDirs;
use eyre::{eyre, Result};
use serde::de::DeserializeOwned;
use tracing::{debug, trace};

use crate::makepath;

/// Config filename
const CONFIG: &str = "config.hcl";

/// Every configuration file carries a version number for safety.
///
pub trait Versioned {
    /// Version this binary understands
    const VERSION: usize;

    fn version(&self) -> usize;
}

#[derive(Debug)]
pub struct ConfigFile<T: Debug + Default + DeserializeOwned + Versioned> {
    /// Tag is the project name.
    tag: String,
    /// This is the base directory for all files.
    basedir: PathBuf,
    inner: T,
}

impl<T> ConfigFile<T>
where
    T: Debug + Default + DeserializeOwned + Versioned,
{
    #[tracing::instrument]
    fn new(tag: &str) -> Self {
        let basedir: PathBuf = match BaseDirs::new() {
            Some(base) => {
                #[cfg(unix)]
                let base = base.home_dir().join(".config");

                #[cfg(windows)]
                let base = base.data_local_dir().to_path_buf();

                debug!("base = {base:?}");
                makepath!(base, tag)
            }
            // No home directory at all, use the current one.
            //
            None => makepath!(".", tag),
        };
        ConfigFile {
            tag: String::from(tag),
            basedir,
            inner: T::default(),
        }
    }

    /// Project name
    ///
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Returns the path of the default config directory
    ///
    pub fn config_path(&self) -> PathBuf {
        self.basedir.clone()
    }

    /// Returns the path of the default config file
    ///
    pub fn default_file(&self) -> PathBuf {
        let cfg = self.config_path().join(CONFIG);
        debug!("default = {cfg:?}");
        cfg
    }

    /// Load the file and return a struct T in the right format.
    ///
    /// Use the following search path:
    /// - file specified on CLI, it must exist
    /// - default file in basedir (base on $HOME or $LOCALAPPDATA), defaults are used if absent
    ///
    #[tracing::instrument]
    pub fn load(tag: &str, fname: Option<&Path>) -> Result<ConfigFile<T>> {
        let mut cfg = ConfigFile::<T>::new(tag);

        let fname = match fname {
            Some(fname) => {
                if !fname.exists() {
                    return Err(eyre!("Unknown config file {:?}", fname));
                }
                fname.to_path_buf()
            }
            None => {
                let def = cfg.default_file();
                if !def.exists() {
                    trace!("no default file in {:?}, using defaults", cfg.config_path());
                    return Ok(cfg);
                }
                def
            }
        };

        trace!("Loading config file {fname:?}");

        let data = fs::read_to_string(&fname)?;
        debug!("string data = {data}");

        let data: T = hcl::from_str(&data)?;
        debug!("struct data = {data:?}");

        if data.version() != T::VERSION {
            return Err(eyre!(
                "Bad config file version {} in {:?}, need {}",
                data.version(),
                fname,
                T::VERSION
            ));
        }

        cfg.inner = data;
        Ok(cfg)
    }

    /// Return the inner configuration file
    ///
    pub fn inner(&self) -> &T {
        &self.inner
    }
}
