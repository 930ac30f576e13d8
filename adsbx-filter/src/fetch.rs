//! Module to fetch the daily archives from ADS-B Exchange.
//!
//! Archives are big (several GB a day) so they are streamed to disk and kept in a cache
//! directory as `adsb_<date>.zip`.  If the cached file is already there we do not touch the
//! network at all.
//!

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;

use chrono::NaiveDate;
use clap::{crate_name, crate_version};
use indicatif::{ProgressBar, ProgressStyle};
use reqwest::blocking::Client;
use tracing::{debug, info, trace, warn};

use crate::Status;

/// Historical data, one zip per day
pub const DEF_URL: &str = "http://history.adsbexchange.com/Aircraftlist.json/{date}.zip";
/// Default cache directory
pub const DEF_CACHE: &str = "/tmp";

/// What `fetch()` did.
///
#[derive(Debug, PartialEq)]
pub enum Fetched {
    /// Already there
    Cached(PathBuf),
    /// Downloaded this many bytes
    Downloaded(PathBuf, u64),
}

impl Fetched {
    pub fn path(&self) -> &Path {
        match self {
            Fetched::Cached(p) | Fetched::Downloaded(p, _) => p,
        }
    }
}

#[derive(Debug)]
pub struct Fetcher {
    client: Client,
    /// URL with a `{date}` placeholder
    url: String,
    cache_dir: PathBuf,
    progress: bool,
}

impl Fetcher {
    /// Archives can take a very long time to download, no timeout at all.
    ///
    #[tracing::instrument]
    pub fn new(url: &str, cache_dir: &Path) -> Result<Self, Status> {
        let client = Client::builder()
            .user_agent(format!("{}/{}", crate_name!(), crate_version!()))
            .timeout(None::<Duration>)
            .build()
            .map_err(Status::Client)?;

        Ok(Fetcher {
            client,
            url: url.to_string(),
            cache_dir: cache_dir.to_path_buf(),
            progress: true,
        })
    }

    /// Enable or disable the progress bar
    ///
    pub fn progress(mut self, progress: bool) -> Self {
        self.progress = progress;
        self
    }

    pub fn url_for(&self, date: NaiveDate) -> String {
        self.url.replace("{date}", &date.format("%Y-%m-%d").to_string())
    }

    pub fn cache_path(&self, date: NaiveDate) -> PathBuf {
        self.cache_dir.join(format!("adsb_{}.zip", date.format("%Y-%m-%d")))
    }

    /// Make sure the archive for `date` is in the cache.
    ///
    #[tracing::instrument(skip(self))]
    pub fn fetch(&self, date: NaiveDate) -> Result<Fetched, Status> {
        let path = self.cache_path(date);
        if path.exists() {
            info!("Using cached {:?}", path);
            return Ok(Fetched::Cached(path));
        }

        let url = self.url_for(date);
        info!("Downloading {}", url);

        let mut resp = self
            .client
            .get(&url)
            .send()
            .map_err(|e| Status::Http(url.clone(), e))?;

        let status = resp.status();
        trace!("status={}", status);
        if !status.is_success() {
            return Err(Status::HttpStatus(url, status));
        }

        let bar = self.progress_bar(resp.content_length())?;

        // Write into a temporary name so that an interrupted download is never picked up
        // as a valid archive.
        //
        let part = path.with_extension("zip.part");
        let file = File::create(&part)?;
        let mut out = bar.wrap_write(BufWriter::new(file));

        let size = match io::copy(&mut resp, &mut out).and_then(|n| out.flush().map(|_| n)) {
            Ok(n) => n,
            Err(e) => {
                bar.abandon();
                drop(out);
                if let Err(e) = fs::remove_file(&part) {
                    warn!("Can not remove {:?}: {}", part, e);
                }
                return Err(Status::Io(e));
            }
        };
        drop(out);
        bar.finish_and_clear();

        fs::rename(&part, &path)?;
        debug!("{} bytes into {:?}", size, path);

        Ok(Fetched::Downloaded(path, size))
    }

    /// Remove the cached archive for `date`.
    ///
    #[tracing::instrument(skip(self))]
    pub fn purge(&self, date: NaiveDate) -> Result<(), Status> {
        let path = self.cache_path(date);
        info!("Removing {:?}", path);
        fs::remove_file(path)?;
        Ok(())
    }

    fn progress_bar(&self, size: Option<u64>) -> Result<ProgressBar, Status> {
        if !self.progress {
            return Ok(ProgressBar::hidden());
        }
        let bar = match size {
            Some(size) => ProgressBar::new(size).with_style(
                ProgressStyle::default_bar()
                    .template(
                        "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {bytes}/{total_bytes} ({eta})",
                    )?
                    .progress_chars("#>-"),
            ),
            None => ProgressBar::new_spinner().with_style(
                ProgressStyle::default_spinner()
                    .template("{spinner:.green} [{elapsed_precise}] {bytes} ({bytes_per_sec})")?,
            ),
        };
        Ok(bar)
    }
}
