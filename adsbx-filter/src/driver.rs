//! Run the whole fetch/filter/write sequence for one or more days.
//!
//! Each day is independent: a failure on one day stops the run but leaves whatever was written
//! for the previous days in place.
//!

use std::path::PathBuf;

use chrono::NaiveDate;
use strum::Display;
use tracing::{info, trace, warn};

use adsbx_common::DateSpec;

use crate::{filter_archive, write_results, Bounds, Fetched, Fetcher, OutputName, Status};

/// Single day gets a random output name, several days get dated ones.
///
#[derive(Clone, Copy, Debug, Default, Display, PartialEq)]
#[strum(serialize_all = "lowercase")]
pub enum Mode {
    #[default]
    Single,
    Range,
}

/// What happened for one day.
///
#[derive(Debug)]
pub struct DateReport {
    pub date: NaiveDate,
    pub output: PathBuf,
    /// Was the archive downloaded during this run
    pub downloaded: bool,
    /// Number of entries visited
    pub entries: usize,
    /// Number of entries skipped
    pub failed: usize,
    /// Number of positions written
    pub kept: usize,
}

#[derive(Debug)]
pub struct Driver {
    fetcher: Fetcher,
    bounds: Bounds,
    output_dir: PathBuf,
    delete_after: bool,
    mode: Option<Mode>,
}

impl Driver {
    pub fn new(fetcher: Fetcher, bounds: Bounds) -> Self {
        Driver {
            fetcher,
            bounds,
            output_dir: PathBuf::from("."),
            delete_after: false,
            mode: None,
        }
    }

    pub fn output_dir(mut self, dir: PathBuf) -> Self {
        self.output_dir = dir;
        self
    }

    pub fn delete_after(mut self, delete: bool) -> Self {
        self.delete_after = delete;
        self
    }

    /// Force the output naming, otherwise deduced from the dates given to `run()`.
    ///
    pub fn mode(mut self, mode: Mode) -> Self {
        self.mode = Some(mode);
        self
    }

    /// Process every day of `spec`, calling `done` as soon as each day is finished.
    ///
    #[tracing::instrument(skip(self, done))]
    pub fn run<F>(mut self, spec: &DateSpec, mut done: F) -> Result<Vec<DateReport>, Status>
    where
        F: FnMut(&DateReport),
    {
        let mode = *self.mode.get_or_insert(if spec.is_range() {
            Mode::Range
        } else {
            Mode::Single
        });
        info!("{} mode, {} day(s)", mode, spec.dates().len());

        spec.dates()
            .into_iter()
            .map(|date| {
                let report = self.run_date(date)?;
                done(&report);
                Ok(report)
            })
            .collect()
    }

    /// Fetch, filter and write a given day.
    ///
    #[tracing::instrument(skip(self))]
    pub fn run_date(&self, date: NaiveDate) -> Result<DateReport, Status> {
        let fetched = self.fetcher.fetch(date)?;
        trace!("{:?}", fetched);

        let res = match filter_archive(fetched.path(), &self.bounds) {
            Ok(res) => res,
            Err(e @ Status::BadArchive(..)) => {
                self.discard(date, &fetched);
                return Err(e);
            }
            Err(e) => return Err(e),
        };

        for err in res.failed() {
            warn!("{}", err);
        }

        let name = match self.mode.unwrap_or_default() {
            Mode::Single => OutputName::Random,
            Mode::Range => OutputName::Dated(date),
        };
        let output = name.path_in(&self.output_dir);
        write_results(&output, &res.positions)?;
        info!("{}: {} positions into {:?}", date, res.positions.len(), output);

        if self.delete_after {
            self.fetcher.purge(date)?;
        }

        Ok(DateReport {
            date,
            output,
            downloaded: matches!(fetched, Fetched::Downloaded(..)),
            entries: res.entries.len(),
            failed: res.failed().count(),
            kept: res.positions.len(),
        })
    }

    /// An unreadable archive we just downloaded is removed so the next run fetches it again,
    /// one already in the cache is left for the user to look at.
    ///
    fn discard(&self, date: NaiveDate, fetched: &Fetched) {
        match fetched {
            Fetched::Downloaded(path, _) => {
                warn!("Removing invalid archive {:?}", path);
                if let Err(e) = self.fetcher.purge(date) {
                    warn!("Can not remove {:?}: {}", path, e);
                }
            }
            Fetched::Cached(path) => {
                warn!("Cached {:?} is not a valid archive, remove it to download again", path);
            }
        }
    }
}
