//! Writing the kept positions.
//!

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use tracing::{debug, trace};
use uuid::Uuid;

use crate::{Position, Status};

/// How the output file is named.
///
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum OutputName {
    /// `<uuid>.json` for a single day
    Random,
    /// `filtered_<date>.json` when processing several days
    Dated(NaiveDate),
}

impl OutputName {
    pub fn file_name(&self) -> String {
        match self {
            OutputName::Random => format!("{}.json", Uuid::new_v4()),
            OutputName::Dated(date) => format!("filtered_{}.json", date.format("%Y-%m-%d")),
        }
    }

    pub fn path_in(&self, dir: &Path) -> PathBuf {
        dir.join(self.file_name())
    }
}

/// Write all positions as one JSON array.
///
#[tracing::instrument(skip(data))]
pub fn write_results(path: &Path, data: &[Position]) -> Result<(), Status> {
    trace!("writing {} positions", data.len());

    let mut out = BufWriter::new(File::create(path)?);
    serde_json::to_writer(&mut out, data)
        .map_err(|e| Status::Output(path.to_string_lossy().to_string(), e))?;
    out.flush()?;

    debug!("wrote {:?}", path);
    Ok(())
}
