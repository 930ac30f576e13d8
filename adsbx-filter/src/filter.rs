//! Go through a daily archive and keep the positions inside the bounds.
//!
//! Each entry is decoded on its own, streaming from the zip member.  An entry that can not be
//! read or decoded is reported back to the caller as an [`EntryError`] and its records are
//! dropped, other entries are not affected.
//!

use std::fs::File;
use std::io::{BufReader, Read, Seek};
use std::path::Path;

use thiserror::Error;
use tracing::{debug, info, trace};
use zip::ZipArchive;

use crate::{AircraftList, Bounds, Position, Status};

/// Why an entry was skipped.
///
#[derive(Debug, Error)]
pub enum EntryCause {
    #[error("zip: {0}")]
    Zip(#[from] zip::result::ZipError),
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
#[error("Could not read {name} from ZIP archive: {cause}")]
pub struct EntryError {
    /// Entry name inside the archive
    pub name: String,
    pub cause: EntryCause,
}

/// Counters for a successfully decoded entry.
///
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EntryStats {
    pub name: String,
    /// Records in `acList`
    pub seen: usize,
    /// Records kept
    pub kept: usize,
}

pub type EntryResult = Result<EntryStats, EntryError>;

/// Result of going through one archive.
///
#[derive(Debug, Default)]
pub struct Filtered {
    /// Kept records, in archive order
    pub positions: Vec<Position>,
    /// One outcome per visited entry
    pub entries: Vec<EntryResult>,
}

impl Filtered {
    pub fn failed(&self) -> impl Iterator<Item = &EntryError> {
        self.entries.iter().filter_map(|e| e.as_ref().err())
    }
}

/// Open the archive at `path` and filter all its entries.
///
#[tracing::instrument(skip(bounds))]
pub fn filter_archive(path: &Path, bounds: &Bounds) -> Result<Filtered, Status> {
    let name = path.to_string_lossy().to_string();

    let file = File::open(path).map_err(|e| Status::BadArchive(name.clone(), e.into()))?;
    let archive =
        ZipArchive::new(BufReader::new(file)).map_err(|e| Status::BadArchive(name.clone(), e))?;
    info!("{} entries in {}", archive.len(), name);

    Ok(filter_entries(archive, bounds))
}

/// Same as `filter_archive()` on an already opened archive.
///
pub fn filter_entries<R: Read + Seek>(mut archive: ZipArchive<R>, bounds: &Bounds) -> Filtered {
    let mut res = Filtered::default();

    for i in 0..archive.len() {
        let entry = match archive.by_index(i) {
            Ok(entry) => entry,
            Err(e) => {
                res.entries.push(Err(EntryError {
                    name: format!("#{i}"),
                    cause: e.into(),
                }));
                continue;
            }
        };
        if entry.is_dir() {
            trace!("skipping directory {}", entry.name());
            continue;
        }

        let name = entry.name().to_string();
        info!("Working on {}", name);

        let outcome = match serde_json::from_reader::<_, AircraftList>(BufReader::new(entry)) {
            Ok(data) => {
                let seen = data.ac_list.len();
                let kept = filter_records(data.ac_list, bounds, &mut res.positions);
                debug!("{name}: kept {kept}/{seen}");
                Ok(EntryStats { name, seen, kept })
            }
            Err(e) => Err(EntryError {
                name,
                cause: e.into(),
            }),
        };
        res.entries.push(outcome);
    }
    res
}

/// Append to `out` every record whose position is within `bounds`, return how many.
///
pub fn filter_records<I>(records: I, bounds: &Bounds, out: &mut Vec<Position>) -> usize
where
    I: IntoIterator<Item = Position>,
{
    let before = out.len();
    out.extend(records.into_iter().filter(|p| match p.point() {
        Some((lon, lat)) => bounds.contains(lon, lat),
        None => false,
    }));
    out.len() - before
}
