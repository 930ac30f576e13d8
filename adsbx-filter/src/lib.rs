//! Library part of the `adsbx-filter` utility.
//!
//! ADS-B Exchange publishes its history as one big zip archive per day, each entry being a
//! JSON snapshot of all aircraft seen at a given minute.  This library fetches these archives,
//! goes through every snapshot and keeps only the aircraft positions inside a polygon loaded
//! from a GeoJSON file.
//!
//! - `bounds`: boundary loading and containment
//! - `fetch`: download & cache of the daily archives
//! - `filter`: per-entry decoding and filtering
//! - `output`: writing the result
//! - `driver`: ties everything together for one or more days
//!

pub use bounds::*;
pub use cli::*;
pub use config::*;
pub use driver::*;
pub use error::*;
pub use fetch::*;
pub use filter::*;
pub use output::*;
pub use record::*;

mod bounds;
mod cli;
mod config;
mod driver;
mod error;
mod fetch;
mod filter;
mod output;
mod record;
