//! Command-line options for `adsbx-filter`.
//!
//! One run processes either a single day (`--date`), a day and the following ones
//! (`--date` + `--range N`) or an inclusive interval (`--date BEGIN..END`).  A single day
//! writes `<uuid>.json`, several days write one `filtered_<date>.json` each.
//!

use std::path::PathBuf;

use clap::{crate_authors, crate_description, crate_name, crate_version, Parser};

/// Default day, first day of the published history
pub const DEF_DATE: &str = "2017-01-01";

/// CLI options
#[derive(Debug, Parser)]
#[command(disable_version_flag = true)]
#[clap(name = crate_name!(), about = crate_description!())]
#[clap(version = crate_version!(), author = crate_authors!())]
pub struct Opts {
    /// GeoJSON file with the bounds (default: bounds.geojson).
    #[clap(short = 'b', long)]
    pub bounds: Option<PathBuf>,
    /// Configuration file.
    #[clap(short = 'c', long)]
    pub config: Option<PathBuf>,
    /// Day to process (YYYY-MM-DD) or inclusive interval (BEGIN..END).
    #[clap(short = 'd', long, default_value = DEF_DATE)]
    pub date: String,
    /// Number of consecutive days to process, starting at --date.
    #[clap(short = 'r', long)]
    pub range: Option<u32>,
    /// Delete the downloaded archive once processed.
    #[clap(long)]
    pub delete_after: bool,
    /// URL template, `{date}` is replaced by the day.
    #[clap(short = 'u', long)]
    pub url: Option<String>,
    /// Where to keep the downloaded archives (default: /tmp).
    #[clap(long)]
    pub cache_dir: Option<PathBuf>,
    /// Where to write the filtered files (default: current directory).
    #[clap(short = 'o', long)]
    pub output_dir: Option<PathBuf>,
    /// Do not display the download progress bar.
    #[clap(short = 'q', long)]
    pub quiet: bool,
    /// Hierarchical log output.
    #[clap(long)]
    pub tree: bool,
    /// Also log into hourly files in this directory.
    #[clap(long)]
    pub log_file: Option<String>,
    /// Verbose mode.
    #[clap(short = 'v', long, action = clap::ArgAction::Count)]
    pub verbose: u8,
    /// Display utility full version.
    #[clap(short = 'V', long)]
    pub version: bool,
}
