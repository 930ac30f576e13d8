//! Download daily flight data from ADS-B Exchange and keep the flights within a boundary.
//!
//! For every requested day, the archive is fetched into the cache directory (unless it is
//! already there), every snapshot inside is decoded and only the positions falling inside or
//! on the polygon read from `--bounds` are written out as a JSON array.
//!

use clap::{crate_description, crate_version, Parser};
use eyre::Result;
use tracing::{info, trace};

use adsbx_common::{init_logging, ConfigFile, DateSpec};
use adsbx_filter::{Bounds, Config, Driver, Fetcher, Opts, Settings};

/// Binary name, using a different binary name
pub const NAME: &str = env!("CARGO_BIN_NAME");
/// Binary version
pub const VERSION: &str = crate_version!();

fn main() -> Result<()> {
    let opts = Opts::parse();

    // Initialise logging.
    //
    init_logging(NAME, opts.tree, opts.log_file.clone(), opts.verbose)?;

    // Banner
    //
    banner()?;

    // Exit if needed
    //
    if opts.version {
        return Ok(());
    }

    // Load default config if nothing is specified
    //
    info!("Loading config…");
    let cfg = ConfigFile::<Config>::load(NAME, opts.config.as_deref())?;
    let settings = Settings::new(&opts, cfg.inner());
    trace!("{:?}", settings);

    let spec = DateSpec::parse(&opts.date, opts.range)?;

    let bounds = Bounds::load(&settings.bounds)?;
    info!("Bounds loaded from {:?}", settings.bounds);

    let fetcher = Fetcher::new(&settings.url, &settings.cache_dir)?.progress(!opts.quiet);

    let reports = Driver::new(fetcher, bounds)
        .output_dir(settings.output_dir)
        .delete_after(opts.delete_after)
        .run(&spec, |r| {
            if r.failed != 0 {
                eprintln!("{}: {} of {} entries could not be read", r.date, r.failed, r.entries);
            }
            println!("Filtered positions for {} ({}) are in {}", r.date, r.kept, r.output.display());
        })?;
    info!("{} day(s) done", reports.len());
    Ok(())
}

/// Return our version number
///
#[inline]
pub fn version() -> String {
    format!("{}/{}", NAME, VERSION)
}

/// Display banner
///
fn banner() -> Result<()> {
    Ok(eprintln!(
        r##"
{}
{}
"##,
        version(),
        crate_description!()
    ))
}
