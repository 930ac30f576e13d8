//! Error module
//!

use std::io;

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Status {
    // Boundary
    #[error("Can not read bounds file {0}: {1}")]
    BoundsRead(String, io::Error),
    #[error("Invalid GeoJSON in {0}: {1}")]
    BadGeoJson(String, geojson::Error),
    #[error("No feature in {0}")]
    NoFeature(String),
    #[error("First feature in {0} has no geometry")]
    NoGeometry(String),
    #[error("Geometry in {0} is a {1}, need Polygon or MultiPolygon")]
    BadGeometry(String, &'static str),
    #[error("No coordinate ring in {0}")]
    EmptyRing(String),
    #[error("Position #{1} in {0} has less than two coordinates")]
    BadPosition(String, usize),
    #[error("Bounds in {0} do not enclose any area")]
    DegenerateBounds(String),

    // Fetching
    #[error("Can not create HTTP client: {0}")]
    Client(reqwest::Error),
    #[error("Fetching {0} failed: {1}")]
    Http(String, reqwest::Error),
    #[error("Fetching {0} returned {1}")]
    HttpStatus(String, StatusCode),
    #[error("Bad progress bar template: {0}")]
    Template(#[from] indicatif::style::TemplateError),

    // Archive & output
    #[error("Can not open archive {0}: {1}")]
    BadArchive(String, zip::result::ZipError),
    #[error("Can not write {0}: {1}")]
    Output(String, serde_json::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
}
