//! Boundary polygon handling.
//!
//! The area of interest is read from a GeoJSON file: we take the outer ring of the first
//! feature and use the convex hull of its vertices.  Containment includes the boundary itself
//! so an aircraft sitting exactly on an edge or a vertex is kept.
//!

use std::fs;
use std::path::Path;

use geo::{Area, ConvexHull, Intersects, MultiPoint, Point, Polygon};
use geojson::{GeoJson, Geometry, Value};
use tracing::{debug, trace};

use crate::Status;

/// Area of interest, immutable once loaded.
///
#[derive(Clone, Debug)]
pub struct Bounds {
    hull: Polygon<f64>,
}

impl Bounds {
    /// Load the boundary from a GeoJSON file.
    ///
    #[tracing::instrument]
    pub fn load(path: &Path) -> Result<Self, Status> {
        let name = path.to_string_lossy().to_string();

        let data = fs::read_to_string(path).map_err(|e| Status::BoundsRead(name.clone(), e))?;
        debug!(bytes = data.len(), "read bounds file");

        let geo = data
            .parse::<GeoJson>()
            .map_err(|e| Status::BadGeoJson(name.clone(), e))?;

        let ring = first_ring(&name, geo)?;
        trace!("ring has {} positions", ring.len());

        let ring = ring
            .iter()
            .enumerate()
            .map(|(i, pos)| match pos.as_slice() {
                [lon, lat, ..] => Ok((*lon, *lat)),
                _ => Err(Status::BadPosition(name.clone(), i)),
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::from_ring(&name, &ring)
    }

    /// Build the convex hull of a list of `(lon, lat)` vertices.
    ///
    pub fn from_ring(name: &str, ring: &[(f64, f64)]) -> Result<Self, Status> {
        if ring.is_empty() {
            return Err(Status::EmptyRing(name.to_string()));
        }

        let points: MultiPoint<f64> = ring.iter().copied().map(Point::from).collect();
        let hull = points.convex_hull();

        // Fewer than three distinct vertices or all of them on a line
        //
        if hull.unsigned_area() <= 0. {
            return Err(Status::DegenerateBounds(name.to_string()));
        }
        debug!("hull has {} vertices", hull.exterior().0.len());

        Ok(Bounds { hull })
    }

    /// Is `(lon, lat)` inside or on the boundary?
    ///
    #[inline]
    pub fn contains(&self, lon: f64, lat: f64) -> bool {
        self.hull.intersects(&Point::new(lon, lat))
    }

    pub fn polygon(&self) -> &Polygon<f64> {
        &self.hull
    }
}

/// Dig out `coordinates[0]` of the first feature.
///
fn first_ring(name: &str, geo: GeoJson) -> Result<Vec<Vec<f64>>, Status> {
    let geometry: Geometry = match geo {
        GeoJson::FeatureCollection(fc) => fc
            .features
            .into_iter()
            .next()
            .ok_or_else(|| Status::NoFeature(name.to_string()))?
            .geometry
            .ok_or_else(|| Status::NoGeometry(name.to_string()))?,
        GeoJson::Feature(f) => f
            .geometry
            .ok_or_else(|| Status::NoGeometry(name.to_string()))?,
        GeoJson::Geometry(g) => g,
    };

    let ring = match geometry.value {
        Value::Polygon(mut rings) => (!rings.is_empty()).then(|| rings.swap_remove(0)),
        Value::MultiPolygon(polys) => polys
            .into_iter()
            .next()
            .and_then(|rings| rings.into_iter().next()),
        other => return Err(Status::BadGeometry(name.to_string(), kind(&other))),
    };

    match ring {
        Some(ring) if !ring.is_empty() => Ok(ring),
        _ => Err(Status::EmptyRing(name.to_string())),
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Point(_) => "Point",
        Value::MultiPoint(_) => "MultiPoint",
        Value::LineString(_) => "LineString",
        Value::MultiLineString(_) => "MultiLineString",
        Value::Polygon(_) => "Polygon",
        Value::MultiPolygon(_) => "MultiPolygon",
        Value::GeometryCollection(_) => "GeometryCollection",
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use rstest::rstest;

    use super::*;

    const SQUARE: &[(f64, f64)] = &[(0., 0.), (0., 1.), (1., 1.), (1., 0.), (0., 0.)];

    fn write_bounds(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[rstest]
    #[case(0.5, 0.5, true)]
    #[case(2., 2., false)]
    #[case(0., 0., true)]
    #[case(0., 0.5, true)]
    #[case(1., 1., true)]
    #[case(1.000001, 0.5, false)]
    #[case(-0.5, 0.5, false)]
    fn test_square_contains(#[case] lon: f64, #[case] lat: f64, #[case] inside: bool) {
        let bb = Bounds::from_ring("square", SQUARE).unwrap();
        assert_eq!(inside, bb.contains(lon, lat));
    }

    #[test]
    fn test_hull_fills_concavity() {
        // A "C" shape, the notch at (0.5, 0.5) is outside the ring but inside its hull
        //
        let ring = [
            (0., 0.),
            (1., 0.),
            (1., 0.25),
            (0.25, 0.25),
            (0.25, 0.75),
            (1., 0.75),
            (1., 1.),
            (0., 1.),
        ];
        let bb = Bounds::from_ring("c-shape", &ring).unwrap();
        assert!(bb.contains(0.5, 0.5));
        assert!(bb.polygon().interiors().is_empty());
    }

    #[rstest]
    #[case(&[])]
    fn test_empty_ring(#[case] ring: &[(f64, f64)]) {
        assert!(matches!(
            Bounds::from_ring("empty", ring),
            Err(Status::EmptyRing(_))
        ));
    }

    #[rstest]
    #[case(&[(0., 0.)])]
    #[case(&[(0., 0.), (1., 1.)])]
    #[case(&[(0., 0.), (1., 1.), (2., 2.)])]
    fn test_degenerate_ring(#[case] ring: &[(f64, f64)]) {
        assert!(matches!(
            Bounds::from_ring("flat", ring),
            Err(Status::DegenerateBounds(_))
        ));
    }

    #[test]
    fn test_load_feature_collection() {
        let file = write_bounds(
            r##"{
              "type": "FeatureCollection",
              "features": [
                {
                  "type": "Feature",
                  "properties": {},
                  "geometry": {
                    "type": "Polygon",
                    "coordinates": [[[4.0, 50.0], [5.0, 50.0], [5.0, 51.0], [4.0, 51.0], [4.0, 50.0]]]
                  }
                }
              ]
            }"##,
        );
        let bb = Bounds::load(file.path()).unwrap();
        assert!(bb.contains(4.4, 50.8));
        assert!(!bb.contains(50.8, 4.4));
    }

    #[test]
    fn test_load_multipolygon() {
        let file = write_bounds(
            r##"{
              "type": "Feature",
              "properties": null,
              "geometry": {
                "type": "MultiPolygon",
                "coordinates": [[[[0, 0], [0, 2], [2, 2], [2, 0], [0, 0]]], [[[10, 10], [10, 11], [11, 11], [10, 10]]]]
              }
            }"##,
        );
        let bb = Bounds::load(file.path()).unwrap();
        assert!(bb.contains(1., 1.));
        assert!(!bb.contains(10.5, 10.8));
    }

    #[rstest]
    #[case(4.35, 50.85, true)]
    #[case(5.57, 50.63, true)]
    #[case(2.35, 48.85, false)]
    #[case(4.90, 52.37, false)]
    fn test_load_belgium(#[case] lon: f64, #[case] lat: f64, #[case] inside: bool) {
        let bb = Bounds::load(Path::new("testdata/belgium.geojson")).unwrap();
        assert_eq!(inside, bb.contains(lon, lat));
    }

    #[test]
    fn test_load_missing_file() {
        let r = Bounds::load(Path::new("/nonexistent/bounds.geojson"));
        assert!(matches!(r, Err(Status::BoundsRead(_, _))));
    }

    #[test]
    fn test_load_not_geojson() {
        let file = write_bounds("this is not json");
        assert!(matches!(Bounds::load(file.path()), Err(Status::BadGeoJson(_, _))));
    }

    #[test]
    fn test_load_no_feature() {
        let file = write_bounds(r##"{"type": "FeatureCollection", "features": []}"##);
        assert!(matches!(Bounds::load(file.path()), Err(Status::NoFeature(_))));
    }

    #[test]
    fn test_load_no_geometry() {
        let file = write_bounds(
            r##"{"type": "FeatureCollection", "features": [{"type": "Feature", "properties": {}, "geometry": null}]}"##,
        );
        assert!(matches!(Bounds::load(file.path()), Err(Status::NoGeometry(_))));
    }

    #[test]
    fn test_load_point() {
        let file = write_bounds(r##"{"type": "Point", "coordinates": [1.0, 2.0]}"##);
        assert!(matches!(
            Bounds::load(file.path()),
            Err(Status::BadGeometry(_, "Point"))
        ));
    }

    #[test]
    fn test_load_empty_ring() {
        let file = write_bounds(r##"{"type": "Polygon", "coordinates": []}"##);
        assert!(matches!(Bounds::load(file.path()), Err(Status::EmptyRing(_))));
    }
}
