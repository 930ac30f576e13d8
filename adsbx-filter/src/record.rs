//! Structures for the ADS-B Exchange `Aircraftlist.json` data.
//!
//! Every entry of a daily archive is a JSON document with an `acList` array, each element of
//! which is the state of one aircraft at a given time.  We only care about three fields
//! (`Icao`, `Lat` and `Long`), everything else is kept as-is and written back untouched.
//!
//! See <https://www.adsbexchange.com/datafields/> for the complete list of fields.
//!

use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};

/// One archive entry.
///
#[derive(Debug, Deserialize)]
pub struct AircraftList {
    /// All aircraft states of this snapshot
    #[serde(rename = "acList")]
    pub ac_list: Vec<Position>,
}

/// One aircraft state.
///
/// The record is kept as read, key order and number formatting included, and serialized back
/// the same way.  `Icao`, `Lat` and `Long` are extracted once on load; a field with the wrong
/// type is considered absent instead of failing the whole entry.
///
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(from = "Map<String, Value>")]
pub struct Position {
    icao: Option<String>,
    lat: Option<f64>,
    lon: Option<f64>,
    raw: Map<String, Value>,
}

impl From<Map<String, Value>> for Position {
    fn from(raw: Map<String, Value>) -> Self {
        Position {
            icao: raw.get("Icao").and_then(Value::as_str).map(str::to_string),
            lat: raw.get("Lat").and_then(Value::as_f64),
            lon: raw.get("Long").and_then(Value::as_f64),
            raw,
        }
    }
}

impl Serialize for Position {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.raw.serialize(serializer)
    }
}

impl Position {
    /// ICAO 24-bit address, hex
    ///
    pub fn icao(&self) -> Option<&str> {
        self.icao.as_deref()
    }

    /// Any field of the record, as read
    ///
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.raw.get(key)
    }

    /// Return `(lon, lat)` if this record can be filtered at all, i.e. has an identifier and
    /// a full position.
    ///
    #[inline]
    pub fn point(&self) -> Option<(f64, f64)> {
        match (&self.icao, self.lat, self.lon) {
            (Some(_), Some(lat), Some(lon)) => Some((lon, lat)),
            _ => None,
        }
    }
}
