#![allow(dead_code)]

use std::io::{Cursor, Write};

use zip::write::SimpleFileOptions;
use zip::ZipWriter;

pub const SQUARE: &str = "testdata/square.geojson";

/// Three snapshots: two good ones and a truncated one in the middle.
///
pub const ENTRIES: &[(&str, &str)] = &[
    (
        "2017-01-01-0000Z.json",
        r##"{"src":1,"acList":[
            {"Id":1,"Icao":"IN0001","Lat":0.5,"Long":0.5,"Alt":3500},
            {"Id":2,"Icao":"OUT001","Lat":2.0,"Long":2.0},
            {"Id":3,"Lat":0.5,"Long":0.5}
        ]}"##,
    ),
    ("2017-01-01-0001Z.json", r#"{"src":1,"acList":[{"Id":4,"Ic"#),
    (
        "2017-01-01-0002Z.json",
        r##"{"src":1,"acList":[
            {"Id":5,"Icao":"EDGE01","Lat":0.0,"Long":0.0,"Call":"EIN24F"}
        ]}"##,
    ),
];

/// Build an in-memory zip archive.
///
pub fn make_archive(entries: &[(&str, &str)]) -> Vec<u8> {
    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    for (name, content) in entries {
        zip.start_file(*name, SimpleFileOptions::default()).unwrap();
        zip.write_all(content.as_bytes()).unwrap();
    }
    zip.finish().unwrap().into_inner()
}
