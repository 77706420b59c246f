#![deny(clippy::all)]
#![forbid(unsafe_code)]

// FIXME: When derive_builder supports Rust 2018 syntax switch to a local import
#[macro_use]
extern crate derive_builder;

use std::error::Error;
use std::fs::File;
use std::io::prelude::*;
use std::io::BufReader;
use std::path::PathBuf;

use itertools::Itertools;
use structopt::StructOpt;
use zip::ZipArchive;

mod characteristic;
mod colors;
mod error;
mod geo;
mod geometry;
mod light_list;
mod sectors;
mod zip_util;

use characteristic::expand_characteristic;
use colors::{colors_from_characteristic, Color};
use geometry::{build_sector_geometry, Geometry};
use sectors::parse::{parse_azimuth_coverage, parse_sectors};
use sectors::Sector;
use zip_util::zip_to_pseudofile;

static OVL_SEPERATOR: &str =
    "\n;===============================================================================\n";

#[derive(StructOpt)]
struct Args {
    #[structopt(name = "input", parse(from_os_str))]
    input: PathBuf,
    #[structopt(
        short = "o",
        long = "output",
        parse(from_os_str),
        default_value = "./sectors.ovl"
    )]
    output: PathBuf,
    #[structopt(short = "d", long = "district", raw(required = "true"))]
    districts: Vec<String>,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::from_args();
    let mut archive = ZipArchive::new(BufReader::new(File::open(args.input)?))?;

    // Weekly light list zips carry one XML file per volume.
    let xml_names: Vec<String> = (0..archive.len())
        .filter_map(|i| {
            let name = archive.by_index(i).ok()?.name().to_string();
            if name.ends_with(".xml") {
                Some(name)
            } else {
                None
            }
        })
        .collect();

    let mut lights = Vec::new();
    for name in &xml_names {
        println!("Unpacking {}...", name);
        let entry = archive.by_name(name)?;
        let file = zip_to_pseudofile(entry).expect("Z->P failed");
        let mut xml = quick_xml::Reader::from_reader(file);
        println!("Processing {}...", name);
        lights.extend(light_list::parse::get_light_records(
            &mut xml,
            &args.districts,
        )?);
    }

    println!("Building sector geometry for {} lights...", lights.len());

    let mut ovl = String::new();
    ovl += "[SECTOR LIGHTS]\n";

    for light in &lights {
        let colors = colors_from_characteristic(light.characteristic.as_ref().map(String::as_str));
        let sectors = parse_sectors(
            light.remarks.as_ref().map(String::as_str),
            light.range.as_ref().map(String::as_str),
            colors.as_ref().map(|c| &c[..]),
        );

        // A bare numeric range field is the flat range of a
        // non-sectored light; per-color fields never parse this way.
        let flat_range = light
            .range
            .as_ref()
            .and_then(|r| r.trim().parse::<f64>().ok());

        let mut geometry = build_sector_geometry(
            sectors.as_ref().map(|s| &s[..]),
            light.latlon,
            flat_range,
            colors.as_ref().map(|c| &c[..]),
        );

        // Racon coverage rides in the same remarks field.
        let is_racon = light
            .characteristic
            .as_ref()
            .map(|c| c.contains("Racon"))
            .unwrap_or(false);
        if is_racon {
            let racon: Option<Vec<Sector>> =
                parse_azimuth_coverage(light.remarks.as_ref().map(String::as_str)).map(|arcs| {
                    arcs.into_iter()
                        .map(|arc| {
                            let mut sector = Sector::from(arc);
                            sector.range_nautical_miles = flat_range;
                            sector
                        })
                        .collect()
                });
            geometry.extend(build_sector_geometry(
                racon.as_ref().map(|s| &s[..]),
                light.latlon,
                None,
                None,
            ));
        }

        ovl += OVL_SEPERATOR;
        ovl += &format!("; {} {}\n", light.number, light.name);
        if let Some(characteristic) = &light.characteristic {
            ovl += &format!("; {}\n", expand_characteristic(characteristic));
        }
        if let Some(sectors) = &sectors {
            for s in sectors {
                ovl += &format!(
                    "; sector {} {:.1}-{:.1}{}\n",
                    s.color,
                    geo::normalize_degrees(s.start_degrees - 90.0),
                    geo::normalize_degrees(s.end_degrees - 90.0),
                    if s.obscured { " (obscured)" } else { "" }
                );
            }
        }

        if geometry.is_empty() {
            ovl += &format!("POINT {}\n", light.latlon.to_dms_string());
            continue;
        }

        for (color, shape) in geometry.iter().sorted_by_key(|(c, _)| c.to_string()) {
            write_shape(&mut ovl, *color, shape);
        }
    }

    println!("Outputing overlay data...");
    let mut output = std::fs::File::create(args.output)?;
    output.write_all(ovl.as_bytes())?;
    Ok(())
}

fn write_shape(ovl: &mut String, color: Color, shape: &Geometry) {
    match shape {
        Geometry::Point(p) => {
            ovl.push_str(&format!("POINT {} {}\n", color, p.to_dms_string()));
        }
        Geometry::Polygon(ring) => write_ring(ovl, color, ring),
        Geometry::MultiPolygon(rings) => {
            for ring in rings {
                write_ring(ovl, color, ring);
            }
        }
    }
}

fn write_ring(ovl: &mut String, color: Color, ring: &[geo::LatLon]) {
    let (r, g, b, a) = color.rgba();
    ovl.push_str(&format!("COLOR {} {},{},{},{}\n", color, r, g, b, a));
    for point in ring {
        ovl.push_str(&format!("{}\n", point.to_dms_string()));
    }
}
