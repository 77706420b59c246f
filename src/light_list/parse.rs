use quick_xml::events::*;
use quick_xml::Reader;
use std::io::BufRead;

use super::*;
use crate::error::{Error, Result};
use crate::geo::LatLon;

fn get_light<B: BufRead>(reader: &mut Reader<B>, buf: &mut Vec<u8>) -> Result<LightRecord> {
    let mut light = LightRecordBuilder::default();
    let mut lat = None;
    let mut lon = None;

    loop {
        match reader.read_event(buf)? {
            Event::Start(ref event) if event.name() == b"LLNR" => {
                light.number(reader.read_text(b"LLNR", buf)?);
            }
            Event::Start(ref event) if event.name() == b"Name" => {
                light.name(reader.read_text(b"Name", buf)?);
            }
            Event::Start(ref event) if event.name() == b"Latitude" => {
                lat = Some(reader.read_text(b"Latitude", buf)?);
            }
            Event::Start(ref event) if event.name() == b"Longitude" => {
                lon = Some(reader.read_text(b"Longitude", buf)?);
            }
            Event::Start(ref event) if event.name() == b"Characteristic" => {
                light.characteristic(Some(reader.read_text(b"Characteristic", buf)?));
            }
            Event::Start(ref event) if event.name() == b"Remarks" => {
                light.remarks(Some(reader.read_text(b"Remarks", buf)?));
            }
            Event::Start(ref event) if event.name() == b"Range" => {
                light.range(Some(reader.read_text(b"Range", buf)?));
            }
            Event::Start(ref event) if event.name() == b"District" => {
                light.district(reader.read_text(b"District", buf)?);
            }
            Event::End(ref event) if event.name() == b"Light" => break,
            Event::Eof => return Err(quick_xml::Error::UnexpectedEof("EOF".to_owned()).into()),
            _ => (),
        }
        buf.clear();
    }

    // A row with an unparseable position never yields a record.
    if let (Some(lat), Some(lon)) = (lat, lon) {
        if let Some(latlon) = LatLon::from_dms_text(&lat, &lon) {
            light.latlon(latlon);
        }
    }

    light.build().map_err(|_| Error::NotYielded)
}

pub fn get_light_records<B: BufRead, T: AsRef<str>>(
    reader: &mut Reader<B>,
    districts: &[T],
) -> Result<Vec<LightRecord>> {
    let mut buf = Vec::new();
    let mut lights = Vec::new();

    loop {
        match reader.read_event(&mut buf)? {
            Event::Start(ref event) if event.name() == b"Light" => {
                match get_light(reader, &mut buf) {
                    Ok(light) => {
                        if districts.iter().any(|d| d.as_ref() == light.district) {
                            lights.push(light);
                        }
                    }
                    Err(Error::NotYielded) => (),
                    Err(e) => return Err(e),
                }
            }
            Event::Eof => break,
            _ => (),
        }
        buf.clear();
    }

    Ok(lights)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"<?xml version="1.0"?>
<LightList>
  <Light>
    <LLNR>1234</LLNR>
    <Name>Jetty Light</Name>
    <Latitude>29-22-30.510N</Latitude>
    <Longitude>094-46-21.000W</Longitude>
    <Characteristic>Fl.W.R.6s</Characteristic>
    <Remarks>R.289°-007°, W.-007°.</Remarks>
    <Range>R.7;W.11</Range>
    <District>8</District>
  </Light>
  <Light>
    <LLNR>1235</LLNR>
    <Name>Broken Row</Name>
    <Latitude>not charted</Latitude>
    <Longitude>094-46-21.000W</Longitude>
    <District>8</District>
  </Light>
  <Light>
    <LLNR>2001</LLNR>
    <Name>Other District Light</Name>
    <Latitude>27-10-00.000N</Latitude>
    <Longitude>097-20-00.000W</Longitude>
    <District>7</District>
  </Light>
</LightList>"#;

    #[test]
    fn reads_complete_rows_in_the_district() {
        let mut reader = Reader::from_str(SAMPLE);
        let lights = get_light_records(&mut reader, &["8"]).unwrap();
        assert_eq!(lights.len(), 1);

        let light = &lights[0];
        assert_eq!(light.number, "1234");
        assert_eq!(light.name, "Jetty Light");
        assert_eq!(light.characteristic.as_ref().unwrap(), "Fl.W.R.6s");
        assert_eq!(light.range.as_ref().unwrap(), "R.7;W.11");
        assert!((light.latlon.lat() - 29.375141666).abs() < 1e-6);
    }

    #[test]
    fn district_filter_keeps_other_volumes_out() {
        let mut reader = Reader::from_str(SAMPLE);
        let lights = get_light_records(&mut reader, &["7"]).unwrap();
        assert_eq!(lights.len(), 1);
        assert_eq!(lights[0].number, "2001");
        assert_eq!(lights[0].characteristic, None);
    }

    #[test]
    fn bad_position_rows_are_skipped() {
        let mut reader = Reader::from_str(SAMPLE);
        let lights = get_light_records(&mut reader, &["8", "7"]).unwrap();
        assert!(lights.iter().all(|l| l.number != "1235"));
    }
}
