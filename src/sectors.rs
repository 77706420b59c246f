use crate::colors::Color;

pub mod parse;

/// One colored angular slice of a light's visible arc.
///
/// Bearings are stored rotated +90 from the compass bearings in the
/// source text (the frame the geometry consumer draws in) and wrapped
/// so that `end_degrees > start_degrees` always holds for stored
/// sectors; a clause that cannot satisfy that is dropped by the parser.
#[derive(Clone, Debug, PartialEq)]
pub struct Sector {
    pub start_degrees: f64,
    pub end_degrees: f64,
    pub color: Color,
    /// Original one/two letter color code from the remarks, may be empty.
    pub label: String,
    pub obscured: bool,
    pub range_nautical_miles: Option<f64>,
}

/// Radar-beacon coverage slice. Same frame and wraparound rules as
/// `Sector`, always racon magenta, no letter label or range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AzimuthSector {
    pub start_degrees: f64,
    pub end_degrees: f64,
    pub color: Color,
}

impl From<AzimuthSector> for Sector {
    fn from(az: AzimuthSector) -> Sector {
        Sector {
            start_degrees: az.start_degrees,
            end_degrees: az.end_degrees,
            color: az.color,
            label: String::new(),
            obscured: false,
            range_nautical_miles: None,
        }
    }
}
