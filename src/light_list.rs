use crate::geo::LatLon;

pub mod parse;

/// One aid-to-navigation row from the weekly light list XML. The three
/// free-text fields feed the sector parsers; everything else is
/// identification and placement.
#[derive(Debug, Builder, Clone)]
#[builder(private)]
pub struct LightRecord {
    pub number: String,
    pub name: String,
    pub latlon: LatLon,
    #[builder(default)]
    pub characteristic: Option<String>,
    #[builder(default)]
    pub remarks: Option<String>,
    #[builder(default)]
    pub range: Option<String>,
    pub district: String,
}
