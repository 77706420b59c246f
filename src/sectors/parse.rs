use lazy_static::lazy_static;
use regex::{Captures, Regex};

use super::{AzimuthSector, Sector};
use crate::colors::Color;
use crate::geo;

lazy_static! {
    // One remarks clause: optional "Visible" marker, optional obscured
    // marker (the catalog contains both "Obscured" and a truncated
    // "bscured"), optional ALL-CAPS letter code, optional start
    // degrees/minutes, mandatory end degrees, optional trailing
    // "(unintensified)" and "(bscured)" markers. Minutes use ` or '.
    static ref SECTOR_CLAUSE: Regex = Regex::new(
        r"(?:(Visible)[^\dA-Z°]*)?([Oo]?bscured)?[^\dA-Z°\-]*(?:([A-Z][a-z]?)\.)?\s*(?:(\d+)°)?(?:(\d+)[`'])?\s*-\s*(\d+)°(?:(\d+)[`'])?(?:\s*\(unintensified\))?(\s*\(bscured\))?"
    ).unwrap();

    // A racon bearing pair, scanned after the "Azimuth coverage" phrase.
    static ref BEARING_PAIR: Regex = Regex::new(
        r"(?:(\d+)°)?(?:(\d+)[`'])?\s*-\s*(\d+)°(?:(\d+)[`'])?"
    ).unwrap();

    static ref TRAILING_DIGITS: Regex = Regex::new(r"(\d+)$").unwrap();
}

const AZIMUTH_PHRASE: &str = "Azimuth coverage";

/// One matched remarks clause with its raw captures made explicit.
#[derive(Debug)]
struct ClauseMatch {
    visible: bool,
    fully_obscured: bool,
    obscured: bool,
    label: Option<String>,
    start_degrees: Option<f64>,
    start_minutes: Option<f64>,
    end_degrees: f64,
    end_minutes: Option<f64>,
}

impl ClauseMatch {
    fn from_captures(cap: &Captures) -> ClauseMatch {
        // Malformed digit runs count as zero, never as a failed clause.
        fn num(cap: &Captures, i: usize) -> Option<f64> {
            cap.get(i).map(|m| m.as_str().parse().unwrap_or(0.0))
        }

        ClauseMatch {
            visible: cap.get(1).is_some(),
            fully_obscured: cap.get(2).is_some(),
            obscured: cap.get(2).is_some() || cap.get(8).is_some(),
            label: cap.get(3).map(|m| m.as_str().to_string()),
            start_degrees: num(cap, 4),
            start_minutes: num(cap, 5),
            end_degrees: num(cap, 6).unwrap_or(0.0),
            end_minutes: num(cap, 7),
        }
    }
}

/// Scan the remarks field left to right and build the light's sector
/// list. `colors` is the characteristic-derived color set, used only as
/// the fallback "visible color". Returns `None` when the remarks are
/// absent or no sector-shaped clause matched.
///
/// Clause order matters: a clause without a start bearing begins where
/// the previous clause ended, and every end bearing is wrapped past the
/// running previous end so the sequence stays monotonic.
pub fn parse_sectors(
    remarks: Option<&str>,
    range: Option<&str>,
    colors: Option<&[Color]>,
) -> Option<Vec<Sector>> {
    let remarks = remarks?;
    let visible_color = colors.and_then(|c| c.first().copied());

    let mut sectors = Vec::new();
    let mut previous_end = 0.0f64;
    let mut visible_sector = false;

    for cap in SECTOR_CLAUSE.captures_iter(remarks) {
        let clause = ClauseMatch::from_captures(&cap);

        if clause.visible {
            visible_sector = true;
        }

        // Start minutes can appear without start degrees in one clause.
        let clause_start = match (clause.start_degrees, clause.start_minutes) {
            (None, None) => None,
            (d, m) => Some(d.unwrap_or(0.0) + 90.0 + m.unwrap_or(0.0) / 60.0),
        };
        let mut end = clause.end_degrees + 90.0 + clause.end_minutes.unwrap_or(0.0) / 60.0;

        let start = match clause_start {
            Some(start) => {
                if end < start {
                    end += 360.0;
                }
                start
            }
            None => {
                end = geo::wrap_past(end, previous_end);
                previous_end
            }
        };

        let color = if clause.obscured {
            visible_color.unwrap_or(Color::Black)
        } else {
            clause
                .label
                .as_deref()
                .and_then(Color::from_letter)
                .or(visible_color)
                .unwrap_or(Color::Clear)
        };

        let label = clause.label.clone().unwrap_or_default();
        let range_nautical_miles = range_for_label(range, &label);

        if start < end {
            sectors.push(Sector {
                start_degrees: start,
                end_degrees: end,
                color,
                label,
                obscured: clause.obscured,
                range_nautical_miles,
            });
        }

        // A fully obscured arc with no preceding "Visible" clause says
        // nothing about the rest of the circle, so the remainder shows
        // the visible color.
        if clause.fully_obscured && !visible_sector {
            let remainder_color = visible_color.unwrap_or(Color::White);
            let remainder_start = end;
            let remainder_end = clause_start.unwrap_or(0.0) + 360.0;
            if remainder_start < remainder_end {
                sectors.push(Sector {
                    start_degrees: remainder_start,
                    end_degrees: remainder_end,
                    color: remainder_color,
                    label: remainder_color.letter().to_string(),
                    obscured: false,
                    range_nautical_miles: range_for_label(range, remainder_color.letter()),
                });
            }
        }

        previous_end = end;
    }

    if sectors.is_empty() {
        None
    } else {
        Some(sectors)
    }
}

/// Racon coverage from "Azimuth coverage 123°-243°..." remarks. Same
/// accumulator as `parse_sectors` but a single fixed color and no
/// labels, obscuration or ranges.
pub fn parse_azimuth_coverage(remarks: Option<&str>) -> Option<Vec<AzimuthSector>> {
    let remarks = remarks?;
    let phrase = remarks.find(AZIMUTH_PHRASE)?;
    let tail = &remarks[phrase + AZIMUTH_PHRASE.len()..];

    fn num(cap: &Captures, i: usize) -> Option<f64> {
        cap.get(i).map(|m| m.as_str().parse().unwrap_or(0.0))
    }

    let mut sectors = Vec::new();
    let mut previous_end = 0.0f64;

    for cap in BEARING_PAIR.captures_iter(tail) {
        let clause_start = match (num(&cap, 1), num(&cap, 2)) {
            (None, None) => None,
            (d, m) => Some(d.unwrap_or(0.0) + 90.0 + m.unwrap_or(0.0) / 60.0),
        };
        let mut end = num(&cap, 3).unwrap_or(0.0) + 90.0 + num(&cap, 4).unwrap_or(0.0) / 60.0;

        let start = match clause_start {
            Some(start) => {
                if end < start {
                    end += 360.0;
                }
                start
            }
            None => {
                end = geo::wrap_past(end, previous_end);
                previous_end
            }
        };

        if start < end {
            sectors.push(AzimuthSector {
                start_degrees: start,
                end_degrees: end,
                color: Color::RaconMagenta,
            });
        }

        previous_end = end;
    }

    if sectors.is_empty() {
        None
    } else {
        Some(sectors)
    }
}

/// Pick the range figure for one color out of a "R.7;G.9;W.11" field.
/// Clauses split on semicolons and newlines; the first clause starting
/// with the label contributes its trailing digit run.
pub fn range_for_label(range: Option<&str>, label: &str) -> Option<f64> {
    let range = range?;
    if label.is_empty() {
        return None;
    }

    range
        .split(|c| c == ';' || c == '\n')
        .map(str::trim)
        .filter(|clause| clause.starts_with(label))
        .find_map(|clause| {
            TRAILING_DIGITS
                .captures(clause)
                .and_then(|cap| cap[1].parse().ok())
        })
}
