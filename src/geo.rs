use lazy_static::lazy_static;
use regex::Regex;

/// 1 nautical mile in meters, by definition.
pub const METERS_PER_NAUTICAL_MILE: f64 = 1852.0;

/// One minute of latitude is one nautical mile.
pub const METERS_PER_DEGREE: f64 = 60.0 * METERS_PER_NAUTICAL_MILE;

pub fn meters_from_nautical_miles(nm: f64) -> f64 {
    nm * METERS_PER_NAUTICAL_MILE
}

pub fn degrees_to_radians(degrees: f64) -> f64 {
    degrees * std::f64::consts::PI / 180.0
}

/// Wrap an angle into [0, 360).
pub fn normalize_degrees(degrees: f64) -> f64 {
    let mut d = degrees % 360.0;
    if d < 0.0 {
        d += 360.0;
    }
    d
}

/// Add full turns until `angle` exceeds `floor`. Keeps a run of sector
/// boundaries monotonically increasing across the 0/360 seam.
pub fn wrap_past(mut angle: f64, floor: f64) -> f64 {
    while angle <= floor {
        angle += 360.0;
    }
    angle
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LatLon(f64, f64);

impl LatLon {
    pub fn new(lat: f64, lon: f64) -> Self {
        LatLon(lat, lon)
    }

    pub fn lat(self) -> f64 {
        self.0
    }

    pub fn lon(self) -> f64 {
        self.1
    }

    //Ex: 29-22-30.510N
    pub fn from_dms_text(lat: &str, lon: &str) -> Option<Self> {
        fn to_dd(d: f64, m: f64, s: f64) -> f64 {
            d + m / 60.0 + s / 3600.0
        }

        lazy_static! {
            static ref DMS_REGEX: Regex = Regex::new(r"(\d+)-(\d+)-(\d+\.?\d*)(\w)").unwrap();
        }

        let parse = |text: &str| {
            DMS_REGEX.captures(text).and_then(|cap| {
                let (d, m, s, dir) = (&cap[1], &cap[2], &cap[3], &cap[4]);
                let (d, m, s) = (d.parse().ok()?, m.parse().ok()?, s.parse().ok()?);
                let mut dd = to_dd(d, m, s);
                if dir == "S" || dir == "W" {
                    dd = -dd;
                }
                Some(dd)
            })
        };

        match (parse(lat), parse(lon)) {
            (Some(lat), Some(lon)) => Some(LatLon(lat, lon)),
            _ => None,
        }
    }

    pub fn to_dms_string(self) -> String {
        fn to_dms(dd: f64) -> (i32, i32, f64) {
            let d = dd.trunc() as i32;
            let m = (dd.abs() * 60.0).trunc() as i32 % 60;
            let s = (dd.abs() * 3600.0) % 60.0;
            (d, m, s)
        }

        let mut tmp = String::new();
        tmp += if self.0.is_sign_positive() { "N" } else { "S" };
        let (d, m, s) = to_dms(self.0);
        tmp += &format!("{:03}.{:02}.{:06.03}", d.abs(), m, s);

        tmp += " ";

        tmp += if self.1.is_sign_positive() { "E" } else { "W" };
        let (d, m, s) = to_dms(self.1);
        tmp += &format!("{:03}.{:02}.{:06.03}", d.abs(), m, s);
        tmp
    }
}

/// Boundary point at `radius_meters` from `center` along a rotated bearing.
/// The parsers store bearings rotated +90 from compass north, so north
/// lands on sin and east on -cos.
fn point_at(center: LatLon, radius_meters: f64, degrees: f64) -> LatLon {
    let theta = degrees_to_radians(degrees);
    let dlat = radius_meters * theta.sin() / METERS_PER_DEGREE;
    let dlon =
        -radius_meters * theta.cos() / (METERS_PER_DEGREE * degrees_to_radians(center.0).cos());
    LatLon(center.0 + dlat, center.1 + dlon)
}

/// Ordered arc boundary from `start_degrees` to `end_degrees`, sampled
/// every ~3 degrees with both endpoints exact. Callers request a full
/// circle with a 0-360 span.
pub fn sample_arc(
    center: LatLon,
    radius_meters: f64,
    start_degrees: f64,
    end_degrees: f64,
) -> Vec<LatLon> {
    const STEP_DEGREES: f64 = 3.0;

    let span = end_degrees - start_degrees;
    if span <= 0.0 {
        return Vec::new();
    }

    let steps = (span / STEP_DEGREES).ceil().max(1.0) as usize;
    (0..=steps)
        .map(|i| {
            let angle = start_degrees + span * (i as f64) / (steps as f64);
            point_at(center, radius_meters, angle)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flat_distance_meters(a: LatLon, b: LatLon) -> f64 {
        let dlat = (a.lat() - b.lat()) * METERS_PER_DEGREE;
        let dlon = (a.lon() - b.lon()) * METERS_PER_DEGREE * degrees_to_radians(a.lat()).cos();
        (dlat * dlat + dlon * dlon).sqrt()
    }

    #[test]
    fn normalize_wraps_into_range() {
        assert_eq!(normalize_degrees(370.0), 10.0);
        assert_eq!(normalize_degrees(-10.0), 350.0);
        assert_eq!(normalize_degrees(360.0), 0.0);
    }

    #[test]
    fn wrap_past_adds_full_turns() {
        assert_eq!(wrap_past(97.0, 457.0), 817.0);
        assert_eq!(wrap_past(100.0, 90.0), 100.0);
        assert_eq!(wrap_past(90.0, 90.0), 450.0);
    }

    #[test]
    fn nautical_mile_is_exact() {
        assert_eq!(meters_from_nautical_miles(5.0), 9260.0);
    }

    #[test]
    fn dms_text_round_trip() {
        let p = LatLon::from_dms_text("29-22-30.510N", "094-46-21.000W").unwrap();
        assert!((p.lat() - (29.0 + 22.0 / 60.0 + 30.510 / 3600.0)).abs() < 1e-9);
        assert!(p.lon() < 0.0);
        assert!(p.to_dms_string().starts_with("N029.22.30"));
    }

    #[test]
    fn dms_text_rejects_garbage() {
        assert!(LatLon::from_dms_text("no fix", "094-46-21.000W").is_none());
    }

    #[test]
    fn arc_points_sit_on_the_radius() {
        let center = LatLon::new(0.0, 0.0);
        let radius = meters_from_nautical_miles(5.0);
        let arc = sample_arc(center, radius, 90.0, 180.0);
        assert!(arc.len() >= 2);
        for p in &arc {
            assert!((flat_distance_meters(center, *p) - radius).abs() < 1e-6);
        }
    }

    #[test]
    fn full_circle_closes() {
        let center = LatLon::new(29.5, -94.7);
        let ring = sample_arc(center, 1852.0, 0.0, 360.0);
        let first = ring.first().unwrap();
        let last = ring.last().unwrap();
        assert!((first.lat() - last.lat()).abs() < 1e-9);
        assert!((first.lon() - last.lon()).abs() < 1e-9);
    }

    #[test]
    fn rotated_north_increases_latitude() {
        // Compass north sits at 90 after the +90 rotation.
        let center = LatLon::new(0.0, 0.0);
        let arc = sample_arc(center, 1852.0, 89.0, 91.0);
        assert!(arc[0].lat() > 0.0);
        assert!(arc[0].lon().abs() < 1e-3);
    }

    #[test]
    fn degenerate_span_yields_nothing() {
        assert!(sample_arc(LatLon::new(0.0, 0.0), 1000.0, 180.0, 180.0).is_empty());
        assert!(sample_arc(LatLon::new(0.0, 0.0), 1000.0, 200.0, 180.0).is_empty());
    }
}
