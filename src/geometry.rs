use std::collections::HashMap;

use itertools::Itertools;

use crate::colors::Color;
use crate::geo::{self, LatLon};
use crate::sectors::Sector;

/// Exported shape for one color of one aid.
#[derive(Clone, Debug, PartialEq)]
pub enum Geometry {
    /// Nothing drawable for this color; the aid's bare coordinate.
    Point(LatLon),
    Polygon(Vec<LatLon>),
    MultiPolygon(Vec<Vec<LatLon>>),
}

/// Turn a sector list into per-color ring geometry around `center`.
///
/// Each drawable sector becomes a pie-slice ring `[center, arc...,
/// center]` at its own range. Obscured sectors and inverted sectors
/// (`start >= end`) emit no geometry; overlapping multi-color sectors
/// over the same arc cannot be represented yet, so the inverted ones
/// were already dropped upstream and are only re-guarded here. Without
/// sectors, a flat range plus a fallback color list yields one full
/// ring for the first color. Otherwise the map is empty and the caller
/// exports a bare point.
pub fn build_sector_geometry(
    sectors: Option<&[Sector]>,
    center: LatLon,
    fallback_range_nautical_miles: Option<f64>,
    fallback_colors: Option<&[Color]>,
) -> HashMap<Color, Geometry> {
    let mut geometry = HashMap::new();

    match sectors {
        Some(sectors) if !sectors.is_empty() => {
            let by_color = sectors.iter().map(|s| (s.color, s)).into_group_map();
            for (color, group) in by_color {
                let mut rings: Vec<Vec<LatLon>> = group
                    .iter()
                    .filter(|s| !s.obscured && s.start_degrees < s.end_degrees)
                    .map(|s| sector_ring(center, s))
                    .collect();
                let shape = if rings.is_empty() {
                    Geometry::Point(center)
                } else if rings.len() == 1 {
                    Geometry::Polygon(rings.remove(0))
                } else {
                    Geometry::MultiPolygon(rings)
                };
                geometry.insert(color, shape);
            }
        }
        _ => {
            if let (Some(nm), Some(colors)) = (fallback_range_nautical_miles, fallback_colors) {
                if let Some(&color) = colors.first() {
                    let ring =
                        geo::sample_arc(center, geo::meters_from_nautical_miles(nm), 0.0, 360.0);
                    geometry.insert(color, Geometry::Polygon(ring));
                }
            }
        }
    }

    geometry
}

fn sector_ring(center: LatLon, sector: &Sector) -> Vec<LatLon> {
    let radius = geo::meters_from_nautical_miles(sector.range_nautical_miles.unwrap_or(0.0));
    let mut ring = vec![center];
    ring.extend(geo::sample_arc(
        center,
        radius,
        sector.start_degrees,
        sector.end_degrees,
    ));
    ring.push(center);
    ring
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::{degrees_to_radians, METERS_PER_DEGREE};

    fn sector(start: f64, end: f64, color: Color, range: Option<f64>) -> Sector {
        Sector {
            start_degrees: start,
            end_degrees: end,
            color,
            label: color.letter().to_string(),
            obscured: false,
            range_nautical_miles: range,
        }
    }

    fn flat_distance_meters(a: LatLon, b: LatLon) -> f64 {
        let dlat = (a.lat() - b.lat()) * METERS_PER_DEGREE;
        let dlon = (a.lon() - b.lon()) * METERS_PER_DEGREE * degrees_to_radians(a.lat()).cos();
        (dlat * dlat + dlon * dlon).sqrt()
    }

    #[test]
    fn ring_closes_at_center_and_holds_the_radius() {
        let center = LatLon::new(0.0, 0.0);
        let sectors = [sector(0.0, 90.0, Color::White, Some(5.0))];
        let geometry = build_sector_geometry(Some(&sectors), center, None, None);

        match geometry.get(&Color::White) {
            Some(Geometry::Polygon(ring)) => {
                assert_eq!(*ring.first().unwrap(), center);
                assert_eq!(*ring.last().unwrap(), center);
                for p in &ring[1..ring.len() - 1] {
                    assert!((flat_distance_meters(center, *p) - 5.0 * 1852.0).abs() < 1e-6);
                }
            }
            other => panic!("expected a polygon, got {:?}", other),
        }
    }

    #[test]
    fn same_color_sectors_merge_into_a_multipolygon() {
        let center = LatLon::new(29.0, -94.0);
        let sectors = [
            sector(100.0, 160.0, Color::Red, Some(3.0)),
            sector(200.0, 260.0, Color::Red, Some(3.0)),
            sector(160.0, 200.0, Color::White, Some(5.0)),
        ];
        let geometry = build_sector_geometry(Some(&sectors), center, None, None);

        match geometry.get(&Color::Red) {
            Some(Geometry::MultiPolygon(rings)) => assert_eq!(rings.len(), 2),
            other => panic!("expected a multipolygon, got {:?}", other),
        }
        match geometry.get(&Color::White) {
            Some(Geometry::Polygon(_)) => (),
            other => panic!("expected a polygon, got {:?}", other),
        }
    }

    #[test]
    fn obscured_sectors_emit_a_bare_point() {
        let center = LatLon::new(29.0, -94.0);
        let mut obscured = sector(100.0, 160.0, Color::White, Some(3.0));
        obscured.obscured = true;
        let geometry = build_sector_geometry(Some(&[obscured]), center, None, None);
        assert_eq!(geometry.get(&Color::White), Some(&Geometry::Point(center)));
    }

    #[test]
    fn inverted_sectors_are_reguarded() {
        let center = LatLon::new(29.0, -94.0);
        let sectors = [sector(200.0, 100.0, Color::White, Some(3.0))];
        let geometry = build_sector_geometry(Some(&sectors), center, None, None);
        assert_eq!(geometry.get(&Color::White), Some(&Geometry::Point(center)));
    }

    #[test]
    fn flat_range_fallback_is_one_full_ring() {
        let center = LatLon::new(0.0, 0.0);
        let geometry =
            build_sector_geometry(None, center, Some(2.0), Some(&[Color::Green, Color::White]));
        assert_eq!(geometry.len(), 1);
        match geometry.get(&Color::Green) {
            Some(Geometry::Polygon(ring)) => {
                let first = ring.first().unwrap();
                let last = ring.last().unwrap();
                assert!((first.lat() - last.lat()).abs() < 1e-9);
                assert!((first.lon() - last.lon()).abs() < 1e-9);
                for p in ring {
                    assert!((flat_distance_meters(center, *p) - 2.0 * 1852.0).abs() < 1e-6);
                }
            }
            other => panic!("expected a polygon, got {:?}", other),
        }
    }

    #[test]
    fn nothing_to_draw_is_an_empty_map() {
        let center = LatLon::new(0.0, 0.0);
        assert!(build_sector_geometry(None, center, None, None).is_empty());
        assert!(build_sector_geometry(Some(&[]), center, Some(2.0), None).is_empty());
    }
}
