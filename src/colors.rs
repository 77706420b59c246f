/// Display palette for charted lights plus the two fallback markers the
/// sector parser needs: Black for an obscured arc with no known visible
/// color, Clear for "no color determinable".
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Color {
    White,
    Red,
    Green,
    Yellow,
    Blue,
    Violet,
    Orange,
    RaconMagenta,
    Black,
    Clear,
}

impl Color {
    pub fn rgba(self) -> (u8, u8, u8, u8) {
        match self {
            Color::White => (255, 255, 255, 255),
            Color::Red => (255, 0, 0, 255),
            Color::Green => (0, 200, 0, 255),
            Color::Yellow => (255, 255, 0, 255),
            Color::Blue => (0, 0, 255, 255),
            Color::Violet => (180, 80, 230, 255),
            Color::Orange => (255, 165, 0, 255),
            Color::RaconMagenta => (255, 0, 255, 255),
            Color::Black => (0, 0, 0, 255),
            Color::Clear => (0, 0, 0, 0),
        }
    }

    /// Catalog letter code, as used in the per-color range field.
    pub fn letter(self) -> &'static str {
        match self {
            Color::White => "W",
            Color::Red => "R",
            Color::Green => "G",
            Color::Yellow => "Y",
            Color::Blue => "Bu",
            Color::Violet => "Vi",
            Color::Orange => "Or",
            Color::RaconMagenta | Color::Black | Color::Clear => "",
        }
    }

    /// Sector-letter codes found in remarks text. Only the four colors
    /// that actually appear as sector labels in the catalog map here.
    pub fn from_letter(letter: &str) -> Option<Color> {
        match letter {
            "W" => Some(Color::White),
            "R" => Some(Color::Red),
            "G" => Some(Color::Green),
            "Y" => Some(Color::Yellow),
            _ => None,
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let name = match self {
            Color::White => "White",
            Color::Red => "Red",
            Color::Green => "Green",
            Color::Yellow => "Yellow",
            Color::Blue => "Blue",
            Color::Violet => "Violet",
            Color::Orange => "Orange",
            Color::RaconMagenta => "RaconMagenta",
            Color::Black => "Black",
            Color::Clear => "Clear",
        };
        write!(f, "{}", name)
    }
}

/// Colors exhibited by a light, read off its characteristic string.
///
/// Marker substrings are tested in a fixed white-red-green-yellow-blue-
/// violet-orange priority, de-duplicated. A characteristic that matches
/// nothing but mentions "lit" falls back to White. `None` means "no
/// determinable color" and is distinct from an explicitly empty list.
pub fn colors_from_characteristic(characteristic: Option<&str>) -> Option<Vec<Color>> {
    let characteristic = characteristic?;
    if characteristic.is_empty() {
        return None;
    }

    // (markers, color) in display priority order. Green needs a cluster
    // of spellings because "G." alone collides with nothing but the
    // catalog writes it half a dozen ways.
    const MARKERS: &[(&[&str], Color)] = &[
        (&["W."], Color::White),
        (&["R."], Color::Red),
        (&["G.", "Oc.G", "G\n", "F.G", "Fl.G", "(G)"], Color::Green),
        (&["Y."], Color::Yellow),
        (&["Bu."], Color::Blue),
        (&["Vi."], Color::Violet),
        (&["Or."], Color::Orange),
    ];

    let mut colors = Vec::new();
    for (markers, color) in MARKERS {
        if markers.iter().any(|m| characteristic.contains(m)) && !colors.contains(color) {
            colors.push(*color);
        }
    }

    if colors.is_empty() && characteristic.to_lowercase().contains("lit") {
        colors.push(Color::White);
    }

    if colors.is_empty() {
        None
    } else {
        Some(colors)
    }
}
