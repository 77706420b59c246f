/// Abbreviation-to-phrase table for light characteristics, in strict
/// substitution order: compound abbreviations must be replaced before
/// the shorter tokens they contain (I.V.Q. before V.Q. before Q.,
/// L.Fl. and F.Fl. before Fl. before F., Occ. before Oc., sec. before
/// ec.). Output is display text only and is never parsed back.
const EXPANSIONS: &[(&str, &str)] = &[
    ("I.V.Q.", "Interrupted Very Quick Flashing "),
    ("I.U.Q.", "Interrupted Ultra Quick Flashing "),
    ("I.Q.", "Interrupted Quick Flashing "),
    ("L.Fl.", "Long Flashing "),
    ("F.Fl.", "Fixed and Flashing "),
    ("V.Q.", "Very Quick Flashing "),
    ("U.Q.", "Ultra Quick Flashing "),
    ("Iso.", "Isophase "),
    ("Occ.", "Occulting "),
    ("Oc.", "Occulting "),
    ("Fl.", "Flashing "),
    ("Fl(", "Flashing ("),
    ("Oc(", "Occulting ("),
    ("Q(", "Quick Flashing ("),
    ("Q.", "Quick Flashing "),
    ("Mo.", "Morse Code "),
    ("Al.", "Alternating "),
    ("F.", "Fixed "),
    ("W.", "White "),
    ("R.", "Red "),
    ("G.", "Green "),
    ("Y.", "Yellow "),
    ("Bu.", "Blue "),
    ("Vi.", "Violet "),
    ("Or.", "Orange "),
    ("Whis.", "Whistle "),
    ("Dia.", "Diaphone "),
    ("Bl.", "Blast "),
    ("obsc.", "obscured "),
    ("unintens.", "unintensified "),
    ("occas.", "occasional "),
    ("sec.", "seconds "),
    ("ec.", "eclipse "),
    ("ev.", "every "),
    ("vis.", "visible "),
    ("si.", "silent "),
];

/// Expand a characteristic code into readable words, e.g.
/// `Fl(3)W.10s` into `Flashing (3)White 10s`.
pub fn expand_characteristic(characteristic: &str) -> String {
    let mut text = characteristic.to_string();
    for (abbreviation, phrase) in EXPANSIONS {
        text = text.replace(abbreviation, phrase);
    }
    text
}
