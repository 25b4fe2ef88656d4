//! Per-locale translation tables for the canonical vocabulary.
//!
//! Each table is a flat `(canonical, localized)` slice covering the whole
//! vocabulary. Tables are pure data: inverting them into a lookup structure
//! and validating them is the lexicon's job.

use crate::locale::Locale;
use crate::roles::{WordRole, role_of};

/// English spellings (the canonical vocabulary itself).
pub const EN: &[(&str, &str)] = &[
    // Control keywords
    ("procedure", "procedure"),
    ("repeat", "repeat"),
    ("repeatWhile", "repeatWhile"),
    ("if", "if"),
    ("else", "else"),
    ("return", "return"),
    ("end", "end"),
    ("break", "break"),
    // Atoms
    ("true", "true"),
    ("false", "false"),
    // Movement
    ("forward", "forward"),
    ("backward", "backward"),
    ("left", "left"),
    ("right", "right"),
    ("north", "north"),
    ("south", "south"),
    ("east", "east"),
    ("west", "west"),
    // Sensors
    ("frontIsClear", "frontIsClear"),
    ("frontIsObstacle", "frontIsObstacle"),
    ("frontIsBeacon", "frontIsBeacon"),
    ("frontIsWhite", "frontIsWhite"),
    ("frontIsBlack", "frontIsBlack"),
    ("leftIsClear", "leftIsClear"),
    ("leftIsObstacle", "leftIsObstacle"),
    ("leftIsBeacon", "leftIsBeacon"),
    ("leftIsWhite", "leftIsWhite"),
    ("leftIsBlack", "leftIsBlack"),
    ("rightIsClear", "rightIsClear"),
    ("rightIsObstacle", "rightIsObstacle"),
    ("rightIsBeacon", "rightIsBeacon"),
    ("rightIsWhite", "rightIsWhite"),
    ("rightIsBlack", "rightIsBlack"),
    // Painting
    ("paintWhite", "paintWhite"),
    ("paintBlack", "paintBlack"),
    ("stopPainting", "stopPainting"),
    // Beacons
    ("pickUp", "pickUp"),
    ("putDown", "putDown"),
    // Misc
    ("flipCoin", "flipCoin"),
    ("nop", "nop"),
];

/// Dutch spellings.
pub const NL: &[(&str, &str)] = &[
    // Control keywords
    ("procedure", "procedure"),
    ("repeat", "herhaal"),
    ("repeatWhile", "herhaalZolang"),
    ("if", "als"),
    ("else", "anders"),
    ("return", "terug"),
    ("end", "einde"),
    ("break", "breekAf"),
    // Atoms
    ("true", "waar"),
    ("false", "onwaar"),
    // Movement
    ("forward", "vooruit"),
    ("backward", "achteruit"),
    ("left", "links"),
    ("right", "rechts"),
    ("north", "noord"),
    ("south", "zuid"),
    ("east", "oost"),
    ("west", "west"),
    // Sensors
    ("frontIsClear", "voorIsVrij"),
    ("frontIsObstacle", "voorIsObstakel"),
    ("frontIsBeacon", "voorIsBaken"),
    ("frontIsWhite", "voorIsWit"),
    ("frontIsBlack", "voorIsZwart"),
    ("leftIsClear", "linksIsVrij"),
    ("leftIsObstacle", "linksIsObstakel"),
    ("leftIsBeacon", "linksIsBaken"),
    ("leftIsWhite", "linksIsWit"),
    ("leftIsBlack", "linksIsZwart"),
    ("rightIsClear", "rechtsIsVrij"),
    ("rightIsObstacle", "rechtsIsObstakel"),
    ("rightIsBeacon", "rechtsIsBaken"),
    ("rightIsWhite", "rechtsIsWit"),
    ("rightIsBlack", "rechtsIsZwart"),
    // Painting
    ("paintWhite", "verfWit"),
    ("paintBlack", "verfZwart"),
    ("stopPainting", "stopVerven"),
    // Beacons
    ("pickUp", "pakOp"),
    ("putDown", "zetNeer"),
    // Misc
    ("flipCoin", "gooiMunt"),
    ("nop", "niks"),
];

/// West Frisian spellings.
pub const FY: &[(&str, &str)] = &[
    // Control keywords
    ("procedure", "proseduere"),
    ("repeat", "werhelje"),
    ("repeatWhile", "werheljeSalang"),
    ("if", "as"),
    ("else", "oars"),
    ("return", "werom"),
    ("end", "ein"),
    ("break", "kapjeOf"),
    // Atoms
    ("true", "wier"),
    ("false", "ûnwier"),
    // Movement
    ("forward", "foarút"),
    ("backward", "efterút"),
    ("left", "lofts"),
    ("right", "rjochts"),
    ("north", "noard"),
    ("south", "súd"),
    ("east", "east"),
    ("west", "west"),
    // Sensors
    ("frontIsClear", "foarIsFrij"),
    ("frontIsObstacle", "foarIsObstakel"),
    ("frontIsBeacon", "foarIsBeaken"),
    ("frontIsWhite", "foarIsWyt"),
    ("frontIsBlack", "foarIsSwart"),
    ("leftIsClear", "loftsIsFrij"),
    ("leftIsObstacle", "loftsIsObstakel"),
    ("leftIsBeacon", "loftsIsBeaken"),
    ("leftIsWhite", "loftsIsWyt"),
    ("leftIsBlack", "loftsIsSwart"),
    ("rightIsClear", "rjochtsIsFrij"),
    ("rightIsObstacle", "rjochtsIsObstakel"),
    ("rightIsBeacon", "rjochtsIsBeaken"),
    ("rightIsWhite", "rjochtsIsWyt"),
    ("rightIsBlack", "rjochtsIsSwart"),
    // Painting
    ("paintWhite", "fervjeWyt"),
    ("paintBlack", "fervjeSwart"),
    ("stopPainting", "stopFervjen"),
    // Beacons
    ("pickUp", "pakOp"),
    ("putDown", "setDel"),
    // Misc
    ("flipCoin", "goaiMunt"),
    ("nop", "neat"),
];

/// Returns the translation table for a locale.
#[must_use]
pub fn table(locale: Locale) -> &'static [(&'static str, &'static str)] {
    match locale {
        Locale::En => EN,
        Locale::Nl => NL,
        Locale::Fy => FY,
    }
}

fn words_with_role(locale: Locale, role: WordRole) -> Vec<&'static str> {
    table(locale)
        .iter()
        .filter(|(canonical, _)| role_of(canonical) == role)
        .map(|&(_, localized)| localized)
        .collect()
}

/// The localized spellings of the control keywords.
#[must_use]
pub fn localized_keywords(locale: Locale) -> Vec<&'static str> {
    words_with_role(locale, WordRole::Keyword)
}

/// The localized spellings of the boolean atoms.
#[must_use]
pub fn localized_atoms(locale: Locale) -> Vec<&'static str> {
    words_with_role(locale, WordRole::Atom)
}

/// The localized spellings of the builtin commands and sensors.
#[must_use]
pub fn localized_builtins(locale: Locale) -> Vec<&'static str> {
    words_with_role(locale, WordRole::Builtin)
}
