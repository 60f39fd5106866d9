// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Spelled, octave-agnostic pitch classes.
//!
//! A [`Chroma`] is a letter plus a modifier. Two chroma compare equal when
//! they sound the same (C♯ == D♭); use [`Chroma::same_spelling`] to tell
//! spellings apart.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::chroma_set::ChromaSet;
use super::interval::Interval;
use super::{HalfSteps, OCTAVE};
use crate::error::{Result, TheoryError};

/// The seven diatonic letters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Letter {
    C,
    D,
    E,
    F,
    G,
    A,
    B,
}

impl Letter {
    /// All letters in diatonic order from C
    pub const ALL: [Letter; 7] = [
        Letter::C,
        Letter::D,
        Letter::E,
        Letter::F,
        Letter::G,
        Letter::A,
        Letter::B,
    ];

    /// Ordinal within the letter cycle (C = 0 .. B = 6)
    pub const fn ordinal(self) -> i32 {
        self as i32
    }

    /// Half-steps of the unmodified letter above C
    pub const fn base_value(self) -> HalfSteps {
        match self {
            Letter::C => 0,
            Letter::D => 2,
            Letter::E => 4,
            Letter::F => 5,
            Letter::G => 7,
            Letter::A => 9,
            Letter::B => 11,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Letter::C => 'C',
            Letter::D => 'D',
            Letter::E => 'E',
            Letter::F => 'F',
            Letter::G => 'G',
            Letter::A => 'A',
            Letter::B => 'B',
        }
    }

    /// Fixed-do solfège syllable
    pub fn syllable(self) -> &'static str {
        match self {
            Letter::C => "do",
            Letter::D => "re",
            Letter::E => "mi",
            Letter::F => "fa",
            Letter::G => "sol",
            Letter::A => "la",
            Letter::B => "ti",
        }
    }

    /// Strict lookup by ordinal
    pub fn from_ordinal(ordinal: i32) -> Result<Self> {
        if !(0..7).contains(&ordinal) {
            return Err(TheoryError::Range {
                what: "letter ordinal",
                value: ordinal,
                min: 0,
                max: 6,
                hint: "",
            });
        }
        Ok(Letter::wrapping(ordinal))
    }

    /// Lookup by ordinal modulo 7
    pub fn wrapping(ordinal: i32) -> Self {
        Letter::ALL[ordinal.rem_euclid(7) as usize]
    }

    /// Parse a letter symbol, case-insensitive
    pub fn from_symbol(symbol: char) -> Result<Self> {
        let upper = symbol.to_ascii_uppercase();
        Letter::ALL
            .into_iter()
            .find(|l| l.symbol() == upper)
            .ok_or_else(|| TheoryError::UnknownLetter(symbol.to_string()))
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Ways of naming a letter when querying a chroma set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LetterKey {
    /// Ordinal, taken modulo 7
    Ordinal(i32),
    /// Letter symbol such as 'D'
    Symbol(char),
    Letter(Letter),
}

impl LetterKey {
    pub fn resolve(self) -> Result<Letter> {
        match self {
            LetterKey::Ordinal(n) => Ok(Letter::wrapping(n)),
            LetterKey::Symbol(c) => Letter::from_symbol(c),
            LetterKey::Letter(l) => Ok(l),
        }
    }
}

impl From<i32> for LetterKey {
    fn from(n: i32) -> Self {
        LetterKey::Ordinal(n)
    }
}

impl From<char> for LetterKey {
    fn from(c: char) -> Self {
        LetterKey::Symbol(c)
    }
}

impl From<Letter> for LetterKey {
    fn from(l: Letter) -> Self {
        LetterKey::Letter(l)
    }
}

/// Accidentals, declared from flattest to sharpest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Modifier {
    DoubleFlat,
    Flat,
    Natural,
    Sharp,
    DoubleSharp,
}

impl Modifier {
    /// Construction order of the alphabet: natural first, then sharps, then flats
    pub const ALL: [Modifier; 5] = [
        Modifier::Natural,
        Modifier::Sharp,
        Modifier::DoubleSharp,
        Modifier::Flat,
        Modifier::DoubleFlat,
    ];

    /// Signed half-step adjustment
    pub const fn mod_val(self) -> HalfSteps {
        match self {
            Modifier::DoubleFlat => -2,
            Modifier::Flat => -1,
            Modifier::Natural => 0,
            Modifier::Sharp => 1,
            Modifier::DoubleSharp => 2,
        }
    }

    pub fn from_mod_val(mod_val: HalfSteps) -> Option<Self> {
        match mod_val {
            -2 => Some(Modifier::DoubleFlat),
            -1 => Some(Modifier::Flat),
            0 => Some(Modifier::Natural),
            1 => Some(Modifier::Sharp),
            2 => Some(Modifier::DoubleSharp),
            _ => None,
        }
    }

    /// Suffix used in canonical names ("DSHARP")
    pub fn name_suffix(self) -> &'static str {
        match self {
            Modifier::DoubleFlat => "DOUBLEFLAT",
            Modifier::Flat => "FLAT",
            Modifier::Natural => "",
            Modifier::Sharp => "SHARP",
            Modifier::DoubleSharp => "DOUBLESHARP",
        }
    }

    pub fn ascii(self) -> &'static str {
        match self {
            Modifier::DoubleFlat => "bb",
            Modifier::Flat => "b",
            Modifier::Natural => "",
            Modifier::Sharp => "#",
            Modifier::DoubleSharp => "##",
        }
    }

    pub fn unicode(self) -> &'static str {
        match self {
            Modifier::DoubleFlat => "\u{1D12B}",
            Modifier::Flat => "\u{266D}",
            Modifier::Natural => "",
            Modifier::Sharp => "\u{266F}",
            Modifier::DoubleSharp => "\u{1D12A}",
        }
    }

    pub fn verbose(self) -> &'static str {
        match self {
            Modifier::DoubleFlat => "DOUBLE FLAT",
            Modifier::Flat => "FLAT",
            Modifier::Natural => "NATURAL",
            Modifier::Sharp => "SHARP",
            Modifier::DoubleSharp => "DOUBLE SHARP",
        }
    }

    pub fn lilypond(self) -> &'static str {
        match self {
            Modifier::DoubleFlat => "eses",
            Modifier::Flat => "es",
            Modifier::Natural => "",
            Modifier::Sharp => "is",
            Modifier::DoubleSharp => "isis",
        }
    }

    /// Parse the part of a chroma name after the letter
    fn parse_suffix(letter: Letter, suffix: &str) -> Option<Self> {
        let upper = suffix.to_uppercase();
        match upper.as_str() {
            "" | "NATURAL" | "\u{266E}" => Some(Modifier::Natural),
            "SHARP" | "#" | "\u{266F}" | "IS" => Some(Modifier::Sharp),
            "DOUBLESHARP" | "DUBSHARP" | "##" | "X" | "\u{1D12A}" | "ISIS" => {
                Some(Modifier::DoubleSharp)
            }
            "FLAT" | "B" | "\u{266D}" | "ES" => Some(Modifier::Flat),
            "DOUBLEFLAT" | "DUBFLAT" | "BB" | "\u{1D12B}" | "ESES" => Some(Modifier::DoubleFlat),
            // Lilypond contracts "aes" and "ees" to "as" and "es"
            "S" if matches!(letter, Letter::A | Letter::E) => Some(Modifier::Flat),
            "SES" if matches!(letter, Letter::A | Letter::E) => Some(Modifier::DoubleFlat),
            _ => None,
        }
    }
}

/// Which accidental direction wins when several spellings are equally plain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Preference {
    Sharp,
    Flat,
    /// No direction; the first spelling in letter order wins
    #[default]
    Contextual,
}

impl Preference {
    pub fn name(self) -> &'static str {
        match self {
            Preference::Sharp => "sharp",
            Preference::Flat => "flat",
            Preference::Contextual => "contextual",
        }
    }

    pub fn from_name(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "sharp" | "#" => Some(Preference::Sharp),
            "flat" | "b" => Some(Preference::Flat),
            "contextual" | "none" => Some(Preference::Contextual),
            _ => None,
        }
    }

    /// Whether a spelling with this modifier value satisfies the preference
    pub fn accepts(self, mod_val: HalfSteps) -> bool {
        match self {
            Preference::Sharp => mod_val > 0,
            Preference::Flat => mod_val < 0,
            Preference::Contextual => false,
        }
    }
}

impl fmt::Display for Preference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Key that identifies a spelling; two chroma are the same object iff
/// their keys match.
pub type SpellingKey = (Letter, Modifier);

/// A spelled pitch class.
///
/// `==`, `<` and `Hash` follow the half-step [`value`](Chroma::value), so
/// enharmonic spellings are equal. Identity is [`Chroma::same_spelling`].
#[derive(Clone, Copy)]
pub struct Chroma {
    letter: Letter,
    modifier: Modifier,
}

impl Chroma {
    pub const fn new(letter: Letter, modifier: Modifier) -> Self {
        Self { letter, modifier }
    }

    /// Look up a chroma by canonical name ("DSHARP"), ASCII ("D#"),
    /// Unicode ("D♯") or Lilypond ("dis") spelling.
    pub fn from_name(name: &str) -> Result<Self> {
        let trimmed = name.trim();
        let mut chars = trimmed.chars();
        let first = chars
            .next()
            .ok_or_else(|| TheoryError::UnknownChroma(name.to_string()))?;
        let letter =
            Letter::from_symbol(first).map_err(|_| TheoryError::UnknownChroma(name.to_string()))?;
        let modifier = Modifier::parse_suffix(letter, chars.as_str().trim())
            .ok_or_else(|| TheoryError::UnknownChroma(name.to_string()))?;
        Ok(Chroma::new(letter, modifier))
    }

    /// The canonical spelling of a half-step value under `preference`.
    ///
    /// Equivalent to reducing the value's enharmonic set in the essential
    /// alphabet: naturals win, otherwise one accidental in the preferred
    /// direction. Contextual picks the lower letter, which is the sharp.
    pub fn from_value(value: HalfSteps, preference: Preference) -> Self {
        let value = value.rem_euclid(OCTAVE);
        if let Some(letter) = Letter::ALL.into_iter().find(|l| l.base_value() == value) {
            return Chroma::new(letter, Modifier::Natural);
        }
        match preference {
            Preference::Flat => {
                let above = Letter::ALL
                    .into_iter()
                    .find(|l| l.base_value() == value + 1)
                    .unwrap_or(Letter::C);
                Chroma::new(above, Modifier::Flat)
            }
            Preference::Sharp | Preference::Contextual => {
                let below = Letter::ALL
                    .into_iter()
                    .find(|l| l.base_value() == value - 1)
                    .unwrap_or(Letter::B);
                Chroma::new(below, Modifier::Sharp)
            }
        }
    }

    pub fn letter(self) -> Letter {
        self.letter
    }

    pub fn modifier(self) -> Modifier {
        self.modifier
    }

    pub fn spelling(self) -> SpellingKey {
        (self.letter, self.modifier)
    }

    /// Letter ordinal (C = 0 .. B = 6)
    pub fn base_num(self) -> i32 {
        self.letter.ordinal()
    }

    /// Half-steps of the unmodified letter
    pub fn base_value(self) -> HalfSteps {
        self.letter.base_value()
    }

    pub fn mod_val(self) -> HalfSteps {
        self.modifier.mod_val()
    }

    /// Pitch-class value, 0..12
    pub fn value(self) -> HalfSteps {
        (self.base_value() + self.mod_val()).rem_euclid(OCTAVE)
    }

    /// Spelling identity. `==` only checks that two chroma sound alike.
    pub fn same_spelling(self, other: Chroma) -> bool {
        self.spelling() == other.spelling()
    }

    pub fn name(self) -> String {
        format!("{}{}", self.letter.symbol(), self.modifier.name_suffix())
    }

    pub fn ascii(self) -> String {
        format!("{}{}", self.letter.symbol(), self.modifier.ascii())
    }

    pub fn unicode(self) -> String {
        format!("{}{}", self.letter.symbol(), self.modifier.unicode())
    }

    pub fn verbose(self) -> String {
        format!("{} {}", self.letter.symbol(), self.modifier.verbose())
    }

    /// Lilypond note name in the default (Dutch) language
    pub fn lilypond(self) -> String {
        format!(
            "{}{}",
            self.letter.symbol().to_ascii_lowercase(),
            self.modifier.lilypond()
        )
    }

    pub fn syllable(self) -> &'static str {
        self.letter.syllable()
    }

    /// Every spelling in the alphabet with this chroma's value.
    pub fn enharmonics(self, include_original: bool) -> ChromaSet {
        self.enharmonics_with(include_original, true)
    }

    /// Enharmonic spellings, optionally without double sharps and double
    /// flats. The original spelling is kept whenever `include_original`
    /// is set, even if it is a double accidental.
    pub fn enharmonics_with(self, include_original: bool, include_doubles: bool) -> ChromaSet {
        essential_set()
            .chroma_by_value(self.value())
            .iter()
            .filter(|c| include_doubles || c.mod_val().abs() < 2 || c.same_spelling(self))
            .filter(|c| include_original || !c.same_spelling(self))
            .collect()
    }

    /// Raise by `n` half-steps, spelled with a sharp preference.
    pub fn augment(self, n: HalfSteps) -> Chroma {
        self.augment_with(n, Preference::Sharp)
    }

    pub fn augment_with(self, n: HalfSteps, preference: Preference) -> Chroma {
        Chroma::from_value(self.value() + n, preference)
    }

    /// Lower by `n` half-steps, spelled with a flat preference.
    pub fn diminish(self, n: HalfSteps) -> Chroma {
        self.augment_with(-n, Preference::Flat)
    }

    pub fn diminish_with(self, n: HalfSteps, preference: Preference) -> Chroma {
        self.augment_with(-n, preference)
    }

    /// Raise by a spelled interval: the letter moves by the interval number
    /// and the modifier absorbs the half-step difference.
    pub fn augment_by(self, interval: Interval) -> Chroma {
        let letter = Letter::wrapping(self.base_num() + interval.number() as i32 - 1);
        self.respell_on(letter, self.value() + interval.half_steps())
    }

    /// Lower by a spelled interval
    pub fn diminish_by(self, interval: Interval) -> Chroma {
        let letter = Letter::wrapping(self.base_num() - (interval.number() as i32 - 1));
        self.respell_on(letter, self.value() - interval.half_steps())
    }

    fn respell_on(self, letter: Letter, target: HalfSteps) -> Chroma {
        let mut needed = (target - letter.base_value()).rem_euclid(OCTAVE);
        if needed > OCTAVE / 2 {
            needed -= OCTAVE;
        }
        match Modifier::from_mod_val(needed) {
            Some(modifier) => Chroma::new(letter, modifier),
            None => {
                let preference = if self.mod_val() < 0 {
                    Preference::Flat
                } else {
                    Preference::Sharp
                };
                let fallback = Chroma::from_value(target, preference);
                debug!(
                    "no spelling of {} on letter {}; using {}",
                    target.rem_euclid(OCTAVE),
                    letter,
                    fallback.name()
                );
                fallback
            }
        }
    }

    /// Shortest distance in half-steps, in either direction (0..=6)
    pub fn delta(self, other: Chroma) -> HalfSteps {
        let up = (self.value() - other.value()).rem_euclid(OCTAVE);
        up.min(OCTAVE - up)
    }

    /// The interval from `lower` up to `self`
    pub fn interval_from(self, lower: Chroma) -> Interval {
        let half_steps = (self.value() - lower.value()).rem_euclid(OCTAVE);
        let number = (self.base_num() - lower.base_num()).rem_euclid(7) + 1;
        Interval::respell(number as u8, half_steps)
    }
}

impl PartialEq for Chroma {
    fn eq(&self, other: &Self) -> bool {
        self.value() == other.value()
    }
}

impl Eq for Chroma {}

impl Hash for Chroma {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value().hash(state);
    }
}

impl PartialOrd for Chroma {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Chroma {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value().cmp(&other.value())
    }
}

impl From<Chroma> for HalfSteps {
    fn from(c: Chroma) -> Self {
        c.value()
    }
}

impl fmt::Debug for Chroma {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl fmt::Display for Chroma {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.ascii())
    }
}

impl super::Notation for Chroma {
    fn ascii(&self) -> String {
        Chroma::ascii(*self)
    }

    fn unicode(&self) -> String {
        Chroma::unicode(*self)
    }

    fn verbose(&self) -> String {
        Chroma::verbose(*self)
    }

    fn lilypond(&self) -> String {
        Chroma::lilypond(*self)
    }
}

pub const C: Chroma = Chroma::new(Letter::C, Modifier::Natural);
pub const CSHARP: Chroma = Chroma::new(Letter::C, Modifier::Sharp);
pub const CDOUBLESHARP: Chroma = Chroma::new(Letter::C, Modifier::DoubleSharp);
pub const CFLAT: Chroma = Chroma::new(Letter::C, Modifier::Flat);
pub const CDOUBLEFLAT: Chroma = Chroma::new(Letter::C, Modifier::DoubleFlat);
pub const D: Chroma = Chroma::new(Letter::D, Modifier::Natural);
pub const DSHARP: Chroma = Chroma::new(Letter::D, Modifier::Sharp);
pub const DDOUBLESHARP: Chroma = Chroma::new(Letter::D, Modifier::DoubleSharp);
pub const DFLAT: Chroma = Chroma::new(Letter::D, Modifier::Flat);
pub const DDOUBLEFLAT: Chroma = Chroma::new(Letter::D, Modifier::DoubleFlat);
pub const E: Chroma = Chroma::new(Letter::E, Modifier::Natural);
pub const ESHARP: Chroma = Chroma::new(Letter::E, Modifier::Sharp);
pub const EDOUBLESHARP: Chroma = Chroma::new(Letter::E, Modifier::DoubleSharp);
pub const EFLAT: Chroma = Chroma::new(Letter::E, Modifier::Flat);
pub const EDOUBLEFLAT: Chroma = Chroma::new(Letter::E, Modifier::DoubleFlat);
pub const F: Chroma = Chroma::new(Letter::F, Modifier::Natural);
pub const FSHARP: Chroma = Chroma::new(Letter::F, Modifier::Sharp);
pub const FDOUBLESHARP: Chroma = Chroma::new(Letter::F, Modifier::DoubleSharp);
pub const FFLAT: Chroma = Chroma::new(Letter::F, Modifier::Flat);
pub const FDOUBLEFLAT: Chroma = Chroma::new(Letter::F, Modifier::DoubleFlat);
pub const G: Chroma = Chroma::new(Letter::G, Modifier::Natural);
pub const GSHARP: Chroma = Chroma::new(Letter::G, Modifier::Sharp);
pub const GDOUBLESHARP: Chroma = Chroma::new(Letter::G, Modifier::DoubleSharp);
pub const GFLAT: Chroma = Chroma::new(Letter::G, Modifier::Flat);
pub const GDOUBLEFLAT: Chroma = Chroma::new(Letter::G, Modifier::DoubleFlat);
pub const A: Chroma = Chroma::new(Letter::A, Modifier::Natural);
pub const ASHARP: Chroma = Chroma::new(Letter::A, Modifier::Sharp);
pub const ADOUBLESHARP: Chroma = Chroma::new(Letter::A, Modifier::DoubleSharp);
pub const AFLAT: Chroma = Chroma::new(Letter::A, Modifier::Flat);
pub const ADOUBLEFLAT: Chroma = Chroma::new(Letter::A, Modifier::DoubleFlat);
pub const B: Chroma = Chroma::new(Letter::B, Modifier::Natural);
pub const BSHARP: Chroma = Chroma::new(Letter::B, Modifier::Sharp);
pub const BDOUBLESHARP: Chroma = Chroma::new(Letter::B, Modifier::DoubleSharp);
pub const BFLAT: Chroma = Chroma::new(Letter::B, Modifier::Flat);
pub const BDOUBLEFLAT: Chroma = Chroma::new(Letter::B, Modifier::DoubleFlat);

/// Every letter with every modifier, letter-major
pub const ALL_CHROMA: [Chroma; 35] = {
    let mut all = [C; 35];
    let mut i = 0;
    while i < 35 {
        all[i] = Chroma::new(Letter::ALL[i / 5], Modifier::ALL[i % 5]);
        i += 1;
    }
    all
};

/// The Western 12-tone alphabet, built on first use
pub fn essential_set() -> &'static ChromaSet {
    static ESSENTIAL: OnceLock<ChromaSet> = OnceLock::new();
    ESSENTIAL.get_or_init(|| {
        let set: ChromaSet = ALL_CHROMA.into_iter().collect();
        trace!("essential set initialised with {} chroma", set.len());
        set
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_values() {
        assert_eq!(C.value(), 0);
        assert_eq!(DSHARP.value(), 3);
        assert_eq!(CFLAT.value(), 11);
        assert_eq!(BSHARP.value(), 0);
        assert_eq!(CDOUBLEFLAT.value(), 10);
        assert_eq!(BDOUBLESHARP.value(), 1);
    }

    #[test]
    fn test_attributes() {
        assert_eq!(DSHARP.name(), "DSHARP");
        assert_eq!(DSHARP.letter(), Letter::D);
        assert_eq!(DSHARP.base_num(), 1);
        assert_eq!(DSHARP.base_value(), 2);
        assert_eq!(DSHARP.mod_val(), 1);
        assert_eq!(FDOUBLEFLAT.name(), "FDOUBLEFLAT");
        assert_eq!(FDOUBLEFLAT.mod_val(), -2);
    }

    #[test]
    fn test_renderings() {
        assert_eq!(DSHARP.ascii(), "D#");
        assert_eq!(DSHARP.unicode(), "D\u{266F}");
        assert_eq!(BFLAT.unicode(), "B\u{266D}");
        assert_eq!(FDOUBLESHARP.unicode(), "F\u{1D12A}");
        assert_eq!(EDOUBLEFLAT.unicode(), "E\u{1D12B}");
        assert_eq!(DSHARP.verbose(), "D SHARP");
        assert_eq!(C.verbose(), "C NATURAL");
        assert_eq!(DSHARP.lilypond(), "dis");
        assert_eq!(EFLAT.lilypond(), "ees");
        assert_eq!(GDOUBLEFLAT.lilypond(), "geses");
        assert_eq!(G.syllable(), "sol");
    }

    #[test]
    fn test_from_name() {
        assert!(Chroma::from_name("DSHARP").unwrap().same_spelling(DSHARP));
        assert!(Chroma::from_name("D#").unwrap().same_spelling(DSHARP));
        assert!(Chroma::from_name("d\u{266F}").unwrap().same_spelling(DSHARP));
        assert!(Chroma::from_name("dis").unwrap().same_spelling(DSHARP));
        assert!(Chroma::from_name("Bb").unwrap().same_spelling(BFLAT));
        assert!(Chroma::from_name("as").unwrap().same_spelling(AFLAT));
        assert!(Chroma::from_name("es").unwrap().same_spelling(EFLAT));
        assert!(Chroma::from_name("Fx").unwrap().same_spelling(FDOUBLESHARP));
        assert!(Chroma::from_name("C").unwrap().same_spelling(C));
        assert!(Chroma::from_name("H").is_err());
        assert!(Chroma::from_name("").is_err());
        assert!(Chroma::from_name("Dq").is_err());
    }

    #[test]
    fn test_equality_is_enharmonic() {
        assert_eq!(CSHARP, DFLAT);
        assert!(!CSHARP.same_spelling(DFLAT));
        assert!(CSHARP.same_spelling(CSHARP));
        assert!(C < D);
        assert!(BSHARP < CSHARP);
    }

    #[test]
    fn test_letter_lookup() {
        assert_eq!(Letter::from_ordinal(4).unwrap(), Letter::G);
        assert!(matches!(
            Letter::from_ordinal(7),
            Err(TheoryError::Range { .. })
        ));
        assert_eq!(Letter::wrapping(-1), Letter::B);
        assert_eq!(Letter::from_symbol('e').unwrap(), Letter::E);
        assert!(Letter::from_symbol('h').is_err());
    }

    #[test]
    fn test_alphabet_size() {
        assert_eq!(ALL_CHROMA.len(), 35);
        assert_eq!(essential_set().len(), 35);
        assert_eq!(essential_set().modulo_base(), 12);
    }

    #[test]
    fn test_enharmonics() {
        let group = DSHARP.enharmonics(true);
        assert_eq!(group.len(), 3);
        assert!(group.contains(DSHARP));
        assert!(group.contains(EFLAT));
        assert!(group.contains(FDOUBLEFLAT));

        let others = DSHARP.enharmonics(false);
        assert_eq!(others.len(), 2);
        assert!(!others.contains(DSHARP));

        // G sharp has only one partner
        assert_eq!(GSHARP.enharmonics(false).len(), 1);
    }

    #[test]
    fn test_enharmonics_without_doubles() {
        // D is only reachable otherwise as C double sharp or E double flat
        assert_eq!(D.enharmonics(false).len(), 2);
        assert!(D.enharmonics_with(false, false).is_empty());
        assert_eq!(D.enharmonics_with(true, false), ChromaSet::from([D]));

        let singles = C.enharmonics_with(true, false);
        assert!(singles.contains(C));
        assert!(singles.contains(BSHARP));
        assert!(!singles.contains(DDOUBLEFLAT));
        assert_eq!(singles.len(), 2);

        let all = C.enharmonics_with(true, true);
        assert!(all.contains(DDOUBLEFLAT));
        assert_eq!(all, C.enharmonics(true));

        // a double accidental keeps itself when asked to
        let from_double = FDOUBLEFLAT.enharmonics_with(true, false);
        assert!(from_double.contains(FDOUBLEFLAT));
        assert!(from_double.contains(DSHARP));
        assert!(from_double.contains(EFLAT));
    }

    #[test]
    fn test_preference_names() {
        assert_eq!(Preference::from_name("sharp"), Some(Preference::Sharp));
        assert_eq!(Preference::from_name(" Flat "), Some(Preference::Flat));
        assert_eq!(Preference::from_name("b"), Some(Preference::Flat));
        assert_eq!(Preference::from_name("contextual"), Some(Preference::Contextual));
        assert_eq!(Preference::from_name("upward"), None);
        for p in [Preference::Sharp, Preference::Flat, Preference::Contextual] {
            assert_eq!(Preference::from_name(p.name()), Some(p));
        }
    }

    #[test]
    fn test_augment_and_diminish() {
        assert!(C.augment(1).same_spelling(CSHARP));
        assert!(C.diminish(1).same_spelling(B));
        assert!(D.diminish(1).same_spelling(DFLAT));
        assert!(E.augment(1).same_spelling(F));
        assert!(B.augment(1).same_spelling(C));
        assert!(C.augment(0).same_spelling(C));
        assert!(BSHARP.augment(0).same_spelling(C));
        assert!(C.augment_with(6, Preference::Flat).same_spelling(GFLAT));
    }

    #[test]
    fn test_from_value_matches_alphabet_reduction() {
        for value in 0..12 {
            for preference in [Preference::Sharp, Preference::Flat, Preference::Contextual] {
                let reduced = essential_set()
                    .chroma_by_value(value)
                    .enharmonic_reduce(preference)
                    .unwrap();
                assert!(
                    Chroma::from_value(value, preference).same_spelling(reduced),
                    "value {value} with {preference}"
                );
            }
        }
    }

    #[test]
    fn test_spelled_augmentation() {
        use crate::music::interval::{
            AUGMENTED_FOURTH, DIMINISHED_FIFTH, MAJOR_THIRD, MINOR_THIRD, PERFECT_FIFTH,
        };

        assert!(C.augment_by(MAJOR_THIRD).same_spelling(E));
        assert!(A.augment_by(MAJOR_THIRD).same_spelling(CSHARP));
        assert!(C.augment_by(AUGMENTED_FOURTH).same_spelling(FSHARP));
        assert!(C.augment_by(DIMINISHED_FIFTH).same_spelling(GFLAT));
        assert!(BFLAT.augment_by(PERFECT_FIFTH).same_spelling(F));
        assert!(E.diminish_by(MINOR_THIRD).same_spelling(CSHARP));
        assert!(F.diminish_by(PERFECT_FIFTH).same_spelling(BFLAT));
    }

    #[test]
    fn test_spelled_augmentation_falls_back() {
        use crate::music::interval::DOUBLY_AUGMENTED_FOURTH;

        // B double sharp up a doubly augmented fourth would need E quadruple sharp
        let result = BDOUBLESHARP.augment_by(DOUBLY_AUGMENTED_FOURTH);
        assert_eq!(result.value(), (BDOUBLESHARP.value() + 7) % 12);
        assert!(result.same_spelling(GSHARP));
    }

    #[test]
    fn test_delta() {
        assert_eq!(C.delta(G), 5);
        assert_eq!(C.delta(FSHARP), 6);
        assert_eq!(B.delta(C), 1);
        assert_eq!(CSHARP.delta(DFLAT), 0);
    }

    #[test]
    fn test_interval_from() {
        use crate::music::interval::{
            DIMINISHED_SECOND, DIMINISHED_UNISON, MAJOR_THIRD, MINOR_SEVENTH, PERFECT_FIFTH,
        };

        assert!(G.interval_from(C).same_as(PERFECT_FIFTH));
        assert!(E.interval_from(C).same_as(MAJOR_THIRD));
        assert!(C.interval_from(D).same_as(MINOR_SEVENTH));
        assert!(C.interval_from(BSHARP).same_as(DIMINISHED_SECOND));
        assert!(C.interval_from(CSHARP).same_as(DIMINISHED_UNISON));
    }
}
