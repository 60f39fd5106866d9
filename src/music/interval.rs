// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Intervals: a quality plus a diatonic number.
//!
//! Every (quality, number) pair has exactly one size in half-steps. The
//! reverse lookup is ambiguous (an augmented fourth and a diminished fifth
//! are both six half-steps) and is settled by [`Quality::priority`], then
//! by the smaller number.
//!
//! Numbers run from 1 (unison) to 13 (thirteenth). Anything wider is a
//! [`QualifiedInterval`]: a simple interval plus whole octaves.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Sub};
use std::sync::OnceLock;

use tracing::{debug, trace};

use super::addend::Distance;
use super::pitch::MIDDLE_C;
use super::quality::{NumberKind, Quality};
use super::{octave_reduce, HalfSteps, Notation, OCTAVE};
use crate::error::{Result, TheoryError};

/// Widest interval number representable without octave qualification
pub const MAX_NUMBER: u8 = 13;

/// Largest simple interval number (the octave)
pub const SIMPLE_MAX: u8 = 8;

const NUMBER_NAMES: [&str; MAX_NUMBER as usize] = [
    "unison",
    "second",
    "third",
    "fourth",
    "fifth",
    "sixth",
    "seventh",
    "octave",
    "ninth",
    "tenth",
    "eleventh",
    "twelfth",
    "thirteenth",
];

const fn kind_of(number: u8) -> NumberKind {
    match (number - 1) % 7 {
        0 | 3 | 4 => NumberKind::Perfect,
        _ => NumberKind::Imperfect,
    }
}

/// Size of the perfect or major interval with this number
const fn plain_half_steps(number: u8) -> HalfSteps {
    const MAJOR_SCALE: [HalfSteps; 7] = [0, 2, 4, 5, 7, 9, 11];
    MAJOR_SCALE[((number - 1) % 7) as usize] + OCTAVE * ((number - 1) / 7) as HalfSteps
}

fn check_number(number: u8) -> Result<()> {
    if (1..=MAX_NUMBER).contains(&number) {
        Ok(())
    } else {
        Err(TheoryError::Range {
            what: "interval number",
            value: number as i32,
            min: 1,
            max: MAX_NUMBER as i32,
            hint: "; use QualifiedInterval for wider spans",
        })
    }
}

/// A named interval.
///
/// `==`, `<` and `Hash` follow [`half_steps`](Interval::half_steps), so an
/// augmented fourth equals a diminished fifth. Use [`Interval::same_as`]
/// for identity.
#[derive(Clone, Copy)]
pub struct Interval {
    quality: Quality,
    number: u8,
    half_steps: HalfSteps,
}

impl Interval {
    /// Caller guarantees the number is in range and the quality fits it
    const fn build(quality: Quality, number: u8) -> Self {
        let offset = match quality.offset(kind_of(number)) {
            Some(offset) => offset,
            None => 0,
        };
        Self {
            quality,
            number,
            half_steps: plain_half_steps(number) + offset,
        }
    }

    pub fn new(quality: Quality, number: u8) -> Result<Self> {
        check_number(number)?;
        if !quality.applies_to(kind_of(number)) {
            return Err(TheoryError::InvalidQuality {
                quality: quality.name(),
                number,
            });
        }
        Ok(Interval::build(quality, number))
    }

    /// Parse a short name such as "M3", "P5", "dd7" or "A11"
    pub fn from_short_name(name: &str) -> Result<Self> {
        let unknown = || TheoryError::UnknownInterval(name.to_string());
        let trimmed = name.trim();
        let split = trimmed
            .find(|c: char| c.is_ascii_digit())
            .ok_or_else(unknown)?;
        let quality = Quality::from_short_name(&trimmed[..split]).ok_or_else(unknown)?;
        let number: u8 = trimmed[split..].parse().map_err(|_| unknown())?;
        Interval::new(quality, number)
    }

    pub fn quality(self) -> Quality {
        self.quality
    }

    pub fn number(self) -> u8 {
        self.number
    }

    pub fn half_steps(self) -> HalfSteps {
        self.half_steps
    }

    pub fn kind(self) -> NumberKind {
        kind_of(self.number)
    }

    /// Wider than an octave (ninth through thirteenth)
    pub fn is_compound(self) -> bool {
        self.number > SIMPLE_MAX
    }

    /// Identity: same quality and number
    pub fn same_as(self, other: Interval) -> bool {
        self.quality == other.quality && self.number == other.number
    }

    pub fn short_name(self) -> String {
        format!("{}{}", self.quality.short_name(), self.number)
    }

    /// Spelled-out name, e.g. "major third"
    pub fn name(self) -> String {
        format!(
            "{} {}",
            self.quality.name(),
            NUMBER_NAMES[(self.number - 1) as usize]
        )
    }

    fn residue(self) -> HalfSteps {
        self.half_steps.rem_euclid(OCTAVE)
    }

    /// Every interval from unison to thirteenth in every valid quality
    pub fn table() -> &'static [Interval] {
        static TABLE: OnceLock<Vec<Interval>> = OnceLock::new();
        TABLE.get_or_init(|| {
            let table: Vec<Interval> = (1..=MAX_NUMBER)
                .flat_map(|number| {
                    Quality::ALL
                        .into_iter()
                        .filter(move |q| q.applies_to(kind_of(number)))
                        .map(move |q| Interval::build(q, number))
                })
                .collect();
            trace!("interval table initialised with {} entries", table.len());
            table
        })
    }

    /// Intervals from unison to octave
    pub fn simple_intervals() -> impl Iterator<Item = Interval> {
        Interval::table()
            .iter()
            .copied()
            .filter(|i| !i.is_compound())
    }

    /// All intervals matching the given coordinates, best candidate first.
    /// Half-steps are compared modulo 12.
    pub fn get_intervals(
        quality: Option<Quality>,
        number: Option<u8>,
        half_steps: Option<HalfSteps>,
    ) -> Vec<Interval> {
        let residue = half_steps.map(|h| h.rem_euclid(OCTAVE));
        let mut matches: Vec<Interval> = Interval::table()
            .iter()
            .copied()
            .filter(|i| quality.map_or(true, |q| i.quality == q))
            .filter(|i| number.map_or(true, |n| i.number == n))
            .filter(|i| residue.map_or(true, |r| i.residue() == r))
            .collect();
        matches.sort_by_key(|i| (i.quality.priority(), i.number));
        matches
    }

    /// Every interval with the same half-step residue, best candidate
    /// first. Compound spellings are included.
    pub fn enharmonics(self, include_original: bool) -> Vec<Interval> {
        Interval::get_intervals(None, None, Some(self.half_steps))
            .into_iter()
            .filter(|i| include_original || !i.same_as(self))
            .collect()
    }

    /// The single best interval for the given coordinates.
    ///
    /// When the coordinates together match nothing but half-steps were
    /// supplied, the best half-steps-only match is returned instead.
    pub fn get_interval(
        quality: Option<Quality>,
        number: Option<u8>,
        half_steps: Option<HalfSteps>,
    ) -> Result<Interval> {
        if let Some(n) = number {
            check_number(n)?;
        }
        let query = describe_query(quality, number, half_steps);
        if quality.is_none() && number.is_none() && half_steps.is_none() {
            return Err(TheoryError::NoMatch { query });
        }

        if let Some(best) = Interval::get_intervals(quality, number, half_steps).first() {
            return Ok(*best);
        }
        if let Some(h) = half_steps {
            if let Some(best) = Interval::get_intervals(None, None, Some(h)).first() {
                debug!("no interval for {}; using {}", query, best.short_name());
                return Ok(*best);
            }
        }
        Err(TheoryError::NoMatch { query })
    }

    /// The preferred simple spelling of a half-step count (mod 12)
    pub fn from_half_steps(half_steps: HalfSteps) -> Interval {
        const PREFERRED: [Interval; 12] = [
            PERFECT_UNISON,
            MINOR_SECOND,
            MAJOR_SECOND,
            MINOR_THIRD,
            MAJOR_THIRD,
            PERFECT_FOURTH,
            DIMINISHED_FIFTH,
            PERFECT_FIFTH,
            MINOR_SIXTH,
            MAJOR_SIXTH,
            MINOR_SEVENTH,
            MAJOR_SEVENTH,
        ];
        PREFERRED[half_steps.rem_euclid(OCTAVE) as usize]
    }

    /// Spell `half_steps` on `number` if any quality allows it, otherwise
    /// fall back to [`Interval::from_half_steps`].
    pub(crate) fn respell(number: u8, half_steps: HalfSteps) -> Interval {
        let residue = half_steps.rem_euclid(OCTAVE);
        let exact = Interval::table()
            .iter()
            .copied()
            .filter(|i| i.number == number && i.residue() == residue)
            .min_by_key(|i| i.quality.priority());
        match exact {
            Some(interval) => interval,
            None => {
                let fallback = Interval::from_half_steps(residue);
                debug!(
                    "no quality spells {} half-steps as a {}; using {}",
                    residue,
                    NUMBER_NAMES[(number.clamp(1, MAX_NUMBER) - 1) as usize],
                    fallback.short_name()
                );
                fallback
            }
        }
    }

    /// Widen by a number of half-steps (keeping the number where
    /// possible) or by another interval (adding the numbers).
    pub fn augmented(self, distance: impl Into<Distance>) -> Interval {
        match distance.into() {
            Distance::HalfSteps(n) => Interval::respell(self.number, self.half_steps + n),
            Distance::Interval(step) => self.stacked(step, 1),
            Distance::Qualified(step) => self.stacked(step.interval(), 1),
        }
    }

    pub fn diminished(self, distance: impl Into<Distance>) -> Interval {
        match distance.into() {
            Distance::HalfSteps(n) => Interval::respell(self.number, self.half_steps - n),
            Distance::Interval(step) => self.stacked(step, -1),
            Distance::Qualified(step) => self.stacked(step.interval(), -1),
        }
    }

    fn stacked(self, step: Interval, direction: i32) -> Interval {
        let mut number = self.number as i32 + direction * (step.number as i32 - 1);
        while number > MAX_NUMBER as i32 {
            number -= 7;
        }
        while number < 1 {
            number += 7;
        }
        Interval::respell(number as u8, self.half_steps + direction * step.half_steps)
    }

    /// Invert the interval: numbers sum to 9 and qualities swap.
    /// Compound intervals invert their simple part.
    pub fn inverted(self) -> Interval {
        let simple = if self.is_compound() {
            self.number - 7
        } else {
            self.number
        };
        Interval::build(self.quality.inverse(), 9 - simple)
    }
}

fn describe_query(
    quality: Option<Quality>,
    number: Option<u8>,
    half_steps: Option<HalfSteps>,
) -> String {
    let mut parts = Vec::new();
    if let Some(q) = quality {
        parts.push(format!("quality={}", q));
    }
    if let Some(n) = number {
        parts.push(format!("number={}", n));
    }
    if let Some(h) = half_steps {
        parts.push(format!("half_steps={}", h));
    }
    if parts.is_empty() {
        "an empty query".to_string()
    } else {
        parts.join(", ")
    }
}

impl PartialEq for Interval {
    fn eq(&self, other: &Self) -> bool {
        self.half_steps == other.half_steps
    }
}

impl Eq for Interval {}

impl Hash for Interval {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.half_steps.hash(state);
    }
}

impl PartialOrd for Interval {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Interval {
    fn cmp(&self, other: &Self) -> Ordering {
        self.half_steps.cmp(&other.half_steps)
    }
}

impl From<Interval> for HalfSteps {
    fn from(i: Interval) -> Self {
        i.half_steps
    }
}

impl fmt::Debug for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.short_name())
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.short_name())
    }
}

impl Notation for Interval {
    fn ascii(&self) -> String {
        self.short_name()
    }

    fn unicode(&self) -> String {
        self.short_name()
    }

    fn verbose(&self) -> String {
        self.name()
    }

    /// The interval as a two-note chord built up from middle C
    fn lilypond(&self) -> String {
        format!(
            "<{} {}>",
            MIDDLE_C.lilypond(),
            MIDDLE_C.augmented(*self).lilypond()
        )
    }
}

impl Add<HalfSteps> for Interval {
    type Output = Interval;

    fn add(self, rhs: HalfSteps) -> Interval {
        self.augmented(rhs)
    }
}

impl Add<Interval> for Interval {
    type Output = Interval;

    fn add(self, rhs: Interval) -> Interval {
        self.augmented(rhs)
    }
}

impl Sub<HalfSteps> for Interval {
    type Output = Interval;

    fn sub(self, rhs: HalfSteps) -> Interval {
        self.diminished(rhs)
    }
}

impl Sub<Interval> for Interval {
    type Output = Interval;

    fn sub(self, rhs: Interval) -> Interval {
        self.diminished(rhs)
    }
}

/// A simple interval stacked on whole octaves.
///
/// The stored interval is always simple (unison through octave); compound
/// intervals are folded into one extra octave on construction.
#[derive(Clone, Copy)]
pub struct QualifiedInterval {
    interval: Interval,
    octaves: i32,
}

impl QualifiedInterval {
    pub fn new(interval: Interval, octaves: i32) -> Self {
        if interval.is_compound() {
            Self {
                interval: Interval::build(interval.quality, interval.number - 7),
                octaves: octaves + 1,
            }
        } else {
            Self { interval, octaves }
        }
    }

    /// The preferred spelling of any half-step count
    pub fn from_half_steps(half_steps: HalfSteps) -> Self {
        let (step, octaves) = octave_reduce(half_steps, OCTAVE);
        Self::new(Interval::from_half_steps(step), octaves)
    }

    pub fn interval(self) -> Interval {
        self.interval
    }

    pub fn octaves(self) -> i32 {
        self.octaves
    }

    pub fn half_steps(self) -> HalfSteps {
        self.interval.half_steps + self.octaves * OCTAVE
    }

    /// Diatonic number including the octaves (a major tenth is 10)
    pub fn number(self) -> i32 {
        self.interval.number as i32 + 7 * self.octaves
    }

    pub fn same_as(self, other: QualifiedInterval) -> bool {
        self.interval.same_as(other.interval) && self.octaves == other.octaves
    }

    pub fn short_name(self) -> String {
        format!("{}{}", self.interval.quality.short_name(), self.number())
    }

    /// Widen, carrying into the octave count when the simple part wraps.
    pub fn augmented(self, distance: impl Into<Distance>) -> Self {
        match distance.into() {
            Distance::HalfSteps(n) => {
                let (step, carried) = octave_reduce(n, OCTAVE);
                let mut octaves = self.octaves + carried;
                if step == 0 {
                    return Self::new(self.interval, octaves);
                }
                let shifted = self.interval.augmented(step);
                if shifted <= self.interval {
                    octaves += 1;
                }
                Self::new(shifted, octaves)
            }
            Distance::Interval(step) => self.stacked(Self::new(step, 0), 1),
            Distance::Qualified(step) => self.stacked(step, 1),
        }
    }

    /// Narrow, borrowing from the octave count when the simple part wraps.
    pub fn diminished(self, distance: impl Into<Distance>) -> Self {
        match distance.into() {
            Distance::HalfSteps(n) => {
                let (step, carried) = octave_reduce(n, OCTAVE);
                let mut octaves = self.octaves - carried;
                if step == 0 {
                    return Self::new(self.interval, octaves);
                }
                let shifted = self.interval.diminished(step);
                if shifted >= self.interval {
                    octaves -= 1;
                }
                Self::new(shifted, octaves)
            }
            Distance::Interval(step) => self.stacked(Self::new(step, 0), -1),
            Distance::Qualified(step) => self.stacked(step, -1),
        }
    }

    /// Spelled stacking: the simple parts combine by number and the
    /// octave count is solved from the exact half-step total.
    fn stacked(self, step: QualifiedInterval, direction: i32) -> Self {
        let target = self.half_steps() + direction * step.half_steps();
        let simple = Self::new(self.interval.stacked(step.interval, direction), 0).interval;
        let octaves = (target - simple.half_steps).div_euclid(OCTAVE);
        Self::new(simple, octaves)
    }
}

impl From<Interval> for QualifiedInterval {
    fn from(interval: Interval) -> Self {
        Self::new(interval, 0)
    }
}

impl From<QualifiedInterval> for HalfSteps {
    fn from(q: QualifiedInterval) -> Self {
        q.half_steps()
    }
}

impl PartialEq for QualifiedInterval {
    fn eq(&self, other: &Self) -> bool {
        self.half_steps() == other.half_steps()
    }
}

impl Eq for QualifiedInterval {}

impl PartialOrd for QualifiedInterval {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for QualifiedInterval {
    fn cmp(&self, other: &Self) -> Ordering {
        self.half_steps().cmp(&other.half_steps())
    }
}

impl fmt::Debug for QualifiedInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}+{}oct", self.interval.short_name(), self.octaves)
    }
}

impl fmt::Display for QualifiedInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.short_name())
    }
}

impl Add<HalfSteps> for QualifiedInterval {
    type Output = QualifiedInterval;

    fn add(self, rhs: HalfSteps) -> QualifiedInterval {
        self.augmented(rhs)
    }
}

impl Sub<HalfSteps> for QualifiedInterval {
    type Output = QualifiedInterval;

    fn sub(self, rhs: HalfSteps) -> QualifiedInterval {
        self.diminished(rhs)
    }
}

macro_rules! interval_constants {
    ($($name:ident = $quality:ident $number:literal;)*) => {
        $(pub const $name: Interval = Interval::build(Quality::$quality, $number);)*
    };
}

interval_constants! {
    DOUBLY_DIMINISHED_UNISON = DoublyDiminished 1;
    DIMINISHED_UNISON = Diminished 1;
    PERFECT_UNISON = Perfect 1;
    AUGMENTED_UNISON = Augmented 1;
    DOUBLY_AUGMENTED_UNISON = DoublyAugmented 1;

    DOUBLY_DIMINISHED_SECOND = DoublyDiminished 2;
    DIMINISHED_SECOND = Diminished 2;
    MINOR_SECOND = Minor 2;
    MAJOR_SECOND = Major 2;
    AUGMENTED_SECOND = Augmented 2;
    DOUBLY_AUGMENTED_SECOND = DoublyAugmented 2;

    DOUBLY_DIMINISHED_THIRD = DoublyDiminished 3;
    DIMINISHED_THIRD = Diminished 3;
    MINOR_THIRD = Minor 3;
    MAJOR_THIRD = Major 3;
    AUGMENTED_THIRD = Augmented 3;
    DOUBLY_AUGMENTED_THIRD = DoublyAugmented 3;

    DOUBLY_DIMINISHED_FOURTH = DoublyDiminished 4;
    DIMINISHED_FOURTH = Diminished 4;
    PERFECT_FOURTH = Perfect 4;
    AUGMENTED_FOURTH = Augmented 4;
    DOUBLY_AUGMENTED_FOURTH = DoublyAugmented 4;

    DOUBLY_DIMINISHED_FIFTH = DoublyDiminished 5;
    DIMINISHED_FIFTH = Diminished 5;
    PERFECT_FIFTH = Perfect 5;
    AUGMENTED_FIFTH = Augmented 5;
    DOUBLY_AUGMENTED_FIFTH = DoublyAugmented 5;

    DOUBLY_DIMINISHED_SIXTH = DoublyDiminished 6;
    DIMINISHED_SIXTH = Diminished 6;
    MINOR_SIXTH = Minor 6;
    MAJOR_SIXTH = Major 6;
    AUGMENTED_SIXTH = Augmented 6;
    DOUBLY_AUGMENTED_SIXTH = DoublyAugmented 6;

    DOUBLY_DIMINISHED_SEVENTH = DoublyDiminished 7;
    DIMINISHED_SEVENTH = Diminished 7;
    MINOR_SEVENTH = Minor 7;
    MAJOR_SEVENTH = Major 7;
    AUGMENTED_SEVENTH = Augmented 7;
    DOUBLY_AUGMENTED_SEVENTH = DoublyAugmented 7;

    DOUBLY_DIMINISHED_OCTAVE = DoublyDiminished 8;
    DIMINISHED_OCTAVE = Diminished 8;
    PERFECT_OCTAVE = Perfect 8;
    AUGMENTED_OCTAVE = Augmented 8;
    DOUBLY_AUGMENTED_OCTAVE = DoublyAugmented 8;

    MINOR_NINTH = Minor 9;
    MAJOR_NINTH = Major 9;
    AUGMENTED_NINTH = Augmented 9;
    MINOR_TENTH = Minor 10;
    MAJOR_TENTH = Major 10;
    PERFECT_ELEVENTH = Perfect 11;
    AUGMENTED_ELEVENTH = Augmented 11;
    DIMINISHED_TWELFTH = Diminished 12;
    PERFECT_TWELFTH = Perfect 12;
    MINOR_THIRTEENTH = Minor 13;
    MAJOR_THIRTEENTH = Major 13;
}
