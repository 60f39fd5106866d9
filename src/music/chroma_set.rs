// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Sets of spelled chroma.
//!
//! Membership is by spelling, so {C♯, D♭} has two members even though they
//! compare equal. Iteration runs in letter order, then flattest modifier
//! first.

use std::collections::BTreeMap;
use std::fmt;

use tracing::debug;

use super::chroma::{Chroma, LetterKey, Preference, SpellingKey};
use super::HalfSteps;
use crate::error::{Result, TheoryError};

#[derive(Clone, Default, PartialEq, Eq)]
pub struct ChromaSet {
    members: BTreeMap<SpellingKey, Chroma>,
}

impl ChromaSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Chroma> + '_ {
        self.members.values().copied()
    }

    /// Add a chroma; returns false if that spelling was already present
    pub fn insert(&mut self, chroma: Chroma) -> bool {
        self.members.insert(chroma.spelling(), chroma).is_none()
    }

    /// Add a chroma by name
    pub fn insert_name(&mut self, name: &str) -> Result<bool> {
        let chroma = Chroma::from_name(name)?;
        Ok(self.insert(chroma))
    }

    pub fn remove(&mut self, chroma: Chroma) -> bool {
        self.members.remove(&chroma.spelling()).is_some()
    }

    /// Membership by spelling
    pub fn contains(&self, chroma: Chroma) -> bool {
        self.members.contains_key(&chroma.spelling())
    }

    /// Membership by value: any enharmonic spelling counts
    pub fn contains_enharmonic(&self, chroma: Chroma) -> bool {
        self.iter().any(|c| c == chroma)
    }

    /// One more than the highest value present (12 for a full alphabet)
    pub fn modulo_base(&self) -> HalfSteps {
        self.iter().map(|c| c.value() + 1).max().unwrap_or(0)
    }

    /// Members whose value equals `value` modulo [`modulo_base`](Self::modulo_base)
    pub fn chroma_by_value(&self, value: HalfSteps) -> ChromaSet {
        let base = self.modulo_base();
        if base == 0 {
            return ChromaSet::new();
        }
        let value = value.rem_euclid(base);
        self.iter().filter(|c| c.value() == value).collect()
    }

    /// Members on one letter, named by ordinal (mod 7), symbol or [`Letter`](super::Letter)
    pub fn chroma_by_letter(&self, key: impl Into<LetterKey>) -> Result<ChromaSet> {
        let letter = key.into().resolve()?;
        Ok(self.iter().filter(|c| c.letter() == letter).collect())
    }

    /// Members ordered by absolute modifier, stable over set order
    pub fn sorted_by_modifier(&self) -> Vec<Chroma> {
        let mut sorted: Vec<Chroma> = self.iter().collect();
        sorted.sort_by_key(|c| c.mod_val().abs());
        sorted
    }

    /// Partition by modifier, keyed ascending. With `absolute` the key is
    /// the modifier magnitude, so sharps and flats share a group.
    pub fn modifier_groups(&self, absolute: bool) -> BTreeMap<HalfSteps, ChromaSet> {
        let mut groups: BTreeMap<HalfSteps, ChromaSet> = BTreeMap::new();
        for chroma in self.iter() {
            let key = if absolute {
                chroma.mod_val().abs()
            } else {
                chroma.mod_val()
            };
            groups.entry(key).or_default().insert(chroma);
        }
        groups
    }

    /// Partition by half-step value, keyed ascending
    pub fn value_groups(&self) -> BTreeMap<HalfSteps, ChromaSet> {
        let mut groups: BTreeMap<HalfSteps, ChromaSet> = BTreeMap::new();
        for chroma in self.iter() {
            groups.entry(chroma.value()).or_default().insert(chroma);
        }
        groups
    }

    /// True when every member has the same value
    pub fn is_enharmonic(&self) -> bool {
        let mut values = self.iter().map(|c| c.value());
        match values.next() {
            Some(first) => values.all(|v| v == first),
            None => true,
        }
    }

    /// Collapse mutually enharmonic members to one canonical spelling.
    ///
    /// The plainest spellings (smallest absolute modifier) are kept; a
    /// natural wins outright, otherwise the first spelling in the preferred
    /// direction, otherwise the first in set order.
    pub fn enharmonic_reduce(&self, preference: Preference) -> Result<Chroma> {
        let first = self.iter().next().ok_or(TheoryError::EmptySet)?;
        if !self.is_enharmonic() {
            return Err(TheoryError::NotEnharmonic {
                members: self.to_string(),
            });
        }
        if self.len() == 1 {
            return Ok(first);
        }

        let plainest = self
            .modifier_groups(true)
            .into_values()
            .next()
            .ok_or(TheoryError::EmptySet)?;
        let sorted = plainest.sorted_by_modifier();
        let head = *sorted.first().ok_or(TheoryError::EmptySet)?;
        if sorted.len() == 1 {
            return Ok(head);
        }

        if let Some(natural) = sorted.iter().find(|c| c.mod_val() == 0) {
            return Ok(*natural);
        }
        match sorted.iter().find(|c| preference.accepts(c.mod_val())) {
            Some(preferred) => Ok(*preferred),
            None => {
                debug!(
                    "no {} spelling in {}; falling back to {}",
                    preference,
                    plainest,
                    head.name()
                );
                Ok(head)
            }
        }
    }

    /// One canonical spelling for each value present
    pub fn chromatic_reduce(&self, preference: Preference) -> Result<ChromaSet> {
        self.value_groups()
            .into_values()
            .map(|group| group.enharmonic_reduce(preference))
            .collect()
    }

    /// Augment every member; spellings that collide are merged
    pub fn augment(&self, n: HalfSteps) -> ChromaSet {
        self.iter().map(|c| c.augment(n)).collect()
    }

    pub fn diminish(&self, n: HalfSteps) -> ChromaSet {
        self.iter().map(|c| c.diminish(n)).collect()
    }

    pub fn intersection(&self, other: &ChromaSet) -> ChromaSet {
        self.iter().filter(|c| other.contains(*c)).collect()
    }

    pub fn union(&self, other: &ChromaSet) -> ChromaSet {
        self.iter().chain(other.iter()).collect()
    }

    pub fn difference(&self, other: &ChromaSet) -> ChromaSet {
        self.iter().filter(|c| !other.contains(*c)).collect()
    }

    /// Canonical names in set order
    pub fn names(&self) -> Vec<String> {
        self.iter().map(|c| c.name()).collect()
    }
}

impl FromIterator<Chroma> for ChromaSet {
    fn from_iter<I: IntoIterator<Item = Chroma>>(iter: I) -> Self {
        let mut set = ChromaSet::new();
        set.extend(iter);
        set
    }
}

impl Extend<Chroma> for ChromaSet {
    fn extend<I: IntoIterator<Item = Chroma>>(&mut self, iter: I) {
        for chroma in iter {
            self.insert(chroma);
        }
    }
}

impl<const N: usize> From<[Chroma; N]> for ChromaSet {
    fn from(chroma: [Chroma; N]) -> Self {
        chroma.into_iter().collect()
    }
}

impl fmt::Debug for ChromaSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl fmt::Display for ChromaSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}}}", self.names().join(", "))
    }
}
