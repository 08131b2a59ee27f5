use unicode_normalization::UnicodeNormalization;

use crate::domain::rules::{HOLES, MAX_GROUP_TAG_CHARS};
use crate::errors::domain::{DomainError, InfraErrorKind, ValidationKind};

/// One submitted hole value, classified before validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoleInput {
    /// No result yet for this hole.
    Unset,
    /// An integral stroke count as received. Zero is treated as unset.
    Strokes(i64),
    /// Anything that is not an integral number (string, fraction, bool, ...).
    Invalid,
}

/// Nine hole results for one player's week. `None` means the hole is unset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct HoleScores([Option<u8>; HOLES]);

impl HoleScores {
    /// Build from raw stroke counts where 0 means unset.
    pub fn from_strokes(strokes: [u8; HOLES]) -> Self {
        Self(strokes.map(|s| (s > 0).then_some(s)))
    }

    /// Validate a submission: exactly nine values, each unset or a whole number >= 1,
    /// with at least one hole set.
    pub fn from_submission(values: &[HoleInput]) -> Result<Self, DomainError> {
        if values.len() != HOLES {
            return Err(DomainError::validation(
                ValidationKind::HoleCount,
                format!("Expected {HOLES} hole scores, got {}", values.len()),
            ));
        }

        let mut holes = [None; HOLES];
        for (idx, value) in values.iter().enumerate() {
            holes[idx] = match *value {
                HoleInput::Unset | HoleInput::Strokes(0) => None,
                HoleInput::Strokes(n) => match u8::try_from(n) {
                    Ok(strokes) => Some(strokes),
                    Err(_) => return Err(invalid_hole(idx)),
                },
                HoleInput::Invalid => return Err(invalid_hole(idx)),
            };
        }

        let scores = Self(holes);
        if scores.set_count() == 0 {
            return Err(DomainError::validation(
                ValidationKind::NoHoleScores,
                "At least one hole score is required",
            ));
        }
        Ok(scores)
    }

    /// Rebuild from persisted values. Stored zeros are read back as unset.
    pub fn from_stored(values: &[Option<i64>]) -> Result<Self, DomainError> {
        if values.len() != HOLES {
            return Err(DomainError::infra(
                InfraErrorKind::DataCorruption,
                format!("Stored scorecard has {} holes", values.len()),
            ));
        }
        let mut holes = [None; HOLES];
        for (idx, value) in values.iter().enumerate() {
            holes[idx] = match value {
                None | Some(0) => None,
                Some(n) => Some(u8::try_from(*n).map_err(|_| {
                    DomainError::infra(
                        InfraErrorKind::DataCorruption,
                        format!("Stored hole {} has out-of-range value {n}", idx + 1),
                    )
                })?),
            };
        }
        Ok(Self(holes))
    }

    pub fn to_stored(&self) -> Vec<Option<i64>> {
        self.0.iter().map(|h| h.map(i64::from)).collect()
    }

    /// Overlay `incoming` onto `self`: set holes in `incoming` win, unset holes keep the old value.
    pub fn merge(&self, incoming: &HoleScores) -> HoleScores {
        let mut merged = self.0;
        for (slot, new) in merged.iter_mut().zip(incoming.0.iter()) {
            if new.is_some() {
                *slot = *new;
            }
        }
        HoleScores(merged)
    }

    pub fn get(&self, hole: usize) -> Option<u8> {
        self.0.get(hole).copied().flatten()
    }

    pub fn holes(&self) -> &[Option<u8>; HOLES] {
        &self.0
    }

    pub fn set_count(&self) -> usize {
        self.0.iter().filter(|h| h.is_some()).count()
    }

    /// Sum of set holes; unset holes count as zero.
    pub fn total(&self) -> i32 {
        self.0.iter().flatten().map(|&s| i32::from(s)).sum()
    }
}

fn invalid_hole(idx: usize) -> DomainError {
    DomainError::validation(
        ValidationKind::InvalidHoleScore,
        format!("Hole {} must be unset or a whole number of strokes >= 1", idx + 1),
    )
}

/// Trim and NFC-normalize an optional group tag. Blank tags become `None`.
pub fn normalize_group_tag(raw: Option<&str>) -> Result<Option<String>, DomainError> {
    let Some(raw) = raw else {
        return Ok(None);
    };
    let tag: String = raw.trim().nfc().collect();
    if tag.is_empty() {
        return Ok(None);
    }
    if tag.chars().count() > MAX_GROUP_TAG_CHARS {
        return Err(DomainError::validation_other(format!(
            "Group tag must be at most {MAX_GROUP_TAG_CHARS} characters"
        )));
    }
    Ok(Some(tag))
}
