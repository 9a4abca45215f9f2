use crate::algebra::SlotError;
use crate::offset::{self, format_offset, parse_offset, Offset};
use chrono::TimeDelta;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Créneau `[start, start + duration)`.
///
/// La durée n'est jamais négative ; un créneau de durée nulle est le
/// résultat « vide » canonique et n'apparaît pas dans les sorties des
/// opérateurs ensemblistes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "RawSlot")
)]
pub struct Slot {
    #[cfg_attr(feature = "serde", serde(with = "crate::offset::hms"))]
    start: Offset,
    #[cfg_attr(feature = "serde", serde(with = "crate::offset::hms"))]
    duration: Offset,
}

impl Slot {
    /// Crée un créneau en validant que `duration >= 0` et que la borne
    /// `start + duration` reste représentable.
    pub fn new(start: Offset, duration: Offset) -> Result<Self, SlotError> {
        if duration < TimeDelta::zero() {
            return Err(SlotError::NegativeDuration(duration));
        }
        if start.checked_add(&duration).is_none() {
            return Err(SlotError::OutOfRange(start));
        }
        Ok(Self { start, duration })
    }

    /// Constructeur interne des opérateurs : l'invariant est garanti par
    /// l'appelant.
    pub(crate) fn new_unchecked(start: Offset, duration: Offset) -> Self {
        debug_assert!(
            duration >= TimeDelta::zero(),
            "slot duration must not be negative"
        );
        debug_assert!(
            start.checked_add(&duration).is_some(),
            "slot end must be representable"
        );
        Self { start, duration }
    }

    /// Créneau `[start, end)` ; `end < start` est refusé.
    pub fn between(start: Offset, end: Offset) -> Result<Self, SlotError> {
        let duration = end
            .checked_sub(&start)
            .ok_or(SlotError::OutOfRange(start))?;
        Self::new(start, duration)
    }

    pub fn from_minutes(start: i64, duration: i64) -> Result<Self, SlotError> {
        Self::new(offset::minutes(start), offset::minutes(duration))
    }

    pub fn from_hours(start: i64, duration: i64) -> Result<Self, SlotError> {
        Self::new(offset::hours(start), offset::hours(duration))
    }

    pub const fn start(&self) -> Offset {
        self.start
    }

    pub const fn duration(&self) -> Offset {
        self.duration
    }

    /// Borne exclusive `start + duration`.
    pub fn end(&self) -> Offset {
        self.start + self.duration
    }

    pub fn is_empty(&self) -> bool {
        self.duration == TimeDelta::zero()
    }

    /// `true` si `at` tombe dans `[start, end)`.
    pub fn contains(&self, at: Offset) -> bool {
        self.start <= at && at < self.end()
    }

    /// Décale le créneau vers l'avant, durée inchangée.
    ///
    /// # Panics
    ///
    /// Si le créneau décalé sort de la plage de [`Offset`] ; voir
    /// [`Slot::try_move_forward`].
    pub fn move_forward(&self, span: Offset) -> Self {
        Self::new_unchecked(self.start + span, self.duration)
    }

    /// Décale le créneau vers l'arrière, durée inchangée.
    ///
    /// # Panics
    ///
    /// Si le créneau décalé sort de la plage de [`Offset`] ; voir
    /// [`Slot::try_move_back`].
    pub fn move_back(&self, span: Offset) -> Self {
        Self::new_unchecked(self.start - span, self.duration)
    }

    /// Variante vérifiée de [`Slot::move_forward`].
    pub fn try_move_forward(&self, span: Offset) -> Result<Self, SlotError> {
        let start = self
            .start
            .checked_add(&span)
            .ok_or(SlotError::OutOfRange(self.start))?;
        Self::new(start, self.duration)
    }

    /// Variante vérifiée de [`Slot::move_back`].
    pub fn try_move_back(&self, span: Offset) -> Result<Self, SlotError> {
        let start = self
            .start
            .checked_sub(&span)
            .ok_or(SlotError::OutOfRange(self.start))?;
        Self::new(start, self.duration)
    }

    /// Créneau suivant de même durée, accolé à la fin de celui-ci.
    ///
    /// # Panics
    ///
    /// Si la fin du créneau suivant n'est pas représentable.
    pub fn tile_forward(&self) -> Self {
        self.move_forward(self.duration)
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "o: {} d: {}",
            format_offset(self.start),
            format_offset(self.duration)
        )
    }
}

/// Littéral `START+DURATION`, ex. `09:00+01:30`.
impl FromStr for Slot {
    type Err = SlotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (start, duration) = s
            .trim()
            .rsplit_once('+')
            .ok_or_else(|| SlotError::Parse(format!("expected START+DURATION, got {s:?}")))?;
        Self::new(parse_offset(start)?, parse_offset(duration)?)
    }
}

#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawSlot {
    #[serde(with = "crate::offset::hms")]
    start: Offset,
    #[serde(with = "crate::offset::hms")]
    duration: Offset,
}

#[cfg(feature = "serde")]
impl TryFrom<RawSlot> for Slot {
    type Error = SlotError;

    fn try_from(raw: RawSlot) -> Result<Self, Self::Error> {
        Slot::new(raw.start, raw.duration)
    }
}
