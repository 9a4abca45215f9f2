use crate::offset::{format_offset_ref, Offset};
use thiserror::Error;

/// Relation entre deux créneaux, telle que rendue par [`classify`](super::classify).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Overlap {
    /// Disjoints, sans même se toucher.
    None,
    /// Chevauchement partiel ; deux créneaux accolés tombent ici.
    Intersect,
    /// Même début, même durée.
    Equal,
    /// L'un contient l'autre.
    ProperSubset,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SlotError {
    #[error("invalid slot: negative duration {}", format_offset_ref(.0))]
    NegativeDuration(Offset),
    #[error("invalid slot: end out of range from start {}", format_offset_ref(.0))]
    OutOfRange(Offset),
    #[error("invalid divisor: {0} (must be > 0)")]
    InvalidDivisor(i32),
    #[error("invalid tile length: {} (must be > 0)", format_offset_ref(.0))]
    InvalidLength(Offset),
    #[error("parse error: {0}")]
    Parse(String),
}
