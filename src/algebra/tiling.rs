use super::SlotError;
use crate::model::Slot;
use crate::offset::Offset;
use chrono::TimeDelta;

/// Découpe `slot` en `parts` créneaux contigus de même durée
/// `floor(duration / parts)` ; le reste de la division est perdu.
pub fn split(slot: Slot, parts: i32) -> Result<Vec<Slot>, SlotError> {
    if parts <= 0 {
        return Err(SlotError::InvalidDivisor(parts));
    }
    let quotient = match slot.duration().num_nanoseconds() {
        Some(n) => TimeDelta::nanoseconds(n / i64::from(parts)),
        None => slot.duration() / parts,
    };
    let first = Slot::new_unchecked(slot.start(), quotient);
    Ok((0..parts).map(|k| first.move_forward(quotient * k)).collect())
}

/// Pave `slot` avec autant de créneaux de durée exacte `length` qu'il en
/// tient, depuis le début.
pub fn tile(slot: Slot, length: Offset) -> Result<Vec<Slot>, SlotError> {
    if length <= TimeDelta::zero() {
        return Err(SlotError::InvalidLength(length));
    }
    let count = match (slot.duration().num_nanoseconds(), length.num_nanoseconds()) {
        (Some(d), Some(l)) => d / l,
        _ => slot.duration().num_milliseconds() / length.num_milliseconds().max(1),
    };
    let first = Slot::new_unchecked(slot.start(), length);
    // Pas de réservation d'avance : `count` dépend des entrées. Aucun
    // créneau n'est calculé au-delà de la fin de `slot`.
    let mut out = Vec::new();
    let mut next = first;
    for k in 0..count {
        if k > 0 {
            next = next.tile_forward();
        }
        out.push(next);
    }
    Ok(out)
}
