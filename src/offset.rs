//! Décalages temporels (`chrono::TimeDelta`) : format texte et parsing.
//!
//! Format : `[-][j.]hh:mm[:ss[.fffffffff]]`, proche de l'affichage d'un
//! `TimeSpan` .NET. Les heures ne sont pas bornées quand le jour est absent
//! (`36:00` est accepté au parsing ; l'affichage normalise en `1.12:00:00`).

use crate::algebra::SlotError;
use chrono::TimeDelta;

/// Décalage depuis une référence arbitraire (ex. lundi 00:00).
pub type Offset = TimeDelta;

const SECS_PER_DAY: i64 = 86_400;

/// Raccourci minutes.
pub fn minutes(m: i64) -> Offset {
    TimeDelta::minutes(m)
}

/// Raccourci heures.
pub fn hours(h: i64) -> Offset {
    TimeDelta::hours(h)
}

/// Rend un décalage sous la forme `[-][j.]hh:mm:ss[.fraction]`.
pub fn format_offset(offset: Offset) -> String {
    let negative = offset < TimeDelta::zero();
    let abs = if negative { -offset } else { offset };

    let total = abs.num_seconds();
    let nanos = abs.subsec_nanos();
    let days = total / SECS_PER_DAY;
    let rem = total % SECS_PER_DAY;
    let (h, m, s) = (rem / 3600, rem % 3600 / 60, rem % 60);

    let mut out = String::with_capacity(20);
    if negative {
        out.push('-');
    }
    if days > 0 {
        out.push_str(&format!("{days}."));
    }
    out.push_str(&format!("{h:02}:{m:02}:{s:02}"));
    if nanos > 0 {
        let frac = format!("{nanos:09}");
        out.push('.');
        out.push_str(frac.trim_end_matches('0'));
    }
    out
}

pub(crate) fn format_offset_ref(offset: &Offset) -> String {
    format_offset(*offset)
}

/// Parse un décalage au format de [`format_offset`].
pub fn parse_offset(raw: &str) -> Result<Offset, SlotError> {
    let err = || SlotError::Parse(format!("invalid offset: {raw:?}"));

    let trimmed = raw.trim();
    let (negative, body) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed),
    };

    let (days, clock) = match body.split_once('.') {
        Some((d, rest)) if !d.contains(':') => (parse_number(d).ok_or_else(err)?, rest),
        _ => (0, body),
    };

    let parts: Vec<&str> = clock.split(':').collect();
    let (h, m, sec_part) = match parts.as_slice() {
        [h, m] => (*h, *m, None),
        [h, m, s] => (*h, *m, Some(*s)),
        _ => return Err(err()),
    };
    let h = parse_number(h).ok_or_else(err)?;
    let m = parse_number(m).ok_or_else(err)?;
    if m >= 60 {
        return Err(err());
    }

    let (s, nanos) = match sec_part {
        None => (0, 0),
        Some(sec) => {
            let (whole, frac) = match sec.split_once('.') {
                Some((w, f)) => (w, Some(f)),
                None => (sec, None),
            };
            let s = parse_number(whole).ok_or_else(err)?;
            if s >= 60 {
                return Err(err());
            }
            let nanos = match frac {
                None => 0,
                Some(f) => parse_fraction(f).ok_or_else(err)?,
            };
            (s, nanos)
        }
    };

    let secs = days
        .checked_mul(SECS_PER_DAY)
        .and_then(|d| h.checked_mul(3600).and_then(|h| d.checked_add(h)))
        .and_then(|t| t.checked_add(m * 60 + s))
        .ok_or_else(err)?;

    let offset = TimeDelta::try_seconds(secs)
        .and_then(|t| t.checked_add(&TimeDelta::nanoseconds(nanos)))
        .ok_or_else(err)?;

    Ok(if negative { -offset } else { offset })
}

fn parse_number(s: &str) -> Option<i64> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

fn parse_fraction(f: &str) -> Option<i64> {
    if f.is_empty() || f.len() > 9 || !f.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let padded = format!("{f:0<9}");
    padded.parse().ok()
}

/// (Dé)sérialisation serde d'un décalage sous forme texte.
#[cfg(feature = "serde")]
pub mod hms {
    use super::{format_offset, parse_offset, Offset};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(offset: &Offset, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format_offset(*offset))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Offset, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse_offset(&raw).map_err(serde::de::Error::custom)
    }
}
