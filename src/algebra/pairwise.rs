//! Opérateurs ensemblistes sur deux créneaux (zéro à deux créneaux en sortie).

use super::{classify, Overlap};
use crate::model::Slot;
use crate::offset::Offset;
use chrono::TimeDelta;
use std::cmp::{max, min};

/// Temps ouvert dans `fst` mais pas dans `snd`.
pub fn difference(fst: Slot, snd: Slot) -> Vec<Slot> {
    let out = match classify(fst, snd) {
        Overlap::Equal => Vec::new(),
        Overlap::None => vec![fst],
        Overlap::Intersect => {
            let rest = if fst.start() < snd.start() {
                span(fst.start(), snd.start())
            } else {
                // vide si `fst` démarre avec `snd` et finit avant
                span(snd.end(), fst.end())
            };
            rest.into_iter().collect()
        }
        Overlap::ProperSubset => {
            if snd.start() < fst.start() {
                Vec::new()
            } else {
                [span(fst.start(), snd.start()), span(snd.end(), fst.end())]
                    .into_iter()
                    .flatten()
                    .collect()
            }
        }
    };
    non_empty(out)
}

/// Plus petit recouvrement des deux créneaux, fusionnés s'ils se touchent.
pub fn union(fst: Slot, snd: Slot) -> Vec<Slot> {
    let out = match classify(fst, snd) {
        Overlap::Equal => vec![fst],
        Overlap::None => {
            if snd.start() < fst.start() {
                vec![snd, fst]
            } else {
                vec![fst, snd]
            }
        }
        Overlap::Intersect => vec![Slot::new_unchecked(
            min(fst.start(), snd.start()),
            max(fst.end(), snd.end()) - min(fst.start(), snd.start()),
        )],
        Overlap::ProperSubset => vec![Slot::new_unchecked(
            min(fst.start(), snd.start()),
            max(fst.duration(), snd.duration()),
        )],
    };
    non_empty(out)
}

/// Temps ouvert dans les deux créneaux.
pub fn intersection(fst: Slot, snd: Slot) -> Vec<Slot> {
    let out = match classify(fst, snd) {
        Overlap::Equal => vec![fst],
        Overlap::None => Vec::new(),
        Overlap::Intersect => span(max(fst.start(), snd.start()), min(fst.end(), snd.end()))
            .into_iter()
            .collect(),
        Overlap::ProperSubset => {
            if fst.duration() <= snd.duration() {
                vec![fst]
            } else {
                vec![snd]
            }
        }
    };
    non_empty(out)
}

fn non_empty(mut slots: Vec<Slot>) -> Vec<Slot> {
    slots.retain(|s| !s.is_empty());
    slots
}

// `[from, to)` s'il est de longueur strictement positive.
fn span(from: Offset, to: Offset) -> Option<Slot> {
    (to - from > TimeDelta::zero()).then(|| Slot::new_unchecked(from, to - from))
}
