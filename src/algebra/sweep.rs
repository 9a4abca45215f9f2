//! Opérateurs ensemblistes sur deux séquences de créneaux.
//!
//! Les entrées doivent être triées par début et disjointes (contact toléré) ;
//! ce n'est vérifié qu'en build debug. Chaque opérateur est un balayage
//! itératif gauche-droite en `O(|a| + |b|)` qui applique les opérateurs de
//! [`pairwise`] paire par paire. Les créneaux vides en entrée sont ignorés.

use super::{classify, pairwise, util, Overlap};
use crate::model::Slot;
use std::cmp::Ordering;

/// Temps ouvert dans `minuend` mais dans aucun créneau de `subtrahend`.
pub fn difference(minuend: &[Slot], subtrahend: &[Slot]) -> Vec<Slot> {
    util::debug_assert_canonical(minuend, "difference (minuend)");
    util::debug_assert_canonical(subtrahend, "difference (subtrahend)");

    if minuend.is_empty() {
        return Vec::new();
    }

    let mut out = Vec::with_capacity(minuend.len());
    let mut j = 0usize;

    for &slot in minuend.iter().filter(|s| !s.is_empty()) {
        let mut current = slot;
        loop {
            let Some(&sub) = subtrahend.get(j) else {
                out.push(current);
                break;
            };
            if sub.is_empty() {
                j += 1;
                continue;
            }
            match classify(current, sub) {
                Overlap::None if sub.end() < current.start() => j += 1,
                Overlap::None => {
                    out.push(current);
                    break;
                }
                Overlap::Intersect | Overlap::Equal | Overlap::ProperSubset => {
                    // ce qui précède `sub` est définitif ; ce qui le suit
                    // reste à confronter aux soustractions suivantes
                    let mut rest = None;
                    for piece in pairwise::difference(current, sub) {
                        if piece.start() < sub.start() {
                            out.push(piece);
                        } else {
                            rest = Some(piece);
                        }
                    }
                    match rest {
                        Some(piece) => {
                            current = piece;
                            j += 1;
                        }
                        // `sub` peut encore mordre sur le créneau suivant
                        None => break,
                    }
                }
            }
        }
    }

    #[cfg(feature = "logging")]
    tracing::trace!(
        minuend = minuend.len(),
        subtrahend = subtrahend.len(),
        out = out.len(),
        "sequence difference"
    );
    out
}

/// Union fusionnée : triée, disjointe, les créneaux accolés ne font plus
/// qu'un.
pub fn union(a: &[Slot], b: &[Slot]) -> Vec<Slot> {
    util::debug_assert_canonical(a, "union (lhs)");
    util::debug_assert_canonical(b, "union (rhs)");

    let mut out = Vec::with_capacity(a.len() + b.len());
    let mut acc = None;
    let (mut i, mut j) = (0usize, 0usize);

    while i < a.len() || j < b.len() {
        let take_lhs = j >= b.len() || (i < a.len() && a[i].start() <= b[j].start());
        let next = if take_lhs {
            i += 1;
            a[i - 1]
        } else {
            j += 1;
            b[j - 1]
        };
        merge_into(&mut out, &mut acc, next);
    }
    out.extend(acc);

    #[cfg(feature = "logging")]
    tracing::trace!(lhs = a.len(), rhs = b.len(), out = out.len(), "sequence union");
    out
}

/// Temps ouvert à la fois dans `a` et dans `b`.
pub fn intersection(a: &[Slot], b: &[Slot]) -> Vec<Slot> {
    util::debug_assert_canonical(a, "intersection (lhs)");
    util::debug_assert_canonical(b, "intersection (rhs)");

    if a.is_empty() || b.is_empty() {
        return Vec::new();
    }

    let mut out = Vec::new();
    let (mut i, mut j) = (0usize, 0usize);

    while i < a.len() && j < b.len() {
        let (x, y) = (a[i], b[j]);
        if x.is_empty() {
            i += 1;
            continue;
        }
        if y.is_empty() {
            j += 1;
            continue;
        }
        match classify(x, y) {
            Overlap::None => {}
            Overlap::Intersect | Overlap::Equal | Overlap::ProperSubset => {
                out.extend(pairwise::intersection(x, y));
            }
        }
        // celui qui finit le premier ne peut plus rien croiser
        match x.end().cmp(&y.end()) {
            Ordering::Less => i += 1,
            Ordering::Greater => j += 1,
            Ordering::Equal => {
                i += 1;
                j += 1;
            }
        }
    }

    #[cfg(feature = "logging")]
    tracing::trace!(lhs = a.len(), rhs = b.len(), out = out.len(), "sequence intersection");
    out
}

/// Trie des créneaux quelconques et les fusionne en séquence canonique.
pub fn normalize(mut slots: Vec<Slot>) -> Vec<Slot> {
    slots.sort_unstable();
    let mut out = Vec::with_capacity(slots.len());
    let mut acc = None;
    for slot in slots {
        merge_into(&mut out, &mut acc, slot);
    }
    out.extend(acc);
    out
}

// `next` ne commence jamais avant `acc`.
fn merge_into(out: &mut Vec<Slot>, acc: &mut Option<Slot>, next: Slot) {
    if next.is_empty() {
        return;
    }
    *acc = match acc.take() {
        None => Some(next),
        Some(current) => {
            let mut merged = pairwise::union(current, next);
            let last = merged.pop();
            out.append(&mut merged);
            last
        }
    };
}
