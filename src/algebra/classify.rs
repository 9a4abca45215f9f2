use super::Overlap;
use crate::model::Slot;

/// Classe la relation entre `fst` et `snd` (premier test vérifié gagnant).
///
/// Deux créneaux qui se touchent (`fst.end() == snd.start()`) sont classés
/// [`Overlap::Intersect`] et non [`Overlap::None`] : l'union les fusionne.
pub fn classify(fst: Slot, snd: Slot) -> Overlap {
    if fst.end() < snd.start() || snd.end() < fst.start() {
        return Overlap::None;
    }
    if touches(fst, snd) {
        return Overlap::Intersect;
    }
    if (fst.start() <= snd.start() && fst.end() < snd.end())
        || (snd.start() <= fst.start() && snd.end() < fst.end())
    {
        return Overlap::Intersect;
    }
    if fst == snd {
        return Overlap::Equal;
    }
    Overlap::ProperSubset
}

// Contact sur une borne entre deux créneaux non vides.
fn touches(fst: Slot, snd: Slot) -> bool {
    !fst.is_empty() && !snd.is_empty() && (fst.end() == snd.start() || snd.end() == fst.start())
}
