use crate::model::Slot;

/// Vérification peu coûteuse de l'invariant des séquences : triées par début,
/// sans chevauchement (un contact sur une borne est toléré).
pub fn is_canonical(slots: &[Slot]) -> bool {
    slots.windows(2).all(|w| w[0].end() <= w[1].start())
}

#[inline]
pub(super) fn debug_assert_canonical(slots: &[Slot], what: &str) {
    debug_assert!(
        is_canonical(slots),
        "{what}: slot sequence must be sorted by start and disjoint"
    );
}
