use crate::model::Slot;
use crate::offset::format_offset;

/// Permet de customiser le rendu texte d'un créneau (diagnostic, logs, CLI).
pub trait SlotRenderer {
    fn render(&self, slot: &Slot) -> String;

    /// Une ligne par créneau.
    fn render_all(&self, slots: &[Slot]) -> String {
        slots
            .iter()
            .map(|slot| self.render(slot))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// `o: <début> d: <durée>`, identique à `Display`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TextRenderer;

impl SlotRenderer for TextRenderer {
    fn render(&self, slot: &Slot) -> String {
        slot.to_string()
    }
}

/// `<début> → <fin>`.
#[derive(Debug, Default, Clone, Copy)]
pub struct RangeRenderer;

impl SlotRenderer for RangeRenderer {
    fn render(&self, slot: &Slot) -> String {
        format!(
            "{} → {}",
            format_offset(slot.start()),
            format_offset(slot.end())
        )
    }
}

pub fn show_slots(slots: &[Slot]) -> String {
    TextRenderer.render_all(slots)
}
