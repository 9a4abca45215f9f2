#![forbid(unsafe_code)]
//! Créneaux — algèbre de créneaux horaires `[début, début + durée)`.
//!
//! - Classification de deux créneaux (`None`, `Intersect`, `Equal`, `ProperSubset`).
//! - Différence, union, intersection de deux créneaux ou de deux séquences
//!   triées et disjointes (balayage linéaire).
//! - Découpage d'un créneau en parts égales.
//! - Autour du noyau : horaires d'ouverture hebdomadaires, rendu texte,
//!   import/export CSV/JSON (feature `serde`).
//!
//! Aucun fuseau horaire : un décalage est une durée depuis une référence
//! choisie par l'appelant (lundi 00:00 pour les horaires).

pub mod algebra;
pub mod hours;
#[cfg(feature = "serde")]
pub mod io;
pub mod model;
pub mod offset;
pub mod render;

pub use algebra::{classify, is_canonical, normalize, split, tile, Overlap, SlotError};
pub use hours::{bookable, BusinessHours, WeekOptions};
pub use model::Slot;
pub use offset::{format_offset, parse_offset, Offset};
pub use render::{show_slots, RangeRenderer, SlotRenderer, TextRenderer};
