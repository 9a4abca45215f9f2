mod classify;
pub mod pairwise;
pub mod sweep;
mod tiling;
mod types;
mod util;

pub use classify::classify;
pub use sweep::normalize;
pub use tiling::{split, tile};
pub use types::{Overlap, SlotError};
pub use util::is_canonical;
