// One module per page behavior; each exposes `install(&PageContext)` and
// quietly does nothing when its elements are missing.

pub mod anchors;
pub mod clipboard;
pub mod date;
pub mod header;
pub mod lazy_images;
pub mod menu;
pub mod newsletter;
pub mod print;
pub mod progress;
pub mod reveal;
pub mod search;
pub mod share;
pub mod theme;
pub mod ticker;
