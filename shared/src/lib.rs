//! Platform-independent core of the Gündem page interactions.
//!
//! Everything here is plain Rust: header flags, reading progress, share
//! URLs, the theme preference, one-shot visibility tracking and the timed
//! newsletter/toast effects. The page itself is reached only through the
//! seam traits in [`surface`] and [`schedule`], which the frontend crate
//! implements over `web-sys` and the tests implement in memory.

pub mod config;
pub mod date;
pub mod error;
pub mod header;
pub mod lazy_image;
pub mod navigation;
pub mod newsletter;
pub mod progress;
pub mod reveal;
pub mod schedule;
pub mod share;
pub mod styles;
pub mod surface;
pub mod theme;
pub mod ticker;
pub mod toast;

pub use error::{InteractionError, Result};
pub use header::{HeaderFlags, ScrollHeader};
pub use reveal::{FireOnce, RevealAnimator};
pub use schedule::{ManualScheduler, Scheduler, TimerHandle};
pub use share::ShareTarget;
pub use surface::{ClassTarget, MemoryStore, PreferenceStore};
pub use theme::{Theme, ThemeController, ThemeRoot};
