//! Asset classification module
//!
//! Release assets are opaque file names. This module decides which platform
//! and CPU architecture each one is for, using substring and pattern
//! heuristics on the name alone.

mod classifier;
mod platform;

pub use classifier::{ClassifiedDownload, classify, classify_name};
pub use platform::{Architecture, Platform};
