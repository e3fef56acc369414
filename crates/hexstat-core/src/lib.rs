#![forbid(unsafe_code)]

//! Semantic model for hexagonal (radar-style) stat charts.
//!
//! Design goals:
//! - a total, deterministic rank-token → percentage mapping with a
//!   configurable 100% pivot tier
//! - an ordered stat set whose derived percentages are always consistent
//!   with the active scale (batch recompute on pivot change)
//! - no rendering here; layout and SVG live in `hexstat-render`

pub mod config;
pub mod error;
pub mod geom;
pub mod rank;
pub mod stat;

pub use config::ChartConfig;
pub use error::{Error, Result};
pub use rank::{MODIFIERS, OVERFLOW_MAX, RankScale, TIERS};
pub use stat::{MAX_STATS, MIN_STATS, SheetStat, StatRecord, StatSet, StatSheet};
