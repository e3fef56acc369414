//! Rank-token → percentage mapping.
//!
//! The scale is a total order over (tier, modifier) pairs with a configurable
//! 100% reference tier (the "max rank" pivot). Percentages are derived by
//! ratio to the pivot's weight rather than per-pivot lookup tables, so the
//! invariants (monotonicity, pivot = 100%) hold mechanically for every pivot.

use crate::{Error, Result};

/// Canonical tier order, weakest first. Fixed and total.
pub const TIERS: [&str; 12] = [
    "F", "E", "D", "C", "B", "A", "S", "SS", "SSS", "SR", "SSR", "UR",
];

/// Modifier suffixes, weakest first. A bare tier ranks below its `+` form,
/// and `+` ranks below `++`.
pub const MODIFIERS: [&str; 3] = ["", "+", "++"];

/// Upper end of the overflow band; `resolve` never exceeds this.
pub const OVERFLOW_MAX: f64 = 110.0;

const TIER_STEP: f64 = 10.0;
const MODIFIER_BONUS: [f64; 3] = [0.0, 5.0, 8.0];

/// A parsed rank token: tier index into [`TIERS`] plus modifier count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankToken {
    pub tier: usize,
    pub modifier: usize,
}

/// Parses a human-facing token like `"A+"` or `"SSR"`.
///
/// Returns `None` for anything outside the known tier/modifier set; callers
/// that must stay total (the scale) map that to the minimum rank instead.
pub fn parse_rank_token(token: &str) -> Option<RankToken> {
    let token = token.trim();
    let base = token.trim_end_matches('+');
    let modifier = token.len() - base.len();
    if modifier >= MODIFIERS.len() {
        return None;
    }
    let tier = TIERS.iter().position(|&name| name == base)?;
    Some(RankToken { tier, modifier })
}

/// Monotone weight: the tier step (10) strictly exceeds the largest modifier
/// bonus (8), so weights are strictly increasing in canonical token order.
fn weight(rank: RankToken) -> f64 {
    (rank.tier as f64 + 1.0) * TIER_STEP + MODIFIER_BONUS[rank.modifier]
}

/// The rank scale: owns the canonical ordering and the pivot rule.
///
/// The pivot tier's bare token is pinned to exactly 100%. The strongest
/// modifier of the tier immediately above the pivot is pinned to exactly
/// [`OVERFLOW_MAX`]; tokens between scale linearly into that band, tokens
/// above it clamp to the band's top.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankScale {
    pivot: usize,
}

impl RankScale {
    /// Builds a scale pinned to `max_rank`.
    ///
    /// `max_rank` must be a bare tier from [`TIERS`]; anything else is a
    /// configuration error. Silently defaulting here would corrupt every
    /// derived percentage, so this is the one place the scale is strict.
    pub fn new(max_rank: &str) -> Result<Self> {
        let token = max_rank.trim();
        let Some(pivot) = TIERS.iter().position(|&name| name == token) else {
            return Err(Error::UnknownMaxRank {
                token: max_rank.to_string(),
            });
        };
        Ok(Self { pivot })
    }

    pub fn max_rank(&self) -> &'static str {
        TIERS[self.pivot]
    }

    fn pivot_weight(&self) -> f64 {
        weight(RankToken {
            tier: self.pivot,
            modifier: 0,
        })
    }

    /// Weight pinned to [`OVERFLOW_MAX`]: the strongest modifier of the tier
    /// above the pivot. With the pivot at the top tier there is no tier
    /// above, so the pivot tier's own strongest modifier anchors the band.
    fn overflow_weight(&self) -> f64 {
        let tier = (self.pivot + 1).min(TIERS.len() - 1);
        weight(RankToken {
            tier,
            modifier: MODIFIERS.len() - 1,
        })
    }

    /// Total, deterministic mapping to a percentage in `[0, OVERFLOW_MAX]`.
    ///
    /// Unknown or empty tokens resolve to the scale minimum (bare `F`);
    /// unknown input never blocks rendering.
    pub fn resolve(&self, token: &str) -> f64 {
        let rank = parse_rank_token(token).unwrap_or(RankToken {
            tier: 0,
            modifier: 0,
        });
        let w = weight(rank);
        let pivot_w = self.pivot_weight();
        if w <= pivot_w {
            return w / pivot_w * 100.0;
        }
        let overflow_w = self.overflow_weight();
        let band = (w - pivot_w) / (overflow_w - pivot_w);
        (100.0 + band * (OVERFLOW_MAX - 100.0)).min(OVERFLOW_MAX)
    }
}
