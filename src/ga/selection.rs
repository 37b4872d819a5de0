//! Parent selection.
//!
//! Selection runs in two steps. Once per generation, [`Selection::prepare`]
//! turns the ranked population into a [`SelectionPlan`]. Every pair drawn in
//! that generation then samples the same plan, so all reproduction rounds of
//! a generation see one consistent distribution.
//!
//! Plans work on *ranked* populations: index 0 is the best organism under the
//! run's [`Objective`].
//!
//! # References
//!
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"
//! - Goldberg & Deb (1991), "A Comparative Analysis of Selection Schemes
//!   Used in Genetic Algorithms"

use super::types::{Fitness, Objective};
use rand::Rng;

/// Selection strategy for choosing parents.
///
/// # Examples
///
/// ```
/// use u_evolve::ga::{Objective, Selection};
/// use u_evolve::ga::random::create_rng;
///
/// let ranked = [40, 30, 20, 10, 5, 1];
/// let mut rng = create_rng(42);
/// let plan = Selection::default().prepare(&ranked, Objective::Maximize, &mut rng);
///
/// let (a, b) = plan.select_pair(&mut rng);
/// assert!(a < ranked.len() && b < ranked.len());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Selection {
    /// Rank-biased random weighting.
    ///
    /// The top third of the ranked population (`n / 3` organisms) each
    /// receive an independent integer weight drawn uniformly from `top`; the
    /// remaining organisms draw from `rest`. Weights are redrawn every
    /// generation, so a top-third organism is favored on average but an
    /// individual draw may still rank it below a lower organism.
    ///
    /// Only rank position matters, never the raw fitness value, so zero or
    /// negative fitness landscapes need no special handling.
    ///
    /// # Complexity
    /// O(n) per generation, O(log n) per selection
    RankBiased {
        /// Inclusive weight range for the top third.
        top: (u32, u32),
        /// Inclusive weight range for everyone else.
        rest: (u32, u32),
    },

    /// Tournament selection: draw `k` organisms uniformly, keep the best.
    ///
    /// # Complexity
    /// O(k) per selection
    Tournament(usize),

    /// Fitness-proportionate (roulette wheel) selection.
    ///
    /// Weights follow the objective: `max(f, 0)` when maximizing,
    /// `max_f - f` when minimizing. Every weight is offset by one so a flat
    /// population degrades to uniform selection instead of failing. Very
    /// large fitness spreads are scaled down so the weights stay in range.
    ///
    /// # Complexity
    /// O(n) per generation, O(log n) per selection
    FitnessProportional,
}

impl Default for Selection {
    fn default() -> Self {
        Selection::rank_biased()
    }
}

impl Selection {
    /// Rank-biased weighting with top-third weights in `[30, 50]` and the
    /// rest in `[5, 15]`.
    pub fn rank_biased() -> Self {
        Selection::RankBiased {
            top: (30, 50),
            rest: (5, 15),
        }
    }

    /// Builds the selection plan for one generation.
    ///
    /// `ranked` holds the fitness of each organism in ranking order (best
    /// first).
    ///
    /// # Panics
    /// Panics if `ranked` is empty.
    pub fn prepare<R: Rng>(
        &self,
        ranked: &[Fitness],
        objective: Objective,
        rng: &mut R,
    ) -> SelectionPlan {
        assert!(!ranked.is_empty(), "cannot select from empty population");

        match *self {
            Selection::RankBiased { top, rest } => {
                SelectionPlan::cumulative(rank_biased_weights(ranked.len(), top, rest, rng))
            }
            Selection::Tournament(k) => SelectionPlan {
                kind: PlanKind::Tournament {
                    size: ranked.len(),
                    k: k.max(1),
                },
            },
            Selection::FitnessProportional => {
                SelectionPlan::cumulative(proportional_weights(ranked, objective))
            }
        }
    }
}

/// Per-generation sampling snapshot produced by [`Selection::prepare`].
#[derive(Debug, Clone)]
pub struct SelectionPlan {
    kind: PlanKind,
}

#[derive(Debug, Clone)]
enum PlanKind {
    /// Running totals of the per-organism weights.
    Cumulative(Vec<u64>),
    Tournament { size: usize, k: usize },
}

impl SelectionPlan {
    fn cumulative(weights: Vec<u64>) -> Self {
        let cumulative = weights
            .iter()
            .scan(0u64, |total, &w| {
                *total = total.saturating_add(w);
                Some(*total)
            })
            .collect();
        Self {
            kind: PlanKind::Cumulative(cumulative),
        }
    }

    /// Number of organisms covered by the plan.
    pub fn len(&self) -> usize {
        match &self.kind {
            PlanKind::Cumulative(cumulative) => cumulative.len(),
            PlanKind::Tournament { size, .. } => *size,
        }
    }

    /// Always `false`; plans are never built for empty populations.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Cumulative weights, for weight-based strategies.
    pub fn cumulative_weights(&self) -> Option<&[u64]> {
        match &self.kind {
            PlanKind::Cumulative(cumulative) => Some(cumulative),
            PlanKind::Tournament { .. } => None,
        }
    }

    /// Draws one ranked index.
    pub fn select<R: Rng>(&self, rng: &mut R) -> usize {
        match &self.kind {
            PlanKind::Cumulative(cumulative) => {
                let total = cumulative.last().copied().unwrap_or(0);
                if total == 0 {
                    return rng.random_range(0..cumulative.len());
                }
                let threshold = rng.random_range(0..total);
                cumulative.partition_point(|&c| c <= threshold)
            }
            PlanKind::Tournament { size, k } => {
                // Lower ranked index = better organism.
                (0..*k)
                    .map(|_| rng.random_range(0..*size))
                    .min()
                    .unwrap_or(0)
            }
        }
    }

    /// Draws two ranked indices, with replacement.
    pub fn select_pair<R: Rng>(&self, rng: &mut R) -> (usize, usize) {
        (self.select(rng), self.select(rng))
    }
}

/// Random weights: `n / 3` leaders from `top`, the rest from `rest`.
fn rank_biased_weights<R: Rng>(
    n: usize,
    top: (u32, u32),
    rest: (u32, u32),
    rng: &mut R,
) -> Vec<u64> {
    let leaders = n / 3;
    (0..n)
        .map(|i| {
            let (lo, hi) = if i < leaders { top } else { rest };
            rng.random_range(lo.min(hi)..=hi.max(lo)) as u64
        })
        .collect()
}

/// Upper bound for the sum of proportional weights.
const PROPORTIONAL_BUDGET: u128 = (u64::MAX / 2) as u128;

/// Objective-oriented fitness weights, each offset by one.
///
/// Raw weights are computed in `u128` so extreme fitness values cannot
/// overflow. If their sum exceeds [`PROPORTIONAL_BUDGET`], every weight is
/// scaled down proportionally and floored at 1.
fn proportional_weights(ranked: &[Fitness], objective: Objective) -> Vec<u64> {
    let raw: Vec<u128> = match objective {
        Objective::Maximize => ranked.iter().map(|&f| f.max(0) as u128 + 1).collect(),
        Objective::Minimize => {
            let worst = ranked.iter().copied().max().unwrap_or(0) as i128;
            ranked
                .iter()
                .map(|&f| (worst - f as i128) as u128 + 1)
                .collect()
        }
    };

    let total: u128 = raw.iter().sum();
    if total <= PROPORTIONAL_BUDGET {
        return raw.into_iter().map(|w| w as u64).collect();
    }
    raw.into_iter()
        .map(|w| (w * PROPORTIONAL_BUDGET / total).max(1) as u64)
        .collect()
}
