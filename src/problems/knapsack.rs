//! 0/1 knapsack over a bit-string genome.

use crate::ga::{Fitness, FitnessEvaluator};

/// A packable item.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    pub name: String,
    pub value: i64,
    pub weight: i64,
}

impl Item {
    pub fn new(name: impl Into<String>, value: i64, weight: i64) -> Self {
        Self {
            name: name.into(),
            value,
            weight,
        }
    }
}

/// Knapsack instance: gene `i == 1` packs item `i`.
///
/// Fitness is the total value of the packed items, or 0 as soon as the
/// packed weight exceeds `weight_limit`. A genome whose length differs from
/// the item count also scores 0, keeping the evaluator total.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Knapsack {
    pub items: Vec<Item>,
    pub weight_limit: i64,
}

impl Knapsack {
    pub fn new(items: Vec<Item>, weight_limit: i64) -> Self {
        Self {
            items,
            weight_limit,
        }
    }

    /// Eight household items with a weight limit of 50. The optimum is 190
    /// (earphone + mouse).
    pub fn demo() -> Self {
        Self::new(
            vec![
                Item::new("Pen", 60, 10),
                Item::new("Laptop", 130, 70),
                Item::new("Pot", 50, 30),
                Item::new("Earphone", 120, 20),
                Item::new("Mouse", 70, 30),
                Item::new("Keyboard", 70, 40),
                Item::new("Drawing Pad", 80, 35),
                Item::new("Laptop Stand", 50, 30),
            ],
            50,
        )
    }

    /// Genome length for this instance.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items packed by `genome`.
    pub fn selected<'a>(&'a self, genome: &[u8]) -> Vec<&'a Item> {
        self.items
            .iter()
            .zip(genome)
            .filter(|(_, &gene)| gene == 1)
            .map(|(item, _)| item)
            .collect()
    }

    /// Best achievable value, by exhaustive search over all `2^n` subsets.
    ///
    /// Intended for small instances (tests, benchmarks).
    pub fn optimum(&self) -> Fitness {
        let n = self.items.len();
        assert!(n < 64, "exhaustive search needs fewer than 64 items");
        (0u64..1 << n)
            .map(|mask| {
                let genome: Vec<u8> = (0..n).map(|i| ((mask >> i) & 1) as u8).collect();
                self.evaluate(&genome)
            })
            .max()
            .unwrap_or(0)
    }
}

impl FitnessEvaluator<u8> for Knapsack {
    fn evaluate(&self, genome: &[u8]) -> Fitness {
        if genome.len() != self.items.len() {
            return 0;
        }

        let (mut weight, mut value) = (0i64, 0i64);
        for item in self.selected(genome) {
            weight += item.weight;
            value += item.value;
            if weight > self.weight_limit {
                return 0;
            }
        }
        value
    }
}
