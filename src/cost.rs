use core::fmt;

use crate::counter::OperationCount;
use crate::error::{MsmError, Result};

/// Additions one scalar multiplication is worth on a 256-bit curve.
pub const DEFAULT_MULTIPLY_WEIGHT: u64 = 256;

/// The cost of a run in additions: `add + multiply * multiply_weight`.
pub fn equivalent_cost(counts: &OperationCount, multiply_weight: u64) -> u64 {
    counts.add.saturating_add(counts.multiply.saturating_mul(multiply_weight))
}

/// How many times cheaper the other run is than the naive one.
pub fn speedup(naive_cost: u64, other_cost: u64) -> Result<f64> {
    if other_cost == 0 {
        return Err(MsmError::DegenerateCost);
    }
    Ok(naive_cost as f64 / other_cost as f64)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AlgorithmCost {
    pub add_count: u64,
    pub multiply_count: u64,
    pub equivalent_cost: u64,
}

impl AlgorithmCost {
    pub fn new(counts: OperationCount, multiply_weight: u64) -> Self {
        Self {
            add_count: counts.add,
            multiply_count: counts.multiply,
            equivalent_cost: equivalent_cost(&counts, multiply_weight),
        }
    }
}

/// Naive vs windowed MSM on the same instance.
#[derive(Clone, Debug, PartialEq)]
pub struct CostReport {
    pub point_count: usize,
    pub window_width: usize,
    pub multiply_weight: u64,
    pub naive: AlgorithmCost,
    pub pippenger: AlgorithmCost,
    /// `naive.equivalent_cost / pippenger.equivalent_cost`
    pub speedup: f64,
}

impl CostReport {
    pub fn new(
        point_count: usize,
        window_width: usize,
        multiply_weight: u64,
        naive: OperationCount,
        pippenger: OperationCount,
    ) -> Result<Self> {
        let naive = AlgorithmCost::new(naive, multiply_weight);
        let pippenger = AlgorithmCost::new(pippenger, multiply_weight);
        let speedup = speedup(naive.equivalent_cost, pippenger.equivalent_cost)?;
        Ok(Self {
            point_count,
            window_width,
            multiply_weight,
            naive,
            pippenger,
            speedup,
        })
    }
}

/// `1234567` -> `"1,234,567"`
fn grouped(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, d) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(d);
    }
    out
}

impl fmt::Display for CostReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "MSM for n = {}, c = {}. Assumed cost: 1 multiply = {} adds.",
                 grouped(self.point_count as u64), self.window_width, grouped(self.multiply_weight))?;
        writeln!(f, "{:<22}{:>16}{:>18}{:>20}", "Algorithm", "Additions", "Multiplications", "Equivalent cost")?;
        for (name, cost) in [("Naive MSM", &self.naive), ("Windowed Pippenger", &self.pippenger)] {
            writeln!(f, "{:<22}{:>16}{:>18}{:>20}",
                     name, grouped(cost.add_count), grouped(cost.multiply_count), grouped(cost.equivalent_cost))?;
        }
        write!(f, "Speedup: {:.1}x", self.speedup)
    }
}
