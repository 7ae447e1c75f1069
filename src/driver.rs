use ark_std::rand::Rng;
use ark_std::{end_timer, start_timer};

use crate::cost::{CostReport, DEFAULT_MULTIPLY_WEIGHT};
use crate::counter::OperationCounter;
use crate::error::{MsmError, Result};
use crate::group::GroupArithmetic;
use crate::instance::{check_scalar_bit_length, ProblemInstance};
use crate::naive::naive_msm;
use crate::pippenger::{check_window_width, pippenger_msm};

/// Parameters of one benchmark run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BenchmarkConfig {
    /// `n`
    pub point_count: usize,
    /// `B`
    pub scalar_bit_length: usize,
    /// `c`
    pub window_width: usize,
    pub multiply_weight: u64,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            point_count: 4096,
            scalar_bit_length: 256,
            window_width: 12,
            multiply_weight: DEFAULT_MULTIPLY_WEIGHT,
        }
    }
}

impl BenchmarkConfig {
    pub fn validate(&self) -> Result<()> {
        check_window_width(self.window_width)?;
        check_scalar_bit_length(self.scalar_bit_length)
    }
}

/// Runs both algorithms on the `instance`, each under its own counter,
/// and checks they agree before comparing their costs.
pub fn compare<G: GroupArithmetic>(
    group: &G,
    instance: &ProblemInstance<G::Element>,
    window_width: usize,
    multiply_weight: u64,
) -> Result<CostReport> {
    check_window_width(window_width)?;
    let _t = start_timer!(|| format!("Comparing MSMs, n = {}, c = {}", instance.len(), window_width));

    let mut naive_counter = OperationCounter::new();
    let naive_res = naive_msm(group, instance, &mut naive_counter);

    let mut pippenger_counter = OperationCounter::new();
    let pippenger_res = pippenger_msm(group, instance, window_width, &mut pippenger_counter)?;

    if naive_res != pippenger_res {
        return Err(MsmError::ResultMismatch);
    }
    end_timer!(_t);

    CostReport::new(
        instance.len(),
        window_width,
        multiply_weight,
        naive_counter.snapshot(),
        pippenger_counter.snapshot(),
    )
}

/// Samples an instance as described by the `config` and compares the algorithms on it.
pub fn run_benchmark<G, R>(group: &G, config: &BenchmarkConfig, rng: &mut R) -> Result<CostReport>
where
    G: GroupArithmetic,
    R: Rng + ?Sized,
{
    config.validate()?;
    let instance = ProblemInstance::sample(group, config.point_count, config.scalar_bit_length, rng)?;
    compare(group, &instance, config.window_width, config.multiply_weight)
}
