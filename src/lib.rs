//! Operation counts of multi-scalar multiplication algorithms.
//!
//! Compares the naive MSM, `n` scalar multiplications and `n` additions,
//! against the windowed bucket method (Pippenger) that uses additions only.
//! The algorithms are generic over [`GroupArithmetic`] and run through a counter,
//! so the same code measures the integer surrogate group and a real curve.

// `n` -- the number of points, indexed by `i`
// `B` -- the scalar bit length
// `c` -- the window width, windows are indexed by `k`

pub mod cost;
pub mod counter;
pub mod curve;
pub mod driver;
pub mod error;
pub mod group;
pub mod instance;
pub mod naive;
pub mod pippenger;
pub mod surrogate;

pub use cost::{AlgorithmCost, CostReport};
pub use counter::{OperationCount, OperationCounter};
pub use driver::{compare, run_benchmark, BenchmarkConfig};
pub use error::{MsmError, Result};
pub use group::{Counted, GroupArithmetic};
pub use instance::ProblemInstance;
pub use naive::naive_msm;
pub use pippenger::pippenger_msm;

/// Scalars are unsigned integers of up to 256 bits.
pub type Scalar = ark_ff::BigInteger256;

#[cfg(test)]
mod tests {
    use ark_std::test_rng;

    use crate::curve::Bls12381G1;
    use crate::surrogate::ModularGroup;
    use crate::{naive_msm, pippenger_msm, GroupArithmetic, OperationCount, OperationCounter, ProblemInstance};

    fn _both_algorithms_agree<G: GroupArithmetic>(group: &G, n: usize, bits: usize) {
        let rng = &mut test_rng();
        let instance = ProblemInstance::sample(group, n, bits, rng).unwrap();

        let mut counter = OperationCounter::new();
        let expected = naive_msm(group, &instance, &mut counter);
        for c in 1..=8 {
            counter.reset();
            assert_eq!(counter.snapshot(), OperationCount::default());
            let res = pippenger_msm(group, &instance, c, &mut counter).unwrap();
            assert_eq!(res, expected);
        }
    }

    #[test]
    fn it_works() {
        _both_algorithms_agree(&ModularGroup, 50, 256);
        _both_algorithms_agree(&Bls12381G1::new(), 5, 32);
    }
}
