use ark_ec::{CurveGroup, PrimeGroup};
use ark_ff::Zero;
use ark_std::marker::PhantomData;

use crate::group::GroupArithmetic;
use crate::Scalar;

/// An arkworks curve exposed through the counted group interface.
#[derive(Clone, Copy, Debug, Default)]
pub struct CurveBackend<G>(PhantomData<G>);

pub type Bls12381G1 = CurveBackend<ark_bls12_381::G1Projective>;

impl<G: CurveGroup> CurveBackend<G> {
    pub fn new() -> Self {
        Self(PhantomData)
    }
}

impl<G: CurveGroup> GroupArithmetic for CurveBackend<G> {
    type Element = G;

    fn identity(&self) -> G {
        G::zero()
    }

    fn generator(&self) -> G {
        G::generator()
    }

    fn add(&self, a: &G, b: &G) -> G {
        *a + b
    }

    fn scalar_mul(&self, p: &G, s: &Scalar) -> G {
        p.mul_bigint(s)
    }
}

#[cfg(test)]
mod tests {
    use ark_ff::PrimeField;
    use ark_std::{end_timer, start_timer, test_rng, UniformRand};

    use super::*;
    use crate::counter::{OperationCount, OperationCounter};
    use crate::instance::{random_scalar, ProblemInstance};
    use crate::naive::naive_msm;
    use crate::pippenger::pippenger_msm;

    fn _pippenger_on_curve<G: CurveGroup>(n: usize, bits: usize, windows: &[usize]) {
        let rng = &mut test_rng();
        let group = CurveBackend::<G>::new();

        let points = (0..n).map(|_| G::rand(rng)).collect::<Vec<_>>();
        let scalars = (0..n)
            .map(|_| random_scalar(bits, rng).unwrap())
            .collect::<Vec<_>>();
        let expected: G = points.iter()
            .zip(scalars.iter())
            .map(|(p, s)| p.mul_bigint(s))
            .sum();
        let instance = ProblemInstance::new(points, scalars, bits).unwrap();

        let mut counter = OperationCounter::new();
        let naive = naive_msm(&group, &instance, &mut counter);
        assert_eq!(naive, expected);
        assert_eq!(counter.snapshot(), OperationCount { add: n as u64, multiply: n as u64 });

        for &c in windows {
            counter.reset();
            let _t = start_timer!(|| format!("Pippenger on curve, n = {}, c = {}", n, c));
            let res = pippenger_msm(&group, &instance, c, &mut counter).unwrap();
            end_timer!(_t);
            assert_eq!(res, expected);
            assert_eq!(counter.snapshot().multiply, 0);
        }
    }

    #[test]
    fn pippenger_on_bls12_381_g1() {
        _pippenger_on_curve::<ark_bls12_381::G1Projective>(8, 64, &[1, 3, 5, 8]);
    }

    #[test]
    fn full_width_scalars_on_bls12_381_g1() {
        let rng = &mut test_rng();
        let group = Bls12381G1::new();
        let n = 4;

        let points = (0..n).map(|_| ark_bls12_381::G1Projective::rand(rng)).collect::<Vec<_>>();
        let frs = (0..n).map(|_| ark_bls12_381::Fr::rand(rng)).collect::<Vec<_>>();
        let expected: ark_bls12_381::G1Projective = points.iter()
            .zip(frs.iter())
            .map(|(&p, s)| p * s)
            .sum();

        let scalars = frs.iter().map(|s| s.into_bigint()).collect();
        let instance = ProblemInstance::new(points, scalars, 255).unwrap();
        let mut counter = OperationCounter::new();
        let res = pippenger_msm(&group, &instance, 7, &mut counter).unwrap();
        assert_eq!(res, expected);
    }
}
