use ark_ff::fields::{Fp128, MontBackend, MontConfig};
use ark_ff::{BigInteger, PrimeField, Zero};

use crate::group::GroupArithmetic;
use crate::Scalar;

/// Integers modulo the Mersenne prime `P = 2^127 - 1`.
#[derive(MontConfig)]
#[modulus = "170141183460469231731687303715884105727"]
#[generator = "43"]
pub struct SurrogateConfig;
pub type SurrogateField = Fp128<MontBackend<SurrogateConfig, 2>>;

/// The additive group of integers modulo `P`, standing in for an elliptic curve.
/// `scalar_mul` is a single modular product, so its cost here says nothing about
/// the cost on a curve: only the recorded operation counts are meaningful.
#[derive(Clone, Copy, Debug, Default)]
pub struct ModularGroup;

impl GroupArithmetic for ModularGroup {
    type Element = SurrogateField;

    fn identity(&self) -> SurrogateField {
        SurrogateField::zero()
    }

    fn generator(&self) -> SurrogateField {
        SurrogateField::from(2u64)
    }

    fn add(&self, a: &SurrogateField, b: &SurrogateField) -> SurrogateField {
        *a + b
    }

    fn scalar_mul(&self, p: &SurrogateField, s: &Scalar) -> SurrogateField {
        // `s` may exceed `P`, reducing it first leaves `p * s mod P` unchanged
        *p * SurrogateField::from_le_bytes_mod_order(&s.to_bytes_le())
    }
}
