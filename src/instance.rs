use ark_ff::{BigInt, BigInteger};
use ark_std::rand::Rng;
use ark_std::{end_timer, start_timer};

use crate::error::{MsmError, Result};
use crate::group::GroupArithmetic;
use crate::Scalar;

/// Scalars are stored in 4 limbs.
pub const MAX_SCALAR_BITS: usize = 256;

pub(crate) fn check_scalar_bit_length(bits: usize) -> Result<()> {
    if bits == 0 || bits > MAX_SCALAR_BITS {
        return Err(MsmError::InvalidConfiguration(format!(
            "scalar bit length must be in 1..={}, got {}", MAX_SCALAR_BITS, bits
        )));
    }
    Ok(())
}

/// A uniformly random scalar in `[1, 2^bits - 1]`.
pub fn random_scalar<R: Rng + ?Sized>(bits: usize, rng: &mut R) -> Result<Scalar> {
    check_scalar_bit_length(bits)?;
    let masks: [u64; 4] = core::array::from_fn(|i| {
        match bits.saturating_sub(64 * i).min(64) {
            64 => u64::MAX,
            k => (1u64 << k) - 1,
        }
    });
    loop {
        let s = BigInt::new(masks.map(|mask| rng.gen::<u64>() & mask));
        if s.num_bits() > 0 {
            return Ok(s);
        }
    }
}

/// The input of an MSM: `n` points, each weighted by a `B`-bit scalar.
#[derive(Clone, Debug)]
pub struct ProblemInstance<E> {
    points: Vec<E>,
    scalars: Vec<Scalar>,
    /// `B`, every scalar fits in this many bits.
    scalar_bit_length: usize,
}

impl<E: Copy> ProblemInstance<E> {
    pub fn new(points: Vec<E>, scalars: Vec<Scalar>, scalar_bit_length: usize) -> Result<Self> {
        if points.len() != scalars.len() {
            return Err(MsmError::LengthMismatch {
                points: points.len(),
                scalars: scalars.len(),
            });
        }
        check_scalar_bit_length(scalar_bit_length)?;
        if let Some((index, s)) = scalars.iter()
            .enumerate()
            .find(|(_, s)| s.num_bits() as usize > scalar_bit_length)
        {
            return Err(MsmError::ScalarOutOfRange {
                index,
                bits: s.num_bits() as usize,
                max: scalar_bit_length,
            });
        }
        Ok(Self {
            points,
            scalars,
            scalar_bit_length,
        })
    }

    /// Points `G, 2G, ..., nG` with random nonzero `bits`-bit scalars.
    /// The points are computed with uncounted backend calls.
    pub fn sample<G, R>(group: &G, n: usize, bits: usize, rng: &mut R) -> Result<Self>
    where
        G: GroupArithmetic<Element=E>,
        R: Rng + ?Sized,
    {
        check_scalar_bit_length(bits)?;
        let _t = start_timer!(|| format!("Sampling {} points, {}-bit scalars", n, bits));
        let g = group.generator();
        let points = (1..=n as u64)
            .map(|i| group.scalar_mul(&g, &Scalar::from(i)))
            .collect();
        let scalars = (0..n)
            .map(|_| random_scalar(bits, rng))
            .collect::<Result<Vec<_>>>()?;
        end_timer!(_t);
        Self::new(points, scalars, bits)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[E] {
        &self.points
    }

    pub fn scalars(&self) -> &[Scalar] {
        &self.scalars
    }

    pub fn scalar_bit_length(&self) -> usize {
        self.scalar_bit_length
    }

    pub fn pairs(&self) -> impl Iterator<Item=(&E, &Scalar)> {
        self.points.iter().zip(self.scalars.iter())
    }
}

#[cfg(test)]
mod tests {
    use ark_std::test_rng;

    use super::*;
    use crate::surrogate::{ModularGroup, SurrogateField};

    #[test]
    fn rejects_length_mismatch() {
        let points = vec![SurrogateField::from(2u64); 3];
        let scalars = vec![Scalar::from(1u64); 2];
        assert_eq!(
            ProblemInstance::new(points, scalars, 8).unwrap_err(),
            MsmError::LengthMismatch { points: 3, scalars: 2 }
        );
    }

    #[test]
    fn rejects_bad_bit_length() {
        let points = vec![SurrogateField::from(2u64)];
        let scalars = vec![Scalar::from(1u64)];
        assert!(matches!(
            ProblemInstance::new(points.clone(), scalars.clone(), 0),
            Err(MsmError::InvalidConfiguration(_))
        ));
        assert!(matches!(
            ProblemInstance::new(points, scalars, 257),
            Err(MsmError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn rejects_wide_scalars() {
        let points = vec![SurrogateField::from(2u64); 2];
        let scalars = vec![Scalar::from(0b0101u64), Scalar::from(0b10011u64)];
        assert_eq!(
            ProblemInstance::new(points, scalars, 4).unwrap_err(),
            MsmError::ScalarOutOfRange { index: 1, bits: 5, max: 4 }
        );
    }

    #[test]
    fn random_scalars_fit() {
        let rng = &mut test_rng();
        for bits in [1, 7, 64, 65, 130, 256] {
            for _ in 0..20 {
                let s = random_scalar(bits, rng).unwrap();
                assert!(s.num_bits() > 0);
                assert!(s.num_bits() as usize <= bits);
            }
        }
        // the only 1-bit nonzero scalar
        assert_eq!(random_scalar(1, rng).unwrap(), Scalar::from(1u64));
    }

    #[test]
    fn sampled_points_are_multiples_of_generator() {
        let rng = &mut test_rng();
        let instance = ProblemInstance::sample(&ModularGroup, 5, 256, rng).unwrap();
        assert_eq!(instance.len(), 5);
        assert_eq!(instance.scalar_bit_length(), 256);
        let expected = [2u64, 4, 6, 8, 10].map(SurrogateField::from);
        assert_eq!(instance.points(), &expected);
    }
}
