use ark_std::{end_timer, start_timer};

use crate::counter::OperationCounter;
use crate::error::{MsmError, Result};
use crate::group::{Counted, GroupArithmetic};
use crate::instance::ProblemInstance;
use crate::Scalar;

/// Largest supported window width, bounds a bucket array to `2^24` elements.
pub const MAX_WINDOW_WIDTH: usize = 24;

pub(crate) fn check_window_width(c: usize) -> Result<()> {
    if c == 0 || c > MAX_WINDOW_WIDTH {
        return Err(MsmError::InvalidConfiguration(format!(
            "window width must be in 1..={}, got {}", MAX_WINDOW_WIDTH, c
        )));
    }
    Ok(())
}

/// `ceil(bits / c)`
pub fn num_windows(bits: usize, c: usize) -> usize {
    bits.div_ceil(c)
}

/// The `c`-bit digit of `s` starting at bit `offset`, i.e. `(s >> offset) & (2^c - 1)`.
// Requires `c <= MAX_WINDOW_WIDTH`, so a digit spans at most two limbs.
fn window_digit(s: &Scalar, offset: usize, c: usize) -> usize {
    let limbs = &s.0;
    let (i, shift) = (offset / 64, offset % 64);
    if i >= limbs.len() {
        return 0;
    }
    let mut word = limbs[i] >> shift;
    if shift + c > 64 && i + 1 < limbs.len() {
        word |= limbs[i + 1] << (64 - shift);
    }
    (word & ((1u64 << c) - 1)) as usize
}

/// Windowed bucket method (Pippenger).
///
/// The `B`-bit scalars are cut into `ceil(B/c)` windows of `c` bits. In every window each
/// point is added once into the bucket indexed by its digit, zero digits cost nothing.
/// The buckets are weighted by their indices with a running-sum sweep from the top bucket down:
/// ```text
/// bucket:      3  2  1
/// running sum: C  C+B  C+B+A
/// window sum:  C + (C+B) + (C+B+A) = 3C + 2B + A
/// ```
/// Window sums are then reassembled from the most significant one by `c` doublings and one addition each.
///
/// No scalar multiplications are performed, see [`expected_add_count`] for the number of additions.
pub fn pippenger_msm<G: GroupArithmetic>(
    group: &G,
    instance: &ProblemInstance<G::Element>,
    c: usize,
    counter: &mut OperationCounter,
) -> Result<G::Element> {
    check_window_width(c)?;
    let windows = num_windows(instance.scalar_bit_length(), c);
    let _t = start_timer!(|| format!("Pippenger {}-msm, c = {}, {} windows", instance.len(), c, windows));
    let mut ops = Counted::new(group, counter);

    let window_sums: Vec<G::Element> = (0..windows)
        .map(|k| window_sum(&mut ops, instance, k * c, c))
        .collect();

    let mut total = ops.identity();
    for sum in window_sums.iter().rev() {
        for _ in 0..c {
            total = ops.double(&total);
        }
        total = ops.add(&total, sum);
    }
    end_timer!(_t);
    Ok(total)
}

/// `sum_v v * bucket_v` over the buckets of the window starting at bit `offset`.
fn window_sum<G: GroupArithmetic>(
    ops: &mut Counted<G>,
    instance: &ProblemInstance<G::Element>,
    offset: usize,
    c: usize,
) -> G::Element {
    let zero = ops.identity();
    // buckets[0] is never touched
    let mut buckets = vec![zero; 1 << c];
    for (p, s) in instance.pairs() {
        let digit = window_digit(s, offset, c);
        if digit != 0 {
            buckets[digit] = ops.add(&buckets[digit], p);
        }
    }

    let mut running_sum = zero;
    let mut sum = zero;
    for bucket in buckets.iter().skip(1).rev() {
        running_sum = ops.add(&running_sum, bucket);
        sum = ops.add(&sum, &running_sum);
    }
    sum
}

/// The number of nonzero digits in each window, i.e. the bucket additions per window.
pub fn bucket_additions<E: Copy>(instance: &ProblemInstance<E>, c: usize) -> Result<Vec<u64>> {
    check_window_width(c)?;
    let counts = (0..num_windows(instance.scalar_bit_length(), c))
        .map(|k| {
            instance.scalars().iter()
                .filter(|s| window_digit(s, k * c, c) != 0)
                .count() as u64
        })
        .collect();
    Ok(counts)
}

/// The exact number of additions [`pippenger_msm`] performs on the `instance`.
///
/// Per window: the bucket additions, `2^c - 1` sweep steps of 2 additions each,
/// `c` doublings and 1 addition folding the window sum into the total.
pub fn expected_add_count<E: Copy>(instance: &ProblemInstance<E>, c: usize) -> Result<u64> {
    let bucket_adds = bucket_additions(instance, c)?;
    let windows = bucket_adds.len() as u64;
    let per_window = 2 * ((1u64 << c) - 1) + c as u64 + 1;
    Ok(bucket_adds.iter().sum::<u64>() + windows * per_window)
}
