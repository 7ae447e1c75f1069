use ark_std::{end_timer, start_timer};

use crate::counter::OperationCounter;
use crate::group::{Counted, GroupArithmetic};
use crate::instance::ProblemInstance;

/// `sum(s_i * P_i)` with one scalar multiplication and one addition per pair.
/// The first addition, against the identity, is counted like the rest,
/// so a run over `n` pairs records exactly `n` of each.
pub fn naive_msm<G: GroupArithmetic>(
    group: &G,
    instance: &ProblemInstance<G::Element>,
    counter: &mut OperationCounter,
) -> G::Element {
    let _t = start_timer!(|| format!("Naive {}-msm", instance.len()));
    let mut ops = Counted::new(group, counter);
    let mut acc = ops.identity();
    for (p, s) in instance.pairs() {
        let sp = ops.scalar_mul(p, s);
        acc = ops.add(&acc, &sp);
    }
    end_timer!(_t);
    acc
}
