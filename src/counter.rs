use core::iter::Sum;
use core::ops::Add;

/// Numbers of group additions and scalar multiplications recorded during a run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OperationCount {
    pub add: u64,
    pub multiply: u64,
}

impl Add for OperationCount {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            add: self.add + other.add,
            multiply: self.multiply + other.multiply,
        }
    }
}

// Counts of independently owned counters are merged by summation.
impl Sum for OperationCount {
    fn sum<I: Iterator<Item=Self>>(iter: I) -> Self {
        iter.fold(Self::default(), |acc, c| acc + c)
    }
}

/// Accumulates the operations of a single benchmark run.
///
/// The counter can only be advanced through [`crate::group::Counted`],
/// so every recorded operation corresponds to an actual group call.
#[derive(Debug, Default)]
pub struct OperationCounter {
    add: u64,
    multiply: u64,
}

impl OperationCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        self.add = 0;
        self.multiply = 0;
    }

    pub fn snapshot(&self) -> OperationCount {
        OperationCount {
            add: self.add,
            multiply: self.multiply,
        }
    }

    pub(crate) fn record_add(&mut self) {
        self.add += 1;
    }

    pub(crate) fn record_multiply(&mut self) {
        self.multiply += 1;
    }
}
