use core::fmt::Debug;

use crate::counter::OperationCounter;
use crate::Scalar;

/// The group operations an MSM algorithm is allowed to use.
///
/// Implementations are pure: calling them directly records nothing.
/// Algorithms reach a backend only through [`Counted`], which attributes
/// every call to the counter of the current run.
pub trait GroupArithmetic {
    type Element: Copy + Eq + Debug;

    fn identity(&self) -> Self::Element;

    /// The base point used to generate problem instances.
    fn generator(&self) -> Self::Element;

    fn add(&self, a: &Self::Element, b: &Self::Element) -> Self::Element;

    fn scalar_mul(&self, p: &Self::Element, s: &Scalar) -> Self::Element;
}

/// A backend bound to the counter of one run.
pub struct Counted<'a, G: GroupArithmetic> {
    group: &'a G,
    counter: &'a mut OperationCounter,
}

impl<'a, G: GroupArithmetic> Counted<'a, G> {
    pub fn new(group: &'a G, counter: &'a mut OperationCounter) -> Self {
        Self { group, counter }
    }

    pub fn identity(&self) -> G::Element {
        self.group.identity()
    }

    pub fn add(&mut self, a: &G::Element, b: &G::Element) -> G::Element {
        self.counter.record_add();
        self.group.add(a, b)
    }

    /// `2a`, counted as one addition.
    pub fn double(&mut self, a: &G::Element) -> G::Element {
        self.add(a, a)
    }

    pub fn scalar_mul(&mut self, p: &G::Element, s: &Scalar) -> G::Element {
        self.counter.record_multiply();
        self.group.scalar_mul(p, s)
    }
}
