use std::ops::AddAssign;

/// Comparison and swap tallies for one sort call.
///
/// For the gapped insertion engine `swaps` counts every element write: each
/// shift inside the insertion walk plus the placement of the held value.
/// For bubble sort it counts exchanges of adjacent elements.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct SortStats {
    pub comparisons: u64,
    pub swaps: u64,
}

impl SortStats {
    pub const ZERO: Self = Self {
        comparisons: 0,
        swaps: 0,
    };
}

impl AddAssign for SortStats {
    fn add_assign(&mut self, rhs: Self) {
        self.comparisons += rhs.comparisons;
        self.swaps += rhs.swaps;
    }
}

/// Counting hook threaded through the sort loops.
///
/// `NoTally` compiles every call away, which gives the uninstrumented fast
/// path the same loop body as the instrumented one.
pub(crate) trait Counter {
    const INSTRUMENTED: bool;

    fn comparison(&mut self);
    fn swap(&mut self);
    fn stats(&self) -> SortStats;
}

#[derive(Default)]
pub(crate) struct Tally(SortStats);

impl Counter for Tally {
    const INSTRUMENTED: bool = true;

    #[inline(always)]
    fn comparison(&mut self) {
        self.0.comparisons += 1;
    }

    #[inline(always)]
    fn swap(&mut self) {
        self.0.swaps += 1;
    }

    #[inline(always)]
    fn stats(&self) -> SortStats {
        self.0
    }
}

pub(crate) struct NoTally;

impl Counter for NoTally {
    const INSTRUMENTED: bool = false;

    #[inline(always)]
    fn comparison(&mut self) {}

    #[inline(always)]
    fn swap(&mut self) {}

    #[inline(always)]
    fn stats(&self) -> SortStats {
        SortStats::ZERO
    }
}
