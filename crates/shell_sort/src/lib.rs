mod algorithms;
mod error;
mod gaps;
mod stats;

pub use algorithms::bubble_sort::bubble_sort;
pub use algorithms::shell_sort::{gapped_insertion_sort, shell_sort, shell_sort_with_ctx};
pub use error::GapError;
pub use gaps::{
    ALL_GAP_POLICIES, CIURA_TABLE, GapPolicy, SEDGEWICK_TABLE, gap_sequence, gap_sequence_into,
    sedgewick_term, validate_gaps,
};
pub use stats::SortStats;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum SortAlgorithm {
    BubbleSort,
    BubbleSortEarlyExit,
    ShellSortHalving,
    ShellSortKnuth,
    ShellSortSedgewickFormula,
    ShellSortSedgewickTable,
    ShellSortCiura,
}

pub const ALL_ALGORITHMS: [SortAlgorithm; 7] = [
    SortAlgorithm::BubbleSort,
    SortAlgorithm::BubbleSortEarlyExit,
    SortAlgorithm::ShellSortHalving,
    SortAlgorithm::ShellSortKnuth,
    SortAlgorithm::ShellSortSedgewickFormula,
    SortAlgorithm::ShellSortSedgewickTable,
    SortAlgorithm::ShellSortCiura,
];

pub fn all_algorithms() -> &'static [SortAlgorithm] {
    &ALL_ALGORITHMS
}

pub fn algorithm_name(algo: SortAlgorithm) -> &'static str {
    match algo {
        SortAlgorithm::BubbleSort => "bubble_sort",
        SortAlgorithm::BubbleSortEarlyExit => "bubble_sort_early_exit",
        SortAlgorithm::ShellSortHalving => "shell_sort_halving",
        SortAlgorithm::ShellSortKnuth => "shell_sort_knuth",
        SortAlgorithm::ShellSortSedgewickFormula => "shell_sort_sedgewick_formula",
        SortAlgorithm::ShellSortSedgewickTable => "shell_sort_sedgewick_table",
        SortAlgorithm::ShellSortCiura => "shell_sort_ciura",
    }
}

/// O(n^2) on every input except, for the early-exit variant, sorted ones.
pub fn is_quadratic(algo: SortAlgorithm) -> bool {
    matches!(
        algo,
        SortAlgorithm::BubbleSort | SortAlgorithm::BubbleSortEarlyExit
    )
}

impl SortAlgorithm {
    pub fn gap_policy(self) -> Option<GapPolicy> {
        match self {
            Self::BubbleSort | Self::BubbleSortEarlyExit => None,
            Self::ShellSortHalving => Some(GapPolicy::Halving),
            Self::ShellSortKnuth => Some(GapPolicy::Knuth),
            Self::ShellSortSedgewickFormula => Some(GapPolicy::SedgewickFormula),
            Self::ShellSortSedgewickTable => Some(GapPolicy::SedgewickTable),
            Self::ShellSortCiura => Some(GapPolicy::Ciura),
        }
    }
}

/// Scratch reused across sorts: the gap sequence of the last Shell sort.
#[derive(Clone, Debug, Default)]
pub struct SortContext {
    pub(crate) gaps: Vec<usize>,
}

impl SortContext {
    /// Gaps used by the most recent Shell sort run with this context.
    pub fn last_gaps(&self) -> &[usize] {
        &self.gaps
    }
}

pub fn sort<T: Ord + Copy>(algo: SortAlgorithm, data: &mut [T]) -> Result<(), GapError> {
    let mut ctx = SortContext::default();
    match algo.gap_policy() {
        Some(policy) => shell_sort_with_ctx(data, policy, false, &mut ctx).map(|_| ()),
        None => {
            algorithms::bubble_sort::bubble_sort_uncounted(
                data,
                algo == SortAlgorithm::BubbleSortEarlyExit,
            );
            Ok(())
        }
    }
}

pub fn sort_with_stats<T: Ord + Copy>(
    algo: SortAlgorithm,
    data: &mut [T],
) -> Result<SortStats, GapError> {
    let mut ctx = SortContext::default();
    sort_with_ctx(algo, data, &mut ctx)
}

pub fn sort_with_ctx<T: Ord + Copy>(
    algo: SortAlgorithm,
    data: &mut [T],
    ctx: &mut SortContext,
) -> Result<SortStats, GapError> {
    match algo.gap_policy() {
        Some(policy) => shell_sort_with_ctx(data, policy, true, ctx),
        None => Ok(bubble_sort(data, algo == SortAlgorithm::BubbleSortEarlyExit)),
    }
}
