use thiserror::Error;

/// Failures detected while building or checking a gap sequence.
///
/// All of them are raised before the array is touched, so a caller that sees
/// an error still holds its input unchanged.
#[derive(Clone, Copy, Debug, Error, Eq, PartialEq)]
pub enum GapError {
    /// A Sedgewick formula term does not fit in `usize`.
    #[error("sedgewick gap term k={k} overflows usize")]
    SequenceOverflow { k: u32 },

    #[error("gap at index {index} is zero")]
    ZeroGap { index: usize },

    #[error("gap sequence is not strictly decreasing at index {index} ({prev} then {gap})")]
    NotDecreasing { index: usize, prev: usize, gap: usize },
}
