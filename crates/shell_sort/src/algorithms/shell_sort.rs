use crate::gaps::{gap_sequence_into, validate_gaps};
use crate::stats::{Counter, NoTally, Tally};
use crate::{GapError, GapPolicy, SortContext, SortStats};

/// Runs one gapped insertion pass per gap, in the order given.
///
/// Comparisons count every `>` evaluation including the one that ends a
/// walk; swaps count every shift plus the final placement of each element.
/// With `instrumented == false` the returned stats are zero.
///
/// The gap sequence is validated before the array is touched. A gap that is
/// not below `data.len()` is an empty pass.
///
/// If `T`'s `Ord` panics mid-walk, the slice keeps a duplicated element and
/// loses the value being inserted.
pub fn gapped_insertion_sort<T: Ord + Copy>(
    data: &mut [T],
    gaps: &[usize],
    instrumented: bool,
) -> Result<SortStats, GapError> {
    validate_gaps(gaps)?;
    Ok(if instrumented {
        run_passes(data, gaps, &mut Tally::default())
    } else {
        run_passes(data, gaps, &mut NoTally)
    })
}

/// Shell sort with the gaps produced by `policy`, counting comparisons and swaps.
pub fn shell_sort<T: Ord + Copy>(
    data: &mut [T],
    policy: GapPolicy,
) -> Result<SortStats, GapError> {
    let mut ctx = SortContext::default();
    shell_sort_with_ctx(data, policy, true, &mut ctx)
}

pub fn shell_sort_with_ctx<T: Ord + Copy>(
    data: &mut [T],
    policy: GapPolicy,
    instrumented: bool,
    ctx: &mut SortContext,
) -> Result<SortStats, GapError> {
    gap_sequence_into(data.len(), policy, &mut ctx.gaps)?;
    debug_assert!(validate_gaps(&ctx.gaps).is_ok());
    Ok(if instrumented {
        run_passes(data, &ctx.gaps, &mut Tally::default())
    } else {
        run_passes(data, &ctx.gaps, &mut NoTally)
    })
}

fn run_passes<T: Ord + Copy, C: Counter>(
    data: &mut [T],
    gaps: &[usize],
    counter: &mut C,
) -> SortStats {
    for &gap in gaps {
        gapped_pass(data, gap, counter);
        if C::INSTRUMENTED {
            let stats = counter.stats();
            tracing::trace!(
                gap,
                comparisons = stats.comparisons,
                swaps = stats.swaps,
                "gap pass done"
            );
        }
    }
    counter.stats()
}

#[inline]
fn gapped_pass<T: Ord + Copy, C: Counter>(data: &mut [T], gap: usize, counter: &mut C) {
    let len = data.len();
    if gap == 0 || gap >= len {
        return;
    }

    let ptr = data.as_mut_ptr();
    // Hot loop: every index is in bounds since j - gap < j <= i < len.
    unsafe {
        for i in gap..len {
            let x = *ptr.add(i);
            let mut j = i;
            while j >= gap {
                counter.comparison();
                let prev = *ptr.add(j - gap);
                if prev <= x {
                    break;
                }
                *ptr.add(j) = prev;
                counter.swap();
                j -= gap;
            }
            *ptr.add(j) = x;
            counter.swap();
        }
    }
}
