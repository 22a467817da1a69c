use crate::SortStats;
use crate::stats::{Counter, NoTally, Tally};

/// Adjacent-exchange bubble sort, counting comparisons and swaps.
///
/// With `early_exit` the sort stops after the first outer pass that swaps
/// nothing.
pub fn bubble_sort<T: Ord + Copy>(data: &mut [T], early_exit: bool) -> SortStats {
    bubble_sort_counted(data, early_exit, &mut Tally::default())
}

pub(crate) fn bubble_sort_uncounted<T: Ord + Copy>(data: &mut [T], early_exit: bool) {
    bubble_sort_counted(data, early_exit, &mut NoTally);
}

fn bubble_sort_counted<T: Ord + Copy, C: Counter>(
    data: &mut [T],
    early_exit: bool,
    counter: &mut C,
) -> SortStats {
    let len = data.len();
    for i in 0..len {
        let mut swapped = false;
        for j in 0..len - 1 - i {
            counter.comparison();
            if data[j] > data[j + 1] {
                data.swap(j, j + 1);
                counter.swap();
                swapped = true;
            }
        }
        if early_exit && !swapped {
            break;
        }
    }
    counter.stats()
}
