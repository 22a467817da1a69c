use crate::GapError;

/// Precomputed Sedgewick terms, ascending.
pub const SEDGEWICK_TABLE: [usize; 13] = [
    1, 5, 19, 41, 109, 209, 505, 929, 2_161, 3_905, 8_929, 16_001, 36_289,
];

/// Ciura's tuned gaps extended by a factor of 2.25, ascending.
pub const CIURA_TABLE: [usize; 20] = [
    1, 4, 10, 23, 57, 132, 301, 701, 1_051, 2_364, 5_319, 11_968, 26_928, 60_587, 136_320,
    306_720, 690_121, 1_552_773, 3_493_740, 7_860_916,
];

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum GapPolicy {
    /// n/2, n/4, ..., 1.
    Halving,
    /// (3^k - 1) / 2: 1, 4, 13, 40, ...
    Knuth,
    /// 9·2^k − 9·2^(k/2) + 1 for even k, 8·2^k − 6·2^((k+1)/2) + 1 for odd k.
    SedgewickFormula,
    /// `SEDGEWICK_TABLE` filtered to gaps below n.
    SedgewickTable,
    /// `CIURA_TABLE` filtered to gaps below n.
    Ciura,
}

pub const ALL_GAP_POLICIES: [GapPolicy; 5] = [
    GapPolicy::Halving,
    GapPolicy::Knuth,
    GapPolicy::SedgewickFormula,
    GapPolicy::SedgewickTable,
    GapPolicy::Ciura,
];

impl GapPolicy {
    pub fn name(self) -> &'static str {
        match self {
            Self::Halving => "halving",
            Self::Knuth => "knuth",
            Self::SedgewickFormula => "sedgewick_formula",
            Self::SedgewickTable => "sedgewick_table",
            Self::Ciura => "ciura",
        }
    }

    /// Whether the policy can produce its full sequence for arrays of length `n`.
    ///
    /// Table policies stop growing at their last entry; past it the large-gap
    /// passes a formula would add are simply missing.
    pub fn covers(self, n: usize) -> bool {
        match self {
            Self::Halving | Self::Knuth | Self::SedgewickFormula => true,
            Self::SedgewickTable => n <= SEDGEWICK_TABLE[SEDGEWICK_TABLE.len() - 1],
            Self::Ciura => n <= CIURA_TABLE[CIURA_TABLE.len() - 1],
        }
    }
}

/// Gap sequence for an array of length `n`, largest gap first.
///
/// Every returned gap is at least 1 and strictly below `n`, so `n <= 1`
/// yields an empty sequence.
pub fn gap_sequence(n: usize, policy: GapPolicy) -> Result<Vec<usize>, GapError> {
    let mut gaps = Vec::new();
    gap_sequence_into(n, policy, &mut gaps)?;
    Ok(gaps)
}

/// Same as [`gap_sequence`], writing into a reused buffer.
///
/// The buffer is cleared first and left empty on error.
pub fn gap_sequence_into(
    n: usize,
    policy: GapPolicy,
    gaps: &mut Vec<usize>,
) -> Result<(), GapError> {
    gaps.clear();
    if n < 2 {
        return Ok(());
    }

    match policy {
        GapPolicy::Halving => halving(n, gaps),
        GapPolicy::Knuth => knuth(n, gaps),
        GapPolicy::SedgewickFormula => {
            if let Err(err) = sedgewick_formula(n, gaps) {
                gaps.clear();
                tracing::warn!(n, %err, "sedgewick gap sequence overflowed");
                return Err(err);
            }
        }
        GapPolicy::SedgewickTable => from_table(n, &SEDGEWICK_TABLE, gaps),
        GapPolicy::Ciura => from_table(n, &CIURA_TABLE, gaps),
    }

    if !policy.covers(n) {
        tracing::debug!(
            n,
            policy = policy.name(),
            largest_gap = gaps.first().copied().unwrap_or(0),
            "gap table exhausted; large-gap passes are skipped"
        );
    }
    Ok(())
}

fn halving(n: usize, gaps: &mut Vec<usize>) {
    let mut h = n / 2;
    while h > 0 {
        gaps.push(h);
        h /= 2;
    }
}

fn knuth(n: usize, gaps: &mut Vec<usize>) {
    let mut h = 1usize;
    while h <= n / 3 {
        h = 3 * h + 1;
    }
    // The first term can reach n for tiny arrays; such a pass would be empty.
    while h > 0 {
        if h < n {
            gaps.push(h);
        }
        h /= 3;
    }
}

fn sedgewick_formula(n: usize, gaps: &mut Vec<usize>) -> Result<(), GapError> {
    let mut k = 0u32;
    loop {
        let gap = sedgewick_term(k).ok_or(GapError::SequenceOverflow { k })?;
        if gap >= n {
            break;
        }
        gaps.push(gap);
        k += 1;
    }
    gaps.reverse();
    Ok(())
}

/// The k-th Sedgewick term, or `None` if it does not fit in `usize`.
pub fn sedgewick_term(k: u32) -> Option<usize> {
    let (high_mul, low_mul, low_exp) = if k % 2 == 0 {
        (9usize, 9usize, k / 2)
    } else {
        (8, 6, (k + 1) / 2)
    };
    let high = 1usize.checked_shl(k)?.checked_mul(high_mul)?;
    let low = 1usize.checked_shl(low_exp)?.checked_mul(low_mul)?;
    // high >= low for every k, so only the +1 can still overflow.
    (high - low).checked_add(1)
}

fn from_table(n: usize, table: &[usize], gaps: &mut Vec<usize>) {
    gaps.extend(table.iter().rev().copied().filter(|&gap| gap < n));
}

/// Checks that every gap is positive and the sequence strictly decreases.
pub fn validate_gaps(gaps: &[usize]) -> Result<(), GapError> {
    for (index, &gap) in gaps.iter().enumerate() {
        if gap == 0 {
            return Err(GapError::ZeroGap { index });
        }
        if index > 0 && gaps[index - 1] <= gap {
            return Err(GapError::NotDecreasing {
                index,
                prev: gaps[index - 1],
                gap,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn gaps(n: usize, policy: GapPolicy) -> Vec<usize> {
        gap_sequence(n, policy).unwrap()
    }

    #[test]
    fn known_sequences() {
        let cases: [(GapPolicy, usize, &[usize]); 12] = [
            (GapPolicy::Halving, 9, &[4, 2, 1]),
            (GapPolicy::Halving, 100, &[50, 25, 12, 6, 3, 1]),
            (GapPolicy::Knuth, 9, &[4, 1]),
            (GapPolicy::Knuth, 100, &[40, 13, 4, 1]),
            (GapPolicy::Knuth, 3, &[1]),
            (GapPolicy::SedgewickFormula, 100, &[41, 19, 5, 1]),
            (GapPolicy::SedgewickFormula, 41, &[19, 5, 1]),
            (GapPolicy::SedgewickFormula, 42, &[41, 19, 5, 1]),
            (GapPolicy::SedgewickTable, 9, &[5, 1]),
            (
                GapPolicy::SedgewickTable,
                1000,
                &[929, 505, 209, 109, 41, 19, 5, 1],
            ),
            (GapPolicy::Ciura, 100, &[57, 23, 10, 4, 1]),
            (GapPolicy::Ciura, 2, &[1]),
        ];

        for (policy, n, expected) in cases {
            assert_eq!(gaps(n, policy), expected, "policy={} n={n}", policy.name());
        }
    }

    #[test]
    fn formula_terms_match_table() {
        for (k, &expected) in SEDGEWICK_TABLE.iter().enumerate() {
            assert_eq!(sedgewick_term(k as u32), Some(expected), "k={k}");
        }
    }

    #[test]
    fn tiny_lengths_are_empty() {
        for policy in ALL_GAP_POLICIES {
            assert!(gaps(0, policy).is_empty(), "policy={}", policy.name());
            assert!(gaps(1, policy).is_empty(), "policy={}", policy.name());
            assert_eq!(gaps(2, policy), [1], "policy={}", policy.name());
        }
    }

    #[test]
    fn formula_overflow_is_reported() {
        assert!(matches!(
            gap_sequence(usize::MAX, GapPolicy::SedgewickFormula),
            Err(GapError::SequenceOverflow { .. })
        ));
        assert_eq!(sedgewick_term(usize::BITS), None);
    }

    #[test]
    fn overflow_leaves_buffer_empty() {
        let mut buf = vec![7, 3, 1];
        assert!(gap_sequence_into(usize::MAX, GapPolicy::SedgewickFormula, &mut buf).is_err());
        assert!(buf.is_empty());
    }

    #[test]
    fn table_exhaustion() {
        assert!(GapPolicy::SedgewickTable.covers(36_289));
        assert!(!GapPolicy::SedgewickTable.covers(36_290));
        assert!(GapPolicy::SedgewickFormula.covers(usize::MAX));

        let huge = gaps(1_000_000, GapPolicy::SedgewickTable);
        assert_eq!(huge.len(), SEDGEWICK_TABLE.len());
        assert_eq!(huge[0], 36_289);
    }

    #[test]
    fn validate_rejects_bad_sequences() {
        assert_eq!(validate_gaps(&[]), Ok(()));
        assert_eq!(validate_gaps(&[5, 3, 1]), Ok(()));
        assert_eq!(validate_gaps(&[5, 0]), Err(GapError::ZeroGap { index: 1 }));
        assert_eq!(
            validate_gaps(&[4, 4, 1]),
            Err(GapError::NotDecreasing {
                index: 1,
                prev: 4,
                gap: 4
            })
        );
        assert_eq!(
            validate_gaps(&[1, 3]),
            Err(GapError::NotDecreasing {
                index: 1,
                prev: 1,
                gap: 3
            })
        );
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(256))]

        #[test]
        fn sequences_are_well_formed(n in 0usize..200_000) {
            for policy in ALL_GAP_POLICIES {
                let seq = gaps(n, policy);
                prop_assert!(validate_gaps(&seq).is_ok());
                prop_assert!(seq.iter().all(|&gap| gap >= 1 && gap < n));
                if n >= 2 {
                    prop_assert_eq!(seq.last().copied(), Some(1));
                }
            }
        }
    }
}
