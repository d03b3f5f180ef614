use std::{
    collections::{HashMap, HashSet},
    hash::Hash,
};

///
/// ResultOracle
///
/// Decides whether two result collections satisfy the relation a
/// metamorphic check demands. Every method has a default body with set
/// semantics; a store-specific oracle overrides only what needs custom
/// equality (e.g. ignoring server-generated identifiers).
///
/// Inputs are slices, so an absent collection cannot reach the oracle;
/// empty slices are ordinary valid inputs.
///

pub trait ResultOracle<R: Eq + Hash> {
    /// True iff the two collections contain the same records with the
    /// same multiplicities, irrespective of order.
    fn is_equals(&self, result1: &[R], result2: &[R]) -> bool {
        if result1.len() != result2.len() {
            return false;
        }

        let mut counts: HashMap<&R, isize> = HashMap::with_capacity(result1.len());
        for record in result1 {
            *counts.entry(record).or_insert(0) += 1;
        }
        for record in result2 {
            match counts.get_mut(record) {
                Some(count) => *count -= 1,
                None => return false,
            }
        }

        counts.values().all(|count| *count == 0)
    }

    /// True iff the set-deduplicated intersection is non-empty.
    fn is_intersected(&self, result1: &[R], result2: &[R]) -> bool {
        let seen: HashSet<&R> = result1.iter().collect();

        result2.iter().any(|record| seen.contains(record))
    }

    /// True iff every distinct record in `result1` also appears in
    /// `result2`.
    fn is_subset(&self, result1: &[R], result2: &[R]) -> bool {
        let superset: HashSet<&R> = result2.iter().collect();

        result1.iter().all(|record| superset.contains(record))
    }
}

///
/// SetOracle
///
/// The default oracle: plain set/multiset semantics, all trait defaults.
///

#[derive(Clone, Copy, Debug, Default)]
pub struct SetOracle;

impl<R: Eq + Hash> ResultOracle<R> for SetOracle {}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn equals_ignores_order() {
        assert!(SetOracle.is_equals(&[1, 2, 3], &[3, 1, 2]));
        assert!(!SetOracle.is_equals(&[1, 2, 3], &[1, 2, 4]));
    }

    #[test]
    fn equals_keeps_duplicates_significant() {
        assert!(SetOracle.is_equals(&[1, 1, 2], &[2, 1, 1]));
        assert!(!SetOracle.is_equals(&[1, 1, 2], &[1, 2, 2]));
        assert!(!SetOracle.is_equals(&[1, 1], &[1]));
    }

    #[test]
    fn empty_collections_are_valid_inputs() {
        let empty: [u32; 0] = [];
        assert!(SetOracle.is_equals(&empty, &empty));
        assert!(!SetOracle.is_intersected(&empty, &[1]));
        assert!(SetOracle.is_subset(&empty, &[1, 2]));
        assert!(!SetOracle.is_subset(&[1], &empty));
    }

    #[test]
    fn intersected_requires_a_shared_record() {
        assert!(SetOracle.is_intersected(&[1, 2], &[2, 3]));
        assert!(!SetOracle.is_intersected(&[1, 2], &[3, 4]));
    }

    #[test]
    fn subset_is_over_distinct_records() {
        assert!(SetOracle.is_subset(&[1, 1, 2], &[1, 2, 3]));
        assert!(!SetOracle.is_subset(&[1, 4], &[1, 2, 3]));
    }

    #[test]
    fn overriding_one_method_keeps_the_rest() {
        /// Treats results as equal whenever they have the same length,
        /// the way a store-specific oracle might ignore volatile fields.
        struct LengthOracle;

        impl ResultOracle<u32> for LengthOracle {
            fn is_equals(&self, result1: &[u32], result2: &[u32]) -> bool {
                result1.len() == result2.len()
            }
        }

        assert!(LengthOracle.is_equals(&[1, 2], &[8, 9]));
        assert!(!LengthOracle.is_intersected(&[1, 2], &[8, 9]));
    }

    // --- oracle laws ---

    proptest! {
        #[test]
        fn equals_is_reflexive(a in prop::collection::vec(0u8..16, 0..12)) {
            prop_assert!(SetOracle.is_equals(&a, &a));
        }

        #[test]
        fn subset_is_reflexive(a in prop::collection::vec(0u8..16, 0..12)) {
            prop_assert!(SetOracle.is_subset(&a, &a));
        }

        #[test]
        fn intersected_is_symmetric(
            a in prop::collection::vec(0u8..16, 0..12),
            b in prop::collection::vec(0u8..16, 0..12),
        ) {
            prop_assert_eq!(
                SetOracle.is_intersected(&a, &b),
                SetOracle.is_intersected(&b, &a)
            );
        }

        #[test]
        fn mutual_subsets_are_set_equal(
            a in prop::collection::vec(0u8..16, 0..12),
            b in prop::collection::vec(0u8..16, 0..12),
        ) {
            // Subset is a relation over distinct records, so mutual
            // containment pins down equality of the deduplicated sets.
            if SetOracle.is_subset(&a, &b) && SetOracle.is_subset(&b, &a) {
                let set_a: HashSet<&u8> = a.iter().collect();
                let set_b: HashSet<&u8> = b.iter().collect();
                prop_assert_eq!(set_a, set_b);
            }
        }
    }
}
