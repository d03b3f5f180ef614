//! End-to-end runs of all three metamorphic checks against the reference
//! in-process store. The memstore evaluates filters exactly, so every
//! check must report zero violations; a nonzero count here means the
//! engine or the adapter broke an invariant.

use queryproof::prelude::*;

fn corpus() -> Vec<Document> {
    (0..50)
        .map(|i| {
            let name = format!("user{i:02}");
            Document::new(i)
                .with("name", name)
                .with("age", i64::try_from(i).unwrap() % 40 + 10)
                .with("active", i % 3 == 0)
        })
        .collect()
}

fn field_options() -> FieldOptions {
    FieldOptions::from_json(
        r#"{
            "age":    { "gte": [18, 30], "lt": [25, 45], "eq": [33] },
            "name":   { "starts_with": ["user0", "user1"], "contains": ["3"] },
            "active": { "eq": [true, false] }
        }"#,
    )
    .unwrap()
}

fn service(seed: u64) -> QueryTestingService<MemStore> {
    let store = MemStore::with_seed(corpus(), &field_options(), seed).unwrap();

    QueryTestingService::with_seed(store, SetOracle, seed)
}

#[test]
fn equal_check_holds_on_an_exact_store() {
    for seed in [1, 42, 1337] {
        let mut svc = service(seed);
        assert_eq!(svc.run_equal_test(60).unwrap(), 0, "seed {seed}");
    }
}

#[test]
fn not_check_holds_on_an_exact_store() {
    for seed in [1, 42, 1337] {
        let mut svc = service(seed);
        assert_eq!(svc.run_not_test(60).unwrap(), 0, "seed {seed}");
    }
}

#[test]
fn subset_check_holds_on_an_exact_store() {
    for seed in [1, 42, 1337] {
        let mut svc = service(seed);
        assert_eq!(svc.run_subset_test(61).unwrap(), 0, "seed {seed}");
    }
}

#[test]
fn wide_trees_still_hold() {
    let mut svc = service(7);
    svc.set_min_leaf_count(8);
    svc.set_max_leaf_count(16);

    assert_eq!(svc.run_equal_test(20).unwrap(), 0);
    assert_eq!(svc.run_not_test(20).unwrap(), 0);
    assert_eq!(svc.run_subset_test(20).unwrap(), 0);
}

#[test]
fn a_lying_oracle_surfaces_violations_not_errors() {
    /// Claims every pair of results intersects, so the NOT check must
    /// count a violation per trial without erroring.
    struct AlwaysIntersected;

    impl ResultOracle<Document> for AlwaysIntersected {
        fn is_intersected(&self, _result1: &[Document], _result2: &[Document]) -> bool {
            true
        }
    }

    let store = MemStore::with_seed(corpus(), &field_options(), 5).unwrap();
    let mut svc = QueryTestingService::with_oracle(store, AlwaysIntersected);

    assert_eq!(svc.run_not_test(15).unwrap(), 15);
}

#[test]
fn version_is_exported() {
    assert_eq!(queryproof::VERSION, env!("CARGO_PKG_VERSION"));
}
