use avl_range_tree::AvlTree;
use proptest::prelude::*;
use std::collections::BTreeSet;

fn key_strategy() -> impl Strategy<Value = i32> {
    -500i32..500i32
}

fn keys_strategy() -> impl Strategy<Value = Vec<i32>> {
    proptest::collection::vec(key_strategy(), 0..400)
}

fn build(keys: &[i32]) -> (AvlTree<i32>, BTreeSet<i32>) {
    let mut tree = AvlTree::new();
    let mut set = BTreeSet::new();
    for &key in keys {
        let inserted = tree.insert(key);
        assert_eq!(inserted, set.insert(key));
    }
    (tree, set)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    /// Balance, order, height and size hold after any insert sequence.
    #[test]
    fn invariants_hold(keys in keys_strategy()) {
        let (tree, set) = build(&keys);

        prop_assert_eq!(tree.check_invariants(), Ok(()));
        prop_assert_eq!(tree.len(), set.len());
        prop_assert!(tree.in_order().copied().eq(set.iter().copied()));
    }

    #[test]
    fn range_query_matches_btreeset(
        keys in keys_strategy(),
        a in -600i32..600i32,
        b in -600i32..600i32,
    ) {
        let (tree, set) = build(&keys);

        let expected = if a <= b { set.range(a..=b).count() } else { 0 };
        prop_assert_eq!(tree.range_query(&a, &b), expected);

        let mut visited = Vec::new();
        tree.for_each_in_range(&a, &b, |k| visited.push(*k));
        prop_assert_eq!(visited.len(), expected);
    }

    #[test]
    fn traversals_are_permutations(keys in keys_strategy()) {
        let (tree, set) = build(&keys);
        let sorted: Vec<i32> = set.into_iter().collect();

        let mut pre: Vec<i32> = tree.pre_order().copied().collect();
        let mut post: Vec<i32> = tree.post_order().copied().collect();
        pre.sort_unstable();
        post.sort_unstable();

        prop_assert_eq!(&pre, &sorted);
        prop_assert_eq!(&post, &sorted);
    }

    #[test]
    fn duplicate_insert_is_idempotent(keys in keys_strategy(), idx in any::<prop::sample::Index>()) {
        prop_assume!(!keys.is_empty());
        let (mut tree, _) = build(&keys);
        let before: Vec<i32> = tree.pre_order().copied().collect();

        prop_assert!(!tree.insert(keys[idx.index(keys.len())]));
        prop_assert_eq!(tree.pre_order().copied().collect::<Vec<_>>(), before);
    }

    #[test]
    fn pre_order_root_is_parent_of_post_order_last(keys in keys_strategy()) {
        let (tree, _) = build(&keys);

        prop_assert_eq!(tree.pre_order().next(), tree.post_order().last());
    }
}
