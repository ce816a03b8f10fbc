//! Relative encoding round-trips and structural numbering

mod common;

use common::*;
use proptest::prelude::*;
use test_case::test_case;
use treeseq::codec::relative_tokens;
use treeseq::*;

#[test]
fn test_scenario_a_structural_preorder() {
    let tree = scenario_a();
    let pairs: Vec<(usize, &str)> = structural_preorder(&tree).map(|(id, v)| (id, *v)).collect();
    assert_eq!(
        pairs,
        vec![(0, "G"), (1, "O"), (2, "R"), (1, "Y"), (0, "B"), (0, "V")]
    );
}

#[test]
fn test_scenario_a_relative_encoding() {
    let encoding = relative_encode(&scenario_a());
    assert_eq!(encoding.to_string(), "[G, 0, O, 0, R, 2, Y, 2, B, 1, V]");
    assert_eq!(encoding.deltas().collect::<Vec<_>>(), vec![0, 0, 2, 2, 1]);
}

#[test]
fn test_scenario_b_duplicates_decode_unambiguously() {
    init_tracing();
    let tokens = vec![
        Token::Value("P"),
        Token::Delta(0),
        Token::Value("L"),
        Token::Delta(0),
        Token::Value("L"),
        Token::Delta(3),
        Token::Value("R"),
        Token::Delta(1),
        Token::Value("R"),
    ];

    let tree = reconstruct(tokens.clone()).expect("scenario B decodes");
    let expected = Tree::from(
        Node::new("P")
            .with_left(Node::new("L").with_left(Node::new("L")))
            .with_right(Node::new("R").with_right(Node::new("R"))),
    );
    assert_eq!(tree, expected);
    assert_eq!(relative_encode(&tree).into_tokens(), tokens);
}

#[test_case(left_chain ; "left-only chains")]
#[test_case(right_chain ; "right-only chains")]
fn test_chains_round_trip(build: fn(usize) -> Tree<usize>) {
    for len in 0..=11 {
        let tree = build(len);
        let encoding = relative_encode(&tree);
        assert_eq!(encoding.len(), (2 * len).saturating_sub(1));
        assert_eq!(reconstruct(encoding).unwrap(), tree, "length {}", len);
    }
}

#[test]
fn test_balanced_trees_round_trip() {
    for depth in 0..=10 {
        let tree = balanced(depth);
        assert_eq!(tree.height(), depth);
        assert_eq!(tree.len(), (1usize << depth) - 1);

        let encoding = relative_encode(&tree);
        assert_eq!(reconstruct(encoding).unwrap(), tree, "depth {}", depth);
    }
}

#[test]
fn test_left_chain_deltas_are_zero() {
    let tree = left_chain(6);
    assert!(relative_encode(&tree).deltas().all(|delta| delta == 0));

    // Right chains never open a locus: every id stays 0, every delta is 1
    let tree = right_chain(6);
    assert!(structural_preorder(&tree).all(|(id, _)| id == 0));
    assert!(relative_encode(&tree).deltas().all(|delta| delta == 1));
}

#[test]
fn test_deep_chain_round_trip() {
    let tree = left_chain(100_000);
    let rebuilt = reconstruct(relative_encode(&tree)).unwrap();
    assert_eq!(rebuilt.height(), 100_000);
    assert!(rebuilt.preorder().copied().eq(0..100_000));
}

#[test]
fn test_deep_chains_compare_and_clone() {
    let tree = left_chain(200_000);
    let rebuilt = reconstruct(relative_encode(&tree)).unwrap();
    assert!(rebuilt == tree);

    let right = right_chain(200_000);
    let copy = right.clone();
    assert!(copy == right);
    assert!(copy != tree);
    assert!(copy.to_string().starts_with("0(-, 1(-, 2("));
}

#[test]
fn test_empty_tree_encodes_to_nothing() {
    let tree: Tree<u8> = Tree::empty();
    assert!(relative_encode(&tree).is_empty());
    assert!(reconstruct(relative_encode(&tree)).unwrap().is_empty());
}

proptest! {
    #[test]
    fn relative_encoding_round_trips(tree in arb_tree(64)) {
        let rebuilt = reconstruct(relative_encode(&tree)).expect("own encoding decodes");
        prop_assert_eq!(rebuilt, tree);
    }

    #[test]
    fn encoding_length_is_two_n_minus_one(tree in arb_tree(64)) {
        let expected = if tree.is_empty() { 0 } else { 2 * tree.len() - 1 };
        prop_assert_eq!(relative_encode(&tree).len(), expected);
    }

    #[test]
    fn encoding_values_follow_preorder(tree in arb_tree(64)) {
        let encoded: Vec<u8> = relative_tokens(&tree)
            .filter_map(|token| token.as_value().map(|value| **value))
            .collect();
        let preorder: Vec<u8> = tree.preorder().copied().collect();
        prop_assert_eq!(encoded, preorder);
    }

    #[test]
    fn deltas_match_branch_ids(tree in arb_tree(64)) {
        let ids: Vec<usize> = structural_preorder(&tree).map(|(id, _)| id).collect();
        let deltas: Vec<usize> = relative_encode(&tree).deltas().collect();
        for (pair, delta) in ids.windows(2).zip(deltas) {
            prop_assert_eq!(delta, 1 + pair[0] - pair[1]);
        }
    }
}
