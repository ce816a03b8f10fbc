//! Shared tree builders, strategies and snapshot helpers

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use proptest::prelude::*;
use treeseq::{Node, Tree};

/// Route library `tracing` events to the test output (`RUST_LOG=treeseq=debug`)
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// G(O(R, Y), B(-, V))
pub fn scenario_a() -> Tree<&'static str> {
    Tree::from(
        Node::new("G")
            .with_left(Node::new("O").with_left(Node::new("R")).with_right(Node::new("Y")))
            .with_right(Node::new("B").with_right(Node::new("V"))),
    )
}

/// Left-only chain labelled `0..len` in pre-order
pub fn left_chain(len: usize) -> Tree<usize> {
    chain(len, |parent, child| parent.with_left(child))
}

/// Right-only chain labelled `0..len` in pre-order
pub fn right_chain(len: usize) -> Tree<usize> {
    chain(len, |parent, child| parent.with_right(child))
}

fn chain(len: usize, link: impl Fn(Node<usize>, Node<usize>) -> Node<usize>) -> Tree<usize> {
    let Some(last) = len.checked_sub(1) else {
        return Tree::empty();
    };
    let mut node = Node::new(last);
    for value in (0..last).rev() {
        node = link(Node::new(value), node);
    }
    Tree::from(node)
}

/// Perfect tree with `depth` levels, labelled in pre-order
pub fn balanced(depth: usize) -> Tree<usize> {
    fn build(depth: usize, next: &mut usize) -> Option<Node<usize>> {
        if depth == 0 {
            return None;
        }
        let mut node = Node::new(*next);
        *next += 1;
        node.left = build(depth - 1, next).map(Box::new);
        node.right = build(depth - 1, next).map(Box::new);
        Some(node)
    }

    let mut next = 0;
    build(depth, &mut next).map(Tree::from).unwrap_or_default()
}

/// Walk down from the root following the bits of `path` and fill the first empty slot
pub fn insert_along<T>(root: &mut Option<Box<Node<T>>>, value: T, path: u32) {
    let mut slot = root;
    let mut depth = 0;
    while let Some(node) = slot {
        slot = if (path >> (depth % 32)) & 1 == 0 {
            &mut node.left
        } else {
            &mut node.right
        };
        depth += 1;
    }
    *slot = Some(Box::new(Node::new(value)));
}

/// Plain binary-search-tree insertion (duplicates go right)
pub fn bst_insert<T: Ord>(root: &mut Option<Box<Node<T>>>, value: T) {
    let mut slot = root;
    while let Some(node) = slot {
        slot = if value < node.value {
            &mut node.left
        } else {
            &mut node.right
        };
    }
    *slot = Some(Box::new(Node::new(value)));
}

pub fn into_tree<T>(root: Option<Box<Node<T>>>) -> Tree<T> {
    root.map(|node| Tree::from(*node)).unwrap_or_default()
}

/// Arbitrary shapes with small, frequently repeated values
pub fn arb_tree(max_len: usize) -> impl Strategy<Value = Tree<u8>> {
    prop::collection::vec((0u8..4, any::<u32>()), 0..max_len).prop_map(|steps| {
        let mut root = None;
        for (value, path) in steps {
            insert_along(&mut root, value, path);
        }
        into_tree(root)
    })
}

/// Arbitrary shapes whose values are all distinct
pub fn arb_distinct_tree(max_len: usize) -> impl Strategy<Value = Tree<u32>> {
    prop::collection::vec(any::<u32>(), 0..max_len).prop_map(|paths| {
        let mut root = None;
        for (value, path) in paths.into_iter().enumerate() {
            insert_along(&mut root, value as u32, path);
        }
        into_tree(root)
    })
}

fn snapshot_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("snapshots")
}

pub fn assert_snapshot(name: &str, actual: &str) {
    let path = snapshot_root().join(name);
    if std::env::var("TREESEQ_UPDATE_SNAPSHOTS").is_ok() {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create snapshot directory");
        }
        fs::write(&path, actual).expect("write snapshot");
        return;
    }

    let expected =
        fs::read_to_string(&path).unwrap_or_else(|_| panic!("snapshot {:?} not found", path));
    if normalize(&expected) != normalize(actual) {
        panic!(
            "Snapshot mismatch for {:?}. Set TREESEQ_UPDATE_SNAPSHOTS=1 to regenerate.\nExpected:\n{}\nActual:\n{}",
            path,
            expected,
            actual
        );
    }
}

fn normalize(input: &str) -> String {
    input.replace("\r\n", "\n")
}
