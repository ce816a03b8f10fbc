//! Enumerate every tree for a pre-order sequence and round-trip each one.
//!
//! ```text
//! cargo run --example enumerate_shapes -- G O R Y
//! RUST_LOG=treeseq=debug cargo run --example enumerate_shapes
//! ```

use anyhow::{ensure, Context};
use tracing_subscriber::EnvFilter;
use treeseq::{enumerate_trees_with, reconstruct, relative_encode, EnumerationConfig};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut values: Vec<String> = std::env::args().skip(1).collect();
    if values.is_empty() {
        values = ["A", "B", "C"].map(String::from).to_vec();
    }

    let config = EnumerationConfig::default().with_max_values(10);
    let enumerator = enumerate_trees_with(values.clone(), &config)
        .context("input too long to enumerate")?;
    let expected = enumerator.expected_count();

    let mut count = 0u64;
    for tree in enumerator {
        let encoding = relative_encode(&tree);
        println!("{count:>4}: {tree}  {encoding}");

        let rebuilt = reconstruct(encoding).context("own encoding failed to decode")?;
        ensure!(rebuilt == tree, "round-trip changed shape {count}");
        count += 1;
    }

    println!("{count} shapes for {} values", values.len());
    ensure!(Some(count) == expected, "expected {expected:?} shapes");
    Ok(())
}
