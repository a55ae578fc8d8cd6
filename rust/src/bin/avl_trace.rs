use anyhow::{Context, Result};
use avltree::input::{parse_key, parse_keys};
use avltree::AvlTree;
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Build an AVL tree from a key list and print what happened to it.
#[derive(Parser, Debug)]
#[command(name = "avl_trace", about = "Trace AVL tree operations step by step")]
struct Cli {
    /// Keys to insert, separated by commas or spaces.
    #[arg(long, default_value = "39, 7, 11, 72, 50, -17, 71, 70, 68, 14, 9, 94, 96")]
    insert: String,
    /// Key to delete after the inserts (repeatable).
    #[arg(long, value_parser = parse_key)]
    delete: Vec<i64>,
    /// Key to search for after the deletes (repeatable).
    #[arg(long, value_parser = parse_key)]
    search: Vec<i64>,
    /// Number of operations to undo at the end.
    #[arg(long, default_value_t = 0)]
    undo: usize,
    /// Also print the indented tree structure.
    #[arg(long)]
    structure: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let keys = parse_keys(&cli.insert).context("parsing --insert")?;

    let mut tree = AvlTree::new();
    let inserted = tree.insert_all(keys.iter().copied());
    println!("Inserted {} of {} keys", inserted, keys.len());

    for key in &cli.delete {
        if !tree.delete(key) {
            println!("Key {} not present, nothing deleted", key);
        }
    }

    for key in &cli.search {
        match tree.search(key) {
            Some(node) => println!(
                "Node with key {} found (height {}, balance {})",
                key,
                node.height(),
                node.balance()
            ),
            None => println!("Node with key {} not found", key),
        }
    }

    for _ in 0..cli.undo {
        match tree.undo() {
            Some(entry) => println!("Undid: {}", entry),
            None => {
                println!("Nothing left to undo");
                break;
            }
        }
    }

    tree.validate_for_operation("trace")?;

    println!();
    println!("{}", tree.traversal_report());
    if cli.structure {
        println!();
        tree.print_structure();
    }

    println!();
    println!("History (most recent first):");
    for entry in tree.history().iter() {
        println!("  {}", entry);
    }

    let metrics = tree.metrics_snapshot();
    println!();
    println!("Depth: {}", tree.depth());
    println!("Nodes: {}", tree.node_count());
    println!(
        "Root: {}",
        tree.root()
            .map_or_else(|| "none".to_string(), |node| node.key.to_string())
    );
    println!("Rotation Counts:");
    println!("  Left Rotations: {}", metrics.left_rotations);
    println!("  Right Rotations: {}", metrics.right_rotations);
    println!("  Left-Right Rotations: {}", metrics.left_right_rotations);
    println!("  Right-Left Rotations: {}", metrics.right_left_rotations);
    println!("Comparisons: {}", metrics.comparisons);
    println!("Last operation: {:.4} ms", metrics.last_operation_ms());
    if let (Some(first), Some(last)) = (tree.first(), tree.last()) {
        println!("Key range: {}..={}", first, last);
    }

    Ok(())
}
