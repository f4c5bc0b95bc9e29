use anyhow::{Context, Result};
use clap::Parser;

use rebalance_bst::generate::GeneratorConfig;
use rebalance_bst::{Node, Tree};

/// Builds a tree from random values, unbalances it with extra inserts, and rebalances it.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// How many random values to build the tree from.
    #[arg(long, default_value_t = 15)]
    size: usize,

    /// Smallest random value.
    #[arg(long, default_value_t = 1)]
    min: i32,

    /// Largest random value.
    #[arg(long, default_value_t = 100)]
    max: i32,

    /// Seed for reproducible runs.
    #[arg(long)]
    seed: Option<u64>,

    /// Values inserted after the tree is built.
    #[arg(long, num_args = 1.., default_values_t = [150, 200, 250, 400])]
    insert: Vec<i32>,

    /// Only report balance, not the traversal listings.
    #[arg(long, short)]
    quiet: bool,
}

impl Args {
    fn generator(&self) -> GeneratorConfig {
        let config = GeneratorConfig::default()
            .with_size(self.size)
            .with_range(self.min, self.max);
        match self.seed {
            Some(seed) => config.with_seed(seed),
            None => config,
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let values = args
        .generator()
        .generate()
        .context("could not generate the initial values")?;
    println!("Initial random array: {:?}", values);

    let mut tree = Tree::from_values(values);
    println!("Tree created");
    println!("Is tree balanced? {}", tree.is_balanced());
    if !args.quiet {
        print_traversals(&tree);
    }

    tree.extend(args.insert.iter().copied());
    println!("Inserted {:?}", args.insert);
    println!("Is tree balanced? {}", tree.is_balanced());

    tree.rebalance();
    println!("Tree rebalanced");
    println!("Is tree balanced? {}", tree.is_balanced());
    if !args.quiet {
        print_traversals(&tree);
    }

    print!("{}", tree);
    Ok(())
}

fn print_traversals(tree: &Tree<i32>) {
    let print = |node: &Node<i32>| println!("{}", node.value());

    println!("Level-order:");
    tree.level_order_for_each(print);
    println!("In order:");
    tree.in_order_for_each(print);
    println!("Pre order:");
    tree.pre_order_for_each(print);
    println!("Post order:");
    tree.post_order_for_each(print);
}
