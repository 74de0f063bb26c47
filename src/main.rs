//! CLI entry point for treesnap

use std::path::PathBuf;
use std::process;

use clap::Parser;
use treesnap::{FilterConfig, TreeBuilder, save, timestamp_now};

#[derive(Parser, Debug)]
#[command(name = "treesnap")]
#[command(about = "Snapshot a directory tree to a timestamped text file")]
#[command(version)]
struct Args {
    /// Directory to snapshot
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Output file
    #[arg(short = 'o', long = "output", default_value = "directory_tree.txt")]
    output: PathBuf,

    /// Ignore a directory name (can be used multiple times)
    #[arg(long = "ignore-dir", value_name = "NAME")]
    ignore_dirs: Vec<String>,

    /// Ignore a file name or "*.ext" suffix pattern (can be used multiple times)
    #[arg(long = "ignore-file", value_name = "PATTERN")]
    ignore_files: Vec<String>,

    /// Start from empty ignore sets instead of the built-in defaults
    #[arg(long = "no-default-ignores")]
    no_default_ignores: bool,

    /// Descend only N levels deep
    #[arg(short = 'L', long = "level")]
    level: Option<usize>,
}

fn main() {
    let args = Args::parse();

    let mut config = if args.no_default_ignores {
        FilterConfig::empty()
    } else {
        FilterConfig::default()
    };
    config.ignored_dirs.extend(args.ignore_dirs);
    config.ignored_files.extend(args.ignore_files);

    let mut builder = TreeBuilder::new(config);
    if let Some(level) = args.level {
        builder = builder.with_max_depth(level);
    }

    let document = match builder.build(&args.path) {
        Ok(doc) => doc,
        Err(e) => {
            eprintln!("treesnap: {e}");
            process::exit(1);
        }
    };

    if let Err(e) = save(&document, &timestamp_now(), &args.output) {
        eprintln!("treesnap: {e}");
        process::exit(1);
    }

    println!("Directory tree has been saved to {}", args.output.display());
}
