use anyhow::Result;
use clap::Parser;
use std::path::{Path, PathBuf};

/// Classify dictionary words into semantic categories by their definitions.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input dictionary (JSON object of word -> definition).
    /// Defaults to data/dictionary.json at the workspace root this binary
    /// was built from; pass a path when running a relocated binary.
    input: Option<PathBuf>,

    /// Log debug output, including the category of every word
    #[arg(short, long)]
    verbose: bool,
}

/// Resolved at build time from the crate directory.
fn default_dict_path() -> PathBuf {
    // Same layout as a script under crates/: ../data/dictionary.json
    let crates_dir = Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap_or_else(|| Path::new("."));
    crates_dir.join("../data/dictionary.json")
}

fn main() -> Result<()> {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let dict_path = args.input.unwrap_or_else(default_dict_path);

    if !dict_path.exists() {
        eprintln!("Error: dictionary not found at {}", dict_path.display());
        return Ok(());
    }

    dict_classify::run(&dict_path)?;
    Ok(())
}
