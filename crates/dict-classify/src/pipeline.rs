use anyhow::Result;
use std::path::{Path, PathBuf};

use crate::classify::classify_dictionary;
use crate::dictionary::load_dictionary;
use crate::report::{self, Statistics};

/// Files produced by one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outputs {
    pub classified: PathBuf,
    pub stats: PathBuf,
}

/// Load, classify, summarise and save.
///
/// Nothing is written until every word has been classified, and the
/// classified file is written before the stats file.
pub fn run(dict_path: &Path) -> Result<Outputs> {
    let dictionary = load_dictionary(dict_path)?;
    let classification = classify_dictionary(&dictionary)?;

    report::print_summary(&classification, dictionary.len());

    let outputs = Outputs {
        classified: report::classified_path(dict_path),
        stats: report::stats_path(dict_path),
    };

    log::info!("Saving classified dictionary to {:?}", outputs.classified);
    report::write_json(&classification, &outputs.classified)?;
    println!("Classified dictionary saved to {}", outputs.classified.display());

    let stats = Statistics::from_classification(&classification, dictionary.len());
    log::info!("Saving statistics to {:?}", outputs.stats);
    report::write_json(&stats, &outputs.stats)?;
    println!("Statistics saved to {}", outputs.stats.display());

    report::print_size_comparison(dict_path, &outputs.classified)?;

    Ok(outputs)
}
