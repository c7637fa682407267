use anyhow::{Context, Result};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tempfile::Builder;

use crate::category::Category;
use crate::classify::Classification;

/// Sample words per category in the stats file.
pub const STATS_SAMPLES: usize = 10;
/// Sample words per category in the console summary.
pub const SUMMARY_SAMPLES: usize = 5;

const RULE_WIDTH: usize = 60;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryStats {
    pub count: usize,
    pub percentage: f64,
    pub samples: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Statistics {
    pub total_words: usize,
    pub categories: BTreeMap<Category, CategoryStats>,
}

impl Statistics {
    /// `total_words` is the dictionary size, which every bucket count is
    /// measured against.
    pub fn from_classification(classification: &Classification<'_>, total_words: usize) -> Self {
        let categories = classification
            .iter()
            .map(|(category, bucket)| {
                let stats = CategoryStats {
                    count: bucket.len(),
                    percentage: round2(percentage(bucket.len(), total_words)),
                    samples: bucket
                        .samples(STATS_SAMPLES)
                        .into_iter()
                        .map(str::to_string)
                        .collect(),
                };
                (category, stats)
            })
            .collect();

        Self {
            total_words,
            categories,
        }
    }
}

/// Share of `total` in percent. Zero when `total` is zero.
pub fn percentage(count: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    count as f64 / total as f64 * 100.0
}

/// Two decimals, ties to even (3.125 -> 3.12).
fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

/// Sibling of `input` with `suffix` inserted before the extension,
/// e.g. `dictionary.json` + `_stats` -> `dictionary_stats.json`.
pub fn sibling_path(input: &Path, suffix: &str) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let file_name = match input.extension() {
        Some(ext) => format!("{}{}.{}", stem, suffix, ext.to_string_lossy()),
        None => format!("{}{}", stem, suffix),
    };
    input.with_file_name(file_name)
}

pub fn classified_path(input: &Path) -> PathBuf {
    sibling_path(input, "_classified")
}

pub fn stats_path(input: &Path) -> PathBuf {
    sibling_path(input, "_stats")
}

/// Pretty-print `value` as JSON (2-space indent) and atomically replace
/// `path` with it.
///
/// A replaced file keeps its permissions; a new one gets the umask
/// default, like a plain `File::create`.
pub fn write_json<T: Serialize>(value: &T, path: &Path) -> Result<()> {
    let parent_dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent_dir)
        .with_context(|| format!("Failed to create directory {:?}", parent_dir))?;

    let temp_file = temp_file_builder()
        .tempfile_in(parent_dir)
        .with_context(|| format!("Failed to create temp file in {:?}", parent_dir))?;
    if let Ok(existing) = fs::metadata(path) {
        temp_file
            .as_file()
            .set_permissions(existing.permissions())
            .with_context(|| format!("Failed to copy permissions of {:?}", path))?;
    }
    {
        let mut writer = BufWriter::new(temp_file.as_file());
        serde_json::to_writer_pretty(&mut writer, value)?;
        writer.flush()?;
    }
    temp_file
        .persist(path)
        .with_context(|| format!("Failed to write {:?}", path))?;

    log::debug!("Wrote {:?}", path);
    Ok(())
}

#[cfg(unix)]
fn temp_file_builder() -> Builder<'static, 'static> {
    use std::os::unix::fs::PermissionsExt;

    // open(2) applies the umask to this mode
    let mut builder = Builder::new();
    builder.permissions(fs::Permissions::from_mode(0o666));
    builder
}

#[cfg(not(unix))]
fn temp_file_builder() -> Builder<'static, 'static> {
    Builder::new()
}

/// Human-readable per-category summary of a classification.
pub fn render_summary(classification: &Classification<'_>, total_words: usize) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    let mut out = String::new();

    out.push('\n');
    out.push_str(&rule);
    out.push_str("\nDICTIONARY CLASSIFICATION RESULTS\n");
    out.push_str(&rule);
    out.push('\n');

    for (category, bucket) in classification.iter() {
        out.push_str(&format!(
            "\n{:<15} : {:>6} words ({:>5.1}%)\n",
            category.as_str().to_uppercase(),
            bucket.len(),
            percentage(bucket.len(), total_words)
        ));
        if !bucket.is_empty() {
            out.push_str(&format!(
                "  Samples: {}\n",
                bucket.samples(SUMMARY_SAMPLES).join(", ")
            ));
        }
    }

    out.push('\n');
    out.push_str(&rule);
    out.push_str(&format!("\nTOTAL WORDS: {}\n", classification.total()));
    out.push_str(&rule);
    out.push('\n');
    out
}

pub fn print_summary(classification: &Classification<'_>, total_words: usize) {
    print!("{}", render_summary(classification, total_words));
}

fn size_mb(path: &Path) -> Result<f64> {
    let len = fs::metadata(path)
        .with_context(|| format!("Failed to stat {:?}", path))?
        .len();
    Ok(len as f64 / 1024.0 / 1024.0)
}

pub fn print_size_comparison(original: &Path, classified: &Path) -> Result<()> {
    println!("\nFile Size Comparison:");
    println!("  Original: {:.2} MB", size_mb(original)?);
    println!("  Classified: {:.2} MB", size_mb(classified)?);
    Ok(())
}
