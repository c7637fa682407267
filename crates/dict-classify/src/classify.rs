use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::BTreeMap;

use crate::category::Category;
use crate::dictionary::Dictionary;

const LOG_INTERVAL: usize = 10_000;

/// Categories whose keywords occur in `definition`, in declared order.
///
/// Never empty: a definition matching nothing yields `[Category::Other]`.
pub fn matching_categories(definition: &str) -> Vec<Category> {
    let definition_lower = definition.to_lowercase();
    let matched: Vec<Category> = Category::ALL
        .iter()
        .copied()
        .filter(|category| category.matches(&definition_lower))
        .collect();

    if matched.is_empty() {
        vec![Category::FALLBACK]
    } else {
        matched
    }
}

/// The single bucket a definition is filed under.
pub fn primary_category(definition: &str) -> Category {
    let definition_lower = definition.to_lowercase();
    Category::ALL
        .iter()
        .copied()
        .find(|category| category.matches(&definition_lower))
        .unwrap_or(Category::FALLBACK)
}

/// Words of one category, in dictionary order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Bucket<'a> {
    entries: Vec<(&'a str, &'a str)>,
}

impl<'a> Bucket<'a> {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn words(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.entries.iter().map(|(word, _)| *word)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.entries.iter().any(|(w, _)| *w == word)
    }

    /// First `n` words, used for report samples.
    pub fn samples(&self, n: usize) -> Vec<&'a str> {
        self.words().take(n).collect()
    }
}

impl Serialize for Bucket<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (word, definition) in &self.entries {
            map.serialize_entry(word, definition)?;
        }
        map.end()
    }
}

/// Every dictionary word filed under exactly one category.
///
/// Serializes as `{ "<category>": { "<word>": "<definition>" } }` with all
/// categories present in declared order.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(transparent)]
pub struct Classification<'a> {
    buckets: BTreeMap<Category, Bucket<'a>>,
}

impl<'a> Classification<'a> {
    fn empty() -> Self {
        let buckets = Category::ALL
            .iter()
            .map(|&category| (category, Bucket::default()))
            .collect();
        Self { buckets }
    }

    fn insert(&mut self, category: Category, word: &'a str, definition: &'a str) {
        self.buckets
            .entry(category)
            .or_default()
            .entries
            .push((word, definition));
    }

    pub fn bucket(&self, category: Category) -> &Bucket<'a> {
        // Every category is seeded in `empty`.
        &self.buckets[&category]
    }

    /// Buckets in declared category order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, &Bucket<'a>)> {
        self.buckets.iter().map(|(&category, bucket)| (category, bucket))
    }

    /// Number of classified words across all buckets.
    pub fn total(&self) -> usize {
        self.buckets.values().map(Bucket::len).sum()
    }

    pub fn category_of(&self, word: &str) -> Option<Category> {
        self.iter()
            .find(|(_, bucket)| bucket.contains(word))
            .map(|(category, _)| category)
    }
}

/// Classify every word of `dictionary` by its primary category.
pub fn classify_dictionary(dictionary: &Dictionary) -> Result<Classification<'_>> {
    let total = dictionary.len();
    log::info!("Classifying {} words by category...", total);

    let pb = ProgressBar::new(total as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} words")?
            .progress_chars("#>-"),
    );

    let mut classification = Classification::empty();
    for (processed, (word, definition)) in dictionary.iter().enumerate() {
        let category = primary_category(definition);
        log::debug!("{} -> {}", word, category);
        classification.insert(category, word, definition);

        let processed = processed + 1;
        pb.set_position(processed as u64);
        if processed % LOG_INTERVAL == 0 {
            log::info!("Processed: {}/{}", processed, total);
        }
    }

    pb.finish_and_clear();
    Ok(classification)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_dictionary() -> Dictionary {
        [
            ("joyful", "feeling great happiness"),
            ("run", "to move quickly on foot"),
            ("xyzzy", "a magic word"),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_primary_category_examples() {
        assert_eq!(primary_category("feeling great happiness"), Category::Emotion);
        assert_eq!(primary_category("to move quickly on foot"), Category::Movement);
        assert_eq!(primary_category("a magic word"), Category::Other);
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        assert_eq!(primary_category("FEELING great"), Category::Emotion);
        assert_eq!(primary_category("A Mountain Pass"), Category::Place);
    }

    #[test]
    fn test_matching_categories_in_declared_order() {
        // "sad" (emotion), "walk" (movement), "city" (place)
        let matched = matching_categories("a city walk that made him sad");
        assert_eq!(matched.first(), Some(&Category::Emotion));
        assert!(matched.contains(&Category::Movement));
        assert!(matched.contains(&Category::Place));

        let mut sorted = matched.clone();
        sorted.sort();
        assert_eq!(matched, sorted);
    }

    #[test]
    fn test_matching_categories_falls_back() {
        assert_eq!(matching_categories("a magic word"), vec![Category::Other]);
        assert_eq!(matching_categories(""), vec![Category::Other]);
    }

    #[test]
    fn test_first_match_wins() {
        // "say" is an expression keyword, "dark" a quality keyword
        assert_eq!(primary_category("to say something dark"), Category::Expression);
        assert_eq!(
            matching_categories("to say something dark"),
            vec![Category::Expression, Category::Quality]
        );
    }

    #[test]
    fn test_classify_dictionary_buckets() {
        let dict = sample_dictionary();
        let classification = classify_dictionary(&dict).unwrap();

        assert_eq!(classification.category_of("joyful"), Some(Category::Emotion));
        assert_eq!(classification.category_of("run"), Some(Category::Movement));
        assert_eq!(classification.category_of("xyzzy"), Some(Category::Other));
        assert_eq!(classification.category_of("missing"), None);
        assert_eq!(classification.total(), dict.len());
    }

    #[test]
    fn test_every_word_in_exactly_one_bucket() {
        let dict: Dictionary = [
            ("a", "a happy walk in the forest"),
            ("b", "to speak loudly"),
            ("c", "nothing here at all"),
            ("d", "a small cold stone"),
            ("e", "to eat quickly"),
        ]
        .into_iter()
        .collect();
        let classification = classify_dictionary(&dict).unwrap();

        for (word, _) in dict.iter() {
            let hits = classification
                .iter()
                .filter(|(_, bucket)| bucket.contains(word))
                .count();
            assert_eq!(hits, 1, "{} found in {} buckets", word, hits);
        }
    }

    #[test]
    fn test_all_categories_present_when_empty() {
        let dict = Dictionary::default();
        let classification = classify_dictionary(&dict).unwrap();
        let categories: Vec<Category> = classification.iter().map(|(c, _)| c).collect();
        assert_eq!(categories, Category::ALL.to_vec());
        assert!(classification.iter().all(|(_, bucket)| bucket.is_empty()));
    }

    #[test]
    fn test_bucket_keeps_dictionary_order() {
        let dict: Dictionary = [
            ("zebra", "walks on plains"),
            ("ant", "a small insect"),
            ("yak", "runs uphill"),
        ]
        .into_iter()
        .collect();
        let classification = classify_dictionary(&dict).unwrap();
        // "plains" matches place but "walk" (movement) is checked first
        let movement = classification.bucket(Category::Movement);
        assert_eq!(movement.samples(10), vec!["zebra", "yak"]);
        assert_eq!(movement.samples(1), vec!["zebra"]);
    }

    #[test]
    fn test_serializes_nested_object() {
        let dict = sample_dictionary();
        let classification = classify_dictionary(&dict).unwrap();
        let json = serde_json::to_value(&classification).unwrap();

        assert_eq!(json["emotion"]["joyful"], "feeling great happiness");
        assert_eq!(json["movement"]["run"], "to move quickly on foot");
        assert_eq!(json["other"]["xyzzy"], "a magic word");
        assert_eq!(json["place"], serde_json::json!({}));

        let keys: Vec<&String> = json.as_object().unwrap().keys().collect();
        assert_eq!(
            keys,
            vec!["emotion", "expression", "movement", "action", "place", "quality", "other"]
        );
    }
}
