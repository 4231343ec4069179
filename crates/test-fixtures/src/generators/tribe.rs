//! Tribe generation (topical communities users can join).

use fake::{
    Fake,
    faker::lorem::en::{Sentences, Word, Words},
    faker::name::en::Name,
};
use rand::Rng;
use serde::Serialize;
use time::OffsetDateTime;

use crate::id::ObjectId;

/// A generated tribe record.
#[derive(Debug, Clone, Serialize)]
pub struct Tribe {
    pub id: ObjectId,
    /// Random word with a positional suffix, unique within a batch.
    pub label: String,
    pub label_history: String,
    pub slug_history: String,
    pub synonyms: String,
    /// 6 lowercase hex digits, no leading `#`.
    pub color: String,
    pub count: i64,
    pub created: OffsetDateTime,
    pub modified: OffsetDateTime,
    pub public: bool,
    pub image: bool,
    pub attribution: String,
    pub attribution_url: String,
    pub description: String,
}

/// Configuration for tribe generation.
#[derive(Debug, Clone)]
pub struct TribeGenConfig {
    /// Upper bound (exclusive) for the generated member count.
    pub max_member_count: i64,
}

impl Default for TribeGenConfig {
    fn default() -> Self {
        Self {
            max_member_count: 50_000,
        }
    }
}

/// Generates tribes for test fixtures.
pub struct TribeGenerator {
    config: TribeGenConfig,
}

impl TribeGenerator {
    /// Creates a new tribe generator with default configuration.
    pub fn new() -> Self {
        Self {
            config: TribeGenConfig::default(),
        }
    }

    /// Creates a generator with custom configuration.
    pub fn with_config(config: TribeGenConfig) -> Self {
        Self { config }
    }

    /// Generates a single tribe.
    ///
    /// `index` only disambiguates the label; batches pass 0, 1, 2, … so that
    /// labels never collide even when the random word repeats.
    pub fn generate(&self, index: usize, rng: &mut impl Rng) -> Tribe {
        let word: String = Word().fake_with_rng(rng);
        let now = OffsetDateTime::now_utc();

        Tribe {
            id: ObjectId::generate(rng),
            label: format!("{word}_{index}"),
            label_history: random_words(rng),
            slug_history: random_words(rng),
            synonyms: random_words(rng),
            color: format!("{:06x}", rng.gen_range(0u32..0x0100_0000)),
            count: rng.gen_range(0..self.config.max_member_count),
            created: now,
            modified: now,
            public: true,
            image: false,
            attribution: Name().fake_with_rng(rng),
            attribution_url: random_url(rng),
            description: Sentences(2..5).fake_with_rng::<Vec<String>, _>(rng).join(" "),
        }
    }

    /// Generates tribes for indices `0..count`.
    pub fn generate_batch(&self, count: usize, rng: &mut impl Rng) -> Vec<Tribe> {
        (0..count).map(|i| self.generate(i, rng)).collect()
    }
}

impl Default for TribeGenerator {
    fn default() -> Self {
        Self::new()
    }
}

fn random_words(rng: &mut impl Rng) -> String {
    Words(2..5).fake_with_rng::<Vec<String>, _>(rng).join(" ")
}

fn random_url(rng: &mut impl Rng) -> String {
    let word: String = Word().fake_with_rng(rng);
    format!("https://www.{word}.com")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_tribe() {
        let tribe_gen = TribeGenerator::new();
        let mut rng = rand::thread_rng();
        let tribe = tribe_gen.generate(3, &mut rng);

        assert_eq!(tribe.id.as_str().len(), 24);
        assert!(tribe.label.ends_with("_3"));
        assert_eq!(tribe.color.len(), 6);
        assert!(tribe.color.chars().all(|c| c.is_ascii_hexdigit()));
        assert!((0..50_000).contains(&tribe.count));
        assert!(tribe.public);
        assert!(!tribe.image);
        assert!(tribe.attribution_url.starts_with("https://"));
        assert!(!tribe.description.is_empty());
    }

    #[test]
    fn test_batch_labels_are_distinct() {
        let tribe_gen = TribeGenerator::new();
        let mut rng = rand::thread_rng();
        let tribes = tribe_gen.generate_batch(50, &mut rng);

        assert_eq!(tribes.len(), 50);

        let labels: std::collections::HashSet<_> = tribes.iter().map(|t| &t.label).collect();
        assert_eq!(labels.len(), 50);
    }

    #[test]
    fn test_batch_labels_are_index_suffixed() {
        let tribe_gen = TribeGenerator::new();
        let mut rng = rand::thread_rng();
        let tribes = tribe_gen.generate_batch(3, &mut rng);

        for (i, tribe) in tribes.iter().enumerate() {
            let (word, suffix) = tribe.label.rsplit_once('_').unwrap();
            assert!(!word.is_empty());
            assert_eq!(suffix, i.to_string());
        }
    }

    #[test]
    fn test_empty_batch() {
        let tribe_gen = TribeGenerator::new();
        let mut rng = rand::thread_rng();

        assert!(tribe_gen.generate_batch(0, &mut rng).is_empty());
    }
}
