use rand::Rng;

use super::{
    models::WordType,
    WizardError,
};

const NOUNS: &[&str] = &[
    "Lantern", "Harbor", "Meadow", "Compass", "Thimble", "Orchard", "Glacier", "Tapestry",
    "Beacon", "Cauldron", "Quill", "Labyrinth", "Ember", "Pebble", "Citadel", "Zephyr", "Marble",
    "Horizon", "Chimney", "Falcon", "Riddle", "Voyage", "Whisker", "Anchor", "Nebula", "Saffron",
    "Trellis", "Goblet", "Parchment", "Willow", "Sparrow", "Canyon", "Mosaic", "Prism", "Lagoon",
];

const VERBS: &[&str] = &[
    "Wander", "Whisper", "Gather", "Shimmer", "Forge", "Tumble", "Conjure", "Ponder", "Glide",
    "Kindle", "Scatter", "Linger", "Unravel", "Flourish", "Murmur", "Drift", "Sculpt", "Beckon",
    "Stumble", "Soar", "Blossom", "Quiver", "Rummage", "Dazzle", "Embark", "Nestle", "Wobble",
    "Summon", "Chisel", "Meander", "Sprint", "Flicker", "Ripple", "Clamber", "Brew",
];

const ADJECTIVES: &[&str] = &[
    "Luminous", "Whimsical", "Ancient", "Velvety", "Brisk", "Serene", "Crimson", "Nimble",
    "Gloomy", "Radiant", "Peculiar", "Hollow", "Mellow", "Fierce", "Gentle", "Dusky", "Vivid",
    "Frosty", "Lofty", "Rustic", "Tangled", "Jubilant", "Somber", "Gilded", "Restless", "Humble",
    "Sturdy", "Eerie", "Fragrant", "Boundless", "Quaint", "Nocturnal", "Wistful", "Agile", "Verdant",
];

const ADVERBS: &[&str] = &[
    "Swiftly", "Quietly", "Boldly", "Gently", "Eagerly", "Softly", "Rarely", "Briskly",
    "Gracefully", "Wearily", "Fiercely", "Lazily", "Promptly", "Silently", "Warmly", "Openly",
    "Keenly", "Calmly", "Proudly", "Freely", "Barely", "Deftly", "Merrily", "Nearly", "Vaguely",
    "Humbly", "Loosely", "Madly", "Neatly", "Oddly", "Sternly", "Tenderly", "Vividly", "Wildly",
    "Zealously",
];

/// Read-only word lists, one per word type, plus their concatenation for `Any`.
#[derive(Debug, Clone)]
pub struct WordPool {
    nouns: Vec<String>,
    verbs: Vec<String>,
    adjectives: Vec<String>,
    adverbs: Vec<String>,
    all: Vec<String>,
}

impl WordPool {
    pub fn builtin() -> Self {
        let owned = |list: &[&str]| list.iter().map(|w| w.to_string()).collect::<Vec<_>>();
        Self::assemble(owned(NOUNS), owned(VERBS), owned(ADJECTIVES), owned(ADVERBS))
    }

    pub fn from_lists(
        nouns: Vec<String>,
        verbs: Vec<String>,
        adjectives: Vec<String>,
        adverbs: Vec<String>,
    ) -> Result<Self, WizardError> {
        for (word_type, list) in [
            (WordType::Noun, &nouns),
            (WordType::Verb, &verbs),
            (WordType::Adjective, &adjectives),
            (WordType::Adverb, &adverbs),
        ] {
            if list.is_empty() {
                return Err(WizardError::EmptyWordList(word_type));
            }
        }

        Ok(Self::assemble(nouns, verbs, adjectives, adverbs))
    }

    fn assemble(
        nouns: Vec<String>,
        verbs: Vec<String>,
        adjectives: Vec<String>,
        adverbs: Vec<String>,
    ) -> Self {
        let all = nouns
            .iter()
            .chain(verbs.iter())
            .chain(adjectives.iter())
            .chain(adverbs.iter())
            .cloned()
            .collect();

        Self { nouns, verbs, adjectives, adverbs, all }
    }

    pub fn words(&self, word_type: WordType) -> &[String] {
        match word_type {
            WordType::Any => &self.all,
            WordType::Noun => &self.nouns,
            WordType::Verb => &self.verbs,
            WordType::Adjective => &self.adjectives,
            WordType::Adverb => &self.adverbs,
        }
    }

    /// Draws `count` words independently, so the same word may land in several slots.
    pub fn sample<R: Rng + ?Sized>(
        &self,
        word_type: WordType,
        count: usize,
        rng: &mut R,
    ) -> Vec<String> {
        let words = self.words(word_type);
        (0..count).map(|_| pick(words, rng).to_string()).collect()
    }

    /// A random word from the whole pool, used while a slot spins.
    pub fn decoy<R: Rng + ?Sized>(&self, rng: &mut R) -> &str {
        pick(&self.all, rng)
    }
}

impl Default for WordPool {
    fn default() -> Self {
        Self::builtin()
    }
}

// Lists are never empty: `builtin` is static and `from_lists` rejects empties.
fn pick<'a, R: Rng + ?Sized>(words: &'a [String], rng: &mut R) -> &'a str {
    &words[rng.random_range(0..words.len())]
}

#[cfg(test)]
mod tests {
    use rand::{
        rngs::StdRng,
        SeedableRng,
    };

    use super::*;

    #[test]
    fn any_pool_contains_every_list() {
        let pool = WordPool::builtin();
        let total: usize = [WordType::Noun, WordType::Verb, WordType::Adjective, WordType::Adverb]
            .iter()
            .map(|t| pool.words(*t).len())
            .sum();
        assert_eq!(pool.words(WordType::Any).len(), total);
        assert!(pool.words(WordType::Noun).iter().any(|w| w == "Lantern"));
    }

    #[test]
    fn samples_come_from_the_selected_list() {
        let pool = WordPool::builtin();
        let mut rng = StdRng::seed_from_u64(7);

        for word_type in WordType::ALL {
            let words = pool.sample(word_type, 25, &mut rng);
            assert_eq!(words.len(), 25);
            assert!(words.iter().all(|w| pool.words(word_type).contains(w)));
        }
    }

    #[test]
    fn sampling_allows_repeats() {
        let pool = WordPool::from_lists(
            vec!["Only".to_string()],
            vec!["Run".to_string()],
            vec!["Red".to_string()],
            vec!["Fast".to_string()],
        )
        .unwrap();
        let mut rng = StdRng::seed_from_u64(1);

        assert_eq!(pool.sample(WordType::Noun, 3, &mut rng), vec!["Only", "Only", "Only"]);
    }

    #[test]
    fn decoys_come_from_the_whole_pool() {
        let pool = WordPool::builtin();
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..50 {
            let decoy = pool.decoy(&mut rng).to_string();
            assert!(pool.words(WordType::Any).contains(&decoy));
        }
    }

    #[test]
    fn empty_lists_are_rejected() {
        let result = WordPool::from_lists(
            vec!["Lantern".to_string()],
            Vec::new(),
            vec!["Red".to_string()],
            vec!["Fast".to_string()],
        );
        assert!(matches!(result, Err(WizardError::EmptyWordList(WordType::Verb))));
    }
}
