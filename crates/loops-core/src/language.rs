//! English/Sinhala language classifier.
//!
//! Two explicit policies (see [`DetectionPolicy`]):
//! - `Strict`: Sinhala iff the text contains a code point from the Sinhala
//!   Unicode block (U+0D80..=U+0DFF).
//! - `Romanized`: the strict check, then a lookup of common Sinhala words written
//!   in Latin script ("kohomada", "mokadda", ...).
//!
//! The romanized check is a heuristic: long list words also match as substrings
//! of longer tokens, so some English words ("dangerous") classify as Sinhala.

use std::ops::RangeInclusive;

use loops_types::chat::Language;
use loops_types::config::DetectionPolicy;

const SINHALA_BLOCK: RangeInclusive<char> = '\u{0D80}'..='\u{0DFF}';

/// Punctuation removed from a token before matching.
const STRIPPED_PUNCTUATION: &[char] = &['.', ',', '!', '?', ';', ':'];

/// List words longer than this also match as substrings of a token.
const SUBSTRING_MIN_LEN: usize = 3;

/// Common Sinhala words written in Latin script.
#[rustfmt::skip]
const ROMANIZED_SINHALA: &[&str] = &[
    // greetings
    "ayubowan", "kohomada", "bohoma", "istuti",
    // question words
    "mokadda", "mokakda", "kiyatada", "koheda", "kauda", "kawda",
    // verbs
    "kranne", "karanna", "karanne", "karanawa", "karanawada",
    "denne", "denawa", "dennada", "danna", "dannawa",
    "balanna", "balanne", "balanawa", "balanawada",
    "kiyanna", "kiyanne", "kiyanawa", "kiyanawada",
    "yanna", "yanne", "yanawa", "yanawada",
    "enna", "enne", "enawa", "enawada",
    "gewanna", "gewanne", "gewanawa",
    // modal / auxiliary
    "puluwanda", "puluwan", "puluwanida",
    "onada", "ona", "onida", "epa", "epada",
    "tiyenawada", "tiyenawa", "tiyanawa",
    // pronouns and demonstratives
    "mata", "mama", "oya", "eyata", "api", "meka", "eka", "eke",
    "mekata", "ekata", "mehe", "ehe", "mokada",
    // negation and affirmation
    "nadda", "nane", "naha", "ehemai", "ow", "owwa",
    // adjectives
    "hondai", "honda", "lassana", "hari", "sudda", "sudu",
    // time and location
    "dang", "kiyada", "kohe",
    // particles and connectors
    "da", "neda", "nemeda", "gana", "ekka", "wage",
    // nouns
    "kolla", "lamaya", "amma", "thaththa", "akka", "malli",
];

/// True if any character falls in the Sinhala Unicode block.
pub fn contains_sinhala_script(text: &str) -> bool {
    text.chars().any(|c| SINHALA_BLOCK.contains(&c))
}

/// True if any whitespace-separated token is, or contains, a romanized
/// Sinhala word.
pub fn contains_romanized_sinhala(text: &str) -> bool {
    let lower = text.to_lowercase();
    lower.split_whitespace().any(|raw| {
        let token: String = raw
            .chars()
            .filter(|c| !STRIPPED_PUNCTUATION.contains(c))
            .collect();
        ROMANIZED_SINHALA.iter().any(|word| {
            token == *word || (word.len() > SUBSTRING_MIN_LEN && token.contains(word))
        })
    })
}

/// Classify `text` under `policy`. Total: empty input is English.
pub fn classify(text: &str, policy: DetectionPolicy) -> Language {
    let sinhala = match policy {
        DetectionPolicy::Strict => contains_sinhala_script(text),
        DetectionPolicy::Romanized => {
            contains_sinhala_script(text) || contains_romanized_sinhala(text)
        }
    };

    if sinhala { Language::Si } else { Language::En }
}

/// Classifier bound to a configured policy.
#[derive(Debug, Clone, Copy, Default)]
pub struct LanguageClassifier {
    policy: DetectionPolicy,
}

impl LanguageClassifier {
    pub fn new(policy: DetectionPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> DetectionPolicy {
        self.policy
    }

    pub fn classify(&self, text: &str) -> Language {
        classify(text, self.policy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sinhala_script_wins_under_both_policies() {
        for policy in [DetectionPolicy::Strict, DetectionPolicy::Romanized] {
            assert_eq!(classify("ආයුබෝවන්", policy), Language::Si);
            assert_eq!(classify("price eka කීයද?", policy), Language::Si);
        }
    }

    #[test]
    fn block_boundaries_are_inclusive() {
        assert!(contains_sinhala_script("\u{0D80}"));
        assert!(contains_sinhala_script("\u{0DFF}"));
        assert!(!contains_sinhala_script("\u{0D7F}"));
        assert!(!contains_sinhala_script("\u{0E00}"));
    }

    #[test]
    fn empty_input_is_english() {
        assert_eq!(classify("", DetectionPolicy::Strict), Language::En);
        assert_eq!(classify("", DetectionPolicy::Romanized), Language::En);
        assert_eq!(classify("   \n\t", DetectionPolicy::Romanized), Language::En);
    }

    #[test]
    fn romanized_word_alone_is_sinhala() {
        assert_eq!(classify("mokadda", DetectionPolicy::Romanized), Language::Si);
        assert_eq!(classify("Kohomada?", DetectionPolicy::Romanized), Language::Si);
    }

    #[test]
    fn strict_policy_ignores_romanized_words() {
        assert_eq!(classify("mokadda", DetectionPolicy::Strict), Language::En);
    }

    #[test]
    fn plain_english_is_english() {
        let classifier = LanguageClassifier::new(DetectionPolicy::Romanized);
        assert_eq!(classifier.classify("hello there"), Language::En);
        assert_eq!(
            classifier.classify("What services do you offer?"),
            Language::En
        );
        assert_eq!(
            classifier.classify("Can you help with social media marketing"),
            Language::En
        );
    }

    #[test]
    fn punctuation_is_removed_before_matching() {
        assert!(contains_romanized_sinhala("oya, mata!"));
        assert!(contains_romanized_sinhala("da?"));
        assert!(contains_romanized_sinhala("ow."));
    }

    #[test]
    fn short_words_only_match_exactly() {
        // "eka" is 3 chars, so only a whole token matches.
        assert!(!contains_romanized_sinhala("weka"));
        assert!(contains_romanized_sinhala("eka"));
        // "ow" must not match inside "how".
        assert!(!contains_romanized_sinhala("how"));
    }

    #[test]
    fn long_words_match_inside_compounds() {
        assert!(contains_romanized_sinhala("mekatath"));
        assert!(contains_romanized_sinhala("karannada"));
    }

    #[test]
    fn substring_rule_has_known_false_positives() {
        assert_eq!(
            classify("that sounds dangerous", DetectionPolicy::Romanized),
            Language::Si
        );
    }

    #[test]
    fn default_classifier_is_romanized() {
        assert_eq!(
            LanguageClassifier::default().policy(),
            DetectionPolicy::Romanized
        );
    }
}
