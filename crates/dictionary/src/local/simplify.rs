use std::collections::BTreeSet;

use crate::providers::TextSimplifier;

const PLAIN_WORDS: &[(&str, &str)] = &[
    ("additional", "more"),
    ("approximately", "about"),
    ("assist", "help"),
    ("commence", "start"),
    ("construct", "build"),
    ("demonstrate", "show"),
    ("endeavor", "try"),
    ("impart", "give"),
    ("inquire", "ask"),
    ("numerous", "many"),
    ("obtain", "get"),
    ("perceive", "see"),
    ("purchase", "buy"),
    ("reside", "live"),
    ("sufficient", "enough"),
    ("terminate", "end"),
    ("utilize", "use"),
];

const MIN_SIMILARITY: f64 = 0.93;
const MIN_CORRECTION_LEN: usize = 4;

/// Smooths definition prose for beginners: plain-word swaps, spelling fixes
/// against a known vocabulary, sentence casing.
#[derive(Debug, Default)]
pub struct PlainWords {
    vocabulary: BTreeSet<String>,
}

impl PlainWords {
    pub fn new(mut vocabulary: BTreeSet<String>) -> Self {
        vocabulary.extend(
            PLAIN_WORDS
                .iter()
                .flat_map(|(hard, plain)| [hard.to_string(), plain.to_string()]),
        );
        Self { vocabulary }
    }

    fn correct(&self, word: &str) -> Option<&str> {
        let first = word.chars().next()?;
        self.vocabulary
            .iter()
            .filter(|known| known.starts_with(first))
            .map(|known| (known, strsim::jaro_winkler(word, known)))
            .filter(|(_, score)| *score >= MIN_SIMILARITY)
            // first of the best, vocabulary order breaks ties
            .fold(None, |best: Option<(&String, f64)>, candidate| match best {
                Some((_, score)) if score >= candidate.1 => best,
                _ => Some(candidate),
            })
            .map(|(known, _)| known.as_str())
    }

    fn simplify_word(&self, token: &str) -> String {
        let start = token.find(|c: char| c.is_alphabetic());
        let end = token.rfind(|c: char| c.is_alphabetic());
        let (Some(start), Some(end)) = (start, end) else {
            return token.to_string();
        };
        let end = end + token[end..].chars().next().map_or(1, char::len_utf8);
        let (prefix, core, suffix) = (&token[..start], &token[start..end], &token[end..]);
        if !core.chars().all(char::is_alphabetic) {
            return token.to_string();
        }

        let lower = core.to_lowercase();
        let replacement = PLAIN_WORDS
            .iter()
            .find(|(hard, _)| *hard == lower)
            .map(|(_, plain)| *plain)
            .or_else(|| {
                let unknown = lower.chars().count() >= MIN_CORRECTION_LEN
                    && !self.vocabulary.contains(&lower);
                if unknown {
                    self.correct(&lower)
                } else {
                    None
                }
            });
        let Some(replacement) = replacement else {
            return token.to_string();
        };
        let replacement = if core.starts_with(char::is_uppercase) {
            crate::dictionary::capitalize(replacement)
        } else {
            replacement.to_string()
        };
        format!("{prefix}{replacement}{suffix}")
    }
}

impl TextSimplifier for PlainWords {
    fn simplify(&self, text: &str) -> String {
        let mut out = text
            .split_whitespace()
            .map(|token| self.simplify_word(token))
            .collect::<Vec<String>>()
            .join(" ");
        if out.is_empty() {
            return out;
        }
        if let Some(first) = out.chars().next() {
            if first.is_lowercase() {
                out = first.to_uppercase().chain(out.chars().skip(1)).collect();
            }
        }
        if !out.ends_with(['.', '!', '?']) {
            out.push('.');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn simplifier() -> PlainWords {
        let vocabulary = ["move", "fast", "feet", "foot", "ground", "with", "one", "the", "animal"]
            .into_iter()
            .map(str::to_string)
            .collect();
        PlainWords::new(vocabulary)
    }

    #[test]
    fn sentence_case_and_period() {
        assert_eq!(simplifier().simplify("move  fast\n"), "Move fast.");
        assert_eq!(simplifier().simplify("Move fast!"), "Move fast!");
        assert_eq!(simplifier().simplify("   "), "");
    }

    #[test]
    fn hard_words_become_plain() {
        assert_eq!(
            simplifier().simplify("utilize one's feet; Commence moving"),
            "Use one's feet; Start moving."
        );
    }

    #[test]
    fn misspellings_are_corrected() {
        assert_eq!(simplifier().simplify("an anmial on the grouund"), "An animal on the ground.");
    }

    #[test]
    fn short_and_unrelated_words_are_left_alone() {
        assert_eq!(simplifier().simplify("a cat by zebra"), "A cat by zebra.");
    }
}
