//! WordNet-style morphology: find the headword behind an inflected form.

use std::collections::HashSet;
use std::sync::Arc;

use tracing::debug;

use super::inflection::{irregular_singular, IrregularVerbs};
use super::lexicon::{Lexicon, Sense};
use crate::dictionary::{LexicalEntry, PartOfSpeech, MAX_SYNONYMS};
use crate::providers::{LexicalLookup, Normalizer};

const NOUN_RULES: &[(&str, &str)] = &[
    ("s", ""),
    ("ses", "s"),
    ("xes", "x"),
    ("zes", "z"),
    ("ches", "ch"),
    ("shes", "sh"),
    ("men", "man"),
    ("ies", "y"),
];

const VERB_RULES: &[(&str, &str)] = &[
    ("s", ""),
    ("ies", "y"),
    ("es", "e"),
    ("es", ""),
    ("ied", "y"),
    ("ed", "e"),
    ("ed", ""),
    ("ing", "e"),
    ("ing", ""),
];

const ADJ_RULES: &[(&str, &str)] = &[("er", ""), ("est", ""), ("er", "e"), ("est", "e")];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pos {
    Noun,
    Verb,
    Adjective,
}

impl Pos {
    fn letters(self) -> &'static [&'static str] {
        match self {
            Pos::Noun => &["n"],
            Pos::Verb => &["v"],
            Pos::Adjective => &["a", "s"],
        }
    }

    /// Key of the lexicon's exception list for this part of speech.
    fn exception_key(self) -> &'static str {
        self.letters()[0]
    }

    fn rules(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Pos::Noun => NOUN_RULES,
            Pos::Verb => VERB_RULES,
            Pos::Adjective => ADJ_RULES,
        }
    }
}

/// `runn` -> `run`
fn undouble(word: &str) -> Option<&str> {
    let mut chars = word.chars().rev();
    let (last, previous) = (chars.next()?, chars.next()?);
    (last == previous && !matches!(last, 'a' | 'e' | 'i' | 'o' | 'u' | 'l' | 's'))
        .then(|| &word[..word.len() - last.len_utf8()])
}

/// Shortest stem the lexicon-free verb fallback will accept.
const MIN_FALLBACK_STEM: usize = 3;

/// Lexicon plus the exception lists needed to undo inflection.
#[derive(Debug)]
pub struct WordNet {
    lexicon: Arc<Lexicon>,
    irregular_verbs: Arc<IrregularVerbs>,
    known_words: HashSet<String>,
}

impl WordNet {
    pub fn new(lexicon: Arc<Lexicon>, irregular_verbs: Arc<IrregularVerbs>) -> Self {
        Self {
            lexicon,
            irregular_verbs,
            known_words: HashSet::new(),
        }
    }

    /// Spellings the verb normalizer may reduce to when the lexicon has no
    /// entry for a word at all.
    pub fn with_known_words(mut self, words: impl IntoIterator<Item = String>) -> Self {
        self.known_words.extend(words);
        self
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Possible base forms of `word` for `pos`, before checking the lexicon.
    fn candidates(&self, word: &str, pos: Pos) -> Vec<String> {
        let mut candidates = vec![word.to_string()];
        let exception = match pos {
            Pos::Verb => self.irregular_verbs.base_of(word),
            Pos::Noun => irregular_singular(word),
            Pos::Adjective => None,
        };
        candidates.extend(exception.map(str::to_string));
        candidates.extend(
            self.lexicon
                .exceptions(word, pos.exception_key())
                .iter()
                .cloned(),
        );
        for (suffix, ending) in pos.rules() {
            if let Some(stem) = word.strip_suffix(suffix) {
                if stem.is_empty() {
                    continue;
                }
                let candidate = format!("{stem}{ending}");
                if ending.is_empty() {
                    if let Some(shorter) = undouble(&candidate) {
                        candidates.push(shorter.to_string());
                    }
                }
                candidates.push(candidate);
            }
        }
        candidates
    }

    fn morphy(&self, word: &str, pos: Pos) -> Vec<String> {
        let mut found = Vec::new();
        for candidate in self.candidates(word, pos) {
            if self.lexicon.has_pos(&candidate, pos.letters()) && !found.contains(&candidate) {
                found.push(candidate);
            }
        }
        found
    }

    /// Verb lemma of `word`; the shortest match wins. A word the lexicon does
    /// not know at all is reduced against the known spellings instead, and
    /// is returned unchanged when nothing matches.
    pub fn lemmatize_verb(&self, word: &str) -> String {
        let word = word.trim().to_lowercase();
        let lemma = self
            .morphy(&word, Pos::Verb)
            .into_iter()
            .min_by_key(|lemma| lemma.chars().count());
        match lemma {
            Some(lemma) => lemma,
            None if self.lexicon.contains(&word) => word,
            None => self.unlisted_verb(&word).unwrap_or(word),
        }
    }

    fn unlisted_verb(&self, word: &str) -> Option<String> {
        if let Some(base) = self.irregular_verbs.base_of(word) {
            return Some(base.to_string());
        }
        let lemma = self
            .candidates(word, Pos::Verb)
            .into_iter()
            .skip(1)
            .filter(|stem| {
                stem.chars().count() >= MIN_FALLBACK_STEM && self.known_words.contains(stem)
            })
            .min_by_key(|stem| stem.chars().count())?;
        debug!(word, lemma = %lemma, "reduced against known spellings");
        Some(lemma)
    }

    /// The headword a surface form belongs to: the word itself, then verb,
    /// noun and adjective morphology.
    pub fn headword(&self, word: &str) -> Option<String> {
        let word = word.trim().to_lowercase();
        if self.lexicon.contains(&word) {
            return Some(word);
        }
        [Pos::Verb, Pos::Noun, Pos::Adjective]
            .into_iter()
            .find_map(|pos| self.morphy(&word, pos).into_iter().next())
    }
}

fn collect_synonyms(senses: &[Sense]) -> Vec<String> {
    let mut synonyms: Vec<String> = Vec::new();
    for sense in senses.iter().take(2) {
        for synonym in &sense.synonyms {
            let synonym = synonym.replace('_', " ");
            if !synonyms.contains(&synonym) {
                synonyms.push(synonym);
            }
        }
    }
    synonyms.truncate(MAX_SYNONYMS);
    synonyms
}

impl LexicalLookup for WordNet {
    fn lookup(&self, word: &str) -> Option<LexicalEntry> {
        let lemma = self.headword(word)?;
        let senses = self.lexicon.senses(&lemma);
        let first = senses.first()?;
        debug!(word, lemma = %lemma, senses = senses.len(), "lexicon hit");
        Some(LexicalEntry {
            part_of_speech: PartOfSpeech::from_wordnet(&first.pos),
            definition: first.definition.clone(),
            synonyms: collect_synonyms(senses),
            example: first.example.clone(),
            lemma,
        })
    }
}

impl Normalizer for WordNet {
    fn base_form(&self, word: &str) -> String {
        self.lemmatize_verb(word)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn wordnet() -> WordNet {
        let lexicon = Lexicon::from_json(
            "test",
            r#"{
                "run": [
                    { "pos": "v", "definition": "move fast", "synonyms": ["run"] },
                    { "pos": "v", "definition": "flee", "synonyms": ["run_away", "scarper", "bunk", "lam", "turn_tail"] },
                    { "pos": "n", "definition": "a score", "synonyms": ["tally"] }
                ],
                "go": [ { "pos": "v", "definition": "move" } ],
                "study": [ { "pos": "v", "definition": "learn" } ],
                "child": [ { "pos": "n", "definition": "a young person", "synonyms": ["kid"] } ],
                "box": [ { "pos": "n", "definition": "a container" } ],
                "big": [ { "pos": "a", "definition": "large" } ],
                "make": [ { "pos": "v", "definition": "create" } ]
            }"#,
        )
        .unwrap();
        let verbs = IrregularVerbs::parse("test", "go went gone\nrun ran run\n").unwrap();
        WordNet::new(Arc::new(lexicon), Arc::new(verbs))
    }

    #[test]
    fn verb_lemmas() {
        let wordnet = wordnet();
        let cases = [
            ("running", "run"),
            ("runs", "run"),
            ("ran", "run"),
            ("went", "go"),
            ("studies", "study"),
            ("studied", "study"),
            ("making", "make"),
            ("Run", "run"),
            ("zebras", "zebras"),
        ];
        for (word, lemma) in cases {
            assert_eq!(wordnet.base_form(word), lemma, "{word}");
        }
    }

    #[test]
    fn headword_tries_nouns_and_adjectives() {
        let wordnet = wordnet();
        assert_eq!(wordnet.headword("children").as_deref(), Some("child"));
        assert_eq!(wordnet.headword("boxes").as_deref(), Some("box"));
        assert_eq!(wordnet.headword("bigger").as_deref(), Some("big"));
        assert_eq!(wordnet.headword("unicorn"), None);
    }

    #[test]
    fn lookup_uses_first_sense_and_two_senses_of_synonyms() {
        let entry = wordnet().lookup("running").unwrap();
        assert_eq!(entry.lemma, "run");
        assert_eq!(entry.part_of_speech, PartOfSpeech::Verb);
        assert_eq!(entry.definition, "move fast");
        assert_eq!(
            entry.synonyms,
            vec!["run", "run away", "scarper", "bunk", "lam"]
        );
    }

    #[test]
    fn unlisted_verbs_reduce_to_known_spellings() {
        let wordnet = wordnet().with_known_words(
            ["jump", "play", "computer", "new", "hop"].map(String::from),
        );
        let cases = [
            ("jumping", "jump"),
            ("played", "play"),
            ("computers", "computer"),
            ("hopped", "hop"),
            ("went", "go"),
            // a known headword is never reduced further
            ("child", "child"),
            ("quizzes", "quizzes"),
        ];
        for (word, lemma) in cases {
            assert_eq!(wordnet.base_form(word), lemma, "{word}");
        }
    }

    #[test]
    fn lexicon_exception_lists_are_candidates() {
        let mut entries = HashMap::new();
        entries.insert(
            "criterion".to_string(),
            vec![Sense {
                pos: "n".into(),
                definition: "a basis for comparison".into(),
                synonyms: vec!["criterion".into()],
                example: None,
            }],
        );
        let mut nouns = HashMap::new();
        nouns.insert("criteria".to_string(), vec!["criterion".to_string()]);
        let mut exceptions = HashMap::new();
        exceptions.insert("n".to_string(), nouns);
        let lexicon = Lexicon::from_parts(entries, exceptions);
        let wordnet = WordNet::new(Arc::new(lexicon), Arc::new(IrregularVerbs::default()));
        assert_eq!(wordnet.headword("criteria").as_deref(), Some("criterion"));
    }
}
