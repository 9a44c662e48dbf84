//! Reader for the WordNet database files of a Princeton WordNet 3.x release:
//! `index.*`, `data.*` and the `*.exc` exception lists, all in one directory.

use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::Path;

use super::lexicon::{Lexicon, Sense};
use crate::DictionaryError;

/// File suffix and pos letter, in the order senses are listed per headword.
const PARTS: [(&str, &str); 4] = [("noun", "n"), ("verb", "v"), ("adj", "a"), ("adv", "r")];

fn read(dir: &Path, name: &str) -> Result<String, DictionaryError> {
    let path = dir.join(name);
    std::fs::read_to_string(&path).map_err(|source| DictionaryError::Io { path, source })
}

fn malformed(origin: &str, number: usize, what: &str) -> DictionaryError {
    DictionaryError::Data {
        origin: origin.to_string(),
        message: format!("line {}: malformed {what}", number + 1),
    }
}

/// Multi-word lemmas are written with underscores.
fn lemma_text(word: &str) -> String {
    word.replace('_', " ").to_lowercase()
}

/// `big(a)` -> `big`
fn strip_marker(word: &str) -> &str {
    word.split_once('(').map_or(word, |(word, _)| word)
}

/// `definition; "first example"; "second"` -> definition and first example.
fn split_gloss(gloss: &str) -> (String, Option<String>) {
    let gloss = gloss.trim();
    match gloss.split_once('"') {
        Some((definition, examples)) => {
            let example = examples
                .split_once('"')
                .map(|(example, _)| example.trim().to_string())
                .filter(|example| !example.is_empty());
            (definition.trim().trim_end_matches(';').trim_end().to_string(), example)
        }
        None => (gloss.to_string(), None),
    }
}

/// Synsets of one `data.*` file keyed by their offset.
fn parse_data(origin: &str, text: &str) -> Result<HashMap<u64, Sense>, DictionaryError> {
    let mut synsets = HashMap::new();
    for (number, line) in text.lines().enumerate() {
        // the license header is indented
        if line.starts_with(' ') || line.trim().is_empty() {
            continue;
        }
        let (fields, gloss) = line.split_once('|').unwrap_or((line, ""));
        let fields = fields.split_whitespace().collect::<Vec<&str>>();
        let error = || malformed(origin, number, "synset");

        let offset = fields
            .first()
            .and_then(|field| field.parse::<u64>().ok())
            .ok_or_else(error)?;
        let pos = fields.get(2).ok_or_else(error)?;
        let word_count = fields
            .get(3)
            .and_then(|field| usize::from_str_radix(field, 16).ok())
            .ok_or_else(error)?;
        let synonyms = (0..word_count)
            .map(|index| fields.get(4 + 2 * index).map(|word| strip_marker(word).to_string()))
            .collect::<Option<Vec<String>>>()
            .ok_or_else(error)?;

        let (definition, example) = split_gloss(gloss);
        synsets.insert(
            offset,
            Sense {
                pos: pos.to_string(),
                definition,
                synonyms,
                example,
            },
        );
    }
    Ok(synsets)
}

/// Lemmas of one `index.*` file with their synset offsets, most frequent
/// sense first.
fn parse_index(origin: &str, text: &str) -> Result<Vec<(String, Vec<u64>)>, DictionaryError> {
    let mut lemmas = Vec::new();
    for (number, line) in text.lines().enumerate() {
        if line.starts_with(' ') || line.trim().is_empty() {
            continue;
        }
        let fields = line.split_whitespace().collect::<Vec<&str>>();
        let error = || malformed(origin, number, "index entry");
        let count = |index: usize| fields.get(index).and_then(|field| field.parse::<usize>().ok());

        let synset_count = count(2).ok_or_else(error)?;
        let pointer_count = count(3).ok_or_else(error)?;
        // lemma pos synset_cnt p_cnt [ptr...] sense_cnt tagsense_cnt offsets...
        let first = 4 + pointer_count + 2;
        let offsets = fields
            .get(first..first + synset_count)
            .ok_or_else(error)?
            .iter()
            .map(|field| field.parse::<u64>())
            .collect::<Result<Vec<u64>, _>>()
            .map_err(|_| error())?;
        lemmas.push((lemma_text(fields[0]), offsets));
    }
    Ok(lemmas)
}

/// `inflected base [base...]` lines.
fn parse_exceptions(text: &str) -> HashMap<String, Vec<String>> {
    text.lines()
        .filter_map(|line| {
            let mut words = line.split_whitespace().map(lemma_text);
            let inflected = words.next()?;
            let bases = words.collect::<Vec<String>>();
            (!bases.is_empty()).then_some((inflected, bases))
        })
        .collect()
}

/// Loads a WordNet database directory. The exception lists are optional.
pub fn load(dir: &Path) -> Result<Lexicon, DictionaryError> {
    let mut entries: HashMap<String, Vec<Sense>> = HashMap::new();
    let mut exceptions = HashMap::new();
    for (file, pos) in PARTS {
        let name = format!("data.{file}");
        let origin = dir.join(&name).display().to_string();
        let synsets = parse_data(&origin, &read(dir, &name)?)?;

        let name = format!("index.{file}");
        let origin = dir.join(&name).display().to_string();
        for (lemma, offsets) in parse_index(&origin, &read(dir, &name)?)? {
            entries
                .entry(lemma)
                .or_default()
                .extend(offsets.iter().filter_map(|offset| synsets.get(offset).cloned()));
        }

        match read(dir, &format!("{file}.exc")) {
            Ok(text) => {
                exceptions.insert(pos.to_string(), parse_exceptions(&text));
            }
            Err(DictionaryError::Io { source, .. }) if source.kind() == ErrorKind::NotFound => {}
            Err(error) => return Err(error),
        }
    }
    Ok(Lexicon::from_parts(entries, exceptions))
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    fn fixture() -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/wndb")
    }

    #[test]
    fn gloss_definition_and_first_example() {
        assert_eq!(
            split_gloss(r#" move forward by leaps; "The horse jumped"; "Jump up!"  "#),
            ("move forward by leaps".to_string(), Some("The horse jumped".to_string()))
        );
        assert_eq!(split_gloss("a color  "), ("a color".to_string(), None));
    }

    #[test]
    fn data_lines_keep_every_synonym() {
        let text = "  1 license text\n00001 38 v 02 leap 0 jump 0 000 | spring up\n";
        let synsets = parse_data("data.verb", text).unwrap();
        assert_eq!(synsets[&1].synonyms, vec!["leap", "jump"]);
        assert_eq!(synsets[&1].pos, "v");
    }

    #[test]
    fn short_index_line_is_an_error() {
        let error = parse_index("index.verb", "jump v 2 0 2 2 01926311\n").unwrap_err();
        assert!(error.to_string().contains("line 1"));
    }

    #[test]
    fn loads_database_directory() {
        let lexicon = load(&fixture()).unwrap();

        let jump = lexicon.senses("jump");
        assert_eq!(jump.len(), 2);
        assert_eq!(jump[0].definition, "move forward by leaps and bounds");
        assert_eq!(jump[0].example.as_deref(), Some("The horse jumped over the fence"));
        assert_eq!(jump[1].synonyms, vec!["leap", "jump"]);

        assert_eq!(lexicon.senses("computer")[0].pos, "n");
        assert_eq!(lexicon.senses("red")[0].synonyms, vec!["red"]);
        assert!(lexicon.has_pos("red", &["a", "s"]));
        assert_eq!(lexicon.exceptions("leapt", "v").to_vec(), vec!["leap"]);
        assert!(lexicon.exceptions("leapt", "n").is_empty());
    }

    #[test]
    fn missing_data_file_is_an_io_error() {
        let error = load(Path::new("/nonexistent/wordnet")).unwrap_err();
        assert!(matches!(error, DictionaryError::Io { .. }));
    }
}
