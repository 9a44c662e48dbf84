use std::collections::HashMap;

use crate::dictionary::Pronunciation;
use crate::providers::PhoneticLookup;
use crate::DictionaryError;

/// CMU Pronouncing Dictionary: word to ARPABET phones, first variant only.
#[derive(Debug, Default)]
pub struct PronouncingDictionary {
    phones: HashMap<String, String>,
}

impl PronouncingDictionary {
    /// Parses the `cmudict` text format: `WORD  PH1 PH2`, `;;;` comments and
    /// `WORD(1)` for alternative pronunciations.
    pub fn parse(origin: &str, text: &str) -> Result<Self, DictionaryError> {
        let mut phones = HashMap::new();
        for (number, line) in text.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with(";;;") {
                continue;
            }
            let Some((word, arpabet)) = line.split_once(char::is_whitespace) else {
                return Err(DictionaryError::Data {
                    origin: origin.to_string(),
                    message: format!("line {}: missing phones", number + 1),
                });
            };
            if word.ends_with(')') {
                continue;
            }
            let arpabet = arpabet.split_whitespace().collect::<Vec<&str>>().join(" ");
            phones.entry(word.to_lowercase()).or_insert(arpabet);
        }
        Ok(Self { phones })
    }

    pub fn len(&self) -> usize {
        self.phones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phones.is_empty()
    }

    /// Every word with a pronunciation, lower-cased.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.phones.keys().map(String::as_str)
    }

    pub fn phones_for_word(&self, word: &str) -> Option<&str> {
        self.phones.get(&word.trim().to_lowercase()).map(String::as_str)
    }
}

impl PhoneticLookup for PronouncingDictionary {
    fn pronounce(&self, word: &str) -> Pronunciation {
        let arpabet = self.phones_for_word(word);
        Pronunciation {
            ipa: arpabet.and_then(arpabet_to_ipa),
            arpabet: arpabet.map(str::to_string),
        }
    }
}

fn phone_to_ipa(phone: &str, stressed: bool) -> Option<&'static str> {
    let ipa = match phone {
        "AA" => "ɑ",
        "AE" => "æ",
        "AH" if stressed => "ʌ",
        "AH" => "ə",
        "AO" => "ɔ",
        "AW" => "aʊ",
        "AY" => "aɪ",
        "B" => "b",
        "CH" => "tʃ",
        "D" => "d",
        "DH" => "ð",
        "EH" => "ɛ",
        "ER" if stressed => "ɜr",
        "ER" => "ər",
        "EY" => "eɪ",
        "F" => "f",
        "G" => "g",
        "HH" => "h",
        "IH" => "ɪ",
        "IY" => "i",
        "JH" => "dʒ",
        "K" => "k",
        "L" => "l",
        "M" => "m",
        "N" => "n",
        "NG" => "ŋ",
        "OW" => "oʊ",
        "OY" => "ɔɪ",
        "P" => "p",
        "R" => "r",
        "S" => "s",
        "SH" => "ʃ",
        "T" => "t",
        "TH" => "θ",
        "UH" => "ʊ",
        "UW" => "u",
        "V" => "v",
        "W" => "w",
        "Y" => "j",
        "Z" => "z",
        "ZH" => "ʒ",
        _ => return None,
    };
    Some(ipa)
}

/// Converts ARPABET phones to IPA. Stress is marked only in words with more
/// than one vowel, in front of the consonant that opens the stressed
/// syllable (all leading consonants for the first syllable).
pub fn arpabet_to_ipa(arpabet: &str) -> Option<String> {
    let phones = arpabet
        .split_whitespace()
        .map(|phone| {
            let base = phone.trim_end_matches(|c: char| c.is_ascii_digit());
            let stress = phone[base.len()..].parse::<u8>().ok();
            (base, stress)
        })
        .collect::<Vec<(&str, Option<u8>)>>();
    if phones.is_empty() {
        return None;
    }
    let vowel_count = phones.iter().filter(|(_, stress)| stress.is_some()).count();

    let mut segments: Vec<String> = Vec::with_capacity(phones.len());
    let mut seen_vowel = false;
    let mut onset_start = 0;
    for (base, stress) in &phones {
        match stress {
            Some(level) => {
                if vowel_count > 1 && *level > 0 {
                    let mark = if *level == 1 { "ˈ" } else { "ˌ" };
                    let at = if seen_vowel {
                        segments.len().saturating_sub(1).max(onset_start)
                    } else {
                        0
                    };
                    segments.insert(at, mark.to_string());
                }
                segments.push(phone_to_ipa(base, *level > 0)?.to_string());
                seen_vowel = true;
                onset_start = segments.len();
            }
            None => segments.push(phone_to_ipa(base, false)?.to_string()),
        }
    }
    Some(segments.concat())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = ";;; comment\nRUN  R AH1 N\nREAD  R EH1 D\nREAD(1)  R IY1 D\nWATER  W AO1 T ER0\n";

    #[test]
    fn first_pronunciation_wins() {
        let dict = PronouncingDictionary::parse("sample", SAMPLE).unwrap();
        assert_eq!(dict.len(), 3);
        assert_eq!(dict.phones_for_word("Read"), Some("R EH1 D"));
        assert!(dict.words().all(|word| word == word.to_lowercase()));
        assert!(dict.words().any(|word| word == "read"));
    }

    #[test]
    fn ipa_conversion() {
        let cases = [
            ("R AH1 N", "rʌn"),
            ("W AO1 T ER0", "ˈwɔtər"),
            ("AH0 B AW1 T", "əˈbaʊt"),
            ("B Y UW1 T AH0 F AH0 L", "ˈbjutəfəl"),
            ("S IH1 T IY0", "ˈsɪti"),
            ("HH AE1 P IY0", "ˈhæpi"),
            ("AE1 P AH0 L", "ˈæpəl"),
        ];
        for (arpabet, ipa) in cases {
            assert_eq!(arpabet_to_ipa(arpabet).as_deref(), Some(ipa), "{arpabet}");
        }
    }

    #[test]
    fn unknown_phone_gives_no_ipa() {
        assert_eq!(arpabet_to_ipa("R XX1 N"), None);
        assert_eq!(arpabet_to_ipa(""), None);
    }

    #[test]
    fn missing_word_is_not_available() {
        let dict = PronouncingDictionary::parse("sample", SAMPLE).unwrap();
        assert_eq!(dict.pronounce("zebra"), Pronunciation::default());
        assert_eq!(
            dict.pronounce("run"),
            Pronunciation {
                ipa: Some("rʌn".into()),
                arpabet: Some("R AH1 N".into()),
            }
        );
    }

    #[test]
    fn line_without_phones_is_rejected() {
        assert!(PronouncingDictionary::parse("bad", "RUN\n").is_err());
    }
}
