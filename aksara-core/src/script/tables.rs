//! Hanacaraka sign tables and their derived inverse lookups
//!
//! The forward tables are fixed data. Everything the Latin→script direction
//! needs (consonant keys, phoneme lookups, the longest-first syllable list) is
//! derived from them once, in [`ScriptTables::from_signs`], which rejects any
//! table that would make the inverse lookup ambiguous.

use std::collections::HashMap;

use crate::error::{Error, Result};

/// The inherent vowel carried by every base sign
pub const INHERENT_VOWEL: char = 'a';

/// A base sign: consonant plus inherent "a"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BaseSign {
    pub glyph: &'static str,
    pub syllable: &'static str,
}

/// What a combining sign does to the syllable it attaches to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignKind {
    /// Replaces the inherent vowel (wulu, suku, taling, pepet, taling tarung)
    Vowel,
    /// Vowel-length marker (tarung) when it stands on its own
    Length,
    /// Syllable-final nasal (cecak)
    NasalCoda,
    /// Syllable-final aspirate (wignyan)
    AspirateCoda,
    /// Suppresses the inherent vowel (pangkon)
    VowelKiller,
}

/// A combining sign and the phoneme it contributes (empty for pangkon)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CombiningSign {
    pub glyph: &'static str,
    pub phoneme: &'static str,
    pub kind: SignKind,
}

const fn base(glyph: &'static str, syllable: &'static str) -> BaseSign {
    BaseSign { glyph, syllable }
}

const fn sign(glyph: &'static str, phoneme: &'static str, kind: SignKind) -> CombiningSign {
    CombiningSign {
        glyph,
        phoneme,
        kind,
    }
}

/// Aksara legena plus the aspirated/retroflex and palatal/velar nasal series
pub const BASE_SIGNS: &[BaseSign] = &[
    base("\u{A9B2}", "ha"),
    base("\u{A9A4}", "na"),
    base("\u{A995}", "ca"),
    base("\u{A9AB}", "ra"),
    base("\u{A98F}", "ka"),
    base("\u{A9A2}", "da"),
    base("\u{A9A0}", "ta"),
    base("\u{A9B1}", "sa"),
    base("\u{A9AE}", "wa"),
    base("\u{A9AD}", "la"),
    base("\u{A9A5}", "pa"),
    base("\u{A99D}", "dha"),
    base("\u{A997}", "ja"),
    base("\u{A9AA}", "ya"),
    base("\u{A99A}", "nya"),
    base("\u{A9A9}", "ma"),
    base("\u{A992}", "ga"),
    base("\u{A9A7}", "ba"),
    base("\u{A99B}", "tha"),
    base("\u{A994}", "nga"),
];

/// Sandhangan. Taling tarung is the two-code-point cluster taling + tarung.
pub const COMBINING_SIGNS: &[CombiningSign] = &[
    sign("\u{A9B6}", "i", SignKind::Vowel),
    sign("\u{A9B8}", "u", SignKind::Vowel),
    sign("\u{A9BA}", "e", SignKind::Vowel),
    sign("\u{A9BC}", "\u{EA}", SignKind::Vowel),
    sign("\u{A9BA}\u{A9B4}", "o", SignKind::Vowel),
    sign("\u{A9B4}", "\u{101}", SignKind::Length),
    sign("\u{A981}", "ng", SignKind::NasalCoda),
    sign("\u{A983}", "h", SignKind::AspirateCoda),
    sign("\u{A9C0}", "", SignKind::VowelKiller),
];

/// Whether `c` lies in the Javanese Unicode block
pub fn is_javanese_char(c: char) -> bool {
    ('\u{A980}'..='\u{A9DF}').contains(&c)
}

/// A glyph recognised at the head of some text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableGlyph {
    Base(BaseSign),
    Combining(CombiningSign),
}

/// A base syllable as a Latin→script match candidate
#[derive(Debug, Clone, Copy)]
pub struct SyllableCandidate {
    pub syllable: &'static str,
    pub char_len: usize,
    pub glyph: &'static str,
}

/// Immutable forward and inverse lookup tables
#[derive(Debug, Clone)]
pub struct ScriptTables {
    base_by_glyph: HashMap<&'static str, BaseSign>,
    combining_by_glyph: HashMap<&'static str, CombiningSign>,
    /// Longest registered glyph, in chars
    max_glyph_chars: usize,
    base_by_consonant: HashMap<&'static str, &'static str>,
    sign_by_phoneme: HashMap<&'static str, CombiningSign>,
    vowel_by_letter: HashMap<char, &'static str>,
    /// Sorted longest first; equal lengths can never both match at one position
    syllables: Vec<SyllableCandidate>,
    nasal_coda: CombiningSign,
    aspirate_coda: CombiningSign,
    vowel_killer: CombiningSign,
}

impl ScriptTables {
    /// Build the tables from the built-in sign lists
    pub fn build() -> Result<Self> {
        Self::from_signs(BASE_SIGNS, COMBINING_SIGNS)
    }

    /// Build and validate tables from arbitrary sign lists
    pub fn from_signs(
        base_signs: &'static [BaseSign],
        combining_signs: &'static [CombiningSign],
    ) -> Result<Self> {
        let mut base_by_glyph = HashMap::new();
        let mut base_by_consonant = HashMap::new();
        let mut syllables = Vec::with_capacity(base_signs.len());

        for &sign in base_signs {
            let consonant = sign.syllable.strip_suffix(INHERENT_VOWEL).ok_or_else(|| {
                Error::Config(format!(
                    "base syllable {:?} does not end in the inherent vowel",
                    sign.syllable
                ))
            })?;
            if consonant.is_empty() {
                return Err(Error::Config(format!(
                    "base syllable {:?} has no consonant",
                    sign.syllable
                )));
            }
            if base_by_glyph.insert(sign.glyph, sign).is_some() {
                return Err(Error::Config(format!(
                    "base glyph {:?} registered twice",
                    sign.glyph
                )));
            }
            if let Some(previous) = base_by_consonant.insert(consonant, sign.glyph) {
                return Err(Error::Config(format!(
                    "consonant {:?} maps to both {:?} and {:?}",
                    consonant, previous, sign.glyph
                )));
            }
            syllables.push(SyllableCandidate {
                syllable: sign.syllable,
                char_len: sign.syllable.chars().count(),
                glyph: sign.glyph,
            });
        }
        syllables.sort_by(|a, b| b.char_len.cmp(&a.char_len).then(a.syllable.cmp(b.syllable)));

        let mut combining_by_glyph = HashMap::new();
        let mut sign_by_phoneme = HashMap::new();
        let mut vowel_by_letter = HashMap::new();
        let mut nasal_coda = None;
        let mut aspirate_coda = None;
        let mut vowel_killer = None;

        for &sign in combining_signs {
            if base_by_glyph.contains_key(sign.glyph) {
                return Err(Error::Config(format!(
                    "glyph {:?} is both a base and a combining sign",
                    sign.glyph
                )));
            }
            if combining_by_glyph.insert(sign.glyph, sign).is_some() {
                return Err(Error::Config(format!(
                    "combining glyph {:?} registered twice",
                    sign.glyph
                )));
            }
            if sign_by_phoneme.insert(sign.phoneme, sign).is_some() {
                return Err(Error::Config(format!(
                    "phoneme {:?} maps to more than one combining sign",
                    sign.phoneme
                )));
            }

            let slot = match sign.kind {
                SignKind::Vowel => {
                    let mut letters = sign.phoneme.chars();
                    match (letters.next(), letters.next()) {
                        (Some(letter), None) => {
                            vowel_by_letter.insert(letter, sign.glyph);
                        }
                        _ => {
                            return Err(Error::Config(format!(
                                "vowel sign {:?} must spell exactly one letter",
                                sign.glyph
                            )));
                        }
                    }
                    continue;
                }
                SignKind::Length => continue,
                SignKind::NasalCoda => &mut nasal_coda,
                SignKind::AspirateCoda => &mut aspirate_coda,
                SignKind::VowelKiller => &mut vowel_killer,
            };
            if slot.replace(sign).is_some() {
                return Err(Error::Config(format!("{:?} sign registered twice", sign.kind)));
            }
        }

        let missing = |kind: SignKind| Error::Config(format!("no {:?} sign registered", kind));
        let nasal_coda = nasal_coda.ok_or_else(|| missing(SignKind::NasalCoda))?;
        let aspirate_coda = aspirate_coda.ok_or_else(|| missing(SignKind::AspirateCoda))?;
        let vowel_killer = vowel_killer.ok_or_else(|| missing(SignKind::VowelKiller))?;
        if aspirate_coda.phoneme.chars().count() != 1 {
            return Err(Error::Config(
                "aspirate coda must spell exactly one letter".to_string(),
            ));
        }

        let max_glyph_chars = base_by_glyph
            .keys()
            .chain(combining_by_glyph.keys())
            .map(|glyph| glyph.chars().count())
            .max()
            .unwrap_or(1);

        Ok(Self {
            base_by_glyph,
            combining_by_glyph,
            max_glyph_chars,
            base_by_consonant,
            sign_by_phoneme,
            vowel_by_letter,
            syllables,
            nasal_coda,
            aspirate_coda,
            vowel_killer,
        })
    }

    /// Match the longest registered glyph at the start of `text`.
    /// Returns the glyph and its length in bytes.
    pub fn glyph_at(&self, text: &str) -> Option<(TableGlyph, usize)> {
        for chars in (1..=self.max_glyph_chars).rev() {
            let Some(candidate) = prefix_chars(text, chars) else {
                continue;
            };
            if let Some(&sign) = self.combining_by_glyph.get(candidate) {
                return Some((TableGlyph::Combining(sign), candidate.len()));
            }
            if let Some(&sign) = self.base_by_glyph.get(candidate) {
                return Some((TableGlyph::Base(sign), candidate.len()));
            }
        }
        None
    }

    pub fn base_sign(&self, glyph: &str) -> Option<BaseSign> {
        self.base_by_glyph.get(glyph).copied()
    }

    pub fn combining_sign(&self, glyph: &str) -> Option<CombiningSign> {
        self.combining_by_glyph.get(glyph).copied()
    }

    /// Base glyph for a Latin consonant key ("k", "ny", "dh", ...)
    pub fn base_for_consonant(&self, consonant: &str) -> Option<&'static str> {
        self.base_by_consonant.get(consonant).copied()
    }

    /// Base glyph for a single-letter consonant
    pub fn base_for_letter(&self, letter: char) -> Option<&'static str> {
        let mut buf = [0u8; 4];
        self.base_for_consonant(letter.encode_utf8(&mut buf))
    }

    /// Combining sign spelling `phoneme` (the empty phoneme is pangkon)
    pub fn sign_for_phoneme(&self, phoneme: &str) -> Option<CombiningSign> {
        self.sign_by_phoneme.get(phoneme).copied()
    }

    /// Vowel sign for a single Latin vowel letter other than the inherent "a"
    pub fn vowel_sign(&self, letter: char) -> Option<&'static str> {
        self.vowel_by_letter.get(&letter).copied()
    }

    /// All base syllables, longest spelling first
    pub fn syllables_longest_first(&self) -> &[SyllableCandidate] {
        &self.syllables
    }

    pub fn nasal_coda(&self) -> CombiningSign {
        self.nasal_coda
    }

    pub fn aspirate_coda(&self) -> CombiningSign {
        self.aspirate_coda
    }

    pub fn vowel_killer(&self) -> CombiningSign {
        self.vowel_killer
    }
}

/// The first `n` chars of `text`, if it has that many
fn prefix_chars(text: &str, n: usize) -> Option<&str> {
    match text.char_indices().nth(n) {
        Some((end, _)) => Some(&text[..end]),
        None if text.chars().count() == n => Some(text),
        None => None,
    }
}
