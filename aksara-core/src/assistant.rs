//! Context for the Javanese script assistant
//!
//! Builds the system prompt sent to the script-aware provider: a fixed persona,
//! the reference word list, and transliterations of whatever the user's message
//! contains, so the model does not have to guess at Hanacaraka spelling.

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::script::{Transliterator, script_runs};

const PERSONA: &str = "\
Kamu adalah AbidinAI Jawa, asisten AI pelatih aksara Hanacaraka (Aksara Jawa).
Kuasai transliterasi dua arah: Latin ke Jawa dan Jawa ke Latin.
Ikuti ejaan resmi Jawa Tengah modern.
Jangan ubah pelafalan nama seperti Abidin, Ahmad, Nasrullah.
Tambahkan arti kata jika bermakna umum (misalnya: Turu = Tidur).

Jika pengguna bertanya siapa pembuatmu, jawab bahwa kamu dibuat dan dikembangkan oleh Abidin.";

/// A word with its script form, Latin spelling and meaning
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReferenceWord {
    pub script: &'static str,
    pub latin: &'static str,
    pub meaning: &'static str,
}

pub const REFERENCE_WORDS: &[ReferenceWord] = &[
    ReferenceWord {
        script: "ꦲꦧꦶꦢꦶꦤ꧀",
        latin: "Abidin",
        meaning: "Nama orang",
    },
    ReferenceWord {
        script: "ꦲꦏ꧀ꦱꦫ",
        latin: "Aksara",
        meaning: "Tulisan atau huruf",
    },
    ReferenceWord {
        script: "ꦠꦸꦫꦸ",
        latin: "Turu",
        meaning: "Tidur",
    },
    ReferenceWord {
        script: "ꦩꦸꦭꦸ",
        latin: "Mulu",
        meaning: "Terus-menerus",
    },
];

/// One transliteration offered to the model as a hint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransliterationHint {
    pub source: String,
    pub result: String,
}

fn quoted_span() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#""([^"]+)""#).expect("valid quoted-span regex"))
}

/// Builds script assistant prompts against one transliterator
pub struct ScriptAssistant<'t> {
    transliterator: &'t Transliterator,
}

impl ScriptAssistant<'static> {
    /// Assistant over the shared transliterator
    pub fn global() -> Self {
        Self::new(Transliterator::global())
    }
}

impl<'t> ScriptAssistant<'t> {
    pub fn new(transliterator: &'t Transliterator) -> Self {
        Self { transliterator }
    }

    /// Transliterations worth showing the model for this message.
    ///
    /// Script runs are read to Latin. A message without script gets its
    /// double-quoted spans written in script instead.
    pub fn hints(&self, message: &str) -> Vec<TransliterationHint> {
        let runs = script_runs(message);
        if !runs.is_empty() {
            return runs
                .into_iter()
                .map(|run| TransliterationHint {
                    source: run.to_string(),
                    result: self.transliterator.script_to_latin(run),
                })
                .collect();
        }

        quoted_span()
            .captures_iter(message)
            .filter_map(|caps| caps.get(1))
            .map(|span| span.as_str().trim())
            .filter(|span| !span.is_empty())
            .map(|span| TransliterationHint {
                source: span.to_string(),
                result: self.transliterator.latin_to_script(span),
            })
            .collect()
    }

    /// Full system prompt for a message
    pub fn system_prompt(&self, message: &str) -> String {
        let mut prompt = String::from(PERSONA);

        prompt.push_str("\n\nContoh transliterasi:\n");
        for word in REFERENCE_WORDS {
            prompt.push_str(&format!(
                "- {} = {} ({})\n",
                word.script, word.latin, word.meaning
            ));
        }

        let hints = self.hints(message);
        if !hints.is_empty() {
            prompt.push_str("\nHasil transliterasi otomatis untuk pesan ini:\n");
            for hint in &hints {
                prompt.push_str(&format!("- {} → {}\n", hint.source, hint.result));
            }
        }

        prompt
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_words_agree_with_transliterator() {
        let transliterator = Transliterator::global();
        for word in REFERENCE_WORDS {
            assert_eq!(
                transliterator.script_to_latin(word.script),
                word.latin,
                "reading {}",
                word.script
            );
        }
    }

    #[test]
    fn test_hints_read_script_runs() {
        let assistant = ScriptAssistant::global();
        let hints = assistant.hints("apa artinya ꦠꦸꦫꦸ lan ꦩꦸꦭꦸ?");
        assert_eq!(
            hints,
            vec![
                TransliterationHint {
                    source: "ꦠꦸꦫꦸ".to_string(),
                    result: "Turu".to_string(),
                },
                TransliterationHint {
                    source: "ꦩꦸꦭꦸ".to_string(),
                    result: "Mulu".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_hints_write_quoted_latin() {
        let assistant = ScriptAssistant::global();
        let hints = assistant.hints(r#"tulis "turu" nganggo aksara jawa"#);
        assert_eq!(hints.len(), 1);
        assert_eq!(hints[0].source, "turu");
        assert_eq!(hints[0].result, "ꦠꦸꦫꦸ");
    }

    #[test]
    fn test_no_hints_for_plain_message() {
        let assistant = ScriptAssistant::global();
        assert!(assistant.hints("apa itu aksara jawa?").is_empty());
        assert!(assistant.hints(r#"kosong "  " saja"#).is_empty());
    }

    #[test]
    fn test_system_prompt_contents() {
        let assistant = ScriptAssistant::global();

        let prompt = assistant.system_prompt("apa itu hanacaraka?");
        assert!(prompt.starts_with("Kamu adalah AbidinAI Jawa"));
        assert!(prompt.contains("ꦠꦸꦫꦸ = Turu (Tidur)"));
        assert!(!prompt.contains("Hasil transliterasi otomatis"));

        let prompt = assistant.system_prompt("bacaen ꦲꦏ꧀ꦱꦫ");
        assert!(prompt.contains("ꦲꦏ꧀ꦱꦫ → Aksara"));
    }
}
