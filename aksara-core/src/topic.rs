//! Topic gate deciding whether a chat message belongs to the Javanese script
//! assistant
//!
//! Keywords are matched as lowercase substrings anywhere in the message, not
//! as whole words, so "wayang" also hits "wayangan".

use std::sync::OnceLock;

use aho_corasick::{AhoCorasick, AhoCorasickBuilder, MatchKind};

use crate::error::Result;

/// Javanese language, script, culture and history terms
pub const SCRIPT_TOPIC_KEYWORDS: &[&str] = &[
    // language & script
    "bahasa jawa",
    "aksara jawa",
    "hanacaraka",
    "carakan",
    "sandhangan",
    "pangkon",
    "murda",
    "rekan",
    "swara",
    "pasangan",
    "transliterasi",
    "aksara legena",
    "aksara rekan",
    "aksara swara",
    "nulis aksara",
    "huruf jawa",
    "abjad jawa",
    "hanacaraka lengkap",
    "aksara ha na ca ra ka",
    // etiquette & philosophy
    "tata krama",
    "unggah ungguh",
    "pitutur luhur",
    "wejangan",
    "pepatah jawa",
    "falsafah jawa",
    "ajaran kejawen",
    "nilai luhur",
    "spiritual jawa",
    "mistik jawa",
    "primbon",
    "weton",
    "pawukon",
    "neptu",
    "ramalan jawa",
    // culture & custom
    "budaya jawa",
    "adat jawa",
    "tradisi jawa",
    "upacara adat",
    "mitos jawa",
    "kejawen",
    "ritual jawa",
    "sejarah jawa",
    "kerajaan jawa",
    // arts & literature
    "wayang",
    "gamelan",
    "karawitan",
    "campursari",
    "macapat",
    "tembang",
    "geguritan",
    "serat",
    "babad",
    "puisi jawa",
    "sastra jawa",
    "sindhen",
    "dalang",
    "tembang dolanan",
    "langgam jawa",
    // dress & symbols
    "batik",
    "lurik",
    "blangkon",
    "kebaya",
    "jarik",
    "keris",
    "tombak",
    "ukiran jawa",
    "busana tradisional",
    "blangkon solo",
    "blangkon jogja",
    // history & figures
    "majapahit",
    "singhasari",
    "kediri",
    "mataram",
    "panembahan senopati",
    "raden patah",
    "sunan kalijaga",
    "sunan kudus",
    "sunan muria",
    "kraton",
    "keraton",
    "mangkunegaran",
    "pakualaman",
    "yogyakarta",
    "surakarta",
    "solo",
    // regions & registers
    "jawa tengah",
    "jawa timur",
    "jawa barat",
    "diy yogyakarta",
    "suku jawa",
    "tanah jawa",
    "bahasa krama",
    "bahasa ngoko",
    "madya",
    "prabowo subianto",
    // performing arts
    "tari jawa",
    "wayang orang",
    "ketoprak",
    "klenengan",
    "teater jawa",
    "pentas budaya",
    "sendratari",
    "srimpi",
    "bedhaya",
    "reog",
];

/// Keyword membership test over lowercased messages
pub struct TopicGate {
    patterns: AhoCorasick,
    keywords: Vec<String>,
}

impl TopicGate {
    /// Gate over [`SCRIPT_TOPIC_KEYWORDS`]
    pub fn new() -> Result<Self> {
        Self::with_keywords(SCRIPT_TOPIC_KEYWORDS.iter().copied())
    }

    /// Gate over a custom keyword list (keywords are lowercased)
    pub fn with_keywords<I, S>(keywords: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let keywords: Vec<String> = keywords
            .into_iter()
            .map(|k| k.as_ref().to_lowercase())
            .filter(|k| !k.is_empty())
            .collect();
        let patterns = AhoCorasickBuilder::new()
            .match_kind(MatchKind::LeftmostLongest)
            .build(&keywords)?;
        Ok(Self { patterns, keywords })
    }

    /// Get or initialize the gate over the built-in keywords
    pub fn global() -> &'static TopicGate {
        static INSTANCE: OnceLock<TopicGate> = OnceLock::new();
        INSTANCE.get_or_init(|| TopicGate::new().expect("built-in topic keywords must compile"))
    }

    /// Whether the message mentions any keyword
    pub fn is_script_topic(&self, message: &str) -> bool {
        self.patterns.is_match(&message.to_lowercase())
    }

    /// The leftmost keyword found in the message (longest on ties), if any
    pub fn matched_keyword(&self, message: &str) -> Option<&str> {
        self.patterns
            .find(&message.to_lowercase())
            .map(|m| self.keywords[m.pattern().as_usize()].as_str())
    }

    pub fn keyword_count(&self) -> usize {
        self.keywords.len()
    }
}

/// [`TopicGate::is_script_topic`] on the shared gate
pub fn is_script_topic(message: &str) -> bool {
    TopicGate::global().is_script_topic(message)
}
