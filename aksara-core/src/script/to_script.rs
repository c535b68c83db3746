//! Latin → Hanacaraka
//!
//! A cursor scan over the lowercased input. Each rule either declines or
//! returns a [`Step`] saying what to emit and how many characters it used, so
//! the scan loop is the only place the cursor moves.

use super::tables::{INHERENT_VOWEL, ScriptTables};

/// Long "a" only appears in script→Latin output; it reads as plain "a" here
const LONG_A: char = '\u{101}';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Emit {
    Glyph(&'static str),
    GlyphWithSign(&'static str, &'static str),
    Literal(char),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Step {
    emit: Emit,
    consumed: usize,
}

impl Step {
    fn new(emit: Emit, consumed: usize) -> Self {
        Self { emit, consumed }
    }

    fn write_to(self, out: &mut String) {
        match self.emit {
            Emit::Glyph(glyph) => out.push_str(glyph),
            Emit::GlyphWithSign(glyph, sign) => {
                out.push_str(glyph);
                out.push_str(sign);
            }
            Emit::Literal(c) => out.push(c),
        }
    }
}

/// Whole base syllable ("nga", "dha", "ka", ...) at the cursor. The longest
/// spelling wins so "nga" is never read as "ng" + "a".
fn syllable(tables: &ScriptTables, chars: &[char], pos: usize) -> Option<Step> {
    let rest = &chars[pos..];
    tables
        .syllables_longest_first()
        .iter()
        .find(|candidate| {
            rest.len() >= candidate.char_len
                && candidate
                    .syllable
                    .chars()
                    .eq(rest[..candidate.char_len].iter().copied())
        })
        .map(|candidate| Step::new(Emit::Glyph(candidate.glyph), candidate.char_len))
}

/// Syllable-final "ng" (cecak), written without a base sign
fn nasal_coda(tables: &ScriptTables, chars: &[char], pos: usize) -> Option<Step> {
    let coda = tables.nasal_coda();
    let len = coda.phoneme.chars().count();
    let rest = &chars[pos..];
    (rest.len() >= len && coda.phoneme.chars().eq(rest[..len].iter().copied()))
        .then(|| Step::new(Emit::Glyph(coda.glyph), len))
}

/// Syllable-final "h" (wignyan): at the end of the text or right after "a"
fn aspirate_coda(tables: &ScriptTables, chars: &[char], pos: usize) -> Option<Step> {
    let coda = tables.aspirate_coda();
    let is_aspirate = coda.phoneme.chars().next() == Some(chars[pos]);
    let at_end = pos + 1 == chars.len();
    let after_a = pos > 0 && chars[pos - 1] == INHERENT_VOWEL;
    (is_aspirate && (at_end || after_a)).then(|| Step::new(Emit::Glyph(coda.glyph), 1))
}

/// Single-letter consonant, resolving its vowel from the next character
fn consonant(tables: &ScriptTables, chars: &[char], pos: usize) -> Option<Step> {
    let glyph = tables.base_for_letter(chars[pos])?;

    if let Some(step) = nasal_coda(tables, chars, pos) {
        return Some(step);
    }
    if let Some(step) = aspirate_coda(tables, chars, pos) {
        return Some(step);
    }

    let step = match chars.get(pos + 1).copied() {
        Some(next) => match tables.vowel_sign(next) {
            Some(vowel) => Step::new(Emit::GlyphWithSign(glyph, vowel), 2),
            None if next == INHERENT_VOWEL => Step::new(Emit::Glyph(glyph), 2),
            // next letter opens its own syllable: close this one with pangkon
            None if tables.base_for_letter(next).is_some() => {
                Step::new(Emit::GlyphWithSign(glyph, tables.vowel_killer().glyph), 1)
            }
            None => Step::new(Emit::Glyph(glyph), 1),
        },
        None => Step::new(Emit::GlyphWithSign(glyph, tables.vowel_killer().glyph), 1),
    };
    Some(step)
}

fn step_at(tables: &ScriptTables, chars: &[char], pos: usize) -> Step {
    syllable(tables, chars, pos)
        .or_else(|| consonant(tables, chars, pos))
        .unwrap_or_else(|| Step::new(Emit::Literal(chars[pos]), 1))
}

pub(crate) fn convert(tables: &ScriptTables, text: &str) -> String {
    let chars: Vec<char> = text
        .to_lowercase()
        .chars()
        .map(|c| if c == LONG_A { INHERENT_VOWEL } else { c })
        .collect();

    let mut script = String::with_capacity(text.len() * 3);
    let mut pos = 0;
    while pos < chars.len() {
        let step = step_at(tables, &chars, pos);
        step.write_to(&mut script);
        pos += step.consumed;
    }
    script
}

#[cfg(test)]
mod tests {
    use super::*;

    fn to_script(text: &str) -> String {
        convert(&ScriptTables::build().unwrap(), text)
    }

    fn chars(text: &str) -> Vec<char> {
        text.chars().collect()
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(to_script(""), "");
    }

    #[test]
    fn test_open_syllables() {
        assert_eq!(to_script("turu"), "ꦠꦸꦫꦸ");
        assert_eq!(to_script("Mulu"), "ꦩꦸꦭꦸ");
        assert_eq!(to_script("sara"), "ꦱꦫ");
    }

    #[test]
    fn test_reference_words() {
        assert_eq!(to_script("aksara"), "aꦏ꧀ꦱꦫ");
        assert_eq!(to_script("abidin"), "aꦧꦶꦢꦶꦤ꧀");
    }

    #[test]
    fn test_longest_syllable_wins() {
        assert_eq!(to_script("nga"), "ꦔ");
        assert_eq!(to_script("nya"), "ꦚ");
        assert_eq!(to_script("dha"), "ꦝ");
        assert_eq!(to_script("tha"), "ꦛ");
    }

    #[test]
    fn test_taling_tarung_and_pepet() {
        assert_eq!(to_script("ko"), "ꦏꦺꦴ");
        assert_eq!(to_script("kê"), "ꦏꦼ");
        assert_eq!(to_script("ke"), "ꦏꦺ");
    }

    #[test]
    fn test_final_consonant_gets_pangkon() {
        assert_eq!(to_script("pitik"), "ꦥꦶꦠꦶꦏ꧀");
        assert_eq!(to_script("k"), "ꦏ꧀");
    }

    #[test]
    fn test_cluster_before_consonant_gets_pangkon() {
        assert_eq!(to_script("kra"), "ꦏ꧀ꦫ");
    }

    #[test]
    fn test_nasal_coda() {
        assert_eq!(to_script("bang"), "ꦧꦁ");
        assert_eq!(to_script("sing"), "ꦱꦶꦁ");
    }

    #[test]
    fn test_aspirate_coda() {
        assert_eq!(to_script("sah"), "ꦱꦃ");
        assert_eq!(to_script("ahmad"), "aꦃꦩꦢ꧀");
        // onset h keeps its base sign
        assert_eq!(to_script("hu"), "ꦲꦸ");
    }

    #[test]
    fn test_long_a_normalised() {
        assert_eq!(to_script("kā"), "ꦏ");
        assert_eq!(to_script("KĀ"), "ꦏ");
    }

    #[test]
    fn test_consonant_before_unknown_letter_stays_bare() {
        assert_eq!(to_script("kx"), "ꦏx");
    }

    #[test]
    fn test_unrecognised_characters_pass_through() {
        assert_eq!(to_script("12345"), "12345");
        assert_eq!(to_script("turu, mulu!"), "ꦠꦸꦫꦸ, ꦩꦸꦭꦸ!");
    }

    #[test]
    fn test_rules_report_consumed_length() {
        let tables = ScriptTables::build().unwrap();

        let text = chars("nga");
        assert_eq!(syllable(&tables, &text, 0).map(|s| s.consumed), Some(3));

        let text = chars("ngi");
        assert_eq!(syllable(&tables, &text, 0), None);
        assert_eq!(consonant(&tables, &text, 0).map(|s| s.consumed), Some(2));

        let text = chars("ki");
        assert_eq!(consonant(&tables, &text, 0).map(|s| s.consumed), Some(2));

        let text = chars("kt");
        assert_eq!(consonant(&tables, &text, 0).map(|s| s.consumed), Some(1));

        let text = chars("q");
        assert_eq!(consonant(&tables, &text, 0), None);
        assert_eq!(step_at(&tables, &text, 0), Step::new(Emit::Literal('q'), 1));
    }
}
