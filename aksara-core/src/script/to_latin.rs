//! Hanacaraka → Latin

use super::tables::{ScriptTables, TableGlyph};

/// One unit of script text: a registered glyph or anything else, verbatim
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Glyph<'a> {
    Sign(TableGlyph),
    Other(&'a str),
}

/// Split `text` into glyphs, longest registered cluster first
fn glyphs<'a>(tables: &ScriptTables, text: &'a str) -> Vec<Glyph<'a>> {
    let mut out = Vec::with_capacity(text.len() / 3 + 1);
    let mut rest = text;
    while let Some(first) = rest.chars().next() {
        let (glyph, len) = match tables.glyph_at(rest) {
            Some((sign, len)) => (Glyph::Sign(sign), len),
            None => {
                let len = first.len_utf8();
                (Glyph::Other(&rest[..len]), len)
            }
        };
        out.push(glyph);
        rest = &rest[len..];
    }
    out
}

/// Emit the Latin for the glyph at the head of `window`; returns how many
/// glyphs were consumed.
fn emit(window: &[Glyph<'_>], out: &mut String) -> usize {
    match window {
        [Glyph::Sign(TableGlyph::Base(base)), Glyph::Sign(TableGlyph::Combining(sign)), ..] => {
            // Vowel override, coda, or pangkon on the preceding consonant
            let consonant = base.syllable.strip_suffix('a').unwrap_or(base.syllable);
            out.push_str(consonant);
            out.push_str(sign.phoneme);
            2
        }
        [Glyph::Sign(TableGlyph::Base(base)), ..] => {
            out.push_str(base.syllable);
            1
        }
        [Glyph::Sign(TableGlyph::Combining(sign)), ..] => {
            out.push_str(sign.phoneme);
            1
        }
        [Glyph::Other(text), ..] => {
            out.push_str(text);
            1
        }
        [] => 0,
    }
}

/// Leading "ha" reads as a capital "A" (names written with the glottal ha),
/// then the first letter is capitalised.
fn finish(mut latin: String) -> String {
    if latin.starts_with("ha") {
        latin.replace_range(..2, "A");
    }
    let mut chars = latin.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => latin,
    }
}

pub(crate) fn convert(tables: &ScriptTables, text: &str) -> String {
    let glyphs = glyphs(tables, text);
    let mut latin = String::with_capacity(text.len());
    let mut pos = 0;
    while pos < glyphs.len() {
        pos += emit(&glyphs[pos..], &mut latin);
    }
    finish(latin)
}
