//! Extraction rule table.
//!
//! Each single-line rule names a field, the label variants that introduce it
//! and the shape its value must have. Each section rule names a heading glyph
//! and the titles that may follow it. The tables are compiled once into
//! [`regex::Regex`] values; the `regex` crate matches in linear time, so no
//! input can trigger catastrophic backtracking.

use super::Field;
use regex::Regex;
use std::sync::LazyLock;

// ---------------------------------------------------------------------------
// Rule declarations
// ---------------------------------------------------------------------------

/// Constraint on the text captured after a label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ValueShape {
    /// ASCII digits only.
    Digits,
    /// `http://` or `https://` followed by non-whitespace.
    HttpUrl,
    /// Rest of the line.
    Text,
    /// Rest of the line with one layer of outer quotes removed.
    Quoted,
}

pub(crate) struct LineRule {
    pub field: Field,
    pub labels: &'static [&'static str],
    pub shape: ValueShape,
}

pub(crate) struct SectionRule {
    pub field: Field,
    pub glyph: char,
    pub titles: &'static [&'static str],
}

pub(crate) const LINE_RULES: &[LineRule] = &[
    LineRule {
        field: Field::ExecutionId,
        labels: &["ID da Execução", "Execution ID"],
        shape: ValueShape::Digits,
    },
    LineRule {
        field: Field::DirectLink,
        labels: &["Link direto", "Direct link", "Link"],
        shape: ValueShape::HttpUrl,
    },
    LineRule {
        field: Field::FailingNode,
        labels: &[
            "Erro na Execução do Node",
            "Último nó executado",
            "Failing node",
            "Failed node",
            "Last executed node",
        ],
        shape: ValueShape::Quoted,
    },
    LineRule {
        field: Field::ErrorType,
        labels: &["Tipo de erro", "Error type"],
        shape: ValueShape::Text,
    },
    LineRule {
        field: Field::ErrorMessage,
        labels: &[
            "Mensagem de erro",
            "Mensagem técnica",
            "Error message",
            "Mensagem",
            "Message",
        ],
        shape: ValueShape::Text,
    },
    LineRule {
        field: Field::WorkflowName,
        labels: &["Nome do Workflow", "Workflow name"],
        shape: ValueShape::Text,
    },
    LineRule {
        field: Field::PossibleCause,
        labels: &[
            "Possível causa",
            "Causa provável",
            "Possible cause",
            "Root cause",
            "Diagnóstico",
        ],
        shape: ValueShape::Text,
    },
    LineRule {
        field: Field::Suggestion,
        labels: &["Sugestão", "Suggestion"],
        shape: ValueShape::Text,
    },
];

pub(crate) const SECTION_RULES: &[SectionRule] = &[
    SectionRule {
        field: Field::ErrorSummary,
        glyph: '❌',
        titles: &["Resumo do Erro", "Error Summary"],
    },
    SectionRule {
        field: Field::Recommendation,
        glyph: '✅',
        titles: &["Ação recomendada", "Recommended action", "Recommendation"],
    },
    SectionRule {
        field: Field::DevTip,
        glyph: '🕵',
        titles: &[
            "Dica para o desenvolvedor",
            "Dica para Devs",
            "Dica Dev",
            "Dica",
            "Dev Tip",
            "Developer tip",
        ],
    },
];

/// Glyphs that open a heading. A line starting with any of them ends the
/// section above it. Matched on the base code point, so presentation
/// selectors and joiner sequences after them are irrelevant.
pub(crate) const HEADING_GLYPHS: &[char] = &[
    '🛑', '🧾', '📜', '🧩', '📍', '🗓', '📅', '⚠', '❌', '✅', '🕵',
];

/// Quote characters stripped from the edges of [`ValueShape::Quoted`] values.
pub(crate) const QUOTES: &[char] = &['"', '\'', '“', '”', '‘', '’', '«', '»'];

// ---------------------------------------------------------------------------
// Compiled tables
// ---------------------------------------------------------------------------

pub(crate) struct CompiledLineRule {
    pub field: Field,
    pub shape: ValueShape,
    pub regex: Regex,
}

pub(crate) struct CompiledSectionRule {
    pub field: Field,
    pub regex: Regex,
}

pub(crate) static COMPILED_LINE_RULES: LazyLock<Vec<CompiledLineRule>> = LazyLock::new(|| {
    LINE_RULES
        .iter()
        .map(|rule| CompiledLineRule {
            field: rule.field,
            shape: rule.shape,
            regex: Regex::new(&line_pattern(rule)).expect("built-in line rule must parse"),
        })
        .collect()
});

pub(crate) static COMPILED_SECTION_RULES: LazyLock<Vec<CompiledSectionRule>> =
    LazyLock::new(|| {
        SECTION_RULES
            .iter()
            .map(|rule| CompiledSectionRule {
                field: rule.field,
                regex: Regex::new(&section_pattern(rule))
                    .expect("built-in section rule must parse"),
            })
            .collect()
    });

/// Matches the start of any heading line.
pub(crate) static HEADING_LINE: LazyLock<Regex> = LazyLock::new(|| {
    let glyphs: String = HEADING_GLYPHS.iter().collect();
    Regex::new(&format!(r"(?m)^[^\S\n]*[{glyphs}]")).expect("heading glyph class must parse")
});

fn alternation(phrases: &[&str]) -> String {
    phrases
        .iter()
        .map(|p| regex::escape(p))
        .collect::<Vec<_>>()
        .join("|")
}

/// Whole-word `label`, then a separator, then a captured value.
///
/// The separator never includes a newline, and the value never starts with
/// whitespace, so a label with nothing after it on its line does not match at
/// all. Free text keeps its leading punctuation: only blanks, markdown
/// emphasis and one colon sit between label and value.
fn line_pattern(rule: &LineRule) -> String {
    let quotes: String = QUOTES.iter().collect();
    let (separator, value) = match rule.shape {
        ValueShape::Digits => (r"[^\w\n]*".to_string(), r"([0-9]+)".to_string()),
        ValueShape::HttpUrl => (
            r"[^\w\n]*".to_string(),
            format!(r"(https?://[^\s<>{quotes}]+)"),
        ),
        ValueShape::Quoted => (
            format!(r"[^\w\n{quotes}]*"),
            format!(r"([\w{quotes}][^\n]*)"),
        ),
        ValueShape::Text => (
            r"[^\S\n]*[*_]*[^\S\n]*[:：]?[*_]*[^\S\n]*".to_string(),
            r"(\S[^\n]*)".to_string(),
        ),
    };
    format!(r"(?i)\b(?:{})\b{separator}{value}", alternation(rule.labels))
}

/// Glyph, optional presentation selector and gendered joiner sequence
/// (`🕵️‍♂️`), optional markdown emphasis, title, optional emphasis and colon.
/// The body starts right after the match.
fn section_pattern(rule: &SectionRule) -> String {
    format!(
        r"(?i){glyph}\x{{FE0F}}?(?:\x{{200D}}[♂♀]\x{{FE0F}}?)?[^\S\n]*[*_]*[^\S\n]*(?:{titles})\b[*_]*[^\S\n]*[:：]?[*_]*",
        glyph = regex::escape(&rule.glyph.to_string()),
        titles = alternation(rule.titles),
    )
}
