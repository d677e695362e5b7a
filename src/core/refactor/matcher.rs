//! Matching disciplines and span-based substitution.
//!
//! Each rule pattern is located with one of three disciplines chosen from its
//! leading character. Word boundaries follow the regex `\b` definition: a
//! transition between a word character (letter, digit, underscore) and a
//! non-word character, or the start/end of the text.

use regex::Regex;
use std::borrow::Cow;

use crate::error::{Error, Result};

/// How a pattern's occurrences are located.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    /// Word boundary on both sides: `theme` does not match inside `themeKey`.
    PlainIdentifier,
    /// Prop-style token such as `$theme`: trailing word boundary only, since
    /// the leading `$` is already a non-word character.
    DollarProp,
    /// Exact literal including its quote characters, no boundary checks.
    QuotedLiteral,
}

impl MatchKind {
    /// Derive the discipline from the pattern's leading character.
    pub fn for_pattern(pattern: &str) -> Self {
        match pattern.chars().next() {
            Some('$') => MatchKind::DollarProp,
            Some('\'') | Some('"') => MatchKind::QuotedLiteral,
            _ => MatchKind::PlainIdentifier,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MatchKind::PlainIdentifier => "identifier",
            MatchKind::DollarProp => "dollar-prop",
            MatchKind::QuotedLiteral => "quoted-literal",
        }
    }
}

/// Build the regex that implements `kind` for `pattern`.
pub(crate) fn compile(pattern: &str, kind: MatchKind) -> Result<Regex> {
    let escaped = regex::escape(pattern);
    let source = match kind {
        MatchKind::PlainIdentifier => format!(r"\b{}\b", escaped),
        MatchKind::DollarProp => format!(r"{}\b", escaped),
        MatchKind::QuotedLiteral => escaped,
    };

    Regex::new(&source).map_err(|e| Error::rule_table_invalid(pattern, e.to_string(), None))
}

/// Result of running one matcher over a buffer.
#[derive(Debug)]
pub struct Substitution<'t> {
    pub text: Cow<'t, str>,
    /// Number of match spans that were replaced.
    pub occurrences: usize,
}

/// Replace every non-overlapping match of `matcher` with `replacement`.
///
/// The replacement is inserted verbatim (`$colorScheme` is not a capture
/// reference). Borrows the input when nothing matched.
pub fn substitute<'t>(text: &'t str, matcher: &Regex, replacement: &str) -> Substitution<'t> {
    let mut out: Option<String> = None;
    let mut last = 0;
    let mut occurrences = 0;

    for m in matcher.find_iter(text) {
        let buf = out.get_or_insert_with(|| String::with_capacity(text.len()));
        buf.push_str(&text[last..m.start()]);
        buf.push_str(replacement);
        last = m.end();
        occurrences += 1;
    }

    match out {
        Some(mut buf) => {
            buf.push_str(&text[last..]);
            Substitution {
                text: Cow::Owned(buf),
                occurrences,
            }
        }
        None => Substitution {
            text: Cow::Borrowed(text),
            occurrences: 0,
        },
    }
}
