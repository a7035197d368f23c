//! Model markdown → embeddable HTML fragment.
//!
//! This is a fixed, ordered chain of string rewrites, not a markdown parser.
//! The output is consumed by templates that were tuned against this exact
//! behavior (one `<ul>` per bullet line, the table-spacing fixups), so rules
//! must keep their order and their quirks.
//!
//! Not idempotent: feed it raw model output once.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::{Captures, Regex};

enum Rewrite {
    /// `Regex::replace_all` with a `$n` expansion template.
    Template(&'static str),
    /// Wrap capture 1, trimmed, in its own single-item list.
    ListItem,
}

struct Rule {
    pattern: Regex,
    rewrite: Rewrite,
}

impl Rule {
    fn new(pattern: &str, rewrite: Rewrite) -> Self {
        Self {
            pattern: Regex::new(pattern).expect("sanitizer patterns are static"),
            rewrite,
        }
    }

    fn apply<'t>(&self, text: &'t str) -> Cow<'t, str> {
        match self.rewrite {
            Rewrite::Template(with) => self.pattern.replace_all(text, with),
            Rewrite::ListItem => self.pattern.replace_all(text, |caps: &Captures| {
                format!("<ul><li>{}</li></ul>", caps[1].trim())
            }),
        }
    }
}

static RULES: LazyLock<Vec<Rule>> = LazyLock::new(|| {
    vec![
        // Code fences, with or without the html tag.
        Rule::new(r"```html|```", Rewrite::Template("")),
        // Heading markers at line start.
        Rule::new(r"(?m)^#{1,6}\s*", Rewrite::Template("")),
        // Bold, shortest span first.
        Rule::new(r"\*\*(.*?)\*\*", Rewrite::Template("<strong>${1}</strong>")),
        // Bullets. The bullet line's own terminator goes with it, so
        // consecutive bullets abut while the line before keeps its break.
        Rule::new(r"(?m)^[*-] (.*)\n?", Rewrite::ListItem),
        Rule::new(r"\n", Rewrite::Template("<br>")),
        // Table spacing.
        Rule::new(
            r"(?i)(Milestone Table<br>)(?:<br>)+(<table>)",
            Rewrite::Template("${1}${2}"),
        ),
        Rule::new(r"(?i)(?:<br\s*/?>\s*)+(<table>)", Rewrite::Template("${1}")),
        Rule::new(r"(?i)(?:<br\s*/?>\s*)+(</table>)", Rewrite::Template("${1}")),
        // Numbered section headings get exactly one break before them.
        Rule::new(r"(?:<br\s*/?>\s*){2,}([0-9]+\.\s)", Rewrite::Template("<br>${1}")),
    ]
});

/// Convert LLM markdown-ish text into an HTML fragment.
///
/// Total over all inputs; empty in, empty out.
pub fn sanitize(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    RULES
        .iter()
        .fold(text.to_string(), |acc, rule| rule.apply(&acc).into_owned())
}

