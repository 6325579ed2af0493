//! Template rendering engines.
//!
//! # Invariants
//!
//! 1. **Left-to-right substitution**: the i-th `{}` marker receives the
//!    i-th value, for the first `min(markers, values)` markers.
//!
//! 2. **Single pass**: text produced by a value is never re-scanned, so a
//!    value containing `{}` is emitted verbatim.
//!
//! 3. **Engine equivalence**: [`NativeEngine`] and `RegexEngine` produce
//!    byte-identical output for every template and value list.
//!
//! # Failure Modes
//!
//! | Failure | Cause | Behavior |
//! |---------|-------|----------|
//! | Too few values | more `{}` than values | Trailing markers left as-is |
//! | Too many values | more values than `{}` | Extra values ignored |
//! | No markers, no values | plain string | Template returned unchanged |
//! | Lone brace | `{` without `}` (or reversed) | Emitted as literal text |

use std::fmt::{self, Display, Write as _};

/// The fixed two-character placeholder marker.
pub const PLACEHOLDER: &str = "{}";

/// Render a template by positional `{}` substitution.
pub trait RenderEngine: fmt::Debug + Send + Sync {
    /// Replace the first `min(markers, values.len())` markers, in order.
    fn render(&self, template: &str, values: &[&dyn Display]) -> String;

    /// Short engine name used in logs and reports.
    fn name(&self) -> &'static str;
}

/// Count `{}` markers in `template` (non-overlapping, left to right).
#[must_use]
pub fn placeholder_count(template: &str) -> usize {
    template.matches(PLACEHOLDER).count()
}

/// Engine that scans for markers and streams values through `std::fmt`.
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeEngine;

impl RenderEngine for NativeEngine {
    fn render(&self, template: &str, values: &[&dyn Display]) -> String {
        if values.is_empty() {
            return template.to_owned();
        }

        let mut result = String::with_capacity(template.len() + values.len() * 8);
        let mut rest = template;
        let mut values = values.iter();

        while let Some(at) = rest.find(PLACEHOLDER) {
            let Some(value) = values.next() else {
                break;
            };
            result.push_str(&rest[..at]);
            // Writing into a String cannot fail.
            let _ = write!(result, "{value}");
            rest = &rest[at + PLACEHOLDER.len()..];
        }

        result.push_str(rest);
        result
    }

    fn name(&self) -> &'static str {
        "native"
    }
}

/// Engine that locates markers with a compiled regular expression.
#[cfg(feature = "regex")]
#[derive(Debug, Clone)]
pub struct RegexEngine {
    marker: regex::Regex,
}

#[cfg(feature = "regex")]
impl RegexEngine {
    /// Build the engine with the `{}` marker pattern.
    #[must_use]
    pub fn new() -> Self {
        let marker = regex::Regex::new(&regex::escape(PLACEHOLDER))
            .expect("escaped literal is a valid pattern");
        Self { marker }
    }
}

#[cfg(feature = "regex")]
impl Default for RegexEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "regex")]
impl RenderEngine for RegexEngine {
    fn render(&self, template: &str, values: &[&dyn Display]) -> String {
        if values.is_empty() {
            return template.to_owned();
        }

        // `replacen` walks matches once, so replacement text is never
        // matched again, and a closure replacer skips `$name` expansion.
        let limit = values.len();
        let mut values = values.iter();
        self.marker
            .replacen(template, limit, |_: &regex::Captures<'_>| {
                values
                    .next()
                    .map_or_else(|| PLACEHOLDER.to_owned(), ToString::to_string)
            })
            .into_owned()
    }

    fn name(&self) -> &'static str {
        "regex"
    }
}

/// Which engine the console renders with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum EngineKind {
    /// [`NativeEngine`].
    #[default]
    Native,
    /// `RegexEngine`; falls back to native when the `regex` feature is off.
    Regex,
}

impl EngineKind {
    /// Parse a config value (`native` or `regex`, case-insensitive).
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "native" | "fmt" => Some(Self::Native),
            "regex" => Some(Self::Regex),
            _ => None,
        }
    }

    /// Construct the selected engine.
    #[must_use]
    pub fn build(self) -> Box<dyn RenderEngine> {
        tracing::debug!(engine = %self, "building render engine");
        match self {
            Self::Native => Box::new(NativeEngine),
            #[cfg(feature = "regex")]
            Self::Regex => Box::new(RegexEngine::new()),
            #[cfg(not(feature = "regex"))]
            Self::Regex => {
                tracing::warn!("regex engine not compiled in, using native");
                Box::new(NativeEngine)
            }
        }
    }
}

impl fmt::Display for EngineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Native => f.write_str("native"),
            Self::Regex => f.write_str("regex"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capture::CaptureBuffer;

    fn engines() -> Vec<Box<dyn RenderEngine>> {
        vec![EngineKind::Native.build(), EngineKind::Regex.build()]
    }

    #[test]
    fn single_value() {
        for engine in engines() {
            assert_eq!(
                engine.render("Length: {} Unicode units", &[&42]),
                "Length: 42 Unicode units",
                "engine {}",
                engine.name()
            );
        }
    }

    #[test]
    fn lone_marker_without_values_is_unchanged() {
        for engine in engines() {
            assert_eq!(engine.render("{}", &[]), "{}");
        }
    }

    #[test]
    fn plain_template_without_values_is_unchanged() {
        for engine in engines() {
            assert_eq!(engine.render("=== Header ===", &[]), "=== Header ===");
            assert_eq!(engine.render("", &[]), "");
        }
    }

    #[test]
    fn excess_markers_stay_literal() {
        for engine in engines() {
            assert_eq!(engine.render("{} ({}) {}", &[&"en-US"]), "en-US ({}) {}");
        }
    }

    #[test]
    fn excess_values_are_ignored() {
        for engine in engines() {
            assert_eq!(engine.render("Era {}", &[&"reiwa", &7, &10]), "Era reiwa");
            assert_eq!(engine.render("no markers", &[&1]), "no markers");
        }
    }

    #[test]
    fn multiple_values_in_order() {
        for engine in engines() {
            assert_eq!(
                engine.render("Era {}, Year {}, Month {}, Day {}", &[&"reiwa", &8, &10, &19]),
                "Era reiwa, Year 8, Month 10, Day 19"
            );
        }
    }

    #[test]
    fn inserted_markers_are_not_rescanned() {
        for engine in engines() {
            assert_eq!(engine.render("{} and {}", &[&"{}", &"x"]), "{} and x");
        }
    }

    #[test]
    fn regex_replacement_syntax_is_literal() {
        for engine in engines() {
            assert_eq!(engine.render("cost: {}", &[&"$1 or ${0}"]), "cost: $1 or ${0}");
        }
    }

    #[test]
    fn brace_edge_cases() {
        for engine in engines() {
            assert_eq!(engine.render("{{}}", &[&"x"]), "{x}");
            assert_eq!(engine.render("{ } {", &[&"x"]), "{ } {");
            assert_eq!(engine.render("}{}{", &[&"x"]), "}x{");
        }
    }

    #[test]
    fn unicode_values_and_template() {
        for engine in engines() {
            assert_eq!(
                engine.render("Uppercase: {} — {}", &[&"HELLO こんにちは", &'ß']),
                "Uppercase: HELLO こんにちは — ß"
            );
        }
    }

    #[test]
    fn placeholder_counting() {
        assert_eq!(placeholder_count(""), 0);
        assert_eq!(placeholder_count("{}"), 1);
        assert_eq!(placeholder_count("{}{}"), 2);
        assert_eq!(placeholder_count("{{}}"), 1);
        assert_eq!(placeholder_count("{x}"), 0);
    }

    #[test]
    fn engine_kind_parse() {
        assert_eq!(EngineKind::parse("native"), Some(EngineKind::Native));
        assert_eq!(EngineKind::parse(" REGEX "), Some(EngineKind::Regex));
        assert_eq!(EngineKind::parse("fmt"), Some(EngineKind::Native));
        assert_eq!(EngineKind::parse("printf"), None);
        assert_eq!(EngineKind::Regex.to_string(), "regex");
    }

    #[test]
    fn build_logs_the_selected_engine() {
        let capture = CaptureBuffer::new();
        let writer = capture.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .finish();

        let engine = tracing::subscriber::with_default(subscriber, || EngineKind::Native.build());
        assert_eq!(engine.name(), "native");
        let logged = capture.contents();
        assert!(logged.contains("building render engine"), "{logged}");
        assert!(logged.contains("engine=native"), "{logged}");
    }
}
