//! Property-based invariant tests for template rendering.
//!
//! 1. Native and regex engines agree on every template and value list
//! 2. Exactly min(markers, values) substitutions happen
//! 3. Templates without values render unchanged
//! 4. Values past the marker count are ignored
//! 5. Inserted text is never re-expanded
//! 6. Console output is the rendered line plus exactly one newline

use proptest::prelude::*;
use std::fmt::Display;
use uniprobe_format::{
    CaptureBuffer, Console, EngineKind, NativeEngine, PLACEHOLDER, RegexEngine, RenderEngine,
    placeholder_count,
};

// ── Helpers ──────────────────────────────────────────────────────────

fn as_display(values: &[String]) -> Vec<&dyn Display> {
    values.iter().map(|v| v as &dyn Display).collect()
}

/// Templates built from literal chunks, braces, and markers.
fn template_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            "[a-zA-Z0-9 ,.!]{0,6}",
            Just("{}".to_string()),
            Just("{".to_string()),
            Just("}".to_string()),
            Just("こんにちは".to_string()),
        ],
        0..12,
    )
    .prop_map(|parts| parts.concat())
}

/// Values that avoid braces so markers in output can be counted.
fn plain_values() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-z0-9é ]{0,5}", 0..8)
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Engines agree
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn engines_are_equivalent(
        template in template_strategy(),
        values in prop::collection::vec(".{0,6}", 0..8),
    ) {
        let args = as_display(&values);
        let native = NativeEngine.render(&template, &args);
        let regex = RegexEngine::new().render(&template, &args);
        prop_assert_eq!(native, regex, "template {:?} values {:?}", template, values);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2. min(k, n) substitutions
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn substitution_count_is_min(
        markers in 0usize..6,
        values in plain_values(),
    ) {
        let template = vec!["[{}]"; markers].join("-");
        let args = as_display(&values);
        let out = NativeEngine.render(&template, &args);

        let substituted = markers.min(values.len());
        prop_assert_eq!(placeholder_count(&out), markers - substituted);

        let expected: Vec<String> = (0..markers)
            .map(|i| match values.get(i) {
                Some(v) => format!("[{v}]"),
                None => format!("[{PLACEHOLDER}]"),
            })
            .collect();
        prop_assert_eq!(out, expected.join("-"));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. No values is identity
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn no_values_is_identity(template in template_strategy()) {
        prop_assert_eq!(NativeEngine.render(&template, &[]), template.clone());
        prop_assert_eq!(RegexEngine::new().render(&template, &[]), template);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Extra values ignored
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn extra_values_ignored(
        template in template_strategy(),
        values in plain_values(),
        extra in plain_values(),
    ) {
        let k = placeholder_count(&template);
        let mut exact: Vec<String> = values.iter().take(k).cloned().collect();
        let base = NativeEngine.render(&template, &as_display(&exact));
        if exact.len() == k {
            exact.extend(extra);
            prop_assert_eq!(NativeEngine.render(&template, &as_display(&exact)), base);
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. No recursive substitution
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn inserted_text_not_reexpanded(suffix in "[a-z]{0,5}") {
        let first = format!("{{}}{suffix}");
        let values = vec![first.clone(), "second".to_string()];
        let out = NativeEngine.render("{} {}", &as_display(&values));
        prop_assert_eq!(out, format!("{first} second"));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 6. Console writes rendered line + newline
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn console_appends_single_newline(
        template in "[^\n]{0,20}",
        values in plain_values(),
        regex in any::<bool>(),
    ) {
        let kind = if regex { EngineKind::Regex } else { EngineKind::Native };
        let capture = CaptureBuffer::new();
        let mut console = Console::with_writer(Box::new(capture.clone()), kind.build());
        let args = as_display(&values);
        console.println(&template, &args).unwrap();

        let expected = format!("{}\n", kind.build().render(&template, &args));
        prop_assert_eq!(capture.contents(), expected);
    }
}
