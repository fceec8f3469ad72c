//! Property-based tests for the indentation emitter.
//!
//! Random fragments are generated from balanced brace structure, arbitrary
//! authored whitespace, and sprinkled marker characters, and the output is
//! checked for:
//! 1. Indentation: each line's leading spaces equal 4 x the brace depth at its
//!    first rendered character
//! 2. Marker consumption: marker characters never reach the output
//! 3. Chunking: feeding a fragment in pieces matches feeding it whole

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use mathgen_emit::{
    Emitter, IndentEmitter, StringEmitter, DEDENT_MARKER, HALF_INDENT_MARKER, INDENT_WIDTH,
};
use proptest::prelude::*;

#[derive(Clone, Debug)]
enum Line {
    Open(String),
    Close(String),
    Text(String),
}

fn text_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z0-9;()=+<>,. ]{0,12}").expect("valid regex")
}

fn whitespace_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[ \t]{0,6}").expect("valid regex")
}

fn line_strategy() -> impl Strategy<Value = Line> {
    prop_oneof![
        text_strategy().prop_map(Line::Open),
        text_strategy().prop_map(Line::Close),
        text_strategy().prop_map(Line::Text),
    ]
}

/// Build a balanced fragment: closes never outnumber opens, leftovers are
/// closed at the end.
fn balanced_fragment() -> impl Strategy<Value = String> {
    (
        prop::collection::vec((whitespace_strategy(), line_strategy()), 0..40),
        whitespace_strategy(),
    )
        .prop_map(|(lines, trailing_ws)| {
            let mut out = String::new();
            let mut depth = 0usize;
            for (ws, line) in lines {
                out.push_str(&ws);
                match line {
                    Line::Open(head) => {
                        out.push_str(head.trim());
                        out.push('\n');
                        out.push_str(&ws);
                        out.push('{');
                        depth += 1;
                    }
                    Line::Close(tail) if depth > 0 => {
                        out.push('}');
                        out.push_str(&tail);
                        depth -= 1;
                    }
                    Line::Close(text) | Line::Text(text) => out.push_str(text.trim()),
                }
                out.push('\n');
            }
            for _ in 0..depth {
                out.push_str(&trailing_ws);
                out.push_str("}\n");
            }
            out
        })
}

fn render(fragments: &[&str]) -> (String, usize) {
    let mut out = IndentEmitter::new(StringEmitter::new());
    for fragment in fragments {
        out.feed(fragment);
    }
    let (state, sink) = out.finish();
    (sink.output(), state.depth)
}

/// Leading spaces of every non-empty line, paired with the depth the line's
/// first character sits at.
fn check_indentation(text: &str) -> Result<(), String> {
    let mut depth = 0usize;
    for (number, line) in text.lines().enumerate() {
        let content = line.trim_start_matches(' ');
        if content.is_empty() {
            if !line.is_empty() {
                return Err(format!("line {number} is whitespace only: {line:?}"));
            }
            continue;
        }
        let leading = line.len() - content.len();
        let first_depth = if content.starts_with('}') {
            depth.saturating_sub(1)
        } else {
            depth
        };
        if leading != first_depth * INDENT_WIDTH {
            return Err(format!(
                "line {number} has {leading} spaces at depth {first_depth}: {line:?}"
            ));
        }
        for c in content.chars() {
            match c {
                '{' => depth += 1,
                '}' => depth = depth.saturating_sub(1),
                _ => {}
            }
        }
    }
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn indentation_matches_depth(fragment in balanced_fragment()) {
        let (text, depth) = render(&[&fragment]);
        prop_assert_eq!(depth, 0);
        if let Err(msg) = check_indentation(&text) {
            prop_assert!(false, "{}\n--- output ---\n{}", msg, text);
        }
    }

    #[test]
    fn markers_never_reach_output(
        fragment in balanced_fragment(),
        positions in prop::collection::vec((any::<prop::sample::Index>(), any::<bool>()), 0..8),
    ) {
        let mut chars: Vec<char> = fragment.chars().collect();
        for (index, dedent) in positions {
            let at = index.index(chars.len() + 1);
            chars.insert(at, if dedent { DEDENT_MARKER } else { HALF_INDENT_MARKER });
        }
        let marked: String = chars.into_iter().collect();
        let (text, _) = render(&[&marked]);
        prop_assert!(!text.contains(DEDENT_MARKER));
        prop_assert!(!text.contains(HALF_INDENT_MARKER));

        let visible = |s: &str| -> String {
            s.chars()
                .filter(|c| !c.is_whitespace() && *c != DEDENT_MARKER && *c != HALF_INDENT_MARKER)
                .collect()
        };
        prop_assert_eq!(visible(&text), visible(&marked));
    }

    #[test]
    fn chunked_feeding_matches_whole(fragment in balanced_fragment(), split in any::<prop::sample::Index>()) {
        let boundaries: Vec<usize> = fragment
            .char_indices()
            .map(|(i, _)| i)
            .chain(std::iter::once(fragment.len()))
            .collect();
        let at = boundaries[split.index(boundaries.len())];
        let (head, tail) = fragment.split_at(at);
        prop_assert_eq!(render(&[&fragment]), render(&[head, tail]));
    }
}

#[test]
fn half_indent_space_only_when_pending() {
    let mut out = IndentEmitter::new(StringEmitter::new());
    out.feed("{\n$a$b\n}\n");
    let (_, sink) = out.finish();
    assert_eq!(sink.output(), "{\n ab\n}\n");
}

#[test]
fn sink_trait_object_is_usable() {
    let mut sink = StringEmitter::new();
    let dyn_sink: &mut dyn Emitter = &mut sink;
    dyn_sink.emit("x");
    assert_eq!(sink.as_str(), "x");
}
