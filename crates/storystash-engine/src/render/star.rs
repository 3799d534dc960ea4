use std::sync::OnceLock;

use regex::Regex;

/// Star-markup action spans: `*waves*`.
///
/// All knowledge of the action delimiter lives here; the renderer only asks
/// whether a line is an action and for the highlighted text.
pub struct ActionSpan;

impl ActionSpan {
    /// The action delimiter character.
    pub const DELIM: char = '*';

    /// True when the trimmed raw line both starts and ends with `*`.
    pub fn is_action_line(raw: &str) -> bool {
        let t = raw.trim();
        t.starts_with(Self::DELIM) && t.ends_with(Self::DELIM)
    }

    /// Wraps every `*...*` span of already-escaped text in a span with `class`.
    ///
    /// Spans are matched left to right, do not nest, and must contain at
    /// least one character. The asterisks stay inside the wrapper.
    pub fn highlight(escaped: &str, class: &str) -> String {
        static ACTION_REGEX: OnceLock<Regex> = OnceLock::new();
        let re = ACTION_REGEX
            .get_or_init(|| Regex::new(r"\*([^*]+)\*").expect("Invalid action regex"));

        re.replace_all(escaped, |caps: &regex::Captures<'_>| {
            format!("<span class=\"{class}\">*{}*</span>", &caps[1])
        })
        .into_owned()
    }
}
