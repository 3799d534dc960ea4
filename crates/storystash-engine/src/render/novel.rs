use std::sync::OnceLock;

use regex::Regex;

/// Novel-style quoted speech: `"run now"`.
pub struct QuoteSpan;

impl QuoteSpan {
    pub const DELIM: char = '"';

    /// Wraps every `"..."` span of escaped text in a span with `class`.
    ///
    /// Expects text escaped with element-content escaping, which leaves `"` intact.
    pub fn highlight(escaped: &str, class: &str) -> String {
        static QUOTE_REGEX: OnceLock<Regex> = OnceLock::new();
        let re =
            QUOTE_REGEX.get_or_init(|| Regex::new(r#""([^"]+)""#).expect("Invalid quote regex"));

        re.replace_all(escaped, |caps: &regex::Captures<'_>| {
            format!("<span class=\"{class}\">\"{}\"</span>", &caps[1])
        })
        .into_owned()
    }
}
