use std::sync::OnceLock;

use regex::Regex;

/// A recognised speaker prefix and the spoken remainder of the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpeakerMatch<'a> {
    /// Speaker name, trimmed. Case is preserved.
    pub name: &'a str,
    /// Text after the colon, possibly empty.
    pub remainder: &'a str,
}

/// Speaker tags in the three export conventions:
///
/// - `Name: text`
/// - `[Name]: text`
/// - `[Name -> Target]: text` / `[Name → Target]: text` (target discarded)
///
/// The name may not contain `:`, `]`, `→` or `>`. On top of the shape, a
/// name must look like a name rather than prose, see [`SpeakerTag::is_plausible_name`].
pub struct SpeakerTag;

impl SpeakerTag {
    pub const OPEN: char = '[';
    pub const CLOSE: char = ']';
    pub const SEPARATOR: char = ':';
    /// Longest accepted name, in characters.
    pub const MAX_NAME_CHARS: usize = 40;
    /// Sentence punctuation that never appears in a speaker name.
    pub const FORBIDDEN_NAME_CHARS: [char; 6] = ['*', '"', '!', '?', ',', ';'];
    /// Longest word a period may follow inside a name (`Dr.`, `Mrs.`).
    pub const MAX_ABBREVIATION_CHARS: usize = 3;

    /// Matches a trimmed, non-empty line against the speaker tag shape.
    pub fn parse(line: &str) -> Option<SpeakerMatch<'_>> {
        static SPEAKER_REGEX: OnceLock<Regex> = OnceLock::new();
        let re = SPEAKER_REGEX.get_or_init(|| {
            Regex::new(
                r"^(?P<open>\[)?(?P<name>[^:\]→>]+?)\s*(?:(?:->|→|>)[^:\]]*?)?\s*(?P<close>\])?:\s*(?P<rest>.*)$",
            )
            .expect("Invalid speaker regex")
        });

        let caps = re.captures(line)?;

        // Brackets must be balanced: `[Name: text` and `Name]: text` are prose.
        if caps.name("open").is_some() != caps.name("close").is_some() {
            return None;
        }

        let name = caps.name("name")?.as_str().trim();
        let remainder = caps.name("rest").map_or("", |m| m.as_str());

        // `https://...` has the shape of a tag but is a URL.
        if remainder.starts_with("//") {
            return None;
        }

        Self::is_plausible_name(name).then_some(SpeakerMatch { name, remainder })
    }

    /// Name heuristics that keep ordinary prose from being read as a speaker.
    pub fn is_plausible_name(name: &str) -> bool {
        !name.is_empty()
            && name.chars().count() <= Self::MAX_NAME_CHARS
            && name.chars().any(char::is_alphabetic)
            && !name.contains(Self::FORBIDDEN_NAME_CHARS)
            && !Self::has_sentence_break(name)
    }

    /// True when a word before the last ends a sentence, as in
    /// `Dialogue continued. Then`. Short abbreviations like `Dr.` are allowed.
    fn has_sentence_break(name: &str) -> bool {
        let words: Vec<&str> = name.split_whitespace().collect();
        let Some((_, leading)) = words.split_last() else {
            return false;
        };
        leading.iter().any(|word| {
            word.strip_suffix('.').is_some_and(|stem| {
                let len = stem.chars().count();
                !(1..=Self::MAX_ABBREVIATION_CHARS).contains(&len)
                    || !stem.chars().all(char::is_alphabetic)
            })
        })
    }
}
