//! Behavioural tests for transcript parsing.


use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::parsing::{
    Block, LineClass, TranscriptLineClassifier, parse_file, parse_transcript,
};
use crate::render::{FormatMode, RenderConfig};
use crate::stats::speaker_counts;

const ACTION: &str = "text-indigo-300 italic font-medium";

fn parse(text: &str, mode: FormatMode) -> crate::parsing::ParsedTranscript {
    let parsed = parse_transcript(text, mode, &RenderConfig::default());
    invariants::check(&parsed, mode);
    parsed
}

const MIXED: &str = "\u{feff}Opening narration.\n\
((session start))\n\
Alice: Hello there\n\
*waves*\n\
\n\
[Bob]: Hi Alice!\n\
He grins.\n\
[Narrator -> Alice]: You feel cold.\n\
((brb))\n\
Stray line.\n\
Alice:\n\
Bob: \"Run\" he said.\n";

// Scenario tests

#[test]
fn plain_speakers_in_star_mode() {
    let parsed = parse("Alice: Hello there\n*waves*\nBob: Hi Alice!", FormatMode::StarRp);

    assert_eq!(
        parsed.blocks,
        vec![
            Block::Dialogue {
                speaker: "Alice".to_string(),
                lines: vec![
                    crate::parsing::Line {
                        content: "Hello there".to_string(),
                        is_action_line: false,
                    },
                    crate::parsing::Line {
                        content: format!("<span class=\"{ACTION}\">*waves*</span>"),
                        is_action_line: true,
                    },
                ],
            },
            Block::Dialogue {
                speaker: "Bob".to_string(),
                lines: vec![crate::parsing::Line {
                    content: "Hi Alice!".to_string(),
                    is_action_line: false,
                }],
            },
        ]
    );
    let stats: Vec<_> = parsed.stats.iter().collect();
    assert_eq!(stats, vec![("Alice", 1), ("Bob", 1)]);
}

#[test]
fn routed_bracket_speaker_discards_target() {
    let parsed = parse("[Narrator -> Alice]: You feel cold.", FormatMode::StarRp);

    assert_eq!(parsed.blocks.len(), 1);
    assert_eq!(parsed.blocks[0].speaker(), Some("Narrator"));
    let Block::Dialogue { lines, .. } = &parsed.blocks[0] else {
        panic!("expected dialogue");
    };
    assert_eq!(lines[0].content, "You feel cold.");
    assert_eq!(parsed.stats.get("Alice"), None);
}

#[test]
fn narrative_without_open_block() {
    let parsed = parse("The wind howls.", FormatMode::StarRp);

    assert_eq!(
        parsed.blocks,
        vec![Block::Narrative {
            text: "The wind howls.".to_string()
        }]
    );
    assert!(parsed.stats.is_empty());
}

#[test]
fn narrative_lines_are_never_merged() {
    let parsed = parse("One.\nTwo.\n\nThree.", FormatMode::StarRp);
    assert_eq!(parsed.blocks.len(), 3);
    assert!(
        parsed
            .blocks
            .iter()
            .all(|b| matches!(b, Block::Narrative { .. }))
    );
}

#[test]
fn novel_mode_highlights_quotes() {
    let parsed = parse(
        "Carol: She said \"run now\" and left.",
        FormatMode::Novel,
    );

    let Block::Dialogue { speaker, lines } = &parsed.blocks[0] else {
        panic!("expected dialogue");
    };
    assert_eq!(speaker, "Carol");
    assert_eq!(
        lines[0].content,
        "She said <span class=\"text-amber-200 font-medium\">\"run now\"</span> and left."
    );
    assert!(!lines[0].is_action_line);
}

#[test]
fn markdown_mode_renders_continuations_too() {
    let parsed = parse("Dana: **Stop**\n_whispers_", FormatMode::Markdown);

    let Block::Dialogue { lines, .. } = &parsed.blocks[0] else {
        panic!("expected dialogue");
    };
    assert_eq!(lines[0].content, "<p><strong>Stop</strong></p>");
    assert_eq!(lines[1].content, "<p><em>whispers</em></p>");
}

#[test]
fn speaker_text_is_escaped_in_star_mode() {
    let parsed = parse("Eve: <script>x</script> & *hides*", FormatMode::StarRp);
    let Block::Dialogue { lines, .. } = &parsed.blocks[0] else {
        panic!("expected dialogue");
    };
    assert_eq!(
        lines[0].content,
        format!("&lt;script&gt;x&lt;/script&gt; &amp; <span class=\"{ACTION}\">*hides*</span>")
    );
    assert!(!lines[0].is_action_line);
}

#[test]
fn custom_render_config_is_used() {
    let config = RenderConfig {
        action_class: "act".to_string(),
        quote_class: "quote".to_string(),
    };
    let parsed = parse_transcript("*nods*", FormatMode::StarRp, &config);
    assert_eq!(
        parsed.blocks,
        vec![Block::Narrative {
            text: "<span class=\"act\">*nods*</span>".to_string()
        }]
    );
}

#[test]
fn speaker_with_empty_line_then_new_speaker() {
    let parsed = parse("Alice:\nBob: hi", FormatMode::StarRp);

    assert_eq!(parsed.dialogue_count(), 2);
    assert_eq!(
        parsed.blocks[0],
        Block::Dialogue {
            speaker: "Alice".to_string(),
            lines: vec![],
        }
    );
}

#[test]
fn repeated_speaker_opens_new_block_each_time() {
    let parsed = parse("Alice: one\nAlice: two", FormatMode::StarRp);
    assert_eq!(parsed.dialogue_count(), 2);
    assert_eq!(parsed.stats.get("Alice"), Some(2));
}

// Asides

#[rstest]
#[case("((table flip))")]
#[case("Alice: hi\n((table flip))")]
#[case("Alice: hi\n((table flip))\nmore")]
#[case("Narration.\n((table flip))\nBob: hey")]
fn aside_round_trip(#[case] text: &str) {
    let parsed = parse(text, FormatMode::StarRp);
    let asides: Vec<_> = parsed
        .blocks
        .iter()
        .filter_map(|b| match b {
            Block::OutOfCharacter { text } => Some(text.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(asides, vec!["table flip"]);
}

#[test]
fn aside_is_not_continued() {
    let parsed = parse("((brb))\nback now", FormatMode::StarRp);
    assert_eq!(
        parsed.blocks,
        vec![
            Block::OutOfCharacter {
                text: "brb".to_string()
            },
            Block::Narrative {
                text: "back now".to_string()
            },
        ]
    );
}

#[test]
fn aside_closes_open_dialogue() {
    let parsed = parse("Alice: hi\n((brb))\nstill here?", FormatMode::StarRp);
    assert_eq!(parsed.blocks.len(), 3);
    assert!(matches!(parsed.blocks[2], Block::Narrative { .. }));
}

// Properties over a mixed transcript

#[rstest]
#[case(FormatMode::StarRp)]
#[case(FormatMode::Markdown)]
#[case(FormatMode::Novel)]
fn mixed_transcript_structure_is_mode_independent(#[case] mode: FormatMode) {
    let parsed = parse(MIXED, mode);

    let shape: Vec<&str> = parsed
        .blocks
        .iter()
        .map(|b| match b {
            Block::OutOfCharacter { .. } => "ooc",
            Block::Dialogue { .. } => "dialogue",
            Block::Narrative { .. } => "narrative",
        })
        .collect();
    assert_eq!(
        shape,
        vec![
            "narrative", "ooc", "dialogue", "dialogue", "dialogue", "ooc", "narrative", "dialogue",
            "dialogue",
        ]
    );

    let stats: Vec<_> = parsed.stats.iter().collect();
    assert_eq!(stats, vec![("Alice", 2), ("Bob", 2), ("Narrator", 1)]);
}

#[rstest]
#[case(FormatMode::StarRp)]
#[case(FormatMode::Markdown)]
#[case(FormatMode::Novel)]
fn stats_extractor_agrees_with_full_parse(#[case] mode: FormatMode) {
    let parsed = parse(MIXED, mode);
    let counts = speaker_counts(MIXED);

    assert_eq!(counts.total(), parsed.stats.total());
    assert_eq!(counts, parsed.stats);
}

#[test]
fn classification_does_not_depend_on_previous_lines() {
    let classifier = TranscriptLineClassifier;
    let lines: Vec<&str> = MIXED.lines().collect();

    let forward: Vec<LineClass<'_>> = lines.iter().map(|l| classifier.classify(l)).collect();
    let mut backward: Vec<LineClass<'_>> =
        lines.iter().rev().map(|l| classifier.classify(l)).collect();
    backward.reverse();

    assert_eq!(forward, backward);
}

#[test]
fn every_speaker_line_opens_one_dialogue_block() {
    let classifier = TranscriptLineClassifier;
    let speaker_lines = MIXED
        .lines()
        .filter(|l| matches!(classifier.classify(l), LineClass::Speaker { .. }))
        .count();

    let parsed = parse(MIXED, FormatMode::StarRp);
    assert_eq!(parsed.dialogue_count(), speaker_lines);
}

#[test]
fn bom_is_not_part_of_first_line() {
    let parsed = parse("\u{feff}Alice: hi", FormatMode::StarRp);
    assert_eq!(parsed.blocks[0].speaker(), Some("Alice"));
}

// Edge cases

#[test]
fn empty_document() {
    let parsed = parse("", FormatMode::StarRp);
    assert!(parsed.is_empty());
    assert!(parsed.stats.is_empty());
}

#[test]
fn blank_lines_only() {
    let parsed = parse("\n  \n\r\n\t\n", FormatMode::StarRp);
    assert!(parsed.is_empty());
}

#[test]
fn crlf_line_endings() {
    let parsed = parse("Alice: one\r\ntwo\r\n", FormatMode::StarRp);
    let Block::Dialogue { lines, .. } = &parsed.blocks[0] else {
        panic!("expected dialogue");
    };
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[1].content, "two");
}

#[test]
fn lone_carriage_returns_end_lines() {
    let parsed = parse("Alice: hi\rBob: yo\r*waves*\r", FormatMode::StarRp);
    let speakers: Vec<_> = parsed.blocks.iter().filter_map(Block::speaker).collect();
    assert_eq!(speakers, vec!["Alice", "Bob"]);
    assert_eq!(parsed.stats.get("Bob"), Some(1));

    let Block::Dialogue { lines, .. } = &parsed.blocks[1] else {
        panic!("expected dialogue");
    };
    assert_eq!(lines.len(), 2);
    assert!(lines[1].is_action_line);
}

#[test]
fn missing_file_parses_as_empty() {
    let parsed = parse_file(
        std::path::Path::new("/this/path/does/not/exist.txt"),
        FormatMode::StarRp,
        &RenderConfig::default(),
    );
    assert!(parsed.is_empty());
    assert!(parsed.stats.is_empty());
}

#[test]
fn parse_file_reads_transcript() {
    let dir = crate::tests::create_test_stories_dir();
    let path = crate::tests::create_test_file(&dir, "scene.txt", "Alice: hi\n*waves*");

    let parsed = parse_file(&path, FormatMode::StarRp, &RenderConfig::default());
    assert_eq!(parsed.dialogue_count(), 1);
    assert_eq!(parsed.stats.get("Alice"), Some(1));
}
