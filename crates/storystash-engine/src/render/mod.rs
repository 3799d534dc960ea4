//! # Format Rendering
//!
//! Turns one raw transcript line into display markup. A transcript is always
//! rendered with a single [`FormatMode`], chosen by the caller; the renderer
//! never inspects content to guess it.
//!
//! ## Strategies
//!
//! - **`star`**: legacy roleplay markup, `*waves*` spans highlighted as actions
//! - **`markdown`**: full markdown via pulldown-cmark
//! - **`novel`**: prose style, `"quoted speech"` spans highlighted
//!
//! All three are variants of the closed [`Renderer`] enum and share the
//! `render(raw) -> Rendered` contract.

pub mod markdown;
pub mod novel;
pub mod star;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use markdown::render_markdown;
pub use novel::QuoteSpan;
pub use star::ActionSpan;

/// The rendering convention applied to a transcript's text content.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum FormatMode {
    /// `*action*` markup (the default for transcripts without metadata).
    #[default]
    StarRp,
    /// Markdown with tables and footnotes.
    Markdown,
    /// Novel style, highlighting `"quoted"` speech.
    Novel,
}

impl FormatMode {
    pub const ALL: [FormatMode; 3] = [FormatMode::StarRp, FormatMode::Markdown, FormatMode::Novel];

    /// Resolves a stored mode name. Unknown names fall back to [`FormatMode::StarRp`].
    pub fn from_name(name: &str) -> Self {
        match name.trim() {
            "star_rp" => FormatMode::StarRp,
            "markdown" => FormatMode::Markdown,
            "novel" => FormatMode::Novel,
            other => {
                log::warn!("Unknown format mode {other:?}, using star_rp");
                FormatMode::StarRp
            }
        }
    }

    /// The stored name of this mode (`star_rp`, `markdown`, `novel`).
    pub fn name(self) -> &'static str {
        match self {
            FormatMode::StarRp => "star_rp",
            FormatMode::Markdown => "markdown",
            FormatMode::Novel => "novel",
        }
    }

    /// The mode after this one, wrapping around. Used to cycle modes in a reader.
    pub fn next(self) -> Self {
        match self {
            FormatMode::StarRp => FormatMode::Markdown,
            FormatMode::Markdown => FormatMode::Novel,
            FormatMode::Novel => FormatMode::StarRp,
        }
    }
}

impl From<String> for FormatMode {
    fn from(name: String) -> Self {
        Self::from_name(&name)
    }
}

impl From<&str> for FormatMode {
    fn from(name: &str) -> Self {
        Self::from_name(name)
    }
}

impl fmt::Display for FormatMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Presentation classes injected into rendered markup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// CSS class for `*action*` spans in star mode.
    pub action_class: String,
    /// CSS class for `"quote"` spans in novel mode.
    pub quote_class: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            action_class: "text-indigo-300 italic font-medium".to_string(),
            quote_class: "text-amber-200 font-medium".to_string(),
        }
    }
}

/// Output of rendering a single raw line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    /// Escaped and marked-up text.
    pub html: String,
    /// Whether the raw line is an isolated action (star mode only).
    pub is_action_line: bool,
}

/// A rendering strategy selected by [`FormatMode`].
#[derive(Debug, Clone, Copy)]
pub enum Renderer<'a> {
    StarRp { action_class: &'a str },
    Markdown,
    Novel { quote_class: &'a str },
}

impl<'a> Renderer<'a> {
    pub fn new(mode: FormatMode, config: &'a RenderConfig) -> Self {
        match mode {
            FormatMode::StarRp => Renderer::StarRp {
                action_class: &config.action_class,
            },
            FormatMode::Markdown => Renderer::Markdown,
            FormatMode::Novel => Renderer::Novel {
                quote_class: &config.quote_class,
            },
        }
    }

    pub fn mode(&self) -> FormatMode {
        match self {
            Renderer::StarRp { .. } => FormatMode::StarRp,
            Renderer::Markdown => FormatMode::Markdown,
            Renderer::Novel { .. } => FormatMode::Novel,
        }
    }

    /// Renders one raw, unescaped line.
    ///
    /// Action-line detection looks at `raw`, never at the rendered output.
    pub fn render(&self, raw: &str) -> Rendered {
        match self {
            Renderer::StarRp { action_class } => Rendered {
                html: ActionSpan::highlight(&escape(raw), action_class),
                is_action_line: ActionSpan::is_action_line(raw),
            },
            Renderer::Markdown => Rendered {
                html: render_markdown(raw),
                is_action_line: false,
            },
            Renderer::Novel { quote_class } => Rendered {
                html: QuoteSpan::highlight(&escape(raw), quote_class),
                is_action_line: false,
            },
        }
    }
}

/// HTML-escapes text for use as element content.
pub fn escape(text: &str) -> String {
    html_escape::encode_text(text).into_owned()
}
