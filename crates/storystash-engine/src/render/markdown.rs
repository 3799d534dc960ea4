use pulldown_cmark::{Event, Options, Parser, html};

/// Markdown extensions enabled for transcript text.
fn options() -> Options {
    Options::ENABLE_TABLES | Options::ENABLE_FOOTNOTES | Options::ENABLE_STRIKETHROUGH
}

/// Converts markdown to HTML.
///
/// Soft breaks become `<br />` and raw HTML in the source is emitted as
/// escaped text rather than passed through.
pub fn render_markdown(raw: &str) -> String {
    let parser = Parser::new_ext(raw, options()).map(|event| match event {
        Event::SoftBreak => Event::HardBreak,
        Event::Html(markup) | Event::InlineHtml(markup) => Event::Text(markup),
        other => other,
    });

    let mut out = String::with_capacity(raw.len() + raw.len() / 2);
    html::push_html(&mut out, parser);
    out.truncate(out.trim_end().len());
    out
}
