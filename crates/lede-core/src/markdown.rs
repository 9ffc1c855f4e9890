//! Markdown to prose.
//!
//! Summaries are built from sentences, so a Markdown document is reduced to
//! the text a reader would read as running prose. Block boundaries become
//! blank lines, which keeps a sentence from running across two paragraphs or
//! list items.

use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd};

/// Reduce Markdown to plain prose.
///
/// Drops YAML frontmatter, headings, fenced and indented code, tables, raw
/// HTML and image alt text. Keeps paragraph, list item and blockquote text,
/// link text, emphasis text without markers, and inline code as written.
#[tracing::instrument(skip_all, fields(input_len = text.len()))]
pub fn to_prose(text: &str) -> String {
    let body = without_frontmatter(text);
    let parser = Parser::new_ext(body, Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH);

    let mut prose = String::with_capacity(body.len());
    let mut hidden: usize = 0;

    for event in parser {
        match event {
            Event::Start(
                Tag::Heading { .. } | Tag::CodeBlock(_) | Tag::Table(_) | Tag::Image { .. },
            ) => hidden += 1,
            Event::End(TagEnd::Heading(_) | TagEnd::CodeBlock | TagEnd::Table | TagEnd::Image) => {
                hidden = hidden.saturating_sub(1);
            }
            _ if hidden > 0 => {}

            Event::Text(t) | Event::Code(t) => prose.push_str(&t),
            Event::SoftBreak | Event::HardBreak => prose.push(' '),
            Event::End(TagEnd::Paragraph | TagEnd::Item) => end_block(&mut prose),
            _ => {}
        }
    }

    prose.trim_end().to_string()
}

fn end_block(prose: &mut String) {
    let trimmed = prose.trim_end().len();
    prose.truncate(trimmed);
    if !prose.is_empty() {
        prose.push_str("\n\n");
    }
}

/// The document without a leading `---` delimited YAML block.
fn without_frontmatter(text: &str) -> &str {
    let Some(rest) = text.trim_start().strip_prefix("---\n") else {
        return text;
    };
    match rest.split_once("\n---") {
        Some((_, after)) => after.split_once('\n').map_or("", |(_, body)| body),
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drops_code_blocks_and_headings() {
        let input = "# Title\n\nSome text.\n\n```rust\nlet x = 1;\n```\n\nMore text.";
        let prose = to_prose(input);
        assert_eq!(prose, "Some text.\n\nMore text.");
    }

    #[test]
    fn drops_frontmatter() {
        let input = "---\nstatus: accepted\ndate: 2026-02-07\n---\n\nSome text.";
        assert_eq!(to_prose(input), "Some text.");
    }

    #[test]
    fn keeps_link_and_emphasis_text() {
        let prose = to_prose("Read **the** [guide](https://example.com) *today*.");
        assert_eq!(prose, "Read the guide today.");
    }

    #[test]
    fn keeps_inline_code() {
        assert_eq!(to_prose("Call `run()` twice."), "Call run() twice.");
    }

    #[test]
    fn list_items_become_blocks() {
        let prose = to_prose("- First item.\n- Second item.\n");
        assert_eq!(prose, "First item.\n\nSecond item.");
    }

    #[test]
    fn drops_tables() {
        let input = "Before.\n\n| A | B |\n|---|---|\n| 1 | 2 |\n\nAfter.";
        assert_eq!(to_prose(input), "Before.\n\nAfter.");
    }

    #[test]
    fn soft_breaks_become_spaces() {
        assert_eq!(to_prose("One line\nwraps here."), "One line wraps here.");
    }

    #[test]
    fn unterminated_frontmatter_is_kept() {
        let prose = to_prose("---\nnot closed");
        assert!(prose.contains("not closed"));
    }

    #[test]
    fn empty_input() {
        assert!(to_prose("").is_empty());
    }
}
