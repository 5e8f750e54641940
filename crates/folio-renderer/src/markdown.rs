//! Markdown to HTML via pulldown-cmark.
//!
//! pulldown-cmark's HTML writer is driven through [`PostEvents`], an event
//! adapter that adds the two behaviors blog posts rely on:
//!
//! - soft line breaks render as `<br />` (authors write one sentence per line);
//! - bare `http(s)://` and `www.` URLs in text become links.

use std::collections::VecDeque;
use std::sync::LazyLock;

use pulldown_cmark::{CowStr, Event, LinkType, Parser, Tag, TagEnd, TextMergeStream, html};
use regex::Regex;

use crate::RenderOptions;

/// Bare URL in text. Trailing punctuation is left out of the link.
static URL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\b(?:https?://|www\.)[^\s<>]*[^\s<>?!.,:;*_~'")\]]"#).unwrap()
});

/// Render markdown to HTML with the given options.
pub(crate) fn render_markdown(markdown: &str, options: &RenderOptions) -> String {
    let parser = Parser::new_ext(markdown, options.parser_options());
    let events = PostEvents::new(TextMergeStream::new(parser), options);

    let mut out = String::with_capacity(markdown.len() + markdown.len() / 2);
    html::push_html(&mut out, events);
    out
}

/// Event adapter applying line-break and autolink rewriting.
struct PostEvents<'a, I> {
    inner: I,
    hard_breaks: bool,
    autolink: bool,
    /// Events produced by splitting a text event, not yet yielded.
    pending: VecDeque<Event<'a>>,
    /// Nesting depth of links, images and code blocks.
    verbatim_depth: usize,
    /// Inside an author-written `<a>` element.
    in_html_anchor: bool,
}

impl<'a, I> PostEvents<'a, I>
where
    I: Iterator<Item = Event<'a>>,
{
    fn new(inner: I, options: &RenderOptions) -> Self {
        Self {
            inner,
            hard_breaks: options.breaks,
            autolink: options.gfm,
            pending: VecDeque::new(),
            verbatim_depth: 0,
            in_html_anchor: false,
        }
    }

    fn track_anchor(&mut self, html: &str) {
        let tag = html.trim_start().to_ascii_lowercase();
        if tag.starts_with("<a ") || tag.starts_with("<a>") {
            self.in_html_anchor = true;
        } else if tag.starts_with("</a") {
            self.in_html_anchor = false;
        }
    }

    /// Split a text event around bare URLs, queueing link events.
    fn autolink_text(&mut self, text: CowStr<'a>) -> Option<Event<'a>> {
        let mut last = 0;

        for m in URL_RE.find_iter(&text) {
            if m.start() > last {
                self.pending
                    .push_back(Event::Text(text[last..m.start()].to_owned().into()));
            }

            let url = m.as_str();
            let href = if url.starts_with("www.") {
                format!("http://{url}")
            } else {
                url.to_owned()
            };

            self.pending.push_back(Event::Start(Tag::Link {
                link_type: LinkType::Autolink,
                dest_url: href.into(),
                title: CowStr::Borrowed(""),
                id: CowStr::Borrowed(""),
            }));
            self.pending.push_back(Event::Text(url.to_owned().into()));
            self.pending.push_back(Event::End(TagEnd::Link));
            last = m.end();
        }

        if self.pending.is_empty() {
            return Some(Event::Text(text));
        }
        if last < text.len() {
            self.pending
                .push_back(Event::Text(text[last..].to_owned().into()));
        }
        self.pending.pop_front()
    }
}

impl<'a, I> Iterator for PostEvents<'a, I>
where
    I: Iterator<Item = Event<'a>>,
{
    type Item = Event<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(event) = self.pending.pop_front() {
            return Some(event);
        }

        let event = self.inner.next()?;
        match event {
            Event::SoftBreak if self.hard_breaks => Some(Event::HardBreak),
            Event::Start(Tag::Link { .. } | Tag::Image { .. } | Tag::CodeBlock(_)) => {
                self.verbatim_depth += 1;
                Some(event)
            }
            Event::End(TagEnd::Link | TagEnd::Image | TagEnd::CodeBlock) => {
                self.verbatim_depth = self.verbatim_depth.saturating_sub(1);
                Some(event)
            }
            Event::InlineHtml(ref html) => {
                self.track_anchor(html);
                Some(event)
            }
            Event::Text(text)
                if self.autolink && self.verbatim_depth == 0 && !self.in_html_anchor =>
            {
                self.autolink_text(text)
            }
            other => Some(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn render(markdown: &str) -> String {
        render_markdown(markdown, &RenderOptions::default())
    }

    #[test]
    fn test_paragraph() {
        assert_eq!(render("Hello"), "<p>Hello</p>\n");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(render(""), "");
    }

    #[test]
    fn test_soft_break_as_hard_break() {
        assert_eq!(render("one\ntwo"), "<p>one<br />\ntwo</p>\n");
    }

    #[test]
    fn test_soft_break_kept_without_breaks() {
        let options = RenderOptions::default().with_breaks(false);
        assert_eq!(render_markdown("one\ntwo", &options), "<p>one\ntwo</p>\n");
    }

    #[test]
    fn test_strikethrough() {
        assert_eq!(render("~~gone~~"), "<p><del>gone</del></p>\n");
    }

    #[test]
    fn test_table() {
        let html = render("| a | b |\n|---|---|\n| 1 | 2 |");
        assert!(html.contains("<table>"));
        assert!(html.contains("<td>1</td>"));
    }

    #[test]
    fn test_table_disabled_without_gfm() {
        let options = RenderOptions::default().with_gfm(false);
        let html = render_markdown("| a | b |\n|---|---|\n| 1 | 2 |", &options);
        assert!(!html.contains("<table>"));
    }

    #[test]
    fn test_html_comment_block_survives() {
        let html = render("Before\n\n<!--AUDIO_0-->\n\nAfter");
        assert_eq!(html, "<p>Before</p>\n<!--AUDIO_0-->\n<p>After</p>\n");
    }

    #[test]
    fn test_autolink_bare_url() {
        assert_eq!(
            render("Visit https://example.com now"),
            "<p>Visit <a href=\"https://example.com\">https://example.com</a> now</p>\n"
        );
    }

    #[test]
    fn test_autolink_www_trailing_punctuation() {
        assert_eq!(
            render("See www.example.com."),
            "<p>See <a href=\"http://www.example.com\">www.example.com</a>.</p>\n"
        );
    }

    #[test]
    fn test_autolink_url_with_underscores() {
        let html = render("Go to https://example.com/a_b_c today");
        assert!(html.contains(r#"<a href="https://example.com/a_b_c">"#));
    }

    #[test]
    fn test_no_autolink_inside_link() {
        assert_eq!(
            render("[https://a.com](https://b.com)"),
            "<p><a href=\"https://b.com\">https://a.com</a></p>\n"
        );
    }

    #[test]
    fn test_no_autolink_in_code() {
        let html = render("`https://a.com`\n\n```\nhttps://b.com\n```");
        assert!(!html.contains("<a "));
    }

    #[test]
    fn test_no_autolink_inside_html_anchor() {
        let html = render(r#"<a href="https://a.com">https://a.com</a>"#);
        assert_eq!(html.matches("<a ").count(), 1);
    }

    #[test]
    fn test_no_autolink_without_gfm() {
        let options = RenderOptions::default().with_gfm(false);
        let html = render_markdown("Visit https://example.com", &options);
        assert!(!html.contains("<a "));
    }
}
