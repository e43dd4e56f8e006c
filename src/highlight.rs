use std::sync::LazyLock;
use std::vec::IntoIter;

use pulldown_cmark::{CodeBlockKind, CowStr, Event, Tag, TagEnd};
use syntect::highlighting::{Theme, ThemeSet};
use syntect::html::highlighted_html_for_string;
use syntect::parsing::SyntaxSet;

const THEME: &str = "base16-ocean.dark";

static HIGHLIGHTER: LazyLock<PulldownHighlighter> = LazyLock::new(PulldownHighlighter::new);

pub struct PulldownHighlighter {
    syntaxset: SyntaxSet,
    theme: Theme,
}

/// Loading syntax definitions is slow, so one instance is shared by every post.
impl PulldownHighlighter {
    pub fn new() -> PulldownHighlighter {
        let syntaxset = SyntaxSet::load_defaults_newlines();
        let mut themeset = ThemeSet::load_defaults();
        let theme = themeset.themes.remove(THEME).unwrap_or_default();

        PulldownHighlighter { syntaxset, theme }
    }

    /// Apply syntax highlighting to pulldown-cmark events.
    ///
    /// Code blocks are replaced by a single HTML event holding the highlighted
    /// block. Fenced blocks use the syntax named by their info string, falling
    /// back to plain text for unknown languages. A block that fails to
    /// highlight is passed through untouched.
    pub fn highlight<'a, It>(&self, events: It) -> Vec<Event<'a>>
    where
        It: Iterator<Item = Event<'a>>,
    {
        let plain = self.syntaxset.find_syntax_plain_text();
        let mut syntax = plain;
        let mut open_block = None::<CodeBlockKind<'a>>;

        let mut to_highlight = String::new();
        let mut out_events = Vec::new();

        for event in events {
            match event {
                Event::Start(Tag::CodeBlock(kind)) => {
                    syntax = match &kind {
                        CodeBlockKind::Fenced(lang) => {
                            self.syntaxset.find_syntax_by_token(lang).unwrap_or(plain)
                        }
                        CodeBlockKind::Indented => plain,
                    };
                    open_block = Some(kind);
                }
                Event::End(TagEnd::CodeBlock) => {
                    let Some(kind) = open_block.take() else {
                        out_events.push(Event::End(TagEnd::CodeBlock));
                        continue;
                    };
                    match highlighted_html_for_string(
                        &to_highlight,
                        &self.syntaxset,
                        syntax,
                        &self.theme,
                    ) {
                        Ok(html) => out_events.push(Event::Html(CowStr::from(html))),
                        Err(_) => {
                            out_events.push(Event::Start(Tag::CodeBlock(kind)));
                            out_events.push(Event::Text(CowStr::from(to_highlight.clone())));
                            out_events.push(Event::End(TagEnd::CodeBlock));
                        }
                    }
                    to_highlight.clear();
                }
                Event::Text(t) if open_block.is_some() => to_highlight.push_str(&t),
                e => out_events.push(e),
            }
        }

        out_events
    }
}

/// Apply syntax highlighting to pulldown-cmark events with the shared highlighter.
pub fn highlight<'a, It>(events: It) -> IntoIter<Event<'a>>
where
    It: Iterator<Item = Event<'a>>,
{
    HIGHLIGHTER.highlight(events).into_iter()
}
