//! In-page navigation between the anchored sections of the portfolio.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Hero,
    About,
    Education,
    Skills,
    Projects,
    Contact,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("no section named {0}")]
pub struct UnknownSection(pub String);

impl Section {
    /// Document order.
    pub const ALL: [Section; 6] = [
        Section::Hero,
        Section::About,
        Section::Education,
        Section::Skills,
        Section::Projects,
        Section::Contact,
    ];

    pub fn anchor(self) -> &'static str {
        match self {
            Section::Hero => "hero",
            Section::About => "about",
            Section::Education => "education",
            Section::Skills => "skills",
            Section::Projects => "projects",
            Section::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::Hero => "Home",
            Section::About => "About",
            Section::Education => "Education",
            Section::Skills => "Skills",
            Section::Projects => "Projects",
            Section::Contact => "Contact",
        }
    }

    /// Deep link usable from any page.
    pub fn href(self) -> String {
        format!("/#{}", self.anchor())
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.anchor())
    }
}

impl FromStr for Section {
    type Err = UnknownSection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let anchor = s.trim_start_matches('#');
        Section::ALL
            .into_iter()
            .find(|section| section.anchor() == anchor)
            .ok_or_else(|| UnknownSection(s.to_string()))
    }
}

/// Something that can scroll a rendered document: the browser window in the
/// app, a recording fake in tests.
pub trait ScrollSurface {
    /// Smooth-scrolls the element with this id to the top of the viewport.
    /// Returns `false` when no such element is rendered.
    fn scroll_into_view(&self, id: &str) -> bool;

    fn scroll_to_top(&self);
}

/// Scrolls to `target`, an element id with or without a leading `#`.
/// Unknown targets are ignored; the return value only says whether anything
/// moved.
pub fn scroll_to_section(surface: &impl ScrollSurface, target: &str) -> bool {
    let id = target.trim_start_matches('#');
    if id.is_empty() {
        return false;
    }
    let moved = surface.scroll_into_view(id);
    if !moved {
        log::trace!("no rendered section with id {id:?}");
    }
    moved
}

/// Scrolls to the section named by a URL fragment such as `#contact`.
/// Fragments that are not portfolio sections are ignored even if the document
/// happens to have an element with that id.
pub fn scroll_to_deep_link(surface: &impl ScrollSurface, hash: &str) -> bool {
    if hash.trim_start_matches('#').is_empty() {
        return false;
    }
    match hash.parse::<Section>() {
        Ok(section) => scroll_to_section(surface, section.anchor()),
        Err(e) => {
            log::trace!("ignoring deep link: {e}");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct FakeDocument {
        ids: Vec<&'static str>,
        scrolled: RefCell<Vec<String>>,
    }

    impl FakeDocument {
        fn portfolio() -> Self {
            Self {
                ids: Section::ALL.iter().map(|s| s.anchor()).collect(),
                scrolled: RefCell::new(Vec::new()),
            }
        }
    }

    impl ScrollSurface for FakeDocument {
        fn scroll_into_view(&self, id: &str) -> bool {
            if !self.ids.iter().any(|known| *known == id) {
                return false;
            }
            self.scrolled.borrow_mut().push(id.to_string());
            true
        }

        fn scroll_to_top(&self) {
            self.scrolled.borrow_mut().push("top".to_string());
        }
    }

    #[test]
    fn test_scroll_to_known_section() {
        let doc = FakeDocument::portfolio();
        assert!(scroll_to_section(&doc, Section::Projects.anchor()));
        assert!(scroll_to_section(&doc, "#contact"));
        assert_eq!(*doc.scrolled.borrow(), vec!["projects", "contact"]);
    }

    #[test]
    fn test_scroll_to_unknown_section_is_noop() {
        let doc = FakeDocument::portfolio();
        assert!(!scroll_to_section(&doc, "pricing"));
        assert!(!scroll_to_section(&doc, "#"));
        assert!(!scroll_to_section(&doc, ""));
        assert!(doc.scrolled.borrow().is_empty());
    }

    #[test]
    fn test_deep_link_scrolls_to_known_sections_only() {
        let mut doc = FakeDocument::portfolio();
        doc.ids.push("footnote-1");
        assert!(scroll_to_deep_link(&doc, "#contact"));
        assert!(!scroll_to_deep_link(&doc, "#footnote-1"));
        assert!(!scroll_to_deep_link(&doc, ""));
        assert!(!scroll_to_deep_link(&doc, "#"));
        assert_eq!(*doc.scrolled.borrow(), vec!["contact"]);
    }

    #[test]
    fn test_section_parsing() {
        assert_eq!("skills".parse::<Section>(), Ok(Section::Skills));
        assert_eq!("#about".parse::<Section>(), Ok(Section::About));
        assert_eq!(
            "blog".parse::<Section>(),
            Err(UnknownSection("blog".to_string()))
        );
    }

    #[test]
    fn test_section_links() {
        assert_eq!(Section::Contact.href(), "/#contact");
        assert_eq!(Section::Hero.to_string(), "hero");
        let anchors = Section::ALL.map(Section::anchor);
        assert_eq!(
            anchors,
            ["hero", "about", "education", "skills", "projects", "contact"]
        );
    }
}
