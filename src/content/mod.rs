//! Fixed content rendered by each section of the site.
//!
//! Everything here is compile-time data; the stateful parts of each section
//! live in their own feature modules.

pub mod community;
pub mod guide;
pub mod library;
pub mod wellness;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    /// Anchor id navigation scrolls to.
    pub id: &'static str,
    pub label: &'static str,
}

/// Page sections in scroll order.
pub const SECTIONS: &[Section] = &[
    Section { id: "home", label: "Home" },
    Section { id: "sustainable", label: "Sustainable Living" },
    Section { id: "productivity", label: "Productivity" },
    Section { id: "mental-health", label: "Mental Health" },
    Section { id: "community", label: "Community Hub" },
    Section { id: "blog", label: "Blog" },
    Section { id: "resources", label: "Resources" },
];

pub fn section(id: &str) -> Option<&'static Section> {
    SECTIONS.iter().find(|s| s.id == id)
}
