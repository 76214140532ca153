//! Table of contents tracking
//!
//! Maps content sections to the navigation group that lists them, keeps at
//! most one group expanded at a time, and works out which section the reader
//! is looking at from scroll geometry.

use std::collections::HashMap;

use once_cell::unsync::OnceCell;
use serde::{Deserialize, Serialize};

/// A named group of section anchors in the navigation sidebar
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TocGroup {
    /// Group heading
    pub name: String,
    /// Anchors to sections, written `#section-id`
    pub anchors: Vec<String>,
}

impl TocGroup {
    pub fn new(name: impl Into<String>, anchors: &[&str]) -> Self {
        Self { name: name.into(), anchors: anchors.iter().map(|a| a.to_string()).collect() }
    }

    /// Section ids this group links to, without the leading `#`
    pub fn section_ids(&self) -> impl Iterator<Item = &str> {
        self.anchors.iter().map(|a| a.strip_prefix('#').unwrap_or(a))
    }
}

/// Section id to group name
pub type SectionMapping = HashMap<String, String>;

/// Build the section-to-group mapping for a navigation tree.
///
/// When a section is listed under several groups the first one wins.
pub fn build_section_mapping(groups: &[TocGroup]) -> SectionMapping {
    let mut mapping = SectionMapping::new();
    for group in groups {
        for id in group.section_ids() {
            mapping.entry(id.to_string()).or_insert_with(|| group.name.clone());
        }
    }
    mapping
}

/// Navigation tree with a lazily built, cached section mapping
#[derive(Debug, Clone, Default)]
pub struct TableOfContents {
    groups: Vec<TocGroup>,
    mapping: OnceCell<SectionMapping>,
}

impl TableOfContents {
    pub fn new(groups: Vec<TocGroup>) -> Self {
        Self { groups, mapping: OnceCell::new() }
    }

    pub fn groups(&self) -> &[TocGroup] {
        &self.groups
    }

    /// Section mapping, built on first access
    pub fn mapping(&self) -> &SectionMapping {
        self.mapping.get_or_init(|| {
            let mapping = build_section_mapping(&self.groups);
            tracing::debug!("Built section mapping with {} entries", mapping.len());
            mapping
        })
    }

    /// Name of the group containing `section_id`
    pub fn group_of(&self, section_id: &str) -> Option<&str> {
        self.mapping().get(section_id).map(String::as_str)
    }
}

/// Expansion state of the navigation groups. At most one group is open.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Accordion {
    expanded: Option<String>,
}

impl Accordion {
    /// The currently expanded group, if any
    pub fn expanded(&self) -> Option<&str> {
        self.expanded.as_deref()
    }

    pub fn is_expanded(&self, group: &str) -> bool {
        self.expanded.as_deref() == Some(group)
    }

    /// Expand the group holding `section_id`, collapsing the others.
    ///
    /// Sections missing from the mapping leave the state untouched. Returns
    /// whether the expanded group changed.
    pub fn highlight_current_section(&mut self, section_id: &str, mapping: &SectionMapping) -> bool {
        let Some(group) = mapping.get(section_id) else {
            return false;
        };

        if self.is_expanded(group) {
            return false;
        }
        self.expanded = Some(group.clone());
        true
    }
}

/// Position of a rendered section within the document
#[derive(Debug, Clone, PartialEq)]
pub struct SectionGeometry {
    pub id: String,
    pub offset_top: f64,
    pub height: f64,
}

impl SectionGeometry {
    pub fn new(id: impl Into<String>, offset_top: f64, height: f64) -> Self {
        Self { id: id.into(), offset_top, height }
    }

    fn contains(&self, pos: f64) -> bool {
        pos >= self.offset_top && pos < self.offset_top + self.height
    }
}

/// Find the section at scroll position `scroll_pos`.
///
/// Falls back to the nearest section starting above the position, then to the
/// first section. Returns `None` only when there are no sections.
pub fn find_current_section(sections: &[SectionGeometry], scroll_pos: f64) -> Option<&str> {
    if let Some(hit) = sections.iter().find(|s| s.contains(scroll_pos)) {
        return Some(&hit.id);
    }

    sections
        .iter()
        .filter(|s| s.offset_top <= scroll_pos)
        .max_by(|a, b| a.offset_top.total_cmp(&b.offset_top))
        .or_else(|| sections.first())
        .map(|s| s.id.as_str())
}
