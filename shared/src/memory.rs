//! In-memory render target, for host-less rendering and for exercising the
//! renderer's contracts without a browser.

use crate::disclosure::{Disclosure, DisclosureState, RevealStrategy};
use crate::render::{EntryView, RenderTarget, TagPlacement};

/// Visible side effects of the expand/collapse state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealFlags {
    pub detail_visible: bool,
    pub affordance_active: bool,
    pub aria_hidden: bool,
}

impl Default for RevealFlags {
    fn default() -> Self {
        Self {
            detail_visible: false,
            affordance_active: false,
            aria_hidden: true,
        }
    }
}

/// Reveal strategy that only flips flags
#[derive(Debug, Clone, Copy, Default)]
pub struct FlagReveal;

impl RevealStrategy<RevealFlags> for FlagReveal {
    fn set_expanded(&self, flags: &mut RevealFlags, expanded: bool) {
        flags.detail_visible = expanded;
        flags.affordance_active = expanded;
        flags.aria_hidden = !expanded;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryView {
    pub title: String,
    pub honors: Option<String>,
    pub subtitle: String,
    /// `None` when the location region is hidden
    pub location: Option<String>,
    pub year: String,
    pub detail: String,
    pub skills: Vec<String>,
    pub tag_placement: Option<TagPlacement>,
    pub subordinate: bool,
    pub disclosure: Option<Disclosure>,
    pub reveal: RevealFlags,
}

impl MemoryView {
    pub fn affordance_enabled(&self) -> bool {
        self.disclosure
            .as_ref()
            .map(Disclosure::is_interactive)
            .unwrap_or(false)
    }

    pub fn state(&self) -> DisclosureState {
        self.disclosure
            .as_ref()
            .map(Disclosure::state)
            .unwrap_or_default()
    }

    /// Simulate a click on the entry row
    pub fn click_row(&mut self) -> Option<DisclosureState> {
        self.disclosure
            .as_mut()?
            .activate_with(&FlagReveal, &mut self.reveal)
    }

    /// Simulate a click on the expand affordance.
    ///
    /// The affordance sits inside the row; its handler stops propagation so
    /// the row handler never sees the same click.
    pub fn click_affordance(&mut self) -> Option<DisclosureState> {
        if !self.affordance_enabled() {
            return None;
        }
        self.click_row()
    }
}

impl EntryView for MemoryView {
    fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
    }

    fn append_honors(&mut self, suffix: &str) {
        self.honors = Some(suffix.to_string());
    }

    fn set_subtitle(&mut self, subtitle: &str) {
        self.subtitle = subtitle.to_string();
    }

    fn set_location(&mut self, location: Option<&str>) {
        self.location = location.map(str::to_string);
    }

    fn set_year(&mut self, year: &str) {
        self.year = year.to_string();
    }

    fn set_detail(&mut self, detail: &str) {
        self.detail = detail.to_string();
    }

    fn insert_skill_tags(&mut self, skills: &[String], placement: TagPlacement) {
        self.skills.extend(skills.iter().cloned());
        self.tag_placement = Some(placement);
    }

    fn mark_subordinate(&mut self) {
        self.subordinate = true;
    }

    fn wire_disclosure(&mut self, disclosure: Disclosure) {
        self.disclosure = Some(disclosure);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MemoryNode {
    Entry(MemoryView),
    Divider,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryTarget {
    pub nodes: Vec<MemoryNode>,
    has_template: bool,
}

impl Default for MemoryTarget {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryTarget {
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            has_template: true,
        }
    }

    /// A target whose page lacks the entry template
    pub fn without_template() -> Self {
        Self {
            nodes: Vec::new(),
            has_template: false,
        }
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
    }

    pub fn views(&self) -> impl Iterator<Item = &MemoryView> {
        self.nodes.iter().filter_map(|node| match node {
            MemoryNode::Entry(view) => Some(view),
            MemoryNode::Divider => None,
        })
    }

    pub fn views_mut(&mut self) -> impl Iterator<Item = &mut MemoryView> {
        self.nodes.iter_mut().filter_map(|node| match node {
            MemoryNode::Entry(view) => Some(view),
            MemoryNode::Divider => None,
        })
    }

    pub fn divider_count(&self) -> usize {
        self.nodes
            .iter()
            .filter(|node| matches!(node, MemoryNode::Divider))
            .count()
    }

    /// One line per node, e.g. `entry Engineer`, `partner Acme`, `divider`
    pub fn outline(&self) -> Vec<String> {
        self.nodes
            .iter()
            .map(|node| match node {
                MemoryNode::Entry(view) if view.subordinate => format!("partner {}", view.title),
                MemoryNode::Entry(view) => format!("entry {}", view.title),
                MemoryNode::Divider => "divider".to_string(),
            })
            .collect()
    }
}

impl RenderTarget for MemoryTarget {
    type View = MemoryView;

    fn instantiate_entry_view(&mut self) -> Option<MemoryView> {
        self.has_template.then(MemoryView::default)
    }

    fn append_entry(&mut self, view: MemoryView) {
        self.nodes.push(MemoryNode::Entry(view));
    }

    fn append_divider(&mut self) {
        self.nodes.push(MemoryNode::Divider);
    }
}
