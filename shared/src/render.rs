//! The list renderer: turns ordered entries into entry views and dividers.
//!
//! The renderer never touches a concrete DOM. It talks to a [`RenderTarget`]
//! (a named container plus the entry template it clones from) and to the
//! [`EntryView`]s that target hands out. The browser frontend implements these
//! over `web-sys`; [`crate::memory`] implements them in plain Rust.

use crate::dataset::{Dataset, Section};
use crate::disclosure::Disclosure;
use crate::entry::Entry;

/// Where skill tags go inside an entry view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagPlacement {
    /// Immediately after the location region
    AfterLocation,
    /// At the front of the entry, used when the location region is hidden
    Front,
}

/// One freshly instantiated entry view with named regions to populate
pub trait EntryView {
    fn set_title(&mut self, title: &str);
    /// Append a visually distinct annotation after the title text
    fn append_honors(&mut self, suffix: &str);
    fn set_subtitle(&mut self, subtitle: &str);
    /// Show the location region with `Some`, hide it entirely with `None`
    fn set_location(&mut self, location: Option<&str>);
    fn set_year(&mut self, year: &str);
    fn set_detail(&mut self, detail: &str);
    fn insert_skill_tags(&mut self, skills: &[String], placement: TagPlacement);
    /// Mark the view as a partner rendered beneath its parent
    fn mark_subordinate(&mut self);
    /// Hand the view its own disclosure. Inert disclosures disable the affordance.
    fn wire_disclosure(&mut self, disclosure: Disclosure);
}

/// A pre-existing container the renderer appends into.
///
/// Appending is all the renderer ever does: prior content is neither queried
/// nor cleared, so rendering twice duplicates the output.
pub trait RenderTarget {
    type View: EntryView;

    /// Clone a fresh view from the entry template. `None` when the template is missing.
    fn instantiate_entry_view(&mut self) -> Option<Self::View>;
    fn append_entry(&mut self, view: Self::View);
    fn append_divider(&mut self);
}

/// What a render pass appended
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderSummary {
    pub entries: usize,
    pub partners: usize,
    pub dividers: usize,
}

impl RenderSummary {
    pub fn views(&self) -> usize {
        self.entries + self.partners
    }
}

/// Render `entries` in order into `target`.
///
/// Layout for a parent with partners followed by another entry:
/// parent, divider, partner 1, divider, partner 2, divider, next entry.
/// No divider follows the last top-level entry or its last partner.
pub fn render_entries<T>(entries: &[Entry], target: &mut T) -> RenderSummary
where
    T: RenderTarget + ?Sized,
{
    let mut summary = RenderSummary::default();

    for (index, entry) in entries.iter().enumerate() {
        let Some(view) = build_view(entry, target, false) else {
            tracing::warn!(rendered = summary.entries, "entry template unavailable, stopping");
            return summary;
        };
        target.append_entry(view);
        summary.entries += 1;

        for partner in &entry.partners {
            let Some(view) = build_view(partner, target, true) else {
                tracing::warn!("entry template unavailable for partner, stopping");
                return summary;
            };
            target.append_divider();
            summary.dividers += 1;
            target.append_entry(view);
            summary.partners += 1;
        }

        if index + 1 < entries.len() {
            target.append_divider();
            summary.dividers += 1;
        }
    }

    summary
}

fn build_view<T>(entry: &Entry, target: &mut T, subordinate: bool) -> Option<T::View>
where
    T: RenderTarget + ?Sized,
{
    let mut view = target.instantiate_entry_view()?;

    view.set_title(&entry.title);
    if let Some(suffix) = entry.honors_suffix() {
        view.append_honors(&suffix);
    }
    view.set_subtitle(entry.resolve_subtitle());

    let location = entry.visible_location();
    view.set_location(location);
    view.set_year(entry.year_text());
    view.set_detail(entry.description_text());

    if !entry.skills.is_empty() {
        let placement = if location.is_some() {
            TagPlacement::AfterLocation
        } else {
            TagPlacement::Front
        };
        view.insert_skill_tags(&entry.skills, placement);
    }

    if subordinate {
        view.mark_subordinate();
    }
    view.wire_disclosure(Disclosure::for_description(entry.has_description()));

    Some(view)
}

/// A section rendered into the target resolved for it
#[derive(Debug)]
pub struct RenderedSection<T> {
    pub section: Section,
    pub target: T,
    pub summary: RenderSummary,
}

/// Render every section present in `dataset`.
///
/// `resolve` maps a section to its target; returning `None` (container absent
/// from the page) skips that section without affecting the others.
pub fn render_dataset<T, F>(dataset: &Dataset, mut resolve: F) -> Vec<RenderedSection<T>>
where
    T: RenderTarget,
    F: FnMut(Section) -> Option<T>,
{
    let mut rendered = Vec::new();

    for (section, entries) in dataset.sections() {
        let Some(mut target) = resolve(section) else {
            tracing::warn!(%section, "no render target for section");
            continue;
        };
        let summary = render_entries(entries, &mut target);
        tracing::debug!(%section, entries = summary.entries, partners = summary.partners, "section rendered");
        rendered.push(RenderedSection {
            section,
            target,
            summary,
        });
    }

    rendered
}
