pub mod dataset;
pub mod disclosure;
pub mod entry;
pub mod likes;
pub mod memory;
pub mod render;
pub mod skills;

pub use dataset::{Dataset, DatasetError, Section};
pub use disclosure::{Disclosure, DisclosureState, RevealStrategy};
pub use entry::{Entry, SkippedItems};
pub use likes::{LikeOutcome, LikeRpcRequest, LikeSession};
pub use render::{
    render_dataset, render_entries, EntryView, RenderSummary, RenderTarget, RenderedSection,
    TagPlacement,
};
pub use skills::{SkillCatalog, SkillCategory};
