pub mod like_button;
pub mod skills_grid;

pub use like_button::{LikeButton, LikeButtonProps};
pub use skills_grid::{SkillsGrid, SkillsGridProps};
