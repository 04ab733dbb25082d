pub mod use_like_counter;
pub mod use_skills;
