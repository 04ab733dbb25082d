pub mod api;
pub mod config;
pub mod dom_view;
pub mod experience;
pub mod header;
pub mod likes;
pub mod logging;
