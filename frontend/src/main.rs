mod components;
mod hooks;
mod services;

use components::{LikeButton, LikeButtonProps, SkillsGrid, SkillsGridProps};
use services::api::DataClient;
use services::config::{LikeConfig, SiteConfig};
use services::experience::load_experience;
use services::header::ConnectMenu;
use services::likes::LikeClient;
use services::logging::Logger;

fn main() {
    let config = SiteConfig::default();
    let client = DataClient::with_base_url(config.base_url.clone());

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        Logger::error_with_component("main", "no document to render into");
        return;
    };

    // Each piece is independent: a missing mount point only disables that piece.
    load_experience(document.clone(), client.clone(), config.clone());

    match ConnectMenu::attach(&document, &config) {
        Some(menu) => menu.persist(),
        None => Logger::debug_with_component("header", "no connect menu on this page"),
    }

    if let Some(root) = document.get_element_by_id(&config.skills_grid_id) {
        yew::Renderer::<SkillsGrid>::with_root_and_props(
            root,
            SkillsGridProps {
                client,
                skills_path: config.skills_path.clone(),
            },
        )
        .render();
    }

    if let Some(root) = document.get_element_by_id(&config.like_root_id) {
        // Without counter settings the button is still shown, disabled
        let client = match LikeConfig::from_window() {
            Ok(like_config) => Some(LikeClient::new(like_config)),
            Err(e) => {
                Logger::warn_with_component("likes", &format!("{:#}", e));
                None
            }
        };
        yew::Renderer::<LikeButton>::with_root_and_props(root, LikeButtonProps { client }).render();
    }
}
