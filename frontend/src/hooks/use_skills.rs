use portfolio_shared::SkillCatalog;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::api::DataClient;
use crate::services::logging::Logger;

#[derive(Clone, PartialEq, Default)]
pub struct SkillsState {
    pub catalog: SkillCatalog,
    pub loading: bool,
    pub error: Option<String>,
}

/// Hook loading the skills catalog once per path
#[hook]
pub fn use_skills(client: &DataClient, path: &str) -> UseStateHandle<SkillsState> {
    let skills_state = use_state(SkillsState::default);

    use_effect_with(path.to_string(), {
        let skills_state = skills_state.clone();
        let client = client.clone();

        move |path: &String| {
            let path = path.clone();
            skills_state.set(SkillsState {
                loading: true,
                ..SkillsState::default()
            });

            spawn_local(async move {
                match client.fetch_skills(&path).await {
                    Ok(catalog) => {
                        Logger::info_with_component(
                            "skills",
                            &format!(
                                "{} categories, {} tags",
                                catalog.categories.len(),
                                catalog.tag_count()
                            ),
                        );
                        skills_state.set(SkillsState {
                            catalog,
                            loading: false,
                            error: None,
                        });
                    }
                    Err(e) => {
                        Logger::error_with_component("skills", &e.to_string());
                        skills_state.set(SkillsState {
                            catalog: SkillCatalog::default(),
                            loading: false,
                            error: Some(e.to_string()),
                        });
                    }
                }
            });

            || ()
        }
    });

    skills_state
}
