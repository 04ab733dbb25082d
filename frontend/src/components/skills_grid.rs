use yew::prelude::*;

use crate::hooks::use_skills::use_skills;
use crate::services::api::DataClient;

#[derive(Properties, PartialEq)]
pub struct SkillsGridProps {
    pub client: DataClient,
    pub skills_path: String,
}

/// Skill categories and their tags, appended into the page's skills grid
#[function_component(SkillsGrid)]
pub fn skills_grid(props: &SkillsGridProps) -> Html {
    let skills = use_skills(&props.client, &props.skills_path);

    html! {
        <>
            {for skills.catalog.categories.iter().map(|category| html! {
                <div class="skills-row">
                    <h3 class="skills-category">{category.name.clone()}</h3>
                    <div class="skills-tags">
                        {for category.items.iter().map(|skill| html! {
                            <span class="skill-tag">{skill.clone()}</span>
                        })}
                    </div>
                </div>
            })}
        </>
    }
}
