use portfolio_shared::{render_dataset, RenderSummary, Section, SkippedItems};
use wasm_bindgen_futures::spawn_local;
use web_sys::Document;

use super::api::{DataClient, FetchError};
use super::config::SiteConfig;
use super::dom_view::DomListTarget;
use super::logging::Logger;

const COMPONENT: &str = "experience";

/// Fetch the experience dataset and render it into the page in the background.
///
/// Failures are logged and leave the sections empty; the page stays usable.
pub fn load_experience(document: Document, client: DataClient, config: SiteConfig) {
    spawn_local(async move {
        match render_experience(&document, &client, &config).await {
            Ok(rendered) => {
                for (section, summary) in rendered {
                    Logger::debug_with_component(
                        COMPONENT,
                        &format!(
                            "{}: {} entries, {} partners, {} dividers",
                            section, summary.entries, summary.partners, summary.dividers
                        ),
                    );
                }
            }
            Err(err) => {
                Logger::error_with_component(COMPONENT, &format!("loadExperience error: {}", err));
            }
        }
    });
}

pub async fn render_experience(
    document: &Document,
    client: &DataClient,
    config: &SiteConfig,
) -> Result<Vec<(Section, RenderSummary)>, FetchError> {
    let dataset = client.fetch_dataset(&config.experience_path).await?;
    for section in Section::ALL {
        if dataset.section(section).is_none() {
            Logger::debug_with_component(COMPONENT, &format!("{} missing or not a list", section));
        }
        if let Some(report) = describe_skipped(section, dataset.skipped(section)) {
            Logger::warn_with_component(COMPONENT, &report);
        }
    }

    let rendered = render_dataset(&dataset, |section| {
        let Some(container_id) = config.container_id(section) else {
            Logger::debug_with_component(COMPONENT, &format!("no container configured for {}", section));
            return None;
        };
        let target = DomListTarget::locate(document, container_id, &config.entry_template_id);
        if target.is_none() {
            Logger::warn_with_component(COMPONENT, &format!("container #{} not found", container_id));
        }
        target
    });

    Ok(rendered
        .into_iter()
        .map(|rendered| {
            let summary = rendered.summary;
            Logger::debug_with_component(
                COMPONENT,
                &format!("{} rendered into #{}", rendered.section, rendered.target.container().id()),
            );
            rendered.target.persist();
            (rendered.section, summary)
        })
        .collect())
}

fn describe_skipped(section: Section, skipped: SkippedItems) -> Option<String> {
    if skipped.is_empty() {
        return None;
    }
    Some(format!(
        "{}: skipped {} entries, {} partners, {} list items, {} malformed fields",
        section, skipped.entries, skipped.partners, skipped.list_items, skipped.fields
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[test]
    fn test_describe_skipped() {
        assert_eq!(describe_skipped(Section::Education, SkippedItems::default()), None);

        let skipped = SkippedItems {
            entries: 2,
            partners: 1,
            list_items: 0,
            fields: 3,
        };
        assert_eq!(
            describe_skipped(Section::WorkExperience, skipped).as_deref(),
            Some("workExperience: skipped 2 entries, 1 partners, 0 list items, 3 malformed fields")
        );
    }

    #[wasm_bindgen_test]
    async fn test_failed_fetch_appends_nothing() {
        let document = web_sys::window().unwrap().document().unwrap();
        let body = document.body().unwrap();

        let container = document.create_element("div").unwrap();
        container.set_id("failed-fetch-list");
        body.append_child(&container).unwrap();

        let mut config = SiteConfig {
            experience_path: "data/no-such-experience.json".to_string(),
            ..SiteConfig::default()
        };
        config
            .section_containers
            .insert(Section::WorkExperience, "failed-fetch-list".to_string());

        let result = render_experience(&document, &DataClient::new(), &config).await;

        assert!(matches!(result, Err(FetchError::Status { .. })));
        assert_eq!(container.child_element_count(), 0);
    }
}
