use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::EventListener;
use portfolio_shared::{Disclosure, EntryView, RenderTarget, RevealStrategy, TagPlacement};
use wasm_bindgen::JsCast;
use web_sys::{Document, DocumentFragment, Element, HtmlElement, HtmlTemplateElement};

use super::logging::Logger;

const COMPONENT: &str = "entry-view";

/// Elements touched when an entry opens or closes
pub struct RevealHandles {
    article: Element,
    detail: Option<HtmlElement>,
    arrow: Option<Element>,
}

/// Reveals the detail region by animating `max-height` to its scroll height
#[derive(Clone, Copy, Debug, Default)]
pub struct MaxHeightReveal;

impl RevealStrategy<RevealHandles> for MaxHeightReveal {
    fn set_expanded(&self, handles: &mut RevealHandles, expanded: bool) {
        let _ = handles.article.class_list().toggle_with_force("open", expanded);
        if let Some(arrow) = &handles.arrow {
            let _ = arrow.class_list().toggle_with_force("open", expanded);
        }
        if let Some(detail) = &handles.detail {
            let height = if expanded {
                format!("{}px", detail.scroll_height())
            } else {
                "0px".to_string()
            };
            let _ = detail.style().set_property("max-height", &height);
            let _ = detail.set_attribute("aria-hidden", if expanded { "false" } else { "true" });
        }
    }
}

/// Entry view cloned from the page's `<template>`.
///
/// Regions are looked up by class (`.exp-title`, `.exp-subtitle`, ...). A
/// region missing from the template is skipped rather than treated as an error.
pub struct DomEntryView {
    document: Document,
    fragment: DocumentFragment,
    article: Element,
    listeners: Vec<EventListener>,
}

impl DomEntryView {
    fn region(&self, selector: &str) -> Option<Element> {
        self.article.query_selector(selector).ok().flatten()
    }

    fn set_region_text(&self, selector: &str, text: &str) {
        if let Some(element) = self.region(selector) {
            element.set_text_content(Some(text));
        }
    }

    fn skill_tags(&self, skills: &[String]) -> Option<Element> {
        let tags = self.document.create_element("div").ok()?;
        tags.set_class_name("exp-skills");
        for skill in skills {
            let tag = self.document.create_element("span").ok()?;
            tag.set_class_name("skill-tag");
            tag.set_text_content(Some(skill));
            tags.append_child(&tag).ok()?;
        }
        Some(tags)
    }

    fn toggle_listener(
        target: &Element,
        state: &Rc<RefCell<(Disclosure, RevealHandles)>>,
        stop_propagation: bool,
    ) -> EventListener {
        let state = state.clone();
        EventListener::new(target, "click", move |event| {
            if stop_propagation {
                event.stop_propagation();
            }
            let mut guard = state.borrow_mut();
            let (disclosure, handles) = &mut *guard;
            disclosure.activate_with(&MaxHeightReveal, handles);
        })
    }
}

impl EntryView for DomEntryView {
    fn set_title(&mut self, title: &str) {
        self.set_region_text(".exp-title", title);
    }

    fn append_honors(&mut self, suffix: &str) {
        let (Some(title), Ok(honors)) = (self.region(".exp-title"), self.document.create_element("span")) else {
            return;
        };
        honors.set_class_name("exp-honors");
        honors.set_text_content(Some(suffix));
        let _ = title.append_child(&honors);
    }

    fn set_subtitle(&mut self, subtitle: &str) {
        self.set_region_text(".exp-subtitle", subtitle);
    }

    fn set_location(&mut self, location: Option<&str>) {
        let Some(region) = self.region(".exp-location") else {
            return;
        };
        let style = region.dyn_ref::<HtmlElement>().map(HtmlElement::style);
        match location {
            Some(text) => {
                region.set_text_content(Some(text));
                if let Some(style) = style {
                    let _ = style.remove_property("display");
                }
            }
            None => {
                if let Some(style) = style {
                    let _ = style.set_property("display", "none");
                }
            }
        }
    }

    fn set_year(&mut self, year: &str) {
        self.set_region_text(".exp-year", year);
    }

    fn set_detail(&mut self, detail: &str) {
        self.set_region_text(".exp-detail-inner", detail);
    }

    fn insert_skill_tags(&mut self, skills: &[String], placement: TagPlacement) {
        let Some(tags) = self.skill_tags(skills) else {
            Logger::warn_with_component(COMPONENT, "could not build skill tags");
            return;
        };
        let location = match placement {
            TagPlacement::AfterLocation => self.region(".exp-location"),
            TagPlacement::Front => None,
        };
        let inserted = match location {
            Some(location) => location.after_with_node_1(&tags),
            None => self.article.prepend_with_node_1(&tags),
        };
        if let Err(err) = inserted {
            Logger::warn_with_component(COMPONENT, &format!("skill tags not inserted: {:?}", err));
        }
    }

    fn mark_subordinate(&mut self) {
        let _ = self.article.class_list().add_1("partner");
    }

    fn wire_disclosure(&mut self, disclosure: Disclosure) {
        let arrow = self.region(".exp-arrow");

        if !disclosure.is_interactive() {
            if let Some(arrow) = &arrow {
                let _ = arrow.class_list().add_1("disabled");
                let _ = arrow.set_attribute("aria-hidden", "true");
                if let Some(arrow) = arrow.dyn_ref::<HtmlElement>() {
                    let _ = arrow.style().set_property("pointer-events", "none");
                }
            }
            return;
        }

        if let Some(arrow) = &arrow {
            let _ = arrow.class_list().remove_1("disabled");
        }

        let mut handles = RevealHandles {
            article: self.article.clone(),
            detail: self
                .region(".exp-detail")
                .and_then(|el| el.dyn_into::<HtmlElement>().ok()),
            arrow: arrow.clone(),
        };
        MaxHeightReveal.set_expanded(&mut handles, disclosure.state().is_expanded());

        let state = Rc::new(RefCell::new((disclosure, handles)));
        if let Some(row) = self.region(".exp-row") {
            self.listeners.push(Self::toggle_listener(&row, &state, false));
        }
        // The arrow sits inside the row; stop the click there so it toggles once.
        if let Some(arrow) = &arrow {
            self.listeners.push(Self::toggle_listener(arrow, &state, true));
        }
    }
}

/// A named page container plus the entry template it is filled from
pub struct DomListTarget {
    document: Document,
    container: Element,
    template: Option<HtmlTemplateElement>,
    listeners: Vec<EventListener>,
}

impl DomListTarget {
    /// Look up the container and template. `None` when the container is absent.
    pub fn locate(document: &Document, container_id: &str, template_id: &str) -> Option<Self> {
        let container = document.get_element_by_id(container_id)?;
        let template = document
            .get_element_by_id(template_id)
            .and_then(|el| el.dyn_into::<HtmlTemplateElement>().ok());
        if template.is_none() {
            Logger::warn_with_component(COMPONENT, &format!("template #{} not found", template_id));
        }

        Some(Self {
            document: document.clone(),
            container,
            template,
            listeners: Vec::new(),
        })
    }

    pub fn container(&self) -> &Element {
        &self.container
    }

    /// Keep toggle handlers alive for the rest of the page's life
    pub fn persist(self) {
        for listener in self.listeners {
            listener.forget();
        }
    }
}

impl RenderTarget for DomListTarget {
    type View = DomEntryView;

    fn instantiate_entry_view(&mut self) -> Option<DomEntryView> {
        let template = self.template.as_ref()?;
        let fragment = template
            .content()
            .clone_node_with_deep(true)
            .ok()?
            .dyn_into::<DocumentFragment>()
            .ok()?;
        let article = fragment.first_element_child()?;

        Some(DomEntryView {
            document: self.document.clone(),
            fragment,
            article,
            listeners: Vec::new(),
        })
    }

    fn append_entry(&mut self, view: DomEntryView) {
        if let Err(err) = self.container.append_child(&view.fragment) {
            Logger::error_with_component(COMPONENT, &format!("failed to append entry: {:?}", err));
            return;
        }
        self.listeners.extend(view.listeners);
    }

    fn append_divider(&mut self) {
        let Ok(divider) = self.document.create_element("hr") else {
            return;
        };
        divider.set_class_name("divider short");
        let _ = self.container.append_child(&divider);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use portfolio_shared::{render_entries, Entry};
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    const TEMPLATE: &str = r#"<article class="exp-item">
        <div class="exp-row">
            <h3 class="exp-title"></h3>
            <span class="exp-subtitle"></span>
            <span class="exp-location"></span>
            <span class="exp-year"></span>
            <button class="exp-arrow"></button>
        </div>
        <div class="exp-detail"><p class="exp-detail-inner"></p></div>
    </article>"#;

    fn fixture(id: &str) -> (Document, DomListTarget) {
        let document = web_sys::window().unwrap().document().unwrap();
        let body = document.body().unwrap();

        let template = document.create_element("template").unwrap();
        template.set_id(&format!("{}-tpl", id));
        template.set_inner_html(TEMPLATE);
        body.append_child(&template).unwrap();

        let container = document.create_element("div").unwrap();
        container.set_id(id);
        body.append_child(&container).unwrap();

        let target = DomListTarget::locate(&document, id, &format!("{}-tpl", id)).unwrap();
        (document, target)
    }

    fn click(element: &Element) {
        element.dyn_ref::<HtmlElement>().unwrap().click();
    }

    #[wasm_bindgen_test]
    fn test_renders_entry_regions() {
        let (_document, mut target) = fixture("dom-regions");
        let entries = vec![
            Entry {
                position: Some("SWE".to_string()),
                year: Some("2023".to_string()),
                description: Some("Built things".to_string()),
                skills: vec!["Go".to_string(), "Rust".to_string()],
                location: Some("Oslo".to_string()),
                ..Entry::titled("Engineer")
            },
            Entry::titled("Second"),
        ];
        render_entries(&entries, &mut target);

        let container = target.container().clone();
        assert_eq!(container.query_selector_all("article").unwrap().length(), 2);
        assert_eq!(container.query_selector_all("hr.divider").unwrap().length(), 1);

        let first = container.first_element_child().unwrap();
        let subtitle = first.query_selector(".exp-subtitle").unwrap().unwrap();
        assert_eq!(subtitle.text_content().unwrap(), "SWE");

        let location = first.query_selector(".exp-location").unwrap().unwrap();
        let tags = location.next_element_sibling().unwrap();
        assert_eq!(tags.class_name(), "exp-skills");
        assert_eq!(tags.children().length(), 2);

        let second = container.last_element_child().unwrap();
        let arrow = second.query_selector(".exp-arrow").unwrap().unwrap();
        assert!(arrow.class_list().contains("disabled"));
        let location = second.query_selector(".exp-location").unwrap().unwrap();
        let display = location
            .dyn_ref::<HtmlElement>()
            .unwrap()
            .style()
            .get_property_value("display")
            .unwrap();
        assert_eq!(display, "none");
    }

    #[wasm_bindgen_test]
    fn test_arrow_click_toggles_once() {
        let (_document, mut target) = fixture("dom-toggle");
        let entries = vec![Entry {
            description: Some("Details".to_string()),
            ..Entry::titled("Toggle me")
        }];
        render_entries(&entries, &mut target);

        let article = target.container().first_element_child().unwrap();
        let arrow = article.query_selector(".exp-arrow").unwrap().unwrap();
        let row = article.query_selector(".exp-row").unwrap().unwrap();
        let detail = article.query_selector(".exp-detail").unwrap().unwrap();

        click(&arrow);
        assert!(article.class_list().contains("open"));
        assert_eq!(detail.get_attribute("aria-hidden").as_deref(), Some("false"));

        click(&row);
        assert!(!article.class_list().contains("open"));
        assert_eq!(detail.get_attribute("aria-hidden").as_deref(), Some("true"));

        target.persist();
    }
}
