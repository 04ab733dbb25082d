use std::cell::Cell;
use std::rc::Rc;

use gloo::events::EventListener;
use web_sys::{Document, Element};

use super::config::SiteConfig;
use super::logging::Logger;

const COMPONENT: &str = "header";

/// Open/closed state of the "connect" dropdown in the header
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    pub fn close(&mut self) {
        self.open = false;
    }
}

/// Listeners keeping the connect menu working; dropping it detaches them
pub struct ConnectMenu {
    listeners: Vec<EventListener>,
}

impl ConnectMenu {
    /// Wire the button and dropdown already present in the header markup
    pub fn attach(document: &Document, config: &SiteConfig) -> Option<Self> {
        let button = document.get_element_by_id(&config.connect_button_id)?;
        let menu = document.get_element_by_id(&config.connect_menu_id)?;
        let state = Rc::new(Cell::new(MenuState::default()));

        let on_button = {
            let state = state.clone();
            let menu = menu.clone();
            EventListener::new(&button, "click", move |event| {
                event.stop_propagation();
                let mut current = state.get();
                let open = current.toggle();
                state.set(current);
                sync_menu(&menu, open);
            })
        };

        let on_document = {
            let menu = menu.clone();
            EventListener::new(document, "click", move |_| {
                let mut current = state.get();
                current.close();
                state.set(current);
                sync_menu(&menu, false);
            })
        };

        // Clicks inside the dropdown never reach the document handler
        let on_menu = EventListener::new(&menu, "click", |event| event.stop_propagation());

        Logger::debug_with_component(COMPONENT, "connect menu attached");
        Some(Self {
            listeners: vec![on_button, on_document, on_menu],
        })
    }

    /// Keep the menu wired for the rest of the page's life
    pub fn persist(self) {
        for listener in self.listeners {
            listener.forget();
        }
    }
}

fn sync_menu(menu: &Element, open: bool) {
    let _ = menu.class_list().toggle_with_force("active", open);
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;
    use web_sys::HtmlElement;

    wasm_bindgen_test_configure!(run_in_browser);

    fn click(element: &Element) {
        element.dyn_ref::<HtmlElement>().unwrap().click();
    }

    #[test]
    fn test_menu_state_toggles() {
        let mut state = MenuState::default();
        assert!(!state.is_open());
        assert!(state.toggle());
        assert!(!state.toggle());
        state.toggle();
        state.close();
        assert!(!state.is_open());
    }

    #[wasm_bindgen_test]
    fn test_connect_menu_clicks() {
        let document = web_sys::window().unwrap().document().unwrap();
        let body = document.body().unwrap();

        let button = document.create_element("button").unwrap();
        button.set_id("menu-test-btn");
        let menu = document.create_element("div").unwrap();
        menu.set_id("menu-test-menu");
        let link = document.create_element("a").unwrap();
        menu.append_child(&link).unwrap();
        let elsewhere = document.create_element("p").unwrap();
        for element in [&button, &menu, &elsewhere] {
            body.append_child(element).unwrap();
        }

        let config = SiteConfig {
            connect_button_id: "menu-test-btn".to_string(),
            connect_menu_id: "menu-test-menu".to_string(),
            ..SiteConfig::default()
        };
        let attached = ConnectMenu::attach(&document, &config).unwrap();
        let is_active = || menu.class_list().contains("active");

        click(&button);
        assert!(is_active());

        click(&link);
        assert!(is_active());

        click(&elsewhere);
        assert!(!is_active());

        click(&button);
        click(&button);
        assert!(!is_active());

        drop(attached);
        click(&button);
        assert!(!is_active());
    }

    #[wasm_bindgen_test]
    fn test_attach_without_markup() {
        let document = web_sys::window().unwrap().document().unwrap();
        let config = SiteConfig {
            connect_button_id: "no-such-connect-btn".to_string(),
            ..SiteConfig::default()
        };
        assert!(ConnectMenu::attach(&document, &config).is_none());
    }
}
