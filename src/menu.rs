#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuState {
    Closed,
    Open,
}

impl MenuState {
    pub fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }

    pub fn aria_expanded(self) -> &'static str {
        if self.is_open() {
            "true"
        } else {
            "false"
        }
    }
}

/// Open/closed state of the small-screen navigation menu.
///
/// Every transition reports whether the state actually changed so the DOM is
/// only touched when needed.
#[derive(Clone, Debug)]
pub struct MobileMenu {
    state: MenuState,
    breakpoint_px: f64,
}

impl MobileMenu {
    pub fn new(breakpoint_px: u32) -> Self {
        Self {
            state: MenuState::Closed,
            breakpoint_px: f64::from(breakpoint_px),
        }
    }

    pub fn state(&self) -> MenuState {
        self.state
    }

    pub fn toggle(&mut self) -> MenuState {
        self.state = match self.state {
            MenuState::Closed => MenuState::Open,
            MenuState::Open => MenuState::Closed,
        };
        self.state
    }

    /// A navigation link inside the open menu was clicked.
    pub fn link_activated(&mut self) -> bool {
        self.close()
    }

    /// Viewport width settled after a resize.
    pub fn viewport_resized(&mut self, width_px: f64) -> bool {
        if width_px > self.breakpoint_px {
            return self.close();
        }
        false
    }

    fn close(&mut self) -> bool {
        let changed = self.state.is_open();
        self.state = MenuState::Closed;
        changed
    }
}

#[cfg(target_arch = "wasm32")]
pub use browser::install;

#[cfg(target_arch = "wasm32")]
mod browser {
    use super::*;
    use crate::config::EnhancementConfig;
    use crate::dom::{self, clear_style, create_element, query, query_within, set_style};
    use crate::error::EnhanceError;
    use crate::log::{log_event, LogLevel};
    use crate::timing::debounce;
    use gloo_events::EventListener;
    use serde_json::json;
    use std::{cell::RefCell, rc::Rc};
    use wasm_bindgen::JsCast;
    use web_sys::{window, Element};

    const MENU_ID: &str = "nav-menu";

    struct MenuView {
        menu: Element,
        button: Element,
    }

    impl MenuView {
        fn render(&self, state: MenuState) {
            let open = state.is_open();
            let _ = self.menu.class_list().toggle_with_force("mobile-active", open);
            let _ = self.button.class_list().toggle_with_force("active", open);
            let _ = self.button.set_attribute("aria-expanded", state.aria_expanded());

            if let Some(body) = dom::body() {
                if open {
                    set_style(&body, "overflow", "hidden");
                } else {
                    clear_style(&body, "overflow");
                }
            }
        }
    }

    fn ensure_button(nav: &Element) -> Result<Element, EnhanceError> {
        if let Some(button) = query_within(nav, ".mobile-menu-btn") {
            return Ok(button);
        }

        let button = create_element("button", "mobile-menu-btn")?;
        for _ in 0..3 {
            button.append_child(&create_element("span", "hamburger-line")?)?;
        }
        button.set_attribute("type", "button")?;
        button.set_attribute("aria-label", "Toggle navigation menu")?;
        button.set_attribute("aria-expanded", "false")?;
        button.set_attribute("aria-controls", MENU_ID)?;
        nav.append_child(&button)?;
        Ok(button)
    }

    fn log_change(config: EnhancementConfig, state: MenuState, reason: &str) {
        log_event(
            config.log_level,
            LogLevel::Debug,
            "menu.state_changed",
            json!({ "open": state.is_open(), "reason": reason }),
        );
    }

    pub fn install(config: EnhancementConfig) -> Result<(), EnhanceError> {
        let (Some(nav), Some(menu)) = (query("nav"), query(".nav-menu, .nav-links")) else {
            log_event(config.log_level, LogLevel::Debug, "menu.skipped", json!({}));
            return Ok(());
        };

        let button = ensure_button(&nav)?;
        menu.set_id(MENU_ID);

        let view = Rc::new(MenuView { menu, button });
        let controller = Rc::new(RefCell::new(MobileMenu::new(config.menu_breakpoint_px)));

        {
            let button = view.button.clone();
            let view = view.clone();
            let controller = controller.clone();
            EventListener::new(&button, "click", move |_| {
                let state = controller.borrow_mut().toggle();
                view.render(state);
                log_change(config, state, "toggle");
            })
            .forget();
        }

        {
            let menu = view.menu.clone();
            let view = view.clone();
            let controller = controller.clone();
            EventListener::new(&menu, "click", move |event| {
                let is_nav_link = event
                    .target()
                    .and_then(|target| target.dyn_into::<Element>().ok())
                    .is_some_and(|target| target.class_list().contains("nav-link"));
                if !is_nav_link {
                    return;
                }

                let changed = controller.borrow_mut().link_activated();
                if changed {
                    view.render(MenuState::Closed);
                    log_change(config, MenuState::Closed, "link");
                }
            })
            .forget();
        }

        let Some(win) = window() else {
            return Ok(());
        };
        let mut on_resize = debounce(config.resize_debounce_ms, false, move |()| {
            let changed = controller.borrow_mut().viewport_resized(dom::viewport_width());
            if changed {
                view.render(MenuState::Closed);
                log_change(config, MenuState::Closed, "resize");
            }
        });
        EventListener::new(&win, "resize", move |_| on_resize(())).forget();

        Ok(())
    }
}
