use crate::config::{FALLBACK_HEADER_HEIGHT_PX, SECTION_SCROLL_GAP_PX};
use crate::easing::ease_in_out_quad;
use crate::frame::{elapsed_since, Frame, FrameAnimation};

pub const NAV_LINK_SELECTOR: &str = ".nav-link, .nav-links a";
pub const CTA_SELECTOR: &str = ".cta-button, .btn-primary, .hero-buttons .btn";
pub const HEADER_SELECTOR: &str = "nav, header";
const ANNOUNCEMENT_MS: u32 = 1_000;

/// Eased scroll from the offset sampled at creation to `target`.
#[derive(Clone, Debug)]
pub struct ScrollAnimation {
    start: f64,
    distance: f64,
    duration_ms: f64,
    started_at: Option<f64>,
}

impl ScrollAnimation {
    pub fn new(start: f64, target: f64, duration_ms: u32) -> Self {
        Self {
            start,
            distance: target - start,
            duration_ms: f64::from(duration_ms),
            started_at: None,
        }
    }
}

impl FrameAnimation for ScrollAnimation {
    type Output = f64;

    fn step(&mut self, timestamp_ms: f64) -> Frame<f64> {
        let elapsed = elapsed_since(&mut self.started_at, timestamp_ms);
        let time = elapsed.min(self.duration_ms);

        Frame {
            value: ease_in_out_quad(time, self.start, self.distance, self.duration_ms),
            finished: elapsed >= self.duration_ms,
        }
    }
}

/// Section offset minus the header and a small gap.
pub fn section_scroll_target(section_top: f64, header_height: Option<f64>) -> f64 {
    section_top - header_height.unwrap_or(FALLBACK_HEADER_HEIGHT_PX) - SECTION_SCROLL_GAP_PX
}

/// Section id from an in-page `#id` href.
pub fn fragment_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

pub fn navigation_announcement(heading: Option<&str>, section_id: &str) -> String {
    let name = heading
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .unwrap_or(section_id);
    format!("Navigated to {name} section")
}

#[cfg(target_arch = "wasm32")]
pub use browser::{announce_navigation, install, smooth_scroll_to};

#[cfg(target_arch = "wasm32")]
mod browser {
    use super::*;
    use crate::config::EnhancementConfig;
    use crate::dom::{self, create_element, offset_height, offset_top, query, query_all};
    use crate::error::EnhanceError;
    use crate::frame::drive;
    use crate::log::{log_event, LogLevel};
    use gloo_events::{EventListener, EventListenerOptions};
    use gloo_timers::callback::Timeout;
    use serde_json::json;
    use wasm_bindgen::JsValue;
    use web_sys::{window, Element};

    pub fn smooth_scroll_to(target: f64, duration_ms: u32) {
        let Some(win) = window() else {
            return;
        };
        let start = win.scroll_y().unwrap_or(0.0);

        drive(ScrollAnimation::new(start, target, duration_ms), move |offset| {
            win.scroll_to_with_x_and_y(0.0, offset);
        });
    }

    pub fn announce_navigation(section: &Element) -> Result<(), EnhanceError> {
        let Some(body) = dom::body() else {
            return Ok(());
        };

        let heading = dom::query_within(section, "h1, h2, h3").and_then(|h| h.text_content());
        let announcement = create_element("div", "sr-only")?;
        announcement.set_attribute("aria-live", "polite")?;
        announcement.set_attribute("aria-atomic", "true")?;
        announcement.set_text_content(Some(&navigation_announcement(
            heading.as_deref(),
            &section.id(),
        )));
        body.append_child(&announcement)?;

        Timeout::new(ANNOUNCEMENT_MS, move || announcement.remove()).forget();
        Ok(())
    }

    fn section_for(href: Option<String>) -> Option<(String, Element)> {
        let id = fragment_target(href.as_deref()?)?.to_string();
        let section = dom::document()?.get_element_by_id(&id)?;
        Some((id, section))
    }

    fn header_height() -> Option<f64> {
        query(HEADER_SELECTOR).as_ref().and_then(offset_height)
    }

    pub fn install(config: EnhancementConfig) -> Result<(), EnhanceError> {
        for link in query_all(NAV_LINK_SELECTOR) {
            let target = link.clone();
            EventListener::new_with_options(
                &link,
                "click",
                EventListenerOptions::enable_prevent_default(),
                move |event| {
                    event.prevent_default();
                    let Some((id, section)) = section_for(target.get_attribute("href")) else {
                        return;
                    };

                    let destination = section_scroll_target(offset_top(&section), header_height());
                    smooth_scroll_to(destination, config.scroll_duration_ms);

                    if let Some(history) = window().and_then(|w| w.history().ok()) {
                        let _ = history.push_state_with_url(
                            &JsValue::NULL,
                            "",
                            Some(&format!("#{id}")),
                        );
                    }

                    if let Err(error) = announce_navigation(&section) {
                        log_event(
                            config.log_level,
                            LogLevel::Warn,
                            "navigation.announce_failed",
                            json!({ "error": error.to_string() }),
                        );
                    }

                    log_event(
                        config.log_level,
                        LogLevel::Debug,
                        "navigation.scrolled",
                        json!({ "section": id, "target": destination }),
                    );
                },
            )
            .forget();
        }

        for button in query_all(CTA_SELECTOR) {
            let target = button.clone();
            EventListener::new_with_options(
                &button,
                "click",
                EventListenerOptions::enable_prevent_default(),
                move |event| {
                    let href = target.get_attribute("href");
                    if !href.as_deref().is_some_and(|href| href.starts_with('#')) {
                        return;
                    }
                    event.prevent_default();

                    if let Some((_, section)) = section_for(href) {
                        let destination =
                            section_scroll_target(offset_top(&section), header_height());
                        smooth_scroll_to(destination, config.cta_scroll_duration_ms);
                    }
                },
            )
            .forget();
        }

        Ok(())
    }
}
