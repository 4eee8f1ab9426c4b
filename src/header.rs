#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeaderState {
    Resting,
    ScrolledVisible,
    ScrolledHidden,
}

/// Decides the header state from scroll position and direction.
#[derive(Clone, Debug)]
pub struct HeaderScroll {
    resting_offset: f64,
    last_offset: f64,
}

impl HeaderScroll {
    pub fn new(resting_offset_px: u32) -> Self {
        Self {
            resting_offset: f64::from(resting_offset_px),
            last_offset: 0.0,
        }
    }

    pub fn evaluate(&mut self, offset: f64) -> HeaderState {
        let state = if offset <= self.resting_offset {
            HeaderState::Resting
        } else if offset > self.last_offset {
            HeaderState::ScrolledHidden
        } else {
            HeaderState::ScrolledVisible
        };

        self.last_offset = offset;
        state
    }
}

#[cfg(target_arch = "wasm32")]
pub use browser::install;

#[cfg(target_arch = "wasm32")]
mod browser {
    use super::*;
    use crate::config::EnhancementConfig;
    use crate::dom::{query, set_style};
    use crate::error::EnhanceError;
    use crate::log::{log_event, LogLevel};
    use crate::scroll::HEADER_SELECTOR;
    use crate::timing::throttle;
    use gloo_events::EventListener;
    use serde_json::json;
    use web_sys::{window, Element};

    fn apply(header: &Element, state: HeaderState) {
        let classes = header.class_list();
        match state {
            HeaderState::Resting => {
                set_style(header, "transform", "translateY(0)");
                let _ = classes.remove_1("scrolled");
                let _ = header.remove_attribute("aria-hidden");
            }
            HeaderState::ScrolledHidden => {
                set_style(header, "transform", "translateY(-100%)");
                let _ = header.set_attribute("aria-hidden", "true");
                let _ = classes.add_1("scrolled");
            }
            HeaderState::ScrolledVisible => {
                set_style(header, "transform", "translateY(0)");
                let _ = header.remove_attribute("aria-hidden");
                let _ = classes.add_1("scrolled");
            }
        }
    }

    pub fn install(config: EnhancementConfig) -> Result<(), EnhanceError> {
        let Some(header) = query(HEADER_SELECTOR) else {
            log_event(config.log_level, LogLevel::Debug, "header.skipped", json!({}));
            return Ok(());
        };
        let Some(win) = window() else {
            return Ok(());
        };

        let mut controller = HeaderScroll::new(config.header_offset_px);
        let scroll_source = win.clone();
        let mut on_scroll = throttle(config.header_throttle_ms, move |()| {
            let offset = scroll_source.scroll_y().unwrap_or(0.0);
            apply(&header, controller.evaluate(offset));
        });

        EventListener::new(&win, "scroll", move |_| on_scroll(())).forget();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn near_the_top_the_header_rests() {
        let mut header = HeaderScroll::new(100);
        assert_eq!(header.evaluate(40.0), HeaderState::Resting);
        assert_eq!(header.evaluate(100.0), HeaderState::Resting);
        assert_eq!(header.evaluate(0.0), HeaderState::Resting);
    }

    #[test]
    fn scrolling_down_hides_and_scrolling_up_shows() {
        let mut header = HeaderScroll::new(100);
        assert_eq!(header.evaluate(300.0), HeaderState::ScrolledHidden);
        assert_eq!(header.evaluate(450.0), HeaderState::ScrolledHidden);
        assert_eq!(header.evaluate(420.0), HeaderState::ScrolledVisible);
        assert_eq!(header.evaluate(420.0), HeaderState::ScrolledVisible);
        assert_eq!(header.evaluate(90.0), HeaderState::Resting);
    }

    #[test]
    fn last_offset_updates_even_while_resting() {
        let mut header = HeaderScroll::new(100);
        header.evaluate(80.0);
        assert_eq!(header.evaluate(101.0), HeaderState::ScrolledHidden);
    }
}
