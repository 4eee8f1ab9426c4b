pub const LAZY_IMAGE_SELECTOR: &str = "img[data-src]";

/// Source to swap in for a deferred image, if it names one.
pub fn deferred_source(data_src: Option<String>) -> Option<String> {
    data_src
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

#[cfg(target_arch = "wasm32")]
pub use browser::install;

#[cfg(target_arch = "wasm32")]
mod browser {
    use super::*;
    use crate::config::EnhancementConfig;
    use crate::dom::query_all;
    use crate::error::EnhanceError;
    use crate::log::{log_event, LogLevel};
    use crate::visibility::{VisibilityOptions, VisibilityTrigger};
    use serde_json::json;
    use web_sys::Element;

    fn load(image: Element) {
        if let Some(source) = deferred_source(image.get_attribute("data-src")) {
            let _ = image.set_attribute("src", &source);
        }
        let _ = image.remove_attribute("data-src");
    }

    pub fn install(config: EnhancementConfig) -> Result<(), EnhanceError> {
        let images = query_all(LAZY_IMAGE_SELECTOR);
        if images.is_empty() {
            return Ok(());
        }

        let trigger = VisibilityTrigger::new(VisibilityOptions::LAZY_IMAGES, load)?;
        for image in &images {
            trigger.observe(image);
        }

        log_event(
            config.log_level,
            LogLevel::Debug,
            "images.deferred",
            json!({ "count": images.len() }),
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_sources_are_ignored() {
        assert_eq!(deferred_source(Some(" /img/hero.webp ".to_string())).as_deref(), Some("/img/hero.webp"));
        assert_eq!(deferred_source(Some("   ".to_string())), None);
        assert_eq!(deferred_source(None), None);
    }
}
