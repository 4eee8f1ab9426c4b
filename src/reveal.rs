pub const REVEAL_SELECTOR: &str = ".hero-content, .about-content, .project-card, .stat, \
    .contact-form, .section-title, .hero-image, .hero-text, .about-text, .about-stats";

const STAGGER_STEP_SECONDS: f64 = 0.1;
const EASE_CURVE: &str = "cubic-bezier(0.4, 0, 0.2, 1)";
pub const HIDDEN_TRANSFORM: &str = "translateY(30px)";

/// Settled transform depends on what kind of element is revealed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealKind {
    Plain,
    Hero,
    Card,
}

impl RevealKind {
    pub fn from_classes(has_class: impl Fn(&str) -> bool) -> Self {
        if has_class("project-card") {
            Self::Card
        } else if has_class("hero-content") {
            Self::Hero
        } else {
            Self::Plain
        }
    }

    pub fn settled_transform(self) -> &'static str {
        match self {
            Self::Plain => "translateY(0)",
            Self::Hero => "translateY(0) scale(1)",
            Self::Card => "translateY(0) rotateX(0)",
        }
    }
}

/// Stagger for the element at `index` in the originally queried list.
pub fn stagger_delay_seconds(index: usize) -> f64 {
    index as f64 * STAGGER_STEP_SECONDS
}

pub fn transition_for(index: usize) -> String {
    let delay = format_seconds(stagger_delay_seconds(index));
    format!("opacity 0.8s {EASE_CURVE} {delay}s, transform 0.8s {EASE_CURVE} {delay}s")
}

fn format_seconds(value: f64) -> String {
    let rounded = (value * 10.0).round() / 10.0;
    format!("{rounded}")
}

#[cfg(target_arch = "wasm32")]
pub use browser::install;

#[cfg(target_arch = "wasm32")]
mod browser {
    use super::*;
    use crate::config::EnhancementConfig;
    use crate::dom::{query_all, set_style};
    use crate::error::EnhanceError;
    use crate::log::{log_event, LogLevel};
    use crate::visibility::{VisibilityOptions, VisibilityTrigger};
    use serde_json::json;
    use web_sys::Element;

    fn reveal(element: Element) {
        let classes = element.class_list();
        let kind = RevealKind::from_classes(|name| classes.contains(name));

        set_style(&element, "opacity", "1");
        set_style(&element, "transform", kind.settled_transform());
        let _ = classes.add_1("revealed");
    }

    pub fn install(config: EnhancementConfig) -> Result<(), EnhanceError> {
        let elements = query_all(REVEAL_SELECTOR);
        if elements.is_empty() {
            log_event(config.log_level, LogLevel::Debug, "reveal.skipped", json!({}));
            return Ok(());
        }

        let trigger = VisibilityTrigger::new(VisibilityOptions::REVEAL, reveal)?;
        for (index, element) in elements.iter().enumerate() {
            set_style(element, "opacity", "0");
            set_style(element, "transform", HIDDEN_TRANSFORM);
            set_style(element, "transition", &transition_for(index));
            element.class_list().add_1("reveal-element")?;
            trigger.observe(element);
        }

        log_event(
            config.log_level,
            LogLevel::Debug,
            "reveal.registered",
            json!({ "count": elements.len() }),
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stagger_grows_by_a_tenth_of_a_second() {
        assert_eq!(stagger_delay_seconds(0), 0.0);
        assert_eq!(stagger_delay_seconds(4), 0.4);
    }

    #[test]
    fn transition_carries_delay_on_both_properties() {
        assert_eq!(
            transition_for(3),
            "opacity 0.8s cubic-bezier(0.4, 0, 0.2, 1) 0.3s, \
             transform 0.8s cubic-bezier(0.4, 0, 0.2, 1) 0.3s"
        );
        assert!(transition_for(0).ends_with(" 0s"));
    }

    #[test]
    fn kind_is_picked_from_classes() {
        assert_eq!(RevealKind::from_classes(|c| c == "project-card"), RevealKind::Card);
        assert_eq!(RevealKind::from_classes(|c| c == "hero-content"), RevealKind::Hero);
        assert_eq!(RevealKind::from_classes(|_| false), RevealKind::Plain);
        assert_eq!(RevealKind::Card.settled_transform(), "translateY(0) rotateX(0)");
    }
}
