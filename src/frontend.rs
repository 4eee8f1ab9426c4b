use crate::config::EnhancementConfig;
use crate::dom::{self, create_element};
use crate::error::EnhanceError;
use crate::log::{log_event, LogLevel};
use crate::{form, header, images, menu, motion, reveal, scroll, skills, typing};
use gloo_events::EventListener;
use js_sys::{Object, Reflect};
use serde_json::json;
use wasm_bindgen::{closure::Closure, JsValue};
use web_sys::{window, Element};

const API_NAME: &str = "PortfolioEnhancements";
const STYLESHEET_ID: &str = "portfolio-enhancements-styles";
const ENHANCEMENT_STYLES: &str = include_str!("../assets/enhancements.css");

type Installer = fn(EnhancementConfig) -> Result<(), EnhanceError>;

fn read_config() -> EnhancementConfig {
    let Some(body) = dom::body() else {
        return EnhancementConfig::default();
    };
    EnhancementConfig::from_attributes(|name| body.get_attribute(name))
}

fn inject_styles() -> Result<(), EnhanceError> {
    let Some(document) = dom::document() else {
        return Ok(());
    };
    if document.get_element_by_id(STYLESHEET_ID).is_some() {
        return Ok(());
    }
    let Some(head) = document.head() else {
        return Ok(());
    };

    let style = create_element("style", "")?;
    style.set_id(STYLESHEET_ID);
    style.set_text_content(Some(ENHANCEMENT_STYLES));
    head.append_child(&style)?;
    Ok(())
}

/// Returns false when the component failed and was skipped.
fn run_installer(config: EnhancementConfig, component: &str, install: Installer) -> bool {
    let Err(error) = install(config) else {
        return true;
    };
    log_event(
        config.log_level,
        LogLevel::Warn,
        &format!("{component}.failed"),
        json!({ "error": error.to_string() }),
    );
    false
}

fn expose_api(config: EnhancementConfig) -> Result<(), EnhanceError> {
    let Some(win) = window() else {
        return Ok(());
    };

    let api = Object::new();

    let smooth_scroll_to = Closure::<dyn Fn(f64, JsValue)>::new(move |target: f64, duration: JsValue| {
        let duration_ms = duration
            .as_f64()
            .filter(|value| value.is_finite() && *value >= 0.0)
            .map(|value| value as u32)
            .unwrap_or(config.scroll_duration_ms);
        scroll::smooth_scroll_to(target, duration_ms);
    });
    Reflect::set(&api, &JsValue::from_str("smoothScrollTo"), smooth_scroll_to.as_ref())?;
    smooth_scroll_to.forget();

    let announce = Closure::<dyn Fn(Element)>::new(move |section: Element| {
        if let Err(error) = scroll::announce_navigation(&section) {
            log_event(
                config.log_level,
                LogLevel::Warn,
                "navigation.announce_failed",
                json!({ "error": error.to_string() }),
            );
        }
    });
    Reflect::set(&api, &JsValue::from_str("announceNavigation"), announce.as_ref())?;
    announce.forget();

    let reinstalls: [(&str, &'static str, Installer); 2] = [
        ("initSkillBars", "skills", skills::install),
        ("initSectionRevealEffects", "reveal", reveal::install),
    ];
    for (method, component, install) in reinstalls {
        let rerun = Closure::<dyn Fn()>::new(move || {
            run_installer(config, component, install);
        });
        Reflect::set(&api, &JsValue::from_str(method), rerun.as_ref())?;
        rerun.forget();
    }

    Reflect::set(&win, &JsValue::from_str(API_NAME), &api)?;
    Ok(())
}

fn enhance_page() {
    let config = read_config();

    let installers: [(&str, Installer); 10] = [
        ("styles", |_| inject_styles()),
        ("motion", |_| {
            motion::apply_reduced_motion();
            Ok(())
        }),
        ("navigation", scroll::install),
        ("skills", skills::install),
        ("reveal", reveal::install),
        ("header", header::install),
        ("form", form::install),
        ("menu", menu::install),
        ("typing", typing::install),
        ("images", images::install),
    ];

    let failed: Vec<&str> = installers
        .into_iter()
        .filter(|&(component, install)| !run_installer(config, component, install))
        .map(|(component, _)| component)
        .collect();

    if let Err(error) = expose_api(config) {
        log_event(
            config.log_level,
            LogLevel::Warn,
            "api.failed",
            json!({ "error": error.to_string() }),
        );
    }

    log_event(
        config.log_level,
        LogLevel::Info,
        "enhancements.initialized",
        json!({ "failed": failed }),
    );
}

pub fn run() {
    let Some(document) = dom::document() else {
        return;
    };

    if document.ready_state() == "loading" {
        EventListener::once(&document, "DOMContentLoaded", |_| enhance_page()).forget();
    } else {
        enhance_page();
    }
}
