use crate::error::EnhanceError;
use js_sys::{Function, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{window, Document, Element, HtmlElement, HtmlInputElement, HtmlTextAreaElement};

pub fn document() -> Option<Document> {
    window()?.document()
}

/// True when `window[name]` exists and is callable.
pub fn host_supports(name: &str) -> bool {
    let Some(win) = window() else {
        return false;
    };

    Reflect::get(&win, &JsValue::from_str(name))
        .map(|value| value.is_instance_of::<Function>())
        .unwrap_or(false)
}

pub fn now_ms() -> f64 {
    window()
        .and_then(|w| w.performance())
        .map(|performance| performance.now())
        .unwrap_or_else(js_sys::Date::now)
}

pub fn query(selector: &str) -> Option<Element> {
    document()?.query_selector(selector).ok().flatten()
}

pub fn query_all(selector: &str) -> Vec<Element> {
    let Some(list) = document().and_then(|d| d.query_selector_all(selector).ok()) else {
        return Vec::new();
    };

    (0..list.length())
        .filter_map(|index| list.item(index))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub fn query_within(root: &Element, selector: &str) -> Option<Element> {
    root.query_selector(selector).ok().flatten()
}

pub fn query_all_within(root: &Element, selector: &str) -> Vec<Element> {
    let Ok(list) = root.query_selector_all(selector) else {
        return Vec::new();
    };

    (0..list.length())
        .filter_map(|index| list.item(index))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub fn set_style(element: &Element, property: &str, value: &str) {
    if let Some(element) = element.dyn_ref::<HtmlElement>() {
        let _ = element.style().set_property(property, value);
    }
}

pub fn clear_style(element: &Element, property: &str) {
    if let Some(element) = element.dyn_ref::<HtmlElement>() {
        let _ = element.style().remove_property(property);
    }
}

pub fn create_element(tag: &str, class_name: &str) -> Result<Element, EnhanceError> {
    let document = document().ok_or_else(|| EnhanceError::Dom("no document".to_string()))?;
    let element = document.create_element(tag)?;
    if !class_name.is_empty() {
        element.set_class_name(class_name);
    }
    Ok(element)
}

pub fn body() -> Option<HtmlElement> {
    document()?.body()
}

pub fn viewport_width() -> f64 {
    window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|value| value.as_f64())
        .unwrap_or(1280.0)
}

/// Current text of an `<input>` or `<textarea>`.
pub fn field_value(field: &Element) -> Option<String> {
    if let Some(input) = field.dyn_ref::<HtmlInputElement>() {
        return Some(input.value());
    }
    field
        .dyn_ref::<HtmlTextAreaElement>()
        .map(HtmlTextAreaElement::value)
}

pub fn offset_top(element: &Element) -> f64 {
    element
        .dyn_ref::<HtmlElement>()
        .map(|element| f64::from(element.offset_top()))
        .unwrap_or(0.0)
}

pub fn offset_height(element: &Element) -> Option<f64> {
    element
        .dyn_ref::<HtmlElement>()
        .map(|element| f64::from(element.offset_height()))
        .filter(|height| *height > 0.0)
}
