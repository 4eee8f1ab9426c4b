use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;
use thiserror::Error;

pub const SUCCESS_MESSAGE: &str = "Thank you for your message! I will get back to you soon.";
pub const SENDING_LABEL: &str = "Sending...";
pub const DEFAULT_SUBMIT_LABEL: &str = "Send Message";

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles")
});

#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldId {
    Name,
    Email,
    Message,
    Other(String),
}

impl FieldId {
    pub const SUBMITTED: [FieldId; 3] = [FieldId::Name, FieldId::Email, FieldId::Message];

    /// Identifies a control by its `name`, then its `type`, then its tag.
    pub fn from_attributes(name: Option<&str>, input_type: Option<&str>, tag: &str) -> Self {
        let name = name.map(str::trim).filter(|name| !name.is_empty());
        match name.map(str::to_ascii_lowercase).as_deref() {
            Some("name") => return Self::Name,
            Some("email") => return Self::Email,
            Some("message") => return Self::Message,
            _ => {}
        }

        if input_type.is_some_and(|kind| kind.eq_ignore_ascii_case("email")) {
            return Self::Email;
        }
        if tag.eq_ignore_ascii_case("textarea") && name.is_none() {
            return Self::Message;
        }

        Self::Other(
            name.or(input_type)
                .unwrap_or("field")
                .to_string(),
        )
    }

    pub fn key(&self) -> &str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Message => "message",
            Self::Other(key) => key,
        }
    }

    pub fn label(&self) -> String {
        let key = self.key();
        let mut chars = key.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }

    fn checks_email_format(&self, input_type: Option<&str>) -> bool {
        matches!(self, Self::Email) || input_type.is_some_and(|kind| kind.eq_ignore_ascii_case("email"))
    }
}

/// Attributes of one `<input>` or `<textarea>` in the form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ControlAttributes {
    pub name: Option<String>,
    pub input_type: Option<String>,
    pub tag: String,
}

impl ControlAttributes {
    fn is_input(&self) -> bool {
        self.tag.eq_ignore_ascii_case("input")
    }

    fn has_type(&self, kind: &str) -> bool {
        self.input_type
            .as_deref()
            .is_some_and(|value| value.trim().eq_ignore_ascii_case(kind))
    }

    fn is_named(&self, wanted: &str) -> bool {
        self.name
            .as_deref()
            .is_some_and(|name| name.trim().eq_ignore_ascii_case(wanted))
    }

    /// Fallback match for a submitted field that no control names explicitly.
    fn stands_in_for(&self, field: &FieldId) -> bool {
        match field {
            FieldId::Name => self.is_input() && (self.input_type.is_none() || self.has_type("text")),
            FieldId::Email => self.is_input() && self.has_type("email"),
            FieldId::Message => self.tag.eq_ignore_ascii_case("textarea"),
            FieldId::Other(_) => false,
        }
    }

    fn unclaimed_id(&self) -> FieldId {
        let id = FieldId::from_attributes(self.name.as_deref(), self.input_type.as_deref(), &self.tag);
        match id {
            FieldId::Other(_) => id,
            submitted => FieldId::Other(
                self.name
                    .as_deref()
                    .map(str::trim)
                    .filter(|name| !name.is_empty())
                    .unwrap_or(submitted.key())
                    .to_string(),
            ),
        }
    }
}

/// Gives every control exactly one identity, in document order.
///
/// Each submitted field claims one control: the first one carrying its name,
/// otherwise the first unclaimed control of the matching kind. Blur and submit
/// both read from this assignment.
pub fn assign_field_ids(controls: &[ControlAttributes]) -> Vec<FieldId> {
    let mut claimed: Vec<Option<FieldId>> = vec![None; controls.len()];
    let mut unmatched = Vec::new();

    for field in FieldId::SUBMITTED {
        let position = controls.iter().position(|control| control.is_named(field.key()));
        match position {
            Some(index) => claimed[index] = Some(field),
            None => unmatched.push(field),
        }
    }

    for field in unmatched {
        let position = (0..controls.len())
            .find(|&index| claimed[index].is_none() && controls[index].stands_in_for(&field));
        if let Some(index) = position {
            claimed[index] = Some(field);
        }
    }

    claimed
        .into_iter()
        .zip(controls)
        .map(|(id, control)| id.unwrap_or_else(|| control.unclaimed_id()))
        .collect()
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum FieldError {
    #[error("{0} is required")]
    Required(String),
    #[error("Please enter a valid email address")]
    InvalidEmail,
}

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value)
}

/// Validates one trimmed value.
pub fn validate_field(
    field: &FieldId,
    value: &str,
    required: bool,
    input_type: Option<&str>,
) -> Result<(), FieldError> {
    let value = value.trim();

    if required && value.is_empty() {
        return Err(FieldError::Required(field.label()));
    }
    if field.checks_email_format(input_type) && !value.is_empty() && !is_valid_email(value) {
        return Err(FieldError::InvalidEmail);
    }
    Ok(())
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Submission {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl Submission {
    pub fn new(name: &str, email: &str, message: &str) -> Self {
        Self {
            name: name.trim().to_string(),
            email: email.trim().to_string(),
            message: message.trim().to_string(),
        }
    }

    fn value(&self, field: &FieldId) -> &str {
        match field {
            FieldId::Name => &self.name,
            FieldId::Email => &self.email,
            FieldId::Message => &self.message,
            FieldId::Other(_) => "",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation failed; nothing is sent.
    Rejected(Vec<(FieldId, FieldError)>),
    /// All fields valid; the submit control is now busy.
    Sending(Submission),
    /// A previous submission is still in flight.
    Busy,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitPhase {
    Idle,
    Sending,
}

/// Visible field errors and the submit phase. At most one error per field.
#[derive(Clone, Debug)]
pub struct ContactForm {
    errors: BTreeMap<FieldId, FieldError>,
    phase: SubmitPhase,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self {
            errors: BTreeMap::new(),
            phase: SubmitPhase::Idle,
        }
    }
}

impl ContactForm {
    pub fn error(&self, field: &FieldId) -> Option<&FieldError> {
        self.errors.get(field)
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    pub fn phase(&self) -> SubmitPhase {
        self.phase
    }

    /// Field lost focus: replace its error with the fresh verdict.
    pub fn blur(
        &mut self,
        field: FieldId,
        value: &str,
        required: bool,
        input_type: Option<&str>,
    ) -> Option<FieldError> {
        match validate_field(&field, value, required, input_type) {
            Ok(()) => {
                self.errors.remove(&field);
                None
            }
            Err(error) => {
                self.errors.insert(field, error.clone());
                Some(error)
            }
        }
    }

    /// Typing settled: drop the field's error. Returns whether one was shown.
    pub fn clear(&mut self, field: &FieldId) -> bool {
        self.errors.remove(field).is_some()
    }

    pub fn submit(&mut self, submission: Submission) -> SubmitOutcome {
        if self.phase == SubmitPhase::Sending {
            return SubmitOutcome::Busy;
        }

        let failures: Vec<(FieldId, FieldError)> = FieldId::SUBMITTED
            .iter()
            .filter_map(|field| {
                validate_field(field, submission.value(field), true, None)
                    .err()
                    .map(|error| (field.clone(), error))
            })
            .collect();

        for field in &FieldId::SUBMITTED {
            self.errors.remove(field);
        }

        if failures.is_empty() {
            self.phase = SubmitPhase::Sending;
            return SubmitOutcome::Sending(submission);
        }

        for (field, error) in &failures {
            self.errors.insert(field.clone(), error.clone());
        }
        SubmitOutcome::Rejected(failures)
    }

    /// The send completed: the form is reset and the banner text returned.
    pub fn finish_sending(&mut self) -> &'static str {
        self.phase = SubmitPhase::Idle;
        self.errors.clear();
        SUCCESS_MESSAGE
    }
}

#[cfg(target_arch = "wasm32")]
pub use browser::install;

#[cfg(target_arch = "wasm32")]
mod browser {
    use super::*;
    use crate::config::EnhancementConfig;
    use crate::dom::{create_element, field_value, query, query_all_within, query_within};
    use crate::error::EnhanceError;
    use crate::log::{log_event, LogLevel};
    use crate::timing::debounce;
    use gloo_events::{EventListener, EventListenerOptions};
    use gloo_timers::{callback::Timeout, future::TimeoutFuture};
    use serde_json::json;
    use std::{cell::RefCell, rc::Rc};
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::spawn_local;
    use web_sys::{Element, HtmlFormElement, HtmlInputElement};

    const FORM_SELECTOR: &str = ".contact-form, form";
    const SUBMIT_SELECTOR: &str = "button[type=\"submit\"], input[type=\"submit\"]";
    const CONTROL_SELECTOR: &str =
        "input:not([type=\"submit\"]):not([type=\"button\"]):not([type=\"hidden\"]), textarea";

    fn attributes(control: &Element) -> ControlAttributes {
        ControlAttributes {
            name: control.get_attribute("name"),
            input_type: control.get_attribute("type"),
            tag: control.tag_name(),
        }
    }

    fn is_error_message(element: &Element) -> bool {
        element.class_list().contains("field-error")
    }

    fn clear_field_error(field: &Element) {
        let _ = field.class_list().remove_1("error");
        let _ = field.remove_attribute("aria-invalid");

        while let Some(message) = field.next_element_sibling().filter(is_error_message) {
            message.remove();
        }
    }

    fn show_field_error(field: &Element, error: &FieldError) -> Result<(), EnhanceError> {
        clear_field_error(field);

        field.class_list().add_1("error")?;
        field.set_attribute("aria-invalid", "true")?;

        let message = create_element("div", "field-error")?;
        message.set_text_content(Some(&error.to_string()));
        message.set_attribute("role", "alert")?;
        message.set_attribute("aria-live", "polite")?;
        field.insert_adjacent_element("afterend", &message)?;
        Ok(())
    }

    struct SubmitControl {
        element: Element,
        original_label: String,
    }

    impl SubmitControl {
        fn find(form: &Element) -> Option<Self> {
            let element = query_within(form, SUBMIT_SELECTOR)?;
            let original_label = Self::label(&element)
                .filter(|label| !label.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_SUBMIT_LABEL.to_string());
            Some(Self {
                element,
                original_label,
            })
        }

        fn label(element: &Element) -> Option<String> {
            match element.dyn_ref::<HtmlInputElement>() {
                Some(input) => Some(input.value()),
                None => element.text_content(),
            }
        }

        fn set_label(&self, label: &str) {
            match self.element.dyn_ref::<HtmlInputElement>() {
                Some(input) => input.set_value(label),
                None => self.element.set_text_content(Some(label)),
            }
        }

        fn busy(&self) {
            let _ = self.element.set_attribute("disabled", "");
            let _ = self.element.set_attribute("aria-busy", "true");
            self.set_label(SENDING_LABEL);
        }

        fn restore(&self) {
            let _ = self.element.remove_attribute("disabled");
            let _ = self.element.remove_attribute("aria-busy");
            self.set_label(&self.original_label);
        }
    }

    fn show_success(form: &Element, message: &str, banner_ms: u32) -> Result<(), EnhanceError> {
        let banner = create_element("div", "success-message")?;
        banner.set_text_content(Some(message));
        banner.set_attribute("role", "alert")?;
        banner.set_attribute("aria-live", "polite")?;
        form.append_child(&banner)?;

        Timeout::new(banner_ms, move || banner.remove()).forget();
        Ok(())
    }

    struct FormContext {
        form: Element,
        fields: Vec<(FieldId, Element)>,
        state: RefCell<ContactForm>,
        submit: Option<SubmitControl>,
        config: EnhancementConfig,
    }

    impl FormContext {
        fn field(&self, id: &FieldId) -> Option<&Element> {
            self.fields
                .iter()
                .find(|(candidate, _)| candidate == id)
                .map(|(_, field)| field)
        }

        fn read(&self, id: &FieldId) -> String {
            self.field(id).and_then(field_value).unwrap_or_default()
        }

        fn warn(&self, event: &str, error: &EnhanceError) {
            log_event(
                self.config.log_level,
                LogLevel::Warn,
                event,
                json!({ "error": error.to_string() }),
            );
        }

        fn on_submit(self: &Rc<Self>) {
            let submission = Submission::new(
                &self.read(&FieldId::Name),
                &self.read(&FieldId::Email),
                &self.read(&FieldId::Message),
            );
            let outcome = self.state.borrow_mut().submit(submission);

            match outcome {
                SubmitOutcome::Busy => {}
                SubmitOutcome::Rejected(failures) => {
                    for id in &FieldId::SUBMITTED {
                        if let Some(field) = self.field(id) {
                            clear_field_error(field);
                        }
                    }
                    for (id, error) in &failures {
                        if let Some(field) = self.field(id) {
                            if let Err(dom_error) = show_field_error(field, error) {
                                self.warn("form.failed", &dom_error);
                            }
                        }
                    }
                    log_event(
                        self.config.log_level,
                        LogLevel::Info,
                        "form.rejected",
                        json!({
                            "fields": failures.iter().map(|(id, _)| id.key().to_string()).collect::<Vec<_>>(),
                        }),
                    );
                }
                SubmitOutcome::Sending(_) => {
                    for id in &FieldId::SUBMITTED {
                        if let Some(field) = self.field(id) {
                            clear_field_error(field);
                        }
                    }
                    if let Some(submit) = &self.submit {
                        submit.busy();
                    }

                    let context = Rc::clone(self);
                    spawn_local(async move {
                        // stands in for the network round trip
                        TimeoutFuture::new(context.config.submit_delay_ms).await;
                        context.finish();
                    });
                }
            }
        }

        fn finish(&self) {
            let message = self.state.borrow_mut().finish_sending();

            if let Err(error) = show_success(&self.form, message, self.config.banner_ms) {
                self.warn("form.failed", &error);
            }
            if let Some(form) = self.form.dyn_ref::<HtmlFormElement>() {
                form.reset();
            }
            if let Some(submit) = &self.submit {
                submit.restore();
            }

            log_event(self.config.log_level, LogLevel::Info, "form.sent", json!({}));
        }
    }

    fn watch_field(context: &Rc<FormContext>, id: FieldId, field: Element) {
        {
            let context = context.clone();
            let id = id.clone();
            let target = field.clone();
            EventListener::new(&field, "blur", move |_| {
                let value = field_value(&target).unwrap_or_default();
                let verdict = context.state.borrow_mut().blur(
                    id.clone(),
                    &value,
                    target.has_attribute("required"),
                    target.get_attribute("type").as_deref(),
                );

                match verdict {
                    Some(error) => {
                        if let Err(dom_error) = show_field_error(&target, &error) {
                            context.warn("form.failed", &dom_error);
                        }
                    }
                    None => clear_field_error(&target),
                }
            })
            .forget();
        }

        let context = context.clone();
        let target = field.clone();
        let mut clear_later = debounce(context.config.clear_error_debounce_ms, false, move |()| {
            context.state.borrow_mut().clear(&id);
            clear_field_error(&target);
        });
        EventListener::new(&field, "input", move |_| clear_later(())).forget();
    }

    pub fn install(config: EnhancementConfig) -> Result<(), EnhanceError> {
        let Some(form) = query(FORM_SELECTOR) else {
            log_event(config.log_level, LogLevel::Debug, "form.skipped", json!({}));
            return Ok(());
        };

        let controls = query_all_within(&form, CONTROL_SELECTOR);
        let ids = assign_field_ids(&controls.iter().map(attributes).collect::<Vec<_>>());
        let fields: Vec<(FieldId, Element)> = ids.into_iter().zip(controls).collect();

        let context = Rc::new(FormContext {
            submit: SubmitControl::find(&form),
            form: form.clone(),
            fields: fields.clone(),
            state: RefCell::new(ContactForm::default()),
            config,
        });

        for (id, field) in fields {
            watch_field(&context, id, field);
        }

        EventListener::new_with_options(
            &form,
            "submit",
            EventListenerOptions::enable_prevent_default(),
            move |event| {
                event.prevent_default();
                context.on_submit();
            },
        )
        .forget();

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn control(name: Option<&str>, input_type: Option<&str>, tag: &str) -> ControlAttributes {
        ControlAttributes {
            name: name.map(str::to_string),
            input_type: input_type.map(str::to_string),
            tag: tag.to_string(),
        }
    }

    #[test]
    fn unnamed_text_input_keeps_one_error_across_blur_and_submit() {
        let ids = assign_field_ids(&[
            control(None, Some("text"), "INPUT"),
            control(Some("email"), Some("email"), "INPUT"),
            control(Some("message"), None, "TEXTAREA"),
        ]);
        assert_eq!(ids, vec![FieldId::Name, FieldId::Email, FieldId::Message]);

        let mut form = ContactForm::default();
        form.blur(ids[0].clone(), "", true, Some("text"));
        form.submit(Submission::new("", "ada@example.com", "hi"));

        assert_eq!(form.error_count(), 1);
        assert_eq!(form.error(&FieldId::Name), Some(&FieldError::Required("Name".to_string())));
    }

    #[test]
    fn custom_named_textarea_keeps_one_error_across_blur_and_submit() {
        let ids = assign_field_ids(&[
            control(Some("name"), Some("text"), "INPUT"),
            control(Some("email"), Some("email"), "INPUT"),
            control(Some("body"), None, "TEXTAREA"),
        ]);
        assert_eq!(ids[2], FieldId::Message);

        let mut form = ContactForm::default();
        form.blur(ids[2].clone(), " ", true, None);
        form.submit(Submission::new("Ada", "ada@example.com", ""));

        assert_eq!(form.error_count(), 1);
        assert_eq!(
            form.error(&FieldId::Message),
            Some(&FieldError::Required("Message".to_string()))
        );
    }

    #[test]
    fn named_controls_win_over_earlier_stand_ins() {
        let ids = assign_field_ids(&[
            control(Some("email"), Some("text"), "INPUT"),
            control(Some("company"), Some("text"), "INPUT"),
            control(Some("name"), None, "INPUT"),
            control(Some("notes"), None, "TEXTAREA"),
            control(Some("message"), None, "TEXTAREA"),
            control(Some("email"), Some("email"), "INPUT"),
        ]);

        assert_eq!(
            ids,
            vec![
                FieldId::Email,
                FieldId::Other("company".to_string()),
                FieldId::Name,
                FieldId::Other("notes".to_string()),
                FieldId::Message,
                FieldId::Other("email".to_string()),
            ]
        );
    }

    #[test]
    fn every_submitted_field_is_claimed_at_most_once() {
        let ids = assign_field_ids(&[
            control(None, None, "INPUT"),
            control(None, Some("text"), "INPUT"),
            control(None, None, "TEXTAREA"),
            control(None, None, "TEXTAREA"),
        ]);

        assert_eq!(
            ids,
            vec![
                FieldId::Name,
                FieldId::Other("text".to_string()),
                FieldId::Message,
                FieldId::Other("message".to_string()),
            ]
        );
    }

    #[test]
    fn empty_submission_yields_three_errors() {
        let mut form = ContactForm::default();

        let outcome = form.submit(Submission::new("", "  ", "\n"));

        assert_eq!(
            outcome,
            SubmitOutcome::Rejected(vec![
                (FieldId::Name, FieldError::Required("Name".to_string())),
                (FieldId::Email, FieldError::Required("Email".to_string())),
                (FieldId::Message, FieldError::Required("Message".to_string())),
            ])
        );
        assert_eq!(form.error_count(), 3);
        assert_eq!(form.phase(), SubmitPhase::Idle);
    }

    #[test]
    fn malformed_email_is_the_only_error() {
        let mut form = ContactForm::default();

        let outcome = form.submit(Submission::new("Ada", "not-an-email", "hi"));

        assert_eq!(
            outcome,
            SubmitOutcome::Rejected(vec![(FieldId::Email, FieldError::InvalidEmail)])
        );
        assert_eq!(
            form.error(&FieldId::Email).map(ToString::to_string).as_deref(),
            Some("Please enter a valid email address")
        );
        assert_eq!(form.error_count(), 1);
    }

    #[test]
    fn valid_submission_sends_then_resets() {
        let mut form = ContactForm::default();
        form.blur(FieldId::Name, "", true, None);
        assert_eq!(form.error_count(), 1);

        let outcome = form.submit(Submission::new(" Ada ", "ada@example.com", "hi"));

        assert_eq!(
            outcome,
            SubmitOutcome::Sending(Submission {
                name: "Ada".to_string(),
                email: "ada@example.com".to_string(),
                message: "hi".to_string(),
            })
        );
        assert_eq!(form.error_count(), 0);
        assert_eq!(form.phase(), SubmitPhase::Sending);
        assert_eq!(
            form.submit(Submission::new("Ada", "ada@example.com", "again")),
            SubmitOutcome::Busy
        );

        assert_eq!(form.finish_sending(), SUCCESS_MESSAGE);
        assert_eq!(form.phase(), SubmitPhase::Idle);
    }

    #[test]
    fn resubmitting_replaces_previous_errors() {
        let mut form = ContactForm::default();
        form.submit(Submission::new("", "", ""));
        form.submit(Submission::new("Ada", "ada@", "hello"));

        assert_eq!(form.error_count(), 1);
        assert_eq!(form.error(&FieldId::Email), Some(&FieldError::InvalidEmail));
        assert_eq!(form.error(&FieldId::Name), None);
    }

    #[test]
    fn blur_only_requires_marked_fields() {
        let mut form = ContactForm::default();

        assert_eq!(form.blur(FieldId::Other("company".to_string()), "", false, Some("text")), None);
        assert_eq!(
            form.blur(FieldId::Other("company".to_string()), " ", true, Some("text")),
            Some(FieldError::Required("Company".to_string()))
        );
        assert_eq!(form.blur(FieldId::Email, "", false, Some("email")), None);
        assert_eq!(
            form.blur(FieldId::Email, "ada at example", false, Some("email")),
            Some(FieldError::InvalidEmail)
        );
        assert_eq!(form.error_count(), 2);
    }

    #[test]
    fn blur_replaces_error_for_the_same_field() {
        let mut form = ContactForm::default();
        form.blur(FieldId::Email, "", true, Some("email"));
        form.blur(FieldId::Email, "nope", true, Some("email"));

        assert_eq!(form.error_count(), 1);
        assert_eq!(form.error(&FieldId::Email), Some(&FieldError::InvalidEmail));

        assert!(form.clear(&FieldId::Email));
        assert!(!form.clear(&FieldId::Email));
    }

    #[test]
    fn email_pattern_accepts_simple_addresses_only() {
        assert!(is_valid_email("ada@example.com"));
        assert!(is_valid_email("a.b+c@mail.example.org"));
        assert!(!is_valid_email("ada@example"));
        assert!(!is_valid_email("ada example@mail.com"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("ada@@example.com"));
    }

    #[test]
    fn fields_are_identified_by_name_then_type_then_tag() {
        assert_eq!(FieldId::from_attributes(Some("Name"), Some("text"), "INPUT"), FieldId::Name);
        assert_eq!(FieldId::from_attributes(None, Some("email"), "INPUT"), FieldId::Email);
        assert_eq!(FieldId::from_attributes(None, None, "TEXTAREA"), FieldId::Message);
        assert_eq!(
            FieldId::from_attributes(Some("phone"), Some("tel"), "INPUT"),
            FieldId::Other("phone".to_string())
        );
        assert_eq!(
            FieldId::from_attributes(None, Some("tel"), "INPUT"),
            FieldId::Other("tel".to_string())
        );
    }
}
