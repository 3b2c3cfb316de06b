//! Admin dialog population and advisory field validation.

use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlFormElement, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};

use views::admin::{
    AUTHORIZATION_LINK_SELECTOR, AUTHORIZATION_TOOLTIP, AdminDialog, FieldValue, FormFill,
};
use views::validation::{
    IP_ADDRESS_FEEDBACK, PasswordStrength, is_valid_ip_address, sanitize_machine_id, sanitize_rfid_tag,
};

use super::dom;

fn set_value(el: &Element, value: &str) {
    if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
        input.set_value(value);
    } else if let Some(area) = el.dyn_ref::<HtmlTextAreaElement>() {
        area.set_value(value);
    } else if let Some(select) = el.dyn_ref::<HtmlSelectElement>() {
        select.set_value(value);
    } else {
        log::warn!("#{} does not take a value", el.id());
    }
}

/// Write `fill` into its form. Missing fields are skipped.
pub fn apply_fill(fill: &FormFill) {
    for (id, value) in &fill.fields {
        let Some(el) = dom::by_id(id) else {
            continue;
        };
        match value {
            FieldValue::Value(v) => set_value(&el, v),
            FieldValue::Checked(checked) => {
                if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
                    input.set_checked(*checked);
                }
            }
            FieldValue::Text(text) => el.set_text_content(Some(text)),
        }
    }
    match dom::by_id(fill.form_id).and_then(|el| el.dyn_into::<HtmlFormElement>().ok()) {
        Some(form) => form.set_action(&fill.action),
        None => log::warn!("form #{} not found", fill.form_id),
    }
}

/// Populate the matching dialog whenever one of its trigger buttons is clicked.
pub fn bind_dialog_triggers() {
    for dialog in AdminDialog::ALL {
        for button in dom::query_all(dialog.trigger_selector()) {
            let source = button.clone();
            dom::on(&button, "click", move |_| {
                match dialog.fill(|name| source.get_attribute(name)) {
                    Some(fill) => apply_fill(&fill),
                    None => log::warn!("{} trigger without a row id", dialog.trigger_selector()),
                }
            });
        }
    }
}

fn input_by_id(id: &str) -> Option<HtmlInputElement> {
    dom::by_id(id)?.dyn_into::<HtmlInputElement>().ok()
}

/// Rewrite an input's value through `sanitize` on every keystroke.
fn bind_sanitizer(id: &str, sanitize: fn(&str) -> String) {
    let Some(input) = input_by_id(id) else {
        return;
    };
    let target = input.clone();
    dom::on(&input, "input", move |_| {
        let raw = target.value();
        let clean = sanitize(&raw);
        if clean != raw {
            target.set_value(&clean);
        }
    });
}

/// Feedback element with `class` among the siblings of `input`.
fn feedback_sibling(input: &Element, class: &str) -> Option<Element> {
    let parent = input.parent_element()?;
    dom::first(&parent, &format!(":scope > .{class}"))
}

fn bind_ip_validation() {
    for input in dom::query_all(r#"input[name="ip_address"]"#) {
        let Ok(field) = input.clone().dyn_into::<HtmlInputElement>() else {
            continue;
        };
        dom::on(&input, "blur", move |_| {
            let value = field.value();
            let invalid = !value.is_empty() && !is_valid_ip_address(&value);
            let classes = field.class_list();
            let existing = feedback_sibling(&field, "invalid-feedback");
            if invalid {
                if let Err(err) = classes.add_1("is-invalid") {
                    log::warn!("failed to flag ip address: {err:?}");
                }
                if existing.is_none() {
                    if let (Some(parent), Some(feedback)) =
                        (field.parent_element(), dom::create("div", "invalid-feedback", ""))
                    {
                        feedback.set_text_content(Some(IP_ADDRESS_FEEDBACK));
                        dom::append(&parent, &feedback);
                    }
                }
            } else {
                if let Err(err) = classes.remove_1("is-invalid") {
                    log::warn!("failed to clear ip address flag: {err:?}");
                }
                if let Some(feedback) = existing {
                    feedback.remove();
                }
            }
        });
    }
}

fn bind_password_strength() {
    let Some(input) = input_by_id("password") else {
        return;
    };
    let field = input.clone();
    dom::on(&input, "input", move |_| {
        if let Some(old) = feedback_sibling(&field, "password-strength") {
            old.remove();
        }
        let strength = PasswordStrength::evaluate(&field.value());
        let (Some(parent), Some(feedback)) =
            (field.parent_element(), dom::create("div", "password-strength form-text mt-1", ""))
        else {
            return;
        };
        feedback.set_text_content(Some(strength.message()));
        if let Err(err) = feedback.set_attribute("style", &format!("color: {}", strength.color())) {
            log::warn!("failed to colour password feedback: {err:?}");
        }
        dom::append(&parent, &feedback);
    });
}

fn bind_authorization_tooltips() {
    for link in dom::query_all(AUTHORIZATION_LINK_SELECTOR) {
        if let Err(err) = link.set_attribute("title", AUTHORIZATION_TOOLTIP) {
            log::warn!("failed to set authorization tooltip: {err:?}");
        }
    }
}

/// Attach every admin-page behaviour present in the current document.
pub fn bind_all() {
    bind_dialog_triggers();
    bind_sanitizer("machine_id", sanitize_machine_id);
    bind_sanitizer("rfid_tag", sanitize_rfid_tag);
    bind_ip_validation();
    bind_password_strength();
    bind_authorization_tooltips();
}
