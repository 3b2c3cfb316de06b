//! Applies machine-card change plans to the server-rendered cards.
//!
//! DESIGN
//! ======
//! Dynamic lines are created once from static markup and then only have
//! their text updated, so repeated refreshes never stack duplicates. All
//! server-provided values go through `textContent`.

use web_sys::Element;

use views::card::{
    ACTIVITY_TIMESTAMP_ATTR, CardChange, SessionLine, card_element_id, rendered_activity_time,
    session_count_text,
};
use views::clock::Clock;

use super::dom;

/// A dynamic line inside a card body, found again through its marker class.
struct Fragment {
    tag: &'static str,
    marker: &'static str,
    class: &'static str,
    html: &'static str,
}

const USER_LINE: Fragment = Fragment {
    tag: "p",
    marker: "user-info",
    class: "user-info",
    html: r#"<i class="fas fa-user me-2"></i>User: <span class="current-user"></span>"#,
};

const ACTIVITY_LINE: Fragment = Fragment {
    tag: "p",
    marker: "activity-info",
    class: "activity-info",
    html: r#"<i class="fas fa-clock me-2"></i>Last Activity: <span class="last-activity"></span>"#,
};

const LEAD_BADGE: Fragment = Fragment {
    tag: "span",
    marker: "lead-badge",
    class: "badge bg-success ms-2 lead-badge",
    html: "LEAD",
};

const LEAD_LINE: Fragment = Fragment {
    tag: "p",
    marker: "lead-info",
    class: "lead-info",
    html: r#"<i class="fas fa-star me-2"></i>Lead: <span class="lead-name"></span>"#,
};

const NO_LEAD_LINE: Fragment = Fragment {
    tag: "p",
    marker: "no-lead-warning",
    class: "no-lead-warning text-danger",
    html: r#"<i class="fas fa-exclamation-triangle me-2"></i>No lead operator assigned"#,
};

const NO_USER_LINE: Fragment = Fragment {
    tag: "p",
    marker: "no-user-info",
    class: "no-user-info",
    html: r#"<i class="fas fa-user-slash me-2"></i>No active user"#,
};

const SESSION_COUNT: Fragment = Fragment {
    tag: "span",
    marker: "session-count",
    class: "badge bg-secondary session-count",
    html: "",
};

const SESSION_LIST: Fragment = Fragment {
    tag: "ul",
    marker: "session-list",
    class: "list-unstyled small mb-0 session-list",
    html: "",
};

fn selector(fragment: &Fragment) -> String {
    format!(".{}", fragment.marker)
}

fn ensure(parent: &Element, fragment: &Fragment) -> Option<Element> {
    if let Some(existing) = dom::first(parent, &selector(fragment)) {
        return Some(existing);
    }
    let el = dom::create(fragment.tag, fragment.class, fragment.html)?;
    dom::append(parent, &el);
    Some(el)
}

fn remove(parent: &Element, fragment: &Fragment) {
    if let Some(el) = dom::first(parent, &selector(fragment)) {
        el.remove();
    }
}

fn set_text(parent: &Element, selector: &str, text: &str) {
    if let Some(el) = dom::first(parent, selector) {
        el.set_text_content(Some(text));
    }
}

fn toggle(parent: &Element, fragment: &Fragment, present: bool) {
    if present {
        ensure(parent, fragment);
    } else {
        remove(parent, fragment);
    }
}

fn rebuild_sessions(body: &Element, lines: &[SessionLine]) {
    if let Some(count) = ensure(body, &SESSION_COUNT) {
        count.set_text_content(Some(&session_count_text(lines.len())));
    }
    let Some(list) = ensure(body, &SESSION_LIST) else {
        return;
    };
    list.set_inner_html("");
    for line in lines {
        let class = if line.is_lead { "session-item lead-session" } else { "session-item" };
        if let Some(item) = dom::create("li", class, "") {
            item.set_text_content(Some(&line.text()));
            dom::append(&list, &item);
        }
    }
}

/// Rewrite server-rendered `.last-activity[data-timestamp]` values as local
/// `HH:MM`. Runs once at mount, before the first refresh.
pub fn format_timestamps(clock: &Clock) {
    for el in dom::query_all(".last-activity") {
        let raw = el.get_attribute(ACTIVITY_TIMESTAMP_ATTR);
        if let Some(text) = rendered_activity_time(raw.as_deref(), clock) {
            el.set_text_content(Some(&text));
        }
    }
}

/// Whether the page has a card for `machine_id`.
pub fn card_exists(machine_id: &str) -> bool {
    dom::by_id(&card_element_id(machine_id)).is_some()
}

/// Apply `changes` to the card for `machine_id`, in order.
///
/// Returns `false` when the card is gone; parts of the card that are
/// missing from the markup are skipped.
pub fn apply_card_changes(machine_id: &str, changes: &[CardChange]) -> bool {
    let Some(root) = dom::by_id(&card_element_id(machine_id)) else {
        return false;
    };
    let card = if root.class_list().contains("machine-card") {
        Some(root.clone())
    } else {
        dom::first(&root, ".machine-card")
    };
    let body = dom::first(&root, ".card-body");

    for change in changes {
        match change {
            CardChange::CardClass(class) => {
                if let Some(card) = &card {
                    card.set_class_name(class);
                }
            }
            CardChange::IndicatorClass(class) => {
                if let Some(indicator) = dom::first(&root, ".machine-status") {
                    indicator.set_class_name(class);
                }
            }
            CardChange::Label(text) => set_text(&root, ".machine-status-text", text),
            CardChange::UserName(user) => {
                let Some(body) = &body else { continue };
                match user {
                    Some(name) => {
                        if let Some(line) = ensure(body, &USER_LINE) {
                            set_text(&line, ".current-user", name);
                        }
                    }
                    None => remove(body, &USER_LINE),
                }
            }
            CardChange::LastActivity(at) => {
                let Some(body) = &body else { continue };
                match at {
                    Some(hh_mm) => {
                        if let Some(line) = ensure(body, &ACTIVITY_LINE) {
                            set_text(&line, ".last-activity", hh_mm);
                        }
                    }
                    None => remove(body, &ACTIVITY_LINE),
                }
            }
            CardChange::Lead(lead) => {
                let Some(body) = &body else { continue };
                match lead {
                    Some(name) => {
                        if let Some(user_line) = dom::first(body, &selector(&USER_LINE)) {
                            ensure(&user_line, &LEAD_BADGE);
                        }
                        if let Some(line) = ensure(body, &LEAD_LINE) {
                            set_text(&line, ".lead-name", name);
                        }
                    }
                    None => {
                        remove(body, &LEAD_BADGE);
                        remove(body, &LEAD_LINE);
                    }
                }
            }
            CardChange::NoLeadWarning(present) => {
                if let Some(body) = &body {
                    toggle(body, &NO_LEAD_LINE, *present);
                }
            }
            CardChange::NoUser(present) => {
                if let Some(body) = &body {
                    toggle(body, &NO_USER_LINE, *present);
                }
            }
            CardChange::Sessions(sessions) => {
                let Some(body) = &body else { continue };
                match sessions {
                    Some(lines) => rebuild_sessions(body, lines),
                    None => {
                        remove(body, &SESSION_COUNT);
                        remove(body, &SESSION_LIST);
                    }
                }
            }
        }
    }
    true
}

/// Write the headline counters into the first three `.dashboard-stats h2`.
pub fn apply_stats(headline: [usize; 3]) {
    for (heading, value) in dom::query_all(".dashboard-stats h2").iter().zip(headline) {
        heading.set_text_content(Some(&value.to_string()));
    }
}
