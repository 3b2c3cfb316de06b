//! DOM side of area filtering: visibility toggling and the
//! `areaFilterChanged` document event.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CustomEvent, CustomEventInit};

use views::area_filter::{AREA_CHANGED_EVENT, AREA_ID_ATTR, AreaFilter, FILTERABLE_SELECTORS};
use views::prefs::AreaSelection;

use super::dom;

/// Show or hide every filterable element for `filter`. Returns how many
/// elements ended up hidden.
pub fn apply_area_filter(filter: &AreaFilter) -> usize {
    let mut hidden = 0;
    for selector in FILTERABLE_SELECTORS {
        for el in dom::query_all(selector) {
            let visible = filter.shows(el.get_attribute(AREA_ID_ATTR).as_deref());
            dom::set_display(&el, visible);
            hidden += usize::from(!visible);
        }
    }
    hidden
}

fn detail_object(selection: &AreaSelection) -> Result<js_sys::Object, JsValue> {
    let detail = js_sys::Object::new();
    js_sys::Reflect::set(&detail, &"areaId".into(), &selection.area_id.as_str().into())?;
    js_sys::Reflect::set(&detail, &"areaName".into(), &selection.area_name.as_str().into())?;
    Ok(detail)
}

/// Announce `selection` to any page script listening on `document`.
pub fn dispatch_area_changed(selection: &AreaSelection) {
    let Some(document) = dom::document() else {
        return;
    };
    let result = detail_object(selection).and_then(|detail| {
        let init = CustomEventInit::new();
        init.set_detail(&detail);
        let event = CustomEvent::new_with_event_init_dict(AREA_CHANGED_EVENT, &init)?;
        document.dispatch_event(&event)
    });
    if let Err(err) = result {
        log::warn!("failed to dispatch {AREA_CHANGED_EVENT}: {err:?}");
    }
}

/// Read a detail field that other scripts may send as a string or number.
#[allow(clippy::cast_possible_truncation)]
fn detail_string(detail: &JsValue, key: &str) -> Option<String> {
    let value = js_sys::Reflect::get(detail, &key.into()).ok()?;
    if let Some(s) = value.as_string() {
        return Some(s);
    }
    value.as_f64().map(|n| (n as i64).to_string())
}

/// Call `handler` for every `areaFilterChanged` event carrying an area id.
pub fn listen_area_changed(handler: impl Fn(AreaSelection) + 'static) {
    let Some(document) = dom::document() else {
        return;
    };
    dom::on(&document, AREA_CHANGED_EVENT, move |event| {
        let Some(event) = event.dyn_ref::<CustomEvent>() else {
            return;
        };
        let detail = event.detail();
        let Some(area_id) = detail_string(&detail, "areaId") else {
            log::warn!("{AREA_CHANGED_EVENT} without areaId ignored");
            return;
        };
        let area_name = detail_string(&detail, "areaName").unwrap_or_default();
        handler(AreaSelection { area_id, area_name });
    });
}
