//! Direct DOM work that happens outside of Yew's tree: the mount point and
//! third-party assets. Every helper is idempotent by element id.

use shared::DashboardConfig;
use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

/// Id of the element the dashboard is mounted into
pub const MOUNT_ROOT_ID: &str = "campsite-dashboard";

/// Attribute on the mount root pointing the dashboard at another API origin
pub const API_BASE_ATTR: &str = "data-api-base";

pub fn document() -> Result<Document, JsValue> {
    web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| JsValue::from_str("no document available"))
}

/// Return the dashboard root, creating it under `<body>` the first time.
pub fn ensure_mount_root() -> Result<Element, JsValue> {
    let document = document()?;
    if let Some(existing) = document.get_element_by_id(MOUNT_ROOT_ID) {
        return Ok(existing);
    }

    let root = document.create_element("div")?;
    root.set_id(MOUNT_ROOT_ID);
    document
        .body()
        .ok_or_else(|| JsValue::from_str("document has no body"))?
        .append_child(&root)?;
    Ok(root)
}

/// Endpoints for this page: the defaults, moved under the origin named by
/// `data-api-base` when the host page sets it on the mount root.
pub fn dashboard_config() -> DashboardConfig {
    let base = document()
        .ok()
        .and_then(|document| document.get_element_by_id(MOUNT_ROOT_ID))
        .and_then(|root| root.get_attribute(API_BASE_ATTR))
        .filter(|base| !base.trim().is_empty());

    match base {
        Some(base) => DashboardConfig::default().with_api_base(&base),
        None => DashboardConfig::default(),
    }
}

/// Add a `<link rel="stylesheet">` to `<head>` unless one with `id` exists.
/// Returns whether a new element was inserted.
pub fn ensure_stylesheet(id: &str, href: &str) -> Result<bool, JsValue> {
    let document = document()?;
    if document.get_element_by_id(id).is_some() {
        return Ok(false);
    }

    let link = document.create_element("link")?;
    link.set_id(id);
    link.set_attribute("rel", "stylesheet")?;
    link.set_attribute("type", "text/css")?;
    link.set_attribute("href", href)?;
    link.set_attribute("crossorigin", "")?;
    document
        .head()
        .ok_or_else(|| JsValue::from_str("document has no head"))?
        .append_child(&link)?;
    Ok(true)
}

/// Add an async `<script>` to `<body>` unless one with `id` exists.
/// Returns the element and whether it was just inserted.
pub fn ensure_script(id: &str, src: &str) -> Result<(Element, bool), JsValue> {
    let document = document()?;
    if let Some(existing) = document.get_element_by_id(id) {
        return Ok((existing, false));
    }

    let script = document.create_element("script")?;
    script.set_id(id);
    script.set_attribute("src", src)?;
    script.set_attribute("async", "")?;
    script.set_attribute("crossorigin", "")?;
    document
        .body()
        .ok_or_else(|| JsValue::from_str("document has no body"))?
        .append_child(&script)?;
    Ok((script, true))
}
