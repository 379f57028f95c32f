// ============================================================================
// ELEMENT HELPERS - Funciones básicas para manipular DOM (web_sys)
// ============================================================================

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, Window};
use crate::dom::document::{DomError, EventTarget};

/// Obtener window global
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Obtener document
pub fn document() -> Option<Document> {
    window()?.document()
}

/// Query selector (primer elemento que coincide)
pub fn query_selector(selector: &str) -> Option<Element> {
    document()?.query_selector(selector).ok().flatten()
}

/// Query selector all (todos los elementos que coinciden)
pub fn query_selector_all(selector: &str) -> Vec<Element> {
    let Some(list) = document().and_then(|doc| doc.query_selector_all(selector).ok()) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Elemento obligatorio: error si no existe
pub fn require(selector: &str) -> Result<Element, DomError> {
    query_selector(selector).ok_or_else(|| DomError::NotFound(selector.to_string()))
}

pub fn as_html_element(element: &Element) -> Result<&HtmlElement, DomError> {
    element
        .dyn_ref::<HtmlElement>()
        .ok_or_else(|| DomError::Js("Element is not an HtmlElement".to_string()))
}

/// Copiar los atributos del elemento para entregarlos al listener
pub fn snapshot_attributes(element: &Element) -> EventTarget {
    let names = element.get_attribute_names();
    (0..names.length())
        .filter_map(|i| names.get(i).as_string())
        .fold(EventTarget::new(), |target, name| match element.get_attribute(&name) {
            Some(value) => target.with_attribute(&name, &value),
            None => target,
        })
}

pub fn js_error(value: wasm_bindgen::JsValue) -> DomError {
    DomError::Js(format!("{:?}", value))
}
