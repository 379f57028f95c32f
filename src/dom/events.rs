// ============================================================================
// EVENT HANDLING - Enlace de listeners del navegador a `Listener`
// ============================================================================
// GESTIÓN DE MEMORY LEAKS:
// - Listeners en elementos del DOM: cuando el router reemplaza el contenido de
//   #root, el navegador limpia los listeners asociados, así que forget() es
//   seguro.
// - Listeners globales (window): solo se registran UNA VEZ en App::start().
// ============================================================================

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, Element, Event};
use crate::dom::document::{DomEvent, EventKind, Listener};
use crate::dom::element::{js_error, snapshot_attributes};
use crate::dom::document::DomError;

fn wrap(element: &Element, listener: Listener) -> Closure<dyn FnMut(Event)> {
    let element = element.clone();
    Closure::wrap(Box::new(move |e: Event| {
        let event = DomEvent::new(snapshot_attributes(&element));
        listener(&event);
        if event.is_default_prevented() {
            e.prevent_default();
        }
    }) as Box<dyn FnMut(Event)>)
}

/// Registrar listener en un elemento
pub fn on_event(element: &Element, kind: EventKind, listener: Listener) -> Result<(), DomError> {
    let closure = wrap(element, listener);
    element
        .add_event_listener_with_callback(kind.as_str(), closure.as_ref().unchecked_ref())
        .map_err(js_error)?;
    // Nota: closure.forget() es necesario para mantener el closure vivo en Rust WASM
    closure.forget();
    Ok(())
}

/// Registrar listener de un solo uso (`{ once: true }`)
pub fn on_event_once(element: &Element, kind: EventKind, listener: Listener) -> Result<(), DomError> {
    let closure = wrap(element, listener);
    let options = AddEventListenerOptions::new();
    options.set_once(true);
    element
        .add_event_listener_with_callback_and_add_event_listener_options(
            kind.as_str(),
            closure.as_ref().unchecked_ref(),
            &options,
        )
        .map_err(js_error)?;
    closure.forget();
    Ok(())
}
