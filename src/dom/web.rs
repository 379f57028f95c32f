// ============================================================================
// WEB DOM - Implementación de `Dom` sobre web_sys
// ============================================================================

use js_sys::{Array, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use crate::dom::document::{Dom, DomError, EventKind, Listener};
use crate::dom::element::{as_html_element, document, js_error, query_selector, query_selector_all, require, window};
use crate::dom::events::{on_event, on_event_once};
use crate::models::SelectedFile;

#[derive(Clone, Copy, Default)]
pub struct WebDom;

impl WebDom {
    pub fn new() -> Self {
        Self
    }

    /// `new bootstrap.Modal(element).show()`; `None` si Bootstrap no está cargado
    fn bootstrap_show(element: &web_sys::Element) -> Option<Result<(), DomError>> {
        let win = window()?;
        let bootstrap = Reflect::get(&win, &JsValue::from_str("bootstrap")).ok()?;
        if bootstrap.is_undefined() {
            return None;
        }
        let constructor = Reflect::get(&bootstrap, &JsValue::from_str("Modal"))
            .ok()?
            .dyn_into::<js_sys::Function>()
            .ok()?;
        let result = Reflect::construct(&constructor, &Array::of1(element))
            .and_then(|modal| {
                let show = Reflect::get(&modal, &JsValue::from_str("show"))?
                    .dyn_into::<js_sys::Function>()?;
                show.call0(&modal)
            })
            .map(|_| ())
            .map_err(js_error);
        Some(result)
    }
}

impl Dom for WebDom {
    fn set_inner_html(&self, selector: &str, html: &str) -> Result<(), DomError> {
        require(selector)?.set_inner_html(html);
        Ok(())
    }

    fn inner_html(&self, selector: &str) -> Option<String> {
        query_selector(selector).map(|el| el.inner_html())
    }

    fn set_style(&self, selector: &str, property: &str, value: &str) -> Result<(), DomError> {
        for element in query_selector_all(selector) {
            as_html_element(&element)?
                .style()
                .set_property(property, value)
                .map_err(js_error)?;
        }
        Ok(())
    }

    fn add_class(&self, selector: &str, class: &str) -> Result<(), DomError> {
        require(selector)?.class_list().add_1(class).map_err(js_error)
    }

    fn remove_class(&self, selector: &str, class: &str) -> Result<(), DomError> {
        require(selector)?.class_list().remove_1(class).map_err(js_error)
    }

    fn value(&self, selector: &str) -> Option<String> {
        let element = query_selector(selector)?;
        if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
            return Some(input.value());
        }
        if let Some(select) = element.dyn_ref::<HtmlSelectElement>() {
            return Some(select.value());
        }
        element.dyn_ref::<HtmlTextAreaElement>().map(|area| area.value())
    }

    fn set_value(&self, selector: &str, value: &str) -> Result<(), DomError> {
        let element = require(selector)?;
        if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
            input.set_value(value);
        } else if let Some(select) = element.dyn_ref::<HtmlSelectElement>() {
            select.set_value(value);
        } else if let Some(area) = element.dyn_ref::<HtmlTextAreaElement>() {
            area.set_value(value);
        } else {
            return Err(DomError::Js(format!("{} has no value", selector)));
        }
        Ok(())
    }

    fn width(&self, selector: &str) -> Option<f64> {
        query_selector(selector).map(|el| el.get_bounding_client_rect().width())
    }

    fn selected_file(&self, selector: &str) -> Option<SelectedFile> {
        let input = query_selector(selector)?.dyn_into::<HtmlInputElement>().ok()?;
        let file = input.files()?.get(0)?;
        Some(SelectedFile {
            name: file.name(),
            mime_type: file.type_(),
            handle: Some(file),
        })
    }

    fn exists(&self, selector: &str) -> bool {
        query_selector(selector).is_some()
    }

    fn listen(&self, selector: &str, kind: EventKind, listener: Listener) -> Result<usize, DomError> {
        let elements = query_selector_all(selector);
        for element in &elements {
            on_event(element, kind, listener.clone())?;
        }
        Ok(elements.len())
    }

    fn listen_once(&self, selector: &str, kind: EventKind, listener: Listener) -> Result<(), DomError> {
        on_event_once(&require(selector)?, kind, listener)
    }

    fn show_modal(&self, selector: &str) -> Result<(), DomError> {
        let element = require(selector)?;
        if let Some(result) = Self::bootstrap_show(&element) {
            return result;
        }
        // Sin Bootstrap: mostrar con CSS y emitir el evento "shown" a mano
        log::warn!("⚠️ [DOM] Bootstrap no disponible, abriendo {} sin transición", selector);
        element.class_list().add_1("show").map_err(js_error)?;
        as_html_element(&element)?
            .style()
            .set_property("display", "block")
            .map_err(js_error)?;
        let shown = web_sys::Event::new(EventKind::ModalShown.as_str()).map_err(js_error)?;
        element.dispatch_event(&shown).map_err(js_error)?;
        Ok(())
    }

    fn alert(&self, message: &str) {
        if let Some(win) = window() {
            if let Err(e) = win.alert_with_message(message) {
                log::error!("❌ [DOM] alert() falló: {:?}", e);
            }
        }
    }

    fn set_body_background(&self, color: &str) {
        let Some(body) = document().and_then(|doc| doc.body()) else {
            return;
        };
        if let Err(e) = body.style().set_property("background-color", color) {
            log::warn!("⚠️ [DOM] No se pudo cambiar el fondo: {:?}", e);
        }
    }
}
