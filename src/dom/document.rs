// ============================================================================
// DOCUMENT - Abstracción del DOM que usan los controladores de página
// ============================================================================
// Los viewmodels nunca tocan web_sys directamente: reciben un `Rc<dyn Dom>`.
// En el navegador es `WebDom`; en tests es un DOM en memoria.
// ============================================================================

use std::cell::Cell;
use std::collections::BTreeMap;
use std::rc::Rc;
use crate::models::SelectedFile;

/// Tipos de evento que manejan las páginas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EventKind {
    Click,
    Submit,
    Change,
    /// `shown.bs.modal` (fin de la transición de apertura del modal)
    ModalShown,
}

impl EventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::Click => "click",
            EventKind::Submit => "submit",
            EventKind::Change => "change",
            EventKind::ModalShown => "shown.bs.modal",
        }
    }
}

/// Elemento sobre el que se disparó el evento (solo sus atributos)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventTarget {
    attributes: BTreeMap<String, String>,
}

impl EventTarget {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_attribute(mut self, name: &str, value: &str) -> Self {
        self.attributes.insert(name.to_string(), value.to_string());
        self
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }
}

/// Evento entregado a un listener
#[derive(Debug, Default)]
pub struct DomEvent {
    target: EventTarget,
    default_prevented: Cell<bool>,
}

impl DomEvent {
    pub fn new(target: EventTarget) -> Self {
        Self {
            target,
            default_prevented: Cell::new(false),
        }
    }

    pub fn target(&self) -> &EventTarget {
        &self.target
    }

    pub fn prevent_default(&self) {
        self.default_prevented.set(true);
    }

    pub fn is_default_prevented(&self) -> bool {
        self.default_prevented.get()
    }
}

pub type Listener = Rc<dyn Fn(&DomEvent)>;

pub fn listener(handler: impl Fn(&DomEvent) + 'static) -> Listener {
    Rc::new(handler)
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomError {
    #[error("Element not found: {0}")]
    NotFound(String),
    #[error("JS error: {0}")]
    Js(String),
}

pub trait Dom {
    /// Reemplazar el contenido HTML del primer elemento que coincide
    fn set_inner_html(&self, selector: &str, html: &str) -> Result<(), DomError>;

    fn inner_html(&self, selector: &str) -> Option<String>;

    /// Establecer una propiedad CSS inline en todos los elementos que coinciden
    fn set_style(&self, selector: &str, property: &str, value: &str) -> Result<(), DomError>;

    fn add_class(&self, selector: &str, class: &str) -> Result<(), DomError>;

    fn remove_class(&self, selector: &str, class: &str) -> Result<(), DomError>;

    /// Valor de un input/select/textarea
    fn value(&self, selector: &str) -> Option<String>;

    fn set_value(&self, selector: &str, value: &str) -> Result<(), DomError>;

    /// Ancho renderizado (getBoundingClientRect) en px
    fn width(&self, selector: &str) -> Option<f64>;

    /// Primer fichero seleccionado en un input `file`
    fn selected_file(&self, selector: &str) -> Option<SelectedFile>;

    fn exists(&self, selector: &str) -> bool;

    /// Registrar listener en todos los elementos que coinciden.
    /// Devuelve el número de elementos enlazados.
    fn listen(&self, selector: &str, kind: EventKind, listener: Listener) -> Result<usize, DomError>;

    /// Listener que se ejecuta una sola vez
    fn listen_once(&self, selector: &str, kind: EventKind, listener: Listener) -> Result<(), DomError>;

    /// Abrir el modal (Bootstrap `show()`)
    fn show_modal(&self, selector: &str) -> Result<(), DomError>;

    fn alert(&self, message: &str);

    fn set_body_background(&self, color: &str);
}
