// ============================================================================
// DOM MODULE - Abstracción + helpers para manipulación DOM
// ============================================================================

pub mod document;
pub mod element;
pub mod events;
pub mod web;

pub use document::{listener, Dom, DomError, DomEvent, EventKind, EventTarget, Listener};
pub use web::WebDom;
