//! Browser bindings for the process definition editor.
//!
//! `mount()` wires the page's three buttons to a [`FormController`] built
//! through `EditorAppBuilder`, with DOM-backed page, banner and navigation
//! adapters. Everything touching `web-sys` only exists on `wasm32`; the form
//! serialization rules in [`controls`] are plain Rust and tested natively.
//!
//! [`FormController`]: procdef_editor_core::FormController

pub mod controls;

#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod mount;
#[cfg(target_arch = "wasm32")]
mod timer;

#[cfg(target_arch = "wasm32")]
pub use dom::{DomEvent, DomNavigator, DomNotifier, DomPage};
#[cfg(target_arch = "wasm32")]
pub use mount::mount;
