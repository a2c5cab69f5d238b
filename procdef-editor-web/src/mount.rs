//! Entry point called from the edit page's script tag.

use std::rc::Rc;

use procdef_editor_app::EditorAppBuilder;
use procdef_editor_core::{ActionOutcome, EditorConfig, EditorError, FormController};
use wasm_bindgen::prelude::*;
use web_sys::Document;

use crate::dom::{DomEvent, DomNavigator, DomNotifier, DomPage};

#[derive(Debug, Clone, Copy)]
enum Button {
    Validate,
    ValidateAndSave,
    ToggleHighlight,
}

fn to_js(err: &EditorError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Attach the editor to the current page.
///
/// `config_json` is an `EditorConfig` as JSON; omitted keys take their
/// defaults. Relative endpoints resolve against `location.href` unless
/// `base_url` is given.
#[wasm_bindgen]
pub fn mount(config_json: Option<String>) -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    // A second mount() keeps the logger from the first.
    let _ = console_log::init_with_level(log::Level::Info);

    let mut config = match config_json.as_deref() {
        Some(json) => EditorConfig::from_json(json).map_err(|e| to_js(&e))?,
        None => EditorConfig::default(),
    };

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;
    if config.base_url.is_none() {
        config.base_url = window.location().href().ok();
    }

    let dom = config.dom.clone();
    let app = EditorAppBuilder::new()
        .page(Rc::new(DomPage::new(document.clone(), dom.clone())))
        .notifier(Rc::new(DomNotifier::new(document.clone(), dom.banner_id.as_str())))
        .navigator(Rc::new(DomNavigator::new(window)))
        .config(config)
        .build()
        .map_err(|e| to_js(&e))?;

    bind(&document, &dom.validate_button_id, &app.controller, Button::Validate)?;
    bind(
        &document,
        &dom.validate_save_button_id,
        &app.controller,
        Button::ValidateAndSave,
    )?;
    bind(
        &document,
        &dom.toggle_highlight_button_id,
        &app.controller,
        Button::ToggleHighlight,
    )?;

    log::info!("[editor] Mounted on #{}", dom.form_id);
    Ok(())
}

fn bind(
    document: &Document,
    id: &str,
    controller: &Rc<FormController>,
    button: Button,
) -> Result<(), JsValue> {
    let Some(element) = document.get_element_by_id(id) else {
        log::warn!("[editor] #{id} not found, {button:?} is unavailable");
        return Ok(());
    };

    let controller = Rc::clone(controller);
    let on_click = Closure::<dyn FnMut(web_sys::Event)>::new(move |event: web_sys::Event| {
        // Must happen during dispatch; the spawned task runs after it.
        event.prevent_default();
        let controller = Rc::clone(&controller);
        wasm_bindgen_futures::spawn_local(async move {
            let event = DomEvent(event);
            let result = match button {
                Button::Validate => controller.request_validate(&event).await,
                Button::ValidateAndSave => controller.request_validate_and_save(&event).await,
                Button::ToggleHighlight => controller.request_toggle_highlight(&event).await,
            };
            match result.and_then(ActionOutcome::into_result) {
                Ok(outcome) => log::debug!("[editor] {button:?}: {outcome:?}"),
                Err(e) if e.is_expected() => log::warn!("[editor] {button:?}: {e}"),
                Err(e) => log::error!("[editor] {button:?} failed: {e}"),
            }
        });
    });

    element.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
    // Listeners live as long as the page.
    on_click.forget();
    Ok(())
}
