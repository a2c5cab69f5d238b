//! DOM-backed adapters

use std::time::Duration;

use async_trait::async_trait;
use procdef_editor_core::{
    DomConfig, EditorError, EditorPage, EditorResult, FormState, Navigator, Notifier, UiEvent,
};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, HtmlElement, HtmlFormElement, HtmlInputElement, HtmlOptionElement,
    HtmlSelectElement, HtmlTextAreaElement, Window,
};

use crate::controls::{banner_class, input_value, is_successful};
use crate::timer::sleep;

fn js_error(context: &str, err: &JsValue) -> EditorError {
    EditorError::Page(format!("{context}: {err:?}"))
}

/// The live edit page.
pub struct DomPage {
    document: Document,
    dom: DomConfig,
}

impl DomPage {
    pub fn new(document: Document, dom: DomConfig) -> Self {
        Self { document, dom }
    }

    fn element(&self, id: &str) -> EditorResult<Element> {
        self.document
            .get_element_by_id(id)
            .ok_or_else(|| EditorError::Page(format!("#{id} not found")))
    }

    fn form(&self) -> EditorResult<HtmlFormElement> {
        self.element(&self.dom.form_id)?
            .dyn_into::<HtmlFormElement>()
            .map_err(|_| EditorError::Page(format!("#{} is not a form", self.dom.form_id)))
    }

    fn text_field(&self) -> EditorResult<HtmlElement> {
        self.element(&self.dom.text_field_id)?
            .dyn_into::<HtmlElement>()
            .map_err(|_| {
                EditorError::Page(format!("#{} is not an HTML element", self.dom.text_field_id))
            })
    }
}

/// Append the submitted pairs of one form control to `state`.
fn collect_control(control: Element, state: &mut FormState) {
    let control = match control.dyn_into::<HtmlInputElement>() {
        Ok(input) => {
            if is_successful(&input.name(), input.disabled()) {
                if let Some(value) = input_value(&input.type_(), &input.value(), input.checked()) {
                    state.push(input.name(), value);
                }
            }
            return;
        }
        Err(other) => other,
    };

    let control = match control.dyn_into::<HtmlTextAreaElement>() {
        Ok(area) => {
            if is_successful(&area.name(), area.disabled()) {
                state.push(area.name(), area.value());
            }
            return;
        }
        Err(other) => other,
    };

    if let Ok(select) = control.dyn_into::<HtmlSelectElement>() {
        if !is_successful(&select.name(), select.disabled()) {
            return;
        }
        let selected = select.selected_options();
        for i in 0..selected.length() {
            if let Some(option) = selected
                .item(i)
                .and_then(|o| o.dyn_into::<HtmlOptionElement>().ok())
            {
                state.push(select.name(), option.value());
            }
        }
    }
}

#[async_trait(?Send)]
impl EditorPage for DomPage {
    fn form_state(&self) -> EditorResult<FormState> {
        let controls = self.form()?.elements();
        let mut state = FormState::new();
        for i in 0..controls.length() {
            if let Some(control) = controls.item(i) {
                collect_control(control, &mut state);
            }
        }
        Ok(state)
    }

    fn form_action(&self) -> EditorResult<String> {
        Ok(self.form()?.action())
    }

    async fn fade_out_text(&self, duration: Duration) -> EditorResult<()> {
        let text = self.text_field()?;
        let style = text.style();
        style
            .set_property("transition", &format!("opacity {}ms", duration.as_millis()))
            .and_then(|()| style.set_property("opacity", "0"))
            .map_err(|e| js_error("fade out", &e))?;
        sleep(duration).await.map_err(|e| js_error("fade out", &e))?;
        style
            .set_property("display", "none")
            .map_err(|e| js_error("fade out", &e))
    }

    async fn fade_in_text(&self, duration: Duration) -> EditorResult<()> {
        let text = self.text_field()?;
        let style = text.style();
        style
            .remove_property("display")
            .and_then(|_| style.set_property("opacity", "0"))
            .map_err(|e| js_error("fade in", &e))?;
        // Force layout so the opacity change below transitions.
        let _ = text.offset_height();
        style
            .set_property("transition", &format!("opacity {}ms", duration.as_millis()))
            .and_then(|()| style.set_property("opacity", "1"))
            .map_err(|e| js_error("fade in", &e))?;
        sleep(duration).await.map_err(|e| js_error("fade in", &e))
    }

    fn append_preview(&self, html: &str) -> EditorResult<()> {
        self.element(&self.dom.preview_container_id)?
            .insert_adjacent_html("beforeend", html)
            .map_err(|e| js_error("append preview", &e))
    }

    fn remove_preview(&self) -> EditorResult<usize> {
        let nodes = self
            .document
            .query_selector_all(&self.dom.preview_selector)
            .map_err(|e| js_error("query preview", &e))?;
        let mut removed = 0;
        for i in 0..nodes.length() {
            if let Some(element) = nodes.item(i).and_then(|n| n.dyn_into::<Element>().ok()) {
                element.remove();
                removed += 1;
            }
        }
        Ok(removed)
    }
}

/// Shows messages in the page's banner element.
pub struct DomNotifier {
    document: Document,
    banner_id: String,
}

impl DomNotifier {
    pub fn new(document: Document, banner_id: impl Into<String>) -> Self {
        Self {
            document,
            banner_id: banner_id.into(),
        }
    }
}

impl Notifier for DomNotifier {
    fn notify(&self, success: bool, message: &str) {
        let Some(banner) = self.document.get_element_by_id(&self.banner_id) else {
            log::warn!("[editor] #{} missing, banner dropped: {message}", self.banner_id);
            return;
        };
        banner.set_class_name(banner_class(success));
        banner.set_text_content(Some(message));
        if let Ok(banner) = banner.dyn_into::<HtmlElement>() {
            if let Err(e) = banner.style().remove_property("display") {
                log::warn!("[editor] #{} could not be shown: {e:?}", self.banner_id);
            }
        }
    }
}

/// Navigates with `location.replace`, so the edit page leaves no history entry.
pub struct DomNavigator {
    window: Window,
}

impl DomNavigator {
    pub fn new(window: Window) -> Self {
        Self { window }
    }
}

impl Navigator for DomNavigator {
    fn replace(&self, location: &str) -> EditorResult<()> {
        self.window
            .location()
            .replace(location)
            .map_err(|e| EditorError::Navigation(format!("{location}: {e:?}")))
    }
}

/// A DOM click event.
pub struct DomEvent(pub web_sys::Event);

impl UiEvent for DomEvent {
    fn prevent_default(&self) {
        self.0.prevent_default();
    }
}
