use crate::dom;
use scene_core::UiSink;
use wasm_bindgen::JsCast;
use web_sys as web;

const MESSAGE_BOX_ID: &str = "BOX";
const MESSAGE_TEXT_ID: &str = "BOX-message";
const MESSAGE_CLOSE_ID: &str = "close-BOX";

const WELCOME_ID: &str = "Welcome";
const WELCOME_START_ID: &str = "play";

const CONTACT_TRIGGER_ID: &str = "contact";
const CONTACT_POPUP_ID: &str = "popup";
const CONTACT_CLOSE_ID: &str = "close-popup";

fn set_display(el: &web::Element, value: &str) {
    if let Some(html) = el.dyn_ref::<web::HtmlElement>() {
        _ = html.style().set_property("display", value);
    } else {
        _ = el.set_attribute("style", &format!("display:{}", value));
    }
}

/// The reveal-message panel (`#BOX`).
#[derive(Clone)]
pub struct MessageBox {
    document: web::Document,
}

impl MessageBox {
    pub fn new(document: &web::Document) -> Self {
        Self {
            document: document.clone(),
        }
    }

    /// Wire the panel's close button.
    pub fn wire_close(&self) {
        let mut sink = self.clone();
        dom::add_click_listener(&self.document, MESSAGE_CLOSE_ID, move |_| sink.hide_message());
    }
}

impl UiSink for MessageBox {
    fn show_message(&mut self, text: &str) {
        if let Some(el) = self.document.get_element_by_id(MESSAGE_TEXT_ID) {
            match el.dyn_ref::<web::HtmlElement>() {
                Some(html) => html.set_inner_text(text),
                None => el.set_text_content(Some(text)),
            }
        }
        if let Some(el) = self.document.get_element_by_id(MESSAGE_BOX_ID) {
            set_display(&el, "flex");
        }
    }

    fn hide_message(&mut self) {
        if let Some(el) = self.document.get_element_by_id(MESSAGE_BOX_ID) {
            set_display(&el, "none");
        }
    }
}

/// Show the welcome popup and hide it once the start button is pressed.
pub fn wire_welcome(document: &web::Document) {
    let Some(pop) = document.get_element_by_id(WELCOME_ID) else {
        log::warn!("[overlay] missing #{}", WELCOME_ID);
        return;
    };
    _ = pop.class_list().add_1("View");
    dom::add_click_listener(document, WELCOME_START_ID, move |_| {
        let cl = pop.class_list();
        _ = cl.remove_1("View");
        _ = cl.add_1("New");
    });
}

fn set_contact_visible(popup: &web::Element, visible: bool) {
    let cl = popup.class_list();
    if visible {
        _ = cl.remove_1("popup-hidden");
        _ = cl.add_1("popup-visible");
    } else {
        _ = cl.remove_1("popup-visible");
        _ = cl.add_1("popup-hidden");
    }
}

/// Contact popup: opened by its trigger image, closed by its button or any
/// click outside of it.
pub fn wire_contact(document: &web::Document) {
    let (Some(popup), Some(trigger)) = (
        document.get_element_by_id(CONTACT_POPUP_ID),
        document.get_element_by_id(CONTACT_TRIGGER_ID),
    ) else {
        log::warn!("[overlay] contact popup not present");
        return;
    };

    let popup_open = popup.clone();
    dom::add_click_listener(document, CONTACT_TRIGGER_ID, move |ev| {
        ev.stop_propagation();
        set_contact_visible(&popup_open, true);
    });

    let popup_close = popup.clone();
    dom::add_click_listener(document, CONTACT_CLOSE_ID, move |ev| {
        ev.stop_propagation();
        set_contact_visible(&popup_close, false);
    });

    let outside = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        let target = ev.target().and_then(|t| t.dyn_into::<web::Node>().ok());
        let inside = target.as_ref().map(|n| popup.contains(Some(n))).unwrap_or(false);
        let on_trigger = target
            .as_ref()
            .map(|n| trigger.is_same_node(Some(n)))
            .unwrap_or(false);
        if !inside && !on_trigger {
            set_contact_visible(&popup, false);
        }
    }) as Box<dyn FnMut(_)>);
    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback("click", outside.as_ref().unchecked_ref());
    }
    outside.forget();
}
