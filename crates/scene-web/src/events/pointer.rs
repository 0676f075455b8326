use crate::dom;
use crate::input::DragState;
use crate::overlay::MessageBox;
use scene_core::{dispatch_click, OrbitControls, SceneContext};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub scene: Rc<RefCell<SceneContext>>,
    pub orbit: Rc<RefCell<OrbitControls>>,
    pub drag_state: Rc<RefCell<DragState>>,
    pub message_box: MessageBox,
}

pub fn wire_input_handlers(w: InputWiring) {
    wire_click(&w);
    wire_pointerdown(&w);
    wire_pointermove(&w);
    wire_pointerup(&w);
    wire_wheel(&w);
}

// Clicks are picked at window level so that clicks landing outside the
// canvas still reach the dispatcher and resolve to a no-op there.
fn wire_click(w: &InputWiring) {
    let w = w.clone();
    let mut sink = w.message_box.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        let pos = dom::client_to_canvas(&ev, &w.canvas);
        let Ok(mut scene) = w.scene.try_borrow_mut() else {
            log::warn!("[click] scene busy; dropping click");
            return;
        };
        let result = dispatch_click(&mut scene, pos, &mut sink);
        if result.marker.is_none() {
            log::debug!("[click] nothing revealed at ({:.0},{:.0})", pos.x, pos.y);
        }
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_pointerdown(w: &InputWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let pos = dom::client_to_canvas(&ev, &w.canvas);
        w.drag_state.borrow_mut().begin(pos);
        _ = w.canvas.set_pointer_capture(ev.pointer_id());
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener
        .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointermove(w: &InputWiring) {
    let w = w.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let pos = dom::client_to_canvas(&ev, &w.canvas);
        let Some(delta) = w.drag_state.borrow_mut().move_to(pos) else {
            return;
        };
        let height = dom::canvas_viewport(&w.canvas).height;
        w.orbit
            .borrow_mut()
            .rotate_by_pixels(delta.x, delta.y, height);
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_pointerup(w: &InputWiring) {
    let w = w.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        w.drag_state.borrow_mut().end();
        _ = w.canvas.release_pointer_capture(ev.pointer_id());
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointerup", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_wheel(w: &InputWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::WheelEvent| {
        w.orbit.borrow_mut().dolly(ev.delta_y() as f32);
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener
        .add_event_listener_with_callback("wheel", closure.as_ref().unchecked_ref());
    closure.forget();
}
