use crate::dom;
use scene_core::SceneContext;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Keep the canvas backing store, camera aspect and pick viewport in step
/// with the window. GPU targets follow on the next frame.
pub fn wire_resize(canvas: &web::HtmlCanvasElement, scene: Rc<RefCell<SceneContext>>) {
    dom::sync_canvas_backing_size(canvas);
    scene.borrow_mut().resize(dom::canvas_viewport(canvas));

    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
        let viewport = dom::canvas_viewport(&canvas_resize);
        scene.borrow_mut().resize(viewport);
        log::info!(
            "[resize] viewport {:.0}x{:.0}, backing {}x{}",
            viewport.width,
            viewport.height,
            canvas_resize.width(),
            canvas_resize.height()
        );
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}
