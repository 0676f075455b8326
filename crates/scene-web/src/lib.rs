#![cfg(target_arch = "wasm32")]
use scene_core::{OrbitControls, SceneConfig, SceneContext, DEFAULT_MARKERS};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod dom;
mod events;
mod frame;
mod input;
mod loader;
mod overlay;
mod render;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("scene-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id("app-canvas")
        .ok_or_else(|| anyhow::anyhow!("missing #app-canvas"))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    let config = SceneConfig::default();
    let scene = Rc::new(RefCell::new(SceneContext::with_markers(
        &config,
        dom::canvas_viewport(&canvas),
        &DEFAULT_MARKERS,
    )));
    events::wire_resize(&canvas, scene.clone());

    overlay::wire_welcome(&document);
    overlay::wire_contact(&document);
    let message_box = overlay::MessageBox::new(&document);
    message_box.wire_close();

    let orbit = Rc::new(RefCell::new(OrbitControls::new(
        config.camera.target,
        config.orbit,
    )));
    events::wire_input_handlers(events::InputWiring {
        canvas: canvas.clone(),
        scene: scene.clone(),
        orbit: orbit.clone(),
        drag_state: Rc::new(RefCell::new(input::DragState::default())),
        message_box,
    });

    // Markers are clickable before the model arrives; the model only adds
    // an occluder once loaded.
    let pending_model = Rc::new(RefCell::new(None));
    {
        let scene = scene.clone();
        let pending_model = pending_model.clone();
        let model_config = config.model;
        spawn_local(async move {
            match loader::load_model(&model_config).await {
                Ok(root) => {
                    log::info!(
                        "[model] loaded {} primitives, {} triangles",
                        root.primitive_count,
                        root.triangle_count()
                    );
                    scene.borrow_mut().attach_model(&root);
                    *pending_model.borrow_mut() = Some(root);
                }
                Err(e) => log::error!("[model] {}", e),
            }
        });
    }

    let gpu = frame::init_gpu(&canvas, &DEFAULT_MARKERS, config.bloom, config.lighting).await;
    if gpu.is_none() {
        log::warn!("[gpu] renderer unavailable; picking stays active");
    }
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        scene,
        orbit,
        canvas,
        gpu,
        pending_model,
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}
