use crate::render;
use scene_core::{BloomConfig, LightingConfig, MarkerSpec, OrbitControls, SceneContext, SceneRoot};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext<'a> {
    pub scene: Rc<RefCell<SceneContext>>,
    pub orbit: Rc<RefCell<OrbitControls>>,
    pub canvas: web::HtmlCanvasElement,
    pub gpu: Option<render::GpuState<'a>>,
    /// Model handed over by the loader, waiting for GPU upload.
    pub pending_model: Rc<RefCell<Option<SceneRoot>>>,
}

impl<'a> FrameContext<'a> {
    pub fn frame(&mut self) {
        let Ok(mut scene) = self.scene.try_borrow_mut() else {
            return;
        };
        if let Ok(mut orbit) = self.orbit.try_borrow_mut() {
            orbit.update(&mut scene.camera);
        }

        let Some(gpu) = self.gpu.as_mut() else {
            return;
        };
        if let Some(root) = self.pending_model.borrow_mut().take() {
            gpu.set_model(&root);
        }
        gpu.resize_if_needed(self.canvas.width(), self.canvas.height());
        match gpu.render(&scene.camera) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                log::warn!("[frame] surface lost; reconfiguring next frame");
                gpu.resize_if_needed(self.canvas.width(), self.canvas.height());
            }
            Err(e) => log::error!("[frame] render error: {:?}", e),
        }
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    markers: &[MarkerSpec],
    bloom: BloomConfig,
    lighting: LightingConfig,
) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas, markers, bloom, lighting).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref().map(|c| c.as_ref().clone()))
    else {
        return;
    };
    _ = w.request_animation_frame(cb.unchecked_ref());
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}
