use crate::canvas2d::Canvas2dSurface;
use crate::constants::STATS_LOG_INTERVAL_FRAMES;
use crate::overlay;
use aura_core::{Scene, SceneStateHandle};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub scene: Scene,
    pub state: SceneStateHandle,
    pub surface: Canvas2dSurface,
    pub document: web::Document,

    hud_revision: Option<u64>,
    frame_count: u64,
    window_start: Instant,
}

impl FrameContext {
    pub fn new(
        scene: Scene,
        state: SceneStateHandle,
        surface: Canvas2dSurface,
        document: web::Document,
    ) -> Self {
        Self {
            scene,
            state,
            surface,
            document,
            hud_revision: None,
            frame_count: 0,
            window_start: Instant::now(),
        }
    }

    pub fn frame(&mut self) {
        // One read of the shared state per frame; a late update shows next frame.
        let snapshot = self.state.snapshot();
        let stats = self.scene.frame(&mut self.surface, &snapshot);

        let revision = self.state.revision();
        if self.hud_revision != Some(revision) {
            overlay::update_hud(&self.document, &snapshot);
            self.hud_revision = Some(revision);
        }

        self.frame_count += 1;
        if self.frame_count % STATS_LOG_INTERVAL_FRAMES == 0 {
            let now = Instant::now();
            let secs = (now - self.window_start).as_secs_f32().max(1e-3);
            self.window_start = now;
            log::debug!(
                "[frame] {:.1} fps emotion={} particles={} links={} sparkles={} orbs={}",
                STATS_LOG_INTERVAL_FRAMES as f32 / secs,
                snapshot.emotion,
                stats.particles,
                stats.connections,
                stats.sparkles,
                stats.orbs
            );
        }
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.scene.resize(width as f32, height as f32);
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
