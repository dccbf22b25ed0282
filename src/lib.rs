#![cfg(target_arch = "wasm32")]
use aura_core::{Scene, SceneConfig, SceneStateHandle};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod bridge;
mod canvas2d;
mod constants;
mod dom;
mod frame;
mod overlay;

use constants::{CANVAS_ID, LOG_LEVEL};

thread_local! {
    // Written by `push_state_update`, read by the frame loop. Updates that
    // arrive before `start` are kept.
    static SCENE_STATE: SceneStateHandle = SceneStateHandle::new();
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(LOG_LEVEL).ok();
    log::info!("aura-web starting");

    init().map_err(|e| {
        log::error!("init error: {:?}", e);
        JsValue::from_str(&format!("aura setup failed: {e:#}"))
    })
}

fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{CANVAS_ID}"))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    let (width, height) = dom::sync_canvas_to_window(&canvas)?;
    let surface = canvas2d::Canvas2dSurface::new(&canvas)?;
    let scene = Scene::new(
        width as f32,
        height as f32,
        SceneConfig {
            seed: rand::random(),
            ..SceneConfig::default()
        },
    )?;

    let state = SCENE_STATE.with(|s| s.clone());
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext::new(
        scene, state, surface, document,
    )));

    let frame_ctx_resize = frame_ctx.clone();
    dom::wire_resize(&canvas, move |w, h| {
        frame_ctx_resize.borrow_mut().resize(w, h);
    });

    frame::start_loop(frame_ctx);
    Ok(())
}

/// Inbound sentiment update from the speech pipeline.
///
/// Accepts `{ sentiment?: number, emotion?: string, keywords?: string[] }`;
/// every missing field resets to its default (the update replaces the whole
/// state). Never blocks on the render loop.
#[wasm_bindgen(js_name = pushStateUpdate)]
pub fn push_state_update(update: JsValue) {
    let update = bridge::decode_update(&update);
    log::info!(
        "[state] sentiment={:.2} emotion={} keywords={}",
        update.sentiment,
        update.emotion,
        update.keywords.len()
    );
    SCENE_STATE.with(|s| s.apply_update(update));
}
