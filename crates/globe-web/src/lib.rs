#![cfg(target_arch = "wasm32")]
//! WASM front-end for the orbital globe.
//!
//! Mount with [`Globe::new`] from the host page, or rely on the zero-config
//! start hook which mounts on `#globe-canvas` with the JSON feed from
//! `#globe-data`. A data change on the host side means `destroy()` plus a
//! fresh mount; the engine never mutates a live instance's destination set.

use std::cell::RefCell;
use std::rc::Rc;

use globe_core::{GeoFeed, SceneState};
use rand::rngs::StdRng;
use rand::SeedableRng;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

mod dom;
mod events;
mod frame;
mod input;
mod overlay;
mod render;

const DEFAULT_CANVAS_ID: &str = "globe-canvas";
const FEED_SCRIPT_ID: &str = "globe-data";

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("globe-web starting");

    // Zero-config path: mount when the host page provides both the canvas
    // and an inline JSON feed. The instance lives for the page's lifetime.
    if let Some(document) = dom::window_document() {
        if let Some(json) = dom::inline_feed_json(&document, FEED_SCRIPT_ID) {
            std::mem::forget(Globe::new(DEFAULT_CANVAS_ID, &json));
        }
    }
    Ok(())
}

struct Mounted {
    listeners: Vec<events::ListenerHandle>,
    loop_handle: frame::LoopHandle,
}

/// A mounted globe engine. Owns the render loop and every DOM listener.
#[wasm_bindgen]
pub struct Globe {
    inner: Option<Mounted>,
}

#[wasm_bindgen]
impl Globe {
    /// Mount onto the canvas with the given feed. A missing canvas or
    /// document makes this a logged no-op producing an inert handle; a feed
    /// that fails to parse degrades to hub-only rendering.
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_id: &str, feed_json: &str) -> Globe {
        match mount(canvas_id, feed_json) {
            Ok(mounted) => Globe {
                inner: Some(mounted),
            },
            Err(e) => {
                log::warn!("[mount] skipped: {e:?}");
                Globe { inner: None }
            }
        }
    }

    /// Stop the render loop and detach all listeners. Idempotent; no frame
    /// callback fires after this returns.
    pub fn destroy(&mut self) {
        if let Some(mounted) = self.inner.take() {
            mounted.loop_handle.stop();
            drop(mounted.listeners);
            log::info!("[mount] destroyed");
        }
    }
}

impl Drop for Globe {
    fn drop(&mut self) {
        self.destroy();
    }
}

fn mount(canvas_id: &str, feed_json: &str) -> anyhow::Result<Mounted> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas = dom::canvas_by_id(&document, canvas_id)
        .ok_or_else(|| anyhow::anyhow!("missing #{canvas_id}"))?;

    let feed = match GeoFeed::from_json(feed_json) {
        Ok(f) => f,
        Err(e) => {
            log::error!("[feed] {e}; rendering hub only");
            GeoFeed::default()
        }
    };

    dom::sync_square_backing_size(&canvas);
    overlay::ensure_legend(&document, &canvas);

    let mut rng = StdRng::from_entropy();
    let scene = Rc::new(RefCell::new(SceneState::new(&feed, &mut rng)));
    let listeners = events::wire_handlers(&canvas, scene.clone());

    let ctx = Rc::new(RefCell::new(frame::FrameContext::new(
        scene,
        canvas.clone(),
    )));
    // WebGPU init is async; the loop starts immediately and paints once the
    // surface lands.
    {
        let ctx = ctx.clone();
        spawn_local(async move {
            match render::GpuSurface::new(&canvas).await {
                Ok(surface) => ctx.borrow_mut().surface = Some(Box::new(surface)),
                Err(e) => log::error!("WebGPU init error: {e:?}"),
            }
        });
    }
    let loop_handle = frame::start_loop(ctx);

    Ok(Mounted {
        listeners,
        loop_handle,
    })
}
