//! Render loop driver: owns the per-frame callback, delta time, and the
//! requestAnimationFrame lifecycle.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use globe_core::{FrameState, SceneState};
use instant::Instant;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::render::Surface;

pub struct FrameContext {
    pub scene: Rc<RefCell<SceneState>>,
    pub canvas: web::HtmlCanvasElement,
    pub surface: Option<Box<dyn Surface>>,
    pub frame: FrameState,
    pub started: Instant,
    pub last_instant: Instant,
    pub frames: u64,
}

impl FrameContext {
    pub fn new(scene: Rc<RefCell<SceneState>>, canvas: web::HtmlCanvasElement) -> Self {
        let now = Instant::now();
        Self {
            scene,
            canvas,
            surface: None,
            frame: FrameState::default(),
            started: now,
            last_instant: now,
            frames: 0,
        }
    }

    pub fn tick(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f32();
        self.last_instant = now;
        let now_ms = now.duration_since(self.started).as_secs_f64() * 1000.0;

        // The resize listener updates the canvas backing store; the driver
        // picks the new dimensions up here, leaving animation state alone.
        self.frame.width = self.canvas.width();
        self.frame.height = self.canvas.height();
        self.scene
            .borrow_mut()
            .frame(now_ms, dt_sec, &mut self.frame);

        if let Some(surface) = self.surface.as_mut() {
            surface.resize_if_needed(self.frame.width, self.frame.height);
            if let Err(e) = surface.paint(&self.frame) {
                log::error!("render error: {:?}", e);
            }
        }

        self.frames += 1;
        if self.frames % 600 == 0 {
            log::debug!(
                "[frame] {} frames, {} markers",
                self.frames,
                self.frame.markers.len()
            );
        }
    }
}

/// Controls a running loop; `stop` is idempotent and synchronous.
pub struct LoopHandle {
    alive: Rc<Cell<bool>>,
    raf_id: Rc<Cell<i32>>,
    tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
}

impl LoopHandle {
    /// Stop the loop: no frame callback fires after this returns. Cancels the
    /// pending animation frame and drops the tick closure, which also breaks
    /// its self-reference so the frame context (and GPU surface) are freed.
    pub fn stop(&self) {
        if !self.alive.get() {
            return;
        }
        self.alive.set(false);
        if let Some(w) = web::window() {
            _ = w.cancel_animation_frame(self.raf_id.get());
        }
        *self.tick.borrow_mut() = None;
    }
}

pub fn start_loop(ctx: Rc<RefCell<FrameContext>>) -> LoopHandle {
    let alive = Rc::new(Cell::new(true));
    let raf_id = Rc::new(Cell::new(0));
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));

    let tick_clone = tick.clone();
    let alive_tick = alive.clone();
    let raf_tick = raf_id.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if !alive_tick.get() {
            return;
        }
        ctx.borrow_mut().tick();
        if let Some(w) = web::window() {
            if let Some(cb) = tick_clone.borrow().as_ref() {
                let f: &js_sys::Function = cb.as_ref().unchecked_ref();
                if let Ok(id) = w.request_animation_frame(f) {
                    raf_tick.set(id);
                }
            }
        }
    }) as Box<dyn FnMut()>));

    if let Some(w) = web::window() {
        if let Some(cb) = tick.borrow().as_ref() {
            let f: &js_sys::Function = cb.as_ref().unchecked_ref();
            if let Ok(id) = w.request_animation_frame(f) {
                raf_id.set(id);
            }
        }
    }

    LoopHandle {
        alive,
        raf_id,
        tick,
    }
}
