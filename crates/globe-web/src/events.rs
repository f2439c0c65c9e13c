//! Pointer and resize wiring.
//!
//! Handlers only write into the shared scene through its pointer methods;
//! the render loop reads. Every listener is held in a [`ListenerHandle`]
//! that detaches itself on drop, so teardown cannot leave a live callback.

use std::cell::RefCell;
use std::rc::Rc;

use globe_core::SceneState;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::dom;
use crate::input;

pub struct ListenerHandle {
    target: web::EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

impl ListenerHandle {
    pub fn attach(
        target: &web::EventTarget,
        event: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> Self {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
        Self {
            target: target.clone(),
            event,
            closure,
        }
    }
}

impl Drop for ListenerHandle {
    fn drop(&mut self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
    }
}

/// Wire pointer drag handlers plus the window resize listener. The returned
/// guards own the registrations for the life of the mounted engine.
pub fn wire_handlers(
    canvas: &web::HtmlCanvasElement,
    scene: Rc<RefCell<SceneState>>,
) -> Vec<ListenerHandle> {
    let window: web::EventTarget = match web::window() {
        Some(w) => w.into(),
        None => return Vec::new(),
    };
    let canvas_target: web::EventTarget = canvas.clone().into();
    let mut handles = Vec::with_capacity(5);

    {
        let scene = scene.clone();
        let canvas = canvas.clone();
        handles.push(ListenerHandle::attach(
            &canvas_target,
            "pointerdown",
            move |ev: web::Event| {
                if let Ok(ev) = ev.dyn_into::<web::PointerEvent>() {
                    scene.borrow_mut().pointer_down(input::client_x(&ev));
                    _ = canvas.set_pointer_capture(ev.pointer_id());
                    ev.prevent_default();
                }
            },
        ));
    }

    {
        let scene = scene.clone();
        handles.push(ListenerHandle::attach(
            &window,
            "pointermove",
            move |ev: web::Event| {
                if let Ok(ev) = ev.dyn_into::<web::PointerEvent>() {
                    let mut scene = scene.borrow_mut();
                    if scene.is_dragging() {
                        scene.pointer_move(input::client_x(&ev), input::pointer_source(&ev));
                    }
                }
            },
        ));
    }

    {
        let scene = scene.clone();
        handles.push(ListenerHandle::attach(&window, "pointerup", move |_| {
            scene.borrow_mut().pointer_up();
        }));
    }

    {
        let scene = scene.clone();
        handles.push(ListenerHandle::attach(
            &canvas_target,
            "pointerout",
            move |_| {
                scene.borrow_mut().pointer_up();
            },
        ));
    }

    {
        let canvas = canvas.clone();
        handles.push(ListenerHandle::attach(&window, "resize", move |_| {
            dom::sync_square_backing_size(&canvas);
        }));
    }

    handles
}
