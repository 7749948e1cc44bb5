use crate::frame::FrameContext;
use crate::input::{self, DragMode};
use crate::listener::Listener;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Press-drag color picking. Listens on the window so drags that start over
/// the page chrome count too; coordinates are page coordinates.
pub fn wire_color_handlers(
    window: &web::Window,
    ctx: &Rc<RefCell<FrameContext>>,
) -> Vec<Listener> {
    let down = {
        let ctx = ctx.clone();
        Listener::new(window, "pointerdown", move |_: web::PointerEvent| {
            ctx.borrow_mut().interaction.press();
        })
    };
    let up = {
        let ctx = ctx.clone();
        Listener::new(window, "pointerup", move |_: web::PointerEvent| {
            ctx.borrow_mut().interaction.release();
        })
    };
    let cancel = {
        let ctx = ctx.clone();
        Listener::new(window, "pointercancel", move |_: web::PointerEvent| {
            ctx.borrow_mut().interaction.release();
        })
    };
    let moved = {
        let ctx = ctx.clone();
        Listener::new(window, "pointermove", move |ev: web::PointerEvent| {
            let mut guard = ctx.borrow_mut();
            let c = &mut *guard;
            let viewport = c.scene.viewport();
            let (x, y) = (ev.page_x() as f64, ev.page_y() as f64);
            if let Some(rgb) = c.interaction.pointer_move(x, y, &viewport) {
                c.scene.retarget_color(rgb);
            }
        })
    };
    vec![down, up, cancel, moved]
}

/// Orbit gestures on the canvas: primary-button drag rotates, secondary
/// drag pans and the wheel dollies when those are enabled.
pub fn wire_orbit_handlers(
    window: &web::Window,
    canvas: &web::HtmlCanvasElement,
    ctx: &Rc<RefCell<FrameContext>>,
) -> Vec<Listener> {
    let (enable_pan, enable_zoom) = {
        let c = ctx.borrow();
        let cfg = c.scene.config();
        (cfg.orbit.enable_pan, cfg.orbit.enable_zoom)
    };
    let mut listeners = Vec::with_capacity(5);

    {
        let ctx = ctx.clone();
        let canvas_capture = canvas.clone();
        listeners.push(Listener::new(canvas, "pointerdown", move |ev: web::PointerEvent| {
            let Some(mode) = input::drag_mode_for_button(ev.button(), enable_pan) else {
                return;
            };
            log::debug!("[input] {:?} drag from button {}", mode, ev.button());
            let mut c = ctx.borrow_mut();
            c.drag.begin(mode, ev.client_x() as f32, ev.client_y() as f32);
            if mode == DragMode::Rotate {
                c.scene.controls_mut().begin_rotate();
            }
            _ = canvas_capture.set_pointer_capture(ev.pointer_id());
            ev.prevent_default();
        }));
    }
    {
        let ctx = ctx.clone();
        listeners.push(Listener::new(window, "pointermove", move |ev: web::PointerEvent| {
            let mut guard = ctx.borrow_mut();
            let c = &mut *guard;
            let Some((mode, dx, dy)) =
                c.drag.delta_to(ev.client_x() as f32, ev.client_y() as f32)
            else {
                return;
            };
            match mode {
                DragMode::Rotate => {
                    let h = c.scene.viewport().height() as f32;
                    c.scene.controls_mut().rotate_by_pixels(dx, dy, h);
                }
                DragMode::Pan => {
                    c.scene.pan_by_pixels(dx, dy);
                }
            }
        }));
    }
    {
        let ctx = ctx.clone();
        listeners.push(Listener::new(window, "pointerup", move |_: web::PointerEvent| {
            let mut c = ctx.borrow_mut();
            if c.drag.end() == Some(DragMode::Rotate) {
                c.scene.controls_mut().end_rotate();
            }
        }));
    }
    if enable_zoom {
        let ctx = ctx.clone();
        listeners.push(Listener::new(canvas, "wheel", move |ev: web::WheelEvent| {
            if ctx
                .borrow_mut()
                .scene
                .controls_mut()
                .dolly(ev.delta_y() as f32)
            {
                ev.prevent_default();
            }
        }));
    }
    if enable_pan {
        listeners.push(Listener::new(canvas, "contextmenu", |ev: web::Event| {
            ev.prevent_default();
        }));
    }
    listeners
}
