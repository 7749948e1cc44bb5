use crate::dom;
use crate::frame::FrameContext;
use crate::listener::Listener;
use crate::render;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

mod pointer;

pub use pointer::{wire_color_handlers, wire_orbit_handlers};

/// Window resize: camera aspect/projection and the canvas backing store
/// follow the new inner size. The surface is reconfigured on the next frame.
pub fn wire_resize(window: &web::Window, ctx: &Rc<RefCell<FrameContext>>) -> Listener {
    let ctx = ctx.clone();
    Listener::new(window, "resize", move |_: web::Event| {
        let Some(viewport) = dom::window_viewport() else {
            log::debug!("[resize] ignoring degenerate window size");
            return;
        };
        let mut guard = ctx.borrow_mut();
        let c = &mut *guard;
        let pixel_ratio = c.scene.config().pixel_ratio;
        c.scene.resize(viewport);
        dom::sync_canvas_backing_size(
            &c.canvas,
            &viewport,
            pixel_ratio,
            render::max_surface_dimension(),
        );
    })
}
