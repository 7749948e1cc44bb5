use crate::dom;
use crate::events;
use crate::frame::{self, FrameContext, FrameLoop};
use crate::input::DragState;
use crate::intro::IntroAnimation;
use crate::listener::Listener;
use crate::render;
use instant::Instant;
use sphere_core::{InteractionController, Lifecycle, Scene, SceneConfig};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Owns the canvas, the render loop and every listener of one mounted scene.
///
/// `start` attaches everything; `stop` (or dropping the host) detaches it
/// again. A stopped host cannot be restarted.
pub struct SceneHost {
    lifecycle: Lifecycle,
    container: web::Element,
    ctx: Rc<RefCell<FrameContext>>,
    frame_loop: Option<FrameLoop>,
    listeners: Vec<Listener>,
}

impl SceneHost {
    /// Builds the scene and GPU state for `container`. Intro targets are
    /// resolved under `root`. Nothing is attached to the page yet.
    pub async fn new(
        root: &web::Element,
        container: web::Element,
        config: SceneConfig,
    ) -> anyhow::Result<Self> {
        let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
        let viewport =
            dom::window_viewport().ok_or_else(|| anyhow::anyhow!("window has no usable size"))?;

        let canvas = dom::create_canvas(&document)?;
        dom::sync_canvas_backing_size(
            &canvas,
            &viewport,
            config.pixel_ratio,
            render::max_surface_dimension(),
        );

        let scene = Scene::new(config, viewport)?;
        let mesh = scene.build_mesh();
        log::info!(
            "[host] sphere mesh: {} vertices, {} indices",
            mesh.vertices.len(),
            mesh.indices.len()
        );
        let gpu = render::GpuState::new(&canvas, &mesh, scene.config().clear_color).await?;
        let intro = IntroAnimation::new(root);

        let ctx = Rc::new(RefCell::new(FrameContext {
            scene,
            interaction: InteractionController::new(),
            drag: DragState::default(),
            intro,
            canvas,
            gpu,
            last_instant: Instant::now(),
        }));
        Ok(Self {
            lifecycle: Lifecycle::default(),
            container,
            ctx,
            frame_loop: None,
            listeners: Vec::new(),
        })
    }

    pub fn is_running(&self) -> bool {
        self.lifecycle.is_running()
    }

    pub fn start(&mut self) {
        let Some(window) = web::window() else {
            log::error!("[host] no window; not starting");
            return;
        };
        if !self.lifecycle.start() {
            return;
        }

        {
            let mut guard = self.ctx.borrow_mut();
            let c = &mut *guard;
            if let Err(e) = self.container.append_child(&c.canvas) {
                log::error!("[host] could not attach canvas: {:?}", e);
            }
            // Every animated element starts in its initial pose before the
            // first frame is presented.
            c.intro.advance(0.0, &mut c.scene);
            c.last_instant = Instant::now();
        }

        let canvas = self.ctx.borrow().canvas.clone();
        self.listeners.push(events::wire_resize(&window, &self.ctx));
        self.listeners.extend(events::wire_color_handlers(&window, &self.ctx));
        self.listeners.extend(events::wire_orbit_handlers(&window, &canvas, &self.ctx));

        self.frame_loop = Some(frame::start_loop(self.ctx.clone()));
        log::info!("[host] started with {} listeners", self.listeners.len());
    }

    /// Idempotent. Cancels the loop and the intro, unregisters listeners
    /// and removes the canvas.
    pub fn stop(&mut self) {
        if !self.lifecycle.stop() {
            return;
        }
        if let Some(frame_loop) = self.frame_loop.take() {
            frame_loop.cancel();
        }
        self.listeners.clear();

        let mut c = self.ctx.borrow_mut();
        c.intro.clear();
        c.interaction.release();
        if c.canvas.parent_node().is_some() {
            _ = self.container.remove_child(&c.canvas);
        }
        log::info!("[host] stopped");
    }
}

impl Drop for SceneHost {
    fn drop(&mut self) {
        self.stop();
    }
}
