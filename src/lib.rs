#![cfg(target_arch = "wasm32")]
use sphere_core::{hooks, SceneConfig};
use wasm_bindgen::prelude::*;
use web_sys as web;

mod dom;
mod events;
mod frame;
mod host;
mod input;
mod intro;
mod listener;
mod render;
mod style;

use host::SceneHost;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("sphere-web starting");
    Ok(())
}

fn to_js_error(e: anyhow::Error) -> JsValue {
    js_sys::Error::new(&format!("{:#}", e)).into()
}

/// A mounted sphere page. Dropping the handle on the JS side (`free()`)
/// tears the scene down as well.
#[wasm_bindgen]
pub struct SphereApp {
    host: SceneHost,
}

#[wasm_bindgen]
impl SphereApp {
    /// Renders the page into the element matching `root_selector` and starts
    /// the scene. Resolves to `undefined` when the root or its `.canvas`
    /// container is missing.
    pub async fn mount(root_selector: String) -> Result<Option<SphereApp>, JsValue> {
        match mount_with(&root_selector, SceneConfig::default()).await {
            Ok(app) => Ok(app),
            Err(e) => {
                log::error!("mount error: {:?}", e);
                Err(to_js_error(e))
            }
        }
    }

    /// Stops rendering and detaches every listener. Safe to call twice.
    pub fn unmount(&mut self) {
        self.host.stop();
    }

    #[wasm_bindgen(js_name = isRunning)]
    pub fn is_running(&self) -> bool {
        self.host.is_running()
    }
}

async fn mount_with(
    root_selector: &str,
    config: SceneConfig,
) -> anyhow::Result<Option<SphereApp>> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let root = document
        .query_selector(root_selector)
        .map_err(|e| anyhow::anyhow!(format!("bad selector {:?}: {:?}", root_selector, e)))?;
    let Some(root) = root else {
        log::warn!("[mount] no element matches {:?}; nothing to do", root_selector);
        return Ok(None);
    };

    let Some(container) = find_or_render_container(&document, &root, &config)? else {
        log::warn!("[mount] no .{} container under {:?}", hooks::CANVAS, root_selector);
        return Ok(None);
    };

    let mut host = SceneHost::new(&root, container, config).await?;
    host.start();
    Ok(Some(SphereApp { host }))
}

/// Pre-rendered markup (a `.nav` already under `root`) is reused as is;
/// otherwise the chrome is built from the config.
fn find_or_render_container(
    document: &web::Document,
    root: &web::Element,
    config: &SceneConfig,
) -> anyhow::Result<Option<web::Element>> {
    let has_chrome = root
        .query_selector(&format!(".{}", hooks::NAV))
        .ok()
        .flatten()
        .is_some();
    if !has_chrome {
        return dom::render_chrome(document, root, &config.nav).map(Some);
    }
    Ok(root
        .query_selector(&format!(".{}", hooks::CANVAS))
        .ok()
        .flatten())
}
