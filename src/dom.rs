use crate::style;
use sphere_core::{hooks, NavConfig, Pose, Viewport};
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Current window inner size, if the window reports a usable one.
pub fn window_viewport() -> Option<Viewport> {
    let w = web::window()?;
    let width = w.inner_width().ok()?.as_f64()?;
    let height = w.inner_height().ok()?.as_f64()?;
    Viewport::new(width, height).ok()
}

fn create_with_class(
    document: &web::Document,
    tag: &str,
    class: &str,
) -> anyhow::Result<web::Element> {
    let el = document
        .create_element(tag)
        .map_err(|e| anyhow::anyhow!(format!("create <{}>: {:?}", tag, e)))?;
    el.set_class_name(class);
    Ok(el)
}

fn append(parent: &web::Element, child: &web::Element) -> anyhow::Result<()> {
    parent
        .append_child(child)
        .map(|_| ())
        .map_err(|e| anyhow::anyhow!(format!("append_child: {:?}", e)))
}

/// Builds the page chrome under `root`:
///
/// ```text
/// div.canvas
/// nav.nav > a(brand) + ul.list > li.list-item > a
/// h1.title
/// ```
///
/// Returns the `.canvas` container the scene will mount into.
pub fn render_chrome(
    document: &web::Document,
    root: &web::Element,
    nav: &NavConfig,
) -> anyhow::Result<web::Element> {
    let container = create_with_class(document, "div", hooks::CANVAS)?;
    append(root, &container)?;

    let nav_el = create_with_class(document, "nav", hooks::NAV)?;
    let brand = document
        .create_element("a")
        .map_err(|e| anyhow::anyhow!(format!("create <a>: {:?}", e)))?;
    brand.set_text_content(Some(&nav.brand));
    _ = brand.set_attribute("href", "");
    append(&nav_el, &brand)?;

    let list = create_with_class(document, "ul", hooks::LIST)?;
    for entry in &nav.routes {
        let item = create_with_class(document, "li", hooks::LIST_ITEM)?;
        let link = document
            .create_element("a")
            .map_err(|e| anyhow::anyhow!(format!("create <a>: {:?}", e)))?;
        link.set_text_content(Some(&entry.label));
        _ = link.set_attribute("href", &entry.path);
        append(&item, &link)?;
        append(&list, &item)?;
    }
    append(&nav_el, &list)?;
    append(root, &nav_el)?;

    let title = create_with_class(document, "h1", hooks::TITLE)?;
    title.set_text_content(Some(&nav.title));
    append(root, &title)?;

    log::debug!("[dom] chrome rendered with {} routes", nav.routes.len());
    Ok(container)
}

/// All elements under `root` carrying `class`, in document order.
pub fn elements_by_class(root: &web::Element, class: &str) -> Vec<web::HtmlElement> {
    let Ok(list) = root.query_selector_all(&format!(".{}", class)) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|n| n.dyn_into::<web::HtmlElement>().ok())
        .collect()
}

pub fn create_canvas(document: &web::Document) -> anyhow::Result<web::HtmlCanvasElement> {
    document
        .create_element("canvas")
        .map_err(|e| anyhow::anyhow!(format!("create <canvas>: {:?}", e)))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))
}

/// Backing store follows `viewport * pixel_ratio` (clamped to what the GPU
/// accepts); the CSS size follows the viewport.
pub fn sync_canvas_backing_size(
    canvas: &web::HtmlCanvasElement,
    viewport: &Viewport,
    pixel_ratio: f64,
    max_dimension: u32,
) {
    let (w_px, h_px) = viewport.backing_size(pixel_ratio, max_dimension);
    canvas.set_width(w_px);
    canvas.set_height(h_px);
    let css = canvas.style();
    _ = css.set_property("width", &style::px(viewport.width()));
    _ = css.set_property("height", &style::px(viewport.height()));
}

pub fn apply_pose(el: &web::HtmlElement, pose: &Pose) {
    let css = el.style();
    if let Some(o) = pose.opacity {
        _ = css.set_property("opacity", &style::opacity(o));
    }
    if let Some(y) = pose.y_percent {
        _ = css.set_property("transform", &style::translate_y(y));
    }
}
