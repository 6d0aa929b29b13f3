use std::fmt::Write as _;
use std::future::Future;

use dioxus::prelude::*;
use thiserror::Error;
use tracing::{info, warn};

use crate::chart::{self, svg::svg_document, ChartLayout, ChartStyle};
use crate::comparison::export_filename;
use crate::core::sim::ComparisonMode;
use crate::core::storage::ComparisonSet;
use crate::t;

/// Backdrop for exported images; matches the panel surface.
const EXPORT_BACKGROUND: &str = "#0b1120";

/// Raster scale for PNG exports (the chart's logical size is small).
#[cfg(not(target_arch = "wasm32"))]
const PNG_SCALE: f32 = 3.0;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("couldn't serialize comparison: {0}")]
    Json(#[from] serde_json::Error),
    #[error("couldn't parse chart SVG: {0}")]
    Svg(String),
    #[error("couldn't allocate a {width}×{height} raster")]
    Raster { width: u32, height: u32 },
    #[error("PNG encoding failed: {0}")]
    Png(String),
    #[error("clipboard unavailable: {0}")]
    Clipboard(String),
    #[error("couldn't write export: {0}")]
    Io(#[from] std::io::Error),
    #[error("unable to determine export directory")]
    NoExportDir,
    #[error("{0}")]
    Browser(&'static str),
    #[error("PNG export isn't available in the browser build")]
    Unsupported,
}

#[derive(Clone, Debug, PartialEq)]
enum ExportStatus {
    Idle,
    Working(String),
    Done(String),
    Error(String),
}

#[component]
pub fn ChartExportPanel(mode: ComparisonMode, set: ComparisonSet) -> Element {
    let status = use_signal(|| ExportStatus::Idle);
    let busy = use_signal(|| false);

    let feedback = match &status() {
        ExportStatus::Idle => None,
        ExportStatus::Working(label) => Some(("export-panel__status".to_string(), label.clone())),
        ExportStatus::Done(message) => Some((
            "export-panel__status export-panel__status--success".to_string(),
            format!("✅ {message}"),
        )),
        ExportStatus::Error(err) => Some((
            "export-panel__status export-panel__status--error".to_string(),
            format!("⚠️ {err}"),
        )),
    };

    let svg_handler = {
        let set = set.clone();
        move |_| {
            let set = set.clone();
            run_export(status, busy, "SVG", move || perform_svg_export(mode, set));
        }
    };
    let png_handler = {
        let set = set.clone();
        move |_| {
            let set = set.clone();
            run_export(status, busy, "PNG", move || perform_png_export(mode, set));
        }
    };
    let csv_handler = {
        let set = set.clone();
        move |_| {
            let set = set.clone();
            run_export(status, busy, "CSV", move || perform_csv_export(mode, set));
        }
    };
    let json_handler = {
        let set = set.clone();
        move |_| {
            let set = set.clone();
            run_export(status, busy, "JSON", move || perform_json_export(mode, set));
        }
    };

    rsx! {
        section { class: "export-panel",
            h2 { class: "export-panel__title", {t!("export-title")} }
            p { {t!("export-intro")} }
            div { class: "export-panel__actions",
                button {
                    r#type: "button",
                    class: "button button--primary",
                    disabled: busy(),
                    onclick: svg_handler,
                    {t!("export-svg")}
                }
                if cfg!(not(target_arch = "wasm32")) {
                    button {
                        r#type: "button",
                        class: "button",
                        disabled: busy(),
                        onclick: png_handler,
                        {t!("export-png")}
                    }
                }
                button {
                    r#type: "button",
                    class: "button",
                    disabled: busy(),
                    onclick: csv_handler,
                    {t!("export-csv")}
                }
                button {
                    r#type: "button",
                    class: "button button--ghost",
                    disabled: busy(),
                    onclick: json_handler,
                    {t!("export-json")}
                }
            }
            if let Some((class_name, message)) = feedback {
                p { class: "{class_name}", "{message}" }
            }
        }
    }
}

fn run_export<F, Fut>(
    mut status: Signal<ExportStatus>,
    mut busy: Signal<bool>,
    format: &'static str,
    job: F,
) where
    F: FnOnce() -> Fut + 'static,
    Fut: Future<Output = Result<String, ExportError>> + 'static,
{
    if busy() {
        return;
    }
    busy.set(true);
    status.set(ExportStatus::Working(t!("export-working", format = format)));

    #[cfg(target_arch = "wasm32")]
    {
        wasm_bindgen_futures::spawn_local(async move {
            let outcome = job().await;
            finish_export(status, busy, outcome);
        });
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let outcome = futures::executor::block_on(job());
        finish_export(status, busy, outcome);
    }
}

fn finish_export(
    mut status: Signal<ExportStatus>,
    mut busy: Signal<bool>,
    outcome: Result<String, ExportError>,
) {
    match outcome {
        Ok(message) => {
            info!(%message, "export finished");
            status.set(ExportStatus::Done(message));
        }
        Err(err) => {
            warn!(%err, "export failed");
            status.set(ExportStatus::Error(err.to_string()));
        }
    }
    busy.set(false);
}

/// Standalone SVG document of the chart as currently displayed.
pub fn chart_svg(mode: ComparisonMode, set: &ComparisonSet) -> String {
    let drawing = chart::build_drawing(
        mode,
        &set.with,
        &set.without,
        &ChartLayout::default(),
        &ChartStyle::default(),
    );
    svg_document(&drawing, Some(EXPORT_BACKGROUND))
}

/// Plotted samples in draw order: `run,time_sec,err_magnitude`.
pub fn build_csv(mode: ComparisonMode, set: &ComparisonSet) -> String {
    let mut csv = String::from("run,time_sec,err_magnitude\n");
    for series in chart::select_series(mode, &set.with, &set.without) {
        for point in &series.data {
            let _ = writeln!(csv, "{},{},{}", series.color.run_key(), point.time, point.value);
        }
    }
    csv
}

#[cfg(not(target_arch = "wasm32"))]
pub fn rasterize_png(svg: &str, scale: f32) -> Result<Vec<u8>, ExportError> {
    let mut database = usvg::fontdb::Database::new();
    database.load_system_fonts();
    let options = usvg::Options {
        fontdb: std::sync::Arc::new(database),
        ..usvg::Options::default()
    };

    let tree = usvg::Tree::from_str(svg, &options).map_err(|err| ExportError::Svg(err.to_string()))?;
    let size = tree.size();
    let width = (size.width() * scale).ceil() as u32;
    let height = (size.height() * scale).ceil() as u32;
    let mut pixmap =
        tiny_skia::Pixmap::new(width, height).ok_or(ExportError::Raster { width, height })?;
    resvg::render(
        &tree,
        tiny_skia::Transform::from_scale(scale, scale),
        &mut pixmap.as_mut(),
    );
    pixmap
        .encode_png()
        .map_err(|err| ExportError::Png(err.to_string()))
}

async fn perform_svg_export(mode: ComparisonMode, set: ComparisonSet) -> Result<String, ExportError> {
    let svg = chart_svg(mode, &set);
    let filename = export_filename(mode.as_str(), "svg");
    let delivery = download_bytes(&filename, "image/svg+xml", svg.into_bytes()).await?;
    Ok(delivered("SVG", delivery))
}

async fn perform_png_export(mode: ComparisonMode, set: ComparisonSet) -> Result<String, ExportError> {
    #[cfg(target_arch = "wasm32")]
    {
        let _ = (mode, set);
        Err(ExportError::Unsupported)
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let png = rasterize_png(&chart_svg(mode, &set), PNG_SCALE)?;
        let filename = export_filename(mode.as_str(), "png");
        let delivery = download_bytes(&filename, "image/png", png).await?;
        Ok(delivered("PNG", delivery))
    }
}

async fn perform_csv_export(mode: ComparisonMode, set: ComparisonSet) -> Result<String, ExportError> {
    let csv = build_csv(mode, &set);
    let filename = export_filename(mode.as_str(), "csv");
    let delivery = download_bytes(&filename, "text/csv", csv.into_bytes()).await?;
    Ok(delivered("CSV", delivery))
}

async fn perform_json_export(mode: ComparisonMode, set: ComparisonSet) -> Result<String, ExportError> {
    let json = serde_json::to_string_pretty(&set)?;
    #[cfg(not(target_arch = "wasm32"))]
    copy_to_clipboard(json.clone())?;
    let filename = export_filename(mode.as_str(), "json");
    let delivery = download_bytes(&filename, "application/json", json.into_bytes()).await?;
    Ok(delivered("JSON", delivery))
}

fn delivered(format: &'static str, delivery: Option<String>) -> String {
    match delivery {
        Some(path) => t!("export-saved", format = format, path = path),
        None => t!("export-download-started", format = format),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn copy_to_clipboard(payload: String) -> Result<(), ExportError> {
    let mut clipboard =
        arboard::Clipboard::new().map_err(|err| ExportError::Clipboard(err.to_string()))?;
    clipboard
        .set_text(payload)
        .map_err(|err| ExportError::Clipboard(err.to_string()))
}

async fn download_bytes(
    filename: &str,
    mime: &str,
    bytes: Vec<u8>,
) -> Result<Option<String>, ExportError> {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

        let array = js_sys::Uint8Array::from(bytes.as_slice());
        let parts = js_sys::Array::new();
        parts.push(&array.buffer());

        let opts = BlobPropertyBag::new();
        opts.set_type(mime);
        let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &opts)
            .map_err(|_| ExportError::Browser("Failed to create blob"))?;
        let url = Url::create_object_url_with_blob(&blob)
            .map_err(|_| ExportError::Browser("Unable to create download"))?;

        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or(ExportError::Browser("Document unavailable"))?;
        let anchor: HtmlAnchorElement = document
            .create_element("a")
            .map_err(|_| ExportError::Browser("Unable to create anchor"))?
            .dyn_into()
            .map_err(|_| ExportError::Browser("Anchor cast failed"))?;
        anchor.set_href(&url);
        anchor.set_download(filename);
        anchor.style().set_property("display", "none").ok();

        document
            .body()
            .ok_or(ExportError::Browser("Missing body"))?
            .append_child(&anchor)
            .ok();
        anchor.click();
        anchor.remove();
        Url::revoke_object_url(&url).ok();

        Ok(None)
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        use std::fs;

        let _ = mime;
        let dir = desktop_export_dir()?;
        fs::create_dir_all(&dir)?;
        let path = dir.join(filename);
        fs::write(&path, &bytes)?;
        Ok(Some(path.to_string_lossy().to_string()))
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn desktop_export_dir() -> Result<std::path::PathBuf, ExportError> {
    let dirs = directories::ProjectDirs::from("com", "Driftlab", "Driftlab")
        .ok_or(ExportError::NoExportDir)?;
    Ok(dirs.data_dir().join("exports"))
}
