/*!
 * Ingestion adapters: read raw subtitle text from a file or a URL and
 * route it to the right converter.
 *
 * Both adapters are asynchronous and single-shot: one suspend point each,
 * resolving or failing exactly once. No retry, no timeout, no streaming.
 * I/O and transport failures propagate unchanged to the caller.
 */

use std::path::Path;

use log::debug;

use crate::converters::{ass_to_vtt, srt_to_vtt, strip_braces};
use crate::errors::IngestError;

/// Read subtitle text from a file and convert it to WebVTT.
///
/// The source type is detected from the lowercased filename extension:
/// `srt` and `ass` route through their converters; anything else is
/// treated as already-VTT-or-plain and only has brace directives stripped.
pub async fn read_subtitle_from_file<P: AsRef<Path>>(path: P) -> Result<String, IngestError> {
    let path = path.as_ref();
    let content = tokio::fs::read_to_string(path).await?;

    let extension = path
        .extension()
        .map(|ext| ext.to_string_lossy().to_lowercase());
    debug!(
        "Read {} bytes from {:?} (type: {})",
        content.len(),
        path,
        extension.as_deref().unwrap_or("none")
    );

    match extension.as_deref() {
        Some("srt") => Ok(srt_to_vtt(&content)),
        Some("ass") => Ok(ass_to_vtt(&content)?),
        _ => Ok(strip_braces(&content)),
    }
}

/// Fetch subtitle text from a URL and convert it to WebVTT if needed.
///
/// A response whose `Content-Type` contains `x-subrip` (case-insensitive)
/// routes through the SRT converter; any other body passes through
/// unchanged.
pub async fn read_subtitle_from_url(url: &str) -> Result<String, IngestError> {
    let response = reqwest::get(url).await?;
    let content_type = response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.to_string());
    let text = response.text().await?;

    debug!(
        "Fetched {} bytes from {} (Content-Type: {})",
        text.len(),
        url,
        content_type.as_deref().unwrap_or("none")
    );
    Ok(route_by_content_type(content_type.as_deref(), text))
}

/// Route fetched text by its `Content-Type` header value.
pub fn route_by_content_type(content_type: Option<&str>, text: String) -> String {
    match content_type {
        Some(value) if value.to_ascii_lowercase().contains("x-subrip") => srt_to_vtt(&text),
        _ => text,
    }
}
