//! Directory listing page
//!
//! Rendered for directory requests when no index file matches, so a project
//! without an index.html is still browsable.

use std::path::Path;
use tokio::fs;

/// Render an HTML listing of `dir` for the request path `url_path`.
/// Returns `None` when the directory cannot be read.
pub async fn render(dir: &Path, url_path: &str) -> Option<String> {
    let mut entries = Vec::new();
    let mut read_dir = fs::read_dir(dir).await.ok()?;

    while let Ok(Some(entry)) = read_dir.next_entry().await {
        let mut name = entry.file_name().to_string_lossy().into_owned();
        let is_dir = entry
            .file_type()
            .await
            .map(|t| t.is_dir())
            .unwrap_or(false);
        if is_dir {
            name.push('/');
        }
        entries.push(name);
    }
    entries.sort();

    let title = format!("Directory listing for {url_path}");
    let mut html = String::with_capacity(256 + entries.len() * 64);
    html.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str(&format!("<title>{}</title>\n", escape(&title)));
    html.push_str("</head>\n<body>\n");
    html.push_str(&format!("<h1>{}</h1>\n<hr>\n<ul>\n", escape(&title)));
    for name in &entries {
        html.push_str(&format!(
            "<li><a href=\"{}\">{}</a></li>\n",
            escape(name),
            escape(name)
        ));
    }
    html.push_str("</ul>\n<hr>\n</body>\n</html>\n");

    Some(html)
}

/// Minimal HTML escaping for file names.
fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
