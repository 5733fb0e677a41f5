use super::{Document, Region};
use std::fmt::Write;

/// Plain-text rendering for terminals: one `|`-separated line per row, then
/// whichever status regions are set.
pub fn render(doc: &Document) -> String {
    let mut out = String::new();
    for row in doc.rows() {
        let _ = writeln!(out, "{row}");
    }
    for region in [Region::List, Region::Add] {
        if let Some(status) = doc.status(region) {
            let _ = writeln!(out, "[{}] {}", status.kind, status.text);
        }
    }
    out
}
