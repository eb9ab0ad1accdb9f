//! Help guide rendering.

use crate::session::help::{GUIDE, GUIDE_TITLE};

pub fn render_guide() -> String {
    let mut out = format!("{}\n{}\n", GUIDE_TITLE, "=".repeat(GUIDE_TITLE.len()));

    for section in GUIDE {
        out.push_str(&format!("\n{}\n", section.title));
        for (label, text) in section.items {
            if label.is_empty() {
                out.push_str(&format!("  {}\n", text));
            } else {
                out.push_str(&format!("  * {}: {}\n", label, text));
            }
        }
    }

    out
}
