//! Plain-text views of a session.
//!
//! Each renderer returns a `String` so the CLI decides where it goes.

pub mod document;
pub mod guide;
pub mod panel;
pub mod tree;

pub use document::render_document;
pub use guide::render_guide;
pub use panel::{render_citation_panel, render_summary};
pub use tree::render_tree;

use crate::core::{segment_document, summarize};
use crate::session::{SessionState, View};

/// Render one view of the analysis, with the summary and citation panel
///
/// Returns `None` when no analysis has completed yet.
pub fn render_analysis(state: &SessionState, view: View) -> Option<String> {
    let analysis = state.analysis.as_ref()?;
    let document = &analysis.document;
    let selected = state.selected.as_ref();

    let body = match view {
        View::Tree => render_tree(&document.claims, selected),
        View::Document => {
            let segments = segment_document(&analysis.text, document);
            render_document(&segments, selected)
        }
    };

    Some(format!(
        "{}\n\n{}\n\n{}",
        render_summary(&summarize(document)),
        body,
        render_citation_panel(document, selected)
    ))
}

/// Render the whole session screen
pub fn render_session(state: &SessionState) -> String {
    let mut sections = Vec::new();

    if state.help_open {
        sections.push(render_guide());
    }

    if let Some(error) = &state.error {
        sections.push(format!("Error: {}", error.user_message()));
    }

    if state.is_busy() {
        sections.push("Analyzing...".to_string());
    }

    match render_analysis(state, state.view) {
        Some(analysis) => sections.push(analysis),
        None => sections.push("No scan result available. Enter text and run `go`.".to_string()),
    }

    sections.join("\n\n")
}
