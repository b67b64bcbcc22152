/// Scroll offset past which the navigation bar appears.
pub const SHOW_AFTER_PX: f64 = 50.0;
/// Scroll offset past which the bar switches to its compact, backed style.
pub const SCROLLED_AFTER_PX: f64 = 100.0;

/// A page section the navigation bar can link to.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SectionAnchor {
    /// Anchor id, e.g. `projects`.
    pub id: String,
    /// Top of the section in page coordinates.
    pub top_px: f64,
}

/// Navigation bar state derived from the scroll offset.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct NavState {
    /// Bar is shown.
    pub visible: bool,
    /// Bar uses the scrolled style.
    pub scrolled: bool,
    /// Section currently under the probe line.
    pub active: Option<String>,
}

/// Derive navigation state for `scroll_y`.
///
/// The active section is the last anchor whose top is at or above `scroll_y + probe_px`;
/// anchors need not be sorted.
pub fn nav_state(scroll_y: f64, sections: &[SectionAnchor], probe_px: f64) -> NavState {
    let line = scroll_y + probe_px;
    let active = sections
        .iter()
        .filter(|s| s.top_px <= line)
        .max_by(|a, b| a.top_px.total_cmp(&b.top_px))
        .map(|s| s.id.clone());
    NavState {
        visible: scroll_y > SHOW_AFTER_PX,
        scrolled: scroll_y > SCROLLED_AFTER_PX,
        active,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/page/nav.rs"]
mod tests;
