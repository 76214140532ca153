//! Scroll position to reading progress

/// Percentage (0-100) of the scrollable range covered by `scroll_top`.
///
/// Content that fits in the viewport has no scrollable range and reports 0.
pub fn compute_scroll_percent(scroll_top: f64, viewport_height: f64, document_height: f64) -> f64 {
    let scrollable = document_height - viewport_height;
    if !scrollable.is_finite() || scrollable <= 0.0 || !scroll_top.is_finite() {
        return 0.0;
    }

    (scroll_top / scrollable * 100.0).clamp(0.0, 100.0)
}
