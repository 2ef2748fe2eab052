//! Page clamping and numbered pagination controls.

/// The catalog API refuses listing pages beyond this, whatever total it
/// reports, so the UI never offers them.
pub const MAX_PAGE: u32 = 500;

/// How many numbered buttons a pagination strip shows.
const WINDOW: u32 = 5;

/// Usable page count for a reported total: at least 1, at most [`MAX_PAGE`].
#[must_use]
pub fn clamp_total(total_pages: u32) -> u32 {
    total_pages.clamp(1, MAX_PAGE)
}

/// Clamp a requested page into `[1, min(total_pages, MAX_PAGE)]`.
#[must_use]
pub fn clamp_page(requested: u32, total_pages: u32) -> u32 {
    requested.clamp(1, clamp_total(total_pages))
}

/// Everything a pagination strip needs to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageControls {
    pub current: u32,
    pub total: u32,
    pub prev: Option<u32>,
    pub next: Option<u32>,
    /// Numbered window around the current page, ascending.
    pub numbered: Vec<u32>,
}

/// Build controls for a requested page against a reported total.
///
/// The requested page is clamped first, so an out-of-range URL still renders
/// a coherent strip.
#[must_use]
pub fn page_controls(requested: u32, total_pages: u32) -> PageControls {
    let total = clamp_total(total_pages);
    let current = requested.clamp(1, total);

    let start = current.saturating_sub(WINDOW / 2).max(1);
    let end = start.saturating_add(WINDOW - 1).min(total);
    let start = end.saturating_sub(WINDOW - 1).max(1);

    PageControls {
        current,
        total,
        prev: (current > 1).then(|| current - 1),
        next: (current < total).then(|| current + 1),
        numbered: (start..=end).collect(),
    }
}
