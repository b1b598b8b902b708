//! Pay Page Routing
//!
//! The invoice id is carried in the page path itself (`/pay/{invoiceId}`),
//! so the page works without any server-side templating.

/// Extract the invoice id from a `/pay/{invoiceId}` path.
///
/// Splits on `/`, discards empty segments, and returns the second remaining
/// segment. Returns `None` when the path has fewer than two segments, which
/// the page treats as a terminally invalid link.
pub fn invoice_id_from_path(path: &str) -> Option<&str> {
    path.split('/').filter(|s| !s.is_empty()).nth(1)
}
