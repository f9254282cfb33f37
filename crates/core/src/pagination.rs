//! Page link arithmetic
//!
//! The endpoint reports no total count, so the next page is only known to
//! exist after fetching it. These functions compute the candidate links; the
//! shell performs the probe fetch and feeds its outcome to
//! [`confirm_next_page`].

/// Page before `page`, or `None` on the first page.
pub fn previous_page(page: Option<u64>) -> Option<u64> {
    match page {
        Some(page) if page >= 2 => Some(page - 1),
        _ => None,
    }
}

/// The page to probe. An unspecified page is page 1, so this is 2.
pub fn provisional_next_page(page: Option<u64>) -> u64 {
    page.unwrap_or(1).saturating_add(1)
}

/// Decide the next page from the probe outcome
///
/// # Arguments
/// * `provisional` - Page number that was probed
/// * `probed_records` - Record count of the probe page, `None` if the probe failed
pub fn confirm_next_page(provisional: u64, probed_records: Option<usize>) -> Option<u64> {
    match probed_records {
        Some(count) if count > 0 => Some(provisional),
        _ => None,
    }
}
