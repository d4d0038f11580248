pub mod job_application_repo;
pub mod job_posting_repo;
pub mod profile_repo;
pub mod user_repo;

#[cfg(test)]
pub mod memory;

/// LIMIT/OFFSET pair for a one-based page, or `None` when `page <= 0`
/// (pagination disabled). `page_size` is clamped to 1..=100 with 20 as the
/// fallback, and the offset uses saturating arithmetic so hostile query
/// params cannot overflow.
pub(crate) fn page_window(page: i64, page_size: i64) -> Option<(i64, i64)> {
    if page <= 0 {
        return None;
    }
    let limit = if page_size > 0 {
        page_size.min(100)
    } else {
        20
    };
    let offset = page.saturating_sub(1).saturating_mul(limit);
    Some((limit, offset))
}
