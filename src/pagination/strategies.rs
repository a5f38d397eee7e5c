//! Offset pagination strategy

use super::types::{NextPage, PaginationState};

/// Page size used when the caller sets no limit
pub const DEFAULT_PAGE_LIMIT: i64 = 100;

/// Offset-based pagination
///
/// Walks `?offset=N&limit=M` pages until one of:
/// - a page comes back empty
/// - the reported total count is reached
/// - a page holds fewer items than the limit and no total is reported
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OffsetPaginator {
    /// Number of items requested per page
    pub limit: i64,
}

impl OffsetPaginator {
    /// Create a paginator; non-positive limits select [`DEFAULT_PAGE_LIMIT`]
    pub fn new(limit: i64) -> Self {
        Self {
            limit: if limit > 0 { limit } else { DEFAULT_PAGE_LIMIT },
        }
    }

    /// Update `state` after a page of `records_count` items and decide what
    /// to fetch next
    pub fn process_page(
        &self,
        records_count: usize,
        total_count: Option<i64>,
        state: &mut PaginationState,
    ) -> NextPage {
        state.add_fetched(records_count as u64);

        if records_count == 0 {
            state.mark_done();
            return NextPage::Done;
        }

        state.add_offset(records_count as i64);

        let done = match total_count {
            Some(total) => state.offset >= total,
            // Servers may cap the page size, so a short page only ends the
            // walk when no total is reported
            None => (records_count as i64) < self.limit,
        };
        if done {
            state.mark_done();
            return NextPage::Done;
        }

        NextPage::Continue {
            offset: state.offset,
        }
    }
}

impl Default for OffsetPaginator {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_LIMIT)
    }
}
