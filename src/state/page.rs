//! Pure pagination: a fixed-size window over a dataset's records.

use crate::model::TransferRecord;
use crate::state::ITEMS_PER_PAGE;

/// One rendered page: a bounded row window plus page metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPage<'a> {
    /// Up to [`ITEMS_PER_PAGE`] records, in source order.
    pub rows: &'a [TransferRecord],
    /// 1-based page number as displayed.
    pub page_number: usize,
    /// Total page count, always >= 1.
    pub total_pages: usize,
}

/// Total page count for a record count: `max(1, ceil(n / ITEMS_PER_PAGE))`.
///
/// An empty dataset still has one (empty) page so the page indicator and
/// the auto-advance wrap stay well-defined.
pub fn total_pages(record_count: usize) -> usize {
    record_count.div_ceil(ITEMS_PER_PAGE).max(1)
}

/// Slice the window for a 1-based page.
///
/// The start index is clamped to the available length: a page beyond the
/// end produces an empty window rather than panicking. That case is
/// unreachable while the page invariant holds, but record counts are
/// re-read on every render, so the clamp keeps rendering total.
pub fn paginate(records: &[TransferRecord], page: usize) -> RenderedPage<'_> {
    let start = (page.max(1) - 1) * ITEMS_PER_PAGE;
    let end = start.saturating_add(ITEMS_PER_PAGE).min(records.len());
    let rows = if start >= records.len() {
        &[]
    } else {
        &records[start..end]
    };
    RenderedPage {
        rows,
        page_number: page,
        total_pages: total_pages(records.len()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TransferRecord;

    fn records(n: usize) -> Vec<TransferRecord> {
        (0..n)
            .map(|i| TransferRecord {
                booking_ref: format!("REF{i}"),
                flight: format!("FL{i}"),
                hotel: format!("Hotel {i}"),
                pickup_time: "08:00".to_string(),
            })
            .collect()
    }

    #[test]
    fn empty_dataset_has_one_empty_page() {
        assert_eq!(total_pages(0), 1);
        let recs = records(0);
        let page = paginate(&recs, 1);
        assert!(page.rows.is_empty());
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.page_number, 1);
    }

    #[test]
    fn exact_multiple_fills_last_page() {
        assert_eq!(total_pages(30), 2);
        let recs = records(30);
        let page = paginate(&recs, 2);
        assert_eq!(page.rows.len(), 15);
        assert_eq!(page.rows[0].booking_ref, "REF15");
    }

    #[test]
    fn partial_last_page_is_short() {
        assert_eq!(total_pages(16), 2);
        let recs = records(16);
        let page = paginate(&recs, 2);
        assert_eq!(page.rows.len(), 1);
        assert_eq!(page.rows[0].booking_ref, "REF15");
    }

    #[test]
    fn out_of_range_page_yields_empty_window() {
        let recs = records(5);
        let page = paginate(&recs, 7);
        assert!(page.rows.is_empty());
        assert_eq!(page.page_number, 7);
        assert_eq!(page.total_pages, 1);
    }

    #[test]
    fn page_zero_is_clamped_to_first() {
        let recs = records(3);
        let page = paginate(&recs, 0);
        assert_eq!(page.rows.len(), 3);
    }
}
