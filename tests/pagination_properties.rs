//! Property-based tests for pagination invariants.
//!
//! For all record counts N and all pages p with itemsPerPage = 15:
//! - `total_pages == max(1, ceil(N / 15))`
//! - the rendered row count equals `min(15, N - (p-1)*15)` clamped to >= 0

use proptest::prelude::*;
use transferboard::model::TransferRecord;
use transferboard::state::{paginate, total_pages, ITEMS_PER_PAGE};

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

proptest! {
    #[test]
    fn total_pages_matches_ceiling_formula(n in 0usize..2000) {
        let expected = std::cmp::max(1, n.div_ceil(ITEMS_PER_PAGE));
        prop_assert_eq!(total_pages(n), expected);
    }

    #[test]
    fn rendered_row_count_is_clamped_window(n in 0usize..600, p in 1usize..60) {
        let recs = records(n);
        let page = paginate(&recs, p);

        let start = (p - 1) * ITEMS_PER_PAGE;
        let expected = n.saturating_sub(start).min(ITEMS_PER_PAGE);
        prop_assert_eq!(page.rows.len(), expected);
        prop_assert_eq!(page.page_number, p);
        prop_assert_eq!(page.total_pages, total_pages(n));
    }

    #[test]
    fn valid_pages_tile_the_dataset_without_gaps(n in 0usize..600) {
        let recs = records(n);
        let pages = total_pages(n);

        let mut seen = Vec::new();
        for p in 1..=pages {
            let page = paginate(&recs, p);
            seen.extend(page.rows.iter().map(|r| r.booking_ref.clone()));
        }

        let all: Vec<String> = recs.iter().map(|r| r.booking_ref.clone()).collect();
        prop_assert_eq!(seen, all);
    }

    #[test]
    fn out_of_range_page_never_panics(n in 0usize..100, p in 0usize..1000) {
        let recs = records(n);
        let page = paginate(&recs, p);
        prop_assert!(page.rows.len() <= ITEMS_PER_PAGE);
    }
}
