//! Integration tests for `Term` and the month/pair partitioning.
//!
//! The property block checks the two partition guarantees on arbitrary
//! ascending date lists: no date is lost or duplicated by month grouping,
//! and a group of N dates always yields ceil(N/2) pairs.

use proptest::prelude::*;
use rb_time::{group_by_month, Date, Term};

fn date(y: u16, m: u8, d: u8) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

fn add_days(start: Date, n: u32) -> Date {
    let mut d = start;
    for _ in 0..n {
        d = d.next_day().unwrap();
    }
    d
}

#[test]
fn test_term_partition_end_to_end() {
    // A short term crossing a month boundary with a weekend inside.
    let term = Term::from_dates(vec![
        date(2024, 11, 28),
        date(2024, 11, 29),
        date(2024, 12, 2),
        date(2024, 12, 3),
        date(2024, 12, 4),
    ])
    .unwrap();

    let groups = group_by_month(term.dates());
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].label(), "November");
    assert_eq!(groups[1].label(), "December");

    let nov = groups[0].pairs();
    assert_eq!(nov.len(), 1);
    assert_eq!(nov[0].second, Some(date(2024, 11, 29)));

    let dec = groups[1].pairs();
    assert_eq!(dec.len(), 2);
    assert_eq!(dec[1].first, date(2024, 12, 4));
    assert_eq!(dec[1].second, None);
}

#[test]
fn test_empty_term_partitions_to_nothing() {
    let term = Term::empty();
    assert!(group_by_month(term.dates()).is_empty());
}

// ── Property tests ────────────────────────────────────────────────────────────

/// Ascending, duplicate-free date lists starting near 2024-01-01.
fn arb_ascending_dates() -> impl Strategy<Value = Vec<Date>> {
    proptest::collection::btree_set(0u32..400, 0..40).prop_map(|offsets| {
        let base = Date::from_ymd(2024, 1, 1).unwrap();
        offsets.into_iter().map(|n| add_days(base, n)).collect()
    })
}

proptest! {
    #[test]
    fn prop_month_grouping_loses_nothing(dates in arb_ascending_dates()) {
        let groups = group_by_month(&dates);
        let regrouped: Vec<Date> = groups.iter().flat_map(|g| g.dates().iter().copied()).collect();
        // Ascending input groups back into the original sequence.
        prop_assert_eq!(regrouped, dates.clone());
        for g in &groups {
            for d in g.dates() {
                prop_assert_eq!(d.year(), g.year());
                prop_assert_eq!(d.month_of_year(), g.month());
            }
        }
    }

    #[test]
    fn prop_pair_count_is_ceil_half(dates in arb_ascending_dates()) {
        for g in group_by_month(&dates) {
            let pairs = g.pairs();
            prop_assert_eq!(pairs.len(), (g.len() + 1) / 2);
            let odd = g.len() % 2 == 1;
            if let Some(last) = pairs.last() {
                prop_assert_eq!(last.second.is_none(), odd);
            }
            let flattened: Vec<Date> = pairs
                .iter()
                .flat_map(|p| std::iter::once(p.first).chain(p.second))
                .collect();
            prop_assert_eq!(flattened, g.dates().to_vec());
        }
    }
}
