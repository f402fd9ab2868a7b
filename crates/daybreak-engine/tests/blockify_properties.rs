//! Property tests for blocking, cycle projection and gap analysis.
//!
//! Bookings are generated on a minute grid over a week so the 24-hour
//! projection can be checked against a brute-force minute-by-minute map.

use chrono::{DateTime, TimeDelta, TimeZone, Utc};
use daybreak_engine::{
    blockify, cycle_coverage, durations_to_bookings, end_of_first_day, gaps, new_event,
    wrap_blocks, wrap_durations, Block, Booking, DaybreakError,
};
use proptest::prelude::*;

const MINUTES_PER_DAY: i64 = 24 * 60;

fn minute(m: i64) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 2, 0, 0, 0).unwrap() + TimeDelta::minutes(m)
}

fn to_bookings(raw: &[(i64, i64)]) -> Vec<Booking> {
    raw.iter()
        .map(|&(start, len)| Booking::spanning(minute(start), minute(start + len)))
        .collect()
}

/// Up to 12 bookings starting within a week, each up to three days long.
fn arb_bookings() -> impl Strategy<Value = Vec<(i64, i64)>> {
    prop::collection::vec((0..7 * MINUTES_PER_DAY, 0..3 * MINUTES_PER_DAY), 1..12)
}

/// Bookings that are short relative to a day, so partial patterns are common.
fn arb_short_bookings() -> impl Strategy<Value = Vec<(i64, i64)>> {
    prop::collection::vec((0..7 * MINUTES_PER_DAY, 0..6 * 60i64), 1..12)
}

/// Minute-of-cycle occupancy, anchored at the earliest booking start.
fn minute_map(raw: &[(i64, i64)]) -> Vec<bool> {
    let reference = raw.iter().map(|&(start, _)| start).min().unwrap_or(0);
    let mut covered = vec![false; MINUTES_PER_DAY as usize];
    for &(start, len) in raw {
        for m in start..start + len.min(MINUTES_PER_DAY) {
            covered[(m - reference).rem_euclid(MINUTES_PER_DAY) as usize] = true;
        }
    }
    covered
}

fn assert_partition(blocks: &[Block], bookings: usize) {
    assert!(!blocks.is_empty(), "non-empty event produced no blocks");
    assert_eq!(blocks[0].seed, 0, "first block doesn't start with first booking");
    assert_eq!(
        blocks[blocks.len() - 1].last,
        bookings,
        "last block doesn't end with last booking"
    );
    for pair in blocks.windows(2) {
        assert_eq!(pair[0].last, pair[1].seed, "bookings fell between blocks");
    }
    for block in blocks {
        assert!(block.seed < block.last, "block contains no bookings");
    }
}

fn assert_block_shape(block: &Block) {
    let members = block.bookings();
    assert_eq!(block.start, members[0].start, "block start not aligned");

    let latest = members.iter().map(|b| b.end).max().unwrap();
    assert_eq!(block.end, latest, "block end is not the latest member end");
    for b in members {
        assert!(b.start >= block.start && b.end <= block.end);
    }

    // No gap inside: walking members in start order never finds one that
    // starts after everything seen so far has ended.
    let mut reach = members[0].end;
    for b in &members[1..] {
        assert!(b.start <= reach, "gap found within block at {reach}");
        reach = reach.max(b.end);
    }
}

proptest! {
    #[test]
    fn blocks_partition_and_contain_bookings(raw in arb_bookings()) {
        let event = new_event(&to_bookings(&raw));
        let blocks = blockify(&event);

        assert_partition(&blocks, event.len());
        for block in &blocks {
            assert_block_shape(block);
        }
        for pair in blocks.windows(2) {
            prop_assert!(pair[0].end < pair[1].start, "adjacent blocks touch or overlap");
        }
    }

    #[test]
    fn disjoint_bookings_give_one_block_each(
        steps in prop::collection::vec((1..600i64, 0..600i64), 1..12)
    ) {
        // Strictly positive spacing between consecutive bookings.
        let mut raw = Vec::new();
        let mut cursor = 0;
        for (gap, len) in steps {
            raw.push((cursor + gap, len));
            cursor += gap + len;
        }
        let event = new_event(&to_bookings(&raw));
        let blocks = blockify(&event);

        assert_partition(&blocks, raw.len());
        prop_assert_eq!(blocks.len(), raw.len());
        for (block, &(start, len)) in blocks.iter().zip(&raw) {
            prop_assert_eq!(block.start, minute(start));
            prop_assert_eq!(block.end, minute(start + len));
        }
    }

    #[test]
    fn chained_bookings_give_one_block(
        mut points in prop::collection::vec(0..7 * MINUTES_PER_DAY, 2..14)
    ) {
        points.sort();
        let raw: Vec<_> = points.windows(2).map(|p| (p[0], p[1] - p[0])).collect();
        let event = new_event(&to_bookings(&raw));
        let blocks = blockify(&event);

        assert_partition(&blocks, raw.len());
        prop_assert_eq!(blocks.len(), 1);
        prop_assert_eq!(blocks[0].start, minute(points[0]));
        prop_assert_eq!(blocks[0].end, minute(points[points.len() - 1]));
    }

    #[test]
    fn wrapped_spans_stay_inside_the_cycle(raw in arb_bookings()) {
        let blocks = blockify(&new_event(&to_bookings(&raw)));
        let wd = wrap_durations(&blocks);

        prop_assert_eq!(wd.spans[0].start, TimeDelta::zero());
        for span in &wd.spans {
            prop_assert!(TimeDelta::zero() <= span.start);
            prop_assert!(span.start <= span.end);
            prop_assert!(span.end <= TimeDelta::hours(24));
        }
        prop_assert_eq!(durations_to_bookings(&wd).len(), wd.spans.len());
    }

    #[test]
    fn cycle_coverage_matches_time_of_day_occupancy(raw in arb_short_bookings()) {
        let blocks = blockify(&new_event(&to_bookings(&raw)));
        let cycle = wrap_blocks(&blocks);
        let busy_minutes = minute_map(&raw).iter().filter(|&&m| m).count() as i64;

        prop_assert_eq!(cycle_coverage(&cycle), TimeDelta::minutes(busy_minutes));
        prop_assert_eq!(cycle[0].start, blocks[0].start);
        for pair in cycle.windows(2) {
            prop_assert!(pair[0].end < pair[1].start);
        }
    }

    #[test]
    fn gaps_and_coverage_fill_one_day(raw in arb_bookings()) {
        let cycle = wrap_blocks(&blockify(&new_event(&to_bookings(&raw))));
        let g = gaps(&cycle);
        let idle = g.iter().fold(TimeDelta::zero(), |acc, d| acc + *d);

        prop_assert_eq!(idle + cycle_coverage(&cycle), TimeDelta::hours(24));
        prop_assert!(g.len() == cycle.len() || g.len() + 1 == cycle.len());
        prop_assert!(g.iter().all(|d| *d > TimeDelta::zero()));
    }

    #[test]
    fn boundary_starts_an_idle_stretch(raw in arb_short_bookings()) {
        let blocks = blockify(&new_event(&to_bookings(&raw)));
        let occupancy = minute_map(&raw);
        let reference = blocks[0].start;

        match end_of_first_day(&blocks) {
            Ok(end) => {
                let offset = (end - reference).num_minutes();
                prop_assert!((0..MINUTES_PER_DAY).contains(&offset));
                prop_assert!(!occupancy[offset as usize], "boundary at busy minute {offset}");
            }
            Err(err) => {
                prop_assert!(matches!(err, DaybreakError::NoIdleGap(_)), "unexpected error: {}", err);
                prop_assert!(occupancy.iter().all(|&m| m));
            }
        }
    }
}
