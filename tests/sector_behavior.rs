//! Behavior tests for the sector aggregator and its join strategies.

use time::macros::date;

use tickerlens_core::analysis::sector;
use tickerlens_core::{JoinStrategy, SectorMap};
use tickerlens_tests::{daily_series, write_csv};

fn reference() -> SectorMap {
    SectorMap::new(
        vec![
            ("INFY".to_owned(), "IT".to_owned()),
            ("TCS".to_owned(), "IT".to_owned()),
            ("HDFCBANK".to_owned(), "Banking".to_owned()),
        ],
        JoinStrategy::ExactSymbol,
    )
    .expect("valid map")
}

#[test]
fn when_constituents_share_a_return_the_sector_mean_is_exact() {
    // Given: both IT instruments return exactly +25%
    let infy = daily_series("INFY", date!(2024 - 01 - 01), &[100.0, 125.0]);
    let tcs = daily_series("TCS", date!(2024 - 01 - 01), &[200.0, 250.0]);

    // When: sectors aggregate
    let analysis = sector::analyze(&[infy, tcs], &reference());

    // Then: the mean of identical values is that value, exactly
    assert_eq!(analysis.ranking.rows[0].label, "IT");
    assert_eq!(analysis.ranking.rows[0].value, 0.25);
}

#[test]
fn when_no_reference_row_matches_the_instrument_is_excluded() {
    let known = daily_series("INFY", date!(2024 - 01 - 01), &[100.0, 110.0]);
    let unknown = daily_series("ZOMATO", date!(2024 - 01 - 01), &[100.0, 300.0]);

    let analysis = sector::analyze(&[known, unknown], &reference());

    assert_eq!(analysis.ranking.len(), 1);
    assert_eq!(analysis.unmatched, vec!["ZOMATO".to_owned()]);
}

#[test]
fn when_sectors_rank_they_order_by_mean_return_descending() {
    let infy = daily_series("INFY", date!(2024 - 01 - 01), &[100.0, 110.0]); // +10%
    let tcs = daily_series("TCS", date!(2024 - 01 - 01), &[100.0, 130.0]); // +30%
    let hdfc = daily_series("HDFCBANK", date!(2024 - 01 - 01), &[100.0, 150.0]); // +50%

    let analysis = sector::analyze(&[infy, tcs, hdfc], &reference());

    // Banking (+50%) above IT (mean +20%)
    assert_eq!(analysis.ranking.rows[0].label, "Banking");
    assert!((analysis.ranking.rows[0].value - 0.5).abs() < 1e-12);
    assert_eq!(analysis.ranking.rows[1].label, "IT");
    assert!((analysis.ranking.rows[1].value - 0.2).abs() < 1e-12);
}

#[test]
fn when_prefix_join_is_selected_leading_fragments_match() {
    // Given: a reference whose symbols only share a 2-char prefix with the
    // instrument keys
    let map = SectorMap::new(
        vec![("HD1234".to_owned(), "Banking".to_owned())],
        JoinStrategy::Prefix(2),
    )
    .expect("valid map");
    let hdfc = daily_series("HDFCBANK", date!(2024 - 01 - 01), &[100.0, 120.0]);

    // When: aggregated with the legacy strategy
    let analysis = sector::analyze(&[hdfc], &map);

    // Then: the prefix join resolves the sector
    assert_eq!(analysis.ranking.rows[0].label, "Banking");
}

#[test]
fn when_reference_loads_from_csv_missing_columns_fail() {
    let dir = tempfile::tempdir().expect("tempdir");
    let good = write_csv(
        dir.path(),
        "sector.csv",
        "Symbol,sector\nINFY,IT\nHDFCBANK,Banking\n",
    );
    let bad = write_csv(dir.path(), "bad.csv", "Symbol,industry\nINFY,IT\n");

    let map = SectorMap::from_csv(&good, JoinStrategy::ExactSymbol).expect("must load");
    assert_eq!(map.len(), 2);

    let err = SectorMap::from_csv(&bad, JoinStrategy::ExactSymbol).expect_err("must fail");
    assert!(err.to_string().contains("sector"));
}
