//! Behavior tests for the monthly gainers/losers analyzer.

use time::macros::date;

use tickerlens_core::analysis::monthly;
use tickerlens_core::MonthKey;
use tickerlens_tests::{dated_series, daily_series};

#[test]
fn when_a_series_has_two_month_ends_one_month_is_ranked() {
    // Given: January closes at 100 (last observation wins) and February
    // closes at 110
    let series = dated_series(
        "A",
        &[
            (date!(2024 - 01 - 10), 90.0),
            (date!(2024 - 01 - 31), 100.0),
            (date!(2024 - 02 - 15), 105.0),
            (date!(2024 - 02 - 28), 110.0),
        ],
    );

    // When: monthly movers are computed
    let analysis = monthly::analyze(&[series], 5);

    // Then: only February is eligible and its return is (110-100)/100*100
    assert_eq!(analysis.months.len(), 1);
    let february = &analysis.months[0];
    assert_eq!(february.month, MonthKey { year: 2024, month: 2 });
    assert_eq!(february.gainers.len(), 1);
    assert!((february.gainers[0].value - 10.0).abs() < 1e-12);
}

#[test]
fn when_fewer_instruments_than_requested_lists_are_shorter() {
    let a = dated_series(
        "A",
        &[(date!(2024 - 01 - 31), 100.0), (date!(2024 - 02 - 29), 130.0)],
    );
    let b = dated_series(
        "B",
        &[(date!(2024 - 01 - 31), 100.0), (date!(2024 - 02 - 29), 70.0)],
    );

    let analysis = monthly::analyze(&[a, b], 5);
    let month = &analysis.months[0];

    assert_eq!(month.gainers.len(), 2);
    assert_eq!(month.losers.len(), 2);
}

#[test]
fn when_many_instruments_move_each_side_keeps_its_extremes() {
    // Given: seven instruments with spread-out February returns
    let returns: [(&str, f64); 7] = [
        ("A", 130.0),
        ("B", 120.0),
        ("C", 110.0),
        ("D", 100.0),
        ("E", 90.0),
        ("F", 80.0),
        ("G", 70.0),
    ];
    let series: Vec<_> = returns
        .iter()
        .map(|&(symbol, feb_close)| {
            dated_series(
                symbol,
                &[
                    (date!(2024 - 01 - 31), 100.0),
                    (date!(2024 - 02 - 29), feb_close),
                ],
            )
        })
        .collect();

    // When: ranked with two per side
    let analysis = monthly::analyze(&series, 2);
    let month = &analysis.months[0];

    // Then: gainers descend from the top, losers ascend from the bottom
    let gainers: Vec<&str> = month.gainers.iter().map(|r| r.label.as_str()).collect();
    let losers: Vec<&str> = month.losers.iter().map(|r| r.label.as_str()).collect();
    assert_eq!(gainers, vec!["A", "B"]);
    assert_eq!(losers, vec!["G", "F"]);
}

#[test]
fn when_calendars_differ_the_union_of_months_is_ranked() {
    // Given: A spans Jan..Mar, B spans Feb..Apr
    let a = dated_series(
        "A",
        &[
            (date!(2024 - 01 - 31), 100.0),
            (date!(2024 - 02 - 29), 110.0),
            (date!(2024 - 03 - 29), 121.0),
        ],
    );
    let b = dated_series(
        "B",
        &[
            (date!(2024 - 02 - 29), 50.0),
            (date!(2024 - 03 - 29), 55.0),
            (date!(2024 - 04 - 30), 60.5),
        ],
    );

    // When: analyzed
    let analysis = monthly::analyze(&[a, b], 5);

    // Then: Feb (A only), Mar (both), Apr (B only)
    let months: Vec<MonthKey> = analysis.months.iter().map(|m| m.month).collect();
    assert_eq!(
        months,
        vec![
            MonthKey { year: 2024, month: 2 },
            MonthKey { year: 2024, month: 3 },
            MonthKey { year: 2024, month: 4 },
        ]
    );
    assert_eq!(analysis.months[1].gainers.len(), 2);
}

#[test]
fn when_a_series_spans_one_month_it_is_skipped() {
    let series = daily_series("A", date!(2024 - 01 - 02), &[100.0, 101.0, 102.0]);
    let analysis = monthly::analyze(&[series], 5);

    assert!(analysis.months.is_empty());
    assert_eq!(analysis.skipped, vec!["A".to_owned()]);
}

#[test]
fn when_exported_each_month_gets_its_own_name() {
    let a = dated_series(
        "A",
        &[(date!(2024 - 01 - 31), 100.0), (date!(2024 - 02 - 29), 110.0)],
    );
    let analysis = monthly::analyze(&[a], 5);

    assert_eq!(analysis.months[0].export_name(), "2024_02_gainers_losers");
    let table = analysis.months[0].to_table();
    assert_eq!(
        table.columns,
        vec!["Gainer", "Gainer_Return", "Loser", "Loser_Return"]
    );
    assert_eq!(table.rows.len(), 1);
}
