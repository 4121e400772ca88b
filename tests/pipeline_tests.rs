mod support;

use std::sync::Arc;
use std::time::Duration;

use rust_decimal_macros::dec;

use insiderwatch::adapter::outbound::memory::MemorySeenStore;
use insiderwatch::application::{CycleRunner, Deduplicator, Enricher, Scheduler};
use insiderwatch::domain::{OwnershipType, Policy, PolicyPreset, ReasonTag};
use insiderwatch::port::{Notifier, NotifierRegistry};

use support::market::FixedMarketData;
use support::notifier::{FailingNotifier, RecordingNotifier};
use support::source::{Fetch, ScriptedSource};
use support::table::{table, Row};

fn runner(
    source: ScriptedSource,
    market: FixedMarketData,
    notifier: impl Notifier + 'static,
    policy: Policy,
) -> CycleRunner {
    let mut registry = NotifierRegistry::new();
    registry.register(Box::new(notifier));
    CycleRunner::new(
        Arc::new(source),
        Deduplicator::new(Arc::new(MemorySeenStore::new())),
        Enricher::new(Arc::new(market), Duration::from_secs(1)),
        Arc::new(registry),
        policy,
    )
}

fn cfo_row(filed: &'static str) -> Row {
    Row {
        ticker: "FIN",
        company: "Fin Holdings",
        buyer: "Roe Richard",
        title: "Chief Financial Officer",
        traded: "2024-03-01",
        filed,
        ownership: "D",
        value: "$500,000",
    }
}

#[tokio::test]
async fn whale_row_qualifies_and_is_notified() {
    let notifier = RecordingNotifier::new();
    let policy = Policy {
        whale_threshold: dec!(2_000_000),
        ..Policy::default()
    };
    let runner = runner(
        ScriptedSource::fixed(table(&[Row::default()])),
        FixedMarketData::new(),
        notifier.clone(),
        policy,
    );

    let summary = runner.run_once().await;

    assert_eq!(summary.rows_fetched, 1);
    assert_eq!(summary.candidates, 1);
    assert_eq!(summary.qualified, 1);
    assert_eq!(summary.notified, 1);

    let alerts = notifier.alerts();
    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0].record.ticker, "ABC");
    assert_eq!(alerts[0].record.buyer_name, "Jane Doe");
    assert_eq!(alerts[0].record.invested_amount, dec!(25000000));
    assert_eq!(alerts[0].verdict.reasons, vec![ReasonTag::Whale]);
}

#[tokio::test]
async fn same_row_twice_in_one_table_notifies_once() {
    let notifier = RecordingNotifier::new();
    let runner = runner(
        ScriptedSource::fixed(table(&[Row::default(), Row::default()])),
        FixedMarketData::new(),
        notifier.clone(),
        Policy::default(),
    );

    let summary = runner.run_once().await;

    assert_eq!(summary.candidates, 2);
    assert_eq!(summary.evaluated, 1);
    assert_eq!(summary.already_seen, 1);
    assert_eq!(notifier.len(), 1);
}

#[tokio::test]
async fn same_row_in_later_cycle_is_not_renotified() {
    let notifier = RecordingNotifier::new();
    let market = FixedMarketData::new();
    let runner = runner(
        ScriptedSource::fixed(table(&[Row::default()])),
        market.clone(),
        notifier.clone(),
        Policy::default(),
    );

    runner.run_once().await;
    let second = runner.run_once().await;

    assert_eq!(second.already_seen, 1);
    assert_eq!(second.evaluated, 0);
    assert_eq!(notifier.len(), 1);
    assert_eq!(market.lookups(), vec!["ABC".to_string()]);
}

#[tokio::test]
async fn cfo_direct_with_next_day_filing_qualifies() {
    let notifier = RecordingNotifier::new();
    let runner = runner(
        ScriptedSource::fixed(table(&[cfo_row("2024-03-02")])),
        FixedMarketData::new(),
        notifier.clone(),
        Policy::preset(PolicyPreset::CfoDirect),
    );

    let summary = runner.run_once().await;

    assert_eq!(summary.qualified, 1);
    let alerts = notifier.alerts();
    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0].record.ownership_type, OwnershipType::Direct);
    assert_eq!(alerts[0].verdict.reporting_lag_days, Some(1));
    assert_eq!(alerts[0].verdict.reasons, vec![ReasonTag::CfoDirect]);
}

#[tokio::test]
async fn cfo_direct_with_late_filing_does_not_qualify() {
    let notifier = RecordingNotifier::new();
    let runner = runner(
        ScriptedSource::fixed(table(&[cfo_row("2024-03-05")])),
        FixedMarketData::new(),
        notifier.clone(),
        Policy::preset(PolicyPreset::CfoDirect),
    );

    let summary = runner.run_once().await;

    assert_eq!(summary.evaluated, 1);
    assert_eq!(summary.qualified, 0);
    assert_eq!(summary.seen_total, 1);
    assert_eq!(notifier.len(), 0);
}

#[tokio::test]
async fn unavailable_market_cap_blocks_impact_only_row() {
    let notifier = RecordingNotifier::new();
    let market = FixedMarketData::new();
    let row = Row {
        value: "$3,000,000",
        ..Row::default()
    };
    let runner = runner(
        ScriptedSource::fixed(table(&[row])),
        market.clone(),
        notifier.clone(),
        Policy::default(),
    );

    let summary = runner.run_once().await;

    assert_eq!(summary.candidates, 1);
    assert_eq!(summary.qualified, 0);
    assert_eq!(summary.market_cap_unavailable, 1);
    assert_eq!(summary.seen_total, 1);
    assert_eq!(notifier.len(), 0);

    // Not retried on the next cycle.
    let second = runner.run_once().await;
    assert_eq!(second.already_seen, 1);
    assert_eq!(market.lookups().len(), 1);
}

#[tokio::test]
async fn known_market_cap_fires_relative_impact() {
    let notifier = RecordingNotifier::new();
    let row = Row {
        value: "$3,000,000",
        ..Row::default()
    };
    let runner = runner(
        ScriptedSource::fixed(table(&[row])),
        FixedMarketData::new().with_cap("ABC", dec!(1_000_000_000)),
        notifier.clone(),
        Policy::default(),
    );

    runner.run_once().await;

    let alerts = notifier.alerts();
    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0].market_cap, Some(dec!(1_000_000_000)));
    assert_eq!(alerts[0].verdict.impact_pct, dec!(0.3));
    assert_eq!(
        alerts[0].verdict.reasons,
        vec![ReasonTag::Impact {
            threshold_pct: dec!(0.1)
        }]
    );
}

#[tokio::test]
async fn rows_below_prefilter_are_never_looked_up() {
    let market = FixedMarketData::new();
    let row = Row {
        value: "$150,000",
        ..Row::default()
    };
    let runner = runner(
        ScriptedSource::fixed(table(&[row])),
        market.clone(),
        RecordingNotifier::new(),
        Policy::default(),
    );

    let summary = runner.run_once().await;

    assert_eq!(summary.rows_fetched, 1);
    assert_eq!(summary.candidates, 0);
    assert_eq!(summary.seen_total, 0);
    assert!(market.lookups().is_empty());
}

#[tokio::test]
async fn fetch_failure_leaves_seen_set_untouched() {
    let notifier = RecordingNotifier::new();
    let source = ScriptedSource::new(vec![
        Fetch::Fail(503),
        Fetch::Table(table(&[Row::default()])),
    ]);
    let runner = runner(
        source.clone(),
        FixedMarketData::new(),
        notifier.clone(),
        Policy::default(),
    );

    let first = runner.run_once().await;
    assert!(first.fetch_failed);
    assert_eq!(first.seen_total, 0);
    assert_eq!(notifier.len(), 0);

    let second = runner.run_once().await;
    assert!(!second.fetch_failed);
    assert_eq!(second.notified, 1);
    assert_eq!(source.fetches(), 2);
}

#[tokio::test]
async fn failed_notification_still_marks_seen() {
    let notifier = FailingNotifier::new();
    let runner = runner(
        ScriptedSource::fixed(table(&[Row::default()])),
        FixedMarketData::new(),
        notifier.clone(),
        Policy::default(),
    );

    let first = runner.run_once().await;
    assert_eq!(first.qualified, 1);
    assert_eq!(first.notify_failed, 1);
    assert_eq!(first.seen_total, 1);

    let second = runner.run_once().await;
    assert_eq!(second.already_seen, 1);
    assert_eq!(notifier.attempts(), 1);
}

#[tokio::test]
async fn dry_run_sends_nothing_but_marks_seen() {
    let notifier = RecordingNotifier::new();
    let runner = runner(
        ScriptedSource::fixed(table(&[Row::default()])),
        FixedMarketData::new(),
        notifier.clone(),
        Policy::default(),
    )
    .with_dry_run(true);

    let summary = runner.run_once().await;

    assert_eq!(summary.qualified, 1);
    assert_eq!(summary.notified, 0);
    assert_eq!(summary.seen_total, 1);
    assert_eq!(notifier.len(), 0);
}

#[tokio::test]
async fn policy_without_cap_predicates_looks_up_only_qualifying_rows() {
    let market = FixedMarketData::new().with_cap("FIN", dec!(800_000_000));
    let notifier = RecordingNotifier::new();
    let late = Row {
        ticker: "LATE",
        ..cfo_row("2024-03-05")
    };
    let runner = runner(
        ScriptedSource::fixed(table(&[late, cfo_row("2024-03-02")])),
        market.clone(),
        notifier.clone(),
        Policy::preset(PolicyPreset::CfoDirect),
    );

    runner.run_once().await;

    assert_eq!(market.lookups(), vec!["FIN".to_string()]);
    assert_eq!(notifier.alerts()[0].market_cap, Some(dec!(800_000_000)));
}

#[tokio::test]
async fn empty_ticker_skips_lookup_but_can_still_qualify() {
    let market = FixedMarketData::new();
    let notifier = RecordingNotifier::new();
    let row = Row {
        ticker: "",
        ..Row::default()
    };
    let runner = runner(
        ScriptedSource::fixed(table(&[row])),
        market.clone(),
        notifier.clone(),
        Policy::default(),
    );

    let summary = runner.run_once().await;

    assert_eq!(summary.qualified, 1);
    assert!(market.lookups().is_empty());
    assert_eq!(notifier.alerts()[0].verdict.reasons, vec![ReasonTag::Whale]);
}

#[tokio::test]
async fn rows_are_evaluated_in_source_order() {
    let notifier = RecordingNotifier::new();
    let rows = [
        Row {
            ticker: "ZZZ",
            ..Row::default()
        },
        Row {
            ticker: "AAA",
            ..Row::default()
        },
        Row {
            ticker: "MMM",
            ..Row::default()
        },
    ];
    let runner = runner(
        ScriptedSource::fixed(table(&rows)),
        FixedMarketData::new(),
        notifier.clone(),
        Policy::default(),
    );

    runner.run_once().await;

    assert_eq!(notifier.tickers(), vec!["ZZZ", "AAA", "MMM"]);
}

#[tokio::test]
async fn panicking_row_does_not_stop_the_cycle() {
    let notifier = RecordingNotifier::new();
    let rows = [
        Row {
            ticker: "BAD",
            ..Row::default()
        },
        Row {
            ticker: "GOOD",
            ..Row::default()
        },
    ];
    let runner = runner(
        ScriptedSource::fixed(table(&rows)),
        FixedMarketData::new().panicking_on("BAD"),
        notifier.clone(),
        Policy::default(),
    );

    let summary = runner.run_once().await;

    assert_eq!(summary.candidates, 2);
    assert_eq!(summary.row_failures, 1);
    assert_eq!(summary.evaluated, 1);
    assert_eq!(summary.notified, 1);
    assert_eq!(summary.seen_total, 2);
    assert_eq!(notifier.tickers(), vec!["GOOD"]);

    // The failed row is not retried either.
    let second = runner.run_once().await;
    assert_eq!(second.already_seen, 2);
    assert_eq!(second.row_failures, 0);
    assert_eq!(notifier.len(), 1);
}

#[tokio::test]
async fn scheduler_survives_a_panicking_cycle() {
    let notifier = RecordingNotifier::new();
    let source = ScriptedSource::new(vec![
        Fetch::Panic,
        Fetch::Panic,
        Fetch::Table(table(&[Row::default()])),
    ]);
    let runner = runner(
        source.clone(),
        FixedMarketData::new(),
        notifier.clone(),
        Policy::default(),
    );
    let scheduler = Scheduler::new(runner, Duration::from_millis(10));

    assert!(scheduler.tick().await.is_none());
    assert_eq!(scheduler.runner().dedup().len(), 0);

    let cycles = scheduler
        .run_until(tokio::time::sleep(Duration::from_millis(200)))
        .await;

    assert!(cycles >= 2, "expected the loop to keep going, got {cycles}");
    assert!(source.fetches() >= 3);
    assert_eq!(notifier.len(), 1);
}

#[tokio::test]
async fn scheduler_keeps_polling_and_notifies_once() {
    let notifier = RecordingNotifier::new();
    let source = ScriptedSource::new(vec![
        Fetch::Fail(500),
        Fetch::Table(table(&[Row::default()])),
    ]);
    let runner = runner(
        source.clone(),
        FixedMarketData::new(),
        notifier.clone(),
        Policy::default(),
    );
    let scheduler = Scheduler::new(runner, Duration::from_millis(10));

    let cycles = scheduler
        .run_until(tokio::time::sleep(Duration::from_millis(200)))
        .await;

    assert!(cycles >= 3, "expected several cycles, got {cycles}");
    assert!(source.fetches() >= 3);
    assert_eq!(notifier.len(), 1);
}
