// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! End-to-end runs of the sorter against an in-memory platform.

use strava_activity_sorter::error::AppError;
use strava_activity_sorter::services::{ActivitySorter, Classification, DEFAULT_LOOKBACK_DAYS};

mod common;
use common::{load_fixture, Call, FakePlatform};

#[tokio::test]
async fn test_run_applies_updates_in_fetch_order() {
    let sorter = ActivitySorter::new(FakePlatform::with_activities(load_fixture()));

    let summary = sorter.run(DEFAULT_LOOKBACK_DAYS).await.unwrap();

    assert_eq!(
        sorter.platform().calls(),
        vec![
            Call::MarkCommute(101),
            Call::Hide(101),
            Call::MarkCommute(102),
            Call::Hide(102),
            Call::MarkCommute(103),
            Call::Hide(103),
            Call::Hide(107),
            Call::Hide(108),
        ]
    );
    assert_eq!(*sorter.platform().requested_days.lock().unwrap(), Some(1));

    assert_eq!(summary.fetched, 11);
    assert_eq!(summary.commutes, 3);
    assert_eq!(summary.hidden, 5);
    assert_eq!(summary.skipped, 2);
    assert_eq!(summary.ignored, 4);
    assert_eq!(summary.failed_updates, 0);
}

#[tokio::test]
async fn test_mywhoosh_activities_get_no_calls() {
    let sorter = ActivitySorter::new(FakePlatform::with_activities(load_fixture()));
    let summary = sorter.run(3).await.unwrap();

    for id in [106, 111] {
        assert!(!sorter
            .platform()
            .calls()
            .iter()
            .any(|c| *c == Call::MarkCommute(id) || *c == Call::Hide(id)));

        let outcome = summary
            .outcomes
            .iter()
            .find(|o| o.activity_id == id)
            .unwrap();
        assert_eq!(outcome.classification, Classification::Skip);
        assert_eq!(outcome.commute_marked, None);
        assert_eq!(outcome.hidden, None);
    }
    assert_eq!(*sorter.platform().requested_days.lock().unwrap(), Some(3));
}

#[tokio::test]
async fn test_walk_and_yoga_are_never_marked_commute() {
    let sorter = ActivitySorter::new(FakePlatform::with_activities(load_fixture()));
    sorter.run(1).await.unwrap();

    let calls = sorter.platform().calls();
    for id in [107, 108] {
        assert!(calls.contains(&Call::Hide(id)));
        assert!(!calls.contains(&Call::MarkCommute(id)));
    }
}

#[tokio::test]
async fn test_failed_updates_do_not_abort_run() {
    let mut platform = FakePlatform::with_activities(load_fixture());
    platform.failing_ids.insert(101);
    platform.failing_ids.insert(107);
    let sorter = ActivitySorter::new(platform);

    let summary = sorter.run(1).await.unwrap();

    // Hide is still attempted after the commute flag fails.
    let calls = sorter.platform().calls();
    assert_eq!(&calls[..2], &[Call::MarkCommute(101), Call::Hide(101)]);
    assert!(calls.contains(&Call::Hide(108)));

    assert_eq!(summary.fetched, 11);
    assert_eq!(summary.commutes, 3);
    assert_eq!(summary.failed_updates, 3);
    assert_eq!(summary.hidden, 3);

    let first = &summary.outcomes[0];
    assert_eq!(first.commute_marked, Some(false));
    assert_eq!(first.hidden, Some(false));
}

#[tokio::test]
async fn test_token_failure_is_fatal() {
    let platform = FakePlatform {
        fail_token: true,
        ..FakePlatform::with_activities(load_fixture())
    };
    let sorter = ActivitySorter::new(platform);

    let err = sorter.run(1).await.unwrap_err();

    assert!(matches!(err, AppError::TokenExchange(_)));
    assert!(sorter.platform().calls().is_empty());
    assert_eq!(*sorter.platform().requested_days.lock().unwrap(), None);
}

#[tokio::test]
async fn test_empty_fetch_does_nothing() {
    let sorter = ActivitySorter::new(FakePlatform::default());

    let summary = sorter.run(1).await.unwrap();

    assert_eq!(summary.fetched, 0);
    assert!(summary.outcomes.is_empty());
    assert!(sorter.platform().calls().is_empty());
}
