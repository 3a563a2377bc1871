//! Timed reversion tests for `SharedSession`.
//!
//! Run on tokio's paused clock, so sleeps advance virtual time instantly.

use std::time::Duration;

use pairs_engine::{SessionConfig, SharedSession, TapOutcome};

const DELAY: Duration = Duration::from_millis(800);

fn shared(pairs: usize) -> SharedSession {
    SharedSession::new(
        SessionConfig::new(pairs)
            .with_seed(17)
            .with_mismatch_delay(DELAY),
    )
    .unwrap()
}

/// Two indices holding different values.
async fn mismatched_pair(shared: &SharedSession) -> (usize, usize) {
    let session = shared.session().await;
    let x = (0..session.len())
        .find(|&i| session.card(i).unwrap().value() == 1)
        .unwrap();
    let y = (0..session.len())
        .find(|&i| session.card(i).unwrap().value() == 2)
        .unwrap();
    (x, y)
}

#[tokio::test(start_paused = true)]
async fn test_mismatch_flips_back_after_delay() {
    let shared = shared(4);
    let (x, y) = mismatched_pair(&shared).await;

    shared.tap(x).await.unwrap();
    assert!(matches!(shared.tap(y).await.unwrap(), TapOutcome::Mismatched(_)));

    tokio::time::sleep(DELAY / 2).await;
    let views = shared.snapshot().await;
    assert!(views[x].face_up && views[y].face_up);

    tokio::time::sleep(DELAY).await;
    let views = shared.snapshot().await;
    assert!(!views[x].face_up && !views[y].face_up);
    assert!(!views[x].matched && !views[y].matched);
}

/// Other cards can be played while a mismatch is showing.
#[tokio::test(start_paused = true)]
async fn test_taps_accepted_during_delay() {
    let shared = shared(4);
    let session = shared.session().await;
    let find = |value: u32| -> Vec<usize> {
        (0..session.len())
            .filter(|&i| session.card(i).unwrap().value() == value)
            .collect()
    };
    let (ones, twos, threes) = (find(1), find(2), find(3));

    shared.tap(ones[0]).await.unwrap();
    shared.tap(twos[0]).await.unwrap();

    // Mismatched cards are locked until they flip back.
    assert_eq!(shared.tap(ones[0]).await.unwrap(), TapOutcome::Ignored);

    shared.tap(threes[0]).await.unwrap();
    assert!(matches!(
        shared.tap(threes[1]).await.unwrap(),
        TapOutcome::Matched { .. }
    ));

    tokio::time::sleep(DELAY * 2).await;
    let views = shared.snapshot().await;
    assert!(!views[ones[0]].face_up);
    assert!(!views[twos[0]].face_up);
    assert!(views[threes[0]].matched && views[threes[1]].matched);
}

/// A reset inside the delay window leaves the new deck alone.
#[tokio::test(start_paused = true)]
async fn test_reset_cancels_pending_reversion() {
    let shared = shared(4);
    let (x, y) = mismatched_pair(&shared).await;

    shared.tap(x).await.unwrap();
    shared.tap(y).await.unwrap();
    tokio::time::sleep(DELAY / 4).await;

    shared.reset(4).await.unwrap();
    assert_eq!(shared.tap(x).await.unwrap(), TapOutcome::Revealed { index: x });

    tokio::time::sleep(DELAY * 2).await;
    let session = shared.session().await;
    assert!(session.card(x).unwrap().is_face_up());
    assert_eq!(session.pending_selection(), Some(x));
}

#[tokio::test(start_paused = true)]
async fn test_win_through_shared_session() {
    let shared = shared(2);
    let session = shared.session().await;

    for value in 1..=2 {
        let idx: Vec<_> = (0..session.len())
            .filter(|&i| session.card(i).unwrap().value() == value)
            .collect();
        shared.tap(idx[0]).await.unwrap();
        shared.tap(idx[1]).await.unwrap();
    }

    assert!(shared.is_won().await);
}
