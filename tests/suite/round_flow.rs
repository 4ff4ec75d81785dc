//! Round lifecycle tests driven through the public engine API

use std::time::Duration;

use handcount_engine::{
    AnswerResult, Outcome, ROUND_SECONDS, RoundEngine, RoundPhase, Scoreboard, TimeoutResult,
    TokioScheduler,
};

use crate::common::{RecordingView, n, seeded_engine};

#[test]
fn seven_with_streak_two_scores_forty() {
    let mut engine = seeded_engine(7).with_scoreboard(Scoreboard::new(0, 2));
    let mut view = RecordingView::default();

    engine.start_round_with(n(7), &mut view);
    assert_eq!(view.hands, vec![vec![5, 2]]);
    assert!(view.options[0].contains(&n(7)));

    assert_eq!(engine.advance(5), None);
    assert_eq!(engine.round().unwrap().time_remaining(), 10);

    let result = engine.submit_answer(7).unwrap();
    assert_eq!(
        result,
        Some(AnswerResult {
            is_correct: true,
            points_awarded: 40,
            correct_number: n(7),
        })
    );
    assert_eq!(engine.score(), 40);
    assert_eq!(engine.streak(), 3);
    assert_eq!(engine.phase(), RoundPhase::Resolved(Outcome::Correct));
    assert_eq!(engine.scheduler().running(), 0);
}

#[test]
fn resolved_round_ignores_further_events() {
    let mut engine = seeded_engine(1);
    let mut view = RecordingView::default();

    let target = engine.start_round(&mut view).target();
    engine.submit_answer(target.get()).unwrap();
    let board = engine.scoreboard();

    assert_eq!(engine.submit_answer(target.get()).unwrap(), None);
    assert_eq!(engine.on_timeout(), None);
    assert_eq!(engine.advance(ROUND_SECONDS), None);
    assert_eq!(engine.scoreboard(), board);
    assert_eq!(engine.stats().rounds, 1);
}

#[test]
fn wrong_answer_then_timeout_round() {
    let mut engine = seeded_engine(3).with_scoreboard(Scoreboard::new(90, 4));
    let mut view = RecordingView::default();

    let target = engine.start_round(&mut view).target();
    let wrong = if target == n(1) { 2 } else { 1 };
    let result = engine.submit_answer(wrong).unwrap().unwrap();
    assert!(!result.is_correct);
    assert_eq!(result.points_awarded, 0);
    assert_eq!(engine.streak(), 0);
    assert_eq!(engine.score(), 90);

    let target = engine.start_round(&mut view).target();
    assert_eq!(engine.advance(ROUND_SECONDS - 1), None);
    assert_eq!(
        engine.advance(1),
        Some(TimeoutResult {
            correct_number: target
        })
    );
    assert_eq!(engine.round().unwrap().time_remaining(), 0);
    assert_eq!(engine.score(), 90);

    let stats = engine.stats();
    assert_eq!((stats.incorrect, stats.timeouts, stats.rounds), (1, 1, 2));
    assert_eq!(view.feedback_resets, 2);
}

#[test]
fn out_of_range_answer_leaves_round_open() {
    let mut engine = seeded_engine(11);
    let mut view = RecordingView::default();
    engine.start_round(&mut view);

    let err = engine.submit_answer(0).unwrap_err();
    assert_eq!(err.value, 0);
    assert!(engine.submit_answer(11).is_err());
    assert_eq!(engine.phase(), RoundPhase::InProgress);
    assert_eq!(engine.scheduler().running(), 1);
}

#[test]
fn restarting_mid_round_cancels_old_timer() {
    let mut engine = seeded_engine(5);
    let mut view = RecordingView::default();

    engine.start_round(&mut view);
    let old = engine.timer().unwrap().tick();
    engine.start_round(&mut view);

    assert_eq!(engine.scheduler().running(), 1);
    assert!(engine.scheduler().issued()[0].is_cancelled());
    for _ in 0..ROUND_SECONDS {
        assert_eq!(engine.on_tick(old), None);
    }
    assert_eq!(engine.round().unwrap().time_remaining(), ROUND_SECONDS);
}

#[tokio::test(start_paused = true)]
async fn tokio_countdown_times_out_after_fifteen_ticks() {
    let (scheduler, mut ticks) = TokioScheduler::new();
    let mut engine = RoundEngine::new(scheduler);
    let mut view = RecordingView::default();

    let target = engine.start_round(&mut view).target();

    let mut delivered = 0;
    let result = loop {
        let tick = ticks.recv().await.unwrap();
        delivered += 1;
        if let Some(result) = engine.on_tick(tick) {
            break result;
        }
    };

    assert_eq!(delivered, ROUND_SECONDS);
    assert_eq!(result.correct_number, target);

    tokio::time::sleep(Duration::from_secs(3)).await;
    assert!(ticks.try_recv().is_err());
}
