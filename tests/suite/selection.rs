//! Target and option selection across many rounds

use std::collections::BTreeSet;

use handcount_engine::{Number, OPTION_COUNT, RECENT_CAPACITY};

use crate::common::{RecordingView, seeded_engine};

#[test]
fn every_round_offers_four_distinct_options_with_the_answer() {
    let mut engine = seeded_engine(2024);
    let mut view = RecordingView::default();

    for _ in 0..300 {
        let round = engine.start_round(&mut view).clone();
        let distinct: BTreeSet<Number> = round.options().iter().copied().collect();

        assert_eq!(distinct.len(), OPTION_COUNT);
        assert!(distinct.contains(&round.target()));
        assert!(engine.recent().contains(round.target()));
        assert!(engine.recent().len() <= RECENT_CAPACITY);

        engine.submit_answer(round.target().get()).unwrap();
    }
}

#[test]
fn hands_always_add_up_to_target() {
    let mut engine = seeded_engine(17);
    let mut view = RecordingView::default();

    for _ in 0..100 {
        let target = engine.start_round(&mut view).target();
        let hands = view.hands.last().unwrap();
        assert_eq!(hands.iter().sum::<u8>(), target.get());
        assert!(hands.iter().all(|&fingers| (1..=5).contains(&fingers)));
    }
}

#[test]
fn all_targets_eventually_appear() {
    let mut engine = seeded_engine(99);
    let mut view = RecordingView::default();
    let mut seen = BTreeSet::new();

    for _ in 0..500 {
        seen.insert(engine.start_round(&mut view).target());
    }

    assert_eq!(seen.len(), Number::SPAN);
}
