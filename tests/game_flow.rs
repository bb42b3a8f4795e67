//! End-to-end rounds through the public state machine API

use charadas::app::{GameEvent, Screen, ScreenController, Signal};
use charadas::models::{Category, WordBank};

fn count_round_ends(signals: &[Signal]) -> usize {
    signals
        .iter()
        .filter(|s| matches!(s, Signal::RoundEnded { .. }))
        .count()
}

/// Drive the countdown until the round starts
fn play(controller: &mut ScreenController, category: Category) -> Vec<Signal> {
    let mut signals = controller.handle(GameEvent::SelectCategory(category));
    while controller.screen() == Screen::Countdown {
        signals.extend(controller.handle(GameEvent::SecondElapsed));
    }
    signals
}

#[test]
fn test_full_round_on_default_words() {
    let mut controller = ScreenController::new();
    let signals = play(&mut controller, Category::Movies);
    assert!(signals.contains(&Signal::ShowWord("Titanic".to_string())));
    assert!(signals.contains(&Signal::ClockTick(60)));

    // guess every other word until the list runs out
    let mut signals = Vec::new();
    for i in 0..20 {
        let event = if i % 2 == 0 {
            GameEvent::MarkCorrect
        } else {
            GameEvent::Pass
        };
        signals.extend(controller.handle(event));
    }

    assert_eq!(count_round_ends(&signals), 1);
    assert_eq!(controller.screen(), Screen::WonRecord);
    assert_eq!(controller.state().high_score, 10);
    assert_eq!(controller.state().last_score, 10);
}

#[test]
fn test_clock_runs_out_before_words() {
    let mut controller = ScreenController::new();
    controller.handle(GameEvent::OpenSettings);
    controller.handle(GameEvent::ChangeDuration(10));
    controller.handle(GameEvent::BackToMenu);
    assert_eq!(controller.state().round_duration_seconds, 30);

    play(&mut controller, Category::Professions);
    controller.handle(GameEvent::MarkCorrect);
    controller.handle(GameEvent::MarkCorrect);

    let mut signals = Vec::new();
    for _ in 0..29 {
        signals.extend(controller.handle(GameEvent::SecondElapsed));
    }
    assert_eq!(count_round_ends(&signals), 0);
    assert_eq!(controller.session().map(|s| s.remaining_seconds()), Some(1));

    let last = controller.handle(GameEvent::SecondElapsed);
    assert_eq!(count_round_ends(&last), 1);
    assert!(last.contains(&Signal::RoundEnded {
        score: 2,
        new_record: true
    }));
}

#[test]
fn test_record_only_improves() {
    let mut controller = ScreenController::new();

    let run_round = |controller: &mut ScreenController, correct: usize| {
        play(controller, Category::Animals);
        for _ in 0..correct {
            controller.handle(GameEvent::MarkCorrect);
        }
        while controller.screen() == Screen::Playing {
            controller.handle(GameEvent::SecondElapsed);
        }
        let outcome = controller.screen();
        controller.handle(GameEvent::BackToMenu);
        outcome
    };

    assert_eq!(run_round(&mut controller, 5), Screen::WonRecord);
    assert_eq!(run_round(&mut controller, 5), Screen::LostRecord);
    assert_eq!(controller.state().high_score, 5);
    assert_eq!(run_round(&mut controller, 3), Screen::LostRecord);
    assert_eq!(controller.state().last_score, 3);
    assert_eq!(run_round(&mut controller, 6), Screen::WonRecord);
    assert_eq!(controller.state().high_score, 6);
}

#[test]
fn test_cancelled_countdown_delivers_nothing_more() {
    let mut controller = ScreenController::new();
    controller.handle(GameEvent::SelectCategory(Category::Animals));
    controller.handle(GameEvent::SecondElapsed);
    let epoch = controller.timer_epoch();
    assert!(epoch.is_some());

    // finishing early replaces the countdown timer with the round clock
    controller.handle(GameEvent::CountdownFinished);
    assert_ne!(controller.timer_epoch(), epoch);
    let late = controller.handle(GameEvent::CountdownFinished);
    assert!(late.is_empty());
}

#[test]
fn test_empty_category_ends_without_showing_words() {
    let mut bank = WordBank::empty();
    bank.add_word(Category::Movies, "Shrek");
    let state = charadas::app::AppState {
        word_bank: bank,
        ..Default::default()
    };
    let mut controller = ScreenController::with_state(state);

    let signals = play(&mut controller, Category::Animals);
    assert_eq!(count_round_ends(&signals), 1);
    assert!(signals.contains(&Signal::RoundEnded {
        score: 0,
        new_record: false
    }));
    assert!(!signals.iter().any(|s| matches!(s, Signal::ShowWord(_))));
    assert_eq!(controller.screen(), Screen::LostRecord);
}
