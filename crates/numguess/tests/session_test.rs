//! Tests for the game session state machine.

use numguess::{
    Difficulty, FixedTargets, GameError, GameSession, GuessInput, GuessOutcome, Hint, Phase,
    RandomTargets, TARGET_MAX, TARGET_MIN, TargetReveal, TargetSource,
};

fn started_session(difficulty: Difficulty, target: u32) -> GameSession {
    let mut source = FixedTargets::always(target);
    let mut session = GameSession::new("s1", difficulty, &mut source);
    session.start(&mut source);
    session
}

#[test]
fn test_max_attempts_by_difficulty() {
    let mut source = FixedTargets::always(10);
    for (difficulty, expected) in [(Difficulty::Easy, 10), (Difficulty::Hard, 7)] {
        let mut session = GameSession::new("s", difficulty, &mut source);
        let outcome = session.start(&mut source);
        assert_eq!(*outcome.max_attempts(), expected);
        assert_eq!(*outcome.attempts_remaining(), expected);
        assert_eq!(*outcome.difficulty(), difficulty);
    }
}

#[test]
fn test_targets_stay_in_range() {
    let mut source = RandomTargets::seeded(42);
    let mut seen_min = u32::MAX;
    let mut seen_max = 0;
    for _ in 0..10_000 {
        let target = source.next_target();
        assert!((TARGET_MIN..=TARGET_MAX).contains(&target));
        seen_min = seen_min.min(target);
        seen_max = seen_max.max(target);
    }
    // 10,000 uniform draws over 100 values reach both ends.
    assert_eq!(seen_min, TARGET_MIN);
    assert_eq!(seen_max, TARGET_MAX);
}

#[test]
fn test_easy_scenario_lower_higher_win() {
    let mut session = started_session(Difficulty::Easy, 50);

    let first = session.guess(&GuessInput::from(70u32)).expect("valid guess");
    assert_eq!(
        first,
        GuessOutcome::Continue {
            hint: Hint::Lower,
            last_guess: 70,
            attempts_remaining: 9
        }
    );

    let second = session.guess(&GuessInput::from(30u32)).expect("valid guess");
    assert_eq!(
        second,
        GuessOutcome::Continue {
            hint: Hint::Higher,
            last_guess: 30,
            attempts_remaining: 8
        }
    );

    let third = session.guess(&GuessInput::from(50u32)).expect("valid guess");
    assert_eq!(
        third,
        GuessOutcome::Won {
            target_number: 50,
            attempts_used: 3
        }
    );
    assert!(session.is_won());
    assert!(session.is_over());
}

#[test]
fn test_hard_scenario_exhausts_attempts() {
    let mut session = started_session(Difficulty::Hard, 1);
    let guesses = [100u32, 99, 98, 97, 96, 95, 94];

    let mut last = None;
    for (i, guess) in guesses.iter().enumerate() {
        let outcome = session.guess(&GuessInput::from(*guess)).expect("valid guess");
        if i < guesses.len() - 1 {
            assert!(!outcome.is_terminal(), "guess {} ended the game early", i + 1);
        }
        last = Some(outcome);
    }

    assert_eq!(
        last,
        Some(GuessOutcome::Lost {
            target_number: 1,
            attempts_used: 7
        })
    );
    assert_eq!(session.phase(), Phase::Lost);
    assert!(!session.is_won());
    assert_eq!(session.revealed_target(), Some(1));
    assert_eq!(*session.status().target_number(), TargetReveal::Revealed(1));
}

#[test]
fn test_correct_guess_on_last_attempt_wins() {
    let mut session = started_session(Difficulty::Hard, 42);
    for guess in [1u32, 2, 3, 4, 5, 6] {
        session.guess(&GuessInput::from(guess)).expect("valid guess");
    }
    assert_eq!(session.attempts_remaining(), 1);

    let outcome = session.guess(&GuessInput::from(42u32)).expect("valid guess");
    assert_eq!(
        outcome,
        GuessOutcome::Won {
            target_number: 42,
            attempts_used: 7
        }
    );
    assert_eq!(session.attempts_remaining(), 0);
    assert!(session.is_won());
}

#[test]
fn test_guess_before_start_rejected() {
    let mut source = FixedTargets::always(30);
    let mut session = GameSession::new("s", Difficulty::Easy, &mut source);

    let result = session.guess(&GuessInput::from(30u32));
    assert_eq!(result, Err(GameError::SessionNotStarted));
    assert_eq!(session.attempts_remaining(), 10);
    assert_eq!(session.phase(), Phase::NotStarted);
}

#[test]
fn test_guess_after_game_over_rejected() {
    let mut session = started_session(Difficulty::Easy, 8);
    session.guess(&GuessInput::from(8u32)).expect("winning guess");
    let before = session.status();

    let result = session.guess(&GuessInput::from(9u32));
    assert_eq!(result, Err(GameError::SessionAlreadyOver));
    assert_eq!(session.status(), before);
}

#[test]
fn test_invalid_guesses_leave_attempts_unchanged() {
    let mut session = started_session(Difficulty::Easy, 50);
    for raw in ["abc", "0", "101", "-4", ""] {
        let result = session.guess(&GuessInput::from(raw));
        assert_eq!(result, Err(GameError::InvalidGuess), "input {:?}", raw);
    }
    assert_eq!(
        session.guess(&GuessInput::Number(500)),
        Err(GameError::InvalidGuess)
    );
    assert_eq!(session.attempts_remaining(), 10);
    assert_eq!(session.phase(), Phase::Active);
}

#[test]
fn test_text_guess_is_parsed() {
    let mut session = started_session(Difficulty::Easy, 50);
    let outcome = session.guess(&GuessInput::from(" 25 ")).expect("valid guess");
    assert!(matches!(
        outcome,
        GuessOutcome::Continue {
            hint: Hint::Higher,
            last_guess: 25,
            ..
        }
    ));
}

#[test]
fn test_status_hides_target_while_active() {
    let session = started_session(Difficulty::Easy, 77);
    let status = session.status();
    assert!(*status.started());
    assert!(!*status.over());
    assert!(!*status.won());
    assert_eq!(*status.target_number(), TargetReveal::Hidden);
    assert_eq!(session.revealed_target(), None);
}

#[test]
fn test_restart_resets_terminal_session() {
    let mut source = FixedTargets::sequence([10, 10, 60]);
    let mut session = GameSession::new("s", Difficulty::Easy, &mut source);
    session.start(&mut source);
    session.guess(&GuessInput::from(10u32)).expect("winning guess");
    assert!(session.is_over());

    let outcome = session.start(&mut source);
    assert_eq!(*outcome.attempts_remaining(), 10);
    assert_eq!(session.phase(), Phase::Active);
    assert!(!session.is_won());

    let hint = session.guess(&GuessInput::from(10u32)).expect("valid guess");
    assert!(matches!(hint, GuessOutcome::Continue { hint: Hint::Higher, .. }));
}

#[test]
fn test_status_serializes_hidden_and_revealed() {
    let mut session = started_session(Difficulty::Hard, 5);
    let hidden = serde_json::to_value(session.status()).expect("serialize");
    assert_eq!(hidden["targetNumber"], "hidden");
    assert_eq!(hidden["attemptsRemaining"], 7);
    assert_eq!(hidden["difficulty"], "hard");

    session.guess(&GuessInput::from(5u32)).expect("winning guess");
    let revealed = serde_json::to_value(session.status()).expect("serialize");
    assert_eq!(revealed["targetNumber"], 5);
    assert_eq!(revealed["won"], true);
}

#[test]
fn test_outcome_messages() {
    let won = GuessOutcome::Won {
        target_number: 12,
        attempts_used: 2,
    };
    assert!(won.message().contains("guessed the number 12"));

    let lower = GuessOutcome::Continue {
        hint: Hint::Lower,
        last_guess: 80,
        attempts_remaining: 4,
    };
    assert!(lower.message().contains("lower than 80"));
    assert!(lower.message().contains("4 attempts remaining"));
}
