//! Whole-game tests

use super::test_utils::*;
use crate::game::{Game, Prompt};

/// Plays a game by always picking the first option offered, returning the number of choices made.
fn play_first_options(game: &mut Game) -> usize {
    let mut choices = 0;
    while let Prompt::ChoosePlayer { options, .. } = game.prompt() {
        game.choose_player(options[0]).unwrap();
        choices += 1;
        assert!(choices < 200, "game failed to finish");
    }
    choices
}

#[test]
fn test_games_always_finish() {
    for num_players in 5..=7 {
        for seed in 0..10 {
            let mut game = create_test_game(num_players, seed);
            let choices = play_first_options(&mut game);
            assert!(game.game_over());
            assert!(choices >= 3);
            assert!(game.winner().is_some(), "a full game should have a winner");
        }
    }
}

#[test]
fn test_rounds_are_counted() {
    let mut game = create_standard_game();

    // Quiet night, tied day
    play_night(&mut game, 3, 3, 4);
    play_votes(&mut game, &[1, 1, 2, 2, 3]);
    assert_eq!(game.round(), 2);

    play_night(&mut game, 4, 3, 4);
    assert_eq!(game.round(), 2);
    assert!(is_voting(&game));
}

#[test]
fn test_game_survives_serialization() {
    let mut game = create_test_game(6, 99);
    game.choose_player(match game.prompt() {
        Prompt::ChoosePlayer { options, .. } => options[0],
        Prompt::GameOver { .. } => unreachable!(),
    })
    .unwrap();

    let json = serde_json::to_string(&game).unwrap();
    let restored: Game = serde_json::from_str(&json).unwrap();

    assert_eq!(restored.prompt(), game.prompt());
    assert_eq!(restored.round(), game.round());
    assert_eq!(restored.seed(), 99);
}
