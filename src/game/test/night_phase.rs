//! Night action and resolution tests

use super::super::night::NightTurn;
use super::super::player::{Player, Role};
use super::test_utils::*;
use crate::error::GameError;
use crate::game::{ChoosePlayerKind, GameEvent, Prompt};

#[test]
fn test_night_turns_run_in_order() {
    let mut game = create_standard_game();

    assert_eq!(night_turn(&game), Some(NightTurn::Mafia));
    game.choose_player(3).unwrap();
    assert_eq!(night_turn(&game), Some(NightTurn::Doctor));
    game.choose_player(4).unwrap();
    assert_eq!(night_turn(&game), Some(NightTurn::Detective));
    game.choose_player(4).unwrap();
    assert!(is_voting(&game));
}

#[test]
fn test_each_night_action_is_confirmed_in_order() {
    let mut game = create_standard_game();
    game.drain_events();

    play_night(&mut game, 3, 4, 0);

    assert_eq!(
        game.drain_events(),
        vec![
            GameEvent::TargetChosen {
                turn: NightTurn::Mafia,
                target: 3
            },
            GameEvent::TargetChosen {
                turn: NightTurn::Doctor,
                target: 4
            },
            GameEvent::TargetChosen {
                turn: NightTurn::Detective,
                target: 0
            },
            GameEvent::Investigation { target: 0, is_mafia: true },
            GameEvent::Dawn { killed: Some(3) },
        ]
    );
}

#[test]
fn test_kill_is_not_immediate() {
    let mut game = create_standard_game();

    game.choose_player(3).unwrap();
    assert!(game.players[3].alive);
    assert!(game.players[3].marked_for_death);
}

#[test]
fn test_protected_player_survives() {
    let mut game = create_standard_game();
    game.drain_events();

    play_night(&mut game, 3, 3, 4);

    assert!(game.players[3].alive);
    assert!(!game.players[3].protected);
    assert!(!game.players[3].marked_for_death);
    assert!(game.drain_events().contains(&GameEvent::Dawn { killed: None }));
}

#[test]
fn test_unprotected_player_dies() {
    let mut game = create_standard_game();
    game.drain_events();

    play_night(&mut game, 3, 4, 4);

    assert!(!game.players[3].alive);
    assert!(!game.players[3].marked_for_death);
    assert!(!game.players[4].protected);
    assert_eq!(game.num_players_alive(), 4);
    assert!(game.drain_events().contains(&GameEvent::Dawn { killed: Some(3) }));
}

#[test]
fn test_dead_player_is_never_a_target_again() {
    let mut game = create_standard_game();
    play_night(&mut game, 3, 4, 4);

    // Not a vote candidate
    let Prompt::ChoosePlayer { options, .. } = game.prompt() else {
        panic!("Expected a vote");
    };
    assert!(!options.contains(&3));
    assert_eq!(game.choose_player(3), Err(GameError::InvalidPlayerChoice));

    // A tied vote moves on to the next night
    play_votes(&mut game, &[0, 1, 0, 1]);
    assert_eq!(night_turn(&game), Some(NightTurn::Mafia));

    assert_eq!(game.choose_player(3), Err(GameError::InvalidPlayerChoice));
    game.choose_player(4).unwrap();
    assert_eq!(game.choose_player(3), Err(GameError::InvalidPlayerChoice));
    game.choose_player(1).unwrap();
    assert_eq!(game.choose_player(3), Err(GameError::InvalidPlayerChoice));
}

#[test]
fn test_mafia_cannot_target_mafia() {
    let mut game = create_standard_game();
    game.drain_events();

    assert_eq!(game.choose_player(0), Err(GameError::InvalidPlayerChoice));
    assert_eq!(night_turn(&game), Some(NightTurn::Mafia));
    assert!(!game.players[0].marked_for_death);
    assert_eq!(
        game.drain_events(),
        vec![GameEvent::InvalidSelection {
            kind: ChoosePlayerKind::Kill,
            actor: Some(0)
        }]
    );

    // The same actor is simply asked again
    game.choose_player(2).unwrap();
    assert_eq!(night_turn(&game), Some(NightTurn::Doctor));
}

#[test]
fn test_out_of_range_target_is_rejected() {
    let mut game = create_standard_game();

    assert_eq!(game.choose_player(5), Err(GameError::InvalidPlayerIndex));
    assert_eq!(game.choose_player(usize::MAX), Err(GameError::InvalidPlayerIndex));
    assert_eq!(night_turn(&game), Some(NightTurn::Mafia));
}

#[test]
fn test_doctor_may_protect_themselves() {
    let mut game = create_standard_game();

    play_night(&mut game, 1, 1, 3);

    assert!(game.players[1].alive);
}

#[test]
fn test_dead_doctor_still_takes_a_turn() {
    let mut game = create_standard_game();
    game.players[1].alive = false;

    game.choose_player(3).unwrap();
    let Prompt::ChoosePlayer { kind, actor, .. } = game.prompt() else {
        panic!("Expected the doctor to choose a player");
    };
    assert_eq!(kind, ChoosePlayerKind::Protect);
    assert_eq!(actor, Some(1));

    // ...but cannot protect themselves
    assert_eq!(game.choose_player(1), Err(GameError::InvalidPlayerChoice));
}

#[test]
fn test_detective_finds_the_mafia() {
    let mut game = create_standard_game();
    game.drain_events();

    play_night(&mut game, 3, 3, 0);

    assert!(game.mafia_detected());
    assert!(game
        .drain_events()
        .contains(&GameEvent::Investigation { target: 0, is_mafia: true }));
}

#[test]
fn test_detective_clears_a_civilian() {
    let mut game = create_standard_game();
    game.drain_events();

    play_night(&mut game, 3, 3, 4);

    assert!(!game.mafia_detected());
    assert!(game
        .drain_events()
        .contains(&GameEvent::Investigation { target: 4, is_mafia: false }));
}

#[test]
fn test_detection_is_never_forgotten() {
    let mut game = create_standard_game();

    play_night(&mut game, 3, 3, 0);
    play_votes(&mut game, &[1, 2, 1, 2, 4]);
    play_night(&mut game, 3, 3, 4);

    assert!(game.mafia_detected());
}

#[test]
fn test_quiet_night_leaves_players_untouched() {
    let mut game = create_standard_game();
    game.players[4].alive = false;

    assert_eq!(game.resolve_night(), None);
    assert_eq!(game.resolve_night(), None);

    let alive: Vec<_> = game.players.iter().map(|p| p.alive).collect();
    assert_eq!(alive, vec![true, true, true, true, false]);
    for player in game.players.iter() {
        assert!(!player.protected);
        assert!(!player.marked_for_death);
    }
}

#[test]
fn test_dead_players_cannot_be_marked_or_protected() {
    let mut player = Player::new(Role::Civilian);
    player.kill();

    player.mark_for_death();
    player.protect();

    assert!(!player.marked_for_death);
    assert!(!player.protected);
    assert!(!player.resolve_night());
}
