//! Integration tests - a whole session from deal to leaderboard entry

use tui_linkup::core::{find_any_move, Game, GameConfig, MoveOutcome};
use tui_linkup::records::{JsonStore, Leaderboard, ScoreRecord};
use tui_linkup::types::{GameStatus, HINT_COST};

#[test]
fn test_session_lifecycle() {
    let mut game = Game::new(GameConfig {
        width: 6,
        height: 4,
        seed: 8,
        ..GameConfig::default()
    })
    .unwrap();

    assert_eq!(game.status(), GameStatus::Playing);
    assert_eq!(game.live_tiles(), 24);

    // Simulate a frame cadence while clearing the board
    while game.status() == GameStatus::Playing {
        game.tick(0.016);
        let (a, b) = find_any_move(game.board()).unwrap();
        game.select(a).unwrap();
        assert_eq!(game.select(b).unwrap(), Some(MoveOutcome::Matched));
    }

    assert_eq!(game.status(), GameStatus::Won);
    assert_eq!(game.live_tiles(), 0);
    assert!(game.points() > 0);
}

#[test]
fn test_hint_mid_session() {
    let mut game = Game::new(GameConfig {
        width: 6,
        height: 4,
        seed: 17,
        ..GameConfig::default()
    })
    .unwrap();

    while game.points() < HINT_COST {
        let (a, b) = find_any_move(game.board()).unwrap();
        game.select(a).unwrap();
        game.select(b).unwrap().unwrap();
    }

    // The hinted pair is connectable right now: playing it must match
    let (a, b) = game.request_hint().unwrap();
    game.select(a).unwrap();
    assert_eq!(game.select(b).unwrap(), Some(MoveOutcome::Matched));
}

#[test]
fn test_won_session_lands_on_the_leaderboard() {
    let dir = std::env::temp_dir().join("tui-linkup-session-it");
    let store = JsonStore::new(dir.join("scores.json"));

    let mut game = Game::new(GameConfig {
        width: 4,
        height: 2,
        seed: 23,
        ..GameConfig::default()
    })
    .unwrap();
    while game.status() == GameStatus::Playing {
        let (a, b) = find_any_move(game.board()).unwrap();
        game.select(a).unwrap();
        game.select(b).unwrap().unwrap();
    }
    assert_eq!(game.status(), GameStatus::Won);

    let mut board = store.load().unwrap_or_else(|_| Leaderboard::new());
    board.clear();
    let accepted = board.insert(ScoreRecord {
        name: "player".to_string(),
        level: game.level(),
        points: game.points(),
    });
    assert!(accepted);
    store.save(&board).unwrap();

    let reloaded = store.load().unwrap();
    assert_eq!(reloaded.ranked()[0].points, game.points());

    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_pause_resume_mid_session() {
    let mut game = Game::new(GameConfig {
        width: 6,
        height: 4,
        seed: 3,
        ..GameConfig::default()
    })
    .unwrap();

    game.tick(10.0);
    let percent = game.time_percent();

    game.pause();
    game.tick(60.0); // wall time passes, game time does not
    assert_eq!(game.time_percent(), percent);

    game.resume();
    let (a, b) = find_any_move(game.board()).unwrap();
    game.select(a).unwrap();
    assert_eq!(game.select(b).unwrap(), Some(MoveOutcome::Matched));
}
