//! Integration tests for Detective Quest.
//!
//! These tests drive the public API the way the binary does: a session is
//! played on scripted input, reports are checked, and the session is ended.

use std::io::Cursor;

use detective_quest_lib::config::{CaseConfig, ConfigLoader};
use detective_quest_lib::data_structures::{ChainedHashTable, ClueBst, Direction, Mansion};
use detective_quest_lib::engine::{explore, CommandReader, Session, StopReason};

#[test]
fn test_full_game_with_mistakes() {
    let config = ConfigLoader::default().load().unwrap();
    let mut session = Session::new(config.case);
    let mut out = Vec::new();

    let summary = session
        .play(Cursor::new("?\nd\nz e\n"), &mut out)
        .unwrap();
    let output = String::from_utf8(out).unwrap();

    assert_eq!(summary.exploration.rejected_commands, 2);
    assert_eq!(
        summary.exploration.rooms_visited,
        vec!["Hall de Entrada", "Sala de Jantar", "Cozinha"]
    );
    assert_eq!(summary.exploration.clues_found, vec!["Copo quebrado"]);
    assert_eq!(output.matches("Opção inválida. Tente novamente.").count(), 2);
    assert!(output.contains("Você encontrou uma pista na Cozinha: 'Copo quebrado'."));
    assert!(output.contains(">>> O SUSPEITO MAIS CITADO É: Mordomo (com 1 menções)"));

    let released = session.end();
    assert_eq!(released.rooms, 7);
    assert_eq!(released.clue_nodes, 1);
    assert_eq!(released.hash_entries, 6);
}

#[test]
fn test_exploration_without_session() {
    let mut mansion = Mansion::build();
    let mut clues = ClueBst::new();
    let mut reader = CommandReader::new(Cursor::new("E\nD\n"));
    let mut out = Vec::new();

    let outcome = explore(&mut mansion, &mut clues, &mut reader, &mut out).unwrap();

    assert_eq!(outcome.stop_reason, StopReason::DeadEnd);
    assert_eq!(outcome.final_room(), Some("Quarto Principal"));
    assert!(mansion
        .room_at(&[Direction::Left, Direction::Right])
        .unwrap()
        .clue_collected);

    let table: ChainedHashTable = CaseConfig::default().seed_table();
    let suspects: Vec<&str> = clues.iter().filter_map(|clue| table.lookup(clue)).collect();
    assert_eq!(suspects, vec!["Mordomo", "Dona da Casa"]);
}

#[test]
fn test_empty_game_teardown() {
    let session = Session::new(CaseConfig::default());
    assert_eq!(session.end().total(), 13);
}
