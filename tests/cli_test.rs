use std::io::Cursor;

use battleship_solo::{
    print_grid, Board, CliPlayer, Event, GameError, InputSource, OutputSink, Session,
    SessionEnd, ShipKind, TerminalView, MISS_GLYPH,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[test]
fn test_cli_reads_size_and_guesses() {
    let input = Cursor::new("7\n4\n b2 \n");
    let mut player = CliPlayer::new(input, Vec::new());
    let board = Board::new(4);
    assert_eq!(player.next_size().unwrap().as_deref(), Some("7"));
    assert_eq!(player.next_size().unwrap().as_deref(), Some("4"));
    assert_eq!(player.next_guess(&board).unwrap().as_deref(), Some("b2"));
    assert_eq!(player.next_guess(&board).unwrap(), None);

    let prompts = String::from_utf8(player.into_writer()).unwrap();
    assert!(prompts.contains("Choose board size (4, 5, 6): "));
    assert!(prompts.contains("Enter your guess (e.g., A1, B2): "));
}

#[test]
fn test_cli_preset_size_skips_prompt() {
    let mut player = CliPlayer::new(Cursor::new(""), Vec::new()).with_size(Some(6));
    assert_eq!(player.next_size().unwrap().as_deref(), Some("6"));
    assert_eq!(player.next_size().unwrap(), None);
}

#[test]
fn test_terminal_messages() {
    let mut view = TerminalView::new(Vec::new());
    view.notify(Event::Hit(ShipKind::Small)).unwrap();
    view.notify(Event::Miss).unwrap();
    view.notify(Event::AlreadyGuessed).unwrap();
    view.notify(Event::InvalidSize).unwrap();
    view.notify(Event::Won { guesses: 12 }).unwrap();
    let text = String::from_utf8(view.into_writer()).unwrap();
    assert!(text.contains("Hit! 🎯"));
    assert!(text.contains("Miss! ❌"));
    assert!(text.contains("You've already guessed this spot!"));
    assert!(text.contains(&GameError::InvalidSize.to_string()));
    assert!(text.contains("Congratulations! You sank all the ships! 🎉\nGuesses: 12\n"));
}

#[test]
fn test_print_grid_labels() {
    let mut board = Board::new(4);
    board.guess(3, 3).unwrap();
    let mut out = Vec::new();
    print_grid(&mut out, &board.render(false)).unwrap();
    let text = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = text.lines().filter(|l| !l.trim().is_empty()).collect();
    assert_eq!(lines[0], "Current Board:");
    assert!(lines[1].contains('1') && lines[1].contains('4'));
    assert!(lines[2].trim_start().starts_with('A'));
    assert!(lines[5].trim_start().starts_with('D'));
    assert!(lines[5].contains(MISS_GLYPH));
}

#[test]
fn test_cli_session_until_input_closes() {
    let input = Cursor::new("8\n4\nA1\nQ\n");
    let player = CliPlayer::new(input, Vec::new());
    let mut session = Session::new(player, TerminalView::new(Vec::new()));
    let summary = session.run(&mut SmallRng::seed_from_u64(5)).unwrap();
    assert_eq!(summary.end, SessionEnd::Abandoned);
    assert_eq!(summary.guesses, 1);

    let (_, view) = session.into_parts();
    let text = String::from_utf8(view.into_writer()).unwrap();
    assert!(text.contains("Invalid size"));
    assert!(text.contains("Invalid input"));
    assert_eq!(text.matches("Current Board:").count(), 2);
}
