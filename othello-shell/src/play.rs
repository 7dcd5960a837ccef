//! Drive a [`Session`] from a fixed script or from line-based input.

use std::io::{self, BufRead, Write};

use othello_engine::{Location, Side};

use crate::session::{Report, Session};

/// Replay `script` against `session`, writing one report line per step and the
/// final board to `out`. Steps after the game has ended are still reported.
/// With `verbose`, the board is written to `log` after every accepted move.
pub fn run_script<W: Write, L: Write>(
    session: &mut Session,
    script: &[(Side, Location)],
    verbose: bool,
    mut out: W,
    mut log: L,
) -> io::Result<()> {
    for &(side, location) in script {
        let report = session.play(side, location);
        writeln!(out, "{}", report)?;

        if verbose && matches!(report, Report::Played { .. }) {
            writeln!(log, "{}\n", session.game().board)?;
        }
    }

    writeln!(out, "\n{}", session.game())?;
    Ok(())
}

/// Play an interactive game, reading one move per line from `input` ("E3").
/// Returns when the game ends or `input` is exhausted.
pub fn play_interactive<R: BufRead, W: Write>(
    session: &mut Session,
    input: R,
    mut out: W,
) -> io::Result<()> {
    let mut lines = input.lines();

    while let Some(side) = session.game().side_to_move() {
        writeln!(out, "\n{}\n", session.game())?;
        write!(
            out,
            "{} ({}), enter a move: ",
            session.roster().name_of(side),
            side
        )?;
        out.flush()?;

        let input_line = match lines.next() {
            Some(line) => line?,
            None => return Ok(()),
        };

        match input_line.parse::<Location>() {
            Ok(mv) => writeln!(out, "{}", session.play(side, mv))?,
            Err(_) => writeln!(out, "Cannot parse move.")?,
        }
    }

    if let Some(verdict) = session.verdict() {
        writeln!(out, "\n{}\n{}", session.game().board, verdict)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ShellConfig;
    use othello_engine::PieceCount;

    fn demo_session() -> Session {
        Session::new(ShellConfig::default().roster().unwrap())
    }

    #[test]
    fn script_reports_each_step() {
        let mut session = demo_session();
        let script: Vec<(Side, Location)> = vec![
            (Side::Black, "E3".parse().unwrap()),
            (Side::Black, "F4".parse().unwrap()),
            (Side::White, "D3".parse().unwrap()),
        ];

        let mut out = Vec::new();
        run_script(&mut session, &script, false, &mut out, io::sink()).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "Black plays E3, flipping 1");
        assert_eq!(lines[1], "Not your turn: White to move");
        assert_eq!(lines[2], "White plays D3, flipping 1");
        assert!(text.ends_with("Black: 3  White: 3  (Black to move)\n"));
    }

    #[test]
    fn default_demo_ends_with_white_win() {
        let config = ShellConfig::default();
        let mut session = Session::new(config.roster().unwrap());
        let mut out = Vec::new();
        run_script(
            &mut session,
            &config.script_moves().unwrap(),
            false,
            &mut out,
            io::sink(),
        )
        .unwrap();

        let verdict =
            "Game is ended. White pieces: 17, black pieces: 3. Winner is white player: VERSTUYFT";
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().take_while(|l| !l.is_empty()).collect();
        assert_eq!(lines.len(), 18);
        assert!(lines[15].starts_with("White plays H3"));
        assert!(lines[15].ends_with("; no moves remain"));
        assert_eq!(lines[16], verdict);
        assert_eq!(lines[17], verdict);

        assert!(session.game().is_finished());
        assert_eq!(session.game().piece_count(), PieceCount { black: 3, white: 17 });
        assert_eq!(session.verdict().unwrap().to_string(), verdict);
    }

    #[test]
    fn verbose_script_logs_boards_separately() {
        let mut session = demo_session();
        let script: Vec<(Side, Location)> = vec![
            (Side::Black, "E3".parse().unwrap()),
            (Side::White, "A1".parse().unwrap()),
            (Side::White, "D3".parse().unwrap()),
        ];

        let mut out = Vec::new();
        let mut log = Vec::new();
        run_script(&mut session, &script, true, &mut out, &mut log).unwrap();

        let out = String::from_utf8(out).unwrap();
        let log = String::from_utf8(log).unwrap();
        assert_eq!(out.matches("   A B C D E F G H").count(), 1);
        assert_eq!(log.matches("   A B C D E F G H").count(), 2);
        assert!(log.ends_with(&format!("{}\n\n", session.game().board)));
    }

    #[test]
    fn interactive_game_reads_moves() {
        let mut session = demo_session();
        let input = "e3\nnonsense\nD3\n".as_bytes();
        let mut out = Vec::new();
        play_interactive(&mut session, input, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("HASSAN (Black), enter a move: Black plays E3, flipping 1"));
        assert!(text.contains("Cannot parse move."));
        assert!(text.contains("VERSTUYFT (White), enter a move: White plays D3, flipping 1"));
        assert_eq!(session.game().piece_count(), PieceCount { black: 3, white: 3 });
    }
}
