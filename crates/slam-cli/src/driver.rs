use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use log::debug;
use rand::Rng;
use slam_engine::engine::{Direction, Game};

/// How an interactive session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Won,
    Lost,
    Quit,
}

/// Read one token per line from `input` and slam until the game ends, the
/// player quits, or input runs out.
pub fn play<G: Rng, I: BufRead, O: Write>(
    game: &mut Game<G>,
    mut input: I,
    out: &mut O,
) -> Result<Outcome> {
    game.start();
    let mut line = String::new();

    loop {
        write!(out, "{}> ", game.grid())?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line).context("failed to read input")? == 0 {
            writeln!(out)?;
            return Ok(Outcome::Quit);
        }

        let token = line.trim().to_ascii_lowercase();
        if token == "q" || token == "quit" {
            writeln!(out, "bye")?;
            return Ok(Outcome::Quit);
        }

        let Some(direction) = Direction::from_key(&token) else {
            writeln!(out, "options: {}, q", Direction::KEYS.join(", "))?;
            continue;
        };
        debug!("input {token:?} -> {direction}");
        game.slam(direction)?;

        if game.is_over() {
            write!(out, "{}", game.grid())?;
            return Ok(if game.goal_met() {
                Outcome::Won
            } else {
                Outcome::Lost
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn run(game: &mut Game, script: &str) -> (Outcome, String) {
        let mut out = Vec::new();
        let outcome = play(game, script.as_bytes(), &mut out).unwrap();
        (outcome, String::from_utf8(out).unwrap())
    }

    #[test]
    fn quit_token_ends_session() {
        let mut game = Game::seeded(4, 4, 2048, 2, 1).unwrap();
        let (outcome, out) = run(&mut game, "QUIT\n");
        assert_eq!(outcome, Outcome::Quit);
        assert!(out.ends_with("bye\n"));
    }

    #[test]
    fn unknown_token_lists_options() {
        let mut game = Game::seeded(4, 4, 2048, 2, 1).unwrap();
        let (outcome, out) = run(&mut game, "x\nq\n");
        assert_eq!(outcome, Outcome::Quit);
        assert!(out.contains("options: h, j, k, l, q"));
        assert_eq!(game.grid().occupied_cells().count(), 2);
    }

    #[test]
    fn end_of_input_quits() {
        let mut game = Game::seeded(4, 4, 2048, 2, 1).unwrap();
        let (outcome, _) = run(&mut game, "h\nl\n");
        assert_eq!(outcome, Outcome::Quit);
        assert!(game.grid().occupied_cells().count() >= 2);
    }

    #[test]
    fn reaching_goal_wins() {
        // 1x2 board with spawn 2 and goal 4: the opening pair merges at once
        let mut game = Game::with_rng(2, 1, 4, 2, StdRng::seed_from_u64(3)).unwrap();
        let (outcome, out) = run(&mut game, "h\n");
        assert_eq!(outcome, Outcome::Won);
        assert!(out.contains("    4"));
    }

    #[test]
    fn stuck_single_cell_loses() {
        let mut game = Game::seeded(1, 1, 2048, 2, 0).unwrap();
        let (outcome, _) = run(&mut game, "k\n");
        assert_eq!(outcome, Outcome::Lost);
    }
}
