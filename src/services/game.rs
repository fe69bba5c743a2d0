use rand::Rng;
use tracing::{debug, info};

use crate::game_engine::{GameEngine, GameState};
use crate::io::{InputReader, OutputWriter};
use crate::models::constants::{GameResult, FAREWELL, MOVE_PROMPT, REPLAY_PROMPT};
use crate::models::errors::{GameError, Result};
use crate::services::{input, opponent};
use crate::ui::presenters::{BoardPresenter, ResultPresenter};

/// Tally of round outcomes over a session.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Scoreboard {
    pub player_wins: u32,
    pub opponent_wins: u32,
    pub draws: u32,
}

impl Scoreboard {
    pub fn record(&mut self, result: GameResult) {
        match result {
            GameResult::PlayerWin => self.player_wins += 1,
            GameResult::OpponentWin => self.opponent_wins += 1,
            GameResult::Draw => self.draws += 1,
        }
    }

    pub fn rounds(&self) -> u32 {
        self.player_wins + self.opponent_wins + self.draws
    }
}

/// A console session: rounds against the random opponent until the user declines a replay.
pub struct Game<R, I, O> {
    engine: GameEngine,
    rng: R,
    input: I,
    output: O,
    scoreboard: Scoreboard,
}

impl<R: Rng, I: InputReader, O: OutputWriter> Game<R, I, O> {
    pub fn new(rng: R, input: I, output: O) -> Self {
        Game {
            engine: GameEngine::new(),
            rng,
            input,
            output,
            scoreboard: Scoreboard::default(),
        }
    }

    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    pub fn scoreboard(&self) -> Scoreboard {
        self.scoreboard
    }

    pub fn input(&self) -> &I {
        &self.input
    }

    pub fn output(&self) -> &O {
        &self.output
    }

    /// Play rounds until the user answers `n`, then say goodbye.
    pub fn run(&mut self) -> Result<Scoreboard> {
        loop {
            let result = self.play_round()?;
            self.scoreboard.record(result);
            info!(?result, rounds = self.scoreboard.rounds(), "round finished");

            if !self.ask_replay()? {
                break;
            }
        }

        self.output.writeln(FAREWELL);
        info!(scoreboard = ?self.scoreboard, "session ended");
        Ok(self.scoreboard)
    }

    /// Drive one round from an empty board to a result, then show the final board and outcome.
    pub fn play_round(&mut self) -> Result<GameResult> {
        self.engine.reset();

        let result = loop {
            match self.engine.state() {
                GameState::AwaitingPlayerMove => {
                    BoardPresenter::show(self.engine.board(), &mut self.output);
                    self.player_turn()?;
                }
                GameState::AwaitingOpponentMove => self.opponent_turn()?,
                GameState::Finished(result) => break result,
            }
        };

        BoardPresenter::show(self.engine.board(), &mut self.output);
        ResultPresenter::show_result(result, &mut self.output);
        Ok(result)
    }

    /// Prompt until the user enters a legal move, then apply it.
    fn player_turn(&mut self) -> Result<()> {
        loop {
            let line = self.input.read_line(MOVE_PROMPT)?;
            match input::parse_move(&line).and_then(|pos| self.engine.apply_player_move(pos)) {
                Ok(_) => return Ok(()),
                Err(e) if e.is_user_input() => {
                    debug!(input = line.trim(), error = ?e, "move rejected");
                    self.output.error(&e.to_string());
                }
                Err(e) => return Err(e),
            }
        }
    }

    fn opponent_turn(&mut self) -> Result<()> {
        let pos = opponent::choose_move(self.engine.board(), &mut self.rng)
            .ok_or(GameError::NoLegalMove)?;
        self.engine.apply_opponent_move(pos)?;
        Ok(())
    }

    /// Prompt y/n until the answer is valid.
    pub fn ask_replay(&mut self) -> Result<bool> {
        loop {
            let line = self.input.read_line(REPLAY_PROMPT)?;
            match input::parse_replay(&line) {
                Ok(again) => return Ok(again),
                Err(e) => self.output.error(&e.to_string()),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::{BufferedOutput, ScriptedInput};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn game(script: Vec<&str>) -> Game<StdRng, ScriptedInput, BufferedOutput> {
        Game::new(StdRng::seed_from_u64(0), ScriptedInput::new(script), BufferedOutput::new())
    }

    #[test]
    fn invalid_moves_reprompt_with_distinct_messages() {
        // Every cell listed so the round ends whatever the opponent picks.
        let mut script = vec!["nonsense", "5,5"];
        script.extend(["0,0", "0,0", "1,0", "2,0", "0,1", "1,1", "2,1", "0,2", "1,2", "2,2"]);
        let mut g = game(script);
        g.play_round().unwrap();

        let errors = &g.output().errors;
        assert_eq!(
            errors[0],
            "Input is invalid. Please try again and write in the format of (x, y)."
        );
        assert_eq!(
            errors[1],
            "Input is out of board range. Please try again and input coordinates in the range of 0-2."
        );
        assert!(errors[2..]
            .iter()
            .all(|e| e == "Space occupied. Please pick a different space."));
        // "0,0" entered twice guarantees at least one occupied rejection.
        assert!(errors.len() >= 3);
    }

    #[test]
    fn replay_reprompts_on_invalid_answer() {
        let mut g = game(vec!["maybe", "", "n"]);
        assert!(!g.ask_replay().unwrap());
        assert_eq!(g.output().errors.len(), 2);
        assert_eq!(g.output().errors[0], "Input is invalid. Please try again.");
    }

    #[test]
    fn uppercase_replay_answer_is_reprompted() {
        let mut g = game(vec!["Y", "N", "y"]);
        assert!(g.ask_replay().unwrap());
        assert_eq!(g.output().errors.len(), 2);
        assert_eq!(g.input().prompts().len(), 3);
    }

    #[test]
    fn closed_input_surfaces_as_io_error() {
        let mut g = game(vec![]);
        assert!(matches!(g.play_round(), Err(GameError::Io(_))));
    }

    #[test]
    fn scoreboard_counts_each_result() {
        let mut board = Scoreboard::default();
        board.record(GameResult::PlayerWin);
        board.record(GameResult::Draw);
        board.record(GameResult::Draw);
        assert_eq!(board.player_wins, 1);
        assert_eq!(board.draws, 2);
        assert_eq!(board.rounds(), 3);
    }
}
