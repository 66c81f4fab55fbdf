use std::{fs, path::PathBuf};

use anyhow::Context;
use artris_engine::{
    CommandError, EventRecorder, Game, GameConfig, GameState, GameStats, MoveDirection,
    PieceSeed, RotationDirection, TickOutcome,
};
use rand::Rng as _;

use crate::util::{self, Output};

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct RunArg {
    /// Game configuration JSON file (defaults apply to missing fields)
    #[arg(long)]
    config: Option<PathBuf>,
    /// Piece seed as 32 hexadecimal digits (random if omitted)
    #[arg(long)]
    seed: Option<PieceSeed>,
    /// File holding the command script
    #[arg(long, conflicts_with = "commands")]
    script: Option<PathBuf>,
    /// Command script: L/R move, C/A rotate, S soft drop, D hard drop, `.` tick
    #[arg(long)]
    commands: Option<String>,
    /// Print every observer event to stderr
    #[arg(long)]
    events: bool,
    /// Output file path for the JSON summary
    #[arg(long)]
    output: Option<PathBuf>,
}

/// One step of a command script.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScriptCommand {
    Move(MoveDirection),
    Rotate(RotationDirection),
    SoftDrop,
    HardDrop,
    Tick,
}

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("unknown command {command:?} at offset {offset}")]
struct ParseScriptError {
    command: char,
    offset: usize,
}

impl ScriptCommand {
    fn from_char(c: char) -> Option<Self> {
        let command = match c {
            'L' => Self::Move(MoveDirection::Left),
            'R' => Self::Move(MoveDirection::Right),
            'C' => Self::Rotate(RotationDirection::Clockwise),
            'A' => Self::Rotate(RotationDirection::CounterClockwise),
            'S' => Self::SoftDrop,
            'D' => Self::HardDrop,
            '.' => Self::Tick,
            _ => return None,
        };
        Some(command)
    }
}

fn parse_script(script: &str) -> Result<Vec<ScriptCommand>, ParseScriptError> {
    script
        .char_indices()
        .filter(|(_, c)| !c.is_whitespace())
        .map(|(offset, c)| {
            ScriptCommand::from_char(c).ok_or(ParseScriptError { command: c, offset })
        })
        .collect()
}

#[derive(Debug, Default)]
struct ScriptTally {
    applied: usize,
    rejected: usize,
    locks: usize,
}

impl ScriptTally {
    fn record(&mut self, result: Result<(), CommandError>) {
        match result {
            Ok(()) => self.applied += 1,
            Err(_) => self.rejected += 1,
        }
    }
}

#[derive(Debug, serde::Serialize)]
struct RunSummary<'a> {
    seed: PieceSeed,
    state: GameState,
    score: u64,
    spawned_pieces: usize,
    stats: &'a GameStats,
    applied_commands: usize,
    rejected_commands: usize,
    unused_commands: usize,
}

pub(crate) fn run(arg: &RunArg) -> anyhow::Result<()> {
    let RunArg {
        config,
        seed,
        script,
        commands,
        events,
        output,
    } = arg;

    let config = match config {
        Some(path) => util::read_config_file(path)?,
        None => GameConfig::default(),
    };
    let script = match (script, commands) {
        (Some(path), _) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read script file: {}", path.display()))?,
        (None, Some(commands)) => commands.clone(),
        (None, None) => String::new(),
    };
    let script = parse_script(&script).context("Failed to parse command script")?;

    let seed = seed.unwrap_or_else(|| rand::rng().random());
    eprintln!("Using piece seed {seed}");

    let mut game = Game::with_seed(config, seed, EventRecorder::new())
        .context("Invalid game configuration")?;
    game.start();
    if *events {
        print_events(&mut game);
    }

    let mut tally = ScriptTally::default();
    for command in &script {
        if !game.state().is_running() {
            break;
        }
        match *command {
            ScriptCommand::Move(direction) => tally.record(game.move_piece(direction)),
            ScriptCommand::Rotate(direction) => tally.record(game.rotate_piece(direction)),
            ScriptCommand::SoftDrop => tally.record(game.soft_drop_piece()),
            ScriptCommand::HardDrop => {
                let result = game.drop_piece();
                if result.is_ok() {
                    tally.locks += 1;
                }
                tally.record(result.map(|_| ()));
            }
            ScriptCommand::Tick => {
                let outcome = game.tick();
                if matches!(outcome, TickOutcome::Locked { .. } | TickOutcome::GameOver) {
                    tally.locks += 1;
                }
                tally.record(match outcome {
                    TickOutcome::Idle => Err(CommandError::NotRunning),
                    _ => Ok(()),
                });
            }
        }
        if *events {
            print_events(&mut game);
        }
    }

    let processed = tally.applied + tally.rejected;
    eprintln!(
        "Processed {processed} of {} commands ({} rejected), {} locks",
        script.len(),
        tally.rejected,
        tally.locks
    );
    if game.state().is_game_over() {
        eprintln!("Game over");
    }
    eprintln!("Score: {}", game.score());
    eprintln!("{}", game.ascii_art());

    let summary = RunSummary {
        seed,
        state: game.state(),
        score: game.score(),
        spawned_pieces: game.spawned_pieces(),
        stats: game.stats(),
        applied_commands: tally.applied,
        rejected_commands: tally.rejected,
        unused_commands: script.len() - processed,
    };
    Output::save_json(&summary, output.clone())
}

fn print_events(game: &mut Game<EventRecorder>) {
    for event in game.observer_mut().take_events() {
        match serde_json::to_string(&event) {
            Ok(line) => eprintln!("{line}"),
            Err(e) => eprintln!("Failed to serialize event {event:?}: {e}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_script() {
        let script = parse_script("LR CA\nSD .").unwrap();
        assert_eq!(
            script,
            [
                ScriptCommand::Move(MoveDirection::Left),
                ScriptCommand::Move(MoveDirection::Right),
                ScriptCommand::Rotate(RotationDirection::Clockwise),
                ScriptCommand::Rotate(RotationDirection::CounterClockwise),
                ScriptCommand::SoftDrop,
                ScriptCommand::HardDrop,
                ScriptCommand::Tick,
            ]
        );
        assert!(parse_script("  \n").unwrap().is_empty());
    }

    #[test]
    fn test_parse_script_rejects_unknown_command() {
        assert_eq!(
            parse_script("LLx"),
            Err(ParseScriptError {
                command: 'x',
                offset: 2,
            })
        );
    }

    #[test]
    fn test_tally() {
        let mut tally = ScriptTally::default();
        tally.record(Ok(()));
        tally.record(Err(CommandError::NotRunning));
        assert_eq!((tally.applied, tally.rejected), (1, 1));
    }
}
