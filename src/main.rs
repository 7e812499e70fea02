//! Line-oriented terminal front end for memory-match.
//!
//! Reads one command per line from stdin and redraws the board after each.
//! This is a thin adapter: every rule lives in the library's `Engine`.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::Parser;
use log::{error, info, warn};
use memory_match::{
    BoardView, CellView, Engine, EngineBuilder, GameResult, MemoryConfig, Phase, PlayerId,
    Position, Resolution, SavePaths, SymbolPool,
};

#[derive(Parser)]
#[command(name = "memory-match")]
#[command(about = "Two-player memory matching game")]
struct Args {
    /// Board width (columns)
    #[arg(short = 'W', long, default_value = "4")]
    width: u32,

    /// Board height (rows)
    #[arg(short = 'H', long, default_value = "4")]
    height: u32,

    /// Directory that relative save/key paths are resolved against
    #[arg(long, default_value = ".")]
    dir: PathBuf,

    /// Save file name
    #[arg(long, default_value = memory_match::persist::DEFAULT_SAVE_FILE)]
    save_file: PathBuf,

    /// Key file name
    #[arg(long, default_value = memory_match::persist::DEFAULT_KEY_FILE)]
    key_file: PathBuf,

    /// Seed for dealing (for reproducible boards)
    #[arg(long)]
    seed: Option<u64>,

    /// Resume the saved game instead of dealing a new one
    #[arg(long)]
    resume: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn config(&self) -> MemoryConfig {
        let paths = SavePaths::new(&self.save_file, &self.key_file).resolved_against(&self.dir);
        let config = MemoryConfig::default().with_save_paths(paths);
        match self.seed {
            Some(seed) => config.with_seed(seed),
            None => config,
        }
    }
}

/// One line of player input.
#[derive(Debug, PartialEq, Eq)]
enum Command {
    Pick(Position),
    Next,
    Save,
    Load,
    New,
    Show,
    Help,
    Quit,
}

fn parse_command(line: &str) -> Option<Command> {
    let mut words = line.split_whitespace();
    let command = match words.next()? {
        "pick" | "p" => {
            let row = words.next()?.parse().ok()?;
            let col = words.next()?.parse().ok()?;
            Command::Pick(Position::new(row, col))
        }
        "next" | "n" => Command::Next,
        "save" => Command::Save,
        "load" => Command::Load,
        "new" => Command::New,
        "show" | "s" => Command::Show,
        "help" | "h" | "?" => Command::Help,
        "quit" | "q" | "exit" => Command::Quit,
        _ => return None,
    };
    words.next().is_none().then_some(command)
}

fn render(view: &BoardView) -> String {
    let mut out = String::new();
    out.push_str("    ");
    for col in 0..view.width {
        out.push_str(&format!("{col:>8}"));
    }
    out.push('\n');

    for (row, cells) in view.rows().enumerate() {
        out.push_str(&format!("{row:>3} "));
        for cell in cells {
            let text = match cell {
                CellView::Hidden => "?".to_string(),
                CellView::FaceUp(s) => s.to_string(),
                CellView::Matched(s) => format!("[{s}]"),
            };
            out.push_str(&format!("{text:>8}"));
        }
        out.push('\n');
    }

    out.push_str(&format!(
        "Player 1: {} | Player 2: {} | {} to move ({})\n",
        view.scores[PlayerId::ONE],
        view.scores[PlayerId::TWO],
        view.current_player,
        view.phase
    ));
    out
}

const HELP: &str = "commands: pick ROW COL | next | save | load | new | show | quit";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let filter = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter)).init();

    let config = args.config();
    let paths = config.save_paths.clone();
    let builder = EngineBuilder::new()
        .config(config)
        .symbol_pool(SymbolPool::images());

    let mut engine = if args.resume {
        builder.load(&paths)?
    } else {
        builder.build(args.width, args.height)?
    };
    info!("Starting game; saves go to {}", paths.save_file.display());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "{HELP}")?;
    write!(out, "{}", render(&engine.snapshot()))?;

    for line in io::stdin().lock().lines() {
        let line = line?;
        let Some(command) = parse_command(&line) else {
            if !line.trim().is_empty() {
                writeln!(out, "unknown command; {HELP}")?;
            }
            continue;
        };

        match command {
            Command::Quit => break,
            Command::Help => writeln!(out, "{HELP}")?,
            Command::Show => {}
            Command::Pick(position) => match engine.select(position) {
                Ok(outcome) => match outcome.resolution {
                    Some(Resolution::Match { player, score, .. }) => {
                        writeln!(out, "Match! {player} now has {score}")?;
                    }
                    Some(Resolution::Mismatch { .. }) => {
                        writeln!(out, "No match. Type `next` to hand over.")?;
                    }
                    None => {}
                },
                Err(err) => writeln!(out, "{err}")?,
            },
            Command::Next => {
                if let Err(err) = engine.acknowledge() {
                    writeln!(out, "{err}")?;
                }
            }
            Command::Save => match save_allowed(&engine).and_then(|()| {
                engine.save(&paths).map_err(|e| e.to_string())
            }) {
                Ok(()) => writeln!(out, "Saved to {}", paths.save_file.display())?,
                Err(err) => {
                    error!("Save failed: {}", err);
                    writeln!(out, "Save failed: {err}")?;
                }
            },
            Command::Load => match EngineBuilder::new().config(engine.config().clone()).load(&paths) {
                Ok(loaded) => {
                    engine = loaded;
                    writeln!(out, "Loaded {}", paths.save_file.display())?;
                }
                Err(err) => {
                    warn!("Load failed: {}", err);
                    writeln!(out, "Load failed: {err}")?;
                }
            },
            Command::New => match engine.restart() {
                Ok(()) => writeln!(out, "New game")?,
                Err(err) => writeln!(out, "{err}")?,
            },
        }

        write!(out, "{}", render(&engine.snapshot()))?;
        if let Some(result) = engine.result() {
            writeln!(out, "{}", result_line(result))?;
            writeln!(out, "Type `new` to play again or `quit`.")?;
        }
    }

    Ok(())
}

fn result_line(result: GameResult) -> String {
    match PlayerId::all().find(|&player| result.is_winner(player)) {
        Some(player) => format!("Game over, {player} wins!"),
        None => "Game over, it's a draw!".to_string(),
    }
}

/// Saves are only offered between turns.
fn save_allowed(engine: &Engine) -> Result<(), String> {
    match engine.phase() {
        Phase::AwaitingFirstPick | Phase::GameOver => Ok(()),
        phase => Err(format!("finish the turn first ({phase})")),
    }
}
