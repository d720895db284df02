use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use log::{error, info};

use minimax_chess::board::{Board, SearchLimits};
use minimax_chess::{
    AiConfig, AiController, Color, Controller, Difficulty, Game, HumanController, Move,
    OpeningBook, TurnOutcome,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum PlayerKind {
    Ai,
    Human,
}

/// Play a game of chess in the terminal
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Who plays White
    #[arg(long, value_enum, default_value_t = PlayerKind::Human)]
    white: PlayerKind,

    /// Who plays Black
    #[arg(long, value_enum, default_value_t = PlayerKind::Ai)]
    black: PlayerKind,

    /// White AI difficulty (search depth 1-5)
    #[arg(long, default_value_t = 3, value_parser = clap::value_parser!(u8).range(1..=5))]
    white_level: u8,

    /// Black AI difficulty (search depth 1-5)
    #[arg(long, default_value_t = 3, value_parser = clap::value_parser!(u8).range(1..=5))]
    black_level: u8,

    /// Never consult the opening book
    #[arg(long)]
    no_book: bool,

    /// Stop after this many plies
    #[arg(long)]
    max_plies: Option<usize>,

    /// Node budget per AI search
    #[arg(long)]
    max_nodes: Option<u64>,

    /// Start from this position instead of the initial one
    #[arg(long)]
    fen: Option<String>,

    /// Seed for book move choices
    #[arg(long)]
    seed: Option<u64>,
}

/// Human side reading long-algebraic moves from stdin
struct ConsolePlayer {
    inner: HumanController,
}

impl Controller for ConsolePlayer {
    fn color(&self) -> Color {
        self.inner.color()
    }

    fn turn_ready(&self) -> bool {
        true
    }

    fn play_turn(&mut self, board: &mut Board) -> Move {
        let stdin = io::stdin();
        loop {
            print!("{} to move> ", self.color());
            // A failed flush only delays the prompt
            let _ = io::stdout().flush();

            let mut line = String::new();
            match stdin.lock().read_line(&mut line) {
                Ok(0) | Err(_) => return Move::NONE,
                Ok(_) => {}
            }
            let text = line.trim();
            if text == "quit" || text == "resign" {
                return Move::NONE;
            }
            match board.parse_move(text) {
                Ok(mv) => {
                    self.inner.submit(mv);
                    return self.inner.play_turn(board);
                }
                Err(err) => println!("{err}"),
            }
        }
    }
}

fn controller<'a>(
    kind: PlayerKind,
    color: Color,
    level: u8,
    args: &Args,
    book: &'a OpeningBook,
) -> Result<Box<dyn Controller + 'a>, String> {
    match kind {
        PlayerKind::Human => Ok(Box::new(ConsolePlayer {
            inner: HumanController::new(color),
        })),
        PlayerKind::Ai => {
            let difficulty = Difficulty::try_from(level).map_err(|e| e.to_string())?;
            let mut config = AiConfig::new(color, difficulty).with_limits(SearchLimits {
                max_nodes: args.max_nodes,
            });
            if args.no_book {
                config = config.without_book();
            }
            let ai = match args.seed {
                Some(seed) => AiController::with_seed(config, book, seed.wrapping_add(color as u64)),
                None => AiController::new(config, book),
            };
            Ok(Box::new(ai))
        }
    }
}

fn run(args: &Args) -> Result<(), String> {
    let board = match &args.fen {
        Some(fen) => Board::try_from_fen(fen).map_err(|e| e.to_string())?,
        None => Board::new(),
    };
    let book = OpeningBook::standard();
    let white = controller(args.white, Color::White, args.white_level, args, book)?;
    let black = controller(args.black, Color::Black, args.black_level, args, book)?;
    let mut game = Game::new(board, white, black);

    println!("{}\n", game.board());
    loop {
        if args.max_plies.is_some_and(|max| game.plies() >= max) {
            info!("stopping after {} plies", game.plies());
            return Ok(());
        }
        match game.step() {
            Ok(TurnOutcome::Moved(mv)) => println!("{mv}\n{}\n", game.board()),
            Ok(TurnOutcome::Finished(result)) => {
                println!("{result}");
                return Ok(());
            }
            Ok(TurnOutcome::Waiting) => {}
            Err(err) => error!("{err}"),
        }
    }
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
