use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use log::info;

use tictactoe_rs::{Control, Match, PlayerSpec, Strategy, Symbol};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Mode {
    Human,
    Random,
    Optimal,
}

impl Mode {
    fn control(self) -> Control {
        match self {
            Mode::Human => Control::Human,
            Mode::Random => Control::Computer(Strategy::Random),
            Mode::Optimal => Control::Computer(Strategy::Optimal),
        }
    }
}

/// Play tic-tac-toe in the terminal.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Who plays X
    #[arg(long, value_enum, default_value_t = Mode::Human)]
    x: Mode,

    /// Who plays O
    #[arg(long, value_enum, default_value_t = Mode::Optimal)]
    o: Mode,

    /// Pause before each computer move, in milliseconds
    #[arg(long, default_value_t = 500)]
    delay_ms: u64,

    /// Seed for the random strategy
    #[arg(long)]
    seed: Option<u64>,
}

enum Command {
    Play(usize),
    Restart,
    Quit,
    Unknown,
}

fn parse_command(line: &str) -> Command {
    match line.trim() {
        "q" | "quit" => Command::Quit,
        "r" | "restart" => Command::Restart,
        other => other.parse().map_or(Command::Unknown, Command::Play),
    }
}

fn prompt(input: &mut impl BufRead, message: &str) -> anyhow::Result<Option<String>> {
    print!("{}", message);
    io::stdout().flush()?;
    let mut line = String::new();
    if input.read_line(&mut line).context("failed to read stdin")? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let x = PlayerSpec::new(Symbol::X, args.x.control());
    let o = PlayerSpec::new(Symbol::O, args.o.control());
    let mut game = match args.seed {
        Some(seed) => Match::with_seed(x, o, seed)?,
        None => Match::new(x, o)?,
    };
    let delay = Duration::from_millis(args.delay_ms);
    let mut input = io::stdin().lock();

    game.restart()?;
    loop {
        println!("{}", game.board_snapshot());

        if let Some(outcome) = game.state_snapshot().outcome {
            info!("match over: {:?}", outcome);
            println!("{}", outcome);
            match prompt(&mut input, "Play again? [y/N] ")? {
                Some(answer) if answer.trim().eq_ignore_ascii_case("y") => {
                    game.restart()?;
                    continue;
                }
                _ => break,
            }
        }

        if game.is_computer_turn() {
            thread::sleep(delay);
            game.computer_turn()?;
            continue;
        }

        let Some(symbol) = game.to_move() else {
            continue;
        };
        let Some(line) = prompt(&mut input, &format!("{} to move (0-8, r, q): ", symbol))? else {
            break;
        };
        match parse_command(&line) {
            Command::Play(index) => {
                if !game.apply_move(index) {
                    println!("Cannot play {}", index);
                }
            }
            Command::Restart => game.restart()?,
            Command::Quit => break,
            Command::Unknown => println!("Enter a cell index from 0 to 8"),
        }
    }

    Ok(())
}
