mod config;
mod human;
mod input;
mod render;
mod session;

use clap::Parser;
use gomoku_engine::game::{
    Difficulty, GOMOKU_WIN_COUNT, GameStatus, Player, SessionRng, Symbol, bot_player,
};
use gomoku_engine::{log, logger};

use config::{Config, DEFAULT_CONFIG_FILE, MAX_BOARD_SIZE, MIN_BOARD_SIZE};
use human::HumanPlayer;
use session::GameSession;

#[derive(Parser)]
#[command(name = "gomoku")]
struct Args {
    #[arg(long)]
    use_log_prefix: bool,
    /// Fix the RNG seed to make bot behaviour reproducible.
    #[arg(long)]
    seed: Option<u64>,
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    config: String,
}

#[derive(Default)]
struct Tally {
    x_wins: u32,
    o_wins: u32,
    draws: u32,
}

impl Tally {
    fn print(&self) {
        println!(
            "\nScore - X: {}, O: {}, Draws: {}",
            self.x_wins, self.o_wins, self.draws
        );
    }
}

struct SessionSettings {
    board_size: usize,
    bot_difficulty: Option<Difficulty>,
}

fn main() {
    let args = Args::parse();
    logger::init_logger(args.use_log_prefix.then(|| "Gomoku".to_string()));

    let config = match config::manager_for(&args.config).get_config() {
        Ok(config) => config,
        Err(err) => {
            println!("{}; falling back to defaults", err);
            Config::default()
        }
    };

    let mut tally = Tally::default();
    let mut starter = Symbol::X;

    while input::prompt_yes_no("Do you wish to start a game? (y/n): ") {
        let Some(settings) = prompt_session_settings(&config) else {
            break;
        };

        let rng = match args.seed {
            Some(seed) => SessionRng::new(seed),
            None => SessionRng::from_random(),
        };
        log!("Session RNG seed: {}", rng.seed());
        log!(
            "Starting {0}x{0} game, {1} moves first",
            settings.board_size,
            starter
        );

        let player_x: Box<dyn Player> = Box::new(HumanPlayer::new(Symbol::X));
        let player_o: Box<dyn Player> = match settings.bot_difficulty {
            Some(difficulty) => bot_player(difficulty, Symbol::O, GOMOKU_WIN_COUNT, rng),
            None => Box::new(HumanPlayer::new(Symbol::O)),
        };

        let mut session = GameSession::new(
            settings.board_size,
            GOMOKU_WIN_COUNT,
            starter,
            player_x,
            player_o,
        );
        match session.run() {
            GameStatus::Won(Symbol::X) => tally.x_wins += 1,
            GameStatus::Won(Symbol::O) => tally.o_wins += 1,
            _ => tally.draws += 1,
        }

        starter = starter.other();
        tally.print();
    }

    tally.print();
}

fn prompt_session_settings(config: &Config) -> Option<SessionSettings> {
    let bot_difficulty = if input::prompt_yes_no("Play against bot? (y/n): ") {
        Some(prompt_difficulty(config.default_difficulty)?)
    } else {
        None
    };

    let board_size = input::prompt_number(
        &format!(
            "Enter a board size ({}-{}) [{}]: ",
            MIN_BOARD_SIZE, MAX_BOARD_SIZE, config.default_board_size
        ),
        MIN_BOARD_SIZE,
        MAX_BOARD_SIZE,
        config.default_board_size,
    )?;

    if bot_difficulty == Some(Difficulty::Hard) {
        println!(
            "Note: the hard bot searches every continuation; on an open board \
             this can take a very long time"
        );
    }

    Some(SessionSettings {
        board_size: board_size as usize,
        bot_difficulty,
    })
}

fn prompt_difficulty(default: Difficulty) -> Option<Difficulty> {
    println!("\nChoose difficulty:");
    println!("1. Easy");
    println!("2. Medium");
    println!("3. Hard");

    let default_choice = match default {
        Difficulty::Easy => 1,
        Difficulty::Medium => 2,
        Difficulty::Hard => 3,
    };

    let choice = input::prompt_number(
        &format!("Enter a difficulty (1-3) [{}]: ", default_choice),
        1,
        3,
        default_choice,
    )?;

    // The range check above keeps the conversion infallible.
    Difficulty::try_from(choice).ok()
}
