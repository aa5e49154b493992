use std::{
    fmt,
    io::{self, BufRead, Write},
};

use clap::{App, Arg, ArgMatches};
use once_cell::sync::Lazy;
use rand::{rngs::StdRng, SeedableRng};
use regex::Regex;

use blackbox::{
    board::{CellRef, Coordinate, DistinctPlacement, SetupError, UniformPlacement, GRID_SIZE},
    game::{CannotGuessReason, CannotShootReason, Game, GameSetup, GameStatus},
    ray::{RayId, RayOutcome},
};

fn main() -> io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let matches = App::new("Black Box")
        .version("1.0")
        .author("Zachary Stewart <zachary@zstewart.com>")
        .about("Command line game of Black Box: find the hidden atoms by firing rays.")
        .arg(
            Arg::with_name("atoms")
                .short("a")
                .long("atoms")
                .value_name("ATOMS")
                .help("number of atoms to hide on the board")
                .takes_value(true)
                .validator(|value| match value.parse::<usize>() {
                    Ok(_) => Ok(()),
                    Err(_) => Err(format!("{} is not a whole number", value)),
                }),
        )
        .arg(
            Arg::with_name("seed")
                .short("s")
                .long("seed")
                .value_name("SEED")
                .help("seed for a reproducible atom layout")
                .takes_value(true)
                .validator(|value| match value.parse::<u64>() {
                    Ok(_) => Ok(()),
                    Err(_) => Err(format!("{} is not a valid seed", value)),
                }),
        )
        .arg(
            Arg::with_name("distinct")
                .long("distinct")
                .help("never place two atoms on the same cell"),
        )
        .get_matches();

    let stdin = std::io::stdin();
    let mut input = InputReader::new(stdin.lock());

    let mut game = loop {
        let count = choose_atom_count(&matches, &mut input)?;
        match start_game(&matches, count) {
            Ok(game) => break game,
            Err(err @ SetupError::InvalidAtomCount { .. })
                if matches.value_of("atoms").is_none() =>
            {
                println!("{}", err);
            }
            Err(err) => {
                eprintln!("error: {}", err);
                std::process::exit(2);
            }
        }
    };

    play(&mut game, &mut input)
}

/// Choose the number of atoms based on either args or cli input.
fn choose_atom_count<B: BufRead>(
    matches: &ArgMatches,
    input: &mut InputReader<B>,
) -> io::Result<usize> {
    // Already checked by the validator.
    if let Some(count) = matches.value_of("atoms").and_then(|v| v.parse().ok()) {
        return Ok(count);
    }
    input.read_input("Enter the number of atoms to be placed on the board:", |input| {
        match input.parse() {
            Ok(count) => Some(count),
            Err(_) => {
                println!("Please enter a whole number.");
                None
            }
        }
    })
}

/// Build the game using the placement selected on the command line.
fn start_game(matches: &ArgMatches, count: usize) -> Result<Game, SetupError> {
    let rng = match matches.value_of("seed").and_then(|v| v.parse().ok()) {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    log::info!("Hiding {} atoms", count);
    if matches.is_present("distinct") {
        GameSetup::with_placement(count, DistinctPlacement::with_rng(rng)).start()
    } else {
        GameSetup::with_placement(count, UniformPlacement::with_rng(rng)).start()
    }
}

/// Run the shoot/guess loop until the game is won or lost.
fn play(game: &mut Game, input: &mut InputReader<impl BufRead>) -> io::Result<()> {
    enum Command {
        Shoot(Coordinate),
        Guess(Coordinate),
        Rays,
        Help,
        Quit,
    }
    /// Matchers for commands with coordinates.
    static SHOOT: Lazy<Regex> = Lazy::new(|| {
        Regex::new(
            r"^(?x)(?:shoot|fire|s)\s+
        (?:(?:from|at)\s+)?
        (?P<row>[0-9]+)(?:\s*,\s*|\s+)(?P<column>[0-9]+)$",
        )
        .unwrap()
    });
    static GUESS: Lazy<Regex> = Lazy::new(|| {
        Regex::new(
            r"^(?x)(?:guess|g)\s+
        (?:at\s+)?
        (?P<row>[0-9]+)(?:\s*,\s*|\s+)(?P<column>[0-9]+)$",
        )
        .unwrap()
    });

    println!();
    println!("Find the hidden atoms. Type help or ? for commands.");
    loop {
        match game.status() {
            GameStatus::InProgress => {}
            GameStatus::Won => {
                println!();
                println!("You Win! Final score: {}", game.score());
                show_revealed_board(game);
                return Ok(());
            }
            GameStatus::Lost => {
                println!();
                println!("Game Over");
                show_revealed_board(game);
                return Ok(());
            }
        }

        println!();
        show_board(game, false);
        println!(
            "Score: {}    Atoms left: {}",
            game.score(),
            game.atoms_remaining()
        );
        println!();

        let cmd = input.read_input_lower(">", |input| match input {
            "?" | "help" | "h" => Some(Command::Help),
            "rays" | "history" | "r" => Some(Command::Rays),
            "quit" | "exit" | "q" => Some(Command::Quit),
            other => {
                if let Some(captures) = SHOOT.captures(other) {
                    parse_coord(&captures).map(Command::Shoot)
                } else if let Some(captures) = GUESS.captures(other) {
                    parse_coord(&captures).map(Command::Guess)
                } else {
                    println!("Invalid command \"{}\". Use '?' for help", other);
                    None
                }
            }
        })?;

        match cmd {
            Command::Shoot(coord) => match game.shoot(coord) {
                Ok(_) => {
                    if let Some(ray) = game.rays().last() {
                        println!("{}", RayReport(ray.id(), ray.outcome(), ray.origin()));
                    }
                }
                Err(err) => match err.reason() {
                    CannotShootReason::NotEdge => {
                        println!("Rays can only be fired from the edge of the board.")
                    }
                    CannotShootReason::OutOfBounds => {
                        println!("{} is not on the board.", err.coord())
                    }
                    CannotShootReason::RayLost => println!("{}", err),
                },
            },
            Command::Guess(coord) => match game.guess(coord) {
                Ok(true) => println!("Found an atom at {}!", coord),
                Ok(false) => println!("No atom at {}.", coord),
                Err(err) => match err.reason() {
                    CannotGuessReason::NotInterior => {
                        println!("Atoms can only hide inside the border.")
                    }
                    CannotGuessReason::OutOfBounds => {
                        println!("{} is not on the board.", err.coord())
                    }
                },
            },
            Command::Rays => {
                if game.rays().is_empty() {
                    println!("No rays fired yet.");
                }
                for ray in game.rays() {
                    println!("{}", RayReport(ray.id(), ray.outcome(), ray.origin()));
                }
            }
            Command::Help => {
                println!(
                    "Available Commands:
    shoot <row>,<col>   fire a ray from an edge cell. Costs 1 point, plus 1 more if it
        leaves through a different edge cell.
    guess <row>,<col>   guess that an atom hides at an interior cell. Wrong guesses cost 5.
    rays                list every ray fired so far.
    quit                leave the game.

Edge cells show the number of the ray that entered or left there."
                );
            }
            Command::Quit => return Ok(()),
        }
    }
}

/// Parse the row and column from a command, printing a message if they are out of range.
fn parse_coord(captures: &regex::Captures) -> Option<Coordinate> {
    let parse = |name: &str| {
        let text = captures.name(name).map_or("", |m| m.as_str());
        match text.parse::<usize>() {
            Ok(value) if value < GRID_SIZE => Some(value),
            Ok(value) => {
                println!("{} must be in range [0,9], got {}", name, value);
                None
            }
            Err(_) => {
                println!("invalid {}: {}", name, text);
                None
            }
        }
    };
    let row = parse("row")?;
    let column = parse("column")?;
    Some(Coordinate::new(row, column))
}

/// Display helper describing how a ray ended.
struct RayReport(RayId, Option<RayOutcome>, Coordinate);

impl fmt::Display for RayReport {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let RayReport(id, outcome, origin) = *self;
        match outcome {
            Some(RayOutcome::Exited(exit)) if exit == origin => {
                write!(f, "Ray {} from {} was reflected.", id, origin)
            }
            Some(RayOutcome::Exited(exit)) => {
                write!(f, "Ray {} from {} exited at {}.", id, origin, exit)
            }
            Some(RayOutcome::Absorbed) => write!(f, "Ray {} from {} was absorbed.", id, origin),
            None => write!(f, "Ray {} from {} is still moving.", id, origin),
        }
    }
}

/// Print the board as the player sees it, or with every atom shown once the game is over.
fn show_board(game: &Game, reveal: bool) {
    enum BoardCell {
        Corner,
        Edge,
        Ray(RayId),
        Hidden,
        Found,
        Missed,
    }
    impl fmt::Display for BoardCell {
        fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
            match self {
                BoardCell::Corner => f.pad(" "),
                BoardCell::Edge => f.pad("#"),
                BoardCell::Ray(id) => f.pad(&id.to_string()),
                BoardCell::Hidden => f.pad("."),
                BoardCell::Found => f.pad("@"),
                BoardCell::Missed => f.pad("O"),
            }
        }
    }
    let classify = |cell: CellRef| {
        if cell.is_corner() {
            BoardCell::Corner
        } else if cell.is_edge() {
            // The ray that ended here is drawn over the ray that started here.
            cell.terminating_ray()
                .and_then(|origin| game.get_coord(origin))
                .and_then(|origin| origin.originating_ray())
                .or_else(|| cell.originating_ray())
                .map_or(BoardCell::Edge, BoardCell::Ray)
        } else if cell.revealed_atom() {
            BoardCell::Found
        } else if reveal && game.reveal_atoms().contains(&cell.coord()) {
            BoardCell::Missed
        } else {
            BoardCell::Hidden
        }
    };

    print!("   ");
    for i in 0..GRID_SIZE {
        print!("{:^4}", i);
    }
    println!();
    for (i, row) in game.board().iter_rows().enumerate() {
        print!("{:>2} ", i);
        for cell in row {
            print!("{:^4}", classify(cell));
        }
        println!();
    }
}

/// Print the board with the atoms that were never found.
fn show_revealed_board(game: &Game) {
    show_board(game, true);
    if !game.reveal_atoms().is_empty() {
        println!("Atoms you missed are marked O.");
    }
}

/// Helper to read input from the player.
struct InputReader<B> {
    read: B,
    buf: String,
}

impl<B> InputReader<B> {
    fn new(read: B) -> Self {
        Self {
            read,
            buf: String::new(),
        }
    }
}

impl<B: BufRead> InputReader<B> {
    /// Repeatedly tries to read input until the input checker returns `Some`. Converts
    /// to ascii lower before running the checker.
    fn read_input_lower<F, T>(&mut self, prompt: &str, mut checker: F) -> io::Result<T>
    where
        F: FnMut(&str) -> Option<T>,
    {
        loop {
            self.read_input_inner(prompt)?;
            self.buf.make_ascii_lowercase();
            if let Some(val) = checker(self.buf.trim()) {
                return Ok(val);
            }
        }
    }

    /// Repeatedly tries to read input until the input checker returns `Some`.
    fn read_input<F, T>(&mut self, prompt: &str, mut checker: F) -> io::Result<T>
    where
        F: FnMut(&str) -> Option<T>,
    {
        loop {
            self.read_input_inner(prompt)?;
            if let Some(val) = checker(self.buf.trim()) {
                return Ok(val);
            }
        }
    }

    /// Helper to print the prompt, clear the string buffer and read a line.
    fn read_input_inner(&mut self, prompt: &str) -> io::Result<()> {
        print!("{} ", prompt);
        io::stdout().flush()?;
        self.buf.clear();
        if self.read.read_line(&mut self.buf)? == 0 {
            println!();
            std::process::exit(0);
        }
        Ok(())
    }
}
