//! Bounce Classic entry point
//!
//! Headless driver: reads commands from stdin, feeds them to the game as
//! input events or elapsed time, and prints a text rendering on request.

use std::io::{self, BufRead};
use std::path::PathBuf;

use bounce_classic::audio::LogSink;
use bounce_classic::highscores::DEFAULT_HIGHSCORE_PATH;
use bounce_classic::input::{InputEvent, Key};
use bounce_classic::render::{TextRenderer, ascii_view};
use bounce_classic::settings::DEFAULT_SETTINGS_PATH;
use bounce_classic::sim::MapDirectory;
use bounce_classic::{Flow, Game, HighScore, Settings, Tuning};

const MAPS_ENV: &str = "BOUNCE_MAPS";
const HIGHSCORE_ENV: &str = "BOUNCE_HIGHSCORE";
const SETTINGS_ENV: &str = "BOUNCE_SETTINGS";

const HELP: &str = "commands: type <text> | enter | backspace | key <c> | left [n] | right [n] \
                    | jump | click <x> <y> | wait <ticks> | show | quit";

/// One line of driver input
#[derive(Debug, Clone, PartialEq)]
enum Command {
    Type(String),
    Enter,
    Backspace,
    Key(char),
    Left(u32),
    Right(u32),
    Jump,
    /// Window coordinates, y growing downwards
    Click(f32, f32),
    Wait(u32),
    Show,
    Quit,
}

/// Largest repeat count a single command may ask for
const MAX_COUNT: u32 = 10_000;

fn parse_count(arg: Option<&str>) -> Result<u32, String> {
    let Some(a) = arg else {
        return Ok(1);
    };
    match a.parse::<u32>() {
        Ok(n) if n <= MAX_COUNT => Ok(n),
        Ok(_) => Err(format!("count {a} is above {MAX_COUNT}")),
        Err(_) => Err(format!("not a count: {a}")),
    }
}

fn parse_command(line: &str) -> Result<Command, String> {
    let line = line.trim();
    let (word, rest) = line.split_once(' ').unwrap_or((line, ""));
    let mut args = rest.split_whitespace();

    match word.to_ascii_lowercase().as_str() {
        "type" => Ok(Command::Type(rest.to_string())),
        "enter" => Ok(Command::Enter),
        "backspace" => Ok(Command::Backspace),
        "key" => {
            let mut chars = rest.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Ok(Command::Key(c)),
                _ => Err("key takes exactly one character".to_string()),
            }
        }
        "left" => parse_count(args.next()).map(Command::Left),
        "right" => parse_count(args.next()).map(Command::Right),
        "jump" => Ok(Command::Jump),
        "click" => {
            let mut coord = || -> Result<f32, String> {
                let a = args.next().ok_or("click needs x and y")?;
                a.parse().map_err(|_| format!("not a coordinate: {a}"))
            };
            let x = coord()?;
            let y = coord()?;
            Ok(Command::Click(x, y))
        }
        "wait" => parse_count(args.next()).map(Command::Wait),
        "show" => Ok(Command::Show),
        "quit" | "exit" => Ok(Command::Quit),
        "" => Err(HELP.to_string()),
        other => Err(format!("unknown command '{other}'; {HELP}")),
    }
}

/// Input events a command turns into
fn events_for(command: &Command) -> Vec<InputEvent> {
    let key = |k| InputEvent::KeyDown(k);
    match command {
        Command::Type(text) => text.chars().map(|c| key(Key::Char(c))).collect(),
        Command::Enter => vec![key(Key::Enter)],
        Command::Backspace => vec![key(Key::Backspace)],
        Command::Key(c) => vec![key(Key::Char(*c))],
        Command::Left(n) => vec![key(Key::Left); *n as usize],
        Command::Right(n) => vec![key(Key::Right); *n as usize],
        Command::Jump => vec![key(Key::Char(' '))],
        Command::Click(x, y) => vec![InputEvent::MouseDown { x: *x, y: *y }],
        Command::Wait(_) | Command::Show | Command::Quit => Vec::new(),
    }
}

fn show(game: &Game, renderer: &mut TextRenderer) {
    game.render(renderer);
    println!("[{:?}]", game.mode());
    for line in renderer.take_frame() {
        println!("  {line}");
    }
    if let Some(session) = game.session() {
        print!("{}", ascii_view(session));
    }
}

fn env_path(var: &str, default: &str) -> PathBuf {
    std::env::var_os(var).map_or_else(|| PathBuf::from(default), PathBuf::from)
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Bounce Classic (headless) starting...");

    let settings_path = env_path(SETTINGS_ENV, DEFAULT_SETTINGS_PATH);
    let mut game = Game::builder(Box::new(MapDirectory::new(env_path(MAPS_ENV, "maps"))))
        .tuning(Tuning::load())
        .high_score(HighScore::load(env_path(HIGHSCORE_ENV, DEFAULT_HIGHSCORE_PATH)))
        .settings(Settings::load_or_default(&settings_path), Some(settings_path))
        .sound(Box::new(LogSink))
        .build();
    let mut renderer = TextRenderer::new();

    println!("{HELP}");
    show(&game, &mut renderer);

    for line in io::stdin().lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                log::error!("stdin: {e}");
                break;
            }
        };
        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(msg) => {
                println!("{msg}");
                continue;
            }
        };

        if command == Command::Quit {
            break;
        }
        if events_for(&command)
            .iter()
            .any(|event| game.handle_input(event) == Flow::Exit)
        {
            break;
        }
        match command {
            Command::Wait(ticks) => {
                let period = game.tick_period();
                for _ in 0..ticks {
                    game.update(period);
                }
                show(&game, &mut renderer);
            }
            Command::Show => show(&game, &mut renderer),
            _ => {}
        }
    }

    log::info!("Bye, {}. Best score: {}", game.player_name(), game.high_score());
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The headless driver needs stdin; nothing to do in a browser
}
