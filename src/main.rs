mod ui;

use anyhow::{bail, Context, Result};
use crossterm::event::{self, Event};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use gridsnake::build_info;
use gridsnake::constants::FRAME_POLL_MS;
use gridsnake::input::{map_key, KeyAction};
use gridsnake::{GameConfig, Mode, ModeKind};
use ratatui::{backend::CrosstermBackend, Terminal};
use simplelog::{LevelFilter, WriteLogger};
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

/// Options collected from the command line.
#[derive(Debug, Default, PartialEq)]
struct CliOptions {
    mode: Option<String>,
    level: Option<usize>,
    config: Option<PathBuf>,
    seed: Option<u64>,
    log: Option<PathBuf>,
}

enum Command {
    Play(CliOptions),
    Version,
    Help,
}

fn print_help() {
    println!("gridsnake - Terminal Grid Snake\n");
    println!("Usage: gridsnake [options]\n");
    println!("Options:");
    println!("  --mode <endless|level>  Game mode (default: endless)");
    println!("  --level <N>             Start the level campaign at level N");
    println!("  --config <FILE>         Load settings from a JSON file");
    println!("  --seed <N>              Seed the food RNG for a repeatable game");
    println!("  --log <FILE>            Write a debug log to FILE");
    println!("  --version               Show version information");
    println!("  --help                  Show this help message");
}

fn parse_args(args: &[String]) -> Result<Command> {
    let mut opts = CliOptions::default();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        let mut value = |name: &str| {
            iter.next()
                .cloned()
                .with_context(|| format!("{} needs a value", name))
        };
        match arg.as_str() {
            "--version" | "-v" => return Ok(Command::Version),
            "--help" | "-h" => return Ok(Command::Help),
            "--mode" | "-m" => opts.mode = Some(value("--mode")?),
            "--level" | "-l" => {
                let raw = value("--level")?;
                let level = raw
                    .parse()
                    .with_context(|| format!("invalid level '{}'", raw))?;
                opts.level = Some(level);
            }
            "--config" | "-c" => opts.config = Some(PathBuf::from(value("--config")?)),
            "--seed" => {
                let raw = value("--seed")?;
                let seed = raw
                    .parse()
                    .with_context(|| format!("invalid seed '{}'", raw))?;
                opts.seed = Some(seed);
            }
            "--log" => opts.log = Some(PathBuf::from(value("--log")?)),
            other => bail!("Unknown argument: {}\nRun 'gridsnake --help' for usage.", other),
        }
    }
    Ok(Command::Play(opts))
}

/// Merge the config file (if any) with command-line overrides.
fn build_config(opts: &CliOptions) -> Result<GameConfig> {
    let mut config = match &opts.config {
        Some(path) => GameConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => GameConfig::default(),
    };
    if let Some(level) = opts.level {
        config.start_level = level;
    }
    if opts.seed.is_some() {
        config.seed = opts.seed;
    }
    Ok(config)
}

/// `--level` alone implies the level campaign.
fn mode_kind(opts: &CliOptions) -> Result<ModeKind> {
    match (&opts.mode, opts.level) {
        (Some(name), _) => Ok(name.parse()?),
        (None, Some(_)) => Ok(ModeKind::Level),
        (None, None) => Ok(ModeKind::Endless),
    }
}

fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    WriteLogger::init(LevelFilter::Debug, simplelog::Config::default(), file)
        .context("failed to install logger")?;
    Ok(())
}

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let opts = match parse_args(&args)? {
        Command::Version => {
            println!("{}", build_info::version_string());
            return Ok(());
        }
        Command::Help => {
            print_help();
            return Ok(());
        }
        Command::Play(opts) => opts,
    };

    if let Some(path) = &opts.log {
        init_logging(path)?;
    }

    let config = build_config(&opts)?;
    let mut mode = Mode::new(mode_kind(&opts)?, &config).context("failed to start game")?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut mode);

    // Restore terminal even when the loop failed
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

/// Frame loop: poll input, advance game time, redraw.
fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, mode: &mut Mode) -> Result<()> {
    let start = Instant::now();

    loop {
        if event::poll(Duration::from_millis(FRAME_POLL_MS))? {
            if let Event::Key(key) = event::read()? {
                match map_key(key) {
                    KeyAction::Quit => break,
                    KeyAction::Game(input) => {
                        mode.process_input(input);
                    }
                    KeyAction::None => {}
                }
            }
        }

        mode.tick(start.elapsed().as_millis() as u64);

        terminal.draw(|frame| ui::draw_ui(frame, &mode.snapshot()))?;
    }

    log::info!("quit at status {:?}", mode.status());
    Ok(())
}
