mod display;

use std::collections::HashMap;
use std::fs::File;
use std::io::{stdout, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::{mpsc, Mutex};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::Context;
use clap::{Parser, ValueEnum};
use crossterm::{
    cursor,
    event::{
        self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    style::Print,
    terminal, ExecutableCommand, QueueableCommand,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use boss_shooter::compute::{init_state, tick};
use boss_shooter::constants::TICK_MS;
use boss_shooter::entities::{EncounterState, EncounterStatus, Input, ModeKind};
use boss_shooter::events::{GameEvent, SoundKind};
use boss_shooter::menu::{Menu, MenuChoice, MenuKey};
use boss_shooter::score_store::{self, FileStore, HighScoreStore};

use display::Screen;

/// A key is considered "held" if its last press/repeat event arrived within
/// this many frames.  Covers terminals that don't emit key-release events:
/// the OS key-repeat rate is ≥ 15 Hz, so a window of 8 frames (≈128 ms) is
/// always refreshed before expiry.
const HOLD_WINDOW: u64 = 8;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum CliMode {
    Survival,
    Boss,
}

impl From<CliMode> for ModeKind {
    fn from(mode: CliMode) -> Self {
        match mode {
            CliMode::Survival => ModeKind::Survival,
            CliMode::Boss => ModeKind::Boss,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "boss_shooter")]
#[command(about = "Terminal arcade shooter with a survival mode and a multi-phase boss fight")]
struct Cli {
    /// Skip the menu and start straight into this mode.
    #[arg(long, value_enum)]
    mode: Option<CliMode>,
    /// Seed for the simulation RNG; random when omitted.
    #[arg(long)]
    seed: Option<u64>,
    /// Milliseconds per simulation tick.
    #[arg(long, default_value_t = TICK_MS)]
    tick_ms: u64,
    /// High-score file (default: $HOME/.boss_shooter_score).
    #[arg(long)]
    score_file: Option<PathBuf>,
    /// Write logs here; the terminal itself is taken by the game.
    #[arg(long)]
    log_file: Option<PathBuf>,
    /// Ring the terminal bell on hits and game over.
    #[arg(long)]
    bell: bool,
}

/// Returns true if `key` was seen within the last `HOLD_WINDOW` frames.
fn is_held(key_frame: &HashMap<KeyCode, u64>, key: &KeyCode, frame: u64) -> bool {
    key_frame
        .get(key)
        .map(|&last| frame.saturating_sub(last) <= HOLD_WINDOW)
        .unwrap_or(false)
}

fn any_held(key_frame: &HashMap<KeyCode, u64>, keys: &[KeyCode], frame: u64) -> bool {
    keys.iter().any(|k| is_held(key_frame, k, frame))
}

/// Sample the held keys into one tick's input snapshot.
fn sample_input(key_frame: &HashMap<KeyCode, u64>, frame: u64) -> Input {
    Input {
        left: any_held(key_frame, &[KeyCode::Left, KeyCode::Char('a'), KeyCode::Char('A')], frame),
        right: any_held(key_frame, &[KeyCode::Right, KeyCode::Char('d'), KeyCode::Char('D')], frame),
        up: any_held(key_frame, &[KeyCode::Up, KeyCode::Char('w'), KeyCode::Char('W')], frame),
        down: any_held(key_frame, &[KeyCode::Down, KeyCode::Char('s'), KeyCode::Char('S')], frame),
        fire: is_held(key_frame, &KeyCode::Char(' '), frame),
    }
}

fn screen() -> std::io::Result<Screen> {
    let (width, height) = terminal::size()?;
    Ok(Screen { width, height })
}

// ── Menu ──────────────────────────────────────────────────────────────────────

fn show_menu<W: Write>(
    out: &mut W,
    rx: &mpsc::Receiver<Event>,
    high_score: u32,
) -> std::io::Result<MenuChoice> {
    let mut menu = Menu::default();
    loop {
        display::render_menu(out, screen()?, &menu, high_score)?;

        let code = match rx.recv() {
            Ok(Event::Key(KeyEvent { code, kind: KeyEventKind::Press, .. })) => code,
            Ok(_) => continue,
            // Input thread gone: nothing more can be selected.
            Err(_) => return Ok(MenuChoice::Quit),
        };
        let key = match code {
            KeyCode::Up | KeyCode::Char('w') => MenuKey::Up,
            KeyCode::Down | KeyCode::Char('s') => MenuKey::Down,
            KeyCode::Enter => MenuKey::Confirm,
            KeyCode::Char(c @ '1'..='3') => MenuKey::Pick(c as usize - '1' as usize),
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => MenuKey::Quit,
            _ => continue,
        };
        if let Some(choice) = menu.handle(key) {
            return Ok(choice);
        }
    }
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Forward simulation events to the terminal.  Sound is approximated with
/// the bell; everything else is only logged.
fn present<W: Write>(out: &mut W, events: &[GameEvent], bell: bool) -> std::io::Result<()> {
    for event in events {
        match event {
            GameEvent::Sound(SoundKind::Hit | SoundKind::GameOver) if bell => {
                out.queue(Print("\x07"))?;
            }
            GameEvent::Victory | GameEvent::Defeat => info!(?event, "session ended"),
            _ => tracing::trace!(?event),
        }
    }
    Ok(())
}

/// Returns `true` → quit program,  `false` → back to menu.
///
/// Input model: a `key_frame` map records the frame number of the last
/// press/repeat event for every key.  Each frame the still-fresh keys are
/// sampled into one `Input`, so Space and the arrows can be held together.
fn game_loop<W: Write>(
    out: &mut W,
    state: &mut EncounterState,
    rx: &mpsc::Receiver<Event>,
    rng: &mut StdRng,
    cli: &Cli,
    high_score: u32,
) -> std::io::Result<bool> {
    let frame_len = Duration::from_millis(cli.tick_ms);
    let mut key_frame: HashMap<KeyCode, u64> = HashMap::new();
    let mut frame: u64 = 0;
    let mut events: Vec<GameEvent> = Vec::new();

    loop {
        let frame_start = Instant::now();
        frame += 1;

        // ── Drain all pending input events (non-blocking) ─────────────────────
        while let Ok(Event::Key(KeyEvent { code, kind, modifiers, .. })) = rx.try_recv() {
            match kind {
                KeyEventKind::Press => {
                    key_frame.insert(code, frame);
                    match code {
                        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                            return Ok(true);
                        }
                        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                            return Ok(true);
                        }
                        KeyCode::Char('r') | KeyCode::Char('R')
                            if state.status != EncounterStatus::Playing =>
                        {
                            return Ok(false);
                        }
                        _ => {}
                    }
                }
                KeyEventKind::Repeat => {
                    key_frame.insert(code, frame);
                }
                KeyEventKind::Release => {
                    key_frame.remove(&code);
                }
            }
        }

        let input = sample_input(&key_frame, frame);
        events.clear();
        *state = tick(state, &input, rng, &mut events);

        present(out, &events, cli.bell)?;
        display::render(out, screen()?, state, high_score)?;

        let elapsed = frame_start.elapsed();
        if elapsed < frame_len {
            std::thread::sleep(frame_len - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn init_logging(path: &Path) -> anyhow::Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    if let Some(path) = &cli.log_file {
        init_logging(path)?;
    }

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode().context("failed to enable raw mode")?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Request key-release (and key-repeat) events from the terminal.
    // Kitty-protocol terminals support this; others fall back gracefully.
    let keyboard_enhanced = out
        .execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))
        .is_ok();

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || loop {
        match event::read() {
            Ok(ev) => {
                if tx.send(ev).is_err() {
                    break; // receiver dropped → program exiting
                }
            }
            Err(_) => break,
        }
    });

    let result = run(&mut out, &rx, &cli);

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    result
}

fn run<W: Write>(out: &mut W, rx: &mpsc::Receiver<Event>, cli: &Cli) -> anyhow::Result<()> {
    let mut store = FileStore::new(cli.score_file.clone().unwrap_or_else(score_store::default_path));
    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut pending = cli.mode.map(ModeKind::from);

    loop {
        let high_score = store.read_high_score();
        let mode = match pending.take() {
            Some(mode) => mode,
            None => match show_menu(out, rx, high_score)? {
                MenuChoice::Quit => break,
                MenuChoice::Start(mode) => mode,
            },
        };

        info!(?mode, seed = ?cli.seed, "session started");
        let mut state = init_state(mode);
        let quit = game_loop(out, &mut state, rx, &mut rng, cli, high_score)?;

        match score_store::record_session(&mut store, state.player.score) {
            Ok(true) => info!(score = state.player.score, "new high score"),
            Ok(false) => {}
            Err(err) => warn!(path = %store.path().display(), "failed to save high score: {err}"),
        }

        if quit {
            break;
        }
    }
    Ok(())
}
