// src/main.rs
mod config;
mod content;
mod effects;
mod gallery;
mod input;
mod models;
mod network;
mod page;
mod prompts;
mod scroll;
mod state;
mod tasks;
mod theme;
mod ui;
mod utils;
mod view;

use std::fs::{self, OpenOptions};
use std::io::{self, Stdout};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use crossterm::event::{self as term, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::runtime::Runtime;
use tokio::sync::mpsc::{self, UnboundedReceiver};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::config::Settings;
use crate::content::{OWNER_NAME, SKILLS};
use crate::effects::EffectRunner;
use crate::network::{FormspreeClient, GeminiChat, GeminiClient};
use crate::page::SectionId;
use crate::state::{Event, Portfolio};
use crate::utils::rows_to_units;

const IDLE_POLL: Duration = Duration::from_millis(200);
const ANIMATION_POLL: Duration = Duration::from_millis(30);

#[derive(Parser, Debug)]
#[command(name = "folio", version, about = "Rajeev Kumar's design portfolio, in your terminal")]
struct Args {
    /// Section to open at: home, work, skills, about or contact
    #[arg(long, value_parser = parse_section)]
    section: Option<SectionId>,

    /// Store a Gemini API key in the user config and exit
    #[arg(long, value_name = "KEY")]
    save_api_key: Option<String>,

    /// Write logs here instead of the configured log file
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

fn parse_section(value: &str) -> Result<SectionId, String> {
    SectionId::from_anchor(&value.to_lowercase())
        .ok_or_else(|| format!("unknown section '{value}', expected one of home, work, skills, about, contact"))
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if let Some(key) = args.save_api_key.as_deref() {
        config::save_api_key(key)?;
        println!("API key saved to {}", config::get_user_config_path()?.display());
        return Ok(());
    }

    let settings = Settings::new().context("could not load configuration")?;
    let log_path = args.log_file.clone().unwrap_or_else(|| settings.log_path());
    init_logging(&log_path)?;
    info!(model = %settings.gemini_model, "starting folio");

    let rt = Runtime::new()?;
    let (tx, mut rx) = mpsc::unbounded_channel();

    let gemini = Arc::new(GeminiClient::from_settings(&settings)?);
    if !gemini.has_api_key() {
        warn!("no Gemini API key; inspiration falls back and chat replies with an apology");
    }
    let skills: Vec<&str> = SKILLS.iter().map(|skill| skill.name).collect();
    let chat = GeminiChat::new(
        Arc::clone(&gemini),
        prompts::chat_system_instruction(OWNER_NAME, &skills),
    );
    let form = FormspreeClient::from_settings(&settings)?;
    let runner = EffectRunner::new(rt.handle().clone(), tx, gemini, Arc::new(chat), Arc::new(form));

    let (_, height) = terminal::size()?;
    let mut app = Portfolio::new(
        rows_to_units(ui::page_rows(height)),
        settings.submitted_display(),
        settings.dark_mode,
    );
    if let Some(section) = args.section {
        runner.run(app.update(Event::Navigate(section)));
    }

    terminal::enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app, &runner, &mut rx);

    // Restore the terminal even when the loop failed.
    terminal::disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    runner.shutdown();
    app.shutdown();
    info!("bye");
    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut Portfolio,
    runner: &EffectRunner,
    rx: &mut UnboundedReceiver<Event>,
) -> anyhow::Result<()> {
    loop {
        let size = terminal.size()?;
        app.set_viewport_height(rows_to_units(ui::page_rows(size.height)));

        terminal.draw(|f| ui::render(f, app))?;
        app.on_frame();

        while let Ok(event) = rx.try_recv() {
            let effects = app.update(event);
            runner.run(effects);
        }

        let timeout = if app.is_animating() { ANIMATION_POLL } else { IDLE_POLL };
        if term::poll(timeout)? {
            if let term::Event::Key(key) = term::read()? {
                if key.kind == KeyEventKind::Press && !input::handle_key(key, app, runner)? {
                    return Ok(());
                }
            }
        }

        runner.run(app.update(Event::Tick));
    }
}

/// Logs go to a file; the terminal belongs to the UI.
fn init_logging(path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("could not open log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .init();
    Ok(())
}
