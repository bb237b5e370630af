mod config;
mod context;
mod editor;
mod logging;
mod pipeline;
mod shared;
mod tui;

use std::path::PathBuf;
use std::time::Duration;
use crossterm::terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use editor::MacroTypeEditor;
use pipeline::store::MacroStore;
use shared::InputEvent;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let config_dir: PathBuf = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_default());
    let config = match config::load_config(&config_dir) {
        Some(config) => config,
        None => {
            // first run (or an unreadable file): write the defaults out so they can be edited
            let config = config::Config::default();
            if !config::config_file_path(&config_dir).exists() {
                config::save_config(&config_dir, &config)?;
            }
            config
        }
    };
    logging::setup(&config.log_file, config.debug)?;
    log::info!("starting, config from {}", config_dir.display());

    let editor = MacroTypeEditor::new(config.upper_bound());
    let mut store = MacroStore::new(config.seed.clone());
    let (mut ctx, commands) = context::channel();

    terminal::enable_raw_mode()?;
    let _guard = RawModeGuard; // auto drops when out of scope

    let backend = CrosstermBackend::new(std::io::stdout());
    let mut term = Terminal::new(backend)?;
    term.clear()?;

    let tick_rate = Duration::from_millis(config.tick_ms);
    let mut tui_state = tui::mode::TuiState::default();

    loop {
        let ds = editor.display_state(store.current());
        tui_state.sync(&ds);

        term.draw(|frame| {
            tui::view::render(frame, frame.area(), &ds, &tui_state);
        })?;

        let events = tui::input::poll_input(tick_rate, &mut tui_state)?;
        for event in events {
            if event == InputEvent::Quit {
                log::info!("quitting with {:?}", store.current());
                term.clear()?;
                return Ok(());
            }
            editor.handle_input(event, store.current(), &mut ctx);
        }

        // the store applies whatever the editor asked for, next frame shows it
        for cmd in commands.try_iter() {
            store.apply(cmd);
        }
    }
}

struct RawModeGuard;
impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
    }
}
