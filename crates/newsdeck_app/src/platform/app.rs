use std::io;
use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use anyhow::Context;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use deck_logging::deck_info;
use newsdeck_core::{update, AppState, Msg};
use newsdeck_engine::FetchSettings;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use super::effects::EffectRunner;
use super::ui::input::{handle_key, InputAction, InputMode};
use super::ui::render;
use super::{config, logging, persistence};

const TICK_INTERVAL: Duration = Duration::from_millis(75);
const POLL_TIMEOUT: Duration = Duration::from_millis(50);

pub fn run_app() -> anyhow::Result<()> {
    logging::initialize(logging::LogDestination::File);

    let data_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let config = config::load(&data_dir)?;

    let (msg_tx, msg_rx) = mpsc::channel::<Msg>();
    let runner = EffectRunner::new(
        FetchSettings::new(config.api_key.clone()),
        data_dir.clone(),
        msg_tx.clone(),
    )
    .map_err(|err| anyhow::anyhow!("engine startup failed: {}", err.message))?;

    let mut state = AppState::with_policy(config.policy);

    // Restore persisted favorites, then kick off the initial fetch.
    let favorites = persistence::load_favorites(&data_dir);
    dispatch(&mut state, Msg::FavoritesRestored(favorites), &runner);
    dispatch(&mut state, Msg::Started, &runner);

    // Background tick to throttle rendering and UI updates.
    {
        let tick_tx = msg_tx.clone();
        thread::spawn(move || {
            while tick_tx.send(Msg::Tick).is_ok() {
                thread::sleep(TICK_INTERVAL);
            }
        });
    }

    enable_raw_mode().context("enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("create terminal")?;

    deck_info!("newsdeck started");
    let result = event_loop(&mut terminal, &mut state, &runner, &msg_rx);

    disable_raw_mode().context("disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen).context("leave alternate screen")?;
    terminal.show_cursor().context("show cursor")?;

    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    state: &mut AppState,
    runner: &EffectRunner,
    msg_rx: &mpsc::Receiver<Msg>,
) -> anyhow::Result<()> {
    let mut mode = InputMode::default();
    let mut view = state.view();
    state.consume_dirty();
    terminal.draw(|frame| render::render(frame, &view, mode))?;

    loop {
        let mut redraw = false;

        // Drain queued messages: engine completions and render ticks.
        while let Ok(msg) = msg_rx.try_recv() {
            dispatch(state, msg, runner);
        }

        if event::poll(POLL_TIMEOUT).context("poll terminal events")? {
            match event::read().context("read terminal event")? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    match handle_key(mode, key, &view.search) {
                        Some(InputAction::Quit) => return Ok(()),
                        Some(InputAction::EnterSearch) => {
                            mode = InputMode::Search;
                            redraw = true;
                        }
                        Some(InputAction::LeaveSearch) => {
                            mode = InputMode::Browse;
                            redraw = true;
                        }
                        Some(InputAction::Dispatch(msg)) => dispatch(state, msg, runner),
                        None => {}
                    }
                }
                Event::Resize(_, _) => redraw = true,
                _ => {}
            }
        }

        if state.consume_dirty() || redraw {
            view = state.view();
            terminal.draw(|frame| render::render(frame, &view, mode))?;
        }
    }
}

fn dispatch(state: &mut AppState, msg: Msg, runner: &EffectRunner) {
    let current = std::mem::take(state);
    let (next, effects) = update(current, msg);
    *state = next;
    runner.run(effects);
}
