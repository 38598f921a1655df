use kursdash::app::{AppConfig, AppState, Page};
use kursdash::cli::{self, Cli};
use kursdash::course;
use kursdash::events::{AppEvent, EventHandler, MouseCapture};
use kursdash::input;
use kursdash::listing::ListQuery;
use kursdash::notify;
use kursdash::sample;
use kursdash::tui;

use clap::Parser;
use color_eyre::eyre::{eyre, Result};
use crossterm::event::{DisableMouseCapture, MouseButton, MouseEventKind};
use crossterm::execute;
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen, SetTitle};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Rect;
use ratatui::Terminal;
use std::io;
use std::time::Duration;
use tokio::sync::mpsc::UnboundedSender;

fn setup_verbose_logging() -> Result<()> {
    let state_dir = dirs_next_or_fallback();
    std::fs::create_dir_all(&state_dir)
        .map_err(|e| eyre!("Failed to create log directory {state_dir:?}: {e}"))?;
    let log_path = state_dir.join("debug.log");
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .map_err(|e| eyre!("Failed to open log file {log_path:?}: {e}"))?;
    tracing_subscriber::fmt()
        .with_writer(file)
        .with_ansi(false)
        .init();
    tracing::info!("kursdash v{} starting with verbose logging", cli::VERSION);
    Ok(())
}

fn dirs_next_or_fallback() -> std::path::PathBuf {
    if let Some(state) = std::env::var_os("XDG_STATE_HOME") {
        std::path::PathBuf::from(state).join("kursdash")
    } else if let Some(home) = std::env::var_os("HOME") {
        std::path::PathBuf::from(home)
            .join(".local")
            .join("state")
            .join("kursdash")
    } else {
        std::path::PathBuf::from("/tmp/kursdash")
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Cli::parse();

    if args.verbose {
        setup_verbose_logging()?;
    }

    // Load data before touching the terminal so errors print normally
    let courses = match &args.courses {
        Some(path) => course::load_courses(path)?,
        None => sample::courses(),
    };
    let query = ListQuery {
        search: args.search.clone().unwrap_or_default(),
        status: args.status,
        ..ListQuery::default()
    };

    let mut state = AppState::new(
        AppConfig {
            version_string: format!("kursdash v{}", cli::VERSION),
            desktop_notify: !args.no_notify,
        },
        courses,
        sample::notices(),
        sample::recommendations(),
        query,
    );

    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        if let Err(e) = terminal::disable_raw_mode() {
            eprintln!("Failed to disable raw mode during panic: {e}");
        }
        if let Err(e) = execute!(
            io::stdout(),
            DisableMouseCapture,
            LeaveAlternateScreen,
            SetTitle("")
        ) {
            eprintln!("Failed to leave alternate screen during panic: {e}");
        }
        original_hook(panic_info);
    }));

    terminal::enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, SetTitle("Kursverwaltung"))?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let events = EventHandler::new(Duration::from_millis(100));
    let result = run_app(&mut terminal, &mut state, events).await;

    // Restore terminal
    terminal::disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, SetTitle(""))?;
    terminal.show_cursor()?;

    result
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    state: &mut AppState,
    mut events: EventHandler,
) -> Result<()> {
    let tx = events.sender();
    let mut mouse: Option<MouseCapture> = None;

    let result: Result<()> = loop {
        sync_mouse_capture(&mut mouse, state.page);

        if let Err(e) = terminal.draw(|f| tui::render::render(f, state)) {
            break Err(e.into());
        }

        state.prune_toasts();
        state.prune_error();

        let Some(event) = events.next().await else {
            break Ok(());
        };
        match event {
            AppEvent::Key(key) => {
                let action = input::map_key(key, &state.input_context());
                state.apply(action);
            }
            AppEvent::Mouse(ev) => {
                if ev.kind == MouseEventKind::Down(MouseButton::Left) {
                    match terminal.size() {
                        Ok(size) => {
                            let area = Rect::new(0, 0, size.width, size.height);
                            let target = tui::layout::hit_test(area, state, ev.column, ev.row);
                            tracing::debug!(?target, "click at {},{}", ev.column, ev.row);
                            state.click(target);
                        }
                        Err(e) => tracing::warn!("terminal size query failed: {e}"),
                    }
                }
            }
            AppEvent::Resize | AppEvent::Tick => {}
            AppEvent::Error(e) => state.set_error(e),
        }

        flush_desktop_notifications(state, &tx);

        if state.should_quit {
            break Ok(());
        }
    };

    if let Some(capture) = mouse.take() {
        capture.release();
    }
    events.stop();
    result
}

/// Mouse capture follows the course table: on while it is shown, off elsewhere.
fn sync_mouse_capture(mouse: &mut Option<MouseCapture>, page: Page) {
    let wanted = page == Page::Courses;
    if wanted && mouse.is_none() {
        match MouseCapture::acquire() {
            Ok(capture) => *mouse = Some(capture),
            Err(e) => tracing::warn!("mouse capture unavailable: {e}"),
        }
    } else if !wanted {
        if let Some(capture) = mouse.take() {
            capture.release();
        }
    }
}

fn flush_desktop_notifications(state: &mut AppState, tx: &UnboundedSender<AppEvent>) {
    for message in state.desktop_outbox.drain(..) {
        let tx2 = tx.clone();
        tokio::task::spawn_blocking(move || {
            let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
                notify::send_desktop(&message)
            }));
            match result {
                Ok(Some(err)) => {
                    if tx2.send(AppEvent::Error(err)).is_err() {
                        tracing::warn!("notify: channel closed");
                    }
                }
                Err(panic_payload) => {
                    let msg = panic_payload.downcast::<String>().map_or_else(
                        |p| {
                            p.downcast::<&str>()
                                .map_or_else(|_| "unknown panic".to_string(), |s| s.to_string())
                        },
                        |s| *s,
                    );
                    tracing::error!("notify panicked: {msg}");
                    if tx2
                        .send(AppEvent::Error(format!("Notification crashed: {msg}")))
                        .is_err()
                    {
                        tracing::warn!("notify: channel closed");
                    }
                }
                Ok(None) => {}
            }
        });
    }
}
