pub mod app;
pub mod event;
pub mod theme;
pub mod ui;

pub use app::App;
pub use theme::ThemeColors;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use event::{Event, EventHandler};

use crate::export::{CertificateExporter, ExportOutcome};

/// What a key press asks the event loop to do beyond mutating the app.
#[derive(Debug, PartialEq)]
enum Action {
    None,
    Export,
}

pub async fn run_tui(mut app: App, exporter: CertificateExporter) -> anyhow::Result<()> {
    // Buffer log output while the TUI owns the terminal
    crate::stderr_buffer::activate();

    // Init terminal (sets up panic hooks automatically)
    let mut terminal = ratatui::init();
    let mut events = EventHandler::new(100);

    let mut pending_export: Option<tokio::task::JoinHandle<ExportOutcome>> = None;

    let result: anyhow::Result<()> = loop {
        if let Err(e) = terminal.draw(|frame| ui::draw(frame, &app)) {
            break Err(e.into());
        }

        match events.next().await {
            Event::Key(key) => {
                if handle_key_event(&mut app, key) == Action::Export && pending_export.is_none() {
                    if let Some(request) = app.begin_export() {
                        let exporter = exporter.clone();
                        pending_export = Some(tokio::spawn(async move {
                            exporter
                                .export(
                                    &request.subjects,
                                    &request.result,
                                    request.locale,
                                    &request.student_name,
                                )
                                .await
                        }));
                    }
                }
            }
            Event::Tick => {
                app.update_flash();
                app.advance_spinner();
            }
        }

        // Check if the background export has completed
        if pending_export.as_ref().is_some_and(|h| h.is_finished()) {
            if let Some(handle) = pending_export.take() {
                match handle.await {
                    Ok(outcome) => app.finish_export(&outcome),
                    Err(e) => {
                        log::error!("Export task panicked: {}", e);
                        app.fail_export();
                    }
                }
            }
        }

        if app.should_quit {
            break Ok(());
        }
    };

    // Let a running export land on disk before leaving
    if let Some(handle) = pending_export.take() {
        let _ = handle.await;
    }

    ratatui::restore();

    // Flush buffered log lines now that the terminal is restored
    for msg in crate::stderr_buffer::drain() {
        eprintln!("{}", msg);
    }

    result
}

fn handle_key_event(app: &mut App, key: KeyEvent) -> Action {
    if app.input_mode == app::InputMode::Help {
        // Any key exits help
        app.dismiss_help();
        return Action::None;
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Esc => app.should_quit = true,
        KeyCode::Char('c') if ctrl => app.should_quit = true,
        KeyCode::Char('r') if ctrl => app.reset(),
        KeyCode::Char('l') if ctrl => app.toggle_locale(),
        KeyCode::Char('e') if ctrl => return Action::Export,
        KeyCode::F(1) => app.show_help(),

        KeyCode::Tab | KeyCode::Down => app.next_field(),
        KeyCode::BackTab | KeyCode::Up => app.previous_field(),

        KeyCode::Enter => app.calculate(),
        KeyCode::Backspace => app.backspace(),
        KeyCode::Char(c) if !ctrl => app.input_char(c),

        _ => {}
    }
    Action::None
}
