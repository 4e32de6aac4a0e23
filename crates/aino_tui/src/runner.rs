//! TUI runner - main loop and backend integration.
//!
//! The event loop is synchronous; the health probe and the generation
//! call run as tasks and report back over a channel that is drained on
//! every iteration. At most one generation is in flight because
//! [`App::submit`] refuses while the status is processing.

use crate::{ui, App, Event, EventHandler, Language};
use aino_client::GenerationBackend;
use aino_core::GenerationOutput;
use aino_error::{AinoError, AinoResult, TuiError, TuiErrorKind};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::debug;

/// Completion messages from the background backend tasks.
#[derive(Debug)]
pub enum BackendEvent {
    /// The startup health probe finished
    Health(Result<(), AinoError>),
    /// A generation call finished
    Generation(Result<GenerationOutput, AinoError>),
}

/// Run the TUI against the provided backend.
pub async fn run_tui(backend: Arc<dyn GenerationBackend>, language: Language) -> AinoResult<()> {
    // Setup terminal
    enable_raw_mode().map_err(|e| {
        TuiError::new(TuiErrorKind::TerminalSetup(format!(
            "Failed to enable raw mode: {}",
            e
        )))
    })?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture).map_err(|e| {
        TuiError::new(TuiErrorKind::TerminalSetup(format!(
            "Failed to setup terminal: {}",
            e
        )))
    })?;

    let backend_impl = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend_impl).map_err(|e| {
        TuiError::new(TuiErrorKind::TerminalSetup(format!(
            "Failed to create terminal: {}",
            e
        )))
    })?;

    // Create app state
    let mut app = App::new(language);
    let events = EventHandler::new(250);
    let (tx, mut rx) = mpsc::unbounded_channel::<BackendEvent>();

    // Probe connectivity once at startup; the UI shows "checking" until
    // the result lands.
    {
        let backend = backend.clone();
        let tx = tx.clone();
        tokio::spawn(async move {
            let result = backend.check_health().await;
            let _ = tx.send(BackendEvent::Health(result));
        });
    }

    // Main loop
    while !app.should_quit {
        while let Ok(event) = rx.try_recv() {
            match event {
                BackendEvent::Health(result) => app.apply_health_result(&result),
                BackendEvent::Generation(result) => {
                    app.apply_generation_result(result, backend.as_ref())
                }
            }
        }

        terminal
            .draw(|f| ui::draw(f, &app))
            .map_err(|e| TuiError::new(TuiErrorKind::Rendering(format!("Failed to draw: {}", e))))?;

        if let Ok(Some(event)) = events.next() {
            handle_event(&mut app, &backend, &tx, event);
        }
    }

    // Cleanup terminal
    disable_raw_mode().map_err(|e| {
        TuiError::new(TuiErrorKind::TerminalRestore(format!(
            "Failed to disable raw mode: {}",
            e
        )))
    })?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .map_err(|e| {
        TuiError::new(TuiErrorKind::TerminalRestore(format!(
            "Failed to cleanup terminal: {}",
            e
        )))
    })?;
    terminal.show_cursor().map_err(|e| {
        TuiError::new(TuiErrorKind::TerminalRestore(format!(
            "Failed to show cursor: {}",
            e
        )))
    })?;

    Ok(())
}

/// Handle a single event.
fn handle_event(
    app: &mut App,
    backend: &Arc<dyn GenerationBackend>,
    tx: &mpsc::UnboundedSender<BackendEvent>,
    event: Event,
) {
    use crossterm::event::{KeyCode, KeyModifiers};

    let Event::Key(key) = event else {
        return;
    };

    // An active input session captures every key.
    if app.input.is_some() {
        match key.code {
            KeyCode::Enter => app.commit_input(),
            KeyCode::Esc => app.cancel_input(),
            KeyCode::Backspace => {
                if let Some((_, buffer)) = &mut app.input {
                    buffer.pop();
                }
            }
            KeyCode::Char(c) => {
                if let Some((_, buffer)) = &mut app.input {
                    buffer.push(c);
                }
            }
            _ => {}
        }
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.quit(),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => app.quit(),
        KeyCode::Tab | KeyCode::Down | KeyCode::Char('j') => app.next_section(),
        KeyCode::BackTab | KeyCode::Up | KeyCode::Char('k') => app.previous_section(),
        KeyCode::Right => app.next_option(),
        KeyCode::Left => app.previous_option(),
        KeyCode::Enter | KeyCode::Char(' ') => app.activate(),
        KeyCode::Char('n') => app.edit_banner_name(),
        KeyCode::Char('d') => app.remove_selected_attachment(),
        KeyCode::Char('l') => app.toggle_language(),
        KeyCode::Char('g') => {
            if let Some(request) = app.submit() {
                debug!(platform = %request.platform(), "Dispatching generation request");
                let backend = backend.clone();
                let tx = tx.clone();
                tokio::spawn(async move {
                    let result = backend.generate(&request).await;
                    let _ = tx.send(BackendEvent::Generation(result));
                });
            }
        }
        _ => {}
    }
}
