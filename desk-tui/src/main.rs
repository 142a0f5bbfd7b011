//! desk-tui - Interactive terminal calculator
//!
//! A keypad calculator in the terminal: type an expression, see it build
//! up on the display, evaluate with Enter. The event loop is synchronous;
//! the periodic tick drives the error auto-clear deadline.

use std::time::Instant;

use desk_tui::{
    app::{event::EventHandler, reduce, AppState},
    error::Result,
    terminal::{install_panic_hook, restore_terminal, setup_terminal},
    ui,
};
use libdeskcalc::Config;

fn main() -> Result<()> {
    // Logging goes to stderr; visible when redirected, harmless otherwise
    libdeskcalc::logging::init_default();

    // Install panic hook to restore terminal on panic
    install_panic_hook();

    let config = Config::load()?;
    tracing::debug!(
        tick_rate_ms = config.ui.tick_rate_ms,
        error_clear_ms = config.ui.error_clear_ms,
        "starting desk-tui"
    );

    let mut terminal = setup_terminal()?;

    let result = run_app(&mut terminal, &config);

    restore_terminal(terminal)?;

    result
}

fn run_app(terminal: &mut desk_tui::terminal::Tui, config: &Config) -> Result<()> {
    let mut state = AppState::from_config(config);

    let event_handler = EventHandler::new(state.config.tick_rate_ms);

    loop {
        terminal.draw(|frame| {
            ui::render(frame, &state);
        })?;

        let tui_event = event_handler.next()?;
        state = reduce(state, tui_event.into(), Instant::now());

        if state.should_quit {
            break;
        }
    }

    Ok(())
}
