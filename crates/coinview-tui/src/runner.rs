//! Main TUI runner - entry point and event loop

use coinview_api::CoinProvider;
use coinview_app::Engine;
use coinview_core::prelude::*;

use super::{event, render, terminal};

/// Run the TUI until the user quits or a signal arrives
pub async fn run<P>(mut engine: Engine<P>) -> Result<()>
where
    P: CoinProvider + Clone + Sync + 'static,
{
    // Install panic hook for terminal restoration
    terminal::install_panic_hook();

    let mut term = ratatui::init();

    engine.start();
    let result = run_loop(&mut term, &mut engine);

    engine.shutdown();

    // Restore terminal
    ratatui::restore();

    result
}

/// Main event loop
fn run_loop<P>(terminal: &mut ratatui::DefaultTerminal, engine: &mut Engine<P>) -> Result<()>
where
    P: CoinProvider + Clone + Sync + 'static,
{
    while !engine.should_quit() {
        // Fetch results and signals
        engine.drain_pending_messages();

        terminal.draw(|frame| render::view(frame, &mut engine.state))?;

        // Handle terminal events
        if let Some(message) = event::poll()? {
            engine.process_message(message);
        }
    }
    Ok(())
}
