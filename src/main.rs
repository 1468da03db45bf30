use std::io;
use std::time::Duration;

use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use zcalc::app::{CalculatorApp, EventResult};
use zcalc::core::event::InputEvent;
use zcalc::kernel::Effect;
use zcalc::tui::osc52;
use zcalc::tui::terminal_guard::TerminalGuard;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

fn main() -> io::Result<()> {
    let _logging = zcalc::logging::init();

    let guard = TerminalGuard::new()?;
    #[cfg(unix)]
    let signal_rx = zcalc::tui::terminal_guard::watch_termination_signals(guard.restorer())?;

    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    let mut app = CalculatorApp::new();
    let mut needs_redraw = true;
    let mut exit_code = 0;

    loop {
        #[cfg(unix)]
        if let Ok(signal) = signal_rx.try_recv() {
            exit_code = signal.exit_code();
            break;
        }

        if needs_redraw {
            terminal.draw(|frame| app.render(frame))?;
            needs_redraw = false;
        }

        if !crossterm::event::poll(POLL_INTERVAL)? {
            continue;
        }
        let event = InputEvent::from(crossterm::event::read()?);

        match app.handle_input(&event) {
            EventResult::Quit => break,
            EventResult::Consumed => needs_redraw = true,
            EventResult::Ignored => {}
        }

        for effect in app.take_effects() {
            match effect {
                Effect::SetClipboardText(text) => {
                    if let Err(err) = osc52::copy_to_clipboard(&text) {
                        tracing::warn!(%err, "clipboard copy failed");
                    }
                }
            }
        }
    }

    drop(terminal);
    guard.restorer().restore()?;
    if exit_code != 0 {
        std::process::exit(exit_code);
    }
    Ok(())
}
