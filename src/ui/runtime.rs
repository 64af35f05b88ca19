use crate::config::Config;
use crate::menu::{spawn_load, MenuLoader};
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::sync::mpsc::RecvTimeoutError;
use std::time::Duration;
use tokio::runtime::Handle;

/// Runs the menu screen until the user quits.
///
/// The menu fetch is issued once, on `handle`, before the first frame. Its
/// result arrives through the same channel as terminal input.
pub fn run(config: &Config, handle: &Handle) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = Duration::from_millis(config.ui.tick_rate_ms);
    let mut app = App::new();
    let events = EventHandler::new(tick_rate);

    match MenuLoader::new(&config.menu) {
        Ok(loader) => {
            let tx = events.sender();
            spawn_load(handle, loader, move |menu| {
                // Receiver gone means the view was torn down; drop the result.
                let _ = tx.send(AppEvent::MenuLoaded(menu));
            });
        }
        Err(err) => {
            tracing::error!(error = %err, "Error fetching menu");
            app.on_menu_loaded(None);
        }
    }

    loop {
        terminal.draw(|frame| draw(frame, app.state()))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Tick) => {}
            Ok(AppEvent::MenuLoaded(menu)) => app.on_menu_loaded(menu),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    tracing::info!(cart_total = app.state().cart_total(), "Menu screen closed");
    Ok(())
}
