pub mod app;
pub mod browse;
pub mod detail;
pub mod events;
pub mod fetcher;
pub mod format;
pub mod input;
pub mod layout;
pub mod mvi;
pub mod render;
pub mod terminal_guard;
pub mod theme;

use std::time::Duration;

use crate::catalog::CatalogClient;
use crate::config::Config;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};

/// Run the UI until the user quits.
pub fn run(config: Config) -> anyhow::Result<()> {
    let client = CatalogClient::new(&config.catalog)?;
    let (mut terminal, guard) = terminal_guard::setup_terminal()?;
    let tick_rate = Duration::from_millis(250);
    let events = EventHandler::new(tick_rate);
    let fetch = fetcher::spawn(client, events.sender());
    let mut app = App::new(fetch, config.catalog.image_base_url.clone());

    loop {
        terminal.draw(|frame| render::draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => input::handle_key(&mut app, key),
            Ok(AppEvent::Fetch(outcome)) => app.on_fetch(outcome),
            // A tick or resize just forces the redraw at the loop head.
            Ok(AppEvent::Tick) | Ok(AppEvent::Resize(_, _)) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    Ok(())
}
