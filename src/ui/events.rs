use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::{Duration, Instant};

use crossterm::event::{Event, KeyEvent};

use crate::ui::fetcher::FetchOutcome;

pub enum AppEvent {
    Key(KeyEvent),
    Tick,
    Resize(u16, u16),
    /// A fetch command resolved on the worker thread.
    Fetch(FetchOutcome),
}

/// Fans terminal input, ticks, and fetch outcomes into one channel.
pub struct EventHandler {
    rx: Receiver<AppEvent>,
    tx: Sender<AppEvent>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::channel();
        let event_tx = tx.clone();

        thread::spawn(move || {
            let mut last_tick = Instant::now();
            loop {
                let timeout = tick_rate
                    .saturating_sub(last_tick.elapsed())
                    .min(Duration::from_millis(50));

                match crossterm::event::poll(timeout) {
                    Ok(true) => {
                        let event = match crossterm::event::read() {
                            Ok(event) => event,
                            Err(err) => {
                                tracing::error!("terminal event read failed: {}", err);
                                break;
                            }
                        };
                        let send_result = match event {
                            Event::Key(key) => event_tx.send(AppEvent::Key(key)),
                            Event::Resize(cols, rows) => {
                                event_tx.send(AppEvent::Resize(cols, rows))
                            }
                            _ => Ok(()),
                        };
                        if send_result.is_err() {
                            break;
                        }
                    }
                    Ok(false) => {}
                    Err(err) => {
                        tracing::error!("terminal event poll failed: {}", err);
                        break;
                    }
                }

                if last_tick.elapsed() >= tick_rate {
                    if event_tx.send(AppEvent::Tick).is_err() {
                        break;
                    }
                    last_tick = Instant::now();
                }
            }
        });

        Self { rx, tx }
    }

    pub fn next(&self, timeout: Duration) -> Result<AppEvent, mpsc::RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }

    /// Sender for other producers (the fetch worker).
    pub fn sender(&self) -> Sender<AppEvent> {
        self.tx.clone()
    }
}
