use anyhow::{bail, Result};
use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use crossterm::event::{self, Event as CEvent, KeyEvent};

use crate::prayer_times::FetchReport;

#[derive(Debug)]
pub enum Event {
    Key(KeyEvent),
    Tick,
    Fetched(FetchReport),
}

impl From<FetchReport> for Event {
    fn from(report: FetchReport) -> Self {
        Event::Fetched(report)
    }
}

pub struct EventHandler {
    tx: mpsc::Sender<Event>,
    rx: mpsc::Receiver<Event>,
    input: JoinHandle<()>,
    tick_rate: Duration,
}

impl EventHandler {
    pub fn new(tick_rate_ms: u64) -> Self {
        let tick_rate = Duration::from_millis(tick_rate_ms.max(1));
        Self::with_input(tick_rate, move |tx| poll_terminal(tx, tick_rate))
    }

    fn with_input<F>(tick_rate: Duration, input: F) -> Self
    where
        F: FnOnce(mpsc::Sender<Event>) + Send + 'static,
    {
        let (tx, rx) = mpsc::channel();
        let input_tx = tx.clone();
        let input = thread::spawn(move || input(input_tx));
        Self {
            tx,
            rx,
            input,
            tick_rate,
        }
    }

    /// For producers other than the terminal, such as fetch tasks.
    pub fn sender(&self) -> mpsc::Sender<Event> {
        self.tx.clone()
    }

    /// Next event. Fails once the terminal input thread has stopped and its
    /// queued events are drained, since fetch senders keep the channel open.
    pub fn next(&self) -> Result<Event> {
        loop {
            match self.rx.recv_timeout(self.tick_rate) {
                Ok(event) => return Ok(event),
                Err(RecvTimeoutError::Timeout) if self.input.is_finished() => {
                    bail!("Terminal input stopped")
                }
                Err(RecvTimeoutError::Timeout) => {}
                Err(RecvTimeoutError::Disconnected) => bail!("Event channel closed"),
            }
        }
    }
}

fn poll_terminal(tx: mpsc::Sender<Event>, tick_rate: Duration) {
    let mut last_tick = Instant::now();
    loop {
        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout).unwrap_or(false) {
            match event::read() {
                Ok(CEvent::Key(key)) => {
                    if tx.send(Event::Key(key)).is_err() {
                        break;
                    }
                }
                Ok(_) => {}
                Err(e) => {
                    log::error!("Reading terminal input failed: {}", e);
                    break;
                }
            }
        }

        if last_tick.elapsed() >= tick_rate {
            if tx.send(Event::Tick).is_err() {
                break;
            }
            last_tick = Instant::now();
        }
    }
}
