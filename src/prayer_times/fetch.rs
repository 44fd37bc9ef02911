use log::debug;
use std::sync::Arc;
use std::sync::mpsc::Sender;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

use crate::prayer_times::api::{DayTimings, FetchError, TimingsSource};
use crate::prayer_times::session::{FetchTicket, FetchToken};

#[derive(Debug)]
pub struct FetchReport {
    pub token: FetchToken,
    pub outcome: Result<DayTimings, FetchError>,
}

/// Runs fetches as tokio tasks and reports back over the UI's event channel.
/// At most one task is in flight: starting another aborts the previous one.
pub struct Fetcher<T> {
    runtime: Handle,
    source: Arc<dyn TimingsSource>,
    tx: Sender<T>,
    in_flight: Option<JoinHandle<()>>,
}

impl<T> Fetcher<T>
where
    T: From<FetchReport> + Send + 'static,
{
    pub fn new(runtime: Handle, source: Arc<dyn TimingsSource>, tx: Sender<T>) -> Self {
        Self {
            runtime,
            source,
            tx,
            in_flight: None,
        }
    }

    pub fn start(&mut self, ticket: FetchTicket) {
        self.cancel();

        let source = Arc::clone(&self.source);
        let tx = self.tx.clone();
        self.in_flight = Some(self.runtime.spawn(async move {
            let outcome = source.timings(&ticket.request).await;
            // A closed channel means the UI is gone.
            let _ = tx.send(T::from(FetchReport {
                token: ticket.token,
                outcome,
            }));
        }));
    }

    pub fn cancel(&mut self) {
        if let Some(handle) = self.in_flight.take() {
            if !handle.is_finished() {
                debug!("Aborting in-flight fetch");
            }
            handle.abort();
        }
    }
}

impl<T> Drop for Fetcher<T> {
    fn drop(&mut self) {
        if let Some(handle) = self.in_flight.take() {
            handle.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::COUNTRIES;
    use crate::prayer_times::api::TimingsRequest;
    use crate::prayer_times::session::LocationSession;
    use async_trait::async_trait;
    use chrono::NaiveDate;
    use std::sync::mpsc::{self, RecvTimeoutError};
    use std::time::Duration;
    use tokio::sync::Notify;

    /// Answers immediately, except for the city "Slow" which waits forever.
    struct ScriptedSource {
        never: Notify,
    }

    #[async_trait]
    impl TimingsSource for ScriptedSource {
        async fn timings(&self, request: &TimingsRequest) -> Result<DayTimings, FetchError> {
            if request.city == "Slow" {
                self.never.notified().await;
            }
            Ok(DayTimings {
                fajr: format!("04:40 ({})", request.city),
                ..DayTimings::default()
            })
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn reports_result_with_its_token() {
        let (tx, rx) = mpsc::channel::<FetchReport>();
        let source = Arc::new(ScriptedSource { never: Notify::new() });
        let mut fetcher = Fetcher::new(Handle::current(), source, tx);
        let mut session = LocationSession::new(COUNTRIES, "PS", "Gaza", 2);

        let ticket = session.begin_fetch(today());
        let token = ticket.token;
        fetcher.start(ticket);

        let report =
            tokio::task::block_in_place(|| rx.recv_timeout(Duration::from_secs(5))).unwrap();
        assert_eq!(report.token, token);
        assert_eq!(report.outcome.unwrap().fajr, "04:40 (Gaza)");
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn starting_again_aborts_previous_fetch() {
        let (tx, rx) = mpsc::channel::<FetchReport>();
        let source = Arc::new(ScriptedSource { never: Notify::new() });
        let mut fetcher = Fetcher::new(Handle::current(), source, tx);
        let mut session = LocationSession::new(COUNTRIES, "PS", "Slow", 2);

        let slow = session.begin_fetch(today());
        fetcher.start(slow);
        session.select_city("Gaza");
        let fast = session.begin_fetch(today());
        let fast_token = fast.token;
        fetcher.start(fast);

        let first =
            tokio::task::block_in_place(|| rx.recv_timeout(Duration::from_secs(5))).unwrap();
        assert_eq!(first.token, fast_token);

        let second = tokio::task::block_in_place(|| rx.recv_timeout(Duration::from_millis(200)));
        assert_eq!(second.unwrap_err(), RecvTimeoutError::Timeout);
    }
}
