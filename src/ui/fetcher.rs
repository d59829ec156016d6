//! Background fetch worker.
//!
//! The UI loop is synchronous; network calls run on a dedicated thread
//! driving a current-thread tokio runtime. Each command becomes one
//! spawned task, so overlapping requests interleave cooperatively on a
//! single thread and the UI never blocks on the network. Requests are
//! never cancelled: a superseded request still resolves, and its
//! outcome is dropped by sequence tag on the receiving side.

use std::sync::mpsc::Sender;
use std::thread;

use crate::catalog::{CatalogClient, CatalogError, MovieDetail, MovieSummary};
use crate::ui::events::AppEvent;

const COMMAND_CHANNEL_SIZE: usize = 32;

/// A request for the fetch worker, tagged with the sequence number the
/// app allocated for it.
#[derive(Debug, Clone)]
pub enum FetchCommand {
    Popular { seq: u64 },
    Search { seq: u64, query: String },
    Detail { seq: u64, movie_id: u64 },
}

/// Resolution of a [`FetchCommand`], echoing its tag.
#[derive(Debug)]
pub enum FetchOutcome {
    Popular {
        seq: u64,
        result: Result<Vec<MovieSummary>, CatalogError>,
    },
    Search {
        seq: u64,
        result: Result<Vec<MovieSummary>, CatalogError>,
    },
    Detail {
        seq: u64,
        movie_id: u64,
        result: Result<MovieDetail, CatalogError>,
    },
}

/// Handle for submitting fetch commands to the worker.
#[derive(Debug, Clone)]
pub struct FetchHandle {
    tx: tokio::sync::mpsc::Sender<FetchCommand>,
}

impl FetchHandle {
    pub fn new(tx: tokio::sync::mpsc::Sender<FetchCommand>) -> Self {
        Self { tx }
    }

    /// Submit a command without blocking. Returns false if the worker
    /// is gone or its queue is full.
    pub fn send(&self, command: FetchCommand) -> bool {
        match self.tx.try_send(command) {
            Ok(()) => true,
            Err(err) => {
                tracing::warn!("fetch command dropped: {}", err);
                false
            }
        }
    }
}

/// Spawn the fetch worker. Outcomes are posted to `events` as
/// [`AppEvent::Fetch`].
pub fn spawn(client: CatalogClient, events: Sender<AppEvent>) -> FetchHandle {
    let (tx, mut rx) = tokio::sync::mpsc::channel::<FetchCommand>(COMMAND_CHANNEL_SIZE);

    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                tracing::error!("failed to build fetch runtime: {}", err);
                return;
            }
        };

        runtime.block_on(async move {
            while let Some(command) = rx.recv().await {
                let client = client.clone();
                let events = events.clone();
                tokio::spawn(async move {
                    let outcome = execute(&client, command).await;
                    // The receiver disappears on shutdown; nothing to do.
                    let _ = events.send(AppEvent::Fetch(outcome));
                });
            }
        });
    });

    FetchHandle::new(tx)
}

async fn execute(client: &CatalogClient, command: FetchCommand) -> FetchOutcome {
    match command {
        FetchCommand::Popular { seq } => FetchOutcome::Popular {
            seq,
            result: client.list_popular().await,
        },
        FetchCommand::Search { seq, query } => FetchOutcome::Search {
            seq,
            result: client.search(&query).await,
        },
        FetchCommand::Detail { seq, movie_id } => FetchOutcome::Detail {
            seq,
            movie_id,
            result: client.movie_detail(movie_id).await,
        },
    }
}
