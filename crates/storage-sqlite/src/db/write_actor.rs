use diesel::SqliteConnection;
use std::any::Any;
use std::sync::Arc;
use tokio::sync::{mpsc, oneshot};
use twstock_core::errors::Result;

use super::DbPool;
use crate::errors::StorageError;

// A job takes the writer's dedicated connection and returns a core Result.
type Job<T> = Box<dyn FnOnce(&mut SqliteConnection) -> Result<T> + Send + 'static>;

/// Handle for sending jobs to the writer actor.
///
/// SQLite allows a single writer at a time; funneling every mutation
/// through one actor-owned connection serializes them without holding the
/// pool's connections hostage.
#[derive(Clone)]
pub struct WriteHandle {
    // Each job is a boxed closure plus a oneshot sender for the reply; the
    // Box<dyn Any + Send> erases the job's return type.
    #[allow(clippy::type_complexity)]
    tx: mpsc::Sender<(
        Job<Box<dyn Any + Send + 'static>>,
        oneshot::Sender<Result<Box<dyn Any + Send + 'static>>>,
    )>,
}

impl WriteHandle {
    /// Executes a database job on the writer actor's dedicated connection,
    /// wrapped in an immediate transaction.
    pub async fn exec<F, T>(&self, job: F) -> Result<T>
    where
        F: FnOnce(&mut SqliteConnection) -> Result<T> + Send + 'static,
        T: Send + 'static + Any,
    {
        let (ret_tx, ret_rx) = oneshot::channel();

        self.tx
            .send((
                Box::new(move |c| job(c).map(|v| Box::new(v) as Box<dyn Any + Send>)),
                ret_tx,
            ))
            .await
            .expect("writer actor's receiving channel was closed");

        ret_rx
            .await
            .expect("writer actor dropped the reply sender without responding")
            .map(|boxed: Box<dyn Any + Send + 'static>| {
                *boxed
                    .downcast::<T>()
                    .unwrap_or_else(|_| panic!("failed to downcast writer actor result"))
            })
    }
}

/// Spawns a background task that acts as the single writer to the database.
///
/// The actor holds one connection from the pool for its lifetime and
/// processes write jobs serially, each inside an immediate transaction.
pub fn spawn_writer(pool: Arc<DbPool>) -> WriteHandle {
    let (tx, mut rx) = mpsc::channel::<(
        Job<Box<dyn Any + Send + 'static>>,
        oneshot::Sender<Result<Box<dyn Any + Send + 'static>>>,
    )>(1024);

    tokio::spawn(async move {
        let mut conn = pool
            .get()
            .expect("failed to get a connection from the pool for the writer actor");

        while let Some((job, reply_tx)) = rx.recv().await {
            // Jobs run inside an immediate transaction; errors cross the
            // boundary as StorageError and come back out as core errors.
            let result: Result<Box<dyn Any + Send + 'static>> = conn
                .immediate_transaction::<_, StorageError, _>(|c| {
                    job(c).map_err(StorageError::from)
                })
                .map_err(|e: StorageError| e.into());

            // Receiver may have been dropped (caller cancelled); that's fine.
            let _ = reply_tx.send(result);
        }
        // rx.recv() returned None: every WriteHandle is gone, actor exits.
    });

    WriteHandle { tx }
}
