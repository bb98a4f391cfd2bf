use super::DbConnection;
use crate::errors::StorageError;
use diesel::SqliteConnection;
use diet_consultant_core::errors::{DatabaseError, Error, Result};
use log::debug;
use std::any::Any;
use tokio::sync::{mpsc, oneshot};

// A write job runs against the actor's connection and returns a core Result.
type Job<T> = Box<dyn FnOnce(&mut SqliteConnection) -> Result<T> + Send + 'static>;

type ErasedJob = Job<Box<dyn Any + Send + 'static>>;
type ErasedReply = oneshot::Sender<Result<Box<dyn Any + Send + 'static>>>;

/// Handle for sending jobs to the writer actor.
///
/// Cloning the handle is cheap; all clones feed the same actor, so writes are
/// applied one at a time in submission order.
#[derive(Clone)]
pub struct WriteHandle {
    tx: mpsc::Sender<(ErasedJob, ErasedReply)>,
}

impl WriteHandle {
    /// Executes a database job on the writer actor's dedicated connection,
    /// inside an immediate transaction.
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
            .map_err(|_| internal("Writer actor stopped"))?;

        let boxed = ret_rx
            .await
            .map_err(|_| internal("Writer actor dropped the reply"))??;
        boxed
            .downcast::<T>()
            .map(|value| *value)
            .map_err(|_| internal("Unexpected writer actor result type"))
    }
}

fn internal(message: &str) -> Error {
    Error::Database(DatabaseError::Internal(message.to_string()))
}

/// Spawns a background Tokio task that owns `conn` and applies write jobs
/// serially.
///
/// Must be called from within a Tokio runtime.
pub fn spawn_writer(mut conn: DbConnection) -> WriteHandle {
    let (tx, mut rx) = mpsc::channel::<(ErasedJob, ErasedReply)>(1024);

    tokio::spawn(async move {
        while let Some((job, reply_tx)) = rx.recv().await {
            let result: Result<Box<dyn Any + Send + 'static>> = conn
                .immediate_transaction::<_, StorageError, _>(|c| job(c).map_err(StorageError::from))
                .map_err(Error::from);

            // The requester may have gone away; the write is already committed.
            let _ = reply_tx.send(result);
        }
        debug!("Writer actor stopped, all handles dropped");
    });

    WriteHandle { tx }
}
