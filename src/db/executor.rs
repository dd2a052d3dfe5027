//! Non-blocking access to the SQLite connection
//!
//! rusqlite connections are not `Sync`, and axum handlers must not block
//! the runtime on SQLite I/O. The executor owns the connection on a
//! dedicated thread and hands closures to it over a channel.
//!
//! # Usage
//!
//! ```ignore
//! let executor = DbExecutor::new(db);
//!
//! let count: i64 = executor
//!     .run(|conn| conn.query_row("SELECT COUNT(*) FROM articles", [], |r| r.get(0)))
//!     .await?;
//! ```

use crate::db::Database;
use std::sync::mpsc;
use std::thread;
use tokio::sync::oneshot;

type DbResult<T> = Result<T, rusqlite::Error>;
type BoxedDbOp = Box<dyn FnOnce(&rusqlite::Connection) -> BoxedResult + Send + 'static>;
type BoxedResult = Box<dyn std::any::Any + Send + 'static>;

struct DbOperation {
    op: BoxedDbOp,
    response: oneshot::Sender<BoxedResult>,
}

/// Runs database operations on a dedicated thread.
pub struct DbExecutor {
    sender: mpsc::Sender<DbOperation>,
    _handle: thread::JoinHandle<()>,
}

impl DbExecutor {
    /// Take ownership of the database and start the executor thread.
    ///
    /// The thread exits when the last `DbExecutor` clone of the sender is
    /// dropped.
    pub fn new(db: Database) -> Self {
        let (sender, receiver) = mpsc::channel::<DbOperation>();

        let handle = thread::spawn(move || {
            let conn = db.conn();

            while let Ok(operation) = receiver.recv() {
                let result = (operation.op)(conn);
                let _ = operation.response.send(result);
            }
        });

        Self {
            sender,
            _handle: handle,
        }
    }

    /// Run a database operation asynchronously.
    ///
    /// The closure executes on the executor thread; its result comes back
    /// through a oneshot channel.
    pub async fn run<F, T>(&self, op: F) -> Result<T, DbExecutorError>
    where
        F: FnOnce(&rusqlite::Connection) -> DbResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let (response_tx, response_rx) = oneshot::channel();

        let boxed_op: BoxedDbOp = Box::new(move |conn| {
            let result = op(conn);
            Box::new(result) as BoxedResult
        });

        let operation = DbOperation {
            op: boxed_op,
            response: response_tx,
        };

        self.sender
            .send(operation)
            .map_err(|_| DbExecutorError::ChannelClosed)?;

        let boxed_result = response_rx
            .await
            .map_err(|_| DbExecutorError::ChannelClosed)?;

        let result = boxed_result
            .downcast::<DbResult<T>>()
            .map_err(|_| DbExecutorError::TypeMismatch)?;

        result.map_err(DbExecutorError::Database)
    }
}

/// Errors that can occur when using the database executor
#[derive(Debug, thiserror::Error)]
pub enum DbExecutorError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Channel closed - executor may have shut down")]
    ChannelClosed,

    #[error("Type mismatch in result - internal error")]
    TypeMismatch,
}
