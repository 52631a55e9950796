//! Submitter engine: persistence, outbound transport and the controller that executes effects.
mod clock;
mod controller;
mod persist;
mod storage;
mod store;
mod transport;
mod types;

pub use clock::{Clock, SubmissionIds, SystemClock};
pub use controller::SubmissionController;
pub use persist::PersistError;
pub use storage::{FileStorage, KeyValueStorage, MemoryStorage, StorageError};
pub use store::{StatusStore, STATUS_STORAGE_KEY};
pub use transport::{ReqwestTransport, Transport, TransportSettings, DEFAULT_ENDPOINT};
pub use types::{FailureKind, SendError, SendReceipt};
