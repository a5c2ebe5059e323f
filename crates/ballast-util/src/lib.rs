//! Wrappers for composing asynchronous operations: retrying, time-bounding,
//! sequencing, detaching, and mutual exclusion. Everything here runs on top
//! of tokio's tasks, timers, and counting permits; nothing owns a thread
//! pool or keeps global state.

pub mod deadline;
pub mod detach;
pub mod ext;
pub mod log;
pub mod retry;
pub mod sequence;
pub mod sync;
