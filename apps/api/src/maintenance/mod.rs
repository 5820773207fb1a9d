// Scheduled maintenance: daily retention sweep of generated PDFs in blob storage.
// Runs in-process; no route triggers it.

pub mod cleanup;
pub mod scheduler;
pub mod storage;
