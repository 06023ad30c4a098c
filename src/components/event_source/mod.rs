mod actor;
pub mod client;
mod handle;
pub mod models;

pub use client::{normalize_payload, EventFetcher, SheetClient};
pub use handle::EventSourceHandle;
pub use models::RawEvent;
