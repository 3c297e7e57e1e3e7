//! Network service around the simplification core.
//!
//! The service speaks newline-delimited JSON over TCP: the adapter
//! translates wire requests into engine invocations, the host owns the
//! listener and the sequential request loop.

mod adapter;
mod host;
pub mod logging;
mod wire;

pub use adapter::{Service, MAX_COORDINATE, PLUGIN_NAME, SLOT_VERSION};
pub use host::Host;
pub use wire::{BroadcastRequest, Request, Response, SimplifyRequest};
