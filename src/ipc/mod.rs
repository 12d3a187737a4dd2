//! # Line protocol / 行协议
//!
//! The UI process exchanges one JSON object per line with the engine:
//! `{"channel": "<name>", "payload": <value>}`. Requests arrive on stdin,
//! events leave on stdout.

mod event;
mod request;
mod serve;

pub use event::UiEvent;
pub use request::{
    dispatch, parse_request, DeleteItemPayload, Flow, RenameGroupPayload, UiRequest,
};
pub use serve::serve_requests;
