//! faqbot-server — request handler for the FAQ assistant.
//!
//! ```text
//! body ──► request (ChatRequest) ──► assistant (Reply) ──► server (HTTP status + JSON)
//! ```

pub mod assistant;
pub mod request;
pub mod server;

pub use assistant::{Assistant, ChatResponse, Outcome, Reply, FALLBACK_RESPONSE, NOT_FOUND_RESPONSE};
pub use request::{ChatRequest, RequestError};
pub use server::{router, serve};
