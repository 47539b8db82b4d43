//! Runtime: per-instance request state and the reply pipeline.
//!
//! `AiService` owns its cache and rate limiter; two services never share
//! state.

pub mod cache;
pub mod rate_limit;
pub mod service;

pub use cache::ResponseCache;
pub use rate_limit::{RateLimiter, DEFAULT_IDENTITY};
pub use service::{AiService, Reply, ReplySource};
