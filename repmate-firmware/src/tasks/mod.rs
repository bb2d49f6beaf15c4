//! Embassy async tasks
//!
//! Each task runs independently and communicates via channels/signals.

pub mod indicator;
pub mod sampler;

pub use indicator::indicator_task;
pub use sampler::sampler_task;
