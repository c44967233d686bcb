pub mod config;
pub use config::TaskConfig;
pub mod emit;
pub use emit::EventEmitter;
pub mod error;
pub mod task;
pub use task::{Responder, ResponseTask, TaskDelegate};
