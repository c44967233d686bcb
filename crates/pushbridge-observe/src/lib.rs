mod logger;
pub use logger::*;

#[cfg(feature = "emitter")]
mod emitter;
#[cfg(feature = "emitter")]
pub use emitter::TracingEmitter;
