mod putval;
mod tracing_sink;

pub use putval::{identifier, PutvalSink};
pub use tracing_sink::TracingSink;
