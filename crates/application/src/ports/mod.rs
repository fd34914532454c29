mod observation_sink;
mod stat_transport;
mod type_registry;

pub use observation_sink::ObservationSink;
pub use stat_transport::StatTransport;
pub use type_registry::TypeRegistry;
