use std::fmt;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Socket operation that failed during a control-socket exchange.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportStep {
    Socket,
    Unlink,
    Bind,
    Chmod,
    Connect,
    Send,
    Recv,
    Timeout,
}

impl fmt::Display for TransportStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TransportStep::Socket => "socket",
            TransportStep::Unlink => "unlink",
            TransportStep::Bind => "bind",
            TransportStep::Chmod => "chmod",
            TransportStep::Connect => "connect",
            TransportStep::Send => "send",
            TransportStep::Recv => "recv",
            TransportStep::Timeout => "timeout",
        };
        f.write_str(name)
    }
}

#[derive(Error, Debug)]
#[error("{step} failed on {}: {source}", .path.display())]
pub struct TransportError {
    pub step: TransportStep,
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}

impl TransportError {
    pub fn new(step: TransportStep, path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self {
            step,
            path: path.into(),
            source,
        }
    }
}

/// Reasons a known statistic is dropped before reaching the sink.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SubmitError {
    #[error("The lookup table returned type `{0}`, but the type registry does not know it")]
    UnknownType(String),

    #[error("Type `{metric_type}` has {arity} data sources, but only one is supported")]
    UnsupportedArity { metric_type: String, arity: usize },

    #[error("Cannot convert `{value}` to {expected}")]
    ValueConversion {
        value: String,
        expected: &'static str,
    },
}
