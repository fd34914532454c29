use std::fmt;
use std::str::FromStr;

pub const SERVER_SOCKET: &str = "/var/run/pdns.controlsocket";
pub const SERVER_COMMAND: &str = "SHOW *";

pub const RECURSOR_SOCKET: &str = "/var/run/pdns_recursor.controlsocket";

/// Statistics requested from a recursor when no `command` override is configured.
/// The reply carries the values in this exact order.
pub const RECURSOR_STATISTICS: &[&str] = &[
    "all-outqueries",
    "answers0-1",
    "answers100-1000",
    "answers10-100",
    "answers1-10",
    "answers-slow",
    "cache-entries",
    "cache-hits",
    "cache-misses",
    "chain-resends",
    "client-parse-errors",
    "concurrent-queries",
    "dlg-only-drops",
    "ipv6-outqueries",
    "negcache-entries",
    "noerror-answers",
    "nsset-invalidations",
    "nsspeeds-entries",
    "nxdomain-answers",
    "outgoing-timeouts",
    "qa-latency",
    "questions",
    "resource-limits",
    "server-parse-errors",
    "servfail-answers",
    "spoof-prevents",
    "sys-msec",
    "tcp-client-overflow",
    "tcp-outqueries",
    "tcp-questions",
    "throttled-out",
    "throttled-outqueries",
    "throttle-entries",
    "unauthorized-tcp",
    "unauthorized-udp",
    "unexpected-packets",
    "unreachables",
    "user-msec",
];

/// Verb that prefixes every recursor request.
pub const RECURSOR_VERB: &str = "get";

/// Wire dialect spoken by a control socket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dialect {
    /// Authoritative server: `key=value,` replies over a stream socket.
    Server,
    /// Recursor: positional value replies over a datagram socket.
    Recursor,
}

/// Socket type used to reach a control socket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransportKind {
    Datagram,
    Stream,
}

impl Dialect {
    pub fn default_socket(&self) -> &'static str {
        match self {
            Dialect::Server => SERVER_SOCKET,
            Dialect::Recursor => RECURSOR_SOCKET,
        }
    }

    pub fn default_command(&self) -> String {
        match self {
            Dialect::Server => SERVER_COMMAND.to_string(),
            Dialect::Recursor => recursor_command(RECURSOR_STATISTICS),
        }
    }

    pub fn transport_kind(&self) -> TransportKind {
        match self {
            Dialect::Server => TransportKind::Stream,
            Dialect::Recursor => TransportKind::Datagram,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Dialect::Server => "server",
            Dialect::Recursor => "recursor",
        }
    }
}

/// Builds a recursor `get` request for the given statistic names.
pub fn recursor_command<S: AsRef<str>>(names: &[S]) -> String {
    let mut command = String::from(RECURSOR_VERB);
    for name in names {
        command.push(' ');
        command.push_str(name.as_ref());
    }
    command
}

impl FromStr for Dialect {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("server") {
            Ok(Dialect::Server)
        } else if s.eq_ignore_ascii_case("recursor") {
            Ok(Dialect::Recursor)
        } else {
            Err(format!("Unknown dialect '{}'", s))
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for TransportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransportKind::Datagram => f.write_str("datagram"),
            TransportKind::Stream => f.write_str("stream"),
        }
    }
}
