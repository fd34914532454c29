//! Compiled-in mapping from control-socket statistic names to metric types.
//!
//! Names absent from the table are dropped by the submitter. Peers add new
//! statistics faster than the table grows, so a miss is normal.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricMapEntry {
    pub raw_name: &'static str,
    pub metric_type: &'static str,
    pub sub_dimension: Option<&'static str>,
}

const fn entry(
    raw_name: &'static str,
    metric_type: &'static str,
    sub_dimension: Option<&'static str>,
) -> MetricMapEntry {
    MetricMapEntry {
        raw_name,
        metric_type,
        sub_dimension,
    }
}

pub static METRIC_MAP: &[MetricMapEntry] = &[
    // Authoritative server: questions
    entry("recursing-questions", "dns_question", Some("recurse")),
    entry("tcp-queries", "dns_question", Some("tcp")),
    entry("udp-queries", "dns_question", Some("udp")),
    // Authoritative server: answers
    entry("recursing-answers", "dns_answer", Some("recurse")),
    entry("tcp-answers", "dns_answer", Some("tcp")),
    entry("udp-answers", "dns_answer", Some("udp")),
    // Authoritative server: caches
    entry("packetcache-hit", "cache_result", Some("packet-hit")),
    entry("packetcache-miss", "cache_result", Some("packet-miss")),
    entry("packetcache-size", "cache_size", Some("packet")),
    entry("query-cache-hit", "cache_result", Some("query-hit")),
    entry("query-cache-miss", "cache_result", Some("query-miss")),
    entry("latency", "latency", None),
    entry("corrupt-packets", "io_packets", Some("corrupt")),
    entry("deferred-cache-inserts", "counter", Some("cache-deferred_insert")),
    entry("deferred-cache-lookup", "counter", Some("cache-deferred_lookup")),
    entry("qsize-a", "cache_size", Some("answers")),
    entry("qsize-q", "cache_size", Some("questions")),
    entry("servfail-packets", "io_packets", Some("servfail")),
    entry("timedout-packets", "io_packets", Some("timeout")),
    entry("udp4-answers", "dns_answer", Some("udp4")),
    entry("udp4-queries", "dns_question", Some("queries-udp4")),
    entry("udp6-answers", "dns_answer", Some("udp6")),
    entry("udp6-queries", "dns_question", Some("queries-udp6")),
    // Recursor: answers by rcode
    entry("noerror-answers", "dns_rcode", Some("NOERROR")),
    entry("nxdomain-answers", "dns_rcode", Some("NXDOMAIN")),
    entry("servfail-answers", "dns_rcode", Some("SERVFAIL")),
    // Recursor: CPU
    entry("sys-msec", "cpu", Some("system")),
    entry("user-msec", "cpu", Some("user")),
    entry("qa-latency", "latency", None),
    // Recursor: cache
    entry("cache-entries", "cache_size", None),
    entry("cache-hits", "cache_result", Some("hit")),
    entry("cache-misses", "cache_result", Some("miss")),
    entry("questions", "dns_qtype", Some("total")),
];

/// Exact-match lookup of a raw statistic name.
pub fn lookup(raw_name: &str) -> Option<&'static MetricMapEntry> {
    METRIC_MAP.iter().find(|e| e.raw_name == raw_name)
}
