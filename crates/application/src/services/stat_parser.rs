//! Decoders for the two control-socket reply dialects.
//!
//! Parsing never fails. Malformed fragments are skipped and whatever could be
//! extracted is returned.

use pdns_stats_domain::Dialect;

/// A raw `(statistic name, textual value)` pair borrowed from a reply.
pub type StatPair<'a> = (&'a str, &'a str);

/// Decodes a reply according to the dialect of the target that produced it.
pub fn parse<'a>(dialect: Dialect, buffer: &'a str, command: &'a str) -> Vec<StatPair<'a>> {
    match dialect {
        Dialect::Server => parse_server(buffer),
        Dialect::Recursor => parse_recursor(buffer, command),
    }
}

// Replies are C strings on the wire; nothing after a NUL is data.
fn until_nul(buffer: &str) -> &str {
    buffer.split('\0').next().unwrap_or_default()
}

/// Authoritative server reply: `key=value,key=value,` on one line.
///
/// Empty tokens are ignored. A token with an empty value is skipped. A token
/// without `=` ends the reply.
pub fn parse_server(buffer: &str) -> Vec<StatPair<'_>> {
    let mut pairs = Vec::new();

    for token in until_nul(buffer).split(',').filter(|t| !t.is_empty()) {
        let Some((key, value)) = token.split_once('=') else {
            break;
        };
        if value.is_empty() {
            continue;
        }
        pairs.push((key, value));
    }

    pairs
}

/// Recursor reply: whitespace separated values, in the order of the names
/// listed in the `get name1 name2 ...` command that requested them.
///
/// Pairing stops at whichever side runs out first.
pub fn parse_recursor<'a>(buffer: &'a str, command: &'a str) -> Vec<StatPair<'a>> {
    let names = command
        .split([' ', '\t'])
        .filter(|t| !t.is_empty())
        .skip(1);
    let values = until_nul(buffer)
        .split([' ', '\t', '\n', '\r'])
        .filter(|t| !t.is_empty());

    names.zip(values).collect()
}
