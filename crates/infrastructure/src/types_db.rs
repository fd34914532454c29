//! Metric type registry in collectd `types.db` format.
//!
//! Each line declares one type followed by its data sources:
//!
//! ```text
//! io_packets  rx:DERIVE:0:U, tx:DERIVE:0:U
//! ```
//!
//! `U` stands for an unbounded minimum or maximum. Lines that cannot be parsed
//! are logged and skipped.

use pdns_stats_application::ports::TypeRegistry;
use pdns_stats_domain::{DataSource, DataSourceKind, TypeSpec};
use std::collections::HashMap;
use std::io;
use thiserror::Error;
use tracing::{debug, warn};

/// Types referenced by the compiled-in metric map.
pub const BUILTIN_TYPES: &str = "\
cache_result  value:DERIVE:0:U
cache_size    value:GAUGE:0:1000000000
counter       value:COUNTER:U:U
cpu           value:DERIVE:0:U
dns_answer    value:DERIVE:0:U
dns_qtype     value:DERIVE:0:U
dns_question  value:DERIVE:0:U
dns_rcode     value:DERIVE:0:U
io_packets    rx:DERIVE:0:U, tx:DERIVE:0:U
latency       value:GAUGE:0:U
";

#[derive(Error, Debug)]
pub enum TypesDbError {
    #[error("Failed to read types database {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },
}

#[derive(Debug, Clone, Default)]
pub struct TypesDb {
    types: HashMap<String, TypeSpec>,
}

impl TypesDb {
    pub fn builtin() -> Self {
        Self::parse(BUILTIN_TYPES)
    }

    pub fn from_file(path: &str) -> Result<Self, TypesDbError> {
        let contents = std::fs::read_to_string(path).map_err(|source| TypesDbError::Read {
            path: path.to_string(),
            source,
        })?;
        let db = Self::parse(&contents);
        debug!(path, types = db.len(), "Loaded types database");
        Ok(db)
    }

    /// Parses `types.db` text. A later definition of a type replaces an
    /// earlier one.
    pub fn parse(contents: &str) -> Self {
        let mut types = HashMap::new();

        for (index, line) in contents.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            match parse_line(line) {
                Ok(spec) => {
                    types.insert(spec.name.clone(), spec);
                }
                Err(reason) => {
                    warn!(line = index + 1, reason = %reason, "Skipping types.db line");
                }
            }
        }

        Self { types }
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl TypeRegistry for TypesDb {
    fn get(&self, type_name: &str) -> Option<&TypeSpec> {
        self.types.get(type_name)
    }
}

fn parse_line(line: &str) -> Result<TypeSpec, String> {
    let (name, rest) = line
        .split_once(char::is_whitespace)
        .ok_or_else(|| "type has no data sources".to_string())?;

    let data_sources = rest
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(parse_data_source)
        .collect::<Result<Vec<_>, _>>()?;

    if data_sources.is_empty() {
        return Err("type has no data sources".to_string());
    }

    Ok(TypeSpec {
        name: name.to_string(),
        data_sources,
    })
}

fn parse_data_source(field: &str) -> Result<DataSource, String> {
    let parts: Vec<&str> = field.split(':').collect();
    let [name, kind, min, max] = parts.as_slice() else {
        return Err(format!("malformed data source `{}`", field));
    };

    Ok(DataSource {
        name: name.to_string(),
        kind: kind.parse::<DataSourceKind>()?,
        min: parse_bound(min)?,
        max: parse_bound(max)?,
    })
}

fn parse_bound(bound: &str) -> Result<Option<f64>, String> {
    if bound == "U" {
        return Ok(None);
    }
    bound
        .parse::<f64>()
        .map(Some)
        .map_err(|_| format!("invalid bound `{}`", bound))
}
