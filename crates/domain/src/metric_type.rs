use std::fmt;
use std::str::FromStr;

/// How a single data source value is stored and interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataSourceKind {
    Gauge,
    Counter,
    Derive,
    Absolute,
}

impl DataSourceKind {
    /// Gauges carry floating-point values, every other kind an integer.
    pub fn is_gauge(&self) -> bool {
        matches!(self, DataSourceKind::Gauge)
    }
}

impl FromStr for DataSourceKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "GAUGE" => Ok(DataSourceKind::Gauge),
            "COUNTER" => Ok(DataSourceKind::Counter),
            "DERIVE" => Ok(DataSourceKind::Derive),
            "ABSOLUTE" => Ok(DataSourceKind::Absolute),
            other => Err(format!("Unknown data source kind '{}'", other)),
        }
    }
}

impl fmt::Display for DataSourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DataSourceKind::Gauge => "GAUGE",
            DataSourceKind::Counter => "COUNTER",
            DataSourceKind::Derive => "DERIVE",
            DataSourceKind::Absolute => "ABSOLUTE",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DataSource {
    pub name: String,
    pub kind: DataSourceKind,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

/// A registered metric type: its name and the data sources every value carries.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeSpec {
    pub name: String,
    pub data_sources: Vec<DataSource>,
}

impl TypeSpec {
    pub fn arity(&self) -> usize {
        self.data_sources.len()
    }
}
