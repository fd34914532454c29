use pdns_stats_domain::TypeSpec;

/// Port for metric type metadata (value arity and kind per type name).
pub trait TypeRegistry: Send + Sync {
    fn get(&self, type_name: &str) -> Option<&TypeSpec>;
}
