use pdns_stats_domain::{ConfigError, Target};
use std::collections::HashSet;

/// Ordered set of configured targets, unique by instance label.
#[derive(Debug, Clone, Default)]
pub struct TargetRegistry {
    targets: Vec<Target>,
    instances: HashSet<String>,
}

impl TargetRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a target. A second target with an already registered instance
    /// label is rejected and the first one stays.
    pub fn add(&mut self, target: Target) -> Result<(), ConfigError> {
        if !self.instances.insert(target.instance().to_string()) {
            return Err(ConfigError::DuplicateInstance(
                target.instance().to_string(),
            ));
        }
        self.targets.push(target);
        Ok(())
    }

    /// Calls `f` for every target in insertion order.
    pub fn for_each_ordered<F: FnMut(&Target)>(&self, f: F) {
        self.targets.iter().for_each(f);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Target> {
        self.targets.iter()
    }

    pub fn clear(&mut self) {
        self.targets.clear();
        self.instances.clear();
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}
