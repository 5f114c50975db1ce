//! Named dataset registry.
//!
//! The catalog plays the query-context role: collections are registered
//! under fixed logical names ("ratings", "content", "tags") so later
//! operations can look them up by name.

use crate::dataset::Dataset;
use std::any::Any;
use std::collections::HashMap;
use std::sync::Arc;

/// Registry mapping logical names to type-erased datasets.
///
/// Registration under an existing name replaces the previous entry, so
/// repeated registration is idempotent. Lookups with the wrong name or the
/// wrong record type return None.
#[derive(Default)]
pub struct Catalog {
    tables: HashMap<String, Arc<dyn Any + Send + Sync>>,
}

impl Catalog {
    pub fn new() -> Self {
        Self {
            tables: HashMap::new(),
        }
    }

    /// Register a dataset under a logical name.
    pub fn register<T>(&mut self, name: &str, dataset: Dataset<T>)
    where
        T: Send + Sync + 'static,
    {
        tracing::debug!(
            "registering dataset '{}' ({} records)",
            name,
            dataset.len()
        );
        self.tables.insert(name.to_string(), Arc::new(dataset));
    }

    /// Look up a registered dataset by name and record type.
    pub fn dataset<T>(&self, name: &str) -> Option<Dataset<T>>
    where
        T: Send + Sync + 'static,
    {
        self.tables.get(name)?.downcast_ref::<Dataset<T>>().cloned()
    }

    /// Whether a dataset is registered under this name.
    pub fn contains(&self, name: &str) -> bool {
        self.tables.contains_key(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_and_lookup() {
        let mut catalog = Catalog::new();
        catalog.register("numbers", Dataset::from_records(vec![1u32, 2, 3]));

        let dataset = catalog.dataset::<u32>("numbers").unwrap();
        assert_eq!(dataset.len(), 3);
        assert!(catalog.contains("numbers"));
    }

    #[test]
    fn test_missing_name_is_none() {
        let catalog = Catalog::new();
        assert!(catalog.dataset::<u32>("nope").is_none());
        assert!(!catalog.contains("nope"));
    }

    #[test]
    fn test_wrong_type_is_none() {
        let mut catalog = Catalog::new();
        catalog.register("numbers", Dataset::from_records(vec![1u32, 2, 3]));

        assert!(catalog.dataset::<String>("numbers").is_none());
    }

    #[test]
    fn test_reregistration_replaces() {
        let mut catalog = Catalog::new();
        catalog.register("numbers", Dataset::from_records(vec![1u32]));
        catalog.register("numbers", Dataset::from_records(vec![1u32, 2]));

        assert_eq!(catalog.dataset::<u32>("numbers").unwrap().len(), 2);
    }
}
