//! Type registry
//!
//! Append-only store of discovered type records, keyed by name and iterated
//! in ascending lexicographic name order. Every downstream pass reads the
//! registry by reference once ingestion is finished.

use std::collections::BTreeMap;

use anyhow::Result;
use tracing::{trace, warn};

use super::{DiagramError, DuplicatePolicy, TypeRecord};

/// Registry of every type record in one run
#[derive(Debug, Clone, Default)]
pub struct TypeRegistry {
    records: BTreeMap<String, TypeRecord>,
    policy: DuplicatePolicy,
}

impl TypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: DuplicatePolicy) -> Self {
        Self {
            records: BTreeMap::new(),
            policy,
        }
    }

    pub fn policy(&self) -> DuplicatePolicy {
        self.policy
    }

    /// Add a record, applying the duplicate policy on a name clash
    pub fn insert(&mut self, record: TypeRecord) -> Result<()> {
        if self.records.contains_key(record.name()) {
            match self.policy {
                DuplicatePolicy::Reject => {
                    warn!(name = record.name(), "Rejected duplicate type");
                    return Err(DiagramError::duplicate_type(record.name()).into());
                }
                DuplicatePolicy::LastWriteWins => {
                    warn!(name = record.name(), "Replacing duplicate type");
                }
            }
        }

        trace!(name = record.name(), "Registered type");
        self.records.insert(record.name().to_string(), record);
        Ok(())
    }

    /// Exact-name lookup
    pub fn lookup(&self, name: &str) -> Option<&TypeRecord> {
        self.records.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.records.contains_key(name)
    }

    /// Every record in ascending name order
    pub fn all_sorted_by_name(&self) -> impl Iterator<Item = &TypeRecord> {
        self.records.values()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
