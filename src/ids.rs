//! Unique element ids for picker instances.

use std::cell::Cell;

/// Produces a fresh base id per picker instance.
pub trait IdGenerator {
    fn next_id(&self) -> String;
}

/// Random v4 UUIDs, `color-picker-<32 hex digits>`.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIds;

impl IdGenerator for UuidIds {
    fn next_id(&self) -> String {
        format!("color-picker-{}", uuid::Uuid::new_v4().simple())
    }
}

/// `<prefix>-1`, `<prefix>-2`, … for hosts that need stable ids.
#[derive(Debug)]
pub struct SequentialIds {
    prefix: String,
    next: Cell<u64>,
}

impl SequentialIds {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: Cell::new(1),
        }
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::new("color-picker")
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&self) -> String {
        let n = self.next.get();
        self.next.set(n + 1);
        format!("{}-{n}", self.prefix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uuid_ids_are_distinct() {
        let a = UuidIds.next_id();
        let b = UuidIds.next_id();
        assert_ne!(a, b);
        assert!(a.starts_with("color-picker-"));
        assert_eq!(a.len(), "color-picker-".len() + 32);
    }

    #[test]
    fn sequential_ids_count_per_generator() {
        let ids = SequentialIds::new("cp");
        assert_eq!(ids.next_id(), "cp-1");
        assert_eq!(ids.next_id(), "cp-2");
        assert_eq!(SequentialIds::default().next_id(), "color-picker-1");
    }
}
