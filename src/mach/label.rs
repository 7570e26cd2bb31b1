use super::Val;
use std::collections::HashMap;

/// ## Label cache
///
/// Label ids compare by numeric value, so `1` and `1.0` are the same
/// label. Entries are added when a label statement runs or when a
/// scan of the program finds one.

#[derive(Debug, Default)]
pub struct Labels {
    cache: HashMap<u64, usize>,
    scans: usize,
}

impl Labels {
    pub fn key(id: Val) -> u64 {
        let n = match id {
            Val::Integer(n) => n as f64,
            Val::Float(n) => n as f64,
        };
        if n == 0.0 {
            return 0f64.to_bits();
        }
        n.to_bits()
    }

    pub fn get(&self, id: Val) -> Option<usize> {
        self.cache.get(&Labels::key(id)).copied()
    }

    pub fn define(&mut self, id: Val, index: usize) {
        self.cache.insert(Labels::key(id), index);
    }

    pub fn clear(&mut self) {
        self.cache.clear();
        self.scans = 0;
    }

    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    /// How many times the program has been scanned for a label.
    pub fn scans(&self) -> usize {
        self.scans
    }

    pub(super) fn count_scan(&mut self) {
        self.scans += 1;
    }
}
