use std::hash::{Hash, Hasher};

use fxhash::FxHasher;

use crate::problem::package::{Package, PackageId};

const DEFAULT_BUCKETS: usize = 40;

/// Bucketed map owning every `Package` for the life of the run. Keyed by
/// package id with FxHash, which is deterministic across processes. The std
/// `RandomState` hasher is seeded per run and would make bucket layout (and
/// anything iterating it) unreproducible.
#[derive(Debug, Clone)]
pub struct PackageStore {
    buckets: Vec<Vec<(PackageId, Package)>>,
    len: usize,
}

impl Default for PackageStore {
    fn default() -> Self {
        Self::with_buckets(DEFAULT_BUCKETS)
    }
}

impl PackageStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_buckets(bucket_count: usize) -> Self {
        Self {
            buckets: (0..bucket_count.max(1)).map(|_| Vec::new()).collect(),
            len: 0,
        }
    }

    fn bucket_of(&self, id: PackageId) -> usize {
        let mut hasher = FxHasher::default();
        id.get().hash(&mut hasher);
        hasher.finish() as usize % self.buckets.len()
    }

    /// Upsert: replaces the value if the id is already present, appends
    /// otherwise.
    pub fn insert(&mut self, id: PackageId, package: Package) {
        let bucket = self.bucket_of(id);
        for entry in &mut self.buckets[bucket] {
            if entry.0 == id {
                entry.1 = package;
                return;
            }
        }

        self.buckets[bucket].push((id, package));
        self.len += 1;
    }

    pub fn search(&self, id: PackageId) -> Option<&Package> {
        let bucket = self.bucket_of(id);
        self.buckets[bucket]
            .iter()
            .find(|(key, _)| *key == id)
            .map(|(_, package)| package)
    }

    pub fn search_mut(&mut self, id: PackageId) -> Option<&mut Package> {
        let bucket = self.bucket_of(id);
        self.buckets[bucket]
            .iter_mut()
            .find(|(key, _)| *key == id)
            .map(|(_, package)| package)
    }

    /// Removes the entry for `id`, reporting whether one existed.
    pub fn remove(&mut self, id: PackageId) -> bool {
        let bucket = self.bucket_of(id);
        if let Some(pos) = self.buckets[bucket].iter().position(|(key, _)| *key == id) {
            self.buckets[bucket].remove(pos);
            self.len -= 1;
            return true;
        }
        false
    }

    /// Doubles the bucket count and rehashes every entry. A 40-package day
    /// never outgrows the default buckets, so this is a capability the
    /// contract requires rather than a hot path.
    pub fn resize(&mut self) {
        let mut grown = PackageStore::with_buckets(self.buckets.len() * 2);
        for bucket in self.buckets.drain(..) {
            for (id, package) in bucket {
                grown.insert(id, package);
            }
        }
        *self = grown;
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Package> {
        self.buckets.iter().flatten().map(|(_, package)| package)
    }

    /// All ids in ascending order. Bucket order depends on the hash, so
    /// deterministic consumers (planner, oracle, reports) go through this.
    pub fn sorted_ids(&self) -> Vec<PackageId> {
        let mut ids: Vec<PackageId> = self.buckets.iter().flatten().map(|(id, _)| *id).collect();
        ids.sort_unstable();
        ids
    }
}
