//! Default digests of the empty sparse subtrees
use std::{
    any::{Any, TypeId},
    collections::HashMap,
    marker::PhantomData,
    sync::{Arc, OnceLock, PoisonError, RwLock},
};

use log::trace;

use crate::node::Hasher;

/// Value held by every empty leaf slot.
pub const DEFAULT_LEAF_VALUE: &[u8] = b"";

type Registry = RwLock<HashMap<TypeId, Arc<dyn Any + Send + Sync>>>;

/// One table per (digest size, hasher) pair, shared by every tree of the process.
static REGISTRY: OnceLock<Registry> = OnceLock::new();

/// Digests of the all-empty subtree at every height.
///
/// `at(0)` is the hash of [`DEFAULT_LEAF_VALUE`] and `at(h)` is `hash(at(h - 1) ‖ at(h - 1))`,
/// up to the root height `HASH_SIZE * 8 - 1`.
pub struct DefaultDigests<const HASH_SIZE: usize, H> {
    digests: Vec<[u8; HASH_SIZE]>,
    _phantom: PhantomData<fn() -> H>,
}

impl<const HASH_SIZE: usize, H: Hasher<HASH_SIZE> + 'static> DefaultDigests<HASH_SIZE, H> {
    /// Height of the root of a sparse tree over `HASH_SIZE`-byte digests.
    pub const fn max_height() -> usize {
        HASH_SIZE * 8 - 1
    }

    /// Gets the table, computing it on first use.
    pub fn get() -> Arc<Self> {
        let registry = REGISTRY.get_or_init(Default::default);
        let id = TypeId::of::<Self>();
        let cached = registry
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&id)
            .cloned();
        let table = match cached {
            Some(table) => table,
            None => registry
                .write()
                .unwrap_or_else(PoisonError::into_inner)
                .entry(id)
                .or_insert_with(|| -> Arc<dyn Any + Send + Sync> { Arc::new(Self::build()) })
                .clone(),
        };
        table
            .downcast::<Self>()
            .unwrap_or_else(|_| unreachable!("default digest table registered under a foreign type id"))
    }

    /// builds the table
    fn build() -> Self {
        let max_height = Self::max_height();
        let mut digests = Vec::with_capacity(max_height + 1);
        digests.push(H::hash(DEFAULT_LEAF_VALUE));
        for height in 1..=max_height {
            let below = digests[height - 1];
            digests.push(H::hash_pair(&below, &below));
        }
        trace!(
            "computed {} default digests of {} bytes",
            digests.len(),
            HASH_SIZE
        );
        Self {
            digests,
            _phantom: PhantomData,
        }
    }

    /// Digest of the empty subtree of `height`.
    ///
    /// # Panics
    ///
    /// Panics if `height` is above [`Self::max_height`].
    pub fn at(&self, height: usize) -> [u8; HASH_SIZE] {
        self.digests[height]
    }

    pub fn get_height(&self, height: usize) -> Option<&[u8; HASH_SIZE]> {
        self.digests.get(height)
    }

    /// Digest of an empty leaf slot.
    pub fn empty_leaf(&self) -> [u8; HASH_SIZE] {
        self.digests[0]
    }

    /// Root of a sparse tree holding no item.
    pub fn empty_root(&self) -> [u8; HASH_SIZE] {
        self.digests[Self::max_height()]
    }
}
