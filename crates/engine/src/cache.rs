use std::collections::HashMap;
use std::sync::Mutex;

use facetnav_catalog::{LanguageId, StoreId};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::block::FacetBlock;
use crate::context::RequestContext;
use crate::error::Result;
use crate::selection::SelectionState;

/// Bumped whenever the serialized block shape changes; entries written under
/// an older version are treated as misses and overwritten.
pub const SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Serialize, Deserialize)]
struct CachedBlocks {
    schema_version: u32,
    blocks: Vec<FacetBlock>,
}

/// Key-value store for assembled block lists.
///
/// The interface is infallible: implementations log their own failures. A
/// cache problem is never allowed to abort a response, only to force a
/// recompute.
pub trait BlockStore {
    fn get(&self, fingerprint: &str) -> Option<String>;
    fn put(&self, fingerprint: &str, blob: String);
}

/// In-memory [`BlockStore`] with no eviction; invalidation is an external
/// event (catalog reindex) handled by dropping the store.
#[derive(Debug, Default)]
pub struct MemoryBlockStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryBlockStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().map(|entries| entries.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl BlockStore for MemoryBlockStore {
    fn get(&self, fingerprint: &str) -> Option<String> {
        match self.entries.lock() {
            Ok(entries) => entries.get(fingerprint).cloned(),
            Err(poisoned) => {
                log::warn!("block store lock poisoned on read");
                poisoned.into_inner().get(fingerprint).cloned()
            }
        }
    }

    fn put(&self, fingerprint: &str, blob: String) {
        match self.entries.lock() {
            Ok(mut entries) => {
                entries.insert(fingerprint.to_owned(), blob);
            }
            Err(poisoned) => {
                log::warn!("block store lock poisoned on write");
                poisoned.into_inner().insert(fingerprint.to_owned(), blob);
            }
        }
    }
}

/// Deterministic cache key for a (scope, locale, selection) combination.
///
/// SHA-256 over a canonical JSON rendering; BTree-backed selection members
/// keep the rendering stable across runs.
pub fn fingerprint(ctx: &RequestContext, selection: &SelectionState) -> Result<String> {
    #[derive(Serialize)]
    struct FingerprintKey<'a> {
        store: StoreId,
        language: LanguageId,
        currency: &'a str,
        parent: u32,
        selection: &'a SelectionState,
    }

    let key = FingerprintKey {
        store: ctx.store,
        language: ctx.language,
        currency: &ctx.price_format.currency_code,
        parent: ctx.parent.id,
        selection,
    };
    let encoded = serde_json::to_vec(&key)?;
    Ok(format!("{:x}", Sha256::digest(&encoded)))
}

/// Decode a stored entry, treating decode failures and stale schema versions
/// as misses.
pub(crate) fn load_blocks<S: BlockStore>(store: &S, fingerprint: &str) -> Option<Vec<FacetBlock>> {
    let blob = store.get(fingerprint)?;
    match serde_json::from_str::<CachedBlocks>(&blob) {
        Ok(entry) if entry.schema_version == SCHEMA_VERSION => Some(entry.blocks),
        Ok(entry) => {
            log::warn!(
                "cache entry {} has schema {} (current {}), recomputing",
                fingerprint,
                entry.schema_version,
                SCHEMA_VERSION
            );
            None
        }
        Err(err) => {
            log::warn!("failed to decode cache entry {fingerprint}: {err}");
            None
        }
    }
}

/// Encode and store a block list. Encoding failures are logged, never fatal.
pub(crate) fn store_blocks<S: BlockStore>(store: &S, fingerprint: &str, blocks: &[FacetBlock]) {
    let entry = CachedBlocks {
        schema_version: SCHEMA_VERSION,
        blocks: blocks.to_vec(),
    };
    match serde_json::to_string(&entry) {
        Ok(blob) => store.put(fingerprint, blob),
        Err(err) => log::warn!("failed to encode facet blocks for cache entry {fingerprint}: {err}"),
    }
}
