mod block;
mod builders;
mod cache;
mod context;
mod engine;
mod error;
mod selection;
mod sort;

pub use block::{BlockPayload, FacetBlock, FacetValue, RangeFacet};
pub use cache::{fingerprint, BlockStore, MemoryBlockStore, SCHEMA_VERSION};
pub use context::{FacetLabels, PriceFormat, RequestContext};
pub use engine::FacetEngine;
pub use error::{EngineError, Result};
pub use selection::{RangeSelection, SelectionState};
pub use sort::{natural_label_cmp, sort_by_reference};
