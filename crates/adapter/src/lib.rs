mod error;
mod filter;
mod index;
mod memory;
mod record;
mod view;

pub use error::{AdapterError, Result};
pub use filter::{Dimension, Filter, FilterSet, OutOfStockPolicy, ProductCondition};
pub use index::{KeyedValueCount, NumericField, SearchIndex, ValueCount};
pub use memory::MemoryIndex;
pub use record::ProductRecord;
pub use view::FilteredView;
