pub mod error;
pub mod iter;
pub mod probe;
pub mod probe_map;
pub mod slot;

pub use error::{ProbeMapError, Result};
pub use iter::{EqualRange, IntoIter, Iter, IterMut, Keys, Values, ValuesMut};
pub use probe::{DoubleHashing, LinearProbing, ProbeSequence, QuadraticProbing};
pub use probe_map::{MapEntry, OccupiedEntry, ProbeMap, ProbeMultiMap, VacantEntry};
pub use slot::Slot;
