//! Two-dimensional associative container with point lookup and rectangle
//! range queries.
//!
//! ```rust
//! use gridmap::{Coord, Rect, SpatialMap};
//!
//! let mut map: SpatialMap<&str> = SpatialMap::new();
//! map.set(Coord::new(1.0, 1.0), "A");
//! map.set(Coord::new(1.0, 5.0), "B");
//! map.set(Coord::new(9.0, 9.0), "C");
//!
//! let found = map.objects_within_rect(Rect::new(Coord::new(0.0, 0.0), 4.0, 10.0)?);
//! assert_eq!(found.len(), 2);
//!
//! map.remove(Coord::new(1.0, 5.0));
//! assert_eq!(map.get(Coord::new(1.0, 5.0)), None);
//! # Ok::<(), gridmap::GridMapError>(())
//! ```

pub mod builder;
pub mod error;
pub mod map;
pub mod shared;

pub use builder::MapBuilder;
pub use error::{GridMapError, Result};
pub use map::SpatialMap;
pub use shared::Shared;

pub use gridmap_types::{
    Axis, Containment, Coord, MapConfig, MapStats, QueryTrace, Rect, RectError, Scalar,
};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common imports
pub mod prelude {
    pub use crate::{GridMapError, MapBuilder, Result, Shared, SpatialMap};

    pub use crate::{Containment, Coord, MapConfig, Rect};
}
