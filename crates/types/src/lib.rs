//! # gridmap-types
//!
//! Plain data types shared by the `gridmap` container:
//!
//! - **Coordinates**: `Coord`, and the `Scalar` trait mapping axis values to
//!   totally ordered map keys
//! - **Rectangles**: `Rect`, `Containment`, `RectError`
//! - **Configuration**: `MapConfig`
//! - **Statistics**: `QueryTrace`, `MapStats`
//!
//! All types are serializable with Serde and convert from the `geo` crate's
//! primitives.
//!
//! ## Examples
//!
//! ```rust
//! use gridmap_types::{Containment, Coord, Rect};
//!
//! let room = Rect::from_corners(Coord::new(2, 2), Coord::new(6, 5)).unwrap();
//! assert!(room.contains(&Coord::new(2, 4), Containment::HalfOpen));
//! assert!(!room.contains(&Coord::new(6, 4), Containment::HalfOpen));
//! assert!(room.contains(&Coord::new(6, 4), Containment::Closed));
//! ```

pub mod config;
pub mod coord;
pub mod rect;
pub mod stats;

pub use config::MapConfig;
pub use coord::{Coord, F32Key, F64Key, Scalar};
pub use rect::{Axis, Containment, Rect, RectError};
pub use stats::{MapStats, QueryTrace};
