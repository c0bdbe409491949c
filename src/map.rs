//! Two-level spatial map.
//!
//! Entries live in an ordered outer map keyed by x, where each value is an
//! ordered column keyed by y. A rectangle query takes an ordered range over
//! the outer keys first and only then ranges over y inside the columns it
//! hit, so columns outside the rectangle's x-span are never touched.

use crate::builder::MapBuilder;
use gridmap_types::{Axis, Coord, MapConfig, MapStats, QueryTrace, Rect, Scalar};
use rustc_hash::FxHashSet;
use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::hash::Hash;

type Column<T, V> = BTreeMap<<T as Scalar>::Key, V>;

/// Associative container from grid coordinates to values.
///
/// Each coordinate holds at most one value. Coordinates are compared through
/// [`Scalar::Key`], so for float axes `-0.0` and `0.0` address the same cell
/// and nearly equal floats do not.
///
/// `SpatialMap` does no internal locking. It is `Send`/`Sync` whenever `V`
/// is; wrap it in a lock to share it between threads.
///
/// # Examples
///
/// ```rust
/// use gridmap::{Coord, Rect, SpatialMap};
///
/// let mut board: SpatialMap<&str, i32> = SpatialMap::new();
/// board.set(Coord::new(1, 1), "knight");
/// board.set(Coord::new(1, 5), "rook");
/// board.set(Coord::new(9, 9), "king");
///
/// assert_eq!(board.get(Coord::new(1, 5)), Some(&"rook"));
///
/// let left = Rect::new(Coord::new(0, 0), 4, 10)?;
/// let found = board.objects_within_rect(left);
/// assert_eq!(found.len(), 2);
/// assert!(found.contains(&"knight") && found.contains(&"rook"));
/// # Ok::<(), gridmap::GridMapError>(())
/// ```
#[derive(Debug, Clone)]
pub struct SpatialMap<V, T: Scalar = f64> {
    columns: BTreeMap<T::Key, Column<T, V>>,
    len: usize,
    config: MapConfig,
}

impl<V, T: Scalar> SpatialMap<V, T> {
    /// Create an empty map with the default configuration.
    pub fn new() -> Self {
        Self::with_config(MapConfig::default())
    }

    pub fn with_config(config: MapConfig) -> Self {
        Self {
            columns: BTreeMap::new(),
            len: 0,
            config,
        }
    }

    pub fn builder() -> MapBuilder {
        MapBuilder::new()
    }

    pub fn config(&self) -> &MapConfig {
        &self.config
    }

    /// Number of stored coordinates.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of columns in the outer index, including empty placeholders.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Store `value` at `location`, returning the value it displaced.
    ///
    /// The column for `location.x` is created on first use.
    pub fn set(&mut self, location: Coord<T>, value: V) -> Option<V> {
        if location.is_nan() {
            log::warn!(
                "Storing value at NaN coordinate ({:?}, {:?}); no rectangle will match it",
                location.x,
                location.y
            );
        }

        let column = match self.columns.entry(location.x.to_key()) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => {
                log::debug!("Creating column at x={:?}", location.x);
                entry.insert(BTreeMap::new())
            }
        };

        let previous = column.insert(location.y.to_key(), value);
        if previous.is_none() {
            self.len += 1;
        }
        log::trace!(
            "set ({:?}, {:?}) overwrote={}",
            location.x,
            location.y,
            previous.is_some()
        );
        previous
    }

    /// Look up the value at `location`. `None` means nothing is stored there.
    pub fn get(&self, location: Coord<T>) -> Option<&V> {
        self.columns
            .get(&location.x.to_key())?
            .get(&location.y.to_key())
    }

    pub fn get_mut(&mut self, location: Coord<T>) -> Option<&mut V> {
        self.columns
            .get_mut(&location.x.to_key())?
            .get_mut(&location.y.to_key())
    }

    pub fn contains(&self, location: Coord<T>) -> bool {
        self.get(location).is_some()
    }

    /// Remove and return the value at `location`.
    ///
    /// Removing an absent coordinate changes nothing. The lookup always walks
    /// the column index and then the column; there is no fast path for an
    /// empty map.
    pub fn remove(&mut self, location: Coord<T>) -> Option<V> {
        let x = location.x.to_key();
        let Some(column) = self.columns.get_mut(&x) else {
            log::trace!("remove ({:?}, {:?}): no column", location.x, location.y);
            return None;
        };

        let removed = column.remove(&location.y.to_key());
        if removed.is_some() {
            self.len -= 1;
        }

        if column.is_empty() && self.config.prune_empty_columns {
            self.columns.remove(&x);
            log::debug!("Pruned empty column at x={:?}", location.x);
        }

        log::trace!(
            "remove ({:?}, {:?}) found={}",
            location.x,
            location.y,
            removed.is_some()
        );
        removed
    }

    /// Remove every entry. Columns are dropped regardless of the pruning
    /// setting.
    pub fn clear(&mut self) {
        self.columns.clear();
        self.len = 0;
    }

    /// Iterate over all entries, column by column.
    ///
    /// Float coordinates come back in canonical form (`-0.0` as `0.0`).
    pub fn iter(&self) -> impl Iterator<Item = (Coord<T>, &V)> + '_ {
        self.columns.iter().flat_map(|(x, column)| {
            column
                .iter()
                .map(move |(y, value)| (Coord::new(T::from_key(*x), T::from_key(*y)), value))
        })
    }

    /// Iterate over the entries inside `rect`, without deduplication.
    ///
    /// Works for any value type; see [`SpatialMap::objects_within_rect`] for
    /// the deduplicated form.
    pub fn entries_within_rect(
        &self,
        rect: Rect<T>,
    ) -> impl Iterator<Item = (Coord<T>, &V)> + '_ {
        let containment = self.config.containment;
        let ranges = rect
            .key_range(Axis::X, containment)
            .zip(rect.key_range(Axis::Y, containment));

        ranges.into_iter().flat_map(move |(xs, ys)| {
            self.columns.range(xs).flat_map(move |(x, column)| {
                column
                    .range(ys)
                    .map(move |(y, value)| (Coord::new(T::from_key(*x), T::from_key(*y)), value))
            })
        })
    }

    pub fn stats(&self) -> MapStats {
        MapStats {
            entries: self.len,
            columns: self.columns.len(),
            empty_columns: self.columns.values().filter(|c| c.is_empty()).count(),
        }
    }

    fn scan<'a>(&'a self, rect: Rect<T>, trace: &mut QueryTrace, mut visit: impl FnMut(&'a V)) {
        let containment = self.config.containment;
        let (Some(xs), Some(ys)) = (
            rect.key_range(Axis::X, containment),
            rect.key_range(Axis::Y, containment),
        ) else {
            return;
        };

        for column in self.columns.range(xs).map(|(_, column)| column) {
            trace.record_column();
            for value in column.range(ys).map(|(_, value)| value) {
                trace.record_cell();
                visit(value);
            }
        }
    }
}

impl<V: Eq + Hash, T: Scalar> SpatialMap<V, T> {
    /// Collect the distinct values stored inside `rect`.
    ///
    /// Values are deduplicated with `Eq`/`Hash`; store [`crate::Shared`]
    /// handles to deduplicate by identity instead. Order is unspecified.
    pub fn objects_within_rect(&self, rect: Rect<T>) -> FxHashSet<&V> {
        self.objects_within_rect_traced(rect).0
    }

    /// Like [`SpatialMap::objects_within_rect`], also reporting how many
    /// columns and cells the scan touched.
    pub fn objects_within_rect_traced(&self, rect: Rect<T>) -> (FxHashSet<&V>, QueryTrace) {
        let mut trace = QueryTrace::new();
        let mut found = FxHashSet::default();
        self.scan(rect, &mut trace, |value| {
            found.insert(value);
        });

        log::trace!(
            "rect query at ({:?}, {:?}) {:?}x{:?}: {} columns, {} cells, {} distinct",
            rect.origin().x,
            rect.origin().y,
            rect.width(),
            rect.height(),
            trace.columns_visited,
            trace.cells_visited,
            found.len()
        );
        (found, trace)
    }
}

impl<V, T: Scalar> Default for SpatialMap<V, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V, T: Scalar> Extend<(Coord<T>, V)> for SpatialMap<V, T> {
    fn extend<I: IntoIterator<Item = (Coord<T>, V)>>(&mut self, iter: I) {
        for (location, value) in iter {
            self.set(location, value);
        }
    }
}

impl<V, T: Scalar> FromIterator<(Coord<T>, V)> for SpatialMap<V, T> {
    fn from_iter<I: IntoIterator<Item = (Coord<T>, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}
