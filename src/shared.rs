//! Identity-compared shared handles.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Deref;
use std::sync::Arc;

/// A reference-counted handle that compares and hashes by identity.
///
/// Two clones of the same handle are equal; two handles built from equal
/// but separately allocated values are not. Storing `Shared` values in a
/// [`crate::SpatialMap`] makes rectangle queries deduplicate by object
/// identity, which is what you want when one object spans several cells.
///
/// ```rust
/// use gridmap::{Coord, Rect, Shared, SpatialMap};
///
/// let wall = Shared::new(String::from("wall"));
/// let other_wall = Shared::new(String::from("wall"));
///
/// let mut map: SpatialMap<Shared<String>, i32> = SpatialMap::new();
/// map.set(Coord::new(0, 0), wall.clone());
/// map.set(Coord::new(0, 1), wall.clone());
/// map.set(Coord::new(0, 2), other_wall);
///
/// let found = map.objects_within_rect(Rect::new(Coord::new(0, 0), 1, 3)?);
/// assert_eq!(found.len(), 2);
/// assert!(found.contains(&wall));
/// # Ok::<(), gridmap::GridMapError>(())
/// ```
pub struct Shared<T: ?Sized>(Arc<T>);

impl<T> Shared<T> {
    pub fn new(value: T) -> Self {
        Self(Arc::new(value))
    }
}

impl<T: ?Sized> Shared<T> {
    pub fn from_arc(inner: Arc<T>) -> Self {
        Self(inner)
    }

    pub fn as_arc(&self) -> &Arc<T> {
        &self.0
    }

    pub fn into_arc(self) -> Arc<T> {
        self.0
    }

    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl<T: ?Sized> Clone for Shared<T> {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}

impl<T: ?Sized> Deref for Shared<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T: ?Sized> PartialEq for Shared<T> {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl<T: ?Sized> Eq for Shared<T> {}

impl<T: ?Sized> Hash for Shared<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        Arc::as_ptr(&self.0).cast::<()>().hash(state);
    }
}

impl<T: ?Sized> From<Arc<T>> for Shared<T> {
    fn from(inner: Arc<T>) -> Self {
        Self(inner)
    }
}

impl<T: ?Sized + fmt::Debug> fmt::Debug for Shared<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Shared").field(&&*self.0).finish()
    }
}
