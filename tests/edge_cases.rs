use gridmap::prelude::*;
use gridmap::{GridMapError, MapStats, RectError};

#[test]
fn test_remove_on_empty_map() {
    let mut map: SpatialMap<String, i64> = SpatialMap::new();
    for _ in 0..5 {
        assert!(map.remove(Coord::new(0, 0)).is_none());
    }
    assert!(map.is_empty());
    assert_eq!(map.stats(), MapStats::default());
}

#[test]
fn test_remove_from_existing_column_missing_row() {
    let mut map: SpatialMap<u8, i32> = SpatialMap::new();
    map.set(Coord::new(4, 1), 1);
    assert!(map.remove(Coord::new(4, 2)).is_none());
    assert_eq!(map.get(Coord::new(4, 1)), Some(&1));
    assert_eq!(map.column_count(), 1);
}

#[test]
fn test_extreme_integer_coordinates() -> gridmap::Result<()> {
    let mut map: SpatialMap<&str, i32> = SpatialMap::new();
    map.set(Coord::new(i32::MIN, i32::MIN), "sw");
    map.set(Coord::new(i32::MAX, i32::MAX), "ne");

    assert_eq!(map.get(Coord::new(i32::MIN, i32::MIN)), Some(&"sw"));
    assert_eq!(map.get(Coord::new(i32::MAX, i32::MAX)), Some(&"ne"));

    // Half-open excludes the max edge, so i32::MAX is out of reach.
    let whole = Rect::from_corners(
        Coord::new(i32::MIN, i32::MIN),
        Coord::new(i32::MAX, i32::MAX),
    )?;
    let found = map.objects_within_rect(whole);
    assert_eq!(found.len(), 1);
    assert!(found.contains(&"sw"));

    let mut closed: SpatialMap<&str, i32> =
        MapBuilder::new().containment(Containment::Closed).build()?;
    closed.extend(map.iter().map(|(c, v)| (c, *v)));
    assert_eq!(closed.objects_within_rect(whole).len(), 2);
    Ok(())
}

#[test]
fn test_rect_past_integer_max_is_rejected_not_truncated() -> gridmap::Result<()> {
    let mut map: SpatialMap<&str, i32> = SpatialMap::new();
    map.set(Coord::new(i32::MAX, 0), "edge");

    let overflowing = Rect::new(Coord::new(i32::MAX - 1, 0), 5, 5);
    assert!(matches!(overflowing, Err(RectError::Overflow { .. })));

    let lookup = |w: i32| -> gridmap::Result<usize> {
        Ok(map
            .objects_within_rect(Rect::new(Coord::new(i32::MAX - 1, 0), w, 5)?)
            .len())
    };
    assert!(matches!(lookup(5), Err(GridMapError::InvalidRect(_))));

    // Reaching the maximum column takes corners plus closed containment.
    let mut closed: SpatialMap<&str, i32> =
        MapBuilder::new().containment(Containment::Closed).build()?;
    closed.extend(map.iter().map(|(c, v)| (c, *v)));
    let corners = Rect::from_corners(Coord::new(i32::MAX - 1, 0), Coord::new(i32::MAX, 5))?;
    assert!(closed.objects_within_rect(corners).contains(&"edge"));
    Ok(())
}

#[test]
fn test_unbounded_float_rect() -> gridmap::Result<()> {
    let mut map: SpatialMap<u32> = SpatialMap::new();
    map.set(Coord::new(-1e12, 3.0), 1);
    map.set(Coord::new(1e12, -3.0), 2);
    map.set(Coord::new(f64::INFINITY, 0.0), 3);

    let everything = Rect::new(
        Coord::new(f64::NEG_INFINITY, f64::NEG_INFINITY),
        f64::INFINITY,
        f64::INFINITY,
    )?;
    // +inf is the excluded upper edge under half-open containment
    assert_eq!(map.objects_within_rect(everything).len(), 2);
    Ok(())
}

#[test]
fn test_close_floats_are_separate_cells() {
    let mut map: SpatialMap<&str> = SpatialMap::new();
    map.set(Coord::new(0.1 + 0.2, 0.0), "sum");
    map.set(Coord::new(0.3, 0.0), "literal");
    assert_eq!(map.len(), 2);
    assert_eq!(map.get(Coord::new(0.3, 0.0)), Some(&"literal"));
}

#[test]
fn test_nan_location_roundtrip() {
    let mut map: SpatialMap<&str> = SpatialMap::new();
    map.set(Coord::new(1.0, f64::NAN), "lost");
    assert_eq!(map.get(Coord::new(1.0, f64::NAN)), Some(&"lost"));
    assert_eq!(map.remove(Coord::new(1.0, f64::NAN)), Some("lost"));
    assert!(map.is_empty());
}

#[test]
fn test_placeholder_columns_do_not_leak_into_queries() -> gridmap::Result<()> {
    let mut map: SpatialMap<u16, u32> = MapBuilder::new().prune_empty_columns(false).build()?;
    for x in 0..20 {
        map.set(Coord::new(x, 0), x as u16);
    }
    for x in 0..20 {
        map.remove(Coord::new(x, 0));
    }

    let stats = map.stats();
    assert_eq!(stats.entries, 0);
    assert_eq!(stats.columns, 20);
    assert_eq!(stats.empty_columns, 20);

    let (found, trace) = map.objects_within_rect_traced(Rect::new(Coord::new(0, 0), 100, 100)?);
    assert!(found.is_empty());
    assert_eq!(trace.columns_visited, 20);
    assert_eq!(trace.cells_visited, 0);

    map.set(Coord::new(5, 5), 55);
    assert_eq!(map.column_count(), 20);
    assert_eq!(map.get(Coord::new(5, 5)), Some(&55));
    Ok(())
}

#[test]
fn test_entries_within_rect_reports_coordinates() -> gridmap::Result<()> {
    let mut map: SpatialMap<char, i32> = SpatialMap::new();
    map.set(Coord::new(1, 2), 'a');
    map.set(Coord::new(1, 3), 'a');
    map.set(Coord::new(8, 8), 'z');

    let mut hits: Vec<(i32, i32)> = map
        .entries_within_rect(Rect::new(Coord::new(0, 0), 5, 5)?)
        .map(|(c, _)| c.into())
        .collect();
    hits.sort();
    assert_eq!(hits, vec![(1, 2), (1, 3)]);
    Ok(())
}

#[test]
fn test_map_is_send_and_sync_for_plain_values() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<SpatialMap<String, i32>>();
    assert_send_sync::<SpatialMap<Shared<Vec<u8>>>>();
}
