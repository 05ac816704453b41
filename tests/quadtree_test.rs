use spatio_quadtree::{Point, QuadTree, QuadTreeBuilder, Rect};
use std::rc::Rc;
use std::sync::Arc;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Test 1: The reference scenario from a 100x100 world
#[test]
fn test_basic_scenario() {
    init_logging();
    let (a, b, c) = ("a", "b", "c");
    let mut tree = QuadTree::with_bounds(0.0, 0.0, 100.0, 100.0, 4, 2).expect("create");

    tree.insert(1.0, 1.0, a).unwrap();
    tree.insert(2.0, 2.0, b).unwrap();
    assert_eq!(tree.stats().node_count, 1);
    tree.insert(3.0, 3.0, c).unwrap();
    assert!(tree.stats().node_count > 1, "root should have split");

    assert_eq!(tree.walk(|_, _, _| {}), 3);
    assert_eq!(tree.find(&Rect::new(0.0, 0.0, 10.0, 10.0), |_, _, _| {}), 3);
    assert_eq!(tree.find(&Rect::new(60.0, 60.0, 10.0, 10.0), |_, _, _| {}), 0);

    assert_eq!(tree.remove_payload(0.0, 0.0, &b), 1);
    assert_eq!(tree.walk(|_, _, _| {}), 2);
    tree.validate().unwrap();
}

/// Test 2: Removing one of two payloads at the same point
#[test]
fn test_identity_removal_keeps_other_payload() {
    init_logging();
    let first = Arc::new(String::from("unit"));
    let second = Arc::new(String::from("unit"));
    let mut tree = QuadTree::with_bounds(0.0, 0.0, 10.0, 10.0, 3, 4).unwrap();

    tree.insert(4.0, 4.0, Arc::clone(&first)).unwrap();
    tree.insert(4.0, 4.0, Arc::clone(&second)).unwrap();

    // equal contents, different identity
    assert_eq!(tree.remove_payload(4.0, 4.0, &first), 1);

    let mut found = Vec::new();
    tree.find(&Rect::new(4.0, 4.0, 0.0, 0.0), |x, y, payload| {
        found.push((x, y, Arc::clone(payload)))
    });
    assert_eq!(found.len(), 1);
    assert!(Arc::ptr_eq(&found[0].2, &second));
    assert_eq!(tree.walk(|_, _, _| {}), 1);
}

/// Test 3: A payload inserted twice is removed twice
#[test]
fn test_duplicate_payload_removed_together() {
    let shared = Rc::new(42);
    let mut tree = QuadTree::with_bounds(0.0, 0.0, 10.0, 10.0, 3, 1).unwrap();

    tree.insert(7.0, 7.0, Rc::clone(&shared)).unwrap();
    tree.insert(7.0, 7.0, Rc::clone(&shared)).unwrap();
    assert_eq!(tree.len(), 2);

    assert_eq!(tree.remove_payload(7.0, 7.0, &shared), 2);
    assert!(tree.is_empty());
    assert_eq!(tree.remove_payload(7.0, 7.0, &shared), 0);

    // the leaves stay around after being emptied
    assert!(tree.stats().node_count > 1);
    assert_eq!(Rc::strong_count(&shared), 1);
}

/// Test 4: Walk counts follow inserts and removals
#[test]
fn test_count_invariant() {
    let mut tree = QuadTree::with_bounds(-1000.0, -1000.0, 2000.0, 2000.0, 6, 4).unwrap();
    let mut points = Vec::new();

    for id in 0..500u64 {
        let x = ((id * 37) % 2000) as f64 - 1000.0;
        let y = ((id * 91) % 2000) as f64 - 1000.0;
        tree.insert(x, y, id).unwrap();
        points.push((x, y, id));
    }
    assert_eq!(tree.walk(|_, _, _| {}), 500);

    let mut removed = 0;
    for (x, y, id) in points.iter().filter(|(_, _, id)| id % 5 == 0) {
        removed += tree.remove_payload(*x, *y, id);
    }
    assert_eq!(removed, 100);
    assert_eq!(tree.walk(|_, _, _| {}), 400);
    assert_eq!(tree.stats().point_count, 400);
    tree.validate().unwrap();
}

/// Test 5: Read-only operations give identical answers twice
#[test]
fn test_find_and_walk_are_idempotent() {
    let mut tree = QuadTree::with_bounds(0.0, 0.0, 64.0, 64.0, 5, 3).unwrap();
    for i in 0..64u32 {
        tree.insert(f64::from(i), f64::from((i * 17) % 64), i).unwrap();
    }

    let query = Rect::new(10.0, 5.0, 30.0, 40.0);
    let run_find = |tree: &QuadTree<u32>| {
        let mut seen = Vec::new();
        let count = tree.find(&query, |x, y, p| seen.push((x, y, *p)));
        (count, seen)
    };
    let run_walk = |tree: &QuadTree<u32>| {
        let mut seen = Vec::new();
        let count = tree.walk(|x, y, p| seen.push((x, y, *p)));
        (count, seen)
    };

    assert_eq!(run_find(&tree), run_find(&tree));
    assert_eq!(run_walk(&tree), run_walk(&tree));
}

/// Test 6: Leaves at the maximum level hold any number of points
#[test]
fn test_depth_bound() {
    let mut tree = QuadTreeBuilder::new()
        .bounds(Rect::new(0.0, 0.0, 1.0, 1.0))
        .max_levels(3)
        .max_points_per_node(2)
        .build()
        .unwrap();

    for i in 0..1000u32 {
        tree.insert(0.25, 0.25, i).unwrap();
    }

    let stats = tree.stats();
    assert_eq!(stats.max_depth, 3);
    assert_eq!(stats.point_count, 1000);
    assert_eq!(tree.count(&Rect::new(0.25, 0.25, 0.0, 0.0)), 1000);
    tree.validate().unwrap();
}

/// Test 7: Points on shared edges are found from every side
#[test]
fn test_boundary_points() {
    let mut tree = QuadTree::with_bounds(0.0, 0.0, 100.0, 100.0, 4, 1).unwrap();
    let corners = [(0.0, 0.0), (100.0, 0.0), (0.0, 100.0), (100.0, 100.0), (50.0, 50.0)];
    for (i, (x, y)) in corners.iter().enumerate() {
        tree.insert(*x, *y, i).unwrap();
    }

    // the center sits on the edge of all four quadrants
    assert_eq!(tree.count(&Rect::new(50.0, 50.0, 50.0, 50.0)), 2);
    assert_eq!(tree.count(&Rect::new(0.0, 0.0, 50.0, 50.0)), 2);
    assert_eq!(tree.count(&Rect::new(50.0, 0.0, 50.0, 50.0)), 2);
    assert_eq!(tree.count(&Rect::new(0.0, 50.0, 50.0, 50.0)), 2);

    // every corner can be removed through its own point
    for (i, (x, y)) in corners.iter().enumerate() {
        assert_eq!(tree.remove_payload(*x, *y, &i), 1, "corner {}", i);
    }
    assert!(tree.is_empty());
}

/// Test 8: Iteration yields the same sequence as walk
#[test]
fn test_iter_matches_walk() {
    let mut tree = QuadTree::with_bounds(0.0, 0.0, 10.0, 10.0, 4, 2).unwrap();
    for i in 0..30u32 {
        let f = f64::from(i);
        tree.insert((f * 1.3) % 10.0, (f * 2.9) % 10.0, i).unwrap();
    }

    let mut walked = Vec::new();
    tree.walk(|x, y, p| walked.push((Point::new(x, y), *p)));
    let iterated: Vec<(Point, u32)> = tree.iter().map(|(point, p)| (point, *p)).collect();
    assert_eq!(walked, iterated);
}

/// Test 9: Many independent trees coexist
#[test]
fn test_independent_instances() {
    let mut left = QuadTree::with_bounds(0.0, 0.0, 10.0, 10.0, 2, 1).unwrap();
    let mut right = QuadTree::with_bounds(0.0, 0.0, 10.0, 10.0, 2, 1).unwrap();

    left.insert(1.0, 1.0, 1u8).unwrap();
    right.insert(9.0, 9.0, 2u8).unwrap();
    right.insert(8.0, 8.0, 3u8).unwrap();

    assert_eq!(left.len(), 1);
    assert_eq!(right.len(), 2);
    drop(left);
    assert_eq!(right.count(&Rect::new(0.0, 0.0, 10.0, 10.0)), 2);
}
