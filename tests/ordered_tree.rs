use ordered_tree::OrderedTree;
use tracing_subscriber::EnvFilter;

/// The keys the tree is usually exercised with, including one duplicate.
const KEYS: [i32; 24] = [
    50, 39, 15, 65, 69, 50, 25, 20, 70, 100, 40, 34, 37, 30, 10, 33, 36, 38, 85, 90, 60, 35, 80,
    89,
];

/// Routes the tree's `tracing` events to the test output. Run with `RUST_LOG=trace` to see them.
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn in_order(tree: &OrderedTree<i32>) -> Vec<i32> {
    let mut keys = Vec::new();
    tree.in_order(|key| keys.push(*key));
    keys
}

fn sorted_unique(keys: &[i32]) -> Vec<i32> {
    let mut keys = keys.to_vec();
    keys.sort_unstable();
    keys.dedup();
    keys
}

fn is_strictly_ascending(keys: &[i32]) -> bool {
    keys.windows(2).all(|pair| pair[0] < pair[1])
}

#[test]
fn building_skips_duplicates() {
    init_tracing();
    let tree: OrderedTree<_> = KEYS.into();

    assert_eq!(tree.len(), 23);
    assert_eq!(in_order(&tree), sorted_unique(&KEYS));
    assert_eq!(tree.validate(), Ok(()));
}

#[test]
fn removing_the_root_with_two_children() {
    init_tracing();
    let mut tree: OrderedTree<_> = KEYS.into();
    let root = tree.root().unwrap().id();

    assert!(tree.remove(&50));

    let keys = in_order(&tree);
    assert!(is_strictly_ascending(&keys));
    assert!(!keys.contains(&50));
    assert_eq!(tree.len(), 22);
    assert_eq!(tree.find(&50), None);

    // The root node takes the key of its successor, 60.
    let new_root = tree.root().unwrap();
    assert_eq!(new_root.id(), root);
    assert_eq!(new_root.key(), &60);
    assert_eq!(tree.validate(), Ok(()));
}

#[test]
fn removing_a_leaf() {
    init_tracing();
    let mut tree: OrderedTree<_> = KEYS.into();
    assert!(tree.find_node(&10).unwrap().is_leaf());

    assert!(tree.remove(&10));

    let mut expected = sorted_unique(&KEYS);
    expected.retain(|key| *key != 10);
    assert_eq!(in_order(&tree), expected);
    assert_eq!(tree.len(), 22);
    assert_eq!(tree.validate(), Ok(()));
}

#[test]
fn removing_a_node_with_only_a_right_child_relinks_its_parent() {
    init_tracing();
    let mut tree: OrderedTree<_> = KEYS.into();

    // 15 has children 10 and 25. Without 10 it only has a right child.
    assert!(tree.remove(&10));
    let fifteen = tree.find_node(&15).unwrap();
    assert!(fifteen.left().is_none());
    let parent = fifteen.parent_id();
    let twenty_five = fifteen.right_id();

    assert!(tree.remove(&15));

    let promoted = tree.find_node(&25).unwrap();
    assert_eq!(Some(promoted.id()), twenty_five);
    assert_eq!(promoted.parent_id(), parent);
    assert_eq!(tree.find_node(&39).unwrap().left_id(), twenty_five);
    assert_eq!(tree.validate(), Ok(()));
}

#[test]
fn missing_keys_and_duplicates_are_no_ops() {
    init_tracing();
    let mut tree: OrderedTree<_> = KEYS.into();
    let mut before = String::new();
    tree.debug_print_level_order(&mut before).unwrap();

    assert!(!tree.insert(65));
    assert!(!tree.remove(&66));
    assert!(!tree.remove(&0));

    let mut after = String::new();
    tree.debug_print_level_order(&mut after).unwrap();
    assert_eq!(before, after);
    assert_eq!(tree.len(), 23);
}

#[test]
fn level_order_of_a_small_tree() {
    init_tracing();
    let tree: OrderedTree<_> = [50, 39, 65].into();

    let mut visited = Vec::new();
    tree.level_order(|node, level| visited.push((*node.key(), level)));

    assert_eq!(visited, [(50, 1), (39, 2), (65, 2)]);
}

#[test]
fn removing_everything_in_insertion_order() {
    init_tracing();
    let mut tree: OrderedTree<_> = KEYS.into();
    let mut expected = sorted_unique(&KEYS);

    for key in KEYS {
        let was_present = expected.contains(&key);
        let len = tree.len();

        assert_eq!(tree.remove(&key), was_present);
        expected.retain(|k| *k != key);

        assert_eq!(tree.find(&key), None);
        assert_eq!(tree.len(), len - usize::from(was_present));
        assert_eq!(in_order(&tree), expected);
        assert_eq!(tree.validate(), Ok(()));

        let mut out = String::new();
        tree.print_level_order(&mut out).unwrap();
        tree.debug_print_level_order(&mut out).unwrap();
    }

    assert!(tree.is_empty());
    assert_eq!(tree.height(), 0);
    assert_eq!(tree.to_string(), "tree::size = 0. contents = { } ");
}

#[test]
fn removing_everything_in_reverse_order() {
    init_tracing();
    let mut tree: OrderedTree<_> = KEYS.into();

    for key in KEYS.iter().rev() {
        tree.remove(key);
        assert_eq!(tree.validate(), Ok(()));
    }

    assert!(tree.is_empty());
    assert_eq!(tree.height(), 0);
}

#[test]
fn clones_are_independent() {
    init_tracing();
    let original: OrderedTree<_> = KEYS.into();
    let mut copy = original.clone();

    assert_eq!(copy.validate(), Ok(()));
    assert_eq!(copy.height(), original.height());
    assert_ne!(copy.root().unwrap().id(), original.root().unwrap().id());

    copy.remove(&50);
    copy.insert(1);

    assert_eq!(original.len(), 23);
    assert!(original.contains(&50));
    assert!(!original.contains(&1));
    assert_eq!(original.validate(), Ok(()));
}

#[test]
fn moving_out_leaves_an_empty_tree() {
    init_tracing();
    let mut tree: OrderedTree<_> = KEYS.into();

    let moved = std::mem::take(&mut tree);

    assert!(tree.is_empty());
    assert_eq!(tree.height(), 0);
    assert_eq!(moved.len(), 23);
    assert_eq!(moved.validate(), Ok(()));
}

#[test]
fn trees_can_cross_threads() {
    init_tracing();
    let tree: OrderedTree<_> = KEYS.into();

    let handle = std::thread::spawn(move || in_order(&tree));

    assert_eq!(handle.join().unwrap(), sorted_unique(&KEYS));
}
