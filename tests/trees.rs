use copse::comparators::Natural;
use copse::trees::{Phase, SearchTree, Side};
use copse::{BinaryTree, Error, GeneralTree, Position, Tree};

/// Elements in inorder.
fn inorder<T: Copy, A>(tree: &BinaryTree<T, A>) -> Vec<T> {
    tree.inorder().map(|position| *tree.element(position).unwrap()).collect()
}

/// Builds
/// ```text
///       4
///     /   \
///    2     6
///   / \   / \
///  1   3 5   7
/// ```
/// and returns the positions indexed by element.
fn full_tree() -> (BinaryTree<i32>, Vec<Position>) {
    let mut tree = BinaryTree::new();
    let four = tree.add_root(4).unwrap();
    let two = tree.add_left(four, 2).unwrap();
    let six = tree.add_right(four, 6).unwrap();
    let one = tree.add_left(two, 1).unwrap();
    let three = tree.add_right(two, 3).unwrap();
    let five = tree.add_left(six, 5).unwrap();
    let seven = tree.add_right(six, 7).unwrap();
    // index 0 is a placeholder
    let positions = vec![four, one, two, three, four, five, six, seven];
    (tree, positions)
}

#[test]
fn foreign_and_deprecated_positions() {
    let (mut tree, p) = full_tree();
    let (other, q) = full_tree();

    assert_eq!(tree.element(q[1]), Err(Error::StructuralMismatch));
    assert_eq!(tree.add_left(q[1], 0), Err(Error::StructuralMismatch));
    assert_eq!(other.element(q[1]), Ok(&1));

    assert_eq!(tree.remove(p[1]), Ok(1));
    assert_eq!(tree.element(p[1]), Err(Error::Deprecated));
    assert_eq!(tree.parent(p[1]), Err(Error::Deprecated));
    // the freed slot is reused, but the old position stays dead
    let fresh = tree.add_left(p[2], 10).unwrap();
    assert_eq!(tree.element(p[1]), Err(Error::Deprecated));
    assert_eq!(tree.element(fresh), Ok(&10));
    assert_ne!(fresh, p[1]);

    tree.clear();
    assert!(tree.is_empty());
    assert_eq!(tree.element(p[4]), Err(Error::Deprecated));
    assert_eq!(tree.root(), None);
}

#[test]
fn structural_errors_leave_tree_untouched() {
    let (mut tree, p) = full_tree();
    assert_eq!(tree.add_root(0), Err(Error::RootExists));
    assert_eq!(tree.add_left(p[2], 0), Err(Error::ChildExists(Side::Left)));
    assert_eq!(tree.add_right(p[6], 0), Err(Error::ChildExists(Side::Right)));
    assert_eq!(tree.remove(p[4]), Err(Error::MultipleChildren));
    assert_eq!(tree.rotate(p[4]), Err(Error::NoParent));
    assert_eq!(tree.restructure(p[4]), Err(Error::NoParent));
    assert_eq!(tree.restructure(p[2]), Err(Error::NoGrandparent));
    assert_eq!(inorder(&tree), vec![1, 2, 3, 4, 5, 6, 7]);
    assert_eq!(tree.len(), 7);
}

#[test]
fn navigation() {
    let (tree, p) = full_tree();
    assert_eq!(tree.root(), Some(p[4]));
    assert_eq!(tree.left(p[4]), Ok(Some(p[2])));
    assert_eq!(tree.right(p[2]), Ok(Some(p[3])));
    assert_eq!(tree.child(p[6], Side::Left), Ok(Some(p[5])));
    assert_eq!(tree.sibling(p[5]), Ok(Some(p[7])));
    assert_eq!(tree.sibling(p[4]), Ok(None));
    assert_eq!(tree.side(p[3]), Ok(Some(Side::Right)));
    assert_eq!(tree.side(p[4]), Ok(None));
    assert_eq!(tree.is_left_child(p[2], p[4]), Ok(true));
    assert_eq!(tree.is_right_child(p[2], p[4]), Ok(false));
    assert_eq!(tree.has_sibling(p[1]), Ok(true));
    assert_eq!(tree.has_left(p[1]), Ok(false));
    assert_eq!(tree.are_equal(p[4], tree.root().unwrap()), Ok(true));

    assert_eq!(tree.depth(p[4]), Ok(0));
    assert_eq!(tree.depth(p[7]), Ok(2));
    assert_eq!(tree.height_of(p[6]), Ok(1));
    assert_eq!(tree.height(), 2);
    assert_eq!(tree.is_leaf(p[1]), Ok(true));
    assert_eq!(tree.is_root(p[4]), Ok(true));
    assert_eq!(tree.children(p[2]), Ok(vec![p[1], p[3]]));
    assert_eq!(BinaryTree::<i32>::new().height(), 0);
}

#[test]
fn remove_splices_the_child() {
    let mut tree = BinaryTree::new();
    let root = tree.add_root(1).unwrap();
    let child = tree.add_right(root, 2).unwrap();
    let grandchild = tree.add_left(child, 3).unwrap();

    assert_eq!(tree.remove(child), Ok(2));
    assert_eq!(tree.right(root), Ok(Some(grandchild)));
    assert_eq!(tree.parent(grandchild), Ok(Some(root)));

    assert_eq!(tree.remove(root), Ok(1));
    assert_eq!(tree.root(), Some(grandchild));
    assert_eq!(tree.parent(grandchild), Ok(None));
    assert_eq!(tree.len(), 1);
}

#[test]
fn rotation_inverse_pair() {
    let (mut tree, p) = full_tree();
    tree.rotate(p[2]).unwrap();
    assert_eq!(tree.root(), Some(p[2]));
    assert_eq!(tree.right(p[2]), Ok(Some(p[4])));
    assert_eq!(tree.left(p[4]), Ok(Some(p[3])));
    assert_eq!(tree.parent(p[3]), Ok(Some(p[4])));
    assert_eq!(inorder(&tree), vec![1, 2, 3, 4, 5, 6, 7]);

    // rotating the former parent, now the right child, restores the shape
    tree.rotate(p[4]).unwrap();
    assert_eq!(tree.root(), Some(p[4]));
    assert_eq!(tree.left(p[4]), Ok(Some(p[2])));
    assert_eq!(tree.left(p[2]), Ok(Some(p[1])));
    assert_eq!(tree.right(p[2]), Ok(Some(p[3])));
    assert_eq!(tree.right(p[4]), Ok(Some(p[6])));
    assert_eq!(tree.parent(p[2]), Ok(Some(p[4])));
}

#[test]
fn rotation_below_the_root() {
    let (mut tree, p) = full_tree();
    tree.rotate(p[7]).unwrap();
    assert_eq!(tree.right(p[4]), Ok(Some(p[7])));
    assert_eq!(tree.left(p[7]), Ok(Some(p[6])));
    assert_eq!(tree.parent(p[7]), Ok(Some(p[4])));
    assert_eq!(tree.right(p[6]), Ok(None));
    assert_eq!(inorder(&tree), vec![1, 2, 3, 4, 5, 6, 7]);
}

#[test]
fn restructure_straight_shape() {
    // 3 -> 2 -> 1, all left children
    let mut tree = BinaryTree::new();
    let z = tree.add_root(3).unwrap();
    let y = tree.add_left(z, 2).unwrap();
    let x = tree.add_left(y, 1).unwrap();

    assert_eq!(tree.restructure(x), Ok(y));
    assert_eq!(tree.root(), Some(y));
    assert_eq!(tree.left(y), Ok(Some(x)));
    assert_eq!(tree.right(y), Ok(Some(z)));
    assert_eq!(inorder(&tree), vec![1, 2, 3]);
}

#[test]
fn restructure_bent_shape() {
    // 1 -> 3 -> 2: right child, then left child
    let mut tree = BinaryTree::new();
    let z = tree.add_root(1).unwrap();
    let y = tree.add_right(z, 3).unwrap();
    let x = tree.add_left(y, 2).unwrap();

    assert_eq!(tree.restructure(x), Ok(x));
    assert_eq!(tree.root(), Some(x));
    assert_eq!(tree.left(x), Ok(Some(z)));
    assert_eq!(tree.right(x), Ok(Some(y)));
    assert_eq!(tree.parent(z), Ok(Some(x)));
    assert_eq!(inorder(&tree), vec![1, 2, 3]);
}

#[test]
fn restructure_keeps_subtrees_in_order() {
    let (mut tree, p) = full_tree();
    let eight = tree.add_right(p[7], 8).unwrap();
    // straight shape under the root: 4 -> 6 -> 7
    assert_eq!(tree.restructure(p[7]), Ok(p[6]));
    assert_eq!(tree.root(), Some(p[6]));
    assert_eq!(tree.right(p[4]), Ok(Some(p[5])));
    assert_eq!(tree.right(p[7]), Ok(Some(eight)));
    assert_eq!(inorder(&tree), vec![1, 2, 3, 4, 5, 6, 7, 8]);
}

#[test]
fn alg_data_and_swaps() {
    let mut tree: BinaryTree<char, u32> = BinaryTree::default();
    let root = tree.add_root_with_alg_data('a', 7).unwrap();
    let left = tree.add_child(root, Side::Left, 'b').unwrap();
    assert_eq!(tree.alg_data(left), Ok(&0));
    *tree.alg_data_mut(left).unwrap() = 3;

    tree.swap_elements(root, left).unwrap();
    assert_eq!(tree.entry(root), Ok((&'b', &7)));
    assert_eq!(tree.entry(left), Ok((&'a', &3)));

    assert_eq!(tree.replace(root, 'c'), Ok('b'));
    assert_eq!(tree.remove_with_alg_data(left), Ok(('a', 3)));
}

#[test]
fn attach_moves_a_whole_tree() {
    let (mut tree, p) = full_tree();
    let (other, q) = full_tree();
    let mut leaf = BinaryTree::new();
    leaf.add_root(0).unwrap();

    assert_eq!(tree.attach(p[1], Side::Left, leaf), Ok(()));
    tree.attach(p[7], Side::Right, other).unwrap();
    assert_eq!(tree.len(), 15);
    assert_eq!(
        inorder(&tree),
        vec![0, 1, 2, 3, 4, 5, 6, 7, 1, 2, 3, 4, 5, 6, 7]
    );
    // positions of the consumed tree are not valid here
    assert_eq!(tree.element(q[4]), Err(Error::StructuralMismatch));
    assert_eq!(tree.height(), 5);
}

#[test]
fn traversal_orders() {
    let (tree, _) = full_tree();
    let elements = |order: Vec<Position>| -> Vec<i32> {
        order.into_iter().map(|p| *tree.element(p).unwrap()).collect()
    };
    assert_eq!(elements(tree.preorder().collect()), vec![4, 2, 1, 3, 6, 5, 7]);
    assert_eq!(elements(tree.inorder().collect()), vec![1, 2, 3, 4, 5, 6, 7]);
    assert_eq!(elements(tree.postorder().collect()), vec![1, 3, 2, 5, 7, 6, 4]);
    assert_eq!(BinaryTree::<i32>::new().preorder().count(), 0);
}

#[test]
fn inorder_respects_lone_right_children() {
    let mut tree = BinaryTree::new();
    let root = tree.add_root(1).unwrap();
    let right = tree.add_right(root, 3).unwrap();
    tree.add_left(right, 2).unwrap();
    assert_eq!(inorder(&tree), vec![1, 2, 3]);
}

#[test]
fn euler_tour_computes_subtree_sums() {
    let (tree, _) = full_tree();
    let sum = tree.euler_tour(|visit| -> i32 {
        let below: i32 = visit.results.iter().flatten().sum();
        below + visit.element
    });
    assert_eq!(sum, Some(28));

    let mut log = vec![];
    tree.euler_tour(|visit| {
        log.push((*visit.element, visit.phase, visit.depth, visit.path.to_vec()));
    });
    let phases: Vec<_> = log
        .iter()
        .filter(|(element, ..)| *element == 2)
        .map(|(_, phase, depth, path)| (*phase, *depth, path.clone()))
        .collect();
    assert_eq!(
        phases,
        vec![
            (Phase::Pre, 1, vec![0]),
            (Phase::In, 1, vec![0]),
            (Phase::Post, 1, vec![0]),
        ]
    );
    let inorder_from_tour: Vec<i32> = log
        .iter()
        .filter(|(_, phase, ..)| *phase == Phase::In)
        .map(|(element, ..)| *element)
        .collect();
    assert_eq!(inorder_from_tour, vec![1, 2, 3, 4, 5, 6, 7]);
    assert_eq!(BinaryTree::<i32>::new().euler_tour(|_| ()), None);
}

#[test]
fn general_tree() {
    let mut tree = GeneralTree::new();
    let root = tree.add_root("root").unwrap();
    let a = tree.add_child(root, "a").unwrap();
    let b = tree.add_child(root, "b").unwrap();
    let c = tree.add_child(root, "c").unwrap();
    let a1 = tree.add_child(a, "a1").unwrap();

    let names = |tree: &GeneralTree<&'static str>, order: Vec<Position>| -> Vec<&'static str> {
        order.into_iter().map(|p| *tree.element(p).unwrap()).collect()
    };
    assert_eq!(names(&tree, tree.preorder().collect()), vec!["root", "a", "a1", "b", "c"]);
    assert_eq!(names(&tree, tree.postorder().collect()), vec!["a1", "a", "b", "c", "root"]);
    assert_eq!(names(&tree, tree.inorder().collect()), vec!["a1", "a", "root", "b", "c"]);
    assert_eq!(tree.children(root), Ok(vec![a, b, c]));
    assert_eq!(tree.depth(a1), Ok(2));
    assert_eq!(tree.height(), 2);

    assert_eq!(tree.remove(root), Err(Error::MultipleChildren));
    assert_eq!(tree.remove(a), Ok("a"));
    assert_eq!(tree.children(root), Ok(vec![a1, b, c]));
    assert_eq!(tree.parent(a1), Ok(Some(root)));
    assert_eq!(tree.element(a), Err(Error::Deprecated));

    let mut branch = GeneralTree::new();
    let top = branch.add_root("d").unwrap();
    branch.add_child(top, "d1").unwrap();
    tree.attach(c, vec![branch]).unwrap();
    assert_eq!(tree.len(), 6);
    assert_eq!(names(&tree, tree.preorder().collect()), vec!["root", "a1", "b", "c", "d", "d1"]);

    let leaf_count = tree.euler_tour(|visit| -> usize {
        if visit.results.is_empty() {
            1
        } else {
            visit.results.iter().flatten().sum()
        }
    });
    assert_eq!(leaf_count, Some(3));
}

#[test]
fn search_tree_navigation() {
    let mut search: SearchTree<(i32, ()), (), _> = SearchTree::new(Natural);
    {
        let tree = search.tree_mut();
        let root = tree.add_root((40, ())).unwrap();
        let left = tree.add_left(root, (20, ())).unwrap();
        tree.add_right(root, (60, ())).unwrap();
        tree.add_left(left, (10, ())).unwrap();
        tree.add_right(left, (30, ())).unwrap();
    }
    let key = |position: Option<Position>| position.map(|p| search.tree().element(p).unwrap().0);

    assert_eq!(key(search.find(&30)), Some(30));
    assert_eq!(key(search.find(&35)), None);
    // a miss returns the would-be parent
    assert_eq!(key(search.search(&35)), Some(30));
    assert_eq!(key(search.search(&70)), Some(60));
    assert_eq!(key(search.first()), Some(10));
    assert_eq!(key(search.last()), Some(60));

    let thirty = search.find(&30).unwrap();
    let forty = search.find(&40).unwrap();
    assert_eq!(key(search.after(thirty).unwrap()), Some(40));
    assert_eq!(key(search.before(forty).unwrap()), Some(30));
    assert_eq!(key(search.after(search.last().unwrap()).unwrap()), None);

    let twenty = search.find(&20).unwrap();
    assert_eq!(key(Some(search.first_in(twenty).unwrap())), Some(10));
    assert_eq!(key(Some(search.last_in(twenty).unwrap())), Some(30));
    assert_eq!(key(Some(search.search_from(&25, twenty).unwrap())), Some(30));

    let descending: Vec<i32> = search
        .iterate(|s, p| s.before(p), search.last())
        .map(|p| search.tree().element(p).unwrap().0)
        .collect();
    assert_eq!(descending, vec![60, 40, 30, 20, 10]);

    // a failing step ends the sequence
    let stopped: Vec<Position> = search
        .iterate(|_, _| Err(Error::Deprecated), search.first())
        .collect();
    assert_eq!(stopped, vec![search.first().unwrap()]);
}
