use std::collections::{HashSet, VecDeque};
use std::iter::FusedIterator;

/// Capability contract for tree-shaped data.
///
/// The tree itself is owned by the caller and may be backed by owned children,
/// reference counting, or an arena; the traversals only need a data accessor
/// and an ordered list of child references. Node identity is reference
/// identity: two children are the same node exactly when they are the same
/// allocation. Sharing a node between branches, or closing a cycle, is
/// allowed (see [`depth_first`] and [`breadth_first`] for how each walk
/// handles that).
pub trait TreeNode {
    type Data;

    fn data(&self) -> &Self::Data;

    /// Ordered child references. An absent child collection is represented as
    /// an empty vec.
    fn children(&self) -> Vec<&Self>;
}

/// Depth-first (pre-order) traversal of the tree rooted at `root`, yielding a
/// reference to each node's data.
///
/// The walk keeps an explicit stack instead of recursing, so arbitrarily deep
/// trees cannot overflow the call stack. Every distinct reachable node is
/// emitted exactly once: nodes reachable through several parents, or through
/// a cycle, are skipped when popped a second time. Children of one node are
/// visited in their original order.
pub fn depth_first<N: TreeNode>(root: &N) -> DepthFirst<'_, N> {
    DepthFirst {
        stack: vec![root],
        emitted: HashSet::new(),
    }
}

/// Breadth-first (level-order) traversal of the tree rooted at `root`,
/// yielding a reference to each node's data.
///
/// The input must be acyclic: this walk keeps no visited set, so a cycle (or
/// a node shared between branches) is re-entered every time it is reached and
/// the iterator will not terminate on cyclic input. Callers holding
/// possibly-cyclic structures should use [`depth_first`] or validate the
/// shape up front.
pub fn breadth_first<N: TreeNode>(root: &N) -> BreadthFirst<'_, N> {
    let mut queue = VecDeque::new();
    queue.push_back(root);
    BreadthFirst { queue }
}

/// Iterator returned by [`depth_first`].
pub struct DepthFirst<'a, N> {
    stack: Vec<&'a N>,
    emitted: HashSet<*const N>,
}

impl<'a, N: TreeNode> Iterator for DepthFirst<'a, N> {
    type Item = &'a N::Data;

    fn next(&mut self) -> Option<&'a N::Data> {
        // A node queued through two parents sits on the stack twice; the
        // emitted check on pop keeps it to a single emission.
        while let Some(node) = self.stack.pop() {
            if !self.emitted.insert(node as *const N) {
                continue;
            }
            // Push in reverse child order: the stack flips the order back, so
            // children come out left to right.
            for child in node.children().into_iter().rev() {
                if !self.emitted.contains(&(child as *const N)) {
                    self.stack.push(child);
                }
            }
            return Some(node.data());
        }
        None
    }
}

impl<'a, N: TreeNode> FusedIterator for DepthFirst<'a, N> {}

/// Iterator returned by [`breadth_first`].
pub struct BreadthFirst<'a, N> {
    queue: VecDeque<&'a N>,
}

impl<'a, N: TreeNode> Iterator for BreadthFirst<'a, N> {
    type Item = &'a N::Data;

    fn next(&mut self) -> Option<&'a N::Data> {
        let node = self.queue.pop_front()?;
        self.queue.extend(node.children());
        Some(node.data())
    }
}

impl<'a, N: TreeNode> FusedIterator for BreadthFirst<'a, N> {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::OnceCell;
    use std::rc::Rc;

    struct Node {
        data: u32,
        children: OnceCell<Vec<Rc<Node>>>,
    }

    impl TreeNode for Node {
        type Data = u32;

        fn data(&self) -> &u32 {
            &self.data
        }

        fn children(&self) -> Vec<&Self> {
            self.children
                .get()
                .map(|children| children.iter().map(|child| child.as_ref()).collect())
                .unwrap_or_default()
        }
    }

    fn node(data: u32, children: Vec<Rc<Node>>) -> Rc<Node> {
        Rc::new(Node {
            data,
            children: OnceCell::from(children),
        })
    }

    // Child collection left unset, the "absent" case.
    fn leaf(data: u32) -> Rc<Node> {
        Rc::new(Node {
            data,
            children: OnceCell::new(),
        })
    }

    fn depth_order(root: &Node) -> Vec<u32> {
        depth_first(root).copied().collect()
    }

    fn breadth_order(root: &Node) -> Vec<u32> {
        breadth_first(root).copied().collect()
    }

    #[test]
    fn depth_first_on_example_tree() {
        //        1
        //      / | \
        //     2  6  7
        //    / \     \
        //   3   4     8
        //       |
        //       5
        let root = node(
            1,
            vec![
                node(2, vec![leaf(3), node(4, vec![leaf(5)])]),
                leaf(6),
                node(7, vec![leaf(8)]),
            ],
        );
        assert_eq!(depth_order(&root), [1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn breadth_first_on_example_tree() {
        //        1
        //      / | \
        //     2  3  4
        //    / \     \
        //   5   6     7
        let root = node(
            1,
            vec![
                node(2, vec![leaf(5), leaf(6)]),
                leaf(3),
                node(4, vec![leaf(7)]),
            ],
        );
        assert_eq!(breadth_order(&root), [1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn single_node_tree() {
        let root = leaf(42);
        assert_eq!(depth_order(&root), [42]);
        assert_eq!(breadth_order(&root), [42]);
    }

    #[test]
    fn depth_first_emits_shared_node_once() {
        // 1 -> {2, 3}, with 4 a child of both 2 and 3
        let shared = leaf(4);
        let root = node(
            1,
            vec![node(2, vec![shared.clone()]), node(3, vec![shared.clone()])],
        );
        assert_eq!(depth_order(&root), [1, 2, 4, 3]);
    }

    #[test]
    fn depth_first_handles_node_queued_twice() {
        // 3 is a child of both 1 and 2, and 2 is expanded while 3 is still
        // pending on the stack, so 3 is queued twice before its first pop.
        let twice = leaf(3);
        let root = node(1, vec![node(2, vec![twice.clone()]), twice.clone()]);
        assert_eq!(depth_order(&root), [1, 2, 3]);
    }

    #[test]
    fn depth_first_terminates_on_cycle() {
        // 1 -> 2 -> 1
        let root = Rc::new(Node {
            data: 1,
            children: OnceCell::new(),
        });
        let back = node(2, vec![root.clone()]);
        assert!(root.children.set(vec![back]).is_ok());

        assert_eq!(depth_order(&root), [1, 2]);
    }

    #[test]
    fn traversals_cover_every_node_exactly_once() {
        let root = node(
            1,
            vec![
                node(2, vec![leaf(5), leaf(6)]),
                leaf(3),
                node(4, vec![node(7, vec![leaf(8)])]),
            ],
        );

        let mut depth = depth_order(&root);
        let mut breadth = breadth_order(&root);
        depth.sort_unstable();
        breadth.sort_unstable();
        assert_eq!(depth, (1..=8).collect::<Vec<_>>());
        assert_eq!(breadth, (1..=8).collect::<Vec<_>>());
    }
}
