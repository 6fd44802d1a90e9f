use core::cmp::Ordering;
use core::fmt;
use core::mem;

use allocator_api2::alloc::Allocator;
use allocator_api2::boxed::Box;

use crate::common::cmp_keys;
use crate::entry::Entry;

pub(crate) type Link<A> = Option<Box<TreeNode<A>, A>>;
type NodeBox<A> = Box<TreeNode<A>, A>;

pub(crate) struct TreeNode<A: Allocator> {
    pub(super) entry: Entry,
    pub(super) height: usize,
    pub(super) left: Link<A>,
    pub(super) right: Link<A>,
}

impl<A: Allocator> fmt::Debug for TreeNode<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TreeNode")
            .field("key", &self.entry.key())
            .field("height", &self.height)
            .field("left", &self.left.as_deref())
            .field("right", &self.right.as_deref())
            .finish()
    }
}

/// Which way an insert went at a node.
///
/// The caller one level up uses its child's placement to tell the
/// left-left case from the left-right case (and the mirrored pair).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Placement {
    Duplicate,
    Leaf,
    Left,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Rotation {
    Right,
    LeftRight,
    Left,
    RightLeft,
}

impl<A: Allocator> TreeNode<A> {
    fn leaf(entry: Entry) -> Self {
        Self {
            entry,
            height: 1,
            left: None,
            right: None,
        }
    }

    /// Height of the left subtree minus height of the right subtree.
    pub(super) fn balance(&self) -> isize {
        height(&self.left) as isize - height(&self.right) as isize
    }

    fn fix_height(&mut self) {
        self.height = 1 + height(&self.left).max(height(&self.right));
    }
}

pub(crate) fn height<A: Allocator>(link: &Link<A>) -> usize {
    link.as_ref().map_or(0, |node| node.height)
}

fn rotate_right<A: Allocator>(mut node: NodeBox<A>) -> NodeBox<A> {
    let mut pivot = node
        .left
        .take()
        .expect("right rotation requires a left child");
    node.left = pivot.right.take();
    node.fix_height();
    pivot.right = Some(node);
    pivot.fix_height();
    pivot
}

fn rotate_left<A: Allocator>(mut node: NodeBox<A>) -> NodeBox<A> {
    let mut pivot = node
        .right
        .take()
        .expect("left rotation requires a right child");
    node.right = pivot.left.take();
    node.fix_height();
    pivot.left = Some(node);
    pivot.fix_height();
    pivot
}

fn rotate<A: Allocator>(mut node: NodeBox<A>, rotation: Rotation) -> NodeBox<A> {
    tracing::trace!(key = %node.entry.key(), ?rotation, "rebalancing");
    match rotation {
        Rotation::Right => rotate_right(node),
        Rotation::Left => rotate_left(node),
        Rotation::LeftRight => {
            node.left = node.left.take().map(rotate_left);
            rotate_right(node)
        }
        Rotation::RightLeft => {
            node.right = node.right.take().map(rotate_right);
            rotate_left(node)
        }
    }
}

fn rebalance<A: Allocator>(
    mut node: NodeBox<A>,
    choose: impl FnOnce(&TreeNode<A>, isize) -> Rotation,
) -> NodeBox<A> {
    node.fix_height();
    let balance = node.balance();
    let node = if balance > 1 || balance < -1 {
        let rotation = choose(&*node, balance);
        rotate(node, rotation)
    } else {
        node
    };
    debug_assert!(
        node.balance().abs() <= 1,
        "balance factor {} out of range at {:?}",
        node.balance(),
        node.entry.key()
    );
    node
}

fn rebalance_after_insert<A: Allocator>(node: NodeBox<A>, below: Placement) -> NodeBox<A> {
    rebalance(node, |_, balance| match (balance > 1, below) {
        (true, Placement::Right) => Rotation::LeftRight,
        (true, _) => Rotation::Right,
        (false, Placement::Left) => Rotation::RightLeft,
        (false, _) => Rotation::Left,
    })
}

fn rebalance_after_remove<A: Allocator>(node: NodeBox<A>) -> NodeBox<A> {
    rebalance(node, |node, balance| {
        if balance > 1 {
            let left = node.left.as_ref().map_or(0, |l| l.balance());
            if left >= 0 {
                Rotation::Right
            } else {
                Rotation::LeftRight
            }
        } else {
            let right = node.right.as_ref().map_or(0, |r| r.balance());
            if right <= 0 {
                Rotation::Left
            } else {
                Rotation::RightLeft
            }
        }
    })
}

/// Inserts `entry` below `link`, rebalancing every ancestor on the way back.
pub(crate) fn insert<A: Allocator + Clone>(link: &mut Link<A>, entry: Entry, alloc: &A) -> Placement {
    let Some(node) = link.as_mut() else {
        *link = Some(Box::new_in(TreeNode::leaf(entry), alloc.clone()));
        return Placement::Leaf;
    };

    let (side, below) = match cmp_keys(entry.key(), node.entry.key()) {
        Ordering::Equal => return Placement::Duplicate,
        Ordering::Less => (Placement::Left, insert(&mut node.left, entry, alloc)),
        Ordering::Greater => (Placement::Right, insert(&mut node.right, entry, alloc)),
    };
    if below == Placement::Duplicate {
        return Placement::Duplicate;
    }

    let node = link.take().expect("node was present before descending");
    *link = Some(rebalance_after_insert(node, below));
    side
}

pub(crate) fn search<'a, A: Allocator>(mut link: &'a Link<A>, key: &str) -> Option<&'a Entry> {
    while let Some(node) = link {
        link = match cmp_keys(key, node.entry.key()) {
            Ordering::Equal => return Some(&node.entry),
            Ordering::Less => &node.left,
            Ordering::Greater => &node.right,
        };
    }
    None
}

/// Removes the entry with `key` from below `link`, returning it.
pub(crate) fn remove<A: Allocator>(link: &mut Link<A>, key: &str) -> Option<Entry> {
    let ord = cmp_keys(key, link.as_ref()?.entry.key());
    if ord != Ordering::Equal {
        let node = link.as_mut()?;
        let child = if ord == Ordering::Less {
            &mut node.left
        } else {
            &mut node.right
        };
        let removed = remove(child, key)?;
        let node = link.take()?;
        *link = Some(rebalance_after_remove(node));
        return Some(removed);
    }

    let mut node = link.take()?;
    match (node.left.take(), node.right.take()) {
        (None, None) => {}
        (Some(child), None) | (None, Some(child)) => *link = Some(child),
        (Some(left), Some(right)) => {
            // Pull the in-order successor up into this node.
            let mut right = Some(right);
            let successor = take_min(&mut right);
            node.left = Some(left);
            node.right = right;
            let removed = mem::replace(&mut node.entry, successor);
            *link = Some(rebalance_after_remove(node));
            return Some(removed);
        }
    }
    Some(mem::take(&mut node.entry))
}

/// Unlinks the minimum entry of a non-empty subtree.
fn take_min<A: Allocator>(link: &mut Link<A>) -> Entry {
    let mut node = link.take().expect("successor subtree is non-empty");
    if node.left.is_some() {
        let min = take_min(&mut node.left);
        *link = Some(rebalance_after_remove(node));
        min
    } else {
        *link = node.right.take();
        mem::take(&mut node.entry)
    }
}
