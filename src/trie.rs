//! The trie walk and path-copy algorithms behind `get`, `set`, and the
//! append/remove_last promotion protocol. Everything here is pure: these
//! functions never see the tail, only the root and its `shift`.

use std::rc::Rc;

use crate::node::{Node, BRANCH, MASK, SHIFT_BITS};

/// Digit-extraction walk down to the leaf holding `index`. `level` starts
/// at the root's `shift` and reaches the leaf after `shift / SHIFT_BITS`
/// branch hops.
pub(crate) fn get<T>(root: &Node<T>, level: u32, index: usize) -> &T {
    let mut node = root;
    let mut level = level;
    while level > 0 {
        let digit = (index >> level) & MASK;
        node = &node.branch_children()[digit];
        level -= SHIFT_BITS;
    }
    &node.leaf_values()[index & MASK]
}

/// Path-copying point update: returns a new root sharing every subtree
/// off the affected root-to-leaf path.
pub(crate) fn set<T: Clone>(root: &Rc<Node<T>>, level: u32, index: usize, value: T) -> Rc<Node<T>> {
    if level == 0 {
        let mut values = root.leaf_values().to_vec();
        values[index & MASK] = value;
        return Rc::new(Node::Leaf(Rc::new(values)));
    }
    let digit = (index >> level) & MASK;
    let children = root.branch_children();
    let mut new_children = children.to_vec();
    new_children[digit] = set(&children[digit], level - SHIFT_BITS, index, value);
    Rc::new(Node::Branch(new_children))
}

/// Outcome of promoting a full tail into the root. `Fit` means the new
/// leaf was hung somewhere below the current node; `Overflow` carries a
/// freshly-built sibling subtree, shaped for the current node's level, for
/// the caller to attach as a new child one level up.
pub(crate) enum Promotion<T> {
    Fit(Rc<Node<T>>),
    Overflow(Rc<Node<T>>),
}

/// Promote `leaf` (the old, full tail) into `node`, which sits at `level`
/// (children of `node` are leaves iff `level == SHIFT_BITS`).
pub(crate) fn promote_leaf<T>(node: &Rc<Node<T>>, level: u32, leaf: Rc<Vec<T>>) -> Promotion<T> {
    let children = node.branch_children();
    if level == SHIFT_BITS {
        return if children.len() < BRANCH {
            let mut new_children = children.to_vec();
            new_children.push(Rc::new(Node::Leaf(leaf)));
            Promotion::Fit(Rc::new(Node::Branch(new_children)))
        } else {
            let sibling = Rc::new(Node::Branch(vec![Rc::new(Node::Leaf(leaf))]));
            Promotion::Overflow(sibling)
        };
    }

    let last = children.len() - 1;
    match promote_leaf(&children[last], level - SHIFT_BITS, leaf) {
        Promotion::Fit(new_last) => {
            let mut new_children = children.to_vec();
            new_children[last] = new_last;
            Promotion::Fit(Rc::new(Node::Branch(new_children)))
        }
        Promotion::Overflow(path) => {
            if children.len() < BRANCH {
                let mut new_children = children.to_vec();
                new_children.push(path);
                Promotion::Fit(Rc::new(Node::Branch(new_children)))
            } else {
                let sibling = Rc::new(Node::Branch(vec![path]));
                Promotion::Overflow(sibling)
            }
        }
    }
}

/// Detach the rightmost leaf from `node` (at `level`). Returns the leaf
/// and, if `node` still has other children, the updated node; `None` means
/// `node` is now entirely empty and must itself be dropped from its parent
/// (or, at the root, replaced by the canonical empty root).
pub(crate) fn detach_last_leaf<T>(node: &Rc<Node<T>>, level: u32) -> (Option<Rc<Node<T>>>, Rc<Vec<T>>) {
    let children = node.branch_children();
    let last = children.len() - 1;

    if level == SHIFT_BITS {
        let leaf = match &*children[last] {
            Node::Leaf(values) => Rc::clone(values),
            Node::Branch(_) => unreachable!("leaf-level child must be a leaf"),
        };
        return if last == 0 {
            (None, leaf)
        } else {
            (Some(Rc::new(Node::Branch(children[..last].to_vec()))), leaf)
        };
    }

    let (sub, leaf) = detach_last_leaf(&children[last], level - SHIFT_BITS);
    match sub {
        None => {
            if last == 0 {
                (None, leaf)
            } else {
                (Some(Rc::new(Node::Branch(children[..last].to_vec()))), leaf)
            }
        }
        Some(new_last) => {
            let mut new_children = children[..last].to_vec();
            new_children.push(new_last);
            (Some(Rc::new(Node::Branch(new_children))), leaf)
        }
    }
}
