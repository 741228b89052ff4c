//! The suspendable, halt-aware fold behind `reduce`. Unlike the borrowing
//! [`crate::iter::Iter`] used for `&vec` iteration, the cursor here owns
//! `Rc` clones of every node it still needs to visit, so a `Suspension` can
//! be carried across a call boundary and resumed later, independent of the
//! vector's original borrow.

use std::rc::Rc;

use crate::node::Node;
use crate::vector::PersistentVector;

/// A command issued to the fold for the next element (or to resume one).
pub enum Command<A> {
    /// Apply the reducer to the next element; if none remain, finish.
    Continue(A),
    /// Stop immediately; the fold cannot be resumed.
    Halt(A),
    /// Stop immediately, but hand back a [`Suspension`] that can resume as
    /// if this command had never been observed.
    Suspend(A),
}

/// The result of driving a `reduce`.
pub enum Outcome<A, T> {
    Done(A),
    Halted(A),
    Suspended(A, Suspension<T>),
}

/// A paused walk, ready to resume with the next [`Command`].
pub struct Suspension<T> {
    cursor: Cursor<T>,
}

impl<T: Clone> Suspension<T> {
    pub fn resume<A>(
        self,
        command: Command<A>,
        mut reducer: impl FnMut(A, &T) -> Command<A>,
    ) -> Outcome<A, T> {
        match command {
            Command::Halt(acc) => Outcome::Halted(acc),
            Command::Suspend(acc) => Outcome::Suspended(acc, self),
            Command::Continue(acc) => drive(self.cursor, acc, &mut reducer),
        }
    }
}

/// Suspendable fold over `v` in strictly ascending index order: every root
/// leaf in order, then the tail.
pub fn reduce<T: Clone, A>(
    v: &PersistentVector<T>,
    command: Command<A>,
    mut reducer: impl FnMut(A, &T) -> Command<A>,
) -> Outcome<A, T> {
    match command {
        Command::Halt(acc) => Outcome::Halted(acc),
        Command::Suspend(acc) => Outcome::Suspended(acc, Suspension { cursor: Cursor::new(v) }),
        Command::Continue(acc) => drive(Cursor::new(v), acc, &mut reducer),
    }
}

fn drive<T: Clone, A>(
    mut cursor: Cursor<T>,
    mut acc: A,
    reducer: &mut impl FnMut(A, &T) -> Command<A>,
) -> Outcome<A, T> {
    loop {
        match cursor.next() {
            None => return Outcome::Done(acc),
            Some(value) => match reducer(acc, &value) {
                Command::Continue(next_acc) => acc = next_acc,
                Command::Halt(final_acc) => return Outcome::Halted(final_acc),
                Command::Suspend(paused_acc) => {
                    return Outcome::Suspended(paused_acc, Suspension { cursor })
                }
            },
        }
    }
}

struct Cursor<T> {
    stack: Vec<(Rc<Node<T>>, usize)>,
    leaf: Option<(Rc<Vec<T>>, usize)>,
    tail: Rc<Vec<T>>,
    tail_idx: usize,
    root_done: bool,
}

impl<T: Clone> Cursor<T> {
    fn new(v: &PersistentVector<T>) -> Self {
        Cursor {
            stack: vec![(Rc::clone(v.root_rc()), 0)],
            leaf: None,
            tail: Rc::clone(v.tail_rc()),
            tail_idx: 0,
            root_done: false,
        }
    }

    fn next(&mut self) -> Option<T> {
        loop {
            if let Some((values, idx)) = self.leaf.as_mut() {
                if *idx < values.len() {
                    let value = values[*idx].clone();
                    *idx += 1;
                    return Some(value);
                }
                self.leaf = None;
            }

            if !self.root_done {
                loop {
                    let Some((node, idx)) = self.stack.last_mut() else {
                        self.root_done = true;
                        break;
                    };
                    let children = node.branch_children();
                    if *idx >= children.len() {
                        self.stack.pop();
                        continue;
                    }
                    let child = Rc::clone(&children[*idx]);
                    *idx += 1;
                    match &*child {
                        Node::Branch(_) => self.stack.push((child, 0)),
                        Node::Leaf(values) => {
                            self.leaf = Some((Rc::clone(values), 0));
                            break;
                        }
                    }
                }
                if self.leaf.is_some() {
                    continue;
                }
            }

            return if self.tail_idx < self.tail.len() {
                let value = self.tail[self.tail_idx].clone();
                self.tail_idx += 1;
                Some(value)
            } else {
                None
            };
        }
    }
}
