use std::{fmt};

use log::{trace};

use super::{Value};
use crate::{Error, Result};

/// The position of a [`Node`] in a [`List`]'s arena.
#[derive(Debug, Copy, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
struct Link(u32);

impl Link {
    fn as_usize(self) -> usize { self.0 as usize }
}

/// One element of a [`List`]: an owned `Value` and the next `Node`.
#[derive(Debug, Clone)]
struct Node {
    value: Value,
    next: Option<Link>,
}

// ----------------------------------------------------------------------------

/// A singly-linked sequence of [`Value`]s.
///
/// The `Node`s live in an arena and refer to each other by [`Link`]. Nodes
/// are never removed, so `append()` and `prepend()` are O(1) and never move
/// an existing element. The chain starting at `head` visits every node
/// exactly once, ending at `tail`.
///
/// Inserting a `Value` clones it. The caller's `Value` and the `List`'s copy
/// have independent lifetimes, and in particular a `List` cannot contain
/// itself.
#[derive(Default)]
pub struct List {
    /// Every `Node`, in allocation order (not list order).
    nodes: Vec<Node>,

    /// The first `Node`, or `None` if the list is empty.
    head: Option<Link>,

    /// The last `Node`, or `None` if the list is empty.
    tail: Option<Link>,

    /// The number of `Node`s reachable from `head`.
    length: usize,
}

impl List {
    pub fn new() -> Self { Self::default() }

    pub fn len(&self) -> usize { self.length }

    pub fn is_empty(&self) -> bool { self.head.is_none() }

    /// Allocate a `Node` holding `value`.
    fn alloc(&mut self, value: Value, next: Option<Link>) -> Link {
        let link = Link(u32::try_from(self.nodes.len()).expect("List too long"));
        self.nodes.push(Node {value, next});
        link
    }

    fn node(&self, link: Link) -> &Node { &self.nodes[link.as_usize()] }

    fn node_mut(&mut self, link: Link) -> &mut Node { &mut self.nodes[link.as_usize()] }

    /// Insert a copy of `value` before the first element.
    pub fn prepend(&mut self, value: &Value) {
        let link = self.alloc(value.clone(), self.head);
        self.head = Some(link);
        if self.tail.is_none() { self.tail = Some(link); }
        self.length += 1;
        trace!("prepend {} (length {})", value.tag(), self.length);
    }

    /// Insert a copy of `value` after the last element.
    pub fn append(&mut self, value: &Value) { self.push(value.clone()); }

    /// Insert `value` after the last element, without copying it.
    fn push(&mut self, value: Value) {
        let tag = value.tag();
        let link = self.alloc(value, None);
        match self.tail {
            None => { self.head = Some(link); },
            Some(tail) => { self.node_mut(tail).next = Some(link); },
        }
        self.tail = Some(link);
        self.length += 1;
        trace!("append {} (length {})", tag, self.length);
    }

    /// Returns the `index`th element, counting from the head.
    ///
    /// The result is borrowed from `self`; it is not a copy.
    pub fn get(&self, index: usize) -> Result<&Value> {
        if index >= self.length {
            return Err(Error::IndexOutOfRange {index, length: self.length});
        }
        let mut link = self.head.expect("Non-empty list has no head");
        for _ in 0..index {
            link = self.node(link).next.expect("Chain shorter than length");
        }
        Ok(&self.node(link).value)
    }

    /// Walks the chain from the head.
    pub fn iter(&self) -> Iter<'_> {
        Iter {list: self, next: self.head, remaining: self.length}
    }

    /// Release every element, then `self`.
    pub fn destroy(self) {
        trace!("destroy list of length {}", self.length);
        drop(self);
    }
}

// Nested lists are walked with an explicit stack, so that arbitrarily deep
// values can be dropped, copied and compared.

impl Drop for List {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.nodes);
        while let Some(node) = pending.pop() {
            if let Value::List(mut inner) = node.value {
                pending.append(&mut inner.nodes);
            }
        }
    }
}

impl Clone for List {
    fn clone(&self) -> Self {
        // Each entry is a list being copied and its copy so far.
        let mut stack = vec![(self.iter(), List::new())];
        loop {
            let (elements, _) = stack.last_mut().expect("Clone stack is empty");
            match elements.next() {
                Some(Value::List(inner)) => { stack.push((inner.iter(), List::new())); },
                Some(leaf) => { stack.last_mut().expect("Clone stack is empty").1.push(leaf.clone()); },
                None => {
                    let (_, copy) = stack.pop().expect("Clone stack is empty");
                    match stack.last_mut() {
                        None => { return copy; },
                        Some((_, parent)) => { parent.push(Value::List(copy)); },
                    }
                },
            }
        }
    }
}

impl PartialEq for List {
    fn eq(&self, other: &Self) -> bool {
        let mut stack = vec![(self.iter(), other.iter())];
        loop {
            let Some((xs, ys)) = stack.last_mut() else { return true; };
            if xs.len() != ys.len() { return false; }
            match (xs.next(), ys.next()) {
                (None, None) => { stack.pop(); },
                (Some(Value::List(x)), Some(Value::List(y))) => { stack.push((x.iter(), y.iter())); },
                (Some(x), Some(y)) => if x != y { return false; },
                _ => { return false; },
            }
        }
    }
}

impl Eq for List {}

impl fmt::Debug for List {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("[")?;
        for (index, element) in self.iter().enumerate() {
            if index > 0 { f.write_str(", ")?; }
            fmt::Debug::fmt(element, f)?;
        }
        f.write_str("]")
    }
}

impl<'a> IntoIterator for &'a List {
    type Item = &'a Value;
    type IntoIter = Iter<'a>;
    fn into_iter(self) -> Self::IntoIter { self.iter() }
}

impl Extend<Value> for List {
    fn extend<I: IntoIterator<Item=Value>>(&mut self, iter: I) {
        for value in iter { self.push(value); }
    }
}

impl FromIterator<Value> for List {
    fn from_iter<I: IntoIterator<Item=Value>>(iter: I) -> Self {
        let mut ret = Self::new();
        ret.extend(iter);
        ret
    }
}

// ----------------------------------------------------------------------------

/// Iterates over the elements of a [`List`] in order.
#[derive(Clone)]
pub struct Iter<'a> {
    list: &'a List,
    next: Option<Link>,
    remaining: usize,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Value;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.list.node(self.next?);
        self.next = node.next;
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) { (self.remaining, Some(self.remaining)) }
}

impl ExactSizeIterator for Iter<'_> {}

// ----------------------------------------------------------------------------
