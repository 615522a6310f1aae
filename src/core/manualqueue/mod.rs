use std::fmt::{self, Debug, Display, Formatter};
use std::iter::FusedIterator;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::core::error::QueueError;
use crate::core::queue::{Queue, write_rear_first};

/// Index of a node slot in the queue's arena
type Link = Option<usize>;

/// One cell of the chain: an element plus the link to the next cell
struct Node<T> {
    data: T,
    link: Link,
}

impl<T> Node<T> {
    fn new(data: T) -> Self {
        Self { data, link: None }
    }
}

/// Queue built on a hand-written singly-linked chain of nodes.
///
/// Nodes live in an arena owned by the queue and link to each other by slot
/// index. `front` is the first node and `back` the last one, so enqueue does
/// not have to walk the chain; `back` is `None` exactly when `front` is.
/// Slots freed by `dequeue` are reused by later enqueues.
pub struct ManualLinkedQueue<T> {
    nodes: Vec<Option<Node<T>>>,
    free: Vec<usize>,
    front: Link,
    back: Link,
    many_items: usize,
}

impl<T> ManualLinkedQueue<T> {
    /// Create a new, empty queue
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            free: Vec::new(),
            front: None,
            back: None,
            many_items: 0,
        }
    }

    /// Iterate front to back
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            nodes: &self.nodes,
            next: self.front,
            remaining: self.many_items,
        }
    }

    /// Put `node` in a free slot, or a new one, and return its index
    fn alloc(&mut self, node: Node<T>) -> usize {
        match self.free.pop() {
            Some(index) => {
                self.nodes[index] = Some(node);
                index
            }
            None => {
                self.nodes.push(Some(node));
                self.nodes.len() - 1
            }
        }
    }
}

impl<T> Queue<T> for ManualLinkedQueue<T> {
    fn enqueue(&mut self, item: T) {
        let index = self.alloc(Node::new(item));
        match self.back.and_then(|back| self.nodes[back].as_mut()) {
            None => self.front = Some(index),
            Some(back) => back.link = Some(index),
        }
        self.back = Some(index);
        self.many_items += 1;
        // --post operation assertion
        debug_assert!(self.front.is_some(), "Front must be set after enqueue");
    }

    fn dequeue(&mut self) -> Result<T, QueueError> {
        let index = self.front.ok_or(QueueError::EmptyContainer)?;
        let Node { data, link } = self.nodes[index].take().ok_or(QueueError::EmptyContainer)?;
        self.free.push(index);
        self.front = link;
        if self.front.is_none() {
            // chain is gone, release the arena
            self.back = None;
            self.nodes.clear();
            self.free.clear();
        }
        self.many_items -= 1;
        Ok(data)
    }

    fn examine(&self) -> Result<&T, QueueError> {
        self.front
            .and_then(|index| self.nodes[index].as_ref())
            .map(|node| &node.data)
            .ok_or(QueueError::EmptyContainer)
    }

    fn size(&self) -> usize {
        self.many_items
    }

    fn is_empty(&self) -> bool {
        self.front.is_none()
    }
}

impl<T: Clone> Clone for ManualLinkedQueue<T> {
    /// Copies every node in order into a fresh chain, so the clone shares no
    /// node with `self` and gets its own `back`.
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

/// Borrowing iterator over a [`ManualLinkedQueue`], front to back
pub struct Iter<'a, T> {
    nodes: &'a [Option<Node<T>>],
    next: Link,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let nodes = self.nodes;
        let node = nodes[self.next?].as_ref()?;
        self.next = node.link;
        self.remaining -= 1;
        Some(&node.data)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

/// Owning iterator that dequeues until the queue is empty
pub struct IntoIter<T>(ManualLinkedQueue<T>);

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.0.dequeue().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.0.many_items, Some(self.0.many_items))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> Default for ManualLinkedQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<T>> for ManualLinkedQueue<T> {
    fn from(input: Vec<T>) -> Self {
        input.into_iter().collect()
    }
}

impl<T> FromIterator<T> for ManualLinkedQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut queue = Self::new();
        queue.extend(iter);
        queue
    }
}

impl<T> Extend<T> for ManualLinkedQueue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.enqueue(item);
        }
    }
}

impl<'a, T> IntoIterator for &'a ManualLinkedQueue<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for ManualLinkedQueue<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self)
    }
}

impl<T: PartialEq> PartialEq for ManualLinkedQueue<T> {
    fn eq(&self, other: &Self) -> bool {
        self.many_items == other.many_items && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for ManualLinkedQueue<T> {}

impl<T: Display> Display for ManualLinkedQueue<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_rear_first(f, self.iter())
    }
}

impl<T: Debug> Debug for ManualLinkedQueue<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: Serialize> Serialize for ManualLinkedQueue<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for ManualLinkedQueue<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Vec::<T>::deserialize(deserializer).map(Self::from)
    }
}
