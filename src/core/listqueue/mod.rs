use std::collections::LinkedList;
use std::collections::linked_list;
use std::fmt::{self, Debug, Display, Formatter};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::core::error::QueueError;
use crate::core::queue::{Queue, write_rear_first};

/// Queue backed by the standard library's doubly-linked list.
/// The front of the queue is the head of the list.
#[derive(Clone, PartialEq, Eq)]
pub struct LinkedListQueue<T> {
    items: LinkedList<T>,
}

impl<T> LinkedListQueue<T> {
    /// Create a new, empty queue
    pub fn new() -> Self {
        Self { items: LinkedList::new() }
    }

    /// Iterate front to back
    pub fn iter(&self) -> linked_list::Iter<'_, T> {
        self.items.iter()
    }
}

impl<T> Queue<T> for LinkedListQueue<T> {
    fn enqueue(&mut self, item: T) {
        self.items.push_back(item);
        // --post operation assertion
        debug_assert!(!self.items.is_empty(), "Queue must have at least one item after enqueue");
    }

    fn dequeue(&mut self) -> Result<T, QueueError> {
        let len_before = self.items.len();
        let item = self.items.pop_front().ok_or(QueueError::EmptyContainer)?;
        // -- post op assertion: queue size decreases by exactly one
        debug_assert_eq!(self.items.len(), len_before - 1, "Queue length should decrease by 1");
        Ok(item)
    }

    fn examine(&self) -> Result<&T, QueueError> {
        self.items.front().ok_or(QueueError::EmptyContainer)
    }

    fn size(&self) -> usize {
        self.items.len()
    }

    fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T> Default for LinkedListQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<T>> for LinkedListQueue<T> {
    fn from(input: Vec<T>) -> Self {
        input.into_iter().collect()
    }
}

impl<T> FromIterator<T> for LinkedListQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self { items: iter.into_iter().collect() }
    }
}

impl<T> Extend<T> for LinkedListQueue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<'a, T> IntoIterator for &'a LinkedListQueue<T> {
    type Item = &'a T;
    type IntoIter = linked_list::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for LinkedListQueue<T> {
    type Item = T;
    type IntoIter = linked_list::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<T: Display> Display for LinkedListQueue<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_rear_first(f, self.iter())
    }
}

impl<T: Debug> Debug for LinkedListQueue<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: Serialize> Serialize for LinkedListQueue<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for LinkedListQueue<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Vec::<T>::deserialize(deserializer).map(Self::from)
    }
}
