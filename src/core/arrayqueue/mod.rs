use std::fmt::{self, Debug, Display, Formatter};
use std::iter::FusedIterator;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::trace;

use crate::core::error::QueueError;
use crate::core::queue::{Queue, write_rear_first};

/// Capacity used by [`ArrayQueue::new`]
pub const DEFAULT_CAPACITY: usize = 10;

/// Queue stored in a circular buffer.
///
/// The front of the queue is `data[front]` and the back is `data[rear]`; both
/// indices advance modulo the buffer length. `many_items` is the number of
/// live slots, so `rear` only carries meaning while the queue is non-empty.
#[derive(Clone)]
pub struct ArrayQueue<T> {
    data: Vec<Option<T>>,
    many_items: usize,
    front: usize,
    rear: usize,
}

impl<T> ArrayQueue<T> {
    /// Create a new, empty queue with [`DEFAULT_CAPACITY`]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Create a new, empty queue whose buffer holds `capacity` items before growing
    pub fn with_capacity(capacity: usize) -> Self {
        let mut data = Vec::with_capacity(capacity);
        data.resize_with(capacity, || None);
        Self {
            data,
            many_items: 0,
            front: 0,
            rear: capacity.saturating_sub(1),
        }
    }

    /// Length of the backing buffer
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    /// Grow the buffer to `capacity` if it is currently smaller.
    /// Queue order is kept; the front moves to index 0.
    pub fn ensure_capacity(&mut self, capacity: usize) {
        if capacity > self.capacity() {
            self.relocate(capacity);
        }
    }

    /// Shrink the buffer so it holds exactly the live items
    pub fn trim_to_size(&mut self) {
        self.relocate(self.many_items);
    }

    /// Iterate front to back
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            data: &self.data,
            index: self.front,
            remaining: self.many_items,
        }
    }

    /// Copy the live items, in queue order, into a fresh buffer of `capacity` slots
    fn relocate(&mut self, capacity: usize) {
        debug_assert!(capacity >= self.many_items, "Relocation must not drop items");
        let old_capacity = self.data.len();
        let mut data = Vec::with_capacity(capacity);
        for i in 0..self.many_items {
            data.push(self.data[(self.front + i) % old_capacity].take());
        }
        data.resize_with(capacity, || None);
        trace!(old_capacity, new_capacity = capacity, items = self.many_items, "array queue relocated");
        self.data = data;
        self.front = 0;
        self.rear = self.many_items.saturating_sub(1);
    }
}

impl<T> Queue<T> for ArrayQueue<T> {
    fn enqueue(&mut self, item: T) {
        if self.many_items == self.data.len() {
            self.relocate(self.many_items * 2 + 1);
        }
        if self.many_items == 0 {
            self.rear = self.front;
        } else {
            self.rear = (self.rear + 1) % self.data.len();
        }
        self.data[self.rear] = Some(item);
        self.many_items += 1;
        // --post operation assertion
        debug_assert!(self.many_items <= self.data.len(), "Queue must never hold more items than slots");
    }

    fn dequeue(&mut self) -> Result<T, QueueError> {
        if self.many_items == 0 {
            return Err(QueueError::EmptyContainer);
        }
        let item = self.data[self.front].take().ok_or(QueueError::EmptyContainer)?;
        self.front = (self.front + 1) % self.data.len();
        self.many_items -= 1;
        Ok(item)
    }

    fn examine(&self) -> Result<&T, QueueError> {
        if self.many_items == 0 {
            return Err(QueueError::EmptyContainer);
        }
        self.data[self.front].as_ref().ok_or(QueueError::EmptyContainer)
    }

    fn size(&self) -> usize {
        self.many_items
    }
}

/// Borrowing iterator over an [`ArrayQueue`], front to back
pub struct Iter<'a, T> {
    data: &'a [Option<T>],
    index: usize,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        let item = self.data[self.index].as_ref();
        self.index = (self.index + 1) % self.data.len();
        self.remaining -= 1;
        item
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        self.data[(self.index + self.remaining) % self.data.len()].as_ref()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

/// Owning iterator that dequeues until the queue is empty
pub struct IntoIter<T>(ArrayQueue<T>);

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

impl<T> Default for ArrayQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<T>> for ArrayQueue<T> {
    /// The buffer is sized exactly to the input; the first element is the front.
    fn from(input: Vec<T>) -> Self {
        let many_items = input.len();
        Self {
            data: input.into_iter().map(Some).collect(),
            many_items,
            front: 0,
            rear: many_items.saturating_sub(1),
        }
    }
}

impl<T> FromIterator<T> for ArrayQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<T>>())
    }
}

impl<T> Extend<T> for ArrayQueue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.enqueue(item);
        }
    }
}

impl<'a, T> IntoIterator for &'a ArrayQueue<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for ArrayQueue<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self)
    }
}

impl<T: PartialEq> PartialEq for ArrayQueue<T> {
    /// Queues are equal when they hold equal items in the same order,
    /// whatever their capacity or index layout.
    fn eq(&self, other: &Self) -> bool {
        self.many_items == other.many_items && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for ArrayQueue<T> {}

impl<T: Display> Display for ArrayQueue<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_rear_first(f, self.iter())
    }
}

impl<T: Debug> Debug for ArrayQueue<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: Serialize> Serialize for ArrayQueue<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for ArrayQueue<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Vec::<T>::deserialize(deserializer).map(Self::from)
    }
}
