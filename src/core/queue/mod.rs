use std::fmt::{self, Display, Formatter};

use crate::core::error::QueueError;

/// FIFO contract shared by every queue variant.
///
/// `dequeue` always hands back the element enqueued earliest among those still
/// present, and `size` always equals the number of live elements.
pub trait Queue<T> {
    /// Add an item at the back
    fn enqueue(&mut self, item: T);

    /// Remove and return the item at the front
    fn dequeue(&mut self) -> Result<T, QueueError>;

    /// Borrow the item at the front without removing it
    fn examine(&self) -> Result<&T, QueueError>;

    /// Number of live elements
    fn size(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.size() == 0
    }
}

/// Render a queue as `<back, ..., front>`; an empty queue renders as `<>`.
///
/// `items` must yield front-to-back.
pub(crate) fn write_rear_first<'a, T, I>(f: &mut Formatter<'_>, items: I) -> fmt::Result
where
    T: Display + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let items: Vec<&T> = items.into_iter().collect();
    f.write_str("<")?;
    for (i, item) in items.iter().rev().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{}", item)?;
    }
    f.write_str(">")
}
