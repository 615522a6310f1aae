pub mod error;
pub mod queue;
pub mod arrayqueue;
pub mod listqueue;
pub mod manualqueue;
pub mod log;
pub mod radix;
pub mod demo;

pub use crate::core::{
    arrayqueue::ArrayQueue,
    error::QueueError,
    listqueue::LinkedListQueue,
    log::{PassRecord, SortKind, SortLog},
    manualqueue::ManualLinkedQueue,
    queue::Queue,
    radix::{alphabetical_radix_sort, int_radix_sort},
};
