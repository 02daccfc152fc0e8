use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, VecDeque};

use super::traits::PopPolicy;
use crate::grid::Cell;

/// A frontier entry. `BinaryHeap` is a max-heap, so entries are stored
/// behind `Reverse` to pop the lowest key first.
#[derive(Debug, Clone, Copy)]
struct Entry {
    key: f64,
    seq: u64,
    cell: Cell,
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Entry {}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key
            .total_cmp(&other.key)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Pending cells awaiting expansion.
///
/// Duplicates are allowed; callers drop stale entries when they pop them.
#[derive(Debug)]
pub struct Frontier {
    queue: Queue,
}

#[derive(Debug)]
enum Queue {
    Fifo(VecDeque<Cell>),
    Priority {
        heap: BinaryHeap<Reverse<Entry>>,
        next_seq: u64,
    },
}

impl Frontier {
    pub fn new(policy: PopPolicy) -> Self {
        let queue = match policy {
            PopPolicy::Fifo => Queue::Fifo(VecDeque::new()),
            PopPolicy::MinPriority => Queue::Priority {
                heap: BinaryHeap::new(),
                next_seq: 0,
            },
        };
        Self { queue }
    }

    pub fn push(&mut self, cell: Cell, key: f64) {
        match &mut self.queue {
            Queue::Fifo(queue) => queue.push_back(cell),
            Queue::Priority { heap, next_seq } => {
                heap.push(Reverse(Entry {
                    key,
                    seq: *next_seq,
                    cell,
                }));
                *next_seq += 1;
            }
        }
    }

    pub fn pop(&mut self) -> Option<Cell> {
        match &mut self.queue {
            Queue::Fifo(queue) => queue.pop_front(),
            Queue::Priority { heap, .. } => heap.pop().map(|Reverse(entry)| entry.cell),
        }
    }

    pub fn len(&self) -> usize {
        match &self.queue {
            Queue::Fifo(queue) => queue.len(),
            Queue::Priority { heap, .. } => heap.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Cells currently queued, in no particular order, duplicates included.
    pub fn cells(&self) -> Vec<Cell> {
        match &self.queue {
            Queue::Fifo(queue) => queue.iter().copied().collect(),
            Queue::Priority { heap, .. } => heap.iter().map(|Reverse(e)| e.cell).collect(),
        }
    }
}
