//! Binary min-heap over `(item, priority)` pairs.
//!
//! Items and priorities live in two parallel vectors indexed identically, so
//! slot `0` always holds the minimum. Lower priority values leave first.
//! Equal priorities come out in heap order, which is unspecified.

use crate::error::{Error, Result};

#[derive(Debug, Clone)]
pub struct MinPriorityQueue<T, P> {
    items: Vec<T>,
    priorities: Vec<P>,
}

impl<T, P> Default for MinPriorityQueue<T, P> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            priorities: Vec::new(),
        }
    }
}

impl<T: PartialEq, P: PartialOrd + Copy> MinPriorityQueue<T, P> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Heapifies `items` in O(n), sifting down from the last internal node
    /// to the root. `priorities[i]` is the priority of `items[i]`.
    pub fn build(items: Vec<T>, priorities: Vec<P>) -> Result<Self> {
        if items.len() != priorities.len() {
            return Err(Error::MismatchedLengths {
                items: items.len(),
                priorities: priorities.len(),
            });
        }

        let mut queue = Self { items, priorities };
        for index in (0..queue.len() / 2).rev() {
            queue.sift_down(index);
        }
        Ok(queue)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// The minimum-priority item, left in place.
    pub fn peek(&self) -> Result<&T> {
        self.items
            .first()
            .ok_or(Error::EmptyContainer("priority queue"))
    }

    /// Removes and returns the minimum-priority item.
    pub fn dequeue(&mut self) -> Result<T> {
        if self.is_empty() {
            return Err(Error::EmptyContainer("priority queue"));
        }

        // swap_remove moves the last slot into the root.
        let item = self.items.swap_remove(0);
        self.priorities.swap_remove(0);
        if !self.is_empty() {
            self.sift_down(0);
        }
        Ok(item)
    }

    pub fn enqueue(&mut self, item: T, priority: P) {
        self.items.push(item);
        self.priorities.push(priority);
        self.sift_up(self.len() - 1);
    }

    /// Lowers the priority of the first slot holding `item` at `old_priority`.
    ///
    /// Finds the slot by linear scan, so each call is O(n). Does nothing and
    /// returns `false` unless `new_priority < old_priority` and such a slot
    /// exists.
    pub fn decrease_priority(&mut self, item: &T, old_priority: P, new_priority: P) -> bool {
        if !(new_priority < old_priority) {
            return false;
        }

        let slot = self
            .items
            .iter()
            .zip(&self.priorities)
            .position(|(candidate, &priority)| candidate == item && priority == old_priority);

        match slot {
            Some(index) => {
                self.priorities[index] = new_priority;
                self.sift_up(index);
                true
            }
            None => false,
        }
    }

    fn sift_down(&mut self, index: usize) {
        let mut node = index;
        while let Some(child) = self.min_child(node) {
            if self.priorities[node] > self.priorities[child] {
                self.swap(node, child);
                node = child;
            } else {
                break;
            }
        }
    }

    fn sift_up(&mut self, index: usize) {
        let mut node = index;
        while node > 0 {
            let parent = (node - 1) / 2;
            if self.priorities[parent] > self.priorities[node] {
                self.swap(parent, node);
                node = parent;
            } else {
                break;
            }
        }
    }

    /// Index of the child with the smaller priority; the right child wins ties.
    fn min_child(&self, index: usize) -> Option<usize> {
        let left = 2 * index + 1;
        let right = left + 1;

        if right < self.len() {
            if self.priorities[left] < self.priorities[right] {
                Some(left)
            } else {
                Some(right)
            }
        } else if left < self.len() {
            Some(left)
        } else {
            None
        }
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.items.swap(a, b);
        self.priorities.swap(a, b);
    }
}
