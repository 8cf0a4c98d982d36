use std::cmp::Ordering;
use std::ops::{Deref, DerefMut};

use super::Queue;
use crate::comparators::{AsNumbers, Comparator};
use crate::handle::{Arena, Idx};
use crate::{Error, Position, Result};

/// A handle to an element of an [`AdaptableHeapPriorityQueue`].
///
/// Locators follow their element as it moves through the heap, and are validated
/// like [`Position`]s: one from another queue is a structural mismatch, and one whose
/// element was removed is deprecated.
pub type Locator = Position;

const LOCATOR_ERROR: &str = "invariant violated: heap slot without a live locator";

struct Entry<T> {
    element: T,
    // the entry's index in `heap`
    index: usize,
}

/// A binary min-heap whose elements can be removed or updated through [`Locator`]s.
///
///```
/// use copse::queues::AdaptableHeapPriorityQueue;
///
/// let mut queue: AdaptableHeapPriorityQueue<_> = vec![7, 3, 9].into_iter().collect();
/// let five = queue.enqueue(5);
/// queue.update(five, 1).unwrap();
/// assert_eq!(queue.dequeue(), Ok(1));
///
/// let nine = queue.enqueue(9);
/// assert_eq!(queue.remove(nine), Ok(9));
/// assert_eq!(queue.dequeue(), Ok(3));
/// assert_eq!(queue.dequeue(), Ok(7));
/// assert_eq!(queue.dequeue(), Ok(9));
/// assert!(queue.is_empty());
///```
pub struct AdaptableHeapPriorityQueue<T, C = AsNumbers> {
    entries: Arena<Entry<T>>,
    // heap order over arena slots
    heap: Vec<Idx>,
    comparator: C,
}

impl<T> AdaptableHeapPriorityQueue<T> {
    pub fn new() -> Self {
        AdaptableHeapPriorityQueue::with_comparator(AsNumbers)
    }
}

impl<T, C> AdaptableHeapPriorityQueue<T, C> {
    pub fn with_comparator(comparator: C) -> Self {
        AdaptableHeapPriorityQueue {
            entries: Arena::new(),
            heap: vec![],
            comparator,
        }
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Removes every element. Every locator issued so far becomes deprecated.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.heap.clear();
    }

    /// The element a locator refers to.
    pub fn element(&self, locator: Locator) -> Result<&T> {
        let idx = self.entries.validate(locator)?;
        Ok(&self.entries.get(idx).element)
    }

    /// Elements in heap layout order, which is not sorted.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.heap.iter().map(move |&idx| &self.entries.get(idx).element)
    }

    fn element_at(&self, index: usize) -> &T {
        &self.entries.get(self.heap[index]).element
    }

    fn swap(&mut self, i: usize, j: usize) {
        self.heap.swap(i, j);
        self.entries.get_mut(self.heap[i]).index = i;
        self.entries.get_mut(self.heap[j]).index = j;
    }
}

impl<T, C: Comparator<T>> AdaptableHeapPriorityQueue<T, C> {
    /// Builds a heap bottom-up in linear time.
    pub fn from_elements<I: IntoIterator<Item = T>>(elements: I, comparator: C) -> Self {
        let mut queue = AdaptableHeapPriorityQueue::with_comparator(comparator);
        for element in elements {
            let index = queue.heap.len();
            let idx = queue.entries.insert(Entry { element, index });
            queue.heap.push(idx);
        }
        for index in (0..queue.len() / 2).rev() {
            queue.downheap(index);
        }
        queue
    }

    fn less(&self, i: usize, j: usize) -> bool {
        self.comparator.compare(self.element_at(i), self.element_at(j)) == Ordering::Less
    }

    fn upheap(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if !self.less(index, parent) {
                break;
            }
            self.swap(index, parent);
            index = parent;
        }
    }

    fn downheap(&mut self, mut index: usize) {
        loop {
            let left = 2 * index + 1;
            if left >= self.len() {
                break;
            }
            let right = left + 1;
            let smallest = if right < self.len() && self.less(right, left) {
                right
            } else {
                left
            };
            if !self.less(smallest, index) {
                break;
            }
            self.swap(index, smallest);
            index = smallest;
        }
    }

    /// Restores heap order around an element whose priority changed.
    fn bubble(&mut self, index: usize) {
        if index > 0 && self.less(index, (index - 1) / 2) {
            self.upheap(index);
        } else {
            self.downheap(index);
        }
    }

    pub fn enqueue(&mut self, element: T) -> Locator {
        let index = self.heap.len();
        let idx = self.entries.insert(Entry { element, index });
        self.heap.push(idx);
        self.upheap(index);
        self.entries.position(idx)
    }

    /// The smallest element.
    pub fn first(&self) -> Result<&T> {
        let &idx = self.heap.first().ok_or(Error::Empty("queue"))?;
        Ok(&self.entries.get(idx).element)
    }

    /// The locator of the smallest element.
    pub fn first_locator(&self) -> Option<Locator> {
        self.heap.first().map(|&idx| self.entries.position(idx))
    }

    /// Removes the smallest element.
    pub fn dequeue(&mut self) -> Result<T> {
        let &idx = self.heap.first().ok_or(Error::Empty("queue"))?;
        Ok(self.remove_at(idx))
    }

    fn remove_at(&mut self, idx: Idx) -> T {
        let index = self.entries.get(idx).index;
        let last = self.heap.len() - 1;
        self.swap(index, last);
        self.heap.pop();
        let entry = self.entries.remove(idx);
        if index < self.heap.len() {
            self.bubble(index);
        }
        entry.element
    }

    /// Removes the element the locator refers to.
    pub fn remove(&mut self, locator: Locator) -> Result<T> {
        let idx = self.entries.validate(locator)?;
        Ok(self.remove_at(idx))
    }

    /// Replaces the element the locator refers to, and moves it to its new place.
    /// Returns the old element.
    pub fn update(&mut self, locator: Locator, element: T) -> Result<T> {
        let idx = self.entries.validate(locator)?;
        let entry = self.entries.get_mut(idx);
        let old = std::mem::replace(&mut entry.element, element);
        let index = entry.index;
        self.bubble(index);
        Ok(old)
    }

    /// A guard over the smallest element that restores heap order when dropped.
    ///
    ///```
    /// use copse::queues::{AdaptableHeapPriorityQueue, PeekMut};
    ///
    /// let mut queue: AdaptableHeapPriorityQueue<_> = vec![1, 4, 6].into_iter().collect();
    /// *queue.peek_mut().unwrap() = 5;
    /// assert_eq!(queue.first(), Ok(&4));
    ///
    /// let top = queue.peek_mut().unwrap();
    /// assert_eq!(PeekMut::pop(top), 4);
    /// assert_eq!(queue.len(), 2);
    ///```
    pub fn peek_mut(&mut self) -> Option<PeekMut<'_, T, C>> {
        let locator = self.first_locator()?;
        Some(PeekMut {
            queue: self,
            locator,
        })
    }
}

/// Mutable access to the smallest element of an [`AdaptableHeapPriorityQueue`].
/// The element is sifted back into place when the guard is dropped.
#[derive(destructure)]
pub struct PeekMut<'a, T, C: Comparator<T>> {
    queue: &'a mut AdaptableHeapPriorityQueue<T, C>,
    locator: Locator,
}

impl<'a, T, C: Comparator<T>> PeekMut<'a, T, C> {
    /// The locator of the guarded element.
    pub fn locator(this: &Self) -> Locator {
        this.locator
    }

    /// Removes the guarded element without re-sifting it first.
    pub fn pop(this: Self) -> T {
        let (queue, locator) = this.destructure();
        queue.remove(locator).expect(LOCATOR_ERROR)
    }
}

impl<'a, T, C: Comparator<T>> Deref for PeekMut<'a, T, C> {
    type Target = T;

    fn deref(&self) -> &T {
        self.queue.element(self.locator).expect(LOCATOR_ERROR)
    }
}

impl<'a, T, C: Comparator<T>> DerefMut for PeekMut<'a, T, C> {
    fn deref_mut(&mut self) -> &mut T {
        let idx = self.queue.entries.validate(self.locator).expect(LOCATOR_ERROR);
        &mut self.queue.entries.get_mut(idx).element
    }
}

impl<'a, T, C: Comparator<T>> Drop for PeekMut<'a, T, C> {
    fn drop(&mut self) {
        if let Ok(idx) = self.queue.entries.validate(self.locator) {
            let index = self.queue.entries.get(idx).index;
            self.queue.bubble(index);
        }
    }
}

impl<T, C: Comparator<T>> Queue<T> for AdaptableHeapPriorityQueue<T, C> {
    fn len(&self) -> usize {
        AdaptableHeapPriorityQueue::len(self)
    }

    fn enqueue(&mut self, element: T) -> Result<()> {
        AdaptableHeapPriorityQueue::enqueue(self, element);
        Ok(())
    }

    fn dequeue(&mut self) -> Result<T> {
        AdaptableHeapPriorityQueue::dequeue(self)
    }

    fn first(&self) -> Result<&T> {
        AdaptableHeapPriorityQueue::first(self)
    }

    fn clear(&mut self) {
        AdaptableHeapPriorityQueue::clear(self)
    }
}

impl<T, C: Default> Default for AdaptableHeapPriorityQueue<T, C> {
    fn default() -> Self {
        AdaptableHeapPriorityQueue::with_comparator(C::default())
    }
}

impl<T, C: Comparator<T> + Default> std::iter::FromIterator<T> for AdaptableHeapPriorityQueue<T, C> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        AdaptableHeapPriorityQueue::from_elements(iter, C::default())
    }
}

impl<T, C: Comparator<T>> Extend<T> for AdaptableHeapPriorityQueue<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.enqueue(element);
        }
    }
}

impl<T: std::fmt::Debug, C> std::fmt::Debug for AdaptableHeapPriorityQueue<T, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
