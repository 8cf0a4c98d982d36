use super::Queue;
use crate::{Error, Result};

/// A fixed-capacity FIFO ring.
///
/// A full buffer rejects new elements with [`Full`](Error::Full), unless it was
/// created overwritable, in which case the oldest element is dropped to make room.
///
///```
/// use copse::queues::CircularArrayBuffer;
/// use copse::Error;
///
/// let mut buffer = CircularArrayBuffer::new(2);
/// buffer.enqueue(1).unwrap();
/// buffer.enqueue(2).unwrap();
/// assert_eq!(buffer.enqueue(3), Err(Error::Full));
///
/// let mut ring = CircularArrayBuffer::overwritable(2);
/// ring.extend(1..=3);
/// assert_eq!(ring.dequeue(), Ok(2));
/// assert_eq!(ring.dequeue(), Ok(3));
/// assert_eq!(ring.dequeue(), Err(Error::Empty("buffer")));
///```
pub struct CircularArrayBuffer<T> {
    slots: Vec<Option<T>>,
    front: usize,
    len: usize,
    overwritable: bool,
}

impl<T> CircularArrayBuffer<T> {
    /// Panics if `capacity` is zero.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "a buffer needs a positive capacity");
        CircularArrayBuffer {
            slots: std::iter::repeat_with(|| None).take(capacity).collect(),
            front: 0,
            len: 0,
            overwritable: false,
        }
    }

    /// A buffer that drops its oldest element when enqueuing into a full buffer.
    /// Panics if `capacity` is zero.
    pub fn overwritable(capacity: usize) -> Self {
        CircularArrayBuffer {
            overwritable: true,
            ..CircularArrayBuffer::new(capacity)
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len == self.capacity()
    }

    pub fn is_overwritable(&self) -> bool {
        self.overwritable
    }

    fn slot(&self, offset: usize) -> usize {
        (self.front + offset) % self.capacity()
    }

    pub fn enqueue(&mut self, element: T) -> Result<()> {
        if self.is_full() {
            if !self.overwritable {
                return Err(Error::Full);
            }
            // the oldest element is overwritten
            let rear = self.front;
            self.slots[rear] = Some(element);
            self.front = self.slot(1);
        } else {
            let rear = self.slot(self.len);
            self.slots[rear] = Some(element);
            self.len += 1;
        }
        Ok(())
    }

    pub fn dequeue(&mut self) -> Result<T> {
        if self.is_empty() {
            return Err(Error::Empty("buffer"));
        }
        let element = self.slots[self.front].take();
        self.front = self.slot(1);
        self.len -= 1;
        element.ok_or(Error::Empty("buffer"))
    }

    pub fn first(&self) -> Result<&T> {
        if self.is_empty() {
            return Err(Error::Empty("buffer"));
        }
        self.slots[self.front].as_ref().ok_or(Error::Empty("buffer"))
    }

    pub fn clear(&mut self) {
        for slot in self.slots.iter_mut() {
            *slot = None;
        }
        self.front = 0;
        self.len = 0;
    }

    /// Elements oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        (0..self.len).filter_map(move |offset| self.slots[self.slot(offset)].as_ref())
    }
}

impl<T> Queue<T> for CircularArrayBuffer<T> {
    fn len(&self) -> usize {
        CircularArrayBuffer::len(self)
    }

    fn enqueue(&mut self, element: T) -> Result<()> {
        CircularArrayBuffer::enqueue(self, element)
    }

    fn dequeue(&mut self) -> Result<T> {
        CircularArrayBuffer::dequeue(self)
    }

    fn first(&self) -> Result<&T> {
        CircularArrayBuffer::first(self)
    }

    fn clear(&mut self) {
        CircularArrayBuffer::clear(self)
    }
}

impl<T> Extend<T> for CircularArrayBuffer<T> {
    /// Stops at the first rejected element of a full, non-overwritable buffer.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            if self.enqueue(element).is_err() {
                break;
            }
        }
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for CircularArrayBuffer<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
