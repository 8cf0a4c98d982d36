use copse::comparators::{ByKey, Natural, Reverse};
use copse::lists::{CircularlyLinkedList, DoublyLinkedList, SinglyLinkedList};
use copse::queues::{
    AdaptableHeapPriorityQueue, CircularArrayBuffer, CircularQueue, LinkedDeque, LinkedQueue,
    LinkedStack, PeekMut, Queue, SortedPriorityQueue, Stack, UnsortedPriorityQueue,
};
use copse::Error;
use itertools::Itertools;
use rand::seq::SliceRandom;

fn collect<'a, I: IntoIterator<Item = &'a i32>>(iter: I) -> Vec<i32> {
    iter.into_iter().copied().collect()
}

#[test]
fn singly_linked_list() {
    let mut list = SinglyLinkedList::new();
    assert_eq!(list.front(), Err(Error::Empty("list")));
    assert_eq!(list.remove_first(), Err(Error::Empty("list")));

    let two = list.add_first(2);
    list.add_first(1);
    let four = list.add_last(4);
    list.add_after(two, 3).unwrap();
    assert_eq!(collect(&list), vec![1, 2, 3, 4]);
    assert_eq!(list.last(), Some(four));
    assert_eq!(list.back(), Ok(&4));

    // adding after the tail moves the tail
    let five = list.add_after(four, 5).unwrap();
    assert_eq!(list.last(), Some(five));
    assert_eq!(list.after(five), Ok(None));

    assert_eq!(list.replace(two, 20), Ok(2));
    assert_eq!(list.remove_first(), Ok(1));
    assert_eq!(list.front(), Ok(&20));
    assert_eq!(list.len(), 4);

    list.clear();
    assert!(list.is_empty());
    assert_eq!(list.element(two), Err(Error::Deprecated));
    assert_eq!(list.last(), None);
}

#[test]
fn doubly_linked_list() {
    let mut list: DoublyLinkedList<i32> = (1..=5).collect();
    let first = list.first().unwrap();
    let third = list.after(list.after(first).unwrap().unwrap()).unwrap().unwrap();
    assert_eq!(list.element(third), Ok(&3));

    list.add_before(third, 25).unwrap();
    list.add_after(third, 35).unwrap();
    assert_eq!(collect(&list), vec![1, 2, 25, 3, 35, 4, 5]);
    assert_eq!(collect(list.iter().rev()), vec![5, 4, 35, 3, 25, 2, 1]);

    assert_eq!(list.remove(third), Ok(3));
    assert_eq!(list.remove(third), Err(Error::Deprecated));
    assert_eq!(list.remove_first(), Ok(1));
    assert_eq!(list.remove_last(), Ok(5));
    assert_eq!(list.before(list.first().unwrap()), Ok(None));
    assert_eq!(collect(&list), vec![2, 25, 35, 4]);

    let other: DoublyLinkedList<i32> = (1..=5).collect();
    let foreign = other.first().unwrap();
    assert_eq!(list.element(foreign), Err(Error::StructuralMismatch));
    assert_eq!(format!("{:?}", list), "[2, 25, 35, 4]");
}

#[test]
fn circularly_linked_list() {
    let mut ring = CircularlyLinkedList::new();
    assert_eq!(ring.current(), None);
    ring.rotate();

    let one = ring.add_current(1);
    assert_eq!(ring.after(one), Ok(one));
    ring.extend(vec![2, 3]);
    assert_eq!(collect(&ring), vec![1, 2, 3]);

    let three = ring.last().unwrap();
    // after the tail is the front
    ring.add_after(three, 4).unwrap();
    assert_eq!(collect(&ring), vec![4, 1, 2, 3]);

    for _ in 0..3 {
        ring.rotate();
    }
    assert_eq!(ring.front(), Ok(&3));
    assert_eq!(ring.remove_current(), Ok(3));
    assert_eq!(collect(&ring), vec![4, 1, 2]);
    assert_eq!(ring.element(three), Err(Error::Deprecated));

    while !ring.is_empty() {
        ring.remove_current().unwrap();
    }
    assert_eq!(ring.remove_current(), Err(Error::Empty("list")));
}

#[test]
fn linked_queue_and_stack() {
    let mut queue = LinkedQueue::new();
    let mut stack = LinkedStack::new();
    for i in 1..=4 {
        queue.enqueue(i);
        stack.push(i);
    }
    assert_eq!(queue.first(), Ok(&1));
    assert_eq!(stack.top(), Ok(&4));
    assert_eq!(collect(queue.iter()), vec![1, 2, 3, 4]);
    assert_eq!(collect(stack.iter()), vec![4, 3, 2, 1]);

    let dequeued: Vec<i32> = std::iter::from_fn(|| queue.dequeue().ok()).collect();
    let popped: Vec<i32> = std::iter::from_fn(|| stack.pop().ok()).collect();
    assert_eq!(dequeued, vec![1, 2, 3, 4]);
    assert_eq!(popped, vec![4, 3, 2, 1]);
    assert_eq!(queue.dequeue(), Err(Error::Empty("queue")));
    assert_eq!(stack.pop(), Err(Error::Empty("stack")));
    assert_eq!(stack.top(), Err(Error::Empty("stack")));
}

/// Drains a queue through the trait only.
fn drain<Q: Queue<i32>>(queue: &mut Q) -> Vec<i32> {
    let mut drained = vec![];
    while !queue.is_empty() {
        drained.push(queue.dequeue().unwrap());
    }
    drained
}

#[test]
fn queues_through_the_trait() {
    fn fill<Q: Queue<i32> + Default>(elements: &[i32]) -> Q {
        let mut queue = Q::default();
        for &element in elements {
            queue.enqueue(element).unwrap();
        }
        queue
    }
    let elements = [5, 1, 4, 2, 3];

    assert_eq!(drain(&mut fill::<LinkedQueue<i32>>(&elements)), elements);
    assert_eq!(drain(&mut fill::<CircularQueue<i32>>(&elements)), elements);
    assert_eq!(drain(&mut fill::<LinkedDeque<i32>>(&elements)), elements);

    let sorted = vec![1, 2, 3, 4, 5];
    assert_eq!(drain(&mut fill::<SortedPriorityQueue<i32>>(&elements)), sorted);
    assert_eq!(drain(&mut fill::<UnsortedPriorityQueue<i32>>(&elements)), sorted);
    assert_eq!(drain(&mut fill::<AdaptableHeapPriorityQueue<i32>>(&elements)), sorted);

    let mut buffer = CircularArrayBuffer::new(8);
    for &element in elements.iter() {
        Queue::enqueue(&mut buffer, element).unwrap();
    }
    assert_eq!(drain(&mut buffer), elements);
}

#[test]
fn deque_both_ends() {
    let mut deque = LinkedDeque::new();
    deque.add_first(2);
    deque.add_first(1);
    deque.add_last(3);
    assert_eq!(deque.first(), Ok(&1));
    assert_eq!(deque.last(), Ok(&3));
    assert_eq!(deque.remove_last(), Ok(3));
    assert_eq!(deque.remove_first(), Ok(1));
    assert_eq!(deque.remove_first(), Ok(2));
    assert_eq!(deque.remove_last(), Err(Error::Empty("deque")));

    // as a stack, the top is at the back
    Stack::push(&mut deque, 1);
    Stack::push(&mut deque, 2);
    assert_eq!(Stack::top(&deque), Ok(&2));
    assert_eq!(Stack::pop(&mut deque), Ok(2));
    assert_eq!(Stack::len(&deque), 1);
}

#[test]
fn circular_queue_rotation() {
    let mut queue: CircularQueue<i32> = (1..=5).collect();
    queue.rotate(7);
    assert_eq!(collect(queue.iter()), vec![3, 4, 5, 1, 2]);
    queue.rotate(5);
    assert_eq!(queue.first(), Ok(&3));
    queue.enqueue(6);
    assert_eq!(collect(queue.iter()), vec![3, 4, 5, 1, 2, 6]);

    let mut empty = CircularQueue::<i32>::new();
    empty.rotate(3);
    assert_eq!(empty.first(), Err(Error::Empty("queue")));
}

#[test]
fn bounded_buffer() {
    let mut buffer = CircularArrayBuffer::new(3);
    assert_eq!(buffer.dequeue(), Err(Error::Empty("buffer")));
    buffer.extend(1..=5);
    assert!(buffer.is_full());
    assert_eq!(collect(buffer.iter()), vec![1, 2, 3]);
    assert_eq!(buffer.enqueue(4), Err(Error::Full));

    // wrap around the end of the storage
    assert_eq!(buffer.dequeue(), Ok(1));
    assert_eq!(buffer.dequeue(), Ok(2));
    buffer.enqueue(4).unwrap();
    buffer.enqueue(5).unwrap();
    assert_eq!(collect(buffer.iter()), vec![3, 4, 5]);
    assert_eq!(buffer.first(), Ok(&3));
    assert_eq!(buffer.capacity(), 3);

    buffer.clear();
    assert!(buffer.is_empty());
    assert_eq!(buffer.first(), Err(Error::Empty("buffer")));
}

#[test]
fn overwritable_buffer_drops_the_oldest() {
    let mut buffer = CircularArrayBuffer::overwritable(3);
    assert!(buffer.is_overwritable());
    for i in 1..=7 {
        buffer.enqueue(i).unwrap();
        assert!(buffer.len() <= 3);
    }
    assert_eq!(collect(buffer.iter()), vec![5, 6, 7]);
    assert_eq!(buffer.dequeue(), Ok(5));
    buffer.enqueue(8).unwrap();
    buffer.enqueue(9).unwrap();
    assert_eq!(format!("{:?}", buffer), "[7, 8, 9]");
}

#[test]
#[should_panic]
fn zero_capacity_buffer_panics() {
    CircularArrayBuffer::<i32>::new(0);
}

#[test]
fn priority_queue_ties_are_fifo() {
    let entries = [(2, "a"), (1, "b"), (2, "c"), (1, "d"), (3, "e")];
    let expected = vec![(1, "b"), (1, "d"), (2, "a"), (2, "c"), (3, "e")];

    let mut sorted = SortedPriorityQueue::with_comparator(ByKey(Natural));
    let mut unsorted = UnsortedPriorityQueue::with_comparator(ByKey(Natural));
    for &entry in entries.iter() {
        sorted.enqueue(entry);
        unsorted.enqueue(entry);
    }
    assert_eq!(sorted.iter().copied().collect::<Vec<_>>(), expected);
    assert_eq!(unsorted.first(), Ok(&(1, "b")));

    let from_sorted: Vec<_> = std::iter::from_fn(|| sorted.dequeue().ok()).collect();
    let from_unsorted: Vec<_> = std::iter::from_fn(|| unsorted.dequeue().ok()).collect();
    assert_eq!(from_sorted, expected);
    assert_eq!(from_unsorted, expected);
    assert_eq!(sorted.first(), Err(Error::Empty("queue")));
}

#[test]
fn reversed_priority() {
    let mut queue = SortedPriorityQueue::with_comparator(Reverse(Natural));
    queue.extend(vec![3, 9, 1]);
    assert_eq!(queue.dequeue(), Ok(9));
    let mut heap = AdaptableHeapPriorityQueue::with_comparator(Reverse(Natural));
    heap.extend(vec![3, 9, 1]);
    assert_eq!(heap.dequeue(), Ok(9));
}

#[test]
fn heap_sorts_any_permutation() {
    let mut elements: Vec<i32> = (0..200).collect();
    elements.shuffle(&mut rand::thread_rng());

    let mut built: AdaptableHeapPriorityQueue<i32> = elements.iter().copied().collect();
    let mut grown = AdaptableHeapPriorityQueue::new();
    for &element in elements.iter() {
        grown.enqueue(element);
    }
    let drained_built: Vec<i32> = std::iter::from_fn(|| built.dequeue().ok()).collect();
    let drained_grown: Vec<i32> = std::iter::from_fn(|| grown.dequeue().ok()).collect();
    let expected: Vec<i32> = elements.iter().copied().sorted().collect();
    assert_eq!(drained_built, expected);
    assert_eq!(drained_grown, expected);
}

#[test]
fn heap_locators_follow_their_elements() {
    let mut queue = AdaptableHeapPriorityQueue::new();
    let locators: Vec<_> = (0..20).map(|i| (i, queue.enqueue(i * 10))).collect();

    // every locator still finds its element after all the sifting
    for &(i, locator) in locators.iter() {
        assert_eq!(queue.element(locator), Ok(&(i * 10)));
    }

    let (_, seventy) = locators[7];
    assert_eq!(queue.update(seventy, -5), Ok(70));
    assert_eq!(queue.first_locator(), Some(seventy));
    assert_eq!(queue.first(), Ok(&-5));

    let (_, zero) = locators[0];
    assert_eq!(queue.update(zero, 500), Ok(0));
    let (_, hundred) = locators[10];
    assert_eq!(queue.remove(hundred), Ok(100));
    assert_eq!(queue.remove(hundred), Err(Error::Deprecated));
    assert_eq!(queue.update(hundred, 1), Err(Error::Deprecated));

    let drained: Vec<i32> = std::iter::from_fn(|| queue.dequeue().ok()).collect();
    let mut expected: Vec<i32> = (1..20).filter(|&i| i != 7 && i != 10).map(|i| i * 10).collect();
    expected.insert(0, -5);
    expected.push(500);
    assert_eq!(drained, expected);
    assert_eq!(queue.element(zero), Err(Error::Deprecated));
}

#[test]
fn heap_rejects_foreign_locators() {
    let mut queue = AdaptableHeapPriorityQueue::new();
    let mut other = AdaptableHeapPriorityQueue::new();
    queue.enqueue(1);
    let foreign = other.enqueue(1);
    assert_eq!(queue.remove(foreign), Err(Error::StructuralMismatch));
    assert_eq!(queue.element(foreign), Err(Error::StructuralMismatch));

    let two = queue.enqueue(2);
    queue.clear();
    assert!(queue.is_empty());
    assert_eq!(queue.element(two), Err(Error::Deprecated));
    assert_eq!(queue.dequeue(), Err(Error::Empty("queue")));
}

#[test]
fn heap_peek_mut() {
    let mut queue: AdaptableHeapPriorityQueue<i32> = vec![4, 8, 2, 6].into_iter().collect();
    {
        let mut top = queue.peek_mut().unwrap();
        assert_eq!(*top, 2);
        *top = 7;
    }
    assert_eq!(queue.first(), Ok(&4));

    let top = queue.peek_mut().unwrap();
    let locator = PeekMut::locator(&top);
    assert_eq!(PeekMut::pop(top), 4);
    assert_eq!(queue.element(locator), Err(Error::Deprecated));
    assert_eq!(queue.len(), 3);

    let drained: Vec<i32> = std::iter::from_fn(|| queue.dequeue().ok()).collect();
    assert_eq!(drained, vec![6, 7, 8]);
    assert!(queue.peek_mut().is_none());
}
