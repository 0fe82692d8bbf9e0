use baconpath_core::{Error, MinPriorityQueue};

fn drain<T: PartialEq>(queue: &mut MinPriorityQueue<T, u32>) -> Vec<T> {
    let mut items = Vec::new();
    while !queue.is_empty() {
        items.push(queue.dequeue().unwrap());
    }
    items
}

#[test]
fn test_build_then_dequeue_in_priority_order() {
    let mut queue = MinPriorityQueue::build(vec!["a", "b", "c"], vec![3, 1, 2]).unwrap();

    assert_eq!(queue.len(), 3);
    assert_eq!(queue.peek(), Ok(&"b"));
    assert_eq!(drain(&mut queue), vec!["b", "c", "a"]);
}

#[test]
fn test_build_rejects_mismatched_lengths() {
    let result = MinPriorityQueue::build(vec!["a", "b"], vec![1]);

    assert_eq!(
        result.err(),
        Some(Error::MismatchedLengths {
            items: 2,
            priorities: 1
        })
    );
}

#[test]
fn test_enqueue_dequeue_yields_non_decreasing_priorities() {
    let priorities = [5, 3, 8, 1, 9, 2, 7, 1, 4, 6, 0];
    let mut queue = MinPriorityQueue::new();
    for priority in priorities {
        queue.enqueue(priority, priority);
    }

    let mut expected = priorities.to_vec();
    expected.sort();
    assert_eq!(drain(&mut queue), expected);
}

#[test]
fn test_build_from_larger_input_is_a_heap() {
    let priorities: Vec<u32> = vec![42, 7, 19, 3, 88, 3, 61, 0, 25, 14, 9, 70];
    let mut queue = MinPriorityQueue::build(priorities.clone(), priorities.clone()).unwrap();

    let mut expected = priorities;
    expected.sort();
    assert_eq!(drain(&mut queue), expected);
}

#[test]
fn test_len_is_enqueues_minus_dequeues() {
    let mut queue = MinPriorityQueue::new();
    queue.enqueue("a", 2);
    queue.enqueue("b", 1);
    queue.enqueue("c", 3);
    assert_eq!(queue.len(), 3);

    queue.dequeue().unwrap();
    assert_eq!(queue.len(), 2);

    queue.enqueue("d", 0);
    queue.dequeue().unwrap();
    queue.dequeue().unwrap();
    assert_eq!(queue.len(), 1);
    assert_eq!(queue.peek(), Ok(&"c"));
}

#[test]
fn test_empty_access_fails() {
    let mut queue: MinPriorityQueue<&str, u32> = MinPriorityQueue::new();

    assert_eq!(queue.peek(), Err(Error::EmptyContainer("priority queue")));
    assert_eq!(queue.dequeue(), Err(Error::EmptyContainer("priority queue")));

    queue.enqueue("only", 1);
    assert_eq!(queue.dequeue(), Ok("only"));
    assert!(queue.dequeue().is_err());
}

#[test]
fn test_decrease_priority_moves_item_forward() {
    let mut queue = MinPriorityQueue::build(vec!["a", "b", "c"], vec![3, 1, 2]).unwrap();

    assert!(queue.decrease_priority(&"a", 3, 0));
    assert_eq!(queue.peek(), Ok(&"a"));
    assert_eq!(drain(&mut queue), vec!["a", "b", "c"]);
}

#[test]
fn test_decrease_priority_with_higher_value_is_noop() {
    let mut queue = MinPriorityQueue::build(vec!["a", "b", "c"], vec![3, 1, 2]).unwrap();

    assert!(!queue.decrease_priority(&"b", 1, 5));
    assert!(!queue.decrease_priority(&"b", 1, 1));
    assert_eq!(drain(&mut queue), vec!["b", "c", "a"]);
}

#[test]
fn test_decrease_priority_needs_matching_old_priority() {
    let mut queue = MinPriorityQueue::build(vec!["a", "b"], vec![3, 1]).unwrap();

    // "a" is not stored at priority 4
    assert!(!queue.decrease_priority(&"a", 4, 0));
    assert!(!queue.decrease_priority(&"missing", 3, 0));
    assert_eq!(drain(&mut queue), vec!["b", "a"]);
}

#[test]
fn test_decrease_priority_only_touches_matching_slot() {
    let mut queue = MinPriorityQueue::new();
    queue.enqueue("x", 5);
    queue.enqueue("x", 7);
    queue.enqueue("y", 6);

    assert!(queue.decrease_priority(&"x", 7, 1));

    // x@1, x@5, y@6
    assert_eq!(drain(&mut queue), vec!["x", "x", "y"]);
}
