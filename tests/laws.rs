use lifo::{Stack, VecStack};
use std::{sync::Mutex, thread};

// N pushes followed by N pops come back in reverse order
#[test_log::test]
fn test_lifo_law() {
    for n in [0usize, 1, 2, 17, 256] {
        let pushed: Vec<usize> = (0..n).map(|i| i * 31 % 97).collect();
        let mut stack = VecStack::new();
        for v in &pushed {
            stack.push(*v);
        }
        let mut popped = Vec::with_capacity(n);
        while !stack.empty() {
            popped.push(stack.pop().unwrap());
        }
        popped.reverse();
        assert_eq!(pushed, popped);
    }
}

#[test_log::test]
fn test_round_trip_restores_emptiness() {
    let mut stack = VecStack::new();
    for before in [true, false] {
        if !before {
            stack.push("base");
        }
        assert_eq!(before, stack.empty());
        stack.push("a");
        assert_eq!("a", stack.pop().unwrap());
        assert_eq!(before, stack.empty());
    }
}

#[test_log::test]
fn test_push_then_peek_keeps_emptiness() {
    let mut stack = VecStack::new();
    stack.push(Some(5));
    let empty = stack.empty();
    assert_eq!(&Some(5), stack.peek().unwrap());
    assert_eq!(empty, stack.empty());

    // Option::None is a value like any other
    stack.push(None);
    assert_eq!(&None, stack.peek().unwrap());
    assert_eq!(2, stack.len());
}

// the stack has no locking of its own; sharing goes through a caller owned Mutex
#[test_log::test]
fn test_external_mutex() {
    let stack = Mutex::new(VecStack::new());
    thread::scope(|s| {
        for t in 0..4 {
            let stack = &stack;
            s.spawn(move || {
                for i in 0..100 {
                    stack.lock().unwrap().push(t * 100 + i);
                }
            });
        }
    });
    let mut stack = stack.into_inner().unwrap();
    assert_eq!(400, stack.len());
    let mut seen = Vec::new();
    while let Ok(v) = stack.pop() {
        seen.push(v);
    }
    seen.sort_unstable();
    assert_eq!((0..400).collect::<Vec<_>>(), seen);
}
