//! Iterator: walk a collection without exposing how it stores things. The
//! stack hands out its own iterator type; callers only ever see `&T`s in
//! most-recent-first order.

use itertools::Itertools;

// =============================================================================
// A generic stack with its own iterator
// =============================================================================

#[derive(Default)]
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Stack<T> {
    pub fn new() -> Self {
        Stack { items: Vec::new() }
    }

    pub fn push(&mut self, value: T) {
        self.items.push(value);
    }

    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> StackIter<'_, T> {
        StackIter {
            remaining: &self.items,
        }
    }
}

/// Borrowing iterator over a [`Stack`], yielding most recent first.
pub struct StackIter<'a, T> {
    remaining: &'a [T],
}

impl<'a, T> Iterator for StackIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let (last, rest) = self.remaining.split_last()?;
        self.remaining = rest;
        Some(last)
    }
}

impl<'a, T> IntoIterator for &'a Stack<T> {
    type Item = &'a T;
    type IntoIter = StackIter<'a, T>;

    fn into_iter(self) -> StackIter<'a, T> {
        self.iter()
    }
}

// =============================================================================
// Browse history built on the stack
// =============================================================================

#[derive(Default)]
pub struct BrowseHistory {
    urls: Stack<String>,
}

impl BrowseHistory {
    pub fn push(&mut self, url: impl Into<String>) {
        self.urls.push(url.into());
    }

    pub fn pop(&mut self) -> Option<String> {
        self.urls.pop()
    }

    /// Most recent URL first.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.urls.iter().map(String::as_str)
    }
}

// =============================================================================
// Demo
// =============================================================================

pub fn demo() {
    crate::banner("Iterator");

    let mut history = BrowseHistory::default();
    history.push("a.example");
    history.push("b.example");
    history.push("c.example");
    println!("history: {}", history.iter().join(", "));

    history.pop();
    println!("after back: {}", history.iter().join(", "));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iteration_is_most_recent_first() {
        let mut stack = Stack::new();
        stack.push(1);
        stack.push(2);
        stack.push(3);
        let seen: Vec<i32> = stack.iter().copied().collect();
        assert_eq!(seen, [3, 2, 1]);
    }

    #[test]
    fn pop_removes_the_most_recent_element() {
        let mut history = BrowseHistory::default();
        history.push("a");
        history.push("b");
        history.push("c");
        assert_eq!(history.pop().as_deref(), Some("c"));
        let seen: Vec<&str> = history.iter().collect();
        assert_eq!(seen, ["b", "a"]);
    }

    #[test]
    fn stack_works_in_for_loops() {
        let mut stack = Stack::new();
        stack.push("x");
        let mut count = 0;
        for _ in &stack {
            count += 1;
        }
        assert_eq!(count, 1);
    }

    #[test]
    fn empty_stack_yields_nothing() {
        let stack: Stack<u8> = Stack::new();
        assert!(stack.is_empty());
        assert_eq!(stack.iter().next(), None);
    }
}
