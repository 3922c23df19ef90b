//! # Context
//!
//! Context values are thread-local and scoped to a closure, keyed by type:
//!
//! ```rust
//! use compose_hooks_core::*;
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Locale(&'static str);
//!
//! let seen = provide_context(Locale("de"), || use_context::<Locale>());
//! assert_eq!(seen, Some(Locale("de")));
//! assert_eq!(use_context::<Locale>(), None);
//! ```
//!
//! Provide a [`Signal`](crate::Signal) and read it with
//! [`use_signal`](crate::use_signal) to re-render when the value changes.

use std::any::{Any, TypeId};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

thread_local! {
    static CONTEXT_STACK: RefCell<Vec<ContextFrame>> = const { RefCell::new(Vec::new()) };
}

/// A set of context values, at most one per type.
#[derive(Clone, Default)]
pub struct ContextFrame(HashMap<TypeId, Rc<dyn Any>>);

impl ContextFrame {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert<T: Clone + 'static>(&mut self, value: T) {
        self.0.insert(TypeId::of::<T>(), Rc::new(value));
    }

    pub fn with<T: Clone + 'static>(mut self, value: T) -> Self {
        self.insert(value);
        self
    }

    pub fn get<T: Clone + 'static>(&self) -> Option<T> {
        self.0
            .get(&TypeId::of::<T>())
            .and_then(|v| v.downcast_ref::<T>())
            .cloned()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Runs `f` with `frame` pushed on the context stack.
pub fn with_context_frame<R>(frame: ContextFrame, f: impl FnOnce() -> R) -> R {
    // pops on unwind too
    struct Guard;
    impl Drop for Guard {
        fn drop(&mut self) {
            CONTEXT_STACK.with(|st| {
                st.borrow_mut().pop();
            });
        }
    }
    CONTEXT_STACK.with(|st| st.borrow_mut().push(frame));
    let _guard = Guard;
    f()
}

pub fn provide_context<T: Clone + 'static, R>(value: T, f: impl FnOnce() -> R) -> R {
    with_context_frame(ContextFrame::new().with(value), f)
}

/// Innermost provided value of type `T`.
pub fn use_context<T: Clone + 'static>() -> Option<T> {
    CONTEXT_STACK.with(|st| st.borrow().iter().rev().find_map(|frame| frame.get::<T>()))
}

pub fn use_context_or_default<T: Clone + Default + 'static>() -> T {
    use_context::<T>().unwrap_or_default()
}
