use std::cell::RefCell;
use std::rc::Rc;

pub type SubId = usize;

type Subscriber<T> = Rc<dyn Fn(&T)>;

/// Cloneable, subscribable value. State cells and context values are built on it.
pub struct Signal<T>(Rc<RefCell<Inner<T>>>);

struct Inner<T> {
    value: T,
    next_sub: SubId,
    subs: Vec<(SubId, Subscriber<T>)>,
}

impl<T> Clone for Signal<T> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<T: Clone> Signal<T> {
    pub fn new(value: T) -> Self {
        Self(Rc::new(RefCell::new(Inner {
            value,
            next_sub: 0,
            subs: Vec::new(),
        })))
    }

    pub fn get(&self) -> T {
        self.0.borrow().value.clone()
    }

    pub fn set(&self, v: T) {
        self.0.borrow_mut().value = v;
        self.notify();
    }

    pub fn update<F: FnOnce(&mut T)>(&self, f: F) {
        f(&mut self.0.borrow_mut().value);
        self.notify();
    }

    pub fn subscribe(&self, f: impl Fn(&T) + 'static) -> SubId {
        let mut inner = self.0.borrow_mut();
        let id = inner.next_sub;
        inner.next_sub += 1;
        inner.subs.push((id, Rc::new(f)));
        id
    }

    pub fn unsubscribe(&self, id: SubId) {
        self.0.borrow_mut().subs.retain(|(sid, _)| *sid != id);
    }

    pub fn subscriber_count(&self) -> usize {
        self.0.borrow().subs.len()
    }

    pub fn ptr_eq(a: &Signal<T>, b: &Signal<T>) -> bool {
        Rc::ptr_eq(&a.0, &b.0)
    }

    // Subscribers run after the borrow is released so they may read the signal.
    fn notify(&self) {
        let (value, subs): (T, Vec<Subscriber<T>>) = {
            let inner = self.0.borrow();
            (
                inner.value.clone(),
                inner.subs.iter().map(|(_, s)| s.clone()).collect(),
            )
        };
        for s in subs {
            s(&value);
        }
    }
}

pub fn signal<T: Clone>(t: T) -> Signal<T> {
    Signal::new(t)
}
