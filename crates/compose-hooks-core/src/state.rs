//! Stateful cells for hooks.
//!
//! A cell lives in a render root's slot table (see [`remember`]) and marks the
//! root dirty whenever it is written. Reads return the value as of the write,
//! so the caller re-renders the root to observe it in props.

use std::fmt::Display;
use std::marker::PhantomData;
use std::rc::Rc;

use crate::props::{Callback, PropValue};
use crate::runtime::{RenderFlags, current_invalidator, remember};
use crate::signal::{Signal, SubId, signal};

/// Setter half of [`use_state`].
pub struct SetState<T: Clone + 'static> {
    cell: Signal<T>,
}

impl<T: Clone + 'static> Clone for SetState<T> {
    fn clone(&self) -> Self {
        Self {
            cell: self.cell.clone(),
        }
    }
}

impl<T: Clone + 'static> SetState<T> {
    pub fn set(&self, value: T) {
        self.cell.set(value);
    }

    pub fn update(&self, f: impl FnOnce(&mut T)) {
        self.cell.update(f);
    }

    /// Latest written value, which may be newer than the rendered one.
    pub fn get(&self) -> T {
        self.cell.get()
    }
}

impl<T> SetState<T>
where
    T: Clone + Into<PropValue> + TryFrom<PropValue> + 'static,
    <T as TryFrom<PropValue>>::Error: Display,
{
    fn set_prop(&self, value: PropValue) {
        match T::try_from(value) {
            Ok(v) => self.set(v),
            Err(e) => log::warn!("state setter ignored value: {e}"),
        }
    }

    /// Exposes the setter as a prop callback.
    ///
    /// The callback takes either a new value or an updater callback, which is
    /// called with the current value and returns the next one.
    pub fn into_callback(self) -> Callback {
        Callback::new(move |args| {
            match args.first() {
                Some(PropValue::Callback(updater)) => {
                    let current: PropValue = self.get().into();
                    let next = updater.call(&[current]);
                    self.set_prop(next);
                }
                Some(value) => self.set_prop(value.clone()),
                None => log::warn!("state setter called without a value"),
            }
            PropValue::Null
        })
    }
}

impl<T> From<SetState<T>> for PropValue
where
    T: Clone + Into<PropValue> + TryFrom<PropValue> + 'static,
    <T as TryFrom<PropValue>>::Error: Display,
{
    fn from(setter: SetState<T>) -> Self {
        PropValue::Callback(setter.into_callback())
    }
}

/// Returns the current value of this call site's cell and its setter.
/// `init` runs on the first render only.
pub fn use_state<T: Clone + 'static>(init: impl FnOnce() -> T) -> (T, SetState<T>) {
    let cell: Rc<Signal<T>> = remember(|| {
        let cell = signal(init());
        if let Some(inv) = current_invalidator() {
            cell.subscribe(move |_| inv.invalidate(RenderFlags::STATE));
        }
        cell
    });
    (
        cell.get(),
        SetState {
            cell: (*cell).clone(),
        },
    )
}

/// Unsubscribes when the owning root's slots are dropped.
struct Subscription<T: Clone> {
    sig: Signal<T>,
    id: SubId,
}

impl<T: Clone> Drop for Subscription<T> {
    fn drop(&mut self) {
        self.sig.unsubscribe(self.id);
    }
}

/// Reads a signal owned elsewhere (typically a context value) and re-renders
/// the current root when it changes. The subscription lives as long as the root.
pub fn use_signal<T: Clone + 'static>(sig: &Signal<T>) -> T {
    remember(|| {
        current_invalidator().map(|inv| Subscription {
            sig: sig.clone(),
            id: sig.subscribe(move |_| inv.invalidate(RenderFlags::STATE)),
        })
    });
    sig.get()
}

/// State container driven by actions.
pub trait StateHolder: 'static {
    type State: Clone + 'static;
    type Event;

    fn initial_state() -> Self::State;
    fn reduce(state: &Self::State, event: Self::Event) -> Self::State;
}

/// Dispatch half of [`use_reducer`].
pub struct Dispatch<H: StateHolder> {
    setter: SetState<H::State>,
    _holder: PhantomData<H>,
}

impl<H: StateHolder> Clone for Dispatch<H> {
    fn clone(&self) -> Self {
        Self {
            setter: self.setter.clone(),
            _holder: PhantomData,
        }
    }
}

impl<H: StateHolder> Dispatch<H> {
    pub fn dispatch(&self, event: H::Event) {
        let next = H::reduce(&self.setter.get(), event);
        self.setter.set(next);
    }
}

pub fn use_reducer<H: StateHolder>() -> (H::State, Dispatch<H>) {
    let (state, setter) = use_state(H::initial_state);
    (
        state,
        Dispatch {
            setter,
            _holder: PhantomData,
        },
    )
}
