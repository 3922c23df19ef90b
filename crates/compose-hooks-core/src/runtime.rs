use std::any::Any;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use bitflags::bitflags;

thread_local! {
    static CURRENT: RefCell<Option<Rc<RenderContext>>> = const { RefCell::new(None) };
}

bitflags! {
    /// Why a render root needs another pass.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct RenderFlags: u8 {
        const PROPS = 1 << 0;
        const STATE = 1 << 1;
    }
}

/// Handle that marks its render root dirty. Captured by state setters.
#[derive(Clone, Default)]
pub struct Invalidator(Rc<Cell<RenderFlags>>);

impl Invalidator {
    pub fn invalidate(&self, why: RenderFlags) {
        self.0.set(self.0.get() | why);
    }

    pub fn flags(&self) -> RenderFlags {
        self.0.get()
    }

    pub(crate) fn take(&self) -> RenderFlags {
        self.0.replace(RenderFlags::empty())
    }
}

/// One remembered value.
struct Slot {
    value: Box<dyn Any>,
    // slots claimed by remember calls made inside this slot's init
    nested: usize,
}

impl Slot {
    fn reserved() -> Self {
        Slot {
            value: Box::new(()),
            nested: 0,
        }
    }
}

/// Remembered values of one render root.
#[derive(Default)]
pub struct SlotTable {
    slots: Vec<Slot>,
    cursor: usize,
    keyed_slots: HashMap<String, Box<dyn Any>>,
}

impl SlotTable {
    pub fn len(&self) -> usize {
        self.slots.len() + self.keyed_slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Default)]
pub struct RenderContext {
    slots: RefCell<SlotTable>,
    invalidator: Invalidator,
}

impl RenderContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn invalidator(&self) -> &Invalidator {
        &self.invalidator
    }

    pub fn slot_count(&self) -> usize {
        self.slots.borrow().len()
    }
}

/// Installs a render context for the duration of one pass and resets the
/// slot cursor. The previous context is restored on drop.
pub struct RenderGuard {
    prev: Option<Rc<RenderContext>>,
}

impl RenderGuard {
    pub fn begin(ctx: Rc<RenderContext>) -> Self {
        ctx.slots.borrow_mut().cursor = 0;
        let prev = CURRENT.with(|cur| cur.borrow_mut().replace(ctx));
        RenderGuard { prev }
    }
}

impl Drop for RenderGuard {
    fn drop(&mut self) {
        let prev = self.prev.take();
        CURRENT.with(|cur| *cur.borrow_mut() = prev);
    }
}

fn current() -> Option<Rc<RenderContext>> {
    CURRENT.with(|cur| cur.borrow().clone())
}

/// Invalidator of the root currently rendering, if any.
pub fn current_invalidator() -> Option<Invalidator> {
    current().map(|ctx| ctx.invalidator.clone())
}

/// Slot-based remember: the Nth call in a render pass always refers to the
/// Nth stored value, so call order must not depend on conditions.
///
/// `init` may call `remember` itself. Those slots follow the outer one and are
/// skipped on later passes, when `init` no longer runs.
pub fn remember<T: 'static>(init: impl FnOnce() -> T) -> Rc<T> {
    let Some(ctx) = current() else {
        log::warn!("remember called outside of a render pass; value will not persist");
        return Rc::new(init());
    };

    let cursor = {
        let mut guard = ctx.slots.borrow_mut();
        let table = &mut *guard;
        let cursor = table.cursor;
        match table.slots.get(cursor) {
            Some(slot) => {
                if let Some(rc) = slot.value.downcast_ref::<Rc<T>>() {
                    table.cursor += 1 + slot.nested;
                    return rc.clone();
                }
                log::warn!(
                    "remember: slot {} type changed; replacing. \
                     If this is due to conditional hooks, prefer remember_with_key.",
                    cursor
                );
            }
            None => table.slots.push(Slot::reserved()),
        }
        table.cursor += 1;
        cursor
    };

    // init may itself remember, so the table is not borrowed while it runs
    let rc: Rc<T> = Rc::new(init());
    let mut table = ctx.slots.borrow_mut();
    let nested = table.cursor - cursor - 1;
    table.slots[cursor] = Slot {
        value: Box::new(rc.clone()),
        nested,
    };
    rc
}

/// Key-based remember, stable across conditional branches.
pub fn remember_with_key<T: 'static>(key: impl Into<String>, init: impl FnOnce() -> T) -> Rc<T> {
    let key = key.into();
    let Some(ctx) = current() else {
        log::warn!("remember_with_key('{key}') called outside of a render pass");
        return Rc::new(init());
    };

    if let Some(existing) = ctx.slots.borrow().keyed_slots.get(&key) {
        if let Some(rc) = existing.downcast_ref::<Rc<T>>() {
            return rc.clone();
        }
        log::warn!(
            "remember_with_key: key '{}' reused with a different type; replacing.",
            key
        );
    }

    let rc: Rc<T> = Rc::new(init());
    ctx.slots
        .borrow_mut()
        .keyed_slots
        .insert(key, Box::new(rc.clone()));
    rc
}
