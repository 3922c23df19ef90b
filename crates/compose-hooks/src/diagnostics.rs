use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use compose_hooks_core::PropValue;

/// Two hooks wrote the same prop; `value` is the one that won.
#[derive(Clone, Debug, PartialEq)]
pub struct Collision {
    pub key: String,
    pub value: PropValue,
}

impl fmt::Display for Collision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "prop '{}' exists, overriding with value: {}",
            self.key, self.value
        )
    }
}

/// Where collision warnings go. Defaults to `log::warn!`.
#[derive(Clone)]
pub struct Diagnostics(Rc<dyn Fn(&Collision)>);

impl Diagnostics {
    pub fn new(sink: impl Fn(&Collision) + 'static) -> Self {
        Self(Rc::new(sink))
    }

    pub fn log() -> Self {
        Self::new(|collision| log::warn!("{collision}"))
    }

    pub fn silent() -> Self {
        Self::new(|_| {})
    }

    pub fn report(&self, collision: &Collision) {
        (self.0)(collision)
    }
}

impl Default for Diagnostics {
    fn default() -> Self {
        Self::log()
    }
}

impl fmt::Debug for Diagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Diagnostics(<sink>)")
    }
}

/// Records collisions in memory; hand [`CollisionLog::sink`] to a composer.
#[derive(Clone, Default, Debug)]
pub struct CollisionLog(Rc<RefCell<Vec<Collision>>>);

impl CollisionLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sink(&self) -> Diagnostics {
        let log = self.0.clone();
        Diagnostics::new(move |c| log.borrow_mut().push(c.clone()))
    }

    pub fn collisions(&self) -> Vec<Collision> {
        self.0.borrow().clone()
    }

    pub fn messages(&self) -> Vec<String> {
        self.0.borrow().iter().map(ToString::to_string).collect()
    }

    pub fn len(&self) -> usize {
        self.0.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }

    pub fn clear(&self) {
        self.0.borrow_mut().clear();
    }
}
