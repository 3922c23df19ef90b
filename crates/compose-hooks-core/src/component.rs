use std::fmt;
use std::rc::Rc;

use crate::props::Props;
use crate::view::View;

/// A render function from props to a view. Clones share identity.
#[derive(Clone)]
pub struct Component {
    name: Rc<str>,
    render: Rc<dyn Fn(&Props) -> View>,
}

impl Component {
    pub fn new(render: impl Fn(&Props) -> View + 'static) -> Self {
        Self::named("Anonymous", render)
    }

    pub fn named(name: impl Into<Rc<str>>, render: impl Fn(&Props) -> View + 'static) -> Self {
        Self {
            name: name.into(),
            render: Rc::new(render),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn render(&self, props: &Props) -> View {
        (self.render)(props)
    }

    /// True when both handles refer to the same render function.
    pub fn ptr_eq(a: &Component, b: &Component) -> bool {
        Rc::ptr_eq(&a.render, &b.render)
    }
}

impl fmt::Debug for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Component").field("name", &self.name).finish()
    }
}
