use std::rc::Rc;

use crate::component::Component;
use crate::context::{ContextFrame, with_context_frame};
use crate::props::Props;
use crate::runtime::{RenderContext, RenderFlags, RenderGuard};
use crate::view::View;

/// A mounted component: owns its state slots, its props, and the last view.
///
/// Rendering is explicit. State setters only mark the root dirty; the owner
/// decides when to call [`Root::render`] (or [`Root::flush`]).
pub struct Root {
    component: Component,
    props: Props,
    context: ContextFrame,
    ctx: Rc<RenderContext>,
    view: View,
    renders: usize,
}

impl Root {
    /// Mounts `component` and runs the first render.
    pub fn new(component: Component, props: Props) -> Self {
        Self::with_context(component, props, ContextFrame::new())
    }

    /// Like [`Root::new`], with context values provided to every render.
    pub fn with_context(component: Component, props: Props, context: ContextFrame) -> Self {
        let mut root = Root {
            component,
            props,
            context,
            ctx: Rc::new(RenderContext::new()),
            view: crate::view::Empty(),
            renders: 0,
        };
        root.render();
        root
    }

    pub fn render(&mut self) -> &View {
        let why = self.ctx.invalidator().take();
        self.renders += 1;
        log::trace!(
            "render #{} of {} ({:?})",
            self.renders,
            self.component.name(),
            why
        );

        let view = {
            let _guard = RenderGuard::begin(self.ctx.clone());
            let component = &self.component;
            let props = &self.props;
            with_context_frame(self.context.clone(), || component.render(props))
        };
        self.view = view;
        &self.view
    }

    /// Renders only when something invalidated the root. Returns whether it did.
    pub fn flush(&mut self) -> bool {
        if self.is_dirty() {
            self.render();
            true
        } else {
            false
        }
    }

    pub fn set_props(&mut self, props: Props) {
        self.props = props;
        self.ctx.invalidator().invalidate(RenderFlags::PROPS);
    }

    pub fn props(&self) -> &Props {
        &self.props
    }

    pub fn provide<T: Clone + 'static>(&mut self, value: T) {
        self.context.insert(value);
    }

    pub fn view(&self) -> &View {
        &self.view
    }

    pub fn is_dirty(&self) -> bool {
        !self.ctx.invalidator().flags().is_empty()
    }

    pub fn render_count(&self) -> usize {
        self.renders
    }

    pub fn slot_count(&self) -> usize {
        self.ctx.slot_count()
    }
}
