use compose_hooks_core::{Component, PropValue, Props};

use crate::diagnostics::{Collision, Diagnostics};
use crate::error::ComposeError;
use crate::hooks::{HookResult, HooksSpec};

/// Start composing: `compose(hooks).apply(component)?`.
pub fn compose(hooks: impl Into<HooksSpec>) -> Composer {
    Composer::new(hooks)
}

#[derive(Clone, Debug)]
pub struct Composer {
    hooks: HooksSpec,
    diagnostics: Diagnostics,
}

impl Composer {
    pub fn new(hooks: impl Into<HooksSpec>) -> Self {
        Self {
            hooks: hooks.into(),
            diagnostics: Diagnostics::default(),
        }
    }

    /// Routes collision warnings to `diagnostics` instead of the `log` facade.
    pub fn with_diagnostics(mut self, diagnostics: Diagnostics) -> Self {
        self.diagnostics = diagnostics;
        self
    }

    /// Wraps `component` so every render runs the hooks and passes their
    /// merged output, overlaid by the caller's props, to it.
    ///
    /// Fails when no component is given. With no hooks the component is
    /// returned as is.
    pub fn apply(
        &self,
        component: impl Into<Option<Component>>,
    ) -> Result<Component, ComposeError> {
        let component = component.into().ok_or(ComposeError::ComponentRequired)?;
        if self.hooks.is_empty() {
            return Ok(component);
        }

        let hooks = self.hooks.clone();
        let diagnostics = self.diagnostics.clone();
        let name = format!("Composed({})", component.name());
        log::debug!("composing {} over {:?}", component.name(), hooks);

        Ok(Component::named(name, move |props| {
            component.render(&merge_props(&hooks, props, &diagnostics))
        }))
    }
}

/// Runs the hooks for one render and returns the props the wrapped component
/// receives. `props` is left untouched.
pub fn merge_props(hooks: &HooksSpec, props: &Props, diagnostics: &Diagnostics) -> Props {
    let resolved = hooks.resolve(props);
    let mut merged = Props::new();

    for (name, hook) in resolved.iter() {
        match hook.call() {
            HookResult::Sequence(items) => {
                assign(&mut merged, name.to_string(), PropValue::Seq(items), diagnostics)
            }
            HookResult::Scalar(value) => assign(&mut merged, name.to_string(), value, diagnostics),
            HookResult::Mapping(entries) => {
                for (key, value) in entries {
                    assign(&mut merged, key, value, diagnostics);
                }
            }
        }
    }

    // caller props win without a warning, even when falsy
    merged.overlay(props);
    merged
}

fn assign(merged: &mut Props, key: String, value: PropValue, diagnostics: &Diagnostics) {
    if merged.contains_key(&key) {
        diagnostics.report(&Collision {
            key: key.clone(),
            value: value.clone(),
        });
    }
    merged.insert(key, value);
}
