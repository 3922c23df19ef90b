use std::borrow::Cow;
use std::fmt;
use std::rc::Rc;

use compose_hooks_core::{PropValue, Props, Seq};
use indexmap::IndexMap;

/// A zero-argument hook. Whatever it returns is converted into a [`PropValue`].
#[derive(Clone)]
pub struct HookFn(Rc<dyn Fn() -> PropValue>);

impl HookFn {
    pub fn new<R: Into<PropValue>>(f: impl Fn() -> R + 'static) -> Self {
        Self(Rc::new(move || -> PropValue { f().into() }))
    }

    pub fn call(&self) -> HookResult {
        HookResult::classify((self.0)())
    }
}

impl fmt::Debug for HookFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<hook>")
    }
}

/// Named hooks, run in insertion order.
#[derive(Clone, Debug, Default)]
pub struct HookMap(IndexMap<String, HookFn>);

impl HookMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `hook` under `name`. Re-using a name replaces the hook but keeps
    /// its original position.
    pub fn insert<R: Into<PropValue>>(
        &mut self,
        name: impl Into<String>,
        hook: impl Fn() -> R + 'static,
    ) {
        self.insert_fn(name, HookFn::new(hook));
    }

    pub fn insert_fn(&mut self, name: impl Into<String>, hook: HookFn) {
        self.0.insert(name.into(), hook);
    }

    pub fn hook<R: Into<PropValue>>(
        mut self,
        name: impl Into<String>,
        hook: impl Fn() -> R + 'static,
    ) -> Self {
        self.insert(name, hook);
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &HookFn)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, HookFn)> for HookMap {
    fn from_iter<I: IntoIterator<Item = (String, HookFn)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Which hooks a composed component runs.
#[derive(Clone, Default)]
pub enum HooksSpec {
    /// No hooks: composing returns the component itself.
    #[default]
    Empty,
    Literal(HookMap),
    /// Builds the hooks from the props of each render.
    Factory(Rc<dyn Fn(&Props) -> HookMap>),
}

impl HooksSpec {
    pub fn factory(f: impl Fn(&Props) -> HookMap + 'static) -> Self {
        HooksSpec::Factory(Rc::new(f))
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, HooksSpec::Empty)
    }

    /// The hooks to run for a render with `props`.
    pub fn resolve(&self, props: &Props) -> Cow<'_, HookMap> {
        match self {
            HooksSpec::Empty => Cow::Owned(HookMap::new()),
            HooksSpec::Literal(map) => Cow::Borrowed(map),
            HooksSpec::Factory(f) => Cow::Owned(f(props)),
        }
    }
}

impl fmt::Debug for HooksSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HooksSpec::Empty => write!(f, "Empty"),
            HooksSpec::Literal(map) => f.debug_list().entries(map.names()).finish(),
            HooksSpec::Factory(_) => write!(f, "Factory(<fn>)"),
        }
    }
}

impl From<HookMap> for HooksSpec {
    fn from(map: HookMap) -> Self {
        HooksSpec::Literal(map)
    }
}

impl From<Option<HookMap>> for HooksSpec {
    fn from(map: Option<HookMap>) -> Self {
        map.map(HooksSpec::Literal).unwrap_or_default()
    }
}

/// Shorthand for [`HooksSpec::factory`].
pub fn factory(f: impl Fn(&Props) -> HookMap + 'static) -> HooksSpec {
    HooksSpec::factory(f)
}

/// The shape of a hook's return value, which decides how it is merged.
#[derive(Clone, Debug, PartialEq)]
pub enum HookResult {
    /// Assigned wholesale under the hook's name.
    Sequence(Seq),
    /// Any non-mapping value (including callbacks and null); assigned
    /// wholesale under the hook's name.
    Scalar(PropValue),
    /// Merged entry by entry, each under its own key.
    Mapping(Props),
}

impl HookResult {
    pub fn classify(value: PropValue) -> Self {
        match value {
            PropValue::Seq(items) => HookResult::Sequence(items),
            PropValue::Map(map) => HookResult::Mapping(map),
            other => HookResult::Scalar(other),
        }
    }
}

/// Builds a [`HookMap`]: `hooks! { use_count => use_count, simple_hook => || (0, 1) }`.
#[macro_export]
macro_rules! hooks {
    () => {
        $crate::HookMap::new()
    };
    ($($name:ident => $hook:expr),+ $(,)?) => {{
        let mut map = $crate::HookMap::new();
        $(map.insert(stringify!($name), $hook);)+
        map
    }};
}

#[cfg(test)]
mod tests {
    use super::*;
    use compose_hooks_core::{Callback, props};

    #[test]
    fn classify_dispatches_on_shape() {
        assert!(matches!(
            HookResult::classify(PropValue::from((1, 2))),
            HookResult::Sequence(s) if s.len() == 2
        ));
        assert!(matches!(
            HookResult::classify(PropValue::from(props! { "a" => 1 })),
            HookResult::Mapping(m) if m.contains_key("a")
        ));
        assert_eq!(
            HookResult::classify(PropValue::from("x")),
            HookResult::Scalar(PropValue::from("x"))
        );
        assert_eq!(HookResult::classify(PropValue::Null), HookResult::Scalar(PropValue::Null));
        assert!(matches!(
            HookResult::classify(Callback::from_fn(|| {}).into()),
            HookResult::Scalar(PropValue::Callback(_))
        ));
    }

    #[test]
    fn hook_map_keeps_declaration_order() {
        let map = hooks! { b => || 1, a => || 2, c => || 3 };
        assert_eq!(map.names().collect::<Vec<_>>(), vec!["b", "a", "c"]);
    }

    #[test]
    fn resolve_literal_borrows_and_factory_sees_props() {
        let literal = HooksSpec::from(hooks! { one => || 1 });
        assert!(matches!(literal.resolve(&Props::new()), Cow::Borrowed(_)));

        let spec = factory(|props| {
            let mut map = HookMap::new();
            for key in props.keys() {
                map.insert(key, || ());
            }
            map
        });
        let resolved = spec.resolve(&props! { "x" => 1, "y" => 2 });
        assert_eq!(resolved.names().collect::<Vec<_>>(), vec!["x", "y"]);

        assert!(HooksSpec::from(None::<HookMap>).is_empty());
        assert!(HooksSpec::Empty.resolve(&Props::new()).is_empty());
    }
}
