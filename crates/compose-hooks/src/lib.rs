//! # Composing hooks into props
//!
//! `compose` wraps a presentational component so that, on every render, a set
//! of named hooks runs and their output becomes the component's props:
//!
//! ```rust
//! use compose_hooks::*;
//!
//! fn use_count() -> Props {
//!     let (count, set_count) = use_state(|| 0i64);
//!     let increment = {
//!         let set_count = set_count.clone();
//!         Callback::from_fn(move || set_count.update(|c| *c += 1))
//!     };
//!     let decrement = Callback::from_fn(move || set_count.update(|c| *c -= 1));
//!     props! { "count" => count, "increment" => increment, "decrement" => decrement }
//! }
//!
//! let presenter = Component::named("CountPresenter", |props: &Props| {
//!     let count = props.get("count").and_then(PropValue::as_int).unwrap_or_default();
//!     Column(vec![
//!         Text(format!("Current count is: {count}")),
//!         Button("-", props.get("decrement").and_then(PropValue::as_callback).cloned()),
//!         Button("+", props.get("increment").and_then(PropValue::as_callback).cloned()),
//!     ])
//! });
//!
//! let counter = compose(hooks! { use_count => use_count }).apply(presenter)?;
//! let mut root = Root::new(counter, Props::new());
//! root.view().find_button("+").expect("+ button").click();
//! root.flush();
//! assert_eq!(root.view().text(), "Current count is: 1-+");
//! # Ok::<(), ComposeError>(())
//! ```
//!
//! ## Merge rules
//!
//! - Hooks run in declaration order.
//! - A hook returning a mapping ([`Props`]) contributes each entry under its
//!   own key. Any other value, including sequences like `(value, setter)`,
//!   callbacks, and scalars, is stored under the hook's name.
//! - When a hook writes a key an earlier hook already wrote, the later value
//!   wins and a [`Collision`] is reported to the composer's [`Diagnostics`]
//!   (the `log` facade unless replaced with [`Composer::with_diagnostics`]).
//! - Props passed by the caller always win over hook output, by key presence,
//!   so `0`, `false`, `""` and `Null` still override. This never warns.
//!
//! ## Hooks that depend on props
//!
//! [`factory`] builds the hooks from the current props on each render:
//!
//! ```rust
//! use compose_hooks::*;
//!
//! let label = Component::new(|props: &Props| {
//!     Text(props.get("doubled").map(ToString::to_string).unwrap_or_default())
//! });
//! let doubled = compose(factory(|props| {
//!     let x = props.get("x").and_then(PropValue::as_int).unwrap_or_default();
//!     hooks! { doubled => move || props! { "doubled" => x * 2 } }
//! }))
//! .apply(label)?;
//!
//! let root = Root::new(doubled, props! { "x" => 21 });
//! assert_eq!(root.view().text(), "42");
//! # Ok::<(), ComposeError>(())
//! ```

pub mod composer;
pub mod diagnostics;
pub mod error;
pub mod hooks;

pub use composer::{Composer, compose, merge_props};
pub use diagnostics::{Collision, CollisionLog, Diagnostics};
pub use error::ComposeError;
pub use hooks::{HookFn, HookMap, HookResult, HooksSpec, factory};

pub use compose_hooks_core as host;
pub use compose_hooks_core::prelude::*;
pub use compose_hooks_core::props;
