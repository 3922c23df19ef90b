//! # Components, props, and hook state
//!
//! This crate is the small host model that `compose-hooks` plugs into:
//!
//! - [`Props`] / [`PropValue`]: the dynamically shaped property bag every
//!   component receives.
//! - [`Component`]: a cloneable render function `&Props -> View`.
//! - [`Root`]: mounts a component, owns its state slots, and re-renders it.
//! - [`use_state`], [`use_reducer`], [`remember`]: per-root state cells.
//! - [`provide_context`] / [`use_context`]: typed context values.
//!
//! ## Components
//!
//! ```rust
//! use compose_hooks_core::*;
//!
//! let greeting = Component::named("Greeting", |props: &Props| {
//!     let name = props.get("name").and_then(PropValue::as_str).unwrap_or("world");
//!     Text(format!("Hello, {name}!"))
//! });
//!
//! let root = Root::new(greeting, props! { "name" => "Repose" });
//! assert_eq!(root.view().text(), "Hello, Repose!");
//! ```
//!
//! ## State
//!
//! `use_state` is order-based: the Nth call in a render pass always refers to
//! the Nth stored cell of that root. Writing through the setter marks the root
//! dirty; the next render sees the new value.
//!
//! ```rust
//! use compose_hooks_core::*;
//!
//! let counter = Component::new(|_| {
//!     let (count, set_count) = use_state(|| 0i64);
//!     Button(
//!         count.to_string(),
//!         Some(Callback::from_fn(move || set_count.update(|c| *c += 1))),
//!     )
//! });
//!
//! let mut root = Root::new(counter, Props::new());
//! assert!(root.view().click());
//! assert!(root.is_dirty());
//! root.render();
//! assert_eq!(root.view().text(), "1");
//! ```

pub mod component;
pub mod context;
pub mod error;
pub mod prelude;
pub mod props;
pub mod root;
pub mod runtime;
pub mod signal;
pub mod state;
pub mod tests;
pub mod view;

pub use component::*;
pub use context::*;
pub use error::*;
pub use props::*;
pub use root::*;
pub use runtime::*;
pub use signal::*;
pub use state::*;
pub use view::*;
