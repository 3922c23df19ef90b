pub use crate::component::Component;
pub use crate::context::{ContextFrame, provide_context, use_context, use_context_or_default};
pub use crate::error::PropTypeError;
pub use crate::props::{Callback, PropValue, Props, Seq};
pub use crate::root::Root;
pub use crate::runtime::{RenderFlags, remember, remember_with_key};
pub use crate::signal::{Signal, signal};
pub use crate::state::{Dispatch, SetState, StateHolder, use_reducer, use_signal, use_state};
pub use crate::view::{Button, Column, Empty, Text, TextField, View, ViewKind};
