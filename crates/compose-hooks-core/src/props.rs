//! # Property bags
//!
//! Components receive their inputs as a [`Props`] bag: an insertion-ordered map
//! from name to a dynamically shaped [`PropValue`]. Hooks produce the same
//! values, which is what lets their output be merged into a component's props.

use std::fmt;
use std::rc::Rc;

use indexmap::IndexMap;

use crate::error::PropTypeError;

/// Ordered, tuple-like values. Pairs (`[value, setter]`) are the common case.
pub type Seq = Vec<PropValue>;

/// A callable prop (event handlers, setters, updaters).
#[derive(Clone)]
pub struct Callback(Rc<dyn Fn(&[PropValue]) -> PropValue>);

impl Callback {
    pub fn new(f: impl Fn(&[PropValue]) -> PropValue + 'static) -> Self {
        Self(Rc::new(f))
    }

    /// Wraps a handler that takes no arguments and returns nothing.
    pub fn from_fn(f: impl Fn() + 'static) -> Self {
        Self::new(move |_| {
            f();
            PropValue::Null
        })
    }

    pub fn call(&self, args: &[PropValue]) -> PropValue {
        (self.0)(args)
    }

    pub fn invoke(&self) -> PropValue {
        self.call(&[])
    }

    pub fn ptr_eq(a: &Callback, b: &Callback) -> bool {
        Rc::ptr_eq(&a.0, &b.0)
    }
}

impl fmt::Debug for Callback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<callback>")
    }
}

#[derive(Clone, Debug, Default)]
pub enum PropValue {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    Seq(Seq),
    Map(Props),
    Callback(Callback),
}

impl PropValue {
    pub fn seq(items: impl IntoIterator<Item = PropValue>) -> Self {
        PropValue::Seq(items.into_iter().collect())
    }

    pub fn callback(f: impl Fn(&[PropValue]) -> PropValue + 'static) -> Self {
        PropValue::Callback(Callback::new(f))
    }

    pub fn kind(&self) -> &'static str {
        match self {
            PropValue::Null => "null",
            PropValue::Bool(_) => "bool",
            PropValue::Int(_) => "int",
            PropValue::Float(_) => "float",
            PropValue::Str(_) => "string",
            PropValue::Seq(_) => "sequence",
            PropValue::Map(_) => "mapping",
            PropValue::Callback(_) => "callback",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, PropValue::Null)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            PropValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            PropValue::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            PropValue::Float(f) => Some(*f),
            PropValue::Int(i) => Some(*i as f64),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            PropValue::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_seq(&self) -> Option<&[PropValue]> {
        match self {
            PropValue::Seq(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&Props> {
        match self {
            PropValue::Map(m) => Some(m),
            _ => None,
        }
    }

    pub fn as_callback(&self) -> Option<&Callback> {
        match self {
            PropValue::Callback(cb) => Some(cb),
            _ => None,
        }
    }
}

impl PartialEq for PropValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (PropValue::Null, PropValue::Null) => true,
            (PropValue::Bool(a), PropValue::Bool(b)) => a == b,
            (PropValue::Int(a), PropValue::Int(b)) => a == b,
            (PropValue::Float(a), PropValue::Float(b)) => a == b,
            (PropValue::Str(a), PropValue::Str(b)) => a == b,
            (PropValue::Seq(a), PropValue::Seq(b)) => a == b,
            (PropValue::Map(a), PropValue::Map(b)) => a == b,
            (PropValue::Callback(a), PropValue::Callback(b)) => Callback::ptr_eq(a, b),
            _ => false,
        }
    }
}

/// String form used in diagnostics.
impl fmt::Display for PropValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropValue::Null => f.write_str("null"),
            PropValue::Bool(b) => write!(f, "{b}"),
            PropValue::Int(i) => write!(f, "{i}"),
            PropValue::Float(x) => write!(f, "{x}"),
            PropValue::Str(s) => f.write_str(s),
            PropValue::Seq(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{item}")?;
                }
                Ok(())
            }
            PropValue::Map(map) => {
                f.write_str("{")?;
                for (i, (k, v)) in map.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{k}: {v}")?;
                }
                f.write_str("}")
            }
            PropValue::Callback(_) => f.write_str("<callback>"),
        }
    }
}

impl From<()> for PropValue {
    fn from(_: ()) -> Self {
        PropValue::Null
    }
}

impl From<bool> for PropValue {
    fn from(b: bool) -> Self {
        PropValue::Bool(b)
    }
}

impl From<i32> for PropValue {
    fn from(i: i32) -> Self {
        PropValue::Int(i as i64)
    }
}

impl From<i64> for PropValue {
    fn from(i: i64) -> Self {
        PropValue::Int(i)
    }
}

impl From<f64> for PropValue {
    fn from(x: f64) -> Self {
        PropValue::Float(x)
    }
}

impl From<&str> for PropValue {
    fn from(s: &str) -> Self {
        PropValue::Str(s.to_string())
    }
}

impl From<String> for PropValue {
    fn from(s: String) -> Self {
        PropValue::Str(s)
    }
}

impl From<Seq> for PropValue {
    fn from(s: Seq) -> Self {
        PropValue::Seq(s)
    }
}

impl From<Props> for PropValue {
    fn from(m: Props) -> Self {
        PropValue::Map(m)
    }
}

impl From<Callback> for PropValue {
    fn from(cb: Callback) -> Self {
        PropValue::Callback(cb)
    }
}

impl<T: Into<PropValue>> From<Option<T>> for PropValue {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or_default()
    }
}

/// Tuples become ordered pairs, e.g. `(count, set_count)`.
impl<A: Into<PropValue>, B: Into<PropValue>> From<(A, B)> for PropValue {
    fn from((a, b): (A, B)) -> Self {
        PropValue::seq([a.into(), b.into()])
    }
}

impl TryFrom<PropValue> for bool {
    type Error = PropTypeError;

    fn try_from(v: PropValue) -> Result<Self, Self::Error> {
        v.as_bool().ok_or(PropTypeError::new("bool", &v))
    }
}

impl TryFrom<PropValue> for i64 {
    type Error = PropTypeError;

    fn try_from(v: PropValue) -> Result<Self, Self::Error> {
        v.as_int().ok_or(PropTypeError::new("int", &v))
    }
}

impl TryFrom<PropValue> for f64 {
    type Error = PropTypeError;

    fn try_from(v: PropValue) -> Result<Self, Self::Error> {
        v.as_float().ok_or(PropTypeError::new("float", &v))
    }
}

impl TryFrom<PropValue> for String {
    type Error = PropTypeError;

    fn try_from(v: PropValue) -> Result<Self, Self::Error> {
        match v {
            PropValue::Str(s) => Ok(s),
            other => Err(PropTypeError::new("string", &other)),
        }
    }
}

/// Insertion-ordered property bag.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Props(IndexMap<String, PropValue>);

impl Props {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<PropValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Inserts or replaces `key`, returning the previous value.
    /// A replaced key keeps its original position.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<PropValue>) -> Option<PropValue> {
        self.0.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&PropValue> {
        self.0.get(key)
    }

    /// Presence check; a key holding `Null`, `0` or `false` is still present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn remove(&mut self, key: &str) -> Option<PropValue> {
        self.0.shift_remove(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &PropValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Copies every entry of `top` over `self`; `top` wins on shared keys.
    pub fn overlay(&mut self, top: &Props) {
        for (k, v) in top.iter() {
            self.0.insert(k.to_string(), v.clone());
        }
    }
}

impl IntoIterator for Props {
    type Item = (String, PropValue);
    type IntoIter = indexmap::map::IntoIter<String, PropValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<K: Into<String>, V: Into<PropValue>> FromIterator<(K, V)> for Props {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// Builds a [`Props`] bag: `props! { "count" => 0, "label" => "Add" }`.
#[macro_export]
macro_rules! props {
    () => {
        $crate::props::Props::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {
        $crate::props::Props::new()$(.with($key, $value))+
    };
}
