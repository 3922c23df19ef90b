#![allow(non_snake_case)]
//! Render output. Views are descriptions only; nothing here lays out or paints.

use crate::props::{Callback, PropValue};

#[derive(Clone)]
pub enum ViewKind {
    Empty,
    Column,
    Text {
        text: String,
    },
    Button {
        text: String,
        on_click: Option<Callback>,
    },
    TextField {
        value: String,
        on_change: Option<Callback>,
    },
}

impl std::fmt::Debug for ViewKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ViewKind::Empty => write!(f, "Empty"),
            ViewKind::Column => write!(f, "Column"),
            ViewKind::Text { text } => f.debug_struct("Text").field("text", text).finish(),
            ViewKind::Button { text, .. } => f
                .debug_struct("Button")
                .field("text", text)
                .field("on_click", &"<callback>")
                .finish(),
            ViewKind::TextField { value, .. } => f
                .debug_struct("TextField")
                .field("value", value)
                .field("on_change", &"<callback>")
                .finish(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct View {
    pub kind: ViewKind,
    pub children: Vec<View>,
}

impl View {
    pub fn new(kind: ViewKind) -> Self {
        View {
            kind,
            children: Vec::new(),
        }
    }

    pub fn with_children(mut self, children: Vec<View>) -> Self {
        self.children = children;
        self
    }

    /// Depth-first, parent before children.
    pub fn walk(&self) -> Vec<&View> {
        let mut out = vec![self];
        for child in &self.children {
            out.extend(child.walk());
        }
        out
    }

    /// Concatenated text of every text, button, and text field in the tree.
    pub fn text(&self) -> String {
        self.walk()
            .into_iter()
            .filter_map(|v| match &v.kind {
                ViewKind::Text { text } | ViewKind::Button { text, .. } => Some(text.as_str()),
                ViewKind::TextField { value, .. } => Some(value.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn find_button(&self, label: &str) -> Option<&View> {
        self.walk()
            .into_iter()
            .find(|v| matches!(&v.kind, ViewKind::Button { text, .. } if text == label))
    }

    pub fn find_text_field(&self) -> Option<&View> {
        self.walk()
            .into_iter()
            .find(|v| matches!(v.kind, ViewKind::TextField { .. }))
    }

    /// Fires `on_click`. Returns false when this is not a clickable button.
    pub fn click(&self) -> bool {
        match &self.kind {
            ViewKind::Button {
                on_click: Some(cb), ..
            } => {
                cb.invoke();
                true
            }
            _ => false,
        }
    }

    /// Fires `on_change` with the new text.
    pub fn change(&self, value: &str) -> bool {
        match &self.kind {
            ViewKind::TextField {
                on_change: Some(cb),
                ..
            } => {
                cb.call(&[PropValue::from(value)]);
                true
            }
            _ => false,
        }
    }
}

pub fn Empty() -> View {
    View::new(ViewKind::Empty)
}

pub fn Column(children: Vec<View>) -> View {
    View::new(ViewKind::Column).with_children(children)
}

pub fn Text(text: impl Into<String>) -> View {
    View::new(ViewKind::Text { text: text.into() })
}

pub fn Button(text: impl Into<String>, on_click: Option<Callback>) -> View {
    View::new(ViewKind::Button {
        text: text.into(),
        on_click,
    })
}

pub fn TextField(value: impl Into<String>, on_change: Option<Callback>) -> View {
    View::new(ViewKind::TextField {
        value: value.into(),
        on_change,
    })
}
