use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ComposeError {
    #[error("Component must be provided to compose")]
    ComponentRequired,
}
