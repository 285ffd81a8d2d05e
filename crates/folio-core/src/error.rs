use thiserror::Error;

/// Why a component could not bind to the page. Never fatal: the component is
/// simply left out.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AttachError {
    #[error("missing element #{0}")]
    MissingElement(&'static str),
    #[error("no elements match `{0}`")]
    NoTargets(&'static str),
}
