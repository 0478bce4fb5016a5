use crate::core::actions::render_frame::errors::RenderError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
#[error("render of generation {generation} failed: {error}")]
pub struct RenderFailure {
    pub generation: u64,
    #[source]
    pub error: RenderError,
}
