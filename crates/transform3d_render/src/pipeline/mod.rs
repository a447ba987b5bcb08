//! Rendering pipeline components

pub mod letter_pipeline;
pub mod types;

pub use letter_pipeline::{LetterPipeline, PipelineOptions};
pub use types::{ColoredVertex, MATRIX_SIZE};
