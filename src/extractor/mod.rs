pub mod patterns;
pub mod resume;

pub use resume::ResumeExtractor;
