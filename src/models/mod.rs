pub mod resume;
pub mod question;
pub mod interview;

pub use resume::*;
pub use question::*;
pub use interview::*;
