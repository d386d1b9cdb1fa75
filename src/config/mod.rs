mod r#impl;
mod school;
mod upload;
mod structs;

pub use structs::*;
pub use upload::PROFILE_IMAGE_TYPES;
