pub mod author;

pub use author::patch_author_config;
