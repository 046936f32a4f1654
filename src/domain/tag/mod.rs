// src/domain/tag/mod.rs
pub mod entity;
pub mod parse;
pub mod repository;
pub mod value_objects;

pub use entity::Tag;
pub use parse::{canonical_tag_names, parse_tags};
pub use repository::TagRepository;
pub use value_objects::{EmptyTagPolicy, TagId, TagName};
