// src/domain/mod.rs
pub mod company;
pub mod errors;
pub mod job;
pub mod slug;
pub mod tag;
