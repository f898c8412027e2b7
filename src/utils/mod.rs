// src/utils/mod.rs

pub mod sampler;
pub mod timestamp;
