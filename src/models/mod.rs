// src/models/mod.rs

pub mod fact;
pub mod question;
pub mod quiz;
pub mod quiz_result;
