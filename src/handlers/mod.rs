// src/handlers/mod.rs

pub mod history;
pub mod import;
pub mod session;
