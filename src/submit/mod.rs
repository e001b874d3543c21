pub mod controller;
pub mod error;
pub mod submit_model;
