pub mod console;
pub mod view_model;
