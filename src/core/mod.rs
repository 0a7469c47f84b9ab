//! Core application state and errors.

pub mod error;
mod state;

pub use state::{FileState, select_file_details};
