//! Row types returned by the repositories.
//!
//! Field names match the selected column names, so each row serializes to
//! the same JSON object the column list describes.

pub mod category;
pub mod city;
pub mod enquiry;
pub mod gallery;
pub mod other_service;
pub mod sub_category;
pub mod vehicle;
