//! One computer per report section.
//!
//! Each computer reads what it needs from the store, derives the section and
//! assigns it whole. A failed read leaves the section untouched.

pub mod dockerhub;
pub mod edge_compute;
pub mod endpoint;
pub mod endpoint_group;
pub mod registry;
pub mod resource_control;
pub mod runtime;
pub mod settings;
pub mod stack;
pub mod tag;
pub mod team;
