//! Shared types for the frontend: the static content catalogs and the
//! tab identity enum.

pub mod catalog;
pub mod tabs;
