//! Route targets.
//!
//! The router mounts one page for every path; `landing` composes the
//! sections and owns the reveal observer for the lifetime of the mount.

pub mod landing;
