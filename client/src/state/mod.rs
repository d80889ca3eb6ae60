//! Client-side state modules.
//!
//! DESIGN
//! ======
//! `ui` owns everything the page mutates; `signup` and `reveal` are the two
//! pieces with rules of their own and are kept separately testable.

pub mod reveal;
pub mod signup;
pub mod ui;
