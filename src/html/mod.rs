//! HTML view rendering
//!
//! Builds complete documents from typed view data: a pure function from
//! (view, data) to markup. Interpolated text is escaped and hrefs
//! carrying user-supplied values are percent-encoded.

mod pages;

pub use pages::*;
