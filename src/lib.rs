//! Animated comparison sorts.
//!
//! ```text
//! ArrayStore ──→ sort (Steps) ──→ Scheduler ──→ RenderAdapter
//!      ↑                              │
//!      └──────── apply(snapshot) ─────┘
//! ```
//!
//! The sorting algorithms in [`sort`] are pure iterators. [`scheduler`]
//! paces them, [`run`] guarantees only the newest run keeps drawing, and
//! [`ui`] is the terminal front end.

pub mod cli;
pub mod config;
pub mod headless;
pub mod logging;
pub mod render;
pub mod run;
pub mod scheduler;
pub mod sort;
pub mod store;
pub mod ui;
