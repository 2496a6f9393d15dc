//! # Screens
//!
//! One file per main-menu option, each an `impl Session` block.
//!
//! ```text
//! commands/
//! ├── mod.rs       ◄─── You are here
//! ├── order.rs     ◄─── Place New Order (builder → pricing → store → receipt)
//! ├── menu.rs      ◄─── View Menu
//! ├── report.rs    ◄─── View Orders & Reports
//! └── feedback.rs  ◄─── Customer Feedback
//! ```

mod feedback;
mod menu;
mod order;
mod report;
