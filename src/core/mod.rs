//! # Core Simulation Logic
//!
//! This module contains the Game of Life itself.
//! It knows nothing about terminals or stdin.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Grid (cells)         │
//!                    │  • rules::step()        │
//!                    │  • frame::compose()     │
//!                    │  • Key → Action         │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No I/O. Pure.          │
//!                    └───────────┬─────────────┘
//!                                │
//!                                ▼
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │  Adapter   │
//!                         │ (crossterm)│
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`grid`]: The `Grid` struct: live/dead cells with bounds-checked access
//! - [`rules`]: Neighbor counting and the generation step
//! - [`frame`]: Compositing the grid, border and cursor into characters
//! - [`keys`]: Decoding raw stdin bytes into keys
//! - [`state`]: The `App` struct: all simulation state in one place
//! - [`action`]: The `Action` enum and the `update()` reducer
//! - [`config`]: Settings resolution

pub mod action;
pub mod config;
pub mod frame;
pub mod grid;
pub mod keys;
pub mod rules;
pub mod state;
