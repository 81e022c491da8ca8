//! UI abstraction layer
//!
//! This module provides a backend-agnostic interface for prompting the user,
//! writing messages and rendering documents. Business logic only sees the
//! traits, so the same browse session runs against a real terminal or a
//! scripted test harness.
//!
//! # Core Traits
//!
//! - **`UserInput`** - Select one of several options, or enter validated text
//! - **`OutputWriter`** - Status messages with severity levels
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │      Business Logic Layer               │
//! │   (browse session, commands)            │
//! └────────────────┬────────────────────────┘
//!                  │ Uses traits
//!                  ▼
//! ┌─────────────────────────────────────────┐
//! │      UI Trait Abstraction               │
//! │  (UserInput, OutputWriter)              │
//! └────────────────┬────────────────────────┘
//!                  │ Implemented by
//!         ┌────────┴────────┐
//!         ▼                 ▼
//! ┌───────────────┐  ┌───────────────────┐
//! │ CLI Adapters  │  │ Test Adapters     │
//! │ - Dialoguer   │  │ - ScriptedInput   │
//! │ - Stdout      │  │ - BufferWriter    │
//! └───────────────┘  └───────────────────┘
//! ```

pub mod input;
pub mod mock;
pub mod output;
pub mod render;

pub use input::{DialoguerInput, InputError, UserInput, Validator, non_empty};
pub use mock::{Answer, ScriptedInput};
pub use output::{BufferWriter, MessageLevel, OutputWriter, StdoutWriter};
pub use render::{DisplayFormat, render_document, render_documents};
