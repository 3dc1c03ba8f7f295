//! Taskdoc: educational task prompt builder and printable PDF pipeline.
//!
//! Three leaf components run in sequence per generation request:
//!
//! 1. [`prompt::build_prompt`] renders a structured task description from
//!    typed form fields.
//! 2. [`memo::extract_memo`] scans the agent's free-text reply for
//!    answer-key lines.
//! 3. [`render::DocumentRenderer`] lays out a fixed-format printable PDF,
//!    returned as bytes or written as a named artifact.
//!
//! [`pipeline::Pipeline`] wires the three together around constructor-
//! injected collaborators (the conversational agent and an optional record
//! store). No component retains state across invocations.

pub mod agent;
pub mod cli;
pub mod commands;
pub mod config;
pub mod document;
pub mod error;
pub mod exit_codes;
pub mod memo;
pub mod pipeline;
pub mod prompt;
pub mod render;
pub mod store;
pub mod task;
