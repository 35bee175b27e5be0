//! # Behavioral Design Patterns in Rust
//!
//! This crate demonstrates four classic behavioral patterns, each as a
//! small, independent module:
//!
//! ## Observer
//! - A [`Subject`] holding shared handles to registered observers
//! - Notification in registration order via dynamic dispatch
//!
//! ## Strategy
//! - A [`Context`] delegating to a swappable algorithm object
//! - Behavior changes only by replacing the strategy
//!
//! ## Command
//! - An [`Invoker`] triggering an action without knowing its receiver
//! - An unset command slot is a safe no-op
//!
//! ## Iterator
//! - A [`SequenceIterator`] cursor with explicit `has_next`/`next`
//! - Bridges into `for` loops via `IntoIterator`
//!
//! The modules do not depend on each other; they meet only in the
//! demos. Run the combined walk-through with `cargo run`, or a single
//! pattern with `cargo run --example <name>`.

pub mod command;
pub mod iterator;
pub mod observer;
pub mod strategy;

pub use command::{Command, ConcreteCommand, Invoker, Receiver};
pub use iterator::SequenceIterator;
pub use observer::{ConcreteObserver, Observer, Subject};
pub use strategy::{ConcreteStrategyA, ConcreteStrategyB, Context, Strategy};
