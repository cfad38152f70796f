//! # asynchain-rs: an asynchronous processing-element chain
//!
//! A simulation of an asynchronous sequential-circuit model: a chain of
//! identical processing elements, each running on its own thread, that
//! communicate only with their immediate neighbors through a strict
//! 4-phase handshake. Stacks, queues, deques, sorted lists and
//! arbitrary-precision integers are implemented as *distributed
//! protocols*: operation requests propagate down the chain and replies
//! propagate back up, with no shared memory and no global view anywhere.
//!
//! ## Architecture
//!
//! - **[`Signal`]**: a dual-state rendezvous flag; two of them form the
//!   request/acknowledge wire pair of a handshake.
//! - **[`Connector`]**: one handshake channel between two adjacent nodes,
//!   carrying one of five statically typed message shapes.
//! - **`ProcessingElement`**: one node, one thread, with fixed local
//!   storage, a dispatch loop, and lazy chain growth one node at a time.
//! - **[`Chain`]**: the controller façade that turns the request/reply
//!   protocol into ordinary synchronous calls and `Result`s.
//!
//! ## Example
//!
//! ```no_run
//! use asynchain_rs::Chain;
//!
//! let mut chain = Chain::new();
//! chain.push(0, 1);
//! chain.push(0, 2);
//! assert_eq!(chain.pull(0), Ok(2));
//! assert_eq!(chain.pull(0), Ok(1));
//! assert!(chain.pull(0).is_err());
//! chain.stop();
//! ```
//!
//! ## Concurrency model
//!
//! Threads are created lazily, one per node, and never reclaimed
//! individually; the whole chain halts together on [`Chain::stop`].
//! The handshake is the only synchronization and the only backpressure:
//! a sender blocks until its message is taken, so nothing is buffered and
//! nothing can be dropped. At most one operation is in flight per chain;
//! [`Chain`] takes `&mut self` to make that contract explicit.

pub mod chain;
pub mod connector;
pub mod error;
pub mod op;
mod pe;
pub mod signal;
pub mod types;

// Re-export commonly used types
pub use chain::Chain;
pub use connector::Connector;
pub use error::{ChainError, Result};
pub use op::Op;
pub use signal::Signal;
pub use types::{ChannelId, DisplayBase, Wire, Word, CHANNELS, SCRATCH_SLOTS, WORD_BITS};
