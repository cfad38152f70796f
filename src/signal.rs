//! Dual-state rendezvous flag.
//!
//! A [`Signal`] is a boolean that exactly two threads coordinate on. Unlike
//! a one-shot event, *both* states are observable and waitable: one thread
//! can block until the flag goes high while the other blocks until it goes
//! low again. Two such flags make up the request/acknowledge wire pair of a
//! bundled-data handshake (see [`crate::connector`]).
//!
//! All waits are unbounded: the model has no timeouts and no cancellation.

use parking_lot::{Condvar, Mutex};

/// A waitable two-state flag shared by exactly two threads.
///
/// Starts low. State changes are made with [`set_true`](Signal::set_true) /
/// [`set_false`](Signal::set_false) and observed with
/// [`wait_true`](Signal::wait_true) / [`wait_false`](Signal::wait_false);
/// there is no polling interface.
#[derive(Debug, Default)]
pub struct Signal {
    state: Mutex<bool>,
    changed: Condvar,
}

impl Signal {
    /// Create a signal in the low state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Drive the signal high, waking any waiter.
    pub fn set_true(&self) {
        let mut state = self.state.lock();
        *state = true;
        self.changed.notify_all();
    }

    /// Drive the signal low, waking any waiter.
    pub fn set_false(&self) {
        let mut state = self.state.lock();
        *state = false;
        self.changed.notify_all();
    }

    /// Block until the signal is high.
    pub fn wait_true(&self) {
        let mut state = self.state.lock();
        while !*state {
            self.changed.wait(&mut state);
        }
    }

    /// Block until the signal is low.
    pub fn wait_false(&self) {
        let mut state = self.state.lock();
        while *state {
            self.changed.wait(&mut state);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn starts_low() {
        let s = Signal::new();
        // wait_false on a low signal must not block
        s.wait_false();
    }

    #[test]
    fn set_then_wait_does_not_block() {
        let s = Signal::new();
        s.set_true();
        s.wait_true();
        s.set_false();
        s.wait_false();
    }

    #[test]
    fn wakes_a_waiting_thread() {
        let s = Arc::new(Signal::new());
        let s2 = s.clone();
        let waiter = thread::spawn(move || {
            s2.wait_true();
            s2.set_false();
        });
        s.set_true();
        s.wait_false();
        waiter.join().unwrap();
    }

    #[test]
    fn ping_pong_handshake() {
        // Two threads alternate driving the flag; 100 rounds must terminate.
        let s = Arc::new(Signal::new());
        let s2 = s.clone();
        let peer = thread::spawn(move || {
            for _ in 0..100 {
                s2.wait_true();
                s2.set_false();
            }
        });
        for _ in 0..100 {
            s.set_true();
            s.wait_false();
        }
        peer.join().unwrap();
    }
}
