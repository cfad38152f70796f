//! Common test utilities.

#![allow(dead_code)] // Test utilities may not all be used in every test file

use asynchain_rs::{Chain, Word};

/// Channel aliases used across the integration tests.
pub const CH: usize = 0;
pub const AUX: usize = 1;
pub const CH2: usize = 2;

/// Assert a channel's contents, top to bottom.
pub fn assert_channel(chain: &mut Chain, ch: usize, expected: &[Word]) {
    assert_eq!(chain.snapshot(ch), expected, "channel {ch} contents");
}

/// Assert a register's words, least significant first.
pub fn assert_register(chain: &mut Chain, ch: usize, expected: &[Word]) {
    assert_eq!(chain.int_snapshot(ch), expected, "register {ch} words");
}
