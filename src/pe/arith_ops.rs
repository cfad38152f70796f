//! Arbitrary-precision register handlers.
//!
//! A register lives in one channel with its least significant word at the
//! entry node; the channel flag takes its second meaning here: `true` says
//! "more words follow below". Because significance grows downward,
//! comparisons resolve the child's verdict first: a deeper difference
//! overrides any equal-so-far prefix, which is what the (result, certainty)
//! reply pair expresses.

use super::ProcessingElement;
use crate::op::Op;
use crate::types::{ChannelId, Wire, Word, WORD_BITS};

/// Word-wise bit operation of a register instruction.
#[derive(Debug, Clone, Copy)]
pub(super) enum BitOp {
    And,
    Or,
    Xor,
}

impl BitOp {
    fn apply(self, a: Word, b: Word) -> Word {
        match self {
            BitOp::And => a & b,
            BitOp::Or => a | b,
            BitOp::Xor => a ^ b,
        }
    }

    fn request(self, a: ChannelId, b: ChannelId, dst: ChannelId) -> Op {
        match self {
            BitOp::And => Op::IntAnd { a, b, dst },
            BitOp::Or => Op::IntOr { a, b, dst },
            BitOp::Xor => Op::IntXor { a, b, dst },
        }
    }
}

impl ProcessingElement {
    /// Store the least significant word of a fresh register here.
    pub(super) fn load_int_first(&mut self, ch: ChannelId) {
        self.word[ch] = self.upper.recv_word();
        self.flag[ch] = Wire::Def(false);
    }

    /// Walk to the register's current end and append one word below it.
    pub(super) fn load_int_next(&mut self, ch: ChannelId) {
        let w = self.upper.recv_word();
        if self.flag[ch].get() {
            let lower = self.lower();
            lower.send_request(Op::LoadIntNext { ch });
            lower.send_word(w);
        } else {
            self.flag[ch] = Wire::Def(true);
            self.extend();
            let lower = self.lower();
            lower.send_request(Op::LoadIntFirst { ch });
            lower.send_word(w);
        }
    }

    /// Word-wise register equality; lengths must match too.
    pub(super) fn int_equal(&mut self, a: ChannelId, b: ChannelId) {
        let a_more = self.flag[a].get();
        let b_more = self.flag[b].get();
        if a_more != b_more {
            self.upper.send_flag(Wire::Def(false));
            return;
        }
        let local = self.word[a].get() == self.word[b].get();
        if !a_more {
            self.upper.send_flag(Wire::Def(local));
            return;
        }
        let lower = self.lower();
        lower.send_request(Op::IntEqual { a, b });
        let rest = lower.recv_flag().get();
        self.upper.send_flag(Wire::Def(rest && local));
    }

    /// Three-valued register comparison, strict (`<`) or not (`<=`).
    ///
    /// The child's verdict is fetched before the local words are weighed:
    /// deeper words are more significant. Registers are assumed normalized,
    /// so a register that continues past the other's end is the greater
    /// one, decided on the spot.
    pub(super) fn int_compare(&mut self, a: ChannelId, b: ChannelId, strict: bool) {
        let a_more = self.flag[a].get();
        let b_more = self.flag[b].get();
        let (result, certain) = if a_more && !b_more {
            (false, true)
        } else if !a_more && b_more {
            (true, true)
        } else {
            let below = if a_more {
                let lower = self.lower();
                lower.send_request(if strict {
                    Op::IntLess { a, b }
                } else {
                    Op::IntLessEq { a, b }
                });
                lower.recv_flag_pair()
            } else {
                (!strict, false)
            };
            if below.1 {
                below
            } else {
                let wa = self.word[a].get();
                let wb = self.word[b].get();
                match wa.cmp(&wb) {
                    std::cmp::Ordering::Less => (true, true),
                    std::cmp::Ordering::Greater => (false, true),
                    std::cmp::Ordering::Equal => (!strict, false),
                }
            }
        };
        self.upper.send_flag_pair(result, certain);
    }

    /// Lockstep register copy; whatever `dst` held past the new end is
    /// outside the register by definition.
    pub(super) fn int_copy(&mut self, src: ChannelId, dst: ChannelId) {
        self.word[dst] = self.word[src];
        self.flag[dst] = self.flag[src];
        if self.flag[src].get() {
            self.lower().send_request(Op::IntCopy { src, dst });
        }
    }

    /// Word-wise bitwise operation of two registers into `dst`.
    ///
    /// The wave carries an in-range flag per operand; a word past an
    /// operand's end contributes zero, so the result is as long as the
    /// longer operand.
    pub(super) fn int_bitwise(&mut self, a: ChannelId, b: ChannelId, dst: ChannelId, op: BitOp) {
        let (a_has, b_has) = self.upper.recv_flag_pair();
        let wa = if a_has { self.word[a].get() } else { 0 };
        let wb = if b_has { self.word[b].get() } else { 0 };
        self.word[dst] = Wire::Def(op.apply(wa, wb));
        let a_cont = a_has && self.flag[a].get();
        let b_cont = b_has && self.flag[b].get();
        let more = a_cont || b_cont;
        self.flag[dst] = Wire::Def(more);
        if more {
            let lower = self.lower();
            lower.send_request(op.request(a, b, dst));
            lower.send_flag_pair(a_cont, b_cont);
        }
    }

    /// Shift the register left by one bit. The carry rides the wave down;
    /// a carry out of the most significant word grows the register by one
    /// word, the only arithmetic that extends the chain.
    pub(super) fn int_double(&mut self, ch: ChannelId) {
        let carry = self.upper.recv_word().get();
        let w = self.word[ch].get();
        let carry_out = w >> (WORD_BITS - 1);
        self.word[ch] = Wire::Def((((w as u16) << 1) | carry as u16) as Word);
        if self.flag[ch].get() {
            let lower = self.lower();
            lower.send_request(Op::IntDouble { ch });
            lower.send_word(Wire::Def(carry_out));
        } else if carry_out != 0 {
            self.flag[ch] = Wire::Def(true);
            self.extend();
            let lower = self.lower();
            lower.send_request(Op::LoadIntFirst { ch });
            lower.send_word(Wire::Def(carry_out));
        }
    }

    /// Stream the register words up, least significant first, without
    /// modifying anything.
    pub(super) fn int_snapshot(&mut self, ch: ChannelId) {
        let more = self.flag[ch].get();
        self.upper.send_word_flag(self.word[ch], more);
        if more {
            let lower = self.lower();
            lower.send_request(Op::IntSnapshot { ch });
            loop {
                let (w, continues) = lower.recv_word_flag();
                self.upper.send_word_flag(w, continues);
                if !continues {
                    break;
                }
            }
        }
    }
}
