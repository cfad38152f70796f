//! Indexing operation handlers.
//!
//! Indexed requests carry the index as an ordinary word payload; each hop
//! decrements it by one, so reaching zero means "the effect happens here"
//! and reaching the content boundary first means the index was out of
//! range. Out-of-range handling comes in two flavors per operation, a
//! silent no-op and a strict boundary reply, and callers pick one.

use super::ProcessingElement;
use crate::op::Op;
use crate::types::{ChannelId, Wire};

impl ProcessingElement {
    /// Count content words, summed on the way back up.
    pub(super) fn length(&mut self, ch: ChannelId) {
        if !self.occupied(ch) {
            self.upper.send_word(Wire::Def(0));
            return;
        }
        let lower = self.lower();
        lower.send_request(Op::Length { ch });
        let below = lower.recv_word().get();
        self.upper.send_word(Wire::Def(below + 1));
    }

    /// Reply the word at the given index, or an out-of-range flag.
    pub(super) fn get_item(&mut self, ch: ChannelId) {
        let index = self.upper.recv_word().get();
        if !self.occupied(ch) {
            self.upper.send_word_flag(Wire::Undef, true);
            return;
        }
        if index == 0 {
            self.upper.send_word_flag(self.word[ch], false);
            return;
        }
        let lower = self.lower();
        lower.send_request(Op::GetItem { ch });
        lower.send_word(Wire::Def(index - 1));
        let (w, out_of_range) = lower.recv_word_flag();
        self.upper.send_word_flag(w, out_of_range);
    }

    /// Overwrite the word at the given index. The strict form replies an
    /// out-of-range flag; the quiet form replies nothing and silently
    /// ignores an index past the end.
    pub(super) fn set_item(&mut self, ch: ChannelId, strict: bool) {
        let index = self.upper.recv_word().get();
        let value = self.upper.recv_word();
        if !self.occupied(ch) {
            if strict {
                self.upper.send_flag(Wire::Def(true));
            }
            return;
        }
        if index == 0 {
            self.word[ch] = value;
            if strict {
                self.upper.send_flag(Wire::Def(false));
            }
            return;
        }
        let lower = self.lower();
        lower.send_request(if strict {
            Op::SetItem { ch }
        } else {
            Op::SetItemQuiet { ch }
        });
        lower.send_word(Wire::Def(index - 1));
        lower.send_word(value);
        if strict {
            let out_of_range = lower.recv_flag();
            self.upper.send_flag(out_of_range);
        }
    }

    /// Overwrite the word at the given index, replying the previous one.
    pub(super) fn replace_item(&mut self, ch: ChannelId) {
        let index = self.upper.recv_word().get();
        let value = self.upper.recv_word();
        if !self.occupied(ch) {
            self.upper.send_word_flag(Wire::Undef, true);
            return;
        }
        if index == 0 {
            let old = std::mem::replace(&mut self.word[ch], value);
            self.upper.send_word_flag(old, false);
            return;
        }
        let lower = self.lower();
        lower.send_request(Op::ReplaceItem { ch });
        lower.send_word(Wire::Def(index - 1));
        lower.send_word(value);
        let (old, out_of_range) = lower.recv_word_flag();
        self.upper.send_word_flag(old, out_of_range);
    }

    /// Reply the first index holding the probe word, counted back up the
    /// reply path, or a not-found flag.
    pub(super) fn member_index(&mut self, ch: ChannelId) {
        let probe = self.upper.recv_word();
        if !self.occupied(ch) {
            self.upper.send_word_flag(Wire::Undef, true);
            return;
        }
        if self.word[ch].get() == probe.get() {
            self.upper.send_word_flag(Wire::Def(0), false);
            return;
        }
        let lower = self.lower();
        lower.send_request(Op::MemberIndex { ch });
        lower.send_word(probe);
        let (below, not_found) = lower.recv_word_flag();
        if not_found {
            self.upper.send_word_flag(Wire::Undef, true);
        } else {
            self.upper.send_word_flag(Wire::Def(below.get() + 1), false);
        }
    }

    /// Insert at the given index, shifting this and deeper words down.
    /// Inserting at the content length is out of range in both forms; an
    /// insert cannot append.
    pub(super) fn insert_at(&mut self, ch: ChannelId, strict: bool) {
        let index = self.upper.recv_word().get();
        let value = self.upper.recv_word();
        if !self.occupied(ch) {
            if strict {
                self.upper.send_flag(Wire::Def(true));
            }
            return;
        }
        if index == 0 {
            let displaced = std::mem::replace(&mut self.word[ch], value);
            let lower = self.lower();
            lower.send_request(Op::Push { ch });
            lower.send_word(displaced);
            if strict {
                self.upper.send_flag(Wire::Def(false));
            }
            return;
        }
        let lower = self.lower();
        lower.send_request(if strict {
            Op::InsertAt { ch }
        } else {
            Op::InsertAtQuiet { ch }
        });
        lower.send_word(Wire::Def(index - 1));
        lower.send_word(value);
        if strict {
            let out_of_range = lower.recv_flag();
            self.upper.send_flag(out_of_range);
        }
    }

    /// Delete at the given index, shifting deeper words up; past-the-end
    /// indices are silently ignored.
    pub(super) fn delete_at(&mut self, ch: ChannelId) {
        let index = self.upper.recv_word().get();
        if index == 0 {
            let _ = self.local_pull(ch);
            return;
        }
        if !self.occupied(ch) {
            return;
        }
        let lower = self.lower();
        lower.send_request(Op::DeleteAt { ch });
        lower.send_word(Wire::Def(index - 1));
    }

    /// Delete at the given index and reply the deleted word; strict bounds.
    pub(super) fn take_at(&mut self, ch: ChannelId) {
        let index = self.upper.recv_word().get();
        if index == 0 {
            match self.local_pull(ch) {
                Some(w) => self.upper.send_word_flag(Wire::Def(w), false),
                None => self.upper.send_word_flag(Wire::Undef, true),
            }
            return;
        }
        if !self.occupied(ch) {
            self.upper.send_word_flag(Wire::Undef, true);
            return;
        }
        let lower = self.lower();
        lower.send_request(Op::TakeAt { ch });
        lower.send_word(Wire::Def(index - 1));
        let (w, out_of_range) = lower.recv_word_flag();
        self.upper.send_word_flag(w, out_of_range);
    }
}
