//! List operation handlers: local queries, whole-chain waves, top and
//! bottom access, rotations, reversal, and the word-stream loaders and
//! unloaders.
//!
//! The shared pattern throughout: inspect local state, then either answer
//! immediately or forward the same (or a derived) request through the lower
//! connector and combine the child's reply with local state. Nothing here
//! sees more than one node's storage at a time.

use super::ProcessingElement;
use crate::op::Op;
use crate::types::{ChannelId, Wire};

/// How a word stream settles into a lane.
#[derive(Debug, Clone, Copy)]
pub(super) enum StreamMode {
    /// Each word pushed on top: the stream ends up reversed.
    Front,
    /// Each word inserted into non-decreasing position.
    Sorted,
    /// Each word inserted into increasing position, duplicates dropped.
    Unique,
}

impl ProcessingElement {
    // --- local queries ----------------------------------------------------

    /// Reply the emptiness flag.
    pub(super) fn is_empty(&mut self, ch: ChannelId) {
        self.upper.send_flag(Wire::Def(!self.occupied(ch)));
    }

    /// Mark the lane empty. Content below is truncated away by definition.
    pub(super) fn clear(&mut self, ch: ChannelId) {
        self.flag[ch] = Wire::Def(true);
    }

    /// Clear two lanes in one indivisible activation.
    pub(super) fn clear_pair(&mut self, a: ChannelId, b: ChannelId) {
        self.flag[a] = Wire::Def(true);
        self.flag[b] = Wire::Def(true);
    }

    /// Reply the top word together with the emptiness flag.
    pub(super) fn first(&mut self, ch: ChannelId) {
        self.upper.send_word_flag(self.word[ch], !self.occupied(ch));
    }

    /// Replace the top word, replying the previous one.
    ///
    /// Nothing is mutated when the lane is empty; the failed precondition
    /// leaves no partial state behind.
    pub(super) fn replace_first(&mut self, ch: ChannelId) {
        let incoming = self.upper.recv_word();
        self.upper.send_word_flag(self.word[ch], !self.occupied(ch));
        if self.occupied(ch) {
            self.word[ch] = incoming;
        }
    }

    // --- whole-chain waves ------------------------------------------------

    /// Copy this node's `src` cell into `dst`, continuing below until the
    /// content boundary is reached.
    pub(super) fn copy(&mut self, src: ChannelId, dst: ChannelId) {
        self.word[dst] = self.word[src];
        self.flag[dst] = self.flag[src];
        if self.occupied(src) {
            self.lower().send_request(Op::Copy { src, dst });
        }
    }

    /// Copy and clear in the same wave.
    pub(super) fn move_contents(&mut self, src: ChannelId, dst: ChannelId) {
        let occupied = self.occupied(src);
        self.word[dst] = self.word[src];
        self.flag[dst] = self.flag[src];
        self.flag[src] = Wire::Def(true);
        if occupied {
            self.lower().send_request(Op::Move { src, dst });
        }
    }

    /// Exchange two lanes; the wave runs to the end of the longer one.
    pub(super) fn swap(&mut self, a: ChannelId, b: ChannelId) {
        self.word.swap(a, b);
        self.flag.swap(a, b);
        if self.occupied(a) || self.occupied(b) {
            self.lower().send_request(Op::Swap { a, b });
        }
    }

    /// Overwrite every content word with the received word.
    pub(super) fn set_all(&mut self, ch: ChannelId) {
        let w = self.upper.recv_word();
        if self.occupied(ch) {
            self.word[ch] = w;
            let lower = self.lower();
            lower.send_request(Op::SetAll { ch });
            lower.send_word(w);
        }
    }

    /// Linear membership search.
    pub(super) fn member(&mut self, ch: ChannelId) {
        if self.occupied(ch) {
            self.scratch_word[0] = self.upper.recv_word();
            if self.word[ch].get() == self.scratch_word[0].get() {
                self.upper.send_flag(Wire::Def(true));
            } else {
                let lower = self.lower();
                lower.send_request(Op::Member { ch });
                lower.send_word(self.scratch_word[0]);
                let found = lower.recv_flag();
                self.upper.send_flag(found);
            }
        } else {
            let _ = self.upper.recv_word();
            self.upper.send_flag(Wire::Def(false));
        }
    }

    // --- top operations ---------------------------------------------------

    /// Adopt the incoming word, handing the displaced one down.
    ///
    /// Constant time at every node: the parent is released as soon as the
    /// child accepts the displaced word.
    pub(super) fn push(&mut self, ch: ChannelId) {
        let incoming = self.upper.recv_word();
        if self.occupied(ch) {
            self.scratch_word[0] = std::mem::replace(&mut self.word[ch], incoming);
            let lower = self.lower();
            lower.send_request(Op::Push { ch });
            lower.send_word(self.scratch_word[0]);
        } else {
            self.word[ch] = incoming;
            self.flag[ch] = Wire::Def(false);
            self.extend();
            self.lower().send_request(Op::Clear { ch });
        }
    }

    /// Instructional push that delegates before adopting.
    ///
    /// The whole chain shifts before the top node accepts its word, so the
    /// caller is held for the full depth. Kept as the complexity contrast
    /// to [`push`](Self::push).
    pub(super) fn push_linear(&mut self, ch: ChannelId) {
        if self.occupied(ch) {
            let lower = self.lower();
            lower.send_request(Op::PushLinear { ch });
            lower.send_word(self.word[ch]);
            self.word[ch] = self.upper.recv_word();
        } else {
            self.word[ch] = self.upper.recv_word();
            self.flag[ch] = Wire::Def(false);
            self.extend();
            self.lower().send_request(Op::Clear { ch });
        }
    }

    /// Reply the top word immediately, then adopt the child's reply; the
    /// whole lane shifts up one node behind the caller's back.
    pub(super) fn pull(&mut self, ch: ChannelId) {
        self.upper.send_word_flag(self.word[ch], !self.occupied(ch));
        if self.occupied(ch) {
            let lower = self.lower();
            lower.send_request(Op::Pull { ch });
            let (below, empty) = lower.recv_word_flag();
            self.word[ch] = below;
            self.flag[ch] = Wire::Def(empty);
        }
    }

    // --- bottom operations ------------------------------------------------

    /// Walk down to the last content word and reply it back up.
    pub(super) fn last(&mut self, ch: ChannelId) {
        if !self.occupied(ch) {
            self.upper.send_word_flag(Wire::Undef, true);
            return;
        }
        let lower = self.lower();
        lower.send_request(Op::Last { ch });
        let (below, empty) = lower.recv_word_flag();
        if empty {
            self.upper.send_word_flag(self.word[ch], false);
        } else {
            self.upper.send_word_flag(below, false);
        }
    }

    /// Carry the word down to the first empty node and store it there.
    pub(super) fn add_last(&mut self, ch: ChannelId) {
        if self.occupied(ch) {
            self.scratch_word[0] = self.upper.recv_word();
            let lower = self.lower();
            lower.send_request(Op::AddLast { ch });
            lower.send_word(self.scratch_word[0]);
        } else {
            self.word[ch] = self.upper.recv_word();
            self.flag[ch] = Wire::Def(false);
            self.extend();
            self.lower().send_request(Op::Clear { ch });
        }
    }

    /// Drop the last content word by shifting the flag column up one node.
    pub(super) fn remove_last(&mut self, ch: ChannelId) {
        let occupied = self.occupied(ch);
        self.upper.send_flag(Wire::Def(!occupied));
        if occupied {
            let lower = self.lower();
            lower.send_request(Op::RemoveLast { ch });
            let below_empty = lower.recv_flag().get();
            self.flag[ch] = Wire::Def(below_empty);
        }
    }

    /// Remove and reply the last content word.
    pub(super) fn take_last(&mut self, ch: ChannelId) {
        if !self.occupied(ch) {
            self.upper.send_word_flag(Wire::Undef, true);
            return;
        }
        let lower = self.lower();
        lower.send_request(Op::TakeLast { ch });
        let (below, empty) = lower.recv_word_flag();
        if empty {
            self.upper.send_word_flag(self.word[ch], false);
            self.flag[ch] = Wire::Def(true);
        } else {
            self.upper.send_word_flag(below, false);
        }
    }

    /// Replace the last content word without replying it.
    ///
    /// The emptiness reply leaves this node immediately; the child's reply
    /// tells each node whether it is the one holding the last word.
    pub(super) fn set_last(&mut self, ch: ChannelId) {
        let incoming = self.upper.recv_word();
        let occupied = self.occupied(ch);
        self.upper.send_flag(Wire::Def(!occupied));
        if occupied {
            let lower = self.lower();
            lower.send_request(Op::SetLast { ch });
            lower.send_word(incoming);
            let below_empty = lower.recv_flag().get();
            if below_empty {
                self.word[ch] = incoming;
            }
        }
    }

    /// Replace the last content word, replying the previous one.
    pub(super) fn replace_last(&mut self, ch: ChannelId) {
        let incoming = self.upper.recv_word();
        if !self.occupied(ch) {
            self.upper.send_word_flag(Wire::Undef, true);
            return;
        }
        let lower = self.lower();
        lower.send_request(Op::ReplaceLast { ch });
        lower.send_word(incoming);
        let (below, empty) = lower.recv_word_flag();
        if empty {
            let old = std::mem::replace(&mut self.word[ch], incoming);
            self.upper.send_word_flag(old, false);
        } else {
            self.upper.send_word_flag(below, false);
        }
    }

    // --- rotations --------------------------------------------------------

    /// Entry leg of rotate-down: reply the top word, then run one combined
    /// pull-and-append wave that closes the gap and re-adds the word at the
    /// bottom.
    pub(super) fn rotate_down(&mut self, ch: ChannelId) {
        if !self.occupied(ch) {
            self.upper.send_word_flag(Wire::Undef, true);
            return;
        }
        let rotated = self.word[ch];
        self.upper.send_word_flag(rotated, false);
        let lower = self.lower();
        lower.send_request(Op::PullAppend { ch });
        lower.send_word(rotated);
        let (below, _) = lower.recv_word_flag();
        self.word[ch] = below;
    }

    /// Inner leg of rotate-down. An occupied node hands its word up and
    /// adopts its child's; the node just past the content answers with the
    /// carried word instead of storing it, so the element count never
    /// changes.
    pub(super) fn pull_append(&mut self, ch: ChannelId) {
        let carried = self.upper.recv_word();
        if self.occupied(ch) {
            self.upper.send_word_flag(self.word[ch], false);
            let lower = self.lower();
            lower.send_request(Op::PullAppend { ch });
            lower.send_word(carried);
            let (below, _) = lower.recv_word_flag();
            self.word[ch] = below;
        } else {
            self.upper.send_word_flag(carried, false);
        }
    }

    /// Entry leg of rotate-up: push the top word down while the last word
    /// travels back up; reply it once the wave returns.
    pub(super) fn rotate_up(&mut self, ch: ChannelId) {
        if !self.occupied(ch) {
            self.upper.send_word_flag(Wire::Undef, true);
            return;
        }
        let lower = self.lower();
        lower.send_request(Op::PushTakeLast { ch });
        lower.send_word(self.word[ch]);
        let (last, _) = lower.recv_word_flag();
        self.word[ch] = last;
        self.upper.send_word_flag(last, false);
    }

    /// Inner leg of rotate-up: adopt the carried word, forward the
    /// displaced one, relay the removed last word back up.
    pub(super) fn push_take_last(&mut self, ch: ChannelId) {
        let carried = self.upper.recv_word();
        if self.occupied(ch) {
            let displaced = std::mem::replace(&mut self.word[ch], carried);
            let lower = self.lower();
            lower.send_request(Op::PushTakeLast { ch });
            lower.send_word(displaced);
            let (last, flag) = lower.recv_word_flag();
            self.upper.send_word_flag(last, flag);
        } else {
            self.upper.send_word_flag(carried, false);
        }
    }

    // --- reversal ---------------------------------------------------------

    /// Instructional reversal: one plain pull wave and one plain push wave
    /// per element, orchestrated from this node.
    pub(super) fn reverse_simple(&mut self, src: ChannelId, dst: ChannelId) {
        self.flag[dst] = Wire::Def(true);
        while let Some(w) = self.local_pull(src) {
            self.local_push(dst, w);
        }
    }

    /// Reversal with combined waves: a pull-and-clear wave initializes the
    /// result lane, then a single push-and-pull wave moves each further
    /// element.
    pub(super) fn reverse(&mut self, src: ChannelId, dst: ChannelId) {
        if !self.occupied(src) {
            self.flag[dst] = Wire::Def(true);
            return;
        }
        let first = self.word[src];
        let lower = self.lower();
        lower.send_request(Op::PullClear { src, dst });
        let (below, empty) = lower.recv_word_flag();
        self.word[src] = below;
        self.flag[src] = Wire::Def(empty);
        self.word[dst] = first;
        self.flag[dst] = Wire::Def(false);
        while self.occupied(src) {
            let next = self.word[src];
            let displaced = std::mem::replace(&mut self.word[dst], next);
            let lower = self.lower();
            lower.send_request(Op::PushPull { src, dst });
            lower.send_word(displaced);
            let (w, e) = lower.recv_word_flag();
            self.word[src] = w;
            self.flag[src] = Wire::Def(e);
        }
    }

    /// Combined wave: serve a pull on `src` while clearing `dst`.
    pub(super) fn pull_clear(&mut self, src: ChannelId, dst: ChannelId) {
        self.flag[dst] = Wire::Def(true);
        self.upper.send_word_flag(self.word[src], !self.occupied(src));
        if self.occupied(src) {
            let lower = self.lower();
            lower.send_request(Op::PullClear { src, dst });
            let (below, empty) = lower.recv_word_flag();
            self.word[src] = below;
            self.flag[src] = Wire::Def(empty);
        }
    }

    /// Combined wave: sink the carried word into `dst` while serving a
    /// pull on `src`. The two shifts travel different depths, so the wave
    /// degrades into the cheaper single-purpose wave once one side ends.
    pub(super) fn push_pull(&mut self, src: ChannelId, dst: ChannelId) {
        let carried = self.upper.recv_word();
        self.upper.send_word_flag(self.word[src], !self.occupied(src));
        match (self.occupied(src), self.occupied(dst)) {
            (true, true) => {
                let displaced = std::mem::replace(&mut self.word[dst], carried);
                let lower = self.lower();
                lower.send_request(Op::PushPull { src, dst });
                lower.send_word(displaced);
                let (below, empty) = lower.recv_word_flag();
                self.word[src] = below;
                self.flag[src] = Wire::Def(empty);
            }
            (true, false) => {
                self.word[dst] = carried;
                self.flag[dst] = Wire::Def(false);
                let lower = self.lower();
                lower.send_request(Op::PullClear { src, dst });
                let (below, empty) = lower.recv_word_flag();
                self.word[src] = below;
                self.flag[src] = Wire::Def(empty);
            }
            (false, true) => {
                let displaced = std::mem::replace(&mut self.word[dst], carried);
                let lower = self.lower();
                lower.send_request(Op::Push { ch: dst });
                lower.send_word(displaced);
            }
            (false, false) => {
                self.word[dst] = carried;
                self.flag[dst] = Wire::Def(false);
                self.extend();
                self.lower().send_request(Op::Clear { ch: dst });
            }
        }
    }

    // --- loaders ----------------------------------------------------------

    /// Stream-load top to bottom: store the first word here, then relay the
    /// rest of the stream to the child.
    pub(super) fn load_words(&mut self, ch: ChannelId) {
        let (w, end) = self.upper.recv_word_flag();
        if end {
            self.flag[ch] = Wire::Def(true);
            return;
        }
        self.word[ch] = w;
        self.flag[ch] = Wire::Def(false);
        self.extend();
        let lower = self.lower();
        lower.send_request(Op::LoadWords { ch });
        loop {
            let (next, done) = self.upper.recv_word_flag();
            lower.send_word_flag(next, done);
            if done {
                break;
            }
        }
    }

    /// Stream-load entirely from this node, settling each word according
    /// to the mode (reversing push, sorted insert, unique insert).
    pub(super) fn load_stream(&mut self, ch: ChannelId, mode: StreamMode) {
        self.flag[ch] = Wire::Def(true);
        loop {
            let (w, end) = self.upper.recv_word_flag();
            if end {
                break;
            }
            let w = w.get();
            match mode {
                StreamMode::Front => self.local_push(ch, w),
                StreamMode::Sorted => self.local_insert_sorted(ch, w),
                StreamMode::Unique => self.local_insert_unique(ch, w),
            }
        }
    }

    // --- unloaders ---------------------------------------------------------

    /// Stream the whole lane up, consuming it: own word first, then the
    /// child's stream relayed unchanged.
    pub(super) fn unload_all(&mut self, ch: ChannelId) {
        if !self.occupied(ch) {
            self.upper.send_word_flag(Wire::Undef, true);
            return;
        }
        self.upper.send_word_flag(self.word[ch], false);
        self.flag[ch] = Wire::Def(true);
        let lower = self.lower();
        lower.send_request(Op::UnloadAll { ch });
        loop {
            let (w, done) = lower.recv_word_flag();
            self.upper.send_word_flag(w, done);
            if done {
                break;
            }
        }
    }

    /// Begin a bottom-to-top unload: stage the lane reversed into the
    /// auxiliary lane, then yield the first (bottom-most) word.
    pub(super) fn unload_reverse_first(&mut self, ch: ChannelId, aux: ChannelId) {
        self.flag[aux] = Wire::Def(true);
        while let Some(w) = self.local_pull(ch) {
            self.local_push(aux, w);
        }
        self.unload_reverse_next(ch, aux);
    }

    /// Yield the next staged word, rebuilding the original lane as it goes;
    /// once the stage is drained the lane is fully restored.
    pub(super) fn unload_reverse_next(&mut self, ch: ChannelId, aux: ChannelId) {
        match self.local_pull(aux) {
            Some(w) => {
                self.local_push(ch, w);
                self.upper.send_word_flag(Wire::Def(w), false);
            }
            None => self.upper.send_word_flag(Wire::Undef, true),
        }
    }

    /// Uninterruptible bottom-to-top unload: stage, then stream everything
    /// up while restoring the lane.
    pub(super) fn unload_all_reverse(&mut self, ch: ChannelId, aux: ChannelId) {
        self.flag[aux] = Wire::Def(true);
        while let Some(w) = self.local_pull(ch) {
            self.local_push(aux, w);
        }
        loop {
            match self.local_pull(aux) {
                Some(w) => {
                    self.local_push(ch, w);
                    self.upper.send_word_flag(Wire::Def(w), false);
                }
                None => {
                    self.upper.send_word_flag(Wire::Undef, true);
                    break;
                }
            }
        }
    }

    /// Stream the lane contents up without consuming them: own word first,
    /// then the child's stream relayed unchanged.
    pub(super) fn snapshot(&mut self, ch: ChannelId) {
        if !self.occupied(ch) {
            self.upper.send_word_flag(Wire::Undef, true);
            return;
        }
        self.upper.send_word_flag(self.word[ch], false);
        let lower = self.lower();
        lower.send_request(Op::Snapshot { ch });
        loop {
            let (w, done) = lower.recv_word_flag();
            self.upper.send_word_flag(w, done);
            if done {
                break;
            }
        }
    }
}
