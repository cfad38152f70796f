//! The processing element: one chain node, one thread.
//!
//! A [`ProcessingElement`] models a single asynchronous sequential circuit.
//! It owns fixed local storage ([`CHANNELS`] word/flag lanes plus scratch
//! slots), an upper [`Connector`] towards its parent, and, once extended,
//! a lower connector towards its child. It can interact with its neighbors
//! only through the handshake protocol; no other access to its state
//! exists.
//!
//! # Dispatch loop
//!
//! The thread blocks on the upper connector for an operation request,
//! validates the request's channel indices (fatal on violation), resets the
//! scratch slots (unless the request is a state report, which must not
//! disturb an in-flight multi-hop report), runs the matching handler, and
//! goes back to waiting. A `stop` request is forwarded to the child first;
//! the element then joins the child's thread and halts, so teardown is
//! depth-first and complete.
//!
//! # Chain growth
//!
//! [`extend`](ProcessingElement::extend) appends exactly one child below
//! this element, idempotently. Handlers call it only on the occupied→empty
//! boundary transition, never speculatively, and always before delegating
//! to the new child. Because every such transition extends first, an
//! element whose lane is occupied always has a child; handlers rely on
//! this to forward unconditionally after an occupancy check.
//!
//! The handler implementations live in sibling modules, split by concern
//! the same way the operations group externally: list operations, order
//! operations, indexing, and register arithmetic.

mod arith_ops;
mod index_ops;
mod list_ops;
mod order_ops;

use crate::connector::Connector;
use crate::op::Op;
use crate::types::{
    ChannelId, DisplayBase, FlagWire, Wire, Word, WordWire, CHANNELS, SCRATCH_SLOTS,
};
use std::sync::Arc;
use std::thread::JoinHandle;

/// One node of a chain, run on its own thread.
pub struct ProcessingElement {
    /// Chain name, shared by every node of one chain. Diagnostic only.
    chain: String,
    /// 1-based position within the chain. Diagnostic only.
    position: u32,
    /// Link to the parent (or to the controller, at the entry node).
    upper: Arc<Connector>,
    /// Link to the child, present after the first `extend`.
    lower: Option<Arc<Connector>>,
    /// The child's thread, joined on stop.
    child: Option<JoinHandle<()>>,
    /// Per-channel storage word.
    word: [WordWire; CHANNELS],
    /// Per-channel boundary flag. For list contents `true` means this node
    /// lies past the content; for registers the same flag means "more words
    /// follow below".
    flag: [FlagWire; CHANNELS],
    /// Per-channel settle marker, meaningful only while a bubble sort runs.
    settled: [bool; CHANNELS],
    /// Scratch words, valid only within one dispatched operation.
    scratch_word: [WordWire; SCRATCH_SLOTS],
    /// Scratch flags, valid only within one dispatched operation.
    scratch_flag: [FlagWire; SCRATCH_SLOTS],
}

impl ProcessingElement {
    /// Create a node and start its thread.
    ///
    /// Returns the connector that addresses the new node, plus the join
    /// handle of its thread.
    pub(crate) fn launch(chain: String, position: u32) -> (Arc<Connector>, JoinHandle<()>) {
        let upper = Arc::new(Connector::new());
        let pe = ProcessingElement {
            chain: chain.clone(),
            position,
            upper: upper.clone(),
            lower: None,
            child: None,
            word: [Wire::Undef; CHANNELS],
            flag: [Wire::Undef; CHANNELS],
            settled: [false; CHANNELS],
            scratch_word: [Wire::Undef; SCRATCH_SLOTS],
            scratch_flag: [Wire::Undef; SCRATCH_SLOTS],
        };
        let handle = std::thread::Builder::new()
            .name(format!("{chain}.{position}"))
            .spawn(move || pe.run())
            .expect("failed to spawn processing-element thread");
        (upper, handle)
    }

    /// The dispatch loop; runs until a stop request arrives.
    fn run(mut self) {
        tracing::debug!(pe = %self.name(), "processing element started");
        loop {
            let op = self.upper.recv_request();
            op.validate();
            tracing::trace!(pe = %self.name(), ?op, "dispatch");
            if !op.is_report() {
                self.scratch_word = [Wire::Undef; SCRATCH_SLOTS];
                self.scratch_flag = [Wire::Undef; SCRATCH_SLOTS];
            }
            if op == Op::Stop {
                if let Some(lower) = &self.lower {
                    lower.send_request(Op::Stop);
                }
                if let Some(child) = self.child.take() {
                    let _ = child.join();
                }
                break;
            }
            self.dispatch(op);
        }
        tracing::debug!(pe = %self.name(), "processing element stopped");
    }

    fn dispatch(&mut self, op: Op) {
        use Op::*;
        match op {
            IsEmpty { ch } => self.is_empty(ch),
            Clear { ch } => self.clear(ch),
            ClearPair { a, b } => self.clear_pair(a, b),
            First { ch } => self.first(ch),
            ReplaceFirst { ch } => self.replace_first(ch),
            Copy { src, dst } => self.copy(src, dst),
            Move { src, dst } => self.move_contents(src, dst),
            Swap { a, b } => self.swap(a, b),
            SetAll { ch } => self.set_all(ch),
            Member { ch } => self.member(ch),
            Push { ch } => self.push(ch),
            PushLinear { ch } => self.push_linear(ch),
            Pull { ch } => self.pull(ch),
            Last { ch } => self.last(ch),
            AddLast { ch } => self.add_last(ch),
            RemoveLast { ch } => self.remove_last(ch),
            TakeLast { ch } => self.take_last(ch),
            SetLast { ch } => self.set_last(ch),
            ReplaceLast { ch } => self.replace_last(ch),
            RotateDown { ch } => self.rotate_down(ch),
            RotateUp { ch } => self.rotate_up(ch),
            PullAppend { ch } => self.pull_append(ch),
            PushTakeLast { ch } => self.push_take_last(ch),
            ReverseSimple { src, dst } => self.reverse_simple(src, dst),
            Reverse { src, dst } => self.reverse(src, dst),
            PullClear { src, dst } => self.pull_clear(src, dst),
            PushPull { src, dst } => self.push_pull(src, dst),
            Min { ch } => self.min(ch),
            MemberSorted { ch } => self.member_sorted(ch),
            InsertSorted { ch } => self.insert_sorted_op(ch),
            InsertUnique { ch } => self.insert_unique_op(ch),
            InsertAllSorted { src, dst } => self.insert_all_sorted(src, dst),
            InsertionSort { ch } | SortFromEnd { ch } => self.sort_from_end(ch),
            PullInsertSorted { ch } => self.pull_insert_sorted(ch),
            SelectionSort { ch } => self.selection_sort(ch),
            MinToTop { ch } => self.min_to_top(ch),
            BubbleSort { ch } => self.bubble_sort(ch),
            BubbleFirst { ch } => self.bubble_wave(ch, true),
            BubbleNext { ch } => self.bubble_wave(ch, false),
            MergeSortedInto { src, dst } => self.merge_sorted_into(src, dst),
            MergeSortedSimple { a, b, dst } => self.merge_sorted_simple(a, b, dst),
            Length { ch } => self.length(ch),
            GetItem { ch } => self.get_item(ch),
            SetItem { ch } => self.set_item(ch, true),
            SetItemQuiet { ch } => self.set_item(ch, false),
            ReplaceItem { ch } => self.replace_item(ch),
            MemberIndex { ch } => self.member_index(ch),
            InsertAt { ch } => self.insert_at(ch, true),
            InsertAtQuiet { ch } => self.insert_at(ch, false),
            DeleteAt { ch } => self.delete_at(ch),
            TakeAt { ch } => self.take_at(ch),
            LoadWords { ch } => self.load_words(ch),
            LoadWordsReverse { ch } => self.load_stream(ch, list_ops::StreamMode::Front),
            LoadWordsSorted { ch } => self.load_stream(ch, list_ops::StreamMode::Sorted),
            LoadWordsUnique { ch } => self.load_stream(ch, list_ops::StreamMode::Unique),
            UnloadAll { ch } => self.unload_all(ch),
            UnloadReverseFirst { ch, aux } => self.unload_reverse_first(ch, aux),
            UnloadReverseNext { ch, aux } => self.unload_reverse_next(ch, aux),
            UnloadAllReverse { ch, aux } => self.unload_all_reverse(ch, aux),
            LoadIntFirst { ch } => self.load_int_first(ch),
            LoadIntNext { ch } => self.load_int_next(ch),
            IntEqual { a, b } => self.int_equal(a, b),
            IntLess { a, b } => self.int_compare(a, b, true),
            IntLessEq { a, b } => self.int_compare(a, b, false),
            IntCopy { src, dst } => self.int_copy(src, dst),
            IntAnd { a, b, dst } => self.int_bitwise(a, b, dst, arith_ops::BitOp::And),
            IntOr { a, b, dst } => self.int_bitwise(a, b, dst, arith_ops::BitOp::Or),
            IntXor { a, b, dst } => self.int_bitwise(a, b, dst, arith_ops::BitOp::Xor),
            IntDouble { ch } => self.int_double(ch),
            Snapshot { ch } => self.snapshot(ch),
            IntSnapshot { ch } => self.int_snapshot(ch),
            Report { base, detailed } => self.report(base, detailed),
            Stop => unreachable!("stop is handled by the dispatch loop"),
        }
    }

    /// Diagnostic name, identical to the thread name.
    fn name(&self) -> String {
        format!("{}.{}", self.chain, self.position)
    }

    /// Append a child node below this one, if there is none yet.
    fn extend(&mut self) {
        if self.lower.is_none() {
            let (conn, handle) = ProcessingElement::launch(self.chain.clone(), self.position + 1);
            self.lower = Some(conn);
            self.child = Some(handle);
        }
    }

    /// The connector to the child.
    ///
    /// # Panics
    ///
    /// Panics if no child exists: a handler forwarded past the boundary it
    /// was supposed to extend, which is a protocol design error.
    fn lower(&self) -> Arc<Connector> {
        self.lower
            .clone()
            .expect("operation propagated past an unextended node")
    }

    /// Whether a lane holds a content word at this node.
    ///
    /// An undriven flag lies past every content boundary that can reach
    /// this node, so it reads as not-occupied; propagation decisions then
    /// stay within initialized territory.
    fn occupied(&self, ch: ChannelId) -> bool {
        matches!(self.flag[ch], Wire::Def(false))
    }

    // --- local building blocks shared by orchestrating handlers ----------

    /// Take the top word of a lane at this node, shifting deeper content up.
    fn local_pull(&mut self, ch: ChannelId) -> Option<Word> {
        if !self.occupied(ch) {
            return None;
        }
        let w = self.word[ch].get();
        let lower = self.lower();
        lower.send_request(Op::Pull { ch });
        let (below, empty) = lower.recv_word_flag();
        self.word[ch] = below;
        self.flag[ch] = Wire::Def(empty);
        Some(w)
    }

    /// Put a word on top of a lane at this node, shifting content down.
    fn local_push(&mut self, ch: ChannelId, w: Word) {
        if self.occupied(ch) {
            let old = std::mem::replace(&mut self.word[ch], Wire::Def(w));
            let lower = self.lower();
            lower.send_request(Op::Push { ch });
            lower.send_word(old);
        } else {
            self.word[ch] = Wire::Def(w);
            self.flag[ch] = Wire::Def(false);
            self.extend();
            self.lower().send_request(Op::Clear { ch });
        }
    }

    /// Append a word at the bottom of a lane, starting from this node.
    fn local_add_last(&mut self, ch: ChannelId, w: Word) {
        if self.occupied(ch) {
            let lower = self.lower();
            lower.send_request(Op::AddLast { ch });
            lower.send_word(Wire::Def(w));
        } else {
            self.word[ch] = Wire::Def(w);
            self.flag[ch] = Wire::Def(false);
            self.extend();
            self.lower().send_request(Op::Clear { ch });
        }
    }

    /// Insert a word into a non-decreasing lane, starting from this node.
    fn local_insert_sorted(&mut self, ch: ChannelId, w: Word) {
        if !self.occupied(ch) {
            self.word[ch] = Wire::Def(w);
            self.flag[ch] = Wire::Def(false);
            self.extend();
            self.lower().send_request(Op::Clear { ch });
        } else if w < self.word[ch].get() {
            let old = std::mem::replace(&mut self.word[ch], Wire::Def(w));
            let lower = self.lower();
            lower.send_request(Op::Push { ch });
            lower.send_word(old);
        } else {
            let lower = self.lower();
            lower.send_request(Op::InsertSorted { ch });
            lower.send_word(Wire::Def(w));
        }
    }

    /// Insert into an increasing lane, discarding duplicates.
    fn local_insert_unique(&mut self, ch: ChannelId, w: Word) {
        if !self.occupied(ch) {
            self.word[ch] = Wire::Def(w);
            self.flag[ch] = Wire::Def(false);
            self.extend();
            self.lower().send_request(Op::Clear { ch });
        } else {
            let local = self.word[ch].get();
            if w == local {
                // already present
            } else if w < local {
                let old = std::mem::replace(&mut self.word[ch], Wire::Def(w));
                let lower = self.lower();
                lower.send_request(Op::Push { ch });
                lower.send_word(old);
            } else {
                let lower = self.lower();
                lower.send_request(Op::InsertUnique { ch });
                lower.send_word(Wire::Def(w));
            }
        }
    }

    // --- state report ------------------------------------------------------

    /// Log one line of local state, then relay the report downward.
    ///
    /// The flag reply synchronizes completion: the controller's report call
    /// does not return until every node has logged.
    fn report(&self, base: DisplayBase, detailed: bool) {
        let line = if detailed {
            self.render_detailed(base)
        } else {
            self.render_brief(base)
        };
        tracing::info!(target: "asynchain_rs::report", "{line}");
        if let Some(lower) = &self.lower {
            lower.send_request(Op::Report { base, detailed });
            let _ = lower.recv_flag();
        }
        self.upper.send_flag(Wire::Undef);
    }

    fn render_detailed(&self, base: DisplayBase) -> String {
        let mut line = format!("{:9}", self.name());
        for ch in 0..CHANNELS {
            line.push_str(&format!(
                " {:>8} {:5}",
                base.render_wire(self.word[ch]),
                self.flag[ch].to_string()
            ));
        }
        for slot in 0..SCRATCH_SLOTS {
            line.push_str(&format!(
                " {:>8} {:5}",
                base.render_wire(self.scratch_word[slot]),
                self.scratch_flag[slot].to_string()
            ));
        }
        line
    }

    fn render_brief(&self, base: DisplayBase) -> String {
        let mut line = format!("{:9}", self.name());
        for ch in 0..CHANNELS {
            let cell = match self.flag[ch] {
                Wire::Def(false) => base.render_wire(self.word[ch]),
                Wire::Def(true) => "-".to_string(),
                Wire::Undef => "?".to_string(),
            };
            line.push_str(&format!(" {cell:>8}"));
        }
        line
    }
}
