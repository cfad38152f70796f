//! The chain controller: a synchronous façade over the entry connector.
//!
//! A [`Chain`] owns the entry processing element of a chain and turns the
//! low-level request/reply protocol into ordinary call/return/`Result`
//! semantics. Every method issues one or more protocol exchanges and blocks
//! until the full reply arrives, so from the caller's perspective the API
//! is synchronous even though the implementation is one thread per node.
//!
//! Methods take `&mut self` deliberately: the protocol supports exactly one
//! operation in flight per chain, and exclusive access encodes that
//! contract in the type system.
//!
//! Domain failures (peeking at an empty channel, indexing past the end,
//! searching for an absent word) come back as [`ChainError`]. Protocol
//! misuse is not represented here; it panics inside the chain (see
//! [`crate::connector`]).

use crate::connector::Connector;
use crate::error::{ChainError, Result};
use crate::op::Op;
use crate::pe::ProcessingElement;
use crate::types::{ChannelId, DisplayBase, Wire, Word, CHANNELS, WORD_BITS};
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use std::thread::JoinHandle;

static NEXT_CHAIN_ID: AtomicU32 = AtomicU32::new(0);

/// Handle to a running chain, owning its entry node.
pub struct Chain {
    name: String,
    entry: Arc<Connector>,
    entry_thread: Option<JoinHandle<()>>,
    stopped: bool,
}

impl Chain {
    /// Start a chain with a generated name, all channels empty.
    pub fn new() -> Self {
        let id = NEXT_CHAIN_ID.fetch_add(1, Ordering::Relaxed) + 1;
        Chain::named(format!("CH{id}"))
    }

    /// Start a chain with the given name (used in thread names and
    /// reports; keep it short).
    pub fn named(name: impl Into<String>) -> Self {
        let name = name.into();
        let (entry, handle) = ProcessingElement::launch(name.clone(), 1);
        let mut chain = Chain {
            name,
            entry,
            entry_thread: Some(handle),
            stopped: false,
        };
        for ch in 0..CHANNELS {
            chain.clear(ch);
        }
        tracing::debug!(chain = %chain.name, "chain started");
        chain
    }

    /// Start a chain pre-loaded with up to [`CHANNELS`] columns, column
    /// `i` going into channel `i` top-down.
    pub fn with_columns(columns: &[&[Word]]) -> Self {
        assert!(
            columns.len() <= CHANNELS,
            "a chain stores at most {CHANNELS} columns"
        );
        let mut chain = Chain::new();
        for (ch, column) in columns.iter().enumerate() {
            chain.load_words(ch, column);
        }
        chain
    }

    /// The chain's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    // --- local operations -------------------------------------------------

    /// Whether the channel holds no words.
    pub fn is_empty(&mut self, ch: ChannelId) -> bool {
        self.entry.send_request(Op::IsEmpty { ch });
        self.entry.recv_flag().get()
    }

    /// Empty the channel.
    pub fn clear(&mut self, ch: ChannelId) {
        self.entry.send_request(Op::Clear { ch });
    }

    /// Empty two channels in one indivisible operation.
    pub fn clear_pair(&mut self, a: ChannelId, b: ChannelId) {
        self.entry.send_request(Op::ClearPair { a, b });
    }

    /// The first (top) word.
    pub fn first(&mut self, ch: ChannelId) -> Result<Word> {
        self.entry.send_request(Op::First { ch });
        self.word_or_empty(ch)
    }

    /// Replace the first word, returning the previous one.
    pub fn replace_first(&mut self, ch: ChannelId, word: Word) -> Result<Word> {
        self.entry.send_request(Op::ReplaceFirst { ch });
        self.entry.send_word(Wire::Def(word));
        self.word_or_empty(ch)
    }

    // --- whole-chain operations -------------------------------------------

    /// Copy one channel's contents over another's.
    pub fn copy(&mut self, src: ChannelId, dst: ChannelId) {
        self.entry.send_request(Op::Copy { src, dst });
    }

    /// Move one channel's contents over another's, emptying the source.
    pub fn move_contents(&mut self, src: ChannelId, dst: ChannelId) {
        self.entry.send_request(Op::Move { src, dst });
    }

    /// Exchange the contents of two channels.
    pub fn swap(&mut self, a: ChannelId, b: ChannelId) {
        self.entry.send_request(Op::Swap { a, b });
    }

    /// Overwrite every content word with `word`.
    pub fn set_all(&mut self, ch: ChannelId, word: Word) {
        self.entry.send_request(Op::SetAll { ch });
        self.entry.send_word(Wire::Def(word));
    }

    /// Whether `word` occurs in the channel.
    pub fn member(&mut self, ch: ChannelId, word: Word) -> bool {
        self.entry.send_request(Op::Member { ch });
        self.entry.send_word(Wire::Def(word));
        self.entry.recv_flag().get()
    }

    // --- stack/queue/deque operations -------------------------------------

    /// Add a word at the top.
    pub fn push(&mut self, ch: ChannelId, word: Word) {
        self.entry.send_request(Op::Push { ch });
        self.entry.send_word(Wire::Def(word));
    }

    /// Instructional push with linear caller latency; same effect as
    /// [`push`](Chain::push).
    pub fn push_linear(&mut self, ch: ChannelId, word: Word) {
        self.entry.send_request(Op::PushLinear { ch });
        self.entry.send_word(Wire::Def(word));
    }

    /// Remove and return the top word.
    pub fn pull(&mut self, ch: ChannelId) -> Result<Word> {
        self.entry.send_request(Op::Pull { ch });
        self.word_or_empty(ch)
    }

    /// The last (bottom) word.
    pub fn last(&mut self, ch: ChannelId) -> Result<Word> {
        self.entry.send_request(Op::Last { ch });
        self.word_or_empty(ch)
    }

    /// Append a word at the bottom.
    pub fn add_last(&mut self, ch: ChannelId, word: Word) {
        self.entry.send_request(Op::AddLast { ch });
        self.entry.send_word(Wire::Def(word));
    }

    /// Remove the last word.
    pub fn remove_last(&mut self, ch: ChannelId) -> Result<()> {
        self.entry.send_request(Op::RemoveLast { ch });
        if self.entry.recv_flag().get() {
            Err(ChainError::Empty { channel: ch })
        } else {
            Ok(())
        }
    }

    /// Remove and return the last word.
    pub fn take_last(&mut self, ch: ChannelId) -> Result<Word> {
        self.entry.send_request(Op::TakeLast { ch });
        self.word_or_empty(ch)
    }

    /// Replace the last word.
    pub fn set_last(&mut self, ch: ChannelId, word: Word) -> Result<()> {
        self.entry.send_request(Op::SetLast { ch });
        self.entry.send_word(Wire::Def(word));
        if self.entry.recv_flag().get() {
            Err(ChainError::Empty { channel: ch })
        } else {
            Ok(())
        }
    }

    /// Replace the last word, returning the previous one.
    pub fn replace_last(&mut self, ch: ChannelId, word: Word) -> Result<Word> {
        self.entry.send_request(Op::ReplaceLast { ch });
        self.entry.send_word(Wire::Def(word));
        self.word_or_empty(ch)
    }

    /// Rotate the top word to the bottom, returning it.
    pub fn rotate_down(&mut self, ch: ChannelId) -> Result<Word> {
        self.entry.send_request(Op::RotateDown { ch });
        self.word_or_empty(ch)
    }

    /// Rotate the bottom word to the top, returning it.
    pub fn rotate_up(&mut self, ch: ChannelId) -> Result<Word> {
        self.entry.send_request(Op::RotateUp { ch });
        self.word_or_empty(ch)
    }

    // --- reversal ----------------------------------------------------------

    /// Reverse `src` into `dst` (combined-wave implementation). `src` is
    /// consumed.
    pub fn reverse(&mut self, src: ChannelId, dst: ChannelId) {
        self.entry.send_request(Op::Reverse { src, dst });
    }

    /// Instructional reversal with separate pull and push waves.
    pub fn reverse_simple(&mut self, src: ChannelId, dst: ChannelId) {
        self.entry.send_request(Op::ReverseSimple { src, dst });
    }

    /// Instructional reversal driven entirely from the controller, one
    /// pull and one push operation per element.
    pub fn reverse_simplest(&mut self, src: ChannelId, dst: ChannelId) {
        self.clear(dst);
        while let Ok(w) = self.pull(src) {
            self.push(dst, w);
        }
    }

    // --- order operations ---------------------------------------------------

    /// The minimum content word.
    pub fn min(&mut self, ch: ChannelId) -> Result<Word> {
        self.entry.send_request(Op::Min { ch });
        self.word_or_empty(ch)
    }

    /// Membership on a non-decreasing channel; stops at the first greater
    /// word.
    pub fn member_sorted(&mut self, ch: ChannelId, word: Word) -> bool {
        self.entry.send_request(Op::MemberSorted { ch });
        self.entry.send_word(Wire::Def(word));
        self.entry.recv_flag().get()
    }

    /// Insert into a non-decreasing channel, keeping the order.
    pub fn insert_sorted(&mut self, ch: ChannelId, word: Word) {
        self.entry.send_request(Op::InsertSorted { ch });
        self.entry.send_word(Wire::Def(word));
    }

    /// Insert into an increasing channel unless already present.
    pub fn insert_unique(&mut self, ch: ChannelId, word: Word) {
        self.entry.send_request(Op::InsertUnique { ch });
        self.entry.send_word(Wire::Def(word));
    }

    /// Drain `src` into sorted `dst`, keeping `dst` sorted.
    pub fn insert_all_sorted(&mut self, src: ChannelId, dst: ChannelId) {
        self.entry.send_request(Op::InsertAllSorted { src, dst });
    }

    /// Instructional variant of [`insert_all_sorted`], driven from the
    /// controller with one pull and one insert per element.
    pub fn insert_all_sorted_simple(&mut self, src: ChannelId, dst: ChannelId) {
        while let Ok(w) = self.pull(src) {
            self.insert_sorted(dst, w);
        }
    }

    /// Insertion sort.
    pub fn insertion_sort(&mut self, ch: ChannelId) {
        self.entry.send_request(Op::InsertionSort { ch });
    }

    /// Selection sort.
    pub fn selection_sort(&mut self, ch: ChannelId) {
        self.entry.send_request(Op::SelectionSort { ch });
    }

    /// Bubble sort.
    pub fn bubble_sort(&mut self, ch: ChannelId) {
        self.entry.send_request(Op::BubbleSort { ch });
    }

    /// Merge sorted `src` into sorted `dst`; `src` is emptied.
    pub fn merge_sorted_into(&mut self, src: ChannelId, dst: ChannelId) {
        self.entry.send_request(Op::MergeSortedInto { src, dst });
    }

    /// Instructional merge of sorted `a` and `b` into `dst`, consuming
    /// both inputs.
    pub fn merge_sorted_simple(&mut self, a: ChannelId, b: ChannelId, dst: ChannelId) {
        self.entry.send_request(Op::MergeSortedSimple { a, b, dst });
    }

    // --- indexing operations -----------------------------------------------

    /// Number of content words.
    pub fn length(&mut self, ch: ChannelId) -> Word {
        self.entry.send_request(Op::Length { ch });
        self.entry.recv_word().get()
    }

    /// The word at `index`.
    pub fn get_item(&mut self, ch: ChannelId, index: Word) -> Result<Word> {
        self.entry.send_request(Op::GetItem { ch });
        self.entry.send_word(Wire::Def(index));
        self.word_or_out_of_range(ch, index)
    }

    /// Overwrite the word at `index`.
    pub fn set_item(&mut self, ch: ChannelId, index: Word, word: Word) -> Result<()> {
        self.entry.send_request(Op::SetItem { ch });
        self.entry.send_word(Wire::Def(index));
        self.entry.send_word(Wire::Def(word));
        if self.entry.recv_flag().get() {
            Err(ChainError::IndexOutOfRange { channel: ch, index })
        } else {
            Ok(())
        }
    }

    /// Overwrite the word at `index`; silently does nothing past the end.
    pub fn set_item_quiet(&mut self, ch: ChannelId, index: Word, word: Word) {
        self.entry.send_request(Op::SetItemQuiet { ch });
        self.entry.send_word(Wire::Def(index));
        self.entry.send_word(Wire::Def(word));
    }

    /// Overwrite the word at `index`, returning the previous one.
    pub fn replace_item(&mut self, ch: ChannelId, index: Word, word: Word) -> Result<Word> {
        self.entry.send_request(Op::ReplaceItem { ch });
        self.entry.send_word(Wire::Def(index));
        self.entry.send_word(Wire::Def(word));
        self.word_or_out_of_range(ch, index)
    }

    /// First index holding `word`.
    pub fn member_index(&mut self, ch: ChannelId, word: Word) -> Result<Word> {
        self.entry.send_request(Op::MemberIndex { ch });
        self.entry.send_word(Wire::Def(word));
        let (index, not_found) = self.entry.recv_word_flag();
        if not_found {
            Err(ChainError::NotFound { channel: ch, word })
        } else {
            Ok(index.get())
        }
    }

    /// Insert `word` at `index`, shifting deeper words down.
    pub fn insert_at(&mut self, ch: ChannelId, index: Word, word: Word) -> Result<()> {
        self.entry.send_request(Op::InsertAt { ch });
        self.entry.send_word(Wire::Def(index));
        self.entry.send_word(Wire::Def(word));
        if self.entry.recv_flag().get() {
            Err(ChainError::IndexOutOfRange { channel: ch, index })
        } else {
            Ok(())
        }
    }

    /// Insert `word` at `index`; silently does nothing past the end.
    pub fn insert_at_quiet(&mut self, ch: ChannelId, index: Word, word: Word) {
        self.entry.send_request(Op::InsertAtQuiet { ch });
        self.entry.send_word(Wire::Def(index));
        self.entry.send_word(Wire::Def(word));
    }

    /// Delete the word at `index`; silently does nothing past the end.
    pub fn delete_at(&mut self, ch: ChannelId, index: Word) {
        self.entry.send_request(Op::DeleteAt { ch });
        self.entry.send_word(Wire::Def(index));
    }

    /// Delete and return the word at `index`.
    pub fn take_at(&mut self, ch: ChannelId, index: Word) -> Result<Word> {
        self.entry.send_request(Op::TakeAt { ch });
        self.entry.send_word(Wire::Def(index));
        self.word_or_out_of_range(ch, index)
    }

    // --- loaders ------------------------------------------------------------

    /// Load a word sequence top-down, replacing the channel contents.
    pub fn load_words(&mut self, ch: ChannelId, words: &[Word]) {
        self.entry.send_request(Op::LoadWords { ch });
        self.stream_words(words);
    }

    /// Load a word sequence bottom-up: iteration order comes back
    /// reversed.
    pub fn load_words_reverse(&mut self, ch: ChannelId, words: &[Word]) {
        self.entry.send_request(Op::LoadWordsReverse { ch });
        self.stream_words(words);
    }

    /// Load a word sequence into non-decreasing order.
    pub fn load_words_sorted(&mut self, ch: ChannelId, words: &[Word]) {
        self.entry.send_request(Op::LoadWordsSorted { ch });
        self.stream_words(words);
    }

    /// Load a word sequence into increasing order, dropping duplicates.
    pub fn load_words_unique(&mut self, ch: ChannelId, words: &[Word]) {
        self.entry.send_request(Op::LoadWordsUnique { ch });
        self.stream_words(words);
    }

    /// Instructional loader: one append operation per word.
    pub fn load_words_simple(&mut self, ch: ChannelId, words: &[Word]) {
        self.clear(ch);
        for &w in words {
            self.add_last(ch, w);
        }
    }

    /// Instructional reversing loader: one push operation per word.
    pub fn load_words_reverse_simple(&mut self, ch: ChannelId, words: &[Word]) {
        self.clear(ch);
        for &w in words {
            self.push(ch, w);
        }
    }

    /// Instructional sorting loader: one sorted insert per word.
    pub fn load_words_sorted_simple(&mut self, ch: ChannelId, words: &[Word]) {
        self.clear(ch);
        for &w in words {
            self.insert_sorted(ch, w);
        }
    }

    /// Instructional deduplicating loader: one unique insert per word.
    pub fn load_words_unique_simple(&mut self, ch: ChannelId, words: &[Word]) {
        self.clear(ch);
        for &w in words {
            self.insert_unique(ch, w);
        }
    }

    fn stream_words(&mut self, words: &[Word]) {
        for &w in words {
            self.entry.send_word_flag(Wire::Def(w), false);
        }
        self.entry.send_word_flag(Wire::Undef, true);
    }

    // --- unloaders ----------------------------------------------------------

    /// Iterate the channel top to bottom, removing each yielded word.
    ///
    /// Interruptible: each step is an independent pull, so dropping the
    /// iterator simply leaves the remaining words in place.
    pub fn unload_words(&mut self, ch: ChannelId) -> impl Iterator<Item = Word> + '_ {
        std::iter::from_fn(move || {
            self.entry.send_request(Op::Pull { ch });
            let (w, empty) = self.entry.recv_word_flag();
            if empty {
                None
            } else {
                Some(w.get())
            }
        })
    }

    /// Unload the whole channel top to bottom in one streaming operation,
    /// leaving it empty. Uninterruptible: the stream always runs to its
    /// end.
    pub fn unload_all_words(&mut self, ch: ChannelId) -> Vec<Word> {
        self.entry.send_request(Op::UnloadAll { ch });
        self.drain_word_stream()
    }

    /// Iterate the channel bottom to top, using `aux` as staging; the
    /// channel is restored as the iterator is exhausted.
    pub fn unload_words_reverse(
        &mut self,
        ch: ChannelId,
        aux: ChannelId,
    ) -> impl Iterator<Item = Word> + '_ {
        let mut started = false;
        std::iter::from_fn(move || {
            let op = if started {
                Op::UnloadReverseNext { ch, aux }
            } else {
                Op::UnloadReverseFirst { ch, aux }
            };
            started = true;
            self.entry.send_request(op);
            let (w, done) = self.entry.recv_word_flag();
            if done {
                None
            } else {
                Some(w.get())
            }
        })
    }

    /// Unload the whole channel bottom to top in one streaming operation;
    /// the channel contents survive. Uninterruptible.
    pub fn unload_all_words_reverse(&mut self, ch: ChannelId, aux: ChannelId) -> Vec<Word> {
        self.entry.send_request(Op::UnloadAllReverse { ch, aux });
        self.drain_word_stream()
    }

    fn drain_word_stream(&mut self) -> Vec<Word> {
        let mut words = Vec::new();
        loop {
            let (w, done) = self.entry.recv_word_flag();
            if done {
                break;
            }
            words.push(w.get());
        }
        words
    }

    // --- arbitrary-precision registers --------------------------------------

    /// Load a register from its words, least significant first.
    pub fn load_integer(&mut self, ch: ChannelId, words: &[Word]) {
        assert!(!words.is_empty(), "a register needs at least one word");
        self.entry.send_request(Op::LoadIntFirst { ch });
        self.entry.send_word(Wire::Def(words[0]));
        for &w in &words[1..] {
            self.entry.send_request(Op::LoadIntNext { ch });
            self.entry.send_word(Wire::Def(w));
        }
    }

    /// Whether two registers hold the same integer.
    pub fn int_equal(&mut self, a: ChannelId, b: ChannelId) -> bool {
        self.entry.send_request(Op::IntEqual { a, b });
        self.entry.recv_flag().get()
    }

    /// Whether register `a` < register `b`.
    pub fn int_less(&mut self, a: ChannelId, b: ChannelId) -> bool {
        self.entry.send_request(Op::IntLess { a, b });
        let (less, _certain) = self.entry.recv_flag_pair();
        less
    }

    /// Whether register `a` <= register `b`.
    pub fn int_less_eq(&mut self, a: ChannelId, b: ChannelId) -> bool {
        self.entry.send_request(Op::IntLessEq { a, b });
        let (le, _certain) = self.entry.recv_flag_pair();
        le
    }

    /// Copy register `src` over register `dst`.
    pub fn int_copy(&mut self, src: ChannelId, dst: ChannelId) {
        self.entry.send_request(Op::IntCopy { src, dst });
    }

    /// Bitwise AND of registers `a` and `b` into `dst`.
    pub fn int_and(&mut self, a: ChannelId, b: ChannelId, dst: ChannelId) {
        self.entry.send_request(Op::IntAnd { a, b, dst });
        self.entry.send_flag_pair(true, true);
    }

    /// Bitwise OR of registers `a` and `b` into `dst`.
    pub fn int_or(&mut self, a: ChannelId, b: ChannelId, dst: ChannelId) {
        self.entry.send_request(Op::IntOr { a, b, dst });
        self.entry.send_flag_pair(true, true);
    }

    /// Bitwise XOR of registers `a` and `b` into `dst`.
    pub fn int_xor(&mut self, a: ChannelId, b: ChannelId, dst: ChannelId) {
        self.entry.send_request(Op::IntXor { a, b, dst });
        self.entry.send_flag_pair(true, true);
    }

    /// Double the register (shift left one bit).
    pub fn int_double(&mut self, ch: ChannelId) {
        self.entry.send_request(Op::IntDouble { ch });
        self.entry.send_word(Wire::Def(0));
    }

    /// The register's words, least significant first, left intact.
    pub fn int_snapshot(&mut self, ch: ChannelId) -> Vec<Word> {
        self.entry.send_request(Op::IntSnapshot { ch });
        let mut words = Vec::new();
        loop {
            let (w, more) = self.entry.recv_word_flag();
            words.push(w.get());
            if !more {
                break;
            }
        }
        words
    }

    /// The register's numeric value.
    pub fn int_value(&mut self, ch: ChannelId) -> u128 {
        let mut value: u128 = 0;
        for &w in self.int_snapshot(ch).iter().rev() {
            value = (value << WORD_BITS) | w as u128;
        }
        value
    }

    // --- inspection ---------------------------------------------------------

    /// The channel contents top to bottom, left intact.
    pub fn snapshot(&mut self, ch: ChannelId) -> Vec<Word> {
        self.entry.send_request(Op::Snapshot { ch });
        self.drain_word_stream()
    }

    /// Every channel's contents, left intact.
    pub fn snapshot_all(&mut self) -> Vec<Vec<Word>> {
        (0..CHANNELS).map(|ch| self.snapshot(ch)).collect()
    }

    /// Log one line of state per node in the given base (2, 4, 8, 16 or
    /// 10; anything else falls back to 10). Returns after every node has
    /// logged.
    pub fn report(&mut self, base: u32, detailed: bool) {
        let base = DisplayBase::checked(base);
        self.entry.send_request(Op::Report { base, detailed });
        let _ = self.entry.recv_flag();
    }

    // --- lifecycle ----------------------------------------------------------

    /// Halt every node. Safe exactly once, with no operation in flight;
    /// returns after all chain threads have exited.
    pub fn stop(&mut self) {
        if self.stopped {
            return;
        }
        self.stopped = true;
        self.entry.send_request(Op::Stop);
        if let Some(handle) = self.entry_thread.take() {
            let _ = handle.join();
        }
        tracing::debug!(chain = %self.name, "chain stopped");
    }

    // --- reply plumbing -----------------------------------------------------

    fn word_or_empty(&mut self, ch: ChannelId) -> Result<Word> {
        let (w, empty) = self.entry.recv_word_flag();
        if empty {
            Err(ChainError::Empty { channel: ch })
        } else {
            Ok(w.get())
        }
    }

    fn word_or_out_of_range(&mut self, ch: ChannelId, index: Word) -> Result<Word> {
        let (w, out_of_range) = self.entry.recv_word_flag();
        if out_of_range {
            Err(ChainError::IndexOutOfRange { channel: ch, index })
        } else {
            Ok(w.get())
        }
    }
}

impl Default for Chain {
    fn default() -> Self {
        Chain::new()
    }
}

impl Drop for Chain {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty_on_every_channel() {
        let mut chain = Chain::new();
        for ch in 0..CHANNELS {
            assert!(chain.is_empty(ch));
            assert_eq!(chain.snapshot(ch), Vec::<Word>::new());
        }
        chain.stop();
    }

    #[test]
    fn with_columns_loads_each_channel() {
        let mut chain = Chain::with_columns(&[&[0, 1, 2], &[3, 4]]);
        assert_eq!(chain.snapshot(0), vec![0, 1, 2]);
        assert_eq!(chain.snapshot(1), vec![3, 4]);
        assert_eq!(chain.snapshot(2), Vec::<Word>::new());
        chain.stop();
    }

    #[test]
    fn drop_stops_the_chain() {
        let mut chain = Chain::new();
        chain.push(0, 1);
        // No explicit stop; Drop must tear the threads down without hanging.
    }

    #[test]
    #[should_panic(expected = "at most")]
    fn too_many_columns_is_rejected() {
        let _ = Chain::with_columns(&[&[1], &[2], &[3], &[4]]);
    }
}
