//! Order operation handlers: minimum, sorted search and insertion, the
//! three sorts, and merging.
//!
//! The sorts differ in where the recursion sits relative to local
//! mutation. Insertion sort recurses first and fixes each node on the way
//! back; selection sort runs one full-depth wave per extracted element;
//! bubble sort runs one bounded wave per settled element, tracked by the
//! per-node settle markers.

use super::ProcessingElement;
use crate::op::Op;
use crate::types::{ChannelId, Wire};

impl ProcessingElement {
    /// Reply the minimum content word, resolved on the way back up.
    pub(super) fn min(&mut self, ch: ChannelId) {
        if !self.occupied(ch) {
            self.upper.send_word_flag(Wire::Undef, true);
            return;
        }
        let lower = self.lower();
        lower.send_request(Op::Min { ch });
        let (below, empty) = lower.recv_word_flag();
        if empty {
            self.upper.send_word_flag(self.word[ch], false);
        } else {
            let m = below.get().min(self.word[ch].get());
            self.upper.send_word_flag(Wire::Def(m), false);
        }
    }

    /// Membership on a non-decreasing lane; gives up as soon as the local
    /// word exceeds the probe.
    pub(super) fn member_sorted(&mut self, ch: ChannelId) {
        let probe = self.upper.recv_word();
        if !self.occupied(ch) {
            self.upper.send_flag(Wire::Def(false));
            return;
        }
        let local = self.word[ch].get();
        if local == probe.get() {
            self.upper.send_flag(Wire::Def(true));
        } else if local > probe.get() {
            self.upper.send_flag(Wire::Def(false));
        } else {
            let lower = self.lower();
            lower.send_request(Op::MemberSorted { ch });
            lower.send_word(probe);
            let found = lower.recv_flag();
            self.upper.send_flag(found);
        }
    }

    /// Sorted insert: the received word settles here or travels deeper.
    pub(super) fn insert_sorted_op(&mut self, ch: ChannelId) {
        let w = self.upper.recv_word().get();
        self.local_insert_sorted(ch, w);
    }

    /// Unique sorted insert: exact duplicates are dropped on the spot.
    pub(super) fn insert_unique_op(&mut self, ch: ChannelId) {
        let w = self.upper.recv_word().get();
        self.local_insert_unique(ch, w);
    }

    /// Drain `src` into sorted `dst`, one pull and one insert per element.
    pub(super) fn insert_all_sorted(&mut self, src: ChannelId, dst: ChannelId) {
        while let Some(w) = self.local_pull(src) {
            self.local_insert_sorted(dst, w);
        }
    }

    // --- insertion sort ---------------------------------------------------

    /// Sort everything from this node down: recurse first, then merge the
    /// local word into the now-sorted suffix.
    ///
    /// No explicit completion message exists; the next send simply blocks
    /// until the child's dispatch loop finishes its recursive sort and
    /// comes back for the next request.
    pub(super) fn sort_from_end(&mut self, ch: ChannelId) {
        if !self.occupied(ch) {
            return;
        }
        let lower = self.lower();
        lower.send_request(Op::SortFromEnd { ch });
        lower.send_request(Op::PullInsertSorted { ch });
        lower.send_word(self.word[ch]);
        let (smallest, _) = lower.recv_word_flag();
        self.word[ch] = smallest;
    }

    /// Merge the carried word into the sorted suffix starting here. The
    /// smallest of the combination travels back up to fill the caller's
    /// slot; the carried word sinks to its sorted position.
    pub(super) fn pull_insert_sorted(&mut self, ch: ChannelId) {
        let carried = self.upper.recv_word();
        if !self.occupied(ch) || carried.get() <= self.word[ch].get() {
            self.upper.send_word_flag(carried, false);
            return;
        }
        self.upper.send_word_flag(self.word[ch], false);
        let lower = self.lower();
        lower.send_request(Op::PullInsertSorted { ch });
        lower.send_word(carried);
        let (up, _) = lower.recv_word_flag();
        self.word[ch] = up;
    }

    // --- selection sort ---------------------------------------------------

    /// Extract the minimum of the remainder to this node, then repeat on
    /// the node below.
    pub(super) fn selection_sort(&mut self, ch: ChannelId) {
        if !self.occupied(ch) {
            return;
        }
        let lower = self.lower();
        lower.send_request(Op::MinToTop { ch });
        // The word that shifts down if the gap closes through this level.
        lower.send_word(self.word[ch]);
        // The running minimum so far.
        lower.send_word(self.word[ch]);
        let (minimum, _) = lower.recv_word_flag();
        self.word[ch] = minimum;
        lower.send_request(Op::SelectionSort { ch });
    }

    /// Selection wave: carry (shift word, running minimum) down; carry
    /// (minimum, found) back up. The first node holding the minimum starts
    /// the one-slot downward shift that closes the extraction gap, and
    /// every node above it continues the shift.
    pub(super) fn min_to_top(&mut self, ch: ChannelId) {
        if self.occupied(ch) {
            self.scratch_word[0] = self.upper.recv_word();
            self.scratch_word[1] = self.upper.recv_word();
            let local = self.word[ch].get();
            let lower = self.lower();
            lower.send_request(Op::MinToTop { ch });
            lower.send_word(self.word[ch]);
            if local < self.scratch_word[1].get() {
                lower.send_word(self.word[ch]);
            } else {
                lower.send_word(self.scratch_word[1]);
            }
            let (minimum, found) = lower.recv_word_flag();
            self.scratch_word[1] = minimum;
            self.scratch_flag[1] = Wire::Def(found);
            if !found && local != minimum.get() {
                self.upper.send_word_flag(minimum, false);
            } else {
                // The gap closes through this node: adopt the word from
                // above and report the extraction as found.
                self.word[ch] = self.scratch_word[0];
                self.upper.send_word_flag(minimum, true);
            }
        } else {
            let _ = self.upper.recv_word();
            let minimum = self.upper.recv_word();
            self.upper.send_word_flag(minimum, false);
        }
    }

    // --- bubble sort ------------------------------------------------------

    /// Run bubble waves until the wave settles at this node.
    pub(super) fn bubble_sort(&mut self, ch: ChannelId) {
        if !self.occupied(ch) {
            return;
        }
        let mut first = true;
        loop {
            let lower = self.lower();
            lower.send_request(if first {
                Op::BubbleFirst { ch }
            } else {
                Op::BubbleNext { ch }
            });
            lower.send_word(self.word[ch]);
            let (up, landed) = lower.recv_word_flag();
            self.word[ch] = up;
            self.settled[ch] = landed;
            first = false;
            if landed {
                break;
            }
        }
    }

    /// One bubble wave. The carried maximum sinks; each node returns the
    /// smaller of (carried, local) to its parent. The wave bounces at the
    /// content end (after the first pass, at the settled suffix) and the
    /// bounced word settles one node above the bounce point.
    ///
    /// The first pass ignores and rewrites stale settle markers, so no
    /// separate reset step exists.
    pub(super) fn bubble_wave(&mut self, ch: ChannelId, first: bool) {
        let carried = self.upper.recv_word();
        let boundary = !self.occupied(ch) || (!first && self.settled[ch]);
        if boundary {
            self.upper.send_word_flag(carried, true);
            return;
        }
        let local = self.word[ch].get();
        let (low, high) = if carried.get() <= local {
            (carried.get(), local)
        } else {
            (local, carried.get())
        };
        self.upper.send_word_flag(Wire::Def(low), false);
        let lower = self.lower();
        lower.send_request(if first {
            Op::BubbleFirst { ch }
        } else {
            Op::BubbleNext { ch }
        });
        lower.send_word(Wire::Def(high));
        let (up, landed) = lower.recv_word_flag();
        self.word[ch] = up;
        self.settled[ch] = landed;
    }

    // --- merging ----------------------------------------------------------

    /// Merge sorted `src` into sorted `dst` in one lockstep wave: both
    /// cursors sit on the same node at every hop. The losing head steps
    /// down one node through a nested push wave, keeping both columns
    /// aligned with the wave front.
    pub(super) fn merge_sorted_into(&mut self, src: ChannelId, dst: ChannelId) {
        if !self.occupied(src) {
            return;
        }
        if !self.occupied(dst) {
            // Destination ends here: the rest of the source moves over.
            self.word[dst] = self.word[src];
            self.flag[dst] = Wire::Def(false);
            self.flag[src] = Wire::Def(true);
            self.lower().send_request(Op::Move { src, dst });
            return;
        }
        let s = self.word[src].get();
        let d = self.word[dst].get();
        let lower = self.lower();
        if d <= s {
            // The destination head stays; the source column steps down.
            self.flag[src] = Wire::Def(true);
            lower.send_request(Op::Push { ch: src });
            lower.send_word(Wire::Def(s));
        } else {
            // The source head takes this slot; the displaced word sinks.
            self.word[dst] = Wire::Def(s);
            self.flag[src] = Wire::Def(true);
            lower.send_request(Op::Push { ch: dst });
            lower.send_word(Wire::Def(d));
        }
        lower.send_request(Op::MergeSortedInto { src, dst });
    }

    /// Instructional three-channel merge orchestrated from this node: the
    /// smaller head is pulled and appended to the result lane.
    pub(super) fn merge_sorted_simple(&mut self, a: ChannelId, b: ChannelId, dst: ChannelId) {
        self.flag[dst] = Wire::Def(true);
        loop {
            let take_a = match (self.occupied(a), self.occupied(b)) {
                (true, true) => self.word[a].get() <= self.word[b].get(),
                (true, false) => true,
                (false, true) => false,
                (false, false) => break,
            };
            let lane = if take_a { a } else { b };
            if let Some(w) = self.local_pull(lane) {
                self.local_add_last(dst, w);
            }
        }
    }
}
