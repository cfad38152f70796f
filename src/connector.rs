//! Point-to-point handshake link between two adjacent processing elements.
//!
//! A [`Connector`] models the wire bundle between two asynchronous
//! circuits: data lines plus a request/acknowledge [`Signal`] pair, driven
//! with a 4-phase bundled-data protocol:
//!
//! 1. the sender stamps the payload and raises *request*;
//! 2. the receiver reads the payload and raises *acknowledge*;
//! 3. the sender lowers *request*;
//! 4. the receiver lowers *acknowledge*, completing the cycle.
//!
//! Every send blocks until its acknowledge, so the handshake itself is the
//! backpressure mechanism: nothing is buffered, nothing can be dropped.
//!
//! # Message shapes
//!
//! Five statically distinguished shapes cross a connector, each with its
//! own send/receive pair: an operation request, a word, a word plus flag, a
//! flag, and a flag pair (used by three-valued comparison replies carrying
//! result and certainty). The send and receive sides must agree on the
//! shape; a mismatch means the two interacting protocol halves were
//! designed incompatibly, and panics immediately. Likewise, starting a
//! send while the previous message is still unconsumed panics.
//!
//! A connector is reused for request and reply, with the two endpoints
//! alternating sender/receiver roles; a caller must consume the reply it
//! expects before sending again.

use crate::op::Op;
use crate::signal::Signal;
use crate::types::{FlagWire, Wire, WordWire};
use parking_lot::Mutex;

/// Shape of the message currently latched in a connector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Shape {
    /// No message pending; the connector can accept a send.
    Ready,
    Request,
    Word,
    WordFlag,
    Flag,
    FlagPair,
}

/// Payload latch of a connector.
#[derive(Debug)]
struct Latch {
    shape: Shape,
    op: Option<Op>,
    word: WordWire,
    flag: FlagWire,
    flag2: FlagWire,
}

impl Latch {
    fn new() -> Self {
        Latch {
            shape: Shape::Ready,
            op: None,
            word: Wire::Undef,
            flag: Wire::Undef,
            flag2: Wire::Undef,
        }
    }
}

/// A two-way handshake channel between exactly two threads.
#[derive(Debug)]
pub struct Connector {
    latch: Mutex<Latch>,
    request: Signal,
    acknowledge: Signal,
}

impl Default for Connector {
    fn default() -> Self {
        Self::new()
    }
}

impl Connector {
    /// Create an idle connector.
    pub fn new() -> Self {
        Connector {
            latch: Mutex::new(Latch::new()),
            request: Signal::new(),
            acknowledge: Signal::new(),
        }
    }

    /// Drive one send cycle of the 4-phase protocol.
    fn send(&self, shape: Shape, fill: impl FnOnce(&mut Latch)) {
        // Wait out the tail of the previous cycle before touching the latch.
        self.acknowledge.wait_false();
        {
            let mut latch = self.latch.lock();
            assert!(
                latch.shape == Shape::Ready,
                "send on a busy connector: {:?} still pending",
                latch.shape
            );
            fill(&mut latch);
            latch.shape = shape;
        }
        self.request.set_true();
        self.acknowledge.wait_true();
        self.request.set_false();
    }

    /// Drive one receive cycle of the 4-phase protocol.
    fn receive<T>(&self, expected: Shape, read: impl FnOnce(&Latch) -> T) -> T {
        self.request.wait_true();
        let value = {
            let latch = self.latch.lock();
            assert!(
                latch.shape == expected,
                "connector shape mismatch: {:?} sent, {:?} expected",
                latch.shape,
                expected
            );
            read(&latch)
        };
        self.acknowledge.set_true();
        self.request.wait_false();
        self.latch.lock().shape = Shape::Ready;
        self.acknowledge.set_false();
        value
    }

    /// Send an operation request.
    pub fn send_request(&self, op: Op) {
        self.send(Shape::Request, |l| l.op = Some(op));
    }

    /// Receive an operation request.
    pub fn recv_request(&self) -> Op {
        self.receive(Shape::Request, |l| l.op.expect("request latch empty"))
    }

    /// Send one word.
    pub fn send_word(&self, word: WordWire) {
        self.send(Shape::Word, |l| l.word = word);
    }

    /// Receive one word.
    pub fn recv_word(&self) -> WordWire {
        self.receive(Shape::Word, |l| l.word)
    }

    /// Send a word together with a flag.
    pub fn send_word_flag(&self, word: WordWire, flag: bool) {
        self.send(Shape::WordFlag, |l| {
            l.word = word;
            l.flag = Wire::Def(flag);
        });
    }

    /// Receive a word together with a flag.
    pub fn recv_word_flag(&self) -> (WordWire, bool) {
        self.receive(Shape::WordFlag, |l| (l.word, l.flag.get()))
    }

    /// Send one flag.
    pub fn send_flag(&self, flag: FlagWire) {
        self.send(Shape::Flag, |l| l.flag = flag);
    }

    /// Receive one flag.
    pub fn recv_flag(&self) -> FlagWire {
        self.receive(Shape::Flag, |l| l.flag)
    }

    /// Send a flag pair (typically result plus certainty).
    pub fn send_flag_pair(&self, first: bool, second: bool) {
        self.send(Shape::FlagPair, |l| {
            l.flag = Wire::Def(first);
            l.flag2 = Wire::Def(second);
        });
    }

    /// Receive a flag pair.
    pub fn recv_flag_pair(&self) -> (bool, bool) {
        self.receive(Shape::FlagPair, |l| (l.flag.get(), l.flag2.get()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn request_round_trip() {
        let c = Arc::new(Connector::new());
        let c2 = c.clone();
        let receiver = thread::spawn(move || c2.recv_request());
        c.send_request(Op::Clear { ch: 1 });
        assert_eq!(receiver.join().unwrap(), Op::Clear { ch: 1 });
    }

    #[test]
    fn every_shape_round_trips() {
        let c = Arc::new(Connector::new());
        let c2 = c.clone();
        let receiver = thread::spawn(move || {
            let w = c2.recv_word();
            let (w2, f) = c2.recv_word_flag();
            let f2 = c2.recv_flag();
            let pair = c2.recv_flag_pair();
            (w.get(), w2.get(), f, f2.get(), pair)
        });
        c.send_word(Wire::Def(7));
        c.send_word_flag(Wire::Def(8), true);
        c.send_flag(Wire::Def(false));
        c.send_flag_pair(true, false);
        assert_eq!(receiver.join().unwrap(), (7, 8, true, false, (true, false)));
    }

    #[test]
    fn undriven_word_crosses_the_link() {
        let c = Arc::new(Connector::new());
        let c2 = c.clone();
        let receiver = thread::spawn(move || {
            let (w, empty) = c2.recv_word_flag();
            (w.is_def(), empty)
        });
        c.send_word_flag(Wire::Undef, true);
        assert_eq!(receiver.join().unwrap(), (false, true));
    }

    #[test]
    #[should_panic(expected = "shape mismatch")]
    fn shape_mismatch_is_fatal() {
        let c = Arc::new(Connector::new());
        let c2 = c.clone();
        // The sender never gets its acknowledge; the thread is leaked.
        thread::spawn(move || c2.send_word(Wire::Def(1)));
        let _ = c.recv_flag();
    }

    #[test]
    fn alternating_roles_reuse_one_connector() {
        // Caller sends a request and a word, callee replies with a flag:
        // the same alternation every chain operation uses.
        let c = Arc::new(Connector::new());
        let c2 = c.clone();
        let callee = thread::spawn(move || {
            let op = c2.recv_request();
            let w = c2.recv_word();
            c2.send_flag(Wire::Def(w.get() > 10));
            op
        });
        c.send_request(Op::Member { ch: 0 });
        c.send_word(Wire::Def(42));
        assert_eq!(c.recv_flag().get(), true);
        assert_eq!(callee.join().unwrap(), Op::Member { ch: 0 });
    }
}
