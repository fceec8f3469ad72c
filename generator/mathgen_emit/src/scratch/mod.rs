//! Scratch Formatter
//!
//! Stringifies an ordered list of heterogeneous [`Piece`]s into one text
//! token stored in a fixed ring of reusable buffers.
//!
//! # Lifetime contract
//!
//! [`ScratchRing::make`] claims the slot at the rotating write index,
//! overwrites it, and advances the index modulo [`RING_CAPACITY`]. The
//! returned [`Token`] resolves to that text only until `RING_CAPACITY`
//! further `make` calls have happened; after that the slot has been reused
//! and [`ScratchRing::get`] returns `None`. Consuming a token within the
//! statement that produced it always satisfies the contract.
//!
//! A token may itself be a piece of a later `make` call (nested use), as long
//! as it is still live when that call renders it.

use std::fmt::Write as _;

/// Number of reusable buffers in the ring.
pub const RING_CAPACITY: usize = 32;

/// Expected upper bound on the rendered length of one token.
///
/// Table contents are authored to stay below this; it is asserted in debug
/// builds only.
pub const SLOT_SIZE: usize = 16 * 1024;

/// Handle to text produced by [`ScratchRing::make`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Token {
    slot: usize,
    claim: u64,
}

impl Token {
    /// Ring slot this token lives in.
    pub fn slot(self) -> usize {
        self.slot
    }
}

/// One printable value.
#[derive(Clone, Copy, Debug)]
pub enum Piece<'a> {
    Text(&'a str),
    Char(char),
    Int(i64),
    Uint(u64),
    /// Text produced by an earlier, still-live `make` call.
    Token(Token),
}

impl Piece<'_> {
    fn render_into(self, buf: &mut String, ring: &ScratchRing) {
        match self {
            Piece::Text(text) => buf.push_str(text),
            Piece::Char(c) => buf.push(c),
            Piece::Int(n) => {
                let _ = write!(buf, "{n}");
            }
            Piece::Uint(n) => {
                let _ = write!(buf, "{n}");
            }
            Piece::Token(token) => buf.push_str(ring.resolve(token)),
        }
    }
}

impl<'a> From<&'a str> for Piece<'a> {
    fn from(text: &'a str) -> Self {
        Piece::Text(text)
    }
}

impl<'a> From<&'a String> for Piece<'a> {
    fn from(text: &'a String) -> Self {
        Piece::Text(text)
    }
}

impl From<char> for Piece<'_> {
    fn from(c: char) -> Self {
        Piece::Char(c)
    }
}

impl From<i32> for Piece<'_> {
    fn from(n: i32) -> Self {
        Piece::Int(i64::from(n))
    }
}

impl From<i64> for Piece<'_> {
    fn from(n: i64) -> Self {
        Piece::Int(n)
    }
}

impl From<u32> for Piece<'_> {
    fn from(n: u32) -> Self {
        Piece::Uint(u64::from(n))
    }
}

impl From<usize> for Piece<'_> {
    fn from(n: usize) -> Self {
        Piece::Uint(u64::try_from(n).unwrap_or(u64::MAX))
    }
}

impl From<Token> for Piece<'_> {
    fn from(token: Token) -> Self {
        Piece::Token(token)
    }
}

/// Fixed pool of reusable text buffers, claimed round-robin.
pub struct ScratchRing {
    slots: Vec<String>,
    next: usize,
    claims: u64,
}

impl Default for ScratchRing {
    fn default() -> Self {
        Self::new()
    }
}

impl ScratchRing {
    /// Create a ring with every slot pre-allocated.
    pub fn new() -> Self {
        Self {
            slots: (0..RING_CAPACITY)
                .map(|_| String::with_capacity(256))
                .collect(),
            next: 0,
            claims: 0,
        }
    }

    /// Number of slots.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Total number of `make` calls so far.
    pub fn claims(&self) -> u64 {
        self.claims
    }

    /// Render `pieces` into the next slot and return a handle to it.
    pub fn make(&mut self, pieces: &[Piece<'_>]) -> Token {
        let slot = self.next;
        let claim = self.claims;
        // Reserve the claim first so a token pointing at this slot from a
        // full lap ago is already stale while we render.
        self.claims += 1;
        self.next = (self.next + 1) % RING_CAPACITY;

        let mut buf = std::mem::take(&mut self.slots[slot]);
        buf.clear();
        for piece in pieces {
            piece.render_into(&mut buf, self);
        }
        debug_assert!(
            buf.len() <= SLOT_SIZE,
            "scratch token of {} bytes exceeds slot size",
            buf.len()
        );
        self.slots[slot] = buf;

        Token { slot, claim }
    }

    /// Resolve a token, or `None` if its slot has since been reused.
    pub fn get(&self, token: Token) -> Option<&str> {
        let age = self.claims.checked_sub(token.claim)?;
        if age == 0 || age > RING_CAPACITY as u64 {
            return None;
        }
        self.slots.get(token.slot).map(String::as_str)
    }

    /// Resolve a token that the caller knows is live.
    ///
    /// Stale tokens resolve to the empty string (and trip a debug assertion).
    pub fn resolve(&self, token: Token) -> &str {
        let text = self.get(token);
        debug_assert!(
            text.is_some(),
            "scratch token {token:?} used after its slot was reused"
        );
        text.unwrap_or_default()
    }
}

/// Build a piece array from heterogeneous values.
///
/// ```
/// use mathgen_emit::{pieces, ScratchRing};
///
/// let mut ring = ScratchRing::new();
/// let token = ring.make(&pieces!["vec", 3, '<', "T", '>']);
/// assert_eq!(ring.resolve(token), "vec3<T>");
/// ```
#[macro_export]
macro_rules! pieces {
    ($($piece:expr),* $(,)?) => {
        [$($crate::Piece::from($piece)),*]
    };
}

/// Format values into a scratch token: `make!(ring, "vec", d)`.
///
/// Works with anything exposing `make(&mut self, &[Piece]) -> Token`.
#[macro_export]
macro_rules! make {
    ($ring:expr, $($piece:expr),+ $(,)?) => {
        $ring.make(&$crate::pieces![$($piece),+])
    };
}
