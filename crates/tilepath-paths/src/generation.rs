//! Generation markers for the scratch buffer.
//!
//! Each search owns two tokens, `open` and `closed`. A scratch node belongs
//! to the current search only if its status equals one of them; anything
//! else is left over from an earlier search and is treated as unvisited.
//! Both tokens grow by two per search, so tokens from different searches
//! never collide. When they would pass [`Generation::LIMIT`] the caller
//! zeroes the buffer and the tokens restart at their base values.

/// Per-node status tag.
pub(crate) type Status = u16;

/// Status of a node no search has touched since the last reset.
pub(crate) const UNVISITED: Status = 0;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct Generation {
    pub(crate) open: Status,
    pub(crate) closed: Status,
}

impl Generation {
    pub(crate) const LIMIT: Status = Status::MAX;
    pub(crate) const OPEN_BASE: Status = 2;
    pub(crate) const CLOSED_BASE: Status = 3;

    /// Markers for a freshly zeroed buffer.
    pub(crate) const fn new() -> Self {
        Self {
            open: UNVISITED,
            closed: UNVISITED + 1,
        }
    }

    /// Move to the next search's markers. Returns `true` if the tokens
    /// wrapped and the scratch buffer must be zeroed before use.
    pub(crate) fn advance(&mut self) -> bool {
        if self.closed > Self::LIMIT - 2 {
            self.open = Self::OPEN_BASE;
            self.closed = Self::CLOSED_BASE;
            true
        } else {
            self.open += 2;
            self.closed += 2;
            false
        }
    }
}

impl Default for Generation {
    fn default() -> Self {
        Self::new()
    }
}
