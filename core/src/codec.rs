use alloc::string::String;
use core::fmt;
use serde::{Deserialize, Serialize};

use crate::*;

/// Number of characters in every token produced by [`encode`].
pub const TOKEN_LEN: usize = 4;

/// Query parameter that carries the token.
pub const STATE_PARAM: &str = "state";

/// Printable form of a [`CellState`], four lowercase hex digits when it comes from [`encode`].
///
/// Tokens read back from a URL can hold anything; [`decode`] is what makes sense of them.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StateToken(String);

impl StateToken {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for StateToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for StateToken {
    fn from(token: &str) -> Self {
        Self(token.into())
    }
}

impl From<String> for StateToken {
    fn from(token: String) -> Self {
        Self(token)
    }
}

impl AsRef<str> for StateToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<CellState> for StateToken {
    fn from(state: CellState) -> Self {
        encode(&state)
    }
}

impl From<StateToken> for CellState {
    fn from(token: StateToken) -> Self {
        decode(Some(token.as_str()))
    }
}

/// Packs the cells into a `u16`, cell 0 in the most significant bit.
pub fn pack(state: &CellState) -> u16 {
    state
        .cells()
        .iter()
        .fold(0, |bits, &marked| (bits << 1) | u16::from(marked))
}

/// Inverse of [`pack`].
pub fn unpack(bits: u16) -> CellState {
    let mut cells = [false; CELL_COUNT];
    for (index, cell) in cells.iter_mut().enumerate() {
        *cell = bits & (1 << (CELL_COUNT - 1 - index)) != 0;
    }
    CellState::from_cells(cells)
}

/// Canonical token of a state: always [`TOKEN_LEN`] lowercase hex digits.
pub fn encode(state: &CellState) -> StateToken {
    StateToken(alloc::format!("{:04x}", pack(state)))
}

/// Reads a token back into a state. Never fails: anything unreadable is the empty state.
///
/// Parsing is forgiving in the way hand-edited URLs need. Surrounding whitespace and a `0x` prefix are skipped, case
/// does not matter, and only the leading run of hex digits counts, so `"00ffjunk"` reads as `"00ff"`. A value that
/// does not fit in 16 bits is unreadable.
pub fn decode(token: Option<&str>) -> CellState {
    match token.and_then(parse_hex16) {
        Some(bits) => unpack(bits),
        None => {
            if let Some(token) = token.filter(|token| !token.is_empty()) {
                log::debug!("unreadable state token {:?}, using empty state", token);
            }
            CellState::EMPTY
        }
    }
}

fn parse_hex16(token: &str) -> Option<u16> {
    let token = token.trim();
    let token = token
        .strip_prefix("0x")
        .or_else(|| token.strip_prefix("0X"))
        .unwrap_or(token);
    let digits_end = token
        .find(|c: char| !c.is_ascii_hexdigit())
        .unwrap_or(token.len());
    let digits = &token[..digits_end];

    if digits.is_empty() {
        return None;
    }
    u16::from_str_radix(digits.trim_start_matches('0'), 16)
        .ok()
        .or_else(|| digits.bytes().all(|b| b == b'0').then_some(0))
}

/// First value of the state parameter in a query string like `a=1&state=00ff`.
///
/// A leading `?` is ignored. Only the first occurrence counts when the parameter is repeated.
pub fn query_state(query: &str) -> Option<&str> {
    query
        .strip_prefix('?')
        .unwrap_or(query)
        .split('&')
        .find_map(|pair| match pair.split_once('=') {
            Some((key, value)) if key == STATE_PARAM => Some(value),
            None if pair == STATE_PARAM => Some(""),
            _ => None,
        })
}
