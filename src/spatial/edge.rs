//! Orientation-invariant fingerprints of tile border lines
//!
//! A border line of `#`/`.` pixels is packed into two integers: the bit
//! pattern in reading direction and the same pattern read backwards. The
//! smaller of the two identifies the border no matter which of the two
//! touching tiles it was read from.

use std::fmt;

use crate::io::configuration::{EMPTY_PIXEL, FILLED_PIXEL, MAX_EDGE_LENGTH};
use crate::io::error::{Result, malformed_tile};

/// Fingerprint of one border line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge {
    forward: u32,
    reversed: u32,
    len: usize,
}

impl Edge {
    /// Encode a line of pixel markers
    ///
    /// The first pixel is the most significant bit of `forward` and the least
    /// significant bit of `reversed`.
    ///
    /// # Errors
    ///
    /// Returns `MalformedTile` if the line is empty, longer than
    /// `MAX_EDGE_LENGTH`, or contains anything other than the two pixel markers
    pub fn encode(line: &str) -> Result<Self> {
        let pixels: Vec<bool> = line
            .chars()
            .map(|c| match c {
                FILLED_PIXEL => Ok(true),
                EMPTY_PIXEL => Ok(false),
                other => Err(malformed_tile(
                    None,
                    &format!("invalid pixel marker {other:?} in border {line:?}"),
                )),
            })
            .collect::<Result<_>>()?;
        Self::from_pixels(&pixels)
    }

    /// Encode a line of pixels given as booleans (`true` = filled)
    ///
    /// # Errors
    ///
    /// Returns `MalformedTile` if the line is empty or longer than `MAX_EDGE_LENGTH`
    pub fn from_pixels(pixels: &[bool]) -> Result<Self> {
        let len = pixels.len();
        if len == 0 || len > MAX_EDGE_LENGTH {
            return Err(malformed_tile(
                None,
                &format!("border length {len} outside 1..={MAX_EDGE_LENGTH}"),
            ));
        }

        let mut forward = 0;
        let mut reversed = 0;
        for (i, &filled) in pixels.iter().enumerate() {
            if filled {
                forward |= 1 << (len - 1 - i);
                reversed |= 1 << i;
            }
        }

        Ok(Self {
            forward,
            reversed,
            len,
        })
    }

    /// Bit pattern in reading direction
    pub const fn forward(&self) -> u32 {
        self.forward
    }

    /// Bit pattern read backwards
    pub const fn reversed(&self) -> u32 {
        self.reversed
    }

    /// Number of pixels on the line
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Always false: an edge holds at least one pixel
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Orientation-invariant identity used to discover neighbours
    pub fn canonical(&self) -> u32 {
        self.forward.min(self.reversed)
    }

    /// The same line read in the opposite direction
    #[must_use]
    pub const fn flip(self) -> Self {
        Self {
            forward: self.reversed,
            reversed: self.forward,
            len: self.len,
        }
    }

    /// Exact orientation match, valid once both tiles are physically aligned
    pub const fn matches(&self, other: &Self) -> bool {
        self.forward == other.forward
    }

    /// Whether the two edges are the same border in some reading direction
    pub fn same_border(&self, other: &Self) -> bool {
        self.canonical() == other.canonical()
    }

    /// Reads the same in both directions
    pub const fn is_palindrome(&self) -> bool {
        self.forward == self.reversed
    }

    /// Pixels in reading direction (`true` = filled)
    pub fn pixels(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.len).rev().map(|bit| self.forward & (1 << bit) != 0)
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for filled in self.pixels() {
            let marker = if filled { FILLED_PIXEL } else { EMPTY_PIXEL };
            write!(f, "{marker}")?;
        }
        Ok(())
    }
}
