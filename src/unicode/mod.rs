//! Unicode utilities for UTF-16 codepoint segmentation.

mod utf16;

pub use utf16::{
    CodepointGroup, Codepoints, align_to_codepoint, codepoint_boundaries, codepoints,
    is_leading_surrogate, is_trailing_surrogate, segment,
};
