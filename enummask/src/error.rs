use core::{error, fmt};

/// An error in setting an element's bit.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum MaskError {
    /// The element's underlying value is below the base's.
    BelowBase,
    /// The element's offset from the base is at or beyond the mask's width.
    BeyondWidth,
}

impl fmt::Display for MaskError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::BelowBase => "element is below the mask's base",
            Self::BeyondWidth => "element's offset is beyond the mask's width",
        })
    }
}

impl error::Error for MaskError {}
