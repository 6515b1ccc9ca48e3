/// Composite address of an option within an
/// [`OptionCollection`](super::OptionCollection).
///
/// A flat address locates an option directly in the top-level sequence; a
/// grouped address is a (group position, option position within group) pair.
/// Navigation treats the two uniformly by matching on the variant, which
/// keeps group boundaries intact without flattening the sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OptionIndex {
    Flat(usize),
    Grouped(usize, usize),
}

impl OptionIndex {
    pub fn is_grouped(&self) -> bool {
        matches!(self, Self::Grouped(_, _))
    }

    /// Top-level position this address lives at, whichever the variant.
    pub fn position(&self) -> usize {
        match *self {
            Self::Flat(position) => position,
            Self::Grouped(position, _) => position,
        }
    }
}
