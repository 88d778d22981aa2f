use strum::{AsRefStr, Display, EnumCount, EnumIter, EnumString, IntoEnumIterator};

/// The fixed palette of group colors.
///
/// The n-th group (1-based) is always drawn with the n-th color,
/// so the number of colors limits the number of groups.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, AsRefStr, EnumIter, EnumCount,
)]
#[strum(serialize_all = "lowercase")]
pub enum Color {
    Red,
    Blue,
    Green,
    Yellow,
}

impl Color {
    pub const PALETTE_SIZE: usize = Self::COUNT;

    /// Color of the group with the given 1-based number.
    pub fn of_group_number(number: usize) -> Option<Self> {
        number.checked_sub(1).and_then(|idx| Self::iter().nth(idx))
    }
}
