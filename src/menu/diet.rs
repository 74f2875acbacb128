use bitflags::bitflags;

bitflags! {
    /// Which list(s) of a [`DayMenu`](super::DayMenu) an entry belongs to.
    /// Also used as the display filter.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Diet: u8 {
        const Vegetarian = 0b01;
        const Meat = 0b10;
    }
}

impl Diet {
    /// Filter mask for the `--vegetarian-only` / `--meat-only` flags.
    #[must_use]
    pub fn from_flags(vegetarian_only: bool, meat_only: bool) -> Self {
        let mut out = Self::empty();
        if !meat_only {
            out |= Self::Vegetarian;
        }
        if !vegetarian_only {
            out |= Self::Meat;
        }
        out
    }
}
