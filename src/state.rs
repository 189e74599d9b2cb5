#[derive(Debug, PartialEq, Clone, Copy)]
pub enum CarouselState {
    Idle,                                          // No swap in flight
    Transitioning { from: usize, revealed: bool }, // `revealed` once the new slide faded in
}

impl CarouselState {
    pub fn is_transitioning(&self) -> bool {
        matches!(self, CarouselState::Transitioning { .. })
    }
}

/// Reasons the autoplay timer may be held back while autoplay stays enabled.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Suppression {
    Hover,
    Focus,
    Hidden,
    OutOfView,
    Touch,
}

impl Suppression {
    fn bit(self) -> u8 {
        match self {
            Suppression::Hover => 1 << 0,
            Suppression::Focus => 1 << 1,
            Suppression::Hidden => 1 << 2,
            Suppression::OutOfView => 1 << 3,
            Suppression::Touch => 1 << 4,
        }
    }
}

#[derive(Debug, Default, PartialEq, Eq, Clone, Copy)]
pub struct Suppressions(u8);

impl Suppressions {
    pub fn insert(&mut self, source: Suppression) {
        self.0 |= source.bit();
    }

    pub fn remove(&mut self, source: Suppression) {
        self.0 &= !source.bit();
    }

    pub fn contains(&self, source: Suppression) -> bool {
        self.0 & source.bit() != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }
}
