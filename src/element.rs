/// Anything the slider can mark as the active one.
///
/// The slider never looks at what an element displays; the active flag is
/// its only output and whoever draws the element decides what it means.
pub trait Element {
    fn set_active(&mut self, active: bool);
    fn is_active(&self) -> bool;
}

/// Bare active flag, embedded by the drawable slide and dot types.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ActiveFlag(bool);

impl ActiveFlag {
    pub fn new(active: bool) -> Self {
        Self(active)
    }
}

impl Element for ActiveFlag {
    fn set_active(&mut self, active: bool) {
        self.0 = active;
    }

    fn is_active(&self) -> bool {
        self.0
    }
}
