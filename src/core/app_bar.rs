//! Primary app bar state.
//!
//! The bar owns one piece of state, whether the side drawer is open, and
//! observes one derived input, the [`ViewportClass`]. The drawer can only be
//! opened from the menu button, which exists on small viewports alone, so
//! an open drawer on a wide viewport is never a resting state:
//! [`AppBarState::reclassify`] closes it as part of the same update.

/// Number of placeholder entries listed in the drawer.
pub const DRAWER_PLACEHOLDER_LEN: u32 = 100;

/// Viewport width relative to the `sm` breakpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewportClass {
    /// Below `sm`: menu button shown, drawer available.
    Small,
    /// At or above `sm`.
    Wide,
}

impl ViewportClass {
    /// Classifies from the result of the `up(sm)` media query.
    pub fn from_media_match(at_least_small: bool) -> Self {
        if at_least_small { Self::Wide } else { Self::Small }
    }

    pub fn is_small(self) -> bool {
        self == Self::Small
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DrawerState {
    #[default]
    Closed,
    Open,
}

impl DrawerState {
    pub fn is_open(self) -> bool {
        self == Self::Open
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Closed => Self::Open,
            Self::Open => Self::Closed,
        }
    }
}

/// Outcome of an app bar update.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    /// The user toggled the drawer into this state.
    Toggled(DrawerState),
    /// The viewport widened while the drawer was open.
    AutoClosed,
    Unchanged,
}

/// What the bar renders for one frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AppBarView {
    pub show_toggle: bool,
    pub drawer_open: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AppBarState {
    drawer: DrawerState,
    viewport: ViewportClass,
}

impl AppBarState {
    /// Closed drawer on the given viewport.
    pub fn new(viewport: ViewportClass) -> Self {
        Self {
            drawer: DrawerState::Closed,
            viewport,
        }
    }

    pub fn drawer(&self) -> DrawerState {
        self.drawer
    }

    pub fn viewport(&self) -> ViewportClass {
        self.viewport
    }

    /// Flips the drawer. Ignored on wide viewports, where no menu button exists.
    pub fn toggle(&mut self) -> Transition {
        if !self.viewport.is_small() {
            return Transition::Unchanged;
        }
        self.drawer = self.drawer.toggled();
        Transition::Toggled(self.drawer)
    }

    /// Records a new viewport class, closing the drawer when it widens.
    pub fn reclassify(&mut self, viewport: ViewportClass) -> Transition {
        let widened = self.viewport.is_small() && !viewport.is_small();
        self.viewport = viewport;
        if widened && self.drawer.is_open() {
            self.drawer = DrawerState::Closed;
            Transition::AutoClosed
        } else {
            Transition::Unchanged
        }
    }

    /// Render projection for `viewport`, which may be newer than the stored class.
    pub fn view_for(&self, viewport: ViewportClass) -> AppBarView {
        AppBarView {
            show_toggle: viewport.is_small(),
            drawer_open: self.drawer.is_open() && viewport.is_small(),
        }
    }
}

/// Labels of the drawer placeholder list, `1..=DRAWER_PLACEHOLDER_LEN`.
pub fn placeholder_entries() -> impl Iterator<Item = u32> {
    1..=DRAWER_PLACEHOLDER_LEN
}
