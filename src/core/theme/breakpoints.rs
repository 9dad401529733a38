//! Viewport width breakpoints.

/// Named breakpoint tiers, narrowest first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Breakpoint {
    Xs,
    Sm,
    Md,
    Lg,
    Xl,
}

/// Minimum viewport width (px) of each tier.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Breakpoints {
    pub xs: u32,
    pub sm: u32,
    pub md: u32,
    pub lg: u32,
    pub xl: u32,
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self {
            xs: 0,
            sm: 600,
            md: 900,
            lg: 1200,
            xl: 1536,
        }
    }
}

impl Breakpoints {
    /// Minimum width of the given tier in pixels.
    pub fn value(&self, breakpoint: Breakpoint) -> u32 {
        match breakpoint {
            Breakpoint::Xs => self.xs,
            Breakpoint::Sm => self.sm,
            Breakpoint::Md => self.md,
            Breakpoint::Lg => self.lg,
            Breakpoint::Xl => self.xl,
        }
    }

    /// Media query matching viewports at or above `breakpoint`.
    ///
    /// Returned without the `@media` prefix, ready for `matchMedia`.
    pub fn up(&self, breakpoint: Breakpoint) -> String {
        format!("(min-width:{}px)", self.value(breakpoint))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_up_query() {
        let bps = Breakpoints::default();
        assert_eq!(bps.up(Breakpoint::Sm), "(min-width:600px)");
        assert_eq!(bps.up(Breakpoint::Lg), "(min-width:1200px)");
    }

    #[test]
    fn test_values() {
        let bps = Breakpoints::default();
        assert_eq!(bps.value(Breakpoint::Xs), 0);
        assert_eq!(bps.value(Breakpoint::Md), 900);
        assert_eq!(bps.value(Breakpoint::Xl), 1536);
    }
}
