//! Page context resolution.
//!
//! The legacy implementation re-queried the document ("is there a
//! `.preparation-options` element?") inside every component. Here the page is
//! probed exactly once at boot, the probes are folded into a [`PageContext`],
//! and that value is passed to the counter, the card selector, and the
//! validator.

/// Which kind of item the customization page is editing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageContext {
    /// Sushi page: preparation options present, ingredient cap of 3.
    Sushi,
    /// Rice-ball page: a cold style option ("Fría") exists, cap of 6.
    RiceBall,
    /// Neither marker present, cap of 6, style/sauce rules relax.
    Boneless,
}

/// Raw markers collected from the rendered page, once, at boot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageProbes {
    /// A `.preparation-options` block is present.
    pub has_preparation_options: bool,
    /// Some option input carries the value `"Fría"`.
    pub has_cold_style_option: bool,
}

impl PageContext {
    /// Fold page probes into a context. Sushi wins over rice ball.
    #[must_use]
    pub const fn resolve(probes: PageProbes) -> Self {
        if probes.has_preparation_options {
            Self::Sushi
        } else if probes.has_cold_style_option {
            Self::RiceBall
        } else {
            Self::Boneless
        }
    }

    /// Maximum number of ingredients that may be checked in this context.
    #[must_use]
    pub const fn ingredient_limit(self) -> usize {
        match self {
            Self::Sushi => 3,
            Self::RiceBall | Self::Boneless => 6,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn preparation_marker_means_sushi() {
        let probes = PageProbes {
            has_preparation_options: true,
            has_cold_style_option: false,
        };
        assert_eq!(PageContext::resolve(probes), PageContext::Sushi);
    }

    #[test]
    fn sushi_wins_over_cold_style_marker() {
        let probes = PageProbes {
            has_preparation_options: true,
            has_cold_style_option: true,
        };
        assert_eq!(PageContext::resolve(probes), PageContext::Sushi);
    }

    #[test]
    fn cold_style_alone_means_rice_ball() {
        let probes = PageProbes {
            has_preparation_options: false,
            has_cold_style_option: true,
        };
        assert_eq!(PageContext::resolve(probes), PageContext::RiceBall);
    }

    #[test]
    fn no_markers_means_boneless() {
        assert_eq!(
            PageContext::resolve(PageProbes::default()),
            PageContext::Boneless
        );
    }

    #[test]
    fn ingredient_limit_is_three_only_for_sushi() {
        assert_eq!(PageContext::Sushi.ingredient_limit(), 3);
        assert_eq!(PageContext::RiceBall.ingredient_limit(), 6);
        assert_eq!(PageContext::Boneless.ingredient_limit(), 6);
    }
}
