/// Visibility of an entry's detail region
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisclosureState {
    #[default]
    Collapsed,
    Expanded,
}

impl DisclosureState {
    pub fn is_expanded(self) -> bool {
        matches!(self, DisclosureState::Expanded)
    }

    pub fn toggled(self) -> Self {
        match self {
            DisclosureState::Collapsed => DisclosureState::Expanded,
            DisclosureState::Expanded => DisclosureState::Collapsed,
        }
    }
}

/// Expand/collapse state owned by a single entry view.
///
/// An inert disclosure (entry without a description) ignores activations and
/// stays collapsed forever. An interactive one flips on every activation.
/// Each view owns its own disclosure, so siblings never affect each other.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Disclosure {
    state: DisclosureState,
    interactive: bool,
}

impl Disclosure {
    pub fn interactive() -> Self {
        Self {
            state: DisclosureState::Collapsed,
            interactive: true,
        }
    }

    pub fn inert() -> Self {
        Self {
            state: DisclosureState::Collapsed,
            interactive: false,
        }
    }

    /// Disclosure matching whether the entry has something to reveal
    pub fn for_description(has_description: bool) -> Self {
        if has_description {
            Self::interactive()
        } else {
            Self::inert()
        }
    }

    pub fn is_interactive(&self) -> bool {
        self.interactive
    }

    pub fn state(&self) -> DisclosureState {
        self.state
    }

    /// Apply one user activation. Returns the new state, or `None` when inert.
    pub fn activate(&mut self) -> Option<DisclosureState> {
        if !self.interactive {
            return None;
        }
        self.state = self.state.toggled();
        Some(self.state)
    }

    /// Activate and push the resulting state through a reveal strategy
    pub fn activate_with<H, R>(&mut self, strategy: &R, handle: &mut H) -> Option<DisclosureState>
    where
        R: RevealStrategy<H> + ?Sized,
    {
        let state = self.activate()?;
        strategy.set_expanded(handle, state.is_expanded());
        Some(state)
    }
}

/// How a view shows or hides its detail region.
///
/// The state machine above does not care whether this animates a max-height,
/// swaps a class, or just flips a flag.
pub trait RevealStrategy<H> {
    fn set_expanded(&self, handle: &mut H, expanded: bool);
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FlagReveal;

    impl RevealStrategy<Vec<bool>> for FlagReveal {
        fn set_expanded(&self, handle: &mut Vec<bool>, expanded: bool) {
            handle.push(expanded);
        }
    }

    #[test]
    fn test_interactive_toggles_back_and_forth() {
        let mut disclosure = Disclosure::interactive();
        assert_eq!(disclosure.state(), DisclosureState::Collapsed);
        assert_eq!(disclosure.activate(), Some(DisclosureState::Expanded));
        assert_eq!(disclosure.activate(), Some(DisclosureState::Collapsed));
        assert_eq!(disclosure.activate(), Some(DisclosureState::Expanded));
    }

    #[test]
    fn test_inert_never_changes() {
        let mut disclosure = Disclosure::for_description(false);
        assert!(!disclosure.is_interactive());
        for _ in 0..3 {
            assert_eq!(disclosure.activate(), None);
        }
        assert_eq!(disclosure.state(), DisclosureState::Collapsed);
    }

    #[test]
    fn test_strategy_receives_each_transition() {
        let mut disclosure = Disclosure::for_description(true);
        let mut seen = Vec::new();
        disclosure.activate_with(&FlagReveal, &mut seen);
        disclosure.activate_with(&FlagReveal, &mut seen);
        assert_eq!(seen, vec![true, false]);

        let mut inert = Disclosure::inert();
        let mut untouched = Vec::new();
        assert_eq!(inert.activate_with(&FlagReveal, &mut untouched), None);
        assert!(untouched.is_empty());
    }
}
