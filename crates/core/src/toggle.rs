//! Reveal toggle for the collapsed search input.

/// Two-state machine behind the search button. The first press reveals the
/// input; every press after that submits the form. There is no way back to
/// `Collapsed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealToggle {
    #[default]
    Collapsed,
    Active,
}

/// Side effect the view must carry out after a press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleEffect {
    /// Input revealed: focus the query field and hide the button.
    Reveal,
    /// Already revealed: submit the search form.
    Submit,
}

impl RevealToggle {
    pub fn press(&mut self) -> ToggleEffect {
        match self {
            RevealToggle::Active => ToggleEffect::Submit,
            RevealToggle::Collapsed => {
                *self = RevealToggle::Active;
                ToggleEffect::Reveal
            }
        }
    }

    pub fn is_active(self) -> bool {
        self == RevealToggle::Active
    }

    /// Class list for the search form; `active` marks the revealed state.
    pub fn form_class(self) -> &'static str {
        match self {
            RevealToggle::Collapsed => "search-form",
            RevealToggle::Active => "search-form active",
        }
    }

    pub fn button_visible(self) -> bool {
        !self.is_active()
    }
}
