//! Mode-switching chooser over the field kind catalog
//!
//! Showing all 29 kinds at once is a wall of options, so the chooser starts
//! on the basic kinds and offers switch entries to move between groups.
//! Picking a switch entry changes the mode; picking a kind ends navigation.

use crate::catalog::{FieldGroup, FieldKind};
use std::fmt;

/// Which slice of the catalog is on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavigationMode {
    Group(FieldGroup),
    All,
}

impl NavigationMode {
    /// Switch targets, in the order they are offered
    pub const SWITCHES: [NavigationMode; 5] = [
        NavigationMode::Group(FieldGroup::Basic),
        NavigationMode::Group(FieldGroup::Relational),
        NavigationMode::Group(FieldGroup::Additional),
        NavigationMode::Group(FieldGroup::System),
        NavigationMode::All,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            NavigationMode::Group(group) => group.as_str(),
            NavigationMode::All => "all",
        }
    }

    fn kinds(&self) -> Vec<FieldKind> {
        match self {
            NavigationMode::Group(group) => group.kinds(),
            NavigationMode::All => FieldKind::ALL.to_vec(),
        }
    }
}

impl Default for NavigationMode {
    fn default() -> Self {
        NavigationMode::Group(FieldGroup::Basic)
    }
}

impl fmt::Display for NavigationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One selectable entry in the type list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    Kind(FieldKind),
    Switch(NavigationMode),
}

impl Choice {
    /// Text shown for this entry
    pub fn label(&self) -> String {
        match self {
            Choice::Kind(kind) => kind.as_str().to_string(),
            Choice::Switch(mode) => format!("⇢ Switch to: {} types", mode),
        }
    }
}

/// Outcome of picking an entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// Mode changed, present the choices again
    Transition(NavigationMode),
    /// A kind was picked, navigation is over
    Selected(FieldKind),
}

/// Entries for one mode plus the preselected kind, if any
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choices {
    pub entries: Vec<Choice>,
    pub default: Option<FieldKind>,
}

impl Choices {
    pub fn labels(&self) -> Vec<String> {
        self.entries.iter().map(Choice::label).collect()
    }

    pub fn default_index(&self) -> Option<usize> {
        let default = self.default?;
        self.entries
            .iter()
            .position(|entry| *entry == Choice::Kind(default))
    }
}

/// Stateful chooser; the only state is the current mode
#[derive(Debug, Clone, Default)]
pub struct FieldTypeNavigator {
    mode: NavigationMode,
}

impl FieldTypeNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> NavigationMode {
        self.mode
    }

    /// Entries for the current mode
    pub fn choices(&self) -> Choices {
        Self::choices_for(self.mode)
    }

    /// Kinds of the mode followed by the five switch entries.
    /// Only basic mode preselects a kind (`input`).
    pub fn choices_for(mode: NavigationMode) -> Choices {
        let mut entries: Vec<Choice> = mode.kinds().into_iter().map(Choice::Kind).collect();
        entries.extend(NavigationMode::SWITCHES.iter().copied().map(Choice::Switch));

        let default = match mode {
            NavigationMode::Group(FieldGroup::Basic) => Some(FieldKind::Input),
            _ => None,
        };

        Choices { entries, default }
    }

    /// Apply a picked entry
    pub fn resolve(&mut self, choice: Choice) -> Resolution {
        match choice {
            Choice::Switch(mode) => {
                self.mode = mode;
                Resolution::Transition(mode)
            }
            Choice::Kind(kind) => Resolution::Selected(kind),
        }
    }

    /// Prompt text for the current mode
    pub fn prompt(&self) -> String {
        format!("Choose TCA column type ({})", self.mode)
    }
}
