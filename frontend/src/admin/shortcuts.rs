/// Keyboard shortcuts that open the hidden admin surfaces.
///
/// Knowing the keys is the only requirement. None of this authenticates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AdminShortcut {
    TogglePanel,
    OpenViewer,
    OpenGuide,
    OwnerSetup,
}

pub const ALL_SHORTCUTS: [AdminShortcut; 4] = [
    AdminShortcut::OpenViewer,
    AdminShortcut::TogglePanel,
    AdminShortcut::OpenGuide,
    AdminShortcut::OwnerSetup,
];

impl AdminShortcut {
    /// Matches Ctrl+Shift+letter. The letter is case-insensitive since Shift
    /// usually uppercases `key`.
    pub fn from_keys(ctrl: bool, shift: bool, key: &str) -> Option<Self> {
        if !(ctrl && shift) {
            return None;
        }
        match key.to_ascii_uppercase().as_str() {
            "A" => Some(Self::TogglePanel),
            "L" => Some(Self::OpenViewer),
            "H" => Some(Self::OpenGuide),
            "O" => Some(Self::OwnerSetup),
            _ => None,
        }
    }

    pub fn letter(self) -> char {
        match self {
            Self::TogglePanel => 'A',
            Self::OpenViewer => 'L',
            Self::OpenGuide => 'H',
            Self::OwnerSetup => 'O',
        }
    }

    pub fn combo(self) -> String {
        format!("Ctrl + Shift + {}", self.letter())
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::OpenViewer => "View Leads (Most Important)",
            Self::TogglePanel => "Show Admin Panel",
            Self::OpenGuide => "Help Guide",
            Self::OwnerSetup => "Owner Setup",
        }
    }
}

/// Plain-text cheat sheet the guide copies to the clipboard.
pub fn shortcut_summary(page_url: &str) -> String {
    let mut text = String::from("EasyDecor Admin Shortcuts:\n");
    for shortcut in ALL_SHORTCUTS {
        text.push_str(&format!("• {} = {}\n", shortcut.combo(), shortcut.description()));
    }
    text.push_str(&format!("\nWebsite: {}", page_url));
    text
}
