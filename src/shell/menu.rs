//! Main menu of the interactive shell

/// A selection from the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddHome,
    RemoveHome,
    UpdateStatus,
    DisplayInventory,
    Exit,
}

impl MenuChoice {
    /// Parse the number typed at the menu prompt
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::AddHome),
            "2" => Some(Self::RemoveHome),
            "3" => Some(Self::UpdateStatus),
            "4" => Some(Self::DisplayInventory),
            "5" => Some(Self::Exit),
            _ => None,
        }
    }
}

/// Lines printed before every menu prompt
pub const MENU_LINES: [&str; 7] = [
    "",
    "Home Inventory Menu:",
    "1. Add a home",
    "2. Remove a home",
    "3. Update home status",
    "4. Display home inventory",
    "5. Exit",
];
