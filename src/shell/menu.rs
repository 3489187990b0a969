/// Menu commands and the text shown for them

use crate::domain::AnimalKind;

/// A top-level menu selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    Add,
    List,
    Find,
    Exit,
}

impl MenuCommand {
    pub const ALL: [MenuCommand; 4] = [
        MenuCommand::Add,
        MenuCommand::List,
        MenuCommand::Find,
        MenuCommand::Exit,
    ];

    /// Parse a menu selection, ignoring surrounding whitespace
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(MenuCommand::Add),
            "2" => Some(MenuCommand::List),
            "3" => Some(MenuCommand::Find),
            "0" => Some(MenuCommand::Exit),
            _ => None,
        }
    }

    pub fn key(&self) -> char {
        match self {
            MenuCommand::Add => '1',
            MenuCommand::List => '2',
            MenuCommand::Find => '3',
            MenuCommand::Exit => '0',
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MenuCommand::Add => "Add animal",
            MenuCommand::List => "Show all animals",
            MenuCommand::Find => "Show animal by name",
            MenuCommand::Exit => "Exit",
        }
    }
}

/// Lines of the main menu
pub fn main_menu() -> Vec<String> {
    let mut lines = vec![String::new(), "Menu:".to_string()];
    lines.extend(
        MenuCommand::ALL
            .iter()
            .map(|command| format!("{} - {}", command.key(), command.label())),
    );
    lines
}

/// Lines of the animal type menu
pub fn kind_menu() -> Vec<String> {
    let mut lines = vec!["Select animal type:".to_string()];
    lines.extend(
        AnimalKind::ALL
            .iter()
            .map(|kind| format!("{} - {}", kind.selector(), kind.type_name())),
    );
    lines
}
