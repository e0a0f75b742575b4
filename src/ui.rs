//! Menu button layouts and hit testing
//!
//! All rectangles are in UI space: origin at the bottom-left of the window,
//! y growing upwards.

use glam::Vec2;

use crate::consts::SCREEN_WIDTH;

const BUTTON_SIZE: Vec2 = Vec2::new(200.0, 50.0);

/// A clickable labelled rectangle
#[derive(Debug, Clone, PartialEq)]
pub struct Button {
    /// Bottom-left corner
    pub origin: Vec2,
    pub size: Vec2,
    pub label: String,
}

impl Button {
    pub fn new(x: f32, y: f32, label: impl Into<String>) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: BUTTON_SIZE,
            label: label.into(),
        }
    }

    /// Edges count as inside
    pub fn contains(&self, p: Vec2) -> bool {
        let max = self.origin + self.size;
        p.x >= self.origin.x && p.x <= max.x && p.y >= self.origin.y && p.y <= max.y
    }
}

/// Main menu entries, in button order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    StartGame,
    Instructions,
    Settings,
    Exit,
}

const MENU_CHOICES: [(MenuChoice, &str); 4] = [
    (MenuChoice::StartGame, "Start Game"),
    (MenuChoice::Instructions, "Instructions"),
    (MenuChoice::Settings, "Settings"),
    (MenuChoice::Exit, "Exit"),
];

pub fn main_menu_buttons() -> Vec<Button> {
    MENU_CHOICES
        .iter()
        .enumerate()
        .map(|(i, (_, label))| Button::new(100.0, 250.0 - i as f32 * 60.0, *label))
        .collect()
}

/// Which main menu button, if any, is under `p`
pub fn main_menu_hit(p: Vec2) -> Option<MenuChoice> {
    main_menu_buttons()
        .iter()
        .zip(MENU_CHOICES)
        .find(|(button, _)| button.contains(p))
        .map(|(_, (choice, _))| choice)
}

/// Two-column grid of level buttons
pub fn level_buttons(level_count: u32) -> Vec<Button> {
    (0..level_count)
        .map(|i| {
            let x = 350.0 + (i % 2) as f32 * 250.0;
            let y = 350.0 - (i / 2) as f32 * 100.0;
            Button::new(x, y, format!("Level {}", i + 1))
        })
        .collect()
}

/// 1-based level whose button is under `p`
pub fn level_hit(p: Vec2, level_count: u32) -> Option<u32> {
    level_buttons(level_count)
        .iter()
        .position(|b| b.contains(p))
        .map(|i| i as u32 + 1)
}

/// Back button in the corner of the level select screen
pub fn level_select_back() -> Button {
    Button::new(10.0, 10.0, "Back to Menu")
}

/// Back button centred at the bottom of the info screens
pub fn info_back() -> Button {
    Button::new(SCREEN_WIDTH / 2.0 - 100.0, 50.0, "Back to Menu")
}
