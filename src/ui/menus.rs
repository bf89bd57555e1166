//=========================================================================
// Menus
//=========================================================================
//
// The game's menu screens, each a centered column of styled buttons.
//
//=========================================================================

use super::{Button, ButtonStyle, UiContainer};
use crate::core::events::AppEvent;

//--- Internal Helpers ----------------------------------------------------

fn menu(entries: &[(&str, AppEvent)], screen_size: (u32, u32)) -> UiContainer {
    let style = ButtonStyle::default();
    let buttons = entries
        .iter()
        .map(|&(label, event)| Button::new(label, style, Some(event)))
        .collect();
    UiContainer::new(buttons, screen_size)
}

//=== Menu Builders =======================================================

/// Play / Options / Quit.
pub fn main_menu(screen_size: (u32, u32)) -> UiContainer {
    menu(
        &[
            ("Play", AppEvent::MainMenuPlay),
            ("Options", AppEvent::MainMenuOptions),
            ("Quit", AppEvent::Quit),
        ],
        screen_size,
    )
}

/// Toggle Fullscreen / Go Back.
pub fn options_menu(screen_size: (u32, u32)) -> UiContainer {
    menu(
        &[
            ("Toggle Fullscreen", AppEvent::OptionsMenuToggleFullscreen),
            ("Go Back", AppEvent::OptionsMenuGoBack),
        ],
        screen_size,
    )
}

/// Resume / Quit. Quitting from the pause menu returns to the main menu.
pub fn pause_menu(screen_size: (u32, u32)) -> UiContainer {
    menu(
        &[
            ("Resume", AppEvent::PauseMenuResume),
            ("Quit", AppEvent::PauseMenuGotoMainMenu),
        ],
        screen_size,
    )
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(container: &UiContainer) -> Vec<&str> {
        container.buttons().iter().map(Button::label).collect()
    }

    #[test]
    fn menus_have_expected_entries() {
        assert_eq!(labels(&main_menu((800, 600))), vec!["Play", "Options", "Quit"]);
        assert_eq!(labels(&options_menu((800, 600))), vec!["Toggle Fullscreen", "Go Back"]);
        assert_eq!(labels(&pause_menu((800, 600))), vec!["Resume", "Quit"]);
    }

    #[test]
    fn menu_buttons_fit_on_screen() {
        for container in [main_menu((800, 600)), options_menu((800, 600)), pause_menu((800, 600))] {
            for button in container.buttons() {
                let rect = button.rect();
                assert!(rect.x >= 0 && rect.right() <= 800, "{} overflows horizontally", button.label());
                assert!(rect.y >= 0 && rect.bottom() <= 600, "{} overflows vertically", button.label());
            }
        }
    }
}
