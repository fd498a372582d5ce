//! Title-menu state machine.

use crate::entities::ModeKind;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuOption {
    Survival,
    BossFight,
    Exit,
}

impl MenuOption {
    pub const ALL: [MenuOption; 3] = [MenuOption::Survival, MenuOption::BossFight, MenuOption::Exit];

    pub fn label(self) -> &'static str {
        match self {
            MenuOption::Survival => "Survival",
            MenuOption::BossFight => "Boss Fight",
            MenuOption::Exit => "Exit",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuKey {
    Up,
    Down,
    Confirm,
    /// Direct pick by position, `0`-based.
    Pick(usize),
    Quit,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuChoice {
    Start(ModeKind),
    Quit,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Menu {
    pub selected: usize,
}

impl Menu {
    pub fn selected_option(&self) -> MenuOption {
        MenuOption::ALL[self.selected]
    }

    /// Feed one key.  Navigation wraps around; a confirmed choice is returned.
    pub fn handle(&mut self, key: MenuKey) -> Option<MenuChoice> {
        let n = MenuOption::ALL.len();
        match key {
            MenuKey::Up => {
                self.selected = (self.selected + n - 1) % n;
                None
            }
            MenuKey::Down => {
                self.selected = (self.selected + 1) % n;
                None
            }
            MenuKey::Confirm => Some(choice_for(self.selected_option())),
            MenuKey::Pick(i) if i < n => {
                self.selected = i;
                Some(choice_for(self.selected_option()))
            }
            MenuKey::Pick(_) => None,
            MenuKey::Quit => Some(MenuChoice::Quit),
        }
    }
}

fn choice_for(option: MenuOption) -> MenuChoice {
    match option {
        MenuOption::Survival => MenuChoice::Start(ModeKind::Survival),
        MenuOption::BossFight => MenuChoice::Start(ModeKind::Boss),
        MenuOption::Exit => MenuChoice::Quit,
    }
}
