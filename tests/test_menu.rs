use boss_shooter::entities::ModeKind;
use boss_shooter::menu::*;

#[test]
fn starts_on_survival() {
    let menu = Menu::default();
    assert_eq!(menu.selected_option(), MenuOption::Survival);
}

#[test]
fn navigation_wraps_both_ways() {
    let mut menu = Menu::default();
    assert_eq!(menu.handle(MenuKey::Up), None);
    assert_eq!(menu.selected_option(), MenuOption::Exit);
    assert_eq!(menu.handle(MenuKey::Down), None);
    assert_eq!(menu.selected_option(), MenuOption::Survival);
    menu.handle(MenuKey::Down);
    assert_eq!(menu.selected_option(), MenuOption::BossFight);
}

#[test]
fn confirm_starts_selected_mode() {
    let mut menu = Menu::default();
    assert_eq!(
        menu.handle(MenuKey::Confirm),
        Some(MenuChoice::Start(ModeKind::Survival))
    );
    menu.handle(MenuKey::Down);
    assert_eq!(
        menu.handle(MenuKey::Confirm),
        Some(MenuChoice::Start(ModeKind::Boss))
    );
    menu.handle(MenuKey::Down);
    assert_eq!(menu.handle(MenuKey::Confirm), Some(MenuChoice::Quit));
}

#[test]
fn direct_pick() {
    let mut menu = Menu::default();
    assert_eq!(menu.handle(MenuKey::Pick(1)), Some(MenuChoice::Start(ModeKind::Boss)));
    assert_eq!(menu.selected, 1);
    assert_eq!(menu.handle(MenuKey::Pick(2)), Some(MenuChoice::Quit));
    // Out of range: ignored, selection unchanged.
    assert_eq!(menu.handle(MenuKey::Pick(7)), None);
    assert_eq!(menu.selected, 2);
}

#[test]
fn quit_key_always_quits() {
    let mut menu = Menu::default();
    assert_eq!(menu.handle(MenuKey::Quit), Some(MenuChoice::Quit));
}

#[test]
fn labels() {
    let labels: Vec<&str> = MenuOption::ALL.iter().map(|o| o.label()).collect();
    assert_eq!(labels, vec!["Survival", "Boss Fight", "Exit"]);
}
