//! Keyboard navigation between toolbar buttons

mod common;

use common::*;
use markbar::keymap::{KeyCode, Keystroke, Modifiers};
use markbar::toolbar::{update, Focus, Toolbar, ToolbarEvent, ToolbarMsg};

/// Put input focus on the first button
fn focus_first_button() -> Toolbar {
    let mut toolbar = sample_toolbar();
    assert_eq!(
        update(&mut toolbar, ToolbarMsg::FocusButton(0)),
        Some(ToolbarEvent::FocusMoved(0))
    );
    toolbar
}

/// The focused button, which must also be the only tab stop
fn focused_label(toolbar: &Toolbar) -> String {
    let Focus::Button(index) = toolbar.focus() else {
        panic!("focus is not on a button: {:?}", toolbar.focus());
    };
    assert_eq!(toolbar.tab_stops(), vec![index]);
    toolbar.buttons()[index].label.clone()
}

#[test]
fn test_arrow_right_moves_to_next_button() {
    let mut toolbar = focus_first_button();
    assert_eq!(focused_label(&toolbar), "bold");

    press_key(&mut toolbar, KeyCode::Right);
    assert_eq!(focused_label(&toolbar), "header");

    press_key(&mut toolbar, KeyCode::Right);
    assert_eq!(focused_label(&toolbar), "h1");

    // Hidden h5 is skipped
    press_key(&mut toolbar, KeyCode::Right);
    assert_eq!(focused_label(&toolbar), "h10");
}

#[test]
fn test_arrow_left_wraps_to_last_button() {
    let mut toolbar = focus_first_button();

    press_key(&mut toolbar, KeyCode::Left);
    assert_eq!(focused_label(&toolbar), "ref");

    press_key(&mut toolbar, KeyCode::Left);
    assert_eq!(focused_label(&toolbar), "mention");
}

#[test]
fn test_home_and_end() {
    let mut toolbar = focus_first_button();

    press_key(&mut toolbar, KeyCode::End);
    assert_eq!(focused_label(&toolbar), "ref");
    press_key(&mut toolbar, KeyCode::End);
    assert_eq!(focused_label(&toolbar), "ref");

    press_key(&mut toolbar, KeyCode::Home);
    assert_eq!(focused_label(&toolbar), "bold");
    press_key(&mut toolbar, KeyCode::Home);
    assert_eq!(focused_label(&toolbar), "bold");
}

#[test]
fn test_custom_buttons_take_part_in_navigation() {
    let mut toolbar = focus_first_button();
    for _ in 0..4 {
        press_key(&mut toolbar, KeyCode::Right);
    }
    assert_eq!(focused_label(&toolbar), "Other button");
}

#[test]
fn test_vertical_arrows_navigate_too() {
    let mut toolbar = focus_first_button();
    press_key(&mut toolbar, KeyCode::Down);
    assert_eq!(focused_label(&toolbar), "header");
    press_key(&mut toolbar, KeyCode::Up);
    assert_eq!(focused_label(&toolbar), "bold");
}

#[test]
fn test_full_cycle_returns_to_start() {
    let mut toolbar = focus_first_button();
    let focusable = toolbar.buttons().iter().filter(|b| !b.hidden).count();
    assert_eq!(focusable, 15);

    let mut seen = Vec::new();
    for _ in 0..focusable {
        press_key(&mut toolbar, KeyCode::Right);
        seen.push(focused_label(&toolbar));
    }

    assert_eq!(seen.last().map(String::as_str), Some("bold"));
    assert!(!seen.contains(&"h5".to_string()));
    seen.sort();
    seen.dedup();
    assert_eq!(seen.len(), focusable);
}

#[test]
fn test_exactly_one_tab_stop_at_all_times() {
    let mut toolbar = sample_toolbar();
    assert_eq!(toolbar.tab_stops(), vec![0]);

    let keys = [
        KeyCode::Right,
        KeyCode::Right,
        KeyCode::Left,
        KeyCode::End,
        KeyCode::Up,
        KeyCode::Home,
    ];
    update(&mut toolbar, ToolbarMsg::FocusButton(0));
    for key in keys {
        press_key(&mut toolbar, key);
        assert_eq!(toolbar.tab_stops().len(), 1, "after {key}");
    }

    click(&mut toolbar, "quote");
    assert_eq!(toolbar.tab_stops(), vec![button(&toolbar, "quote")]);
}

#[test]
fn test_clicked_button_becomes_tab_stop() {
    let mut toolbar = sample_toolbar();
    set_visual(&mut toolbar, "|text|");
    click(&mut toolbar, "italic");

    assert_eq!(toolbar.focus(), Focus::Field);
    assert_eq!(toolbar.active_button(), Some(button(&toolbar, "italic")));

    // Tabbing back into the toolbar lands on the clicked button
    let active = toolbar.active_button().unwrap();
    update(&mut toolbar, ToolbarMsg::FocusButton(active));
    press_key(&mut toolbar, KeyCode::Right);
    assert_eq!(focused_label(&toolbar), "quote");
}

#[test]
fn test_arrows_in_field_do_not_move_toolbar_focus() {
    let mut toolbar = sample_toolbar();
    set_visual(&mut toolbar, "te|xt");
    update(&mut toolbar, ToolbarMsg::FocusField);

    assert_eq!(press_key(&mut toolbar, KeyCode::Right), None);
    assert_eq!(toolbar.focus(), Focus::Field);
    assert_eq!(toolbar.active_button(), Some(0));
}

#[test]
fn test_modified_arrow_is_not_navigation() {
    let mut toolbar = focus_first_button();
    let shifted = Keystroke::new(KeyCode::Right, Modifiers::SHIFT);
    assert_eq!(update(&mut toolbar, ToolbarMsg::KeyDown(shifted)), None);
    assert_eq!(focused_label(&toolbar), "bold");
}

#[test]
fn test_hidden_button_cannot_take_focus() {
    let mut toolbar = sample_toolbar();
    let h5 = button(&toolbar, "h5");
    assert_eq!(update(&mut toolbar, ToolbarMsg::FocusButton(h5)), None);
    assert_eq!(toolbar.tab_stops(), vec![0]);
}

#[test]
fn test_hiding_focused_button_moves_focus() {
    let mut toolbar = focus_first_button();
    assert_eq!(
        update(
            &mut toolbar,
            ToolbarMsg::SetHidden {
                index: 0,
                hidden: true
            }
        ),
        Some(ToolbarEvent::FocusMoved(1))
    );
    assert_eq!(focused_label(&toolbar), "header");

    // Showing h5 again puts it back into the cycle
    let h5 = button(&toolbar, "h5");
    update(
        &mut toolbar,
        ToolbarMsg::SetHidden {
            index: h5,
            hidden: false,
        },
    );
    press_key(&mut toolbar, KeyCode::Right);
    press_key(&mut toolbar, KeyCode::Right);
    assert_eq!(focused_label(&toolbar), "h5");
}
