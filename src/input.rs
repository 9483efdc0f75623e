use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::effects::EffectRunner;
use crate::models::FocusArea;
use crate::page::SectionId;
use crate::state::{Edit, Event, Portfolio};

/// What a key press amounts to in the current state.
#[derive(Debug, PartialEq)]
pub enum Action {
    Quit,
    Dispatch(Event),
    Ignore,
}

/// Applies a key press. Returns `false` once the user asked to quit.
pub fn handle_key(key: KeyEvent, app: &mut Portfolio, runner: &EffectRunner) -> Result<bool> {
    match map_key(key, app) {
        Action::Quit => Ok(false),
        Action::Dispatch(event) => {
            let effects = app.update(event);
            runner.run(effects);
            Ok(true)
        }
        Action::Ignore => Ok(true),
    }
}

pub fn map_key(key: KeyEvent, app: &Portfolio) -> Action {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Action::Quit;
    }

    // The failure notice is modal.
    if app.contact.notice().is_some() {
        return match key.code {
            KeyCode::Enter | KeyCode::Esc => Action::Dispatch(Event::DismissNotice),
            _ => Action::Ignore,
        };
    }

    if app.show_help {
        return match key.code {
            KeyCode::Char('?') | KeyCode::Char('q') | KeyCode::Esc => Action::Dispatch(Event::ToggleHelp),
            _ => Action::Ignore,
        };
    }

    match app.focus {
        FocusArea::Chat => map_chat_key(key),
        FocusArea::Form => map_form_key(key),
        FocusArea::Page => map_page_key(key, app),
    }
}

fn map_chat_key(key: KeyEvent) -> Action {
    let event = match key.code {
        KeyCode::Esc => Event::Unfocus,
        KeyCode::Enter => Event::SendChat,
        KeyCode::Backspace => Event::Edit(Edit::Backspace),
        KeyCode::Char(c) => Event::Edit(Edit::Char(c)),
        _ => return Action::Ignore,
    };
    Action::Dispatch(event)
}

fn map_form_key(key: KeyEvent) -> Action {
    let event = match key.code {
        KeyCode::Esc => Event::Unfocus,
        KeyCode::Enter => Event::SubmitContact,
        KeyCode::Tab | KeyCode::Down => Event::Edit(Edit::NextField),
        KeyCode::BackTab | KeyCode::Up => Event::Edit(Edit::PreviousField),
        KeyCode::Backspace => Event::Edit(Edit::Backspace),
        KeyCode::Char(c) => Event::Edit(Edit::Char(c)),
        _ => return Action::Ignore,
    };
    Action::Dispatch(event)
}

fn map_page_key(key: KeyEvent, app: &Portfolio) -> Action {
    let event = match key.code {
        KeyCode::Char('q') => return Action::Quit,
        KeyCode::Char('?') => Event::ToggleHelp,
        KeyCode::Char('t') => Event::ToggleTheme,
        KeyCode::Char('e') => Event::CopyEmail,
        KeyCode::Char('c') => Event::ToggleChat,
        KeyCode::Char('0') | KeyCode::Home => Event::Navigate(SectionId::Home),
        KeyCode::Char(digit @ '1'..='4') => {
            let idx = digit as usize - '1' as usize;
            Event::Navigate(SectionId::NAV[idx])
        }
        KeyCode::Char('j') | KeyCode::Down => Event::ScrollRows(1),
        KeyCode::Char('k') | KeyCode::Up => Event::ScrollRows(-1),
        KeyCode::PageDown | KeyCode::Char(' ') => Event::PageDown,
        KeyCode::PageUp => Event::PageUp,
        _ if app.view.is_case_study() => return map_case_study_key(key),
        _ => return map_landing_key(key, app),
    };
    Action::Dispatch(event)
}

fn map_case_study_key(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('b') => Action::Dispatch(Event::CloseProject),
        _ => Action::Ignore,
    }
}

fn map_landing_key(key: KeyEvent, app: &Portfolio) -> Action {
    let event = match key.code {
        KeyCode::Tab => Event::NextCategory,
        KeyCode::BackTab => Event::PreviousCategory,
        KeyCode::Left | KeyCode::Char('h') => Event::SelectPreviousCard,
        KeyCode::Right | KeyCode::Char('l') => Event::SelectNextCard,
        KeyCode::Enter => Event::OpenSelected,
        // The trigger is disabled while a challenge is being generated.
        KeyCode::Char('i') if app.inspiration.is_loading() => return Action::Ignore,
        KeyCode::Char('i') => Event::RequestInspiration,
        KeyCode::Char('x') => Event::DismissInspiration,
        KeyCode::Char('y') => Event::CopyInspiration,
        KeyCode::Char('f') => Event::FocusForm,
        KeyCode::Char('m') if app.chat.open => Event::FocusChat,
        KeyCode::Char('n') if app.contact.is_submitted() => Event::DismissSubmitted,
        KeyCode::Esc if app.chat.open => Event::ToggleChat,
        _ => return Action::Ignore,
    };
    Action::Dispatch(event)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::NetworkError;
    use crate::tasks::Outcome;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use std::time::Duration;

    fn app() -> Portfolio {
        Portfolio::new(720, Duration::from_secs(5), false)
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[rstest]
    #[case('0', SectionId::Home)]
    #[case('1', SectionId::Work)]
    #[case('2', SectionId::Skills)]
    #[case('3', SectionId::About)]
    #[case('4', SectionId::Contact)]
    fn number_keys_follow_nav_order(#[case] key: char, #[case] section: SectionId) {
        assert_eq!(
            map_key(press(KeyCode::Char(key)), &app()),
            Action::Dispatch(Event::Navigate(section))
        );
    }

    #[test]
    fn q_and_ctrl_c_quit() {
        let app = app();
        assert_eq!(map_key(press(KeyCode::Char('q')), &app), Action::Quit);
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(map_key(ctrl_c, &app), Action::Quit);
    }

    #[test]
    fn inspiration_key_is_disabled_while_loading() {
        let mut app = app();
        assert_eq!(
            map_key(press(KeyCode::Char('i')), &app),
            Action::Dispatch(Event::RequestInspiration)
        );
        app.update(Event::RequestInspiration);
        assert_eq!(map_key(press(KeyCode::Char('i')), &app), Action::Ignore);
    }

    #[test]
    fn escape_closes_case_study() {
        let mut app = app();
        app.update(Event::OpenProject("1"));
        assert_eq!(map_key(press(KeyCode::Esc), &app), Action::Dispatch(Event::CloseProject));
        // Gallery keys do nothing behind a case study.
        assert_eq!(map_key(press(KeyCode::Tab), &app), Action::Ignore);
    }

    #[test]
    fn typing_goes_to_the_focused_input() {
        let mut app = app();
        app.update(Event::ToggleChat);
        assert_eq!(
            map_key(press(KeyCode::Char('q')), &app),
            Action::Dispatch(Event::Edit(Edit::Char('q')))
        );
        assert_eq!(map_key(press(KeyCode::Enter), &app), Action::Dispatch(Event::SendChat));

        app.update(Event::FocusForm);
        assert_eq!(
            map_key(press(KeyCode::Tab), &app),
            Action::Dispatch(Event::Edit(Edit::NextField))
        );
        assert_eq!(map_key(press(KeyCode::Esc), &app), Action::Dispatch(Event::Unfocus));
    }

    #[test]
    fn notice_blocks_everything_but_dismiss() {
        let mut app = app();
        app.update(Event::ContactSubmitted(Outcome::Failed(NetworkError::Status {
            status: 500,
            body: String::new(),
        })));
        assert_eq!(map_key(press(KeyCode::Char('q')), &app), Action::Ignore);
        assert_eq!(map_key(press(KeyCode::Enter), &app), Action::Dispatch(Event::DismissNotice));
    }

    #[test]
    fn help_closes_on_q_instead_of_quitting() {
        let mut app = app();
        app.update(Event::ToggleHelp);
        assert_eq!(map_key(press(KeyCode::Char('q')), &app), Action::Dispatch(Event::ToggleHelp));
    }
}
