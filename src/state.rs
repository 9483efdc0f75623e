//! The portfolio controller: one owner for every piece of interactive state.
//!
//! Input and task completions arrive as `Event`s; `update` applies them and
//! returns the `Effect`s the runtime has to carry out.

use std::time::Duration;

use tracing::debug;

use crate::content::{PROJECTS, SKILLS};
use crate::gallery::GalleryFilter;
use crate::models::{ContactSubmission, FocusArea, Inspiration};
use crate::page::{HEADER_OFFSET, PageLayout, SectionId, UNITS_PER_ROW};
use crate::scroll::{ScrollCoordinator, Viewport};
use crate::tasks::{ChatState, ContactFormState, InspirationState, Outcome};
use crate::view::{ScrollRequest, ViewController};

/// Text editing routed to whichever input has focus.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Edit {
    Char(char),
    Backspace,
    NextField,
    PreviousField,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    Navigate(SectionId),
    OpenProject(&'static str),
    OpenSelected,
    CloseProject,
    NextCategory,
    PreviousCategory,
    SelectNextCard,
    SelectPreviousCard,
    /// Manual scroll by whole rows.
    ScrollRows(i32),
    PageDown,
    PageUp,
    Tick,
    RequestInspiration,
    InspirationReady { request: u64, outcome: Outcome<Inspiration> },
    DismissInspiration,
    CopyInspiration,
    CopyEmail,
    ToggleChat,
    FocusChat,
    FocusForm,
    Unfocus,
    Edit(Edit),
    SendChat,
    ChatReplied(Outcome<String>),
    SubmitContact,
    ContactSubmitted(Outcome<()>),
    SubmittedWindowElapsed(u64),
    DismissSubmitted,
    DismissNotice,
    ToggleTheme,
    ToggleHelp,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    FetchInspiration { request: u64 },
    SendChat { message: String },
    SubmitContact(ContactSubmission),
    ScheduleSubmittedReset { ticket: u64, after: Duration },
    CopyToClipboard(String),
}

pub struct Portfolio {
    pub view: ViewController,
    pub gallery: GalleryFilter,
    pub scroll: ScrollCoordinator,
    pub viewport: Viewport,
    pub inspiration: InspirationState,
    pub chat: ChatState,
    pub contact: ContactFormState,
    pub focus: FocusArea,
    pub dark_mode: bool,
    pub show_help: bool,
    submitted_display: Duration,
}

impl Portfolio {
    pub fn new(viewport_height: u32, submitted_display: Duration, dark_mode: bool) -> Self {
        Self {
            view: ViewController::new(),
            gallery: GalleryFilter::new(PROJECTS),
            scroll: ScrollCoordinator::new(),
            viewport: Viewport::new(viewport_height),
            inspiration: InspirationState::default(),
            chat: ChatState::new(),
            contact: ContactFormState::default(),
            focus: FocusArea::Page,
            dark_mode,
            show_help: false,
            submitted_display,
        }
    }

    /// Geometry of whatever document is on screen.
    pub fn layout(&self) -> PageLayout {
        match self.view.selected_project() {
            Some(project) => PageLayout::case_study(project),
            None => PageLayout::landing(
                &self.gallery.visible_projects(),
                SKILLS.len(),
                self.inspiration.current().is_some(),
            ),
        }
    }

    fn max_scroll(&self) -> u32 {
        self.layout().max_scroll(self.viewport.height)
    }

    pub fn is_animating(&self) -> bool {
        self.viewport.is_animating()
    }

    pub fn set_viewport_height(&mut self, height: u32) {
        if self.viewport.height != height {
            self.viewport.height = height;
            let max = self.max_scroll();
            self.viewport.clamp(max);
        }
    }

    pub fn update(&mut self, event: Event) -> Vec<Effect> {
        let mut effects = Vec::new();
        match event {
            Event::Navigate(section) => {
                let request = self.view.navigate(section);
                self.apply_scroll(request);
            }
            Event::OpenProject(id) => self.open_project(id),
            Event::OpenSelected => {
                if let Some(project) = self.gallery.selected() {
                    self.open_project(project.id);
                }
            }
            Event::CloseProject => {
                if let Some(request) = self.view.close_project() {
                    self.apply_scroll(request);
                }
            }
            Event::NextCategory => self.gallery.next_category(),
            Event::PreviousCategory => self.gallery.previous_category(),
            Event::SelectNextCard => self.gallery.select_next(),
            Event::SelectPreviousCard => self.gallery.select_previous(),
            Event::ScrollRows(rows) => {
                let max = self.max_scroll();
                self.viewport.scroll_by(rows as i64 * UNITS_PER_ROW as i64, max);
            }
            Event::PageDown => self.scroll_page(1),
            Event::PageUp => self.scroll_page(-1),
            Event::Tick => {
                self.viewport.step();
            }
            Event::RequestInspiration => {
                let request = self.inspiration.request();
                effects.push(Effect::FetchInspiration { request });
            }
            Event::InspirationReady { request, outcome } => self.inspiration.complete(request, outcome),
            Event::DismissInspiration => self.inspiration.dismiss(),
            Event::CopyInspiration => {
                if let Some(inspiration) = self.inspiration.current() {
                    effects.push(Effect::CopyToClipboard(format!(
                        "{}: {}",
                        inspiration.topic, inspiration.challenge
                    )));
                }
            }
            Event::CopyEmail => {
                effects.push(Effect::CopyToClipboard(crate::content::OWNER_EMAIL.to_string()));
            }
            Event::ToggleChat => {
                if self.view.is_case_study() && !self.chat.open {
                    debug!("chat launcher hidden in case study");
                } else {
                    self.chat.open = !self.chat.open;
                    self.focus = if self.chat.open { FocusArea::Chat } else { FocusArea::Page };
                }
            }
            Event::FocusChat => {
                if self.chat.open {
                    self.focus = FocusArea::Chat;
                }
            }
            Event::FocusForm => {
                if !self.view.is_case_study() {
                    self.focus = FocusArea::Form;
                    let request = self.view.navigate(SectionId::Contact);
                    self.apply_scroll(request);
                }
            }
            Event::Unfocus => self.focus = FocusArea::Page,
            Event::Edit(edit) => self.apply_edit(edit),
            Event::SendChat => {
                if let Some(message) = self.chat.send_draft() {
                    effects.push(Effect::SendChat { message });
                }
            }
            Event::ChatReplied(outcome) => self.chat.receive(outcome),
            Event::SubmitContact => {
                if let Some(submission) = self.contact.submit() {
                    effects.push(Effect::SubmitContact(submission));
                }
            }
            Event::ContactSubmitted(outcome) => {
                if let Some(ticket) = self.contact.complete(outcome) {
                    self.focus = FocusArea::Page;
                    effects.push(Effect::ScheduleSubmittedReset {
                        ticket,
                        after: self.submitted_display,
                    });
                }
            }
            Event::SubmittedWindowElapsed(ticket) => self.contact.window_elapsed(ticket),
            Event::DismissSubmitted => self.contact.dismiss_submitted(),
            Event::DismissNotice => self.contact.dismiss_notice(),
            Event::ToggleTheme => self.dark_mode = !self.dark_mode,
            Event::ToggleHelp => self.show_help = !self.show_help,
        }
        effects
    }

    fn open_project(&mut self, id: &str) {
        if let Some(request) = self.view.open_project(id) {
            self.focus = FocusArea::Page;
            self.apply_scroll(request);
        }
    }

    /// One screen minus the header, so a line of context stays visible.
    fn scroll_page(&mut self, direction: i64) {
        let page = self.viewport.height.saturating_sub(HEADER_OFFSET).max(UNITS_PER_ROW) as i64;
        let max = self.max_scroll();
        self.viewport.scroll_by(direction * page, max);
    }

    fn apply_edit(&mut self, edit: Edit) {
        match (self.focus, edit) {
            (FocusArea::Chat, Edit::Char(c)) => self.chat.draft.push(c),
            (FocusArea::Chat, Edit::Backspace) => {
                self.chat.draft.pop();
            }
            (FocusArea::Form, Edit::Char(c)) => self.contact.push_char(c),
            (FocusArea::Form, Edit::Backspace) => self.contact.pop_char(),
            (FocusArea::Form, Edit::NextField) => self.contact.focus_next(),
            (FocusArea::Form, Edit::PreviousField) => self.contact.focus_previous(),
            _ => {}
        }
    }

    fn apply_scroll(&mut self, request: ScrollRequest) {
        match request {
            ScrollRequest::Smooth(section) => {
                self.scroll.set_active(section);
                let layout = self.layout();
                if let Some(top) = layout.scroll_target(section) {
                    self.viewport.animate_to(top, layout.max_scroll(self.viewport.height));
                }
            }
            // The viewport moves in `on_frame`, once the landing page exists again.
            ScrollRequest::Deferred(section) => self.scroll.set_active(section),
            ScrollRequest::Top => {
                self.scroll.suspend();
                self.viewport.jump_to(0, 0);
            }
        }
    }

    /// Called once a frame has been drawn: observers see the new geometry and a
    /// parked scroll is resolved against it.
    pub fn on_frame(&mut self) {
        if self.view.is_case_study() {
            return;
        }
        let layout = self.layout();
        let max = layout.max_scroll(self.viewport.height);
        self.viewport.clamp(max);
        self.scroll.observe_frame(&layout, &self.viewport);

        if let Some(section) = self.view.take_pending() {
            if let Some(top) = layout.scroll_target(section) {
                debug!(section = section.anchor(), top, "resolving deferred scroll");
                self.viewport.animate_to(top, max);
            }
        }
    }

    pub fn shutdown(&mut self) {
        self.scroll.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, CategoryFilter};
    use crate::network::NetworkError;
    use crate::page::ElementId;
    use crate::prompts::{CHAT_ERROR_REPLY, FALLBACK_TOPIC, fallback_inspiration};
    use crate::tasks::FormField;
    use pretty_assertions::assert_eq;

    const HEIGHT: u32 = 36 * UNITS_PER_ROW;

    fn portfolio() -> Portfolio {
        let mut p = Portfolio::new(HEIGHT, Duration::from_secs(5), false);
        p.on_frame();
        p
    }

    fn settle(p: &mut Portfolio) {
        for _ in 0..200 {
            p.on_frame();
            if !p.is_animating() {
                break;
            }
            p.update(Event::Tick);
        }
        p.on_frame();
    }

    fn type_text(p: &mut Portfolio, text: &str) {
        for c in text.chars() {
            p.update(Event::Edit(Edit::Char(c)));
        }
    }

    #[test]
    fn starts_on_home_with_observers_armed() {
        let p = portfolio();
        assert_eq!(p.scroll.active_section(), Some(SectionId::Home));
        assert!(p.scroll.is_armed());
        assert!(p.scroll.is_revealed(ElementId::Hero));
    }

    #[test]
    fn navigate_sets_active_and_lands_below_header() {
        let mut p = portfolio();
        p.update(Event::Navigate(SectionId::About));
        assert_eq!(p.scroll.active_section(), Some(SectionId::About));
        settle(&mut p);

        let about = *p.layout().section(SectionId::About).unwrap();
        assert_eq!(p.viewport.top + HEADER_OFFSET, about.top);
        assert_eq!(p.scroll.active_section(), Some(SectionId::About));
        assert!(p.scroll.is_revealed(ElementId::Portrait));
    }

    #[test]
    fn opening_a_project_jumps_to_top_and_suspends_observers() {
        let mut p = portfolio();
        p.update(Event::Navigate(SectionId::Work));
        settle(&mut p);

        p.update(Event::OpenProject("1"));
        assert!(p.view.is_case_study());
        assert_eq!(p.viewport.top, 0);
        assert!(!p.viewport.is_animating());
        assert!(!p.scroll.is_armed());
        p.on_frame();
        assert!(!p.scroll.is_armed());
    }

    #[test]
    fn open_then_close_returns_to_work() {
        let mut p = portfolio();
        p.update(Event::OpenProject("2"));
        p.update(Event::CloseProject);
        assert!(!p.view.is_case_study());

        // Nothing moves until the landing page has been drawn.
        assert_eq!(p.viewport.top, 0);
        assert!(!p.viewport.is_animating());
        settle(&mut p);

        let work = *p.layout().section(SectionId::Work).unwrap();
        assert_eq!(p.viewport.top + HEADER_OFFSET, work.top);
        assert_eq!(p.scroll.active_section(), Some(SectionId::Work));
        assert!(p.scroll.is_armed());
    }

    #[test]
    fn navigate_from_case_study_uses_latest_target() {
        let mut p = portfolio();
        p.update(Event::OpenProject("1"));
        p.update(Event::Navigate(SectionId::Skills));
        p.update(Event::Navigate(SectionId::Contact));
        settle(&mut p);

        let max = p.layout().max_scroll(HEIGHT);
        let contact = p.layout().scroll_target(SectionId::Contact).unwrap();
        assert_eq!(p.viewport.top, contact.min(max));
    }

    #[test]
    fn open_selected_follows_the_card_cursor() {
        let mut p = portfolio();
        p.gallery.set_category(CategoryFilter::Only(Category::Typography));
        p.update(Event::SelectNextCard);
        p.update(Event::OpenSelected);
        assert_eq!(p.view.selected_project().map(|p| p.id), Some("5"));
    }

    #[test]
    fn filter_change_rearms_and_reveals_inserted_cards() {
        let mut p = portfolio();
        p.gallery.set_category(CategoryFilter::Only(Category::Typography));
        p.update(Event::Navigate(SectionId::Work));
        settle(&mut p);
        assert!(p.scroll.is_revealed(ElementId::Project("1")));
        assert!(!p.scroll.is_revealed(ElementId::Project("2")));

        p.gallery.set_category(CategoryFilter::All);
        p.on_frame();
        assert!(p.scroll.is_revealed(ElementId::Project("2")));
    }

    #[test]
    fn inspiration_flow_emits_fetch_and_shows_card() {
        let mut p = portfolio();
        let effects = p.update(Event::RequestInspiration);
        assert_eq!(effects, vec![Effect::FetchInspiration { request: 1 }]);
        assert!(p.inspiration.is_loading());

        p.update(Event::InspirationReady {
            request: 1,
            outcome: Outcome::Recovered(fallback_inspiration()),
        });
        assert!(!p.inspiration.is_loading());
        assert_eq!(p.inspiration.current().unwrap().topic, FALLBACK_TOPIC);

        p.on_frame();
        assert!(p.layout().element(ElementId::Inspiration).is_some());
        assert!(p.scroll.is_revealed(ElementId::Inspiration));
    }

    #[test]
    fn copy_inspiration_only_when_present() {
        let mut p = portfolio();
        assert!(p.update(Event::CopyInspiration).is_empty());
        p.update(Event::InspirationReady {
            request: 1,
            outcome: Outcome::Ok(fallback_inspiration()),
        });
        let effects = p.update(Event::CopyInspiration);
        assert!(matches!(&effects[..], [Effect::CopyToClipboard(text)] if text.starts_with(FALLBACK_TOPIC)));
    }

    #[test]
    fn chat_round_trip_through_events() {
        let mut p = portfolio();
        p.update(Event::ToggleChat);
        assert_eq!(p.focus, FocusArea::Chat);

        type_text(&mut p, "Hi there");
        let effects = p.update(Event::SendChat);
        assert_eq!(
            effects,
            vec![Effect::SendChat {
                message: "Hi there".into()
            }]
        );
        assert!(p.update(Event::SendChat).is_empty());

        p.update(Event::ChatReplied(Outcome::Failed(NetworkError::MissingApiKey)));
        assert_eq!(p.chat.transcript().last().unwrap().text, CHAT_ERROR_REPLY);
        assert!(!p.chat.is_typing());
    }

    #[test]
    fn chat_launcher_is_hidden_in_case_study() {
        let mut p = portfolio();
        p.update(Event::OpenProject("1"));
        p.update(Event::ToggleChat);
        assert!(!p.chat.open);
    }

    #[test]
    fn open_chat_can_still_be_closed_in_case_study() {
        let mut p = portfolio();
        p.update(Event::ToggleChat);
        p.update(Event::OpenProject("1"));
        assert!(p.chat.open);
        p.update(Event::ToggleChat);
        assert!(!p.chat.open);
        assert_eq!(p.focus, FocusArea::Page);
    }

    #[test]
    fn contact_success_schedules_reset_for_its_ticket() {
        let mut p = portfolio();
        p.update(Event::FocusForm);
        assert_eq!(p.focus, FocusArea::Form);
        type_text(&mut p, "Ada");
        p.update(Event::Edit(Edit::NextField));
        type_text(&mut p, "ada@example.com");
        p.update(Event::Edit(Edit::NextField));
        assert_eq!(p.contact.active_field(), FormField::Message);
        type_text(&mut p, "Let's work together");

        let effects = p.update(Event::SubmitContact);
        assert!(matches!(&effects[..], [Effect::SubmitContact(s)] if s.name == "Ada"));
        assert!(p.update(Event::SubmitContact).is_empty());

        let effects = p.update(Event::ContactSubmitted(Outcome::Ok(())));
        assert_eq!(
            effects,
            vec![Effect::ScheduleSubmittedReset {
                ticket: 1,
                after: Duration::from_secs(5)
            }]
        );
        assert!(p.contact.is_submitted());
        p.update(Event::SubmittedWindowElapsed(1));
        assert!(!p.contact.is_submitted());
    }

    #[test]
    fn invalid_contact_form_has_no_effect() {
        let mut p = portfolio();
        p.update(Event::FocusForm);
        type_text(&mut p, "Ada");
        assert!(p.update(Event::SubmitContact).is_empty());
        assert!(p.contact.validation().is_some());
    }

    #[test]
    fn typing_on_page_does_nothing() {
        let mut p = portfolio();
        type_text(&mut p, "abc");
        assert!(p.chat.draft.is_empty());
        assert!(p.contact.fields().name.is_empty());
    }

    #[test]
    fn manual_scroll_is_clamped_to_document() {
        let mut p = portfolio();
        p.update(Event::ScrollRows(-10));
        assert_eq!(p.viewport.top, 0);
        p.update(Event::ScrollRows(10_000));
        assert_eq!(p.viewport.top, p.layout().max_scroll(HEIGHT));
        p.on_frame();
        assert_eq!(p.scroll.active_section(), Some(SectionId::Contact));
    }
}
