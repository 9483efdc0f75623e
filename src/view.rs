use tracing::{debug, warn};

use crate::content::find_project;
use crate::models::Project;
use crate::page::SectionId;

/// What the controller needs done to the viewport after a view transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollRequest {
    /// Animate to the section now.
    Smooth(SectionId),
    /// Wait for the landing page to be drawn once, then animate.
    Deferred(SectionId),
    /// Jump to the top of the new document without animation.
    Top,
}

/// Landing page vs case-study view, plus a scroll parked until the next landing frame.
#[derive(Debug, Default)]
pub struct ViewController {
    selected: Option<&'static str>,
    pending_scroll: Option<SectionId>,
}

impl ViewController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_case_study(&self) -> bool {
        self.selected.is_some()
    }

    pub fn selected_project(&self) -> Option<&'static Project> {
        self.selected.and_then(find_project)
    }

    pub fn navigate(&mut self, section: SectionId) -> ScrollRequest {
        if let Some(id) = self.selected.take() {
            debug!(project = id, section = section.anchor(), "leaving case study for section");
            // A later request replaces whatever was parked.
            self.pending_scroll = Some(section);
            ScrollRequest::Deferred(section)
        } else if self.pending_scroll.is_some() {
            // Landing page not drawn since the case study closed.
            self.pending_scroll = Some(section);
            ScrollRequest::Deferred(section)
        } else {
            ScrollRequest::Smooth(section)
        }
    }

    /// Switches to the case-study view. Ids that name no project are ignored.
    pub fn open_project(&mut self, id: &str) -> Option<ScrollRequest> {
        let Some(project) = find_project(id) else {
            warn!(id, "open requested for unknown project");
            return None;
        };
        debug!(project = project.id, "opening case study");
        self.selected = Some(project.id);
        self.pending_scroll = None;
        Some(ScrollRequest::Top)
    }

    /// Back to the landing page, parked on the work section.
    pub fn close_project(&mut self) -> Option<ScrollRequest> {
        let id = self.selected.take()?;
        debug!(project = id, "closing case study");
        self.pending_scroll = Some(SectionId::Work);
        Some(ScrollRequest::Deferred(SectionId::Work))
    }

    /// Hands out the parked scroll once the landing page has been drawn.
    pub fn take_pending(&mut self) -> Option<SectionId> {
        if self.is_case_study() {
            return None;
        }
        self.pending_scroll.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn navigate_on_landing_scrolls_immediately() {
        let mut view = ViewController::new();
        assert_eq!(view.navigate(SectionId::About), ScrollRequest::Smooth(SectionId::About));
        assert_eq!(view.take_pending(), None);
    }

    #[test]
    fn open_project_selects_and_jumps_to_top() {
        let mut view = ViewController::new();
        assert_eq!(view.open_project("2"), Some(ScrollRequest::Top));
        assert!(view.is_case_study());
        assert_eq!(view.selected_project().map(|p| p.id), Some("2"));
    }

    #[test]
    fn unknown_project_is_ignored() {
        let mut view = ViewController::new();
        assert_eq!(view.open_project("missing"), None);
        assert!(!view.is_case_study());
    }

    #[test]
    fn navigate_from_case_study_defers_and_latest_wins() {
        let mut view = ViewController::new();
        view.open_project("1");
        assert_eq!(view.navigate(SectionId::About), ScrollRequest::Deferred(SectionId::About));
        assert!(!view.is_case_study());

        // Landing page not drawn yet; a second request replaces the first.
        assert_eq!(view.navigate(SectionId::Contact), ScrollRequest::Deferred(SectionId::Contact));
        assert_eq!(view.take_pending(), Some(SectionId::Contact));
        assert_eq!(view.take_pending(), None);
    }

    #[test]
    fn close_project_parks_work_section() {
        let mut view = ViewController::new();
        view.open_project("1");
        assert_eq!(view.close_project(), Some(ScrollRequest::Deferred(SectionId::Work)));
        assert_eq!(view.take_pending(), Some(SectionId::Work));
    }

    #[test]
    fn close_without_case_study_is_noop() {
        let mut view = ViewController::new();
        assert_eq!(view.close_project(), None);
        assert_eq!(view.take_pending(), None);
    }

    #[test]
    fn reopening_drops_parked_scroll() {
        let mut view = ViewController::new();
        view.open_project("1");
        view.close_project();
        view.open_project("2");
        assert_eq!(view.take_pending(), None);
    }
}
