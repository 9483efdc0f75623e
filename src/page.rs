//! Page geometry.
//!
//! Every block on screen gets a vertical extent in abstract units
//! (`UNITS_PER_ROW` per terminal row). Scroll targets, reveal and scroll-spy
//! all work on these extents, and the renderer draws from the same layout so
//! what is observed is what is shown.

use crate::models::Project;

pub const UNITS_PER_ROW: u32 = 20;
/// Height of the fixed navigation header; section scroll targets sit this far below the viewport top.
pub const HEADER_OFFSET: u32 = 80;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SectionId {
    Home,
    Skills,
    Work,
    About,
    Contact,
}

impl SectionId {
    /// Landing page order, top to bottom.
    pub const ORDER: [SectionId; 5] = [
        SectionId::Home,
        SectionId::Skills,
        SectionId::Work,
        SectionId::About,
        SectionId::Contact,
    ];

    /// Header navigation order. Expertise comes after work here, unlike on the page.
    pub const NAV: [SectionId; 4] = [
        SectionId::Work,
        SectionId::Skills,
        SectionId::About,
        SectionId::Contact,
    ];

    pub fn nav_label(self) -> &'static str {
        match self {
            SectionId::Home => "Home",
            SectionId::Skills => "Expertise",
            SectionId::Work => "Work",
            SectionId::About => "About",
            SectionId::Contact => "Contact",
        }
    }

    pub fn anchor(self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::Skills => "skills",
            SectionId::Work => "work",
            SectionId::About => "about",
            SectionId::Contact => "contact",
        }
    }

    pub fn from_anchor(anchor: &str) -> Option<Self> {
        Self::ORDER.into_iter().find(|section| section.anchor() == anchor)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ElementId {
    Hero,
    Inspiration,
    Heading(SectionId),
    Skill(usize),
    Project(&'static str),
    Portrait,
    AboutText,
    ContactPitch,
    ContactForm,
    Footer,
    CaseHero,
    CaseMeta,
    CaseConcept,
    CaseGrid,
    CaseShot(usize),
    CaseBack,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Element {
    pub id: ElementId,
    pub section: Option<SectionId>,
    pub top: u32,
    pub height: u32,
    pub column: u16,
    pub columns: u16,
    /// Starts hidden and takes part in reveal-on-scroll.
    pub reveal: bool,
}

impl Element {
    pub fn bottom(&self) -> u32 {
        self.top + self.height
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SectionSpan {
    pub id: SectionId,
    pub top: u32,
    pub height: u32,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PageLayout {
    elements: Vec<Element>,
    sections: Vec<SectionSpan>,
    total_height: u32,
}

const fn rows(n: u32) -> u32 {
    n * UNITS_PER_ROW
}

const HERO_TOP_PAD: u32 = rows(5);
const HERO_HEIGHT: u32 = rows(9);
const INSPIRATION_HEIGHT: u32 = rows(6);
const SECTION_TOP_PAD: u32 = rows(1);
const SECTION_BOTTOM_PAD: u32 = rows(2);
const HEADING_HEIGHT: u32 = rows(3);
const SKILL_COLUMNS: u16 = 2;
const SKILL_CARD_HEIGHT: u32 = rows(6);
const PROJECT_COLUMNS: u16 = 3;
const PROJECT_CARD_HEIGHT: u32 = rows(7);
const EMPTY_GALLERY_HEIGHT: u32 = rows(3);
const ABOUT_HEIGHT: u32 = rows(16);
const CONTACT_HEIGHT: u32 = rows(18);
const FOOTER_HEIGHT: u32 = rows(4);

const CASE_HERO_HEIGHT: u32 = rows(9);
const CASE_META_HEIGHT: u32 = rows(6);
const CASE_TEXT_HEIGHT: u32 = rows(7);
const CASE_SHOT_HEIGHT: u32 = rows(4);
const CASE_BACK_HEIGHT: u32 = rows(3);

struct Builder {
    layout: PageLayout,
    cursor: u32,
    section: Option<(SectionId, u32)>,
}

impl Builder {
    fn new() -> Self {
        Self {
            layout: PageLayout::default(),
            cursor: 0,
            section: None,
        }
    }

    fn open_section(&mut self, id: SectionId, top_pad: u32) {
        self.section = Some((id, self.cursor));
        self.cursor += top_pad;
    }

    fn close_section(&mut self, bottom_pad: u32) {
        self.cursor += bottom_pad;
        if let Some((id, top)) = self.section.take() {
            self.layout.sections.push(SectionSpan {
                id,
                top,
                height: self.cursor - top,
            });
        }
    }

    fn block(&mut self, id: ElementId, height: u32, reveal: bool) {
        self.row(&[id], height, reveal);
    }

    /// Places `ids` side by side in one grid row.
    fn row(&mut self, ids: &[ElementId], height: u32, reveal: bool) {
        let section = self.section.map(|(id, _)| id);
        for (column, id) in ids.iter().enumerate() {
            self.layout.elements.push(Element {
                id: *id,
                section,
                top: self.cursor,
                height,
                column: column as u16,
                columns: ids.len() as u16,
                reveal,
            });
        }
        self.cursor += height;
    }

    /// Lays `ids` out in rows of `columns`; a short last row keeps the column width.
    fn grid(&mut self, ids: &[ElementId], columns: u16, height: u32) {
        let section = self.section.map(|(id, _)| id);
        for chunk in ids.chunks(columns as usize) {
            for (column, id) in chunk.iter().enumerate() {
                self.layout.elements.push(Element {
                    id: *id,
                    section,
                    top: self.cursor,
                    height,
                    column: column as u16,
                    columns,
                    reveal: true,
                });
            }
            self.cursor += height;
        }
    }

    fn finish(mut self) -> PageLayout {
        self.layout.total_height = self.cursor;
        self.layout
    }
}

impl PageLayout {
    /// Landing page for the given visible projects.
    pub fn landing(visible: &[&Project], skill_count: usize, has_inspiration: bool) -> Self {
        let mut b = Builder::new();

        b.open_section(SectionId::Home, HERO_TOP_PAD);
        b.block(ElementId::Hero, HERO_HEIGHT, true);
        if has_inspiration {
            b.cursor += rows(1);
            b.block(ElementId::Inspiration, INSPIRATION_HEIGHT, true);
        }
        b.close_section(SECTION_BOTTOM_PAD);

        b.open_section(SectionId::Skills, SECTION_TOP_PAD);
        b.block(ElementId::Heading(SectionId::Skills), HEADING_HEIGHT, true);
        let skills: Vec<_> = (0..skill_count).map(ElementId::Skill).collect();
        b.grid(&skills, SKILL_COLUMNS, SKILL_CARD_HEIGHT);
        b.close_section(SECTION_BOTTOM_PAD);

        b.open_section(SectionId::Work, SECTION_TOP_PAD);
        b.block(ElementId::Heading(SectionId::Work), HEADING_HEIGHT, true);
        if visible.is_empty() {
            b.cursor += EMPTY_GALLERY_HEIGHT;
        } else {
            let cards: Vec<_> = visible.iter().map(|p| ElementId::Project(p.id)).collect();
            b.grid(&cards, PROJECT_COLUMNS, PROJECT_CARD_HEIGHT);
        }
        b.close_section(SECTION_BOTTOM_PAD);

        b.open_section(SectionId::About, SECTION_TOP_PAD);
        b.row(&[ElementId::Portrait, ElementId::AboutText], ABOUT_HEIGHT, true);
        b.close_section(SECTION_BOTTOM_PAD);

        b.open_section(SectionId::Contact, SECTION_TOP_PAD);
        b.row(&[ElementId::ContactPitch, ElementId::ContactForm], CONTACT_HEIGHT, true);
        b.close_section(SECTION_BOTTOM_PAD);

        b.block(ElementId::Footer, FOOTER_HEIGHT, false);
        b.finish()
    }

    /// Case-study document for one project. Nothing here is observed.
    pub fn case_study(project: &Project) -> Self {
        let mut b = Builder::new();
        b.cursor = HEADER_OFFSET;
        b.block(ElementId::CaseHero, CASE_HERO_HEIGHT, false);
        b.block(ElementId::CaseMeta, CASE_META_HEIGHT, false);
        if let Some(study) = &project.case_study {
            b.block(ElementId::CaseConcept, CASE_TEXT_HEIGHT, false);
            b.block(ElementId::CaseGrid, CASE_TEXT_HEIGHT, false);
            for idx in 0..study.process_gallery.len() {
                b.block(ElementId::CaseShot(idx), CASE_SHOT_HEIGHT, false);
            }
        }
        b.block(ElementId::CaseBack, CASE_BACK_HEIGHT, false);
        b.finish()
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn sections(&self) -> &[SectionSpan] {
        &self.sections
    }

    pub fn total_height(&self) -> u32 {
        self.total_height
    }

    pub fn element(&self, id: ElementId) -> Option<&Element> {
        self.elements.iter().find(|el| el.id == id)
    }

    pub fn section(&self, id: SectionId) -> Option<&SectionSpan> {
        self.sections.iter().find(|span| span.id == id)
    }

    /// Scroll offset that puts the section top `HEADER_OFFSET` below the viewport top.
    pub fn scroll_target(&self, id: SectionId) -> Option<u32> {
        self.section(id)
            .map(|span| span.top.saturating_sub(HEADER_OFFSET))
    }

    pub fn max_scroll(&self, viewport_height: u32) -> u32 {
        self.total_height.saturating_sub(viewport_height)
    }

    /// Identity of the observable element set; a change means observers must be rebuilt.
    pub fn reveal_signature(&self) -> Vec<ElementId> {
        self.elements
            .iter()
            .filter(|el| el.reveal)
            .map(|el| el.id)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{PROJECTS, SKILLS};
    use pretty_assertions::assert_eq;

    fn all_projects() -> Vec<&'static Project> {
        PROJECTS.iter().collect()
    }

    #[test]
    fn sections_are_ordered_and_disjoint() {
        let layout = PageLayout::landing(&all_projects(), SKILLS.len(), false);
        let ids: Vec<_> = layout.sections().iter().map(|s| s.id).collect();
        assert_eq!(ids, SectionId::ORDER.to_vec());
        for pair in layout.sections().windows(2) {
            assert_eq!(pair[0].top + pair[0].height, pair[1].top);
        }
    }

    #[test]
    fn scroll_target_subtracts_header_offset() {
        let layout = PageLayout::landing(&all_projects(), SKILLS.len(), false);
        let work = layout.section(SectionId::Work).unwrap();
        assert_eq!(layout.scroll_target(SectionId::Work), Some(work.top - HEADER_OFFSET));
        assert_eq!(layout.scroll_target(SectionId::Home), Some(0));
    }

    #[test]
    fn project_cards_fill_three_columns() {
        let layout = PageLayout::landing(&all_projects(), SKILLS.len(), false);
        let first = layout.element(ElementId::Project("1")).unwrap();
        let fourth = layout.element(ElementId::Project("4")).unwrap();
        assert_eq!(first.columns, 3);
        assert_eq!(fourth.column, 0);
        assert_eq!(fourth.top, first.bottom());
    }

    #[test]
    fn inspiration_card_changes_signature_and_pushes_sections_down() {
        let without = PageLayout::landing(&all_projects(), SKILLS.len(), false);
        let with = PageLayout::landing(&all_projects(), SKILLS.len(), true);
        assert_ne!(without.reveal_signature(), with.reveal_signature());
        assert!(with.section(SectionId::Skills).unwrap().top > without.section(SectionId::Skills).unwrap().top);
    }

    #[test]
    fn case_study_has_no_observed_elements() {
        let layout = PageLayout::case_study(&PROJECTS[0]);
        assert!(layout.reveal_signature().is_empty());
        assert!(layout.sections().is_empty());
        assert!(layout.element(ElementId::CaseShot(2)).is_some());
    }

    #[test]
    fn anchors_round_trip() {
        for section in SectionId::ORDER {
            assert_eq!(SectionId::from_anchor(section.anchor()), Some(section));
        }
        assert_eq!(SectionId::from_anchor("blog"), None);
    }
}
