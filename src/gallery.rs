use crate::models::{CategoryFilter, Project};

/// Category filter for the work section plus the keyboard card cursor.
pub struct GalleryFilter {
    projects: &'static [Project],
    active: CategoryFilter,
    cursor: usize,
}

impl GalleryFilter {
    pub fn new(projects: &'static [Project]) -> Self {
        Self {
            projects,
            active: CategoryFilter::All,
            cursor: 0,
        }
    }

    pub fn active(&self) -> CategoryFilter {
        self.active
    }

    pub fn set_category(&mut self, filter: CategoryFilter) {
        self.active = filter;
        self.cursor = 0;
    }

    /// Recomputed on every call; static order is preserved.
    pub fn visible_projects(&self) -> Vec<&'static Project> {
        self.projects
            .iter()
            .filter(|project| self.active.matches(project.category))
            .collect()
    }

    pub fn next_category(&mut self) {
        let idx = self.choice_index();
        let next = CategoryFilter::CHOICES[(idx + 1) % CategoryFilter::CHOICES.len()];
        self.set_category(next);
    }

    pub fn previous_category(&mut self) {
        let idx = self.choice_index();
        let len = CategoryFilter::CHOICES.len();
        let prev = CategoryFilter::CHOICES[(idx + len - 1) % len];
        self.set_category(prev);
    }

    fn choice_index(&self) -> usize {
        CategoryFilter::CHOICES
            .iter()
            .position(|choice| *choice == self.active)
            .unwrap_or(0)
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn select_next(&mut self) {
        let count = self.visible_projects().len();
        if count > 0 && self.cursor + 1 < count {
            self.cursor += 1;
        }
    }

    pub fn select_previous(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Project under the card cursor, if the visible set is non-empty.
    pub fn selected(&self) -> Option<&'static Project> {
        self.visible_projects().get(self.cursor).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::PROJECTS;
    use crate::models::Category;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn titles(projects: &[&Project]) -> Vec<&'static str> {
        projects.iter().map(|p| p.title).collect()
    }

    #[test]
    fn all_returns_every_project_in_static_order() {
        let gallery = GalleryFilter::new(PROJECTS);
        let visible = gallery.visible_projects();
        assert_eq!(visible.len(), PROJECTS.len());
        let ids: Vec<_> = visible.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec!["1", "2", "3", "4", "5", "6"]);
    }

    #[test]
    fn typography_shows_the_two_typography_projects() {
        let mut gallery = GalleryFilter::new(PROJECTS);
        gallery.set_category(CategoryFilter::Only(Category::Typography));
        assert_eq!(
            titles(&gallery.visible_projects()),
            vec!["Modern Sans Revival", "Typographic Posters"]
        );
    }

    #[rstest]
    #[case(Category::Typography)]
    #[case(Category::UxUi)]
    #[case(Category::ThreeD)]
    #[case(Category::WebDevelopment)]
    fn category_subset_keeps_relative_order(#[case] category: Category) {
        let mut gallery = GalleryFilter::new(PROJECTS);
        let all = gallery.visible_projects();
        gallery.set_category(CategoryFilter::Only(category));
        let subset = gallery.visible_projects();

        assert!(subset.iter().all(|p| p.category == category));
        let expected: Vec<_> = all.iter().filter(|p| p.category == category).map(|p| p.id).collect();
        let actual: Vec<_> = subset.iter().map(|p| p.id).collect();
        assert_eq!(actual, expected);
    }

    #[test]
    fn category_cycle_wraps_both_ways() {
        let mut gallery = GalleryFilter::new(PROJECTS);
        gallery.previous_category();
        assert_eq!(gallery.active(), CategoryFilter::Only(Category::WebDevelopment));
        gallery.next_category();
        assert_eq!(gallery.active(), CategoryFilter::All);
        gallery.next_category();
        assert_eq!(gallery.active(), CategoryFilter::Only(Category::Typography));
    }

    #[test]
    fn cursor_stays_within_visible_projects_and_resets_on_filter() {
        let mut gallery = GalleryFilter::new(PROJECTS);
        for _ in 0..10 {
            gallery.select_next();
        }
        assert_eq!(gallery.cursor(), PROJECTS.len() - 1);
        assert_eq!(gallery.selected().map(|p| p.id), Some("6"));

        gallery.set_category(CategoryFilter::Only(Category::Typography));
        assert_eq!(gallery.cursor(), 0);
        gallery.select_next();
        gallery.select_next();
        assert_eq!(gallery.selected().map(|p| p.id), Some("5"));
    }
}
