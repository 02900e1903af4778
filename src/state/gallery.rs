use crate::content::{project_by_title, ContentError, ProjectRecord, PROJECTS};

/// Where a click inside the open modal overlay landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalClick {
    Backdrop,
    Body,
    CloseButton,
}

/// Search filter and modal selection over a static project catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectGallery {
    catalog: &'static [ProjectRecord],
    filter_text: String,
    selected: Option<&'static ProjectRecord>,
}

impl Default for ProjectGallery {
    fn default() -> Self {
        Self::new(&PROJECTS)
    }
}

impl ProjectGallery {
    pub fn new(catalog: &'static [ProjectRecord]) -> Self {
        Self {
            catalog,
            filter_text: String::new(),
            selected: None,
        }
    }

    pub fn set_filter(&mut self, text: impl Into<String>) {
        self.filter_text = text.into();
    }

    pub fn clear_filter(&mut self) {
        self.filter_text.clear();
    }

    pub fn filter_text(&self) -> &str {
        &self.filter_text
    }

    pub fn is_filtering(&self) -> bool {
        !self.filter_text.is_empty()
    }

    /// Projects matching the current filter, in catalog order.
    pub fn visible(&self) -> Vec<&'static ProjectRecord> {
        self.catalog
            .iter()
            .filter(|p| p.matches(&self.filter_text))
            .collect()
    }

    pub fn select(&mut self, title: &str) -> Result<&'static ProjectRecord, ContentError> {
        let project = project_by_title(self.catalog, title)?;
        log::debug!("opening project modal: {}", project.title);
        self.selected = Some(project);
        Ok(project)
    }

    pub fn close(&mut self) {
        if let Some(p) = self.selected.take() {
            log::debug!("closing project modal: {}", p.title);
        }
    }

    pub fn selected(&self) -> Option<&'static ProjectRecord> {
        self.selected
    }

    /// Clicks on the modal body never close it.
    pub fn modal_click(&mut self, target: ModalClick) {
        match target {
            ModalClick::Backdrop | ModalClick::CloseButton => self.close(),
            ModalClick::Body => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static CATALOG: [ProjectRecord; 3] = [
        ProjectRecord {
            title: "Alpha",
            description: "",
            image: "/a.png",
            tags: &["Rust", "Leptos"],
            github: "https://github.com/a",
            live: "https://a.example",
            highlights: &[],
            long_description: "",
        },
        ProjectRecord {
            title: "Beta Rust",
            description: "",
            image: "/b.png",
            tags: &["Go"],
            github: "https://github.com/b",
            live: "https://b.example",
            highlights: &[],
            long_description: "",
        },
        ProjectRecord {
            title: "Gamma",
            description: "",
            image: "/c.png",
            tags: &[],
            github: "https://github.com/c",
            live: "https://c.example",
            highlights: &[],
            long_description: "",
        },
    ];

    fn titles(gallery: &ProjectGallery) -> Vec<&'static str> {
        gallery.visible().into_iter().map(|p| p.title).collect()
    }

    #[test]
    fn test_empty_filter_returns_catalog_in_order() {
        let gallery = ProjectGallery::new(&CATALOG);
        assert!(!gallery.is_filtering());
        assert_eq!(titles(&gallery), vec!["Alpha", "Beta Rust", "Gamma"]);
    }

    #[test]
    fn test_filter_matches_title_or_tag() {
        let mut gallery = ProjectGallery::new(&CATALOG);

        gallery.set_filter("rUsT");
        assert_eq!(titles(&gallery), vec!["Alpha", "Beta Rust"]);

        gallery.set_filter("mm");
        assert_eq!(titles(&gallery), vec!["Gamma"]);

        gallery.set_filter("python");
        assert!(gallery.visible().is_empty());
    }

    #[test]
    fn test_filter_is_not_trimmed() {
        let mut gallery = ProjectGallery::new(&CATALOG);
        gallery.set_filter(" go");
        assert_eq!(gallery.filter_text(), " go");
        assert!(gallery.visible().is_empty());

        gallery.set_filter("beta ");
        assert_eq!(titles(&gallery), vec!["Beta Rust"]);
    }

    #[test]
    fn test_filter_agrees_with_brute_force() {
        let mut gallery = ProjectGallery::new(&CATALOG);
        for needle in ["", "a", "A", "le", "Go", "x", "beta rust", "ALPHA"] {
            gallery.set_filter(needle);
            let lower = needle.to_lowercase();
            let expected = CATALOG
                .iter()
                .filter(|p| {
                    p.title.to_lowercase().contains(&lower)
                        || p.tags.iter().any(|t| t.to_lowercase().contains(&lower))
                })
                .map(|p| p.title)
                .collect::<Vec<_>>();
            assert_eq!(titles(&gallery), expected, "needle: {needle:?}");
        }
    }

    #[test]
    fn test_clear_restores_full_list() {
        let mut gallery = ProjectGallery::new(&CATALOG);
        gallery.set_filter("gamma");
        assert_eq!(gallery.visible().len(), 1);

        gallery.clear_filter();
        assert!(!gallery.is_filtering());
        assert_eq!(titles(&gallery), vec!["Alpha", "Beta Rust", "Gamma"]);
    }

    #[test]
    fn test_site_projects_filter() {
        let mut gallery = ProjectGallery::default();

        gallery.set_filter("react");
        assert_eq!(
            titles(&gallery),
            vec!["Food-Website", "Ezymetrics-Dashboard", "Portfolio"]
        );

        gallery.set_filter("recharts");
        assert_eq!(titles(&gallery), vec!["Ezymetrics-Dashboard"]);
    }

    #[test]
    fn test_select_close_reselect() {
        let mut gallery = ProjectGallery::default();
        assert_eq!(gallery.selected(), None);

        let first = *gallery
            .select("Portfolio")
            .expect("Portfolio should be selectable");
        gallery.close();
        assert_eq!(gallery.selected(), None);

        let second = gallery
            .select("Portfolio")
            .expect("Portfolio should be selectable");
        assert_eq!(first, *second);
        assert_eq!(PROJECTS[2], first);
    }

    #[test]
    fn test_select_unknown_keeps_previous() {
        let mut gallery = ProjectGallery::new(&CATALOG);
        gallery.select("Gamma").expect("Gamma should be selectable");

        let err = gallery.select("Delta").unwrap_err();
        assert_eq!(err, ContentError::UnknownProject("Delta".to_string()));
        assert_eq!(gallery.selected().map(|p| p.title), Some("Gamma"));
    }

    #[test]
    fn test_selection_survives_filtering() {
        let mut gallery = ProjectGallery::new(&CATALOG);
        gallery.select("Alpha").expect("Alpha should be selectable");
        gallery.set_filter("gamma");
        assert_eq!(gallery.selected().map(|p| p.title), Some("Alpha"));
    }

    #[test]
    fn test_modal_clicks() {
        let mut gallery = ProjectGallery::new(&CATALOG);
        gallery.select("Beta Rust").expect("Beta should be selectable");

        gallery.modal_click(ModalClick::Body);
        assert!(gallery.selected().is_some());

        gallery.modal_click(ModalClick::Backdrop);
        assert!(gallery.selected().is_none());

        gallery.select("Beta Rust").expect("Beta should be selectable");
        gallery.modal_click(ModalClick::CloseButton);
        assert!(gallery.selected().is_none());

        // closing an already closed modal is harmless
        gallery.modal_click(ModalClick::Backdrop);
        assert!(gallery.selected().is_none());
    }
}
