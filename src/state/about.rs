use std::fmt;

use super::HoverIndex;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum AboutTab {
    #[default]
    Journey,
    Skills,
}

impl AboutTab {
    pub fn all() -> [AboutTab; 2] {
        [AboutTab::Journey, AboutTab::Skills]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AboutTab::Journey => "journey",
            AboutTab::Skills => "skills",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AboutTab::Journey => "Journey",
            AboutTab::Skills => "Skills",
        }
    }
}

impl fmt::Display for AboutTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Active tab plus the skill card under the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AboutState {
    active_tab: AboutTab,
    hovered_skill: HoverIndex,
}

impl AboutState {
    pub fn new(skill_count: usize) -> Self {
        Self {
            active_tab: AboutTab::default(),
            hovered_skill: HoverIndex::new(skill_count),
        }
    }

    pub fn select_tab(&mut self, tab: AboutTab) {
        if self.active_tab != tab {
            log::debug!("about tab: {} -> {}", self.active_tab, tab);
        }
        self.active_tab = tab;
    }

    pub fn active_tab(&self) -> AboutTab {
        self.active_tab
    }

    pub fn is_visible(&self, tab: AboutTab) -> bool {
        self.active_tab == tab
    }

    pub fn hover_skill(&mut self, index: usize) {
        self.hovered_skill.enter(index);
    }

    pub fn leave_skill(&mut self) {
        self.hovered_skill.leave();
    }

    pub fn is_skill_hovered(&self, index: usize) -> bool {
        self.hovered_skill.is_hovered(index)
    }
}
