#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// SVG path for the toggle button: a cross while open, a hamburger otherwise.
    pub fn toggle_path(&self) -> &'static str {
        if self.open {
            "M6 18L18 6M6 6l12 12"
        } else {
            "M4 6h16M4 12h16M4 18h16"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_alternates() {
        let mut menu = MenuState::default();
        assert!(!menu.is_open());
        for i in 1..=5 {
            menu.toggle();
            assert_eq!(menu.is_open(), i % 2 == 1);
        }
    }

    #[test]
    fn test_toggle_path_follows_state() {
        let mut menu = MenuState::default();
        let closed = menu.toggle_path();
        menu.toggle();
        assert_ne!(closed, menu.toggle_path());
        menu.toggle();
        assert_eq!(closed, menu.toggle_path());
    }
}
