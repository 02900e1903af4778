/// Which item of a fixed-length list the pointer is over, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HoverIndex {
    len: usize,
    current: Option<usize>,
}

impl HoverIndex {
    pub fn new(len: usize) -> Self {
        Self { len, current: None }
    }

    /// Out-of-range indices are ignored so `current` always points into the list.
    pub fn enter(&mut self, index: usize) {
        if index < self.len {
            self.current = Some(index);
        }
    }

    pub fn leave(&mut self) {
        self.current = None;
    }

    pub fn current(&self) -> Option<usize> {
        self.current
    }

    pub fn is_hovered(&self, index: usize) -> bool {
        self.current == Some(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enter_and_leave() {
        let mut hover = HoverIndex::new(3);
        assert_eq!(hover.current(), None);

        hover.enter(2);
        assert!(hover.is_hovered(2));
        assert!(!hover.is_hovered(1));

        // moving between items without a leave in between
        hover.enter(0);
        assert_eq!(hover.current(), Some(0));

        hover.leave();
        assert_eq!(hover.current(), None);
    }

    #[test]
    fn test_out_of_range_ignored() {
        let mut hover = HoverIndex::new(2);
        hover.enter(2);
        assert_eq!(hover.current(), None);

        hover.enter(1);
        hover.enter(7);
        assert_eq!(hover.current(), Some(1));

        let mut empty = HoverIndex::new(0);
        empty.enter(0);
        assert_eq!(empty.current(), None);
    }
}
