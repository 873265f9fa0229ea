use std::collections::BTreeSet;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccordionMode {
    /// Opening an entry closes every other one.
    Exclusive,
    /// Each entry opens and closes on its own.
    Independent,
}

/// Which FAQ entries are expanded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AccordionState {
    Exclusive { open: Option<usize> },
    Independent { open: BTreeSet<usize> },
}

impl AccordionState {
    pub fn new(mode: AccordionMode) -> Self {
        match mode {
            AccordionMode::Exclusive => Self::Exclusive { open: None },
            AccordionMode::Independent => Self::Independent {
                open: BTreeSet::new(),
            },
        }
    }

    /// Toggles entry `index` and returns whether it is now open.
    pub fn toggle(&mut self, index: usize) -> bool {
        match self {
            Self::Exclusive { open } => {
                if *open == Some(index) {
                    *open = None;
                    false
                } else {
                    *open = Some(index);
                    true
                }
            }
            Self::Independent { open } => {
                if open.remove(&index) {
                    false
                } else {
                    open.insert(index);
                    true
                }
            }
        }
    }

    pub fn is_open(&self, index: usize) -> bool {
        match self {
            Self::Exclusive { open } => *open == Some(index),
            Self::Independent { open } => open.contains(&index),
        }
    }

    pub fn open_count(&self) -> usize {
        match self {
            Self::Exclusive { open } => usize::from(open.is_some()),
            Self::Independent { open } => open.len(),
        }
    }
}

/// Keys that activate a focused question the same way a click does.
pub fn is_activation_key(key: &str) -> bool {
    matches!(key, "Enter" | " " | "Spacebar")
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn exclusive_switches_between_entries() {
        let mut faq = AccordionState::new(AccordionMode::Exclusive);
        assert!(faq.toggle(0));
        assert!(faq.toggle(2));
        assert!(!faq.is_open(0));
        assert!(faq.is_open(2));
        assert!(!faq.toggle(2));
        assert_eq!(faq.open_count(), 0);
    }

    #[test]
    fn independent_entries_stay_open() {
        let mut faq = AccordionState::new(AccordionMode::Independent);
        faq.toggle(0);
        faq.toggle(3);
        assert!(faq.is_open(0));
        assert!(faq.is_open(3));
        assert_eq!(faq.open_count(), 2);
        faq.toggle(0);
        assert!(!faq.is_open(0));
        assert!(faq.is_open(3));
    }

    #[test]
    fn enter_and_space_activate() {
        assert!(is_activation_key("Enter"));
        assert!(is_activation_key(" "));
        assert!(is_activation_key("Spacebar"));
        assert!(!is_activation_key("Tab"));
        assert!(!is_activation_key("Escape"));
    }

    proptest! {
        #[test]
        fn exclusive_never_opens_two(clicks in prop::collection::vec(0usize..8, 0..64)) {
            let mut faq = AccordionState::new(AccordionMode::Exclusive);
            for index in clicks {
                let now_open = faq.toggle(index);
                prop_assert_eq!(now_open, faq.is_open(index));
                prop_assert!(faq.open_count() <= 1);
            }
        }
    }
}
