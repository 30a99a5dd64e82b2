//! Numbered menu layouts and the actions behind each number.
use clap::ValueEnum;

pub const DEFAULT_TOP_N: usize = 5;

/// Which actions the menu offers.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum MenuLayout {
    /// Display, threshold filter and sorting
    Filter,
    /// Display and top-N views
    Ranking,
    /// Everything
    #[default]
    Full,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MenuAction {
    DisplayAll,
    FilterBelowThreshold,
    SortAscending,
    SortDescending,
    TopHighest,
    TopLowest,
    Exit,
}

impl MenuLayout {
    pub fn actions(self) -> &'static [MenuAction] {
        use MenuAction::*;
        match self {
            MenuLayout::Filter => &[DisplayAll, FilterBelowThreshold, SortAscending, SortDescending, Exit],
            MenuLayout::Ranking => &[DisplayAll, TopHighest, TopLowest, Exit],
            MenuLayout::Full => &[
                DisplayAll,
                FilterBelowThreshold,
                SortAscending,
                SortDescending,
                TopHighest,
                TopLowest,
                Exit,
            ],
        }
    }
}

impl MenuAction {
    pub fn label(self, top_n: usize) -> String {
        match self {
            MenuAction::DisplayAll => "Display all students".to_string(),
            MenuAction::FilterBelowThreshold => "Filter students below threshold".to_string(),
            MenuAction::SortAscending => "Sort ascending by total".to_string(),
            MenuAction::SortDescending => "Sort descending by total".to_string(),
            MenuAction::TopHighest => format!("Show top {top_n} highest scoring students"),
            MenuAction::TopLowest => format!("Show top {top_n} lowest scoring students"),
            MenuAction::Exit => "Exit".to_string(),
        }
    }
}

/// A layout plus the size of its top-N views.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Menu {
    pub layout: MenuLayout,
    pub top_n: usize,
}

impl Menu {
    pub fn new(layout: MenuLayout, top_n: usize) -> Self {
        Self { layout, top_n }
    }

    /// Highest valid choice number.
    pub fn len(&self) -> usize {
        self.layout.actions().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Map a 1-based choice to its action.
    pub fn action(&self, choice: i64) -> Option<MenuAction> {
        let idx = usize::try_from(choice).ok()?.checked_sub(1)?;
        self.layout.actions().get(idx).copied()
    }

    pub fn render(&self) -> String {
        let mut out = String::from("\n=== MENU ===");
        for (i, action) in self.layout.actions().iter().enumerate() {
            out.push_str(&format!("\n{}. {}", i + 1, action.label(self.top_n)));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_is_always_last() {
        for layout in [MenuLayout::Filter, MenuLayout::Ranking, MenuLayout::Full] {
            assert_eq!(layout.actions().last(), Some(&MenuAction::Exit));
        }
    }

    #[test]
    fn choices_are_one_based() {
        let menu = Menu::new(MenuLayout::Filter, 5);
        assert_eq!(menu.action(1), Some(MenuAction::DisplayAll));
        assert_eq!(menu.action(5), Some(MenuAction::Exit));
        assert_eq!(menu.action(0), None);
        assert_eq!(menu.action(6), None);
        assert_eq!(menu.action(-2), None);
    }

    #[test]
    fn render_ranking() {
        let menu = Menu::new(MenuLayout::Ranking, 3);
        assert_eq!(
            menu.render(),
            "\n=== MENU ===\n\
             1. Display all students\n\
             2. Show top 3 highest scoring students\n\
             3. Show top 3 lowest scoring students\n\
             4. Exit"
        );
    }
}
