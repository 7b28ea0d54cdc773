use crate::domain::model::Identified;

/// 收藏等逐項開關，與目錄內容無關，不做持久化
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    ids: Vec<i64>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes `id` when present, inserts it otherwise. Returns whether it is selected afterwards.
    pub fn toggle(&mut self, id: i64) -> bool {
        if let Some(pos) = self.ids.iter().position(|existing| *existing == id) {
            self.ids.remove(pos);
            false
        } else {
            self.ids.push(id);
            true
        }
    }

    pub fn contains(&self, id: i64) -> bool {
        self.ids.contains(&id)
    }

    /// 依切換順序排列
    pub fn ids(&self) -> &[i64] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

/// Exactly one selected option at all times, e.g. the vehicle class on the taxi page.
#[derive(Debug, Clone)]
pub struct SingleSelection<T: Identified> {
    options: Vec<T>,
    index: usize,
}

impl<T: Identified> SingleSelection<T> {
    /// 預設選第一個選項；沒有選項時回傳 None
    pub fn new(options: Vec<T>) -> Option<Self> {
        if options.is_empty() {
            None
        } else {
            Some(Self { options, index: 0 })
        }
    }

    /// 未知的 id 不改變目前選擇
    pub fn select(&mut self, id: i64) -> bool {
        match self.options.iter().position(|option| option.id() == id) {
            Some(pos) => {
                self.index = pos;
                true
            }
            None => false,
        }
    }

    pub fn selected(&self) -> &T {
        &self.options[self.index]
    }

    pub fn is_selected(&self, id: i64) -> bool {
        self.selected().id() == id
    }

    pub fn options(&self) -> &[T] {
        &self.options
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::fixtures;

    #[test]
    fn test_toggle_inserts_then_removes() {
        let mut favorites = SelectionState::new();

        assert!(favorites.toggle(3));
        assert!(favorites.contains(3));
        assert!(!favorites.toggle(3));
        assert!(!favorites.contains(3));
        assert!(favorites.is_empty());
    }

    #[test]
    fn test_double_toggle_is_identity() {
        let mut favorites = SelectionState::new();
        favorites.toggle(1);
        favorites.toggle(4);
        let before = favorites.clone();

        for id in [1, 2, 4, 99] {
            favorites.toggle(id);
            favorites.toggle(id);
        }

        assert_eq!(favorites.ids(), before.ids());
    }

    #[test]
    fn test_ids_keep_toggle_order() {
        let mut favorites = SelectionState::new();
        favorites.toggle(4);
        favorites.toggle(1);
        favorites.toggle(2);
        favorites.toggle(1);

        assert_eq!(favorites.ids(), &[4, 2]);
        assert_eq!(favorites.len(), 2);
    }

    #[test]
    fn test_single_selection_defaults_to_first_ride() {
        let mut rides = SingleSelection::new(fixtures::ride_options()).unwrap();
        assert_eq!(rides.selected().name, "Economy");

        assert!(rides.select(3));
        assert_eq!(rides.selected().name, "SUV");
        assert!(rides.is_selected(3));

        // 未知 id 保留原本的選擇
        assert!(!rides.select(42));
        assert_eq!(rides.selected().name, "SUV");
    }

    #[test]
    fn test_single_selection_requires_options() {
        let empty: Vec<crate::domain::model::RideOption> = Vec::new();
        assert!(SingleSelection::new(empty).is_none());
    }
}
