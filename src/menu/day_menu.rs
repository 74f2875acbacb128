use std::collections::{btree_map, BTreeMap};

use super::{DayKey, Diet};

/// A single free-text menu line.
pub type MenuEntry = String;

/// The vegetarian and meat dishes of one day, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DayMenu {
    pub vegetarian: Vec<MenuEntry>,
    pub meat: Vec<MenuEntry>,
}

impl DayMenu {
    /// Appends `entry` to every list named in `diet`.
    pub fn push(&mut self, diet: Diet, entry: impl Into<MenuEntry>) {
        let entry = entry.into();
        if diet.contains(Diet::Vegetarian) {
            self.vegetarian.push(entry.clone());
        }
        if diet.contains(Diet::Meat) {
            self.meat.push(entry);
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vegetarian.is_empty() && self.meat.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.vegetarian.len() + self.meat.len()
    }

    /// Keeps only the lists selected by `show`.
    #[must_use]
    pub fn filtered(&self, show: Diet) -> Self {
        Self {
            vegetarian: if show.contains(Diet::Vegetarian) {
                self.vegetarian.clone()
            } else {
                vec![]
            },
            meat: if show.contains(Diet::Meat) {
                self.meat.clone()
            } else {
                vec![]
            },
        }
    }

    pub fn extend(&mut self, other: Self) {
        self.vegetarian.extend(other.vegetarian);
        self.meat.extend(other.meat);
    }
}

/// The menus of a week. Only days the extractor found are present.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct WeeklyMenu(BTreeMap<DayKey, DayMenu>);

impl WeeklyMenu {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The menu for `day`, or an empty menu if the day is absent.
    #[must_use]
    pub fn day(&self, day: DayKey) -> DayMenu {
        self.0.get(&day).cloned().unwrap_or_default()
    }

    #[must_use]
    pub fn get(&self, day: DayKey) -> Option<&DayMenu> {
        self.0.get(&day)
    }

    pub fn entry(&mut self, day: DayKey) -> &mut DayMenu {
        self.0.entry(day).or_default()
    }

    pub fn insert(&mut self, day: DayKey, menu: DayMenu) -> Option<DayMenu> {
        self.0.insert(day, menu)
    }

    #[must_use]
    pub fn contains_day(&self, day: DayKey) -> bool {
        self.0.contains_key(&day)
    }

    /// Number of days present, empty ones included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True if at least one day has at least one entry.
    #[must_use]
    pub fn has_entries(&self) -> bool {
        self.0.values().any(|menu| !menu.is_empty())
    }

    /// Total number of entries across all days.
    #[must_use]
    pub fn entry_count(&self) -> usize {
        self.0.values().map(DayMenu::len).sum()
    }

    /// Appends the entries of `other` to the matching days of `self`.
    pub fn merge(&mut self, other: Self) {
        for (day, menu) in other.0 {
            self.entry(day).extend(menu);
        }
    }

    #[must_use]
    pub fn filtered(&self, show: Diet) -> Self {
        Self(
            self.0
                .iter()
                .map(|(day, menu)| (*day, menu.filtered(show)))
                .collect(),
        )
    }

    pub fn iter(&self) -> btree_map::Iter<'_, DayKey, DayMenu> {
        self.0.iter()
    }
}

impl FromIterator<(DayKey, DayMenu)> for WeeklyMenu {
    fn from_iter<T: IntoIterator<Item = (DayKey, DayMenu)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a WeeklyMenu {
    type Item = (&'a DayKey, &'a DayMenu);
    type IntoIter = btree_map::Iter<'a, DayKey, DayMenu>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
