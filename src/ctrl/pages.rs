use derive_more::Constructor;

use crate::provider::MonthIndex;

/// One of the months shown side by side, counted from the anchor.
#[derive(Debug, Clone, PartialEq, Eq, Constructor)]
pub struct VisibleMonth {
    pub position: u32,
    pub index: MonthIndex,
    /// Stable redraw key, unique within one page.
    pub key: String,
}

impl VisibleMonth {
    pub fn year(&self) -> i32 {
        self.index.year()
    }

    pub fn month(&self) -> u32 {
        self.index.month()
    }
}

/// The `count` consecutive months starting at `anchor`.
pub fn visible_months(anchor: MonthIndex, count: u32) -> Vec<VisibleMonth> {
    (0..count)
        .map(|position| {
            let index = anchor + position;
            VisibleMonth::new(position, index, format!("{}-{}", index.year(), position))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn produces_consecutive_months() {
        let months = visible_months(MonthIndex::new(10, 2023), 4);
        let pairs: Vec<(i32, u32)> = months.iter().map(|m| (m.year(), m.month())).collect();
        assert_eq!(pairs, vec![(2023, 10), (2023, 11), (2024, 0), (2024, 1)]);
    }

    #[test]
    fn keys_are_unique() {
        for month in 0..12 {
            let months = visible_months(MonthIndex::new(month, 1999), 30);
            assert_eq!(months.len(), 30);
            let keys: HashSet<&str> = months.iter().map(|m| m.key.as_str()).collect();
            assert_eq!(keys.len(), 30);
            for pair in months.windows(2) {
                assert_eq!(pair[0].index.next(), pair[1].index);
            }
        }
    }

    #[test]
    fn single_month() {
        let months = visible_months(MonthIndex::new(5, 2020), 1);
        let only = VisibleMonth::new(0, MonthIndex::new(5, 2020), "2020-0".to_owned());
        assert_eq!(months, vec![only]);
    }
}
