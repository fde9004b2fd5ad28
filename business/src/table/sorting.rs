//! Sort specification and row ordering.

use std::cmp::Ordering;

use crate::{UserField, UserRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// Header indicator.
    pub fn arrow(self) -> &'static str {
        match self {
            Self::Ascending => "▲",
            Self::Descending => "▼",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColumnSort {
    pub column: UserField,
    pub direction: SortDirection,
}

impl ColumnSort {
    pub fn new(column: UserField, direction: SortDirection) -> Self {
        Self { column, direction }
    }
}

/// Ordered multi-column sort specification. Earlier entries take precedence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sorting {
    columns: Vec<ColumnSort>,
}

impl Sorting {
    pub fn columns(&self) -> &[ColumnSort] {
        &self.columns
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn direction_of(&self, column: UserField) -> Option<SortDirection> {
        self.columns
            .iter()
            .find(|sort| sort.column == column)
            .map(|sort| sort.direction)
    }

    /// Position of `column` within a multi-column spec, 0-based.
    pub fn priority_of(&self, column: UserField) -> Option<usize> {
        self.columns.iter().position(|sort| sort.column == column)
    }

    /// Header click. The column cycles first direction → flipped → unsorted.
    ///
    /// Without `multi` the result sorts by this column alone; with `multi` the
    /// column is added to, flipped in, or removed from the existing spec.
    pub fn toggle(&mut self, column: UserField, multi: bool) {
        let first = if column.sorts_descending_first() {
            SortDirection::Descending
        } else {
            SortDirection::Ascending
        };
        let next = match self.direction_of(column) {
            None => Some(first),
            Some(current) if current == first => Some(first.flipped()),
            Some(_) => None,
        };

        if !multi {
            self.columns = next
                .map(|direction| vec![ColumnSort::new(column, direction)])
                .unwrap_or_default();
            return;
        }

        match (self.priority_of(column), next) {
            (Some(index), Some(direction)) => self.columns[index].direction = direction,
            (Some(index), None) => {
                self.columns.remove(index);
            }
            (None, Some(direction)) => self.columns.push(ColumnSort::new(column, direction)),
            (None, None) => {}
        }
    }

    /// Compares two records under this spec. `Equal` leaves the tie to the
    /// caller's stable sort.
    pub fn compare(&self, a: &UserRecord, b: &UserRecord) -> Ordering {
        for sort in &self.columns {
            let ordering = compare_column(sort.column, a, b);
            let ordering = match sort.direction {
                SortDirection::Ascending => ordering,
                SortDirection::Descending => ordering.reverse(),
            };
            if ordering != Ordering::Equal {
                return ordering;
            }
        }
        Ordering::Equal
    }
}

fn compare_column(column: UserField, a: &UserRecord, b: &UserRecord) -> Ordering {
    match column {
        UserField::Id => a.id.cmp(&b.id),
        _ => natural_cmp(&column.value(a), &column.value(b)),
    }
}

/// Case-insensitive comparison where runs of ASCII digits compare by value,
/// so `user2` sorts before `user10`.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let mut left = Chunks::new(a);
    let mut right = Chunks::new(b);
    loop {
        match (left.next(), right.next()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(l), Some(r)) => {
                let ordering = compare_chunks(l, r);
                if ordering != Ordering::Equal {
                    return ordering;
                }
            }
        }
    }
}

fn compare_chunks(left: &str, right: &str) -> Ordering {
    let is_number = |s: &str| s.as_bytes().first().is_some_and(u8::is_ascii_digit);
    match (is_number(left), is_number(right)) {
        (true, true) => {
            let l = left.trim_start_matches('0');
            let r = right.trim_start_matches('0');
            l.len().cmp(&r.len()).then_with(|| l.cmp(r))
        }
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => left
            .chars()
            .flat_map(char::to_lowercase)
            .cmp(right.chars().flat_map(char::to_lowercase)),
    }
}

/// Splits a string into alternating digit / non-digit runs.
struct Chunks<'a> {
    rest: &'a str,
}

impl<'a> Chunks<'a> {
    fn new(s: &'a str) -> Self {
        Self { rest: s }
    }
}

impl<'a> Iterator for Chunks<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let first = self.rest.chars().next()?;
        let digits = first.is_ascii_digit();
        let end = self
            .rest
            .char_indices()
            .find(|(_, c)| c.is_ascii_digit() != digits)
            .map_or(self.rest.len(), |(index, _)| index);
        let (chunk, rest) = self.rest.split_at(end);
        self.rest = rest;
        Some(chunk)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RecordId;

    fn user(id: u64, name: &str) -> UserRecord {
        UserRecord {
            id: RecordId::Number(id),
            name: name.to_owned(),
            username: format!("user{id}"),
            email: format!("user{id}@example.com"),
            phone: String::new(),
        }
    }

    #[test]
    fn first_click_direction_depends_on_column() {
        let mut sorting = Sorting::default();
        sorting.toggle(UserField::Name, false);
        assert_eq!(
            sorting.columns(),
            &[ColumnSort::new(UserField::Name, SortDirection::Ascending)]
        );

        sorting.toggle(UserField::Id, false);
        assert_eq!(
            sorting.columns(),
            &[ColumnSort::new(UserField::Id, SortDirection::Descending)]
        );
    }

    #[test]
    fn clicks_cycle_through_directions_then_clear() {
        let mut sorting = Sorting::default();
        sorting.toggle(UserField::Email, false);
        assert_eq!(
            sorting.direction_of(UserField::Email),
            Some(SortDirection::Ascending)
        );
        sorting.toggle(UserField::Email, false);
        assert_eq!(
            sorting.direction_of(UserField::Email),
            Some(SortDirection::Descending)
        );
        sorting.toggle(UserField::Email, false);
        assert!(sorting.is_empty());
    }

    #[test]
    fn plain_click_replaces_multi_column_spec() {
        let mut sorting = Sorting::default();
        sorting.toggle(UserField::Name, true);
        sorting.toggle(UserField::Username, true);
        assert_eq!(sorting.columns().len(), 2);

        sorting.toggle(UserField::Phone, false);
        assert_eq!(
            sorting.columns(),
            &[ColumnSort::new(UserField::Phone, SortDirection::Ascending)]
        );
    }

    #[test]
    fn multi_click_adds_flips_and_removes() {
        let mut sorting = Sorting::default();
        sorting.toggle(UserField::Name, true);
        sorting.toggle(UserField::Id, true);
        assert_eq!(sorting.priority_of(UserField::Id), Some(1));

        sorting.toggle(UserField::Name, true);
        assert_eq!(
            sorting.columns(),
            &[
                ColumnSort::new(UserField::Name, SortDirection::Descending),
                ColumnSort::new(UserField::Id, SortDirection::Descending),
            ]
        );

        sorting.toggle(UserField::Name, true);
        assert_eq!(
            sorting.columns(),
            &[ColumnSort::new(UserField::Id, SortDirection::Descending)]
        );
    }

    #[test]
    fn compare_respects_priority_and_direction() {
        let mut sorting = Sorting::default();
        sorting.toggle(UserField::Name, false);
        sorting.toggle(UserField::Id, true);

        let a = user(1, "Same");
        let b = user(2, "Same");
        let c = user(3, "Other");

        assert_eq!(sorting.compare(&a, &b), Ordering::Greater);
        assert_eq!(sorting.compare(&c, &a), Ordering::Less);
        assert_eq!(Sorting::default().compare(&a, &c), Ordering::Equal);
    }

    #[test]
    fn natural_order_is_case_insensitive() {
        assert_eq!(natural_cmp("alice", "Bob"), Ordering::Less);
        assert_eq!(natural_cmp("ALICE", "alice"), Ordering::Equal);
    }

    #[test]
    fn natural_order_compares_digit_runs_by_value() {
        assert_eq!(natural_cmp("user2", "user10"), Ordering::Less);
        assert_eq!(natural_cmp("user010", "user9"), Ordering::Greater);
        assert_eq!(natural_cmp("007", "7"), Ordering::Equal);
        assert_eq!(natural_cmp("1-770", "1-77"), Ordering::Greater);
    }

    #[test]
    fn natural_order_puts_prefixes_first() {
        assert_eq!(natural_cmp("", "a"), Ordering::Less);
        assert_eq!(natural_cmp("abc", "ab"), Ordering::Greater);
        assert_eq!(natural_cmp("1a", "a"), Ordering::Less);
    }
}
