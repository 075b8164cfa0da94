//! List helpers: search filtering and field-based sorting.

use std::cmp::Ordering;

/// Data types that can be matched against a search query.
pub trait Searchable {
    fn matches_filter(&self, filter: &str) -> bool;
}

/// Data types sortable by a named field.
pub trait Sortable {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering;
}

/// Sort in place by the given field.
pub fn sort_list<T: Sortable>(items: &mut Vec<T>, field: &str, ascending: bool) {
    items.sort_by(|a, b| {
        let cmp = a.compare_by_field(b, field);
        if ascending {
            cmp
        } else {
            cmp.reverse()
        }
    });
}

/// Keep only items matching the query; a blank query keeps everything.
pub fn filter_list<T: Searchable>(items: &mut Vec<T>, filter: &str) {
    let filter = filter.trim().to_lowercase();
    if filter.is_empty() {
        return;
    }
    items.retain(|item| item.matches_filter(&filter));
}

/// Sort indicator for a column header.
pub fn sort_indicator(current_field: &str, field: &str, ascending: bool) -> &'static str {
    if current_field != field {
        ""
    } else if ascending {
        " ▲"
    } else {
        " ▼"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Item {
        name: String,
        city: String,
    }

    impl Searchable for Item {
        fn matches_filter(&self, filter: &str) -> bool {
            self.name.to_lowercase().contains(filter) || self.city.to_lowercase().contains(filter)
        }
    }

    impl Sortable for Item {
        fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
            match field {
                "city" => self.city.cmp(&other.city),
                _ => self.name.to_lowercase().cmp(&other.name.to_lowercase()),
            }
        }
    }

    fn items() -> Vec<Item> {
        vec![
            Item {
                name: "Tandoor Tales".into(),
                city: "Pune".into(),
            },
            Item {
                name: "Biryani Bay".into(),
                city: "Chennai".into(),
            },
            Item {
                name: "Momo Junction".into(),
                city: "Pune".into(),
            },
        ]
    }

    #[test]
    fn filter_is_case_insensitive() {
        let mut list = items();
        filter_list(&mut list, "PUNE");
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn blank_filter_keeps_everything() {
        let mut list = items();
        filter_list(&mut list, "   ");
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn sort_by_name_and_reverse() {
        let mut list = items();
        sort_list(&mut list, "name", true);
        assert_eq!(list[0].name, "Biryani Bay");
        sort_list(&mut list, "name", false);
        assert_eq!(list[0].name, "Tandoor Tales");
    }

    #[test]
    fn indicator_only_on_active_column() {
        assert_eq!(sort_indicator("name", "name", true), " ▲");
        assert_eq!(sort_indicator("name", "city", true), "");
    }
}
