use serde::Deserialize;

use super::domain::Employee;

/// List-view constraints. Empty strings behave like absent constraints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RosterQuery {
    pub search: String,
    pub department_id: Option<String>,
    pub position_id: Option<String>,
}

impl RosterQuery {
    pub fn new(search: &str, department_id: Option<&str>, position_id: Option<&str>) -> Self {
        Self {
            search: search.to_string(),
            department_id: department_id.map(str::to_string),
            position_id: position_id.map(str::to_string),
        }
    }

    pub fn is_unconstrained(&self) -> bool {
        self.search.is_empty()
            && constraint(&self.department_id).is_none()
            && constraint(&self.position_id).is_none()
    }

    pub fn matches(&self, employee: &Employee) -> bool {
        self.prepared().matches(employee)
    }

    /// Matching records in their original order.
    pub fn apply<'a>(&self, records: &'a [Employee]) -> Vec<&'a Employee> {
        let prepared = self.prepared();
        records
            .iter()
            .filter(|employee| prepared.matches(employee))
            .collect()
    }

    fn prepared(&self) -> PreparedQuery<'_> {
        PreparedQuery {
            needle: self.search.to_lowercase(),
            department_id: constraint(&self.department_id),
            position_id: constraint(&self.position_id),
        }
    }
}

fn constraint(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|value| !value.is_empty())
}

struct PreparedQuery<'q> {
    needle: String,
    department_id: Option<&'q str>,
    position_id: Option<&'q str>,
}

impl PreparedQuery<'_> {
    fn matches(&self, employee: &Employee) -> bool {
        let name_match =
            self.needle.is_empty() || employee.full_name.to_lowercase().contains(&self.needle);
        let department_match = self
            .department_id
            .map_or(true, |id| employee.department_id == id);
        let position_match = self
            .position_id
            .map_or(true, |id| employee.position_id == id);
        name_match && department_match && position_match
    }
}

/// Owned variant of [`RosterQuery::apply`] for callers holding a snapshot.
pub fn filter(
    records: &[Employee],
    search_term: &str,
    department_id: Option<&str>,
    position_id: Option<&str>,
) -> Vec<Employee> {
    RosterQuery::new(search_term, department_id, position_id)
        .apply(records)
        .into_iter()
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::personnel::reference::ReferenceCatalog;

    fn employee(name: &str, department: &str, position: &str) -> Employee {
        let mut employee = Employee::blank(&ReferenceCatalog::standard());
        employee.id = name.into();
        employee.full_name = name.to_string();
        employee.department_id = department.to_string();
        employee.position_id = position.to_string();
        employee
    }

    fn roster() -> Vec<Employee> {
        vec![
            employee("Nguyễn Văn An", "noi", "bs"),
            employee("Trần Thị Bình", "nhi", "dd"),
            employee("Lê Hoàng Anh", "noi", "dd"),
            employee("ĐẶNG THỊ LAN", "san", "dd"),
        ]
    }

    fn names(records: &[Employee]) -> Vec<&str> {
        records.iter().map(|e| e.full_name.as_str()).collect()
    }

    #[test]
    fn empty_query_returns_everything_in_order() {
        let records = roster();
        let filtered = filter(&records, "", None, None);
        assert_eq!(filtered, records);
        assert!(RosterQuery::default().is_unconstrained());
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let records = vec![
            employee("Nguyễn Văn An", "noi", "bs"),
            employee("Trần Thị Bình", "nhi", "dd"),
        ];
        let filtered = filter(&records, "an", None, None);
        assert_eq!(names(&filtered), vec!["Nguyễn Văn An"]);
    }

    #[test]
    fn search_folds_vietnamese_capitals() {
        let records = roster();
        let filtered = filter(&records, "đặng", None, None);
        assert_eq!(names(&filtered), vec!["ĐẶNG THỊ LAN"]);
    }

    #[test]
    fn constraints_combine_with_and() {
        let records = roster();
        assert_eq!(
            names(&filter(&records, "", Some("noi"), None)),
            vec!["Nguyễn Văn An", "Lê Hoàng Anh"]
        );
        assert_eq!(
            names(&filter(&records, "", Some("noi"), Some("dd"))),
            vec!["Lê Hoàng Anh"]
        );
        assert_eq!(
            names(&filter(&records, "an", None, Some("dd"))),
            vec!["Lê Hoàng Anh", "ĐẶNG THỊ LAN"]
        );
        assert!(filter(&records, "bình", Some("noi"), None).is_empty());
    }

    #[test]
    fn empty_constraints_are_ignored() {
        let records = roster();
        assert_eq!(filter(&records, "", Some(""), Some("")), records);
    }

    #[test]
    fn filtering_twice_changes_nothing() {
        let records = roster();
        let once = filter(&records, "an", Some("noi"), None);
        let twice = filter(&once, "an", Some("noi"), None);
        assert_eq!(once, twice);
    }

    #[test]
    fn query_deserializes_with_defaults() {
        let query: RosterQuery =
            serde_json::from_str(r#"{"department_id":"nhi"}"#).expect("valid query");
        assert_eq!(query.search, "");
        assert_eq!(query.department_id.as_deref(), Some("nhi"));
        assert!(query.position_id.is_none());
    }
}
