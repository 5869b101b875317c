//! Core types describing a discrete negotiation domain and its bids

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Stable issue number, unique within a domain
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IssueId(pub u32);

impl fmt::Display for IssueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One discrete value admissible for an issue
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Value(pub String);

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value(s.to_string())
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A discrete negotiable attribute
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    pub id: IssueId,
    pub name: String,
    pub values: Vec<Value>,
}

impl Issue {
    pub fn new(id: u32, name: &str, values: &[&str]) -> Self {
        Self {
            id: IssueId(id),
            name: name.to_string(),
            values: values.iter().map(|v| Value::from(*v)).collect(),
        }
    }

    /// Check whether `value` is admissible for this issue
    pub fn admits(&self, value: &Value) -> bool {
        self.values.contains(value)
    }
}

/// Ordered collection of discrete issues
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Domain {
    pub issues: Vec<Issue>,
}

impl Domain {
    pub fn new(issues: Vec<Issue>) -> Self {
        Self { issues }
    }

    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }

    pub fn issue(&self, id: IssueId) -> Option<&Issue> {
        self.issues.iter().find(|issue| issue.id == id)
    }

    pub fn issue_by_name(&self, name: &str) -> Option<&Issue> {
        self.issues.iter().find(|issue| issue.name == name)
    }

    pub fn issue_count(&self) -> usize {
        self.issues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    /// Number of distinct bids in the domain (saturating)
    pub fn bid_space_size(&self) -> u64 {
        self.issues
            .iter()
            .fold(1u64, |acc, issue| acc.saturating_mul(issue.values.len() as u64))
    }
}

/// One full assignment of values to issues
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Bid {
    values: BTreeMap<IssueId, Value>,
}

impl Bid {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: assign `value` to `issue`
    pub fn with(mut self, issue: u32, value: &str) -> Self {
        self.values.insert(IssueId(issue), Value::from(value));
        self
    }

    /// Value assigned to `issue`, if any
    pub fn value(&self, issue: IssueId) -> Option<&Value> {
        self.values.get(&issue)
    }

    /// Issues this bid assigns, in ascending order
    pub fn issues(&self) -> impl Iterator<Item = IssueId> + '_ {
        self.values.keys().copied()
    }

    pub fn assignments(&self) -> impl Iterator<Item = (IssueId, &Value)> {
        self.values.iter().map(|(issue, value)| (*issue, value))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl FromIterator<(IssueId, Value)> for Bid {
    fn from_iter<I: IntoIterator<Item = (IssueId, Value)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for Bid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, (issue, value)) in self.values.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}={}", issue, value)?;
        }
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn holiday_domain() -> Domain {
        Domain::new(vec![
            Issue::new(1, "location", &["beach", "mountains", "city"]),
            Issue::new(2, "duration", &["week", "fortnight"]),
        ])
    }

    #[test]
    fn test_domain_lookup() {
        let domain = holiday_domain();

        assert_eq!(domain.issue_count(), 2);
        assert_eq!(domain.issue(IssueId(2)).unwrap().name, "duration");
        assert_eq!(domain.issue_by_name("location").unwrap().id, IssueId(1));
        assert!(domain.issue(IssueId(9)).is_none());
        assert_eq!(domain.bid_space_size(), 6);
    }

    #[test]
    fn test_issue_admits() {
        let domain = holiday_domain();
        let location = domain.issue(IssueId(1)).unwrap();

        assert!(location.admits(&Value::from("city")));
        assert!(!location.admits(&Value::from("desert")));
    }

    #[test]
    fn test_bid_builder() {
        let bid = Bid::new().with(2, "week").with(1, "beach");

        assert_eq!(bid.len(), 2);
        assert_eq!(bid.value(IssueId(1)), Some(&Value::from("beach")));
        assert_eq!(bid.issues().collect::<Vec<_>>(), vec![IssueId(1), IssueId(2)]);
        assert_eq!(bid.to_string(), "(1=beach, 2=week)");
    }

    #[test]
    fn test_bid_json_shape() {
        let bid = Bid::new().with(1, "beach").with(2, "week");

        let serialized = serde_json::to_string(&bid).unwrap();
        assert_eq!(serialized, r#"{"1":"beach","2":"week"}"#);

        let deserialized: Bid = serde_json::from_str(&serialized).unwrap();
        assert_eq!(bid, deserialized);
    }

    #[test]
    fn test_domain_from_json() {
        let json = r#"{
            "issues": [
                { "id": 4, "name": "color", "values": ["red", "blue"] }
            ]
        }"#;

        let domain: Domain = serde_json::from_str(json).unwrap();
        assert_eq!(domain.issue_count(), 1);
        assert_eq!(domain.issues()[0].values, vec![Value::from("red"), Value::from("blue")]);
    }
}
