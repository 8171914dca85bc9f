//! Stops (stations) served by routes.

use std::fmt;

use super::StopId;

/// A named station that may belong to one or more routes.
///
/// Field order drives the derived ordering: stops sort by display name, then
/// by id, which keeps every listing and search iteration reproducible.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Stop {
    /// Display name, e.g. "Park Street".
    pub name: String,
    /// Stable identifier from the data source.
    pub id: StopId,
}

impl Stop {
    /// Create a new stop.
    pub fn new(id: StopId, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            id,
        }
    }
}

impl fmt::Display for Stop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stop(id: &str, name: &str) -> Stop {
        Stop::new(StopId::parse(id).unwrap(), name)
    }

    #[test]
    fn orders_by_name_then_id() {
        let mut stops = vec![
            stop("place-pktrm", "Park Street"),
            stop("place-asmnl", "Ashmont"),
            stop("b", "Arlington"),
            stop("a", "Arlington"),
        ];
        stops.sort();

        let ids: Vec<&str> = stops.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "place-asmnl", "place-pktrm"]);
    }

    #[test]
    fn display_is_name() {
        assert_eq!(stop("place-pktrm", "Park Street").to_string(), "Park Street");
    }
}
