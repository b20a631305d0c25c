//! Route paths
//!
//! Paths encode the resource hierarchy:
//!
//! ```text
//! /
//! /assets
//! /assets/{asset}
//! /assets/{asset}/buildings/{building}
//! /assets/{asset}/buildings/{building}/estates/{estate}
//! /transactions
//! /transactions/new
//! /transactions/{id}
//! ```

use std::fmt;
use std::str::FromStr;

use crate::error::DealDeskError;
use crate::models::{AssetId, BuildingId, EstateId, TransactionId};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Route {
    Dashboard,
    Assets,
    Asset(AssetId),
    Building(AssetId, BuildingId),
    Estate(AssetId, BuildingId, EstateId),
    Transactions,
    NewTransaction,
    Transaction(TransactionId),
}

impl Route {
    /// Parse a path such as `/assets/1/buildings/b1`
    ///
    /// Trailing slashes and a missing leading slash are tolerated.
    pub fn parse(path: &str) -> Result<Self, DealDeskError> {
        let segments: Vec<&str> = path
            .trim()
            .split('/')
            .filter(|s| !s.is_empty())
            .collect();

        let route = match segments.as_slice() {
            [] => Route::Dashboard,
            ["assets"] => Route::Assets,
            ["assets", a] => Route::Asset(AssetId::new(*a)),
            ["assets", a, "buildings", b] => Route::Building(AssetId::new(*a), BuildingId::new(*b)),
            ["assets", a, "buildings", b, "estates", e] => {
                Route::Estate(AssetId::new(*a), BuildingId::new(*b), EstateId::new(*e))
            }
            ["transactions"] => Route::Transactions,
            ["transactions", "new"] => Route::NewTransaction,
            ["transactions", id] => Route::Transaction(TransactionId::new(*id)),
            _ => return Err(DealDeskError::Route(path.to_string())),
        };

        Ok(route)
    }

    /// The enclosing route, if any
    pub fn parent(&self) -> Option<Route> {
        match self {
            Route::Dashboard => None,
            Route::Assets | Route::Transactions => Some(Route::Dashboard),
            Route::Asset(_) => Some(Route::Assets),
            Route::Building(a, _) => Some(Route::Asset(a.clone())),
            Route::Estate(a, b, _) => Some(Route::Building(a.clone(), b.clone())),
            Route::NewTransaction | Route::Transaction(_) => Some(Route::Transactions),
        }
    }

    /// Breadcrumb trail from the dashboard down to this route
    pub fn breadcrumbs(&self) -> Vec<Route> {
        let mut trail = vec![self.clone()];
        let mut current = self.parent();
        while let Some(route) = current {
            current = route.parent();
            trail.push(route);
        }
        trail.reverse();
        trail
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::Dashboard => write!(f, "/"),
            Route::Assets => write!(f, "/assets"),
            Route::Asset(a) => write!(f, "/assets/{}", a),
            Route::Building(a, b) => write!(f, "/assets/{}/buildings/{}", a, b),
            Route::Estate(a, b, e) => write!(f, "/assets/{}/buildings/{}/estates/{}", a, b, e),
            Route::Transactions => write!(f, "/transactions"),
            Route::NewTransaction => write!(f, "/transactions/new"),
            Route::Transaction(id) => write!(f, "/transactions/{}", id),
        }
    }
}

impl FromStr for Route {
    type Err = DealDeskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Route::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hierarchy() {
        assert_eq!(Route::parse("/").unwrap(), Route::Dashboard);
        assert_eq!(Route::parse("/assets/").unwrap(), Route::Assets);
        assert_eq!(
            Route::parse("/assets/1/buildings/b1/estates/e1").unwrap(),
            Route::Estate("1".into(), "b1".into(), "e1".into())
        );
        assert_eq!(Route::parse("transactions/new").unwrap(), Route::NewTransaction);
        assert_eq!(
            Route::parse("/transactions/3").unwrap(),
            Route::Transaction("3".into())
        );
    }

    #[test]
    fn test_unknown_path() {
        let err = Route::parse("/assets/1/floors/2").unwrap_err();
        assert_eq!(err.to_string(), "Unknown route: /assets/1/floors/2");
        assert!(Route::parse("/reports").is_err());
    }

    #[test]
    fn test_display_matches_parse() {
        for path in [
            "/",
            "/assets",
            "/assets/2",
            "/assets/1/buildings/b2",
            "/transactions/new",
        ] {
            assert_eq!(Route::parse(path).unwrap().to_string(), path);
        }
    }

    #[test]
    fn test_breadcrumbs() {
        let route = Route::parse("/assets/1/buildings/b1/estates/e2").unwrap();
        let trail: Vec<String> = route.breadcrumbs().iter().map(|r| r.to_string()).collect();
        assert_eq!(
            trail,
            vec![
                "/",
                "/assets",
                "/assets/1",
                "/assets/1/buildings/b1",
                "/assets/1/buildings/b1/estates/e2"
            ]
        );
    }
}
