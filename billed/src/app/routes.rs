//! Route table: logical paths and the renderer each one uses.

use std::fmt;

use crate::domain::ViewState;
use crate::views::{
    LayoutIcon, RenderContext, bills_ui, dashboard_ui, login_ui, new_bill_ui,
};

/// Signature shared by every page renderer.
pub type RenderFn = fn(&ViewState, &RenderContext) -> String;

/// Logical route identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoutePath {
    /// Landing page with the login forms.
    Login,
    /// Employee bills list.
    Bills,
    /// New bill form.
    NewBill,
    /// Admin dashboard.
    Dashboard,
}

impl RoutePath {
    /// Every route.
    pub const ALL: [Self; 4] = [Self::Login, Self::Bills, Self::NewBill, Self::Dashboard];

    /// Navigation path for the route.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Login => "/",
            Self::Bills => "#employee/bills",
            Self::NewBill => "#employee/bill/new",
            Self::Dashboard => "#admin/dashboard",
        }
    }

    /// Resolve a navigation path.
    ///
    /// # Examples
    /// ```
    /// use billed::app::RoutePath;
    ///
    /// assert_eq!(RoutePath::resolve("#employee/bills"), Some(RoutePath::Bills));
    /// assert_eq!(RoutePath::resolve("#employee/unknown"), None);
    /// ```
    pub fn resolve(path: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|route| route.as_str() == path)
    }

    /// Navigation icon highlighted while this route is shown.
    pub fn layout_icon(self) -> Option<LayoutIcon> {
        match self {
            Self::Bills => Some(LayoutIcon::Window),
            Self::NewBill => Some(LayoutIcon::Mail),
            Self::Login | Self::Dashboard => None,
        }
    }
}

/// One entry of the route table.
#[derive(Clone, Copy)]
pub struct Route {
    /// Path the entry answers to.
    pub path: RoutePath,
    /// Page renderer.
    pub render: RenderFn,
    /// Whether the page shows bills fetched from the gateway.
    pub fetches_bills: bool,
}

impl fmt::Debug for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Route")
            .field("path", &self.path)
            .field("fetches_bills", &self.fetches_bills)
            .finish_non_exhaustive()
    }
}

/// Static mapping of paths to renderers.
#[derive(Debug, Clone)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::new(vec![
            Route {
                path: RoutePath::Login,
                render: login_ui::render,
                fetches_bills: false,
            },
            Route {
                path: RoutePath::Bills,
                render: bills_ui::render,
                fetches_bills: true,
            },
            Route {
                path: RoutePath::NewBill,
                render: new_bill_ui::render,
                fetches_bills: false,
            },
            Route {
                path: RoutePath::Dashboard,
                render: dashboard_ui::render,
                fetches_bills: true,
            },
        ])
    }
}

impl RouteTable {
    /// Build a table from explicit entries. Earlier entries win on duplicates.
    pub fn new(routes: Vec<Route>) -> Self {
        Self { routes }
    }

    /// Find the entry for `path`.
    pub fn resolve(&self, path: &str) -> Option<&Route> {
        let route_path = RoutePath::resolve(path)?;
        self.routes.iter().find(|route| route.path == route_path)
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("/", RoutePath::Login, false)]
    #[case("#employee/bills", RoutePath::Bills, true)]
    #[case("#employee/bill/new", RoutePath::NewBill, false)]
    #[case("#admin/dashboard", RoutePath::Dashboard, true)]
    fn default_table_resolves_known_paths(
        #[case] path: &str,
        #[case] expected: RoutePath,
        #[case] fetches: bool,
    ) {
        let table = RouteTable::default();
        let route = table.resolve(path).expect("known path");
        assert_eq!(route.path, expected);
        assert_eq!(route.fetches_bills, fetches);
    }

    #[rstest]
    #[case("")]
    #[case("#employee/bills/")]
    #[case("/employee/bills")]
    #[case("#EMPLOYEE/BILLS")]
    fn unknown_paths_do_not_resolve(#[case] path: &str) {
        assert!(RouteTable::default().resolve(path).is_none());
    }

    #[test]
    fn table_without_entry_does_not_resolve_known_path() {
        let table = RouteTable::new(Vec::new());
        assert!(table.resolve(RoutePath::Bills.as_str()).is_none());
    }
}
