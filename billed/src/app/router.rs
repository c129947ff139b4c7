//! Router: resolves navigation paths, renders pages, and binds controls.
//!
//! The router owns the root document. Each navigation renders from scratch;
//! fetching routes commit the Loading page first and the result once the
//! gateway resolves. A navigation superseded while its fetch is in flight has
//! its result discarded.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

use async_trait::async_trait;
use tracing::{debug, info, warn};

use super::bills_container::BillsContainer;
use super::routes::{Route, RoutePath, RouteTable};
use crate::domain::ports::{BillsGateway, KeyValueStorage, ModalController, Navigator};
use crate::domain::{Identity, USER_STORAGE_KEY, ViewState, sort_anti_chrono};
use crate::views::markers::{BTN_NEW_BILL, ICON_EYE};
use crate::views::{RenderContext, login_ui, not_found};

/// Collaborators the router renders with.
#[derive(Clone)]
pub struct RouterPorts {
    /// Session storage holding the persisted identity.
    pub storage: Arc<dyn KeyValueStorage>,
    /// Data gateway for fetching routes. `None` renders empty lists.
    pub gateway: Option<Arc<dyn BillsGateway>>,
    /// Receipt preview modal.
    pub modal: Arc<dyn ModalController>,
}

/// Navigation state of the router.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouterState {
    /// Nothing has been rendered yet.
    Unrouted,
    /// The page for this path is displayed.
    Routed(String),
}

/// Failure dispatching a click.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClickError {
    /// No handler is bound to the requested control.
    #[error("no handler bound to control {marker}[{index}]")]
    Unbound {
        /// Marker of the requested control.
        marker: String,
        /// Position among controls sharing the marker.
        index: usize,
    },
}

#[derive(Debug, Clone)]
enum Handler {
    NewBill,
    IconEye { bill_url: Option<String> },
}

#[derive(Clone)]
struct Control {
    marker: &'static str,
    handler: Handler,
    container: Arc<BillsContainer>,
}

struct Document {
    state: RouterState,
    root: String,
    controls: Vec<Control>,
}

struct RouterInner {
    routes: RouteTable,
    ports: RouterPorts,
    document: Mutex<Document>,
    history: Mutex<Vec<String>>,
    generation: AtomicU64,
}

/// Renders pages into the root document. Cloning shares the document.
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use billed::app::{Router, RouterPorts, RouterState};
/// use billed::outbound::{InlineModal, MemoryStorage};
///
/// let router = Router::new(RouterPorts {
///     storage: Arc::new(MemoryStorage::default()),
///     gateway: None,
///     modal: Arc::new(InlineModal::new(500)),
/// });
/// assert_eq!(router.state(), RouterState::Unrouted);
/// ```
#[derive(Clone)]
pub struct Router {
    inner: Arc<RouterInner>,
}

impl Router {
    /// Router over the default route table.
    pub fn new(ports: RouterPorts) -> Self {
        Self::with_routes(ports, RouteTable::default())
    }

    /// Router over an explicit route table.
    pub fn with_routes(ports: RouterPorts, routes: RouteTable) -> Self {
        Self {
            inner: Arc::new(RouterInner {
                routes,
                ports,
                document: Mutex::new(Document {
                    state: RouterState::Unrouted,
                    root: String::new(),
                    controls: Vec::new(),
                }),
                history: Mutex::new(Vec::new()),
                generation: AtomicU64::new(0),
            }),
        }
    }

    /// Current root document content.
    pub fn root_html(&self) -> String {
        self.inner.document().root.clone()
    }

    /// Current navigation state.
    pub fn state(&self) -> RouterState {
        self.inner.document().state.clone()
    }

    /// Path of the displayed page, when routed.
    pub fn current_route(&self) -> Option<String> {
        match self.state() {
            RouterState::Unrouted => None,
            RouterState::Routed(path) => Some(path),
        }
    }

    /// Number of bound controls carrying `marker`.
    pub fn control_count(&self, marker: &str) -> usize {
        self.inner
            .document()
            .controls
            .iter()
            .filter(|control| control.marker == marker)
            .count()
    }

    /// Navigated paths, oldest first.
    pub fn history(&self) -> Vec<String> {
        self.inner.history().clone()
    }

    /// Navigate to `path` and render the matching page.
    pub async fn navigate(&self, path: &str) {
        let generation = self.inner.next_generation();
        self.inner.history().push(path.to_owned());
        info!(path, generation, "navigating");
        self.render(path, generation).await;
    }

    /// Return to the previous location.
    ///
    /// Without a signed-in identity the login page is shown instead.
    pub async fn back(&self) {
        let generation = self.inner.next_generation();
        let previous = {
            let mut history = self.inner.history();
            history.pop();
            history.last().cloned()
        };
        match (previous, self.inner.identity()) {
            (Some(path), Some(_)) => {
                info!(path, generation, "navigating back");
                self.render(&path, generation).await;
            }
            _ => {
                debug!(generation, "back without identity or history; showing login");
                self.inner.commit_login(generation);
            }
        }
    }

    /// Dispatch a click on the `index`th control carrying `marker`.
    pub async fn click(&self, marker: &str, index: usize) -> Result<(), ClickError> {
        let control = self.inner.control(marker, index)?;
        debug!(marker, index, "dispatching click");
        match control.handler {
            Handler::NewBill => control.container.handle_click_new_bill().await,
            Handler::IconEye { bill_url } => {
                control.container.handle_click_icon_eye(bill_url.as_deref());
            }
        }
        Ok(())
    }

    async fn render(&self, path: &str, generation: u64) {
        let identity = self.inner.identity();
        let Some(route) = self.inner.routes.resolve(path).copied() else {
            warn!(path, "no route matches path");
            let ctx = RenderContext {
                role: identity.as_ref().map(Identity::role),
                active_icon: None,
            };
            self.inner
                .commit(generation, path, not_found::render(path, &ctx), Vec::new());
            return;
        };
        let Some(identity) = identity else {
            self.inner.commit_login(generation);
            return;
        };

        let ctx = RenderContext::new(identity.role(), route.path.layout_icon());
        if !route.fetches_bills {
            let markup = (route.render)(&ViewState::empty(), &ctx);
            self.inner.commit(generation, path, markup, Vec::new());
            return;
        }

        self.inner.commit(
            generation,
            path,
            (route.render)(&ViewState::Loading, &ctx),
            Vec::new(),
        );
        let container = Arc::new(BillsContainer::new(
            self.inner.ports.gateway.clone(),
            Arc::clone(&self.inner.ports.modal),
            Arc::new(RouterHandle {
                inner: Arc::downgrade(&self.inner),
            }),
        ));
        let state = match container.get_bills().await {
            Ok(mut rows) => {
                sort_anti_chrono(&mut rows);
                ViewState::Normal(rows)
            }
            Err(error) => {
                warn!(path, %error, "bills fetch failed");
                ViewState::Error(error.message().to_owned())
            }
        };
        let controls = bind_controls(&route, &identity, &state, &container);
        self.inner
            .commit(generation, path, (route.render)(&state, &ctx), controls);
    }
}

#[async_trait]
impl Navigator for Router {
    async fn on_navigate(&self, path: &str) {
        self.navigate(path).await;
    }
}

impl RouterInner {
    fn document(&self) -> MutexGuard<'_, Document> {
        self.document.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn history(&self) -> MutexGuard<'_, Vec<String>> {
        self.history.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn next_generation(&self) -> u64 {
        self.generation.fetch_add(1, Ordering::SeqCst) + 1
    }

    fn identity(&self) -> Option<Identity> {
        let raw = match self.ports.storage.get(USER_STORAGE_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(error) => {
                warn!(%error, "identity unreadable; treating as signed out");
                return None;
            }
        };
        match Identity::from_stored(&raw) {
            Ok(identity) => Some(identity),
            Err(error) => {
                warn!(%error, "identity malformed; treating as signed out");
                None
            }
        }
    }

    fn control(&self, marker: &str, index: usize) -> Result<Control, ClickError> {
        self.document()
            .controls
            .iter()
            .filter(|control| control.marker == marker)
            .nth(index)
            .cloned()
            .ok_or_else(|| ClickError::Unbound {
                marker: marker.to_owned(),
                index,
            })
    }

    fn commit_login(&self, generation: u64) {
        let markup = login_ui::render(&ViewState::empty(), &RenderContext::default());
        self.commit(generation, RoutePath::Login.as_str(), markup, Vec::new());
    }

    fn commit(&self, generation: u64, path: &str, root: String, controls: Vec<Control>) {
        let mut document = self.document();
        let current = self.generation.load(Ordering::SeqCst);
        if current != generation {
            debug!(path, generation, current, "discarding superseded render");
            return;
        }
        document.state = RouterState::Routed(path.to_owned());
        document.root = root;
        document.controls = controls;
    }
}

fn bind_controls(
    route: &Route,
    identity: &Identity,
    state: &ViewState,
    container: &Arc<BillsContainer>,
) -> Vec<Control> {
    if route.path != RoutePath::Bills {
        return Vec::new();
    }
    let control = |marker, handler| Control {
        marker,
        handler,
        container: Arc::clone(container),
    };
    let new_bill = identity
        .is_employee()
        .then(|| control(BTN_NEW_BILL, Handler::NewBill));
    let previews = state.rows().iter().map(|row| {
        control(
            ICON_EYE,
            Handler::IconEye {
                bill_url: row.file_url.clone(),
            },
        )
    });
    new_bill.into_iter().chain(previews).collect()
}

/// Navigator handed to containers. Holds the router weakly so the
/// container's bound controls do not keep the router alive.
struct RouterHandle {
    inner: Weak<RouterInner>,
}

#[async_trait]
impl Navigator for RouterHandle {
    async fn on_navigate(&self, path: &str) {
        match self.inner.upgrade() {
            Some(inner) => Router { inner }.navigate(path).await,
            None => debug!(path, "router dropped; ignoring navigation"),
        }
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use crate::domain::ports::{
        BillsGatewayError, FixtureBillsGateway, MockBillsGateway, MockKeyValueStorage,
        MockModalController, StorageError, fixture_bills,
    };
    use crate::domain::Bill;
    use crate::outbound::{InlineModal, MemoryStorage};
    use crate::views::markers::{ERROR_MESSAGE, FORM_EMPLOYEE, FORM_NEW_BILL, NOT_FOUND, TBODY};
    use rstest::rstest;
    use std::sync::atomic::AtomicUsize;
    use tokio::sync::Notify;

    fn ports(storage: MemoryStorage, gateway: Option<Arc<dyn BillsGateway>>) -> RouterPorts {
        RouterPorts {
            storage: Arc::new(storage),
            gateway,
            modal: Arc::new(InlineModal::new(500)),
        }
    }

    fn signed_in(identity: &Identity) -> MemoryStorage {
        MemoryStorage::from_identity(identity).expect("identity encodes")
    }

    fn fixtures() -> Option<Arc<dyn BillsGateway>> {
        Some(Arc::new(FixtureBillsGateway))
    }

    #[tokio::test]
    async fn bills_route_renders_sorted_rows_for_employee() {
        let router = Router::new(ports(signed_in(&Identity::employee("a@a")), fixtures()));

        router.navigate(RoutePath::Bills.as_str()).await;

        let root = router.root_html();
        assert!(root.contains(TBODY));
        let recent = root.find("4 Avr. 04").expect("2004 row");
        let oldest = root.find("1 Jan. 01").expect("2001 row");
        assert!(recent < oldest, "rows not sorted most recent first");
        assert_eq!(router.state(), RouterState::Routed("#employee/bills".to_owned()));
        assert_eq!(router.control_count(BTN_NEW_BILL), 1);
        assert_eq!(router.control_count(ICON_EYE), fixture_bills().len());
    }

    #[tokio::test]
    async fn admin_on_bills_gets_no_new_bill_handler() {
        let router = Router::new(ports(signed_in(&Identity::admin("admin@a")), fixtures()));
        router.navigate(RoutePath::Bills.as_str()).await;

        assert_eq!(router.control_count(BTN_NEW_BILL), 0);
        let error = router.click(BTN_NEW_BILL, 0).await.expect_err("unbound");
        assert_eq!(
            error,
            ClickError::Unbound {
                marker: BTN_NEW_BILL.to_owned(),
                index: 0
            }
        );
    }

    #[rstest]
    #[case(MemoryStorage::default())]
    #[case(MemoryStorage::with_entry(USER_STORAGE_KEY, "{not json"))]
    #[case(MemoryStorage::with_entry(USER_STORAGE_KEY, r#"{"type":"Visitor"}"#))]
    #[tokio::test]
    async fn missing_or_malformed_identity_shows_login(#[case] storage: MemoryStorage) {
        let router = Router::new(ports(storage, fixtures()));
        router.navigate(RoutePath::Bills.as_str()).await;

        assert!(router.root_html().contains(FORM_EMPLOYEE));
        assert_eq!(router.current_route().as_deref(), Some("/"));
        assert_eq!(router.control_count(ICON_EYE), 0);
    }

    #[tokio::test]
    async fn storage_failure_shows_login() {
        let mut storage = MockKeyValueStorage::new();
        storage
            .expect_get()
            .returning(|_| Err(StorageError::unavailable("disk gone")));
        let router = Router::new(RouterPorts {
            storage: Arc::new(storage),
            gateway: fixtures(),
            modal: Arc::new(InlineModal::new(500)),
        });

        router.navigate(RoutePath::Bills.as_str()).await;
        assert!(router.root_html().contains(FORM_EMPLOYEE));
    }

    #[tokio::test]
    async fn unknown_path_renders_not_found() {
        let router = Router::new(ports(signed_in(&Identity::employee("a@a")), fixtures()));
        router.navigate("#employee/unknown").await;

        let root = router.root_html();
        assert!(root.contains(NOT_FOUND));
        assert!(root.contains("#employee/unknown"));
        assert_eq!(router.current_route().as_deref(), Some("#employee/unknown"));
    }

    #[rstest]
    #[case("Erreur 404")]
    #[case("Erreur 500")]
    #[tokio::test]
    async fn gateway_failure_renders_error_page(#[case] message: &'static str) {
        let mut gateway = MockBillsGateway::new();
        gateway
            .expect_list()
            .times(1)
            .returning(move || Err(BillsGatewayError::network_or_server(message)));
        let router = Router::new(ports(
            signed_in(&Identity::employee("a@a")),
            Some(Arc::new(gateway)),
        ));

        router.navigate(RoutePath::Bills.as_str()).await;

        let root = router.root_html();
        assert!(root.contains(ERROR_MESSAGE));
        assert!(root.contains(message));
        assert!(!root.contains(TBODY));
        assert_eq!(router.control_count(ICON_EYE), 0);
    }

    #[tokio::test]
    async fn new_bill_click_navigates_to_form() {
        let router = Router::new(ports(signed_in(&Identity::employee("a@a")), fixtures()));
        router.navigate(RoutePath::Bills.as_str()).await;

        router.click(BTN_NEW_BILL, 0).await.expect("bound handler");

        assert!(router.root_html().contains(FORM_NEW_BILL));
        assert!(router.root_html().contains("data-testid=\"icon-mail\" class=\"active-icon\""));
        assert_eq!(router.history(), ["#employee/bills", "#employee/bill/new"]);
    }

    #[tokio::test]
    async fn eye_click_opens_modal_once() {
        let mut modal = MockModalController::new();
        modal.expect_width().return_const(500_u32);
        modal
            .expect_open()
            .withf(|content| {
                content.bill_url.ends_with("preview-facture-free-201801-pdf-1.jpg")
                    && content.image_width == 250
            })
            .times(1)
            .return_const(());
        let router = Router::new(RouterPorts {
            storage: Arc::new(signed_in(&Identity::employee("a@a"))),
            gateway: fixtures(),
            modal: Arc::new(modal),
        });
        router.navigate(RoutePath::Bills.as_str()).await;

        router.click(ICON_EYE, 0).await.expect("bound handler");
    }

    #[tokio::test]
    async fn back_returns_to_previous_route() {
        let router = Router::new(ports(signed_in(&Identity::employee("a@a")), fixtures()));
        router.navigate(RoutePath::Bills.as_str()).await;
        router.navigate(RoutePath::NewBill.as_str()).await;

        router.back().await;

        assert_eq!(router.current_route().as_deref(), Some("#employee/bills"));
        assert!(router.root_html().contains(TBODY));
        assert_eq!(router.history(), ["#employee/bills"]);
    }

    #[tokio::test]
    async fn back_without_identity_shows_login() {
        let storage = Arc::new(signed_in(&Identity::employee("a@a")));
        let router = Router::new(RouterPorts {
            storage: storage.clone(),
            gateway: fixtures(),
            modal: Arc::new(InlineModal::new(500)),
        });
        router.navigate(RoutePath::Bills.as_str()).await;
        router.navigate(RoutePath::NewBill.as_str()).await;
        storage.remove(USER_STORAGE_KEY).expect("remove");

        router.back().await;

        assert!(router.root_html().contains(FORM_EMPLOYEE));
        assert_eq!(router.current_route().as_deref(), Some("/"));
    }

    #[tokio::test]
    async fn dashboard_groups_bills_for_admin() {
        let router = Router::new(ports(signed_in(&Identity::admin("admin@a")), fixtures()));
        router.navigate(RoutePath::Dashboard.as_str()).await;

        let root = router.root_html();
        assert!(root.contains("dashboard-status-refused\"><h3> Refused (2) </h3>"));
        assert_eq!(router.control_count(ICON_EYE), 0);
        assert_eq!(router.state(), RouterState::Routed(RoutePath::Dashboard.as_str().to_owned()));
    }

    #[tokio::test]
    async fn empty_route_table_renders_not_found() {
        let router = Router::with_routes(
            ports(signed_in(&Identity::employee("a@a")), fixtures()),
            RouteTable::new(Vec::new()),
        );
        router.navigate(RoutePath::Bills.as_str()).await;
        assert!(router.root_html().contains(NOT_FOUND));
    }

    #[tokio::test]
    async fn missing_gateway_renders_empty_table() {
        let router = Router::new(ports(signed_in(&Identity::employee("a@a")), None));
        router.navigate(RoutePath::Bills.as_str()).await;

        assert!(router.root_html().contains("<tbody data-testid=\"tbody\"></tbody>"));
        assert_eq!(router.control_count(ICON_EYE), 0);
    }

    struct GatedGateway {
        gate: Arc<Notify>,
        calls: AtomicUsize,
    }

    #[async_trait]
    impl BillsGateway for GatedGateway {
        async fn list(&self) -> Result<Vec<Bill>, BillsGatewayError> {
            if self.calls.fetch_add(1, Ordering::SeqCst) == 0 {
                self.gate.notified().await;
                return Err(BillsGatewayError::network_or_server("late failure"));
            }
            Ok(fixture_bills())
        }
    }

    #[tokio::test]
    async fn superseded_fetch_result_is_discarded() {
        let gate = Arc::new(Notify::new());
        let gateway = GatedGateway {
            gate: gate.clone(),
            calls: AtomicUsize::new(0),
        };
        let router = Router::new(ports(
            signed_in(&Identity::employee("a@a")),
            Some(Arc::new(gateway)),
        ));

        let first = router.navigate(RoutePath::Bills.as_str());
        let second = async {
            router.navigate(RoutePath::Bills.as_str()).await;
            gate.notify_one();
        };
        tokio::join!(first, second);

        let root = router.root_html();
        assert!(!root.contains("late failure"));
        assert!(root.contains(TBODY));
        assert_eq!(router.control_count(ICON_EYE), fixture_bills().len());
    }

    #[tokio::test]
    async fn fetching_route_shows_loading_until_resolved() {
        let gate = Arc::new(Notify::new());
        let gateway = GatedGateway {
            gate: gate.clone(),
            calls: AtomicUsize::new(0),
        };
        let router = Router::new(ports(
            signed_in(&Identity::employee("a@a")),
            Some(Arc::new(gateway)),
        ));

        let navigation = router.navigate(RoutePath::Bills.as_str());
        let observe = async {
            tokio::task::yield_now().await;
            let loading = router.root_html();
            gate.notify_one();
            loading
        };
        let ((), loading) = tokio::join!(navigation, observe);

        assert!(loading.contains("Loading..."));
        assert!(router.root_html().contains("late failure"));
    }
}
