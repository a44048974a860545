//! End-to-end behaviour of the navbar core through the crate's public API:
//! route planning, dropdown state, outside-click dismissal and the logout flow
//! wired together the way `AppNavbar` wires them.

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::rc::Rc;

use async_trait::async_trait;
use futures::executor::block_on;

use ui::core::auth::{AuthError, AuthService};
use ui::core::config::NavbarConfig;
use ui::core::dismiss::{
    ListenerId, OutsideDismiss, PointerError, PointerSource, PressHandler, PressTarget,
    RegionHandle,
};
use ui::core::logout::{run_logout, LogoutOutcome, Notify, RouteNavigator, FAILURE_PREFIX};
use ui::core::nav::{self, NavItemId, NavbarPlan};
use ui::core::state::NavbarState;
use ui::core::user::{display_initial, CurrentUser};

/// Simulated document: handlers keyed by id, pressed explicitly by the test.
#[derive(Clone, Default)]
struct Document {
    handlers: Rc<RefCell<BTreeMap<u64, PressHandler>>>,
    next: Rc<Cell<u64>>,
}

impl Document {
    fn press(&self, target: &PressTarget) {
        for handler in self.handlers.borrow_mut().values_mut() {
            handler(target);
        }
    }

    fn listener_count(&self) -> usize {
        self.handlers.borrow().len()
    }
}

impl PointerSource for Document {
    fn listen(&self, handler: PressHandler) -> Result<ListenerId, PointerError> {
        let id = self.next.get();
        self.next.set(id + 1);
        self.handlers.borrow_mut().insert(id, handler);
        Ok(ListenerId(id))
    }

    fn unlisten(&self, id: ListenerId) -> Result<(), PointerError> {
        self.handlers.borrow_mut().remove(&id.0);
        Ok(())
    }
}

struct Mounted {
    state: Rc<RefCell<NavbarState>>,
    trigger: RegionHandle,
    panel: RegionHandle,
    dismiss: OutsideDismiss<Document>,
}

fn mount(document: &Document) -> Mounted {
    let state = Rc::new(RefCell::new(NavbarState::default()));
    let trigger = RegionHandle::new("profile-trigger");
    let panel = RegionHandle::new("profile-panel");
    trigger.attach();

    let on_dismiss = {
        let state = Rc::clone(&state);
        move || {
            state.borrow_mut().close_dropdown();
        }
    };
    let dismiss = OutsideDismiss::install(
        document.clone(),
        trigger.clone(),
        panel.clone(),
        on_dismiss,
    )
    .expect("fake document accepts listeners");

    Mounted {
        state,
        trigger,
        panel,
        dismiss,
    }
}

impl Mounted {
    fn open(&self) {
        self.state.borrow_mut().toggle_dropdown();
        self.panel.attach();
    }

    fn is_open(&self) -> bool {
        self.state.borrow().dropdown_open
    }
}

#[test]
fn navbar_hidden_on_auth_pages_even_when_faulted() {
    let config = NavbarConfig::default();
    for path in ["/login", "/register"] {
        assert_eq!(nav::plan(path, &config, false), NavbarPlan::Hidden);
        assert_eq!(nav::plan(path, &config, true), NavbarPlan::Hidden);
    }
    assert_eq!(nav::plan("/publications", &config, true), NavbarPlan::Fault);
}

#[test]
fn at_most_one_link_is_active_and_add_matches_by_prefix() {
    let config = NavbarConfig::default();
    let cases = [
        ("/publications", Some(NavItemId::Publications)),
        ("/publications/add", Some(NavItemId::Add)),
        ("/publications/add/draft-7", Some(NavItemId::Add)),
        ("/logout", None),
        ("/", None),
    ];

    for (path, expected) in cases {
        let NavbarPlan::Bar(links) = nav::plan(path, &config, false) else {
            panic!("expected a full bar on {path}");
        };
        let active: Vec<NavItemId> = links
            .iter()
            .filter(|link| link.active)
            .map(|link| link.item.id)
            .collect();
        assert_eq!(active, expected.into_iter().collect::<Vec<_>>(), "path {path}");
    }
}

#[test]
fn avatar_initial_falls_back_to_u() {
    assert_eq!(display_initial(None), 'U');
    assert_eq!(display_initial(Some(&CurrentUser::named(""))), 'U');
    assert_eq!(display_initial(Some(&CurrentUser::named("siti"))), 'S');
}

#[test]
fn press_outside_closes_and_inside_keeps_open() {
    let document = Document::default();
    let mounted = mount(&document);
    mounted.open();

    document.press(&PressTarget::new([mounted.panel.key()]));
    assert!(mounted.is_open(), "press inside the panel must not dismiss");

    document.press(&PressTarget::new([mounted.trigger.key()]));
    assert!(mounted.is_open(), "press on the trigger must not dismiss");

    document.press(&PressTarget::nowhere());
    assert!(!mounted.is_open());
}

#[test]
fn press_while_panel_detached_is_ignored() {
    let document = Document::default();
    let mounted = mount(&document);
    mounted.state.borrow_mut().toggle_dropdown();

    document.press(&PressTarget::nowhere());
    assert!(mounted.is_open());
}

#[test]
fn one_listener_per_mount_removed_on_unmount() {
    let document = Document::default();
    let first = mount(&document);
    let second = mount(&document);
    assert_eq!(document.listener_count(), 2);

    drop(first);
    assert_eq!(document.listener_count(), 1);

    let mut second = second;
    second.dismiss.release();
    second.dismiss.release();
    assert!(!second.dismiss.is_active());
    assert_eq!(document.listener_count(), 0);
}

struct Session {
    result: Result<(), AuthError>,
    calls: Cell<u32>,
}

#[async_trait(?Send)]
impl AuthService for Session {
    async fn current_user(&self) -> Result<Option<CurrentUser>, AuthError> {
        Ok(Some(CurrentUser::named("Admin")))
    }

    async fn logout(&self) -> Result<(), AuthError> {
        self.calls.set(self.calls.get() + 1);
        self.result.clone()
    }
}

#[derive(Default)]
struct Browser {
    replaced: RefCell<Vec<String>>,
    alerts: RefCell<Vec<String>>,
}

impl RouteNavigator for Browser {
    fn navigate_replace(&self, path: &str) {
        self.replaced.borrow_mut().push(path.to_string());
    }
}

impl Notify for Browser {
    fn notify(&self, message: &str) {
        self.alerts.borrow_mut().push(message.to_string());
    }
}

#[test]
fn logout_success_replaces_history_with_login() {
    let session = Session {
        result: Ok(()),
        calls: Cell::new(0),
    };
    let busy = Rc::new(Cell::new(false));
    let browser = Browser::default();

    let outcome = block_on(run_logout(&session, &busy, &browser, &browser, "/login"));

    assert_eq!(outcome, LogoutOutcome::LoggedOut);
    assert_eq!(*browser.replaced.borrow(), vec!["/login".to_string()]);
    assert!(browser.alerts.borrow().is_empty());
    assert!(!busy.get());
}

#[test]
fn logout_failure_alerts_and_stays_put() {
    let session = Session {
        result: Err(AuthError::Rejected("network down".into())),
        calls: Cell::new(0),
    };
    let busy = Rc::new(Cell::new(false));
    let browser = Browser::default();

    let outcome = block_on(run_logout(&session, &busy, &browser, &browser, "/login"));

    assert_eq!(outcome, LogoutOutcome::Failed("network down".into()));
    assert_eq!(
        *browser.alerts.borrow(),
        vec![format!("{FAILURE_PREFIX}network down")]
    );
    assert!(browser.replaced.borrow().is_empty());
    assert!(!busy.get());
}

#[test]
fn logout_while_in_flight_is_suppressed() {
    let session = Session {
        result: Ok(()),
        calls: Cell::new(0),
    };
    let busy = Rc::new(Cell::new(true));
    let browser = Browser::default();

    let outcome = block_on(run_logout(&session, &busy, &browser, &browser, "/login"));

    assert_eq!(outcome, LogoutOutcome::Suppressed);
    assert_eq!(session.calls.get(), 0);
    assert!(busy.get(), "the running logout still owns the flag");
}
