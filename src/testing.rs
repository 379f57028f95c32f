// ============================================================================
// TESTING - Fixtures y dobles en memoria (DOM, store, navegación, executor)
// ============================================================================

use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, BTreeSet, VecDeque};
use std::rc::Rc;
use async_trait::async_trait;
use futures::channel::oneshot;
use futures::executor::LocalPool;
use futures::future::LocalBoxFuture;
use futures::task::LocalSpawnExt;
use crate::dom::{Dom, DomError, DomEvent, EventKind, EventTarget, Listener};
use crate::models::{Bill, BillUpload, CreatedBill, LoginResponse, SelectedFile, User, UserType};
use crate::router::Route;
use crate::services::{committed_bill, Store, StoreError};
use crate::utils::{save_to_storage, KeyValueStorage, MemoryStorage, USER_STORAGE_KEY};
use crate::viewmodels::{Navigate, PageContext, Spawner};

pub mod fixtures {
    use crate::models::{Bill, BillRow};
    use crate::utils::{format_date, format_status};

    const BILLS_JSON: &str = r#"[
      {
        "id": "47qAXb6fIm2zOKkLzMro",
        "vat": "80",
        "fileUrl": "https://test.storage.tld/v0/b/billable-677b6.a…f-1.jpg?alt=media&token=c1640e12-a24b-4b11-ae52-529112e9602a",
        "status": "pending",
        "type": "Hôtel et logement",
        "commentary": "séminaire billed",
        "name": "encore",
        "fileName": "preview-facture-free-201801-pdf-1.jpg",
        "date": "2004-04-04",
        "amount": 400,
        "commentAdmin": "ok",
        "email": "a@a",
        "pct": 20
      },
      {
        "id": "BeKy5Mo4jkmdfPGYpTxZ",
        "vat": "",
        "amount": 100,
        "name": "test1",
        "fileName": "1592770761.jpeg",
        "commentary": "plop",
        "pct": 20,
        "type": "Transports",
        "email": "a@a",
        "fileUrl": "https://test.storage.tld/v0/b/billable-677b6.a…61.jpeg?alt=media&token=7685cd61-c112-42bc-9929-8a799bb82d8b",
        "date": "2001-01-01",
        "status": "refused",
        "commentAdmin": "en fait non"
      },
      {
        "id": "UIUZtnPQvnbFnB0ozvJh",
        "name": "test3",
        "email": "a@a",
        "type": "Services en ligne",
        "vat": "60",
        "pct": 20,
        "commentAdmin": "bon bah d'accord",
        "amount": 300,
        "status": "accepted",
        "date": "2003-03-03",
        "commentary": "",
        "fileName": "facture-client-php-exportee-dans-document-pdf-enregistre-sur-disque-dur.png",
        "fileUrl": "https://test.storage.tld/v0/b/billable-677b6.a…dur.png?alt=media&token=571d34cb-9c8f-430a-af52-66221cae1da3"
      },
      {
        "id": "qcCK3SzECmaZAGRrHjaC",
        "status": "refused",
        "pct": 20,
        "amount": 200,
        "email": "a@a",
        "name": "test2",
        "vat": "40",
        "fileName": "preview-facture-free-201801-pdf-1.jpg",
        "date": "2002-02-02",
        "commentAdmin": "pas la bonne facture",
        "commentary": "test2",
        "type": "Restaurants et bars",
        "fileUrl": "https://test.storage.tld/v0/b/billable-677b6.a…f-1.jpg?alt=media&token=4df6ed2c-12c8-42a2-b013-346c1346f732"
      }
    ]"#;

    pub fn bills() -> Vec<Bill> {
        serde_json::from_str(BILLS_JSON).expect("fixture bills are valid")
    }

    pub fn bill_rows() -> Vec<BillRow> {
        bills()
            .into_iter()
            .map(|bill| BillRow {
                date: format_date(&bill.date).unwrap_or_else(|_| bill.date.clone()),
                status: format_status(bill.status).to_string(),
                bill,
            })
            .collect()
    }
}

// ============================================================================
// FAKE DOM
// ============================================================================

/// Cómo reconocer un selector simple dentro del markup
#[derive(Debug, PartialEq)]
enum Marker {
    /// Atributo completo (`id="x"`, `data-testid="x"`) precedido de espacio
    Attribute(String),
    /// Una de las clases de un atributo `class`
    Class(String),
}

impl Marker {
    fn parse(selector: &str) -> Option<Self> {
        let last = selector.split_whitespace().last()?;
        if let Some(id) = last.strip_prefix('#') {
            return Some(Marker::Attribute(format!(r#"id="{}""#, id)));
        }
        if let Some(start) = last.find("[data-testid=\"") {
            let rest = &last[start + "[data-testid=\"".len()..];
            let testid = rest.split('"').next()?;
            return Some(Marker::Attribute(format!(r#"data-testid="{}""#, testid)));
        }
        last.strip_prefix('.').map(|class| Marker::Class(class.to_string()))
    }

    fn count_in(&self, html: &str) -> usize {
        match self {
            Marker::Attribute(attribute) => html
                .match_indices(attribute.as_str())
                .filter(|(at, _)| html[..*at].ends_with(char::is_whitespace))
                .count(),
            Marker::Class(class) => html
                .match_indices(r#"class=""#)
                .filter(|(at, _)| html[..*at].ends_with(char::is_whitespace))
                .filter_map(|(at, m)| html[at + m.len()..].split('"').next())
                .filter(|classes| classes.split_whitespace().any(|c| c == class.as_str()))
                .count(),
        }
    }
}

#[derive(Default)]
struct FakeDomInner {
    nodes: BTreeSet<String>,
    html: BTreeMap<String, String>,
    styles: BTreeMap<(String, String), String>,
    classes: BTreeMap<String, BTreeSet<String>>,
    values: BTreeMap<String, String>,
    widths: BTreeMap<String, f64>,
    files: BTreeMap<String, SelectedFile>,
    listeners: BTreeMap<(String, EventKind), Listener>,
    once_listeners: BTreeMap<(String, EventKind), Listener>,
    alerts: Vec<String>,
    shown_modals: Vec<String>,
    deferred_transitions: bool,
    pending_transitions: Vec<String>,
    background: Option<String>,
}

/// DOM en memoria: los elementos se identifican por su selector
#[derive(Default)]
pub struct FakeDom {
    inner: RefCell<FakeDomInner>,
}

impl FakeDom {
    pub fn new() -> Rc<Self> {
        let dom = Rc::new(Self::default());
        dom.add_node("#root");
        dom
    }

    pub fn add_node(&self, selector: &str) {
        self.inner.borrow_mut().nodes.insert(selector.to_string());
    }

    pub fn set_width(&self, selector: &str, width: f64) {
        self.add_node(selector);
        self.inner.borrow_mut().widths.insert(selector.to_string(), width);
    }

    pub fn select_file(&self, selector: &str, file: SelectedFile) {
        let mut inner = self.inner.borrow_mut();
        inner.values.insert(selector.to_string(), format!("C:\\fakepath\\{}", file.name));
        inner.files.insert(selector.to_string(), file);
    }

    pub fn style(&self, selector: &str, property: &str) -> Option<String> {
        self.inner
            .borrow()
            .styles
            .get(&(selector.to_string(), property.to_string()))
            .cloned()
    }

    pub fn has_class(&self, selector: &str, class: &str) -> bool {
        self.inner
            .borrow()
            .classes
            .get(selector)
            .map_or(false, |classes| classes.contains(class))
    }

    pub fn alerts(&self) -> Vec<String> {
        self.inner.borrow().alerts.clone()
    }

    /// `show_modal` deja la transición pendiente hasta `finish_modal_transition`
    pub fn defer_modal_transitions(&self) {
        self.inner.borrow_mut().deferred_transitions = true;
    }

    /// Termina la transición pendiente y emite `shown`. Devuelve si había una.
    pub fn finish_modal_transition(&self, selector: &str) -> bool {
        let pending = {
            let mut inner = self.inner.borrow_mut();
            let position = inner.pending_transitions.iter().position(|s| s == selector);
            position.map(|at| inner.pending_transitions.remove(at))
        };
        match pending {
            Some(selector) => {
                self.dispatch(&selector, EventKind::ModalShown, EventTarget::new());
                true
            }
            None => false,
        }
    }

    pub fn shown_modals(&self) -> Vec<String> {
        self.inner.borrow().shown_modals.clone()
    }

    pub fn background(&self) -> Option<String> {
        self.inner.borrow().background.clone()
    }

    pub fn root(&self) -> String {
        self.inner_html("#root").unwrap_or_default()
    }

    /// Número de elementos que coinciden con el selector en el markup actual
    pub fn count(&self, selector: &str) -> usize {
        let inner = self.inner.borrow();
        let in_markup = Marker::parse(selector)
            .map(|m| inner.html.values().map(|html| m.count_in(html)).sum::<usize>())
            .unwrap_or(0);
        if in_markup == 0 && (inner.nodes.contains(selector) || inner.html.contains_key(selector)) {
            1
        } else {
            in_markup
        }
    }

    /// Disparar un evento. Devuelve si algún listener hizo `prevent_default`.
    pub fn dispatch(&self, selector: &str, kind: EventKind, target: EventTarget) -> bool {
        let key = (selector.to_string(), kind);
        let (listener, once) = {
            let mut inner = self.inner.borrow_mut();
            (inner.listeners.get(&key).cloned(), inner.once_listeners.remove(&key))
        };
        let event = DomEvent::new(target);
        for listener in listener.iter().chain(once.iter()) {
            listener(&event);
        }
        event.is_default_prevented()
    }

    pub fn click(&self, selector: &str) -> bool {
        self.dispatch(selector, EventKind::Click, EventTarget::new())
    }

    pub fn submit(&self, selector: &str) -> bool {
        self.dispatch(selector, EventKind::Submit, EventTarget::new())
    }

    pub fn has_listener(&self, selector: &str, kind: EventKind) -> bool {
        self.inner
            .borrow()
            .listeners
            .contains_key(&(selector.to_string(), kind))
    }
}

impl Dom for FakeDom {
    fn set_inner_html(&self, selector: &str, html: &str) -> Result<(), DomError> {
        if !self.exists(selector) {
            return Err(DomError::NotFound(selector.to_string()));
        }
        self.inner.borrow_mut().html.insert(selector.to_string(), html.to_string());
        Ok(())
    }

    fn inner_html(&self, selector: &str) -> Option<String> {
        if let Some(html) = self.inner.borrow().html.get(selector) {
            return Some(html.clone());
        }
        self.exists(selector).then(String::new)
    }

    fn set_style(&self, selector: &str, property: &str, value: &str) -> Result<(), DomError> {
        self.inner
            .borrow_mut()
            .styles
            .insert((selector.to_string(), property.to_string()), value.to_string());
        Ok(())
    }

    fn add_class(&self, selector: &str, class: &str) -> Result<(), DomError> {
        self.inner
            .borrow_mut()
            .classes
            .entry(selector.to_string())
            .or_default()
            .insert(class.to_string());
        Ok(())
    }

    fn remove_class(&self, selector: &str, class: &str) -> Result<(), DomError> {
        if let Some(classes) = self.inner.borrow_mut().classes.get_mut(selector) {
            classes.remove(class);
        }
        Ok(())
    }

    fn value(&self, selector: &str) -> Option<String> {
        if let Some(value) = self.inner.borrow().values.get(selector) {
            return Some(value.clone());
        }
        self.exists(selector).then(String::new)
    }

    fn set_value(&self, selector: &str, value: &str) -> Result<(), DomError> {
        let mut inner = self.inner.borrow_mut();
        if value.is_empty() {
            inner.files.remove(selector);
        }
        inner.values.insert(selector.to_string(), value.to_string());
        Ok(())
    }

    fn width(&self, selector: &str) -> Option<f64> {
        self.inner.borrow().widths.get(selector).copied()
    }

    fn selected_file(&self, selector: &str) -> Option<SelectedFile> {
        self.inner.borrow().files.get(selector).cloned()
    }

    fn exists(&self, selector: &str) -> bool {
        let inner = self.inner.borrow();
        if inner.nodes.contains(selector) || inner.html.contains_key(selector) {
            return true;
        }
        match Marker::parse(selector) {
            Some(m) => inner.html.values().any(|html| m.count_in(html) > 0),
            None => false,
        }
    }

    fn listen(&self, selector: &str, kind: EventKind, listener: Listener) -> Result<usize, DomError> {
        let count = self.count(selector);
        if count > 0 {
            self.inner
                .borrow_mut()
                .listeners
                .insert((selector.to_string(), kind), listener);
        }
        Ok(count)
    }

    fn listen_once(&self, selector: &str, kind: EventKind, listener: Listener) -> Result<(), DomError> {
        if !self.exists(selector) {
            return Err(DomError::NotFound(selector.to_string()));
        }
        self.inner
            .borrow_mut()
            .once_listeners
            .insert((selector.to_string(), kind), listener);
        Ok(())
    }

    /// Como Bootstrap: al terminar la transición se emite `shown.bs.modal`
    fn show_modal(&self, selector: &str) -> Result<(), DomError> {
        if !self.exists(selector) {
            return Err(DomError::NotFound(selector.to_string()));
        }
        let deferred = {
            let mut inner = self.inner.borrow_mut();
            inner.shown_modals.push(selector.to_string());
            if inner.deferred_transitions {
                inner.pending_transitions.push(selector.to_string());
            }
            inner.deferred_transitions
        };
        if !deferred {
            self.dispatch(selector, EventKind::ModalShown, EventTarget::new());
        }
        Ok(())
    }

    fn alert(&self, message: &str) {
        self.inner.borrow_mut().alerts.push(message.to_string());
    }

    fn set_body_background(&self, color: &str) {
        self.inner.borrow_mut().background = Some(color.to_string());
    }
}

// ============================================================================
// MOCK STORE
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum StoreCall {
    ListBills,
    CreateBill { file_name: String, email: String },
    UpdateBill { data: String, selector: Option<String> },
    Login(String),
    CreateUser(String),
}

/// Store con respuestas programadas; registra cada llamada
pub struct MockStore {
    bills: RefCell<Result<Vec<Bill>, StoreError>>,
    gated_lists: RefCell<VecDeque<oneshot::Receiver<Result<Vec<Bill>, StoreError>>>>,
    login_failures: Cell<u32>,
    create_user_error: RefCell<Option<StoreError>>,
    update_error: RefCell<Option<StoreError>>,
    update_echo: RefCell<Option<String>>,
    calls: RefCell<Vec<StoreCall>>,
}

impl MockStore {
    pub fn new() -> Rc<Self> {
        Self::with_bills(fixtures::bills())
    }

    pub fn with_bills(bills: Vec<Bill>) -> Rc<Self> {
        Rc::new(Self {
            bills: RefCell::new(Ok(bills)),
            gated_lists: RefCell::new(VecDeque::new()),
            login_failures: Cell::new(0),
            create_user_error: RefCell::new(None),
            update_error: RefCell::new(None),
            update_echo: RefCell::new(None),
            calls: RefCell::new(Vec::new()),
        })
    }

    pub fn failing_list(message: &str) -> Rc<Self> {
        let store = Self::new();
        *store.bills.borrow_mut() = Err(StoreError::Rejected(message.to_string()));
        store
    }

    /// El próximo `list_bills` queda pendiente hasta que se envíe la respuesta
    pub fn gate_next_list(&self) -> oneshot::Sender<Result<Vec<Bill>, StoreError>> {
        let (sender, receiver) = oneshot::channel();
        self.gated_lists.borrow_mut().push_back(receiver);
        sender
    }

    pub fn fail_login_times(&self, times: u32) {
        self.login_failures.set(times);
    }

    pub fn fail_create_user(&self, message: &str) {
        *self.create_user_error.borrow_mut() = Some(StoreError::Rejected(message.to_string()));
    }

    pub fn fail_update(&self, message: &str) {
        *self.update_error.borrow_mut() = Some(StoreError::Rejected(message.to_string()));
    }

    /// Cuerpo que devuelve el servidor tras un update aceptado (por defecto, lo enviado)
    pub fn echo_update(&self, body: &str) {
        *self.update_echo.borrow_mut() = Some(body.to_string());
    }

    pub fn calls(&self) -> Vec<StoreCall> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: StoreCall) {
        self.calls.borrow_mut().push(call);
    }
}

#[async_trait(?Send)]
impl Store for MockStore {
    async fn list_bills(&self) -> Result<Vec<Bill>, StoreError> {
        self.record(StoreCall::ListBills);
        let gate = self.gated_lists.borrow_mut().pop_front();
        match gate {
            Some(receiver) => receiver
                .await
                .unwrap_or_else(|_| Err(StoreError::Network("gate dropped".to_string()))),
            None => self.bills.borrow().clone(),
        }
    }

    async fn create_bill(&self, upload: BillUpload) -> Result<CreatedBill, StoreError> {
        self.record(StoreCall::CreateBill {
            file_name: upload.file.name.clone(),
            email: upload.email,
        });
        Ok(CreatedBill {
            file_url: Some("https://localhost:3456/images/test.jpg".to_string()),
            key: "1234".to_string(),
        })
    }

    async fn update_bill(&self, data: String, selector: Option<String>) -> Result<Bill, StoreError> {
        self.record(StoreCall::UpdateBill {
            data: data.clone(),
            selector,
        });
        if let Some(error) = self.update_error.borrow().clone() {
            return Err(error);
        }
        let echo = self.update_echo.borrow().clone().unwrap_or_else(|| data.clone());
        committed_bill(&echo, &data)
    }

    async fn login(&self, data: String) -> Result<LoginResponse, StoreError> {
        self.record(StoreCall::Login(data));
        let failures = self.login_failures.get();
        if failures > 0 {
            self.login_failures.set(failures - 1);
            return Err(StoreError::Http {
                status: 401,
                message: "Unauthorized".to_string(),
            });
        }
        Ok(LoginResponse {
            jwt: "jwt-token".to_string(),
        })
    }

    async fn create_user(&self, data: String) -> Result<(), StoreError> {
        self.record(StoreCall::CreateUser(data));
        match self.create_user_error.borrow().clone() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

// ============================================================================
// NAVEGACIÓN + EXECUTOR
// ============================================================================

/// Registra las rutas pedidas por los controladores
#[derive(Clone, Default)]
pub struct RecordingNavigator {
    routes: Rc<RefCell<Vec<Route>>>,
}

impl RecordingNavigator {
    pub fn callback(&self) -> Navigate {
        let routes = self.routes.clone();
        Rc::new(move |route| routes.borrow_mut().push(route))
    }

    pub fn routes(&self) -> Vec<Route> {
        self.routes.borrow().clone()
    }
}

/// Executor de un solo hilo para los futures `!Send`
pub struct TestExecutor {
    pool: RefCell<LocalPool>,
}

impl TestExecutor {
    pub fn new() -> Self {
        Self {
            pool: RefCell::new(LocalPool::new()),
        }
    }

    pub fn spawner(&self) -> Spawner {
        let spawner = self.pool.borrow().spawner();
        Rc::new(move |future: LocalBoxFuture<'static, ()>| {
            spawner.spawn_local(future).expect("test pool is alive");
        })
    }

    pub fn run(&self) {
        self.pool.borrow_mut().run_until_stalled();
    }
}

/// Todo lo que necesita un test de controlador
pub struct Harness {
    pub dom: Rc<FakeDom>,
    pub storage: Rc<MemoryStorage>,
    pub store: Option<Rc<MockStore>>,
    pub navigator: RecordingNavigator,
    pub executor: TestExecutor,
}

impl Harness {
    pub fn new(store: Option<Rc<MockStore>>) -> Self {
        Self {
            dom: FakeDom::new(),
            storage: Rc::new(MemoryStorage::new()),
            store,
            navigator: RecordingNavigator::default(),
            executor: TestExecutor::new(),
        }
    }

    pub fn with_user(self, user_type: UserType, email: &str) -> Self {
        let user = User::connected(user_type, email.to_string(), "azerty".to_string());
        save_to_storage(&*self.storage, USER_STORAGE_KEY, &user).expect("memory storage");
        self
    }

    pub fn context(&self) -> PageContext {
        PageContext {
            dom: self.dom.clone(),
            storage: self.storage.clone() as Rc<dyn KeyValueStorage>,
            store: self.store.clone().map(|store| store as Rc<dyn Store>),
            on_navigate: self.navigator.callback(),
            spawner: self.executor.spawner(),
        }
    }

    pub fn store(&self) -> &MockStore {
        self.store.as_deref().expect("harness built with a store")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_and_testid_on_one_element_count_once() {
        let dom = FakeDom::new();
        dom.set_inner_html("#root", r#"<div id="layout-disconnect" data-testid="layout-disconnect"></div>"#)
            .unwrap();
        assert_eq!(dom.count("#layout-disconnect"), 1);
        assert_eq!(dom.count(r#"div[data-testid="layout-disconnect"]"#), 1);
        assert!(!dom.exists("#disconnect"));
    }

    #[test]
    fn test_class_selector_matches_whole_class_names() {
        let dom = FakeDom::new();
        dom.set_inner_html(
            "#root",
            r#"<div class="bill-card active"><div class="bill-card-name"></div></div><div class="bill-card"></div>"#,
        )
        .unwrap();
        assert_eq!(dom.count(".bill-card"), 2);
        assert_eq!(dom.count(".bill-card-name"), 1);
        assert_eq!(dom.count(".bill"), 0);
    }

    #[test]
    fn test_deferred_modal_transition() {
        let dom = FakeDom::new();
        dom.set_inner_html("#root", r#"<div id="modal"></div>"#).unwrap();
        dom.defer_modal_transitions();
        let shown = Rc::new(Cell::new(false));
        let flag = shown.clone();
        dom.listen_once("#modal", EventKind::ModalShown, crate::dom::listener(move |_| flag.set(true)))
            .unwrap();

        dom.show_modal("#modal").unwrap();
        assert!(!shown.get());
        assert!(dom.finish_modal_transition("#modal"));
        assert!(shown.get());
        assert!(!dom.finish_modal_transition("#modal"));
    }
}
