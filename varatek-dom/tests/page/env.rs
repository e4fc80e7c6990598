#![allow(dead_code)]

use std::{
    cell::{Cell, RefCell},
    collections::VecDeque,
    future::Future,
    rc::Rc,
};

use futures::{channel::oneshot, executor::LocalPool, task::LocalSpawnExt};
use varatek_dom::{fetch::Transport, prelude::*, Error};

pub type MemSite = Site<MemBackend, MockTransport>;

/// Handles to the interesting elements of `page()` .
pub struct Page {
    pub backend: Rc<MemBackend>,
    pub meta: MemElement,
    pub nav: MemElement,
    pub menu_toggle: MemElement,
    pub services_link: MemElement,
    pub top_link: MemElement,
    pub missing_link: MemElement,
    pub lang_en: MemElement,
    pub lang_fi: MemElement,
    pub hero_title: MemElement,
    pub services: MemElement,
    pub project: MemElement,
    pub contact_subtitle: MemElement,
    pub form: MemElement,
    pub name_input: MemElement,
    pub message_input: MemElement,
    pub submit: MemElement,
    pub status: MemElement,
    pub year: MemElement,
}

/// A document shaped like the site's index page, with a simulated contact form.
pub fn page() -> Page {
    page_with_form(None)
}

/// Same as `page()` , with the form `action` set.
pub fn page_with_form(action: Option<&str>) -> Page {
    let backend = Rc::new(MemBackend::new());
    backend.set_current_year(2031);

    let meta = MemElement::new("meta").with_attr("name", "description");
    backend.head().append_child(&meta);

    let menu_toggle = MemElement::new("button").with_attr("class", "menu-toggle");
    let services_link = MemElement::new("a")
        .with_attr("href", "#services")
        .with_attr("data-i18n", "nav.services");
    let top_link = MemElement::new("a").with_attr("href", "#").with_text("VaraTek");
    let missing_link = MemElement::new("a")
        .with_attr("href", "#nowhere")
        .with_attr("data-i18n", "nav.about");
    let nav = MemElement::new("nav")
        .with_attr("class", "nav-links")
        .with_child(services_link.clone())
        .with_child(missing_link.clone());
    let lang_en = MemElement::new("button").with_attr("data-lang", "en").with_text("EN");
    let lang_fi = MemElement::new("button").with_attr("data-lang", "fi").with_text("FI");
    let header = MemElement::new("header")
        .with_attr("class", "site-header")
        .with_child(top_link.clone())
        .with_child(menu_toggle.clone())
        .with_child(nav.clone())
        .with_child(
            MemElement::new("div")
                .with_attr("class", "lang-switch")
                .with_child(lang_en.clone())
                .with_child(lang_fi.clone()),
        );
    backend.body().append_child(&header);

    let hero_title = MemElement::new("h1")
        .with_attr("class", "reveal")
        .with_attr("data-i18n", "hero.title");
    backend.body().append_child(&hero_title);

    let project = MemElement::new("figure").with_attr("data-i18n-dataset-title", "projects.1");
    let services = MemElement::new("section")
        .with_attr("id", "services")
        .with_attr("class", "reveal")
        .with_child(MemElement::new("h2").with_attr("data-i18n", "section.services.title"))
        .with_child(project.clone());
    backend.body().append_child(&services);

    let contact_subtitle = MemElement::new("p").with_attr("data-i18n-html", "contact.subtitle");
    let name_input = MemElement::new("input")
        .with_attr("name", "name")
        .with_attr("data-i18n-placeholder", "form.namePlaceholder");
    let message_input = MemElement::new("textarea")
        .with_attr("name", "message")
        .with_attr("data-i18n-placeholder", "form.messagePlaceholder");
    let submit = MemElement::new("button")
        .with_attr("type", "submit")
        .with_attr("data-i18n", "form.submit");
    let status = MemElement::new("p").with_attr("class", "form-status");
    let mut form = MemElement::new("form").with_attr("class", "contact-form");
    if let Some(action) = action {
        form = form.with_attr("action", action);
    }
    let form = form
        .with_child(name_input.clone())
        .with_child(message_input.clone())
        .with_child(submit.clone())
        .with_child(status.clone());
    backend.body().append_child(
        &MemElement::new("section")
            .with_attr("id", "contact")
            .with_child(contact_subtitle.clone())
            .with_child(form.clone()),
    );

    let year = MemElement::new("span").with_attr("id", "year");
    backend.body().append_child(
        &MemElement::new("footer")
            .with_child(year.clone())
            .with_child(MemElement::new("span").with_attr("data-i18n", "footer.rights")),
    );

    Page {
        backend,
        meta,
        nav,
        menu_toggle,
        services_link,
        top_link,
        missing_link,
        lang_en,
        lang_fi,
        hero_title,
        services,
        project,
        contact_subtitle,
        form,
        name_input,
        message_input,
        submit,
        status,
        year,
    }
}

pub fn start(page: &Page, transport: MockTransport) -> Rc<MemSite> {
    Rc::new(Site::start(page.backend.clone(), transport, SiteConfig::default()).unwrap())
}

pub fn page_html(backend: &MemBackend) -> String {
    let mut ret = vec![];
    backend.write_html(&mut ret).unwrap();
    String::from_utf8(ret).unwrap()
}

#[derive(Default)]
struct MockInner {
    posts: RefCell<Vec<(String, Vec<(String, String)>)>>,
    responders: RefCell<VecDeque<oneshot::Sender<Result<u16, Error>>>>,
    sleeps: RefCell<Vec<(u32, oneshot::Sender<()>)>>,
}

/// A transport whose requests and timers only complete when the test says so.
#[derive(Clone, Default)]
pub struct MockTransport {
    inner: Rc<MockInner>,
}

impl MockTransport {
    pub fn posts(&self) -> Vec<(String, Vec<(String, String)>)> {
        self.inner.posts.borrow().clone()
    }

    /// The durations of the timers still pending.
    pub fn pending_sleeps(&self) -> Vec<u32> {
        self.inner.sleeps.borrow().iter().map(|(ms, _)| *ms).collect()
    }

    /// Complete the oldest pending request.
    pub fn respond(&self, ret: Result<u16, Error>) {
        let tx = self.inner.responders.borrow_mut().pop_front().unwrap();
        tx.send(ret).unwrap();
    }

    /// Fire the oldest pending timer of `ms` milliseconds.
    pub fn fire(&self, ms: u32) {
        let tx = {
            let mut sleeps = self.inner.sleeps.borrow_mut();
            let pos = sleeps.iter().position(|(x, _)| *x == ms).unwrap();
            sleeps.remove(pos).1
        };
        let _ = tx.send(());
    }
}

impl Transport for MockTransport {
    fn post_form(
        &self,
        action: &str,
        fields: Vec<(String, String)>,
    ) -> impl Future<Output = Result<u16, Error>> {
        let (tx, rx) = oneshot::channel();
        self.inner.posts.borrow_mut().push((action.to_string(), fields));
        self.inner.responders.borrow_mut().push_back(tx);
        async move {
            rx.await.unwrap_or_else(|_| {
                Err(Error::BackendError {
                    msg: "canceled".into(),
                    err: None,
                })
            })
        }
    }

    fn sleep(&self, ms: u32) -> impl Future<Output = ()> {
        let (tx, rx) = oneshot::channel();
        self.inner.sleeps.borrow_mut().push((ms, tx));
        async move {
            let _ = rx.await;
        }
    }
}

/// Spawn a form submission; the returned cell is filled when it ends.
pub fn spawn_submit(pool: &LocalPool, site: &Rc<MemSite>) -> Rc<Cell<Option<SubmitOutcome>>> {
    let ret = Rc::new(Cell::new(None));
    let site = site.clone();
    let r = ret.clone();
    pool.spawner()
        .spawn_local(async move {
            r.set(site.submit_form().await);
        })
        .unwrap();
    ret
}
