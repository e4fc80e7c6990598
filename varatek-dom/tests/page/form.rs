use futures::executor::LocalPool;
use varatek_dom::{
    form::{FormState, SubmitTarget},
    prelude::*,
    Error,
};

use super::env::*;

fn fill(page: &Page) {
    page.name_input.set_value("Matti");
    page.message_input.set_value("A sauna, please");
}

#[test]
fn simulated_submission() {
    let page = page();
    let transport = MockTransport::default();
    let site = start(&page, transport.clone());
    let form = site.form().unwrap().clone();
    assert_eq!(form.target(), SubmitTarget::Simulated);
    assert_eq!(form.state(), FormState::Idle);
    fill(&page);

    let mut pool = LocalPool::new();
    let outcome = spawn_submit(&pool, &site);
    pool.run_until_stalled();
    assert_eq!(form.state(), FormState::Sending);
    assert_eq!(page.status.text_content(), "Sending…");
    assert!(page.submit.attr("disabled").is_some());
    assert_eq!(transport.pending_sleeps(), vec![700]);
    assert!(transport.posts().is_empty());

    transport.fire(700);
    pool.run_until_stalled();
    assert_eq!(outcome.get(), Some(SubmitOutcome::Succeeded));
    assert_eq!(form.state(), FormState::Success);
    assert_eq!(page.status.text_content(), "Done! We will contact you shortly.");
    assert_eq!(page.name_input.value(), "");
    assert_eq!(page.message_input.value(), "");
    assert!(page.submit.attr("disabled").is_none());
}

#[test]
fn simulate_flag_wins_over_action() {
    let page = page_with_form(Some("https://example.com/contact"));
    page.form.set_attr("data-simulate", "");
    let transport = MockTransport::default();
    let site = start(&page, transport.clone());
    assert_eq!(site.form().unwrap().target(), SubmitTarget::Simulated);

    let mut pool = LocalPool::new();
    let outcome = spawn_submit(&pool, &site);
    pool.run_until_stalled();
    transport.fire(700);
    pool.run_until_stalled();
    assert_eq!(outcome.get(), Some(SubmitOutcome::Succeeded));
    assert!(transport.posts().is_empty());
}

#[test]
fn endpoint_success() {
    let page = page_with_form(Some("https://example.com/contact"));
    let transport = MockTransport::default();
    let site = start(&page, transport.clone());
    fill(&page);

    let mut pool = LocalPool::new();
    let outcome = spawn_submit(&pool, &site);
    pool.run_until_stalled();
    assert_eq!(page.status.text_content(), "Sending…");
    assert_eq!(
        transport.posts(),
        vec![(
            "https://example.com/contact".to_string(),
            vec![
                ("name".to_string(), "Matti".to_string()),
                ("message".to_string(), "A sauna, please".to_string()),
            ]
        )]
    );
    assert_eq!(transport.pending_sleeps(), vec![15000]);

    transport.respond(Ok(204));
    pool.run_until_stalled();
    assert_eq!(outcome.get(), Some(SubmitOutcome::Succeeded));
    assert_eq!(page.status.text_content(), "Done! We will contact you shortly.");
    assert_eq!(page.name_input.value(), "");
}

#[test]
fn endpoint_rejects() {
    let page = page_with_form(Some("/contact"));
    let transport = MockTransport::default();
    let site = start(&page, transport.clone());
    fill(&page);

    let mut pool = LocalPool::new();
    let outcome = spawn_submit(&pool, &site);
    pool.run_until_stalled();
    transport.respond(Ok(500));
    pool.run_until_stalled();
    assert_eq!(outcome.get(), Some(SubmitOutcome::Failed));
    assert_eq!(site.form().unwrap().state(), FormState::Error);
    assert_eq!(
        page.status.text_content(),
        "Send failed. Try later or email info.varatek@gmail.com."
    );
    assert_eq!(page.name_input.value(), "Matti");
    assert_eq!(page.message_input.value(), "A sauna, please");
    assert!(page.submit.attr("disabled").is_none());
}

#[test]
fn network_failure() {
    let page = page_with_form(Some("/contact"));
    let transport = MockTransport::default();
    let site = start(&page, transport.clone());
    fill(&page);

    let mut pool = LocalPool::new();
    let outcome = spawn_submit(&pool, &site);
    pool.run_until_stalled();
    transport.respond(Err(Error::BackendError {
        msg: "Network request failed".into(),
        err: Some("TypeError".into()),
    }));
    pool.run_until_stalled();
    assert_eq!(outcome.get(), Some(SubmitOutcome::Failed));
    assert_eq!(page.name_input.value(), "Matti");
}

#[test]
fn endpoint_timeout() {
    let page = page_with_form(Some("/contact"));
    let transport = MockTransport::default();
    let config = SiteConfig {
        submit_timeout_ms: 3000,
        ..Default::default()
    };
    let site = std::rc::Rc::new(Site::start(page.backend.clone(), transport.clone(), config).unwrap());
    fill(&page);

    let mut pool = LocalPool::new();
    let outcome = spawn_submit(&pool, &site);
    pool.run_until_stalled();
    assert_eq!(outcome.get(), None);
    transport.fire(3000);
    pool.run_until_stalled();
    assert_eq!(outcome.get(), Some(SubmitOutcome::Failed));
    assert_eq!(page.status.text_content(), "Send failed. Try later or email info.varatek@gmail.com.");
    assert_eq!(page.message_input.value(), "A sauna, please");
}

#[test]
fn one_submission_at_a_time() {
    let page = page_with_form(Some("/contact"));
    let transport = MockTransport::default();
    let site = start(&page, transport.clone());

    let mut pool = LocalPool::new();
    let first = spawn_submit(&pool, &site);
    pool.run_until_stalled();
    let second = spawn_submit(&pool, &site);
    pool.run_until_stalled();
    assert_eq!(second.get(), Some(SubmitOutcome::Ignored));
    assert_eq!(first.get(), None);
    assert_eq!(transport.posts().len(), 1);

    transport.respond(Ok(200));
    pool.run_until_stalled();
    assert_eq!(first.get(), Some(SubmitOutcome::Succeeded));
}

#[test]
fn retry_after_error() {
    let page = page_with_form(Some("/contact"));
    let transport = MockTransport::default();
    let site = start(&page, transport.clone());
    fill(&page);

    let mut pool = LocalPool::new();
    spawn_submit(&pool, &site);
    pool.run_until_stalled();
    transport.respond(Ok(503));
    pool.run_until_stalled();
    assert_eq!(site.form().unwrap().state(), FormState::Error);

    let outcome = spawn_submit(&pool, &site);
    pool.run_until_stalled();
    assert_eq!(site.form().unwrap().state(), FormState::Sending);
    assert_eq!(page.status.text_content(), "Sending…");
    assert_eq!(transport.posts().len(), 2);
    assert_eq!(transport.posts()[1].1[0], ("name".to_string(), "Matti".to_string()));
    transport.respond(Ok(200));
    pool.run_until_stalled();
    assert_eq!(outcome.get(), Some(SubmitOutcome::Succeeded));
}

#[test]
fn language_switch_while_sending() {
    let page = page();
    let transport = MockTransport::default();
    let site = start(&page, transport.clone());

    let mut pool = LocalPool::new();
    let outcome = spawn_submit(&pool, &site);
    pool.run_until_stalled();
    assert_eq!(page.status.text_content(), "Sending…");

    site.switch_language("fi").unwrap();
    assert_eq!(page.status.text_content(), "Lähetetään…");

    transport.fire(700);
    pool.run_until_stalled();
    assert_eq!(outcome.get(), Some(SubmitOutcome::Succeeded));
    assert_eq!(page.status.text_content(), "Valmis! Otamme sinuun pian yhteyttä.");

    site.switch_language("en").unwrap();
    assert_eq!(page.status.text_content(), "Done! We will contact you shortly.");
}

#[test]
fn idle_status_is_untouched() {
    let page = page();
    page.status.set_attr("data-note", "x");
    let site = start(&page, MockTransport::default());
    site.switch_language("fi").unwrap();
    assert_eq!(page.status.text_content(), "");
    assert_eq!(site.form().unwrap().state(), FormState::Idle);
}

#[test]
fn form_without_status_line() {
    let page = page();
    page.status.remove_attr("class");
    let transport = MockTransport::default();
    let site = start(&page, transport.clone());

    let mut pool = LocalPool::new();
    let outcome = spawn_submit(&pool, &site);
    pool.run_until_stalled();
    transport.fire(700);
    pool.run_until_stalled();
    assert_eq!(outcome.get(), Some(SubmitOutcome::Succeeded));
    assert_eq!(page.status.text_content(), "");
}

#[test]
fn untyped_button_is_disabled_while_sending() {
    let page = page();
    page.submit.remove_attr("type");
    let extra = MemElement::new("button").with_attr("type", "button");
    page.form.append_child(&extra);
    let transport = MockTransport::default();
    let site = start(&page, transport.clone());

    let mut pool = LocalPool::new();
    let outcome = spawn_submit(&pool, &site);
    pool.run_until_stalled();
    assert_eq!(site.form().unwrap().state(), FormState::Sending);
    assert!(page.submit.attr("disabled").is_some());
    assert!(extra.attr("disabled").is_none());

    transport.fire(700);
    pool.run_until_stalled();
    assert_eq!(outcome.get(), Some(SubmitOutcome::Succeeded));
    assert!(page.submit.attr("disabled").is_none());
}
