//! Live stylesheet mirroring and nonce resolution.

mod support;

use atomcss::{Config, Engine, MetaLookup, MetaNonce, NoNonce, style};
use support::FakeHost;

struct Meta(&'static str);

impl MetaLookup for Meta {
    fn meta_attribute(&self, property: &str, attribute: &str) -> Option<String> {
        (property == "csp-nonce" && attribute == "content").then(|| self.0.to_string())
    }
}

#[test]
fn rules_are_mirrored_at_the_end_of_the_sheet() {
    let mut host = FakeHost::default();
    let mut engine = Engine::with_host(Config::default(), &mut host, &NoNonce);
    assert!(engine.has_sheet());

    engine.class_names(&style! { "color" => "gold", "&:hover" => { "color" => "black" } });
    engine.class_names(&style! { "color" => "gold" });

    let sheet = host.sheet.lock().unwrap();
    assert_eq!(
        sheet.inserted,
        [
            (".t0{color:gold;}".to_string(), 0),
            (".t1:hover{color:black;}".to_string(), 1),
        ]
    );
}

#[test]
fn rejected_rules_stay_in_the_log() {
    let mut host = FakeHost::rejecting("::-webkit");
    let mut engine = Engine::with_host(Config::new().debug(true), &mut host, &NoNonce);

    let classes = engine.class_names(&style! {
        "color" => "gold",
        "&::-webkit-scrollbar" => { "display" => "none" },
        "margin" => 0,
    });

    assert_eq!(classes, "t0 t1 t2");
    assert_eq!(engine.rules().len(), 3);

    let sheet = host.sheet.lock().unwrap();
    assert_eq!(sheet.rejected, [".t1::-webkit-scrollbar{display:none;}"]);
    assert_eq!(
        sheet.inserted,
        [
            (".t0{color:gold;}".to_string(), 0),
            (".t2{margin:0;}".to_string(), 1),
        ]
    );
}

#[test]
fn memory_only_never_touches_the_host() {
    let mut host = FakeHost::default();
    let mut engine = Engine::with_host(Config::new().memory_only(true), &mut host, &NoNonce);

    engine.class_names(&style! { "color" => "gold" });

    assert!(!engine.has_sheet());
    assert!(host.created.is_empty());
    assert!(host.sheet.lock().unwrap().inserted.is_empty());
    assert_eq!(engine.full_css(), ".t0{color:gold;}");
}

#[test]
fn explicit_nonce_is_attached() {
    let mut host = FakeHost::default();
    Engine::with_host(Config::new().nonce("random"), &mut host, &NoNonce);
    assert_eq!(host.created, [Some("random".to_string())]);
}

#[test]
fn nonce_is_read_from_meta_tag() {
    let mut host = FakeHost::default();
    Engine::with_host(Config::default(), &mut host, &MetaNonce(Meta("random-nonce")));
    assert_eq!(host.created, [Some("random-nonce".to_string())]);
}

#[test]
fn explicit_nonce_wins_over_meta_tag() {
    let mut host = FakeHost::default();
    Engine::with_host(
        Config::new().nonce("explicit"),
        &mut host,
        &MetaNonce(Meta("from-meta")),
    );
    assert_eq!(host.created, [Some("explicit".to_string())]);
}

#[test]
fn closure_nonce_source() {
    let mut host = FakeHost::default();
    let lookup = || Some("from-closure".to_string());
    Engine::with_host(Config::default(), &mut host, &lookup);
    assert_eq!(host.created, [Some("from-closure".to_string())]);
}

#[test]
fn no_nonce_creates_plain_sheet() {
    let mut host = FakeHost::default();
    Engine::with_host(Config::default(), &mut host, &NoNonce);
    assert_eq!(host.created, [None]);
}
