//! Integration tests - settings through reconciliation, speech and profiles
//!
//! Drives a whole session the way the page does: toggles, focus moves,
//! profile round trips and persistence across page loads.

use std::cell::RefCell;
use std::rc::Rc;

use adapt_a11y::{A11yError, SpeechSynthesis, Utterance};
use adapt_dom::{Document, EventType, NodeId, Window};
use adapt_engine::net::MemoryProfileBackend;
use adapt_engine::{
    AccessibilitySettings, ContrastLevel, EngineError, FileStore, Magnitude, MemoryStore, ProfileDraft,
    ProfileSettings, ProfileStore, Session, SettingsAxis, SettingsStorage, SpeechConfig, SpeechDispatcher,
    TextAlign,
};

// ============================================================================
// FIXTURES
// ============================================================================

/// Speech queue as the device sees it
#[derive(Debug, Default)]
struct Queue {
    pending: Vec<String>,
    cancels: usize,
}

struct QueueDevice(Rc<RefCell<Queue>>);

impl SpeechSynthesis for QueueDevice {
    fn cancel(&mut self) {
        let mut q = self.0.borrow_mut();
        q.pending.clear();
        q.cancels += 1;
    }

    fn speak(&mut self, utterance: &Utterance) -> Result<(), A11yError> {
        self.0.borrow_mut().pending.push(utterance.text.clone());
        Ok(())
    }

    fn name(&self) -> &'static str {
        "queue"
    }
}

struct Page {
    window: Window,
    img: NodeId,
    button: NodeId,
    banner: NodeId,
}

fn page() -> Page {
    let mut doc = Document::new();
    let body = doc.body();
    let img = doc.append_element(body, "img", &[("src", "/p/1.jpg"), ("alt", "상품 이미지")]).unwrap();
    let button = doc.append_element(body, "button", &[]).unwrap();
    doc.append_text(button, "장바구니 담기").unwrap();
    let banner = doc.append_element(body, "div", &[("tabindex", "0")]).unwrap();
    doc.append_text(banner, &"할인 ".repeat(40)).unwrap();
    Page { window: Window::new(doc), img, button, banner }
}

type TestSession<S> = Session<S, MemoryProfileBackend>;

fn session_with<S: adapt_engine::KeyValueStore>(store: S, queue: &Rc<RefCell<Queue>>) -> TestSession<S> {
    Session::new(
        SettingsStorage::new(store, "a11y-settings"),
        SpeechDispatcher::new(Some(Box::new(QueueDevice(Rc::clone(queue)))), SpeechConfig::default()),
        ProfileStore::new(MemoryProfileBackend::new()),
    )
}

fn root_classes(window: &Window) -> Vec<String> {
    let root = window.document.document_element();
    window.document.class_list(root).map(|l| l.iter().map(str::to_string).collect()).unwrap_or_default()
}

// ============================================================================
// RECONCILIATION
// ============================================================================

#[test]
fn test_high_contrast_replaces_previous_contrast_token() {
    let queue = Rc::default();
    let mut page = page();
    let mut session = session_with(MemoryStore::new(), &queue);
    session.start(&mut page.window);

    session.update(&mut page.window, |s| s.contrast_level = ContrastLevel::Inverted).unwrap();
    let report = session.update(&mut page.window, |s| s.contrast_level = ContrastLevel::High).unwrap();

    assert_eq!(report.removed, vec!["a11y-contrast-inverted"]);
    assert_eq!(root_classes(&page.window), vec!["a11y-contrast-high"]);
}

#[test]
fn test_default_alignment_has_no_token() {
    let queue = Rc::default();
    let mut page = page();
    let mut session = session_with(MemoryStore::new(), &queue);
    session.start(&mut page.window);

    session.update(&mut page.window, |s| s.text_align = TextAlign::Center).unwrap();
    session.update(&mut page.window, |s| s.text_align = TextAlign::Left).unwrap();

    assert!(!root_classes(&page.window).iter().any(|c| c.starts_with("a11y-align")));
}

#[test]
fn test_author_classes_survive() {
    let queue = Rc::default();
    let mut page = page();
    let root = page.window.document.document_element();
    page.window.document.set_attribute(root, "class", "js-ready theme-shop").unwrap();

    let mut session = session_with(MemoryStore::new(), &queue);
    session.start(&mut page.window);
    session.update(&mut page.window, |s| s.highlight_links = true).unwrap();
    session.reset(&mut page.window).unwrap();

    assert_eq!(root_classes(&page.window), vec!["js-ready", "theme-shop"]);
}

#[test]
fn test_no_residue_after_many_mutations() {
    let queue = Rc::default();
    let mut page = page();
    let mut session = session_with(MemoryStore::new(), &queue);
    session.start(&mut page.window);

    let axes = [
        SettingsAxis::Contrast, SettingsAxis::TextSize, SettingsAxis::Contrast, SettingsAxis::LineHeight,
        SettingsAxis::TextAlign, SettingsAxis::SmartContrast, SettingsAxis::Contrast, SettingsAxis::TextSpacing,
        SettingsAxis::TextAlign, SettingsAxis::TextSize, SettingsAxis::CursorHighlight, SettingsAxis::Contrast,
    ];
    for axis in axes {
        session.cycle(&mut page.window, axis).unwrap();
        let expected: Vec<String> = adapt_a11y::class_tokens(session.settings())
            .into_iter()
            .map(str::to_string)
            .collect();
        assert_eq!(root_classes(&page.window), expected);
    }
}

#[test]
fn test_reconcile_is_idempotent() {
    let queue = Rc::default();
    let mut page = page();
    let mut session = session_with(MemoryStore::new(), &queue);
    session.start(&mut page.window);
    session.update(&mut page.window, |s| {
        s.contrast_level = ContrastLevel::Dark;
        s.line_height_level = Magnitude::Maximum;
    }).unwrap();
    let first = root_classes(&page.window);

    session.update(&mut page.window, |_| {}).unwrap();
    assert_eq!(root_classes(&page.window), first);
    assert_eq!(first, vec!["dark", "a11y-line-height-2"]);
}

// ============================================================================
// SCREEN READER
// ============================================================================

#[test]
fn test_focus_on_image_speaks_alt() {
    let queue: Rc<RefCell<Queue>> = Rc::default();
    let mut page = page();
    let mut session = session_with(MemoryStore::new(), &queue);
    session.start(&mut page.window);
    session.update(&mut page.window, |s| s.screen_reader = true).unwrap();

    page.window.dispatch_focus(page.img);

    let q = queue.borrow();
    assert_eq!(q.pending, vec!["상품 이미지"]);
    assert!(q.cancels >= 1);
}

#[test]
fn test_focus_on_body_leaves_speech_alone() {
    let queue: Rc<RefCell<Queue>> = Rc::default();
    let mut page = page();
    let mut session = session_with(MemoryStore::new(), &queue);
    session.start(&mut page.window);
    session.update(&mut page.window, |s| s.screen_reader = true).unwrap();

    page.window.dispatch_focus(page.button);
    let cancels = queue.borrow().cancels;

    let body = page.window.document.body();
    page.window.dispatch_focus(body);

    let q = queue.borrow();
    assert_eq!(q.pending, vec!["장바구니 담기"]);
    assert_eq!(q.cancels, cancels);
}

#[test]
fn test_long_label_is_not_spoken() {
    let queue: Rc<RefCell<Queue>> = Rc::default();
    let mut page = page();
    let mut session = session_with(MemoryStore::new(), &queue);
    session.start(&mut page.window);
    session.update(&mut page.window, |s| s.screen_reader = true).unwrap();

    page.window.dispatch_focus(page.banner);

    assert!(queue.borrow().pending.is_empty());
    assert_eq!(session.screen_reader().dispatcher().borrow().utterances_issued(), 0);
}

#[test]
fn test_last_focus_wins() {
    let queue: Rc<RefCell<Queue>> = Rc::default();
    let mut page = page();
    let mut session = session_with(MemoryStore::new(), &queue);
    session.start(&mut page.window);
    session.update(&mut page.window, |s| s.screen_reader = true).unwrap();

    page.window.dispatch_focus(page.img);
    page.window.dispatch_focus(page.button);

    assert_eq!(queue.borrow().pending, vec!["장바구니 담기"]);
}

#[test]
fn test_toggle_never_duplicates_listener() {
    let queue = Rc::default();
    let mut page = page();
    let mut session = session_with(MemoryStore::new(), &queue);
    session.start(&mut page.window);

    session.update(&mut page.window, |s| s.screen_reader = true).unwrap();
    session.update(&mut page.window, |s| s.screen_reader = true).unwrap();
    assert_eq!(page.window.listener_count(EventType::Focus), 1);

    session.update(&mut page.window, |s| s.screen_reader = false).unwrap();
    session.update(&mut page.window, |s| s.screen_reader = true).unwrap();
    assert_eq!(page.window.listener_count(EventType::Focus), 1);
    assert_eq!(page.window.dispatch_focus(page.img), 1);
}

#[test]
fn test_disable_silences_and_detaches() {
    let queue: Rc<RefCell<Queue>> = Rc::default();
    let mut page = page();
    let mut session = session_with(MemoryStore::new(), &queue);
    session.start(&mut page.window);
    session.update(&mut page.window, |s| s.screen_reader = true).unwrap();
    page.window.dispatch_focus(page.img);

    session.cycle(&mut page.window, SettingsAxis::ScreenReader).unwrap();
    assert!(queue.borrow().pending.is_empty());

    assert_eq!(page.window.dispatch_focus(page.button), 0);
    assert!(queue.borrow().pending.is_empty());
}

#[test]
fn test_missing_device_still_manages_listener() {
    let mut page = page();
    let mut session: TestSession<MemoryStore> = Session::new(
        SettingsStorage::new(MemoryStore::new(), "a11y-settings"),
        SpeechDispatcher::silent(SpeechConfig::default()),
        ProfileStore::new(MemoryProfileBackend::new()),
    );
    session.start(&mut page.window);
    session.update(&mut page.window, |s| s.screen_reader = true).unwrap();

    assert_eq!(page.window.dispatch_focus(page.img), 1);
    assert_eq!(session.screen_reader().dispatcher().borrow().last_spoken(), None);

    session.end(&mut page.window);
    assert_eq!(page.window.listener_count(EventType::Focus), 0);
}

// ============================================================================
// PROFILES
// ============================================================================

#[test]
fn test_apply_profile_preserves_unspecified_axes() {
    let queue = Rc::default();
    let mut page = page();
    let mut session = session_with(MemoryStore::new(), &queue);
    session.start(&mut page.window);
    session.update(&mut page.window, |s| s.contrast_level = ContrastLevel::Dark).unwrap();

    let profile = smol::block_on(session.profiles_mut().create(&ProfileDraft::new(
        "큰 글씨",
        ProfileSettings { text_size_level: Some(Magnitude::Maximum), ..Default::default() },
    ))).unwrap();
    session.apply_profile(&mut page.window, &profile).unwrap();

    assert_eq!(session.settings().text_size_level, Magnitude::Maximum);
    assert_eq!(session.settings().contrast_level, ContrastLevel::Dark);
    assert_eq!(root_classes(&page.window), vec!["dark", "a11y-text-size-2"]);
}

#[test]
fn test_failed_delete_changes_nothing() {
    let queue = Rc::default();
    let mut page = page();
    let mut session = session_with(MemoryStore::new(), &queue);
    session.start(&mut page.window);
    session.update(&mut page.window, |s| s.contrast_level = ContrastLevel::High).unwrap();

    let draft = ProfileDraft::from_settings("현재 설정", session.settings());
    let profile = smol::block_on(session.profiles_mut().create(&draft)).unwrap();
    let cached = session.profiles().cached().map(|c| c.to_vec());
    let live = *session.settings();

    session.profiles().backend().set_offline(true);
    let result = smol::block_on(session.profiles_mut().delete(profile.profile_id));

    assert!(matches!(result, Err(EngineError::Net(_))));
    assert_eq!(session.profiles().cached().map(|c| c.to_vec()), cached);
    assert_eq!(*session.settings(), live);
    assert_eq!(root_classes(&page.window), vec!["a11y-contrast-high"]);
}

#[test]
fn test_saved_profile_round_trips_current_settings() {
    let queue = Rc::default();
    let mut page = page();
    let mut session = session_with(MemoryStore::new(), &queue);
    session.start(&mut page.window);
    session.update(&mut page.window, |s| {
        s.text_spacing_level = Magnitude::Increased;
        s.cursor_highlight = true;
    }).unwrap();
    let snapshot = *session.settings();

    let profile = smol::block_on(
        session.profiles_mut().create(&ProfileDraft::from_settings("읽기", &snapshot).with_description("spacing")),
    ).unwrap();
    session.reset(&mut page.window).unwrap();
    assert!(root_classes(&page.window).is_empty());

    let fetched = session.profiles().find(profile.profile_id).cloned().unwrap();
    session.apply_profile(&mut page.window, &fetched).unwrap();
    assert_eq!(*session.settings(), snapshot);
}

// ============================================================================
// PERSISTENCE
// ============================================================================

#[test]
fn test_settings_survive_reload() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("local-storage.json");
    let queue = Rc::default();

    {
        let mut page = page();
        let mut session = session_with(FileStore::open(&path).unwrap(), &queue);
        session.start(&mut page.window);
        session.update(&mut page.window, |s| {
            s.contrast_level = ContrastLevel::Low;
            s.screen_reader = true;
        }).unwrap();
        session.end(&mut page.window);
    }

    let mut page = page();
    let mut session = session_with(FileStore::open(&path).unwrap(), &queue);
    let report = session.start(&mut page.window);

    assert_eq!(report.added, vec!["a11y-contrast-low"]);
    assert!(session.screen_reader().is_listening());
    assert_eq!(session.settings().contrast_level, ContrastLevel::Low);
}

#[test]
fn test_malformed_storage_starts_default() {
    let queue = Rc::default();
    let mut store = MemoryStore::new();
    adapt_engine::KeyValueStore::set(&mut store, "a11y-settings", "{\"contrastLevel\": \"high\"".to_string()).unwrap();

    let mut page = page();
    let mut session = session_with(store, &queue);
    session.start(&mut page.window);

    assert_eq!(*session.settings(), AccessibilitySettings::default());
    assert!(root_classes(&page.window).is_empty());
}
