//! Example: Basic usage of the adaptation engine
//!
//! `cargo run --example basic -- [config.json]`

use adapt_engine::dom::{Document, Window};
use adapt_engine::{EngineConfig, MemoryStore, ProfileDraft, Session, SettingsAxis};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => EngineConfig::from_file(path)?,
        None => EngineConfig::default(),
    };

    // A small storefront page
    let mut doc = Document::new();
    let body = doc.body();
    let product = doc.append_element(body, "img", &[("src", "/p/1.jpg"), ("alt", "상품 이미지")])?;
    let cart = doc.append_element(body, "button", &[("aria-label", "장바구니 담기")])?;
    let mut window = Window::new(doc);

    let mut session = Session::from_config(&config, MemoryStore::new())?;
    session.start(&mut window);
    println!("adapt-engine v{} started", adapt_engine::VERSION);

    session.cycle(&mut window, SettingsAxis::Contrast)?;
    session.cycle(&mut window, SettingsAxis::TextSize)?;
    session.cycle(&mut window, SettingsAxis::ScreenReader)?;

    let root = window.document.document_element();
    if let Some(classes) = window.document.class_list(root) {
        println!("root classes: {classes}");
    }

    window.dispatch_focus(product);
    window.dispatch_focus(cart);
    if let Some(text) = session.screen_reader().dispatcher().borrow().last_spoken() {
        println!("last spoken: {text}");
    }

    smol::block_on(async {
        let draft = ProfileDraft::from_settings("My settings", session.settings());
        let profile = session.profiles_mut().create(&draft).await?;
        println!("saved profile #{} ({})", profile.profile_id, profile.profile_name);

        session.reset(&mut window)?;
        session.apply_profile(&mut window, &profile)?;
        anyhow::Ok(())
    })?;

    session.end(&mut window);
    Ok(())
}
