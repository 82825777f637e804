//! Browser shell around `Site`: event listeners, the intersection observer
//! and the fade-in timer.
//!
//! Every closure lives for the whole page, so they are leaked with `forget()`.

use crate::app::Site;
use crate::shared::dom::web::{LocalStore, WebDocument, WebElement};
use crate::shared::dom::UiElement;
use crate::shared::scroll::fragment_id;
use contracts::SiteConfig;
use gloo_timers::future::TimeoutFuture;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{
    Element, Event, EventTarget, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, KeyboardEvent, ScrollBehavior, ScrollIntoViewOptions,
    ScrollLogicalPosition,
};

pub type WebSite = Site<WebElement, LocalStore>;

/// `<script type="application/json" id="site-config">` overrides
const CONFIG_ELEMENT_ID: &str = "site-config";

thread_local! {
    static SITE: RefCell<Option<Rc<WebSite>>> = const { RefCell::new(None) };
}

/// Run `f` against the mounted site; `None` before mount.
pub fn with_site<R>(f: impl FnOnce(&WebSite) -> R) -> Option<R> {
    let site = SITE.with(|s| s.borrow().clone());
    site.map(|site| f(&site))
}

/// Mount now, or once the DOM is parsed.
pub fn run() {
    let Some(document) = WebDocument::current() else {
        log::warn!("No document available, UI not started");
        return;
    };
    if document.inner().ready_state() == "loading" {
        let doc = document.clone();
        listen(document.inner(), "DOMContentLoaded", move |_| mount(&doc));
    } else {
        mount(&document);
    }
}

fn mount(document: &WebDocument) {
    if SITE.with(|s| s.borrow().is_some()) {
        return;
    }
    let config = read_config(document);
    let Some(site) = Site::build(document, LocalStore, config) else {
        log::warn!("Page has no <body>, UI not started");
        return;
    };
    let site = Rc::new(site);

    wire_language(&site);
    wire_tabs(&site);
    wire_chat(&site);
    wire_smooth_scroll(document, &site);
    wire_viewport(&site);
    wire_location_cards(&site);
    wire_keyboard(document, &site);
    wire_resize(&site);
    start_fade_in(&site);

    SITE.with(|s| *s.borrow_mut() = Some(site));
    log::info!("UI mounted");
}

fn read_config(document: &WebDocument) -> SiteConfig {
    let Some(json) = document
        .by_id(CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content())
    else {
        return SiteConfig::default();
    };
    match SiteConfig::from_json(&json) {
        Ok(config) => config,
        Err(err) => {
            log::warn!("Invalid site config, using defaults: {:#}", err);
            SiteConfig::default()
        }
    }
}

fn listen(target: &EventTarget, event: &str, handler: impl FnMut(Event) + 'static) {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    let _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

fn event_element(event: &Event) -> Option<Element> {
    event.target().and_then(|t| t.dyn_into::<Element>().ok())
}

fn wire_language(site: &Rc<WebSite>) {
    for button in site.language.buttons() {
        let Some(code) = button.data("lang") else {
            continue;
        };
        let site = site.clone();
        listen(button.html(), "click", move |_| {
            site.language.select_code(&code);
        });
    }
}

fn wire_tabs(site: &Rc<WebSite>) {
    for (g, group) in site.tab_groups.iter().enumerate() {
        for (i, button) in group.buttons().enumerate() {
            let site = site.clone();
            listen(button.html(), "click", move |_| {
                site.tab_groups[g].activate(i);
            });
        }
    }
}

fn wire_chat(site: &Rc<WebSite>) {
    let Some(chat) = &site.chat else {
        return;
    };
    let site_click = site.clone();
    listen(chat.toggle_element().html(), "click", move |_| {
        if let Some(chat) = &site_click.chat {
            chat.toggle();
        }
    });
}

/// Delegated: one document listener covers every in-page anchor.
fn wire_smooth_scroll(document: &WebDocument, site: &Rc<WebSite>) {
    let selector = site.config.selectors.anchor_link.clone();
    let doc = document.clone();
    listen(document.inner(), "click", move |event| {
        let Some(link) = event_element(&event).and_then(|el| el.closest(&selector).ok().flatten())
        else {
            return;
        };
        event.prevent_default();
        let Some(href) = link.get_attribute("href") else {
            return;
        };
        if let Some(target) = fragment_id(&href).and_then(|id| doc.by_id(id)) {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            options.set_block(ScrollLogicalPosition::Start);
            target.scroll_into_view_with_scroll_into_view_options(&options);
        }
    });
}

fn wire_viewport(site: &Rc<WebSite>) {
    let site_cb = site.clone();
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, _observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if let Some(target) = WebElement::from_element(entry.target()) {
                    site_cb
                        .viewport
                        .on_intersection(&target, entry.is_intersecting());
                }
            }
        },
    ) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(site.viewport.threshold()));
    let observer =
        match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
            Ok(observer) => observer,
            Err(err) => {
                log::warn!("IntersectionObserver unavailable: {:?}", err);
                return;
            }
        };
    callback.forget();

    for element in site.viewport.watched() {
        observer.observe(element.html());
    }
    site.viewport
        .on_watch(move |element: &WebElement| observer.observe(element.html()));
}

fn wire_location_cards(site: &Rc<WebSite>) {
    for card in site.cards.cards() {
        let (site_click, card_click) = (site.clone(), card.clone());
        listen(card.html(), "click", move |_| {
            let Some(url) = site_click.cards.destination(&card_click) else {
                return;
            };
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href(&url);
            }
        });

        for (event, entered) in [("mouseenter", true), ("mouseleave", false)] {
            let (site_hover, card_hover) = (site.clone(), card.clone());
            listen(card.html(), event, move |_| {
                site_hover.cards.hover(&card_hover, entered);
            });
        }
    }
}

fn wire_keyboard(document: &WebDocument, site: &Rc<WebSite>) {
    let site = site.clone();
    listen(document.inner(), "keydown", move |event| {
        let Some(key_event) = event.dyn_ref::<KeyboardEvent>() else {
            return;
        };
        let target = event_element(&event).and_then(WebElement::from_element);
        if site.handle_key(&key_event.key(), key_event.shift_key(), target.as_ref()) {
            event.prevent_default();
        }
    });
}

fn wire_resize(site: &Rc<WebSite>) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let site = site.clone();
    listen(&window, "resize", move |_| {
        let width = web_sys::window()
            .and_then(|w| w.inner_width().ok())
            .and_then(|v| v.as_f64());
        if let Some(width) = width {
            site.nav.on_resize(width);
        }
    });
}

fn start_fade_in(site: &Rc<WebSite>) {
    let body = site.body.clone();
    site.fade.hide(&body);
    let site = site.clone();
    spawn_local(async move {
        TimeoutFuture::new(site.fade.delay_ms).await;
        site.fade.show(&body);
    });
}
