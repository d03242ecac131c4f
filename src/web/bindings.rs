//! Click and scroll toggles for optional page elements.
//!
//! Each binding looks up its own elements and quietly does nothing when any
//! of them is missing from the page.

use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{Document, Element, Event, EventTarget, Window};

use crate::config::{
    ACTIVE_CLASS, GALLERY_OVERLAY_ID, GALLERY_TRACK_ID, MOVE_UP_CLASS, SECRET_OVERLAY_ID,
    SPROUT_TRIGGER_ID, VIDEO_TRIGGER_ID, WIDGET_HEADER_SELECTOR, WIDGET_SELECTOR,
};
use crate::widget::{reached_bottom, transition, WidgetPosition};

pub fn install(window: &Window, document: &Document) -> Result<(), JsValue> {
    bind_sprout(document)?;
    bind_gallery(document)?;
    bind_scroll_widget(window, document)?;
    Ok(())
}

/// Trigger click shows the secret overlay, overlay click hides it again.
pub fn bind_sprout(document: &Document) -> Result<bool, JsValue> {
    let (Some(trigger), Some(overlay)) = (
        document.get_element_by_id(SPROUT_TRIGGER_ID),
        document.get_element_by_id(SECRET_OVERLAY_ID),
    ) else {
        log::debug!("sprout binding skipped");
        return Ok(false);
    };

    bind_overlay(&trigger, overlay, false)?;
    Ok(true)
}

/// Like the sprout reveal, but the trigger's default action is suppressed.
/// The gallery track's items are doubled once so the slideshow can loop.
pub fn bind_gallery(document: &Document) -> Result<bool, JsValue> {
    let (Some(trigger), Some(overlay)) = (
        document.get_element_by_id(VIDEO_TRIGGER_ID),
        document.get_element_by_id(GALLERY_OVERLAY_ID),
    ) else {
        log::debug!("gallery binding skipped");
        return Ok(false);
    };

    bind_overlay(&trigger, overlay, true)?;

    if let Some(track) = document.get_element_by_id(GALLERY_TRACK_ID) {
        duplicate_children(&track)?;
    }
    Ok(true)
}

/// Flip the recommend widget up once the viewport reaches the page end.
pub fn bind_scroll_widget(window: &Window, document: &Document) -> Result<bool, JsValue> {
    let (Some(widget), Some(header)) = (
        document.query_selector(WIDGET_SELECTOR)?,
        document.query_selector(WIDGET_HEADER_SELECTOR)?,
    ) else {
        log::debug!("scroll widget binding skipped");
        return Ok(false);
    };

    let win = window.clone();
    let doc = document.clone();
    listen(window, "scroll", move |_| {
        let result = at_page_bottom(&win, &doc)
            .and_then(|at_bottom| update_widget(&widget, &header, at_bottom));
        if let Err(e) = result {
            log::warn!("scroll widget update failed: {:?}", e);
        }
    })?;
    Ok(true)
}

/// Append a deep clone of every current child of `track`, after all the
/// originals. Returns how many children were cloned.
pub fn duplicate_children(track: &Element) -> Result<u32, JsValue> {
    // `children()` is live; snapshot it before appending.
    let children = track.children();
    let originals: Vec<Element> = (0..children.length()).filter_map(|i| children.item(i)).collect();

    for item in &originals {
        let clone = item.clone_node_with_deep(true)?;
        track.append_child(&clone)?;
    }
    Ok(originals.len() as u32)
}

/// Move the widget to match `at_bottom`. Returns the new position, or `None`
/// if it was already there.
pub fn update_widget(
    widget: &Element,
    header: &Element,
    at_bottom: bool,
) -> Result<Option<WidgetPosition>, JsValue> {
    let classes = widget.class_list();
    let Some(next) = transition(at_bottom, classes.contains(MOVE_UP_CLASS)) else {
        return Ok(None);
    };

    match next {
        WidgetPosition::Up => classes.add_1(MOVE_UP_CLASS)?,
        WidgetPosition::Down => classes.remove_1(MOVE_UP_CLASS)?,
    }
    header.set_text_content(Some(next.label()));
    Ok(Some(next))
}

fn at_page_bottom(window: &Window, document: &Document) -> Result<bool, JsValue> {
    let inner_height = window.inner_height()?.as_f64().ok_or("innerHeight is not a number")?;
    let scroll_y = window.scroll_y()?;
    let page_height = document.body().ok_or("no body")?.offset_height() as f64;
    Ok(reached_bottom(inner_height, scroll_y, page_height))
}

fn bind_overlay(trigger: &Element, overlay: Element, prevent_default: bool) -> Result<(), JsValue> {
    let shown = overlay.clone();
    listen(trigger, "click", move |event| {
        if prevent_default {
            event.prevent_default();
        }
        set_class(&shown, ACTIVE_CLASS, true);
    })?;

    let hidden = overlay.clone();
    listen(&overlay, "click", move |_| set_class(&hidden, ACTIVE_CLASS, false))
}

fn set_class(el: &Element, class: &str, on: bool) {
    let classes = el.class_list();
    let result = if on { classes.add_1(class) } else { classes.remove_1(class) };
    if let Err(e) = result {
        log::warn!("could not toggle `{}`: {:?}", class, e);
    }
}

fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), JsValue>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}
