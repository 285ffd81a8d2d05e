use super::SharedPage;
use crate::dom::{self, Listener};
use crate::frame::FrameLoop;
use crate::surface::WebSurface;

pub fn wire_pointer(surface: &WebSurface, page: &SharedPage) -> Option<Listener> {
    page.borrow().cursor.as_ref()?;
    let page = page.clone();
    dom::listen(surface.window(), "mousemove", true, move |ev| {
        if let Some((x, y)) = dom::client_pos(&ev) {
            page.borrow_mut().on_pointer_move(x, y);
        }
    })
}

/// Starts the cursor-follow loop; it runs until the page is detached.
pub fn start_cursor_loop(surface: &WebSurface, page: &SharedPage) -> Option<FrameLoop> {
    let handle = page.borrow().cursor.as_ref()?.cancel_handle();
    let surface = surface.clone();
    let page = page.clone();
    Some(FrameLoop::start(handle, move || {
        page.borrow_mut().on_frame(&surface)
    }))
}

pub fn wire_avatar(surface: &WebSurface, page: &SharedPage) -> Vec<Listener> {
    let Some(avatar) = page.borrow().tilt.as_ref().map(|t| t.node().clone()) else {
        return Vec::new();
    };

    let surface_move = surface.clone();
    let page_move = page.clone();
    let on_move = dom::listen(&avatar, "mousemove", true, move |ev| {
        if let Some((x, y)) = dom::client_pos(&ev) {
            page_move.borrow().on_avatar_move(&surface_move, x, y);
        }
    });

    let surface_leave = surface.clone();
    let page_leave = page.clone();
    let on_leave = dom::listen(&avatar, "mouseleave", true, move |_| {
        page_leave.borrow().on_avatar_leave(&surface_leave);
    });

    on_move.into_iter().chain(on_leave).collect()
}

/// Hover bursts on sparkle targets, smaller bursts on click for confetti
/// targets. The click keeps its default action.
pub fn wire_sparkles(surface: &WebSurface, page: &SharedPage) -> Vec<Listener> {
    let (hover, click) = match page.borrow().sparkles.as_ref() {
        Some(s) => (s.hover_targets().to_vec(), s.click_targets().to_vec()),
        None => return Vec::new(),
    };
    let mut listeners = Vec::with_capacity(hover.len() + click.len());

    for el in hover {
        let surface = surface.clone();
        let page = page.clone();
        let trigger = el.clone();
        listeners.extend(dom::listen(&el, "mouseenter", true, move |_| {
            page.borrow_mut().on_sparkle_hover(&surface, &trigger);
        }));
    }
    for el in click {
        let surface = surface.clone();
        let page = page.clone();
        let trigger = el.clone();
        listeners.extend(dom::listen(&el, "click", false, move |_| {
            page.borrow_mut().on_confetti_click(&surface, &trigger);
        }));
    }
    listeners
}
