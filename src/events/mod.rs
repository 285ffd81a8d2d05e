mod pointer;
mod scroll;

use folio_core::Portfolio;
use rand::rngs::StdRng;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

pub use pointer::{start_cursor_loop, wire_avatar, wire_pointer, wire_sparkles};
pub use scroll::{wire_nav_observer, wire_reveal_observer, wire_scroll, wire_to_top};

pub type SharedPage = Rc<RefCell<Portfolio<web::HtmlElement, StdRng>>>;
