// Types out the text of [data-typewriter] elements one character at a time

use crate::dom;
use crate::error::Result;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Window};

pub const TYPEWRITER_SELECTOR: &str = "[data-typewriter]";
pub const START_DELAY_MS: i32 = 400;
pub const CHAR_DELAY_MS: i32 = 70;

pub struct Typewriter {
    text: String,
    // byte offset of the end of the visible prefix
    shown: usize,
}

impl Typewriter {
    pub fn new(text: &str) -> Self {
        Typewriter {
            text: text.to_owned(),
            shown: 0,
        }
    }

    // Reveals one more character and returns the visible prefix, None once complete
    pub fn advance(&mut self) -> Option<&str> {
        let next = self.text[self.shown..].chars().next()?;
        self.shown += next.len_utf8();
        Some(&self.text[..self.shown])
    }

    pub fn is_done(&self) -> bool {
        self.shown == self.text.len()
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

type TimeoutCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

fn type_into(window: &Window, el: Element) -> Result<()> {
    let text = el.text_content().unwrap_or_default();
    if text.is_empty() {
        return Ok(());
    }
    el.set_text_content(Some(""));
    let mut writer = Typewriter::new(&text);

    let f: TimeoutCallback = Rc::new(RefCell::new(None));
    let g = f.clone();
    let win = window.clone();
    *g.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if let Some(prefix) = writer.advance() {
            el.set_text_content(Some(prefix));
        }
        if writer.is_done() {
            return;
        }
        if let Some(callback) = f.borrow().as_ref() {
            let _ = win.set_timeout_with_callback_and_timeout_and_arguments_0(
                callback.as_ref().unchecked_ref(),
                CHAR_DELAY_MS,
            );
        }
    }) as Box<dyn FnMut()>));
    if let Some(callback) = g.borrow().as_ref() {
        window.set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.as_ref().unchecked_ref(),
            START_DELAY_MS,
        )?;
    }
    Ok(())
}

pub fn install(window: &Window, document: &Document) -> Result<()> {
    for el in dom::query_all(document, TYPEWRITER_SELECTOR)? {
        type_into(window, el)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveals_one_char_per_advance() {
        let mut t = Typewriter::new("PhD");
        assert_eq!(t.advance(), Some("P"));
        assert_eq!(t.advance(), Some("Ph"));
        assert!(!t.is_done());
        assert_eq!(t.advance(), Some("PhD"));
        assert!(t.is_done());
        assert_eq!(t.advance(), None);
    }

    #[test]
    fn steps_over_multibyte_chars() {
        let mut t = Typewriter::new("né→");
        assert_eq!(t.advance(), Some("n"));
        assert_eq!(t.advance(), Some("né"));
        assert_eq!(t.advance(), Some("né→"));
        assert_eq!(t.advance(), None);
        assert_eq!(t.text(), "né→");
    }

    #[test]
    fn empty_text_is_done_immediately() {
        let mut t = Typewriter::new("");
        assert!(t.is_done());
        assert_eq!(t.advance(), None);
    }
}
