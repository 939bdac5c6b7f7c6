// Keyboard flourishes: the easter-egg sequence and print shortcut passthrough

use crate::dom;
use crate::error::Result;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, KeyboardEvent};

pub const EASTER_EGG_CLASS: &str = "easter-egg";
pub const KONAMI_CODE: [&str; 10] = [
    "ArrowUp",
    "ArrowUp",
    "ArrowDown",
    "ArrowDown",
    "ArrowLeft",
    "ArrowRight",
    "ArrowLeft",
    "ArrowRight",
    "b",
    "a",
];

pub struct KeySequence {
    keys: &'static [&'static str],
    progress: usize,
}

impl KeySequence {
    pub fn new(keys: &'static [&'static str]) -> Self {
        KeySequence { keys, progress: 0 }
    }

    pub fn konami() -> Self {
        KeySequence::new(&KONAMI_CODE)
    }

    // Feeds one key; true when it completes the sequence
    pub fn push(&mut self, key: &str) -> bool {
        if self.keys.is_empty() {
            return false;
        }
        let key = normalize(key);
        self.progress = self.matched_after(key);
        if self.progress == self.keys.len() {
            self.progress = 0;
            return true;
        }
        false
    }

    // Longest prefix of the sequence that ends the input once `key` is added.
    // The input so far ends with keys[..progress], so only those need checking.
    fn matched_after(&self, key: &str) -> usize {
        let seen = &self.keys[..self.progress];
        (1..=self.progress + 1)
            .rev()
            .find(|&len| {
                self.keys[len - 1] == key && self.keys[..len - 1] == seen[seen.len() + 1 - len..]
            })
            .unwrap_or(0)
    }

    pub fn progress(&self) -> usize {
        self.progress
    }
}

// Letter keys match regardless of shift / caps lock
fn normalize(key: &str) -> &str {
    match key {
        "A" => "a",
        "B" => "b",
        _ => key,
    }
}

pub fn is_print_shortcut(key: &str, ctrl: bool, meta: bool) -> bool {
    (ctrl || meta) && (key == "p" || key == "P")
}

pub fn install(document: &Document) -> Result<()> {
    let doc = document.clone();
    let mut sequence = KeySequence::konami();
    let closure = Closure::wrap(Box::new(move |evt: KeyboardEvent| {
        let key = evt.key();
        if is_print_shortcut(&key, evt.ctrl_key(), evt.meta_key()) {
            // leave the browser's print dialog alone
            return;
        }
        if sequence.push(&key) {
            if let Ok(body) = dom::body(&doc) {
                let _ = body.class_list().toggle(EASTER_EGG_CLASS);
            }
            crate::log!("You found the secret! Thanks for exploring.");
        }
    }) as Box<dyn FnMut(_)>);
    document.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}
