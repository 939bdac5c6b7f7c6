// Styled greeting printed to the developer console at start-up.
// Profile details come from data-* attributes on <body>.

use wasm_bindgen::JsValue;
use web_sys::{console, HtmlElement};

const NAME_STYLE: &str = "color: #1a4d7c; font-size: 20px; font-weight: bold;";
const ROLE_STYLE: &str = "color: #8b4513; font-size: 14px; font-style: italic;";
const AFFILIATION_STYLE: &str = "color: #5a6c7d; font-size: 12px;";
const INVITE_STYLE: &str = "color: #2c3e50; font-size: 12px;";
const READY_STYLE: &str = "color: #1a4d7c; font-weight: bold;";

pub const INVITE_TEXT: &str = "\nInterested in collaboration? Get in touch!";
pub const READY_TEXT: &str = "✓ Website initialized successfully";

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Profile {
    pub name: Option<String>,
    pub role: Option<String>,
    pub affiliation: Option<String>,
    pub email: Option<String>,
    pub github: Option<String>,
}

impl Profile {
    pub fn from_body(body: &HtmlElement) -> Profile {
        let read = |attr: &str| body.get_attribute(attr).filter(|v| !v.trim().is_empty());
        Profile {
            name: read("data-owner"),
            role: read("data-role"),
            affiliation: read("data-affiliation"),
            email: read("data-email"),
            github: read("data-github"),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct BannerLine {
    pub text: String,
    // None prints the line unstyled
    pub style: Option<&'static str>,
}

impl BannerLine {
    fn styled(text: &str, style: &'static str) -> Self {
        BannerLine {
            text: text.to_owned(),
            style: Some(style),
        }
    }

    fn plain(text: String) -> Self {
        BannerLine { text, style: None }
    }
}

pub fn banner_lines(profile: &Profile) -> Vec<BannerLine> {
    let mut lines = Vec::new();
    let styled = [
        (&profile.name, NAME_STYLE),
        (&profile.role, ROLE_STYLE),
        (&profile.affiliation, AFFILIATION_STYLE),
    ];
    for &(field, style) in styled.iter() {
        if let Some(text) = field {
            lines.push(BannerLine::styled(text, style));
        }
    }
    if profile.email.is_some() || profile.github.is_some() {
        lines.push(BannerLine::styled(INVITE_TEXT, INVITE_STYLE));
    }
    if let Some(email) = &profile.email {
        lines.push(BannerLine::plain(format!("Email: {}", email)));
    }
    if let Some(github) = &profile.github {
        lines.push(BannerLine::plain(format!("GitHub: {}", github)));
    }
    lines
}

pub fn ready_line() -> BannerLine {
    BannerLine::styled(READY_TEXT, READY_STYLE)
}

pub fn print(line: &BannerLine) {
    match line.style {
        Some(style) => console::log_2(
            &JsValue::from_str(&format!("%c{}", line.text)),
            &JsValue::from_str(style),
        ),
        None => console::log_1(&JsValue::from_str(&line.text)),
    }
}
