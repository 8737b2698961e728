//! Script assembly: composes the enabled sections of a document into the
//! final script text.

use serde::Serialize;

use crate::document::DocumentState;
use crate::menu;
use crate::snippets;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Shebang,
    AsciiArt,
    MainBody,
    Menu,
}

/// Header title and footer rule of a commented section.
struct Banner {
    title: &'static str,
    rule: &'static str,
}

const ASCII_ART: Banner = Banner {
    title: "ASCII Art",
    rule: "-----------------",
};

const MAIN_LOGIC: Banner = Banner {
    title: "Main Script Logic",
    rule: "-------------------------",
};

const MAIN_LOGIC_WITH_MENU: Banner = Banner {
    title: "Functions & Main Logic (called by menu)",
    rule: "--------------------------------------------",
};

const MENU_SYSTEM: Banner = Banner {
    title: "Menu System",
    rule: "-------------------",
};

/// Assembled script text plus the sections that contributed to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Assembly {
    pub content: String,
    pub sections: Vec<Section>,
}

pub fn assemble(state: &DocumentState) -> String {
    assemble_report(state).content
}

pub fn assemble_report(state: &DocumentState) -> Assembly {
    let marker = state.dialect.comment_marker();
    let mut content = String::new();
    let mut sections = Vec::new();

    if let Some(shebang) = snippets::find(state.dialect, "shebang") {
        content.push_str(shebang.code);
        content.push('\n');
        sections.push(Section::Shebang);
    }

    if state.ascii_art_enabled && !state.ascii_art_text.trim().is_empty() {
        let art = state
            .ascii_art_text
            .split('\n')
            .map(|line| format!("{} {}", marker, line))
            .collect::<Vec<_>>()
            .join("\n");
        push_block(&mut content, marker, &ASCII_ART, &art);
        sections.push(Section::AsciiArt);
    }

    if !state.main_body_text.trim().is_empty() {
        // The banner tracks the toggle, even while the item list is still empty.
        let banner = if state.menu_enabled {
            &MAIN_LOGIC_WITH_MENU
        } else {
            &MAIN_LOGIC
        };
        push_block(&mut content, marker, banner, &state.main_body_text);
        sections.push(Section::MainBody);
    }

    if state.menu_enabled && !state.menu_items.is_empty() {
        let code = menu::generate_menu(state.dialect, &state.menu_items);
        push_block(&mut content, marker, &MENU_SYSTEM, &code);
        sections.push(Section::Menu);
    }

    Assembly { content, sections }
}

fn push_block(content: &mut String, marker: &str, banner: &Banner, body: &str) {
    content.push_str(&format!("{} --- {} ---\n", marker, banner.title));
    content.push_str(body);
    content.push_str(&format!("\n{} {}\n\n", marker, banner.rule));
}
