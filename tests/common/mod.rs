//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Minimal PNG signature, enough to stand in for an icon
pub const ICON_BYTES: &[u8] = &[0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1a, b'\n'];

/// Builder for a working directory laid out like the launcher expects:
/// `html/`, `icon/`, and a `home/` whose plugin directory receives output
pub struct WorkspaceBuilder {
    temp_dir: TempDir,
}

impl WorkspaceBuilder {
    /// Create a new builder with empty `html/` and `icon/` directories
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        fs::create_dir_all(temp_dir.path().join("html")).expect("Failed to create html dir");
        fs::create_dir_all(temp_dir.path().join("icon")).expect("Failed to create icon dir");
        fs::create_dir_all(temp_dir.path().join("home")).expect("Failed to create home dir");
        Self { temp_dir }
    }

    /// Add a saved page under `html/`
    pub fn with_html(self, file_name: &str, content: &str) -> Self {
        fs::write(self.temp_dir.path().join("html").join(file_name), content)
            .expect("Failed to write html file");
        self
    }

    /// Add an icon under `icon/`
    pub fn with_icon(self, file_name: &str) -> Self {
        fs::write(self.temp_dir.path().join("icon").join(file_name), ICON_BYTES)
            .expect("Failed to write icon");
        self
    }

    /// Add both icons and all three default pages
    pub fn with_default_sources(self, claude_sh: &str, claude_esc: &str, chatgpt_sh: &str) -> Self {
        self.with_icon("claude-icon.png")
            .with_icon("chatgpt-icon.png")
            .with_html("claude_project_sh.html", claude_sh)
            .with_html("claude_project_esc.html", claude_esc)
            .with_html("chatgpt_project_sh.html", chatgpt_sh)
    }

    /// Build and return the temp directory (consumes self)
    pub fn build(self) -> TempDir {
        self.temp_dir
    }
}

impl Default for WorkspaceBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Fake home directory inside a workspace
pub fn home_dir(workspace: &Path) -> PathBuf {
    workspace.join("home")
}

/// Plugin data directory under the fake home
pub fn fts_dir(workspace: &Path) -> PathBuf {
    home_dir(workspace).join(".alfred-afwf").join("afwf_fts_anything")
}

/// Builder for a saved claude.ai projects page
pub struct ClaudePageBuilder {
    cards: Vec<String>,
}

impl ClaudePageBuilder {
    pub fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Add a project card with the markup claude.ai uses
    pub fn project(mut self, id: &str, name: &str, description: &str) -> Self {
        self.cards.push(format!(
            r#"<li><a class="flex flex-col rounded-2xl" href="/project/{}"><div class="flex items-center"><div class="truncate">{}</div></div><div class="text-text-300 mt-1 line-clamp-3 text-sm flex-grow">{}</div><div class="text-text-500 text-xs">Updated 2 days ago</div></a></li>"#,
            id, name, description
        ));
        self
    }

    /// Add a project card without a description element
    pub fn project_without_description(mut self, id: &str, name: &str) -> Self {
        self.cards.push(format!(
            r#"<li><a href="/project/{}"><div class="truncate">{}</div></a></li>"#,
            id, name
        ));
        self
    }

    /// Add arbitrary markup between cards
    pub fn raw(mut self, html: &str) -> Self {
        self.cards.push(html.to_string());
        self
    }

    pub fn build(&self) -> String {
        format!(
            r#"<!DOCTYPE html><html><head><title>Projects - Claude</title></head><body><nav><a href="/new">New chat</a><a href="/projects">Projects</a></nav><main><ul>{}</ul></main></body></html>"#,
            self.cards.join("")
        )
    }
}

impl Default for ClaudePageBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for a saved chatgpt.com page with the projects sidebar
pub struct ChatGptPageBuilder {
    links: Vec<String>,
}

impl ChatGptPageBuilder {
    pub fn new() -> Self {
        Self { links: Vec::new() }
    }

    /// Add a sidebar project link (`/g/g-p-{id}-{slug}/project`)
    pub fn project(mut self, id: &str, slug: &str, title: &str) -> Self {
        self.links.push(format!(
            r#"<a class="group flex items-center" href="/g/g-p-{}-{}/project" title="{}"><div class="truncate">{}</div></a>"#,
            id, slug, title, title
        ));
        self
    }

    /// Add a chat link that must not be picked up
    pub fn chat(mut self, id: &str, title: &str) -> Self {
        self.links.push(format!(r#"<a href="/c/{}" title="{}">{}</a>"#, id, title, title));
        self
    }

    pub fn raw(mut self, html: &str) -> Self {
        self.links.push(html.to_string());
        self
    }

    pub fn build(&self) -> String {
        format!(
            r#"<!DOCTYPE html><html><head><title>ChatGPT</title></head><body><nav aria-label="Chat history"><a href="/">New chat</a><a href="/gpts">GPTs</a>{}</nav></body></html>"#,
            self.links.join("")
        )
    }
}

impl Default for ChatGptPageBuilder {
    fn default() -> Self {
        Self::new()
    }
}
