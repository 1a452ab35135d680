//! Styled console introduction rendering (variant 2).

use crate::error::Error;

/// Input for [`crate::banner::init_console_intro`].
#[derive(Debug, Clone, Default)]
pub struct ConsoleIntro {
    /// Credited author; required.
    pub author: String,
    /// Project title; required.
    pub title: String,
    /// Optional repository link appended to the headline.
    pub repository: Option<String>,
    /// Optional website link appended to the headline.
    pub website: Option<String>,
}

impl ConsoleIntro {
    pub(super) fn validate(&self) -> Result<(), Error> {
        if self.author.is_empty() {
            return Err(Error::MissingRequiredField { field: "author" });
        }
        if self.title.is_empty() {
            return Err(Error::MissingRequiredField { field: "title" });
        }
        Ok(())
    }
}

// Style directives are opaque `%c` tokens for the host console; they are
// passed through verbatim by the sinks that support styling.
const TITLE_STYLE: &str = "color:#fff;background:#1c7ed6;padding:2px 6px;border-radius:3px";
const CREDIT_STYLE: &str = "color:#868e96;font-style:italic";

pub(super) struct StyledLine {
    pub message: String,
    pub styles: Vec<&'static str>,
}

/// Render the headline (title plus optional links) and the credit line.
pub(super) fn render_intro(intro: &ConsoleIntro) -> Vec<StyledLine> {
    let mut headline = format!("%c{}", intro.title);
    if let Some(repo) = &intro.repository {
        headline.push_str(" | ");
        headline.push_str(repo);
    }
    if let Some(site) = &intro.website {
        headline.push_str(" | ");
        headline.push_str(site);
    }

    vec![
        StyledLine {
            message: headline,
            styles: vec![TITLE_STYLE],
        },
        StyledLine {
            message: format!("%cbuilt by {}", intro.author),
            styles: vec![CREDIT_STYLE],
        },
    ]
}
