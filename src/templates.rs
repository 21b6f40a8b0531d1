// ABOUTME: HTML page rendering for the converter form, result and error pages
// ABOUTME: Loads templates once at startup and renders them through the PageRenderer trait
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Page templates
//!
//! Templates are plain HTML with `{{NAME}}` placeholders. Page templates pull
//! in the shared header and footer through `{{HEADER}}` and `{{FOOTER}}`,
//! which are spliced in when the templates are loaded. Rendering is a single
//! left-to-right pass, so substituted values are never scanned again.
//!
//! The router only sees [`PageRenderer`]; [`HtmlTemplates`] is the
//! implementation wired in by the server binary.

use crate::units::UnitCategory;
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

const HEADER_TEMPLATE: &str = include_str!("../templates/header.html");
const FOOTER_TEMPLATE: &str = include_str!("../templates/footer.html");
const FORM_TEMPLATE: &str = include_str!("../templates/form.html");
const RESULT_TEMPLATE: &str = include_str!("../templates/result.html");
const ERROR_TEMPLATE: &str = include_str!("../templates/error.html");

const HEADER: &str = "HEADER";
const FOOTER: &str = "FOOTER";
const TITLE: &str = "TITLE";
const NAV: &str = "NAV";
const CATEGORY: &str = "CATEGORY";
const CATEGORY_LABEL: &str = "CATEGORY_LABEL";
const UNIT_OPTIONS: &str = "UNIT_OPTIONS";
const VALUE: &str = "VALUE";
const FROM: &str = "FROM";
const RESULT: &str = "RESULT";
const TO: &str = "TO";
const ERROR: &str = "ERROR";

/// Template loading and rendering failures
#[derive(Debug, Error)]
pub enum TemplateError {
    /// A template file could not be read
    #[error("failed to read template {path}: {source}")]
    Io {
        /// File that failed
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },
    /// A template lacks a placeholder the page needs
    #[error("template {template} is missing placeholder {{{{{placeholder}}}}}")]
    MissingPlaceholder {
        /// Template name
        template: &'static str,
        /// Placeholder name without braces
        placeholder: &'static str,
    },
    /// A placeholder has no value at render time
    #[error("template {template} has no value for placeholder {{{{{placeholder}}}}}")]
    Unresolved {
        /// Template name
        template: &'static str,
        /// Placeholder name without braces
        placeholder: String,
    },
    /// A `{{` was never closed
    #[error("template {template} has an unterminated placeholder")]
    Unterminated {
        /// Template name
        template: &'static str,
    },
}

/// Data shown on the result page
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResultPage<'a> {
    /// Category the conversion ran in
    pub category: UnitCategory,
    /// Submitted value
    pub value: f64,
    /// Source unit key
    pub from_unit: &'a str,
    /// Converted value
    pub result: f64,
    /// Target unit key
    pub to_unit: &'a str,
}

/// Rendering capability injected into the router
pub trait PageRenderer: Send + Sync {
    /// Input form listing the category's units
    ///
    /// # Errors
    ///
    /// Returns an error if the template cannot be rendered
    fn render_form(&self, category: UnitCategory) -> Result<String, TemplateError>;

    /// Page showing a converted value
    ///
    /// # Errors
    ///
    /// Returns an error if the template cannot be rendered
    fn render_result(&self, page: &ResultPage<'_>) -> Result<String, TemplateError>;

    /// Page showing an error message
    ///
    /// # Errors
    ///
    /// Returns an error if the template cannot be rendered
    fn render_error(&self, message: &str) -> Result<String, TemplateError>;
}

/// Parsed page templates, immutable after loading
#[derive(Debug, Clone)]
pub struct HtmlTemplates {
    form: String,
    result: String,
    error: String,
}

impl HtmlTemplates {
    /// Templates compiled into the binary
    ///
    /// # Errors
    ///
    /// Returns an error if an embedded template lacks a required placeholder
    pub fn embedded() -> Result<Self, TemplateError> {
        Self::compose(
            HEADER_TEMPLATE,
            FOOTER_TEMPLATE,
            FORM_TEMPLATE,
            RESULT_TEMPLATE,
            ERROR_TEMPLATE,
        )
    }

    /// Load `header.html`, `footer.html`, `form.html`, `result.html` and
    /// `error.html` from `dir`
    ///
    /// # Errors
    ///
    /// Returns an error if a file is unreadable or lacks a required placeholder
    pub fn from_dir(dir: &Path) -> Result<Self, TemplateError> {
        let read = |name: &str| {
            let path = dir.join(name);
            fs::read_to_string(&path).map_err(|source| TemplateError::Io { path, source })
        };

        let header = read("header.html")?;
        let footer = read("footer.html")?;
        let form = read("form.html")?;
        let result = read("result.html")?;
        let error = read("error.html")?;

        tracing::info!(dir = %dir.display(), "Loaded page templates from directory");
        Self::compose(&header, &footer, &form, &result, &error)
    }

    fn compose(
        header: &str,
        footer: &str,
        form: &str,
        result: &str,
        error: &str,
    ) -> Result<Self, TemplateError> {
        require("header.html", header, &[TITLE, NAV])?;
        require("form.html", form, &[HEADER, FOOTER, CATEGORY, UNIT_OPTIONS])?;
        require("result.html", result, &[HEADER, FOOTER, RESULT, TO])?;
        require("error.html", error, &[HEADER, FOOTER, ERROR])?;

        let splice = |page: &str| {
            page.replace(&placeholder(HEADER), header)
                .replace(&placeholder(FOOTER), footer)
        };

        Ok(Self {
            form: splice(form),
            result: splice(result),
            error: splice(error),
        })
    }
}

impl PageRenderer for HtmlTemplates {
    fn render_form(&self, category: UnitCategory) -> Result<String, TemplateError> {
        let nav = navigation(Some(category));
        let options = unit_options(category);
        render(
            "form.html",
            &self.form,
            &[
                (TITLE, category.label()),
                (NAV, nav.as_str()),
                (CATEGORY, category.slug()),
                (CATEGORY_LABEL, category.label()),
                (UNIT_OPTIONS, options.as_str()),
            ],
        )
    }

    fn render_result(&self, page: &ResultPage<'_>) -> Result<String, TemplateError> {
        let nav = navigation(Some(page.category));
        let value = page.value.to_string();
        let result = page.result.to_string();
        let from = html_escape::encode_text(page.from_unit);
        let to = html_escape::encode_text(page.to_unit);
        render(
            "result.html",
            &self.result,
            &[
                (TITLE, page.category.label()),
                (NAV, nav.as_str()),
                (CATEGORY, page.category.slug()),
                (CATEGORY_LABEL, page.category.label()),
                (VALUE, value.as_str()),
                (FROM, from.as_ref()),
                (RESULT, result.as_str()),
                (TO, to.as_ref()),
            ],
        )
    }

    fn render_error(&self, message: &str) -> Result<String, TemplateError> {
        let nav = navigation(None);
        let message = html_escape::encode_text(message);
        render(
            "error.html",
            &self.error,
            &[(TITLE, "Error"), (NAV, nav.as_str()), (ERROR, message.as_ref())],
        )
    }
}

fn placeholder(name: &str) -> String {
    format!("{{{{{name}}}}}")
}

fn require(
    template: &'static str,
    source: &str,
    names: &[&'static str],
) -> Result<(), TemplateError> {
    names
        .iter()
        .find(|name| !source.contains(&placeholder(name)))
        .map_or(Ok(()), |name| {
            Err(TemplateError::MissingPlaceholder {
                template,
                placeholder: *name,
            })
        })
}

/// Single pass substitution of `{{NAME}}` placeholders
fn render(
    template: &'static str,
    source: &str,
    values: &[(&str, &str)],
) -> Result<String, TemplateError> {
    let mut out = String::with_capacity(source.len() + 256);
    let mut rest = source;

    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let end = after
            .find("}}")
            .ok_or(TemplateError::Unterminated { template })?;
        let name = after[..end].trim();
        let value = values
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| *value)
            .ok_or_else(|| TemplateError::Unresolved {
                template,
                placeholder: name.to_owned(),
            })?;
        out.push_str(value);
        rest = &after[end + 2..];
    }
    out.push_str(rest);

    Ok(out)
}

fn navigation(active: Option<UnitCategory>) -> String {
    let mut nav = String::new();
    for category in UnitCategory::ALL {
        let class = if Some(category) == active {
            " class=\"active\""
        } else {
            ""
        };
        let _ = write!(
            nav,
            "<a href=\"/{slug}\"{class}>{label}</a>",
            slug = category.slug(),
            label = category.label()
        );
    }
    nav
}

fn unit_options(category: UnitCategory) -> String {
    let mut options = String::new();
    for name in category.unit_names() {
        let _ = write!(
            options,
            "<option value=\"{value}\">{text}</option>",
            value = html_escape::encode_double_quoted_attribute(name),
            text = html_escape::encode_text(name)
        );
    }
    options
}
