// ABOUTME: Converter page routes: category forms, form submission and invalid paths
// ABOUTME: Parses submitted fields, runs the converter and renders result or error pages
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Converter routes
//!
//! Every category has two states: `GET /{category}` shows the form and
//! `POST /{category}` handles a submission. `GET /` is the distance form.
//! Anything that does not name a category gets the error page.

use crate::{
    constants::messages,
    converter::ConversionRequest,
    errors::{AppError, AppResult, ErrorCode},
    resources::ServerResources,
    templates::{ResultPage, TemplateError},
    units::UnitCategory,
};
use axum::{
    extract::{rejection::FormRejection, Path, State},
    http::{StatusCode, Uri},
    response::{Html, IntoResponse, Response},
    routing::get,
    Form, Router,
};
use serde::Deserialize;
use std::sync::Arc;
use tracing::{debug, error, warn};

/// Fields posted by the category form
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConversionForm {
    /// Value to convert, as typed
    #[serde(default)]
    pub num: String,
    /// Source unit key
    #[serde(default)]
    pub from: String,
    /// Target unit key
    #[serde(default)]
    pub to: String,
}

impl ConversionForm {
    /// Validate the fields into a conversion request
    ///
    /// # Errors
    ///
    /// Returns `MissingInput` for empty fields and `UnparseableInput` when
    /// `num` is not a number
    pub fn into_request(self, category: UnitCategory) -> AppResult<ConversionRequest> {
        let value = parse_value(&self.num)?;
        let from = required_unit(self.from, "from")?;
        let to = required_unit(self.to, "to")?;
        Ok(ConversionRequest::new(category, value, from, to))
    }
}

fn parse_value(raw: &str) -> AppResult<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(AppError::missing_input(messages::ENTER_A_VALUE));
    }
    trimmed.parse::<f64>().map_err(|e| {
        AppError::unparseable_input(format!("'{trimmed}' is not a number")).with_source(e)
    })
}

fn required_unit(unit: String, direction: &str) -> AppResult<String> {
    let unit = unit.trim();
    if unit.is_empty() {
        return Err(AppError::missing_input(format!(
            "please select a unit to convert {direction}"
        )));
    }
    Ok(unit.to_owned())
}

/// Converter route handlers
pub struct ConverterRoutes;

impl ConverterRoutes {
    /// Create the form, submission and invalid-path routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/", get(Self::handle_default_form))
            .route(
                "/:category",
                get(Self::handle_form).post(Self::handle_convert),
            )
            .fallback(Self::handle_invalid_path)
            .with_state(resources)
    }

    async fn handle_default_form(State(resources): State<Arc<ServerResources>>) -> Response {
        Self::form_page(&resources, UnitCategory::Distance)
    }

    async fn handle_form(
        State(resources): State<Arc<ServerResources>>,
        Path(slug): Path<String>,
    ) -> Response {
        match UnitCategory::from_slug(&slug) {
            Some(category) => Self::form_page(&resources, category),
            None => Self::error_page(&resources, &AppError::invalid_path()),
        }
    }

    async fn handle_convert(
        State(resources): State<Arc<ServerResources>>,
        Path(slug): Path<String>,
        form: Result<Form<ConversionForm>, FormRejection>,
    ) -> Response {
        let Some(category) = UnitCategory::from_slug(&slug) else {
            return Self::error_page(&resources, &AppError::invalid_path());
        };

        let form = match form {
            Ok(Form(form)) => form,
            Err(rejection) => {
                warn!(%rejection, category = %category, "Rejected conversion form body");
                ConversionForm::default()
            }
        };

        let conversion = form.into_request(category).and_then(|request| {
            let result = request.convert()?;
            Ok((request, result))
        });

        match conversion {
            Ok((request, result)) => {
                debug!(
                    category = %category,
                    from = %request.from_unit,
                    to = %request.to_unit,
                    value = request.value,
                    result,
                    "Converted value"
                );
                let page = ResultPage {
                    category,
                    value: request.value,
                    from_unit: &request.from_unit,
                    result,
                    to_unit: &request.to_unit,
                };
                Self::html(&resources, StatusCode::OK, resources.renderer.render_result(&page))
            }
            Err(e) => Self::error_page(&resources, &e),
        }
    }

    async fn handle_invalid_path(
        State(resources): State<Arc<ServerResources>>,
        uri: Uri,
    ) -> Response {
        debug!(path = %uri.path(), "No route for path");
        Self::error_page(&resources, &AppError::invalid_path())
    }

    fn form_page(resources: &ServerResources, category: UnitCategory) -> Response {
        Self::html(
            resources,
            StatusCode::OK,
            resources.renderer.render_form(category),
        )
    }

    /// Wrap a rendered page, or turn a render failure into the error page
    fn html(
        resources: &ServerResources,
        status: StatusCode,
        rendered: Result<String, TemplateError>,
    ) -> Response {
        match rendered {
            Ok(html) => (status, Html(html)).into_response(),
            Err(e) => {
                error!(error = %e, "Failed to render page");
                let failure =
                    AppError::template(ErrorCode::TemplateRenderFailure.description())
                        .with_source(e);
                Self::error_page(resources, &failure)
            }
        }
    }

    /// Render the error page for `error`; plain text if that fails too
    fn error_page(resources: &ServerResources, error: &AppError) -> Response {
        if error.http_status().is_client_error() {
            warn!(error.code = %error.code, error.message = %error.message, "Request failed");
        }

        match resources.renderer.render_error(&error.message) {
            Ok(html) => (error.http_status(), Html(html)).into_response(),
            Err(e) => {
                error!(error = %e, "Failed to render error page");
                AppError::template(e.to_string()).with_source(e).into_response()
            }
        }
    }
}
