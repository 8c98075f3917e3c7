//! Immutable form state driven by a reducer.
//!
//! Each action consumes the current [`FormState`] and returns the next one.
//! The rendered output is recomputed from scratch whenever the connection
//! string or the target changes; render failures are caught here and reduce
//! the outputs to empty strings plus a one-line message.
use std::time::Instant;

use serde::Serialize;

use crate::{
    lib::{errors::GenerateError, telemetry},
    sanitizer::{self, SanitizedResult},
    templates::{AssistantTarget, RenderedConfig, TemplateGenerator},
};

pub mod notice;

pub use notice::{Notice, NoticeKind, COPIED_TEXT, NOTHING_TO_COPY_TEXT, NOTICE_TTL};

/// Which output a copy action reads from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopySource {
    Url,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormAction {
    ConnectionStringChanged(String),
    TargetSelected(AssistantTarget),
    Copied { source: CopySource, now: Instant },
    Tick(Instant),
}

/// Snapshot of what the form displays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormView<'a> {
    pub url: &'a str,
    pub json: &'a str,
    pub show_extra_instructions: bool,
    pub message: Option<&'a str>,
}

/// Form fields and derived output. The raw connection string is not kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    generator: TemplateGenerator,
    sanitized: SanitizedResult,
    has_input: bool,
    target: Option<AssistantTarget>,
    rendered: RenderedConfig,
    message: Option<String>,
    notice: Option<Notice>,
}

impl FormState {
    pub fn new(generator: TemplateGenerator) -> Self {
        Self {
            generator,
            sanitized: SanitizedResult::default(),
            has_input: false,
            target: None,
            rendered: RenderedConfig::default(),
            message: None,
            notice: None,
        }
    }

    pub fn reduce(self, action: FormAction) -> Self {
        match action {
            FormAction::ConnectionStringChanged(raw) => self.with_connection_string(&raw),
            FormAction::TargetSelected(target) => self.with_target(target),
            FormAction::Copied { source, now } => self.with_copy(source, now),
            FormAction::Tick(now) => self.with_tick(now),
        }
    }

    pub fn with_connection_string(self, raw: &str) -> Self {
        let sanitized = sanitizer::sanitize(raw);
        Self {
            sanitized,
            has_input: !raw.trim().is_empty(),
            ..self
        }
        .rerender()
    }

    pub fn with_target(self, target: AssistantTarget) -> Self {
        Self {
            target: Some(target),
            ..self
        }
        .rerender()
    }

    fn with_copy(self, source: CopySource, now: Instant) -> Self {
        let notice = if self.clipboard_text(source).is_some() {
            Notice::copied(now)
        } else {
            Notice::nothing_to_copy(now)
        };
        Self {
            notice: Some(notice),
            ..self
        }
    }

    fn with_tick(self, now: Instant) -> Self {
        let notice = self.notice.filter(|notice| !notice.is_expired(now));
        Self { notice, ..self }
    }

    fn rerender(self) -> Self {
        match self.try_render() {
            Ok(rendered) => {
                telemetry::log_rendered(self.target, &rendered);
                Self {
                    rendered,
                    message: None,
                    ..self
                }
            }
            Err(error) => {
                telemetry::log_render_failure(error);
                let message = (self.has_input || !error.is_expected()).then(|| error.to_string());
                Self {
                    rendered: RenderedConfig::default(),
                    message,
                    ..self
                }
            }
        }
    }

    fn try_render(&self) -> Result<RenderedConfig, GenerateError> {
        if self.sanitized.is_empty() {
            return Err(GenerateError::NoMatch);
        }
        self.generator.render(
            &self.sanitized.sanitized_url,
            self.sanitized.db_user.as_deref(),
            self.sanitized.db_type,
            self.target,
        )
    }

    /// Text a copy of `source` would place on the clipboard.
    pub fn clipboard_text(&self, source: CopySource) -> Option<&str> {
        let text = match source {
            CopySource::Url => self.rendered.url.as_str(),
            CopySource::Json => self.rendered.json.as_str(),
        };
        (!text.is_empty()).then_some(text)
    }

    pub fn view(&self) -> FormView<'_> {
        FormView {
            url: &self.rendered.url,
            json: &self.rendered.json,
            show_extra_instructions: self.rendered.show_extra_instructions,
            message: self.message.as_deref(),
        }
    }

    pub fn sanitized(&self) -> &SanitizedResult {
        &self.sanitized
    }

    pub fn target(&self) -> Option<AssistantTarget> {
        self.target
    }

    pub fn rendered(&self) -> &RenderedConfig {
        &self.rendered
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// The input matched nothing (an empty field is not a failure either).
    pub fn is_unmatched(&self) -> bool {
        self.has_input && self.sanitized.is_empty()
    }
}
