/********************************************************************************
 * Copyright (c) 2026 Contributors to the Eclipse Foundation
 *
 * See the NOTICE file(s) distributed with this work for additional
 * information regarding copyright ownership.
 *
 * This program and the accompanying materials are made available under the
 * terms of the Apache License Version 2.0 which is available at
 * https://www.apache.org/licenses/LICENSE-2.0
 *
 * SPDX-License-Identifier: Apache-2.0
 ********************************************************************************/

//! Failure taxonomy shared by resolvers, the translator and event handlers.

use std::fmt::{Display, Formatter};
use thiserror::Error;

/// Classification of a collaborator failure.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum UpstreamErrorKind {
    /// Timeouts, throttling and other failures worth retrying.
    Transient,
    /// The collaborator has no record for the requested key.
    NotFound,
    /// The collaborator refused the request; retrying will not help.
    Rejected,
}

impl Display for UpstreamErrorKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            UpstreamErrorKind::Transient => write!(f, "transient"),
            UpstreamErrorKind::NotFound => write!(f, "not found"),
            UpstreamErrorKind::Rejected => write!(f, "rejected"),
        }
    }
}

/// Failure reported by an external collaborator.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
#[error("{kind} upstream failure: {message}")]
pub struct UpstreamError {
    pub kind: UpstreamErrorKind,
    pub message: String,
}

impl UpstreamError {
    pub fn transient(message: impl Into<String>) -> Self {
        Self {
            kind: UpstreamErrorKind::Transient,
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            kind: UpstreamErrorKind::NotFound,
            message: message.into(),
        }
    }

    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            kind: UpstreamErrorKind::Rejected,
            message: message.into(),
        }
    }

    /// Returns `true` when a retry may succeed.
    pub fn is_transient(&self) -> bool {
        self.kind == UpstreamErrorKind::Transient
    }
}

/// Translation of one locale failed after the retry budget was spent.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
#[error("translation {source_locale}->{target_locale} failed after {attempts} attempt(s): {reason}")]
pub struct TranslationError {
    pub source_locale: String,
    pub target_locale: String,
    pub attempts: u32,
    pub reason: String,
}

/// Failures raised while parsing or rendering a route template.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum TemplateError {
    #[error("template for page type '{page_type}' is malformed: {reason}")]
    Invalid { page_type: String, reason: String },

    #[error("template for page type '{page_type}' is missing parameters: {}", .missing.join(", "))]
    Mismatch {
        page_type: String,
        missing: Vec<String>,
    },
}

/// Every failure the engine can raise while resolving one entity or search URL.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum RouteError {
    #[error("no route template registered for page type '{page_type}'")]
    TemplateNotFound { page_type: String },

    #[error(transparent)]
    Template(#[from] TemplateError),

    #[error("category '{category_id}' appears twice in its own ancestor chain")]
    CyclicHierarchy { category_id: String },

    #[error("ancestor chain of category '{category_id}' exceeds {max_depth} levels")]
    MaxDepthExceeded {
        category_id: String,
        max_depth: usize,
    },

    #[error(transparent)]
    Translation(#[from] TranslationError),

    #[error("{collaborator} lookup for '{key}' failed: {source}")]
    UpstreamLookup {
        collaborator: &'static str,
        key: String,
        #[source]
        source: UpstreamError,
    },

    #[error("path has {segments} segment(s) but encoding has {tokens} token(s)")]
    EncodingMismatch { segments: usize, tokens: usize },

    #[error("route registration failed: {0}")]
    Registration(#[source] UpstreamError),
}

impl RouteError {
    pub(crate) fn lookup(
        collaborator: &'static str,
        key: impl Into<String>,
        source: UpstreamError,
    ) -> Self {
        RouteError::UpstreamLookup {
            collaborator,
            key: key.into(),
            source,
        }
    }

    /// Short, stable label used as the `reason` field of structured logs.
    pub fn reason(&self) -> &'static str {
        match self {
            RouteError::TemplateNotFound { .. } => "template_not_found",
            RouteError::Template(TemplateError::Invalid { .. }) => "template_invalid",
            RouteError::Template(TemplateError::Mismatch { .. }) => "template_mismatch",
            RouteError::CyclicHierarchy { .. } => "cyclic_hierarchy",
            RouteError::MaxDepthExceeded { .. } => "max_depth_exceeded",
            RouteError::Translation(_) => "translation_failed",
            RouteError::UpstreamLookup { .. } => "upstream_lookup_failed",
            RouteError::EncodingMismatch { .. } => "encoding_mismatch",
            RouteError::Registration(_) => "registration_failed",
        }
    }
}
