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

//! Parsed route patterns and reverse formatting.

use crate::error::TemplateError;
use std::collections::BTreeMap;

/// Named values substituted into a route pattern.
pub type RouteParams = BTreeMap<String, String>;

#[derive(Clone, Debug, Eq, PartialEq)]
enum PatternToken {
    Literal(String),
    /// `:name`, a single path segment.
    Param(String),
    /// `*name`, may span several segments.
    Splat(String),
    /// `( ... )`, emitted only when every parameter inside has a value.
    Optional(Vec<PatternToken>),
}

/// A page-type path pattern such as `/:department/:category(/:subcategory)`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RouteTemplate {
    page_type: String,
    pattern: String,
    tokens: Vec<PatternToken>,
}

fn is_name_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_'
}

impl RouteTemplate {
    /// Parses `pattern` registered for `page_type`.
    pub fn parse(page_type: &str, pattern: &str) -> Result<Self, TemplateError> {
        let invalid = |reason: &str| TemplateError::Invalid {
            page_type: page_type.to_string(),
            reason: reason.to_string(),
        };

        // Bottom entry is the top-level token list; each open group pushes one.
        let mut groups: Vec<Vec<PatternToken>> = vec![Vec::new()];
        let mut literal = String::new();
        let mut chars = pattern.chars().peekable();

        while let Some(ch) = chars.next() {
            match ch {
                ':' | '*' => {
                    let mut name = String::new();
                    while let Some(next) = chars.peek().copied().filter(|c| is_name_char(*c)) {
                        name.push(next);
                        chars.next();
                    }
                    if name.is_empty() {
                        return Err(invalid(&format!("'{ch}' is not followed by a name")));
                    }
                    let current = groups.last_mut().ok_or_else(|| invalid("empty group"))?;
                    if !literal.is_empty() {
                        current.push(PatternToken::Literal(std::mem::take(&mut literal)));
                    }
                    current.push(if ch == ':' {
                        PatternToken::Param(name)
                    } else {
                        PatternToken::Splat(name)
                    });
                }
                '(' => {
                    if let Some(current) = groups.last_mut() {
                        if !literal.is_empty() {
                            current.push(PatternToken::Literal(std::mem::take(&mut literal)));
                        }
                    }
                    groups.push(Vec::new());
                }
                ')' => {
                    if groups.len() < 2 {
                        return Err(invalid("unbalanced ')'"));
                    }
                    let mut closed = groups.pop().unwrap_or_default();
                    if !literal.is_empty() {
                        closed.push(PatternToken::Literal(std::mem::take(&mut literal)));
                    }
                    if let Some(parent) = groups.last_mut() {
                        parent.push(PatternToken::Optional(closed));
                    }
                }
                other => literal.push(other),
            }
        }

        if groups.len() != 1 {
            return Err(invalid("unbalanced '('"));
        }
        let mut tokens = groups.pop().unwrap_or_default();
        if !literal.is_empty() {
            tokens.push(PatternToken::Literal(literal));
        }

        Ok(Self {
            page_type: page_type.to_string(),
            pattern: pattern.to_string(),
            tokens,
        })
    }

    pub fn page_type(&self) -> &str {
        &self.page_type
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Parameter names in pattern order, optional ones included.
    pub fn parameters(&self) -> Vec<&str> {
        fn collect<'t>(tokens: &'t [PatternToken], names: &mut Vec<&'t str>) {
            for token in tokens {
                match token {
                    PatternToken::Param(name) | PatternToken::Splat(name) => {
                        if !names.contains(&name.as_str()) {
                            names.push(name.as_str());
                        }
                    }
                    PatternToken::Optional(inner) => collect(inner, names),
                    PatternToken::Literal(_) => {}
                }
            }
        }

        let mut names = Vec::new();
        collect(&self.tokens, &mut names);
        names
    }

    /// Reverse-formats the pattern into a concrete path.
    ///
    /// Empty values count as missing. A missing required parameter fails with
    /// [`TemplateError::Mismatch`]; an optional group with a missing parameter is
    /// dropped as a whole.
    pub fn render(&self, params: &RouteParams) -> Result<String, TemplateError> {
        let mut path = String::new();
        let mut missing = Vec::new();
        Self::render_tokens(&self.tokens, params, &mut path, &mut missing);

        if missing.is_empty() {
            Ok(path)
        } else {
            missing.dedup();
            Err(TemplateError::Mismatch {
                page_type: self.page_type.clone(),
                missing,
            })
        }
    }

    fn render_tokens(
        tokens: &[PatternToken],
        params: &RouteParams,
        out: &mut String,
        missing: &mut Vec<String>,
    ) {
        for token in tokens {
            match token {
                PatternToken::Literal(text) => out.push_str(text),
                PatternToken::Param(name) | PatternToken::Splat(name) => {
                    match params.get(name).filter(|value| !value.is_empty()) {
                        Some(value) => out.push_str(value),
                        None => missing.push(name.clone()),
                    }
                }
                PatternToken::Optional(inner) => {
                    let mut group = String::new();
                    let mut group_missing = Vec::new();
                    Self::render_tokens(inner, params, &mut group, &mut group_missing);
                    if group_missing.is_empty() {
                        out.push_str(&group);
                    }
                }
            }
        }
    }
}
