// Copyright 2025 The Drasi Authors.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Validation failures reported back to API clients.

use serde::Serialize;
use utoipa::ToSchema;
use validator::ValidationErrors;

/// A single constraint violated by an input field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct FieldViolation {
    /// Name of the offending field (`body` when the payload could not be read at all)
    pub field: String,
    /// Short machine-readable name of the failed check
    pub code: String,
    /// Human-readable explanation
    pub message: String,
}

impl FieldViolation {
    pub fn new(
        field: impl Into<String>,
        code: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            code: code.into(),
            message: message.into(),
        }
    }
}

/// Input rejected by item validation.
///
/// Carries every violated constraint, not just the first one, ordered by
/// field name so responses are stable.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{} field(s) failed validation", .violations.len())]
pub struct ItemValidationError {
    pub violations: Vec<FieldViolation>,
}

impl ItemValidationError {
    pub fn new(mut violations: Vec<FieldViolation>) -> Self {
        violations.sort_by(|a, b| a.field.cmp(&b.field).then_with(|| a.code.cmp(&b.code)));
        Self { violations }
    }

    pub fn single(
        field: impl Into<String>,
        code: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            violations: vec![FieldViolation::new(field, code, message)],
        }
    }

    /// Names of the fields that failed, in report order.
    pub fn fields(&self) -> Vec<&str> {
        self.violations.iter().map(|v| v.field.as_str()).collect()
    }
}

impl From<ValidationErrors> for ItemValidationError {
    fn from(errors: ValidationErrors) -> Self {
        let mut violations = Vec::new();
        for (field, field_errors) in errors.field_errors() {
            let field = field.to_string();
            for error in field_errors {
                let message = match &error.message {
                    Some(message) => message.to_string(),
                    None => format!("{field} failed the '{}' check", error.code),
                };
                violations.push(FieldViolation::new(field.clone(), error.code.to_string(), message));
            }
        }
        Self::new(violations)
    }
}
