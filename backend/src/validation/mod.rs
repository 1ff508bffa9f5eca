//! Request validation pipeline
//!
//! Each route declares an ordered list of shape validators. A validator is
//! a pure function `fn(&T) -> ValidationResult`; the pipeline runner
//! evaluates the list in declared order and stops at the first failing
//! validator, surfacing all of that validator's field messages and none
//! from later steps. Output is deterministic: the same malformed input
//! always produces the same message set.
//!
//! Field-level checks live in `scribe_shared::validation`; this module
//! composes them into the per-route shapes and maps failures to 400
//! responses before any handler or database call runs.

use crate::error::ApiError;
use scribe_shared::types::{
    ArticlePayload, LoginRequest, PartialUpdateUserRequest, PostPayload, RegisterRequest,
    UpdateUserRequest,
};
use scribe_shared::validation as fields;

/// Outcome of a validator or a whole pipeline run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    Valid,
    Invalid(Vec<String>),
}

impl ValidationResult {
    /// Collect per-field messages into a result; no messages means valid
    pub fn from_messages(messages: Vec<String>) -> Self {
        if messages.is_empty() {
            Self::Valid
        } else {
            Self::Invalid(messages)
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// Convert into a handler result, mapping failures to a 400 response
    pub fn into_result(self) -> Result<(), ApiError> {
        match self {
            Self::Valid => Ok(()),
            Self::Invalid(messages) => Err(ApiError::Validation(messages)),
        }
    }
}

/// An ordered, short-circuiting list of validators over one input type
pub struct Pipeline<T: ?Sized> {
    steps: Vec<fn(&T) -> ValidationResult>,
}

impl<T: ?Sized> Pipeline<T> {
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    /// Append a validator; order of calls is the order of evaluation
    pub fn step(mut self, validator: fn(&T) -> ValidationResult) -> Self {
        self.steps.push(validator);
        self
    }

    /// Run the steps in declared order, returning the first failure
    pub fn run(&self, input: &T) -> ValidationResult {
        for step in &self.steps {
            if let ValidationResult::Invalid(messages) = step(input) {
                return ValidationResult::Invalid(messages);
            }
        }
        ValidationResult::Valid
    }
}

impl<T: ?Sized> Default for Pipeline<T> {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Shape validators
// ---------------------------------------------------------------------------

/// Registration payload: username, email, and password all present and valid
pub fn registration_shape(req: &RegisterRequest) -> ValidationResult {
    let mut messages = Vec::new();

    match req.username.as_deref() {
        Some(username) => {
            if let Err(msg) = fields::validate_username(username) {
                messages.push(msg);
            }
        }
        None => messages.push("Username is required".to_string()),
    }

    match req.email.as_deref() {
        Some(email) => {
            if let Err(msg) = fields::validate_email(email) {
                messages.push(msg);
            }
        }
        None => messages.push("Email is required".to_string()),
    }

    match req.password.as_deref() {
        Some(password) => {
            if let Err(msg) = fields::validate_password(password) {
                messages.push(msg);
            }
        }
        None => messages.push("Password is required".to_string()),
    }

    ValidationResult::from_messages(messages)
}

/// Login payload: non-empty email and password
pub fn login_shape(req: &LoginRequest) -> ValidationResult {
    let mut messages = Vec::new();

    if req.email.as_deref().unwrap_or_default().is_empty() {
        messages.push("Email cannot be empty".to_string());
    }
    if req.password.as_deref().unwrap_or_default().is_empty() {
        messages.push("Password cannot be empty".to_string());
    }

    ValidationResult::from_messages(messages)
}

/// Full update payload: username and email both present and valid
pub fn required_update_shape(req: &UpdateUserRequest) -> ValidationResult {
    let mut messages = Vec::new();

    match req.username.as_deref() {
        Some(username) => {
            if let Err(msg) = fields::validate_username(username) {
                messages.push(msg);
            }
        }
        None => messages.push("Username is required".to_string()),
    }

    match req.email.as_deref() {
        Some(email) => {
            if let Err(msg) = fields::validate_email(email) {
                messages.push(msg);
            }
        }
        None => messages.push("Email is required".to_string()),
    }

    ValidationResult::from_messages(messages)
}

/// Partial update payload: at least one field present, present fields valid
pub fn partial_update_shape(req: &PartialUpdateUserRequest) -> ValidationResult {
    if req.username.is_none() && req.email.is_none() {
        return ValidationResult::Invalid(vec!["No fields to update".to_string()]);
    }

    let mut messages = Vec::new();

    if let Some(username) = req.username.as_deref() {
        if let Err(msg) = fields::validate_username(username) {
            messages.push(msg);
        }
    }
    if let Some(email) = req.email.as_deref() {
        if let Err(msg) = fields::validate_email(email) {
            messages.push(msg);
        }
    }

    ValidationResult::from_messages(messages)
}

/// Resource id path segment: decimal digits only
pub fn id_shape(raw: &str) -> ValidationResult {
    match fields::validate_id_shape(raw) {
        Ok(()) => ValidationResult::Valid,
        Err(msg) => ValidationResult::Invalid(vec![msg]),
    }
}

/// Article payload: title and body present and valid
pub fn article_shape(req: &ArticlePayload) -> ValidationResult {
    let mut messages = Vec::new();

    match req.title.as_deref() {
        Some(title) => {
            if let Err(msg) = fields::validate_title(title) {
                messages.push(msg);
            }
        }
        None => messages.push("Title is required".to_string()),
    }

    match req.body.as_deref() {
        Some(body) => {
            if let Err(msg) = fields::validate_body(body) {
                messages.push(msg);
            }
        }
        None => messages.push("Body is required".to_string()),
    }

    ValidationResult::from_messages(messages)
}

/// Post payload: title and content present and valid
pub fn post_shape(req: &PostPayload) -> ValidationResult {
    let mut messages = Vec::new();

    match req.title.as_deref() {
        Some(title) => {
            if let Err(msg) = fields::validate_title(title) {
                messages.push(msg);
            }
        }
        None => messages.push("Title is required".to_string()),
    }

    match req.content.as_deref() {
        Some(content) => {
            if let Err(msg) = fields::validate_content(content) {
                messages.push(msg);
            }
        }
        None => messages.push("Content is required".to_string()),
    }

    ValidationResult::from_messages(messages)
}

// ---------------------------------------------------------------------------
// Per-route pipelines
// ---------------------------------------------------------------------------

pub fn validate_registration(req: &RegisterRequest) -> ValidationResult {
    Pipeline::new().step(registration_shape).run(req)
}

pub fn validate_login(req: &LoginRequest) -> ValidationResult {
    Pipeline::new().step(login_shape).run(req)
}

pub fn validate_required_update(req: &UpdateUserRequest) -> ValidationResult {
    Pipeline::new().step(required_update_shape).run(req)
}

pub fn validate_partial_update(req: &PartialUpdateUserRequest) -> ValidationResult {
    Pipeline::new().step(partial_update_shape).run(req)
}

pub fn validate_article(req: &ArticlePayload) -> ValidationResult {
    Pipeline::new().step(article_shape).run(req)
}

pub fn validate_post(req: &PostPayload) -> ValidationResult {
    Pipeline::new().step(post_shape).run(req)
}

/// Validate and parse a resource id from its raw path segment
///
/// A structurally invalid id is a request-shape error and maps to 400,
/// uniformly across every route that takes an id.
pub fn parse_id(raw: &str) -> Result<i64, ApiError> {
    Pipeline::<str>::new().step(id_shape).run(raw).into_result()?;
    raw.parse::<i64>()
        .map_err(|_| ApiError::Validation(vec!["Id must be a positive integer".to_string()]))
}
