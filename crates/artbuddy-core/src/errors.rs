use thiserror::Error;

use crate::model::EntityKind;

/// Result type alias using ModelError
pub type Result<T> = std::result::Result<T, ModelError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that the command layer can match on
/// when turning a failure into a user-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Validation
    InvalidInput,

    // Collection contracts
    DuplicateEntity,
    NotFound,

    // Selection
    NoActiveCustomer,
    NoActiveCommission,

    // Caller defects
    PreconditionViolation,

    // Integration/IO
    Io,
    Serialization,
    Concurrency,

    // Internal
    Internal,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::DuplicateEntity => "ERR_DUPLICATE_ENTITY",
            ExErrorKind::NotFound => "ERR_NOT_FOUND",
            ExErrorKind::NoActiveCustomer => "ERR_NO_ACTIVE_CUSTOMER",
            ExErrorKind::NoActiveCommission => "ERR_NO_ACTIVE_COMMISSION",
            ExErrorKind::PreconditionViolation => "ERR_PRECONDITION",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
            ExErrorKind::Concurrency => "ERR_CONCURRENCY",
            ExErrorKind::Internal => "ERR_INTERNAL",
        }
    }

    /// Whether this kind signals a bug in the caller rather than bad user input
    pub fn is_defect(&self) -> bool {
        matches!(
            self,
            ExErrorKind::PreconditionViolation | ExErrorKind::Concurrency | ExErrorKind::Internal
        )
    }
}

/// Canonical structured error type
///
/// Carries classification fields for programmatic handling plus enough
/// context (operation, entity) to render a message.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    entity_kind: Option<EntityKind>,
    entity_id: Option<String>,
    message: String,
    source: Option<Box<ExError>>,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            entity_kind: None,
            entity_id: None,
            message: String::new(),
            source: None,
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add the kind of entity involved
    pub fn with_entity_kind(mut self, kind: EntityKind) -> Self {
        self.entity_kind = Some(kind);
        self
    }

    /// Add entity identity context (a customer name, commission title, ...)
    pub fn with_entity_id(mut self, id: impl Into<String>) -> Self {
        self.entity_id = Some(id.into());
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Add source error
    pub fn with_source(mut self, source: ExError) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the entity kind, if any
    pub fn entity_kind(&self) -> Option<EntityKind> {
        self.entity_kind
    }

    /// Get the entity identity context, if any
    pub fn entity_id(&self) -> Option<&str> {
        self.entity_id.as_deref()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the source error, if any
    pub fn source_error(&self) -> Option<&ExError> {
        self.source.as_deref()
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(entity_id) = &self.entity_id {
            match self.entity_kind {
                Some(kind) => write!(f, " ({}: {})", kind, entity_id)?,
                None => write!(f, " (entity: {})", entity_id)?,
            }
        }
        Ok(())
    }
}

impl std::error::Error for ExError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

// ========== End Error Facility ==========

/// Error taxonomy for model operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelError {
    // ===== Validation Errors =====
    /// A value type rejected its raw input
    #[error("Invalid {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    // ===== Collection Errors =====
    /// Adding or editing would put two same-identity entities in one list
    #[error("This {kind} already exists: {key}")]
    DuplicateEntity { kind: EntityKind, key: String },

    /// A replacement list contains two same-identity entities
    #[error("Replacement list contains duplicate {kind}: {key}")]
    DuplicateEntities { kind: EntityKind, key: String },

    /// Edit/remove target has no same-identity match
    #[error("No such {kind}: {key}")]
    EntityNotFound { kind: EntityKind, key: String },

    // ===== Selection Errors =====
    /// Operation needs an active customer but none is selected
    #[error("No customer is currently selected")]
    NoActiveCustomer,

    /// Operation needs an active commission but none is selected
    #[error("No commission is currently selected")]
    NoActiveCommission,

    // ===== Caller Defects =====
    /// The caller broke an API contract; not meant to be shown to users
    #[error("Precondition violated: {reason}")]
    PreconditionViolation { reason: String },

    // ===== Integration Errors =====
    /// JSON (de)serialization failure
    #[error("Serialization error: {message}")]
    Serialization { message: String },

    /// Filesystem failure while reading or writing preferences
    #[error("I/O error on {path}: {message}")]
    Io { path: String, message: String },

    /// A thread panicked while holding the shared model lock
    #[error("Model lock poisoned: {message}")]
    LockPoisoned { message: String },
}

impl ModelError {
    /// Build a duplicate-entity error for the given entity kind and identity key
    pub fn duplicate(kind: EntityKind, key: impl Into<String>) -> Self {
        ModelError::DuplicateEntity {
            kind,
            key: key.into(),
        }
    }

    /// Build a not-found error for the given entity kind and identity key
    pub fn not_found(kind: EntityKind, key: impl Into<String>) -> Self {
        ModelError::EntityNotFound {
            kind,
            key: key.into(),
        }
    }

    /// Build a precondition violation
    pub fn precondition(reason: impl Into<String>) -> Self {
        ModelError::PreconditionViolation {
            reason: reason.into(),
        }
    }

    /// Whether the command layer should turn this into a message and carry on
    ///
    /// Precondition violations and lock poisoning are defects in the caller
    /// and should propagate instead.
    pub fn is_user_recoverable(&self) -> bool {
        !ExErrorKind::from(self).is_defect()
    }
}

impl From<&ModelError> for ExErrorKind {
    fn from(err: &ModelError) -> Self {
        match err {
            ModelError::InvalidValue { .. } => ExErrorKind::InvalidInput,
            ModelError::DuplicateEntity { .. } | ModelError::DuplicateEntities { .. } => {
                ExErrorKind::DuplicateEntity
            }
            ModelError::EntityNotFound { .. } => ExErrorKind::NotFound,
            ModelError::NoActiveCustomer => ExErrorKind::NoActiveCustomer,
            ModelError::NoActiveCommission => ExErrorKind::NoActiveCommission,
            ModelError::PreconditionViolation { .. } => ExErrorKind::PreconditionViolation,
            ModelError::Serialization { .. } => ExErrorKind::Serialization,
            ModelError::Io { .. } => ExErrorKind::Io,
            ModelError::LockPoisoned { .. } => ExErrorKind::Concurrency,
        }
    }
}

/// Conversion from ModelError to the canonical ExError
impl From<ModelError> for ExError {
    fn from(err: ModelError) -> Self {
        let kind = ExErrorKind::from(&err);
        let message = err.to_string();
        let ex = ExError::new(kind).with_message(message);

        match err {
            ModelError::InvalidValue { field, .. } => ex.with_op(format!("parse_{}", field)),
            ModelError::DuplicateEntity { kind, key }
            | ModelError::DuplicateEntities { kind, key }
            | ModelError::EntityNotFound { kind, key } => {
                ex.with_entity_kind(kind).with_entity_id(key)
            }
            ModelError::NoActiveCustomer => ex.with_entity_kind(EntityKind::Customer),
            ModelError::NoActiveCommission => ex.with_entity_kind(EntityKind::Commission),
            ModelError::Io { path, .. } => ex.with_entity_id(path),
            ModelError::PreconditionViolation { .. }
            | ModelError::Serialization { .. }
            | ModelError::LockPoisoned { .. } => ex,
        }
    }
}

impl From<serde_json::Error> for ModelError {
    fn from(err: serde_json::Error) -> Self {
        ModelError::Serialization {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_message_names_the_key() {
        let err = ModelError::duplicate(EntityKind::Commission, "Portrait");
        assert_eq!(err.to_string(), "This commission already exists: Portrait");
    }

    #[test]
    fn test_precondition_is_not_user_recoverable() {
        assert!(!ModelError::precondition("commission not owned").is_user_recoverable());
        assert!(ModelError::NoActiveCustomer.is_user_recoverable());
        assert!(ModelError::not_found(EntityKind::Customer, "Bob").is_user_recoverable());
    }

    #[test]
    fn test_ex_error_display_includes_code_and_entity() {
        let ex: ExError = ModelError::not_found(EntityKind::Customer, "Bob").into();
        let rendered = ex.to_string();
        assert!(rendered.starts_with("[ERR_NOT_FOUND]"));
        assert!(rendered.contains("(customer: Bob)"));
    }

    #[test]
    fn test_source_chain_is_exposed() {
        let inner: ExError = ModelError::NoActiveCommission.into();
        let outer = ExError::new(ExErrorKind::Internal).with_source(inner);
        let source = std::error::Error::source(&outer).map(|s| s.to_string());
        assert!(source.unwrap().contains("ERR_NO_ACTIVE_COMMISSION"));
    }
}
