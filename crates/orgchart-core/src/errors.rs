use orgchart_core_types::{RequestId, TraceId};
use thiserror::Error;

use crate::model::MemberId;

/// Result type alias using OrgChartError
pub type Result<T> = std::result::Result<T, OrgChartError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that callers can match on without
/// depending on the message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Structural/Validation
    InvalidInput,
    NotFound,
    CycleDetected,
    DuplicateId,

    // Integration/IO
    Io,
    Serialization,

    // Internal
    Internal,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::NotFound => "ERR_NOT_FOUND",
            ExErrorKind::CycleDetected => "ERR_CYCLE_DETECTED",
            ExErrorKind::DuplicateId => "ERR_DUPLICATE_ID",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
            ExErrorKind::Internal => "ERR_INTERNAL",
        }
    }
}

/// Canonical structured error type
///
/// Classification plus optional context, built up with the `with_*` methods.
/// This is what boundaries (CLI, logging) report; domain code returns
/// [`OrgChartError`] and converts at the edge.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    member_id: Option<MemberId>,
    supervisor_id: Option<MemberId>,
    request_id: Option<RequestId>,
    trace_id: Option<TraceId>,
    message: String,
}

impl ExError {
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            member_id: None,
            supervisor_id: None,
            request_id: None,
            trace_id: None,
            message: String::new(),
        }
    }

    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    pub fn with_member_id(mut self, id: MemberId) -> Self {
        self.member_id = Some(id);
        self
    }

    pub fn with_supervisor_id(mut self, id: MemberId) -> Self {
        self.supervisor_id = Some(id);
        self
    }

    pub fn with_request_id(mut self, request_id: RequestId) -> Self {
        self.request_id = Some(request_id);
        self
    }

    pub fn with_trace_id(mut self, trace_id: TraceId) -> Self {
        self.trace_id = Some(trace_id);
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn member_id(&self) -> Option<MemberId> {
        self.member_id
    }

    pub fn supervisor_id(&self) -> Option<MemberId> {
        self.supervisor_id
    }

    pub fn request_id(&self) -> Option<&RequestId> {
        self.request_id.as_ref()
    }

    pub fn trace_id(&self) -> Option<&TraceId> {
        self.trace_id.as_ref()
    }

    pub fn message(&self) -> &str {
        &self.message
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
        if let Some(member_id) = self.member_id {
            write!(f, " (member_id: {})", member_id)?;
        }
        if let Some(supervisor_id) = self.supervisor_id {
            write!(f, " (supervisor_id: {})", supervisor_id)?;
        }
        if let Some(request_id) = &self.request_id {
            write!(f, " (request_id: {})", request_id)?;
        }
        if let Some(trace_id) = &self.trace_id {
            write!(f, " (trace_id: {})", trace_id)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Error taxonomy for hierarchy operations
///
/// None of these leave the chart or the history half-modified: every check
/// runs before the first mutation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum OrgChartError {
    /// The member being moved (or looked up) is not in the chart
    #[error("Member not found: {member_id}")]
    MemberNotFound { member_id: MemberId },

    /// The requested new supervisor is not in the chart
    #[error("Supervisor not found: {supervisor_id}")]
    SupervisorNotFound { supervisor_id: MemberId },

    /// The target supervisor is the member itself or one of its subordinates
    #[error("Cycle detected: moving member {member_id} under {supervisor_id} would make it its own ancestor")]
    CycleDetected {
        member_id: MemberId,
        supervisor_id: MemberId,
    },

    /// The supplied chart uses the same identifier twice
    #[error("Duplicate member id in chart: {member_id}")]
    DuplicateMemberId { member_id: MemberId },

    /// Serialization error (JSON encoding/decoding)
    #[error("Serialization error: {message}")]
    Serialization { message: String },

    /// Internal invariant breach
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl From<OrgChartError> for ExError {
    fn from(err: OrgChartError) -> Self {
        match err {
            OrgChartError::MemberNotFound { member_id } => ExError::new(ExErrorKind::NotFound)
                .with_member_id(member_id)
                .with_message("Member not found"),

            OrgChartError::SupervisorNotFound { supervisor_id } => {
                ExError::new(ExErrorKind::NotFound)
                    .with_supervisor_id(supervisor_id)
                    .with_message("Supervisor not found")
            }

            OrgChartError::CycleDetected {
                member_id,
                supervisor_id,
            } => ExError::new(ExErrorKind::CycleDetected)
                .with_member_id(member_id)
                .with_supervisor_id(supervisor_id)
                .with_message("Move would make the member its own ancestor"),

            OrgChartError::DuplicateMemberId { member_id } => {
                ExError::new(ExErrorKind::DuplicateId)
                    .with_member_id(member_id)
                    .with_message("Member id appears more than once")
            }

            OrgChartError::Serialization { message } => {
                ExError::new(ExErrorKind::Serialization).with_message(message)
            }

            OrgChartError::Internal { message } => {
                ExError::new(ExErrorKind::Internal).with_message(message)
            }
        }
    }
}

impl From<serde_json::Error> for OrgChartError {
    fn from(err: serde_json::Error) -> Self {
        OrgChartError::Serialization {
            message: err.to_string(),
        }
    }
}
