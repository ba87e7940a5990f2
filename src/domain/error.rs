//! Domain error types.
//!
//! The price engine and news impacts never fail; errors only arise from
//! configuration, registry construction, trading, and I/O.

/// Top-level error type for simvestor.
#[derive(Debug, thiserror::Error)]
pub enum SimvestorError {
    #[error("config parse error in {file}: {reason}")]
    ConfigParse { file: String, reason: String },

    #[error("invalid config value [{section}] {key}: {reason}")]
    ConfigInvalid {
        section: String,
        key: String,
        reason: String,
    },

    #[error("duplicate company in registry: {name}")]
    DuplicateCompany { name: String },

    #[error("unknown company: {name}")]
    UnknownCompany { name: String },

    #[error("invalid share count: {shares}")]
    InvalidShares { shares: u64 },

    #[error("insufficient cash: need {needed:.2}, have {available:.2}")]
    InsufficientCash { needed: f64, available: f64 },

    #[error("insufficient shares of {name}: requested {requested}, held {held}")]
    InsufficientShares {
        name: String,
        requested: u64,
        held: u64,
    },

    #[error("news catalog error: {reason}")]
    Catalog { reason: String },

    #[error("report error: {reason}")]
    Report { reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<&SimvestorError> for std::process::ExitCode {
    fn from(err: &SimvestorError) -> Self {
        let code: u8 = match err {
            SimvestorError::Io(_) | SimvestorError::Report { .. } => 1,
            SimvestorError::ConfigParse { .. } | SimvestorError::ConfigInvalid { .. } => 2,
            SimvestorError::Catalog { .. } => 3,
            SimvestorError::InvalidShares { .. }
            | SimvestorError::InsufficientCash { .. }
            | SimvestorError::InsufficientShares { .. } => 4,
            SimvestorError::DuplicateCompany { .. } | SimvestorError::UnknownCompany { .. } => 5,
        };
        std::process::ExitCode::from(code)
    }
}
