use thiserror::Error;

/// Upstream call site; selects the client-facing message for 500 responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Buildings,
    Units,
    Charges,
}

impl Stage {
    pub fn error_message(&self) -> &'static str {
        match self {
            Stage::Buildings => "Erro ao obter lista de condomínios.",
            Stage::Units => "Erro ao obter unidades do condomínio.",
            Stage::Charges => "Erro ao obter cobranças.",
        }
    }
}

#[derive(Error, Debug, Clone)]
pub enum LookupError {
    #[error("Nome do condomínio não encontrado ou muito diferente.")]
    BuildingNotFound,

    #[error("Condomínio não encontrado.")]
    BuildingUnresolved,

    #[error("Unidade não encontrada para o CPF informado.")]
    UnitNotFound,

    #[error("{}", .stage.error_message())]
    Upstream { stage: Stage, details: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl LookupError {
    /// Converts a transport failure at the call site into its structured form.
    pub fn upstream(stage: Stage, err: reqwest::Error) -> Self {
        Self::Upstream {
            stage,
            details: err.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, LookupError>;
