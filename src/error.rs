use thiserror::Error;

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

#[derive(Debug, Error)]
pub enum KioskError {
    #[error("no global window available")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("mount anchor #{id} not found in document")]
    MissingAnchor { id: String },
    #[error("invalid kiosk config: {0}")]
    InvalidConfig(#[from] serde_json::Error),
    #[error("tick interval {ms}ms out of range (1..=1000)")]
    InvalidTickInterval { ms: u32 },
    #[error("locale {locale:?} is not a usable language tag")]
    InvalidLocale { locale: String },
}
