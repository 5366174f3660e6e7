//! Fehler-Taxonomie der Import-Pipelines und Session-Operationen.

use std::path::{Path, PathBuf};

/// Ergebnis-Typ für Import- und Task-Operationen
pub type EditorResult<T> = Result<T, EditorError>;

/// Fehler, die aus Importen und Tasks an den Aufrufer propagiert werden.
#[derive(thiserror::Error, Debug)]
pub enum EditorError {
    /// Bild nicht lesbar oder beschädigt
    #[error("decode error in {path}: {message}")]
    Decode { path: PathBuf, message: String },

    /// Ebenen-Dokument fehlerhaft (z.B. Gruppen-Ende ohne Anfang)
    #[error("parse error: {0}")]
    Parse(String),

    /// Datei oder Verzeichnis fehlt bzw. ist nicht lesbar
    #[error("io error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Operation benötigt ein aktives Projekt
    #[error("state error: {0}")]
    State(String),
}

impl EditorError {
    pub fn decode(path: impl AsRef<Path>, message: impl Into<String>) -> Self {
        Self::Decode {
            path: path.as_ref().to_path_buf(),
            message: message.into(),
        }
    }

    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    pub fn state(msg: impl Into<String>) -> Self {
        Self::State(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_prefixes_are_stable() {
        assert!(EditorError::decode("a.png", "x")
            .to_string()
            .starts_with("decode error in a.png"));
        assert!(EditorError::parse("x").to_string().contains("parse error:"));
        assert!(EditorError::state("x").to_string().contains("state error:"));
    }

    #[test]
    fn io_preserves_source() {
        let err = EditorError::io("missing", std::io::Error::other("boom"));
        assert!(err.to_string().contains("boom"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn converts_into_anyhow() {
        fn fails() -> anyhow::Result<()> {
            Err(EditorError::state("kein Projekt"))?;
            Ok(())
        }
        let err = fails().expect_err("sollte fehlschlagen");
        assert!(err.downcast_ref::<EditorError>().is_some());
    }
}
