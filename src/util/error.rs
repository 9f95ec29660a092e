// MarketView - util/error.rs
//
// Typed error hierarchy with context-preserving error chains.
// The browsing page itself has no failure states; these errors cover the
// startup surface: catalog validation, config.toml and CLI category names.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Top-level error type for all MarketView operations.
#[derive(Debug)]
pub enum MarketViewError {
    /// The static product catalog violates one of its invariants.
    Catalog(CatalogError),

    /// Configuration loading or validation failed.
    Config(ConfigError),

    /// A category label could not be resolved.
    Category(CategoryError),
}

impl fmt::Display for MarketViewError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Catalog(e) => write!(f, "Catalog error: {e}"),
            Self::Config(e) => write!(f, "Configuration error: {e}"),
            Self::Category(e) => write!(f, "Category error: {e}"),
        }
    }
}

impl std::error::Error for MarketViewError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Catalog(e) => Some(e),
            Self::Config(e) => Some(e),
            Self::Category(e) => Some(e),
        }
    }
}

// ---------------------------------------------------------------------------
// Catalog errors
// ---------------------------------------------------------------------------

/// Violations of the static catalog invariants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// Two products share the same id.
    DuplicateId { id: u32 },

    /// A product price lies outside the price slider bounds.
    PriceOutOfRange { id: u32, price: u32, max: u32 },
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateId { id } => write!(f, "Duplicate product id {id}"),
            Self::PriceOutOfRange { id, price, max } => write!(
                f,
                "Product {id} has price ${price}, outside the filterable range $0-${max}"
            ),
        }
    }
}

impl std::error::Error for CatalogError {}

impl From<CatalogError> for MarketViewError {
    fn from(e: CatalogError) -> Self {
        Self::Catalog(e)
    }
}

// ---------------------------------------------------------------------------
// Category errors
// ---------------------------------------------------------------------------

/// Errors resolving a category label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryError {
    /// The label does not name any known category.
    Unknown { label: String },
}

impl fmt::Display for CategoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unknown { label } => write!(f, "Unknown category '{label}'"),
        }
    }
}

impl std::error::Error for CategoryError {}

impl From<CategoryError> for MarketViewError {
    fn from(e: CategoryError) -> Self {
        Self::Category(e)
    }
}

// ---------------------------------------------------------------------------
// Config errors
// ---------------------------------------------------------------------------

/// Errors related to configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    /// TOML parsing failed.
    TomlParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// A config value is out of the allowed range.
    ValueOutOfRange {
        field: String,
        value: String,
        expected: String,
    },

    /// I/O error reading config file.
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TomlParse { path, source } => {
                write!(f, "Config parse error '{}': {source}", path.display())
            }
            Self::ValueOutOfRange {
                field,
                value,
                expected,
            } => write!(
                f,
                "Config '{field}' = '{value}' is out of range. Expected: {expected}"
            ),
            Self::Io { path, source } => {
                write!(f, "Config I/O error '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::TomlParse { source, .. } => Some(source),
            Self::Io { source, .. } => Some(source),
            Self::ValueOutOfRange { .. } => None,
        }
    }
}

impl From<ConfigError> for MarketViewError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

/// Convenience type alias for MarketView results.
pub type Result<T> = std::result::Result<T, MarketViewError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_top_level_error_preserves_source_chain() {
        let err: MarketViewError = CatalogError::DuplicateId { id: 7 }.into();
        assert_eq!(err.to_string(), "Catalog error: Duplicate product id 7");
        let source = err.source().expect("catalog error should be the source");
        assert_eq!(source.to_string(), "Duplicate product id 7");
    }

    #[test]
    fn test_config_io_error_exposes_io_source() {
        let err = ConfigError::Io {
            path: PathBuf::from("config.toml"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.to_string().contains("config.toml"));
        assert!(err.source().is_some());
    }
}
