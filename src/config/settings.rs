//! User settings for housesplit
//!
//! Manages user preferences: currency display, suggested expense categories,
//! log verbosity and audit logging.

use serde::{Deserialize, Serialize};

use super::paths::HousesplitPaths;
use crate::error::SplitError;
use crate::models::CurrencyFormat;

/// Categories offered when recording an expense
pub const DEFAULT_CATEGORIES: &[&str] = &[
    "Energia",
    "Água",
    "Internet",
    "Telefone Fixo",
    "Celular",
    "TV a Cabo",
    "IPTU",
    "Aluguel",
    "Condomínio",
    "Seguro Residencial",
    "Gás",
    "Comida",
    "Supermercado",
    "Feira",
    "Farmácia",
    "Plano de Saúde",
    "Academia",
    "Transporte",
    "Manutenção do Carro",
    "Combustível",
    "Netflix",
    "Spotify",
    "Amazon Prime",
    "Disney+",
    "HBO Max",
    "Apple Music",
    "YouTube Premium",
    "PlayStation Plus",
    "Xbox Game Pass",
    "Steam",
    "Material de Escritório",
    "Materiais de Construção",
    "Móveis",
    "Eletrodomésticos",
    "Produtos de Limpeza",
    "Produtos de Higiene",
    "Pet Shop",
    "Veterinário",
    "Assinatura de Jornal/Revista",
    "Serviços de Streaming",
    "Taxa de Lixo",
    "IPVA",
    "Seguro do Carro",
    "Taxa Bancária",
    "Fatura do Cartão de Crédito",
    "Empréstimos",
    "Financiamento Imobiliário",
    "Financiamento de Veículo",
];

/// User settings for housesplit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// How amounts are displayed and parsed back from display text
    #[serde(default)]
    pub currency: CurrencyFormat,

    /// Categories suggested when adding an expense
    #[serde(default = "default_categories")]
    pub categories: Vec<String>,

    /// Log filter used when neither RUST_LOG nor --verbose is given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_level: Option<String>,

    /// Whether mutations are recorded in the audit log
    #[serde(default = "default_audit_enabled")]
    pub audit_enabled: bool,
}

fn default_schema_version() -> u32 {
    1
}

fn default_categories() -> Vec<String> {
    DEFAULT_CATEGORIES.iter().map(|c| c.to_string()).collect()
}

fn default_audit_enabled() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency: CurrencyFormat::default(),
            categories: default_categories(),
            log_level: None,
            audit_enabled: default_audit_enabled(),
        }
    }
}

impl Settings {
    /// Whether `category` is one of the suggested categories (case-insensitive)
    pub fn is_suggested_category(&self, category: &str) -> bool {
        let wanted = category.trim().to_lowercase();
        self.categories.iter().any(|c| c.to_lowercase() == wanted)
    }

    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &HousesplitPaths) -> Result<Self, SplitError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| SplitError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                SplitError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &HousesplitPaths) -> Result<(), SplitError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| SplitError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| SplitError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.currency.symbol, "R$");
        assert_eq!(settings.currency.decimal_separator, ',');
        assert!(settings.audit_enabled);
        assert!(settings.categories.iter().any(|c| c == "Internet"));
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = HousesplitPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.currency = CurrencyFormat::new("$", '.', ',');
        settings.audit_enabled = false;

        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.currency.symbol, "$");
        assert!(!loaded.audit_enabled);
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let settings: Settings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings.schema_version, 1);
        assert_eq!(settings.currency, CurrencyFormat::default());
        assert!(settings.audit_enabled);
    }

    #[test]
    fn test_partial_currency_block_takes_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = HousesplitPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"currency": {"symbol": "$"}}"#).unwrap();

        let settings = Settings::load_or_create(&paths).unwrap();
        assert_eq!(settings.currency.symbol, "$");
        assert_eq!(settings.currency.decimal_separator, ',');
        assert_eq!(settings.currency.grouping_separator, '.');
    }

    #[test]
    fn test_load_without_file_does_not_write() {
        let temp_dir = TempDir::new().unwrap();
        let paths = HousesplitPaths::with_base_dir(temp_dir.path().to_path_buf());

        let _ = Settings::load_or_create(&paths).unwrap();
        assert!(!paths.settings_file().exists());
    }

    #[test]
    fn test_suggested_category() {
        let settings = Settings::default();
        assert!(settings.is_suggested_category("internet"));
        assert!(!settings.is_suggested_category("Padaria"));
    }
}
