//! Employee model.
//!
//! The employee directory itself lives in the document store; this is the
//! slice of a record the payroll and report need.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// An employee whose punches are being accounted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: String,
    /// Display name, if known.
    #[serde(default)]
    pub name: Option<String>,
    /// Store the employee belongs to.
    #[serde(default)]
    pub store: Option<String>,
    /// Contractual monthly salary.
    pub base_salary: Decimal,
}

impl Employee {
    /// Name used in file names: lowercase, spaces turned into underscores,
    /// anything but word characters, `_` and `-` dropped. Falls back to the
    /// employee id when there is no name.
    ///
    /// # Examples
    ///
    /// ```
    /// use ponto_engine::models::Employee;
    /// use rust_decimal::Decimal;
    ///
    /// let employee = Employee {
    ///     id: "func_42".to_string(),
    ///     name: Some("Ana Paula Souza".to_string()),
    ///     store: None,
    ///     base_salary: Decimal::new(166063, 2),
    /// };
    /// assert_eq!(employee.file_slug(), "ana_paula_souza");
    /// ```
    pub fn file_slug(&self) -> String {
        match self.name.as_deref().map(str::trim).filter(|n| !n.is_empty()) {
            Some(name) => name
                .to_lowercase()
                .split_whitespace()
                .collect::<Vec<_>>()
                .join("_")
                .chars()
                .filter(|c| c.is_alphanumeric() || *c == '_' || *c == '-')
                .collect(),
            None => self.id.clone(),
        }
    }

    /// Name for display, falling back to the id.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.id)
    }
}
