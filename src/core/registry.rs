use crate::domain::model::CategoryCode;
use crate::utils::error::{PriceError, Result};

/// Static code→label table for one categorical vehicle attribute. The codes
/// are what the regression model was trained on; the labels exist only for
/// display.
#[derive(Debug, Clone, Copy)]
pub struct CategoryRegistry {
    field: &'static str,
    entries: &'static [(CategoryCode, &'static str)],
}

impl CategoryRegistry {
    pub fn field(&self) -> &'static str {
        self.field
    }

    pub fn contains(&self, code: CategoryCode) -> bool {
        self.entries.iter().any(|(c, _)| *c == code)
    }

    /// Display label for a code. Unknown codes are rejected with a
    /// descriptive error rather than panicking.
    pub fn label(&self, code: CategoryCode) -> Result<&'static str> {
        self.entries
            .iter()
            .find(|(c, _)| *c == code)
            .map(|(_, label)| *label)
            .ok_or(PriceError::UnknownCategory {
                field: self.field,
                code,
            })
    }

    /// Membership check with the same error shape as [`label`](Self::label).
    pub fn validate(&self, code: CategoryCode) -> Result<()> {
        self.label(code).map(|_| ())
    }

    pub fn entries(&self) -> impl Iterator<Item = (CategoryCode, &'static str)> + '_ {
        self.entries.iter().copied()
    }

    /// "0=GT86, 1=Corolla, ..." listing for CLI help text.
    pub fn choices(&self) -> String {
        self.entries
            .iter()
            .map(|(code, label)| format!("{}={}", code, label))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

pub const MODELS: CategoryRegistry = CategoryRegistry {
    field: "model",
    entries: &[
        (0, "GT86"),
        (1, "Corolla"),
        (2, "RAV4"),
        (3, "Yaris"),
        (4, "Auris"),
        (5, "Aygo"),
        (6, "C-HR"),
        (7, "Prius"),
        (8, "Avensis"),
        (9, "Verso"),
        (10, "Hilux"),
        (11, "PROACE VERSO"),
        (12, "Land Cruiser"),
        (13, "Supra"),
        (14, "Camry"),
        (15, "Verso-S"),
        (16, "IQ"),
        (17, "Urban Cruiser"),
    ],
};

pub const TRANSMISSIONS: CategoryRegistry = CategoryRegistry {
    field: "transmission",
    entries: &[(0, "Manual"), (1, "Automatic"), (2, "Semi-Auto"), (3, "Other")],
};

pub const FUEL_TYPES: CategoryRegistry = CategoryRegistry {
    field: "fuelType",
    entries: &[(0, "Petrol"), (1, "Other"), (2, "Hybrid"), (3, "Diesel")],
};
