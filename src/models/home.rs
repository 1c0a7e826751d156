//! Home model
//!
//! A single real-estate listing. Homes are looked up by the pair
//! (address, ZIP code), which is not required to be unique.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Sale statuses offered at the prompt. Other values are accepted.
pub const DEFAULT_SALE_STATUSES: [&str; 3] = ["sold", "available", "under contract"];

/// A home in the inventory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HomeRecord {
    /// Floor area
    pub square_feet: i64,

    /// Street address
    pub address: String,

    pub city: String,

    pub state: String,

    /// Postal code
    pub zip_code: i64,

    /// Builder's model name
    pub model_name: String,

    /// Sale status, usually one of [`DEFAULT_SALE_STATUSES`]
    pub sale_status: String,
}

impl HomeRecord {
    /// Create a new home record. Call [`HomeRecord::validate`] before storing it.
    pub fn new(
        square_feet: i64,
        address: impl Into<String>,
        city: impl Into<String>,
        state: impl Into<String>,
        zip_code: i64,
        model_name: impl Into<String>,
        sale_status: impl Into<String>,
    ) -> Self {
        Self {
            square_feet,
            address: address.into(),
            city: city.into(),
            state: state.into(),
            zip_code,
            model_name: model_name.into(),
            sale_status: sale_status.into(),
        }
    }

    /// Validate presence and positivity of every field
    pub fn validate(&self) -> Result<(), HomeValidationError> {
        if self.square_feet <= 0 {
            return Err(HomeValidationError::NonPositiveSquareFeet(self.square_feet));
        }
        if self.address.is_empty() {
            return Err(HomeValidationError::EmptyField("address"));
        }
        if self.city.is_empty() {
            return Err(HomeValidationError::EmptyField("city"));
        }
        if self.state.is_empty() {
            return Err(HomeValidationError::EmptyField("state"));
        }
        if self.zip_code <= 0 {
            return Err(HomeValidationError::NonPositiveZipCode(self.zip_code));
        }
        if self.model_name.is_empty() {
            return Err(HomeValidationError::EmptyField("model name"));
        }
        if self.sale_status.is_empty() {
            return Err(HomeValidationError::EmptyField("sale status"));
        }
        Ok(())
    }

    /// Check the identifying pair. Address comparison is exact.
    pub fn matches(&self, address: &str, zip_code: i64) -> bool {
        self.address == address && self.zip_code == zip_code
    }

    /// Identifier used in audit entries
    pub fn key(&self) -> String {
        format!("{}#{}", self.address, self.zip_code)
    }
}

impl fmt::Display for HomeRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Home{{squareFeet={}, address='{}', city='{}', state='{}', zipCode={}, modelName='{}', saleStatus='{}'}}",
            self.square_feet,
            self.address,
            self.city,
            self.state,
            self.zip_code,
            self.model_name,
            self.sale_status
        )
    }
}

/// Validation errors for homes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HomeValidationError {
    NonPositiveSquareFeet(i64),
    NonPositiveZipCode(i64),
    EmptyField(&'static str),
}

impl fmt::Display for HomeValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveSquareFeet(value) => {
                write!(f, "Square feet must be positive (got {})", value)
            }
            Self::NonPositiveZipCode(value) => {
                write!(f, "ZIP code must be positive (got {})", value)
            }
            Self::EmptyField(field) => write!(f, "Home {} cannot be empty", field),
        }
    }
}

impl std::error::Error for HomeValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn colonial() -> HomeRecord {
        HomeRecord::new(
            1200,
            "1 Main St",
            "Springfield",
            "IL",
            62704,
            "Colonial",
            "available",
        )
    }

    #[test]
    fn test_display_format() {
        assert_eq!(
            colonial().to_string(),
            "Home{squareFeet=1200, address='1 Main St', city='Springfield', state='IL', zipCode=62704, modelName='Colonial', saleStatus='available'}"
        );
    }

    #[test]
    fn test_validation() {
        let home = colonial();
        assert!(home.validate().is_ok());

        let mut home = colonial();
        home.square_feet = 0;
        assert_eq!(
            home.validate(),
            Err(HomeValidationError::NonPositiveSquareFeet(0))
        );

        let mut home = colonial();
        home.zip_code = -5;
        assert_eq!(
            home.validate(),
            Err(HomeValidationError::NonPositiveZipCode(-5))
        );

        let mut home = colonial();
        home.address = String::new();
        assert_eq!(home.validate(), Err(HomeValidationError::EmptyField("address")));

        let mut home = colonial();
        home.city = String::new();
        assert_eq!(home.validate(), Err(HomeValidationError::EmptyField("city")));

        let mut home = colonial();
        home.state = String::new();
        assert_eq!(home.validate(), Err(HomeValidationError::EmptyField("state")));

        let mut home = colonial();
        home.model_name = String::new();
        assert_eq!(
            home.validate(),
            Err(HomeValidationError::EmptyField("model name"))
        );

        let mut home = colonial();
        home.sale_status = String::new();
        assert_eq!(
            home.validate(),
            Err(HomeValidationError::EmptyField("sale status"))
        );
    }

    #[test]
    fn test_whitespace_counts_as_present() {
        let mut home = colonial();
        home.model_name = " ".to_string();
        assert!(home.validate().is_ok());
    }

    #[test]
    fn test_matches_is_case_sensitive() {
        let home = colonial();
        assert!(home.matches("1 Main St", 62704));
        assert!(!home.matches("1 main st", 62704));
        assert!(!home.matches("1 Main St", 62705));
    }

    #[test]
    fn test_key() {
        assert_eq!(colonial().key(), "1 Main St#62704");
    }
}
