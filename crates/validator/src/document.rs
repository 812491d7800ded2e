//! Identity and tax document numbers
//!
//! Suppliers and tenants are identified by one of four document kinds. Each
//! kind fixes a length and a character class; the business tax ID (RUC) also
//! carries a check digit.
//!
//! Format rules always come first and at most one violation is reported per
//! document: a number of the wrong length is never also reported as having a
//! bad check digit.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::checks::{
    alphanumeric, digits, exact_length, length_range, not_all_zero, tax_id_checksum,
};
use crate::foundation::{SpecError, Violation, ValidateExt, check_field};

/// Field name attached to document violations.
pub const DOCUMENT_FIELD: &str = "documentNumber";

// ============================================================================
// DOCUMENT KIND
// ============================================================================

/// Kind of identity document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DocumentKind {
    /// Business tax ID: 11 digits with a check digit.
    #[serde(rename = "RUC")]
    TaxId,
    /// National ID card: 8 digits, not all zero.
    #[serde(rename = "DNI")]
    NationalId,
    /// Foreign-resident card: 9 letters or digits.
    #[serde(rename = "CE")]
    ForeignResidentCard,
    /// Passport: 6 to 12 letters or digits.
    #[serde(rename = "PASAPORTE")]
    Passport,
}

impl DocumentKind {
    /// All kinds, in the order the console lists them.
    pub const ALL: [Self; 4] = [
        Self::TaxId,
        Self::NationalId,
        Self::ForeignResidentCard,
        Self::Passport,
    ];

    /// Console code for this kind.
    pub const fn code(self) -> &'static str {
        match self {
            Self::TaxId => "RUC",
            Self::NationalId => "DNI",
            Self::ForeignResidentCard => "CE",
            Self::Passport => "PASAPORTE",
        }
    }

    /// Normalizes a raw number: surrounding whitespace is dropped and, for
    /// the alphanumeric kinds, letters are upper-cased.
    pub fn normalize(self, raw: &str) -> String {
        let trimmed = raw.trim();
        match self {
            Self::TaxId | Self::NationalId => trimmed.to_string(),
            Self::ForeignResidentCard | Self::Passport => trimmed.to_ascii_uppercase(),
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for DocumentKind {
    type Err = SpecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "RUC" | "TAX_ID" => Ok(Self::TaxId),
            "DNI" | "NATIONAL_ID" => Ok(Self::NationalId),
            "CE" | "FOREIGN_RESIDENT_CARD" => Ok(Self::ForeignResidentCard),
            "PASAPORTE" | "PASSPORT" => Ok(Self::Passport),
            _ => Err(SpecError::UnknownDocumentKind(s.to_string())),
        }
    }
}

// ============================================================================
// DOCUMENT IDENTITY
// ============================================================================

/// A document number together with its kind.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentIdentity {
    /// Document kind.
    pub document_kind: DocumentKind,
    /// Number as typed by the user.
    pub raw_value: String,
}

impl DocumentIdentity {
    /// Creates a document identity.
    pub fn new(document_kind: DocumentKind, raw_value: impl Into<String>) -> Self {
        Self {
            document_kind,
            raw_value: raw_value.into(),
        }
    }

    /// Normalized number.
    pub fn normalized(&self) -> String {
        self.document_kind.normalize(&self.raw_value)
    }

    /// Validates this document; see [`validate_document`].
    pub fn validate(&self, exclude_self: Option<&str>) -> Vec<Violation> {
        validate_document(self.document_kind, &self.raw_value, exclude_self)
    }
}

// ============================================================================
// VALIDATION
// ============================================================================

/// Validates a document number.
///
/// `exclude_self` is the number currently stored for the record being
/// edited. When it normalizes to the same value as `raw_value`, the check
/// digit is not verified, so legacy numbers can be resubmitted unchanged.
/// Length and character rules are always enforced.
///
/// # Examples
///
/// ```
/// use patrimony_validator::document::{DocumentKind, validate_document};
/// use patrimony_validator::foundation::ViolationKind;
///
/// assert!(validate_document(DocumentKind::TaxId, "20100070970", None).is_empty());
///
/// let out = validate_document(DocumentKind::TaxId, "20100070971", None);
/// assert_eq!(out[0].kind, ViolationKind::ChecksumFailure);
///
/// // Unchanged legacy value: the check digit is skipped.
/// assert!(validate_document(DocumentKind::TaxId, "20100070971", Some("20100070971")).is_empty());
/// ```
pub fn validate_document(
    kind: DocumentKind,
    raw_value: &str,
    exclude_self: Option<&str>,
) -> Vec<Violation> {
    let mut out = Vec::new();
    let number = kind.normalize(raw_value);

    match kind {
        _ if number.is_empty() => {
            out.push(Violation::missing_required().with_field(DOCUMENT_FIELD));
        }
        DocumentKind::TaxId => {
            let rules = exact_length(11).and(digits());
            let format_ok = check_field(&mut out, DOCUMENT_FIELD, &rules, number.as_str());
            let unchanged = exclude_self.is_some_and(|stored| kind.normalize(stored) == number);
            if format_ok && !unchanged {
                check_field(&mut out, DOCUMENT_FIELD, &tax_id_checksum(), number.as_str());
            }
        }
        DocumentKind::NationalId => {
            let rules = exact_length(8).and(digits()).and(not_all_zero());
            check_field(&mut out, DOCUMENT_FIELD, &rules, number.as_str());
        }
        DocumentKind::ForeignResidentCard => {
            let rules = exact_length(9).and(alphanumeric());
            check_field(&mut out, DOCUMENT_FIELD, &rules, number.as_str());
        }
        DocumentKind::Passport => {
            let rules = length_range(6, 12).and(alphanumeric());
            check_field(&mut out, DOCUMENT_FIELD, &rules, number.as_str());
        }
    }

    for violation in &mut out {
        violation
            .params
            .push(("documentKind".into(), kind.code().into()));
    }
    out
}
