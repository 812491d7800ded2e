//! Primitive checkers
//!
//! Stateless rules that test one raw value and return a single
//! [`Violation`](crate::foundation::Violation) on failure. Record validators
//! chain them with `.and()` so format rules always run before semantic ones.
//!
//! | Checker | Kind on failure |
//! |---|---|
//! | [`ExactLength`], [`LengthRange`] | `FormatLength` |
//! | [`NotBlank`] | `MissingRequired` |
//! | [`Digits`], [`Alphanumeric`], [`FullMatch`] | `PatternMismatch` |
//! | [`NotAllZero`], [`InRange`], [`AtLeast`], [`AtMost`] | `OutOfRange` |
//! | [`OneOf`] | `SetMembership` |
//! | [`TaxIdChecksum`] | `ChecksumFailure` |

pub mod charset;
pub mod checksum;
pub mod length;
pub mod membership;
pub mod pattern;
pub mod range;

pub use charset::{Alphanumeric, Digits, NotAllZero, alphanumeric, digits, not_all_zero};
pub use checksum::{TAX_ID_WEIGHTS, TaxIdChecksum, tax_id_check_digit, tax_id_checksum};
pub use length::{ExactLength, LengthRange, NotBlank, exact_length, length_range, not_blank};
pub use membership::{OneOf, one_of};
pub use pattern::{FullMatch, full_match};
pub use range::{AtLeast, AtMost, InRange, at_least, at_most, in_range};
