//! Macros for declaring primitive checkers with minimal boilerplate.
//!
//! - [`validator!`] generates the struct, its `Validate` impl, and a factory fn.
//! - [`compose!`] AND-chains several checkers.
//!
//! ```rust,ignore
//! validator! {
//!     pub Digits for str;
//!     rule(input) { input.bytes().all(|b| b.is_ascii_digit()) }
//!     error(input) { Violation::pattern_mismatch("digits only") }
//!     fn digits();
//! }
//! ```

// ============================================================================
// VALIDATOR MACRO
// ============================================================================

/// Creates a checker: struct definition, `Validate` implementation,
/// constructor, and factory function.
///
/// `#[derive(Debug, Clone)]` is always applied. Add extra derives via
/// `#[derive(...)]`.
///
/// Supported shapes:
///
/// - unit: `pub Name for Input;`
/// - fields with custom `new(..) { .. }`
/// - fields with an automatic `new` taking every field
/// - one generic parameter with simple trait bounds
#[macro_export]
macro_rules! validator {
    // ── Unit checker + factory fn ────────────────────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident for $input:ty;
        rule($inp:ident) $rule:block
        error($einp:ident) $err:block
        fn $factory:ident();
    ) => {
        $crate::validator! {
            $(#[$meta])*
            $vis $name for $input;
            rule($inp) $rule
            error($einp) $err
        }

        #[must_use]
        $vis const fn $factory() -> $name { $name }
    };

    // ── Unit checker, no factory ─────────────────────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident for $input:ty;
        rule($inp:ident) $rule:block
        error($einp:ident) $err:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        $vis struct $name;

        impl $crate::foundation::Validate for $name {
            type Input = $input;

            #[allow(unused_variables)]
            fn validate(&self, $inp: &Self::Input) -> Result<(), $crate::foundation::Violation> {
                if $rule {
                    Ok(())
                } else {
                    let $einp = $inp;
                    Err($err)
                }
            }
        }
    };

    // ── Fields + custom new + factory fn ─────────────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        error($self2:ident, $einp:ident) $err:block
        new($($narg:ident: $naty:ty),* $(,)?) $new_body:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $crate::validator! {
            $(#[$meta])*
            $vis $name { $($field: $fty),+ } for $input;
            rule($self_, $inp) $rule
            error($self2, $einp) $err
            new($($narg: $naty),*) $new_body
        }

        #[must_use]
        $vis fn $factory($($farg: $faty),*) -> $name {
            $name::new($($farg),*)
        }
    };

    // ── Fields + custom new, no factory ──────────────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        error($self2:ident, $einp:ident) $err:block
        new($($narg:ident: $naty:ty),* $(,)?) $new_body:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $(pub $field: $fty,)+
        }

        #[allow(clippy::new_without_default)]
        impl $name {
            #[must_use]
            pub fn new($($narg: $naty),*) -> Self $new_body
        }

        impl $crate::foundation::Validate for $name {
            type Input = $input;

            #[allow(unused_variables)]
            fn validate(&$self_, $inp: &Self::Input) -> Result<(), $crate::foundation::Violation> {
                if $rule {
                    Ok(())
                } else {
                    let $einp = $inp;
                    Err($err)
                }
            }
        }
    };

    // ── Fields + auto new + factory fn ───────────────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        error($self2:ident, $einp:ident) $err:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $(pub $field: $fty,)+
        }

        impl $name {
            #[must_use]
            pub fn new($($field: $fty),+) -> Self {
                Self { $($field),+ }
            }
        }

        impl $crate::foundation::Validate for $name {
            type Input = $input;

            #[allow(unused_variables)]
            fn validate(&$self_, $inp: &Self::Input) -> Result<(), $crate::foundation::Violation> {
                if $rule {
                    Ok(())
                } else {
                    let $einp = $inp;
                    Err($err)
                }
            }
        }

        #[must_use]
        $vis fn $factory($($farg: $faty),*) -> $name {
            $name::new($($farg),*)
        }
    };

    // ── Generic struct + auto new + factory fn ───────────────────────────
    //
    // One type parameter; bounds must be plain identifiers (import paths).
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident<$gen:ident: $first_bound:ident $(+ $rest_bound:ident)*>
            { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        error($self2:ident, $einp:ident) $err:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name<$gen> {
            $(pub $field: $fty,)+
        }

        impl<$gen: $first_bound $(+ $rest_bound)*> $name<$gen> {
            #[must_use]
            pub fn new($($field: $fty),+) -> Self {
                Self { $($field),+ }
            }
        }

        impl<$gen: $first_bound $(+ $rest_bound)*> $crate::foundation::Validate for $name<$gen> {
            type Input = $input;

            #[allow(unused_variables)]
            fn validate(&$self_, $inp: &Self::Input) -> Result<(), $crate::foundation::Violation> {
                if $rule {
                    Ok(())
                } else {
                    let $einp = $inp;
                    Err($err)
                }
            }
        }

        #[must_use]
        $vis fn $factory<$gen: $first_bound $(+ $rest_bound)*>($($farg: $faty),*) -> $name<$gen> {
            $name::new($($farg),*)
        }
    };
}

// ============================================================================
// COMPOSE MACRO
// ============================================================================

/// AND-chains several checkers; the first failure wins.
///
/// ```rust,ignore
/// let tax_id = compose![exact_length(11), digits(), tax_id_checksum()];
/// ```
#[macro_export]
macro_rules! compose {
    ($first:expr) => {
        $first
    };
    ($first:expr, $($rest:expr),+ $(,)?) => {
        $first$(.and($rest))+
    };
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use crate::foundation::{Validate, ValidateExt, Violation, ViolationKind};

    validator! {
        /// Unit checker used by the tests below.
        TestNotBlank for str;
        rule(input) { !input.trim().is_empty() }
        error(input) { Violation::missing_required() }
        fn test_not_blank();
    }

    validator! {
        #[derive(Copy, PartialEq, Eq)]
        TestPrefix { prefix: char } for str;
        rule(self, input) { input.starts_with(self.prefix) }
        error(self, input) {
            Violation::pattern_mismatch(format!("a value starting with '{}'", self.prefix))
        }
        fn test_prefix(prefix: char);
    }

    validator! {
        TestMaxLen { max: usize } for str;
        rule(self, input) { input.len() <= self.max }
        error(self, input) { Violation::format_length(format!("at most {}", self.max), input.len()) }
        new(max: usize) { Self { max } }
        fn test_max_len(max: usize);
    }

    #[test]
    fn test_unit_validator() {
        assert!(test_not_blank().validate("x").is_ok());
        let err = test_not_blank().validate("   ").unwrap_err();
        assert_eq!(err.kind, ViolationKind::MissingRequired);
    }

    #[test]
    fn test_auto_new_validator() {
        let v = test_prefix('P');
        assert_eq!(v, TestPrefix::new('P'));
        assert!(v.validate("P123").is_ok());
        assert!(v.validate("X123").is_err());
    }

    #[test]
    fn test_custom_new_validator() {
        assert!(test_max_len(3).validate("abc").is_ok());
        let err = test_max_len(3).validate("abcd").unwrap_err();
        assert_eq!(err.param("actual"), Some("4"));
    }

    #[test]
    fn test_compose_short_circuits() {
        let chain = compose![test_not_blank(), test_prefix('P'), test_max_len(4)];
        assert!(chain.validate("P12").is_ok());
        assert_eq!(
            chain.validate("").unwrap_err().kind,
            ViolationKind::MissingRequired
        );
        assert_eq!(
            chain.validate("P12345").unwrap_err().kind,
            ViolationKind::FormatLength
        );
    }
}
