//! The [`FieldName`] identifier-conversion trait.

/// Conversion from a caller-supplied identifier to a canonical field name.
///
/// Physics modules name fields either with plain strings or with their
/// own enumerated tags. Rather than overloading every registry method,
/// the conversion happens once at the API boundary: any argument type
/// implementing `FieldName` is turned into the canonical string key.
///
/// A blanket implementation covers everything string-like. Module-local
/// enums implement the trait directly:
///
/// ```
/// use plasm_core::FieldName;
///
/// enum Charge {
///     Rho,
///     RhoOld,
/// }
///
/// impl FieldName for Charge {
///     fn field_name(&self) -> String {
///         match self {
///             Charge::Rho => "rho".to_string(),
///             Charge::RhoOld => "rho_old".to_string(),
///         }
///     }
/// }
///
/// assert_eq!(Charge::RhoOld.field_name(), "rho_old");
/// assert_eq!("rho".field_name(), "rho");
/// ```
pub trait FieldName {
    /// The canonical string key for this identifier.
    fn field_name(&self) -> String;
}

impl<T: AsRef<str>> FieldName for T {
    fn field_name(&self) -> String {
        self.as_ref().to_string()
    }
}
