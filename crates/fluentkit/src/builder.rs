/// A mutable holder of exactly one value with fluent, validated operations.
///
/// The held value is called the *default value*. It is set at construction
/// and every mutation validates its argument before touching it.
pub trait Builder {
    /// The semantic type of the held value.
    type Value: ?Sized;

    /// The value currently held.
    fn default_value(&self) -> &Self::Value;

    /// The name of the held value's type, e.g. `"string"`.
    fn type_of(&self) -> &'static str;
}
