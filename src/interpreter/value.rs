/// Core runtime value representation.
///
/// Declares the `Value` enum covering every kind of value a program can
/// produce, together with type tags, truthiness, and the user-facing
/// `Inspect` rendering.
pub mod core;

/// Hash keys for hash-map values.
///
/// Provides the `HashKey` identity used to key hash maps, combining a type
/// tag with a 64-bit discriminant, and the FNV-1a hash used for strings.
pub mod hash_key;
