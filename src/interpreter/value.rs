/// Runtime value representation.
///
/// Defines the `Value` enum stored in environments and the `Closure` type
/// produced by `fn` statements. Numbers are plain IEEE doubles; closures pair
/// a function's parameters and body with the scope it was defined in.
pub mod core;
