//! Cross-crate collaborator traits.

/// The minimal view of an inversion problem needed by consumers that
/// only care about its parameterization, not its targets or engine.
///
/// Synthetic tests use this to capture a problem's parameter layout
/// without taking a reference to the problem itself.
pub trait Parameterized {
    /// Ordered names of the model parameters.
    fn parameter_names(&self) -> Vec<String>;

    /// Parameter vector of the reference (base) model, in
    /// [`parameter_names`](Self::parameter_names) order.
    fn base_x(&self) -> Vec<f64>;
}
