/// Error splitting a raw schedule line into its label and operation stream.
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The `-` separator between the schedule label and its operations is
    /// absent. Fatal for that schedule only; unrecognised operation tokens
    /// inside a labelled schedule are skipped, not rejected.
    MalformedScheduleLine,
}
