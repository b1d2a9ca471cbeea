/// Errors from the decode entry points.
///
/// Deliberately thin: the decoder's propagation policy is that no
/// *payload* problem escapes as an error. Misaligned records, unknown
/// magics, failed inflation — all of those degrade to an unclassified
/// [`vacmap_types::MapModel`] carrying whatever partial metadata was
/// recoverable, because the format is undocumented and possibly
/// firmware-dependent. The only fallible step is transport-level:
/// the input text not being base64 at all.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// The input string was not valid standard-alphabet base64.
    #[error("payload is not valid base64: {0}")]
    Base64(#[from] base64::DecodeError),
}
