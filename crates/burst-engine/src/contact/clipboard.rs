/// Why a clipboard write failed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClipboardError {
    #[error("clipboard is not available")]
    Unavailable,
    #[error("clipboard write rejected: {0}")]
    Rejected(String),
}

/// A way of putting text on the system clipboard.
pub trait Clipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// Which path ended up writing the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyPath {
    Primary,
    Fallback,
}

/// Settle a copy whose primary write already finished with `primary`,
/// retrying with `fallback` if it failed.
///
/// The primary outcome is passed in settled so asynchronous clipboards
/// (a promise that rejects later) can be awaited by the caller first.
/// Errors only when both paths fail; the fallback's error is returned.
pub fn copy_with_fallback<F>(
    text: &str,
    primary: Result<(), ClipboardError>,
    fallback: &mut F,
) -> Result<CopyPath, ClipboardError>
where
    F: Clipboard + ?Sized,
{
    match primary {
        Ok(()) => Ok(CopyPath::Primary),
        Err(err) => {
            log::warn!("clipboard: primary write failed ({}), using fallback", err);
            fallback.write_text(text).map(|()| CopyPath::Fallback)
        }
    }
}
