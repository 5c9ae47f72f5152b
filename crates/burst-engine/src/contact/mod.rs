//! The post-activation contact action: copy a fixed string, confirm with a toast.

mod clipboard;
mod toast;

pub use clipboard::{copy_with_fallback, Clipboard, ClipboardError, CopyPath};
pub use toast::Toast;

#[cfg(test)]
pub(crate) use clipboard::tests::MemoryClipboard;
