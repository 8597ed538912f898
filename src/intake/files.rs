use crate::intake::types::Notice;
use crate::models::SelectedFile;
use thiserror::Error;
use tracing::warn;

/// Largest accepted file, in bytes (1MB)
pub const MAX_FILE_SIZE: u64 = 1024 * 1024;

/// Most product images one listing can carry
pub const MAX_PRODUCT_IMAGES: usize = 3;

/// The form's file inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileSlot {
    Logo,
    ProductImages,
    Receipt,
}

impl FileSlot {
    fn noun(&self) -> &'static str {
        match self {
            FileSlot::Logo => "Logo",
            FileSlot::ProductImages => "Product image",
            FileSlot::Receipt => "Receipt",
        }
    }
}

/// Why a file selection was discarded
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("{} file must be smaller than 1MB. Please choose a smaller file.", .slot.noun())]
    TooLarge { slot: FileSlot, size: u64 },

    #[error("You can only select up to {max} images.")]
    TooMany { selected: usize, max: usize },

    #[error("Each product image must be smaller than 1MB. {count} file(s) exceed this limit.")]
    SomeTooLarge { count: usize },
}

impl SelectionError {
    pub fn title(&self) -> &'static str {
        match self {
            SelectionError::TooLarge { .. } => "File Too Large",
            SelectionError::TooMany { .. } => "Too Many Files",
            SelectionError::SomeTooLarge { .. } => "Files Too Large",
        }
    }

    pub fn notice(&self) -> Notice {
        Notice::error(self.title(), self.to_string())
    }
}

/// Validate a single-file input (logo or receipt).
///
/// Only the first file of the selection counts. An empty selection yields
/// `Ok(None)` and leaves the current choice alone.
pub fn validate_single(
    slot: FileSlot,
    files: Vec<SelectedFile>,
) -> Result<Option<SelectedFile>, SelectionError> {
    let Some(file) = files.into_iter().next() else {
        return Ok(None);
    };

    if file.size() > MAX_FILE_SIZE {
        warn!(
            "Rejected {:?} {}: {} bytes exceeds {}",
            slot,
            file.name,
            file.size(),
            MAX_FILE_SIZE
        );
        return Err(SelectionError::TooLarge {
            slot,
            size: file.size(),
        });
    }

    Ok(Some(file))
}

/// Validate a product image selection. The whole selection is accepted in
/// order or rejected; it is never truncated.
pub fn validate_product_images(
    files: Vec<SelectedFile>,
) -> Result<Vec<SelectedFile>, SelectionError> {
    if files.len() > MAX_PRODUCT_IMAGES {
        warn!("Rejected {} product images, max is {}", files.len(), MAX_PRODUCT_IMAGES);
        return Err(SelectionError::TooMany {
            selected: files.len(),
            max: MAX_PRODUCT_IMAGES,
        });
    }

    let oversized = files.iter().filter(|f| f.size() > MAX_FILE_SIZE).count();
    if oversized > 0 {
        warn!("Rejected product images: {} over the size limit", oversized);
        return Err(SelectionError::SomeTooLarge { count: oversized });
    }

    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(name: &str, size: usize) -> SelectedFile {
        SelectedFile::new(name, "image/png", vec![0u8; size])
    }

    #[test]
    fn single_accepts_exact_limit() {
        let picked = validate_single(FileSlot::Logo, vec![file("logo.png", 1_048_576)]).unwrap();
        assert_eq!(picked.map(|f| f.name), Some("logo.png".to_string()));
    }

    #[test]
    fn single_rejects_one_byte_over() {
        let err = validate_single(FileSlot::Receipt, vec![file("r.pdf", 1_048_577)]).unwrap_err();
        assert_eq!(
            err,
            SelectionError::TooLarge {
                slot: FileSlot::Receipt,
                size: 1_048_577
            }
        );
        let notice = err.notice();
        assert_eq!(notice.title, "File Too Large");
        assert_eq!(
            notice.description,
            "Receipt file must be smaller than 1MB. Please choose a smaller file."
        );
        assert!(notice.is_error());
    }

    #[test]
    fn single_uses_first_file_and_ignores_empty() {
        assert_eq!(validate_single(FileSlot::Logo, vec![]).unwrap(), None);
        let picked = validate_single(FileSlot::Logo, vec![file("a.png", 1), file("b.png", 1)])
            .unwrap()
            .unwrap();
        assert_eq!(picked.name, "a.png");
    }

    #[test]
    fn too_many_images_rejected_whole() {
        let files = (0..4).map(|i| file(&format!("{i}.png"), 10)).collect();
        let err = validate_product_images(files).unwrap_err();
        assert_eq!(err, SelectionError::TooMany { selected: 4, max: 3 });
        assert_eq!(err.to_string(), "You can only select up to 3 images.");
    }

    #[test]
    fn oversized_images_are_counted() {
        let files = vec![
            file("ok.png", 10),
            file("big.png", 2_000_000),
            file("huge.png", 1_048_577),
        ];
        let err = validate_product_images(files).unwrap_err();
        assert_eq!(err, SelectionError::SomeTooLarge { count: 2 });
        assert_eq!(err.title(), "Files Too Large");
        assert!(err.to_string().contains("2 file(s) exceed"));
    }

    #[test]
    fn valid_images_kept_in_order() {
        let files = vec![file("c.png", 3), file("a.png", 1), file("b.png", 2)];
        let accepted = validate_product_images(files.clone()).unwrap();
        assert_eq!(accepted, files);
    }
}
