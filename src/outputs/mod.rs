//! Output files written by a monitoring run.
//!
//! # Submodules
//!
//! - [`titles`]: writes the extracted news titles to `<keyword>.txt`
//! - [`image`]: downloads the chosen image to `image_<keyword>.<ext>`
//!
//! # Output Structure
//!
//! ```text
//! output_dir/
//! ├── <keyword>.txt          # one title per line
//! └── image_<keyword>.png    # or .jpg / .JPG, case taken from the link
//! ```
//!
//! Both files are overwritten unconditionally on every run.

pub mod image;
pub mod titles;
