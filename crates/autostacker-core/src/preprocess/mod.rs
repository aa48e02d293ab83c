//! Preprocess module - interpolate every string of a JSON template
//!
//! Walks a template document and replaces each string value with its
//! interpolation, encoded through [`crate::cfn`]. Two keys get extra
//! treatment:
//!
//! - `"Tags": {"Name": "x"}` becomes `[{"Key": "Name", "Value": "x"}]`
//! - `"UserData": "script"` becomes `{"Fn::Base64": <interpolated script>}`
//!
//! Object keys are never interpolated. Templates whose first line is a `//`
//! comment have their comments stripped before parsing.

mod comments;

pub use comments::{has_leading_comment, strip_comments};

use std::borrow::Cow;
use std::path::Path;

use log::debug;
use serde_json::{json, Map, Value};

use crate::cfn;
use crate::config::consts::keys;
use crate::error::Result;
use crate::interpolation::{InterpolationOptions, Interpolator};

/// Options for the preprocessor
#[derive(Debug, Clone)]
pub struct PreprocessOptions {
    pub interpolation: InterpolationOptions,
    /// Rewrite `Tags` objects into `Key`/`Value` lists
    pub tags_as_list: bool,
    /// Wrap `UserData` strings in `Fn::Base64`
    pub user_data_base64: bool,
}

impl Default for PreprocessOptions {
    fn default() -> Self {
        Self {
            interpolation: InterpolationOptions::default(),
            tags_as_list: true,
            user_data_base64: true,
        }
    }
}

/// Template document preprocessor
#[derive(Debug, Clone, Default)]
pub struct Preprocessor {
    options: PreprocessOptions,
    interpolator: Interpolator,
}

impl Preprocessor {
    pub fn new(options: PreprocessOptions) -> Self {
        let interpolator = Interpolator::new(options.interpolation.clone());
        Self {
            options,
            interpolator,
        }
    }

    /// Parse and preprocess a JSON template
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid JSON (after comment removal)
    /// or if interpolating any string fails.
    pub fn process_str(&self, src: &str) -> Result<Value> {
        let src = if has_leading_comment(src) {
            debug!("stripping // comments");
            Cow::Owned(strip_comments(src))
        } else {
            Cow::Borrowed(src)
        };
        let document: Value = serde_json::from_str(&src)?;
        self.process_value(document)
    }

    /// Preprocess an already parsed document
    pub fn process_value(&self, value: Value) -> Result<Value> {
        match value {
            Value::String(text) => self.interpolate(&text),
            Value::Array(items) => items
                .into_iter()
                .map(|item| self.process_value(item))
                .collect::<Result<Vec<_>>>()
                .map(Value::Array),
            Value::Object(entries) => {
                let mut out = Map::with_capacity(entries.len());
                for (key, value) in entries {
                    let value = self.process_entry(&key, value)?;
                    out.insert(key, value);
                }
                Ok(Value::Object(out))
            }
            other => Ok(other),
        }
    }

    fn process_entry(&self, key: &str, value: Value) -> Result<Value> {
        match (key, value) {
            (keys::TAGS, Value::Object(tags)) if self.options.tags_as_list => {
                debug!("rewriting {} tags into a Key/Value list", tags.len());
                tags.into_iter()
                    .map(|(name, value)| -> Result<Value> {
                        Ok(json!({ "Key": name, "Value": self.process_value(value)? }))
                    })
                    .collect::<Result<Vec<_>>>()
                    .map(Value::Array)
            }
            (keys::USER_DATA, Value::String(script)) if self.options.user_data_base64 => {
                Ok(json!({ "Fn::Base64": self.interpolate(&script)? }))
            }
            (_, value) => self.process_value(value),
        }
    }

    fn interpolate(&self, text: &str) -> Result<Value> {
        Ok(cfn::to_value(&self.interpolator.interpolate(text)?))
    }
}

/// Read and preprocess a template file
///
/// Relative inclusions resolve against the template's directory unless
/// `options` already names a base directory.
pub fn preprocess_file(path: impl AsRef<Path>, mut options: PreprocessOptions) -> Result<Value> {
    let path = path.as_ref();
    let src = std::fs::read_to_string(path)?;

    if options.interpolation.base_dir.is_none() {
        options.interpolation.base_dir = path.parent().map(Path::to_path_buf);
    }
    debug!(
        "preprocessing {} (include base {:?})",
        path.display(),
        options.interpolation.base_dir
    );
    Preprocessor::new(options).process_str(&src)
}
