//! Constants shared across the crate

/// Config file looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "autostacker.toml";

/// Maximum number of `file://` inclusions per interpolated string
pub const DEFAULT_INCLUDE_LIMIT: usize = 64;

/// Keys the preprocessor rewrites
pub mod keys {
    /// Object of tag name to value, rewritten to a `Key`/`Value` list
    pub const TAGS: &str = "Tags";

    /// Script text, wrapped in `Fn::Base64`
    pub const USER_DATA: &str = "UserData";
}
