use thiserror::Error;

pub type Result<T> = std::result::Result<T, TileError>;

#[derive(Debug, Error)]
pub enum TileError {
    #[error("Parsing error: {0}")]
    SerdeParse(#[from] serde_json::error::Error),
    #[error("RON parsing error: {0}")]
    RonParse(#[from] ron::error::SpannedError),
    #[error("RON serialization error: {0}")]
    RonSerialize(#[from] ron::Error),
    #[error("TOML parsing error: {0}")]
    TomlParse(#[from] toml::de::Error),
    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("XDG error: {0}")]
    XdgBaseDirError(#[from] xdg::BaseDirectoriesError),
    #[error("Color `{0}` is not defined in the palette")]
    MissingColor(String),
    #[error("At least one layout must be configured")]
    NoLayouts,
    #[error("Group `{0}` is defined more than once")]
    DuplicateGroup(String),
    #[error("Key binding {0} has no actions")]
    EmptyKeyActions(String),
    #[error("Could not run `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Command is empty")]
    EmptyCommand,
    #[error("The host cannot execute {0}")]
    Unsupported(String),
}
