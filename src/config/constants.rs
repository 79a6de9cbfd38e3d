pub const CONFIG_DIR_NAME: &str = "digibot";
pub const CONFIG_FILE_NAME: &str = "config.toml";

pub const SUPPORTED_TARGET_LANGUAGES: &[&str] = &["EN", "DE", "FR", "ES", "IT", "NL", "RU", "AR", "TR"];

pub const SPINNER_FRAME_MILLIS: u64 = 150;
