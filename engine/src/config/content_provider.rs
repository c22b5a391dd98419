use std::io::ErrorKind;

pub trait ConfigContentProvider {
    fn get_config_content(&self) -> Result<Option<String>, String>;
    fn set_config_content(&self, content: &str) -> Result<(), String>;
}

/// Reads and writes the config from a file path; a missing file is not an
/// error, it means defaults apply.
pub struct FileContentConfigProvider {
    file_path: String,
}

impl FileContentConfigProvider {
    pub fn new(file_path: String) -> Self {
        Self { file_path }
    }
}

impl ConfigContentProvider for FileContentConfigProvider {
    fn get_config_content(&self) -> Result<Option<String>, String> {
        match std::fs::read_to_string(self.file_path.as_str()) {
            Ok(content) => Ok(Some(content)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(format!("Failed to read config file: {}", err)),
        }
    }

    fn set_config_content(&self, content: &str) -> Result<(), String> {
        std::fs::write(self.file_path.as_str(), content)
            .map_err(|e| format!("Failed to write config file: {}", e))
    }
}
