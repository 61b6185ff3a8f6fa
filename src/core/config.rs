use crate::config::Config;
use crate::errors::{AppError, AppResult};
use std::process::Command;

pub struct ConfigLogic;

impl ConfigLogic {
    fn default_editor() -> String {
        std::env::var("EDITOR")
            .or_else(|_| std::env::var("VISUAL"))
            .unwrap_or_else(|_| {
                if cfg!(target_os = "windows") {
                    "notepad".to_string()
                } else {
                    "nano".to_string()
                }
            })
    }

    /// Open the config file in `editor`, falling back to $EDITOR/$VISUAL/nano.
    /// Returns the editor that succeeded.
    pub fn edit(editor: Option<&str>) -> AppResult<String> {
        let path = Config::config_file();
        let fallback = Self::default_editor();
        let requested = editor.map(str::to_string).unwrap_or_else(|| fallback.clone());

        for ed in [requested, fallback] {
            if let Ok(status) = Command::new(&ed).arg(&path).status()
                && status.success()
            {
                return Ok(ed);
            }
        }

        Err(AppError::Config(format!(
            "no editor could open {}",
            path.display()
        )))
    }
}
