use crate::model::{aliases::normalize, constants};
use serde::Deserialize;
use std::collections::HashMap;

/// Maps player names to avatar asset files. A pure lookup: resolution
/// never touches the filesystem, and unmapped names get the default asset.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(from = "HashMap<String, String>")]
pub struct AvatarDirectory {
    files: HashMap<String, String>
}

impl From<HashMap<String, String>> for AvatarDirectory {
    fn from(files: HashMap<String, String>) -> AvatarDirectory {
        let files = files
            .into_iter()
            .map(|(name, file)| (normalize(&name), file))
            .collect();

        AvatarDirectory { files }
    }
}

impl AvatarDirectory {
    pub fn path_for(&self, name: &str) -> String {
        match self.files.get(&normalize(name)) {
            Some(file) => format!("{}/{}", constants::AVATAR_PREFIX, file),
            None => constants::DEFAULT_AVATAR.to_string()
        }
    }
}
