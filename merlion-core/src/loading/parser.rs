use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::Error;

pub fn deserialize_json_file<T>(path: &Path) -> Result<T, Error>
where
    T: serde::de::DeserializeOwned,
{
    let file = File::open(path).map_err(|e| {
        std::io::Error::new(
            e.kind(),
            format!("Failed to open file '{}': {}", path.display(), e),
        )
    })?;
    serde_json::from_reader(BufReader::new(file))
        .map_err(|e| Error::InvalidData(format!("{}: {}", path.display(), e)))
}
