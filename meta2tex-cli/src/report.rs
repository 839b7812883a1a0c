//! JSON summary of a batch run.

use serde::Serialize;

use meta2tex::Conversion;

#[derive(Debug, Serialize)]
pub struct Summary {
    pub converted: usize,
    pub failed: usize,
    pub files: Vec<FileResult>,
}

#[derive(Debug, Serialize)]
pub struct FileResult {
    pub input: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub side: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Summary {
    pub fn from_conversions(conversions: &[Conversion]) -> Self {
        let files: Vec<FileResult> = conversions
            .iter()
            .map(|c| {
                let input = c.input.display().to_string();
                match &c.result {
                    Ok(texture) => FileResult {
                        input,
                        output: Some(texture.path.display().to_string()),
                        side: Some(texture.side),
                        error: None,
                    },
                    Err(err) => FileResult {
                        input,
                        output: None,
                        side: None,
                        error: Some(err.to_string()),
                    },
                }
            })
            .collect();

        let failed = files.iter().filter(|f| f.error.is_some()).count();
        Summary {
            converted: files.len() - failed,
            failed,
            files,
        }
    }
}
