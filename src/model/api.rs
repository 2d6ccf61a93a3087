use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize)]
pub struct ErrorDto {
    pub error: String,
}

#[derive(Serialize, Deserialize)]
pub struct PanelErrorsDto {
    pub errors: Vec<PanelErrorDto>,
}

#[derive(Serialize, Deserialize)]
pub struct PanelErrorDto {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub detail: String,
}

/// A nested fractal object, as found under `relationships`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct FractalItem<T> {
    pub object: String,
    pub attributes: T,
}

/// A nested fractal list, as found under `relationships`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct FractalList<T> {
    pub object: String,
    #[serde(default = "Vec::new")]
    pub data: Vec<FractalItem<T>>,
}

impl<T> FractalList<T> {
    pub fn into_items(self) -> Vec<T> {
        self.data.into_iter().map(|item| item.attributes).collect()
    }

    pub fn items(&self) -> impl Iterator<Item = &T> {
        self.data.iter().map(|item| &item.attributes)
    }
}

/// `{"object": "signed_url", "attributes": {"url": ...}}`
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SignedUrlDto {
    pub url: String,
}
