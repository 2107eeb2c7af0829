use thiserror::Error;

#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("error while reading controllers file")]
    Io(#[from] std::io::Error),
    #[error("error while parsing yaml")]
    Yaml(#[from] serde_yaml::Error),
    #[error("error while parsing json")]
    Json(#[from] serde_json::Error),
    #[error("controllers document is not a mapping")]
    NotAMapping,
    #[error("controllers document has a non-string key")]
    NonStringKey,
    #[error("controller name {0:?} already present after prefixing")]
    PrefixCollision(String),
}
