use crate::formatter::options::FormatterOverrides;
use crate::generator::options::GeneratorOverrides;
use serde::{Deserialize, Serialize};
use serde_with::serde_as;
use serde_with::DefaultOnNull;

/// Default options of the utilities of one document type.
#[serde_as]
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct DocumentConfig {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub formatter: FormatterOverrides,

    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub generator: GeneratorOverrides,
}

#[serde_as]
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct BrUtilsConfig {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub cpf: DocumentConfig,

    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub cnpj: DocumentConfig,
}
