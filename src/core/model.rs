use crate::error::{DemucsError, DemucsResult};
use std::fmt;
use std::str::FromStr;

/// Pretrained Demucs model selectable on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Model {
    /// Hybrid Transformer Demucs
    Htdemucs,
    /// Fine-tuned Hybrid Transformer Demucs
    #[default]
    HtdemucsFt,
    /// MDX challenge model
    MdxExtra,
    /// Quantized MDX challenge model
    MdxExtraQ,
}

impl Model {
    /// Every supported model, in listing order
    pub const ALL: [Model; 4] = [
        Model::Htdemucs,
        Model::HtdemucsFt,
        Model::MdxExtra,
        Model::MdxExtraQ,
    ];

    /// Identifier understood by demucs (`-n`) and used as its output subdirectory
    pub fn as_str(&self) -> &'static str {
        match self {
            Model::Htdemucs => "htdemucs",
            Model::HtdemucsFt => "htdemucs_ft",
            Model::MdxExtra => "mdx_extra",
            Model::MdxExtraQ => "mdx_extra_q",
        }
    }

    /// Short human readable description
    pub fn description(&self) -> &'static str {
        match self {
            Model::Htdemucs => "Hybrid Transformer Demucs",
            Model::HtdemucsFt => "Fine-tuned Hybrid Transformer Demucs (recommended)",
            Model::MdxExtra => "MDX model",
            Model::MdxExtraQ => "Quantized MDX model",
        }
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Model {
    type Err = DemucsError;

    fn from_str(s: &str) -> DemucsResult<Self> {
        Model::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| {
                let available: Vec<&str> = Model::ALL.iter().map(Model::as_str).collect();
                DemucsError::Configuration(format!(
                    "Model {} not supported. Available: {}",
                    s,
                    available.join(", ")
                ))
            })
    }
}
