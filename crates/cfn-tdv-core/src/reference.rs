//! Facts extracted from a single template.
//!
//! - [`ExportDeclaration`] - a name a template makes available to others
//! - [`ImportReference`] - a use of another template's export, or of an
//!   external parameter store through a dynamic reference
//! - [`DynamicService`] - the stores a dynamic reference can point at

use std::{
    fmt::{self, Display},
    str::FromStr,
};

/// Services recognized inside `{{resolve:SERVICE:PARAMETER}}` expressions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DynamicService {
    /// Plain SSM Parameter Store value (`ssm`)
    Ssm,
    /// SecureString SSM parameter (`ssm-secure`)
    SsmSecure,
    /// Secrets Manager secret (`secretsmanager`)
    SecretsManager,
}

impl FromStr for DynamicService {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ssm" => Ok(Self::Ssm),
            "ssm-secure" => Ok(Self::SsmSecure),
            "secretsmanager" => Ok(Self::SecretsManager),
            _ => Err("Unsupported dynamic reference service"),
        }
    }
}

impl From<DynamicService> for &'static str {
    fn from(val: DynamicService) -> Self {
        match val {
            DynamicService::Ssm => "ssm",
            DynamicService::SsmSecure => "ssm-secure",
            DynamicService::SecretsManager => "secretsmanager",
        }
    }
}

impl Display for DynamicService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s: &'static str = (*self).into();
        write!(f, "{s}")
    }
}

/// An export name declared in the `Outputs` section of a template.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ExportDeclaration {
    file: String,
    name: String,
}

impl ExportDeclaration {
    pub fn new(file: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            name: name.into(),
        }
    }

    /// The display name of the declaring template.
    pub fn file(&self) -> &str {
        &self.file
    }

    /// The export name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// What an [`ImportReference`] points at.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ReferenceKind {
    /// `Fn::ImportValue` / `!ImportValue` of a literal export name.
    Named { export: String },
    /// `{{resolve:SERVICE:PARAMETER}}`, parameter taken verbatim.
    Dynamic {
        service: DynamicService,
        parameter: String,
    },
}

/// A single reference occurrence found in a template.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImportReference {
    file: String,
    kind: ReferenceKind,
}

impl ImportReference {
    /// Create a named import of `export` made by `file`.
    pub fn named(file: impl Into<String>, export: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            kind: ReferenceKind::Named {
                export: export.into(),
            },
        }
    }

    /// Create a dynamic reference made by `file`.
    pub fn dynamic(
        file: impl Into<String>,
        service: DynamicService,
        parameter: impl Into<String>,
    ) -> Self {
        Self {
            file: file.into(),
            kind: ReferenceKind::Dynamic {
                service,
                parameter: parameter.into(),
            },
        }
    }

    /// The display name of the referencing template.
    pub fn file(&self) -> &str {
        &self.file
    }

    pub fn kind(&self) -> &ReferenceKind {
        &self.kind
    }
}
