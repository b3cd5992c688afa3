use crate::model::DepKind;

/// Which dependency kinds make up a configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ConfigurationSelection {
    /// What ships: `[dependencies]`.
    #[default]
    Normal,
    Build,
    Dev,
    All,
}

impl ConfigurationSelection {
    pub fn parse(v: &str) -> Option<Self> {
        match v {
            "normal" | "runtime" => Some(Self::Normal),
            "build" => Some(Self::Build),
            "dev" => Some(Self::Dev),
            "all" => Some(Self::All),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Build => "build",
            Self::Dev => "dev",
            Self::All => "all",
        }
    }

    pub fn includes(self, kind: DepKind) -> bool {
        match self {
            Self::Normal => kind == DepKind::Normal,
            Self::Build => kind == DepKind::Build,
            Self::Dev => kind == DepKind::Dev,
            Self::All => true,
        }
    }

    /// Edge filter below the first hop. Whatever a selected dependency needs to build comes
    /// along; dev-dependencies of dependencies never do.
    pub fn includes_transitive(self, kind: DepKind) -> bool {
        match self {
            Self::Normal => kind == DepKind::Normal,
            Self::Build | Self::Dev | Self::All => kind != DepKind::Dev,
        }
    }
}
