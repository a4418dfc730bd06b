#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Construct {
    Pl,
    Pr,
    Se,
    Ct,
    At,
    Abpm,
    Ebpm,
    Tbpm,
    Av,
}

pub const N_CONSTRUCTS: usize = 9;

/// Canonical construct order. Every result and report follows it.
pub const CONSTRUCTS: [Construct; N_CONSTRUCTS] = [
    Construct::Pl,
    Construct::Pr,
    Construct::Se,
    Construct::Ct,
    Construct::At,
    Construct::Abpm,
    Construct::Ebpm,
    Construct::Tbpm,
    Construct::Av,
];

impl Construct {
    pub fn name(self) -> &'static str {
        match self {
            Construct::Pl => "PL",
            Construct::Pr => "PR",
            Construct::Se => "SE",
            Construct::Ct => "CT",
            Construct::At => "AT",
            Construct::Abpm => "ABPM",
            Construct::Ebpm => "EBPM",
            Construct::Tbpm => "TBPM",
            Construct::Av => "AV",
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }

    /// Case-insensitive match, used for column headers.
    pub fn from_header(name: &str) -> Option<Self> {
        let name = name.trim();
        CONSTRUCTS
            .iter()
            .copied()
            .find(|c| c.name().eq_ignore_ascii_case(name))
    }
}

impl std::fmt::Display for Construct {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
