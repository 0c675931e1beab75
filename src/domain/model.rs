/// How to proceed when the target directory already has contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverwriteDecision {
    /// Remove existing files and continue.
    Clear,
    /// Abort the whole run with no side effects.
    Cancel,
    /// Leave existing files in place and let the fetch write over them.
    Ignore,
}

impl std::fmt::Display for OverwriteDecision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OverwriteDecision::Clear => write!(f, "yes"),
            OverwriteDecision::Cancel => write!(f, "no"),
            OverwriteDecision::Ignore => write!(f, "ignore"),
        }
    }
}

impl std::str::FromStr for OverwriteDecision {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "yes" => Ok(OverwriteDecision::Clear),
            "no" => Ok(OverwriteDecision::Cancel),
            "ignore" => Ok(OverwriteDecision::Ignore),
            _ => Err(format!("Unknown overwrite choice: {s}")),
        }
    }
}
