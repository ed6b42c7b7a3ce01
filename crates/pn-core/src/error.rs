use thiserror::Error;

pub type PnResult<T> = Result<T, PnError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PnError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: String },

    #[error("Invariant violated: {what}")]
    Invariant { what: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_carries_context() {
        let err = PnError::Invariant {
            what: "two sources".into(),
        };
        assert_eq!(err.to_string(), "Invariant violated: two sources");
    }
}
