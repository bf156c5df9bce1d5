use std::str::FromStr;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Environment {
    Sandbox,
    Production,
}

impl FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Environment, String> {
        match s.to_lowercase().as_str() {
            "production" => Ok(Environment::Production),
            "sandbox" => Ok(Environment::Sandbox),
            other => Err(format!(
                "Unknown environment '{}', expected 'sandbox' or 'production'",
                other
            )),
        }
    }
}

/// API credentials for one marketplace integration, supplied at construction
/// and immutable for the life of the client built from them.
#[derive(Clone, Debug)]
pub struct Credentials {
    pub client_id: String,
    pub client_secret: String,
    pub environment: Environment,
    /// Seller account / shop identifier for marketplaces whose user-scoped
    /// endpoints are addressed by shop (for example the Etsy shop id).
    pub account_id: Option<String>,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn environment_parses_case_insensitively() {
        assert_eq!(Environment::Sandbox, "SANDBOX".parse().unwrap());
        assert_eq!(Environment::Production, "production".parse().unwrap());
        assert!("staging".parse::<Environment>().is_err());
    }
}
