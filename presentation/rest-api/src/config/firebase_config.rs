use anyhow::Context;

/// Firebase project whose ID tokens are accepted.
#[derive(Debug, Clone)]
pub struct FirebaseConfig {
    pub project_id: String,
}

impl FirebaseConfig {
    /// Environment variables:
    /// - FIREBASE_PROJECT_ID: Firebase project id (required)
    pub fn from_env() -> anyhow::Result<Self> {
        let project_id =
            std::env::var("FIREBASE_PROJECT_ID").context("FIREBASE_PROJECT_ID must be set")?;
        Ok(Self { project_id })
    }

    /// Expected `iss` claim of tokens minted for this project.
    pub fn issuer(&self) -> String {
        format!("https://securetoken.google.com/{}", self.project_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_build_issuer_from_project_id() {
        let config = FirebaseConfig {
            project_id: "catalog-prod".to_string(),
        };

        assert_eq!(
            config.issuer(),
            "https://securetoken.google.com/catalog-prod"
        );
    }
}
