use serde::{Deserialize, Serialize};

// Identifiable defines common traits that can be shared by persistent objects
pub trait Identifiable : Sync + Send {
    fn id(&self) -> String;
    fn version(&self) -> i64;
}


// Configuration abstracts config options for the circulation desk
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub(crate) struct Configuration {
    pub branch_id: String,
}

impl Configuration {
    pub fn new(branch_id: &str) -> Self {
        Configuration {
            branch_id: branch_id.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::core::domain::Configuration;

    #[tokio::test]
    async fn test_should_build_config() {
        let config = Configuration::new("test");
        assert_eq!("test", config.branch_id.as_str());
    }
}
