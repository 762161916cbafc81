use super::Config;

impl Config {
    pub fn apply_env_overrides(&mut self) {
        if let Ok(key) =
            std::env::var("SCENE_MACHINE_API_KEY").or_else(|_| std::env::var("ANTHROPIC_API_KEY"))
            && !key.trim().is_empty()
        {
            self.api_key = Some(key);
        }

        if let Ok(model) = std::env::var("SCENE_MACHINE_MODEL")
            && !model.is_empty()
        {
            self.model = model;
        }

        if let Ok(endpoint) = std::env::var("SCENE_MACHINE_ENDPOINT")
            && !endpoint.is_empty()
        {
            self.gateway.endpoint = endpoint;
        }
    }
}
