use serde_json::json;

/// Builder for in-memory server entity models.
pub struct ServerEntityBuilder {
    model: entity::server::Model,
}

impl ServerEntityBuilder {
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.model.id = id.into();
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.model.name = name.into();
        self
    }

    pub fn invite_code(mut self, invite_code: impl Into<String>) -> Self {
        self.model.invite_code = invite_code.into();
        self
    }

    pub fn build(self) -> entity::server::Model {
        self.model
    }
}

/// Creates a server entity builder populated with default values.
pub fn entity_builder() -> ServerEntityBuilder {
    ServerEntityBuilder {
        model: entity::server::Model {
            id: "400000000000000001".to_string(),
            name: "Test Server".to_string(),
            short_desc: "A server used in tests".to_string(),
            long_desc: "A longer description of the test server".to_string(),
            tags: json!(["Community"]),
            preview_channel: String::new(),
            owner_id: "200000000000000001".to_string(),
            icon: json!({ "hash": "", "url": "" }),
            links: json!({ "invite": "https://discord.gg/test", "website": "", "donation": "" }),
            invite_code: "test".to_string(),
            review_required: false,
        },
    }
}

/// Creates a server entity with default values.
pub fn entity() -> entity::server::Model {
    entity_builder().build()
}
