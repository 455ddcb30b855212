use serde_json::json;

/// Builder for in-memory bot entity models.
pub struct BotEntityBuilder {
    model: entity::bot::Model,
}

impl BotEntityBuilder {
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.model.id = id.into();
        self
    }

    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.model.token = token.into();
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.model.name = name.into();
        self
    }

    pub fn server_count(mut self, server_count: i64) -> Self {
        self.model.server_count = server_count;
        self
    }

    pub fn mod_notes(mut self, mod_notes: impl Into<String>) -> Self {
        self.model.mod_notes = mod_notes.into();
        self
    }

    pub fn approved(mut self, approved: bool) -> Self {
        self.model.approved = approved;
        self
    }

    pub fn verified(mut self, verified: bool) -> Self {
        self.model.verified = verified;
        self
    }

    pub fn pending_verification(mut self, pending_verification: bool) -> Self {
        self.model.pending_verification = pending_verification;
        self
    }

    pub fn build(self) -> entity::bot::Model {
        self.model
    }
}

/// Creates a bot entity builder populated with default values.
///
/// Defaults: id `"100000000000000001"`, token `"DELAPI_test-100000000000000001"`,
/// unapproved and unverified, with a small vote ledger and moderator notes so
/// redaction tests have something to strip.
pub fn entity_builder() -> BotEntityBuilder {
    BotEntityBuilder {
        model: entity::bot::Model {
            id: "100000000000000001".to_string(),
            token: "DELAPI_test-100000000000000001".to_string(),
            name: "Test Bot".to_string(),
            prefix: "!".to_string(),
            library: "serenity".to_string(),
            tags: json!(["Utility"]),
            vanity_url: String::new(),
            server_count: 0,
            shard_count: 0,
            flags: 0,
            short_desc: "A bot used in tests".to_string(),
            long_desc: "A longer description of the test bot".to_string(),
            mod_notes: "internal moderation note".to_string(),
            editors: json!([]),
            owner_id: "200000000000000001".to_string(),
            avatar: json!({ "hash": "", "url": "" }),
            votes: json!({ "positive": ["300000000000000001"], "negative": [] }),
            links: json!({
                "invite": "",
                "support": "",
                "website": "",
                "donation": "",
                "repo": "",
                "privacyPolicy": ""
            }),
            social: json!({ "twitter": "" }),
            theme: json!({ "useCustomColour": false, "colour": "", "banner": "" }),
            widgetbot: json!({ "channel": "", "options": "", "server": "" }),
            approved: false,
            premium: false,
            site_bot: false,
            archived: false,
            verified: false,
            pending_verification: false,
        },
    }
}

/// Creates a bot entity with default values.
pub fn entity() -> entity::bot::Model {
    entity_builder().build()
}
