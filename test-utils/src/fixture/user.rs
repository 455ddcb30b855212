use serde_json::json;

/// Builder for in-memory user entity models.
pub struct UserEntityBuilder {
    model: entity::user::Model,
}

impl UserEntityBuilder {
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.model.id = id.into();
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.model.name = name.into();
        self
    }

    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.model.token = Some(token.into());
        self
    }

    pub fn verified(mut self, verified: bool) -> Self {
        self.model.rank_verified = verified;
        self
    }

    pub fn tester(mut self, tester: bool) -> Self {
        self.model.rank_tester = tester;
        self
    }

    pub fn translator(mut self, translator: bool) -> Self {
        self.model.rank_translator = translator;
        self
    }

    /// Marks the user as a moderator.
    pub fn moderator(mut self) -> Self {
        self.model.rank_mod = true;
        self
    }

    /// Marks the user as an assistant, which also makes them a moderator.
    pub fn assistant(mut self) -> Self {
        self.model.rank_mod = true;
        self.model.rank_assistant = true;
        self
    }

    /// Marks the user as an admin, which also makes them an assistant and moderator.
    pub fn admin(mut self) -> Self {
        self.model.rank_mod = true;
        self.model.rank_assistant = true;
        self.model.rank_admin = true;
        self
    }

    /// Sets the staff rank flags exactly as given, without implying lower ranks.
    pub fn staff_flags(mut self, admin: bool, assistant: bool, moderator: bool) -> Self {
        self.model.rank_admin = admin;
        self.model.rank_assistant = assistant;
        self.model.rank_mod = moderator;
        self
    }

    pub fn build(self) -> entity::user::Model {
        self.model
    }
}

/// Creates a user entity builder populated with default values.
///
/// The default user holds no rank and carries a locale, preferences, a status
/// document and staff tracking data so redaction tests have something to strip.
pub fn entity_builder() -> UserEntityBuilder {
    UserEntityBuilder {
        model: entity::user::Model {
            id: "200000000000000001".to_string(),
            token: None,
            name: "Tester".to_string(),
            discrim: "0001".to_string(),
            full_username: "Tester#0001".to_string(),
            locale: "en-GB".to_string(),
            flags: 0,
            avatar: json!({ "hash": "", "url": "" }),
            preferences: json!({ "customGlobalCss": "", "enableGames": true }),
            profile: json!({ "bio": "Hello", "css": "", "links": {} }),
            game: json!({ "snakes": { "maxScore": 0 } }),
            rank_admin: false,
            rank_assistant: false,
            rank_mod: false,
            rank_premium: false,
            rank_tester: false,
            rank_translator: false,
            rank_verified: false,
            status: json!({ "banned": false }),
            staff_tracking: json!({ "details": { "managementNotes": "" } }),
        },
    }
}

/// Creates a user entity with default values.
pub fn entity() -> entity::user::Model {
    entity_builder().build()
}
