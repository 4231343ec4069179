//! User generation, server and client variants.

use fake::{
    Fake,
    faker::internet::en::{Password, SafeEmail, Username},
    faker::name::en::{FirstName, LastName, Name},
};
use rand::Rng;
use serde::Serialize;

use crate::generators::tribe::Tribe;
use crate::id::ObjectId;
use crate::merge::{Overlay, overwrite};
use crate::sampling::select_random;

/// A user as the server persists it. Identity is assigned by the database,
/// not here.
#[derive(Debug, Clone, Serialize)]
pub struct ServerUser {
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub languages: Vec<String>,
    pub locale: String,
    pub public: bool,
    pub roles: Vec<String>,
    pub password: String,
}

/// A user as the client renders it, keyed by a generated id.
#[derive(Debug, Clone, Serialize)]
pub struct ClientUser {
    pub id: ObjectId,
    pub display_name: String,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub languages: Vec<String>,
    /// Ids of the tribes this user belongs to.
    pub member_ids: Vec<ObjectId>,
}

/// Overrides for server user generation. `None` keeps the generated default.
#[derive(Debug, Clone, Default)]
pub struct ServerUserOverrides {
    pub locale: Option<String>,
    pub public: Option<bool>,
    pub roles: Option<Vec<String>>,
    pub password: Option<String>,
}

impl Overlay for ServerUserOverrides {
    type Target = ServerUser;

    fn overlay(self, target: &mut ServerUser) {
        overwrite(&mut target.locale, self.locale);
        overwrite(&mut target.public, self.public);
        overwrite(&mut target.roles, self.roles);
        overwrite(&mut target.password, self.password);
    }
}

/// Overrides for client user generation. `None` keeps the generated default.
#[derive(Debug, Clone, Default)]
pub struct ClientUserOverrides {
    pub display_name: Option<String>,
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub member_ids: Option<Vec<ObjectId>>,
}

impl Overlay for ClientUserOverrides {
    type Target = ClientUser;

    fn overlay(self, target: &mut ClientUser) {
        overwrite(&mut target.display_name, self.display_name);
        overwrite(&mut target.username, self.username);
        overwrite(&mut target.first_name, self.first_name);
        overwrite(&mut target.last_name, self.last_name);
        overwrite(&mut target.email, self.email);
        overwrite(&mut target.member_ids, self.member_ids);
    }
}

/// A generated user of either variant.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum GeneratedUser {
    Server(ServerUser),
    Client(ClientUser),
}

impl GeneratedUser {
    /// Returns the user's id. Server users have none until persisted.
    pub fn id(&self) -> Option<&ObjectId> {
        match self {
            GeneratedUser::Server(_) => None,
            GeneratedUser::Client(user) => Some(&user.id),
        }
    }

    pub fn username(&self) -> &str {
        match self {
            GeneratedUser::Server(user) => &user.username,
            GeneratedUser::Client(user) => &user.username,
        }
    }
}

/// Which variant a batch should produce.
#[derive(Debug, Clone)]
pub enum UserVariant {
    /// Server records, with the same override bag applied to every user.
    Server(ServerUserOverrides),
    /// Client records, with tribe memberships sampled per user.
    Client,
}

/// Configuration for user generation.
#[derive(Debug, Clone)]
pub struct UserGenConfig {
    /// Fraction of the supplied tribes each client user joins.
    pub membership_fraction: f64,
    /// Roles granted to every server user.
    pub default_roles: Vec<String>,
    /// Password length range for server users.
    pub password_length: std::ops::Range<usize>,
}

impl Default for UserGenConfig {
    fn default() -> Self {
        Self {
            membership_fraction: 0.4,
            default_roles: vec!["user".to_string()],
            password_length: 10..20,
        }
    }
}

/// Generates users for test fixtures.
pub struct UserGenerator {
    config: UserGenConfig,
}

struct BaseFields {
    username: String,
    first_name: String,
    last_name: String,
    email: String,
}

impl UserGenerator {
    /// Creates a new user generator with default configuration.
    pub fn new() -> Self {
        Self {
            config: UserGenConfig::default(),
        }
    }

    /// Creates a generator with custom configuration.
    pub fn with_config(config: UserGenConfig) -> Self {
        Self { config }
    }

    /// Generates a single server user.
    pub fn generate_server(
        &self,
        overrides: ServerUserOverrides,
        rng: &mut impl Rng,
    ) -> ServerUser {
        let base = self.generate_base(rng);
        let mut user = ServerUser {
            username: base.username,
            first_name: base.first_name,
            last_name: base.last_name,
            email: base.email,
            languages: Vec::new(),
            locale: String::new(),
            public: rng.r#gen(),
            roles: self.config.default_roles.clone(),
            password: Password(self.config.password_length.clone()).fake_with_rng(rng),
        };
        overrides.overlay(&mut user);
        user
    }

    /// Generates a single client user.
    pub fn generate_client(
        &self,
        overrides: ClientUserOverrides,
        rng: &mut impl Rng,
    ) -> ClientUser {
        let base = self.generate_base(rng);
        let mut user = ClientUser {
            id: ObjectId::generate(rng),
            display_name: Name().fake_with_rng(rng),
            username: base.username,
            first_name: base.first_name,
            last_name: base.last_name,
            email: base.email,
            languages: Vec::new(),
            member_ids: Vec::new(),
        };
        overrides.overlay(&mut user);
        user
    }

    /// Generates a batch of users.
    ///
    /// Client users each join a fresh random subset of `tribes` (see
    /// [`UserGenConfig::membership_fraction`]); server users ignore `tribes`.
    pub fn generate_batch(
        &self,
        count: usize,
        variant: &UserVariant,
        tribes: &[Tribe],
        rng: &mut impl Rng,
    ) -> Vec<GeneratedUser> {
        (0..count)
            .map(|_| match variant {
                UserVariant::Server(overrides) => {
                    GeneratedUser::Server(self.generate_server(overrides.clone(), rng))
                }
                UserVariant::Client => {
                    let member_ids = select_random(tribes, self.config.membership_fraction, rng)
                        .into_iter()
                        .map(|tribe| tribe.id)
                        .collect();
                    GeneratedUser::Client(self.generate_client(
                        ClientUserOverrides {
                            member_ids: Some(member_ids),
                            ..Default::default()
                        },
                        rng,
                    ))
                }
            })
            .collect()
    }

    fn generate_base(&self, rng: &mut impl Rng) -> BaseFields {
        BaseFields {
            username: Username().fake_with_rng(rng),
            first_name: FirstName().fake_with_rng(rng),
            last_name: LastName().fake_with_rng(rng),
            email: SafeEmail().fake_with_rng(rng),
        }
    }
}

impl Default for UserGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::tribe::TribeGenerator;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_server_user_defaults() {
        let user_gen = UserGenerator::new();
        let mut rng = rand::thread_rng();
        let user = user_gen.generate_server(ServerUserOverrides::default(), &mut rng);

        assert!(!user.username.is_empty());
        assert!(!user.first_name.is_empty());
        assert!(!user.last_name.is_empty());
        assert!(user.email.contains('@'));
        assert!(user.languages.is_empty());
        assert!(user.locale.is_empty());
        assert_eq!(user.roles, vec!["user"]);
        assert!(!user.password.is_empty());
    }

    #[test]
    fn test_client_user_defaults() {
        let user_gen = UserGenerator::new();
        let mut rng = rand::thread_rng();
        let user = user_gen.generate_client(ClientUserOverrides::default(), &mut rng);

        assert_eq!(user.id.as_str().len(), 24);
        assert!(!user.display_name.is_empty());
        assert!(!user.username.is_empty());
        assert!(user.email.contains('@'));
        assert!(user.languages.is_empty());
        assert!(user.member_ids.is_empty());
    }

    #[test]
    fn test_server_overrides_win() {
        let user_gen = UserGenerator::new();
        let mut rng = rand::thread_rng();

        let user = user_gen.generate_server(
            ServerUserOverrides {
                locale: Some("fi".to_string()),
                public: Some(false),
                roles: Some(vec!["admin".to_string()]),
                password: None,
            },
            &mut rng,
        );

        assert_eq!(user.locale, "fi");
        assert!(!user.public);
        assert_eq!(user.roles, vec!["admin"]);
        // Unset override keeps the generated default
        assert!(!user.password.is_empty());
    }

    #[test]
    fn test_client_overrides_win() {
        let user_gen = UserGenerator::new();
        let mut rng = rand::thread_rng();

        let user = user_gen.generate_client(
            ClientUserOverrides {
                display_name: Some("Jane Doe".to_string()),
                ..Default::default()
            },
            &mut rng,
        );

        assert_eq!(user.display_name, "Jane Doe");
    }

    #[test]
    fn test_batch_count() {
        let user_gen = UserGenerator::new();
        let mut rng = rand::thread_rng();
        let variant = UserVariant::Server(ServerUserOverrides::default());

        assert_eq!(user_gen.generate_batch(7, &variant, &[], &mut rng).len(), 7);
        assert!(user_gen.generate_batch(0, &variant, &[], &mut rng).is_empty());
    }

    #[test]
    fn test_client_batch_memberships() {
        let user_gen = UserGenerator::new();
        let mut rng = rand::thread_rng();

        let tribes = TribeGenerator::new().generate_batch(10, &mut rng);
        let tribe_ids: Vec<_> = tribes.iter().map(|t| t.id.clone()).collect();
        let users = user_gen.generate_batch(5, &UserVariant::Client, &tribes, &mut rng);

        for user in &users {
            let GeneratedUser::Client(user) = user else {
                panic!("expected client users");
            };

            // floor(10 * 0.4) = 4 distinct tribes each
            assert_eq!(user.member_ids.len(), 4);
            let unique: std::collections::HashSet<_> = user.member_ids.iter().collect();
            assert_eq!(unique.len(), 4);
            for id in &user.member_ids {
                assert!(tribe_ids.contains(id));
            }
        }
    }

    #[test]
    fn test_seeded_generation_is_deterministic() {
        let user_gen = UserGenerator::new();
        let mut rng_a = StdRng::seed_from_u64(7);
        let mut rng_b = StdRng::seed_from_u64(7);

        let a = user_gen.generate_client(ClientUserOverrides::default(), &mut rng_a);
        let b = user_gen.generate_client(ClientUserOverrides::default(), &mut rng_b);

        assert_eq!(a.username, b.username);
        assert_eq!(a.first_name, b.first_name);
        assert_eq!(a.last_name, b.last_name);
        assert_eq!(a.email, b.email);
        assert_eq!(a.display_name, b.display_name);
    }
}
