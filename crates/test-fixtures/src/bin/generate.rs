//! Fixture dump binary - generates a fixture set and prints it as JSON
//!
//! Run with:
//! ```
//! FIXTURE_SEED=42 FIXTURE_USERS=10 FIXTURE_TRIBES=5 \
//!     cargo run -p test-fixtures --bin generate > fixtures.json
//! ```

use anyhow::Context;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing_subscriber::EnvFilter;

use test_fixtures::prelude::*;

fn env_or<T: std::str::FromStr>(name: &str, default: T) -> anyhow::Result<T>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(name) {
        Ok(value) => value
            .parse()
            .with_context(|| format!("invalid {name}: {value}")),
        Err(_) => Ok(default),
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let seed: u64 = env_or("FIXTURE_SEED", 42)?;
    let user_count: usize = env_or("FIXTURE_USERS", 10)?;
    let tribe_count: usize = env_or("FIXTURE_TRIBES", 5)?;

    let mut rng = StdRng::seed_from_u64(seed);

    let tribes = TribeGenerator::new().generate_batch(tribe_count, &mut rng);
    let users =
        UserGenerator::new().generate_batch(user_count, &UserVariant::Client, &tribes, &mut rng);

    // A reference from each user to the next, wrapping around
    let specs: Vec<ReferenceSpec> = if user_count >= 2 {
        (0..user_count)
            .map(|i| ReferenceSpec::between(i, (i + 1) % user_count))
            .collect()
    } else {
        Vec::new()
    };
    let references = ReferenceGenerator::new().generate(&users, &specs, &mut rng)?;

    tracing::info!("Generated fixture set (seed {seed})");
    tracing::info!("  Tribes: {}", tribes.len());
    tracing::info!("  Users: {}", users.len());
    tracing::info!("  References: {}", references.len());

    let fixture_set = serde_json::json!({
        "tribes": tribes,
        "users": users,
        "references": references,
    });
    println!("{}", serde_json::to_string_pretty(&fixture_set)?);

    Ok(())
}
