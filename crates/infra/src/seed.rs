//! Startup seeding of synthetic employee records.
//!
//! Runs once, before the listener binds: if the store is empty it is
//! populated with plausible random records, otherwise nothing happens. A
//! seeding utility, not business logic: the generated values only need to
//! exercise the catalog and the expected field ranges.

use chrono::{Days, Utc};
use rand::Rng;

use staffboard_core::{catalog, Employee, EmployeeId};

use crate::employee_store::{EmployeeStore, StoreError};

/// How many records a cold start seeds.
pub const SEED_TARGET: usize = 100;

const FIRST_NAMES: [&str; 16] = [
    "Ava", "Ben", "Carla", "Dev", "Elena", "Felix", "Grace", "Hassan", "Iris", "Jonas", "Kira",
    "Liam", "Mona", "Noah", "Priya", "Tomas",
];

const LAST_NAMES: [&str; 16] = [
    "Adler", "Brooks", "Chen", "Diaz", "Eriksen", "Fischer", "Gupta", "Hayes", "Ivanov", "Jensen",
    "Khan", "Lindgren", "Moreau", "Novak", "Okafor", "Petrov",
];

fn synthetic_employee(rng: &mut impl Rng) -> Employee {
    let department = catalog::DEPARTMENTS[rng.gen_range(0..catalog::DEPARTMENTS.len())];
    let roles = catalog::roles_for(department);
    let role = roles[rng.gen_range(0..roles.len())];

    let name = format!(
        "{} {}",
        FIRST_NAMES[rng.gen_range(0..FIRST_NAMES.len())],
        LAST_NAMES[rng.gen_range(0..LAST_NAMES.len())]
    );

    // Salary in cents, age and joining date inside the expected ranges.
    let salary = (rng.gen_range(30_000.0..200_000.0f64) * 100.0).round() / 100.0;
    let age = rng.gen_range(22..=60);
    let joining_date = Utc::now().date_naive() - Days::new(rng.gen_range(0..=3650));

    Employee::new(
        EmployeeId::new(),
        name,
        department,
        role,
        salary,
        age,
        joining_date,
        Utc::now(),
    )
}

/// Populate an empty store with `target` synthetic records.
///
/// Returns how many records were inserted: `target` on a cold start, 0 when
/// the store already holds data. Awaited to completion during startup, so
/// seeding happens at most once per process; a simultaneous cold start of a
/// second process can still double-seed (accepted for the single-process
/// deployment this serves).
pub async fn ensure_seeded<S>(store: &S, target: usize) -> Result<usize, StoreError>
where
    S: EmployeeStore + ?Sized,
{
    if store.count().await? > 0 {
        tracing::debug!("store already populated; skipping seed");
        return Ok(0);
    }

    let mut rng = rand::thread_rng();
    for _ in 0..target {
        store.insert(synthetic_employee(&mut rng)).await?;
    }

    tracing::info!(records = target, "seeded empty store");
    Ok(target)
}
