//! Database schema migrations.
//!
//! One module per migration: the migration name is derived from the file
//! stem, so each migration needs its own file to get a distinct version.

use sea_orm_migration::prelude::*;

mod m20250301_000001_create_users;
mod m20250301_000002_create_posts;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_create_users::Migration),
            Box::new(m20250301_000002_create_posts::Migration),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn migration_versions_are_distinct() {
        let names: Vec<String> = Migrator::migrations()
            .iter()
            .map(|m| m.name().to_owned())
            .collect();

        assert_eq!(names.len(), 2);
        assert!(names.iter().all(|n| n.starts_with("m20250301_")));

        let mut deduped = names.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(deduped.len(), names.len());
    }
}
