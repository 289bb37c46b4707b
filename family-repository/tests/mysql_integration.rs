//! Integration tests for the MySQL family repository.
//!
//! These tests require a real MySQL database and use SQLx test macros
//! to ensure proper test isolation and cleanup. They are ignored by default.
//!
//! Run with: `DATABASE_URL=mysql://... cargo test --test mysql_integration -- --ignored`

use family_repository::{
    MemberRepository, MembershipRepository, MySqlFamilyRepository, RelationshipRepository,
    RepositoryError,
};
use family_shared::types::{Member, MemberId, PlaceholderPattern, RelationshipKind, TeamId};

async fn seed(pool: &sqlx::MySqlPool) {
    sqlx::query("INSERT INTO teams (id, name) VALUES (1, 'U10 Lions'), (2, 'U12 Tigers')")
        .execute(pool)
        .await
        .unwrap();

    sqlx::query(
        "INSERT INTO users (id, email) VALUES
            (1, 'ana@club.example'),
            (2, 'ben@club.example'),
            (3, 'dummy-ana-kid@club.example'),
            (4, 'web-app-42@club.example'),
            (5, 'fan@club.example'),
            (6, NULL)",
    )
    .execute(pool)
    .await
    .unwrap();

    sqlx::query(
        "INSERT INTO team_members (team_id, user_id, role, left_at) VALUES
            (1, 1, 'parent', NULL),
            (1, 2, 'parent', NULL),
            (1, 3, 'player', NULL),
            (1, 5, 'follower', NULL),
            (1, 6, 'coach', '2024-05-01 10:00:00'),
            (2, 4, 'player', NULL)",
    )
    .execute(pool)
    .await
    .unwrap();

    sqlx::query(
        "INSERT INTO user_relationships (user_id, related_user_id, relationship_type) VALUES
            (3, 1, 'parent'),
            (1, 2, 'spouse')",
    )
    .execute(pool)
    .await
    .unwrap();
}

fn repository(pool: sqlx::MySqlPool) -> MySqlFamilyRepository {
    MySqlFamilyRepository::new(pool, PlaceholderPattern::for_domain("club.example"))
}

// ============================================================================
// Membership Tests
// ============================================================================

#[sqlx::test(migrations = "src/mysql/migrations")]
#[ignore = "requires a MySQL database (DATABASE_URL)"]
async fn test_team_memberships_are_active_non_followers(pool: sqlx::MySqlPool) {
    seed(&pool).await;
    let repo = repository(pool);

    let members: Vec<MemberId> = repo
        .team_memberships(TeamId(1))
        .await
        .unwrap()
        .into_iter()
        .map(|m| m.member_id)
        .collect();

    assert_eq!(members, vec![MemberId(1), MemberId(2), MemberId(3)]);
}

#[sqlx::test(migrations = "src/mysql/migrations")]
#[ignore = "requires a MySQL database (DATABASE_URL)"]
async fn test_unknown_team_has_no_memberships(pool: sqlx::MySqlPool) {
    seed(&pool).await;
    let repo = repository(pool);

    assert!(repo.team_memberships(TeamId(404)).await.unwrap().is_empty());
}

// ============================================================================
// Member Tests
// ============================================================================

#[sqlx::test(migrations = "src/mysql/migrations")]
#[ignore = "requires a MySQL database (DATABASE_URL)"]
async fn test_members_are_classified_by_email(pool: sqlx::MySqlPool) {
    seed(&pool).await;
    let repo = repository(pool);

    let mut members = repo
        .members(&[MemberId(1), MemberId(3), MemberId(4), MemberId(6), MemberId(999)])
        .await
        .unwrap();
    members.sort_by_key(|m| m.id);

    assert_eq!(
        members,
        vec![
            Member::real(MemberId(1)),
            Member::placeholder(MemberId(3)),
            Member::placeholder(MemberId(4)),
            Member::real(MemberId(6)),
        ]
    );
}

#[sqlx::test(migrations = "src/mysql/migrations")]
#[ignore = "requires a MySQL database (DATABASE_URL)"]
async fn test_members_with_empty_id_list(pool: sqlx::MySqlPool) {
    let repo = repository(pool);
    assert!(repo.members(&[]).await.unwrap().is_empty());
}

// ============================================================================
// Relationship Tests
// ============================================================================

#[sqlx::test(migrations = "src/mysql/migrations")]
#[ignore = "requires a MySQL database (DATABASE_URL)"]
async fn test_relationships_found_from_either_side(pool: sqlx::MySqlPool) {
    seed(&pool).await;
    let repo = repository(pool);

    // Member 1 is the related side of one row and the subject of another.
    let rows = repo.relationships_for(&[MemberId(1)]).await.unwrap();
    assert_eq!(rows.len(), 2);

    let owner = rows
        .iter()
        .find_map(|r| r.counterpart_of(MemberId(3)))
        .unwrap();
    assert_eq!(owner, (MemberId(1), RelationshipKind::Parent));
}

#[sqlx::test(migrations = "src/mysql/migrations")]
#[ignore = "requires a MySQL database (DATABASE_URL)"]
async fn test_relationships_deduplicated_across_chunks(pool: sqlx::MySqlPool) {
    seed(&pool).await;
    let repo = repository(pool);

    // Both endpoints of the spouse row requested together.
    let rows = repo
        .relationships_for(&[MemberId(1), MemberId(2)])
        .await
        .unwrap();
    assert_eq!(rows.len(), 2);
}

#[sqlx::test(migrations = "src/mysql/migrations")]
#[ignore = "requires a MySQL database (DATABASE_URL)"]
async fn test_null_endpoint_is_malformed(pool: sqlx::MySqlPool) {
    sqlx::query(
        "INSERT INTO user_relationships (user_id, related_user_id, relationship_type) VALUES (7, NULL, 'parent')",
    )
    .execute(&pool)
    .await
    .unwrap();
    let repo = repository(pool);

    let result = repo.relationships_for(&[MemberId(7)]).await;
    assert!(matches!(result, Err(RepositoryError::MalformedRow(_))));
}

// ============================================================================
// Diagnostics Tests
// ============================================================================

#[sqlx::test(migrations = "src/mysql/migrations")]
#[ignore = "requires a MySQL database (DATABASE_URL)"]
async fn test_validate_connection_reports_table_counts(pool: sqlx::MySqlPool) {
    seed(&pool).await;
    let repo = repository(pool);

    let report = repo.validate_connection().await.unwrap();
    assert!(report.all_tables_accessible());

    let users = report.tables.iter().find(|t| t.table == "users").unwrap();
    assert_eq!(users.rows, Some(6));
}
