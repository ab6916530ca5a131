//! Integration tests for sage-core
//!
//! These tests exercise the full token → load → aggregate → evaluate →
//! format pipeline against a real database.

use chrono::{Duration, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use sage_core::{
    advice::{messages, AdviceEngine},
    auth::AuthKeys,
    db::Database,
    models::{NewDiaryEntry, NewSavingsGoal, SpendingGoalsUpdate},
    Error,
};

fn test_keys() -> AuthKeys {
    AuthKeys::from_secret(b"integration-test-secret-value-ok")
}

/// Create a user with the given goals/income and return (user_id, token)
fn seed_user(db: &Database, keys: &AuthKeys, update: &SpendingGoalsUpdate) -> (i64, String) {
    let user_id = db
        .create_user("Test User", "test@example.com", "not-a-real-hash")
        .expect("Failed to create user");
    if !update.is_empty() {
        db.update_spending_goals(user_id, update)
            .expect("Failed to set goals");
    }
    let token = keys.issue_token(user_id).expect("Failed to issue token");
    (user_id, token)
}

fn spend(db: &Database, user_id: i64, category: &str, amount: Decimal, days_ago: i64) {
    db.insert_entry(&NewDiaryEntry {
        user_id,
        category: category.to_string(),
        amount,
        date: (Utc::now() - Duration::days(days_ago)).date_naive(),
    })
    .expect("Failed to insert entry");
}

// =============================================================================
// End-to-end scenarios
// =============================================================================

#[test]
fn test_scenario_a_single_category_overspend() {
    let db = Database::in_memory().unwrap();
    let keys = test_keys();

    let (user_id, token) = seed_user(
        &db,
        &keys,
        &SpendingGoalsUpdate {
            food_and_drink_goal: Some(dec!(100)),
            disposable_income: Some(dec!(1000)),
            ..Default::default()
        },
    );
    // 130 > 100 * 1.2, but 130 <= 1000 * 0.8
    spend(&db, user_id, "Food and Drink", dec!(130), 5);

    let engine = AdviceEngine::new();
    let advice = engine.generate(&db, &keys, &token).unwrap();

    assert_eq!(advice.len(), 1);
    assert_eq!(
        advice[0],
        "Whoa, big spender! Your food budget is eating your wallet. Maybe cook at home once in a while?"
    );
}

#[test]
fn test_scenario_b_no_data_is_all_clear() {
    let db = Database::in_memory().unwrap();
    let keys = test_keys();
    let (_user_id, token) = seed_user(&db, &keys, &SpendingGoalsUpdate::default());

    let engine = AdviceEngine::new();
    let advice = engine.generate(&db, &keys, &token).unwrap();

    assert_eq!(
        advice,
        vec!["Looking good! Your finances are so on point, even I'm impressed.".to_string()]
    );
}

#[test]
fn test_scenario_c_savings_goal_behind_pace() {
    let db = Database::in_memory().unwrap();
    let keys = test_keys();

    let (user_id, token) = seed_user(
        &db,
        &keys,
        &SpendingGoalsUpdate {
            current_savings: Some(dec!(400)), // 40% of 1000
            ..Default::default()
        },
    );
    db.insert_savings_goal(&NewSavingsGoal {
        user_id,
        title: "Japan Trip".to_string(),
        target: dec!(1000),
        end_date: (Utc::now() + Duration::days(10)).date_naive(),
    })
    .unwrap();

    let engine = AdviceEngine::new();
    let advice = engine.generate(&db, &keys, &token).unwrap();

    assert_eq!(advice.len(), 1);
    assert_eq!(
        advice[0],
        "Your Japan Trip goal is looking slim. Panic mode: activated! 🚨"
    );
}

#[test]
fn test_scenario_d_invalid_token_fails_whole_invocation() {
    let db = Database::in_memory().unwrap();
    let keys = test_keys();
    let engine = AdviceEngine::new();

    let err = engine.generate(&db, &keys, "not-even-a-jwt").unwrap_err();
    assert!(matches!(err, Error::Authentication(_)));

    // A token signed with a different secret is just as dead
    let other = AuthKeys::from_secret(b"some-other-secret-entirely-here!");
    let forged = other.issue_token(1).unwrap();
    assert!(matches!(
        engine.generate(&db, &keys, &forged),
        Err(Error::Authentication(_))
    ));
}

// =============================================================================
// Pipeline behavior
// =============================================================================

#[test]
fn test_findings_keep_rule_family_order() {
    let db = Database::in_memory().unwrap();
    let keys = test_keys();

    // Trip all three rule families at once
    let (user_id, token) = seed_user(
        &db,
        &keys,
        &SpendingGoalsUpdate {
            shopping_goal: Some(dec!(50)),
            current_savings: Some(dec!(0)),
            disposable_income: Some(dec!(100)),
            ..Default::default()
        },
    );
    spend(&db, user_id, "Shopping", dec!(90), 2); // 90 > 60 and 90 > 80
    db.insert_savings_goal(&NewSavingsGoal {
        user_id,
        title: "Rainy Day".to_string(),
        target: dec!(500),
        end_date: (Utc::now() + Duration::days(5)).date_naive(),
    })
    .unwrap();

    let engine = AdviceEngine::new();
    let advice = engine.generate(&db, &keys, &token).unwrap();

    assert_eq!(advice.len(), 3);
    assert_eq!(advice[0], "Your shopping addiction is showing!");
    assert_eq!(
        advice[1],
        "Your Rainy Day goal is looking slim. Panic mode: activated! 🚨"
    );
    assert_eq!(advice[2], messages::BURN_RATE_WARNING);
}

#[test]
fn test_old_entries_fall_outside_window() {
    let db = Database::in_memory().unwrap();
    let keys = test_keys();

    let (user_id, token) = seed_user(
        &db,
        &keys,
        &SpendingGoalsUpdate {
            misc_goal: Some(dec!(10)),
            ..Default::default()
        },
    );
    // Would trip the misc rule, but it happened 45 days ago
    spend(&db, user_id, "Misc", dec!(1000), 45);

    let engine = AdviceEngine::new();
    let advice = engine.generate(&db, &keys, &token).unwrap();
    assert_eq!(advice, vec![messages::ALL_CLEAR.to_string()]);
}

#[test]
fn test_other_users_data_never_leaks_in() {
    let db = Database::in_memory().unwrap();
    let keys = test_keys();

    let (user_id, token) = seed_user(
        &db,
        &keys,
        &SpendingGoalsUpdate {
            shopping_goal: Some(dec!(10)),
            ..Default::default()
        },
    );

    // A second user with heavy spending and a doomed savings goal
    let other = db.create_user("Other", "other@example.com", "h").unwrap();
    spend(&db, other, "Shopping", dec!(9999), 1);
    db.insert_savings_goal(&NewSavingsGoal {
        user_id: other,
        title: "Secret Plan".to_string(),
        target: dec!(100000),
        end_date: (Utc::now() + Duration::days(3)).date_naive(),
    })
    .unwrap();

    let engine = AdviceEngine::new();
    let advice = engine.generate(&db, &keys, &token).unwrap();
    assert_eq!(advice, vec![messages::ALL_CLEAR.to_string()]);

    assert_eq!(user_id, 1); // sanity: two distinct users exist
    assert_eq!(other, 2);
}

#[test]
fn test_malformed_goal_row_skips_only_itself() {
    let db = Database::in_memory().unwrap();
    let keys = test_keys();

    let (user_id, token) = seed_user(
        &db,
        &keys,
        &SpendingGoalsUpdate {
            current_savings: Some(dec!(10)),
            ..Default::default()
        },
    );

    // Bypass insert validation to simulate a corrupt row with target 0
    let near = (Utc::now() + Duration::days(5)).date_naive();
    let conn = db.conn().unwrap();
    conn.execute(
        "INSERT INTO savings_goals (user_id, title, target, end_date) VALUES (?, ?, ?, ?)",
        rusqlite::params![user_id, "Corrupt", "0", near.to_string()],
    )
    .unwrap();
    drop(conn);

    db.insert_savings_goal(&NewSavingsGoal {
        user_id,
        title: "Valid Goal".to_string(),
        target: dec!(1000),
        end_date: near,
    })
    .unwrap();

    let engine = AdviceEngine::new();
    let advice = engine.generate(&db, &keys, &token).unwrap();

    // The corrupt goal is skipped; the valid one still warns
    assert_eq!(advice.len(), 1);
    assert!(advice[0].contains("Valid Goal"));
}

#[test]
fn test_encrypted_database_reopens_with_same_key() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sage.db");
    let path = path.to_str().unwrap();

    {
        let db = Database::new_with_key(path, Some("correct horse battery staple")).unwrap();
        db.create_user("Ada", "ada@example.com", "h").unwrap();
    }

    let db = Database::new_with_key(path, Some("correct horse battery staple")).unwrap();
    assert!(db.get_user_by_email("ada@example.com").unwrap().is_some());
}

#[test]
fn test_tampered_token_is_rejected_end_to_end() {
    let db = Database::in_memory().unwrap();
    let keys = test_keys();
    let (_user_id, token) = seed_user(&db, &keys, &SpendingGoalsUpdate::default());

    let mut tampered = token.clone();
    tampered.push('x');

    let engine = AdviceEngine::new();
    assert!(matches!(
        engine.generate(&db, &keys, &tampered),
        Err(Error::Authentication(_))
    ));
}
