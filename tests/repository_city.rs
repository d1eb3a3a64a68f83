mod common;

use geo_registry::domain::entities::{NewCity, UpdateCity};
use geo_registry::domain::repositories::CityRepository;
use geo_registry::error::AppError;
use geo_registry::infrastructure::persistence::PgCityRepository;
use sqlx::PgPool;
use std::sync::Arc;

async fn seed_state(pool: &PgPool) -> i64 {
    let country = common::create_test_country(pool, "United States", "USA").await;
    common::create_test_state_row(pool, "New York", "NY", country).await
}

#[sqlx::test]
async fn test_create_city(pool: PgPool) {
    let state = seed_state(&pool).await;
    let repo = PgCityRepository::new(Arc::new(pool));

    let city = repo
        .create(NewCity {
            name: "Buffalo".to_string(),
            state_id: state,
            population: Some(278_000),
        })
        .await
        .unwrap();

    assert!(city.id > 0);
    assert_eq!(city.state_id, state);
    assert_eq!(city.population, Some(278_000));
}

#[sqlx::test]
async fn test_missing_state_is_invalid_reference(pool: PgPool) {
    let repo = PgCityRepository::new(Arc::new(pool));

    let result = repo
        .create(NewCity {
            name: "Atlantis".to_string(),
            state_id: 999_999,
            population: None,
        })
        .await;

    assert!(matches!(result, Err(AppError::InvalidReference { .. })));
}

#[sqlx::test]
async fn test_negative_population_rejected(pool: PgPool) {
    let state = seed_state(&pool).await;
    let repo = PgCityRepository::new(Arc::new(pool));

    let result = repo
        .create(NewCity {
            name: "Negative".to_string(),
            state_id: state,
            population: Some(-5),
        })
        .await;

    assert!(matches!(result, Err(AppError::Validation { .. })));
}

#[sqlx::test]
async fn test_duplicate_city_names_allowed(pool: PgPool) {
    let state = seed_state(&pool).await;
    common::create_test_city(&pool, "Springfield", state, None).await;
    let repo = PgCityRepository::new(Arc::new(pool));

    let second = repo
        .create(NewCity {
            name: "Springfield".to_string(),
            state_id: state,
            population: None,
        })
        .await;

    assert!(second.is_ok());
}

#[sqlx::test]
async fn test_list_by_state_and_country(pool: PgPool) {
    let usa = common::create_test_country(&pool, "United States", "USA").await;
    let can = common::create_test_country(&pool, "Canada", "CAN").await;
    let ny = common::create_test_state_row(&pool, "New York", "NY", usa).await;
    let tx = common::create_test_state_row(&pool, "Texas", "TX", usa).await;
    let on = common::create_test_state_row(&pool, "Ontario", "ON", can).await;
    common::create_test_city(&pool, "Albany", ny, None).await;
    common::create_test_city(&pool, "Austin", tx, None).await;
    common::create_test_city(&pool, "Toronto", on, None).await;
    let repo = PgCityRepository::new(Arc::new(pool));

    assert_eq!(repo.list().await.unwrap().len(), 3);
    assert_eq!(repo.list_by_state(ny).await.unwrap().len(), 1);

    let names: Vec<String> = repo
        .list_by_country(usa)
        .await
        .unwrap()
        .into_iter()
        .map(|c| c.name)
        .collect();
    assert_eq!(names, vec!["Albany", "Austin"]);
}

#[sqlx::test]
async fn test_update_and_delete(pool: PgPool) {
    let state = seed_state(&pool).await;
    let id = common::create_test_city(&pool, "New York", state, None).await;
    let repo = PgCityRepository::new(Arc::new(pool));

    let updated = repo
        .update(
            id,
            UpdateCity {
                name: "New York City".to_string(),
                state_id: state,
                population: Some(8_500_000),
            },
        )
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.name, "New York City");
    assert_eq!(updated.population, Some(8_500_000));

    assert!(repo.delete(id).await.unwrap());
    assert!(repo.find_by_id(id).await.unwrap().is_none());
    assert!(!repo.delete(id).await.unwrap());
    assert_eq!(repo.count().await.unwrap(), 0);
}
