use domain::{DomainError, ErrorKind, ProductDto, ProductRepository, ProductStore};
use sqlx::PgPool;

#[sqlx::test(migrations = "../../migrations")]
async fn test_create_product(pool: PgPool) -> Result<(), DomainError> {
    let repo = ProductRepository::new(pool);

    let id = repo.create("laptop").await?;

    assert!(!id.is_empty());
    assert_eq!(
        repo.list().await?,
        vec![ProductDto {
            id,
            name: "laptop".to_string(),
        }]
    );
    Ok(())
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_create_duplicate_name_already_exists(pool: PgPool) -> Result<(), DomainError> {
    let repo = ProductRepository::new(pool);
    repo.create("phone").await?;

    let err = repo.create("phone").await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::AlreadyExists);
    Ok(())
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_list_returns_every_row(pool: PgPool) -> Result<(), DomainError> {
    let repo = ProductRepository::new(pool);
    let ids = [
        repo.create("a").await?,
        repo.create("b").await?,
        repo.create("c").await?,
    ];

    let products = repo.list().await?;

    assert_eq!(products.len(), 3);
    for (product, id) in products.iter().zip(ids.iter()) {
        assert_eq!(&product.id, id);
    }
    Ok(())
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_update_product(pool: PgPool) -> Result<(), DomainError> {
    let repo = ProductRepository::new(pool);
    let id = repo.create("tablet").await?;

    repo.update(&id, "tablet pro").await?;

    assert_eq!(repo.list().await?[0].name, "tablet pro");
    Ok(())
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_update_missing_is_not_found(pool: PgPool) -> Result<(), DomainError> {
    let repo = ProductRepository::new(pool);

    let err = repo.update("missing", "x").await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::NotFound);
    Ok(())
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_delete_missing_is_not_found(pool: PgPool) -> Result<(), DomainError> {
    let repo = ProductRepository::new(pool);
    let id = repo.create("watch").await?;
    repo.delete(&id).await?;

    let err = repo.delete(&id).await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert!(repo.list().await?.is_empty());
    Ok(())
}
