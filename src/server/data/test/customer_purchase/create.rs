use super::*;

/// Tests recording a purchase with nested products, payments and client.
///
/// Verifies that the JSON columns decode back into the same nested values.
///
/// Expected: Ok with nested values preserved
#[tokio::test]
async fn records_purchase_with_nested_values() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (station, employee) = factory::helpers::create_station_with_admin(db).await?;
    let products = vec![ProductSoldDto {
        name: "Premium".to_string(),
        description: "Premium gasoline".to_string(),
        quantity: 40.0,
        price_unit: 21.5,
        price: 860.0,
        measurement_unit: "Litro".to_string(),
        measurement_unit_sat: "LTR".to_string(),
        taxes: vec![TaxDto {
            percentage: 16.0,
            name: "IVA".to_string(),
        }],
    }];
    let payments = vec![PaymentDto {
        quantity: 997.6,
        key: "04".to_string(),
        description: "Tarjeta de credito".to_string(),
    }];

    let repo = CustomerPurchaseRepository::new(db);
    let purchase = repo
        .create(CreateCustomerPurchaseParam {
            folio: "A-100".to_string(),
            iva: 137.6,
            subtotal: 860.0,
            total: 997.6,
            total_letters: "NOVECIENTOS NOVENTA Y SIETE PESOS 60/100 M.N.".to_string(),
            user_id: employee.id.clone(),
            station_id: Some(station.id.clone()),
            products: products.clone(),
            payments: payments.clone(),
            client: Some(ClientDto {
                email: "cliente@example.com".to_string(),
            }),
        })
        .await?;

    let found = repo.find_by_id(&purchase.id).await?.expect("purchase exists");
    assert_eq!(found.products, products);
    assert_eq!(found.payments, payments);
    assert_eq!(
        found.client.map(|c| c.email),
        Some("cliente@example.com".to_string())
    );
    assert_eq!(found.station_id, Some(station.id));

    Ok(())
}

/// Tests that a purchase whose JSON column does not decode is reported as an
/// internal error.
///
/// Expected: Err(AppError::InternalErr)
#[tokio::test]
async fn fails_on_corrupt_products_column() -> Result<(), AppError> {
    use sea_orm::{ActiveModelTrait, ActiveValue, IntoActiveModel};

    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db).build().await?;
    let purchase = factory::customer_purchase::CustomerPurchaseFactory::new(db, &user.id)
        .build()
        .await?;
    let mut active = purchase.clone().into_active_model();
    active.products = ActiveValue::Set(serde_json::json!({"not": "a list"}));
    active.update(db).await?;

    let result = CustomerPurchaseRepository::new(db)
        .find_by_id(&purchase.id)
        .await;

    assert!(matches!(result, Err(AppError::InternalErr(_))));

    Ok(())
}
